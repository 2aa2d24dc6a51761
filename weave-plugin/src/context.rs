//! Per-file generation context.

use std::fmt::Display;

use prost_types::{FileDescriptorProto, compiler::CodeGeneratorRequest};
use protoweave_codegen::CodeBuilder;
use protoweave_core::{ImportIdent, OutputSink};
use protoweave_schema::File;

use crate::{GeneratedFile, Options, Parameters};

/// Everything a generator can reach while generating one file.
///
/// A context is created per file marked for generation and shared by every
/// generator whose pattern matches that file. Lines written to the context
/// go to its current output file, which is created on first use as
/// `<name>.pb<ext>` unless [`new_output_file`](Self::new_output_file) chose
/// one.
///
/// # Example
///
/// ```
/// use prost_types::{FileDescriptorProto, compiler::CodeGeneratorRequest};
/// use protoweave_plugin::{Context, Options, Parameters};
///
/// let request = CodeGeneratorRequest {
///     file_to_generate: vec!["shop/order.proto".into()],
///     proto_file: vec![FileDescriptorProto {
///         name: Some("shop/order.proto".into()),
///         package: Some("shop".into()),
///         ..Default::default()
///     }],
///     ..Default::default()
/// };
/// let options = Options::default();
/// let parameters = Parameters::new();
///
/// let mut ctx = Context::new(&request.proto_file[0], &request, &options, &parameters);
/// let mut code = ctx.code();
/// code.package(&ctx.file().package());
/// code.flush(&mut ctx);
///
/// let outputs = ctx.into_outputs();
/// assert_eq!(outputs[0].name(), "order.pb.go");
/// assert_eq!(outputs[0].render(), "package shop\n");
/// ```
#[derive(Debug)]
pub struct Context<'a> {
    file: &'a FileDescriptorProto,
    request: &'a CodeGeneratorRequest,
    options: &'a Options,
    parameters: &'a Parameters,
    outputs: Vec<GeneratedFile>,
    current: Option<usize>,
}

impl<'a> Context<'a> {
    /// Bind a context to `file`, one of the request's files.
    pub fn new(
        file: &'a FileDescriptorProto,
        request: &'a CodeGeneratorRequest,
        options: &'a Options,
        parameters: &'a Parameters,
    ) -> Self {
        Self {
            file,
            request,
            options,
            parameters,
            outputs: Vec::new(),
            current: None,
        }
    }

    /// The file being generated.
    pub fn file(&self) -> File<'a> {
        File::new(self.file)
    }

    /// Every file marked for generation, in request order.
    pub fn files(&self) -> Vec<File<'a>> {
        let request = self.request;
        request
            .file_to_generate
            .iter()
            .filter_map(|name| request.proto_file.iter().find(|f| f.name() == name))
            .map(File::new)
            .collect()
    }

    /// A fresh builder with tab indentation.
    pub fn code(&self) -> CodeBuilder {
        CodeBuilder::go()
    }

    pub fn options(&self) -> &'a Options {
        self.options
    }

    /// Start a new output file and make it current. The configured file
    /// extension is appended unless `name` already ends with it.
    pub fn new_output_file(&mut self, name: &str) -> &mut GeneratedFile {
        let extension = &self.options.file_extension;
        let name = if name.ends_with(extension.as_str()) {
            name.to_string()
        } else {
            format!("{name}{extension}")
        };
        let import_path = self.file().import_path().to_string();
        self.push_output(GeneratedFile::new(name, import_path))
    }

    /// The current output file, created with the default name if needed.
    pub fn output(&mut self) -> &mut GeneratedFile {
        match self.current {
            Some(index) => &mut self.outputs[index],
            None => {
                let file = self.file();
                let name = format!("{}.pb{}", file.base_name(), self.options.file_extension);
                let import_path = file.import_path().to_string();
                self.push_output(GeneratedFile::new(name, import_path))
            }
        }
    }

    /// Register an import in the current output and return its qualifier,
    /// e.g. `fmt.`.
    pub fn import(&mut self, import_path: &str) -> String {
        self.output()
            .qualified_name(&ImportIdent::package(import_path))
    }

    /// All raw parameters passed by `protoc`.
    pub fn parameters(&self) -> &'a Parameters {
        self.parameters
    }

    pub fn parameter(&self, key: &str) -> Option<&'a str> {
        self.parameters.get(key).map(String::as_str)
    }

    pub fn parameter_or(&self, key: &str, default: &'a str) -> &'a str {
        self.parameter(key).unwrap_or(default)
    }

    /// Target package for `file`, honoring `package_mapping`.
    pub fn package_for(&self, file: &File<'_>) -> String {
        self.options
            .package_mapping
            .get(file.proto_package())
            .cloned()
            .unwrap_or_else(|| file.package())
    }

    /// Emit a debug event when debug output is enabled.
    pub fn debug(&self, message: impl Display) {
        if self.options.debug {
            tracing::debug!(file = self.file.name(), "{message}");
        }
    }

    /// Output files produced so far, in creation order.
    pub fn outputs(&self) -> &[GeneratedFile] {
        &self.outputs
    }

    pub fn into_outputs(self) -> Vec<GeneratedFile> {
        self.outputs
    }

    fn push_output(&mut self, output: GeneratedFile) -> &mut GeneratedFile {
        self.outputs.push(output);
        let index = self.outputs.len() - 1;
        self.current = Some(index);
        &mut self.outputs[index]
    }
}

impl OutputSink for Context<'_> {
    fn write(&mut self, values: &[&str]) {
        self.output().write(values);
    }

    fn qualified_name(&mut self, ident: &ImportIdent) -> String {
        self.output().qualified_name(ident)
    }
}
