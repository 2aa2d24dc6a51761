//! The plugin driver: registration and dispatch.

use std::io::{Read, Write};

use indexmap::IndexMap;
use prost::Message as _;
use prost_types::compiler::{
    CodeGeneratorRequest, CodeGeneratorResponse, code_generator_response::Feature,
};
use protoweave_schema::File;

use crate::{
    Context, Error, GeneratedFile, Options, Parameters, Result, matches_pattern, parse_parameters,
};

/// A generator callback, invoked once per matching file.
pub type GeneratorFn = Box<dyn Fn(&mut Context<'_>, &File<'_>) -> eyre::Result<()>>;

/// Hook that sees the raw parameters and may adjust the effective options.
pub type ParameterHandler = Box<dyn Fn(&Parameters, &mut Options)>;

/// A `protoc` plugin made of pattern-matched generators.
///
/// # Example
///
/// ```no_run
/// use protoweave_core::OutputSink;
/// use protoweave_plugin::Plugin;
///
/// fn main() -> protoweave_plugin::Result<()> {
///     Plugin::new()
///         .generate_for("*.proto", |ctx, file| {
///             let mut code = ctx.code();
///             code.package(&file.package())
///                 .blank()
///                 .comment(&format!("{} messages", file.messages().len()));
///             code.flush(ctx);
///             Ok(())
///         })
///         .run()
/// }
/// ```
pub struct Plugin {
    options: Options,
    generators: IndexMap<String, GeneratorFn>,
    parameter_handler: Option<ParameterHandler>,
}

impl Plugin {
    pub fn new() -> Self {
        Self {
            options: Options::default(),
            generators: IndexMap::new(),
            parameter_handler: None,
        }
    }

    /// Replace the base options. Parameters passed by `protoc` are applied
    /// on top of them for each run.
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Register `generator` for files matching `pattern`.
    ///
    /// Generators run in registration order. Registering a pattern again
    /// replaces its generator and keeps its position.
    pub fn generate_for<F>(mut self, pattern: impl Into<String>, generator: F) -> Self
    where
        F: Fn(&mut Context<'_>, &File<'_>) -> eyre::Result<()> + 'static,
    {
        self.generators.insert(pattern.into(), Box::new(generator));
        self
    }

    /// Set the hook that interprets custom parameters.
    pub fn with_parameter_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Parameters, &mut Options) + 'static,
    {
        self.parameter_handler = Some(Box::new(handler));
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Registered patterns in evaluation order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.generators.keys().map(String::as_str)
    }

    /// Run every matching generator over the files `protoc` asked for.
    ///
    /// Each file gets one [`Context`] shared by its generators, and its
    /// outputs are added to the response in creation order. The first
    /// generator error aborts the run.
    pub fn generate(&self, request: &CodeGeneratorRequest) -> Result<CodeGeneratorResponse> {
        let raw = request.parameter();
        let parameters = parse_parameters(raw);
        let mut options = self.options.clone();
        options.apply_parameters(raw);
        if let Some(handler) = &self.parameter_handler {
            handler(&parameters, &mut options);
        }

        let mut response = CodeGeneratorResponse {
            supported_features: Some(Feature::Proto3Optional as u64),
            ..Default::default()
        };

        for path in &request.file_to_generate {
            let Some(proto) = request.proto_file.iter().find(|f| f.name() == path) else {
                tracing::warn!(file = %path, "file to generate is missing from the request");
                continue;
            };

            let file = File::new(proto);
            let mut ctx = Context::new(proto, request, &options, &parameters);
            for (pattern, generator) in &self.generators {
                if !matches_pattern(path, pattern) {
                    continue;
                }
                if options.debug {
                    tracing::debug!("Generating for {path} with pattern {pattern}");
                }
                generator(&mut ctx, &file).map_err(|err| Error::generator(path.as_str(), err))?;
            }

            response.file.extend(
                ctx.into_outputs()
                    .into_iter()
                    .map(GeneratedFile::into_response_file),
            );
        }

        Ok(response)
    }

    /// Speak the plugin protocol over stdin and stdout.
    pub fn run(&self) -> Result<()> {
        self.run_with(std::io::stdin().lock(), std::io::stdout().lock())
    }

    /// Read a request from `reader`, generate, and write the response to
    /// `writer`.
    ///
    /// Generator failures are reported to `protoc` through the response's
    /// `error` field. Only protocol and I/O failures are returned.
    pub fn run_with<R: Read, W: Write>(&self, mut reader: R, mut writer: W) -> Result<()> {
        let mut input = Vec::new();
        reader.read_to_end(&mut input)?;
        let request = CodeGeneratorRequest::decode(input.as_slice())?;

        let response = self.generate(&request).unwrap_or_else(|err| {
            tracing::error!(error = %err, "generation failed");
            CodeGeneratorResponse {
                error: Some(err.to_string()),
                supported_features: Some(Feature::Proto3Optional as u64),
                ..Default::default()
            }
        });

        let mut output = Vec::with_capacity(response.encoded_len());
        response.encode(&mut output)?;
        writer.write_all(&output)?;
        writer.flush()?;
        Ok(())
    }
}

impl Default for Plugin {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Plugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Plugin")
            .field("options", &self.options)
            .field("patterns", &self.generators.keys().collect::<Vec<_>>())
            .field("parameter_handler", &self.parameter_handler.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use eyre::eyre;
    use prost::Message;
    use protoweave_core::OutputSink;
    use protoweave_schema::testing;

    use super::*;

    fn request(parameter: &str) -> CodeGeneratorRequest {
        CodeGeneratorRequest {
            file_to_generate: vec!["shop/order.proto".to_string(), "user.proto".to_string()],
            parameter: (!parameter.is_empty()).then(|| parameter.to_string()),
            proto_file: vec![testing::order_file(), testing::file("user.proto", "user")],
            ..Default::default()
        }
    }

    #[test]
    fn test_generators_run_in_registration_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let (a, b, c) = (calls.clone(), calls.clone(), calls.clone());

        let plugin = Plugin::new()
            .generate_for("*", move |_, file| {
                a.borrow_mut().push(format!("all:{}", file.path()));
                Ok(())
            })
            .generate_for("shop/*.proto", move |_, file| {
                b.borrow_mut().push(format!("shop:{}", file.path()));
                Ok(())
            })
            .generate_for("user.proto", move |_, file| {
                c.borrow_mut().push(format!("user:{}", file.path()));
                Ok(())
            });

        plugin.generate(&request("")).expect("generate");
        assert_eq!(
            *calls.borrow(),
            [
                "all:shop/order.proto",
                "shop:shop/order.proto",
                "all:user.proto",
                "user:user.proto",
            ]
        );
    }

    #[test]
    fn test_reregistering_replaces_in_place() {
        let plugin = Plugin::new()
            .generate_for("a", |_, _| Ok(()))
            .generate_for("b", |_, _| Ok(()))
            .generate_for("a", |_, _| Err(eyre!("replaced")));

        let patterns: Vec<_> = plugin.patterns().collect();
        assert_eq!(patterns, ["a", "b"]);
    }

    #[test]
    fn test_generators_share_one_output_per_file() {
        let plugin = Plugin::new()
            .generate_for("*.proto", |ctx, file| {
                ctx.write(&["package", file.package().as_str()]);
                Ok(())
            })
            .generate_for("*", |ctx, file| {
                ctx.write(&["//", file.path()]);
                Ok(())
            });

        let response = plugin.generate(&request("")).expect("generate");
        let files: Vec<_> = response
            .file
            .iter()
            .map(|f| (f.name(), f.content()))
            .collect();
        assert_eq!(
            files,
            [
                ("order.pb.go", "package shop\n// shop/order.proto\n"),
                ("user.pb.go", "package user\n// user.proto\n"),
            ]
        );
        assert_eq!(
            response.supported_features,
            Some(Feature::Proto3Optional as u64)
        );
    }

    #[test]
    fn test_generator_error_carries_path() {
        let plugin = Plugin::new()
            .generate_for("*", |_, _| Ok(()))
            .generate_for("user.proto", |_, _| Err(eyre!("unsupported option")));

        let err = plugin.generate(&request("")).expect_err("should fail");
        assert_eq!(err.path(), Some("user.proto"));
        assert_eq!(
            err.to_string(),
            "generator failed for user.proto: unsupported option"
        );
    }

    #[test]
    fn test_parameters_reach_options_and_handler() {
        let seen = Rc::new(RefCell::new(None));
        let seen_in_handler = seen.clone();

        let plugin = Plugin::new()
            .with_parameter_handler(|params, options| {
                if params.get("ext").map(String::as_str) == Some("ts") {
                    options.file_extension = ".ts".to_string();
                }
            })
            .generate_for("shop/*", move |ctx, _| {
                *seen_in_handler.borrow_mut() = Some((
                    ctx.options().debug,
                    ctx.options().package_mapping.get("foo.bar").cloned(),
                    ctx.parameter("ext").map(str::to_string),
                ));
                ctx.write(&["x"]);
                Ok(())
            });

        let response = plugin
            .generate(&request("debug=true,package_mapping=foo.bar:mypkg,ext=ts"))
            .expect("generate");

        assert_eq!(
            *seen.borrow(),
            Some((true, Some("mypkg".to_string()), Some("ts".to_string())))
        );
        assert_eq!(response.file[0].name(), "order.pb.ts");
        assert!(!plugin.options().debug);
    }

    #[test]
    fn test_no_matching_generator_produces_no_files() {
        let plugin = Plugin::new().generate_for("billing/*.proto", |ctx, _| {
            ctx.write(&["never"]);
            Ok(())
        });
        let response = plugin.generate(&request("")).expect("generate");
        assert!(response.file.is_empty());
        assert!(response.error.is_none());
    }

    #[test]
    fn test_run_with_round_trip() {
        let plugin = Plugin::new().generate_for("*", |ctx, file| {
            ctx.write(&["package", file.package().as_str()]);
            Ok(())
        });

        let input = request("").encode_to_vec();
        let mut output = Vec::new();
        plugin
            .run_with(input.as_slice(), &mut output)
            .expect("run");

        let response = CodeGeneratorResponse::decode(output.as_slice()).expect("decode");
        assert!(response.error.is_none());
        assert_eq!(response.file.len(), 2);
        assert_eq!(response.file[1].content(), "package user\n");
    }

    #[test]
    fn test_run_with_reports_generator_failure_in_response() {
        let plugin = Plugin::new().generate_for("*", |_, _| Err(eyre!("boom")));

        let input = request("").encode_to_vec();
        let mut output = Vec::new();
        plugin
            .run_with(input.as_slice(), &mut output)
            .expect("protocol errors only");

        let response = CodeGeneratorResponse::decode(output.as_slice()).expect("decode");
        assert_eq!(
            response.error.as_deref(),
            Some("generator failed for shop/order.proto: boom")
        );
        assert!(response.file.is_empty());
    }

    #[test]
    fn test_run_with_rejects_garbage() {
        let plugin = Plugin::new();
        let mut output = Vec::new();
        let err = plugin
            .run_with(&[0xff_u8, 0xff, 0xff][..], &mut output)
            .expect_err("decode should fail");
        assert!(matches!(*err, Error::Decode { .. }));
        assert!(output.is_empty());
    }
}
