//! Test utilities for generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use prost_types::{FileDescriptorProto, compiler::CodeGeneratorRequest};
pub use protoweave_schema::testing::*;
use protoweave_schema::File;

use crate::{Context, Options, Parameters};

/// A request that asks for every file in `files`, in order.
pub fn request_for(files: Vec<FileDescriptorProto>, parameter: &str) -> CodeGeneratorRequest {
    CodeGeneratorRequest {
        file_to_generate: files.iter().map(|f| f.name().to_string()).collect(),
        parameter: (!parameter.is_empty()).then(|| parameter.to_string()),
        proto_file: files,
        ..Default::default()
    }
}

/// Run `generator` over a single file with default options and return what
/// it wrote. Contents of several output files are concatenated in creation
/// order.
pub fn generate_single<F>(file: FileDescriptorProto, generator: F) -> eyre::Result<String>
where
    F: FnOnce(&mut Context<'_>, &File<'_>) -> eyre::Result<()>,
{
    let request = request_for(vec![file], "");
    let options = Options::default();
    let parameters = Parameters::new();
    let proto = &request.proto_file[0];

    let mut ctx = Context::new(proto, &request, &options, &parameters);
    generator(&mut ctx, &File::new(proto))?;

    Ok(ctx
        .into_outputs()
        .iter()
        .map(|output| output.render())
        .collect())
}

/// Assert that two strings are equal, with a nice diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {:?}\n", exp));
                diff.push_str(&format!("  actual:   {:?}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

#[cfg(test)]
mod tests {
    use protoweave_core::OutputSink;

    use super::*;

    #[test]
    fn test_generate_single_renders_outputs() {
        let content = generate_single(order_file(), |ctx, file| {
            let mut code = ctx.code();
            code.package(&file.package()).blank();
            let fmt = ctx.import("fmt");
            code.function("init()", |b| {
                b.line(format!("{fmt}Println(\"{}\")", file.path()));
            });
            code.flush(ctx);
            Ok(())
        })
        .expect("generate");

        assert_content_eq(
            "package shop\n\nimport (\n\t\"fmt\"\n)\n\nfunc init() {\n\tfmt.Println(\"shop/order.proto\")\n}\n",
            &content,
        );
    }

    #[test]
    fn test_generate_single_propagates_errors() {
        let err = generate_single(order_file(), |_, _| Err(eyre::eyre!("nope")))
            .expect_err("should fail");
        assert_eq!(err.to_string(), "nope");
    }

    #[test]
    fn test_generate_single_concatenates_outputs() {
        let content = generate_single(order_file(), |ctx, _| {
            ctx.new_output_file("a").write(&["// a"]);
            ctx.new_output_file("b").write(&["// b"]);
            Ok(())
        })
        .expect("generate");
        assert_eq!(content, "// a\n// b\n");
    }

    #[test]
    #[should_panic(expected = "Content mismatch")]
    fn test_assert_content_eq_reports_mismatch() {
        assert_content_eq("a\nb\n", "a\nc\n");
    }
}
