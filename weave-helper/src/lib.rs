//! A `protoc` plugin that wraps every message in a helper struct.
//!
//! For each file it emits a `<name>.pb.go` with a `<Message>Helper` type and
//! constructor per message, followed by comments summarizing enums, fields,
//! oneofs and service methods.

use protoweave_plugin::{Context, Field, FieldClass, File, Options, Plugin};

/// The helper plugin, registered for every file.
pub fn helper_plugin() -> Plugin {
    Plugin::new()
        .with_options(Options {
            debug: true,
            ..Options::default()
        })
        .generate_for("*.proto", helper_generator)
}

/// Emit helper wrappers and summaries for `file`.
pub fn helper_generator(ctx: &mut Context<'_>, file: &File<'_>) -> eyre::Result<()> {
    ctx.debug(format_args!("Processing file: {}", file.path()));

    let mut code = ctx.code();
    code.comment(&format!("Generated from {}", file.path()))
        .package(&ctx.package_for(file))
        .blank();

    let enums = file.enums();
    for e in &enums {
        code.comment(&format!("Enum: {} ({})", e.ident(), e.full_name()));
    }
    code.when(!enums.is_empty(), |b| {
        b.blank();
    });

    for message in file.messages() {
        let ident = message.ident();
        let helper = format!("{ident}Helper");
        code.comment(&format!("Message: {ident}"))
            .struct_type(&helper, |s| {
                s.field("msg", &format!("*{ident}"));
            })
            .blank()
            .function(&format!("New{helper}(msg *{ident}) *{helper}"), |b| {
                b.return_values(&[format!("&{helper}{{msg: msg}}").as_str()]);
            })
            .blank();

        for field in message.fields() {
            code.comment(&format!("Field {}: {}", field.ident(), describe(&field)));
        }
        for oneof in message.oneofs() {
            code.comment(&format!("Oneof: {}", oneof.ident()));
        }
        code.blank();
    }

    for service in file.services() {
        code.comment(&format!("Service: {}", service.ident()));
        for method in service.methods() {
            let streaming = if method.is_streaming() { " (streaming)" } else { "" };
            code.comment(&format!(
                "Method: {} -> {}{streaming}",
                method.input_ident(),
                method.output_ident()
            ));
        }
        code.blank();
    }

    code.flush(ctx);
    Ok(())
}

fn describe(field: &Field<'_>) -> String {
    match field.class() {
        FieldClass::Map(_) => "map field".to_string(),
        FieldClass::Enum(name) => format!("enum field: {name}"),
        FieldClass::Message(name) => format!("message field: {name}"),
        FieldClass::Scalar(kind) => format!("scalar field: {}", kind.as_str()),
    }
}
