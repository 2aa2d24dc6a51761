//! Descriptor fixtures for tests.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests. Fixtures build the same descriptor shapes `protoc`
//! emits, without needing `protoc` itself.

use prost_types::{
    DescriptorProto, EnumDescriptorProto, EnumValueDescriptorProto, FieldDescriptorProto,
    FileDescriptorProto, MessageOptions, MethodDescriptorProto, OneofDescriptorProto,
    ServiceDescriptorProto,
    field_descriptor_proto::{Label, Type},
};
use protoweave_core::camel_case;

/// A proto3 file with the given path and package.
pub fn file(path: &str, package: &str) -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some(path.to_string()),
        package: (!package.is_empty()).then(|| package.to_string()),
        syntax: Some("proto3".to_string()),
        ..Default::default()
    }
}

/// A message with the given fields.
pub fn message(name: &str, fields: Vec<FieldDescriptorProto>) -> DescriptorProto {
    DescriptorProto {
        name: Some(name.to_string()),
        field: fields,
        ..Default::default()
    }
}

fn field(name: &str, number: i32, ty: Type) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        label: Some(Label::Optional as i32),
        r#type: Some(ty as i32),
        json_name: Some(camel_case(name)),
        ..Default::default()
    }
}

/// A singular scalar field.
pub fn scalar_field(name: &str, number: i32, ty: Type) -> FieldDescriptorProto {
    field(name, number, ty)
}

/// A singular enum field. `type_name` is fully qualified, e.g. `.shop.Status`.
pub fn enum_field(name: &str, number: i32, type_name: &str) -> FieldDescriptorProto {
    FieldDescriptorProto {
        type_name: Some(type_name.to_string()),
        ..field(name, number, Type::Enum)
    }
}

/// A singular message field. `type_name` is fully qualified, e.g. `.shop.Item`.
pub fn message_field(name: &str, number: i32, type_name: &str) -> FieldDescriptorProto {
    FieldDescriptorProto {
        type_name: Some(type_name.to_string()),
        ..field(name, number, Type::Message)
    }
}

/// Mark a field `repeated`.
pub fn repeated(mut field: FieldDescriptorProto) -> FieldDescriptorProto {
    field.label = Some(Label::Repeated as i32);
    field
}

/// Mark a field with the proto3 `optional` keyword.
pub fn optional(mut field: FieldDescriptorProto) -> FieldDescriptorProto {
    field.proto3_optional = Some(true);
    field
}

/// Add a `map<key, value>` field to `message` along with its entry message.
///
/// `parent_full_name` is the message's full name without a leading dot.
/// The value field is renamed to `value` and numbered 2.
pub fn add_map_field(
    message: &mut DescriptorProto,
    parent_full_name: &str,
    name: &str,
    number: i32,
    key: Type,
    mut value: FieldDescriptorProto,
) {
    let entry_name = format!("{}Entry", camel_case(name));
    value.name = Some("value".to_string());
    value.number = Some(2);
    value.json_name = Some("value".to_string());

    message.nested_type.push(DescriptorProto {
        name: Some(entry_name.clone()),
        field: vec![field("key", 1, key), value],
        options: Some(MessageOptions {
            map_entry: Some(true),
            ..Default::default()
        }),
        ..Default::default()
    });
    message.field.push(repeated(message_field(
        name,
        number,
        &format!(".{parent_full_name}.{entry_name}"),
    )));
}

/// An enum with `(name, number)` values.
pub fn enumeration(name: &str, values: &[(&str, i32)]) -> EnumDescriptorProto {
    EnumDescriptorProto {
        name: Some(name.to_string()),
        value: values
            .iter()
            .map(|(name, number)| EnumValueDescriptorProto {
                name: Some(name.to_string()),
                number: Some(*number),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

/// A oneof declaration. Members reference it through `oneof_index`.
pub fn oneof(name: &str) -> OneofDescriptorProto {
    OneofDescriptorProto {
        name: Some(name.to_string()),
        ..Default::default()
    }
}

/// A service with the given methods.
pub fn service(name: &str, methods: Vec<MethodDescriptorProto>) -> ServiceDescriptorProto {
    ServiceDescriptorProto {
        name: Some(name.to_string()),
        method: methods,
        ..Default::default()
    }
}

/// A unary method. Type names are fully qualified.
pub fn method(name: &str, input: &str, output: &str) -> MethodDescriptorProto {
    MethodDescriptorProto {
        name: Some(name.to_string()),
        input_type: Some(input.to_string()),
        output_type: Some(output.to_string()),
        ..Default::default()
    }
}

/// Set a method's streaming flags.
pub fn streaming(
    mut method: MethodDescriptorProto,
    client: bool,
    server: bool,
) -> MethodDescriptorProto {
    method.client_streaming = Some(client);
    method.server_streaming = Some(server);
    method
}

/// The `shop/order.proto` file used across the test suites: an `Order`
/// message with a scalar, an enum and a repeated message field, a `Status`
/// enum and an `OrderService` with one unary method.
pub fn order_file() -> FileDescriptorProto {
    let mut file = file("shop/order.proto", "shop");
    file.message_type = vec![
        message(
            "Order",
            vec![
                scalar_field("id", 1, Type::Int64),
                enum_field("status", 2, ".shop.Status"),
                repeated(message_field("items", 3, ".shop.Item")),
            ],
        ),
        message("Item", vec![scalar_field("sku", 1, Type::String)]),
    ];
    file.enum_type = vec![enumeration(
        "Status",
        &[("STATUS_UNKNOWN", 0), ("STATUS_ACTIVE", 1)],
    )];
    file.service = vec![service(
        "OrderService",
        vec![method("GetOrder", ".shop.GetOrderRequest", ".shop.Order")],
    )];
    file
}
