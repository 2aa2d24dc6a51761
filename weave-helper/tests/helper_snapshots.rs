//! Snapshot tests for the helper plugin.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use prost::Message;
use prost_types::{
    FileDescriptorProto,
    compiler::{CodeGeneratorRequest, CodeGeneratorResponse},
    field_descriptor_proto::Type,
};
use protoweave_helper::{helper_generator, helper_plugin};
use protoweave_plugin::testing;

/// `shop/order.proto` with a map, a oneof and a streaming method added.
fn shop_file() -> FileDescriptorProto {
    let mut file = testing::order_file();

    let item = &mut file.message_type[1];
    testing::add_map_field(
        item,
        "shop.Item",
        "attributes",
        2,
        Type::String,
        testing::scalar_field("value", 2, Type::String),
    );
    let mut store_id = testing::scalar_field("store_id", 3, Type::Int32);
    store_id.oneof_index = Some(0);
    let mut online = testing::scalar_field("online", 4, Type::Bool);
    online.oneof_index = Some(0);
    item.field.extend([store_id, online]);
    item.oneof_decl.push(testing::oneof("source"));

    file.service[0].method.push(testing::streaming(
        testing::method("WatchOrders", ".shop.WatchRequest", ".shop.Order"),
        false,
        true,
    ));
    file
}

#[test]
fn test_helper_output() {
    let content = testing::generate_single(shop_file(), helper_generator).expect("generate");
    insta::assert_snapshot!("helper_output", content);
}

#[test]
fn test_plugin_protocol() {
    let request = CodeGeneratorRequest {
        file_to_generate: vec!["shop/order.proto".to_string()],
        parameter: Some("package_mapping=shop:shoppb".to_string()),
        proto_file: vec![shop_file()],
        ..Default::default()
    };

    let mut output = Vec::new();
    helper_plugin()
        .run_with(request.encode_to_vec().as_slice(), &mut output)
        .expect("run");

    let response = CodeGeneratorResponse::decode(output.as_slice()).expect("decode");
    assert!(response.error.is_none());
    assert_eq!(response.file.len(), 1);
    assert_eq!(response.file[0].name(), "order.pb.go");
    assert!(response.file[0].content().starts_with("// Generated from shop/order.proto\npackage shoppb\n"));
}
