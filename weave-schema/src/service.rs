//! Services and RPC methods.

use prost_types::{MethodDescriptorProto, ServiceDescriptorProto};
use protoweave_core::camel_case;

use crate::names::{Origin, join_name, local_ident, trim_type_name};

/// A service declared in a file.
#[derive(Debug, Clone)]
pub struct Service<'a> {
    proto: &'a ServiceDescriptorProto,
    full_name: String,
    origin: Origin<'a>,
}

impl<'a> Service<'a> {
    pub(crate) fn new(proto: &'a ServiceDescriptorProto, origin: Origin<'a>) -> Self {
        Self {
            proto,
            full_name: join_name(origin.package, proto.name()),
            origin,
        }
    }

    pub fn name(&self) -> &'a str {
        self.proto.name()
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn ident(&self) -> String {
        camel_case(self.name())
    }

    pub fn descriptor(&self) -> &'a ServiceDescriptorProto {
        self.proto
    }

    /// Methods in declaration order.
    pub fn methods(&self) -> Vec<Method<'a>> {
        self.proto
            .method
            .iter()
            .map(|proto| Method {
                proto,
                origin: self.origin,
            })
            .collect()
    }
}

/// An RPC method of a service.
#[derive(Debug, Clone)]
pub struct Method<'a> {
    proto: &'a MethodDescriptorProto,
    origin: Origin<'a>,
}

impl<'a> Method<'a> {
    pub fn name(&self) -> &'a str {
        self.proto.name()
    }

    pub fn ident(&self) -> String {
        camel_case(self.name())
    }

    pub fn descriptor(&self) -> &'a MethodDescriptorProto {
        self.proto
    }

    /// Full name of the request message.
    pub fn input_type(&self) -> &'a str {
        trim_type_name(self.proto.input_type())
    }

    /// Full name of the response message.
    pub fn output_type(&self) -> &'a str {
        trim_type_name(self.proto.output_type())
    }

    /// Identifier of the request message as seen from this file.
    pub fn input_ident(&self) -> String {
        local_ident(self.input_type(), self.origin.package)
    }

    /// Identifier of the response message as seen from this file.
    pub fn output_ident(&self) -> String {
        local_ident(self.output_type(), self.origin.package)
    }

    pub fn is_client_streaming(&self) -> bool {
        self.proto.client_streaming()
    }

    pub fn is_server_streaming(&self) -> bool {
        self.proto.server_streaming()
    }

    /// Returns true if either side streams.
    pub fn is_streaming(&self) -> bool {
        self.is_client_streaming() || self.is_server_streaming()
    }
}

#[cfg(test)]
mod tests {
    use crate::{File, testing};

    fn service_file() -> prost_types::FileDescriptorProto {
        let mut file = testing::file("shop/order.proto", "shop");
        file.service = vec![testing::service(
            "OrderService",
            vec![
                testing::method("GetOrder", ".shop.GetOrderRequest", ".shop.Order"),
                testing::streaming(
                    testing::method("WatchOrders", ".shop.WatchRequest", ".shop.Order"),
                    false,
                    true,
                ),
                testing::streaming(
                    testing::method("Upload", ".shop.Chunk", ".google.protobuf.Empty"),
                    true,
                    false,
                ),
            ],
        )];
        file
    }

    #[test]
    fn test_service_names() {
        let file = service_file();
        let facade = File::new(&file);
        let service = &facade.services()[0];

        assert_eq!(service.name(), "OrderService");
        assert_eq!(service.full_name(), "shop.OrderService");
        assert_eq!(service.ident(), "OrderService");
        assert_eq!(service.methods().len(), 3);
    }

    #[test]
    fn test_method_types() {
        let file = service_file();
        let facade = File::new(&file);
        let methods = facade.services()[0].methods();

        assert_eq!(methods[0].input_type(), "shop.GetOrderRequest");
        assert_eq!(methods[0].output_type(), "shop.Order");
        assert_eq!(methods[0].input_ident(), "GetOrderRequest");
        assert_eq!(methods[2].output_ident(), "Empty");
    }

    #[test]
    fn test_streaming_flags() {
        let file = service_file();
        let facade = File::new(&file);
        let methods = facade.services()[0].methods();

        assert!(!methods[0].is_streaming());
        assert!(methods[1].is_server_streaming());
        assert!(!methods[1].is_client_streaming());
        assert!(methods[1].is_streaming());
        assert!(methods[2].is_client_streaming());
        assert!(methods[2].is_streaming());
    }

    #[test]
    fn test_bidirectional_streaming() {
        let mut file = testing::file("chat.proto", "chat");
        file.service = vec![testing::service(
            "Chat",
            vec![testing::streaming(
                testing::method("Converse", ".chat.Message", ".chat.Message"),
                true,
                true,
            )],
        )];
        let facade = File::new(&file);
        let methods = facade.services()[0].methods();
        let method = &methods[0];

        assert!(method.is_client_streaming());
        assert!(method.is_server_streaming());
        assert!(method.is_streaming());
        assert_eq!(method.input_ident(), "Message");
        assert_eq!(method.output_ident(), "Message");
    }

    #[test]
    fn test_services_are_rederived_in_order() {
        let file = service_file();
        let facade = File::new(&file);
        let first: Vec<_> = facade.services()[0]
            .methods()
            .iter()
            .map(|m| m.name())
            .collect();
        let second: Vec<_> = facade.services()[0]
            .methods()
            .iter()
            .map(|m| m.name())
            .collect();

        assert_eq!(first, ["GetOrder", "WatchOrders", "Upload"]);
        assert_eq!(first, second);
    }
}
