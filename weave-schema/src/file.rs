//! File facade: the root of the reflection model.

use prost_types::FileDescriptorProto;
use protoweave_core::sanitize_ident;

use crate::{
    enumeration::Enum,
    message::Message,
    names::{Origin, Syntax},
    service::Service,
};

/// One `.proto` file as handed to the plugin.
///
/// # Example
///
/// ```
/// use prost_types::FileDescriptorProto;
/// use protoweave_schema::File;
///
/// let proto = FileDescriptorProto {
///     name: Some("shop/v1/order.proto".into()),
///     package: Some("shop.v1".into()),
///     ..Default::default()
/// };
/// let file = File::new(&proto);
///
/// assert_eq!(file.path(), "shop/v1/order.proto");
/// assert_eq!(file.package(), "shop_v1");
/// assert_eq!(file.import_path(), "shop/v1");
/// assert!(file.messages().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct File<'a> {
    proto: &'a FileDescriptorProto,
    origin: Origin<'a>,
}

impl<'a> File<'a> {
    pub fn new(proto: &'a FileDescriptorProto) -> Self {
        Self {
            proto,
            origin: Origin {
                package: proto.package(),
                syntax: Syntax::from_descriptor(proto.syntax()),
            },
        }
    }

    /// Path of the file relative to the include root.
    pub fn path(&self) -> &'a str {
        self.proto.name()
    }

    /// File name without directories or the `.proto` suffix.
    pub fn base_name(&self) -> &'a str {
        let path = self.path();
        let file_name = path.rsplit('/').next().unwrap_or(path);
        file_name.strip_suffix(".proto").unwrap_or(file_name)
    }

    /// Schema package, e.g. `shop.v1`. Empty when the file declares none.
    pub fn proto_package(&self) -> &'a str {
        self.origin.package
    }

    /// Target package name for generated code.
    ///
    /// Taken from `go_package` (the part after `;`, else its last path
    /// segment), then the schema package, then the file name.
    pub fn package(&self) -> String {
        if let Some(go_package) = self.go_package() {
            if let Some((_, name)) = go_package.split_once(';') {
                return sanitize_ident(name);
            }
            if let Some(last) = go_package.rsplit('/').next().filter(|s| !s.is_empty()) {
                return sanitize_ident(last);
            }
        }
        if !self.origin.package.is_empty() {
            return sanitize_ident(self.origin.package);
        }
        sanitize_ident(self.base_name())
    }

    /// Import path for generated code: `go_package` without the `;name`
    /// suffix, else the file's directory (`.` at the root).
    pub fn import_path(&self) -> &'a str {
        if let Some(go_package) = self.go_package() {
            return go_package
                .split_once(';')
                .map_or(go_package, |(path, _)| path);
        }
        match self.path().rsplit_once('/') {
            Some((dir, _)) if !dir.is_empty() => dir,
            _ => ".",
        }
    }

    pub fn syntax(&self) -> Syntax {
        self.origin.syntax
    }

    /// Files this one imports, as written in the `import` statements.
    pub fn dependencies(&self) -> &'a [String] {
        &self.proto.dependency
    }

    pub fn descriptor(&self) -> &'a FileDescriptorProto {
        self.proto
    }

    /// Top-level messages in declaration order.
    pub fn messages(&self) -> Vec<Message<'a>> {
        self.proto
            .message_type
            .iter()
            .map(|proto| Message::new(proto, self.origin.package, self.origin))
            .collect()
    }

    /// Top-level enums in declaration order.
    pub fn enums(&self) -> Vec<Enum<'a>> {
        self.proto
            .enum_type
            .iter()
            .map(|proto| Enum::top_level(proto, self.origin))
            .collect()
    }

    /// Services in declaration order.
    pub fn services(&self) -> Vec<Service<'a>> {
        self.proto
            .service
            .iter()
            .map(|proto| Service::new(proto, self.origin))
            .collect()
    }

    fn go_package(&self) -> Option<&'a str> {
        self.proto
            .options
            .as_ref()
            .and_then(|options| options.go_package.as_deref())
            .filter(|go_package| !go_package.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use prost_types::{FileOptions, field_descriptor_proto::Type};

    use super::*;
    use crate::testing;

    fn with_go_package(go_package: &str) -> FileDescriptorProto {
        let mut file = testing::file("shop/v1/order.proto", "shop.v1");
        file.options = Some(FileOptions {
            go_package: Some(go_package.to_string()),
            ..Default::default()
        });
        file
    }

    #[test]
    fn test_package_from_go_package_name() {
        let proto = with_go_package("example.com/shop/gen;shoppb");
        let file = File::new(&proto);
        assert_eq!(file.package(), "shoppb");
        assert_eq!(file.import_path(), "example.com/shop/gen");
    }

    #[test]
    fn test_package_from_go_package_path() {
        let proto = with_go_package("example.com/shop/order-v1");
        let file = File::new(&proto);
        assert_eq!(file.package(), "order_v1");
        assert_eq!(file.import_path(), "example.com/shop/order-v1");
    }

    #[test]
    fn test_package_fallbacks() {
        let proto = testing::file("shop/v1/order.proto", "shop.v1");
        let file = File::new(&proto);
        assert_eq!(file.package(), "shop_v1");
        assert_eq!(file.proto_package(), "shop.v1");
        assert_eq!(file.import_path(), "shop/v1");

        let proto = testing::file("order.proto", "");
        let file = File::new(&proto);
        assert_eq!(file.package(), "order");
        assert_eq!(file.import_path(), ".");
        assert_eq!(file.base_name(), "order");
    }

    #[test]
    fn test_syntax() {
        let proto = testing::file("a.proto", "a");
        assert_eq!(File::new(&proto).syntax(), Syntax::Proto3);

        let mut proto = testing::file("a.proto", "a");
        proto.syntax = None;
        assert_eq!(File::new(&proto).syntax(), Syntax::Proto2);
    }

    #[test]
    fn test_listings_preserve_order() {
        let mut proto = testing::file("shop/order.proto", "shop");
        proto.message_type = ["Order", "Item", "Address"]
            .into_iter()
            .map(|name| testing::message(name, vec![testing::scalar_field("id", 1, Type::Int64)]))
            .collect();
        proto.enum_type = vec![
            testing::enumeration("Status", &[("STATUS_UNKNOWN", 0)]),
            testing::enumeration("Kind", &[("KIND_UNKNOWN", 0)]),
        ];
        proto.service = vec![
            testing::service("OrderService", vec![]),
            testing::service("AdminService", vec![]),
        ];
        proto.dependency = vec!["google/protobuf/empty.proto".to_string()];

        let file = File::new(&proto);
        let messages: Vec<_> = file.messages().iter().map(|m| m.name()).collect();
        let enums: Vec<_> = file.enums().iter().map(|e| e.name()).collect();
        let services: Vec<_> = file.services().iter().map(|s| s.name()).collect();

        assert_eq!(messages, ["Order", "Item", "Address"]);
        assert_eq!(enums, ["Status", "Kind"]);
        assert_eq!(services, ["OrderService", "AdminService"]);
        assert_eq!(file.dependencies(), ["google/protobuf/empty.proto"]);
    }

    #[test]
    fn test_empty_file() {
        let proto = testing::file("empty.proto", "empty");
        let file = File::new(&proto);
        assert!(file.messages().is_empty());
        assert!(file.enums().is_empty());
        assert!(file.services().is_empty());
    }
}
