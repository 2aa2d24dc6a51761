//! Messages and oneof groups.

use prost_types::{DescriptorProto, OneofDescriptorProto};
use protoweave_core::camel_case;

use crate::{
    enumeration::Enum,
    field::Field,
    names::{Origin, join_name, local_ident},
};

/// A message declared in a file, possibly nested in another message.
#[derive(Debug, Clone)]
pub struct Message<'a> {
    proto: &'a DescriptorProto,
    full_name: String,
    origin: Origin<'a>,
}

impl<'a> Message<'a> {
    pub(crate) fn new(proto: &'a DescriptorProto, scope: &str, origin: Origin<'a>) -> Self {
        Self {
            proto,
            full_name: join_name(scope, proto.name()),
            origin,
        }
    }

    /// Short name as declared.
    pub fn name(&self) -> &'a str {
        self.proto.name()
    }

    /// Fully qualified name without a leading dot, e.g. `shop.Order.Item`.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Go-style identifier, with nested names joined by `_`.
    pub fn ident(&self) -> String {
        local_ident(&self.full_name, self.origin.package)
    }

    /// The underlying descriptor.
    pub fn descriptor(&self) -> &'a DescriptorProto {
        self.proto
    }

    /// Returns true if this message is a synthesized map entry.
    pub fn is_map_entry(&self) -> bool {
        self.proto
            .options
            .as_ref()
            .is_some_and(|options| options.map_entry())
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> Vec<Field<'a>> {
        self.proto
            .field
            .iter()
            .map(|field| Field::new(field, self.proto, &self.full_name, self.origin))
            .collect()
    }

    /// Nested messages in declaration order. Map entries are skipped.
    pub fn messages(&self) -> Vec<Message<'a>> {
        self.proto
            .nested_type
            .iter()
            .map(|nested| Message::new(nested, &self.full_name, self.origin))
            .filter(|nested| !nested.is_map_entry())
            .collect()
    }

    /// Nested enums in declaration order.
    pub fn enums(&self) -> Vec<Enum<'a>> {
        let prefix = self.ident();
        self.proto
            .enum_type
            .iter()
            .map(|proto| Enum::new(proto, &self.full_name, &prefix, self.origin))
            .collect()
    }

    /// Oneof groups in declaration order, including synthetic ones.
    pub fn oneofs(&self) -> Vec<Oneof<'a>> {
        let fields = self.fields();
        self.proto
            .oneof_decl
            .iter()
            .enumerate()
            .map(|(index, proto)| {
                let members = fields
                    .iter()
                    .filter(|field| field.oneof_index() == Some(index as i32))
                    .cloned()
                    .collect();
                Oneof {
                    proto,
                    index,
                    fields: members,
                }
            })
            .collect()
    }
}

/// A oneof group of a message.
#[derive(Debug, Clone)]
pub struct Oneof<'a> {
    proto: &'a OneofDescriptorProto,
    index: usize,
    fields: Vec<Field<'a>>,
}

impl<'a> Oneof<'a> {
    /// Name as declared.
    pub fn name(&self) -> &'a str {
        self.proto.name()
    }

    /// CamelCase identifier.
    pub fn ident(&self) -> String {
        camel_case(self.name())
    }

    /// Position in the message's oneof declarations.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Member fields in declaration order.
    pub fn fields(&self) -> &[Field<'a>] {
        &self.fields
    }

    /// Returns true for the group `protoc` synthesizes around a proto3
    /// `optional` field.
    pub fn is_synthetic(&self) -> bool {
        !self.fields.is_empty()
            && self
                .fields
                .iter()
                .all(|field| field.descriptor().proto3_optional())
    }
}
