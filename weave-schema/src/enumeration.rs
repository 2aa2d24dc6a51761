//! Enums and their values.

use prost_types::{EnumDescriptorProto, EnumValueDescriptorProto};

use crate::names::{Origin, join_name, local_ident};

/// An enum declared at file level or nested in a message.
#[derive(Debug, Clone)]
pub struct Enum<'a> {
    proto: &'a EnumDescriptorProto,
    full_name: String,
    value_prefix: String,
    origin: Origin<'a>,
}

impl<'a> Enum<'a> {
    /// `value_prefix` is prepended to value identifiers: the enum's own
    /// identifier at file level, the parent message's when nested.
    pub(crate) fn new(
        proto: &'a EnumDescriptorProto,
        scope: &str,
        value_prefix: &str,
        origin: Origin<'a>,
    ) -> Self {
        Self {
            proto,
            full_name: join_name(scope, proto.name()),
            value_prefix: value_prefix.to_string(),
            origin,
        }
    }

    pub(crate) fn top_level(proto: &'a EnumDescriptorProto, origin: Origin<'a>) -> Self {
        let full_name = join_name(origin.package, proto.name());
        let prefix = local_ident(&full_name, origin.package);
        Self {
            proto,
            full_name,
            value_prefix: prefix,
            origin,
        }
    }

    pub fn name(&self) -> &'a str {
        self.proto.name()
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Go-style identifier, with nested names joined by `_`.
    pub fn ident(&self) -> String {
        local_ident(&self.full_name, self.origin.package)
    }

    pub fn descriptor(&self) -> &'a EnumDescriptorProto {
        self.proto
    }

    /// Values in declaration order.
    pub fn values(&self) -> Vec<EnumValue<'a>> {
        self.proto
            .value
            .iter()
            .map(|proto| EnumValue {
                proto,
                ident: format!("{}_{}", self.value_prefix, proto.name()),
            })
            .collect()
    }
}

/// A single enum value.
#[derive(Debug, Clone)]
pub struct EnumValue<'a> {
    proto: &'a EnumValueDescriptorProto,
    ident: String,
}

impl<'a> EnumValue<'a> {
    pub fn name(&self) -> &'a str {
        self.proto.name()
    }

    pub fn number(&self) -> i32 {
        self.proto.number()
    }

    /// Identifier of the generated constant, e.g. `Status_STATUS_ACTIVE`.
    pub fn ident(&self) -> String {
        self.ident.clone()
    }

    pub fn descriptor(&self) -> &'a EnumValueDescriptorProto {
        self.proto
    }
}
