//! Message fields and their classification.

use prost_types::{
    DescriptorProto, FieldDescriptorProto,
    field_descriptor_proto::{Label, Type},
};
use protoweave_core::camel_case;

use crate::names::{Origin, Syntax, join_name, trim_type_name};

/// Wire kind of a scalar field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Double,
    Float,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Sint32,
    Sint64,
    Fixed32,
    Fixed64,
    Sfixed32,
    Sfixed64,
    Bool,
    String,
    Bytes,
}

impl ScalarKind {
    /// Map a descriptor type to its scalar kind. Enums, messages and groups
    /// are not scalars.
    pub fn from_type(ty: Type) -> Option<Self> {
        let kind = match ty {
            Type::Double => ScalarKind::Double,
            Type::Float => ScalarKind::Float,
            Type::Int32 => ScalarKind::Int32,
            Type::Int64 => ScalarKind::Int64,
            Type::Uint32 => ScalarKind::Uint32,
            Type::Uint64 => ScalarKind::Uint64,
            Type::Sint32 => ScalarKind::Sint32,
            Type::Sint64 => ScalarKind::Sint64,
            Type::Fixed32 => ScalarKind::Fixed32,
            Type::Fixed64 => ScalarKind::Fixed64,
            Type::Sfixed32 => ScalarKind::Sfixed32,
            Type::Sfixed64 => ScalarKind::Sfixed64,
            Type::Bool => ScalarKind::Bool,
            Type::String => ScalarKind::String,
            Type::Bytes => ScalarKind::Bytes,
            Type::Enum | Type::Message | Type::Group => return None,
        };
        Some(kind)
    }

    /// The canonical schema spelling (`int32`, `string`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarKind::Double => "double",
            ScalarKind::Float => "float",
            ScalarKind::Int32 => "int32",
            ScalarKind::Int64 => "int64",
            ScalarKind::Uint32 => "uint32",
            ScalarKind::Uint64 => "uint64",
            ScalarKind::Sint32 => "sint32",
            ScalarKind::Sint64 => "sint64",
            ScalarKind::Fixed32 => "fixed32",
            ScalarKind::Fixed64 => "fixed64",
            ScalarKind::Sfixed32 => "sfixed32",
            ScalarKind::Sfixed64 => "sfixed64",
            ScalarKind::Bool => "bool",
            ScalarKind::String => "string",
            ScalarKind::Bytes => "bytes",
        }
    }
}

/// What a field holds. Exactly one variant applies to every field.
#[derive(Debug, Clone)]
pub enum FieldClass<'a> {
    /// A scalar value.
    Scalar(ScalarKind),
    /// An enum value; carries the enum's full name.
    Enum(String),
    /// A message value; carries the message's full name.
    Message(String),
    /// A `map<K, V>` field backed by a synthesized entry message.
    Map(MapEntry<'a>),
}

/// The entry message behind a map field.
#[derive(Debug, Clone)]
pub struct MapEntry<'a> {
    proto: &'a DescriptorProto,
    full_name: String,
    origin: Origin<'a>,
}

impl<'a> MapEntry<'a> {
    /// Full name of the entry message.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// The key field (number 1).
    pub fn key(&self) -> Option<Field<'a>> {
        self.entry_field(1)
    }

    /// The value field (number 2).
    pub fn value(&self) -> Option<Field<'a>> {
        self.entry_field(2)
    }

    fn entry_field(&self, number: i32) -> Option<Field<'a>> {
        self.proto
            .field
            .iter()
            .find(|f| f.number() == number)
            .map(|f| Field::new(f, self.proto, &self.full_name, self.origin))
    }
}

/// A field of a message.
#[derive(Debug, Clone)]
pub struct Field<'a> {
    proto: &'a FieldDescriptorProto,
    name: String,
    class: FieldClass<'a>,
    syntax: Syntax,
}

impl<'a> Field<'a> {
    /// Wrap `proto`, a field declared in `parent` whose full name is
    /// `parent_full_name`.
    pub(crate) fn new(
        proto: &'a FieldDescriptorProto,
        parent: &'a DescriptorProto,
        parent_full_name: &str,
        origin: Origin<'a>,
    ) -> Self {
        Self {
            proto,
            name: proto.name().to_string(),
            class: classify(proto, parent, parent_full_name, origin),
            syntax: origin.syntax,
        }
    }

    /// Field name as declared in the schema.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// CamelCase identifier for generated code.
    pub fn ident(&self) -> String {
        camel_case(&self.name)
    }

    /// Field number.
    pub fn number(&self) -> i32 {
        self.proto.number()
    }

    /// JSON name, when `protoc` supplied one.
    pub fn json_name(&self) -> Option<&'a str> {
        self.proto.json_name.as_deref()
    }

    /// The underlying descriptor.
    pub fn descriptor(&self) -> &'a FieldDescriptorProto {
        self.proto
    }

    /// The field's classification.
    pub fn class(&self) -> &FieldClass<'a> {
        &self.class
    }

    /// Returns true if this is a `map<K, V>` field.
    pub fn is_map(&self) -> bool {
        matches!(self.class, FieldClass::Map(_))
    }

    /// Returns true if this field holds an enum.
    pub fn is_enum(&self) -> bool {
        matches!(self.class, FieldClass::Enum(_))
    }

    /// Returns true if this field holds a message (maps excluded).
    pub fn is_message(&self) -> bool {
        matches!(self.class, FieldClass::Message(_))
    }

    /// Returns true if this field holds a scalar.
    pub fn is_scalar(&self) -> bool {
        matches!(self.class, FieldClass::Scalar(_))
    }

    /// Returns true if the field is repeated. Map fields are repeated.
    pub fn is_repeated(&self) -> bool {
        self.proto.label() == Label::Repeated
    }

    /// Returns true if the field was declared with the `optional` keyword.
    pub fn is_optional(&self) -> bool {
        if self.proto.proto3_optional() {
            return true;
        }
        self.syntax == Syntax::Proto2
            && self.proto.label() == Label::Optional
            && self.proto.oneof_index.is_none()
    }

    /// Index of the oneof this field belongs to.
    pub fn oneof_index(&self) -> Option<i32> {
        self.proto.oneof_index
    }

    /// The map entry, for map fields.
    pub fn map_entry(&self) -> Option<&MapEntry<'a>> {
        match &self.class {
            FieldClass::Map(entry) => Some(entry),
            _ => None,
        }
    }

    /// Schema type name: the full name of the referenced enum, message or
    /// map entry, or the scalar kind.
    pub fn type_name(&self) -> &str {
        match &self.class {
            FieldClass::Scalar(kind) => kind.as_str(),
            FieldClass::Enum(name) | FieldClass::Message(name) => name,
            FieldClass::Map(entry) => entry.full_name(),
        }
    }
}

fn classify<'a>(
    proto: &'a FieldDescriptorProto,
    parent: &'a DescriptorProto,
    parent_full_name: &str,
    origin: Origin<'a>,
) -> FieldClass<'a> {
    let ty = proto.r#type();
    if let Some(kind) = ScalarKind::from_type(ty) {
        return FieldClass::Scalar(kind);
    }

    let type_name = trim_type_name(proto.type_name());
    if ty == Type::Enum {
        return FieldClass::Enum(type_name.to_string());
    }

    if proto.label() == Label::Repeated {
        let entry = parent.nested_type.iter().find(|nested| {
            nested.options.as_ref().is_some_and(|o| o.map_entry())
                && join_name(parent_full_name, nested.name()) == type_name
        });
        if let Some(entry) = entry {
            return FieldClass::Map(MapEntry {
                proto: entry,
                full_name: type_name.to_string(),
                origin,
            });
        }
    }

    FieldClass::Message(type_name.to_string())
}
