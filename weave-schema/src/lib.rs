//! Schema reflection for protoweave generators.
//!
//! Read-only facades over the descriptors `protoc` hands to a plugin. Each
//! facade borrows its descriptor and derives names, classifications and
//! cross-references from it on demand.
//!
//! # Module Organization
//!
//! - [`File`] - One `.proto` file: messages, enums and services
//! - [`Message`], [`Oneof`] - Message types and their oneof groups
//! - [`Field`], [`FieldClass`], [`ScalarKind`] - Fields and their classification
//! - [`Enum`], [`EnumValue`] - Enum types
//! - [`Service`], [`Method`] - RPC services
//! - [`testing`] - Descriptor fixtures (feature-gated)

mod enumeration;
mod field;
mod file;
mod message;
mod names;
mod service;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use enumeration::{Enum, EnumValue};
pub use field::{Field, FieldClass, MapEntry, ScalarKind};
pub use file::File;
pub use message::{Message, Oneof};
pub use names::Syntax;
pub use service::{Method, Service};
