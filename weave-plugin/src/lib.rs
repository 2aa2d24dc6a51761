//! Build `protoc` plugins from small generator callbacks.
//!
//! A [`Plugin`] maps file patterns to generators. For every file `protoc`
//! asks for, each generator whose pattern matches receives a [`Context`]
//! and the file's [`File`](protoweave_schema::File) facade, and writes
//! lines into [`GeneratedFile`]s that become the plugin response.
//!
//! # Module Organization
//!
//! - [`Plugin`] - Registration, dispatch and the plugin protocol
//! - [`Context`] - Per-file access to schema, options and outputs
//! - [`GeneratedFile`] - Output files with import tracking
//! - [`Options`], [`parse_parameters`] - Configuration from `protoc` parameters
//! - [`matches_pattern`] - File pattern matching
//! - [`testing`] - Fixtures and helpers for generator tests (feature-gated)

mod context;
mod error;
mod options;
mod output;
mod pattern;
mod plugin;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use context::Context;
pub use error::{Error, GeneratorError, Result};
pub use options::{Options, Parameters, parse_parameters};
pub use output::GeneratedFile;
pub use pattern::matches_pattern;
pub use plugin::{GeneratorFn, ParameterHandler, Plugin};
// Re-exported so generators only need this crate
pub use protoweave_codegen::{CodeBuilder, Indent};
pub use protoweave_core::{ImportIdent, OutputSink};
pub use protoweave_schema::{
    Enum, EnumValue, Field, FieldClass, File, MapEntry, Message, Method, Oneof, ScalarKind,
    Service, Syntax,
};
