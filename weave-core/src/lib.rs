//! Core utilities and types for protoweave.
//!
//! This crate provides the pieces shared by every other protoweave crate:
//! identifier naming rules and the output sink contract that generated
//! lines are written through.

mod naming;
mod sink;

// Naming
pub use naming::{camel_case, sanitize_ident};
// Output
pub use sink::{ImportIdent, MemorySink, OutputSink, join_values};
