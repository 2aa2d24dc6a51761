//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Accumulates indented lines and flushes them to an
//!   [`OutputSink`](protoweave_core::OutputSink)
//! - [`Scope`] - Guard that keeps one extra indentation level while alive
//! - [`Indent`] - Indentation configuration
//!
//! # Typed Sub-Builders
//!
//! Block bodies that only accept a restricted vocabulary receive one of
//! these instead of the raw [`CodeBuilder`]:
//!
//! - [`StructBuilder`], [`InterfaceBuilder`] - type bodies
//! - [`ConstBuilder`], [`VarBuilder`] - grouped declarations
//! - [`SwitchBuilder`] - `case` / `default` clauses

mod code_builder;
mod declarations;
mod go;
mod indent;
mod structure;
mod switch;

pub use code_builder::{CodeBuilder, Scope};
pub use declarations::{ConstBuilder, VarBuilder};
pub use indent::Indent;
pub use structure::{InterfaceBuilder, StructBuilder};
pub use switch::SwitchBuilder;
