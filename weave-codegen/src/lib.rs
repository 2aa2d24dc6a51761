//! Code emission for protoweave generators.
//!
//! # Module Organization
//!
//! - [`builder`] - The line accumulator ([`CodeBuilder`]), its scope guard and
//!   the typed sub-builders handed to block bodies.

pub mod builder;

pub use builder::{
    CodeBuilder, ConstBuilder, Indent, InterfaceBuilder, Scope, StructBuilder, SwitchBuilder,
    VarBuilder,
};
