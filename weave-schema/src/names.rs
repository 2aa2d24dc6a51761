//! Name resolution shared by the facades.

use protoweave_core::camel_case;

/// Schema syntax a file was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Syntax {
    Proto2,
    Proto3,
    Editions,
}

impl Syntax {
    /// Parse the descriptor's `syntax` field. Empty means proto2.
    pub fn from_descriptor(syntax: &str) -> Self {
        match syntax {
            "proto3" => Syntax::Proto3,
            "editions" => Syntax::Editions,
            _ => Syntax::Proto2,
        }
    }

    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Syntax::Proto2 => "proto2",
            Syntax::Proto3 => "proto3",
            Syntax::Editions => "editions",
        }
    }
}

/// File-level facts every facade below the file needs.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Origin<'a> {
    pub package: &'a str,
    pub syntax: Syntax,
}

/// Append `name` to a dotted scope.
pub(crate) fn join_name(scope: &str, name: &str) -> String {
    if scope.is_empty() {
        name.to_string()
    } else {
        format!("{scope}.{name}")
    }
}

/// Descriptor type references are fully qualified with a leading dot.
pub(crate) fn trim_type_name(type_name: &str) -> &str {
    type_name.strip_prefix('.').unwrap_or(type_name)
}

/// Identifier for a type as seen from inside `package`.
///
/// Types of the same package lose the package prefix. Types of other
/// packages lose their leading lowercase segments, which protobuf reserves
/// for package names. Nested names are joined with `_` in both cases.
pub(crate) fn local_ident(full_name: &str, package: &str) -> String {
    let local = if package.is_empty() {
        full_name
    } else {
        full_name
            .strip_prefix(package)
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or_else(|| strip_foreign_package(full_name))
    };
    camel_case(local)
}

/// Drop package segments from a name whose package is unknown.
fn strip_foreign_package(full_name: &str) -> &str {
    let mut offset = 0;
    for segment in full_name.split('.') {
        if segment.starts_with(|c: char| c.is_ascii_uppercase()) {
            return &full_name[offset..];
        }
        offset += segment.len() + 1;
    }
    full_name.rsplit('.').next().unwrap_or(full_name)
}
