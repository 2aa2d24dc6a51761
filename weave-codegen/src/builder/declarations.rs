//! Grouped `const (...)` and `var (...)` declarations.

use super::CodeBuilder;

impl CodeBuilder {
    /// Add a const block: `const (` ... `)`.
    pub fn const_block<F>(&mut self, body: F) -> &mut Self
    where
        F: FnOnce(&mut ConstBuilder<'_>),
    {
        self.enclosed("const (", ")", |code| body(&mut ConstBuilder { code }))
    }

    /// Add a var block: `var (` ... `)`.
    pub fn var_block<F>(&mut self, body: F) -> &mut Self
    where
        F: FnOnce(&mut VarBuilder<'_>),
    {
        self.enclosed("var (", ")", |code| body(&mut VarBuilder { code }))
    }
}

/// Entries of a const block.
#[derive(Debug)]
pub struct ConstBuilder<'b> {
    code: &'b mut CodeBuilder,
}

impl ConstBuilder<'_> {
    /// Add `name = value`.
    pub fn constant(&mut self, name: &str, value: &str) -> &mut Self {
        self.code.line(format!("{name} = {value}"));
        self
    }

    /// Add `name type = value`.
    pub fn typed(&mut self, name: &str, ty: &str, value: &str) -> &mut Self {
        self.code.line(format!("{name} {ty} = {value}"));
        self
    }
}

/// Entries of a var block.
#[derive(Debug)]
pub struct VarBuilder<'b> {
    code: &'b mut CodeBuilder,
}

impl VarBuilder<'_> {
    /// Add `name type`, or `name type = value` when a value is given.
    pub fn var(&mut self, name: &str, ty: &str, value: Option<&str>) -> &mut Self {
        match value {
            Some(value) => self.code.line(format!("{name} {ty} = {value}")),
            None => self.code.line(format!("{name} {ty}")),
        };
        self
    }
}
