//! Go statement and declaration vocabulary.
//!
//! Each method is a one-line rendering, or [`CodeBuilder::block`] with a
//! fixed header.

use super::CodeBuilder;

impl CodeBuilder {
    /// Add a `// text` comment.
    pub fn comment(&mut self, text: &str) -> &mut Self {
        self.line(format!("// {text}"))
    }

    /// Add a package clause.
    pub fn package(&mut self, name: &str) -> &mut Self {
        self.line(format!("package {name}"))
    }

    /// Add a single import.
    pub fn import(&mut self, path: &str) -> &mut Self {
        self.line(format!("import \"{path}\""))
    }

    /// Add imports: nothing for none, a single import for one, a grouped
    /// `import (...)` block otherwise.
    pub fn import_block<I, S>(&mut self, paths: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let paths: Vec<S> = paths.into_iter().collect();
        match paths.as_slice() {
            [] => self,
            [only] => self.import(only.as_ref()),
            many => self.enclosed("import (", ")", |b| {
                for path in many {
                    b.line(format!("\"{}\"", path.as_ref()));
                }
            }),
        }
    }

    /// Add a function: `func {signature} {` ... `}`.
    pub fn function<F>(&mut self, signature: &str, body: F) -> &mut Self
    where
        F: FnOnce(&mut CodeBuilder),
    {
        self.block(format!("func {signature}"), body)
    }

    /// Add a method with a receiver. `returns` is omitted when empty.
    pub fn method<F>(
        &mut self,
        receiver: &str,
        name: &str,
        params: &str,
        returns: &str,
        body: F,
    ) -> &mut Self
    where
        F: FnOnce(&mut CodeBuilder),
    {
        let mut signature = format!("({receiver}) {name}({params})");
        if !returns.is_empty() {
            signature.push(' ');
            signature.push_str(returns);
        }
        self.function(&signature, body)
    }

    /// Add a return statement; a bare `return` when `values` is empty.
    pub fn return_values(&mut self, values: &[&str]) -> &mut Self {
        if values.is_empty() {
            return self.line("return");
        }
        self.line(format!("return {}", values.join(", ")))
    }

    /// Add `left = right`.
    pub fn assign(&mut self, left: &str, right: &str) -> &mut Self {
        self.line(format!("{left} = {right}"))
    }

    /// Add `left := right`.
    pub fn declare_assign(&mut self, left: &str, right: &str) -> &mut Self {
        self.line(format!("{left} := {right}"))
    }

    /// Add a single `const name = value`.
    pub fn const_decl(&mut self, name: &str, value: &str) -> &mut Self {
        self.line(format!("const {name} = {value}"))
    }

    /// Add a single `var name type`, initialized when a value is given.
    pub fn var_decl(&mut self, name: &str, ty: &str, value: Option<&str>) -> &mut Self {
        match value {
            Some(value) => self.line(format!("var {name} {ty} = {value}")),
            None => self.line(format!("var {name} {ty}")),
        }
    }

    /// Add `type name = type`.
    pub fn type_alias(&mut self, name: &str, ty: &str) -> &mut Self {
        self.line(format!("type {name} = {ty}"))
    }

    /// Add an `if` block.
    pub fn if_block<F>(&mut self, condition: &str, body: F) -> &mut Self
    where
        F: FnOnce(&mut CodeBuilder),
    {
        self.block(format!("if {condition}"), body)
    }

    /// Add an `if err != nil` block.
    pub fn if_err<F>(&mut self, body: F) -> &mut Self
    where
        F: FnOnce(&mut CodeBuilder),
    {
        self.if_block("err != nil", body)
    }

    /// Add a three-clause `for` loop; a bare `for` when every clause is empty.
    pub fn for_loop<F>(&mut self, init: &str, condition: &str, post: &str, body: F) -> &mut Self
    where
        F: FnOnce(&mut CodeBuilder),
    {
        let header = if init.is_empty() && condition.is_empty() && post.is_empty() {
            "for".to_string()
        } else {
            format!("for {init}; {condition}; {post}")
        };
        self.block(header, body)
    }

    /// Add a `for variable := range iterable` loop.
    pub fn for_range<F>(&mut self, variable: &str, iterable: &str, body: F) -> &mut Self
    where
        F: FnOnce(&mut CodeBuilder),
    {
        self.block(format!("for {variable} := range {iterable}"), body)
    }

    /// Add a backtick raw string literal on its own line.
    pub fn raw_string(&mut self, content: &str) -> &mut Self {
        self.line(format!("`{content}`"))
    }

    /// Add a `//go:build` constraint.
    pub fn build_tag(&mut self, constraint: &str) -> &mut Self {
        self.line(format!("//go:build {constraint}"))
    }

    /// Add a `//go:generate` directive.
    pub fn go_generate(&mut self, command: &str) -> &mut Self {
        self.line(format!("//go:generate {command}"))
    }
}
