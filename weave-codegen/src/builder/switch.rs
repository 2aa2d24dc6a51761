//! Switch statements.

use super::CodeBuilder;

impl CodeBuilder {
    /// Add a switch statement. An empty `expr` renders a bare `switch {`.
    ///
    /// The switch is an ordinary brace-delimited scope. Its `case` and
    /// `default` clauses sit one level inside it and their bodies one level
    /// deeper still, with no delimiters of their own.
    ///
    /// # Example
    ///
    /// ```
    /// use protoweave_codegen::CodeBuilder;
    ///
    /// let mut builder = CodeBuilder::go();
    /// builder.switch("kind", |s| {
    ///     s.case("1", |b| {
    ///         b.line("one()");
    ///     })
    ///     .default(|b| {
    ///         b.line("other()");
    ///     });
    /// });
    ///
    /// assert_eq!(
    ///     builder.build(),
    ///     "switch kind {\n\tcase 1:\n\t\tone()\n\tdefault:\n\t\tother()\n}\n"
    /// );
    /// ```
    pub fn switch<F>(&mut self, expr: &str, body: F) -> &mut Self
    where
        F: FnOnce(&mut SwitchBuilder<'_>),
    {
        let header = if expr.is_empty() {
            "switch {".to_string()
        } else {
            format!("switch {expr} {{")
        };
        self.enclosed(header, "}", |code| body(&mut SwitchBuilder { code }))
    }
}

/// Clauses of a switch statement.
#[derive(Debug)]
pub struct SwitchBuilder<'b> {
    code: &'b mut CodeBuilder,
}

impl SwitchBuilder<'_> {
    /// Add `case {value}:` followed by its body one level deeper.
    pub fn case<F>(&mut self, value: &str, body: F) -> &mut Self
    where
        F: FnOnce(&mut CodeBuilder),
    {
        self.clause(&format!("case {value}:"), body)
    }

    /// Add `default:` followed by its body one level deeper.
    pub fn default<F>(&mut self, body: F) -> &mut Self
    where
        F: FnOnce(&mut CodeBuilder),
    {
        self.clause("default:", body)
    }

    fn clause<F>(&mut self, label: &str, body: F) -> &mut Self
    where
        F: FnOnce(&mut CodeBuilder),
    {
        self.code.line(label);
        {
            let mut scope = self.code.scope();
            body(&mut *scope);
        }
        self
    }
}
