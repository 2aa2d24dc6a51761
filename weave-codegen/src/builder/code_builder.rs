//! Line accumulator with an explicit indentation depth.

use std::ops::{Deref, DerefMut};

use protoweave_core::OutputSink;

use super::Indent;

/// Fluent API for building code with proper indentation.
///
/// Lines are rendered with their indentation prefix when appended and kept
/// in insertion order. Nesting never creates a second buffer: a scope only
/// raises the depth of the single builder for as long as its body runs.
///
/// # Example
///
/// ```
/// use protoweave_codegen::CodeBuilder;
///
/// let mut builder = CodeBuilder::go();
/// builder.block("func main()", |b| {
///     b.line("fmt.Println(\"Hello, world!\")");
/// });
///
/// assert_eq!(builder.build(), "func main() {\n\tfmt.Println(\"Hello, world!\")\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    depth: usize,
    indent: Indent,
    lines: Vec<String>,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            lines: Vec::new(),
        }
    }

    /// Create a new CodeBuilder with tab indentation (Go default).
    pub fn go() -> Self {
        Self::new(Indent::GO)
    }

    /// Add a line of code with current indentation.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let rendered = format!("{}{}", self.indent.prefix(self.depth), text.as_ref());
        self.lines.push(rendered);
        self
    }

    /// Add a blank line. Blank lines never carry indentation.
    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    /// Raise the depth by one until the returned guard is dropped.
    ///
    /// The guard derefs to the builder, so lines written through it land one
    /// level deeper.
    pub fn scope(&mut self) -> Scope<'_> {
        Scope::enter(self)
    }

    /// Emit `header`, run `body` one level deeper, then emit `close`.
    ///
    /// Every block-shaped construct of the builder is this call with a
    /// different header and closing line.
    pub fn enclosed<F>(&mut self, header: impl AsRef<str>, close: impl AsRef<str>, body: F) -> &mut Self
    where
        F: FnOnce(&mut CodeBuilder),
    {
        self.line(header);
        {
            let mut scope = self.scope();
            body(&mut *scope);
        }
        self.line(close)
    }

    /// Like [`enclosed`](Self::enclosed) with a body that can fail.
    ///
    /// On error the depth is restored, no closing line is written and the
    /// error is returned. Lines the body wrote before failing stay in the
    /// buffer.
    pub fn try_enclosed<E, F>(
        &mut self,
        header: impl AsRef<str>,
        close: impl AsRef<str>,
        body: F,
    ) -> Result<&mut Self, E>
    where
        F: FnOnce(&mut CodeBuilder) -> Result<(), E>,
    {
        self.line(header);
        {
            let mut scope = self.scope();
            body(&mut *scope)?;
        }
        Ok(self.line(close))
    }

    /// Add a brace-delimited block: `{header} {` ... `}`.
    ///
    /// # Example
    ///
    /// ```
    /// use protoweave_codegen::CodeBuilder;
    ///
    /// let mut builder = CodeBuilder::go();
    /// builder.block("if ok", |b| {
    ///     b.line("return");
    /// });
    ///
    /// assert_eq!(builder.build(), "if ok {\n\treturn\n}\n");
    /// ```
    pub fn block<F>(&mut self, header: impl AsRef<str>, body: F) -> &mut Self
    where
        F: FnOnce(&mut CodeBuilder),
    {
        self.enclosed(format!("{} {{", header.as_ref()), "}", body)
    }

    /// Fallible variant of [`block`](Self::block).
    pub fn try_block<E, F>(&mut self, header: impl AsRef<str>, body: F) -> Result<&mut Self, E>
    where
        F: FnOnce(&mut CodeBuilder) -> Result<(), E>,
    {
        self.try_enclosed(format!("{} {{", header.as_ref()), "}", body)
    }

    /// Conditionally add content.
    pub fn when<F>(&mut self, condition: bool, body: F) -> &mut Self
    where
        F: FnOnce(&mut CodeBuilder),
    {
        if condition {
            body(self);
        }
        self
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(&mut self, items: I, mut body: F) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&mut CodeBuilder, T),
    {
        for item in items {
            body(self, item);
        }
        self
    }

    /// Write every accumulated line, in order, as one `write` call each.
    pub fn flush(&self, sink: &mut impl OutputSink) {
        for line in &self.lines {
            sink.write(&[line.as_str()]);
        }
    }

    /// Get the current indentation depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Get the indentation style.
    pub fn indent(&self) -> Indent {
        self.indent
    }

    /// Lines accumulated so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines accumulated so far.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if no line has been written yet.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render the accumulated lines, each terminated by a newline.
    pub fn build(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::go()
    }
}

/// One extra indentation level on a [`CodeBuilder`].
///
/// Created by [`CodeBuilder::scope`]; the depth drops back when the guard
/// goes out of scope, whichever way the enclosing code exits.
#[derive(Debug)]
pub struct Scope<'b> {
    builder: &'b mut CodeBuilder,
}

impl<'b> Scope<'b> {
    fn enter(builder: &'b mut CodeBuilder) -> Self {
        builder.depth += 1;
        Self { builder }
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        self.builder.depth -= 1;
    }
}

impl Deref for Scope<'_> {
    type Target = CodeBuilder;

    fn deref(&self) -> &CodeBuilder {
        self.builder
    }
}

impl DerefMut for Scope<'_> {
    fn deref_mut(&mut self) -> &mut CodeBuilder {
        self.builder
    }
}
