//! The contract between generated code and whatever consumes it.

/// A reference to an identifier that lives in some importable package.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImportIdent {
    /// Import path of the package that declares the identifier.
    pub import_path: String,
    /// The identifier itself. Empty when only the package qualifier is wanted.
    pub name: String,
}

impl ImportIdent {
    /// Create a reference to `name` declared in `import_path`.
    pub fn new(import_path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            import_path: import_path.into(),
            name: name.into(),
        }
    }

    /// Create a reference to a package as a whole.
    pub fn package(import_path: impl Into<String>) -> Self {
        Self::new(import_path, "")
    }
}

/// Consumer of emitted lines.
///
/// Implemented by generated output files and by [`MemorySink`] for tests.
pub trait OutputSink {
    /// Append one line made of `values` joined by a single space.
    ///
    /// Called with no values, writes a bare newline.
    fn write(&mut self, values: &[&str]);

    /// Resolve a cross-package identifier to the spelling used in this output.
    fn qualified_name(&mut self, ident: &ImportIdent) -> String;
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn write(&mut self, values: &[&str]) {
        (**self).write(values);
    }

    fn qualified_name(&mut self, ident: &ImportIdent) -> String {
        (**self).qualified_name(ident)
    }
}

/// Render sink values the way [`OutputSink::write`] describes.
pub fn join_values(values: &[&str]) -> String {
    values.join(" ")
}

/// In-memory sink that records everything written to it.
///
/// Identifiers are never qualified: `qualified_name` returns the bare name.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    buffer: String,
    writes: usize,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Number of `write` calls received.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Consume the sink and return its contents.
    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl OutputSink for MemorySink {
    fn write(&mut self, values: &[&str]) {
        self.writes += 1;
        self.buffer.push_str(&join_values(values));
        self.buffer.push('\n');
    }

    fn qualified_name(&mut self, ident: &ImportIdent) -> String {
        ident.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_joins_values() {
        let mut sink = MemorySink::new();
        sink.write(&["type", "Foo", "struct"]);
        sink.write(&[]);
        sink.write(&["}"]);

        assert_eq!(sink.contents(), "type Foo struct\n\n}\n");
        assert_eq!(sink.writes(), 3);
    }

    #[test]
    fn test_memory_sink_returns_bare_names() {
        let mut sink = MemorySink::new();
        let ident = ImportIdent::new("google.golang.org/grpc", "ClientConn");
        assert_eq!(sink.qualified_name(&ident), "ClientConn");
    }

    #[test]
    fn test_sink_through_mut_reference() {
        fn emit(mut sink: impl OutputSink) {
            sink.write(&["hello"]);
        }

        let mut sink = MemorySink::new();
        emit(&mut sink);
        assert_eq!(sink.into_string(), "hello\n");
    }

    #[test]
    fn test_package_ident() {
        let ident = ImportIdent::package("fmt");
        assert_eq!(ident.import_path, "fmt");
        assert!(ident.name.is_empty());
    }
}
