//! Output files produced by generators.

use indexmap::IndexMap;
use prost_types::compiler::code_generator_response;
use protoweave_core::{ImportIdent, OutputSink, join_values, sanitize_ident};

/// One file of the plugin response.
///
/// Lines are appended through [`OutputSink`]. Identifiers from other import
/// paths are qualified with a package alias and the import is recorded so
/// [`render`](Self::render) can emit it.
///
/// # Example
///
/// ```
/// use protoweave_core::{ImportIdent, OutputSink};
/// use protoweave_plugin::GeneratedFile;
///
/// let mut file = GeneratedFile::new("order.pb.go", "example.com/shop");
/// file.write(&["package", "shop"]);
/// file.write(&[]);
/// let println = file.qualified_name(&ImportIdent::new("fmt", "Println"));
/// file.write(&[&format!("var _ = {println}")]);
///
/// assert_eq!(
///     file.render(),
///     "package shop\n\nimport (\n\t\"fmt\"\n)\n\nvar _ = fmt.Println\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    name: String,
    import_path: String,
    body: String,
    /// Import path to alias, in first-use order.
    imports: IndexMap<String, String>,
}

impl GeneratedFile {
    /// Create an empty file. `import_path` is the package the file belongs
    /// to; identifiers from it are never qualified.
    pub fn new(name: impl Into<String>, import_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            import_path: import_path.into(),
            body: String::new(),
            imports: IndexMap::new(),
        }
    }

    /// Output path relative to the `protoc` output directory.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn import_path(&self) -> &str {
        &self.import_path
    }

    /// Everything written so far, without the import block.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Registered imports as `(path, alias)` pairs.
    pub fn imports(&self) -> impl Iterator<Item = (&str, &str)> {
        self.imports
            .iter()
            .map(|(path, alias)| (path.as_str(), alias.as_str()))
    }

    /// Register `import_path` and return its alias.
    ///
    /// The alias is the sanitized last path segment, numbered when another
    /// import already uses it.
    pub fn add_import(&mut self, import_path: &str) -> String {
        if let Some(alias) = self.imports.get(import_path) {
            return alias.clone();
        }

        let last = import_path.rsplit('/').next().unwrap_or(import_path);
        let base = sanitize_ident(last);
        let mut alias = base.clone();
        let mut n = 1;
        while self.imports.values().any(|taken| *taken == alias) {
            alias = format!("{base}{n}");
            n += 1;
        }

        self.imports.insert(import_path.to_string(), alias.clone());
        alias
    }

    /// Full file contents with an `import (...)` block after the package
    /// clause. Without a package clause the block goes first.
    pub fn render(&self) -> String {
        if self.imports.is_empty() {
            return self.body.clone();
        }

        let mut block = String::from("import (\n");
        for (path, alias) in &self.imports {
            let default_alias = sanitize_ident(path.rsplit('/').next().unwrap_or(path));
            if *alias == default_alias {
                block.push_str(&format!("\t\"{path}\"\n"));
            } else {
                block.push_str(&format!("\t{alias} \"{path}\"\n"));
            }
        }
        block.push_str(")\n");

        let mut offset = 0;
        let mut package_end = None;
        for line in self.body.split_inclusive('\n') {
            offset += line.len();
            if line.starts_with("package ") {
                package_end = Some(offset);
                break;
            }
        }

        match package_end {
            Some(end) => {
                let (head, tail) = self.body.split_at(end);
                let gap = if tail.is_empty() || tail.starts_with('\n') { "" } else { "\n" };
                format!("{head}\n{block}{gap}{tail}")
            }
            None => format!("{block}\n{}", self.body),
        }
    }

    /// Convert into a response file entry.
    pub fn into_response_file(self) -> code_generator_response::File {
        let content = self.render();
        code_generator_response::File {
            name: Some(self.name),
            content: Some(content),
            ..Default::default()
        }
    }
}

impl OutputSink for GeneratedFile {
    fn write(&mut self, values: &[&str]) {
        self.body.push_str(&join_values(values));
        self.body.push('\n');
    }

    fn qualified_name(&mut self, ident: &ImportIdent) -> String {
        if ident.import_path.is_empty() || ident.import_path == self.import_path {
            return ident.name.clone();
        }
        let alias = self.add_import(&ident.import_path);
        format!("{alias}.{}", ident.name)
    }
}
