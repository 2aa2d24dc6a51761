//! Struct and interface bodies.

use super::CodeBuilder;

impl CodeBuilder {
    /// Add a struct type definition: `type {name} struct {` ... `}`.
    ///
    /// # Example
    ///
    /// ```
    /// use protoweave_codegen::CodeBuilder;
    ///
    /// let mut builder = CodeBuilder::go();
    /// builder.struct_type("Point", |s| {
    ///     s.field("X", "int").field("Y", "int");
    /// });
    ///
    /// assert_eq!(builder.build(), "type Point struct {\n\tX int\n\tY int\n}\n");
    /// ```
    pub fn struct_type<F>(&mut self, name: &str, body: F) -> &mut Self
    where
        F: FnOnce(&mut StructBuilder<'_>),
    {
        self.enclosed(format!("type {name} struct {{"), "}", |code| {
            body(&mut StructBuilder { code });
        })
    }

    /// Add an interface type definition: `type {name} interface {` ... `}`.
    pub fn interface_type<F>(&mut self, name: &str, body: F) -> &mut Self
    where
        F: FnOnce(&mut InterfaceBuilder<'_>),
    {
        self.enclosed(format!("type {name} interface {{"), "}", |code| {
            body(&mut InterfaceBuilder { code });
        })
    }
}

/// Body of a struct definition.
#[derive(Debug)]
pub struct StructBuilder<'b> {
    code: &'b mut CodeBuilder,
}

impl StructBuilder<'_> {
    /// Add a `name type` field.
    pub fn field(&mut self, name: &str, ty: &str) -> &mut Self {
        self.code.line(format!("{name} {ty}"));
        self
    }

    /// Add a field with struct tags, joined by a space inside backticks.
    ///
    /// An empty tag list renders the same as [`field`](Self::field).
    pub fn tagged_field<S: AsRef<str>>(&mut self, name: &str, ty: &str, tags: &[S]) -> &mut Self {
        if tags.is_empty() {
            return self.field(name, ty);
        }
        let tags: Vec<&str> = tags.iter().map(AsRef::as_ref).collect();
        self.code.line(format!("{name} {ty} `{}`", tags.join(" ")));
        self
    }

    /// Add an embedded field.
    pub fn embedded(&mut self, ty: &str) -> &mut Self {
        self.code.line(ty);
        self
    }

    /// Add a comment line inside the struct body.
    pub fn comment(&mut self, text: &str) -> &mut Self {
        self.code.comment(text);
        self
    }
}

/// Body of an interface definition.
#[derive(Debug)]
pub struct InterfaceBuilder<'b> {
    code: &'b mut CodeBuilder,
}

impl InterfaceBuilder<'_> {
    /// Add a method signature. `returns` is omitted when empty.
    pub fn method(&mut self, name: &str, params: &str, returns: &str) -> &mut Self {
        let mut signature = format!("{name}({params})");
        if !returns.is_empty() {
            signature.push(' ');
            signature.push_str(returns);
        }
        self.code.line(signature);
        self
    }

    /// Add an embedded interface.
    pub fn embedded(&mut self, ty: &str) -> &mut Self {
        self.code.line(ty);
        self
    }
}
