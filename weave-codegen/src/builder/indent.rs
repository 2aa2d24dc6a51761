//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// Tab indentation (Go).
    pub const GO: Self = Self::Tab;

    /// Prefix for a line nested `depth` levels deep.
    pub fn prefix(&self, depth: usize) -> String {
        match self {
            Self::Spaces(width) => " ".repeat(usize::from(*width) * depth),
            Self::Tab => "\t".repeat(depth),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::GO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_prefix() {
        assert_eq!(Indent::Spaces(2).prefix(1), "  ");
        assert_eq!(Indent::Spaces(4).prefix(2), "        ");
        assert_eq!(Indent::Spaces(3).prefix(1), "   ");
        assert_eq!(Indent::Tab.prefix(3), "\t\t\t");
    }

    #[test]
    fn test_zero_depth_has_no_prefix() {
        assert_eq!(Indent::Tab.prefix(0), "");
        assert_eq!(Indent::Spaces(4).prefix(0), "");
    }

    #[test]
    fn test_default_is_go_tab() {
        assert_eq!(Indent::GO, Indent::Tab);
        assert_eq!(Indent::default(), Indent::GO);
    }
}
