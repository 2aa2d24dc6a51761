//! Plugin options and the `protoc` parameter string.
//!
//! `protoc` forwards everything after `--<name>_opt=` as one string of
//! comma-separated `key=value` pairs. Bare keys are boolean flags.

use indexmap::IndexMap;

/// Raw parameters in first-seen key order. Later duplicates overwrite.
pub type Parameters = IndexMap<String, String>;

/// Effective configuration of a plugin run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Emit per-file dispatch and [`Context::debug`](crate::Context::debug)
    /// events.
    pub debug: bool,
    /// Schema package to target package overrides, e.g. `foo.bar` to `mypkg`.
    pub package_mapping: IndexMap<String, String>,
    /// Extension appended to output file names that lack it.
    pub file_extension: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            debug: false,
            package_mapping: IndexMap::new(),
            file_extension: ".go".to_string(),
        }
    }
}

impl Options {
    /// Apply the recognized keys of a parameter string.
    ///
    /// `debug` accepts `true` or `1`. Every `package_mapping=src:dst` adds
    /// one entry; values without a `:` are ignored. Other keys are left to
    /// the parameter handler.
    pub fn apply_parameters(&mut self, raw: &str) {
        for (key, value) in pairs(raw) {
            match key {
                "debug" => self.debug = value == "true" || value == "1",
                "package_mapping" => {
                    if let Some((source, target)) = value.split_once(':') {
                        self.package_mapping
                            .insert(source.to_string(), target.to_string());
                    }
                }
                _ => {}
            }
        }
    }
}

/// Parse a parameter string into the raw parameter map.
///
/// # Example
///
/// ```
/// use protoweave_plugin::parse_parameters;
///
/// let params = parse_parameters("paths=source_relative, verbose");
/// assert_eq!(params.get("paths").map(String::as_str), Some("source_relative"));
/// assert_eq!(params.get("verbose").map(String::as_str), Some("true"));
/// ```
pub fn parse_parameters(raw: &str) -> Parameters {
    pairs(raw)
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

fn pairs(raw: &str) -> impl Iterator<Item = (&str, &str)> {
    raw.split(',').filter_map(|token| {
        let (key, value) = match token.split_once('=') {
            Some((key, value)) => (key.trim(), value.trim()),
            None => (token.trim(), "true"),
        };
        (!key.is_empty()).then_some((key, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_and_package_mapping() {
        let raw = "debug=true,package_mapping=foo.bar:mypkg,custom=value";
        let params = parse_parameters(raw);
        let mut options = Options::default();
        options.apply_parameters(raw);

        assert!(options.debug);
        assert_eq!(
            options.package_mapping.get("foo.bar").map(String::as_str),
            Some("mypkg")
        );
        assert_eq!(options.package_mapping.len(), 1);
        assert_eq!(params.get("custom").map(String::as_str), Some("value"));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_package_mapping_accumulates() {
        let mut options = Options::default();
        options.apply_parameters("package_mapping=a.b:ab,package_mapping=c:cpkg,package_mapping=bad");

        let mapping: Vec<_> = options
            .package_mapping
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(mapping, [("a.b", "ab"), ("c", "cpkg")]);
    }

    #[test]
    fn test_debug_values() {
        for (raw, expected) in [
            ("debug=1", true),
            ("debug", true),
            ("debug=yes", false),
            ("debug=true,debug=false", false),
            ("", false),
        ] {
            let mut options = Options::default();
            options.apply_parameters(raw);
            assert_eq!(options.debug, expected, "parameters {raw:?}");
        }
    }

    #[test]
    fn test_whitespace_and_empty_tokens() {
        let params = parse_parameters(" a = 1 ,, b=x=y , flag ,");
        let collected: Vec<_> = params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(collected, [("a", "1"), ("b", "x=y"), ("flag", "true")]);
    }

    #[test]
    fn test_duplicate_keys_keep_first_position() {
        let params = parse_parameters("a=1,b=2,a=3");
        let collected: Vec<_> = params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(collected, [("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_default_options() {
        let options = Options::default();
        assert!(!options.debug);
        assert!(options.package_mapping.is_empty());
        assert_eq!(options.file_extension, ".go");
    }
}
