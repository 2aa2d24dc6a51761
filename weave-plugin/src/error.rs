use miette::Diagnostic;
use thiserror::Error;

/// Result type for plugin operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Boxed error returned by a generator callback.
pub type GeneratorError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("generator failed for {path}: {source}")]
    #[diagnostic(
        code(protoweave::generator_failed),
        help("the generator registered for this file returned an error")
    )]
    Generator {
        path: String,
        #[source]
        source: GeneratorError,
    },

    #[error("failed to decode CodeGeneratorRequest")]
    #[diagnostic(
        code(protoweave::decode_error),
        help("protoweave plugins must be invoked by protoc, which writes the request to stdin")
    )]
    Decode {
        #[source]
        source: prost::DecodeError,
    },

    #[error("failed to encode CodeGeneratorResponse")]
    #[diagnostic(code(protoweave::encode_error))]
    Encode {
        #[source]
        source: prost::EncodeError,
    },

    #[error("plugin I/O failed")]
    #[diagnostic(code(protoweave::io_error))]
    Io {
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Wrap a generator failure with the path of the file being generated.
    pub fn generator(path: impl Into<String>, source: eyre::Report) -> Box<Self> {
        Box::new(Error::Generator {
            path: path.into(),
            source: source.into(),
        })
    }

    /// Path of the file whose generator failed, if this is a generator error.
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::Generator { path, .. } => Some(path),
            _ => None,
        }
    }
}

impl From<prost::DecodeError> for Box<Error> {
    fn from(source: prost::DecodeError) -> Self {
        Box::new(Error::Decode { source })
    }
}

impl From<prost::EncodeError> for Box<Error> {
    fn from(source: prost::EncodeError) -> Self {
        Box::new(Error::Encode { source })
    }
}

impl From<std::io::Error> for Box<Error> {
    fn from(source: std::io::Error) -> Self {
        Box::new(Error::Io { source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_error_message() {
        let err = Error::generator("shop/order.proto", eyre::eyre!("unsupported field"));
        assert_eq!(
            err.to_string(),
            "generator failed for shop/order.proto: unsupported field"
        );
        assert_eq!(err.path(), Some("shop/order.proto"));
    }

    #[test]
    fn test_source_is_kept() {
        let err = Error::generator("a.proto", eyre::eyre!("boom"));
        let source = std::error::Error::source(&*err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("boom"));
    }

    #[test]
    fn test_io_error_has_no_path() {
        let err: Box<Error> = std::io::Error::other("closed pipe").into();
        assert!(matches!(*err, Error::Io { .. }));
        assert_eq!(err.path(), None);
    }
}
