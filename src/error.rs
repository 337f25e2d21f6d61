//! Error types for reading and writing `.docx` packages.
//!
//! The document layer reports typed errors so callers can tell an I/O
//! failure apart from a malformed package. The application layer wraps
//! these in `anyhow` with path context.

use thiserror::Error;

/// Result type for document operations
pub type DocxResult<T> = Result<T, DocxError>;

#[derive(Debug, Error)]
pub enum DocxError {
    /// Filesystem failure while creating, writing or renaming the package
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP container could not be written or read
    #[error("zip container error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// XML part could not be serialized or parsed
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Text inside a part was not valid UTF-8
    #[error("invalid utf-8 in package: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// A part required by the package layout is absent
    #[error("package is missing required part '{part}'")]
    MissingPart { part: String },

    /// A paragraph references a style this crate does not produce
    #[error("paragraph uses unsupported style '{style}'")]
    UnknownStyle { style: String },

    /// Text holds a character XML 1.0 cannot carry, or a bare carriage return
    #[error("text contains character U+{code:04X} that cannot be stored in a document")]
    InvalidText { code: u32 },

    /// Heading levels are limited to 0 (title) through 9
    #[error("heading level {level} is outside valid range [0, 9]")]
    InvalidHeadingLevel { level: u8 },
}

impl DocxError {
    pub fn missing_part(part: impl Into<String>) -> Self {
        DocxError::MissingPart { part: part.into() }
    }

    /// Short machine-readable label, used as a structured log field.
    pub fn category(&self) -> &'static str {
        match self {
            DocxError::Io(_) => "io_error",
            DocxError::Zip(_) | DocxError::Xml(_) | DocxError::Utf8(_) => "format_error",
            DocxError::MissingPart { .. } | DocxError::UnknownStyle { .. } => "malformed_package",
            DocxError::InvalidText { .. } | DocxError::InvalidHeadingLevel { .. } => {
                "validation_error"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let io = DocxError::from(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert_eq!(io.category(), "io_error");
        assert_eq!(
            DocxError::missing_part("word/document.xml").category(),
            "malformed_package"
        );
        assert_eq!(
            DocxError::InvalidHeadingLevel { level: 12 }.category(),
            "validation_error"
        );
    }

    #[test]
    fn test_error_messages() {
        let err = DocxError::missing_part("word/document.xml");
        assert_eq!(
            err.to_string(),
            "package is missing required part 'word/document.xml'"
        );

        let err = DocxError::UnknownStyle {
            style: "Quote".to_string(),
        };
        assert_eq!(err.to_string(), "paragraph uses unsupported style 'Quote'");

        let err = DocxError::InvalidText { code: 0x1 };
        assert_eq!(
            err.to_string(),
            "text contains character U+0001 that cannot be stored in a document"
        );
        assert_eq!(err.category(), "validation_error");
    }
}
