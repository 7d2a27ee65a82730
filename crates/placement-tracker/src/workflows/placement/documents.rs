use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Supported hiring-document container formats. Anything else is a reported
/// error, never silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentFormat {
    pub fn from_extension(path: &Path) -> Result<Self, DocumentError> {
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(|extension| extension.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            "txt" | "text" => Ok(Self::PlainText),
            _ => Err(DocumentError::UnsupportedFormat(extension)),
        }
    }

    pub fn from_mime(essence: &str) -> Result<Self, DocumentError> {
        match essence {
            "application/pdf" => Ok(Self::Pdf),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Ok(Self::Docx)
            }
            "text/plain" => Ok(Self::PlainText),
            other => Err(DocumentError::UnsupportedFormat(other.to_string())),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
            DocumentFormat::PlainText => "plain_text",
        }
    }
}

/// Binary text extraction lives outside the core; implementations return
/// extracted UTF-8 text for a supported format.
pub trait DocumentSource: Send + Sync {
    fn read(&self, path: &Path, format: DocumentFormat) -> Result<String, DocumentError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),
    #[error("failed to read document: {0}")]
    Unreadable(String),
}

/// Read a document through the collaborator, degrading a read failure to an
/// empty string so extraction still yields the all-default criteria. Format
/// detection (and its unsupported-format error) is the caller's step.
pub fn load_document_text<D>(source: &D, path: &Path, format: DocumentFormat) -> String
where
    D: DocumentSource + ?Sized,
{
    match source.read(path, format) {
        Ok(text) => text.trim().to_string(),
        Err(error) => {
            warn!(
                %error,
                path = %path.display(),
                format = format.label(),
                "document text extraction failed, treating as empty"
            );
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn detects_supported_extensions() {
        assert_eq!(
            DocumentFormat::from_extension(Path::new("jd.PDF")).expect("pdf"),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_extension(Path::new("jd.docx")).expect("docx"),
            DocumentFormat::Docx
        );
        assert_eq!(
            DocumentFormat::from_extension(Path::new("jd.txt")).expect("txt"),
            DocumentFormat::PlainText
        );
    }

    #[test]
    fn unsupported_extension_is_an_error() {
        let error = DocumentFormat::from_extension(Path::new("jd.pages")).expect_err("unsupported");
        assert!(matches!(error, DocumentError::UnsupportedFormat(ext) if ext == "pages"));
    }

    struct BrokenSource;

    impl DocumentSource for BrokenSource {
        fn read(&self, _path: &Path, _format: DocumentFormat) -> Result<String, DocumentError> {
            Err(DocumentError::Unreadable("corrupt container".to_string()))
        }
    }

    #[test]
    fn read_failure_degrades_to_empty_text() {
        let text = load_document_text(
            &BrokenSource,
            &PathBuf::from("jd.pdf"),
            DocumentFormat::Pdf,
        );
        assert_eq!(text, "");
    }
}
