//! Input format detection and plain-text preparation.
//!
//! Only text and markdown are read directly. PDF, Word and image inputs need
//! an external extractor and are rejected before analysis.

use std::sync::OnceLock;

use camino::Utf8Path;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::markdown;

/// Document format, detected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// Plain text. Also used for unknown or missing extensions.
    Text,
    /// CommonMark.
    Markdown,
    /// PDF.
    Pdf,
    /// Word `.docx`.
    Docx,
    /// Scanned page image.
    Image,
}

impl DocumentFormat {
    /// All formats.
    pub const ALL: [Self; 5] = [
        Self::Text,
        Self::Markdown,
        Self::Pdf,
        Self::Docx,
        Self::Image,
    ];

    /// Detect a format from a path's extension, case-insensitively.
    pub fn from_path(path: &Utf8Path) -> Self {
        path.extension().map_or(Self::Text, Self::from_extension)
    }

    /// Detect a format from a bare extension (no leading dot).
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "md" | "markdown" => Self::Markdown,
            "pdf" => Self::Pdf,
            "docx" => Self::Docx,
            "png" | "jpg" | "jpeg" | "bmp" | "tiff" => Self::Image,
            _ => Self::Text,
        }
    }

    /// Lowercase format name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Markdown => "markdown",
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Image => "image",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which formats this build can turn into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Capabilities {
    /// Plain text input.
    pub text: bool,
    /// Markdown input.
    pub markdown: bool,
    /// PDF text extraction.
    pub pdf: bool,
    /// Word document extraction.
    pub docx: bool,
    /// OCR on images.
    pub image: bool,
}

static CAPABILITIES: OnceLock<Capabilities> = OnceLock::new();

impl Capabilities {
    /// Capabilities of this build, resolved on first call.
    pub fn detect() -> Self {
        *CAPABILITIES.get_or_init(|| {
            let caps = Self {
                text: true,
                markdown: true,
                pdf: false,
                docx: false,
                image: false,
            };
            tracing::debug!(?caps, "format capabilities resolved");
            caps
        })
    }

    /// Whether `format` can be read.
    pub const fn supports(&self, format: DocumentFormat) -> bool {
        match format {
            DocumentFormat::Text => self.text,
            DocumentFormat::Markdown => self.markdown,
            DocumentFormat::Pdf => self.pdf,
            DocumentFormat::Docx => self.docx,
            DocumentFormat::Image => self.image,
        }
    }
}

/// Turn raw file contents into analyzable plain text.
///
/// Fails with [`AnalysisError::UnsupportedFormat`] when the format cannot be
/// read by this build.
#[tracing::instrument(skip(raw), fields(raw_len = raw.len()))]
pub fn prepare_text(format: DocumentFormat, raw: &str) -> AnalysisResult<String> {
    if !Capabilities::detect().supports(format) {
        return Err(AnalysisError::UnsupportedFormat {
            format: format.to_string(),
        });
    }
    Ok(match format {
        DocumentFormat::Markdown => markdown::to_plain_text(raw),
        _ => raw.to_string(),
    })
}
