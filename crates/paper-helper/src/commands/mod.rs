//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use owo_colors::OwoColorize;

use paper_helper_core::AnalysisError;
use paper_helper_core::formats::{self, DocumentFormat};

pub mod analyze;
pub mod citations;
pub mod info;
pub mod outline;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod structure;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read a document and convert it to plain text according to its extension.
///
/// Unsupported formats fail before the file is read.
pub fn load_document(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let format = DocumentFormat::from_path(path);
    if !formats::Capabilities::detect().supports(format) {
        let err = AnalysisError::UnsupportedFormat {
            format: format.to_string(),
        };
        return Err(anyhow::Error::new(err).context(format!("cannot read {path}")));
    }
    let raw = read_input_file(path, max_bytes)?;
    formats::prepare_text(format, &raw).with_context(|| format!("cannot read {path}"))
}

/// Color a 0-100 score: green from 80, yellow from 60, red below.
pub(crate) fn colored_score(score: f64) -> String {
    let text = format!("{score:.1}");
    if score >= 80.0 {
        text.green().to_string()
    } else if score >= 60.0 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}
