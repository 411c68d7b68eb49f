//! Core library for paper-helper.
//!
//! Heuristic scoring of academic paper drafts: section structure, citation
//! and vocabulary quality, writing style, communication-studies specialty,
//! and rule-based revision advice. Used by the `paper-helper` CLI and MCP
//! server.
//!
//! # Modules
//!
//! - [`analysis`] - Component scorers and the report assembler
//! - [`citations`] - Citation listing
//! - [`outline`] - Title and section detection
//! - [`formats`] - Input format detection and text preparation
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use paper_helper_core::{Analyzer, Variant};
//!
//! let report = Analyzer::with_variant(Variant::Baseline)
//!     .analyze("摘要\n关键词\n引言\n结论\n参考文献")
//!     .expect("non-empty input");
//! assert_eq!(report.structure_analysis.ok().map(|s| s.structure_score), Some(100));
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod citations;
pub mod config;
pub mod error;
pub mod formats;
pub mod lexicon;
pub mod markdown;
pub mod outline;
pub mod text;

pub use analysis::{
    AnalysisOutcome, AnalysisReport, Analyzer, AnalyzerSettings, ComponentResult, Variant,
};
pub use citations::{Citation, CitationKind, extract_citations};
pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use formats::{Capabilities, DocumentFormat};
pub use lexicon::ExtraTerms;
pub use outline::{Outline, OutlineSection, build_outline};
