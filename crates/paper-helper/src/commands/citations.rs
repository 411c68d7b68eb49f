//! Citations command.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use paper_helper_core::citations::{CitationKind, extract_citations};

use super::load_document;

/// Arguments for the `citations` subcommand.
#[derive(Args, Debug)]
pub struct CitationsArgs {
    /// File to scan.
    pub file: Utf8PathBuf,
}

/// List candidate citations found in a file.
#[instrument(name = "cmd_citations", skip_all, fields(file = %args.file))]
pub fn cmd_citations(
    args: CitationsArgs,
    global_json: bool,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing citations command");

    let text = load_document(&args.file, max_input)?;
    let citations = extract_citations(&text);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&citations)?);
        return Ok(());
    }

    println!("{}: {} citations", args.file.bold(), citations.len());
    for c in &citations {
        let (open, close) = match c.kind {
            CitationKind::Parenthesized => ("(", ")"),
            CitationKind::Bracketed => ("[", "]"),
            CitationKind::FullWidthParenthesized => ("（", "）"),
            CitationKind::FullWidthBracketed => ("【", "】"),
        };
        println!(
            "  {} {open}{}{close}",
            format!("@{}", c.offset).dimmed(),
            c.text
        );
    }

    Ok(())
}
