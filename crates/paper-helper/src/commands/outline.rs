//! Outline command.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use paper_helper_core::outline::build_outline;

use super::load_document;

/// Arguments for the `outline` subcommand.
#[derive(Args, Debug)]
pub struct OutlineArgs {
    /// File to outline.
    pub file: Utf8PathBuf,
}

/// Print the detected title, sections, and summary.
#[instrument(name = "cmd_outline", skip_all, fields(file = %args.file))]
pub fn cmd_outline(
    args: OutlineArgs,
    global_json: bool,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing outline command");

    let text = load_document(&args.file, max_input)?;
    let outline = build_outline(&text);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&outline)?);
        return Ok(());
    }

    println!("{}", outline.title.bold());
    println!(
        "{}",
        format!(
            "{} sections, {} paragraphs",
            outline.sections.len(),
            outline.paragraph_count
        )
        .dimmed()
    );
    for section in &outline.sections {
        let lines = section.content.lines().count();
        println!("  {} ({lines} lines)", section.title.cyan());
    }
    if !outline.summary.is_empty() {
        println!();
        println!("{}", "Summary".bold().underline());
        println!("{}", outline.summary);
    }

    Ok(())
}
