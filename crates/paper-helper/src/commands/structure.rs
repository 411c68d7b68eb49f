//! Structure command: which canonical sections a paper contains.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use paper_helper_core::analysis::structure::{Section, analyze_structure};
use paper_helper_core::text::Document;

use super::{colored_score, load_document};

/// Arguments for the `structure` subcommand.
#[derive(Args, Debug)]
pub struct StructureArgs {
    /// File to check.
    pub file: Utf8PathBuf,

    /// Minimum acceptable structure score (0-100).
    #[arg(long)]
    pub min: Option<u32>,
}

/// Print the structural profile and apply the score gate.
#[instrument(name = "cmd_structure", skip_all, fields(file = %args.file))]
pub fn cmd_structure(
    args: StructureArgs,
    global_json: bool,
    config_min: Option<u32>,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, min = ?args.min, "executing structure command");

    let text = load_document(&args.file, max_input)?;
    let profile = analyze_structure(&Document::new(&text));

    if global_json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        println!(
            "{}: {}/100",
            args.file.bold(),
            colored_score(f64::from(profile.structure_score))
        );
        for section in Section::ALL {
            let status = if profile.has(section) {
                "PRESENT".green().to_string()
            } else {
                "MISSING".red().to_string()
            };
            println!(
                "  {status}  {} ({} / {}, {} points)",
                section.label(),
                section.localized_marker(),
                section.english_marker(),
                section.weight(),
            );
        }
    }

    let min = args.min.or(config_min);
    if let Some(min) = min
        && profile.structure_score < min
    {
        bail!(
            "{} structure score {} is below minimum {min}",
            args.file,
            profile.structure_score,
        );
    }

    Ok(())
}
