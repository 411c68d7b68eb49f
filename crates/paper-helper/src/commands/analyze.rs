//! Analyze command: full report for one or more documents.

use anyhow::bail;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use paper_helper_core::analysis::structure::Section;
use paper_helper_core::{AnalysisOutcome, AnalysisReport, Analyzer, ComponentResult, Config, Variant};

use super::{colored_score, load_document};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Files to analyze (.txt or .md).
    #[arg(required = true)]
    pub files: Vec<Utf8PathBuf>,

    /// Analyzer variant. Defaults to the configured variant.
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// Minimum acceptable structure score (0-100).
    #[arg(long)]
    pub structure_min: Option<u32>,

    /// Minimum acceptable overall quality score (0-100).
    #[arg(long)]
    pub quality_min: Option<f64>,
}

#[derive(Serialize)]
struct FileOutcome<'a> {
    file: &'a Utf8Path,
    #[serde(flatten)]
    outcome: &'a AnalysisOutcome,
}

/// Score thresholds that fail the command.
#[derive(Debug, Clone, Copy, Default)]
struct Gates {
    structure_min: Option<u32>,
    quality_min: Option<f64>,
}

impl Gates {
    /// Describe every gate `report` fails.
    fn violations(self, report: &AnalysisReport) -> Vec<String> {
        let mut out = Vec::new();
        if let (Some(min), Some(s)) = (self.structure_min, report.structure_analysis.ok())
            && s.structure_score < min
        {
            out.push(format!(
                "structure score {} is below minimum {min}",
                s.structure_score
            ));
        }
        if let (Some(min), Some(q)) = (self.quality_min, report.academic_quality.ok())
            && q.overall_quality_score < min
        {
            out.push(format!(
                "quality score {:.1} is below minimum {min:.1}",
                q.overall_quality_score
            ));
        }
        out
    }
}

/// Analyze each file and print its report.
///
/// Every file is analyzed before any gate is applied, so one bad document
/// does not hide the others.
#[instrument(name = "cmd_analyze", skip_all, fields(files = args.files.len()))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let settings = config.analyzer_settings(args.variant);
    debug!(variant = %settings.variant, "executing analyze command");
    let analyzer = Analyzer::new(settings);
    let gates = Gates {
        structure_min: args.structure_min.or(config.structure_min_score),
        quality_min: args.quality_min.or(config.quality_min_score),
    };

    let progress = (!global_json && args.files.len() > 1).then(|| {
        let pb = ProgressBar::new(args.files.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb
    });

    let mut outcomes = Vec::with_capacity(args.files.len());
    for file in &args.files {
        if let Some(ref pb) = progress {
            pb.set_message(file.to_string());
        }
        let text = load_document(file, max_input)?;
        outcomes.push(analyzer.analyze_outcome(&text));
        if let Some(ref pb) = progress {
            pb.inc(1);
        }
    }
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    if global_json {
        let rendered: Vec<FileOutcome<'_>> = args
            .files
            .iter()
            .zip(&outcomes)
            .map(|(file, outcome)| FileOutcome { file, outcome })
            .collect();
        if let [single] = rendered.as_slice() {
            println!("{}", serde_json::to_string_pretty(single.outcome)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&rendered)?);
        }
    } else {
        for (file, outcome) in args.files.iter().zip(&outcomes) {
            print_outcome(file, outcome);
        }
    }

    let mut failures = Vec::new();
    for (file, outcome) in args.files.iter().zip(&outcomes) {
        match outcome {
            AnalysisOutcome::Report(report) => {
                failures.extend(gates.violations(report).into_iter().map(|v| format!("{file}: {v}")));
            }
            AnalysisOutcome::Error { error } => failures.push(format!("{file}: {error}")),
        }
    }
    if !failures.is_empty() {
        bail!("{}", failures.join("; "));
    }

    Ok(())
}

fn print_outcome(file: &Utf8Path, outcome: &AnalysisOutcome) {
    println!("{}", file.bold());
    match outcome {
        AnalysisOutcome::Report(report) => print_report(report),
        AnalysisOutcome::Error { error } => println!("  {} {error}", "Error:".red()),
    }
    println!();
}

fn print_report(report: &AnalysisReport) {
    let b = &report.basic_stats;
    println!(
        "  {} {} characters, {} words, {} sentences, {} paragraphs, ~{:.1} min read",
        "Basic:".cyan(),
        b.total_characters,
        b.total_words,
        b.total_sentences,
        b.total_paragraphs,
        b.reading_time_minutes,
    );

    print_component("Structure:", &report.structure_analysis, |s| {
        let missing: Vec<&str> = s.missing().into_iter().map(Section::label).collect();
        let missing = if missing.is_empty() {
            "all sections present".to_string()
        } else {
            format!("missing {}", missing.join(", "))
        };
        format!(
            "{}/100, {missing}",
            colored_score(f64::from(s.structure_score))
        )
    });

    print_component("Quality:", &report.academic_quality, |q| {
        format!(
            "{}/100, {} citations, formal {}, academic terms {}",
            colored_score(q.overall_quality_score),
            q.citation_count,
            q.formal_language_score,
            q.academic_terms_score,
        )
    });

    print_component("Style:", &report.writing_style, |s| {
        format!(
            "complexity {:.1}, diversity {:.2}, formality {}, clarity {}",
            s.sentence_complexity, s.vocabulary_diversity, s.tone_formality, s.clarity_score,
        )
    });

    if let Some(ref specialty) = report.communication_analysis {
        print_component("Communication:", specialty, |c| {
            format!(
                "{}/100 (theory {}, method {}, industry {}, social {}, innovation {})",
                colored_score(c.overall_specialty_score),
                c.theory_application,
                c.method_appropriateness,
                c.industry_relevance,
                c.social_value,
                c.innovation_score,
            )
        });
    }

    if !report.recommendations.is_empty() {
        println!("  {}", "Recommendations:".cyan());
        for rec in &report.recommendations {
            println!("    - {rec}");
        }
    }
}

fn print_component<T>(label: &str, result: &ComponentResult<T>, render: impl FnOnce(&T) -> String) {
    match result {
        ComponentResult::Ok(profile) => println!("  {} {}", label.cyan(), render(profile)),
        ComponentResult::Failed { error } => {
            println!("  {} {} {error}", label.cyan(), "failed:".red());
        }
    }
}
