//! Batch processing command for multiple recognized-text files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use bcard_core::{CardParser, ParsedCard, RuleCardParser};

use super::process::{csv_row, format_card, load_config, OutputFormat, CSV_HEADER};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV of all contacts
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|entry| entry.ok())
        .filter(|path| {
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            ext.eq_ignore_ascii_case("txt")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let parser = RuleCardParser::from_config(&config.extraction);
    let mut cards: Vec<(PathBuf, ParsedCard)> = Vec::new();
    let mut failures = 0usize;

    for path in &files {
        progress.set_message(path.display().to_string());

        match fs::read_to_string(path) {
            Ok(text) => {
                let result = parser.parse_text(&text);
                debug!(
                    "parsed {}: {} warnings",
                    path.display(),
                    result.warnings.len()
                );

                if let Some(ref output_dir) = args.output_dir {
                    let extension = match args.format {
                        OutputFormat::Json => "json",
                        OutputFormat::Csv => "csv",
                        OutputFormat::Text => "txt",
                    };
                    let output_path = output_dir
                        .join(path.file_stem().unwrap_or_default())
                        .with_extension(extension);
                    fs::write(&output_path, format_card(&result.card, args.format)?)?;
                }

                cards.push((path.clone(), result.card));
            }
            Err(e) => {
                warn!("failed to read {}: {}", path.display(), e);
                failures += 1;
                if !args.continue_on_error {
                    progress.abandon();
                    anyhow::bail!("failed to read {}: {}", path.display(), e);
                }
            }
        }

        progress.inc(1);
    }

    progress.finish_with_message("done");

    // Without an output directory, print every card to stdout
    if args.output_dir.is_none() {
        for (path, card) in &cards {
            println!("{} {}", style("--").dim(), style(path.display()).bold());
            println!("{}", format_card(card, args.format)?);
        }
    }

    if args.summary {
        let mut writer = csv::Writer::from_writer(Vec::new());
        let mut header = vec!["file"];
        header.extend_from_slice(CSV_HEADER);
        writer.write_record(&header)?;

        for (path, card) in &cards {
            let mut row = vec![path.display().to_string()];
            row.extend(csv_row(card));
            writer.write_record(&row)?;
        }

        let bytes = writer.into_inner()?;
        let summary_path = args
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("summary.csv");
        fs::write(&summary_path, bytes)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    println!(
        "{} Processed {} files ({} failed) in {:?}",
        style("✓").green(),
        cards.len(),
        failures,
        start.elapsed()
    );

    Ok(())
}
