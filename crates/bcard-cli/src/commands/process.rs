//! Process command - parse a single recognized-text file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{debug, info};

use bcard_core::models::config::BcardConfig;
use bcard_core::{CardParser, ParsedCard, RuleCardParser};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file with one recognized line per text line
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show extraction confidence and timing
    #[arg(long)]
    show_confidence: bool,

    /// Print audit warnings for missing fields
    #[arg(long)]
    validate: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let text = fs::read_to_string(&args.input)?;
    let parser = RuleCardParser::from_config(&config.extraction);
    let result = parser.parse_text(&text);

    if args.validate && !result.warnings.is_empty() {
        eprintln!("{}", style("Audit warnings:").yellow());
        for warning in &result.warnings {
            eprintln!("  - {}", warning);
        }
    }

    let output = format_card(&result.card, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_confidence {
        println!();
        println!(
            "{} Extraction confidence: {:.1}",
            style("ℹ").blue(),
            result.card.ocr_confidence
        );
        println!(
            "{} Processing time: {}ms",
            style("ℹ").blue(),
            result.processing_time_ms
        );
    }

    debug!("process command finished");

    Ok(())
}

/// Load the pipeline configuration, falling back to defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<BcardConfig> {
    Ok(match config_path {
        Some(path) => BcardConfig::from_file(std::path::Path::new(path))?,
        None => BcardConfig::default(),
    })
}

/// Column order shared by the CSV output format and the batch summary.
pub const CSV_HEADER: &[&str] = &[
    "company_name",
    "name",
    "name_en",
    "position",
    "department",
    "email",
    "phone",
    "mobile",
    "fax",
    "address",
    "postal_code",
];

/// Card fields in `CSV_HEADER` order, absent fields as empty strings.
pub fn csv_row(card: &ParsedCard) -> Vec<String> {
    [
        &card.company_name,
        &card.name,
        &card.name_en,
        &card.position,
        &card.department,
        &card.email,
        &card.phone,
        &card.mobile,
        &card.fax,
        &card.address,
        &card.postal_code,
    ]
    .iter()
    .map(|field| field.as_deref().unwrap_or_default().to_string())
    .collect()
}

/// Render a card in the requested output format.
pub fn format_card(card: &ParsedCard, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(card)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(CSV_HEADER)?;
            writer.write_record(csv_row(card))?;
            let bytes = writer.into_inner()?;
            Ok(String::from_utf8(bytes)?)
        }
        OutputFormat::Text => Ok(format_text(card)),
    }
}

fn format_text(card: &ParsedCard) -> String {
    let fields = [
        ("Company", &card.company_name),
        ("Name", &card.name),
        ("Name (EN)", &card.name_en),
        ("Position", &card.position),
        ("Department", &card.department),
        ("Email", &card.email),
        ("Phone", &card.phone),
        ("Mobile", &card.mobile),
        ("Fax", &card.fax),
        ("Address", &card.address),
        ("Postal code", &card.postal_code),
    ];

    let mut out = String::new();
    for (label, value) in fields {
        let rendered = match value {
            Some(v) => v.clone(),
            None => style("(not extracted)").dim().to_string(),
        };
        out.push_str(&format!("{:<12} {}\n", label, rendered));
    }
    out.push_str(&format!("{:<12} {}\n", "Raw text", card.ocr_raw_text));
    out
}
