use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use sense_strip::config::ScanConfig;
use sense_strip::input::{StripImage, load_strip_image};
use sense_strip::model::biomarker::{BIOMARKER_ORDER, BiomarkerKey, parse_order};
use sense_strip::model::scores::{FUSION_WEIGHTS, GLUCOSE_SPAN, TROPONIN_SPAN};
use sense_strip::model::thresholds::{Direction, ThresholdProfile};
use sense_strip::pipeline::ScanEngine;
use sense_strip::pipeline::stage4_classify::classify;
use sense_strip::pipeline::stage5_report::{Stage5Input, write_reports};
use sense_strip::{Alert, SenseError, logging};

#[derive(Parser)]
#[command(name = "sense-strip")]
#[command(about = "Read a SENSE 5-plex strip photo and compute the SENSE-CRS cardiac risk score")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan one strip image and write readings and reports.
    Scan(ScanArgs),

    /// Print the calibration table and fusion constants.
    Profile {
        /// Emit the table as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Args)]
struct ScanArgs {
    /// Path to the strip photograph (PNG or JPEG).
    #[arg(long)]
    image: PathBuf,

    /// Output directory for readings.tsv, summary.json and report.txt.
    #[arg(long)]
    out: PathBuf,

    /// Comma-separated pad order, left to right.
    #[arg(long, default_value = "glucose,hemoglobin,nt-probnp,lipoprotein-a,troponin")]
    order: String,

    /// Also write overlay.png with the sampled pad rectangles.
    #[arg(long)]
    overlay: bool,

    /// JSON file overriding pad geometry and report options.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    logging::init("info");
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Scan(args) => run_scan(&args),
        Commands::Profile { json } => print_profile(ThresholdProfile::canonical(), json),
    };
    if let Err(err) = result {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn resolve_config(args: &ScanArgs) -> Result<ScanConfig, SenseError> {
    let mut config = match &args.config {
        Some(path) => ScanConfig::load(path)?,
        None => ScanConfig::default(),
    };
    if args.overlay {
        config.report.overlay = true;
    }
    Ok(config)
}

fn run_scan(args: &ScanArgs) -> Result<(), SenseError> {
    let order = parse_order(&args.order)?;
    if order != BIOMARKER_ORDER {
        tracing::warn!("non-canonical pad order: {}", format_order(&order));
    }
    let config = resolve_config(args)?;
    let profile = ThresholdProfile::canonical();

    let rgb = load_strip_image(&args.image)?;
    let view = StripImage::from_rgb(&rgb)?;
    let engine = ScanEngine::new(profile, config.geometry);
    let scan = engine.compute_readings_and_score(&view, &order)?;
    let classification = classify(&scan.readings, &scan.risk, &scan.samples, profile);

    for alert in &classification.alerts {
        match alert {
            Alert::EmptyPad(_) => tracing::warn!("alert {}", alert.code()),
            _ => tracing::warn!("ALERT {}: {}", alert.code(), classification.tier.recommendation()),
        }
    }

    let input = Stage5Input {
        image_name: Some(args.image.display().to_string()),
        image: &rgb,
        scan: &scan,
        classification: &classification,
        profile,
        tool_name: "sense-strip".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    write_reports(&input, &args.out, config.report)?;

    println!(
        "SENSE-CRS {:.3} {} ({})",
        scan.risk.score,
        classification.tier.label(),
        classification.tier.recommendation()
    );
    Ok(())
}

fn format_order(order: &[BiomarkerKey]) -> String {
    order.iter().map(|k| k.id()).collect::<Vec<_>>().join(",")
}

fn print_profile(profile: &ThresholdProfile, json: bool) -> Result<(), SenseError> {
    if json {
        println!("{}", serde_json::to_string_pretty(profile)?);
        return Ok(());
    }
    println!("calibration revision: {}", profile.revision);
    println!(
        "{:<16} {:>8} {:>9} {:>8} {:<7} {:<10} {:>6}",
        "biomarker", "normal", "elevated", "high", "unit", "direction", "weight"
    );
    for (entry, weight) in profile.entries().iter().zip(FUSION_WEIGHTS) {
        let direction = match entry.direction {
            Direction::Increasing => "increasing",
            Direction::Inverse => "inverse",
        };
        println!(
            "{:<16} {:>8} {:>9} {:>8} {:<7} {:<10} {:>6.2}",
            entry.key.id(),
            entry.normal,
            entry.elevated,
            entry.high,
            entry.key.unit(),
            direction,
            weight
        );
    }
    println!("glucose span: {GLUCOSE_SPAN}");
    println!("troponin span: {TROPONIN_SPAN}");
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
