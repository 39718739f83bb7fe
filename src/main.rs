use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use bcf_inspector::export::{export_csv, export_json};
use bcf_inspector::parser::{parse_bcf_file_with, FailurePolicy, ParseOptions};
use bcf_inspector::report::Summary;

#[derive(Parser, Debug)]
#[command(name = "bcf-inspector")]
#[command(about = "BCF Inspector - list topics, comments and snapshots from BCF archives")]
#[command(version)]
struct Args {
    /// Path to BCF file
    #[arg(required = true)]
    file: PathBuf,

    /// Export to CSV (optional output path)
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Export to JSON (optional output path)
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Skip topics with invalid markup instead of failing
    #[arg(long)]
    skip_invalid_topics: bool,

    /// Only treat folders named by a GUID as topics
    #[arg(long)]
    strict_guids: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.verbose);

    let policy = if args.skip_invalid_topics {
        FailurePolicy::SkipAndReport
    } else {
        FailurePolicy::AllOrNothing
    };
    let options = ParseOptions::default()
        .with_failure_policy(policy)
        .with_guid_folders_required(args.strict_guids);

    let archive = parse_bcf_file_with(&args.file, &options)?;

    if let Some(csv_path) = &args.csv {
        export_csv(&archive, csv_path)?;
        println!("Exported to CSV: {}", csv_path.display());
    }

    if let Some(json_path) = &args.json {
        export_json(&archive, json_path)?;
        println!("Exported to JSON: {}", json_path.display());
    }

    if args.csv.is_some() || args.json.is_some() {
        return Ok(());
    }

    print!("{}", Summary(&archive));
    Ok(())
}

// RUST_LOG takes precedence over -v.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
