use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;

use fanreport::config::load_config;
use fanreport::pipeline::{self, RunOptions};

/// Turn fan-controller UART telemetry into a report and CSV export
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Telemetry log to analyze [default: uart_output.txt]
    input: Option<PathBuf>,

    /// Where to write the text report [default: PROJECT_REPORT.txt]
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Where to write the CSV export [default: simulation_data.csv]
    #[arg(long, conflicts_with = "no_csv")]
    csv: Option<PathBuf>,

    /// Skip the CSV export
    #[arg(long)]
    no_csv: bool,

    /// Config file [default: ~/.config/fanreport/config.toml]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Don't echo the report to the console
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let config_result = load_config(args.config.as_deref());
    if let Some(warning) = &config_result.warning {
        eprintln!("Warning: {}", warning);
    }
    let config = config_result.config;

    let mut options = RunOptions::from_config(&config);
    if let Some(input) = args.input {
        options.input = input;
    }
    if let Some(report) = args.report {
        options.report = report;
    }
    if args.no_csv {
        options.csv = None;
    } else if let Some(csv) = args.csv {
        options.csv = Some(csv);
    }

    println!("Parsing telemetry from {}...", options.input.display());
    let summary = match pipeline::run(&options, &config) {
        Ok(summary) => summary,
        Err(e) if e.is_empty_input() => {
            println!("{}", e);
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => return Err(e.into()),
    };

    println!("✓ Parsed {} data samples", summary.record_count);
    println!("✓ Report saved to: {}", summary.report_path.display());
    if let Some(csv_path) = &summary.csv_path {
        println!("✓ CSV data saved to: {}", csv_path.display());
    }

    if !args.quiet {
        println!("\n{}", summary.report);
    }

    println!("\nGenerated files:");
    println!("  - {} (formatted report)", summary.report_path.display());
    if let Some(csv_path) = &summary.csv_path {
        println!("  - {} (raw data for analysis)", csv_path.display());
    }

    Ok(ExitCode::SUCCESS)
}
