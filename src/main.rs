/// Text Analyzer - word count statistics for a directory of text files
///
/// The main entry point for the text analyzer application. It sets up logging,
/// runs the analysis over the current working directory and writes the report
/// to the console and to the output file.

use anyhow::Result;
use clap::{ArgAction, Parser};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, LevelFilter};
use std::env;
use std::fs::File;
use std::path::Path;
use std::process;
use std::time::Instant;

// Import modules
mod core;
mod utils;

use crate::core::analyzer::TextAnalyzer;
use crate::utils::output_formatter;

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "text_analyzer",
    version = "0.1.0",
    about = "Word count statistics and reporting for the current directory",
    long_about = "Scans the current working directory for .txt files and reports:
- the list of text files found
- per-file and grand total word counts
- the three most frequent words in IF.txt and Limerick-1.txt
- the IPv4 address of the local machine

The report is printed to the console and written to output/result.txt."
)]
struct Args {
    /// Export the report to a JSON file
    #[arg(long = "json")]
    json: Option<String>,

    /// Suppress progress and summary output (the report itself is still printed)
    #[arg(long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,

    /// Set logging level (default: INFO)
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,

    /// Log file path (default: text_analyzer.log)
    #[arg(long = "log-file", default_value = "text_analyzer.log")]
    log_file: String,
}

/// Main entry point function
fn main() {
    // Record the start time
    let start_time = Instant::now();

    // Parse command line arguments
    let args = Args::parse();

    // Set up logging
    let _ = setup_logging(&args);

    if let Err(e) = run(&args, start_time) {
        eprintln!("{} {:#}", "Error:".red(), e);
        process::exit(1);
    }
}

/// Run the analysis and write the report to all sinks
fn run(args: &Args, start_time: Instant) -> Result<()> {
    let directory = env::current_dir()?;
    let analyzer = TextAnalyzer::new(directory);
    info!("Analyzing {}", analyzer.directory().display());

    // Set up a per-file progress bar if not in quiet mode
    let progress_bar = if !args.quiet {
        let file_total = analyzer.list_text_files()?.len();
        let pb = ProgressBar::new(file_total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} files")
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let report = analyzer.run(progress_bar.as_ref())?;

    if let Some(pb) = &progress_bar {
        pb.finish_and_clear();
    }

    // One rendering for both sinks, so console and file match byte for byte
    let rendered = output_formatter::format_report(&report);
    print!("{}", rendered);

    output_formatter::write_report_file(&report, analyzer.directory())?;

    if let Some(json_path) = &args.json {
        output_formatter::export_report_json(&report, Path::new(json_path))?;
    }

    // Print summary
    if !args.quiet {
        let elapsed_time = start_time.elapsed();
        println!("\n{}", "Analysis Complete".bold());
        println!("{} {}", "Files analyzed:".green(), report.file_counts.len());
        println!("{} {}", "Total words:".green(), report.total_words);
        println!(
            "{} {:.2} seconds",
            "Time elapsed:".green(),
            elapsed_time.as_secs_f64()
        );
    }

    Ok(())
}

/// Set up logging with file and console output
fn setup_logging(args: &Args) -> Result<()> {
    // Configure logging
    let mut builder = env_logger::Builder::new();

    // Set log level from arguments
    builder.filter_level(args.log_level);

    // Set format
    builder.format(|buf, record| {
        use chrono::Local;
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    // Add file output
    if let Ok(file) = File::create(&args.log_file) {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    // Initialize logger
    builder.init();

    Ok(())
}
