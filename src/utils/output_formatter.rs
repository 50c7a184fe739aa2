/// Output formatter for analysis results
///
/// This module handles rendering the report in its fixed-width text form and
/// exporting it to the output file or to JSON. The same rendered string is
/// used for the console and the output file, so the two always match.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::info;

use crate::core::analyzer::{AnalyzerError, TOP_WORD_COUNT};
use crate::core::report::AnalysisReport;

/// Directory the report file is written into, relative to the working directory
pub const OUTPUT_DIR: &str = "output";

/// Name of the report file
pub const OUTPUT_FILE: &str = "result.txt";

/// Render the report in its fixed-width text form.
///
/// Layout, per line:
/// - the comma-joined file list
/// - one `Total words in {name:<20}-{count:>10}` line per file
/// - the grand total, right-aligned to width 10
/// - one top-words block per target file, entries as `{word:<10}-{count:>10}`
/// - the IP address, right-aligned to width 20
pub fn format_report(report: &AnalysisReport) -> String {
    let mut output = String::new();

    let names: Vec<&str> = report.file_names().collect();
    output.push_str(&format!("List of text files: {}\n", names.join(", ")));

    for file in &report.file_counts {
        output.push_str(&format!(
            "Total words in {:<20}-{:>10}\n",
            file.file_name, file.words
        ));
    }
    output.push_str(&format!(
        "Grand total number of words:{:>10}\n",
        report.total_words
    ));

    for block in &report.top_words {
        output.push('\n');
        output.push_str(&format!(
            "Top {} words in {}:\n",
            TOP_WORD_COUNT, block.file_name
        ));
        for entry in &block.entries {
            output.push_str(&format!("{:<10}-{:>10}\n", entry.word, entry.count));
        }
    }

    output.push_str(&format!("\nIP Address:{:>20}\n", report.ip_address));

    output
}

/// Write the rendered report to `output/result.txt` under the given directory.
///
/// The output directory is created if it does not exist yet.
///
/// # Arguments
///
/// * `report` - The report to write
/// * `directory` - The working directory the output path is relative to
///
/// # Returns
///
/// The path of the written file
pub fn write_report_file(
    report: &AnalysisReport,
    directory: &Path,
) -> Result<PathBuf, AnalyzerError> {
    let output_dir = directory.join(OUTPUT_DIR);
    fs::create_dir_all(&output_dir).map_err(|source| AnalyzerError::OutputWrite {
        path: output_dir.clone(),
        source,
    })?;

    let output_path = output_dir.join(OUTPUT_FILE);
    let mut file = File::create(&output_path).map_err(|source| AnalyzerError::OutputWrite {
        path: output_path.clone(),
        source,
    })?;
    file.write_all(format_report(report).as_bytes())
        .map_err(|source| AnalyzerError::OutputWrite {
            path: output_path.clone(),
            source,
        })?;

    info!("Report written to {}", output_path.display());
    Ok(output_path)
}

/// Export the report to a JSON file
///
/// # Arguments
///
/// * `report` - The report to export
/// * `output_path` - Path where the JSON file will be written
pub fn export_report_json(report: &AnalysisReport, output_path: &Path) -> anyhow::Result<()> {
    let file = File::create(output_path).context(format!(
        "Failed to create JSON output file: {}",
        output_path.display()
    ))?;

    serde_json::to_writer_pretty(file, report).context("Failed to write JSON data")?;

    Ok(())
}
