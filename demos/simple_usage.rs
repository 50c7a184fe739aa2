/// Simple example demonstrating how to use the text analyzer library

use anyhow::Result;
use text_analyzer::analyze_directory;
use text_analyzer::utils::output_formatter;

fn main() -> Result<()> {
    // Build a small sample directory holding the two target files
    let sample_dir = tempfile::tempdir()?;
    std::fs::write(sample_dir.path().join("IF.txt"), "if if then else\n")?;
    std::fs::write(sample_dir.path().join("Limerick-1.txt"), "a b c a b a\n")?;

    println!("Analyzing directory: {}", sample_dir.path().display());

    // Run the analysis and render the report
    let report = analyze_directory(sample_dir.path())?;
    print!("{}", output_formatter::format_report(&report));

    Ok(())
}
