/// Text Analyzer - word count statistics for a directory of text files
///
/// This library scans a directory for `.txt` files, counts the words in each,
/// ranks the most frequent words of the two target files, resolves the local
/// IPv4 address and renders everything as a fixed-format report.

// Re-export core modules
pub mod core;
pub mod utils;

// Re-export main types for convenience
pub use crate::core::analyzer::{AnalyzerError, TextAnalyzer, TARGET_FILES, TOP_WORD_COUNT};
pub use crate::core::report::{AnalysisReport, FileWordCount, TopWordsBlock, WordFrequency};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Analyze a directory and return the collected report.
///
/// This is a convenience function for simple use cases; it runs the full
/// analysis without progress reporting.
///
/// # Arguments
///
/// * `directory` - Directory whose text files are analyzed
///
/// # Returns
///
/// The analysis report, ready for rendering or export
pub fn analyze_directory<P: AsRef<std::path::Path>>(
    directory: P,
) -> Result<AnalysisReport, AnalyzerError> {
    let analyzer = TextAnalyzer::new(directory.as_ref().to_path_buf());
    analyzer.run(None)
}
