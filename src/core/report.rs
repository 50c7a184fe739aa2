/// Analysis result types
///
/// The report is built once by the analyzer and passed, immutable, to the
/// renderer and exporters.

use std::net::Ipv4Addr;

use serde::Serialize;

/// One word together with its occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

/// Word count of a single text file
#[derive(Debug, Clone, Serialize)]
pub struct FileWordCount {
    pub file_name: String,
    pub words: usize,
}

/// Top-word ranking for one target file
#[derive(Debug, Clone, Serialize)]
pub struct TopWordsBlock {
    pub file_name: String,
    pub entries: Vec<WordFrequency>,
}

/// Complete result of one analysis run
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Per-file word counts, in file list order
    pub file_counts: Vec<FileWordCount>,
    /// Sum of all per-file counts
    pub total_words: usize,
    /// One ranking block per target file
    pub top_words: Vec<TopWordsBlock>,
    /// IPv4 address the local hostname resolved to
    pub ip_address: Ipv4Addr,
}

impl AnalysisReport {
    /// Names of the analyzed files, in report order
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.file_counts.iter().map(|f| f.file_name.as_str())
    }
}
