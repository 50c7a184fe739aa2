/// Core text analyzer implementation
///
/// This file contains the implementation of the TextAnalyzer which coordinates
/// the analysis of a directory of text files: enumeration, word counting and
/// word frequency ranking.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use log::{debug, info};

use crate::core::report::{AnalysisReport, FileWordCount, TopWordsBlock, WordFrequency};
use crate::utils::file_utils;
use crate::utils::net_utils;

/// Files whose most frequent words are reported. These are a fixed part of
/// the report, never discovered from the directory contents.
pub const TARGET_FILES: [&str; 2] = ["IF.txt", "Limerick-1.txt"];

/// How many of the most frequent words are reported per target file.
pub const TOP_WORD_COUNT: usize = 3;

/// Errors raised while producing or writing a report
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    /// The working directory could not be enumerated
    #[error("failed to list text files in {}", path.display())]
    DirectoryList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input file was missing or unreadable
    #[error("failed to read {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report could not be written to the output path
    #[error("failed to write report to {}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The local hostname could not be resolved to an IPv4 address
    #[error("failed to resolve local address: {detail}")]
    NetworkResolution { detail: String },
}

/// Core text analyzer structure
pub struct TextAnalyzer {
    /// Directory whose text files are analyzed
    directory: PathBuf,
}

impl TextAnalyzer {
    /// Create a new TextAnalyzer instance
    ///
    /// # Arguments
    ///
    /// * `directory` - Directory whose immediate `.txt` children are analyzed
    ///
    /// # Returns
    ///
    /// A new TextAnalyzer instance
    pub fn new(directory: PathBuf) -> Self {
        Self { directory }
    }

    /// The directory this analyzer operates on
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// List the names of all text files directly under the working directory.
    ///
    /// Only immediate children whose name ends in `.txt` are returned, sorted
    /// lexicographically so the report is stable across runs and platforms.
    pub fn list_text_files(&self) -> Result<Vec<String>, AnalyzerError> {
        file_utils::list_text_files(&self.directory)
    }

    /// Count the whitespace-delimited words in one file.
    ///
    /// # Arguments
    ///
    /// * `file_name` - Name of the file, relative to the working directory
    ///
    /// # Returns
    ///
    /// The number of tokens in the file's content
    pub fn count_words(&self, file_name: &str) -> Result<usize, AnalyzerError> {
        let content = file_utils::read_text(&self.directory.join(file_name))?;
        Ok(content.split_whitespace().count())
    }

    /// Find the `k` most frequent words in one file.
    ///
    /// Words are compared exactly: case-sensitive, punctuation included.
    /// Entries are ordered by descending count; words with equal counts keep
    /// the order in which they first appeared in the file.
    pub fn top_words(
        &self,
        file_name: &str,
        k: usize,
    ) -> Result<Vec<WordFrequency>, AnalyzerError> {
        let content = file_utils::read_text(&self.directory.join(file_name))?;

        // word -> (occurrences, index of first appearance)
        let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
        for (index, word) in content.split_whitespace().enumerate() {
            let entry = counts.entry(word).or_insert((0, index));
            entry.0 += 1;
        }

        let mut ranked: Vec<(&str, (usize, usize))> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
        ranked.truncate(k);

        Ok(ranked
            .into_iter()
            .map(|(word, (count, _))| WordFrequency {
                word: word.to_string(),
                count,
            })
            .collect())
    }

    /// Run the full analysis and collect the results into a report.
    ///
    /// Lists the text files, counts words per file and in total, ranks the
    /// top words of each target file, and resolves the local IPv4 address.
    /// The returned report is immutable and holds everything the renderer
    /// needs.
    ///
    /// # Arguments
    ///
    /// * `progress` - Optional progress bar, advanced once per counted file
    pub fn run(&self, progress: Option<&ProgressBar>) -> Result<AnalysisReport, AnalyzerError> {
        let text_files = self.list_text_files()?;
        info!(
            "Found {} text files in {}",
            text_files.len(),
            self.directory.display()
        );

        let mut file_counts = Vec::with_capacity(text_files.len());
        let mut total_words = 0usize;
        for file_name in text_files {
            let words = self.count_words(&file_name)?;
            debug!("{}: {} words", file_name, words);
            total_words += words;
            file_counts.push(FileWordCount { file_name, words });
            if let Some(pb) = progress {
                pb.inc(1);
            }
        }
        info!("Grand total: {} words", total_words);

        let mut top_words = Vec::with_capacity(TARGET_FILES.len());
        for target in TARGET_FILES {
            let entries = self.top_words(target, TOP_WORD_COUNT)?;
            top_words.push(TopWordsBlock {
                file_name: target.to_string(),
                entries,
            });
        }

        let ip_address = net_utils::resolve_local_address()?;

        Ok(AnalysisReport {
            file_counts,
            total_words,
            top_words,
            ip_address,
        })
    }
}
