/// File handling utilities
///
/// This module provides utility functions for enumerating text files and
/// reading their content.

use std::fs;
use std::path::Path;

use log::warn;

use crate::core::analyzer::AnalyzerError;

/// List the `.txt` files directly under a directory.
///
/// Enumeration is not recursive; only immediate children are considered, and
/// an entry qualifies by name alone (case-sensitive `.txt` suffix). The
/// returned names are sorted lexicographically.
///
/// # Arguments
///
/// * `directory` - Directory to enumerate
///
/// # Returns
///
/// Sorted file names, or a directory-list error if the directory is unreadable
pub fn list_text_files(directory: &Path) -> Result<Vec<String>, AnalyzerError> {
    let entries = fs::read_dir(directory).map_err(|source| AnalyzerError::DirectoryList {
        path: directory.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| AnalyzerError::DirectoryList {
            path: directory.to_path_buf(),
            source,
        })?;

        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                warn!("Skipping non-UTF-8 directory entry {:?}", raw);
                continue;
            }
        };

        if name.ends_with(".txt") {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}

/// Read the full content of a file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String, AnalyzerError> {
    fs::read_to_string(path).map_err(|source| AnalyzerError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}
