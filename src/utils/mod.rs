/// Utility modules for the text analyzer
///
/// This module contains utility functions for file handling, local address
/// resolution and output formatting.

pub mod file_utils;
pub mod net_utils;
pub mod output_formatter;
