/// Core module for text analysis
///
/// This module contains components for performing the text analysis itself:
/// file enumeration, word counting, frequency ranking and result collection.

pub mod analyzer;
pub mod report;
