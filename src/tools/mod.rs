//! The tools module provides the helpers around the coder.
//!
//! The tools are:
//! - cli: Command line interface and user options.
//! - data_in: Getting the phrase to encode from the command line, a file or the terminal.
//! - freq_count: Frequency count of the input symbols.
//! - report: Size comparisons between the raw input and its encoding, and the printed report.
//!
pub mod cli;
pub mod data_in;
pub mod freq_count;
pub mod report;
