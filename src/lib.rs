pub mod solutions;

use anyhow::{Context, Result};
use thiserror::Error;

pub use solutions::ALL_SOLUTIONS;

/// A day's solver: raw puzzle input in, both answers out.
pub type Solution = fn(&str) -> Result<(usize, usize)>;

/// Input that doesn't match the shape a day's parser expects. Always fatal
/// for the run; validation outcomes (invalid passwords, incomplete
/// passports) are counted instead and never surface here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: expected a number, got {text:?}")]
    InvalidNumber { line: usize, text: String },
    #[error("line {line}: malformed policy line {text:?}")]
    MalformedPolicy { line: usize, text: String },
    #[error("expected key:value, got {text:?}")]
    MalformedField { text: String },
}

pub fn load_input(name: &str) -> Result<String> {
    let path = format!("inputs/{}", name);
    std::fs::read_to_string(&path).with_context(|| format!("failed to read {}", path))
}

pub fn default_input(n: usize) -> Result<String> {
    load_input(&format!("{}.txt", n))
}
