//! Error types for the style-guide helpers.

use thiserror::Error;

/// Errors surfaced by the style-guide template helpers.
///
/// Missing files and directories are deliberately not represented here; they
/// are normal conditions that yield empty results.
#[derive(Debug, Error)]
pub enum StyleguideError {
	/// I/O operation failed.
	#[error("IO error: {0}")]
	IoError(#[from] std::io::Error),

	/// Fixture file exists but is not valid YAML.
	#[error("YAML error: {0}")]
	YamlError(#[from] serde_yaml::Error),

	/// Datetime modifier string could not be parsed.
	#[error("Invalid datetime modifier: {0:?}")]
	InvalidModifier(String),

	/// Datetime arithmetic left the representable range.
	#[error("Datetime out of range after applying {0:?}")]
	DatetimeOutOfRange(String),
}

/// Result alias used throughout the crate.
pub type StyleguideResult<T> = Result<T, StyleguideError>;
