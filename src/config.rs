//! Configuration for the style-guide helpers.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Location of the style-guide asset tree.
///
/// Icons are read from `<root>/images/icons/` and fixtures from
/// `<root>/data/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleguideConfig {
	/// Root directory of the style-guide assets.
	pub root: PathBuf,
}

impl StyleguideConfig {
	/// Creates a configuration rooted at `root`.
	///
	/// # Examples
	///
	/// ```
	/// use styleguide_templates::StyleguideConfig;
	///
	/// let config = StyleguideConfig::new("htmldev");
	/// assert_eq!(config.root.to_str(), Some("htmldev"));
	/// ```
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}
}

impl Default for StyleguideConfig {
	fn default() -> Self {
		Self::new("htmldev")
	}
}
