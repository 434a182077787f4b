//! YAML fixture loading for demo content.
//!
//! Style-guide pages are populated from static YAML files under
//! `<root>/data/` rather than from a real backend.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tera::{Function, Result as TeraResult, Value};
use tracing::debug;

use crate::error::StyleguideResult;

/// Loads `<root>/data/<kind>.yml` into a generic value tree.
///
/// A missing fixture file is a normal condition and yields an empty array; a
/// fixture that exists but does not parse is an error. The parsed tree is
/// passed through unmodified, so templates see exactly the mapping, sequence
/// or scalar structure the file declares.
pub fn load_fixture(root: &Path, kind: &str) -> StyleguideResult<Value> {
	let path = root.join("data").join(format!("{kind}.yml"));
	if !path.is_file() {
		debug!(fixture = %path.display(), "fixture file missing, returning empty data");
		return Ok(Value::Array(Vec::new()));
	}

	let content = fs::read_to_string(&path)?;
	let value = serde_yaml::from_str(&content)?;
	Ok(value)
}

/// Tera function behind `load_data`.
///
/// ```tera
/// {% set colors = load_data(type="colors") %}
/// ```
#[derive(Debug, Clone)]
pub struct LoadData {
	root: PathBuf,
}

impl LoadData {
	/// Creates the function for a style-guide rooted at `root`.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}
}

impl Function for LoadData {
	fn call(&self, args: &HashMap<String, Value>) -> TeraResult<Value> {
		let kind = args
			.get("type")
			.and_then(Value::as_str)
			.ok_or_else(|| tera::Error::msg("load_data requires a 'type' argument"))?;
		load_fixture(&self.root, kind)
			.map_err(|e| tera::Error::chain(format!("failed to load fixture {kind:?}"), e))
	}
}
