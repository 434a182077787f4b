//! Icon listing for style-guide icon overview pages.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tera::{Function, Result as TeraResult, Value};
use tracing::debug;

/// Returns the names of the icons in `<root>/images/icons/<category>`,
/// without the `.svg` extension.
///
/// An empty `category` lists the icons root itself. A missing category
/// directory yields an empty list, never an error. Dot-entries are skipped,
/// subdirectories are not descended into, and non-`.svg` entries pass through
/// with their name unchanged. Entries come back in directory enumeration
/// order; callers that need a stable order sort themselves.
pub fn icon_names(root: &Path, category: &str) -> Vec<String> {
	let dir = root.join("images").join("icons").join(category);
	let entries = match fs::read_dir(&dir) {
		Ok(entries) => entries,
		Err(_) => {
			debug!(directory = %dir.display(), "icon directory missing, returning no icons");
			return Vec::new();
		}
	};

	entries
		.filter_map(|entry| entry.ok())
		.filter_map(|entry| entry.file_name().into_string().ok())
		.filter(|name| !name.starts_with('.'))
		.map(|name| {
			let stem = name.strip_suffix(".svg").map(str::to_string);
			stem.unwrap_or(name)
		})
		.collect()
}

/// Tera function behind `icon_list` and `icons`.
///
/// Both registered names share this one implementation; the duplicate name is
/// kept for templates written against the older extension.
///
/// ```tera
/// {% for icon in icon_list(category="social") %}
///   {{ icon }}
/// {% endfor %}
/// ```
#[derive(Debug, Clone)]
pub struct IconList {
	root: PathBuf,
}

impl IconList {
	/// Creates the function for a style-guide rooted at `root`.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}
}

impl Function for IconList {
	fn call(&self, args: &HashMap<String, Value>) -> TeraResult<Value> {
		let category = args.get("category").and_then(Value::as_str).unwrap_or("");
		let names = icon_names(&self.root, category)
			.into_iter()
			.map(Value::String)
			.collect();
		Ok(Value::Array(names))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs::File;
	use tempfile::TempDir;

	fn styleguide_with_icons(files: &[&str]) -> TempDir {
		let dir = TempDir::new().unwrap();
		let icons = dir.path().join("images").join("icons");
		fs::create_dir_all(&icons).unwrap();
		for file in files {
			File::create(icons.join(file)).unwrap();
		}
		dir
	}

	fn sorted(mut names: Vec<String>) -> Vec<String> {
		names.sort();
		names
	}

	#[test]
	fn test_strips_svg_extension() {
		let dir = styleguide_with_icons(&["arrow.svg", "cross.svg"]);

		let names = sorted(icon_names(dir.path(), ""));
		assert_eq!(names, vec!["arrow", "cross"]);
	}

	#[test]
	fn test_non_svg_files_keep_their_name() {
		let dir = styleguide_with_icons(&["a.svg", "b.svg", "c.txt"]);

		let names = sorted(icon_names(dir.path(), ""));
		assert_eq!(names, vec!["a", "b", "c.txt"]);
	}

	#[test]
	fn test_missing_category_yields_empty_list() {
		let dir = styleguide_with_icons(&["a.svg"]);

		assert!(icon_names(dir.path(), "missing-category").is_empty());
	}

	#[test]
	fn test_missing_root_yields_empty_list() {
		let dir = TempDir::new().unwrap();

		assert!(icon_names(dir.path(), "").is_empty());
	}

	#[test]
	fn test_dot_files_are_skipped() {
		let dir = styleguide_with_icons(&["visible.svg", ".hidden.svg", ".DS_Store"]);

		let names = sorted(icon_names(dir.path(), ""));
		assert_eq!(names, vec!["visible"]);
	}

	#[test]
	fn test_category_subdirectory() {
		let dir = styleguide_with_icons(&["root.svg"]);
		let social = dir.path().join("images").join("icons").join("social");
		fs::create_dir_all(&social).unwrap();
		File::create(social.join("twitter.svg")).unwrap();

		let names = icon_names(dir.path(), "social");
		assert_eq!(names, vec!["twitter"]);
	}

	#[test]
	fn test_function_defaults_to_root_category() {
		let dir = styleguide_with_icons(&["a.svg"]);
		let function = IconList::new(dir.path());

		let result = function.call(&HashMap::new()).unwrap();
		assert_eq!(result, Value::Array(vec![Value::String("a".to_string())]));
	}

	#[test]
	fn test_function_missing_category_is_not_an_error() {
		let dir = TempDir::new().unwrap();
		let function = IconList::new(dir.path());

		let mut args = HashMap::new();
		args.insert("category".to_string(), Value::String("nope".to_string()));

		let result = function.call(&args).unwrap();
		assert_eq!(result, Value::Array(Vec::new()));
	}
}
