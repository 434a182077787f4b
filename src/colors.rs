//! Collaborator passthroughs for the color palette and inline SVG.
//!
//! The color and SVG services are implemented by the host application; this
//! module only defines the seams and exposes them to templates.

use std::collections::HashMap;
use std::sync::Arc;

use tera::{Function, Result as TeraResult, Value};

/// Color-palette collaborator consumed by `color_groups` and `luminance`.
pub trait ColorService: Send + Sync {
	/// The palette grouped for display on the colors overview page.
	fn color_groups(&self) -> Value;

	/// Relative luminance of a color, used to pick readable text colors on
	/// top of palette swatches.
	fn luminance(&self, color: &str) -> f64;
}

/// SVG collaborator consumed by `embed_svg`.
pub trait SvgService: Send + Sync {
	/// Raw SVG markup for inline embedding, if the named asset exists.
	fn svg(&self, name: &str) -> Option<String>;
}

/// Tera function behind `color_groups`.
#[derive(Clone)]
pub struct ColorGroups {
	service: Arc<dyn ColorService>,
}

impl ColorGroups {
	/// Creates the function reading from `service`.
	pub fn new(service: Arc<dyn ColorService>) -> Self {
		Self { service }
	}
}

impl Function for ColorGroups {
	fn call(&self, _args: &HashMap<String, Value>) -> TeraResult<Value> {
		Ok(self.service.color_groups())
	}
}

/// Tera function behind `luminance`.
///
/// ```tera
/// {% if luminance(color=swatch.hex) < 0.5 %}class="light-text"{% endif %}
/// ```
#[derive(Clone)]
pub struct Luminance {
	service: Arc<dyn ColorService>,
}

impl Luminance {
	/// Creates the function reading from `service`.
	pub fn new(service: Arc<dyn ColorService>) -> Self {
		Self { service }
	}
}

impl Function for Luminance {
	fn call(&self, args: &HashMap<String, Value>) -> TeraResult<Value> {
		let color = args
			.get("color")
			.and_then(Value::as_str)
			.ok_or_else(|| tera::Error::msg("luminance requires a 'color' argument"))?;
		Ok(Value::from(self.service.luminance(color)))
	}
}

/// Tera function behind `embed_svg`.
///
/// Renders the raw markup of a named SVG asset inline; an unknown name
/// renders as an empty string.
#[derive(Clone)]
pub struct EmbedSvg {
	service: Arc<dyn SvgService>,
}

impl EmbedSvg {
	/// Creates the function reading from `service`.
	pub fn new(service: Arc<dyn SvgService>) -> Self {
		Self { service }
	}
}

impl Function for EmbedSvg {
	fn call(&self, args: &HashMap<String, Value>) -> TeraResult<Value> {
		let name = args
			.get("name")
			.and_then(Value::as_str)
			.ok_or_else(|| tera::Error::msg("embed_svg requires a 'name' argument"))?;
		Ok(Value::String(self.service.svg(name).unwrap_or_default()))
	}

	// Inline SVG is markup by definition.
	fn is_safe(&self) -> bool {
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	struct FixedPalette;

	impl ColorService for FixedPalette {
		fn color_groups(&self) -> Value {
			json!({ "brand": ["#102030", "#ffffff"] })
		}

		fn luminance(&self, color: &str) -> f64 {
			if color == "#ffffff" { 1.0 } else { 0.0 }
		}
	}

	struct SingleSvg;

	impl SvgService for SingleSvg {
		fn svg(&self, name: &str) -> Option<String> {
			(name == "logo").then(|| r#"<svg viewBox="0 0 1 1"></svg>"#.to_string())
		}
	}

	#[test]
	fn test_color_groups_passthrough() {
		let function = ColorGroups::new(Arc::new(FixedPalette));
		let groups = function.call(&HashMap::new()).unwrap();
		assert_eq!(groups["brand"][0], Value::String("#102030".to_string()));
	}

	#[test]
	fn test_luminance_passthrough() {
		let function = Luminance::new(Arc::new(FixedPalette));

		let mut args = HashMap::new();
		args.insert("color".to_string(), Value::String("#ffffff".to_string()));
		assert_eq!(function.call(&args).unwrap(), Value::from(1.0));
	}

	#[test]
	fn test_luminance_requires_color_argument() {
		let function = Luminance::new(Arc::new(FixedPalette));
		assert!(function.call(&HashMap::new()).is_err());
	}

	#[test]
	fn test_embed_svg_returns_markup() {
		let function = EmbedSvg::new(Arc::new(SingleSvg));

		let mut args = HashMap::new();
		args.insert("name".to_string(), Value::String("logo".to_string()));
		let markup = function.call(&args).unwrap();
		assert_eq!(markup, Value::String(r#"<svg viewBox="0 0 1 1"></svg>"#.to_string()));
	}

	#[test]
	fn test_embed_svg_unknown_name_is_empty() {
		let function = EmbedSvg::new(Arc::new(SingleSvg));

		let mut args = HashMap::new();
		args.insert("name".to_string(), Value::String("nope".to_string()));
		assert_eq!(function.call(&args).unwrap(), Value::String(String::new()));
	}

	#[test]
	fn test_embed_svg_is_safe() {
		assert!(EmbedSvg::new(Arc::new(SingleSvg)).is_safe());
	}
}
