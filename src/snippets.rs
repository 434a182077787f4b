//! Snippet renderers for documentation pages.
//!
//! A component page shows the rendered markup and its source next to each
//! other; [`render_with_source`] produces both halves from one input. The
//! input is authored in the style-guide templates themselves, so escaping the
//! source copy is a display concern, not a security boundary.

use std::collections::HashMap;

use tera::{Function, Result as TeraResult, Value};

use crate::escaping::escape_html;

/// Renders the supplied HTML both as actual HTML and as a code block.
///
/// # Examples
///
/// ```
/// use styleguide_templates::render_with_source;
///
/// assert_eq!(
///     render_with_source("<b>hi</b>"),
///     "<b>hi</b>\n<pre><code>&lt;b&gt;hi&lt;/b&gt;</code></pre>"
/// );
/// ```
pub fn render_with_source(html: &str) -> String {
	format!("{}\n<pre><code>{}</code></pre>", html, escape_html(html))
}

/// Former name of [`render_with_source`], kept for templates and callers
/// written against it.
#[deprecated(note = "use render_with_source instead")]
pub fn ui_and_html(html: &str) -> String {
	render_with_source(html)
}

/// Tera function behind `get_ui_and_html` and its deprecated alias
/// `ui_and_html`.
///
/// ```tera
/// {{ get_ui_and_html(html="<button class=\"btn\">Save</button>") }}
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UiAndHtml;

impl Function for UiAndHtml {
	fn call(&self, args: &HashMap<String, Value>) -> TeraResult<Value> {
		let html = args
			.get("html")
			.and_then(Value::as_str)
			.ok_or_else(|| tera::Error::msg("get_ui_and_html requires an 'html' argument"))?;
		Ok(Value::String(render_with_source(html)))
	}

	// The output is the documented markup itself; the engine must not
	// re-escape it.
	fn is_safe(&self) -> bool {
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_render_with_source() {
		let result = render_with_source("<b>hi</b>");
		assert_eq!(result, "<b>hi</b>\n<pre><code>&lt;b&gt;hi&lt;/b&gt;</code></pre>");
	}

	#[test]
	fn test_render_with_source_plain_text() {
		assert_eq!(render_with_source("plain"), "plain\n<pre><code>plain</code></pre>");
	}

	#[test]
	#[allow(deprecated)]
	fn test_deprecated_alias_matches() {
		assert_eq!(ui_and_html("<i>x</i>"), render_with_source("<i>x</i>"));
	}

	#[test]
	fn test_function_requires_html_argument() {
		let result = UiAndHtml.call(&HashMap::new());
		assert!(result.is_err());
	}

	#[test]
	fn test_function_is_safe() {
		assert!(UiAndHtml.is_safe());
	}

	#[test]
	fn test_function_call() {
		let mut args = HashMap::new();
		args.insert("html".to_string(), Value::String("<b>hi</b>".to_string()));

		let result = UiAndHtml.call(&args).unwrap();
		assert_eq!(
			result,
			Value::String("<b>hi</b>\n<pre><code>&lt;b&gt;hi&lt;/b&gt;</code></pre>".to_string())
		);
	}
}
