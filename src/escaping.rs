//! HTML escaping for snippet source display.
//!
//! Escaped characters:
//! - `<` → `&lt;`
//! - `>` → `&gt;`
//! - `&` → `&amp;`
//! - `"` → `&quot;`
//! - `'` → `&#x27;`

/// Escape HTML special characters
///
/// # Examples
///
/// ```
/// use styleguide_templates::escape_html;
///
/// assert_eq!(escape_html("<b>hi</b>"), "&lt;b&gt;hi&lt;/b&gt;");
/// assert_eq!(escape_html("Hello & goodbye"), "Hello &amp; goodbye");
/// assert_eq!(escape_html(r#"<a href="test">link</a>"#),
///            "&lt;a href=&quot;test&quot;&gt;link&lt;/a&gt;");
/// ```
pub fn escape_html(s: &str) -> String {
	s.chars()
		.map(|c| match c {
			'<' => "&lt;".to_string(),
			'>' => "&gt;".to_string(),
			'&' => "&amp;".to_string(),
			'"' => "&quot;".to_string(),
			'\'' => "&#x27;".to_string(),
			_ => c.to_string(),
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_escape_html() {
		assert_eq!(
			escape_html("<script>alert('XSS')</script>"),
			"&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;"
		);
		assert_eq!(escape_html("Hello & goodbye"), "Hello &amp; goodbye");
		assert_eq!(
			escape_html(r#"<a href="test">link</a>"#),
			"&lt;a href=&quot;test&quot;&gt;link&lt;/a&gt;"
		);
		assert_eq!(escape_html("normal text"), "normal text");
	}

	#[test]
	fn test_escape_html_empty() {
		assert_eq!(escape_html(""), "");
	}
}
