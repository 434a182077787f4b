//! Demo-content generation for style-guide pages.
//!
//! Pages that demonstrate list components, cards, or forms need plausible
//! content; templates read it from a `faker` global rather than hard-coding
//! lorem ipsum.

use fake::Fake;
use fake::faker::address::en::{CityName, StreetName};
use fake::faker::company::en::{Buzzword, CompanyName};
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::{Paragraph, Sentence, Words};
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::faker::phone_number::en::PhoneNumber;
use serde_json::json;
use tera::Value;

/// Source of fake demo data for templates.
///
/// Injected as an optional dependency of the extension at construction time;
/// when absent, templates simply get no `faker` global.
pub trait FakeDataProvider: Send + Sync {
	/// A freshly generated set of demo values.
	///
	/// Called once per globals lookup; values are not cached, so two render
	/// passes see different demo content.
	fn generate(&self) -> Value;
}

/// Default provider backed by the `fake` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakerProvider;

impl FakerProvider {
	/// Creates the default provider.
	pub fn new() -> Self {
		Self
	}
}

impl FakeDataProvider for FakerProvider {
	fn generate(&self) -> Value {
		let words: Vec<String> = Words(3..8).fake();
		json!({
			"name": Name().fake::<String>(),
			"first_name": FirstName().fake::<String>(),
			"last_name": LastName().fake::<String>(),
			"email": SafeEmail().fake::<String>(),
			"company": CompanyName().fake::<String>(),
			"buzzword": Buzzword().fake::<String>(),
			"city": CityName().fake::<String>(),
			"street": StreetName().fake::<String>(),
			"phone": PhoneNumber().fake::<String>(),
			"sentence": Sentence(4..10).fake::<String>(),
			"paragraph": Paragraph(2..5).fake::<String>(),
			"words": words,
		})
	}
}
