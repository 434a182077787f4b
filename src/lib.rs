//! # Styleguide Templates
//!
//! Tera helpers for style-guide and component documentation pages.
//!
//! Templates get functions to list icon assets, load YAML fixture data, show
//! a component next to its HTML source, read a pass-consistent clock, query
//! the host's color palette, and embed inline SVG. An optional fake-data
//! provider surfaces as a `faker` global for demo content.
//!
//! ## Registered functions
//!
//! | Name | Behavior |
//! |------|----------|
//! | `icon_list`, `icons` | icon names under `<root>/images/icons/<category>` |
//! | `load_data` | YAML fixture from `<root>/data/<type>.yml` |
//! | `get_current_datetime` | frozen clock, optional relative `modify` |
//! | `get_ui_and_html`, `ui_and_html` | markup plus its escaped source |
//! | `color_groups`, `luminance` | color-service passthroughs (when injected) |
//! | `embed_svg` | inline SVG markup (when injected) |
//!
//! ## Example
//!
//! ```rust
//! use styleguide_templates::{StyleguideConfig, StyleguideExtension};
//! use tera::Tera;
//!
//! let mut tera = Tera::default();
//! let extension = StyleguideExtension::new(StyleguideConfig::new("htmldev"));
//! extension.register_functions(&mut tera);
//!
//! tera.add_raw_template("snippet", r#"{{ get_ui_and_html(html="<b>hi</b>") }}"#)
//!     .unwrap();
//! let page = tera.render("snippet", &extension.globals()).unwrap();
//! assert!(page.contains("&lt;b&gt;hi&lt;/b&gt;"));
//! ```

pub mod clock;
pub mod colors;
pub mod config;
pub mod error;
pub mod escaping;
pub mod fake_data;
pub mod fixtures;
pub mod icons;
pub mod snippets;

pub use clock::{CurrentDatetime, FrozenClock, apply_modifier};
pub use colors::{ColorGroups, ColorService, EmbedSvg, Luminance, SvgService};
pub use config::StyleguideConfig;
pub use error::{StyleguideError, StyleguideResult};
pub use escaping::escape_html;
pub use fake_data::{FakeDataProvider, FakerProvider};
pub use fixtures::{LoadData, load_fixture};
pub use icons::{IconList, icon_names};
pub use snippets::{UiAndHtml, render_with_source};

use std::sync::Arc;

use tera::{Context, Tera};

/// The style-guide template extension.
///
/// Bundles the configuration, the pass-scoped clock, and the optional
/// collaborator handles, and registers every helper function on a [`Tera`]
/// instance.
///
/// The clock freezes at its first reading, so the extension's lifetime
/// decides the clock's scope: construct one extension per render pass (the
/// recommended setup for a long-lived server) and every date on the produced
/// page reads the same; share one extension across passes and the freeze
/// spans them all, like the original single-request-per-process deployments.
pub struct StyleguideExtension {
	config: StyleguideConfig,
	clock: FrozenClock,
	colors: Option<Arc<dyn ColorService>>,
	svg: Option<Arc<dyn SvgService>>,
	fake_data: Option<Arc<dyn FakeDataProvider>>,
}

impl StyleguideExtension {
	/// Creates an extension with no collaborators and a fresh clock.
	pub fn new(config: StyleguideConfig) -> Self {
		Self {
			config,
			clock: FrozenClock::new(),
			colors: None,
			svg: None,
			fake_data: None,
		}
	}

	/// Replaces the clock, e.g. with [`FrozenClock::fixed`] for deterministic
	/// pages.
	pub fn with_clock(mut self, clock: FrozenClock) -> Self {
		self.clock = clock;
		self
	}

	/// Injects the color-palette collaborator, enabling `color_groups` and
	/// `luminance`.
	pub fn with_color_service(mut self, service: Arc<dyn ColorService>) -> Self {
		self.colors = Some(service);
		self
	}

	/// Injects the SVG collaborator, enabling `embed_svg`.
	pub fn with_svg_service(mut self, service: Arc<dyn SvgService>) -> Self {
		self.svg = Some(service);
		self
	}

	/// Injects the fake-data provider, enabling the `faker` global.
	pub fn with_fake_data(mut self, provider: Arc<dyn FakeDataProvider>) -> Self {
		self.fake_data = Some(provider);
		self
	}

	/// The extension's clock.
	pub fn clock(&self) -> &FrozenClock {
		&self.clock
	}

	/// Registers every helper function on `tera`.
	///
	/// `icon_list`/`icons` and `get_ui_and_html`/`ui_and_html` are two names
	/// for one implementation each; the older names are kept for existing
	/// templates. Collaborator functions are only registered when the
	/// corresponding service was injected.
	pub fn register_functions(&self, tera: &mut Tera) {
		tera.register_function("icon_list", IconList::new(self.config.root.clone()));
		tera.register_function("icons", IconList::new(self.config.root.clone()));
		tera.register_function("load_data", LoadData::new(self.config.root.clone()));
		tera.register_function("get_current_datetime", CurrentDatetime::new(self.clock.clone()));
		tera.register_function("get_ui_and_html", UiAndHtml);
		tera.register_function("ui_and_html", UiAndHtml);

		if let Some(colors) = &self.colors {
			tera.register_function("color_groups", ColorGroups::new(Arc::clone(colors)));
			tera.register_function("luminance", Luminance::new(Arc::clone(colors)));
		}
		if let Some(svg) = &self.svg {
			tera.register_function("embed_svg", EmbedSvg::new(Arc::clone(svg)));
		}
	}

	/// Template globals: a fresh `faker` value when a provider was injected,
	/// otherwise an empty context.
	pub fn globals(&self) -> Context {
		let mut context = Context::new();
		if let Some(provider) = &self.fake_data {
			context.insert("faker", &provider.generate());
		}
		context
	}
}
