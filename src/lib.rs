//! Vitrine: a Zellij plugin that browses a product catalog in the terminal.
//!
//! Vitrine turns a JSON product list into a browsable storefront pane:
//! - Card grid with category filtering and free-text substring search
//! - Detail view per product with image gallery and price-variant selection
//! - Variant-aware pricing ("a partir de" minimum on cards, per-variant price
//!   in the detail view)
//! - Non-transactional "Tenho interesse" action with an optional WhatsApp
//!   deep link (no cart, no checkout)
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and detail-view transitions       │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (catalog/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - Store/view  │   │ - Async load  │
//! │ - Theming     │   │ - Filters     │   │ - IPC bridge  │
//! │ - Components  │   │               │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Pricing, Storage & Share Layers            │
//! │  - Product/variant models (domain/)                 │
//! │  - Display prices (pricing/)                        │
//! │  - JSON catalog source (storage/)                   │
//! │  - Interest messaging (share/)                      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing, file-based export         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/vitrine.wasm" {
//!         catalog_path "~/catalogo/products.json"
//!         whatsapp_phone "5599999999999"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse configuration, initialize tracing,
//!    create `AppState`, subscribe to Zellij events
//! 2. **Catalog Load**: once permissions are granted, the worker thread reads
//!    the catalog document and replies with the parsed product list, the one
//!    asynchronous operation in the plugin
//! 3. **UI Rendering**: compute the view model from state and render the
//!    component tree (header, grid or detail, footer, notice)
//! 4. **Interaction**: keys map to events; `handle_event` mutates state and
//!    returns actions the shim executes
//!
//! # Example
//!
//! ```
//! use vitrine::{handle_event, initialize, Config, Event};
//!
//! let config = Config::default();
//! let mut state = initialize(&config);
//!
//! let (should_render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(actions.is_empty());
//! # let _ = should_render;
//! # Ok::<(), vitrine::VitrineError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod pricing;
pub mod share;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, CatalogStatus, DetailState, Event, InputMode};
pub use domain::{Product, Result, Variant, VitrineError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization. Every field is optional;
/// parsing is lenient with typed fallbacks.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Path to the catalog JSON document.
    ///
    /// Tilde paths resolve against the sandbox host mount. Default:
    /// `<data dir>/products.json`.
    pub catalog_path: Option<String>,

    /// WhatsApp phone for the interest deep link (DDI + DDD + number).
    ///
    /// When unset, the interest action only shows a confirmation notice.
    pub whatsapp_phone: Option<String>,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. Values are extracted leniently: the phone number
    /// keeps digits only (the deep link accepts nothing else) and empty
    /// strings count as absent.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use vitrine::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("catalog_path".to_string(), "~/loja/products.json".to_string());
    /// map.insert("whatsapp_phone".to_string(), "+55 (99) 99999-9999".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.catalog_path.as_deref(), Some("~/loja/products.json"));
    /// assert_eq!(config.whatsapp_phone.as_deref(), Some("5599999999999"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let whatsapp_phone = non_empty("whatsapp_phone")
            .map(|raw| raw.chars().filter(char::is_ascii_digit).collect::<String>())
            .filter(|digits| !digits.is_empty());

        Self {
            catalog_path: non_empty("catalog_path"),
            whatsapp_phone,
            theme_name: non_empty("theme"),
            theme_file: non_empty("theme_file"),
            trace_level: non_empty("trace_level"),
        }
    }
}

/// Initializes the plugin with configuration.
///
/// Creates a new [`AppState`] with the resolved theme (file, then name, then
/// default) and the configured phone. The catalog starts empty; the worker
/// populates it once the one-shot load resolves.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing vitrine plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme, config.whatsapp_phone.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parses_leniently() {
        let mut map = BTreeMap::new();
        map.insert("whatsapp_phone".to_string(), "  +55 (99) 99999-9999 ".to_string());
        map.insert("theme".to_string(), String::new());

        let config = Config::from_zellij(&map);
        assert_eq!(config.whatsapp_phone.as_deref(), Some("5599999999999"));
        assert_eq!(config.theme_name, None);
        assert_eq!(config.catalog_path, None);
    }

    #[test]
    fn initialize_starts_empty_and_loading() {
        let state = initialize(&Config::default());
        assert!(state.store.all().is_empty());
        assert_eq!(state.status, CatalogStatus::Loading);
        assert!(!state.detail.is_open());
    }
}
