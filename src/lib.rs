//! Shelfscout: a Zellij plugin that finds the book behind a messy query.
//!
//! The user types a free-form query ("tolkien hobbit illustrated 1937"), the
//! plugin sends it to a library discovery service, and the service answers
//! with the query it understood plus a ranked list of candidate works.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! │  - key events, web responses, permissions           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Message / Command / AppState                     │
//! │  - pure transition function                         │
//! │  - serial program loop                              │
//! └─────────────────────────────────────────────────────┘
//!         │                                       │
//! ┌───────────────────────┐   ┌─────────────────────────┐
//! │ UI Layer (ui/)        │   │ Gateway (gateway/)      │
//! │ - View models         │   │ - Route + JSON codec    │
//! │ - Components, themes  │   │ - Transport seam        │
//! │                       │   │ - Command runner        │
//! └───────────────────────┘   └─────────────────────────┘
//!         │                                       │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/) & Infrastructure                  │
//! │  - Discovery request/response, error types          │
//! │  - Sandbox paths                                    │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing to a rotating OTLP file    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/shelfscout.wasm" {
//!         endpoint "http://localhost:5000"
//!         theme "catppuccin-latte"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use shelfscout::gateway::{Transport, WebResponse, TICKET_KEY};
//! use shelfscout::{initialize, Config, Message};
//!
//! #[derive(Default)]
//! struct Outbox(Vec<BTreeMap<String, String>>);
//!
//! impl Transport for Outbox {
//!     fn post(
//!         &mut self,
//!         _url: &str,
//!         _headers: BTreeMap<String, String>,
//!         _body: Vec<u8>,
//!         context: BTreeMap<String, String>,
//!     ) {
//!         self.0.push(context);
//!     }
//! }
//!
//! let (mut program, _theme) = initialize(&Config::default(), Outbox::default());
//! program.dispatch(Message::SetInput("hobbit".into()));
//! program.dispatch(Message::Search);
//!
//! let context = program.runner().transport().0[0].clone();
//! assert!(context.contains_key(TICKET_KEY));
//!
//! let body = br#"{"normalizedQuery":{},"candidates":[],"messages":[]}"#.to_vec();
//! program.on_web_response(WebResponse::new(200, body, context));
//! assert!(!program.state().is_loading);
//! ```

pub mod app;
pub mod domain;
pub mod gateway;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{transition, AppState, Command, Message, Program};
pub use domain::{Result, SearchRequest, SearchResponse, ShelfscoutError};
pub use ui::Theme;

use gateway::{CommandRunner, DiscoveryGateway, Endpoint, Transport};
use gateway::{DEFAULT_BASE_URL, DEFAULT_METHOD, DEFAULT_SERVICE};
use std::collections::BTreeMap;

/// Plugin configuration parsed from the Zellij plugin block.
///
/// ```kdl
/// plugin location="file:/path/to/shelfscout.wasm" {
///     endpoint "https://books.example.com"
///     service "LibraryDiscovery"
///     method "discover"
///     theme "catppuccin-mocha"
///     theme_file "~/themes/shelfscout.toml"
///     trace_level "shelfscout=debug"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Where searches are posted.
    pub endpoint: Endpoint,

    /// Built-in theme name: `catppuccin-mocha` or `catppuccin-latte`.
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a TOML theme file. `~` maps to the sandbox home.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`.
    pub trace_level: Option<String>,

    /// Problems found while parsing, reported once tracing is up.
    pub warnings: Vec<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Invalid values never fail: an unusable endpoint falls back to the
    /// defaults and a warning is recorded in [`Config::warnings`].
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use shelfscout::Config;
    ///
    /// let map = BTreeMap::from([
    ///     ("endpoint".to_string(), "ftp://books".to_string()),
    ///     ("theme".to_string(), "catppuccin-latte".to_string()),
    /// ]);
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.endpoint.url(), "http://localhost:5000/api/LibraryDiscovery/discover");
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// assert_eq!(config.warnings.len(), 1);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let mut warnings = Vec::new();

        let base_url = value("endpoint").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let service = value("service").unwrap_or_else(|| DEFAULT_SERVICE.to_string());
        let method = value("method").unwrap_or_else(|| DEFAULT_METHOD.to_string());

        let endpoint = Endpoint::parse(&base_url, &service, &method).unwrap_or_else(|e| {
            warnings.push(format!("{e}; using {}", Endpoint::default().url()));
            Endpoint::default()
        });

        Self {
            endpoint,
            theme_name: value("theme"),
            theme_file: value("theme_file"),
            trace_level: value("trace_level"),
            warnings,
        }
    }

    /// Resolves the configured theme, falling back to the default.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %path, error = %e, "failed to load theme file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_deref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the program and theme for a parsed configuration.
///
/// Reports configuration warnings through `tracing`, so call it after
/// [`observability::init_tracing`].
pub fn initialize<T: Transport>(config: &Config, transport: T) -> (Program<T>, Theme) {
    tracing::debug!(endpoint = %config.endpoint.url(), "initializing shelfscout plugin");

    for warning in &config.warnings {
        tracing::warn!(warning = %warning, "invalid configuration");
    }

    let runner = CommandRunner::new(DiscoveryGateway::new(&config.endpoint), transport);
    (Program::new(runner), config.load_theme())
}
