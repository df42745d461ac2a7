//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the Shelfscout library and Zellij: it
//! implements `ZellijPlugin`, turns host events into messages and provides
//! the [`Transport`] that sends discovery calls through `web_request`.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: parse config, initialize tracing, build the program
//! 2. **Permissions**: request `WebAccess`
//! 3. **Subscribe**: `Key`, `WebRequestResult`, `PermissionRequestResult`
//! 4. **Update**: keys and web responses go through the program loop
//! 5. **Render**: delegate to the library renderer
//!
//! # Event Mapping
//!
//! - `Key` → [`map_key`] → `Message` or close
//! - `WebRequestResult` → `Program::on_web_response`
//! - `PermissionRequestResult` → `Program::set_access`

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use shelfscout::app::{map_key, KeyIntent};
use shelfscout::gateway::{Access, Transport, WebResponse};
use shelfscout::{Config, Program, Theme};

register_plugin!(State);

/// Sends discovery calls with the host's asynchronous HTTP facility.
///
/// The completion comes back later as a `WebRequestResult` event carrying
/// the same context map.
#[derive(Debug, Default)]
struct ZellijTransport;

impl Transport for ZellijTransport {
    fn post(
        &mut self,
        url: &str,
        headers: BTreeMap<String, String>,
        body: Vec<u8>,
        context: BTreeMap<String, String>,
    ) {
        web_request(url, HttpVerb::Post, headers, body, context);
    }
}

/// Plugin state wrapper.
struct State {
    program: Program<ZellijTransport>,
    theme: Theme,
}

impl Default for State {
    fn default() -> Self {
        let (program, theme) = shelfscout::initialize(&Config::default(), ZellijTransport);
        Self { program, theme }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        shelfscout::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        let (program, theme) = shelfscout::initialize(&config, ZellijTransport);
        self.program = program;
        self.theme = theme;
        tracing::debug!(theme = %self.theme.name, "program initialized");

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Returns `true` if the UI should re-render.
    fn update(&mut self, event: Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let _guard =
            tracing::debug_span!("plugin_update_event", event_type = %event_name).entered();

        match event {
            Event::Key(key) => match map_key(&key, self.program.state()) {
                Some(KeyIntent::Dispatch(message)) => self.program.dispatch(message),
                Some(KeyIntent::Close) => {
                    tracing::debug!("closing plugin pane");
                    hide_self();
                    false
                }
                None => false,
            },
            Event::WebRequestResult(status, _headers, body, context) => {
                self.program
                    .on_web_response(WebResponse::new(status, body, context))
            }
            Event::PermissionRequestResult(status) => {
                let access = match status {
                    PermissionStatus::Granted => Access::Granted,
                    PermissionStatus::Denied => {
                        tracing::warn!("web access denied - searches will fail");
                        Access::Denied
                    }
                };
                self.program.set_access(access)
            }
            _ => false,
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        shelfscout::ui::render(self.program.state(), &self.theme, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &Event) -> String {
        match event {
            Event::Key(key) => format!("Key({:?})", key.bare_key),
            Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }
}
