//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Vitrine library
//! and the Zellij plugin system. It implements the `ZellijPlugin` and
//! `ZellijWorker` traits to handle Zellij events and lifecycle.
//!
//! The entry points only exist on the wasm target, since the plugin runs
//! inside Zellij's WASM runtime; a native build produces a stub binary.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: register for `Key`, `CustomMessage`, `Timer`,
//!    `PermissionRequestResult` events
//! 3. **Initial Load**: once permissions arrive, post `LoadCatalog` to the
//!    worker (the one asynchronous operation; no retries, no refresh)
//! 4. **Update**: translate Zellij events to library events, delegate to
//!    `handle_event`, execute returned actions
//! 5. **Render**: call the library render function
//!
//! # Keybindings
//!
//! Browsing:
//! - `j`/`Down`, `k`/`Up`, `Ctrl+n`/`Ctrl+p`: move selection
//! - `Enter`: open the selected product
//! - `/`: search; `Esc`: leave search
//! - `c`/`Tab`: next category filter; `a`: all categories
//! - `q`: close the plugin
//!
//! Detail view:
//! - `1`-`9`: select a variant (out-of-range keys clear the selection)
//! - `g`: next gallery image
//! - `i`: register interest (notice + optional WhatsApp deep link)
//! - `Esc`/`q`: close the detail view

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_arch = "wasm32")]
use std::collections::BTreeMap;
#[cfg(target_arch = "wasm32")]
use zellij_tile::prelude::*;
#[cfg(target_arch = "wasm32")]
use zellij_tile::shim::post_message_to;

#[cfg(target_arch = "wasm32")]
use vitrine::worker::{VitrineWorker, WorkerMessage, WorkerResponse};
#[cfg(target_arch = "wasm32")]
use vitrine::{handle_event, Action, Config, Event, InputMode};

#[cfg(target_arch = "wasm32")]
register_plugin!(State);
#[cfg(target_arch = "wasm32")]
register_worker!(CatalogWorker, vitrine_worker, VITRINE_WORKER);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns: worker
/// communication and the configured catalog path.
#[cfg(target_arch = "wasm32")]
struct State {
    /// Core application state from the library layer.
    app: vitrine::AppState,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,

    /// Configured catalog path override, forwarded to the worker.
    catalog_path: Option<String>,
}

#[cfg(target_arch = "wasm32")]
impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: vitrine::initialize(&default_config),
            worker_name: "vitrine".to_string(),
            catalog_path: None,
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Parses configuration, initializes application state, requests
    /// permissions, and subscribes to events. The catalog load itself waits
    /// for the permission grant.
    ///
    /// # Permissions
    ///
    /// - `RunCommands`: open the WhatsApp deep link on the host
    /// - `FullHdAccess`: read the catalog document from the worker thread
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        vitrine::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(catalog_path = ?config.catalog_path, "plugin loading started");
        self.app = vitrine::initialize(&config);
        self.catalog_path = config.catalog_path.clone();

        request_permission(&[PermissionType::RunCommands, PermissionType::FullHdAccess]);

        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to
    /// `handle_event`, and executes resulting actions. Returns `true` if the
    /// UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::NoticeTimeout,
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                self.handle_permission_result(permissions);
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI by delegating to the library's rendering layer.
    fn render(&mut self, rows: usize, cols: usize) {
        vitrine::ui::render(&self.app, rows, cols);
    }
}

#[cfg(target_arch = "wasm32")]
impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    ///
    /// The mapping is mode-aware: the detail view captures variant/gallery/
    /// interest keys, search mode turns letters into query characters, and
    /// normal mode owns navigation and filter keys.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if self.app.detail.is_open() {
            return Some(match key.bare_key {
                BareKey::Esc | BareKey::Char('q') => Event::CloseDetail,
                BareKey::Char('i') => Event::ExpressInterest,
                BareKey::Char('g') => Event::CyclePreview,
                BareKey::Char(c) if c.is_ascii_digit() => Event::VariantKey(c),
                _ => return None,
            });
        }

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => match self.app.input_mode {
                InputMode::Search(_) => Event::Char('j'),
                InputMode::Normal => Event::KeyDown,
            },
            BareKey::Up | BareKey::Char('k') => match self.app.input_mode {
                InputMode::Search(_) => Event::Char('k'),
                InputMode::Normal => Event::KeyUp,
            },
            BareKey::Esc => match self.app.input_mode {
                InputMode::Search(_) => Event::ExitSearch,
                InputMode::Normal => Event::Escape,
            },
            BareKey::Char('q') if self.app.input_mode == InputMode::Normal => Event::CloseFocus,
            BareKey::Enter => match self.app.input_mode {
                InputMode::Search(vitrine::app::modes::SearchFocus::Typing) => Event::FocusResults,
                _ => Event::SelectProduct,
            },
            BareKey::Char('/') => match self.app.input_mode {
                InputMode::Normal => Event::SearchMode,
                InputMode::Search(_) => Event::FocusSearchBar,
            },
            BareKey::Char('c') if self.app.input_mode == InputMode::Normal => Event::CycleCategory,
            BareKey::Tab if self.app.input_mode == InputMode::Normal => Event::CycleCategory,
            BareKey::Char('a') if self.app.input_mode == InputMode::Normal => Event::ResetCategory,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Handles permission request results.
    ///
    /// The catalog load is deferred until here: the worker needs filesystem
    /// access before it can read the document.
    fn handle_permission_result(&self, permissions: PermissionStatus) {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted - requesting catalog load");
                self.post_worker_message(&WorkerMessage::load_catalog(self.catalog_path.clone()));
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - catalog cannot be loaded");
            }
        }
    }

    /// Maps custom message events to application events.
    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        tracing::debug!(message_name = %message, payload_len = payload.len(), "custom message event");

        if message == self.worker_name {
            match serde_json::from_str::<WorkerResponse>(payload) {
                Ok(response) => Some(Event::WorkerResponse(response)),
                Err(e) => {
                    tracing::debug!(error = %e, "failed to deserialize worker response");
                    None
                }
            }
        } else {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            None
        }
    }

    /// Posts a message to the worker thread.
    ///
    /// Serializes the message as JSON and sends via Zellij's IPC system.
    /// Serialization errors are logged, not propagated.
    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(&message) {
            Ok(payload) => {
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// # Actions
    ///
    /// - `CloseFocus`: hide the plugin pane
    /// - `PostToWorker`: send IPC message to the worker thread
    /// - `OpenLink`: open the interest deep link via the host's opener
    /// - `ScheduleNoticeDismiss`: arm the notice-dwell timer
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::PostToWorker(ref message) => {
                tracing::debug!(message = ?message, "posting message to worker");
                self.post_worker_message(message);
            }
            Action::OpenLink { ref url } => {
                tracing::debug!(url = %url, "opening interest link");
                run_command(&["xdg-open", url.as_str()], BTreeMap::new());
            }
            Action::ScheduleNoticeDismiss { seconds } => {
                tracing::debug!(seconds = seconds, "scheduling notice dismissal");
                set_timeout(*seconds);
            }
        }
    }
}

/// Worker shim binding the library's worker logic to Zellij's worker API.
///
/// Tracing is initialized once per worker thread; responses are serialized
/// and posted back to the plugin under the shared worker name.
#[cfg(target_arch = "wasm32")]
#[derive(Default, serde::Serialize, serde::Deserialize)]
struct CatalogWorker {
    #[serde(skip)]
    inner: VitrineWorker,
}

/// Tracks whether worker tracing has been initialized.
#[cfg(target_arch = "wasm32")]
static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

#[cfg(target_arch = "wasm32")]
impl ZellijWorker<'_> for CatalogWorker {
    /// Handles incoming messages from the main plugin thread.
    ///
    /// Deserializes the payload, processes it via the library layer, and
    /// posts the serialized response back under the same message name.
    fn on_message(&mut self, message: String, payload: String) {
        use zellij_tile::shim::post_message_to_plugin;

        if !WORKER_TRACING_INITIALIZED.load(std::sync::atomic::Ordering::Relaxed) {
            vitrine::observability::init_tracing(&Config::default());
            WORKER_TRACING_INITIALIZED.store(true, std::sync::atomic::Ordering::Relaxed);
        }

        let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                return;
            }
        };

        let response = self.inner.handle_message(worker_message);

        match serde_json::to_string(&response) {
            Ok(payload) => {
                post_message_to_plugin(PluginMessage {
                    name: message,
                    payload,
                    worker_name: None,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker response");
            }
        }
    }
}

/// Native builds get a stub: the plugin itself targets `wasm32-wasip1`.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("vitrine is a Zellij plugin; build it with `cargo build --target wasm32-wasip1`");
    eprintln!("and load the resulting .wasm from a Zellij layout.");
}
