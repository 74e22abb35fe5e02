//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the SwipeDeck library and the Zellij plugin
//! system. It implements `ZellijPlugin` and registers the `ZellijWorker`, maps
//! Zellij events to library events, and runs the actions the library returns.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← Swipe engine, event handling
//! │  └──────────────────┘   │
//! │          │              │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │ SwipeDeckWorker  │   │  ← Deck files, preferences
//! │  │ (worker thread)  │   │
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Key, Mouse, Timer, `CustomMessage` and permission events
//! 3. **Permissions granted**: Ask the worker for preferences and the deck
//! 4. **Update**: Map events, delegate to `handle_event`, run actions
//! 5. **Frames**: While anything animates, a 60 Hz timer drives `Event::Frame`
//! 6. **Render**: Resize the engine viewport, then draw
//!
//! # Event Mapping
//!
//! - `Mouse(LeftClick)` → `Event::PointerDown`
//! - `Mouse(Hold)` → `Event::PointerDrag`
//! - `Mouse(Release)` → `Event::PointerUp`
//! - `Timer` → `Event::Frame { dt }`
//! - `CustomMessage` → `Event::WorkerResponse`
//!
//! # Keybindings
//!
//! - `h`/`Left`: Pass
//! - `l`/`Right`: Like
//! - `k`/`Up`: Super like
//! - `u`: Undo
//! - `Space`/`Enter`: Next photo (dismisses the match banner)
//! - `t`: Toggle theme
//! - `r`: Reload deck
//! - `Esc`: Dismiss banner or cancel drag
//! - `q`: Close plugin

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::time::Instant;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use swipedeck::domain::SwipeDirection;
use swipedeck::worker::{SwipeDeckWorker, WorkerMessage, WorkerResponse};
use swipedeck::{handle_event, Action, Config, Event};

register_plugin!(State);
register_worker!(SwipeDeckWorker, swipedeck_worker, SWIPEDECK_WORKER);

/// Interval between animation frames, in seconds.
const FRAME_INTERVAL: f64 = 1.0 / 60.0;

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with the Zellij-specific clock used to
/// timestamp pointer samples and measure frame intervals.
struct State {
    app: swipedeck::AppState,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,

    /// Origin of pointer sample timestamps.
    started: Instant,

    /// When the pending animation frame was scheduled.
    frame_requested: Option<Instant>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: swipedeck::initialize(&Config::default()),
            worker_name: "swipedeck".to_string(),
            started: Instant::now(),
            frame_requested: None,
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, initializes tracing and state, then requests
    /// permissions and subscribes to events.
    ///
    /// # Permissions
    ///
    /// - `ReadApplicationState` / `ChangeApplicationState`: pane control
    /// - `FullHdAccess`: Read deck files and custom themes
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        swipedeck::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?config, "parsed configuration");
        self.app = swipedeck::initialize(&config);

        request_permission(&[
            PermissionType::ReadApplicationState,
            PermissionType::ChangeApplicationState,
            PermissionType::FullHdAccess,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::Timer,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::trace_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match Self::map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(mouse) => match self.map_mouse_event(mouse) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_) => self.map_timer_event(),
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Granted) => {
                tracing::debug!("permissions granted - loading deck");
                Event::PermissionsGranted
            }
            zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Denied) => {
                tracing::warn!("permissions denied - deck files and preferences unavailable");
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
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

    fn render(&mut self, rows: usize, cols: usize) {
        if self.app.resize(rows, cols) {
            tracing::debug!(rows, cols, "pane resized");
        }
        swipedeck::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
            zellij_tile::prelude::Event::Timer(_) => "Timer".to_string(),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Left | BareKey::Char('h') => Event::Swipe(SwipeDirection::Left),
            BareKey::Right | BareKey::Char('l') => Event::Swipe(SwipeDirection::Right),
            BareKey::Up | BareKey::Char('k') => Event::Swipe(SwipeDirection::Up),
            BareKey::Char('u') => Event::Undo,
            BareKey::Char(' ') | BareKey::Enter => Event::NextPhoto,
            BareKey::Char('t') => Event::ToggleTheme,
            BareKey::Char('r') => Event::ReloadDeck,
            BareKey::Esc => Event::Escape,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Maps mouse events to pointer events timestamped from plugin start.
    fn map_mouse_event(&self, mouse: Mouse) -> Option<Event> {
        let t = self.started.elapsed().as_secs_f64();
        Some(match mouse {
            Mouse::LeftClick(row, col) => Event::PointerDown { row, col, t },
            Mouse::Hold(row, col) => Event::PointerDrag { row, col, t },
            Mouse::Release(row, col) => Event::PointerUp { row, col, t },
            _ => return None,
        })
    }

    fn map_timer_event(&mut self) -> Event {
        let dt = self
            .frame_requested
            .take()
            .map_or(FRAME_INTERVAL, |requested| requested.elapsed().as_secs_f64());
        Event::Frame { dt }
    }

    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        if message != self.worker_name {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }
        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => {
                tracing::debug!(response = ?response, "worker response received");
                Some(Event::WorkerResponse(response))
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    /// Serializes `message` as JSON and posts it to the worker thread.
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

    /// Translates library actions to Zellij API calls.
    fn execute_action(&mut self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::PostToWorker(ref message) => {
                tracing::debug!(message = ?message, "posting message to worker");
                self.post_worker_message(message);
            }
            Action::ScheduleFrame => {
                self.frame_requested = Some(Instant::now());
                set_timeout(FRAME_INTERVAL);
            }
        }
    }
}
