//! Event handling and state transition logic.
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime or worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and its engine
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Pointer**: `PointerDown`, `PointerDrag`, `PointerUp` (cell coordinates
//!   plus a timestamp in seconds)
//! - **Deck**: `Swipe`, `Undo`, `NextPhoto`, `ReloadDeck`, `Escape`
//! - **Appearance**: `ToggleTheme`
//! - **System**: `PermissionsGranted`, `Frame`, `CloseFocus`
//! - **Worker**: `WorkerResponse` with typed message variants
//!
//! # Example
//!
//! ```rust
//! use swipedeck::app::{handle_event, AppState, Event};
//! use swipedeck::Config;
//!
//! let mut state = AppState::new(&Config::default());
//! let (render, actions) = handle_event(&mut state, &Event::PermissionsGranted)?;
//! assert!(!render);
//! assert_eq!(actions.len(), 2); // load preferences, load deck
//! # Ok::<(), swipedeck::SwipeDeckError>(())
//! ```

use crate::app::modes::ScreenMode;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::SwipeDirection;
use crate::engine::GestureOutcome;
use crate::ui::components::{button_at, ActionButton};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input, system changes, or worker responses.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Primary button pressed at a pane cell. `t` is in seconds.
    PointerDown { row: isize, col: usize, t: f64 },
    /// Pointer moved (or held) with the button down.
    PointerDrag { row: isize, col: usize, t: f64 },
    /// Primary button released.
    PointerUp { row: isize, col: usize, t: f64 },

    /// Imperative swipe from an action key or button.
    Swipe(SwipeDirection),
    /// Brings back the last decided card.
    Undo,
    /// Shows the front card's next photo.
    NextPhoto,
    /// Switches between the light and dark scheme and persists the choice.
    ToggleTheme,
    /// Asks the worker for a fresh deck.
    ReloadDeck,
    /// Dismisses the match banner, or cancels a running drag.
    Escape,
    /// Hides the plugin pane.
    CloseFocus,

    /// Plugin permissions were granted; initial loading may start.
    PermissionsGranted,

    /// An animation frame elapsed `dt` seconds after the previous one.
    Frame { dt: f64 },

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns whether to
/// re-render plus the actions to execute.
///
/// # Errors
///
/// Currently every event is handled infallibly; the `Result` keeps the
/// plugin shim's error path in place for handlers that need it.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let mut actions = vec![];
    let render = match event {
        Event::PointerDown { row, col, t } => pointer_down(state, *row, *col, *t),
        Event::PointerDrag { row, col, t } => {
            let Some(front) = state.front_id() else {
                return Ok((false, actions));
            };
            let at = state.geometry().to_points(*row, *col as isize);
            state.engine.update_gesture(&front, at, *t)
        }
        Event::PointerUp { row, col, t } => {
            let Some(front) = state.front_id() else {
                return Ok((false, actions));
            };
            if state.engine.drag().is_none() {
                return Ok((false, actions));
            }
            let at = state.geometry().to_points(*row, *col as isize);
            match state.engine.end_gesture(&front, at, *t) {
                GestureOutcome::Committed(decision) => {
                    tracing::debug!(decision = %decision, "drag committed");
                    state.status = None;
                }
                GestureOutcome::Tapped => tracing::debug!("card tapped"),
                GestureOutcome::Cancelled | GestureOutcome::Ignored => {}
            }
            true
        }
        Event::Swipe(direction) => swipe(state, *direction),
        Event::Undo => undo(state),
        Event::NextPhoto => {
            if let ScreenMode::Match(_) = state.mode {
                state.mode = ScreenMode::Deck;
                true
            } else {
                state.mode.accepts_swipes() && state.engine.next_photo()
            }
        }
        Event::ToggleTheme => {
            let variant = state.themes.toggle();
            tracing::debug!(theme = %variant, "theme toggled");
            actions.push(Action::PostToWorker(WorkerMessage::save_theme(variant)));
            true
        }
        Event::ReloadDeck => {
            tracing::debug!(deck_file = ?state.deck_file, "reloading deck");
            state.mode = ScreenMode::Loading;
            state.status = None;
            actions.push(Action::PostToWorker(WorkerMessage::load_deck(state.deck_file.clone())));
            true
        }
        Event::Escape => {
            if let ScreenMode::Match(_) = state.mode {
                state.mode = ScreenMode::Deck;
            } else {
                state.engine.reset();
                state.status = None;
            }
            true
        }
        Event::CloseFocus => {
            actions.push(Action::CloseFocus);
            false
        }
        Event::PermissionsGranted => {
            actions.push(Action::PostToWorker(WorkerMessage::load_preferences()));
            actions.push(Action::PostToWorker(WorkerMessage::load_deck(state.deck_file.clone())));
            false
        }
        Event::Frame { dt } => {
            state.frame_delivered();
            state.engine.tick(*dt);
            true
        }
        Event::WorkerResponse(response) => worker_response(state, response),
    };

    state.absorb_reactions();
    if state.claim_frame() {
        actions.push(Action::ScheduleFrame);
    }

    Ok((render, actions))
}

fn pointer_down(state: &mut AppState, row: isize, col: usize, t: f64) -> bool {
    if let ScreenMode::Match(_) = state.mode {
        state.mode = ScreenMode::Deck;
        return true;
    }
    if !state.mode.accepts_swipes() {
        return false;
    }

    let geometry = *state.geometry();
    if usize::try_from(row).ok() == Some(geometry.action_bar_row()) {
        return match button_at(geometry.cols(), &state.action_bar(), col) {
            Some(ActionButton::Swipe(decision)) => swipe(state, decision.into()),
            Some(ActionButton::Undo) => undo(state),
            None => false,
        };
    }

    let Some(front) = state.front_id() else {
        return false;
    };
    if !state.hits_front_card(row, col as isize) {
        return false;
    }
    let at = geometry.to_points(row, col as isize);
    state.engine.begin_gesture(&front, at, t)
}

fn swipe(state: &mut AppState, direction: SwipeDirection) -> bool {
    if !state.mode.accepts_swipes() {
        tracing::debug!(direction = ?direction, "swipe ignored outside the deck view");
        return false;
    }
    match state.engine.force_swipe(direction) {
        Some(decision) => {
            tracing::debug!(decision = %decision, "forced swipe");
            state.status = None;
            true
        }
        None => false,
    }
}

fn undo(state: &mut AppState) -> bool {
    if !state.mode.accepts_swipes() {
        return false;
    }
    match state.engine.undo() {
        Some(card) => {
            tracing::debug!(card = %card, "undo");
            state.status = None;
            true
        }
        None => false,
    }
}

fn worker_response(state: &mut AppState, response: &WorkerResponse) -> bool {
    match response {
        WorkerResponse::DeckLoaded { cards, source } => {
            state.load_deck(cards.clone(), source);
            true
        }
        WorkerResponse::PreferencesLoaded { theme } => {
            if state.themes.variant() == *theme {
                return false;
            }
            tracing::debug!(theme = %theme, "applying saved theme");
            state.themes.set_variant(*theme);
            true
        }
        WorkerResponse::ThemeSaved { theme } => {
            tracing::debug!(theme = %theme, "theme preference saved");
            false
        }
        WorkerResponse::Error { message } => {
            tracing::error!("Worker error: {}", message);
            if state.mode == ScreenMode::Loading {
                state.mode = ScreenMode::Deck;
            }
            state.status = Some(message.clone());
            true
        }
    }
}
