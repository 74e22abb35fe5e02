//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the engine, UI and worker
//! layers. The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → Engine / State Mutations → Actions → Side Effects
//!                           ↑                                          ↓
//!                           └───────── Worker Responses, Frames ───────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Screen mode state machine
//! - [`state`]: Central application state container and view model computation
//! - [`reactions`]: The plugin's swipe callbacks
//! - [`matching`]: Match oracles consulted on Like and SuperLike

pub mod actions;
pub mod handler;
pub mod matching;
pub mod modes;
pub mod reactions;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use matching::{oracle_for_rate, AlwaysMatch, MatchOracle, NeverMatch, ProbabilityMatch};
pub use modes::{MatchInfo, ScreenMode};
pub use reactions::{DeckReactions, Reaction, Tally};
pub use state::AppState;
