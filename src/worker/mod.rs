//! Background worker thread for file I/O.
//!
//! Deck loading and preference persistence run on Zellij's worker thread so
//! the plugin's render loop never blocks.
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::SwipeDeckWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
