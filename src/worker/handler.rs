//! Worker thread implementation for file I/O.
//!
//! Runs deck loading and preference persistence off the plugin thread so the
//! render loop never blocks on the filesystem.

use crate::domain::error::{Result, SwipeDeckError};
use crate::infrastructure::paths;
use crate::storage::{load_deck, JsonStorage, Storage};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// File name of the preference store inside the plugin data directory.
const PREFERENCES_FILE: &str = "preferences.json";

/// Worker thread state. The storage backend is opened on first use.
#[derive(Serialize, Deserialize, Default)]
pub struct SwipeDeckWorker {
    #[serde(skip)]
    storage: Option<Box<dyn Storage>>,
}

impl SwipeDeckWorker {
    /// Creates a worker backed by `storage`.
    #[must_use]
    pub fn with_storage(storage: Box<dyn Storage>) -> Self {
        Self {
            storage: Some(storage),
        }
    }

    fn storage(&mut self) -> Result<&mut Box<dyn Storage>> {
        if self.storage.is_none() {
            let path = paths::get_data_dir().join(PREFERENCES_FILE);
            let storage = JsonStorage::new(path)
                .map_err(|e| SwipeDeckError::Worker(format!("failed to initialize storage: {e}")))?;
            self.storage = Some(Box::new(storage));
        }
        self.storage
            .as_mut()
            .ok_or_else(|| SwipeDeckError::Worker("storage not initialized".to_string()))
    }

    /// Converts an operation result into a response, logging failures.
    fn respond<T, F>(operation: &str, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "worker operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::warn!(operation = operation, error = %e, "worker operation failed");
                WorkerResponse::Error {
                    message: format!("{operation}: {e}"),
                }
            }
        }
    }

    fn handle_load_deck(deck_file: Option<String>) -> WorkerResponse {
        let path = deck_file.as_deref().map(paths::resolve_host_path);
        let source = deck_file.unwrap_or_else(|| "built-in".to_string());

        Self::respond("load deck", load_deck(path.as_deref()), |cards| {
            tracing::info!(count = cards.len(), source = %source, "deck loaded");
            WorkerResponse::DeckLoaded { cards, source }
        })
    }

    fn handle_load_preferences(&mut self) -> WorkerResponse {
        Self::respond(
            "load preferences",
            self.storage().and_then(|storage| storage.load_preferences()),
            |record| WorkerResponse::PreferencesLoaded {
                theme: record.theme,
            },
        )
    }

    fn handle_save_theme(&mut self, theme: crate::domain::ThemeVariant) -> WorkerResponse {
        Self::respond(
            "save theme",
            self.storage().and_then(|storage| storage.save_theme(theme)),
            |()| WorkerResponse::ThemeSaved { theme },
        )
    }

    /// Re-attaches the plugin thread's span as remote parent.
    ///
    /// The returned guard must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(
            opentelemetry::Context::current()
                .with_remote_span_context(span_context)
                .attach(),
        )
    }

    /// Processes one message and returns the response to post back.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        let _guard = tracing::debug_span!("worker_handle_message", message_type = ?message).entered();

        match message {
            WorkerMessage::LoadDeck { deck_file, .. } => Self::handle_load_deck(deck_file),
            WorkerMessage::LoadPreferences { .. } => self.handle_load_preferences(),
            WorkerMessage::SaveTheme { theme, .. } => self.handle_save_theme(theme),
        }
    }
}

static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

fn init_worker_tracing() {
    if !WORKER_TRACING_INITIALIZED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        crate::observability::init_tracing(&crate::Config::default());
    }
}

impl ZellijWorker<'_> for SwipeDeckWorker {
    /// Deserializes a [`WorkerMessage`], handles it and posts the JSON
    /// [`WorkerResponse`] back under the same message name.
    fn on_message(&mut self, message: String, payload: String) {
        init_worker_tracing();

        let response = match serde_json::from_str::<WorkerMessage>(&payload) {
            Ok(worker_message) => self.handle_message(worker_message),
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker message");
                WorkerResponse::Error {
                    message: format!("malformed worker message: {e}"),
                }
            }
        };

        match serde_json::to_string(&response) {
            Ok(payload) => post_message_to_plugin(PluginMessage {
                name: message,
                payload,
                worker_name: None,
            }),
            Err(e) => tracing::warn!(error = %e, "failed to serialize worker response"),
        }
    }
}
