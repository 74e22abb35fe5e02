//! SwipeDeck: a Zellij plugin that turns drags into swipe decisions.
//!
//! SwipeDeck shows a stack of profile cards in a terminal pane and provides:
//! - A headless swipe decision engine: pointer drags on the front card become
//!   Pass / Like / SuperLike decisions, with spring and exit animations
//! - Keyboard and button swipes that take the same commit path as gestures
//! - Live LIKE / NOPE / SUPER LIKE hint badges while dragging
//! - Undo of the most recent decision and a match banner for positive ones
//! - Light and dark themes, with the choice persisted across sessions
//! - Deck loading from a JSON file on a Zellij worker thread
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, action dispatching               │
//! │  - Swipe callbacks (DeckReactions + MatchOracle)    │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Engine        │   │ UI Layer      │   │ Worker Layer  │
//! │ (engine/)     │   │ (ui/)         │   │ (worker/)     │
//! │ - Gestures    │   │ - Canvas      │   │ - Deck load   │
//! │ - Classifier  │   │ - Components  │   │ - Preferences │
//! │ - Presenter   │   │ - Theming     │   │ - IPC bridge  │
//! │ - Dispatcher  │   │               │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                                                   │
//! ┌─────────────────────────────────────────────────────┐
//! │  Storage, Infrastructure & Domain Layers            │
//! │  - JSON preference file, deck files (storage/)      │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Cards, decisions, errors (domain/)               │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`engine`]: Swipe decision engine (framework independent)
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (Card, Decision, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`storage`]: Preference persistence and deck files
//! - [`worker`]: Background worker for file I/O
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/swipedeck.wasm" {
//!         theme "dark"
//!         deck_file "~/decks/nearby.json"
//!         match_rate "0.3"
//!         swipe_threshold "0.25"
//!         velocity_threshold "600"
//!         stack_depth "3"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use swipedeck::domain::{Card, Profile, SwipeDirection};
//! use swipedeck::worker::WorkerResponse;
//! use swipedeck::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config { match_rate: 0.0, ..Default::default() });
//!
//! let cards = vec![
//!     Card::new("a", Profile { name: "Ava".into(), age: 24, ..Default::default() }),
//!     Card::new("b", Profile { name: "Mia".into(), age: 29, ..Default::default() }),
//! ];
//! handle_event(&mut state, &Event::WorkerResponse(WorkerResponse::DeckLoaded {
//!     cards,
//!     source: "built-in".into(),
//! }))?;
//!
//! handle_event(&mut state, &Event::Swipe(SwipeDirection::Right))?;
//! assert_eq!(state.engine.stack().front().unwrap().profile.name, "Mia");
//! # Ok::<(), swipedeck::SwipeDeckError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod engine;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, ScreenMode};
pub use domain::{Result, SwipeDeckError, ThemeVariant};
pub use engine::{EngineConfig, SwipeEngine};
pub use ui::Theme;

use engine::{ClassifierConfig, PresenterConfig};
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Initial color scheme. A saved preference overrides it once loaded.
    pub theme: ThemeVariant,

    /// Path to a custom TOML theme. It replaces the built-in scheme of the
    /// variant it declares.
    pub theme_file: Option<String>,

    /// JSON deck file. `None` uses the built-in deck.
    pub deck_file: Option<String>,

    /// Probability that a Like or SuperLike turns into a match. Default: `0.5`
    pub match_rate: f64,

    /// Horizontal commit distance as a fraction of the card area width.
    /// Default: `0.25`
    pub swipe_threshold: f64,

    /// Horizontal release speed, in points per second, that commits
    /// regardless of distance. Default: `600`
    pub velocity_threshold: f64,

    /// Number of pending cards drawn. Default: `3`
    pub stack_depth: usize,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let classifier = ClassifierConfig::default();
        Self {
            theme: ThemeVariant::default(),
            theme_file: None,
            deck_file: None,
            match_rate: 0.5,
            swipe_threshold: classifier.threshold_fraction,
            velocity_threshold: classifier.velocity_commit,
            stack_depth: PresenterConfig::default().visible_depth,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Values that are missing or fail to parse fall back to their defaults
    /// with a warning; the plugin never refuses to load over configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use swipedeck::{Config, ThemeVariant};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "dark".to_string());
    /// map.insert("match_rate".to_string(), "0.2".to_string());
    /// map.insert("stack_depth".to_string(), "lots".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme, ThemeVariant::Dark);
    /// assert_eq!(config.match_rate, 0.2);
    /// assert_eq!(config.stack_depth, 3);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let theme = config
            .get("theme")
            .and_then(|raw| {
                raw.parse::<ThemeVariant>()
                    .map_err(|e| tracing::warn!(error = %e, "ignoring theme option"))
                    .ok()
            })
            .unwrap_or(defaults.theme);

        Self {
            theme,
            theme_file: non_empty(config, "theme_file"),
            deck_file: non_empty(config, "deck_file"),
            match_rate: parse_or(config, "match_rate", defaults.match_rate, |v: &f64| {
                (0.0..=1.0).contains(v)
            }),
            swipe_threshold: parse_or(config, "swipe_threshold", defaults.swipe_threshold, |v: &f64| {
                *v > 0.0 && *v <= 1.0
            }),
            velocity_threshold: parse_or(config, "velocity_threshold", defaults.velocity_threshold, |v: &f64| {
                *v > 0.0
            }),
            stack_depth: parse_or(config, "stack_depth", defaults.stack_depth, |v: &usize| *v >= 1),
            trace_level: non_empty(config, "trace_level"),
        }
    }

    /// Engine parameters derived from this configuration.
    #[must_use]
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            classifier: ClassifierConfig {
                threshold_fraction: self.swipe_threshold,
                velocity_commit: self.velocity_threshold,
                ..ClassifierConfig::default()
            },
            presenter: PresenterConfig {
                visible_depth: self.stack_depth,
                ..PresenterConfig::default()
            },
        }
    }
}

fn non_empty(config: &BTreeMap<String, String>, key: &str) -> Option<String> {
    config
        .get(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_or<T>(config: &BTreeMap<String, String>, key: &str, default: T, valid: impl Fn(&T) -> bool) -> T
where
    T: std::str::FromStr + Copy,
{
    let Some(raw) = config.get(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if valid(&value) => value,
        _ => {
            tracing::warn!(key, value = %raw, "invalid configuration value, using default");
            default
        }
    }
}

/// Creates the application state for `config`.
///
/// A `theme_file` that fails to load is logged and ignored, leaving the
/// built-in schemes in place.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing swipedeck plugin");

    let mut state = AppState::new(config);

    if let Some(theme_file) = &config.theme_file {
        let path = infrastructure::paths::resolve_host_path(theme_file);
        match Theme::from_file(&path) {
            Ok(theme) => {
                tracing::debug!(theme = %theme.name, variant = %theme.variant, "custom theme loaded");
                state.themes = state.themes.clone().with_override(theme);
            }
            Err(e) => {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme file, using built-in");
            }
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn parses_every_option() {
        let config = Config::from_zellij(&map(&[
            ("theme", "Dark"),
            ("theme_file", "~/themes/night.toml"),
            ("deck_file", " ~/decks/a.json "),
            ("match_rate", "1"),
            ("swipe_threshold", "0.3"),
            ("velocity_threshold", "900"),
            ("stack_depth", "4"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.theme, ThemeVariant::Dark);
        assert_eq!(config.theme_file.as_deref(), Some("~/themes/night.toml"));
        assert_eq!(config.deck_file.as_deref(), Some("~/decks/a.json"));
        assert_eq!(config.match_rate, 1.0);
        assert_eq!(config.swipe_threshold, 0.3);
        assert_eq!(config.velocity_threshold, 900.0);
        assert_eq!(config.stack_depth, 4);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn out_of_range_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("theme", "sepia"),
            ("match_rate", "1.5"),
            ("swipe_threshold", "0"),
            ("stack_depth", "0"),
            ("deck_file", "   "),
        ]));
        let defaults = Config::default();

        assert_eq!(config.theme, defaults.theme);
        assert_eq!(config.match_rate, defaults.match_rate);
        assert_eq!(config.swipe_threshold, defaults.swipe_threshold);
        assert_eq!(config.stack_depth, defaults.stack_depth);
        assert_eq!(config.deck_file, None);
    }

    #[test]
    fn engine_config_carries_thresholds() {
        let config = Config {
            swipe_threshold: 0.4,
            velocity_threshold: 800.0,
            stack_depth: 2,
            ..Config::default()
        };
        let engine = config.engine_config();
        assert_eq!(engine.classifier.threshold_fraction, 0.4);
        assert_eq!(engine.classifier.velocity_commit, 800.0);
        assert_eq!(engine.presenter.visible_depth, 2);
    }

    #[test]
    fn bad_theme_file_keeps_builtins() {
        let state = initialize(&Config {
            theme_file: Some("/definitely/missing/theme.toml".into()),
            ..Config::default()
        });
        assert_eq!(state.theme().name, "swipedeck-light");
    }
}
