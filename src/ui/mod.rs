//! User interface rendering layer with component-based architecture.
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → paint → Canvas → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Component painters (header, cards, badge, action bar, ...)
//! - [`canvas`]: Off-screen cell grid and ANSI serialization
//! - [`geometry`]: Cell ↔ point mapping and pane layout
//! - [`helpers`]: Text truncation and wrapping
//! - [`theme`]: Light and dark color schemes

pub mod canvas;
pub mod components;
pub mod geometry;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use geometry::{DeckGeometry, Rect};
pub use renderer::{render, render_canvas, render_to_string};
pub use theme::{Theme, ThemeSet};
pub use viewmodel::{
    ActionBarInfo, BadgeView, CardContent, CardView, EmptyState, FooterInfo, HeaderInfo, MatchBanner,
    UIViewModel,
};
