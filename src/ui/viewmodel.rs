//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They carry
//! display-ready data only: cell rectangles, faded opacities, wrapped text.

use crate::domain::Decision;
use crate::ui::geometry::Rect;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub footer: FooterInfo,

    /// Cards in paint order, back to front.
    pub cards: Vec<CardView>,

    pub action_bar: ActionBarInfo,

    /// Shown in place of the stack when no card is left or none loaded yet.
    pub empty_state: Option<EmptyState>,

    /// "It's a Match!" modal, drawn over everything else.
    pub banner: Option<MatchBanner>,
}

#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    /// Right-aligned status, e.g. `"4 left · dark"`.
    pub detail: String,
}

#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
    /// Transient message (worker errors, theme saved) shown instead of the
    /// keybindings when set.
    pub status: Option<String>,
}

/// One card as drawn on screen.
#[derive(Debug, Clone)]
pub struct CardView {
    pub rect: Rect,
    /// Tilt in degrees. Drawn as a horizontal shear.
    pub rotation: f64,
    pub opacity: f64,
    pub is_front: bool,
    pub content: CardContent,
    /// Decision hint drawn on top of the front card.
    pub badge: Option<BadgeView>,
}

#[derive(Debug, Clone, Default)]
pub struct CardContent {
    pub headline: String,
    pub verified: bool,
    /// `"Profession · distance"`.
    pub subtitle: String,
    pub location: String,
    pub bio: String,
    pub interests: Vec<String>,
    pub photo_caption: Option<String>,
    pub photo_index: usize,
    pub photo_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeView {
    pub decision: Decision,
    pub opacity: f64,
    pub scale: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionBarInfo {
    /// Button whose decision the current drag is leaning toward.
    pub highlight: Option<Decision>,
    pub can_undo: bool,
    pub enabled: bool,
}

#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone)]
pub struct MatchBanner {
    pub title: String,
    pub message: String,
    pub hint: String,
}
