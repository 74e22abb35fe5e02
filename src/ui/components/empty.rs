//! Empty state component renderer.
//!
//! Shown in the card area while the deck is loading and once every card has
//! been decided.

use crate::ui::canvas::Canvas;
use crate::ui::geometry::{DeckGeometry, CARD_AREA_TOP};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Paints the message and subtitle centered in the card area.
///
/// ```text
///              No more profiles
///     Press r to reload the deck or u to undo
/// ```
pub fn render_empty_state(canvas: &mut Canvas, geometry: &DeckGeometry, empty: &EmptyState, theme: &Theme) {
    let base = canvas.base();
    let cols = canvas.cols();
    let middle = (CARD_AREA_TOP + geometry.area_height() / 2) as isize;

    let message_style = base.with_fg(Theme::rgb(&theme.colors.text)).bold();
    canvas.text_centered(middle - 1, 0, cols, &empty.message, message_style);

    let subtitle_style = base.with_fg(Theme::rgb(&theme.colors.text_muted)).dim();
    canvas.text_centered(middle + 1, 0, cols, &empty.subtitle, subtitle_style);
}
