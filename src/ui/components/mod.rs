//! Composable UI component painters.
//!
//! Each component paints one part of the pane into a [`Canvas`]:
//!
//! - [`header`]: Title and remaining-card count
//! - [`footer`]: Keybinding hints or status message
//! - [`card`]: Profile cards, back to front
//! - [`badge`]: LIKE / NOPE / SUPER LIKE hint on the front card
//! - [`actions`]: Pass / super like / like buttons
//! - [`empty`]: Loading and exhausted messages
//! - [`banner`]: Match modal
//!
//! [`render_frame`] composes them in paint order.

mod actions;
mod badge;
mod banner;
mod card;
mod empty;
mod footer;
mod header;

pub use actions::{button_at, ActionButton};

use crate::ui::canvas::Canvas;
use crate::ui::geometry::DeckGeometry;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Paints a horizontal separator across the pane.
fn render_border(canvas: &mut Canvas, row: usize, theme: &Theme) {
    let style = canvas.base().with_fg(Theme::rgb(&theme.colors.border));
    canvas.fill(row as isize, 0, canvas.cols(), '─', style);
}

/// Paints a whole frame.
///
/// ```text
/// [Header]
/// [Border]
/// [Cards or empty state]
/// [Action bar]
/// [Border]
/// [Footer]
/// ```
pub fn render_frame(canvas: &mut Canvas, vm: &UIViewModel, geometry: &DeckGeometry, theme: &Theme) {
    if canvas.rows() == 0 || canvas.cols() == 0 {
        return;
    }

    header::render_header(canvas, 0, &vm.header, theme);
    if canvas.rows() > 1 {
        render_border(canvas, 1, theme);
    }

    if let Some(empty) = &vm.empty_state {
        empty::render_empty_state(canvas, geometry, empty, theme);
    }

    for card in &vm.cards {
        card::render_card(canvas, card, theme);
        if let Some(badge) = &card.badge {
            badge::render_badge(canvas, card, badge, theme);
        }
    }

    if geometry.rows() >= 5 {
        actions::render_action_bar(canvas, geometry.action_bar_row(), &vm.action_bar, theme);
        render_border(canvas, geometry.rows() - 2, theme);
    }
    if geometry.rows() >= 3 {
        footer::render_footer(canvas, geometry.footer_row(), &vm.footer, theme);
    }

    if let Some(banner) = &vm.banner {
        banner::render_banner(canvas, geometry, banner, theme);
    }
}
