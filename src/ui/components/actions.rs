//! Action bar: the buttons that swipe without a drag.

use crate::domain::Decision;
use crate::ui::canvas::{Canvas, Style};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ActionBarInfo;

const GAP: usize = 3;

/// A clickable button in the action bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionButton {
    Undo,
    Swipe(Decision),
}

impl ActionButton {
    const fn label(self) -> &'static str {
        match self {
            Self::Undo => "↶ UNDO u",
            Self::Swipe(Decision::Pass) => "✕ NOPE h",
            Self::Swipe(Decision::SuperLike) => "★ SUPER k",
            Self::Swipe(Decision::Like) => "♥ LIKE l",
        }
    }

    const fn decision(self) -> Option<Decision> {
        match self {
            Self::Undo => None,
            Self::Swipe(decision) => Some(decision),
        }
    }
}

/// Buttons with their starting column and width, left to right.
fn layout(cols: usize, bar: &ActionBarInfo) -> Vec<(ActionButton, usize, usize)> {
    let mut buttons = vec![
        ActionButton::Swipe(Decision::Pass),
        ActionButton::Swipe(Decision::SuperLike),
        ActionButton::Swipe(Decision::Like),
    ];
    if bar.can_undo {
        buttons.insert(0, ActionButton::Undo);
    }

    let widths: Vec<usize> = buttons.iter().map(|b| b.label().chars().count() + 2).collect();
    let total = widths.iter().sum::<usize>() + GAP * (buttons.len() - 1);

    let mut col = cols.saturating_sub(total) / 2;
    buttons
        .into_iter()
        .zip(widths)
        .map(|(button, width)| {
            let start = col;
            col += width + GAP;
            (button, start, width)
        })
        .collect()
}

/// Button under column `col`, if any.
#[must_use]
pub fn button_at(cols: usize, bar: &ActionBarInfo, col: usize) -> Option<ActionButton> {
    layout(cols, bar)
        .into_iter()
        .find(|(_, start, width)| col >= *start && col < start + width)
        .map(|(button, _, _)| button)
}

/// Paints the centered button row at `row`. The button matching the drag's
/// current lean is drawn inverted.
pub fn render_action_bar(canvas: &mut Canvas, row: usize, bar: &ActionBarInfo, theme: &Theme) {
    let base = canvas.base();
    let background = Theme::rgb(&theme.colors.background);
    let muted = Theme::rgb(&theme.colors.text_muted);

    for (button, start, width) in layout(canvas.cols(), bar) {
        let decision = button.decision();
        let color = match decision {
            Some(decision) if bar.enabled => theme.decision_color(decision),
            _ => muted,
        };
        let style = if decision.is_some() && decision == bar.highlight {
            Style::fg(background).on(color).bold()
        } else {
            base.with_fg(color)
        };

        let text = format!(" {} ", button.label());
        canvas.text(row as isize, start as isize, &text, style, width);
    }
}
