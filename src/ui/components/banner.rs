//! "It's a Match!" modal.

use crate::ui::canvas::{Canvas, Style};
use crate::ui::geometry::{DeckGeometry, CARD_AREA_TOP};
use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::MatchBanner;

const BANNER_HEIGHT: usize = 7;
const MAX_BANNER_WIDTH: usize = 44;

/// Paints the banner as a bordered box centered over the card area.
pub fn render_banner(canvas: &mut Canvas, geometry: &DeckGeometry, banner: &MatchBanner, theme: &Theme) {
    let cols = canvas.cols();
    let width = cols.saturating_sub(4).min(MAX_BANNER_WIDTH);
    if width < 4 {
        return;
    }
    let height = BANNER_HEIGHT.min(geometry.area_height());
    if height < 3 {
        return;
    }

    let top = (CARD_AREA_TOP + (geometry.area_height() - height) / 2) as isize;
    let left = ((cols - width) / 2) as isize;

    let primary = Theme::rgb(&theme.colors.primary);
    let surface = Theme::rgb(&theme.colors.card_bg);
    let frame = Style::fg(primary).on(surface);
    let fill = Style::default().on(surface);

    for r in 0..height {
        let row = top + r as isize;
        let (open, mid, close, style) = match r {
            0 => ('╭', '─', '╮', frame),
            r if r == height - 1 => ('╰', '─', '╯', frame),
            _ => ('│', ' ', '│', fill),
        };
        canvas.put(row, left, open, frame);
        canvas.fill(row, left + 1, width - 2, mid, style);
        canvas.put(row, left + width as isize - 1, close, frame);
    }

    let inner = width - 2;
    let lines = [
        (banner.title.as_str(), Style::fg(primary).on(surface).bold()),
        (banner.message.as_str(), Style::fg(Theme::rgb(&theme.colors.text)).on(surface)),
        (banner.hint.as_str(), Style::fg(Theme::rgb(&theme.colors.text_muted)).on(surface)),
    ];
    let first = top + 1 + ((height - 2).saturating_sub(5) / 2) as isize;
    for (i, (text, style)) in lines.into_iter().enumerate() {
        let row = first + (i * 2) as isize;
        if row >= top + height as isize - 1 {
            break;
        }
        canvas.text_centered(row, left + 1, inner, &truncate(text, inner), style);
    }
}
