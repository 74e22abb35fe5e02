//! Header component: brand title on the left, deck status on the right.

use crate::ui::canvas::Canvas;
use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Paints the header at `row`.
///
/// ```text
///  SwipeDeck                                    4 left · light
/// ```
///
/// The detail text is dropped first when the pane is too narrow for both.
pub fn render_header(canvas: &mut Canvas, row: usize, header: &HeaderInfo, theme: &Theme) {
    let cols = canvas.cols();
    let base = canvas.base();
    let row = row as isize;

    let title_style = base.with_fg(Theme::rgb(&theme.colors.primary)).bold();
    let title = truncate(&format!(" {}", header.title), cols);
    let title_len = canvas.text(row, 0, &title, title_style, cols);

    let detail = format!("{} ", header.detail);
    let detail_len = detail.chars().count();
    if title_len + 1 + detail_len <= cols {
        let detail_style = base.with_fg(Theme::rgb(&theme.colors.text_secondary));
        canvas.text(row, (cols - detail_len) as isize, &detail, detail_style, detail_len);
    }
}
