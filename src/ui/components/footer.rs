//! Footer component renderer.

use crate::ui::canvas::Canvas;
use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Paints keybinding hints, or the status message when one is set, at `row`.
///
/// Hints are dimmed and truncated with `…` to the pane width; a status
/// message uses the regular text color so it stands out.
pub fn render_footer(canvas: &mut Canvas, row: usize, footer: &FooterInfo, theme: &Theme) {
    let cols = canvas.cols();
    let base = canvas.base();

    let (text, style) = match &footer.status {
        Some(status) => (status.as_str(), base.with_fg(Theme::rgb(&theme.colors.text))),
        None => (
            footer.keybindings.as_str(),
            base.with_fg(Theme::rgb(&theme.colors.text_muted)).dim(),
        ),
    };

    let line = truncate(&format!(" {text}"), cols);
    canvas.text(row as isize, 0, &line, style, cols);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::canvas::Style;

    #[test]
    fn status_replaces_keybindings() {
        let mut canvas = Canvas::new(1, 40, Style::default());
        let footer = FooterInfo {
            keybindings: "h: nope  l: like".into(),
            status: Some("Theme saved".into()),
        };
        render_footer(&mut canvas, 0, &footer, &Theme::default());
        assert_eq!(canvas.row_text(0).trim_end(), " Theme saved");
    }

    #[test]
    fn long_hints_are_truncated() {
        let mut canvas = Canvas::new(1, 10, Style::default());
        let footer = FooterInfo {
            keybindings: "h: nope  l: like  k: super".into(),
            status: None,
        };
        render_footer(&mut canvas, 0, &footer, &Theme::default());
        assert_eq!(canvas.row_text(0), " h: nope …");
    }
}
