//! Decision hint badge painted over the front card while it is dragged.

use super::card::Shear;
use crate::domain::Decision;
use crate::ui::canvas::{Canvas, Style};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BadgeView, CardView};

/// Badge scale from which the label is framed and bold.
const EMPHASIS_SCALE: f64 = 0.9;

/// Label text for a badge at `scale`.
fn label(decision: Decision, scale: f64) -> String {
    if scale >= EMPHASIS_SCALE {
        format!("[ {} ]", decision.label())
    } else {
        format!(" {} ", decision.label())
    }
}

/// Paints `badge` on `card`: LIKE in the top-left corner, NOPE in the
/// top-right, SUPER LIKE centered near the bottom edge.
pub fn render_badge(canvas: &mut Canvas, card: &CardView, badge: &BadgeView, theme: &Theme) {
    let rect = card.rect;
    if badge.opacity <= 0.0 || rect.height < 4 || rect.width < 4 {
        return;
    }

    let text = label(badge.decision, badge.scale);
    let len = text.chars().count();

    let r = match badge.decision {
        Decision::Like | Decision::Pass => 2,
        Decision::SuperLike => rect.height - 3,
    };
    let offset = Shear::new(rect, card.rotation).offset(r);
    let col = match badge.decision {
        Decision::Like => rect.left + 2,
        Decision::Pass => rect.right() - 2 - len as isize,
        Decision::SuperLike => rect.left + (rect.width.saturating_sub(len) / 2) as isize,
    };

    let card_bg = Theme::rgb(&theme.colors.card_bg);
    let color = theme.decision_color(badge.decision).blend(card_bg, 1.0 - badge.opacity);
    let mut style = Style::fg(color).on(card_bg);
    if badge.scale >= EMPHASIS_SCALE {
        style = style.bold();
    }

    canvas.text(rect.top + r as isize, col + offset, &text, style, rect.width.saturating_sub(2));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::geometry::Rect;
    use crate::ui::viewmodel::CardContent;

    fn card() -> CardView {
        CardView {
            rect: Rect {
                top: 0,
                left: 0,
                width: 30,
                height: 12,
            },
            rotation: 0.0,
            opacity: 1.0,
            is_front: true,
            content: CardContent::default(),
            badge: None,
        }
    }

    fn paint(decision: Decision, scale: f64) -> Canvas {
        let mut canvas = Canvas::new(12, 30, Style::default());
        let badge = BadgeView {
            decision,
            opacity: 1.0,
            scale,
        };
        render_badge(&mut canvas, &card(), &badge, &Theme::default());
        canvas
    }

    #[test]
    fn like_sits_top_left() {
        let canvas = paint(Decision::Like, 1.1);
        assert!(canvas.row_text(2).starts_with("  [ LIKE ]"));
    }

    #[test]
    fn nope_sits_top_right() {
        let canvas = paint(Decision::Pass, 0.8);
        assert!(canvas.row_text(2).ends_with(" NOPE   "));
    }

    #[test]
    fn super_like_sits_near_bottom() {
        let canvas = paint(Decision::SuperLike, 1.0);
        assert!(canvas.row_text(9).contains("[ SUPER LIKE ]"));
    }
}
