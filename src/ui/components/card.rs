//! Profile card painter.
//!
//! A card is a rounded box filled with the card background. Tilt is drawn as
//! a horizontal shear around the middle row, and opacity fades every color
//! toward the pane background.

use crate::ui::canvas::{Canvas, Rgb, Style};
use crate::ui::geometry::Rect;
use crate::ui::helpers::{truncate, wrap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CardContent, CardView};

/// Cards at or below this opacity are not drawn at all.
const HIDE_BELOW_OPACITY: f64 = 0.02;

/// Below this opacity text is additionally dimmed.
const DIM_BELOW_OPACITY: f64 = 0.5;

/// Rows are twice as tall as columns are wide.
const CELL_ASPECT: f64 = 2.0;

/// Colors of one card, already faded by its opacity.
struct CardPalette {
    border: Style,
    body: Style,
    photo: Style,
    text: Style,
    headline: Style,
    secondary: Style,
    muted: Style,
    accent: Style,
    verified: Style,
}

impl CardPalette {
    fn new(theme: &Theme, opacity: f64) -> Self {
        let c = &theme.colors;
        let backdrop = Theme::rgb(&c.background);
        let fade = |hex: &str| Theme::rgb(hex).blend(backdrop, 1.0 - opacity);

        let body_bg = fade(&c.card_bg);
        let photo_bg = Theme::rgb(&c.secondary)
            .blend(Theme::rgb(&c.card_bg), 0.7)
            .blend(backdrop, 1.0 - opacity);

        let dim = opacity < DIM_BELOW_OPACITY;
        let ink = |color: Rgb, bg: Rgb| {
            let style = Style::fg(color).on(bg);
            if dim {
                style.dim()
            } else {
                style
            }
        };

        Self {
            border: ink(fade(&c.card_border), body_bg),
            body: Style::default().on(body_bg),
            photo: ink(fade(&c.text_secondary), photo_bg),
            text: ink(fade(&c.text), body_bg),
            headline: ink(fade(&c.text), body_bg).bold(),
            secondary: ink(fade(&c.text_secondary), body_bg),
            muted: ink(fade(&c.text_muted), body_bg),
            accent: ink(fade(&c.secondary), body_bg),
            verified: ink(fade(&c.verified), body_bg).bold(),
        }
    }
}

/// Horizontal offset per row that approximates a rotation.
#[derive(Debug, Clone, Copy)]
pub(super) struct Shear {
    mid: f64,
    slope: f64,
}

impl Shear {
    pub(super) fn new(rect: Rect, rotation_degrees: f64) -> Self {
        Self {
            mid: rect.height.saturating_sub(1) as f64 / 2.0,
            slope: rotation_degrees.to_radians().tan() * CELL_ASPECT,
        }
    }

    /// Column offset of the card's row `r` (0 = top edge).
    pub(super) fn offset(&self, r: usize) -> isize {
        ((self.mid - r as f64) * self.slope).round() as isize
    }
}

struct Line {
    segments: Vec<(String, Style)>,
    /// Fills the whole inner width before drawing segments.
    background: Option<Style>,
    centered: bool,
}

impl Line {
    fn plain(text: impl Into<String>, style: Style) -> Self {
        Self {
            segments: vec![(text.into(), style)],
            background: None,
            centered: false,
        }
    }

    fn blank() -> Self {
        Self {
            segments: Vec::new(),
            background: None,
            centered: false,
        }
    }

    fn photo(text: impl Into<String>, style: Style) -> Self {
        Self {
            segments: vec![(text.into(), style)],
            background: Some(style),
            centered: true,
        }
    }
}

/// Paints `card` into the canvas.
pub fn render_card(canvas: &mut Canvas, card: &CardView, theme: &Theme) {
    let rect = card.rect;
    if card.opacity <= HIDE_BELOW_OPACITY || rect.width < 2 || rect.height < 2 {
        return;
    }

    let palette = CardPalette::new(theme, card.opacity);
    let shear = Shear::new(rect, card.rotation);
    let last = rect.height - 1;

    for r in 0..rect.height {
        let row = rect.top + r as isize;
        let left = rect.left + shear.offset(r);
        let (open, fill, close, fill_style) = match r {
            0 => ('╭', '─', '╮', palette.border),
            r if r == last => ('╰', '─', '╯', palette.border),
            _ => ('│', ' ', '│', palette.body),
        };
        canvas.put(row, left, open, palette.border);
        canvas.fill(row, left + 1, rect.width - 2, fill, fill_style);
        canvas.put(row, left + rect.width as isize - 1, close, palette.border);
    }

    let inner_width = rect.width.saturating_sub(2);
    let inner_height = rect.height.saturating_sub(2);
    let text_width = inner_width.saturating_sub(2);

    for (i, line) in content_lines(&card.content, inner_width, inner_height, &palette)
        .into_iter()
        .enumerate()
    {
        let r = i + 1;
        let row = rect.top + r as isize;
        let inner_left = rect.left + 1 + shear.offset(r);

        if let Some(style) = line.background {
            canvas.fill(row, inner_left, inner_width, ' ', style);
        }

        let total: usize = line.segments.iter().map(|(s, _)| s.chars().count()).sum();
        let mut col = if line.centered {
            inner_left + (inner_width.saturating_sub(total) / 2) as isize
        } else {
            inner_left + 1
        };
        let limit = if line.centered { inner_width } else { text_width };
        let mut remaining = limit;
        for (text, style) in &line.segments {
            let written = canvas.text(row, col, text, *style, remaining);
            col += written as isize;
            remaining = remaining.saturating_sub(written);
        }
    }
}

fn content_lines(content: &CardContent, inner_width: usize, max_lines: usize, palette: &CardPalette) -> Vec<Line> {
    let text_width = inner_width.saturating_sub(2);
    let mut lines = Vec::new();

    let photo_rows = (max_lines * 2 / 5).clamp(3_usize.min(max_lines), max_lines);
    let caption_row = photo_rows / 2;
    for r in 0..photo_rows {
        let text = if r == 0 && content.photo_count > 1 {
            photo_dots(content.photo_index, content.photo_count)
        } else if r == caption_row {
            truncate(content.photo_caption.as_deref().unwrap_or(""), inner_width.saturating_sub(2))
        } else {
            String::new()
        };
        lines.push(Line::photo(text, palette.photo));
    }

    let mut headline = vec![(truncate(&content.headline, text_width), palette.headline)];
    if content.verified {
        headline.push((" ✓".to_string(), palette.verified));
    }
    lines.push(Line {
        segments: headline,
        background: None,
        centered: false,
    });

    if !content.subtitle.is_empty() {
        lines.push(Line::plain(truncate(&content.subtitle, text_width), palette.secondary));
    }
    if !content.location.is_empty() {
        lines.push(Line::plain(truncate(&content.location, text_width), palette.muted));
    }

    let interests = (!content.interests.is_empty()).then(|| content.interests.join(" · "));
    let reserved = usize::from(interests.is_some());
    let bio_room = max_lines.saturating_sub(lines.len() + 1 + reserved);
    if !content.bio.is_empty() && bio_room > 0 {
        lines.push(Line::blank());
        for text in wrap(&content.bio, text_width, bio_room) {
            lines.push(Line::plain(text, palette.text));
        }
    }

    if let Some(interests) = interests {
        lines.push(Line::plain(truncate(&interests, text_width), palette.accent));
    }

    lines.truncate(max_lines);
    lines
}

/// `"○ ● ○"` with the current photo filled.
fn photo_dots(index: usize, count: usize) -> String {
    (0..count)
        .map(|i| if i == index { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(rotation: f64, opacity: f64) -> CardView {
        CardView {
            rect: Rect {
                top: 0,
                left: 2,
                width: 24,
                height: 14,
            },
            rotation,
            opacity,
            is_front: true,
            content: CardContent {
                headline: "Emma, 25".into(),
                verified: true,
                subtitle: "Designer · 2 km away".into(),
                location: "Brooklyn, NY".into(),
                bio: "Love adventures and good coffee.".into(),
                interests: vec!["Travel".into(), "Art".into()],
                photo_caption: Some("Rooftop at sunset".into()),
                photo_index: 1,
                photo_count: 3,
            },
            badge: None,
        }
    }

    fn paint(card: &CardView) -> Canvas {
        let mut canvas = Canvas::new(16, 30, Style::default());
        render_card(&mut canvas, card, &Theme::default());
        canvas
    }

    #[test]
    fn draws_frame_and_content() {
        let canvas = paint(&view(0.0, 1.0));
        let all: Vec<String> = (0..16).map(|r| canvas.row_text(r)).collect();

        assert!(all[0].contains('╭') && all[0].contains('╮'));
        assert!(all[13].contains('╰'));
        assert!(all[1].contains("○ ● ○"));
        assert!(all.iter().any(|l| l.contains("Emma, 25 ✓")));
        assert!(all.iter().any(|l| l.contains("Travel · Art")));
    }

    #[test]
    fn invisible_card_is_skipped() {
        let canvas = paint(&view(0.0, 0.0));
        assert!((0..16).all(|r| canvas.row_text(r).trim().is_empty()));
    }

    #[test]
    fn rotation_shears_top_toward_tilt() {
        let canvas = paint(&view(8.0, 1.0));
        let top = canvas.row_text(0).find('╭').unwrap();
        let bottom = canvas.row_text(13).find('╰').unwrap();
        assert!(top > bottom);
    }

    #[test]
    fn shear_is_zero_at_middle_row() {
        let rect = Rect {
            top: 0,
            left: 0,
            width: 10,
            height: 11,
        };
        let shear = Shear::new(rect, -8.0);
        assert_eq!(shear.offset(5), 0);
        assert!(shear.offset(0) < 0);
        assert!(shear.offset(10) > 0);
        assert_eq!(Shear::new(rect, 0.0).offset(0), 0);
    }
}
