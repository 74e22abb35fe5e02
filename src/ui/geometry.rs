//! Mapping between terminal cells and engine points.
//!
//! The engine works in abstract points. One column is [`POINTS_PER_COL`]
//! points wide and one row is [`POINTS_PER_ROW`] points tall, which keeps
//! drags roughly isotropic on a typical terminal font.
//!
//! Pane layout, top to bottom:
//!
//! ```text
//! row 0          header
//! row 1          separator
//! rows 2..n-3    card area
//! row n-3        action bar
//! row n-2        separator
//! row n-1        footer
//! ```

use crate::engine::{Point, Transform, Viewport};

pub const POINTS_PER_COL: f64 = 8.0;
pub const POINTS_PER_ROW: f64 = 16.0;

/// First row of the card area.
pub const CARD_AREA_TOP: usize = 2;

/// Rows below the card area: action bar, separator, footer.
const BOTTOM_CHROME: usize = 3;

const MAX_CARD_WIDTH: usize = 46;
const MIN_CARD_WIDTH: usize = 12;

/// A rectangle of cells. `top`/`left` may lie outside the pane while a card
/// is flying off screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub top: isize,
    pub left: isize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    #[must_use]
    pub const fn bottom(&self) -> isize {
        self.top + self.height as isize
    }

    #[must_use]
    pub const fn right(&self) -> isize {
        self.left + self.width as isize
    }

    #[must_use]
    pub const fn contains(&self, row: isize, col: isize) -> bool {
        row >= self.top && row < self.bottom() && col >= self.left && col < self.right()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckGeometry {
    rows: usize,
    cols: usize,
}

impl DeckGeometry {
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Height of the card area in rows.
    #[must_use]
    pub const fn area_height(&self) -> usize {
        self.rows.saturating_sub(CARD_AREA_TOP + BOTTOM_CHROME)
    }

    #[must_use]
    pub const fn action_bar_row(&self) -> usize {
        self.rows.saturating_sub(BOTTOM_CHROME)
    }

    #[must_use]
    pub const fn footer_row(&self) -> usize {
        self.rows.saturating_sub(1)
    }

    /// The card area expressed in engine points.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(
            (self.cols.max(1) as f64) * POINTS_PER_COL,
            (self.area_height().max(1) as f64) * POINTS_PER_ROW,
        )
    }

    /// Rectangle of a card at rest, centered in the card area.
    #[must_use]
    pub fn base_card(&self) -> Rect {
        let width = self
            .cols
            .saturating_sub(4)
            .min(MAX_CARD_WIDTH)
            .max(MIN_CARD_WIDTH.min(self.cols));
        let area = self.area_height();
        let height = area.saturating_sub(2).max(area.min(3));

        Rect {
            top: (CARD_AREA_TOP + (area - height) / 2) as isize,
            left: ((self.cols - width) / 2) as isize,
            width,
            height,
        }
    }

    /// Rectangle of a card drawn with `transform`. Rotation is not part of
    /// the rectangle; the renderer shears rows instead.
    #[must_use]
    pub fn card_rect(&self, transform: &Transform) -> Rect {
        let base = self.base_card();
        let scale = transform.scale.max(0.0);

        let width = ((base.width as f64) * scale).round().max(1.0) as usize;
        let height = ((base.height as f64) * scale).round().max(1.0) as usize;

        let center_col = base.left as f64 + base.width as f64 / 2.0 + transform.translate_x / POINTS_PER_COL;
        let center_row = base.top as f64 + base.height as f64 / 2.0 + transform.translate_y / POINTS_PER_ROW;

        Rect {
            top: (center_row - height as f64 / 2.0).round() as isize,
            left: (center_col - width as f64 / 2.0).round() as isize,
            width,
            height,
        }
    }

    /// Center of cell `(row, col)` in engine points, relative to the top-left
    /// of the card area.
    #[must_use]
    pub fn to_points(&self, row: isize, col: isize) -> Point {
        Point::new(
            (col as f64 + 0.5) * POINTS_PER_COL,
            ((row - CARD_AREA_TOP as isize) as f64 + 0.5) * POINTS_PER_ROW,
        )
    }
}
