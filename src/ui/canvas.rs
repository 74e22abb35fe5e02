//! Off-screen cell grid.
//!
//! Components paint into a [`Canvas`] back to front, so later cards cover
//! earlier ones and anything outside the pane is clipped. The finished grid
//! is serialized to ANSI once per frame.

use crate::ui::helpers::cursor_to;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Self = Self(255, 255, 255);

    /// Parses `#RRGGBB` (the `#` is optional).
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Mixes `self` toward `other`; `t = 0` keeps `self`, `t = 1` gives `other`.
    #[must_use]
    pub fn blend(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Self(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub bold: bool,
    pub dim: bool,
}

impl Style {
    #[must_use]
    pub const fn fg(color: Rgb) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            bold: false,
            dim: false,
        }
    }

    /// Same background and attributes, new foreground.
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = Some(fg);
        self
    }

    #[must_use]
    pub const fn on(mut self, bg: Rgb) -> Self {
        self.bg = Some(bg);
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    fn write_sgr(&self, out: &mut String) {
        out.push_str("\u{1b}[0m");
        if self.bold {
            out.push_str("\u{1b}[1m");
        }
        if self.dim {
            out.push_str("\u{1b}[2m");
        }
        if let Some(Rgb(r, g, b)) = self.fg {
            let _ = write!(out, "\u{1b}[38;2;{r};{g};{b}m");
        }
        if let Some(Rgb(r, g, b)) = self.bg {
            let _ = write!(out, "\u{1b}[48;2;{r};{g};{b}m");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    style: Style,
}

/// A `rows × cols` grid of styled characters. Coordinates are 0-based and
/// signed; out-of-range writes are dropped.
#[derive(Debug, Clone)]
pub struct Canvas {
    rows: usize,
    cols: usize,
    base: Style,
    cells: Vec<Cell>,
}

impl Canvas {
    #[must_use]
    pub fn new(rows: usize, cols: usize, base: Style) -> Self {
        Self {
            rows,
            cols,
            base,
            cells: vec![Cell { ch: ' ', style: base }; rows * cols],
        }
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Background style every cell starts with.
    #[must_use]
    pub const fn base(&self) -> Style {
        self.base
    }

    fn index(&self, row: isize, col: isize) -> Option<usize> {
        let row = usize::try_from(row).ok().filter(|r| *r < self.rows)?;
        let col = usize::try_from(col).ok().filter(|c| *c < self.cols)?;
        Some(row * self.cols + col)
    }

    pub fn put(&mut self, row: isize, col: isize, ch: char, style: Style) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = Cell { ch, style };
        }
    }

    /// Writes `text` starting at `(row, col)`, stopping at `max_width`
    /// characters. Returns the number of characters written or clipped.
    pub fn text(&mut self, row: isize, col: isize, text: &str, style: Style, max_width: usize) -> usize {
        let mut written = 0;
        for (offset, ch) in text.chars().take(max_width).enumerate() {
            self.put(row, col + offset as isize, ch, style);
            written += 1;
        }
        written
    }

    /// Writes `text` centered within `[left, left + width)`.
    pub fn text_centered(&mut self, row: isize, left: isize, width: usize, text: &str, style: Style) {
        let len = text.chars().count().min(width);
        let pad = (width - len) / 2;
        self.text(row, left + pad as isize, text, style, width);
    }

    pub fn fill(&mut self, row: isize, col: isize, width: usize, ch: char, style: Style) {
        for offset in 0..width {
            self.put(row, col + offset as isize, ch, style);
        }
    }

    /// Characters of one row without styling. Used by tests and hit checks.
    #[must_use]
    pub fn row_text(&self, row: usize) -> String {
        if row >= self.rows {
            return String::new();
        }
        self.cells[row * self.cols..(row + 1) * self.cols]
            .iter()
            .map(|cell| cell.ch)
            .collect()
    }

    /// Serializes the grid as ANSI, one cursor jump per row and one SGR
    /// sequence per style run.
    #[must_use]
    pub fn to_ansi(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() * 2);
        for row in 0..self.rows {
            out.push_str(&cursor_to(row, 0));
            let mut current: Option<Style> = None;
            for cell in &self.cells[row * self.cols..(row + 1) * self.cols] {
                if current != Some(cell.style) {
                    cell.style.write_sgr(&mut out);
                    current = Some(cell.style);
                }
                out.push(cell.ch);
            }
            out.push_str("\u{1b}[0m");
        }
        out
    }
}
