//! Top-level rendering coordinator.
//!
//! Rendering is a three-step process:
//!
//! 1. **View Model Computation**: `AppState` → `UIViewModel`
//! 2. **Painting**: components draw into an off-screen [`Canvas`]
//! 3. **Output**: the canvas is serialized to ANSI and printed once

use crate::app::AppState;
use crate::ui::canvas::{Canvas, Style};
use crate::ui::components;
use crate::ui::geometry::DeckGeometry;
use crate::ui::theme::Theme;

/// Renders the plugin UI to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("{}", render_to_string(state, rows, cols));
}

/// Renders a frame and returns the ANSI output instead of printing it.
#[must_use]
pub fn render_to_string(state: &AppState, rows: usize, cols: usize) -> String {
    render_canvas(state, rows, cols).to_ansi()
}

/// Paints a frame into a fresh canvas.
#[must_use]
pub fn render_canvas(state: &AppState, rows: usize, cols: usize) -> Canvas {
    let theme = state.theme();
    let geometry = DeckGeometry::new(rows, cols);
    let viewmodel = state.compute_viewmodel(rows, cols);

    let base = Style::fg(Theme::rgb(&theme.colors.text)).on(Theme::rgb(&theme.colors.background));
    let mut canvas = Canvas::new(rows, cols, base);
    components::render_frame(&mut canvas, &viewmodel, &geometry, theme);
    canvas
}
