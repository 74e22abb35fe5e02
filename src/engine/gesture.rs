//! Pointer gesture tracking.
//!
//! Turns a stream of pointer positions into a [`DragState`] for the front
//! card. Exactly one gesture can be active; gestures reported against any
//! other card are rejected.

use super::Viewport;
use crate::domain::CardId;

/// Maximum card tilt while dragging, in degrees, reached at `|dx| = width`.
pub const MAX_DRAG_ROTATION: f64 = 8.0;

/// Weight of the newest sample in the smoothed velocity.
const VELOCITY_SMOOTHING: f64 = 0.6;

/// A pointer position in points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Live state of one drag gesture. Lives from gesture start to gesture end.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    pub dx: f64,
    pub dy: f64,
    pub velocity_x: f64,
    pub velocity_y: f64,
    pub rotation: f64,
}

impl DragState {
    /// Total displacement from the gesture origin.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.dx.hypot(self.dy)
    }
}

/// Card tilt for a horizontal displacement: `[-W, 0, W]` maps to
/// `[-8°, 0°, 8°]`, clamped outside that range.
#[must_use]
pub fn rotation_for(dx: f64, width: f64) -> f64 {
    if width <= 0.0 {
        return 0.0;
    }
    (dx / width).clamp(-1.0, 1.0) * MAX_DRAG_ROTATION
}

#[derive(Debug, Clone)]
struct ActiveGesture {
    card: CardId,
    origin: Point,
    last: Point,
    last_t: f64,
    sampled: bool,
    state: DragState,
}

#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    active: Option<ActiveGesture>,
}

impl GestureTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Card the active gesture belongs to.
    #[must_use]
    pub fn card(&self) -> Option<&CardId> {
        self.active.as_ref().map(|g| &g.card)
    }

    #[must_use]
    pub fn drag(&self) -> Option<&DragState> {
        self.active.as_ref().map(|g| &g.state)
    }

    /// Starts tracking a gesture on `card`.
    ///
    /// Returns `false` without touching any state when `card` is not the
    /// logical front card or another gesture is already running.
    pub fn begin(&mut self, card: &CardId, front: Option<&CardId>, at: Point, t: f64) -> bool {
        if self.active.is_some() || front != Some(card) {
            return false;
        }
        self.active = Some(ActiveGesture {
            card: card.clone(),
            origin: at,
            last: at,
            last_t: t,
            sampled: false,
            state: DragState::default(),
        });
        true
    }

    /// Records a pointer move for `card`. Returns the updated drag state, or
    /// `None` when no gesture is active on that card.
    pub fn update(
        &mut self,
        card: &CardId,
        at: Point,
        t: f64,
        viewport: Viewport,
    ) -> Option<DragState> {
        let gesture = self.active.as_mut().filter(|g| &g.card == card)?;

        let dt = t - gesture.last_t;
        if dt > 0.0 {
            let vx = (at.x - gesture.last.x) / dt;
            let vy = (at.y - gesture.last.y) / dt;
            let state = &mut gesture.state;
            if gesture.sampled {
                state.velocity_x = VELOCITY_SMOOTHING * vx + (1.0 - VELOCITY_SMOOTHING) * state.velocity_x;
                state.velocity_y = VELOCITY_SMOOTHING * vy + (1.0 - VELOCITY_SMOOTHING) * state.velocity_y;
            } else {
                state.velocity_x = vx;
                state.velocity_y = vy;
                gesture.sampled = true;
            }
            gesture.last_t = t;
        }

        gesture.last = at;
        gesture.state.dx = at.x - gesture.origin.x;
        gesture.state.dy = at.y - gesture.origin.y;
        gesture.state.rotation = rotation_for(gesture.state.dx, viewport.width);

        Some(gesture.state)
    }

    /// Ends the gesture on `card` and returns its final state.
    ///
    /// A gesture running on a different card is left untouched.
    pub fn end(&mut self, card: &CardId) -> Option<DragState> {
        if self.card() != Some(card) {
            return None;
        }
        self.active.take().map(|g| g.state)
    }

    /// Drops the active gesture, whatever card it belongs to.
    pub fn cancel(&mut self) -> Option<DragState> {
        self.active.take().map(|g| g.state)
    }
}
