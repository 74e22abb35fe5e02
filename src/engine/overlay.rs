//! Decision hint badges ("LIKE", "NOPE", "SUPER LIKE") derived from the live drag.

use super::gesture::DragState;
use crate::domain::Decision;

/// Displacement, as a fraction of the commit threshold, at which a badge is
/// fully opaque.
pub const FULL_INTENSITY_FACTOR: f64 = 0.5;

const MIN_BADGE_SCALE: f64 = 0.7;
const MAX_BADGE_SCALE: f64 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Indicator {
    pub opacity: f64,
    pub scale: f64,
}

impl Indicator {
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        scale: MIN_BADGE_SCALE,
    };

    fn from_displacement(amount: f64, threshold: f64) -> Self {
        Self {
            opacity: ramp(amount, FULL_INTENSITY_FACTOR * threshold, 0.0, 1.0),
            scale: ramp(amount, threshold, MIN_BADGE_SCALE, MAX_BADGE_SCALE),
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

/// Intensity of every badge. Several may be non-zero at once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayState {
    pub like: Indicator,
    pub pass: Indicator,
    pub super_like: Indicator,
}

impl OverlayState {
    pub const HIDDEN: Self = Self {
        like: Indicator::HIDDEN,
        pass: Indicator::HIDDEN,
        super_like: Indicator::HIDDEN,
    };

    #[must_use]
    pub const fn indicator(&self, decision: Decision) -> Indicator {
        match decision {
            Decision::Pass => self.pass,
            Decision::Like => self.like,
            Decision::SuperLike => self.super_like,
        }
    }

    /// Most opaque visible badge, if any.
    #[must_use]
    pub fn strongest(&self) -> Option<(Decision, Indicator)> {
        [Decision::Like, Decision::Pass, Decision::SuperLike]
            .into_iter()
            .map(|d| (d, self.indicator(d)))
            .filter(|(_, i)| i.is_visible())
            .max_by(|a, b| a.1.opacity.total_cmp(&b.1.opacity))
    }
}

impl Default for OverlayState {
    fn default() -> Self {
        Self::HIDDEN
    }
}

/// Computes badge intensities for the current drag. Without a drag every
/// badge is hidden.
#[must_use]
pub fn compute(drag: Option<&DragState>, threshold_x: f64, threshold_y: f64) -> OverlayState {
    let Some(drag) = drag else {
        return OverlayState::HIDDEN;
    };

    OverlayState {
        like: Indicator::from_displacement(drag.dx.max(0.0), threshold_x),
        pass: Indicator::from_displacement((-drag.dx).max(0.0), threshold_x),
        super_like: Indicator::from_displacement((-drag.dy).max(0.0), threshold_y),
    }
}

/// Linear map of `[0, span]` onto `[from, to]`, clamped.
fn ramp(value: f64, span: f64, from: f64, to: f64) -> f64 {
    if span <= 0.0 {
        return if value > 0.0 { to } else { from };
    }
    from + (to - from) * (value / span).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(dx: f64, dy: f64) -> DragState {
        DragState {
            dx,
            dy,
            ..Default::default()
        }
    }

    #[test]
    fn hidden_without_drag() {
        assert_eq!(compute(None, 150.0, 240.0), OverlayState::HIDDEN);
    }

    #[test]
    fn like_ramps_to_full_at_half_threshold() {
        let state = compute(Some(&drag(37.5, 0.0)), 150.0, 240.0);
        assert!((state.like.opacity - 0.5).abs() < 1e-9);
        assert_eq!(state.pass.opacity, 0.0);

        let state = compute(Some(&drag(75.0, 0.0)), 150.0, 240.0);
        assert_eq!(state.like.opacity, 1.0);
        assert!((state.like.scale - 0.9).abs() < 1e-9);

        let state = compute(Some(&drag(400.0, 0.0)), 150.0, 240.0);
        assert_eq!(state.like.opacity, 1.0);
        assert_eq!(state.like.scale, MAX_BADGE_SCALE);
    }

    #[test]
    fn pass_mirrors_like() {
        let left = compute(Some(&drag(-60.0, 0.0)), 150.0, 240.0);
        let right = compute(Some(&drag(60.0, 0.0)), 150.0, 240.0);
        assert_eq!(left.pass, right.like);
        assert_eq!(left.like, Indicator::HIDDEN);
    }

    #[test]
    fn diagonal_drag_lights_two_badges() {
        let state = compute(Some(&drag(40.0, -100.0)), 150.0, 240.0);
        assert!(state.like.is_visible());
        assert!(state.super_like.is_visible());
        assert_eq!(state.strongest().map(|(d, _)| d), Some(Decision::SuperLike));
    }
}
