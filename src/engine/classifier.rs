//! Maps a finished gesture to a decision.

use super::gesture::DragState;
use super::Viewport;
use crate::domain::Decision;

/// Tunable classification thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierConfig {
    /// Horizontal commit distance as a fraction of viewport width.
    pub threshold_fraction: f64,
    /// Horizontal release speed (points/s) that commits regardless of distance.
    pub velocity_commit: f64,
    /// Upward commit distance as a fraction of viewport height.
    pub vertical_fraction: f64,
    /// Horizontal drift allowed for a super like, as a fraction of `threshold_x`.
    pub tolerance_fraction: f64,
    /// Largest displacement still treated as a tap, in points.
    pub tap_slop: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            threshold_fraction: 0.25,
            velocity_commit: 600.0,
            vertical_fraction: 0.30,
            tolerance_fraction: 0.5,
            tap_slop: 6.0,
        }
    }
}

/// Outcome of classifying a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Commit(Decision),
    Cancel,
    /// A cancelled gesture that barely moved.
    Tap,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionClassifier {
    config: ClassifierConfig,
    viewport: Viewport,
}

impl DecisionClassifier {
    #[must_use]
    pub const fn new(config: ClassifierConfig, viewport: Viewport) -> Self {
        Self { config, viewport }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    #[must_use]
    pub const fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    #[must_use]
    pub fn threshold_x(&self) -> f64 {
        self.config.threshold_fraction * self.viewport.width
    }

    #[must_use]
    pub fn threshold_y(&self) -> f64 {
        self.config.vertical_fraction * self.viewport.height
    }

    /// Classifies a released gesture. Horizontal commits are checked first and
    /// win when both axes qualify.
    ///
    /// # Examples
    ///
    /// ```
    /// use swipedeck::domain::Decision;
    /// use swipedeck::engine::{Classification, ClassifierConfig, DecisionClassifier, DragState, Viewport};
    ///
    /// let classifier = DecisionClassifier::new(ClassifierConfig::default(), Viewport::new(600.0, 800.0));
    /// let drag = DragState { dx: 200.0, ..Default::default() };
    /// assert_eq!(classifier.classify(&drag), Classification::Commit(Decision::Like));
    /// ```
    #[must_use]
    pub fn classify(&self, drag: &DragState) -> Classification {
        let threshold_x = self.threshold_x();

        if drag.dx.abs() > threshold_x || drag.velocity_x.abs() > self.config.velocity_commit {
            let sign = if drag.dx == 0.0 { drag.velocity_x } else { drag.dx };
            if sign > 0.0 {
                return Classification::Commit(Decision::Like);
            }
            if sign < 0.0 {
                return Classification::Commit(Decision::Pass);
            }
        }

        let within_band = drag.dx.abs() <= self.config.tolerance_fraction * threshold_x;
        if -drag.dy > self.threshold_y() && within_band {
            return Classification::Commit(Decision::SuperLike);
        }

        if drag.distance() <= self.config.tap_slop {
            Classification::Tap
        } else {
            Classification::Cancel
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> DecisionClassifier {
        // threshold_x = 150, threshold_y = 240
        DecisionClassifier::new(ClassifierConfig::default(), Viewport::new(600.0, 800.0))
    }

    fn drag(dx: f64, dy: f64, velocity_x: f64) -> DragState {
        DragState {
            dx,
            dy,
            velocity_x,
            ..Default::default()
        }
    }

    #[test]
    fn thresholds_follow_viewport() {
        let c = classifier();
        assert_eq!(c.threshold_x(), 150.0);
        assert_eq!(c.threshold_y(), 240.0);
    }

    #[test]
    fn horizontal_distance_commits() {
        let c = classifier();
        assert_eq!(c.classify(&drag(200.0, 0.0, 0.0)), Classification::Commit(Decision::Like));
        assert_eq!(c.classify(&drag(-200.0, 0.0, 0.0)), Classification::Commit(Decision::Pass));
        assert_eq!(c.classify(&drag(150.0, 0.0, 0.0)), Classification::Cancel);
    }

    #[test]
    fn fast_flick_commits_below_threshold() {
        let c = classifier();
        assert_eq!(c.classify(&drag(40.0, 0.0, 900.0)), Classification::Commit(Decision::Like));
        assert_eq!(c.classify(&drag(-40.0, 0.0, -900.0)), Classification::Commit(Decision::Pass));
    }

    #[test]
    fn zero_dx_flick_uses_velocity_sign() {
        let c = classifier();
        assert_eq!(c.classify(&drag(0.0, 0.0, -700.0)), Classification::Commit(Decision::Pass));
        assert_eq!(c.classify(&drag(0.0, 0.0, 700.0)), Classification::Commit(Decision::Like));
    }

    #[test]
    fn upward_drag_within_band_is_super_like() {
        let c = classifier();
        assert_eq!(
            c.classify(&drag(30.0, -300.0, 0.0)),
            Classification::Commit(Decision::SuperLike)
        );
        // Too much horizontal drift.
        assert_eq!(c.classify(&drag(100.0, -300.0, 0.0)), Classification::Cancel);
    }

    #[test]
    fn horizontal_wins_over_vertical() {
        let c = classifier();
        assert_eq!(
            c.classify(&drag(200.0, -300.0, 0.0)),
            Classification::Commit(Decision::Like)
        );
    }

    #[test]
    fn small_release_is_a_tap() {
        let c = classifier();
        assert_eq!(c.classify(&drag(3.0, 2.0, 0.0)), Classification::Tap);
        assert_eq!(c.classify(&drag(50.0, 0.0, 0.0)), Classification::Cancel);
    }
}
