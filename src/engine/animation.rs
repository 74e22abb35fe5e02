//! Frame-driven animation primitives.
//!
//! Nothing here owns a clock. Values only move when [`Animated::advance`] is
//! called with the time elapsed since the previous frame, which the host
//! delivers through `SwipeEngine::tick`.

/// Spring physics parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub damping: f64,
    pub stiffness: f64,
    pub mass: f64,
}

impl SpringConfig {
    /// Spring used to return a released card to rest.
    pub const RETURN: Self = Self {
        damping: 15.0,
        stiffness: 150.0,
        mass: 1.0,
    };

    /// Stiffer spring used for scale changes (lift on grab, settle on release).
    pub const SCALE: Self = Self {
        damping: 15.0,
        stiffness: 200.0,
        mass: 1.0,
    };
}

/// Integration step for spring simulation, in seconds.
const SPRING_STEP: f64 = 1.0 / 1000.0;

/// Upper bound on simulated time per `advance` call. Long stalls between
/// frames would otherwise cost thousands of integration steps.
const MAX_FRAME_DT: f64 = 0.25;

/// Distance from target below which a spring may settle.
const REST_DISPLACEMENT: f64 = 0.001;

/// Speed below which a spring may settle.
const REST_VELOCITY: f64 = 0.01;

/// A scalar that is either still or animating toward a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Animated {
    Still(f64),
    Spring {
        value: f64,
        velocity: f64,
        target: f64,
        config: SpringConfig,
    },
    Timing {
        from: f64,
        to: f64,
        elapsed: f64,
        duration: f64,
    },
}

impl Animated {
    #[must_use]
    pub fn value(&self) -> f64 {
        match *self {
            Self::Still(value) | Self::Spring { value, .. } => value,
            Self::Timing {
                from,
                to,
                elapsed,
                duration,
            } => {
                if duration <= 0.0 || elapsed >= duration {
                    to
                } else {
                    from + (to - from) * ease_in_out_quad(elapsed / duration)
                }
            }
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::Still(_))
    }

    /// Jumps to `value`, dropping any running animation.
    pub fn set(&mut self, value: f64) {
        *self = Self::Still(value);
    }

    /// Starts (or retargets) a spring toward `target`, keeping current velocity.
    pub fn spring_to(&mut self, target: f64, config: SpringConfig) {
        let velocity = match *self {
            Self::Spring { velocity, .. } => velocity,
            _ => 0.0,
        };
        *self = Self::Spring {
            value: self.value(),
            velocity,
            target,
            config,
        };
    }

    /// Starts a fixed-duration ease-in-out animation toward `target`.
    pub fn timing_to(&mut self, target: f64, duration: f64) {
        *self = Self::Timing {
            from: self.value(),
            to: target,
            elapsed: 0.0,
            duration,
        };
        self.settle_if_done();
    }

    /// Advances the animation by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        if dt <= 0.0 {
            self.settle_if_done();
            return;
        }
        let dt = dt.min(MAX_FRAME_DT);

        match self {
            Self::Still(_) => {}
            Self::Spring {
                value,
                velocity,
                target,
                config,
            } => {
                let mut remaining = dt;
                while remaining > 0.0 {
                    let h = remaining.min(SPRING_STEP);
                    let force = -config.stiffness * (*value - *target) - config.damping * *velocity;
                    *velocity += force / config.mass * h;
                    *value += *velocity * h;
                    remaining -= h;
                }
            }
            Self::Timing { elapsed, .. } => *elapsed += dt,
        }

        self.settle_if_done();
    }

    fn settle_if_done(&mut self) {
        match *self {
            Self::Spring {
                value,
                velocity,
                target,
                ..
            } if (value - target).abs() < REST_DISPLACEMENT && velocity.abs() < REST_VELOCITY => {
                *self = Self::Still(target);
            }
            Self::Timing {
                to,
                elapsed,
                duration,
                ..
            } if elapsed >= duration => {
                *self = Self::Still(to);
            }
            _ => {}
        }
    }
}

fn ease_in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Visual transform of one card, in points and degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotation: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl Transform {
    /// Resting transform of the front card.
    pub const REST: Self = Self {
        translate_x: 0.0,
        translate_y: 0.0,
        rotation: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };
}

impl Default for Transform {
    fn default() -> Self {
        Self::REST
    }
}

/// Animated transform channels of a single card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardMotion {
    pub translate_x: Animated,
    pub translate_y: Animated,
    pub rotation: Animated,
    pub scale: Animated,
    pub opacity: Animated,
}

impl CardMotion {
    #[must_use]
    pub const fn at(transform: Transform) -> Self {
        Self {
            translate_x: Animated::Still(transform.translate_x),
            translate_y: Animated::Still(transform.translate_y),
            rotation: Animated::Still(transform.rotation),
            scale: Animated::Still(transform.scale),
            opacity: Animated::Still(transform.opacity),
        }
    }

    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform {
            translate_x: self.translate_x.value(),
            translate_y: self.translate_y.value(),
            rotation: self.rotation.value(),
            scale: self.scale.value(),
            opacity: self.opacity.value(),
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.translate_x.is_active()
            || self.translate_y.is_active()
            || self.rotation.is_active()
            || self.scale.is_active()
            || self.opacity.is_active()
    }

    pub fn advance(&mut self, dt: f64) {
        self.translate_x.advance(dt);
        self.translate_y.advance(dt);
        self.rotation.advance(dt);
        self.scale.advance(dt);
        self.opacity.advance(dt);
    }

    /// Springs every channel back to [`Transform::REST`].
    pub fn spring_to_rest(&mut self) {
        self.translate_x.spring_to(0.0, SpringConfig::RETURN);
        self.translate_y.spring_to(0.0, SpringConfig::RETURN);
        self.rotation.spring_to(0.0, SpringConfig::RETURN);
        self.scale.spring_to(1.0, SpringConfig::SCALE);
        self.opacity.spring_to(1.0, SpringConfig::SCALE);
    }

    /// Animates every channel to `target` over `duration` seconds.
    pub fn timing_to(&mut self, target: Transform, duration: f64) {
        self.translate_x.timing_to(target.translate_x, duration);
        self.translate_y.timing_to(target.translate_y, duration);
        self.rotation.timing_to(target.rotation, duration);
        self.scale.timing_to(target.scale, duration);
        self.opacity.timing_to(target.opacity, duration);
    }
}

impl Default for CardMotion {
    fn default() -> Self {
        Self::at(Transform::REST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(anim: &mut Animated, seconds: f64) {
        let frames = (seconds * 60.0).ceil() as usize;
        for _ in 0..frames {
            anim.advance(1.0 / 60.0);
        }
    }

    #[test]
    fn spring_settles_exactly_on_target() {
        let mut anim = Animated::Still(120.0);
        anim.spring_to(0.0, SpringConfig::RETURN);
        assert!(anim.is_active());

        run(&mut anim, 5.0);

        assert_eq!(anim, Animated::Still(0.0));
        assert_eq!(anim.value(), 0.0);
    }

    #[test]
    fn spring_overshoots_before_settling() {
        let mut anim = Animated::Still(100.0);
        anim.spring_to(0.0, SpringConfig::RETURN);

        let mut min_seen = f64::MAX;
        for _ in 0..60 {
            anim.advance(1.0 / 60.0);
            min_seen = min_seen.min(anim.value());
        }
        assert!(min_seen < 0.0, "underdamped spring should overshoot");
    }

    #[test]
    fn timing_reaches_target_after_duration() {
        let mut anim = Animated::Still(0.0);
        anim.timing_to(100.0, 0.35);

        anim.advance(0.175);
        assert!((anim.value() - 50.0).abs() < 1e-9);

        anim.advance(0.2);
        assert_eq!(anim, Animated::Still(100.0));
    }

    #[test]
    fn zero_duration_timing_is_immediate() {
        let mut anim = Animated::Still(3.0);
        anim.timing_to(9.0, 0.0);
        assert_eq!(anim, Animated::Still(9.0));
    }

    #[test]
    fn retargeting_keeps_velocity() {
        let mut anim = Animated::Still(0.0);
        anim.spring_to(100.0, SpringConfig::RETURN);
        anim.advance(0.05);
        let Animated::Spring { velocity, .. } = anim else {
            panic!("expected spring");
        };
        anim.spring_to(0.0, SpringConfig::RETURN);
        let Animated::Spring { velocity: kept, .. } = anim else {
            panic!("expected spring");
        };
        assert_eq!(velocity, kept);
    }

    #[test]
    fn motion_springs_back_to_rest() {
        let mut motion = CardMotion::at(Transform {
            translate_x: 80.0,
            translate_y: -20.0,
            rotation: 4.0,
            scale: 1.02,
            opacity: 1.0,
        });
        motion.spring_to_rest();
        for _ in 0..600 {
            motion.advance(1.0 / 60.0);
        }
        assert!(!motion.is_active());
        assert_eq!(motion.transform(), Transform::REST);
    }
}
