//! Stack layout and card motion.
//!
//! The presenter owns every animated transform: the front card's motion
//! (driven by the drag, springs and promotion) and one exit animation per
//! decided card. Cards behind the front get static transforms from their
//! index.

use super::animation::{CardMotion, SpringConfig, Transform};
use super::gesture::DragState;
use super::stack::CardStack;
use super::Viewport;
use crate::domain::{CardId, Decision};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresenterConfig {
    /// Number of pending cards that get a layout entry.
    pub visible_depth: usize,
    /// Vertical offset between stacked cards, in points.
    pub stack_offset: f64,
    pub base_scale: f64,
    pub scale_step: f64,
    pub opacity_step: f64,
    pub min_opacity: f64,
    /// Scale of the front card while held.
    pub lift_scale: f64,
    /// Exit animation duration, in seconds.
    pub exit_duration: f64,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            visible_depth: 3,
            stack_offset: 15.0,
            base_scale: 0.96,
            scale_step: 0.01,
            opacity_step: 0.12,
            min_opacity: 0.4,
            lift_scale: 1.02,
            exit_duration: 0.35,
        }
    }
}

/// Exit travel as a multiple of the viewport dimension.
const EXIT_DISTANCE: f64 = 1.2;
const EXIT_RISE: f64 = -80.0;
const EXIT_ROTATION: f64 = 12.0;
const EXIT_SCALE: f64 = 0.85;

/// Where a card ends up once its exit animation for `decision` completes.
#[must_use]
pub fn exit_transform(decision: Decision, viewport: Viewport) -> Transform {
    match decision {
        Decision::Like | Decision::Pass => {
            let sign = if decision == Decision::Like { 1.0 } else { -1.0 };
            Transform {
                translate_x: sign * EXIT_DISTANCE * viewport.width,
                translate_y: EXIT_RISE,
                rotation: sign * EXIT_ROTATION,
                scale: EXIT_SCALE,
                opacity: 0.0,
            }
        }
        Decision::SuperLike => Transform {
            translate_x: 0.0,
            translate_y: -EXIT_DISTANCE * viewport.height,
            rotation: 0.0,
            scale: EXIT_SCALE,
            opacity: 0.0,
        },
    }
}

/// Render instruction for one card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout {
    pub id: CardId,
    /// Position among pending cards; `None` for exiting cards.
    pub index: Option<usize>,
    pub transform: Transform,
    /// Paint order, higher on top.
    pub z: usize,
}

impl CardLayout {
    #[must_use]
    pub const fn is_exiting(&self) -> bool {
        self.index.is_none()
    }
}

#[derive(Debug, Clone)]
struct Exit {
    id: CardId,
    decision: Decision,
    motion: CardMotion,
}

#[derive(Debug, Clone, Default)]
pub struct StackPresenter {
    config: PresenterConfig,
    front: CardMotion,
    exits: Vec<Exit>,
}

impl StackPresenter {
    #[must_use]
    pub fn new(config: PresenterConfig) -> Self {
        Self {
            config,
            front: CardMotion::default(),
            exits: Vec::new(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &PresenterConfig {
        &self.config
    }

    /// Drops every animation and puts the front card at rest.
    pub fn clear(&mut self) {
        self.front = CardMotion::default();
        self.exits.clear();
    }

    #[must_use]
    pub fn front_transform(&self) -> Transform {
        self.front.transform()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.front.is_active() || !self.exits.is_empty()
    }

    /// Scales the front card up when it is grabbed.
    pub fn lift(&mut self) {
        self.front.scale.spring_to(self.config.lift_scale, SpringConfig::SCALE);
    }

    /// Makes the front card follow the pointer.
    pub fn follow(&mut self, drag: &DragState) {
        self.front.translate_x.set(drag.dx);
        self.front.translate_y.set(drag.dy);
        self.front.rotation.set(drag.rotation);
    }

    pub fn spring_back(&mut self) {
        self.front.spring_to_rest();
    }

    /// Turns the front motion into an exit animation for `id`.
    ///
    /// The card promoted to front takes the rest transform at once.
    pub fn commit_exit(&mut self, id: CardId, decision: Decision, viewport: Viewport) {
        let mut motion = std::mem::take(&mut self.front);
        motion.timing_to(exit_transform(decision, viewport), self.config.exit_duration);
        self.exits.push(Exit {
            id,
            decision,
            motion,
        });
    }

    /// Stops the exit animation of `id` and returns where the card currently is.
    pub fn cancel_exit(&mut self, id: &CardId) -> Option<Transform> {
        let pos = self.exits.iter().position(|exit| &exit.id == id)?;
        Some(self.exits.remove(pos).motion.transform())
    }

    /// Brings a card back in front, springing from `from` to rest.
    pub fn restore_front(&mut self, from: Transform) {
        self.front = CardMotion::at(from);
        self.front.spring_to_rest();
    }

    /// Advances all animations and returns the ids whose exit finished.
    pub fn advance(&mut self, dt: f64) -> Vec<(CardId, Decision)> {
        self.front.advance(dt);
        for exit in &mut self.exits {
            exit.motion.advance(dt);
        }

        let mut finished = Vec::new();
        self.exits.retain(|exit| {
            if exit.motion.is_active() {
                true
            } else {
                finished.push((exit.id.clone(), exit.decision));
                false
            }
        });
        finished
    }

    /// Static transform of the pending card at `index`.
    #[must_use]
    pub fn resting_transform(&self, index: usize) -> Transform {
        if index == 0 {
            return Transform::REST;
        }
        let i = index as f64;
        Transform {
            translate_x: 0.0,
            translate_y: self.config.stack_offset * i,
            rotation: 0.0,
            scale: self.config.base_scale - self.config.scale_step * i,
            opacity: (1.0 - self.config.opacity_step * i).max(self.config.min_opacity),
        }
    }

    /// Layout of visible pending cards and exiting cards, back to front.
    ///
    /// Pending cards get `z = stack.len() - index`; exiting cards sit above.
    #[must_use]
    pub fn layout(&self, stack: &CardStack) -> Vec<CardLayout> {
        let depth = stack.len();
        let visible = depth.min(self.config.visible_depth);

        let mut cards: Vec<CardLayout> = stack
            .iter()
            .take(visible)
            .enumerate()
            .map(|(index, card)| CardLayout {
                id: card.id.clone(),
                index: Some(index),
                transform: if index == 0 {
                    self.front.transform()
                } else {
                    self.resting_transform(index)
                },
                z: depth - index,
            })
            .collect();

        cards.extend(self.exits.iter().enumerate().map(|(k, exit)| CardLayout {
            id: exit.id.clone(),
            index: None,
            transform: exit.motion.transform(),
            z: depth + 1 + k,
        }));

        cards.sort_by_key(|layout| layout.z);
        cards
    }
}
