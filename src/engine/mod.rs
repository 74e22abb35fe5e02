//! Swipe decision engine.
//!
//! Converts a drag on the front card of a profile stack into a discrete
//! [`Decision`], animates the stack and reports outcomes to a
//! [`SwipeCallbacks`] collaborator. The engine is synchronous and owns no
//! clock: the host feeds it pointer samples with timestamps and calls
//! [`SwipeEngine::tick`] once per frame.
//!
//! A committed card leaves the pending stack at once but stays on screen
//! until its exit animation ends. `on_exhausted` fires from the `tick` that
//! finishes the last exit, so a host must keep ticking while
//! [`SwipeEngine::is_animating`] is true to ever see it.
//!
//! - [`gesture`]: pointer tracking and [`DragState`]
//! - [`classifier`]: drag → [`Classification`]
//! - [`presenter`]: stack layout, exit and spring animations
//! - [`dispatcher`]: callback delivery and the exhausted notification
//! - [`overlay`]: hint badge intensities
//! - [`stack`]: pending and exiting cards
//!
//! # Examples
//!
//! ```
//! use swipedeck::domain::{Card, Decision, Profile, SwipeDirection};
//! use swipedeck::engine::{EngineConfig, NoCallbacks, Point, SwipeEngine, Viewport};
//!
//! let mut engine = SwipeEngine::new(EngineConfig::default(), Viewport::new(600.0, 800.0), NoCallbacks);
//! engine.load(vec![
//!     Card::new("a", Profile::default()),
//!     Card::new("b", Profile::default()),
//! ]);
//!
//! let a = engine.stack().front().unwrap().id.clone();
//! engine.begin_gesture(&a, Point::new(0.0, 0.0), 0.0);
//! engine.end_gesture(&a, Point::new(200.0, 0.0), 0.5);
//! assert_eq!(engine.stack().front().unwrap().id.as_str(), "b");
//!
//! assert_eq!(engine.force_swipe(SwipeDirection::Left), Some(Decision::Pass));
//! ```

pub mod animation;
pub mod classifier;
pub mod dispatcher;
pub mod gesture;
pub mod overlay;
pub mod presenter;
pub mod stack;

pub use animation::Transform;
pub use classifier::{Classification, ClassifierConfig, DecisionClassifier};
pub use dispatcher::{NoCallbacks, OutcomeDispatcher, SwipeCallbacks};
pub use gesture::{DragState, GestureTracker, Point};
pub use overlay::{Indicator, OverlayState};
pub use presenter::{CardLayout, PresenterConfig, StackPresenter};
pub use stack::CardStack;

use crate::domain::{Card, CardId, Decision, DecisionRecord, SwipeDirection};

/// Size of the area cards are dragged in, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(600.0, 800.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EngineConfig {
    pub classifier: ClassifierConfig,
    pub presenter: PresenterConfig,
}

/// What happened when a gesture ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    Committed(Decision),
    Cancelled,
    /// Released without moving; the front card advanced its photo.
    Tapped,
    /// Reported against a card other than the one being dragged.
    Ignored,
}

/// Swipe engine over a card stack, reporting to callbacks `C`.
///
/// Outcome callbacks run inside the call that commits. `on_exhausted` runs
/// later, from the [`tick`](Self::tick) that removes the last exiting card.
pub struct SwipeEngine<C: SwipeCallbacks> {
    viewport: Viewport,
    stack: CardStack,
    tracker: GestureTracker,
    classifier: DecisionClassifier,
    presenter: StackPresenter,
    dispatcher: OutcomeDispatcher,
    history: Vec<DecisionRecord>,
    callbacks: C,
}

impl<C: SwipeCallbacks> SwipeEngine<C> {
    pub fn new(config: EngineConfig, viewport: Viewport, callbacks: C) -> Self {
        Self {
            viewport,
            stack: CardStack::default(),
            tracker: GestureTracker::new(),
            classifier: DecisionClassifier::new(config.classifier, viewport),
            presenter: StackPresenter::new(config.presenter),
            dispatcher: OutcomeDispatcher::new(),
            history: Vec::new(),
            callbacks,
        }
    }

    /// Replaces the stack with `cards`, dropping gestures, animations and
    /// undo history.
    ///
    /// Loading an empty deck does not fire `on_exhausted`; the stack never
    /// had anything to run out of.
    pub fn load(&mut self, cards: Vec<Card>) {
        tracing::debug!(count = cards.len(), "loading card stack");
        self.stack = CardStack::new(cards);
        self.tracker.cancel();
        self.presenter.clear();
        self.history.clear();
        if self.stack.is_drained() {
            self.dispatcher.disarm();
        } else {
            self.dispatcher.rearm();
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.classifier.set_viewport(viewport);
    }

    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Starts a drag on `card`. Returns `false` (and changes nothing) unless
    /// `card` is the front card and no other gesture is running.
    pub fn begin_gesture(&mut self, card: &CardId, at: Point, t: f64) -> bool {
        let front = self.stack.front().map(|c| &c.id);
        if !self.tracker.begin(card, front, at, t) {
            tracing::debug!(card = %card, "gesture start ignored");
            return false;
        }
        self.presenter.lift();
        true
    }

    /// Feeds a pointer sample. Returns `false` when no gesture runs on `card`.
    pub fn update_gesture(&mut self, card: &CardId, at: Point, t: f64) -> bool {
        match self.tracker.update(card, at, t, self.viewport) {
            Some(drag) => {
                self.presenter.follow(&drag);
                true
            }
            None => false,
        }
    }

    /// Ends the drag on `card` at pointer position `at` and acts on its
    /// classification.
    pub fn end_gesture(&mut self, card: &CardId, at: Point, t: f64) -> GestureOutcome {
        if self.tracker.card().is_some_and(|active| active != card) {
            tracing::debug!(card = %card, "gesture end for non-dragged card ignored");
            return GestureOutcome::Ignored;
        }

        self.update_gesture(card, at, t);
        let Some(drag) = self.tracker.end(card) else {
            tracing::debug!(card = %card, "gesture end without start");
            return GestureOutcome::Cancelled;
        };

        match self.classifier.classify(&drag) {
            Classification::Commit(decision) => {
                self.commit(decision);
                GestureOutcome::Committed(decision)
            }
            Classification::Cancel => {
                self.presenter.spring_back();
                GestureOutcome::Cancelled
            }
            Classification::Tap => {
                self.presenter.spring_back();
                self.next_photo();
                GestureOutcome::Tapped
            }
        }
    }

    /// Commits `direction` on the front card without a gesture, exactly as a
    /// drag past the threshold would. Any running drag is discarded.
    pub fn force_swipe(&mut self, direction: SwipeDirection) -> Option<Decision> {
        if self.stack.is_empty() {
            return None;
        }
        if self.tracker.cancel().is_some() {
            tracing::debug!("running gesture replaced by forced swipe");
        }
        let decision = direction.decision();
        self.commit(decision).map(|_| decision)
    }

    /// Cancels any running drag and springs the front card back to rest.
    pub fn reset(&mut self) {
        self.tracker.cancel();
        self.presenter.spring_back();
    }

    /// Brings the most recently decided card back to the front.
    pub fn undo(&mut self) -> Option<CardId> {
        let record = self.history.pop()?;
        self.tracker.cancel();

        let id = record.card.id.clone();
        let from = self
            .presenter
            .cancel_exit(&id)
            .unwrap_or_else(|| presenter::exit_transform(record.decision, self.viewport));
        self.stack.restore_front(record.card);
        self.presenter.restore_front(from);
        self.dispatcher.rearm();

        tracing::info!(card = %id, decision = %record.decision, "decision undone");
        Some(id)
    }

    /// Shows the next photo of the front card. Returns `false` if it has
    /// fewer than two photos or the stack is empty.
    pub fn next_photo(&mut self) -> bool {
        self.stack.front_mut().is_some_and(Card::next_photo)
    }

    /// Advances animations by `dt` seconds. Returns whether another frame is
    /// needed.
    pub fn tick(&mut self, dt: f64) -> bool {
        self.finish_exits(dt);
        self.is_animating()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.presenter.is_animating()
    }

    #[must_use]
    pub fn layout(&self) -> Vec<CardLayout> {
        self.presenter.layout(&self.stack)
    }

    #[must_use]
    pub fn overlay(&self) -> OverlayState {
        overlay::compute(
            self.tracker.drag(),
            self.classifier.threshold_x(),
            self.classifier.threshold_y(),
        )
    }

    #[must_use]
    pub fn drag(&self) -> Option<&DragState> {
        self.tracker.drag()
    }

    #[must_use]
    pub const fn stack(&self) -> &CardStack {
        &self.stack
    }

    #[must_use]
    pub fn history(&self) -> &[DecisionRecord] {
        &self.history
    }

    #[must_use]
    pub const fn classifier(&self) -> &DecisionClassifier {
        &self.classifier
    }

    #[must_use]
    pub const fn callbacks(&self) -> &C {
        &self.callbacks
    }

    pub fn callbacks_mut(&mut self) -> &mut C {
        &mut self.callbacks
    }

    fn commit(&mut self, decision: Decision) -> Option<CardId> {
        let id = self.stack.advance()?;
        if let Some(card) = self.stack.get(&id) {
            self.history.push(DecisionRecord::now(card.clone(), decision));
        }

        self.presenter.commit_exit(id.clone(), decision, self.viewport);

        tracing::info!(card = %id, decision = %decision, remaining = self.stack.len(), "decision committed");
        self.dispatcher
            .dispatch(&mut self.callbacks, decision, &id, &self.stack);

        self.finish_exits(0.0);
        Some(id)
    }

    fn finish_exits(&mut self, dt: f64) {
        for (id, decision) in self.presenter.advance(dt) {
            self.stack.remove_exiting(&id);
            tracing::debug!(card = %id, decision = %decision, "exit animation finished");
        }
        if self.dispatcher.notify_exhausted(&mut self.callbacks, &self.stack) {
            tracing::info!("card stack exhausted");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Profile, Result, SwipeDeckError};

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
        seen_in_stack: Vec<bool>,
        fail: bool,
    }

    impl Recorder {
        fn record(&mut self, name: &str, card: &CardId, stack: &CardStack) -> Result<()> {
            self.events.push(format!("{name}:{card}"));
            self.seen_in_stack.push(stack.get(card).is_some());
            if self.fail {
                return Err(SwipeDeckError::Callback("boom".into()));
            }
            Ok(())
        }
    }

    impl SwipeCallbacks for Recorder {
        fn on_pass(&mut self, card: &CardId, stack: &CardStack) -> Result<()> {
            self.record("pass", card, stack)
        }

        fn on_like(&mut self, card: &CardId, stack: &CardStack) -> Result<()> {
            self.record("like", card, stack)
        }

        fn on_super_like(&mut self, card: &CardId, stack: &CardStack) -> Result<()> {
            self.record("super", card, stack)
        }

        fn on_exhausted(&mut self) -> Result<()> {
            self.events.push("exhausted".into());
            Ok(())
        }
    }

    fn engine(ids: &[&str]) -> SwipeEngine<Recorder> {
        let mut engine = SwipeEngine::new(
            EngineConfig::default(),
            Viewport::new(600.0, 800.0),
            Recorder::default(),
        );
        engine.load(ids.iter().map(|id| Card::new(*id, Profile::default())).collect());
        engine
    }

    fn settle(engine: &mut SwipeEngine<Recorder>) {
        for _ in 0..600 {
            if !engine.tick(1.0 / 60.0) {
                break;
            }
        }
    }

    fn id(s: &str) -> CardId {
        CardId::from(s)
    }

    #[test]
    fn lift_scales_front_card_while_held() {
        let mut e = engine(&["a"]);
        e.begin_gesture(&id("a"), Point::default(), 0.0);
        for _ in 0..120 {
            e.tick(1.0 / 60.0);
        }
        let front = e.layout().pop().unwrap();
        assert!((front.transform.scale - 1.02).abs() < 1e-3);
    }

    #[test]
    fn callback_sees_card_in_stack() {
        let mut e = engine(&["a", "b"]);
        e.force_swipe(SwipeDirection::Right);
        assert_eq!(e.callbacks().events, ["like:a"]);
        assert_eq!(e.callbacks().seen_in_stack, [true]);
    }

    #[test]
    fn failing_callback_still_advances() {
        let mut e = engine(&["a", "b"]);
        e.callbacks_mut().fail = true;

        e.force_swipe(SwipeDirection::Left);

        assert_eq!(e.stack().front().map(|c| c.id.as_str()), Some("b"));
        assert_eq!(e.callbacks().events, ["pass:a"]);
    }

    #[test]
    fn gesture_on_background_card_is_ignored() {
        let mut e = engine(&["a", "b"]);
        assert!(!e.begin_gesture(&id("b"), Point::default(), 0.0));
        assert!(e.drag().is_none());
        assert!(!e.is_animating());
    }

    #[test]
    fn end_for_other_card_keeps_drag() {
        let mut e = engine(&["a", "b"]);
        e.begin_gesture(&id("a"), Point::default(), 0.0);
        assert_eq!(
            e.end_gesture(&id("b"), Point::new(300.0, 0.0), 0.1),
            GestureOutcome::Ignored
        );
        assert!(e.drag().is_some());
    }

    #[test]
    fn end_without_start_is_noop() {
        let mut e = engine(&["a"]);
        assert_eq!(
            e.end_gesture(&id("a"), Point::new(300.0, 0.0), 0.1),
            GestureOutcome::Cancelled
        );
        assert_eq!(e.stack().len(), 1);
        assert!(e.callbacks().events.is_empty());
    }

    #[test]
    fn tap_advances_photo() {
        let mut e = engine(&[]);
        e.load(vec![Card::new(
            "a",
            Profile {
                photos: vec!["one".into(), "two".into()],
                ..Default::default()
            },
        )]);

        e.begin_gesture(&id("a"), Point::new(10.0, 10.0), 0.0);
        let outcome = e.end_gesture(&id("a"), Point::new(12.0, 11.0), 0.2);

        assert_eq!(outcome, GestureOutcome::Tapped);
        assert_eq!(e.stack().front().unwrap().photo_index, 1);
    }

    #[test]
    fn upward_drag_commits_super_like() {
        let mut e = engine(&["a", "b"]);
        e.begin_gesture(&id("a"), Point::new(300.0, 700.0), 0.0);
        e.update_gesture(&id("a"), Point::new(310.0, 500.0), 0.2);
        let outcome = e.end_gesture(&id("a"), Point::new(310.0, 400.0), 0.4);

        assert_eq!(outcome, GestureOutcome::Committed(Decision::SuperLike));
        assert_eq!(e.callbacks().events, ["super:a"]);
    }

    #[test]
    fn undo_restores_card_and_rearms_exhausted() {
        let mut e = engine(&["a"]);
        e.force_swipe(SwipeDirection::Left);
        settle(&mut e);
        assert_eq!(e.callbacks().events, ["pass:a", "exhausted"]);

        assert_eq!(e.undo(), Some(id("a")));
        assert_eq!(e.stack().front().map(|c| c.id.as_str()), Some("a"));
        assert!(e.is_animating());
        settle(&mut e);
        assert_eq!(e.layout().pop().unwrap().transform, Transform::REST);

        e.force_swipe(SwipeDirection::Right);
        settle(&mut e);
        assert_eq!(
            e.callbacks().events,
            ["pass:a", "exhausted", "like:a", "exhausted"]
        );
    }

    #[test]
    fn undo_mid_exit_does_not_duplicate_card() {
        let mut e = engine(&["a", "b"]);
        e.force_swipe(SwipeDirection::Right);
        e.tick(0.1);
        e.undo();

        let ids: Vec<_> = e.layout().into_iter().map(|l| l.id.0).collect();
        assert_eq!(ids, ["b", "a"]);
        assert!(e.stack().exiting().is_empty());
    }

    #[test]
    fn undo_without_history_is_none() {
        let mut e = engine(&["a"]);
        assert_eq!(e.undo(), None);
    }

    #[test]
    fn empty_load_does_not_fire_exhausted() {
        let mut e = engine(&[]);
        settle(&mut e);
        assert!(!e.tick(0.016));
        assert!(e.callbacks().events.is_empty());
        assert_eq!(e.force_swipe(SwipeDirection::Right), None);
    }

    #[test]
    fn reset_springs_back_and_clears_drag() {
        let mut e = engine(&["a"]);
        e.begin_gesture(&id("a"), Point::default(), 0.0);
        e.update_gesture(&id("a"), Point::new(60.0, 10.0), 0.1);
        e.reset();

        assert!(e.drag().is_none());
        settle(&mut e);
        assert_eq!(e.layout()[0].transform, Transform::REST);
    }

    /// Drags card `card` by `(dx, dy)` over `seconds`, sampling halfway.
    fn drag(e: &mut SwipeEngine<Recorder>, card: &str, dx: f64, dy: f64, seconds: f64) -> GestureOutcome {
        let card = id(card);
        e.begin_gesture(&card, Point::default(), 0.0);
        e.update_gesture(&card, Point::new(dx / 2.0, dy / 2.0), seconds / 2.0);
        e.end_gesture(&card, Point::new(dx, dy), seconds)
    }

    fn pending(e: &SwipeEngine<Recorder>) -> Vec<&str> {
        e.stack().iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn drag_past_threshold_likes_and_promotes_next_card() {
        let mut e = engine(&["a", "b", "c"]);
        assert_eq!(e.classifier().threshold_x(), 150.0);

        let outcome = drag(&mut e, "a", 200.0, 0.0, 1.0);

        assert_eq!(outcome, GestureOutcome::Committed(Decision::Like));
        assert_eq!(e.callbacks().events, ["like:a"]);
        assert_eq!(pending(&e), ["b", "c"]);

        let front = e.layout().into_iter().find(|l| l.index == Some(0)).unwrap();
        assert_eq!(front.id.as_str(), "b");
        assert_eq!(front.transform, Transform::REST);
    }

    #[test]
    fn forced_swipe_promotes_next_card_without_a_frame() {
        let mut e = engine(&["a", "b", "c"]);
        e.force_swipe(SwipeDirection::Right);

        let layout = e.layout();
        let front = layout.iter().find(|l| l.index == Some(0)).unwrap();
        assert_eq!(front.id.as_str(), "b");
        assert_eq!(front.transform, Transform::REST);
        assert!(layout.last().unwrap().is_exiting());
    }

    #[test]
    fn exhausted_waits_for_the_exit_animation() {
        let mut e = engine(&["a"]);
        e.force_swipe(SwipeDirection::Up);

        assert!(e.stack().is_empty());
        assert_eq!(e.callbacks().events, ["super:a"]);

        settle(&mut e);
        assert_eq!(e.callbacks().events, ["super:a", "exhausted"]);
    }

    #[test]
    fn short_slow_drag_springs_back_to_rest() {
        let mut e = engine(&["a"]);

        let outcome = drag(&mut e, "a", 50.0, 20.0, 1.0);

        assert_eq!(outcome, GestureOutcome::Cancelled);
        assert_eq!(pending(&e), ["a"]);
        settle(&mut e);
        assert_eq!(e.layout()[0].transform, Transform::REST);
        assert!(e.callbacks().events.is_empty());
    }

    #[test]
    fn left_drag_passes_whatever_the_vertical_offset() {
        let mut e = engine(&["a", "b"]);
        assert_eq!(drag(&mut e, "a", -180.0, -400.0, 1.0), GestureOutcome::Committed(Decision::Pass));
        assert_eq!(e.callbacks().events, ["pass:a"]);
    }

    #[test]
    fn horizontal_commit_wins_over_vertical() {
        let mut e = engine(&["a", "b"]);
        assert_eq!(drag(&mut e, "a", 160.0, -400.0, 1.0), GestureOutcome::Committed(Decision::Like));
    }

    #[test]
    fn fast_flick_commits_below_threshold() {
        let mut e = engine(&["a", "b"]);
        assert_eq!(drag(&mut e, "a", -100.0, 0.0, 0.1), GestureOutcome::Committed(Decision::Pass));
    }

    #[test]
    fn forced_swipe_matches_gesture_past_threshold() {
        let mut forced = engine(&["a", "b"]);
        let mut dragged = engine(&["a", "b"]);

        let decision = forced.force_swipe(SwipeDirection::Right);
        let outcome = drag(&mut dragged, "a", 151.0, 0.0, 1.0);

        assert_eq!(outcome, GestureOutcome::Committed(Decision::Like));
        assert_eq!(decision, Some(Decision::Like));
        assert_eq!(forced.callbacks().events, dragged.callbacks().events);
        assert_eq!(pending(&forced), pending(&dragged));
    }

    #[test]
    fn each_commit_removes_one_card_in_order() {
        let ids = ["a", "b", "c", "d", "e"];
        let mut e = engine(&ids);
        let directions = [SwipeDirection::Left, SwipeDirection::Up, SwipeDirection::Right];

        for (n, direction) in directions.into_iter().enumerate() {
            e.force_swipe(direction);
            assert_eq!(e.stack().len(), ids.len() - n - 1);
            assert_eq!(e.stack().front().unwrap().id.as_str(), ids[n + 1]);
        }
        assert_eq!(e.history().len(), 3);
        assert_eq!(e.history()[1].decision, Decision::SuperLike);
    }

    #[test]
    fn last_commit_fires_exhausted_exactly_once() {
        let mut e = engine(&["a"]);

        e.force_swipe(SwipeDirection::Left);
        assert!(e.stack().is_empty());
        settle(&mut e);
        e.tick(1.0 / 60.0);
        assert_eq!(e.force_swipe(SwipeDirection::Right), None);

        assert_eq!(e.callbacks().events, ["pass:a", "exhausted"]);
    }
}
