//! End-to-end swipe behavior through the public engine and plugin APIs.

use swipedeck::app::{AlwaysMatch, NeverMatch};
use swipedeck::domain::{Card, CardId, Decision, Profile, Result, SwipeDirection};
use swipedeck::engine::{CardStack, EngineConfig, GestureOutcome, Point, SwipeCallbacks, SwipeEngine, Transform, Viewport};
use swipedeck::ui::render_canvas;
use swipedeck::worker::WorkerResponse;
use swipedeck::{handle_event, AppState, Config, Event, ScreenMode};

#[derive(Default)]
struct Log(Vec<String>);

impl SwipeCallbacks for Log {
    fn on_pass(&mut self, card: &CardId, _stack: &CardStack) -> Result<()> {
        self.0.push(format!("onPass({card})"));
        Ok(())
    }

    fn on_like(&mut self, card: &CardId, _stack: &CardStack) -> Result<()> {
        self.0.push(format!("onLike({card})"));
        Ok(())
    }

    fn on_super_like(&mut self, card: &CardId, _stack: &CardStack) -> Result<()> {
        self.0.push(format!("onSuperLike({card})"));
        Ok(())
    }

    fn on_exhausted(&mut self) -> Result<()> {
        self.0.push("onExhausted".to_string());
        Ok(())
    }
}

fn cards(ids: &[&str]) -> Vec<Card> {
    ids.iter()
        .map(|id| {
            Card::new(
                *id,
                Profile {
                    name: id.to_string(),
                    age: 27,
                    ..Default::default()
                },
            )
        })
        .collect()
}

/// Engine over a 600×800 viewport, so the horizontal threshold is 150.
fn engine(ids: &[&str]) -> SwipeEngine<Log> {
    let mut engine = SwipeEngine::new(EngineConfig::default(), Viewport::new(600.0, 800.0), Log::default());
    engine.load(cards(ids));
    engine
}

fn gesture(engine: &mut SwipeEngine<Log>, card: &str, dx: f64, dy: f64) -> GestureOutcome {
    let card = CardId::from(card);
    assert!(engine.begin_gesture(&card, Point::new(300.0, 400.0), 0.0));
    engine.update_gesture(&card, Point::new(300.0 + dx / 2.0, 400.0 + dy / 2.0), 0.5);
    engine.end_gesture(&card, Point::new(300.0 + dx, 400.0 + dy), 1.0)
}

fn run_frames(engine: &mut SwipeEngine<Log>) {
    for _ in 0..600 {
        if !engine.tick(1.0 / 60.0) {
            return;
        }
    }
}

fn pending(engine: &SwipeEngine<Log>) -> Vec<String> {
    engine.stack().iter().map(|c| c.id.to_string()).collect()
}

#[test]
fn like_past_threshold_fires_on_like_and_advances() {
    let mut e = engine(&["A", "B", "C"]);

    assert_eq!(gesture(&mut e, "A", 200.0, 0.0), GestureOutcome::Committed(Decision::Like));

    assert_eq!(e.callbacks().0, ["onLike(A)"]);
    assert_eq!(pending(&e), ["B", "C"]);

    let front = e.layout().into_iter().find(|l| l.index == Some(0)).unwrap();
    assert_eq!(front.id.as_str(), "B");
    assert_eq!(front.transform, Transform::REST);
}

#[test]
fn drag_below_threshold_returns_card_to_rest() {
    let mut e = engine(&["A"]);

    assert_eq!(gesture(&mut e, "A", 50.0, 0.0), GestureOutcome::Cancelled);
    run_frames(&mut e);

    assert!(e.callbacks().0.is_empty());
    assert_eq!(pending(&e), ["A"]);
    assert_eq!(e.layout()[0].transform, Transform::REST);
}

#[test]
fn deciding_the_last_card_fires_on_exhausted_once() {
    for direction in [SwipeDirection::Left, SwipeDirection::Right, SwipeDirection::Up] {
        let mut e = engine(&["A"]);
        e.force_swipe(direction);
        assert!(pending(&e).is_empty());

        run_frames(&mut e);
        run_frames(&mut e);

        let exhausted = e.callbacks().0.iter().filter(|c| *c == "onExhausted").count();
        assert_eq!(exhausted, 1, "{direction:?}");
    }
}

#[test]
fn negative_dx_passes_regardless_of_vertical() {
    for dy in [-500.0, 0.0, 500.0] {
        let mut e = engine(&["A", "B"]);
        assert_eq!(gesture(&mut e, "A", -151.0, dy), GestureOutcome::Committed(Decision::Pass));
    }
}

#[test]
fn upward_drag_within_band_super_likes() {
    let mut e = engine(&["A", "B"]);
    assert_eq!(gesture(&mut e, "A", 30.0, -300.0), GestureOutcome::Committed(Decision::SuperLike));
    assert_eq!(e.callbacks().0, ["onSuperLike(A)"]);
}

#[test]
fn n_decisions_leave_m_minus_n_cards() {
    let ids = ["A", "B", "C", "D"];
    let mut e = engine(&ids);

    gesture(&mut e, "A", 200.0, 0.0);
    e.force_swipe(SwipeDirection::Left);
    gesture(&mut e, "C", 0.0, -300.0);

    assert_eq!(pending(&e), ["D"]);
    assert_eq!(e.callbacks().0, ["onLike(A)", "onPass(B)", "onSuperLike(C)"]);
}

#[test]
fn force_swipe_right_equals_drag_just_past_threshold() {
    let mut forced = engine(&["A", "B"]);
    let mut dragged = engine(&["A", "B"]);

    forced.force_swipe(SwipeDirection::Right);
    gesture(&mut dragged, "A", 151.0, 0.0);

    assert_eq!(forced.callbacks().0, dragged.callbacks().0);
    assert_eq!(forced.history()[0].decision, dragged.history()[0].decision);
}

fn plugin(ids: &[&str], matching: bool) -> AppState {
    let config = Config::default();
    let mut state = if matching {
        AppState::with_oracle(&config, Box::new(AlwaysMatch))
    } else {
        AppState::with_oracle(&config, Box::new(NeverMatch))
    };
    state.resize(30, 80);
    handle_event(
        &mut state,
        &Event::WorkerResponse(WorkerResponse::DeckLoaded {
            cards: cards(ids),
            source: "test".into(),
        }),
    )
    .unwrap();
    state
}

/// Drags from the middle of the front card by `cols` columns over one second.
fn mouse_drag(state: &mut AppState, cols: isize) {
    let (row, col) = (12, 40_usize);
    let to = col.saturating_add_signed(cols);
    handle_event(state, &Event::PointerDown { row, col, t: 0.0 }).unwrap();
    handle_event(state, &Event::PointerDrag { row, col: (col + to) / 2, t: 0.5 }).unwrap();
    handle_event(state, &Event::PointerUp { row, col: to, t: 1.0 }).unwrap();
}

fn settle(state: &mut AppState) {
    for _ in 0..600 {
        let (_, actions) = handle_event(state, &Event::Frame { dt: 1.0 / 60.0 }).unwrap();
        if actions.is_empty() && !state.engine.is_animating() {
            return;
        }
    }
}

fn screen(state: &AppState) -> String {
    let canvas = render_canvas(state, 30, 80);
    (0..30).map(|row| canvas.row_text(row)).collect::<Vec<_>>().join("\n")
}

#[test]
fn mouse_drag_right_likes_front_profile() {
    let mut state = plugin(&["A", "B"], false);

    mouse_drag(&mut state, 25);

    assert_eq!(state.front_id().map(|id| id.to_string()), Some("B".into()));
    assert_eq!(state.engine.callbacks().tally().likes, 1);
}

#[test]
fn short_mouse_drag_keeps_profile() {
    let mut state = plugin(&["A", "B"], false);

    mouse_drag(&mut state, 5);
    settle(&mut state);

    assert_eq!(state.front_id().map(|id| id.to_string()), Some("A".into()));
    assert_eq!(state.engine.callbacks().tally(), Default::default());
}

#[test]
fn swiping_through_the_deck_shows_exhausted_screen() {
    let mut state = plugin(&["A", "B"], false);

    mouse_drag(&mut state, -25);
    handle_event(&mut state, &Event::Swipe(SwipeDirection::Right)).unwrap();
    settle(&mut state);

    assert!(state.is_exhausted());
    assert!(screen(&state).contains("No more profiles"));

    let tally = state.engine.callbacks().tally();
    assert_eq!((tally.passes, tally.likes), (1, 1));
}

#[test]
fn like_with_match_shows_banner_until_dismissed() {
    let mut state = plugin(&["A", "B"], true);

    handle_event(&mut state, &Event::Swipe(SwipeDirection::Right)).unwrap();
    assert!(matches!(state.mode, ScreenMode::Match(_)));
    assert!(screen(&state).contains("It's a Match!"));

    handle_event(&mut state, &Event::Swipe(SwipeDirection::Left)).unwrap();
    assert_eq!(state.front_id().map(|id| id.to_string()), Some("B".into()));

    handle_event(&mut state, &Event::Escape).unwrap();
    assert_eq!(state.mode, ScreenMode::Deck);
    handle_event(&mut state, &Event::Swipe(SwipeDirection::Left)).unwrap();
    assert!(state.front_id().is_none());
}

#[test]
fn undo_brings_back_the_last_decision() {
    let mut state = plugin(&["A", "B"], false);

    handle_event(&mut state, &Event::Swipe(SwipeDirection::Left)).unwrap();
    handle_event(&mut state, &Event::Undo).unwrap();
    settle(&mut state);

    assert_eq!(state.front_id().map(|id| id.to_string()), Some("A".into()));
    assert!(screen(&state).contains("A, 27"));
}
