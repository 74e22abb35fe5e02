//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin: the swipe
//! engine (which owns the card stack and every animation), the theme set,
//! the screen mode and the pane geometry. View models are computed on demand
//! from state snapshots.
//!
//! # Example
//!
//! ```rust
//! use swipedeck::app::AppState;
//! use swipedeck::Config;
//!
//! let state = AppState::new(&Config::default());
//! let viewmodel = state.compute_viewmodel(30, 80);
//! assert!(viewmodel.empty_state.is_some()); // still loading
//! ```

use super::matching::{oracle_for_rate, MatchOracle};
use super::modes::{MatchInfo, ScreenMode};
use super::reactions::{DeckReactions, Reaction};
use crate::domain::{Card, CardId, Decision};
use crate::engine::{CardLayout, SwipeEngine};
use crate::ui::geometry::DeckGeometry;
use crate::ui::theme::{Theme, ThemeSet};
use crate::ui::viewmodel::{
    ActionBarInfo, BadgeView, CardContent, CardView, EmptyState, FooterInfo, HeaderInfo, MatchBanner,
    UIViewModel,
};
use crate::Config;

/// Pane size assumed until the first render reports the real one.
const INITIAL_ROWS: usize = 30;
const INITIAL_COLS: usize = 80;

pub struct AppState {
    pub engine: SwipeEngine<DeckReactions>,
    pub themes: ThemeSet,
    pub mode: ScreenMode,

    /// Message shown in the footer until the next user action.
    pub status: Option<String>,

    /// Deck file from the configuration; `None` uses the built-in deck.
    pub deck_file: Option<String>,

    /// Where the current deck came from, as reported by the worker.
    pub deck_source: Option<String>,

    geometry: DeckGeometry,
    frame_scheduled: bool,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("mode", &self.mode)
            .field("theme", &self.themes.variant())
            .field("remaining", &self.engine.stack().len())
            .field("status", &self.status)
            .field("geometry", &self.geometry)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Creates the state for `config`, with a match oracle built from
    /// `config.match_rate`.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_oracle(config, oracle_for_rate(config.match_rate))
    }

    #[must_use]
    pub fn with_oracle(config: &Config, oracle: Box<dyn MatchOracle>) -> Self {
        let geometry = DeckGeometry::new(INITIAL_ROWS, INITIAL_COLS);
        Self {
            engine: SwipeEngine::new(config.engine_config(), geometry.viewport(), DeckReactions::new(oracle)),
            themes: ThemeSet::new(config.theme),
            mode: ScreenMode::Loading,
            status: None,
            deck_file: config.deck_file.clone(),
            deck_source: None,
            geometry,
            frame_scheduled: false,
        }
    }

    #[must_use]
    pub const fn theme(&self) -> &Theme {
        self.themes.active()
    }

    #[must_use]
    pub const fn geometry(&self) -> &DeckGeometry {
        &self.geometry
    }

    /// Adopts a new pane size. Returns `true` if it changed.
    pub fn resize(&mut self, rows: usize, cols: usize) -> bool {
        let geometry = DeckGeometry::new(rows, cols);
        if geometry == self.geometry {
            return false;
        }
        tracing::debug!(rows, cols, "pane resized");
        self.geometry = geometry;
        self.engine.set_viewport(geometry.viewport());
        true
    }

    /// Replaces the deck and returns to the stack view.
    pub fn load_deck(&mut self, cards: Vec<Card>, source: &str) {
        tracing::info!(count = cards.len(), source = %source, "deck loaded");
        self.engine.load(cards);
        self.engine.callbacks_mut().reset_tally();
        self.engine.callbacks_mut().drain();
        self.deck_source = Some(source.to_string());
        self.mode = ScreenMode::Deck;
    }

    /// Whether every card has been decided and has left the screen.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        !matches!(self.mode, ScreenMode::Loading) && self.engine.stack().is_drained()
    }

    /// Applies reactions the engine's callbacks queued since the last call.
    pub fn absorb_reactions(&mut self) {
        for reaction in self.engine.callbacks_mut().drain() {
            match reaction {
                Reaction::Matched { card, name, decision } => {
                    self.mode = ScreenMode::Match(MatchInfo { card, name, decision });
                }
                Reaction::Exhausted => {
                    let tally = self.engine.callbacks().tally();
                    tracing::info!(
                        likes = tally.likes,
                        super_likes = tally.super_likes,
                        passes = tally.passes,
                        matches = tally.matches,
                        "no more profiles"
                    );
                }
            }
        }
    }

    /// Marks a frame as requested if animations are running and none is
    /// pending yet. Returns `true` when the caller should schedule one.
    pub fn claim_frame(&mut self) -> bool {
        if self.frame_scheduled || !self.engine.is_animating() {
            return false;
        }
        self.frame_scheduled = true;
        true
    }

    /// Called when a scheduled frame arrives.
    pub fn frame_delivered(&mut self) {
        self.frame_scheduled = false;
    }

    /// Id of the card on top of the pending stack.
    #[must_use]
    pub fn front_id(&self) -> Option<CardId> {
        self.engine.stack().front().map(|card| card.id.clone())
    }

    /// Whether cell `(row, col)` lies on the front card as currently drawn.
    #[must_use]
    pub fn hits_front_card(&self, row: isize, col: isize) -> bool {
        self.engine
            .layout()
            .iter()
            .find(|layout| layout.index == Some(0))
            .is_some_and(|layout| self.geometry.card_rect(&layout.transform).contains(row, col))
    }

    #[must_use]
    pub fn action_bar(&self) -> ActionBarInfo {
        let highlight = self
            .engine
            .overlay()
            .strongest()
            .map(|(decision, _)| decision);
        ActionBarInfo {
            highlight,
            can_undo: self.mode.accepts_swipes() && !self.engine.history().is_empty(),
            enabled: self.mode.accepts_swipes() && !self.engine.stack().is_empty(),
        }
    }

    /// Computes a complete view model for a `rows × cols` pane.
    ///
    /// Uses the supplied size rather than the stored geometry so that a
    /// render never draws with stale dimensions.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let geometry = DeckGeometry::new(rows, cols);

        let cards = if matches!(self.mode, ScreenMode::Loading) {
            Vec::new()
        } else {
            self.engine
                .layout()
                .iter()
                .filter_map(|layout| self.compute_card(layout, &geometry))
                .collect()
        };

        UIViewModel {
            header: self.compute_header(),
            footer: self.compute_footer(),
            cards,
            action_bar: self.action_bar(),
            empty_state: self.compute_empty_state(),
            banner: self.compute_banner(),
        }
    }

    fn compute_card(&self, layout: &CardLayout, geometry: &DeckGeometry) -> Option<CardView> {
        let card = self.engine.stack().get(&layout.id)?;
        let is_front = layout.index == Some(0);

        let badge = if is_front {
            self.engine
                .overlay()
                .strongest()
                .map(|(decision, indicator)| BadgeView {
                    decision,
                    opacity: indicator.opacity,
                    scale: indicator.scale,
                })
        } else {
            None
        };

        Some(CardView {
            rect: geometry.card_rect(&layout.transform),
            rotation: layout.transform.rotation,
            opacity: layout.transform.opacity,
            is_front,
            content: Self::card_content(card),
            badge,
        })
    }

    fn card_content(card: &Card) -> CardContent {
        let profile = &card.profile;
        let subtitle = [profile.profession.as_str(), profile.distance.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" · ");

        CardContent {
            headline: card.headline(),
            verified: profile.verified,
            subtitle,
            location: profile.location.clone(),
            bio: profile.bio.clone(),
            interests: profile.interests.clone(),
            photo_caption: card.current_photo().map(str::to_string),
            photo_index: card.photo_index,
            photo_count: profile.photos.len(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let variant = self.themes.variant();
        let detail = match self.mode {
            ScreenMode::Loading => format!("loading · {variant}"),
            _ => format!("{} left · {variant}", self.engine.stack().len()),
        };
        HeaderInfo {
            title: "SwipeDeck".to_string(),
            detail,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.mode {
            ScreenMode::Loading => "t: theme  q: quit",
            ScreenMode::Match(_) => "esc/enter: keep swiping  q: quit",
            ScreenMode::Deck if self.engine.stack().is_drained() => "r: reload  u: undo  t: theme  q: quit",
            ScreenMode::Deck => {
                "drag or h/l/k: nope/like/super  u: undo  space: photo  t: theme  r: reload  q: quit"
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
            status: self.status.clone(),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        match self.mode {
            ScreenMode::Loading => Some(EmptyState {
                message: "Loading profiles…".to_string(),
                subtitle: self
                    .deck_file
                    .as_ref()
                    .map_or_else(|| "built-in deck".to_string(), Clone::clone),
            }),
            _ if !self.engine.stack().is_drained() => None,
            _ if self.engine.history().is_empty() => Some(EmptyState {
                message: "No profiles to show".to_string(),
                subtitle: "Press r to reload the deck".to_string(),
            }),
            _ => Some(EmptyState {
                message: "No more profiles".to_string(),
                subtitle: "You've seen everyone nearby. Press r to reload or u to undo".to_string(),
            }),
        }
    }

    fn compute_banner(&self) -> Option<MatchBanner> {
        let ScreenMode::Match(info) = &self.mode else {
            return None;
        };
        let message = match info.decision {
            Decision::SuperLike => format!("You super liked {} and they liked you back", info.name),
            _ => format!("You and {} liked each other", info.name),
        };
        Some(MatchBanner {
            title: "It's a Match!".to_string(),
            message,
            hint: "esc: keep swiping".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::matching::{AlwaysMatch, NeverMatch};
    use crate::domain::{Profile, SwipeDirection};

    fn cards(names: &[&str]) -> Vec<Card> {
        names
            .iter()
            .map(|name| {
                Card::new(
                    name.to_lowercase(),
                    Profile {
                        name: (*name).to_string(),
                        age: 27,
                        profession: "Designer".into(),
                        distance: "2 km away".into(),
                        ..Default::default()
                    },
                )
            })
            .collect()
    }

    fn loaded(oracle: Box<dyn MatchOracle>) -> AppState {
        let mut state = AppState::with_oracle(&Config::default(), oracle);
        state.load_deck(cards(&["Emma", "Ava", "Mia"]), "built-in");
        state
    }

    fn settle(state: &mut AppState) {
        for _ in 0..600 {
            if !state.engine.tick(1.0 / 60.0) {
                break;
            }
        }
        state.absorb_reactions();
    }

    #[test]
    fn loading_shows_placeholder() {
        let state = AppState::with_oracle(&Config::default(), Box::new(NeverMatch));
        let vm = state.compute_viewmodel(30, 80);

        assert!(vm.cards.is_empty());
        assert_eq!(vm.empty_state.unwrap().message, "Loading profiles…");
        assert!(vm.header.detail.starts_with("loading"));
    }

    #[test]
    fn viewmodel_lists_cards_back_to_front() {
        let state = loaded(Box::new(NeverMatch));
        let vm = state.compute_viewmodel(30, 80);

        assert_eq!(vm.cards.len(), 3);
        assert!(vm.cards.last().unwrap().is_front);
        assert_eq!(vm.cards.last().unwrap().content.headline, "Emma, 27");
        assert_eq!(vm.cards.last().unwrap().content.subtitle, "Designer · 2 km away");
        assert_eq!(vm.header.detail, "3 left · light");
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn match_opens_banner() {
        let mut state = loaded(Box::new(AlwaysMatch));
        state.engine.force_swipe(SwipeDirection::Right);
        state.absorb_reactions();

        let ScreenMode::Match(info) = &state.mode else {
            panic!("expected match mode");
        };
        assert_eq!(info.name, "Emma");
        let banner = state.compute_viewmodel(30, 80).banner.unwrap();
        assert_eq!(banner.message, "You and Emma liked each other");
    }

    #[test]
    fn drained_deck_shows_exhausted_state() {
        let mut state = loaded(Box::new(NeverMatch));
        for _ in 0..3 {
            state.engine.force_swipe(SwipeDirection::Left);
        }
        settle(&mut state);

        assert!(state.is_exhausted());
        let vm = state.compute_viewmodel(30, 80);
        assert_eq!(vm.empty_state.unwrap().message, "No more profiles");
        assert!(vm.action_bar.can_undo);
        assert!(!vm.action_bar.enabled);
    }

    #[test]
    fn front_card_hit_test_follows_geometry() {
        let state = loaded(Box::new(NeverMatch));
        let rect = state.geometry().base_card();

        assert!(state.hits_front_card(rect.top + 1, rect.left + 1));
        assert!(!state.hits_front_card(0, 0));
    }

    #[test]
    fn frames_are_claimed_once_while_animating() {
        let mut state = loaded(Box::new(NeverMatch));
        assert!(!state.claim_frame());

        state.engine.force_swipe(SwipeDirection::Left);
        assert!(state.claim_frame());
        assert!(!state.claim_frame());

        state.frame_delivered();
        assert!(state.claim_frame());
    }

    #[test]
    fn resize_updates_viewport() {
        let mut state = loaded(Box::new(NeverMatch));
        assert!(state.resize(40, 100));
        assert!(!state.resize(40, 100));
        assert_eq!(state.engine.viewport(), DeckGeometry::new(40, 100).viewport());
    }
}
