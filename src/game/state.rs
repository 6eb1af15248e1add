//! The game state machine.
//!
//! `Game` owns the deck and every counter. `pick` is the only input;
//! `advance` moves the clock and applies any timers that came due.
//!
//! ## Transitions
//!
//! | Phase | Pick | Result |
//! |---|---|---|
//! | `Idle` | any unmatched tile | reveal, `AwaitingPartner` |
//! | `AwaitingPartner(s)` | `s` again | no-op |
//! | `AwaitingPartner(s)` | partner of `s` | reveal, record pair, `Idle` |
//! | `AwaitingPartner(s)` | anything else | reveal, count mismatch, `ResolvingMismatch` |
//! | `ResolvingMismatch` | any | no-op |
//! | `Won` | any | no-op |
//!
//! Picking a tile from a found pair is a no-op in every phase.

use std::time::Duration;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use super::event::GameEvent;
use super::phase::{IgnoreReason, Phase, PickOutcome};
use crate::core::{GameConfig, GameRng, TileId, TimingConfig};
use crate::deck::{self, Deck};
use crate::error::Result;
use crate::schedule::{Scheduler, TimerEvent, TimerQueue, TimerToken};
use crate::tiles::{Content, Tile};

/// One puzzle session.
///
/// Discard the game to start another; there is no reset. Dropping a game
/// cancels its pending timers.
///
/// ## Example
///
/// ```
/// use memory_match::core::{Difficulty, GameConfig};
/// use memory_match::game::{Game, Phase};
/// use memory_match::tiles::Vocabulary;
///
/// let config = GameConfig::new(Difficulty::Easy, Vocabulary::Letters).with_seed(1);
/// let mut game = Game::new(&config).unwrap();
///
/// let first = game.deck().tiles()[0].id();
/// let partner = game.deck().tiles()[0].partner();
/// game.pick(first);
/// game.pick(partner);
///
/// assert_eq!(game.matched_pairs(), &[(first, partner)]);
/// assert_eq!(game.phase(), Phase::Idle);
/// ```
pub struct Game<S: Scheduler = TimerQueue> {
    deck: Deck,
    timing: TimingConfig,
    phase: Phase,
    matched_pairs: Vec<(TileId, TileId)>,
    matched: FxHashSet<TileId>,
    mismatch_count: u32,
    pick_count: u32,
    events: Vec<GameEvent>,
    timers: SmallVec<[(TimerToken, TimerEvent); 2]>,
    scheduler: S,
}

impl Game<TimerQueue> {
    /// Build a game from configuration with its own timer queue.
    pub fn new(config: &GameConfig) -> Result<Self> {
        Self::with_scheduler(config, TimerQueue::new())
    }
}

impl<S: Scheduler> Game<S> {
    /// Build a game from configuration, driving timers through `scheduler`.
    ///
    /// Fails with `InsufficientVocabulary` if the vocabulary cannot supply
    /// enough distinct pairs for the difficulty.
    pub fn with_scheduler(config: &GameConfig, scheduler: S) -> Result<Self> {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let pool = config.vocabulary.candidates(&mut rng.for_context("palette"));
        let deck = deck::generate(&pool, config.difficulty.tile_count(), &mut rng.for_context("deck"))?;

        info!(
            difficulty = %config.difficulty,
            vocabulary = %config.vocabulary,
            seed = rng.seed(),
            "new game"
        );
        Ok(Self::from_deck(deck, config.timing, scheduler))
    }

    /// Build a game from an arbitrary content pool.
    pub fn with_pool(
        pool: &[Content],
        tile_count: usize,
        timing: TimingConfig,
        rng: &mut GameRng,
        scheduler: S,
    ) -> Result<Self> {
        let deck = deck::generate(pool, tile_count, rng)?;
        Ok(Self::from_deck(deck, timing, scheduler))
    }

    /// Start a game on an already generated deck.
    ///
    /// Tiles are forced face-down.
    pub fn from_deck(mut deck: Deck, timing: TimingConfig, scheduler: S) -> Self {
        for index in 0..deck.len() {
            deck.set_visible(TileId::new(index as u32), false);
        }

        Self {
            deck,
            timing,
            phase: Phase::Idle,
            matched_pairs: Vec::new(),
            matched: FxHashSet::default(),
            mismatch_count: 0,
            pick_count: 0,
            events: Vec::new(),
            timers: SmallVec::new(),
            scheduler,
        }
    }

    // === Queries ===

    /// The board, in stable order.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Look up a tile.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.deck.get(id)
    }

    /// Where the state machine is.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Found pairs, in the order they were found. Each entry is
    /// `(picked first, picked second)`.
    #[must_use]
    pub fn matched_pairs(&self) -> &[(TileId, TileId)] {
        &self.matched_pairs
    }

    /// Is `id` part of a found pair?
    #[must_use]
    pub fn is_matched(&self, id: TileId) -> bool {
        self.matched.contains(&id)
    }

    /// Wrong second picks so far.
    #[must_use]
    pub fn mismatch_count(&self) -> u32 {
        self.mismatch_count
    }

    /// Picks that changed state.
    #[must_use]
    pub fn pick_count(&self) -> u32 {
        self.pick_count
    }

    /// Pairs not yet found.
    #[must_use]
    pub fn pairs_remaining(&self) -> usize {
        self.deck.pair_count() - self.matched_pairs.len()
    }

    /// All pairs found. True from the final match on, before the win delay
    /// has elapsed.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.matched_pairs.len() * 2 == self.deck.len()
    }

    /// Has the win delay elapsed?
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.phase == Phase::Won
    }

    /// Delays this game was built with.
    #[must_use]
    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    /// The timer provider, for reading the clock.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Timers this game is waiting on.
    #[must_use]
    pub fn pending_timers(&self) -> impl ExactSizeIterator<Item = TimerToken> + '_ {
        self.timers.iter().map(|&(token, _)| token)
    }

    /// Take the events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Input ===

    /// Pick a tile.
    ///
    /// ## Panics
    ///
    /// If `id` is not in this game's deck. A renderer must only offer tiles
    /// it read from [`Game::deck`].
    pub fn pick(&mut self, id: TileId) -> PickOutcome {
        assert!(
            self.deck.contains(id),
            "pick({id}) with a tile outside the {}-tile deck",
            self.deck.len()
        );

        if self.matched.contains(&id) {
            return self.ignore(id, IgnoreReason::AlreadyMatched);
        }

        let phase = self.phase;
        let outcome = match phase {
            Phase::Idle => {
                self.reveal(id);
                self.set_phase(Phase::AwaitingPartner(id));
                PickOutcome::Revealed
            }
            Phase::AwaitingPartner(selected) if selected == id => {
                return self.ignore(id, IgnoreReason::AlreadySelected);
            }
            Phase::AwaitingPartner(selected) if self.deck.tiles()[id.index()].partner() == selected => {
                self.reveal(id);
                self.record_match(selected, id);
                PickOutcome::Matched
            }
            Phase::AwaitingPartner(selected) => {
                self.reveal(id);
                self.record_mismatch(selected, id);
                PickOutcome::Mismatched
            }
            Phase::ResolvingMismatch { .. } => return self.ignore(id, IgnoreReason::Locked),
            Phase::Won => return self.ignore(id, IgnoreReason::Finished),
        };

        self.pick_count += 1;
        outcome
    }

    // === Time ===

    /// Move the clock forward by `elapsed`, firing every timer of this game
    /// that comes due on the way. Returns the number of timers applied.
    ///
    /// Other timers in a shared scheduler are left for their owner.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let deadline = self.scheduler.now().saturating_add(elapsed);
        let mut fired = 0;

        while let Some((due, slot)) = self.next_due(deadline) {
            let (token, event) = self.timers.remove(slot);
            self.scheduler.cancel(token);
            self.scheduler.advance_to(due);
            if self.fire(token, event) {
                fired += 1;
            }
        }
        self.scheduler.advance_to(deadline);

        fired
    }

    /// Run the clock until no timers remain. Returns the time that passed.
    pub fn settle(&mut self) -> Duration {
        let start = self.scheduler.now();
        while !self.timers.is_empty() {
            let before = self.timers.clone();
            self.advance(self.timing.mismatch_window().saturating_add(self.timing.win_delay));
            if self.timers == before {
                break;
            }
        }
        self.scheduler.now() - start
    }

    // === Internals ===

    fn ignore(&self, id: TileId, reason: IgnoreReason) -> PickOutcome {
        trace!(tile = %id, ?reason, phase = %self.phase, "pick ignored");
        PickOutcome::Ignored(reason)
    }

    fn reveal(&mut self, id: TileId) {
        self.deck.set_visible(id, true);
        self.events.push(GameEvent::Revealed(id));
    }

    fn hide(&mut self, id: TileId) {
        self.deck.set_visible(id, false);
        self.events.push(GameEvent::Hidden(id));
    }

    fn set_phase(&mut self, to: Phase) {
        let from = std::mem::replace(&mut self.phase, to);
        debug!(%from, %to, "phase change");
        self.events.push(GameEvent::PhaseChanged { from, to });
    }

    fn schedule(&mut self, delay: Duration, event: TimerEvent) {
        let token = self.scheduler.schedule(delay, event);
        self.timers.push((token, event));
    }

    /// Earliest of this game's timers due by `deadline`, as `(due, slot)`.
    /// Timers cancelled behind the game's back are forgotten.
    fn next_due(&mut self, deadline: Duration) -> Option<(Duration, usize)> {
        let scheduler = &self.scheduler;
        self.timers.retain(|(token, _)| scheduler.due_at(*token).is_some());

        self.timers
            .iter()
            .enumerate()
            .filter_map(|(slot, &(token, _))| {
                let due = self.scheduler.due_at(token)?;
                (due <= deadline).then_some((due, token, slot))
            })
            .min()
            .map(|(due, _, slot)| (due, slot))
    }

    fn record_match(&mut self, first: TileId, second: TileId) {
        self.matched_pairs.push((first, second));
        self.matched.insert(first);
        self.matched.insert(second);
        self.events.push(GameEvent::Matched(first, second));
        debug!(%first, %second, remaining = self.pairs_remaining(), "pair found");

        if self.is_solved() {
            self.events.push(GameEvent::Solved);
            self.schedule(self.timing.win_delay, TimerEvent::DeclareWin);
        }
        self.set_phase(Phase::Idle);
    }

    fn record_mismatch(&mut self, first: TileId, second: TileId) {
        self.mismatch_count += 1;
        self.events.push(GameEvent::Mismatched(first, second));
        debug!(%first, %second, mismatches = self.mismatch_count, "mismatch");

        self.schedule(
            self.timing.mismatch_hide_first,
            TimerEvent::HideSecondPick { first, second },
        );
        self.set_phase(Phase::ResolvingMismatch { first, second });
    }

    /// Apply a due timer. Returns false for timers that no longer fit the
    /// current phase.
    fn fire(&mut self, token: TimerToken, event: TimerEvent) -> bool {
        match event {
            TimerEvent::HideSecondPick { first, second } => {
                if self.phase != (Phase::ResolvingMismatch { first, second }) {
                    trace!(%token, ?event, phase = %self.phase, "stale timer");
                    return false;
                }
                self.hide(second);
                debug!(%token, tile = %second, "mismatch: second pick hidden");
                self.schedule(
                    self.timing.mismatch_hide_second,
                    TimerEvent::HideFirstPick { first, second },
                );
            }
            TimerEvent::HideFirstPick { first, second } => {
                if self.phase != (Phase::ResolvingMismatch { first, second }) {
                    trace!(%token, ?event, phase = %self.phase, "stale timer");
                    return false;
                }
                self.hide(first);
                debug!(%token, tile = %first, "mismatch: first pick hidden");
                self.set_phase(Phase::Idle);
            }
            TimerEvent::DeclareWin => {
                if !self.is_solved() || self.phase == Phase::Won {
                    trace!(%token, phase = %self.phase, "stale timer");
                    return false;
                }
                self.set_phase(Phase::Won);
                info!(
                    mismatches = self.mismatch_count,
                    picks = self.pick_count,
                    "puzzle won"
                );
            }
        }
        true
    }
}

impl<S: Scheduler> Drop for Game<S> {
    fn drop(&mut self) {
        for (token, _) in self.timers.drain(..) {
            self.scheduler.cancel(token);
        }
    }
}

impl<S: Scheduler> std::fmt::Debug for Game<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("tiles", &self.deck.len())
            .field("phase", &self.phase)
            .field("matched_pairs", &self.matched_pairs.len())
            .field("mismatch_count", &self.mismatch_count)
            .field("pending_timers", &self.timers.len())
            .finish()
    }
}
