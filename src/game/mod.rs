//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE};
use crate::deck::Deck;
use crate::error::{IntegrityError, RestartError};
use crate::options::GameOptions;
use crate::sync::Mutex;

mod round;
pub mod state;

pub use state::{EngineState, RoundOutcome};

/// A war game engine driving one round at a time.
///
/// The engine owns the two decks exclusively and exposes the round flow as
/// two externally-triggered transitions, [`reveal`](Self::reveal) and
/// [`acknowledge`](Self::acknowledge), plus read-only accessors for a
/// display layer. It expects a single cooperative driver: one transition at
/// a time, no internal concurrency.
pub struct Game {
    /// Player one's deck.
    pub deck_one: Mutex<Deck>,
    /// Player two's deck.
    pub deck_two: Mutex<Deck>,
    /// Game options.
    pub options: GameOptions,
    /// Current engine state.
    pub state: Mutex<EngineState>,
    /// Outcome of the currently revealed round.
    current_win: Mutex<RoundOutcome>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed: a canonical deck is
    /// shuffled and cut at the midpoint into two 26-card decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bataille::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.deck_counts(), (26, 26));
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (deck_one, deck_two) = Self::fresh_decks(&mut rng);

        Self {
            deck_one: Mutex::new(deck_one),
            deck_two: Mutex::new(deck_two),
            options,
            state: Mutex::new(EngineState::Idle),
            current_win: Mutex::new(RoundOutcome::Unknown),
            rng: Mutex::new(rng),
        }
    }

    /// Builds, shuffles, and cuts a fresh canonical deck.
    fn fresh_decks(rng: &mut ChaCha8Rng) -> (Deck, Deck) {
        let mut deck = Deck::canonical();
        deck.shuffle(rng);
        deck.cut_in_two()
            .expect("canonical deck has an even card count")
    }

    /// Restarts the session in place: fresh canonical deck, new shuffle,
    /// new cut. The round outcome is cleared.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is currently revealed.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn restart(&self) -> Result<(), RestartError> {
        let state = self.state.lock();
        if *state != EngineState::Idle {
            return Err(RestartError::InvalidState);
        }

        let mut rng = self.rng.lock();
        let (deck_one, deck_two) = Self::fresh_decks(&mut rng);

        *self.deck_one.lock() = deck_one;
        *self.deck_two.lock() = deck_two;
        *self.current_win.lock() = RoundOutcome::Unknown;

        Ok(())
    }

    /// Returns the current engine state.
    pub fn state(&self) -> EngineState {
        *self.state.lock()
    }

    /// Returns whether the round's top cards are currently face-up.
    pub fn cards_revealed(&self) -> bool {
        self.state() == EngineState::Revealed
    }

    /// Returns the outcome of the revealed round, or
    /// [`RoundOutcome::Unknown`] while idle.
    pub fn outcome(&self) -> RoundOutcome {
        *self.current_win.lock()
    }

    /// Returns the remaining card counts as (player one, player two).
    pub fn deck_counts(&self) -> (usize, usize) {
        (self.deck_one.lock().len(), self.deck_two.lock().len())
    }

    /// Returns the face-up pair as (player one's card, player two's card),
    /// or `None` while no round is revealed.
    pub fn revealed_cards(&self) -> Option<(Card, Card)> {
        if !self.cards_revealed() {
            return None;
        }

        let card_one = self.deck_one.lock().peek_front()?;
        let card_two = self.deck_two.lock().peek_front()?;
        Some((card_one, card_two))
    }

    /// Returns the win badges for (player one, player two): `"+"` next to
    /// the winner of the revealed round, empty strings otherwise.
    pub fn win_badges(&self) -> (&'static str, &'static str) {
        self.outcome().badges()
    }

    /// Checks the two decks against the canonical 52-card set: the counts
    /// must sum to 52 and no card may appear twice.
    ///
    /// The engine runs this after every resolution; a driver may also call
    /// it once per display tick.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn check_integrity(&self) -> Result<(), IntegrityError> {
        let deck_one = self.deck_one.lock();
        let deck_two = self.deck_two.lock();
        Self::verify_decks(&deck_one, &deck_two)
    }

    /// Integrity check over already-locked decks.
    pub(crate) fn verify_decks(deck_one: &Deck, deck_two: &Deck) -> Result<(), IntegrityError> {
        if deck_one.len() + deck_two.len() != DECK_SIZE {
            return Err(IntegrityError::CardCount {
                deck_one: deck_one.len(),
                deck_two: deck_two.len(),
            });
        }

        // One bit per canonical card.
        let mut seen = 0u64;
        for card in deck_one.cards().chain(deck_two.cards()) {
            let Some(slot) = card.ordinal() else {
                return Err(IntegrityError::ForeignCard { card });
            };

            let bit = 1u64 << slot;
            if seen & bit != 0 {
                return Err(IntegrityError::RepeatedCard { card });
            }
            seen |= bit;
        }

        Ok(())
    }
}
