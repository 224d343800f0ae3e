//! The two round transitions: reveal and acknowledge.

use crate::card::Card;
use crate::error::{AcknowledgeError, DeckError, RevealError};
use crate::options::DuplicateRule;

use super::{EngineState, Game, RoundOutcome};

impl From<DeckError> for AcknowledgeError {
    fn from(_: DeckError) -> Self {
        Self::EmptyDeck
    }
}

impl Game {
    /// Reveals both players' top cards and computes the round outcome,
    /// driving `Idle` to `Revealed`. The cards stay on their decks until
    /// [`acknowledge`](Self::acknowledge) resolves the round.
    ///
    /// Returns the revealed pair as (player one's card, player two's card).
    ///
    /// # Errors
    ///
    /// Returns [`RevealError::InvalidState`] if a round is already
    /// revealed, [`RevealError::EmptyDeck`] if either deck has no card to
    /// reveal, or [`RevealError::InvalidCard`] if a revealed card carries
    /// an out-of-range rank. On error nothing is mutated.
    pub fn reveal(&self) -> Result<(Card, Card), RevealError> {
        let mut state = self.state.lock();
        if *state != EngineState::Idle {
            return Err(RevealError::InvalidState);
        }

        let card_one = self
            .deck_one
            .lock()
            .peek_front()
            .ok_or(RevealError::EmptyDeck)?;
        let card_two = self
            .deck_two
            .lock()
            .peek_front()
            .ok_or(RevealError::EmptyDeck)?;

        let outcome = card_one.wins_against(card_two)?;

        *self.current_win.lock() = outcome;
        *state = EngineState::Revealed;

        Ok((card_one, card_two))
    }

    /// Resolves the revealed round and redistributes the two face-up
    /// cards, driving `Revealed` back to `Idle`.
    ///
    /// The winner receives both cards at the back of their deck, own card
    /// first, captured card second. On a draw each card returns to the
    /// back of its own deck.
    ///
    /// # Errors
    ///
    /// Returns [`AcknowledgeError::InvalidState`] if no round is revealed,
    /// [`AcknowledgeError::DuplicateCard`] if a drawn round exposed two
    /// cards sharing suit-group identity, or
    /// [`AcknowledgeError::Integrity`] if the decks fail the 52-card check
    /// after redistribution. A duplicate is detected before any card
    /// moves, so a failed resolution leaves both decks untouched.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn acknowledge(&self) -> Result<(), AcknowledgeError> {
        let mut state = self.state.lock();
        if *state != EngineState::Revealed {
            return Err(AcknowledgeError::InvalidState);
        }

        let mut deck_one = self.deck_one.lock();
        let mut deck_two = self.deck_two.lock();

        let outcome = *self.current_win.lock();
        match outcome {
            RoundOutcome::PlayerOneWins => {
                let own = deck_one.pop_front()?;
                let captured = deck_two.pop_front()?;
                deck_one.append([own, captured]);
            }
            RoundOutcome::PlayerTwoWins => {
                let own = deck_two.pop_front()?;
                let captured = deck_one.pop_front()?;
                deck_two.append([own, captured]);
            }
            RoundOutcome::Draw => {
                let front_one = deck_one.peek_front().ok_or(AcknowledgeError::EmptyDeck)?;
                let front_two = deck_two.peek_front().ok_or(AcknowledgeError::EmptyDeck)?;

                if Self::same_group(front_one, front_two, self.options.duplicate_rule) {
                    return Err(AcknowledgeError::DuplicateCard {
                        rank: front_one.rank,
                    });
                }

                let card_one = deck_one.pop_front()?;
                deck_one.push_back(card_one);
                let card_two = deck_two.pop_front()?;
                deck_two.push_back(card_two);
            }
            // Defensive: Revealed always carries a computed outcome.
            RoundOutcome::Unknown => return Err(AcknowledgeError::InvalidState),
        }

        Self::verify_decks(&deck_one, &deck_two)?;

        *self.current_win.lock() = RoundOutcome::Unknown;
        *state = EngineState::Idle;

        Ok(())
    }

    /// Returns whether the two cards match under the configured
    /// suit-group rule.
    fn same_group(a: Card, b: Card, rule: DuplicateRule) -> bool {
        match rule {
            DuplicateRule::ColorGroup => a.color() == b.color(),
            DuplicateRule::Suit => a.suit == b.suit,
        }
    }
}
