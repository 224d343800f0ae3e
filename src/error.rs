//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when manipulating a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck cannot be cut into two equal halves.
    #[error("deck of {len} cards cannot be cut in two")]
    InvalidSize {
        /// Number of cards in the offending deck.
        len: usize,
    },
    /// The deck has no cards to pop.
    #[error("deck is empty")]
    Empty,
}

/// Errors that can occur when comparing two cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompareError {
    /// A card carries a rank outside the legal `2..=14` range.
    #[error("card rank {rank} is outside the legal range")]
    InvalidCard {
        /// The out-of-range rank.
        rank: u8,
    },
}

/// Errors that can occur when revealing the round's top cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RevealError {
    /// Invalid game state for revealing.
    #[error("invalid game state for revealing")]
    InvalidState,
    /// A deck has no card to reveal.
    #[error("no card left to reveal")]
    EmptyDeck,
    /// A revealed card carries an out-of-range rank.
    #[error("card rank {rank} is outside the legal range")]
    InvalidCard {
        /// The out-of-range rank.
        rank: u8,
    },
}

impl From<CompareError> for RevealError {
    fn from(err: CompareError) -> Self {
        match err {
            CompareError::InvalidCard { rank } => Self::InvalidCard { rank },
        }
    }
}

/// Errors that can occur when the decks are checked against the canonical
/// 52-card set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntegrityError {
    /// The decks together no longer hold 52 cards.
    #[error("game should contain 52 cards (deck one: {deck_one}, deck two: {deck_two})")]
    CardCount {
        /// Cards held by player one.
        deck_one: usize,
        /// Cards held by player two.
        deck_two: usize,
    },
    /// A card outside the canonical set was found.
    #[error("card {card} is not part of the 52-card set")]
    ForeignCard {
        /// The offending card.
        card: Card,
    },
    /// The same card was found more than once across the decks.
    #[error("card {card} is present more than once")]
    RepeatedCard {
        /// The offending card.
        card: Card,
    },
}

/// Errors that can occur when resolving a revealed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AcknowledgeError {
    /// Invalid game state for resolving the round.
    #[error("invalid game state for resolving the round")]
    InvalidState,
    /// A deck emptied under the engine, which the invariants forbid.
    #[error("no card left to resolve")]
    EmptyDeck,
    /// A drawn round revealed two cards sharing suit-group identity, which
    /// cannot happen with a well-formed deck.
    #[error("duplicate card of rank {rank} revealed on both sides")]
    DuplicateCard {
        /// The shared rank of the two revealed cards.
        rank: u8,
    },
    /// The post-resolution integrity check failed.
    #[error(transparent)]
    Integrity(#[from] IntegrityError),
}

/// Errors that can occur when restarting a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RestartError {
    /// Invalid game state for restarting.
    #[error("invalid game state for restarting")]
    InvalidState,
}
