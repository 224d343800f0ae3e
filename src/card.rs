//! Card types and the rank comparison rule.

use core::fmt;

use crate::error::CompareError;
use crate::game::RoundOutcome;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits, in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the red/black color group of the suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Hearts | Self::Diamonds => Color::Red,
            Self::Clubs | Self::Spades => Color::Black,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Hearts => "\u{2665}",
            Self::Diamonds => "\u{2666}",
            Self::Clubs => "\u{2663}",
            Self::Spades => "\u{2660}",
        };
        f.write_str(symbol)
    }
}

/// Red/black color group of a suit.
///
/// This is the 2-way grouping the default duplicate-card check compares;
/// see [`DuplicateRule`](crate::options::DuplicateRule).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Hearts and diamonds.
    Red,
    /// Clubs and spades.
    Black,
}

/// Lowest legal rank (two).
pub const RANK_MIN: u8 = 2;
/// Highest legal rank (ace, which plays high).
pub const RANK_MAX: u8 = 14;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (2-10 pip, 11 = Jack, 12 = Queen, 13 = King, 14 = Ace).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside
    /// `RANK_MIN..=RANK_MAX` are accepted but fail later comparison with
    /// [`CompareError::InvalidCard`].
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the red/black color group of the card's suit.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// Returns whether the rank is within the legal `2..=14` range.
    #[must_use]
    pub const fn has_legal_rank(self) -> bool {
        self.rank >= RANK_MIN && self.rank <= RANK_MAX
    }

    /// Returns this card's position in the canonical 52-card set, or `None`
    /// for a card with an out-of-range rank.
    #[must_use]
    pub const fn ordinal(self) -> Option<usize> {
        if !self.has_legal_rank() {
            return None;
        }

        let suit = match self.suit {
            Suit::Hearts => 0,
            Suit::Diamonds => 1,
            Suit::Clubs => 2,
            Suit::Spades => 3,
        };

        Some(suit * (RANK_MAX - RANK_MIN + 1) as usize + (self.rank - RANK_MIN) as usize)
    }

    /// Compares this card (player one's) against `other` (player two's) by
    /// rank. Suit never breaks ties; an equal rank is a [`RoundOutcome::Draw`].
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::InvalidCard`] if either rank falls outside
    /// `2..=14`. Cards from a canonical deck never trigger this.
    ///
    /// # Example
    ///
    /// ```
    /// use bataille::{Card, RoundOutcome, Suit};
    ///
    /// let ace = Card::new(Suit::Spades, 14);
    /// let two = Card::new(Suit::Hearts, 2);
    /// assert_eq!(ace.wins_against(two), Ok(RoundOutcome::PlayerOneWins));
    /// ```
    pub const fn wins_against(self, other: Self) -> Result<RoundOutcome, CompareError> {
        if !self.has_legal_rank() {
            return Err(CompareError::InvalidCard { rank: self.rank });
        }

        if !other.has_legal_rank() {
            return Err(CompareError::InvalidCard { rank: other.rank });
        }

        if self.rank > other.rank {
            Ok(RoundOutcome::PlayerOneWins)
        } else if self.rank < other.rank {
            Ok(RoundOutcome::PlayerTwoWins)
        } else {
            Ok(RoundOutcome::Draw)
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            11 => write!(f, "J{}", self.suit),
            12 => write!(f, "Q{}", self.suit),
            13 => write!(f, "K{}", self.suit),
            14 => write!(f, "A{}", self.suit),
            rank => write!(f, "{rank}{}", self.suit),
        }
    }
}
