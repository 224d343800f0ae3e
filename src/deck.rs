//! Ordered decks with front-of-deck play and back-of-deck returns.

use alloc::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, RANK_MAX, RANK_MIN, Suit};
use crate::error::DeckError;

/// An ordered sequence of cards.
///
/// The front is the next card to play; returned cards are appended at the
/// back. The backing storage is private so that a card can never be aliased
/// by two decks at once: cards only move between decks through
/// [`pop_front`](Self::pop_front) and [`push_back`](Self::push_back).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Creates the canonical 52-card deck: the four suits in
    /// [`Suit::ALL`] order, each running from two up to ace.
    ///
    /// # Example
    ///
    /// ```
    /// use bataille::{DECK_SIZE, Deck};
    ///
    /// assert_eq!(Deck::canonical().len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn canonical() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in RANK_MIN..=RANK_MAX {
                cards.push_back(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Shuffles the deck in place with a uniform (Fisher-Yates) permutation.
    ///
    /// The same seeded generator always produces the same order, which the
    /// engine relies on for reproducible sessions.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Cuts the deck at the midpoint into two halves, preserving relative
    /// order within each. The first half keeps the original front.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidSize`] if the deck has an odd number of
    /// cards.
    pub fn cut_in_two(mut self) -> Result<(Self, Self), DeckError> {
        let len = self.cards.len();
        if len % 2 != 0 {
            return Err(DeckError::InvalidSize { len });
        }

        let back = self.cards.split_off(len / 2);
        Ok((self, Self { cards: back }))
    }

    /// Removes and returns the front card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck has no cards.
    pub fn pop_front(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::Empty)
    }

    /// Appends a card at the back.
    pub fn push_back(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Appends several cards at the back, preserving their order.
    pub fn append<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Returns the front card without removing it.
    #[must_use]
    pub fn peek_front(&self) -> Option<Card> {
        self.cards.front().copied()
    }

    /// Returns the card at the back, if any.
    #[must_use]
    pub fn peek_back(&self) -> Option<Card> {
        self.cards.back().copied()
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck holds no cards.
    ///
    /// An empty deck is a legal mid-game state when the opponent holds all
    /// 52 cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates the cards front to back.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }
}
