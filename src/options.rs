//! Game configuration options.

/// Equality class used by the duplicate-card check on a drawn round.
///
/// The check exists to catch a malformed deck, not to resolve ties: two
/// physically distinct cards can never match on both rank and suit-group
/// when the deck was built from the canonical 52-card set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DuplicateRule {
    /// Compare the red/black color group (two classes of 26 cards).
    ///
    /// With a canonical deck each color group holds every rank exactly
    /// twice, once per suit, so an equal-rank pair within one group is
    /// only reachable through corrupted construction.
    #[default]
    ColorGroup,
    /// Compare the full suit (four classes of 13 cards).
    Suit,
}

/// Configuration options for a war game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bataille::{DuplicateRule, GameOptions};
///
/// let options = GameOptions::default().with_duplicate_rule(DuplicateRule::Suit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameOptions {
    /// Suit-group equality used by the duplicate-card check.
    pub duplicate_rule: DuplicateRule,
}

impl GameOptions {
    /// Sets the suit-group rule for the duplicate-card check.
    ///
    /// # Example
    ///
    /// ```
    /// use bataille::{DuplicateRule, GameOptions};
    ///
    /// let options = GameOptions::default().with_duplicate_rule(DuplicateRule::Suit);
    /// assert_eq!(options.duplicate_rule, DuplicateRule::Suit);
    /// ```
    #[must_use]
    pub const fn with_duplicate_rule(mut self, rule: DuplicateRule) -> Self {
        self.duplicate_rule = rule;
        self
    }
}
