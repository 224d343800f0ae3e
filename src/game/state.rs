//! Engine state and round outcome types.

use core::fmt;

/// Engine state.
///
/// The engine alternates between the two states for the whole session;
/// there is no terminal state. A player holding zero cards is a legal,
/// continuing position as long as the opponent holds all 52.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No cards revealed, awaiting a reveal trigger.
    Idle,
    /// Both top cards are face-up, awaiting an acknowledge trigger.
    Revealed,
}

/// Outcome of a revealed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player one's card ranks higher and captures both cards.
    PlayerOneWins,
    /// Player two's card ranks higher and captures both cards.
    PlayerTwoWins,
    /// Equal ranks; each card returns to the back of its own deck.
    Draw,
    /// No round is revealed. This is the cleared value outside of a
    /// revealed round and is never produced by a comparison.
    Unknown,
}

impl RoundOutcome {
    /// Win badges for (player one, player two): `"+"` next to the round's
    /// winner, empty strings on a draw or outside a revealed round.
    #[must_use]
    pub const fn badges(self) -> (&'static str, &'static str) {
        match self {
            Self::PlayerOneWins => ("+", ""),
            Self::PlayerTwoWins => ("", "+"),
            Self::Draw | Self::Unknown => ("", ""),
        }
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::PlayerOneWins => "player one wins",
            Self::PlayerTwoWins => "player two wins",
            Self::Draw => "draw",
            Self::Unknown => "no round revealed",
        };
        f.write_str(label)
    }
}
