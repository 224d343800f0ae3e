//! A War ("bataille") card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that drives the round flow of the
//! two-player card-comparison game: a seeded shuffle, a midpoint cut into
//! two 26-card decks, and one reveal-and-resolve cycle per round. An
//! external driver (a UI, a bot, a test) triggers the two transitions and
//! reads the accessors; the engine itself does no rendering and no input
//! handling.
//!
//! # Example
//!
//! ```no_run
//! use bataille::{Game, GameOptions, RoundOutcome};
//!
//! let game = Game::new(GameOptions::default(), 42);
//!
//! let (one, two) = game.reveal()?;
//! println!("{one} vs {two}: {}", game.outcome());
//! game.acknowledge()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
mod sync;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, RANK_MAX, RANK_MIN, Suit};
pub use deck::Deck;
pub use error::{
    AcknowledgeError, CompareError, DeckError, IntegrityError, RestartError, RevealError,
};
pub use game::{EngineState, Game, RoundOutcome};
pub use options::{DuplicateRule, GameOptions};
