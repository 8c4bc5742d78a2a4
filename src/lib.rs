//! An authoritative Farkle rules engine with optional `no_std` support.
//!
//! The crate scores dice, validates selections, and runs the per-turn and
//! per-game state machines for both the turn-based Standard mode and the
//! asynchronous Ten-Round mode. It performs no I/O and never owns a global
//! random generator: dice come from a [`DiceSource`] supplied by the caller,
//! and the [`Game`] is a plain value the host loads and persists around each
//! action.
//!
//! # Example
//!
//! ```
//! use farkle::{Game, GameOptions, ScriptedDice, Selection};
//!
//! let mut game = Game::new(GameOptions::standard().with_break_in(0));
//! let alice = game.join().unwrap();
//! let _bob = game.join().unwrap();
//! game.start().unwrap();
//!
//! let mut dice = ScriptedDice::from_values(&[[1, 1, 1, 2, 3, 4]]).unwrap();
//! game.roll(alice, &mut dice).unwrap();
//! game.select(alice, &Selection::new([1, 1, 1, 0, 0, 0]).unwrap()).unwrap();
//! game.bank(alice).unwrap();
//! assert_eq!(game.player(alice).unwrap().banked, 1000);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod dice;
pub mod error;
pub mod game;
pub mod options;
pub mod result;
pub mod scoring;
pub mod selection;
pub mod source;
pub mod turn;

// Re-export main types
pub use dice::{DICE_COUNT, DieFace, Roll, Selection};
pub use error::{DiceError, GameError, RejectionKind, SelectionError, SetupError, TurnError};
pub use game::{FinalRound, Game, GameState, PlayerRecord, PlayerStatus, TEN_ROUND_ROUNDS};
pub use options::{GameMode, GameOptions, SelectionPolicy};
pub use result::{GameEvent, GameOutcome};
pub use scoring::{has_score, score};
pub use selection::{best_selection, validate, validate_with};
pub use source::{DiceSource, ScriptedDice, SeededDice};
pub use turn::{Turn, TurnPhase};
