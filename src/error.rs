//! Error types for game operations.

use thiserror::Error;

/// Broad category of a rejected action.
///
/// Every rejection leaves the game untouched; the kind only tells the host
/// how to explain it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionKind {
    /// The selection does not match the table, reuses held dice, or scores nothing.
    IllegalSelection,
    /// The player is not entitled to act right now.
    OutOfTurn,
    /// The action is not valid in the current turn or game state.
    InvalidStateTransition,
    /// A scripted dice source ran out of rolls.
    RandomSourceExhausted,
}

/// Errors produced by dice values and dice sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiceError {
    /// A die value outside `1..=6`.
    #[error("invalid die face {value}")]
    InvalidFace {
        /// The offending value.
        value: u8,
    },
    /// The dice source has no more rolls.
    #[error("dice source exhausted")]
    Exhausted,
}

/// Errors that can occur when validating a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// A selected value outside `1..=6`.
    #[error("invalid die face {value} at index {index}")]
    InvalidFace {
        /// Die index.
        index: usize,
        /// The offending value.
        value: u8,
    },
    /// Nothing was selected.
    #[error("selection is empty")]
    Empty,
    /// The selected value is not on the table at this index.
    #[error("selected die at index {index} is not on the table")]
    Mismatch {
        /// Die index.
        index: usize,
    },
    /// The die at this index was already set aside this turn.
    #[error("die at index {index} is already held")]
    AlreadyHeld {
        /// Die index.
        index: usize,
    },
    /// The selection does not score.
    #[error("selection does not score")]
    NotScoring,
    /// The die at this index adds nothing to the selection's score.
    #[error("die at index {index} does not score")]
    DeadDie {
        /// Die index.
        index: usize,
    },
}

/// Errors that can occur during a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The turn has already been banked or farkled.
    #[error("turn is over")]
    TurnOver,
    /// Dice must be rolled before selecting or banking.
    #[error("dice have not been rolled")]
    NotRolled,
    /// A scoring selection must be made before rolling again or banking.
    #[error("a selection is required first")]
    SelectionRequired,
    /// There is nothing to bank.
    #[error("nothing to bank")]
    NothingToBank,
    /// The selection was rejected.
    #[error(transparent)]
    Selection(#[from] SelectionError),
    /// The dice source failed.
    #[error(transparent)]
    Dice(#[from] DiceError),
}

/// Errors that can occur while setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The game is no longer waiting for players.
    #[error("game is not waiting for players")]
    InvalidState,
    /// The table is full.
    #[error("too many players")]
    TooManyPlayers,
    /// No players have joined.
    #[error("no players have joined")]
    NoPlayers,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The game is not active.
    #[error("game is not active")]
    InvalidState,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// The player has already played every round.
    #[error("player has completed all rounds")]
    RoundsComplete,
    /// The player has forfeited.
    #[error("player has forfeited")]
    Forfeited,
    /// The turn rejected the action.
    #[error(transparent)]
    Turn(#[from] TurnError),
}

impl GameError {
    /// Returns the category of this rejection.
    ///
    /// # Example
    ///
    /// ```
    /// use farkle::{GameError, RejectionKind, TurnError};
    ///
    /// assert_eq!(GameError::NotYourTurn.kind(), RejectionKind::OutOfTurn);
    /// assert_eq!(
    ///     GameError::Turn(TurnError::NothingToBank).kind(),
    ///     RejectionKind::InvalidStateTransition
    /// );
    /// ```
    #[must_use]
    pub const fn kind(&self) -> RejectionKind {
        match self {
            Self::NotYourTurn | Self::RoundsComplete | Self::Forfeited | Self::PlayerNotFound => {
                RejectionKind::OutOfTurn
            }
            Self::InvalidState => RejectionKind::InvalidStateTransition,
            Self::Turn(err) => err.kind(),
        }
    }
}

impl TurnError {
    /// Returns the category of this rejection.
    #[must_use]
    pub const fn kind(&self) -> RejectionKind {
        match self {
            Self::TurnOver | Self::NotRolled | Self::SelectionRequired | Self::NothingToBank => {
                RejectionKind::InvalidStateTransition
            }
            Self::Selection(_) => RejectionKind::IllegalSelection,
            Self::Dice(_) => RejectionKind::RandomSourceExhausted,
        }
    }
}
