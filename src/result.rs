//! Events and outcomes returned by game actions.

use alloc::vec::Vec;

use crate::dice::Roll;

/// Final result of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameOutcome {
    /// A single winner.
    Winner(u8),
    /// Several players tied on the top score.
    Draw(Vec<u8>),
    /// Every player forfeited.
    NoContest,
}

/// Something that happened while applying an action.
///
/// Actions return their events in order so the host can notify players
/// without inspecting state diffs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    /// A player rolled.
    Rolled {
        /// Player ID.
        player_id: u8,
        /// Dice on the table after the roll.
        roll: Roll,
    },
    /// A selection was set aside.
    Selected {
        /// Player ID.
        player_id: u8,
        /// Points the selection scored.
        points: u32,
        /// Accumulated turn score.
        turn_score: u32,
    },
    /// The turn ended without score.
    Farkled {
        /// Player ID.
        player_id: u8,
        /// Turn score that was discarded.
        lost: u32,
    },
    /// The turn score was committed.
    Banked {
        /// Player ID.
        player_id: u8,
        /// Points committed.
        points: u32,
        /// Player total after the bank.
        total: u32,
    },
    /// A bank below the break-in score was refused and its score discarded.
    BankRejected {
        /// Player ID.
        player_id: u8,
        /// Points that were refused.
        points: u32,
        /// Break-in score required.
        break_in: u32,
    },
    /// A Ten-Round player finished a round.
    RoundCompleted {
        /// Player ID.
        player_id: u8,
        /// Rounds completed so far.
        round: u8,
        /// Player total.
        total: u32,
    },
    /// A Standard player reached the target; everyone else gets one more turn.
    FinalRound {
        /// Player who reached the target.
        player_id: u8,
    },
    /// A player forfeited.
    Forfeited {
        /// Player ID.
        player_id: u8,
    },
    /// A turn ended.
    TurnEnded {
        /// Player whose turn ended.
        player_id: u8,
        /// Player who acts next (Standard mode only).
        next: Option<u8>,
    },
    /// The game is over.
    GameFinished {
        /// The result.
        outcome: GameOutcome,
    },
}
