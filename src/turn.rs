//! A single player's turn.

use crate::dice::{DICE_COUNT, Roll, Selection};
use crate::error::{SelectionError, TurnError};
use crate::options::SelectionPolicy;
use crate::scoring::has_score;
use crate::selection::validate_with;
use crate::source::DiceSource;

/// Turn phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnPhase {
    /// Waiting for the first roll.
    AwaitingRoll,
    /// Dice have been rolled and nothing has been set aside from them yet.
    Rolled,
    /// At least one scoring selection was made from the latest roll.
    Selected,
    /// The turn score was banked.
    Banked,
    /// The turn ended without score.
    Farkled,
}

/// State of one player's turn.
///
/// A turn moves `AwaitingRoll -> Rolled -> Selected`, loops back to
/// `Rolled` on each further roll, and ends in `Banked` or `Farkled`.
/// Every method checks before it mutates, so an `Err` leaves the turn as it
/// was.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn {
    /// Dice showing from the latest roll, minus those set aside since.
    table: Roll,
    /// Dice set aside this turn.
    held: Roll,
    /// Accumulated turn score.
    score: u32,
    /// Current phase.
    phase: TurnPhase,
    /// Number of rolls made.
    rolls: u32,
    /// Selection policy.
    policy: SelectionPolicy,
}

impl Turn {
    /// Creates a fresh turn with the lenient selection policy.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_policy(SelectionPolicy::Lenient)
    }

    /// Creates a fresh turn with the given selection policy.
    #[must_use]
    pub const fn with_policy(policy: SelectionPolicy) -> Self {
        Self {
            table: Roll::new([None; DICE_COUNT]),
            held: Roll::new([None; DICE_COUNT]),
            score: 0,
            phase: TurnPhase::AwaitingRoll,
            rolls: 0,
            policy,
        }
    }

    /// Rolls every die that is not held.
    ///
    /// When all six dice are held (hot dice) the held set is cleared first and
    /// all six are rolled. If nothing on the table scores, the turn farkles:
    /// the accumulated score is discarded and the phase becomes
    /// [`TurnPhase::Farkled`].
    ///
    /// Returns the dice now on the table.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::SelectionRequired`] when the previous roll has not
    /// had a selection yet, [`TurnError::TurnOver`] after the turn ended, and
    /// [`TurnError::Dice`] when the source fails.
    pub fn roll<D: DiceSource + ?Sized>(&mut self, dice: &mut D) -> Result<Roll, TurnError> {
        match self.phase {
            TurnPhase::AwaitingRoll | TurnPhase::Selected => {}
            TurnPhase::Rolled => return Err(TurnError::SelectionRequired),
            TurnPhase::Banked | TurnPhase::Farkled => return Err(TurnError::TurnOver),
        }

        let faces = dice.next_roll()?;

        if self.held.len() == DICE_COUNT {
            tracing::debug!(score = self.score, "hot dice");
            self.held = Roll::default();
        }

        let mut slots = [None; DICE_COUNT];
        for (index, slot) in slots.iter_mut().enumerate() {
            if self.held.get(index).is_none() {
                *slot = Some(faces[index]);
            }
        }
        self.table = Roll::new(slots);
        self.rolls += 1;

        if has_score(&self.table.values()) {
            self.phase = TurnPhase::Rolled;
        } else {
            tracing::debug!(lost = self.score, rolls = self.rolls, "farkle");
            self.score = 0;
            self.phase = TurnPhase::Farkled;
        }

        Ok(self.table)
    }

    /// Sets aside a scoring selection from the table.
    ///
    /// Several selections may be made from one roll as long as each scores on
    /// its own. Returns the points the selection added.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::NotRolled`] before the first roll,
    /// [`TurnError::TurnOver`] after the turn ended, and
    /// [`TurnError::Selection`] when the selection is illegal.
    pub fn select(&mut self, selection: &Selection) -> Result<u32, TurnError> {
        match self.phase {
            TurnPhase::Rolled | TurnPhase::Selected => {}
            TurnPhase::AwaitingRoll => return Err(TurnError::NotRolled),
            TurnPhase::Banked | TurnPhase::Farkled => return Err(TurnError::TurnOver),
        }

        for index in 0..DICE_COUNT {
            if selection.get(index).is_some() && self.held.get(index).is_some() {
                return Err(SelectionError::AlreadyHeld { index }.into());
            }
        }

        let points = validate_with(&self.table, selection, self.policy)?;

        self.table.remove(selection);
        self.held.place(selection);
        self.score += points;
        self.phase = TurnPhase::Selected;

        Ok(points)
    }

    /// Returns the score a bank would commit, without ending the turn.
    ///
    /// # Errors
    ///
    /// Same as [`Turn::bank`].
    pub const fn bankable(&self) -> Result<u32, TurnError> {
        match self.phase {
            TurnPhase::Selected if self.score > 0 => Ok(self.score),
            TurnPhase::Selected | TurnPhase::AwaitingRoll => Err(TurnError::NothingToBank),
            TurnPhase::Rolled => Err(TurnError::SelectionRequired),
            TurnPhase::Banked | TurnPhase::Farkled => Err(TurnError::TurnOver),
        }
    }

    /// Ends the turn and returns the accumulated score.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::NothingToBank`] when nothing has been scored,
    /// [`TurnError::SelectionRequired`] when the latest roll has not had a
    /// selection, and [`TurnError::TurnOver`] after the turn ended.
    pub fn bank(&mut self) -> Result<u32, TurnError> {
        let points = self.bankable()?;
        self.phase = TurnPhase::Banked;
        tracing::debug!(points, rolls = self.rolls, "bank");
        Ok(points)
    }

    /// Ends the turn as a farkle and returns the score that was discarded.
    ///
    /// Used when a bank is refused or the host abandons the turn.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::TurnOver`] after the turn ended.
    pub fn concede(&mut self) -> Result<u32, TurnError> {
        if self.is_over() {
            return Err(TurnError::TurnOver);
        }

        let lost = self.score;
        self.score = 0;
        self.phase = TurnPhase::Farkled;
        tracing::debug!(lost, "turn conceded");
        Ok(lost)
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Returns the accumulated turn score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Returns the dice on the table.
    #[must_use]
    pub const fn table(&self) -> &Roll {
        &self.table
    }

    /// Returns the dice set aside this turn.
    #[must_use]
    pub const fn held(&self) -> &Roll {
        &self.held
    }

    /// Returns the number of dice the next roll will throw.
    #[must_use]
    pub fn dice_to_roll(&self) -> usize {
        match self.held.len() {
            DICE_COUNT => DICE_COUNT,
            held => DICE_COUNT - held,
        }
    }

    /// Returns the number of rolls made this turn.
    #[must_use]
    pub const fn rolls(&self) -> u32 {
        self.rolls
    }

    /// Returns whether the dice have been rolled at least once.
    #[must_use]
    pub const fn has_rolled(&self) -> bool {
        self.rolls > 0
    }

    /// Returns whether the turn farkled.
    #[must_use]
    pub fn is_farkled(&self) -> bool {
        self.phase == TurnPhase::Farkled
    }

    /// Returns whether the turn has ended.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.phase, TurnPhase::Banked | TurnPhase::Farkled)
    }
}

impl Default for Turn {
    fn default() -> Self {
        Self::new()
    }
}
