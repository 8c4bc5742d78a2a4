//! Dice sources.
//!
//! The engine never owns a random generator. Every roll is drawn from a
//! [`DiceSource`] handed in by the caller, so a server, a client mirror, and a
//! test can all replay the same sequence.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::dice::{DICE_COUNT, DieFace};
use crate::error::DiceError;

/// A source of six-dice rolls.
///
/// The turn keeps only the slots that are not held, so a source always
/// produces a full six-dice roll.
pub trait DiceSource {
    /// Draws the next roll.
    ///
    /// # Errors
    ///
    /// Returns [`DiceError::Exhausted`] when a finite source has run out.
    fn next_roll(&mut self) -> Result<[DieFace; DICE_COUNT], DiceError>;
}

impl<T: DiceSource + ?Sized> DiceSource for &mut T {
    fn next_roll(&mut self) -> Result<[DieFace; DICE_COUNT], DiceError> {
        (**self).next_roll()
    }
}

/// Uniform dice seeded for reproducibility.
///
/// ```
/// use farkle::{DiceSource, SeededDice};
///
/// let mut a = SeededDice::new(42);
/// let mut b = SeededDice::new(42);
/// assert_eq!(a.next_roll(), b.next_roll());
/// ```
#[derive(Debug, Clone)]
pub struct SeededDice {
    rng: ChaCha8Rng,
}

impl SeededDice {
    /// Creates a dice source from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn face(&mut self) -> DieFace {
        match self.rng.random_range(1..=6u8) {
            1 => DieFace::One,
            2 => DieFace::Two,
            3 => DieFace::Three,
            4 => DieFace::Four,
            5 => DieFace::Five,
            _ => DieFace::Six,
        }
    }
}

impl DiceSource for SeededDice {
    fn next_roll(&mut self) -> Result<[DieFace; DICE_COUNT], DiceError> {
        Ok(core::array::from_fn(|_| self.face()))
    }
}

/// A finite, scripted sequence of rolls.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<[DieFace; DICE_COUNT]>,
}

impl ScriptedDice {
    /// Creates a source that replays `rolls` in order.
    #[must_use]
    pub fn new(rolls: Vec<[DieFace; DICE_COUNT]>) -> Self {
        Self {
            rolls: rolls.into(),
        }
    }

    /// Creates a source from raw values.
    ///
    /// Slots that the turn holds are ignored when a roll is applied, so any
    /// face may fill them; `0` is not accepted.
    ///
    /// # Errors
    ///
    /// Returns [`DiceError::InvalidFace`] for any value outside `1..=6`.
    pub fn from_values(rolls: &[[u8; DICE_COUNT]]) -> Result<Self, DiceError> {
        let mut parsed = VecDeque::with_capacity(rolls.len());
        for values in rolls {
            let mut faces = [DieFace::One; DICE_COUNT];
            for (face, &value) in faces.iter_mut().zip(values) {
                *face = DieFace::try_from(value)?;
            }
            parsed.push_back(faces);
        }
        Ok(Self { rolls: parsed })
    }

    /// Appends a roll to the script.
    pub fn push(&mut self, roll: [DieFace; DICE_COUNT]) {
        self.rolls.push_back(roll);
    }

    /// Returns the number of rolls left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl DiceSource for ScriptedDice {
    fn next_roll(&mut self) -> Result<[DieFace; DICE_COUNT], DiceError> {
        self.rolls.pop_front().ok_or(DiceError::Exhausted)
    }
}
