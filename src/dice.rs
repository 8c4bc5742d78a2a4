//! Die faces, rolls, and selections.

use crate::error::{DiceError, SelectionError};

/// Number of dice in play.
pub const DICE_COUNT: usize = 6;

/// A die face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum DieFace {
    /// One pip.
    One = 1,
    /// Two pips.
    Two = 2,
    /// Three pips.
    Three = 3,
    /// Four pips.
    Four = 4,
    /// Five pips.
    Five = 5,
    /// Six pips.
    Six = 6,
}

impl DieFace {
    /// All faces in ascending order.
    pub const ALL: [Self; 6] = [
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
    ];

    /// Returns the face for a pip count, or `None` outside `1..=6`.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            5 => Some(Self::Five),
            6 => Some(Self::Six),
            _ => None,
        }
    }

    /// Returns the pip count.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for DieFace {
    type Error = DiceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or(DiceError::InvalidFace { value })
    }
}

impl From<DieFace> for u8 {
    fn from(face: DieFace) -> Self {
        face.value()
    }
}

type Slots = [Option<DieFace>; DICE_COUNT];

const fn slots_to_values(slots: &Slots) -> [u8; DICE_COUNT] {
    let mut values = [0; DICE_COUNT];
    let mut index = 0;
    while index < DICE_COUNT {
        if let Some(face) = slots[index] {
            values[index] = face.value();
        }
        index += 1;
    }
    values
}

fn count_slots(slots: &Slots) -> usize {
    slots.iter().filter(|slot| slot.is_some()).count()
}

/// The dice showing on the table after a roll.
///
/// Slots are positional (die index `0..6`). A `None` slot holds no die, for
/// example because that die was set aside earlier in the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roll {
    slots: Slots,
}

impl Roll {
    /// Creates a roll from its slots.
    #[must_use]
    pub const fn new(slots: [Option<DieFace>; DICE_COUNT]) -> Self {
        Self { slots }
    }

    /// Creates a roll with all six dice present.
    #[must_use]
    pub const fn from_faces(faces: [DieFace; DICE_COUNT]) -> Self {
        let mut slots = [None; DICE_COUNT];
        let mut index = 0;
        while index < DICE_COUNT {
            slots[index] = Some(faces[index]);
            index += 1;
        }
        Self { slots }
    }

    /// Creates a roll from raw values where `0` marks an empty slot.
    ///
    /// # Errors
    ///
    /// Returns [`DiceError::InvalidFace`] for any value above 6.
    pub fn from_values(values: [u8; DICE_COUNT]) -> Result<Self, DiceError> {
        let mut slots = [None; DICE_COUNT];
        for (slot, value) in slots.iter_mut().zip(values) {
            if value != 0 {
                *slot = Some(DieFace::try_from(value)?);
            }
        }
        Ok(Self { slots })
    }

    /// Returns the slots of the roll.
    #[must_use]
    pub const fn slots(&self) -> &[Option<DieFace>; DICE_COUNT] {
        &self.slots
    }

    /// Returns the die at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<DieFace> {
        self.slots.get(index).copied().flatten()
    }

    /// Returns the raw values with `0` for empty slots.
    #[must_use]
    pub const fn values(&self) -> [u8; DICE_COUNT] {
        slots_to_values(&self.slots)
    }

    /// Returns the number of dice present.
    #[must_use]
    pub fn len(&self) -> usize {
        count_slots(&self.slots)
    }

    /// Returns whether no dice are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes the dice of `selection` from the roll.
    pub(crate) fn remove(&mut self, selection: &Selection) {
        for (slot, picked) in self.slots.iter_mut().zip(selection.slots) {
            if picked.is_some() {
                *slot = None;
            }
        }
    }

    /// Places the dice of `selection` into their slots.
    pub(crate) fn place(&mut self, selection: &Selection) {
        for (slot, picked) in self.slots.iter_mut().zip(selection.slots) {
            if picked.is_some() {
                *slot = picked;
            }
        }
    }
}

/// Dice a player proposes to set aside, in the same six-slot shape as a [`Roll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    slots: Slots,
}

impl Selection {
    /// Creates a selection from raw values where `0` marks an unselected slot.
    ///
    /// Only the range of each value is checked here. Whether the selection
    /// matches a roll and scores is decided by [`crate::validate`].
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::InvalidFace`] for any value above 6.
    ///
    /// # Example
    ///
    /// ```
    /// use farkle::Selection;
    ///
    /// let selection = Selection::new([1, 0, 0, 5, 0, 0]).unwrap();
    /// assert_eq!(selection.len(), 2);
    /// assert!(Selection::new([7, 0, 0, 0, 0, 0]).is_err());
    /// ```
    pub fn new(values: [u8; DICE_COUNT]) -> Result<Self, SelectionError> {
        let mut slots = [None; DICE_COUNT];
        for (index, (slot, value)) in slots.iter_mut().zip(values).enumerate() {
            if value != 0 {
                *slot = Some(
                    DieFace::from_value(value)
                        .ok_or(SelectionError::InvalidFace { index, value })?,
                );
            }
        }
        Ok(Self { slots })
    }

    /// Creates a selection of the dice at `indices` in `roll`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::Mismatch`] for an index with no die.
    pub fn from_indices(roll: &Roll, indices: &[usize]) -> Result<Self, SelectionError> {
        let mut slots = [None; DICE_COUNT];
        for &index in indices {
            let face = roll.get(index).ok_or(SelectionError::Mismatch { index })?;
            slots[index] = Some(face);
        }
        Ok(Self { slots })
    }

    /// Selects every die present in `roll`.
    #[must_use]
    pub const fn all(roll: &Roll) -> Self {
        Self { slots: roll.slots }
    }

    /// Returns the slots of the selection.
    #[must_use]
    pub const fn slots(&self) -> &[Option<DieFace>; DICE_COUNT] {
        &self.slots
    }

    /// Returns the die at `index`, if selected.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<DieFace> {
        self.slots.get(index).copied().flatten()
    }

    /// Returns the raw values with `0` for unselected slots.
    #[must_use]
    pub const fn values(&self) -> [u8; DICE_COUNT] {
        slots_to_values(&self.slots)
    }

    /// Returns the number of dice selected.
    #[must_use]
    pub fn len(&self) -> usize {
        count_slots(&self.slots)
    }

    /// Returns whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy without the die at `index`.
    #[must_use]
    pub(crate) const fn without(mut self, index: usize) -> Self {
        self.slots[index] = None;
        self
    }
}
