//! Selection validation against a roll.

use crate::dice::{DICE_COUNT, Roll, Selection};
use crate::error::SelectionError;
use crate::options::SelectionPolicy;
use crate::scoring::score;

/// Validates `selection` against the dice on the table and returns its score.
///
/// Every selected die must match the die at the same index of `roll`, and the
/// selection as a whole must score. The score is for the selected dice only,
/// never the whole roll.
///
/// # Errors
///
/// Returns [`SelectionError::Empty`] for an empty selection,
/// [`SelectionError::Mismatch`] when a selected die is not on the table at
/// that index, and [`SelectionError::NotScoring`] when the selection scores 0.
///
/// # Example
///
/// ```
/// use farkle::{validate, Roll, Selection, SelectionError};
///
/// let roll = Roll::from_values([1, 2, 3, 5, 5, 6]).unwrap();
/// let pick = Selection::new([1, 0, 0, 5, 0, 0]).unwrap();
/// assert_eq!(validate(&roll, &pick), Ok(150));
///
/// let wrong = Selection::new([0, 0, 0, 0, 0, 5]).unwrap();
/// assert_eq!(validate(&roll, &wrong), Err(SelectionError::Mismatch { index: 5 }));
/// ```
pub fn validate(roll: &Roll, selection: &Selection) -> Result<u32, SelectionError> {
    if selection.is_empty() {
        return Err(SelectionError::Empty);
    }

    for (index, (picked, rolled)) in selection.slots().iter().zip(roll.slots()).enumerate() {
        if picked.is_some() && picked != rolled {
            return Err(SelectionError::Mismatch { index });
        }
    }

    match score(&selection.values()) {
        0 => Err(SelectionError::NotScoring),
        points => Ok(points),
    }
}

/// Validates `selection` under `policy`.
///
/// [`SelectionPolicy::Lenient`] behaves like [`validate`].
/// [`SelectionPolicy::Strict`] also rejects any die whose removal would not
/// lower the selection's score.
///
/// # Errors
///
/// Returns the errors of [`validate`], plus [`SelectionError::DeadDie`] under
/// the strict policy.
pub fn validate_with(
    roll: &Roll,
    selection: &Selection,
    policy: SelectionPolicy,
) -> Result<u32, SelectionError> {
    let points = validate(roll, selection)?;

    if policy == SelectionPolicy::Strict {
        for index in 0..DICE_COUNT {
            if selection.get(index).is_some()
                && score(&selection.without(index).values()) >= points
            {
                return Err(SelectionError::DeadDie { index });
            }
        }
    }

    Ok(points)
}

/// Returns the highest-scoring selection over `roll` and its score.
///
/// Among selections of equal score the one holding the fewest dice wins, so
/// as many dice as possible stay available to roll. Returns `None` when
/// nothing on the table scores.
#[must_use]
pub fn best_selection(roll: &Roll) -> Option<(Selection, u32)> {
    let occupied: u8 = (0..DICE_COUNT)
        .filter(|&index| roll.get(index).is_some())
        .fold(0, |mask, index| mask | (1 << index));

    let mut best: Option<(Selection, u32)> = None;

    // Walk every non-empty subset of the occupied slots.
    let mut mask = occupied;
    while mask != 0 {
        let mut values = [0u8; DICE_COUNT];
        for (index, value) in values.iter_mut().enumerate() {
            if mask & (1 << index) != 0 {
                *value = roll.get(index).map_or(0, u8::from);
            }
        }

        let points = score(&values);
        if points > 0 {
            if let Ok(selection) = Selection::new(values) {
                let better = best.is_none_or(|(current, current_points)| {
                    points > current_points
                        || (points == current_points && selection.len() < current.len())
                });
                if better {
                    best = Some((selection, points));
                }
            }
        }

        mask = (mask - 1) & occupied;
    }

    best
}
