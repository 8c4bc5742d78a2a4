//! Dice combination scoring.
//!
//! [`score`] prices one exact combination of dice. Singles, triples and
//! larger sets are summed into a raw score; the six-dice patterns (straight,
//! three pairs, two triplets) then replace that raw score when their bonus is
//! strictly higher. Bonuses never stack with the raw sum.

use crate::dice::DICE_COUNT;

/// Value of a single one.
pub const SINGLE_ONE: u32 = 100;
/// Value of a single five.
pub const SINGLE_FIVE: u32 = 50;
/// Value of three ones.
pub const TRIPLE_ONES: u32 = 1000;
/// Bonus for one of each face.
pub const STRAIGHT: u32 = 1000;
/// Bonus for three distinct pairs.
pub const THREE_PAIRS: u32 = 750;
/// Bonus for two groups of three, including six of a kind.
pub const TWO_TRIPLETS: u32 = 2500;

/// Counts present dice by face; index 0 is unused.
fn face_counts(dice: &[u8; DICE_COUNT]) -> ([u8; 7], usize) {
    let mut counts = [0u8; 7];
    let mut present = 0;
    for &value in dice {
        if (1..=6).contains(&value) {
            counts[value as usize] += 1;
            present += 1;
        }
    }
    (counts, present)
}

fn raw_score(counts: &[u8; 7]) -> u32 {
    let mut total = 0;
    for (face, &count) in counts.iter().enumerate().skip(1) {
        let n = u32::from(count);
        if n >= 3 {
            let base = if face == 1 {
                TRIPLE_ONES
            } else {
                face as u32 * 100
            };
            total += base * (n - 2);
        } else if face == 1 {
            total += SINGLE_ONE * n;
        } else if face == 5 {
            total += SINGLE_FIVE * n;
        }
    }
    total
}

/// Bonus for a full set of six dice, or 0 when no pattern applies.
fn pattern_bonus(counts: &[u8; 7]) -> u32 {
    let faces = &counts[1..];
    if faces.iter().all(|&count| count == 1) {
        return STRAIGHT;
    }

    let pairs = faces.iter().filter(|&&count| count == 2).count();
    let triples = faces.iter().filter(|&&count| count == 3).count();
    let sixes = faces.iter().filter(|&&count| count == 6).count();

    if triples == 2 || sixes == 1 {
        TWO_TRIPLETS
    } else if pairs == 3 {
        THREE_PAIRS
    } else {
        0
    }
}

/// Scores an exact combination of dice.
///
/// Entries are face values `1..=6`; `0` (or any other value) marks an unused
/// slot. A combination that does not score returns 0.
///
/// # Example
///
/// ```
/// use farkle::score;
///
/// assert_eq!(score(&[1, 5, 0, 0, 0, 0]), 150);
/// assert_eq!(score(&[4, 4, 4, 4, 0, 0]), 800);
/// assert_eq!(score(&[2, 2, 3, 3, 4, 4]), 750);
/// assert_eq!(score(&[6, 6, 6, 6, 6, 6]), 2500);
/// assert_eq!(score(&[2, 3, 4, 6, 0, 0]), 0);
/// ```
#[must_use]
pub fn score(dice: &[u8; DICE_COUNT]) -> u32 {
    let (counts, present) = face_counts(dice);
    let raw = raw_score(&counts);

    if present < DICE_COUNT {
        return raw;
    }

    raw.max(pattern_bonus(&counts))
}

/// Returns whether any non-empty subset of `dice` scores.
///
/// Adding a die never lowers the raw score and bonuses only replace it
/// upwards, so the whole set scores exactly when some subset does.
#[must_use]
pub fn has_score(dice: &[u8; DICE_COUNT]) -> bool {
    score(dice) > 0
}
