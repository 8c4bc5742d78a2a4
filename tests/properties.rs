//! Property-based tests for scoring, validation, and turns.

use proptest::prelude::*;

use farkle::{
    Roll, ScriptedDice, Selection, SelectionPolicy, Turn, TurnPhase, best_selection, has_score,
    score, validate, validate_with,
};

/// Strategy: a full roll of six dice.
fn roll_strategy() -> impl Strategy<Value = [u8; 6]> {
    prop::array::uniform6(1..=6u8)
}

/// Strategy: six slots, each empty or a die face.
fn slots_strategy() -> impl Strategy<Value = [u8; 6]> {
    prop::array::uniform6(0..=6u8)
}

/// Strategy: a bitmask over the six slots.
fn mask_strategy() -> impl Strategy<Value = u8> {
    0..64u8
}

fn masked(values: [u8; 6], mask: u8) -> [u8; 6] {
    let mut out = [0; 6];
    for (index, value) in values.iter().enumerate() {
        if mask & (1 << index) != 0 {
            out[index] = *value;
        }
    }
    out
}

proptest! {
    // Scoring ignores slot order.
    #[test]
    fn score_is_order_independent(mut dice in slots_strategy(), seed in any::<u64>()) {
        let expected = score(&dice);
        let mut state = seed;
        for index in (1..dice.len()).rev() {
            state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            let other = (state >> 33) as usize % (index + 1);
            dice.swap(index, other);
        }
        prop_assert_eq!(score(&dice), expected);
    }

    // Adding dice never makes a combination worth less.
    #[test]
    fn score_is_monotone_in_dice(dice in roll_strategy(), mask in mask_strategy()) {
        let part = masked(dice, mask);
        prop_assert!(score(&part) <= score(&dice));
    }

    // The whole table scores exactly when some subset does.
    #[test]
    fn farkle_detection_matches_subsets(dice in roll_strategy()) {
        let any_subset = (1..64u8).any(|mask| score(&masked(dice, mask)) > 0);
        prop_assert_eq!(has_score(&dice), any_subset);
    }

    // A selection of rolled dice validates to exactly its own score.
    #[test]
    fn validate_matches_score(dice in roll_strategy(), mask in mask_strategy()) {
        let roll = Roll::from_values(dice).unwrap();
        let part = masked(dice, mask);
        let selection = Selection::new(part).unwrap();

        match validate(&roll, &selection) {
            Ok(points) => prop_assert_eq!(points, score(&part)),
            Err(_) => prop_assert!(mask == 0 || score(&part) == 0),
        }
    }

    // Any selected value that differs from the roll is rejected.
    #[test]
    fn validate_rejects_foreign_dice(dice in roll_strategy(), other in roll_strategy()) {
        let roll = Roll::from_values(dice).unwrap();
        let selection = Selection::new(other).unwrap();
        if dice != other {
            prop_assert!(validate(&roll, &selection).is_err());
        }
    }

    // The best selection always passes the strict policy.
    #[test]
    fn best_selection_is_strictly_legal(dice in roll_strategy()) {
        let roll = Roll::from_values(dice).unwrap();
        if let Some((selection, points)) = best_selection(&roll) {
            prop_assert_eq!(validate_with(&roll, &selection, SelectionPolicy::Strict), Ok(points));
        } else {
            prop_assert!(!has_score(&dice));
        }
    }

    // A roll with nothing scoring always farkles and zeroes the turn.
    #[test]
    fn dead_rolls_farkle(dice in roll_strategy()) {
        let mut source = ScriptedDice::from_values(&[dice]).unwrap();
        let mut turn = Turn::new();
        turn.roll(&mut source).unwrap();

        if has_score(&dice) {
            prop_assert_eq!(turn.phase(), TurnPhase::Rolled);
        } else {
            prop_assert_eq!(turn.phase(), TurnPhase::Farkled);
            prop_assert_eq!(turn.score(), 0);
        }
    }
}
