//! Scoring and selection validation tests.

use farkle::{
    DieFace, Roll, Selection, SelectionError, SelectionPolicy, best_selection, has_score, score,
    validate, validate_with,
};

fn roll(values: [u8; 6]) -> Roll {
    Roll::from_values(values).unwrap()
}

fn pick(values: [u8; 6]) -> Selection {
    Selection::new(values).unwrap()
}

#[test]
fn empty_and_dead_dice_score_nothing() {
    assert_eq!(score(&[0, 0, 0, 0, 0, 0]), 0);
    assert_eq!(score(&[2, 3, 4, 6, 0, 0]), 0);
    assert_eq!(score(&[2, 2, 0, 0, 0, 0]), 0);
    assert!(!has_score(&[2, 3, 4, 6, 6, 3]));
}

#[test]
fn singles() {
    assert_eq!(score(&[1, 0, 0, 0, 0, 0]), 100);
    assert_eq!(score(&[5, 0, 0, 0, 0, 0]), 50);
    assert_eq!(score(&[0, 1, 0, 5, 0, 1]), 250);
    assert_eq!(score(&[5, 5, 2, 0, 0, 0]), 100);
}

#[test]
fn triples() {
    assert_eq!(score(&[1, 1, 1, 0, 0, 0]), 1000);
    for v in 2..=6u8 {
        assert_eq!(score(&[v, v, v, 0, 0, 0]), u32::from(v) * 100, "triple {v}");
    }
}

#[test]
fn larger_sets_multiply_the_triple() {
    assert_eq!(score(&[4, 4, 4, 4, 0, 0]), 800);
    assert_eq!(score(&[4, 4, 4, 4, 4, 0]), 1200);
    assert_eq!(score(&[1, 1, 1, 1, 0, 0]), 2000);
    assert_eq!(score(&[1, 1, 1, 1, 1, 0]), 3000);
    assert_eq!(score(&[5, 5, 5, 5, 1, 0]), 1100);
}

#[test]
fn straight_in_any_order() {
    assert_eq!(score(&[1, 2, 3, 4, 5, 6]), 1000);
    assert_eq!(score(&[6, 5, 4, 3, 2, 1]), 1000);
    assert_eq!(score(&[3, 1, 6, 2, 5, 4]), 1000);
}

#[test]
fn three_pairs() {
    assert_eq!(score(&[2, 2, 3, 3, 4, 4]), 750);
    assert_eq!(score(&[1, 1, 5, 5, 6, 6]), 750);
    assert_eq!(score(&[6, 2, 6, 4, 2, 4]), 750);
}

#[test]
fn two_triplets_override_raw_score() {
    assert_eq!(score(&[2, 2, 2, 3, 3, 3]), 2500);
    assert_eq!(score(&[1, 1, 1, 5, 5, 5]), 2500);
    assert_eq!(score(&[6, 6, 6, 6, 6, 6]), 2500);
    assert_eq!(score(&[2, 2, 2, 2, 2, 2]), 2500);
}

#[test]
fn six_ones_keep_their_raw_score() {
    assert_eq!(score(&[1, 1, 1, 1, 1, 1]), 4000);
}

#[test]
fn four_of_a_kind_with_a_pair_is_not_three_pairs() {
    // Raw 1000 beats the three-pairs bonus anyway.
    assert_eq!(score(&[3, 3, 5, 5, 5, 5]), 1000);
    // Raw 400 + 100: the pattern needs three distinct pairs.
    assert_eq!(score(&[2, 2, 2, 2, 5, 5]), 500);
}

#[test]
fn bonuses_need_all_six_dice() {
    assert_eq!(score(&[1, 2, 3, 4, 5, 0]), 150);
    assert_eq!(score(&[2, 2, 3, 3, 0, 0]), 0);
    assert_eq!(score(&[2, 2, 2, 3, 3, 0]), 200);
}

#[test]
fn validate_scores_only_the_selection() {
    let table = roll([1, 1, 1, 5, 2, 3]);
    assert_eq!(validate(&table, &pick([1, 1, 1, 0, 0, 0])), Ok(1000));
    assert_eq!(validate(&table, &pick([0, 0, 0, 5, 0, 0])), Ok(50));
    assert_eq!(validate(&table, &pick([1, 1, 1, 5, 0, 0])), Ok(1050));
}

#[test]
fn validate_rejections() {
    let table = roll([1, 2, 3, 4, 6, 6]);

    assert_eq!(
        validate(&table, &Selection::default()),
        Err(SelectionError::Empty)
    );
    assert_eq!(
        validate(&table, &pick([0, 0, 0, 0, 0, 5])),
        Err(SelectionError::Mismatch { index: 5 })
    );
    assert_eq!(
        validate(&table, &pick([0, 1, 0, 0, 0, 0])),
        Err(SelectionError::Mismatch { index: 1 })
    );
    assert_eq!(
        validate(&table, &pick([0, 2, 0, 0, 0, 0])),
        Err(SelectionError::NotScoring)
    );
    assert_eq!(
        validate(&table, &pick([0, 0, 0, 0, 6, 6])),
        Err(SelectionError::NotScoring)
    );
}

#[test]
fn selection_cannot_reach_empty_slots() {
    let table = Roll::new([Some(DieFace::Five), None, None, None, None, None]);
    assert_eq!(
        validate(&table, &pick([5, 5, 0, 0, 0, 0])),
        Err(SelectionError::Mismatch { index: 1 })
    );
}

#[test]
fn strict_policy_rejects_dead_dice() {
    let table = roll([1, 2, 3, 4, 6, 6]);
    let with_junk = pick([1, 2, 0, 0, 0, 0]);

    assert_eq!(
        validate_with(&table, &with_junk, SelectionPolicy::Lenient),
        Ok(100)
    );
    assert_eq!(
        validate_with(&table, &with_junk, SelectionPolicy::Strict),
        Err(SelectionError::DeadDie { index: 1 })
    );

    let full = roll([2, 2, 3, 3, 4, 4]);
    assert_eq!(
        validate_with(&full, &Selection::all(&full), SelectionPolicy::Strict),
        Ok(750)
    );
}

#[test]
fn selection_constructors() {
    assert_eq!(
        Selection::new([0, 0, 9, 0, 0, 0]),
        Err(SelectionError::InvalidFace { index: 2, value: 9 })
    );

    let table = roll([1, 0, 5, 3, 0, 0]);
    let chosen = Selection::from_indices(&table, &[0, 2]).unwrap();
    assert_eq!(chosen.values(), [1, 0, 5, 0, 0, 0]);
    assert_eq!(
        Selection::from_indices(&table, &[1]),
        Err(SelectionError::Mismatch { index: 1 })
    );
    assert_eq!(
        Selection::from_indices(&table, &[8]),
        Err(SelectionError::Mismatch { index: 8 })
    );
}

#[test]
fn best_selection_prefers_points_then_fewer_dice() {
    let (selection, points) = best_selection(&roll([1, 5, 2, 2, 2, 3])).unwrap();
    assert_eq!(points, 350);
    assert_eq!(selection.values(), [1, 5, 2, 2, 2, 0]);

    let (selection, points) = best_selection(&roll([4, 4, 4, 4, 2, 3])).unwrap();
    assert_eq!(points, 800);
    assert_eq!(selection.len(), 4);

    let (selection, points) = best_selection(&roll([1, 1, 5, 5, 6, 6])).unwrap();
    assert_eq!(points, 750);
    assert_eq!(selection.len(), 6);

    assert!(best_selection(&roll([2, 3, 4, 6, 6, 3])).is_none());
}
