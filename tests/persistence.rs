//! Persisting a game between actions.

#![cfg(feature = "serde")]

use farkle::{Game, GameOptions, ScriptedDice, Selection};

#[test]
fn game_survives_a_round_trip_mid_turn() {
    let mut game = Game::new(GameOptions::standard().with_break_in(0));
    let a = game.join().unwrap();
    let _b = game.join().unwrap();
    game.start().unwrap();

    let mut dice = ScriptedDice::from_values(&[[1, 1, 1, 2, 3, 4], [2, 2, 2, 5, 4, 6]]).unwrap();
    game.roll(a, &mut dice).unwrap();
    game.select(a, &Selection::new([1, 1, 1, 0, 0, 0]).unwrap())
        .unwrap();

    let stored = serde_json::to_string(&game).unwrap();
    let mut loaded: Game = serde_json::from_str(&stored).unwrap();
    assert_eq!(loaded, game);

    let events = loaded.roll(a, &mut dice).unwrap();
    assert_eq!(events.len(), 1);
    loaded
        .select(a, &Selection::new([0, 0, 0, 5, 0, 0]).unwrap())
        .unwrap();
    loaded.bank(a).unwrap();
    assert_eq!(loaded.player(a).unwrap().banked, 1050);
}
