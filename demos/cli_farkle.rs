//! CLI Farkle example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use farkle::{
    Game, GameEvent, GameOptions, GameOutcome, GameState, Roll, SeededDice, Selection,
    best_selection,
};

fn main() {
    println!("Farkle CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut dice = SeededDice::new(seed);

    let players = prompt_usize("Number of players (1-4): ").unwrap_or(0).clamp(1, 4);
    let target = prompt_usize("Target score (e.g. 10000): ").unwrap_or(10_000);
    let options = GameOptions::standard().with_target_score(clamp_target(target));
    let mut game = Game::new(options);

    for _ in 0..players {
        if let Err(err) = game.join() {
            println!("Join error: {err}");
        }
    }

    if let Err(err) = game.start() {
        println!("Start error: {err}");
        return;
    }

    while game.state() == GameState::Active {
        let Some(player_id) = game.current_player() else {
            break;
        };

        print_table(&game, player_id);
        println!("{}", format_actions(&game, player_id));
        let action = prompt_line(&format!("Player {player_id} action: "));

        let result = match action.as_str() {
            "r" | "roll" => game.roll(player_id, &mut dice),
            "b" | "bank" => game.bank(player_id),
            "h" | "hint" => {
                print_hint(&game, player_id);
                continue;
            }
            "f" | "forfeit" => game.forfeit(player_id),
            "q" | "quit" => return,
            input if input.starts_with('s') => match parse_indices(game.turn(player_id), input) {
                Some(selection) => game.select(player_id, &selection),
                None => {
                    println!("Usage: s <die numbers>, e.g. 's 1 4'.");
                    continue;
                }
            },
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        match result {
            Ok(events) => events.iter().for_each(print_event),
            Err(err) => println!("Action error: {err}"),
        }
    }

    print_scores(&game);
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

/// Typed targets beyond `u32` are capped instead of wrapping.
fn clamp_target(target: usize) -> u32 {
    u32::try_from(target).unwrap_or(u32::MAX)
}

/// Parses "s 1 3 5" (1-based die numbers) into a selection of the table.
fn parse_indices(turn: Option<&farkle::Turn>, input: &str) -> Option<Selection> {
    let turn = turn?;
    let indices: Vec<usize> = input
        .split_whitespace()
        .skip(1)
        .map(|part| part.parse::<usize>().ok()?.checked_sub(1))
        .collect::<Option<_>>()?;

    if indices.is_empty() {
        return None;
    }
    Selection::from_indices(turn.table(), &indices).ok()
}

fn print_table(game: &Game, player_id: u8) {
    println!();
    for player in game.players() {
        let marker = if player.id == player_id { "*" } else { " " };
        println!("{marker} Player {}: {} | {:?}", player.id, player.banked, player.status);
    }

    if let Some(turn) = game.turn(player_id) {
        println!(
            "\nTable: {} | held: {} | turn score {} | {:?}",
            format_roll(turn.table()),
            format_roll(turn.held()),
            turn.score(),
            turn.phase()
        );
    }
    println!();
}

fn print_hint(game: &Game, player_id: u8) {
    match game.turn(player_id).and_then(|turn| best_selection(turn.table())) {
        Some((selection, points)) => {
            let dice: Vec<String> = (0..6)
                .filter(|&index| selection.get(index).is_some())
                .map(|index| (index + 1).to_string())
                .collect();
            println!("Best: s {} ({points} points)", dice.join(" "));
        }
        None => println!("Nothing to select."),
    }
}

fn print_event(event: &GameEvent) {
    match event {
        GameEvent::Rolled { roll, .. } => println!("Rolled: {}", format_roll(roll)),
        GameEvent::Selected {
            points, turn_score, ..
        } => println!("Kept {points} points (turn score {turn_score})."),
        GameEvent::Farkled { lost, .. } => {
            println!("{}", colorize(&format!("Farkle! Lost {lost}."), "31"));
        }
        GameEvent::Banked { points, total, .. } => {
            println!("Banked {points} (total {total}).");
        }
        GameEvent::BankRejected {
            points, break_in, ..
        } => println!("{points} is below the break-in of {break_in}. Turn lost."),
        GameEvent::FinalRound { player_id } => {
            println!("Player {player_id} reached the target. Final round!");
        }
        GameEvent::Forfeited { player_id } => println!("Player {player_id} forfeits."),
        GameEvent::TurnEnded {
            next: Some(next), ..
        } => println!("Player {next} is up."),
        GameEvent::GameFinished { outcome } => match outcome {
            GameOutcome::Winner(id) => {
                println!("{}", colorize(&format!("Player {id} wins!"), "32"));
            }
            GameOutcome::Draw(ids) => println!("Draw between {ids:?}."),
            GameOutcome::NoContest => println!("No contest."),
        },
        GameEvent::TurnEnded { next: None, .. } | GameEvent::RoundCompleted { .. } => {}
    }
}

fn print_scores(game: &Game) {
    println!("\nFinal scores:");
    for player in game.players() {
        println!("Player {}: {}", player.id, player.banked);
    }
}

fn format_actions(game: &Game, player_id: u8) -> String {
    let turn = game.turn(player_id);
    let can_roll = turn.is_some_and(|turn| turn.phase() != farkle::TurnPhase::Rolled);
    let can_select = turn.is_some_and(farkle::Turn::has_rolled);
    let can_bank = turn.is_some_and(|turn| turn.bankable().is_ok());

    let parts = [
        format_action("roll", "r", can_roll),
        format_action("select <n..>", "s", can_select),
        format_action("bank", "b", can_bank),
        format_action("hint", "h", can_select),
        format_action("forfeit", "f", true),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_roll(roll: &Roll) -> String {
    roll.slots()
        .iter()
        .map(|slot| slot.map_or_else(|| "-".to_string(), |face| face.value().to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}
