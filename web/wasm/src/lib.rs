use farkle::{
    Game, GameEvent, GameMode, GameOptions, GameOutcome, GameState, PlayerRecord, PlayerStatus,
    Roll, SeededDice, Selection, Turn, TurnPhase,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Scores a combination of dice so the client can price a selection before
/// sending it. `0` marks an empty slot.
#[wasm_bindgen]
pub fn score(values: Vec<u8>) -> Result<u32, JsValue> {
    Ok(farkle::score(&six(&values)?))
}

/// A local mirror of a game, driven by the same seed as the server.
#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
    dice: SeededDice,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, ten_round: bool) -> Self {
        Self {
            game: Game::new(options_for(ten_round)),
            dice: SeededDice::new(u64::from(seed)),
        }
    }

    pub fn reset(&mut self, seed: u32, ten_round: bool) {
        self.game = Game::new(options_for(ten_round));
        self.dice = SeededDice::new(u64::from(seed));
    }

    pub fn join(&mut self) -> Result<u32, JsValue> {
        self.game.join().map(u32::from).map_err(js_err)
    }

    pub fn start(&mut self) -> Result<(), JsValue> {
        self.game.start().map_err(js_err)
    }

    pub fn roll(&mut self, player_id: u8) -> Result<JsValue, JsValue> {
        let events = self.game.roll(player_id, &mut self.dice).map_err(js_err)?;
        events_to_js(&events)
    }

    pub fn select(&mut self, player_id: u8, values: Vec<u8>) -> Result<JsValue, JsValue> {
        let selection = Selection::new(six(&values)?).map_err(js_err)?;
        let events = self.game.select(player_id, &selection).map_err(js_err)?;
        events_to_js(&events)
    }

    pub fn bank(&mut self, player_id: u8) -> Result<JsValue, JsValue> {
        let events = self.game.bank(player_id).map_err(js_err)?;
        events_to_js(&events)
    }

    pub fn forfeit(&mut self, player_id: u8) -> Result<JsValue, JsValue> {
        let events = self.game.forfeit(player_id).map_err(js_err)?;
        events_to_js(&events)
    }

    pub fn hint(&self, player_id: u8) -> Option<Vec<u8>> {
        let turn = self.game.turn(player_id)?;
        farkle::best_selection(turn.table()).map(|(selection, _)| selection.values().to_vec())
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot {
            state: state_to_str(self.game.state()),
            mode: mode_to_str(self.game.options().mode),
            target_score: self.game.options().target_score(),
            break_in: self.game.options().break_in(),
            current_player: self.game.current_player(),
            players: self.game.players().iter().map(JsPlayer::from).collect(),
            outcome: self.game.outcome().map(JsOutcome::from),
        };

        to_js_value(&snapshot)
    }
}

fn options_for(ten_round: bool) -> GameOptions {
    if ten_round {
        GameOptions::ten_round()
    } else {
        GameOptions::standard()
    }
}

fn six(values: &[u8]) -> Result<[u8; 6], JsValue> {
    values
        .try_into()
        .map_err(|_| JsValue::from_str("expected exactly six dice"))
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    mode: &'static str,
    target_score: Option<u32>,
    break_in: Option<u32>,
    current_player: Option<u8>,
    players: Vec<JsPlayer>,
    outcome: Option<JsOutcome>,
}

#[derive(Serialize)]
struct JsPlayer {
    id: u8,
    banked: u32,
    rounds: u8,
    status: &'static str,
    turn: JsTurn,
}

impl From<&PlayerRecord> for JsPlayer {
    fn from(player: &PlayerRecord) -> Self {
        Self {
            id: player.id,
            banked: player.banked,
            rounds: player.rounds,
            status: status_to_str(player.status),
            turn: JsTurn::from(&player.turn),
        }
    }
}

#[derive(Serialize)]
struct JsTurn {
    phase: &'static str,
    table: [u8; 6],
    held: [u8; 6],
    score: u32,
    dice_to_roll: usize,
    can_bank: bool,
}

impl From<&Turn> for JsTurn {
    fn from(turn: &Turn) -> Self {
        Self {
            phase: phase_to_str(turn.phase()),
            table: turn.table().values(),
            held: turn.held().values(),
            score: turn.score(),
            dice_to_roll: turn.dice_to_roll(),
            can_bank: turn.bankable().is_ok(),
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "kind")]
enum JsOutcome {
    Winner { player_id: u8 },
    Draw { player_ids: Vec<u8> },
    NoContest,
}

impl From<&GameOutcome> for JsOutcome {
    fn from(outcome: &GameOutcome) -> Self {
        match outcome {
            GameOutcome::Winner(player_id) => Self::Winner {
                player_id: *player_id,
            },
            GameOutcome::Draw(player_ids) => Self::Draw {
                player_ids: player_ids.clone(),
            },
            GameOutcome::NoContest => Self::NoContest,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "kind")]
enum JsEvent {
    Rolled { player_id: u8, dice: [u8; 6] },
    Selected { player_id: u8, points: u32, turn_score: u32 },
    Farkled { player_id: u8, lost: u32 },
    Banked { player_id: u8, points: u32, total: u32 },
    BankRejected { player_id: u8, points: u32, break_in: u32 },
    RoundCompleted { player_id: u8, round: u8, total: u32 },
    FinalRound { player_id: u8 },
    Forfeited { player_id: u8 },
    TurnEnded { player_id: u8, next: Option<u8> },
    GameFinished { outcome: JsOutcome },
}

impl From<&GameEvent> for JsEvent {
    fn from(event: &GameEvent) -> Self {
        match *event {
            GameEvent::Rolled { player_id, roll } => Self::Rolled {
                player_id,
                dice: roll_values(&roll),
            },
            GameEvent::Selected {
                player_id,
                points,
                turn_score,
            } => Self::Selected {
                player_id,
                points,
                turn_score,
            },
            GameEvent::Farkled { player_id, lost } => Self::Farkled { player_id, lost },
            GameEvent::Banked {
                player_id,
                points,
                total,
            } => Self::Banked {
                player_id,
                points,
                total,
            },
            GameEvent::BankRejected {
                player_id,
                points,
                break_in,
            } => Self::BankRejected {
                player_id,
                points,
                break_in,
            },
            GameEvent::RoundCompleted {
                player_id,
                round,
                total,
            } => Self::RoundCompleted {
                player_id,
                round,
                total,
            },
            GameEvent::FinalRound { player_id } => Self::FinalRound { player_id },
            GameEvent::Forfeited { player_id } => Self::Forfeited { player_id },
            GameEvent::TurnEnded { player_id, next } => Self::TurnEnded { player_id, next },
            GameEvent::GameFinished { ref outcome } => Self::GameFinished {
                outcome: JsOutcome::from(outcome),
            },
        }
    }
}

fn roll_values(roll: &Roll) -> [u8; 6] {
    roll.values()
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::WaitingForPlayers => "WaitingForPlayers",
        GameState::Active => "Active",
        GameState::Finished => "Finished",
    }
}

fn mode_to_str(mode: GameMode) -> &'static str {
    match mode {
        GameMode::Standard { .. } => "Standard",
        GameMode::TenRound => "TenRound",
    }
}

fn status_to_str(status: PlayerStatus) -> &'static str {
    match status {
        PlayerStatus::Active => "Active",
        PlayerStatus::Forfeited => "Forfeited",
        PlayerStatus::Finished => "Finished",
    }
}

fn phase_to_str(phase: TurnPhase) -> &'static str {
    match phase {
        TurnPhase::AwaitingRoll => "AwaitingRoll",
        TurnPhase::Rolled => "Rolled",
        TurnPhase::Selected => "Selected",
        TurnPhase::Banked => "Banked",
        TurnPhase::Farkled => "Farkled",
    }
}

fn events_to_js(events: &[GameEvent]) -> Result<JsValue, JsValue> {
    let events: Vec<JsEvent> = events.iter().map(JsEvent::from).collect();
    to_js_value(&events)
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
