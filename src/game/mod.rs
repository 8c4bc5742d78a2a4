//! Game engine and state management.

use alloc::vec::Vec;

use crate::error::SetupError;
use crate::options::{GameMode, GameOptions};
use crate::result::{GameEvent, GameOutcome};
use crate::turn::Turn;

mod actions;
mod standard;
pub mod state;
mod ten_round;

pub use state::{FinalRound, GameState, PlayerStatus};

/// Number of rounds each player plays in Ten-Round mode.
pub const TEN_ROUND_ROUNDS: u8 = 10;

/// A player's record within a game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerRecord {
    /// Player ID.
    pub id: u8,
    /// Committed total.
    pub banked: u32,
    /// Rounds completed (Ten-Round mode).
    pub rounds: u8,
    /// Player status.
    pub status: PlayerStatus,
    /// Order in which the player first reached the target (Standard mode).
    pub reached_target: Option<u32>,
    /// The player's current turn.
    pub turn: Turn,
}

impl PlayerRecord {
    fn new(id: u8, turn: Turn) -> Self {
        Self {
            id,
            banked: 0,
            rounds: 0,
            status: PlayerStatus::Active,
            reached_target: None,
            turn,
        }
    }
}

/// A Farkle game.
///
/// The game is a plain value: the host loads it, applies one action, and
/// persists the result. Actions take `&mut self`, check everything they need
/// before touching state, and return the [`GameEvent`]s they produced.
/// Actions against one game (Standard) or one player (Ten-Round) must be
/// serialized by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Seated players in turn order.
    players: Vec<PlayerRecord>,
    /// Next player ID to assign.
    next_id: u8,
    /// Seat whose turn it is (Standard mode).
    current: usize,
    /// Set once a Standard player reaches the target.
    final_round: Option<FinalRound>,
    /// Number of players who have reached the target so far.
    reached_count: u32,
    /// Result once finished.
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Creates a new game waiting for players.
    ///
    /// # Example
    ///
    /// ```
    /// use farkle::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::ten_round());
    /// assert_eq!(game.state(), GameState::WaitingForPlayers);
    /// ```
    #[must_use]
    pub const fn new(options: GameOptions) -> Self {
        Self {
            options,
            state: GameState::WaitingForPlayers,
            players: Vec::new(),
            next_id: 0,
            current: 0,
            final_round: None,
            reached_count: 0,
            outcome: None,
        }
    }

    fn fresh_turn(&self) -> Turn {
        Turn::with_policy(self.options.selection)
    }

    /// Joins the game and returns the assigned player ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has started or the table is full.
    pub fn join(&mut self) -> Result<u8, SetupError> {
        if self.state != GameState::WaitingForPlayers {
            return Err(SetupError::InvalidState);
        }

        if self.players.len() >= usize::from(self.options.max_players) {
            return Err(SetupError::TooManyPlayers);
        }

        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(SetupError::TooManyPlayers)?;
        let turn = self.fresh_turn();
        self.players.push(PlayerRecord::new(id, turn));
        Ok(id)
    }

    /// Leaves a game that has not started yet.
    ///
    /// Once the game is active, use [`Game::forfeit`] instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has started or the player is not seated.
    pub fn leave(&mut self, player_id: u8) -> Result<(), SetupError> {
        if self.state != GameState::WaitingForPlayers {
            return Err(SetupError::InvalidState);
        }

        let seat = self
            .seat_of(player_id)
            .ok_or(SetupError::PlayerNotFound)?;
        self.players.remove(seat);
        Ok(())
    }

    /// Starts the game.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for players or nobody has
    /// joined.
    pub fn start(&mut self) -> Result<(), SetupError> {
        if self.state != GameState::WaitingForPlayers {
            return Err(SetupError::InvalidState);
        }

        if self.players.is_empty() {
            return Err(SetupError::NoPlayers);
        }

        self.current = 0;
        self.state = GameState::Active;
        tracing::info!(
            players = self.players.len(),
            mode = ?self.options.mode,
            "game started"
        );
        Ok(())
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the seated players in turn order.
    #[must_use]
    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the record for the specified player.
    #[must_use]
    pub fn player(&self, player_id: u8) -> Option<&PlayerRecord> {
        self.players.iter().find(|player| player.id == player_id)
    }

    /// Returns the specified player's turn.
    #[must_use]
    pub fn turn(&self, player_id: u8) -> Option<&Turn> {
        self.player(player_id).map(|player| &player.turn)
    }

    /// Returns the player ID whose turn it is.
    ///
    /// Only Standard games have a current player, and only while active.
    #[must_use]
    pub fn current_player(&self) -> Option<u8> {
        match (self.options.mode, self.state) {
            (GameMode::Standard { .. }, GameState::Active) => {
                self.players.get(self.current).map(|player| player.id)
            }
            _ => None,
        }
    }

    /// Returns the round the player is on (Ten-Round mode, 1-based).
    ///
    /// Returns `None` in Standard mode, for unknown players, and for players
    /// who are no longer playing.
    #[must_use]
    pub fn current_round(&self, player_id: u8) -> Option<u8> {
        if self.options.mode != GameMode::TenRound {
            return None;
        }

        self.player(player_id)
            .filter(|player| player.status == PlayerStatus::Active)
            .map(|player| player.rounds + 1)
    }

    /// Returns the final round marker, if a Standard player reached the target.
    #[must_use]
    pub const fn final_round(&self) -> Option<FinalRound> {
        self.final_round
    }

    /// Returns the outcome once the game has finished.
    #[must_use]
    pub const fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    fn seat_of(&self, player_id: u8) -> Option<usize> {
        self.players.iter().position(|player| player.id == player_id)
    }

    fn active_count(&self) -> usize {
        self.players
            .iter()
            .filter(|player| player.status == PlayerStatus::Active)
            .count()
    }

    /// Ends the game with `outcome`.
    fn finish(&mut self, outcome: GameOutcome, events: &mut Vec<GameEvent>) {
        for player in &mut self.players {
            if player.status == PlayerStatus::Active {
                player.status = PlayerStatus::Finished;
            }
        }

        tracing::info!(outcome = ?outcome, "game finished");
        self.state = GameState::Finished;
        self.outcome = Some(outcome.clone());
        events.push(GameEvent::GameFinished { outcome });
    }
}

/// Picks the top scorers among players who did not forfeit.
///
/// `rank` orders players with equal totals; players that still compare equal
/// share a draw.
fn decide<K: Ord>(players: &[PlayerRecord], rank: impl Fn(&PlayerRecord) -> K) -> GameOutcome {
    let contenders = players
        .iter()
        .filter(|player| player.status != PlayerStatus::Forfeited);

    let Some(best) = contenders.clone().map(&rank).max() else {
        return GameOutcome::NoContest;
    };

    let winners: Vec<u8> = contenders
        .filter(|player| rank(player) == best)
        .map(|player| player.id)
        .collect();

    match winners.as_slice() {
        [winner] => GameOutcome::Winner(*winner),
        _ => GameOutcome::Draw(winners),
    }
}
