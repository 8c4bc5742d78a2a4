//! Game state types.

/// Game state.
///
/// Transitions only move forward: `WaitingForPlayers -> Active -> Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    /// Waiting for players to join.
    WaitingForPlayers,
    /// Players are taking turns.
    Active,
    /// The game is over.
    Finished,
}

/// Player status within a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerStatus {
    /// Still playing.
    Active,
    /// Left the game; takes no further part.
    Forfeited,
    /// Done playing: all rounds completed, or the game ended.
    Finished,
}

/// The final round of a Standard game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FinalRound {
    /// Player who first reached the target score.
    pub player_id: u8,
    /// Seat index of that player; the game ends when play returns here.
    pub seat: usize,
}
