use alloc::vec::Vec;

use crate::error::GameError;
use crate::result::GameEvent;

use super::{Game, PlayerStatus, TEN_ROUND_ROUNDS, decide};

impl Game {
    /// Banks the turn score of the player at `seat` as their round score.
    pub(super) fn bank_ten_round(
        &mut self,
        seat: usize,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), GameError> {
        let player = &mut self.players[seat];
        let points = player.turn.bank()?;
        player.banked += points;

        events.push(GameEvent::Banked {
            player_id: player.id,
            points,
            total: player.banked,
        });

        self.complete_round(seat, events);
        Ok(())
    }

    /// Closes the round of the player at `seat` and deals them a new turn.
    pub(super) fn complete_round(&mut self, seat: usize, events: &mut Vec<GameEvent>) {
        let turn = self.fresh_turn();
        let player = &mut self.players[seat];
        player.rounds += 1;
        player.turn = turn;

        let player_id = player.id;
        let round = player.rounds;
        tracing::debug!(player_id, round, total = player.banked, "round completed");
        events.push(GameEvent::RoundCompleted {
            player_id,
            round,
            total: player.banked,
        });

        if round >= TEN_ROUND_ROUNDS {
            player.status = PlayerStatus::Finished;
        }

        events.push(GameEvent::TurnEnded {
            player_id,
            next: None,
        });

        self.finish_if_all_done(events);
    }

    /// Ends a Ten-Round game once no player is still playing.
    ///
    /// Equal top totals are a draw.
    pub(super) fn finish_if_all_done(&mut self, events: &mut Vec<GameEvent>) {
        if self.active_count() > 0 {
            return;
        }

        let outcome = decide(&self.players, |player| player.banked);
        self.finish(outcome, events);
    }
}
