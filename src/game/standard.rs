use alloc::vec::Vec;
use core::cmp::Reverse;

use crate::error::GameError;
use crate::result::{GameEvent, GameOutcome};

use super::{FinalRound, Game, PlayerStatus, decide};

impl Game {
    /// Banks `points` for the player at `seat` under Standard rules.
    pub(super) fn bank_standard(
        &mut self,
        seat: usize,
        points: u32,
        target_score: u32,
        break_in: u32,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), GameError> {
        let player = &mut self.players[seat];
        let player_id = player.id;

        if player.banked == 0 && points < break_in {
            player.turn.concede()?;
            tracing::debug!(player_id, points, break_in, "bank below break-in refused");
            events.push(GameEvent::BankRejected {
                player_id,
                points,
                break_in,
            });
            self.advance_turn(events);
            return Ok(());
        }

        player.turn.bank()?;
        player.banked += points;
        let total = player.banked;
        events.push(GameEvent::Banked {
            player_id,
            points,
            total,
        });

        if total >= target_score && player.reached_target.is_none() {
            self.reached_count += 1;
            player.reached_target = Some(self.reached_count);

            if self.final_round.is_none() {
                tracing::debug!(player_id, total, "target reached, final round");
                self.final_round = Some(FinalRound { player_id, seat });
                events.push(GameEvent::FinalRound { player_id });
            }
        }

        self.advance_turn(events);
        Ok(())
    }

    /// Passes the turn to the next active seat, or ends the game once play
    /// returns to the player who triggered the final round.
    pub(super) fn advance_turn(&mut self, events: &mut Vec<GameEvent>) {
        let ended = self.players[self.current].id;
        let count = self.players.len();

        let mut next = None;
        for step in 1..=count {
            let seat = (self.current + step) % count;
            if self.final_round.is_some_and(|round| round.seat == seat) {
                break;
            }
            if self.players[seat].status == PlayerStatus::Active {
                next = Some(seat);
                break;
            }
        }

        if let Some(seat) = next {
            self.current = seat;
            self.players[seat].turn = self.fresh_turn();
            events.push(GameEvent::TurnEnded {
                player_id: ended,
                next: Some(self.players[seat].id),
            });
        } else {
            events.push(GameEvent::TurnEnded {
                player_id: ended,
                next: None,
            });
            let outcome = self.standard_outcome();
            self.finish(outcome, events);
        }
    }

    /// Handles a Standard player forfeiting from `seat`.
    pub(super) fn forfeit_standard(&mut self, seat: usize, events: &mut Vec<GameEvent>) {
        let remaining = self.active_count();

        if remaining == 0 || (remaining == 1 && self.players.len() > 1) {
            let outcome = self.standard_outcome();
            self.finish(outcome, events);
        } else if seat == self.current {
            self.advance_turn(events);
        }
    }

    /// Highest total wins; equal totals go to whoever reached the target first.
    fn standard_outcome(&self) -> GameOutcome {
        decide(&self.players, |player| {
            (
                player.banked,
                Reverse(player.reached_target.unwrap_or(u32::MAX)),
            )
        })
    }
}
