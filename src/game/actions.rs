use alloc::vec;
use alloc::vec::Vec;

use crate::dice::Selection;
use crate::error::GameError;
use crate::options::GameMode;
use crate::result::GameEvent;
use crate::source::DiceSource;

use super::{Game, GameState, PlayerStatus};

impl Game {
    /// Checks that `player_id` may act now and returns their seat.
    fn ensure_can_act(&self, player_id: u8) -> Result<usize, GameError> {
        if self.state != GameState::Active {
            return Err(GameError::InvalidState);
        }

        let seat = self.seat_of(player_id).ok_or(GameError::PlayerNotFound)?;

        match self.players[seat].status {
            PlayerStatus::Active => {}
            PlayerStatus::Forfeited => return Err(GameError::Forfeited),
            PlayerStatus::Finished => return Err(GameError::RoundsComplete),
        }

        if matches!(self.options.mode, GameMode::Standard { .. }) && seat != self.current {
            return Err(GameError::NotYourTurn);
        }

        Ok(seat)
    }

    /// Wraps up a turn that has just ended.
    fn end_turn(&mut self, seat: usize, events: &mut Vec<GameEvent>) {
        match self.options.mode {
            GameMode::Standard { .. } => self.advance_turn(events),
            GameMode::TenRound => self.complete_round(seat, events),
        }
    }

    /// Player action: roll the dice that are not held.
    ///
    /// A roll with nothing scoring farkles and ends the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not active, the player may not act now,
    /// the previous roll still needs a selection, or the dice source fails.
    ///
    /// # Example
    ///
    /// ```
    /// use farkle::{Game, GameEvent, GameOptions, ScriptedDice};
    ///
    /// let mut game = Game::new(GameOptions::ten_round());
    /// let player = game.join().unwrap();
    /// game.start().unwrap();
    ///
    /// let mut dice = ScriptedDice::from_values(&[[2, 3, 4, 6, 2, 3]]).unwrap();
    /// let events = game.roll(player, &mut dice).unwrap();
    /// assert!(matches!(events[1], GameEvent::Farkled { lost: 0, .. }));
    /// assert_eq!(game.player(player).unwrap().rounds, 1);
    /// ```
    pub fn roll<D: DiceSource + ?Sized>(
        &mut self,
        player_id: u8,
        dice: &mut D,
    ) -> Result<Vec<GameEvent>, GameError> {
        let seat = self.ensure_can_act(player_id)?;

        let turn = &mut self.players[seat].turn;
        let before = turn.score();
        let roll = turn.roll(dice)?;
        let farkled = turn.is_farkled();

        let mut events = vec![GameEvent::Rolled { player_id, roll }];

        if farkled {
            events.push(GameEvent::Farkled {
                player_id,
                lost: before,
            });
            self.end_turn(seat, &mut events);
        }

        Ok(events)
    }

    /// Player action: set aside a scoring selection from the table.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not active, the player may not act now,
    /// the dice have not been rolled, or the selection is illegal.
    pub fn select(
        &mut self,
        player_id: u8,
        selection: &Selection,
    ) -> Result<Vec<GameEvent>, GameError> {
        let seat = self.ensure_can_act(player_id)?;

        let turn = &mut self.players[seat].turn;
        let points = turn.select(selection)?;

        Ok(vec![GameEvent::Selected {
            player_id,
            points,
            turn_score: turn.score(),
        }])
    }

    /// Player action: bank the turn score and end the turn.
    ///
    /// In Standard mode a player who has not broken in yet must bank at least
    /// the break-in score; a smaller bank is refused, its score discarded, and
    /// the turn passes on. This is reported as [`GameEvent::BankRejected`]
    /// because the turn does end.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not active, the player may not act now,
    /// or the turn has nothing to bank.
    pub fn bank(&mut self, player_id: u8) -> Result<Vec<GameEvent>, GameError> {
        let seat = self.ensure_can_act(player_id)?;
        let points = self.players[seat].turn.bankable()?;

        let mut events = Vec::new();
        match self.options.mode {
            GameMode::Standard {
                target_score,
                break_in,
            } => self.bank_standard(seat, points, target_score, break_in, &mut events)?,
            GameMode::TenRound => self.bank_ten_round(seat, &mut events)?,
        }

        Ok(events)
    }

    /// Ends the player's turn as a farkle.
    ///
    /// Intended for the host, e.g. after a turn timed out.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not active or the player may not act now.
    pub fn concede_turn(&mut self, player_id: u8) -> Result<Vec<GameEvent>, GameError> {
        let seat = self.ensure_can_act(player_id)?;
        let lost = self.players[seat].turn.concede()?;

        let mut events = vec![GameEvent::Farkled { player_id, lost }];
        self.end_turn(seat, &mut events);
        Ok(events)
    }

    /// Forfeits the game for the specified player.
    ///
    /// The player takes no further part and cannot win. In Standard mode the
    /// last player left standing wins.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not active, the player is not seated,
    /// or the player is no longer playing.
    pub fn forfeit(&mut self, player_id: u8) -> Result<Vec<GameEvent>, GameError> {
        if self.state != GameState::Active {
            return Err(GameError::InvalidState);
        }

        let seat = self.seat_of(player_id).ok_or(GameError::PlayerNotFound)?;
        match self.players[seat].status {
            PlayerStatus::Active => {}
            PlayerStatus::Forfeited => return Err(GameError::Forfeited),
            PlayerStatus::Finished => return Err(GameError::RoundsComplete),
        }

        self.players[seat].status = PlayerStatus::Forfeited;
        self.players[seat].turn = self.fresh_turn();
        tracing::debug!(player_id, "player forfeited");

        let mut events = vec![GameEvent::Forfeited { player_id }];
        match self.options.mode {
            GameMode::Standard { .. } => self.forfeit_standard(seat, &mut events),
            GameMode::TenRound => self.finish_if_all_done(&mut events),
        }

        Ok(events)
    }
}
