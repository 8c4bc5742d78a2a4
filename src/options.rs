//! Game configuration options.

/// Default target score for Standard games.
pub const DEFAULT_TARGET_SCORE: u32 = 10_000;
/// Default break-in score for Standard games.
pub const DEFAULT_BREAK_IN: u32 = 500;
/// Default seat limit.
pub const DEFAULT_MAX_PLAYERS: u8 = 8;

/// Game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameMode {
    /// Players alternate turns racing to a target score.
    Standard {
        /// Score that triggers the final round.
        target_score: u32,
        /// Minimum single-turn score for a player's first bank.
        break_in: u32,
    },
    /// Every player independently plays a fixed number of rounds.
    TenRound,
}

impl Default for GameMode {
    fn default() -> Self {
        Self::Standard {
            target_score: DEFAULT_TARGET_SCORE,
            break_in: DEFAULT_BREAK_IN,
        }
    }
}

/// How strictly a selection is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionPolicy {
    /// The selection only has to score as a whole.
    #[default]
    Lenient,
    /// Every selected die must contribute to the score.
    Strict,
}

/// Configuration options for a Farkle game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use farkle::{GameMode, GameOptions};
///
/// let options = GameOptions::standard()
///     .with_target_score(5_000)
///     .with_break_in(350)
///     .with_max_players(4);
///
/// assert_eq!(
///     options.mode,
///     GameMode::Standard { target_score: 5_000, break_in: 350 }
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOptions {
    /// Game mode and its thresholds.
    pub mode: GameMode,
    /// Selection policy.
    pub selection: SelectionPolicy,
    /// Maximum number of seats.
    pub max_players: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self::standard()
    }
}

impl GameOptions {
    /// Options for a Standard game with the default thresholds.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            mode: GameMode::Standard {
                target_score: DEFAULT_TARGET_SCORE,
                break_in: DEFAULT_BREAK_IN,
            },
            selection: SelectionPolicy::Lenient,
            max_players: DEFAULT_MAX_PLAYERS,
        }
    }

    /// Options for a Ten-Round game.
    #[must_use]
    pub const fn ten_round() -> Self {
        Self {
            mode: GameMode::TenRound,
            selection: SelectionPolicy::Lenient,
            max_players: DEFAULT_MAX_PLAYERS,
        }
    }

    /// Sets the target score. Has no effect in Ten-Round mode.
    ///
    /// # Example
    ///
    /// ```
    /// use farkle::{GameMode, GameOptions};
    ///
    /// let options = GameOptions::ten_round().with_target_score(5_000);
    /// assert_eq!(options.mode, GameMode::TenRound);
    /// ```
    #[must_use]
    pub const fn with_target_score(mut self, target: u32) -> Self {
        if let GameMode::Standard { break_in, .. } = self.mode {
            self.mode = GameMode::Standard {
                target_score: target,
                break_in,
            };
        }
        self
    }

    /// Sets the break-in score. Has no effect in Ten-Round mode.
    ///
    /// # Example
    ///
    /// ```
    /// use farkle::{GameMode, GameOptions};
    ///
    /// let options = GameOptions::standard().with_break_in(0);
    /// assert_eq!(options.break_in(), Some(0));
    /// ```
    #[must_use]
    pub const fn with_break_in(mut self, score: u32) -> Self {
        if let GameMode::Standard { target_score, .. } = self.mode {
            self.mode = GameMode::Standard {
                target_score,
                break_in: score,
            };
        }
        self
    }

    /// Sets the selection policy.
    ///
    /// # Example
    ///
    /// ```
    /// use farkle::{GameOptions, SelectionPolicy};
    ///
    /// let options = GameOptions::default().with_selection(SelectionPolicy::Strict);
    /// assert_eq!(options.selection, SelectionPolicy::Strict);
    /// ```
    #[must_use]
    pub const fn with_selection(mut self, policy: SelectionPolicy) -> Self {
        self.selection = policy;
        self
    }

    /// Sets the maximum number of seats.
    #[must_use]
    pub const fn with_max_players(mut self, max: u8) -> Self {
        self.max_players = max;
        self
    }

    /// Returns the target score, or `None` in Ten-Round mode.
    #[must_use]
    pub const fn target_score(&self) -> Option<u32> {
        match self.mode {
            GameMode::Standard { target_score, .. } => Some(target_score),
            GameMode::TenRound => None,
        }
    }

    /// Returns the break-in score, or `None` in Ten-Round mode.
    #[must_use]
    pub const fn break_in(&self) -> Option<u32> {
        match self.mode {
            GameMode::Standard { break_in, .. } => Some(break_in),
            GameMode::TenRound => None,
        }
    }
}
