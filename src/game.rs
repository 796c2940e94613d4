//! Round state machine: `Playing` <-> `GameOver`.
//!
//! All mutation goes through `guess`, `tick`, `set_difficulty` and `restart`.
//! The struct knows nothing about the DOM or the interval timer; the screen
//! module drives it and renders the [`Frame`] it produces. Randomness is
//! injected so tests can seed it.

use rand::Rng;

use crate::config::GameConfig;
use crate::logos::{Difficulty, LogoDeck, LogoEntry};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Score went up, a new logo is showing.
    Correct,
    Wrong { attempts_left: u32 },
    /// Wrong guess that used the last attempt.
    GameOver,
    /// Round already over.
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Running { time_left: u32 },
    /// Clock hit zero on this tick; the caller must stop the ticker.
    Expired,
    Ignored,
}

/// Everything the view needs for one paint.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "screen", rename_all = "snake_case"))]
pub enum Frame {
    Playing {
        score: u32,
        time_left: u32,
        attempts: u32,
        difficulty: Difficulty,
        logo: LogoEntry,
        choices: Vec<&'static str>,
    },
    GameOver {
        score: u32,
        high_score: u32,
    },
}

pub struct GameState<R: Rng> {
    config: GameConfig,
    deck: LogoDeck,
    rng: R,
    current_logo: &'static LogoEntry,
    score: u32,
    high_score: u32,
    attempts: u32,
    time_left: u32,
    difficulty: Difficulty,
    phase: Phase,
}

impl<R: Rng> GameState<R> {
    pub fn new(config: GameConfig, deck: LogoDeck, mut rng: R) -> Self {
        let difficulty = config.default_difficulty;
        let current_logo = deck.pick(difficulty, &mut rng);
        log::info!("round started on {} with '{}'", difficulty, current_logo.name);
        Self {
            score: 0,
            high_score: 0,
            attempts: config.starting_attempts,
            time_left: config.round_seconds,
            difficulty,
            phase: Phase::Playing,
            current_logo,
            config,
            deck,
            rng,
        }
    }

    pub fn guess(&mut self, name: &str) -> GuessOutcome {
        if self.phase == Phase::GameOver {
            return GuessOutcome::Ignored;
        }
        if name == self.current_logo.name {
            self.score += 1;
            log::debug!("correct guess '{}', score {}", name, self.score);
            self.select_logo();
            return GuessOutcome::Correct;
        }
        self.attempts = self.attempts.saturating_sub(1);
        log::debug!(
            "wrong guess '{}' (was '{}'), {} attempts left",
            name,
            self.current_logo.name,
            self.attempts
        );
        if self.attempts == 0 {
            self.end_round("out of attempts");
            GuessOutcome::GameOver
        } else {
            GuessOutcome::Wrong { attempts_left: self.attempts }
        }
    }

    /// One second of round time.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase == Phase::GameOver {
            return TickOutcome::Ignored;
        }
        if self.time_left <= 1 {
            self.time_left = 0;
            self.end_round("time expired");
            return TickOutcome::Expired;
        }
        self.time_left -= 1;
        log::trace!("tick, {}s left", self.time_left);
        TickOutcome::Running { time_left: self.time_left }
    }

    /// Returns false (and changes nothing) once the round is over.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }
        self.difficulty = difficulty;
        self.select_logo();
        log::info!("difficulty set to {}", difficulty);
        true
    }

    /// Fresh round on the current difficulty. High score carries over.
    pub fn restart(&mut self) {
        self.score = 0;
        self.attempts = self.config.starting_attempts;
        self.time_left = self.config.round_seconds;
        self.phase = Phase::Playing;
        self.select_logo();
        log::info!("round restarted on {}", self.difficulty);
    }

    pub fn frame(&self) -> Frame {
        match self.phase {
            Phase::GameOver => Frame::GameOver {
                score: self.score,
                high_score: self.high_score,
            },
            Phase::Playing => Frame::Playing {
                score: self.score,
                time_left: self.time_left,
                attempts: self.attempts,
                difficulty: self.difficulty,
                logo: *self.current_logo,
                choices: self.deck.names().collect(),
            },
        }
    }

    fn select_logo(&mut self) {
        self.current_logo = self.deck.pick(self.difficulty, &mut self.rng);
    }

    fn end_round(&mut self, reason: &str) {
        self.phase = Phase::GameOver;
        self.high_score = self.high_score.max(self.score);
        log::info!(
            "game over ({}): score {}, high score {}",
            reason,
            self.score,
            self.high_score
        );
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn current_logo(&self) -> &'static LogoEntry {
        self.current_logo
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
