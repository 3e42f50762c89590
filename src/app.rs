//! Screen controller
//!
//! Owns the leaderboard, the current session and the screen state machine:
//!
//! ```text
//! Menu --start--> Playing --run ends--> GameOver --start--> Playing
//!  ^  \                                    |
//!  |   show_high_scores                    back_to_menu
//!  |        v                              v
//!  +--- HighScores <-back_to_menu--      Menu
//! ```
//!
//! Only `Playing` advances the simulation.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::highscores::{HighScores, ScoreLedger};
use crate::persistence::Storage;
use crate::platform::{FrameClock, Gesture, GestureBuffer};
use crate::renderer::Snapshot;
use crate::sim::{EndReason, GameState, autopilot, tick};
use crate::tuning::Tuning;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Menu,
    Playing,
    GameOver,
    HighScores,
}

/// A message for the player (e.g. after resetting scores)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

/// Outcome of the last finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub score: u64,
    /// Leaderboard rank, if the score made the board
    pub rank: Option<usize>,
    pub reason: EndReason,
}

/// Top-level game controller
pub struct App {
    screen: Screen,
    tuning: Tuning,
    ledger: ScoreLedger,
    session: Option<GameState>,
    gestures: GestureBuffer,
    clock: FrameClock,
    last_run: Option<RunSummary>,
    /// Demo mode: the autopilot plays instead of gestures
    autopilot: bool,
}

impl App {
    /// Build the app on a storage backend, loading tuning and high scores
    pub fn new(storage: Box<dyn Storage>) -> Self {
        let tuning = Tuning::load(&*storage);
        Self::with_tuning(storage, tuning)
    }

    /// Build the app with explicit tuning (high scores still loaded)
    pub fn with_tuning(storage: Box<dyn Storage>, tuning: Tuning) -> Self {
        Self {
            screen: Screen::Menu,
            tuning,
            ledger: ScoreLedger::open(storage),
            session: None,
            gestures: GestureBuffer::default(),
            clock: FrameClock::new(),
            last_run: None,
            autopilot: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Current (or just finished) session
    pub fn session(&self) -> Option<&GameState> {
        self.session.as_ref()
    }

    /// Score of the current (or just finished) run
    pub fn score(&self) -> u64 {
        self.session.as_ref().map(|s| s.score).unwrap_or(0)
    }

    pub fn high_scores(&self) -> &HighScores {
        self.ledger.scores()
    }

    pub fn last_run(&self) -> Option<&RunSummary> {
        self.last_run.as_ref()
    }

    /// Enable demo mode
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
    }

    /// Start a fresh run from the menu or the game-over screen.
    ///
    /// The previous runner is dropped wholesale, so nothing from the old
    /// run (slide countdown included) can touch the new one.
    pub fn start_game(&mut self) -> bool {
        if !matches!(self.screen, Screen::Menu | Screen::GameOver) {
            log::debug!("Ignoring start from {:?}", self.screen);
            return false;
        }

        let seed = self
            .tuning
            .seed
            .unwrap_or_else(|| Utc::now().timestamp_millis() as u64);
        self.session = Some(GameState::new(self.tuning.clone(), seed));
        self.gestures.clear();
        self.clock.reset();
        self.last_run = None;
        self.screen = Screen::Playing;
        log::info!("Started new game with seed: {}", seed);
        true
    }

    /// Open the leaderboard from the menu
    pub fn show_high_scores(&mut self) -> bool {
        if self.screen != Screen::Menu {
            log::debug!("Ignoring high scores from {:?}", self.screen);
            return false;
        }
        self.screen = Screen::HighScores;
        true
    }

    /// Return to the menu from the leaderboard or game-over screen
    pub fn back_to_menu(&mut self) -> bool {
        if !matches!(self.screen, Screen::GameOver | Screen::HighScores) {
            log::debug!("Ignoring back to menu from {:?}", self.screen);
            return false;
        }
        self.screen = Screen::Menu;
        true
    }

    /// Clear the leaderboard; the notice reports the outcome
    pub fn reset_scores(&mut self) -> Notice {
        match self.ledger.reset() {
            Ok(()) => Notice {
                title: "Success".to_string(),
                message: "High scores cleared!".to_string(),
                is_error: false,
            },
            Err(e) => Notice {
                title: "Error".to_string(),
                message: format!("Could not clear high scores: {}", e),
                is_error: true,
            },
        }
    }

    /// Queue a pan gesture for the next tick (ignored outside play)
    pub fn gesture(&mut self, gesture: Gesture) {
        if self.screen == Screen::Playing {
            self.gestures.push(gesture);
        }
    }

    /// Run exactly one tick (one rendered frame). Returns whether a tick ran.
    pub fn tick_frame(&mut self) -> bool {
        if self.screen != Screen::Playing {
            return false;
        }
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        let input = if self.autopilot {
            self.gestures.clear();
            autopilot(session)
        } else {
            self.gestures.take()
        };
        if let Some(reason) = tick(session, &input) {
            self.finish_run(reason);
        }
        true
    }

    /// Run as many ticks as `dt` seconds of real time cover. Returns the
    /// number of ticks run.
    pub fn update(&mut self, dt: f32) -> u32 {
        if self.screen != Screen::Playing {
            return 0;
        }

        let due = self.clock.advance(dt);
        let mut ran = 0;
        for _ in 0..due {
            if !self.tick_frame() {
                break;
            }
            ran += 1;
        }
        ran
    }

    /// Give up the current run; it is scored like any other ending
    pub fn end_run(&mut self) -> bool {
        if self.screen != Screen::Playing {
            return false;
        }
        if let Some(session) = self.session.as_mut() {
            session.end(EndReason::Abandoned);
        }
        self.finish_run(EndReason::Abandoned);
        true
    }

    /// Read-only view for the front end
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(
            self.screen,
            self.score(),
            self.last_run.and_then(|r| r.rank),
            self.session.as_ref().map(|s| &s.world),
            &self.tuning,
            self.ledger.scores(),
        )
    }

    fn finish_run(&mut self, reason: EndReason) {
        let score = self.score();
        let rank = self.ledger.record(score, Utc::now());
        self.last_run = Some(RunSummary {
            score,
            rank,
            reason,
        });
        self.gestures.clear();
        self.screen = Screen::GameOver;
        log::info!("Game over: score {} ({:?}), rank {:?}", score, reason, rank);
    }
}
