//! Cyber Dash - A single-screen arcade runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (runner physics, spawning, collisions)
//! - `app`: Screen state machine gating the simulation
//! - `highscores`: Top-5 leaderboard persisted through `persistence`
//! - `persistence`: Key-value storage adapters (memory, file, LocalStorage)
//! - `platform`: Frame clock and gesture input
//! - `renderer`: Read-only snapshot and sprite mapping for a front end
//! - `tuning`: Data-driven game balance
//! - `web`: JS bindings (wasm32 only)

pub mod app;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use app::{App, Notice, Screen};
pub use highscores::{HighScores, ScoreLedger};
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Simulation rate: one tick per rendered frame at 60 Hz
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICKS_PER_SECOND as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default screen dimensions (portrait phone)
    pub const SCREEN_WIDTH: f32 = 390.0;
    pub const SCREEN_HEIGHT: f32 = 844.0;
    /// Ground sits this far above the bottom edge
    pub const GROUND_OFFSET: f32 = 100.0;

    /// Entity sizes (pixels)
    pub const RUNNER_SIZE: f32 = 40.0;
    pub const OBSTACLE_SIZE: f32 = 50.0;
    pub const ORB_SIZE: f32 = 20.0;

    /// Leftward scroll per tick (pixels)
    pub const SCROLL_SPEED: f32 = 4.0;

    /// Jump launch velocity (negative is up)
    pub const JUMP_VELOCITY: f32 = -12.0;
    /// Downward acceleration per tick while airborne
    pub const GRAVITY: f32 = 0.6;

    /// Vertical drag distance that counts as a swipe
    pub const SWIPE_THRESHOLD: f32 = 50.0;
    /// Slide duration (500 ms)
    pub const SLIDE_TICKS: u32 = 30;

    /// Ticks between obstacle spawns (1.2 s)
    pub const OBSTACLE_CADENCE: u64 = 72;
    /// Ticks between orb spawns (1.8 s)
    pub const ORB_CADENCE: u64 = 108;

    /// Orbs spawn in [ORB_BAND_TOP, height - ORB_BAND_BOTTOM)
    pub const ORB_BAND_TOP: f32 = 50.0;
    pub const ORB_BAND_BOTTOM: f32 = 150.0;

    /// Score per orb collected
    pub const ORB_BONUS: u64 = 20;
    /// Score per tick survived
    pub const SCORE_PER_TICK: u64 = 1;
}
