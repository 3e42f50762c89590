//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - Entities kept oldest first
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use collision::{boxes_overlap, obstacle_hits_runner, orb_touches_runner};
pub use state::{
    EndReason, GameState, Obstacle, ObstacleKind, Orb, Runner, RunnerState, World,
};
pub use tick::{TickInput, check_collisions, move_runner, spawn_obstacles, spawn_orbs, tick};
