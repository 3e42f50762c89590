//! Game state and core simulation types
//!
//! Entities hold simulation data only; anything visual is derived in
//! `renderer` from the entity kind.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Runner movement state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunnerState {
    /// On the ground, accepting swipes
    Running,
    /// Airborne under gravity
    Jumping,
    /// Ducking under lasers until `slide_ticks` runs out
    Sliding,
}

impl RunnerState {
    /// Whether `self -> next` is a legal transition
    pub fn can_become(self, next: RunnerState) -> bool {
        use RunnerState::*;
        matches!(
            (self, next),
            (Running, Jumping) | (Jumping, Running) | (Running, Sliding) | (Sliding, Running)
        ) || self == next
    }
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Runner {
    /// Top-left corner, y grows downward
    pub pos: Vec2,
    /// Vertical velocity (pixels/tick, negative is up)
    pub velocity: f32,
    pub state: RunnerState,
    /// Ticks left before a slide ends (0 unless sliding)
    pub slide_ticks: u32,
}

impl Runner {
    /// A fresh runner on the ground
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.runner_start_x(), tuning.ground_y()),
            velocity: 0.0,
            state: RunnerState::Running,
            slide_ticks: 0,
        }
    }

    /// Begin a jump (only from Running)
    pub fn jump(&mut self, velocity: f32) -> bool {
        if self.state != RunnerState::Running {
            return false;
        }
        self.velocity = velocity;
        self.state = RunnerState::Jumping;
        true
    }

    /// Begin a slide (only from Running)
    pub fn slide(&mut self, ticks: u32) -> bool {
        if self.state != RunnerState::Running {
            return false;
        }
        self.state = RunnerState::Sliding;
        self.slide_ticks = ticks;
        true
    }

    /// Count down an active slide, returning to Running when it expires
    pub fn update_slide(&mut self) {
        if self.state != RunnerState::Sliding {
            return;
        }
        self.slide_ticks = self.slide_ticks.saturating_sub(1);
        if self.slide_ticks == 0 {
            self.state = RunnerState::Running;
        }
    }

    /// Integrate one tick of jump physics, landing on `ground_y`
    pub fn update_jump(&mut self, gravity: f32, ground_y: f32) {
        if self.state != RunnerState::Jumping {
            return;
        }
        self.velocity += gravity;
        self.pos.y += self.velocity;
        if self.pos.y >= ground_y {
            self.pos.y = ground_y;
            self.velocity = 0.0;
            self.state = RunnerState::Running;
        }
    }
}

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Dodged by sliding or jumping
    Laser,
    /// Dodged by jumping only
    Drone,
}

/// A scrolling hazard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    pub pos: Vec2,
}

/// A bonus pickup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orb {
    pub id: u32,
    pub pos: Vec2,
}

/// The entity store for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub runner: Runner,
    /// Oldest first
    pub obstacles: Vec<Obstacle>,
    /// Oldest first
    pub orbs: Vec<Orb>,
    /// Next entity ID
    next_id: u32,
}

impl World {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            runner: Runner::new(tuning),
            obstacles: Vec::new(),
            orbs: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Runner touched an obstacle
    Hit { obstacle_id: u32, kind: ObstacleKind },
    /// Runner left the top of the screen
    OutOfBounds,
    /// Player gave up
    Abandoned,
}

/// Complete state of one play session (deterministic for a given seed)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub world: World,
    pub score: u64,
    /// Ticks simulated so far
    pub time_ticks: u64,
    /// Set on the tick the run ended
    pub ended: Option<EndReason>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self {
            seed,
            world: World::new(&tuning),
            tuning,
            score: 0,
            time_ticks: 0,
            ended: None,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn is_over(&self) -> bool {
        self.ended.is_some()
    }

    /// Record the first end condition; later ones in the same tick are ignored
    pub(crate) fn end(&mut self, reason: EndReason) {
        if self.ended.is_none() {
            self.ended = Some(reason);
        }
    }
}
