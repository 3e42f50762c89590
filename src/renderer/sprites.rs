//! Sprite mapping for entities
//!
//! Visuals are derived from entity kind and keyed by entity id; the
//! simulation never stores anything about how it is drawn.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{Obstacle, ObstacleKind, Orb, Runner, RunnerState, World};
use crate::tuning::Tuning;

/// Rgba, 0-1
pub type Color = [f32; 4];

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

pub const RUNNER_COLOR: Color = rgb(34, 211, 238); // cyan
pub const LASER_COLOR: Color = rgb(239, 68, 68); // red
pub const DRONE_COLOR: Color = rgb(168, 85, 247); // purple
pub const ORB_COLOR: Color = rgb(250, 204, 21); // yellow

/// Which entity a sprite draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntityKey {
    Runner,
    Obstacle(u32),
    Orb(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Shape {
    RoundedRect,
    Circle,
}

/// One drawable
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sprite {
    pub key: EntityKey,
    /// Top-left corner (screen pixels)
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Color,
    pub shape: Shape,
}

pub fn runner_sprite(runner: &Runner, tuning: &Tuning) -> Sprite {
    let height = if runner.state == RunnerState::Sliding {
        tuning.runner_size / 2.0
    } else {
        tuning.runner_size
    };
    Sprite {
        key: EntityKey::Runner,
        pos: runner.pos,
        size: Vec2::new(tuning.runner_size, height),
        color: RUNNER_COLOR,
        shape: Shape::RoundedRect,
    }
}

pub fn obstacle_sprite(obstacle: &Obstacle, tuning: &Tuning) -> Sprite {
    let color = match obstacle.kind {
        ObstacleKind::Laser => LASER_COLOR,
        ObstacleKind::Drone => DRONE_COLOR,
    };
    Sprite {
        key: EntityKey::Obstacle(obstacle.id),
        pos: obstacle.pos,
        size: Vec2::splat(tuning.obstacle_size),
        color,
        shape: Shape::RoundedRect,
    }
}

pub fn orb_sprite(orb: &Orb, tuning: &Tuning) -> Sprite {
    Sprite {
        key: EntityKey::Orb(orb.id),
        pos: orb.pos,
        size: Vec2::splat(tuning.orb_size),
        color: ORB_COLOR,
        shape: Shape::Circle,
    }
}

/// Draw list for a world: obstacles, then orbs, runner on top
pub fn world_sprites(world: &World, tuning: &Tuning) -> Vec<Sprite> {
    let mut sprites = Vec::with_capacity(world.obstacles.len() + world.orbs.len() + 1);
    sprites.extend(world.obstacles.iter().map(|o| obstacle_sprite(o, tuning)));
    sprites.extend(world.orbs.iter().map(|o| orb_sprite(o, tuning)));
    sprites.push(runner_sprite(&world.runner, tuning));
    sprites
}
