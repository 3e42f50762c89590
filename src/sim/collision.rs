//! Hit tests between the runner and scrolling entities
//!
//! All boxes are compared by their anchor points against the runner size,
//! so overlap means both axis distances are under `runner_size`.

use glam::Vec2;

use super::state::{ObstacleKind, Runner, RunnerState};

/// Axis-aligned overlap of two anchors within `size`
#[inline]
pub fn boxes_overlap(a: Vec2, b: Vec2, size: f32) -> bool {
    let d = (a - b).abs();
    d.x < size && d.y < size
}

/// Whether an obstacle hits the runner.
///
/// A sliding runner passes under lasers; every other pairing uses full
/// box overlap.
pub fn obstacle_hits_runner(runner: &Runner, kind: ObstacleKind, pos: Vec2, size: f32) -> bool {
    if runner.state == RunnerState::Sliding && kind == ObstacleKind::Laser {
        return false;
    }
    boxes_overlap(runner.pos, pos, size)
}

/// Whether the runner touches an orb
#[inline]
pub fn orb_touches_runner(runner: &Runner, pos: Vec2, size: f32) -> bool {
    boxes_overlap(runner.pos, pos, size)
}
