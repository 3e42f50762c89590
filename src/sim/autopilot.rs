//! Demo-mode player
//!
//! Reads the session and picks the swipe a sensible player would make:
//! jump drones, slide under lasers.

use super::state::{GameState, ObstacleKind, RunnerState};
use super::tick::TickInput;

/// Swipe distance the autopilot reports
const SWIPE: f32 = 100.0;

/// React when the next obstacle is this far ahead (anchor to anchor)
const REACT_MIN: f32 = 40.0;
const REACT_MAX: f32 = 70.0;

/// Input for the next tick
pub fn autopilot(state: &GameState) -> TickInput {
    let runner = &state.world.runner;
    if runner.state != RunnerState::Running {
        return TickInput::default();
    }

    let next = state
        .world
        .obstacles
        .iter()
        .map(|o| (o.pos.x - runner.pos.x, o.kind))
        .filter(|&(dx, _)| dx > 0.0)
        .min_by(|a, b| a.0.total_cmp(&b.0));

    match next {
        Some((dx, kind)) if dx > REACT_MIN && dx <= REACT_MAX => match kind {
            ObstacleKind::Drone => TickInput::swipe(-SWIPE),
            ObstacleKind::Laser => TickInput::swipe(SWIPE),
        },
        _ => TickInput::default(),
    }
}
