//! Fixed timestep simulation tick
//!
//! One tick runs the four systems in a fixed order:
//! `move_runner`, `spawn_obstacles`, `spawn_orbs`, `check_collisions`.

use rand::Rng;

use super::collision::{obstacle_hits_runner, orb_touches_runner};
use super::state::{EndReason, GameState, Obstacle, ObstacleKind, Orb, RunnerState, World};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Vertical drag distance of the latest swipe (negative is up)
    pub swipe_y: Option<f32>,
}

impl TickInput {
    pub fn swipe(translation_y: f32) -> Self {
        Self {
            swipe_y: Some(translation_y),
        }
    }
}

/// Advance the session by one tick.
///
/// Returns the end reason if the run is over (including runs that ended on
/// an earlier tick, which are not advanced further).
pub fn tick(state: &mut GameState, input: &TickInput) -> Option<EndReason> {
    if state.is_over() {
        return state.ended;
    }

    state.time_ticks += 1;

    move_runner(state, input);
    spawn_obstacles(state);
    spawn_orbs(state);
    check_collisions(state);

    if let Some(reason) = state.ended {
        log::info!(
            "Run ended after {} ticks with score {}: {:?}",
            state.time_ticks,
            state.score,
            reason
        );
    }
    state.ended
}

/// Apply the swipe (if any), then runner physics.
///
/// A tick that starts a jump or slide does not also integrate it, so the
/// jump velocity and slide countdown are observed untouched afterwards.
pub fn move_runner(state: &mut GameState, input: &TickInput) {
    let tuning = &state.tuning;
    let runner = &mut state.world.runner;

    let started = match input.swipe_y {
        Some(dy) if dy < -tuning.swipe_threshold => runner.jump(tuning.jump_velocity),
        Some(dy) if dy > tuning.swipe_threshold => runner.slide(tuning.slide_ticks),
        _ => false,
    };

    if !started {
        match runner.state {
            RunnerState::Jumping => runner.update_jump(tuning.gravity, tuning.ground_y()),
            RunnerState::Sliding => runner.update_slide(),
            RunnerState::Running => {}
        }
    }

    // Above the top edge. Unreachable with default tuning (apex is 120px
    // above ground) but kept as a loss rule.
    if runner.pos.y < 0.0 {
        state.end(EndReason::OutOfBounds);
    }
}

/// Spawn an obstacle on cadence, scroll all obstacles, drop off-screen ones
pub fn spawn_obstacles(state: &mut GameState) {
    if cadence_due(state.time_ticks, state.tuning.obstacle_cadence) {
        let kind = if state.rng.random_bool(0.5) {
            ObstacleKind::Laser
        } else {
            ObstacleKind::Drone
        };
        let id = state.world.next_entity_id();
        state.world.obstacles.push(Obstacle {
            id,
            kind,
            pos: glam::Vec2::new(state.tuning.screen_width, state.tuning.ground_y()),
        });
    }

    let speed = state.tuning.scroll_speed;
    let limit = -state.tuning.obstacle_size;
    for obstacle in &mut state.world.obstacles {
        obstacle.pos.x -= speed;
    }
    state.world.obstacles.retain(|o| o.pos.x > limit);
}

/// Spawn an orb on cadence, scroll all orbs, drop off-screen ones
pub fn spawn_orbs(state: &mut GameState) {
    if cadence_due(state.time_ticks, state.tuning.orb_cadence) {
        let y = state.tuning.orb_band_top + state.rng.random::<f32>() * state.tuning.orb_band_height();
        let id = state.world.next_entity_id();
        state.world.orbs.push(Orb {
            id,
            pos: glam::Vec2::new(state.tuning.screen_width, y),
        });
    }

    let speed = state.tuning.scroll_speed;
    let limit = -state.tuning.orb_size;
    for orb in &mut state.world.orbs {
        orb.pos.x -= speed;
    }
    state.world.orbs.retain(|o| o.pos.x > limit);
}

/// Resolve obstacle hits and orb pickups, then award the per-tick score.
///
/// The per-tick increment is granted even on the tick the run ends.
pub fn check_collisions(state: &mut GameState) {
    let size = state.tuning.runner_size;
    let world: &mut World = &mut state.world;
    let runner = &world.runner;

    let hit = world
        .obstacles
        .iter()
        .find(|o| obstacle_hits_runner(runner, o.kind, o.pos, size))
        .map(|o| EndReason::Hit {
            obstacle_id: o.id,
            kind: o.kind,
        });

    let before = world.orbs.len();
    world
        .orbs
        .retain(|orb| !orb_touches_runner(runner, orb.pos, size));
    let collected = (before - world.orbs.len()) as u64;

    if let Some(reason) = hit {
        state.end(reason);
    }
    if collected > 0 {
        log::debug!("Collected {} orb(s)", collected);
    }
    state.score += collected * state.tuning.orb_bonus;
    state.score += state.tuning.score_per_tick;
}

#[inline]
fn cadence_due(ticks: u64, cadence: u64) -> bool {
    cadence > 0 && ticks % cadence == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::tuning::Tuning;
    use glam::Vec2;
    use proptest::prelude::*;

    fn new_state() -> GameState {
        GameState::new(Tuning::default(), 12345)
    }

    #[test]
    fn test_idle_fifty_ticks() {
        let mut state = new_state();
        for _ in 0..50 {
            assert_eq!(tick(&mut state, &TickInput::default()), None);
        }
        assert_eq!(state.score, 50 * SCORE_PER_TICK);
        assert_eq!(state.world.runner.state, RunnerState::Running);
        assert!(state.world.obstacles.is_empty());
        assert!(state.world.orbs.is_empty());
    }

    #[test]
    fn test_jump_arc_returns_to_ground() {
        let mut state = new_state();
        let ground = state.tuning.ground_y();

        tick(&mut state, &TickInput::swipe(-80.0));
        assert_eq!(state.world.runner.state, RunnerState::Jumping);
        assert_eq!(state.world.runner.velocity, JUMP_VELOCITY);

        let mut airborne = 0;
        while state.world.runner.state == RunnerState::Jumping {
            tick(&mut state, &TickInput::default());
            airborne += 1;
            assert!(state.world.runner.pos.y <= ground);
            assert!(airborne < 100, "runner never landed");
        }

        // 20 ticks up, 20 down (with float slack)
        assert!((39..=40).contains(&airborne), "airborne {airborne}");
        assert_eq!(state.world.runner.state, RunnerState::Running);
        assert_eq!(state.world.runner.pos.y, ground);
        assert_eq!(state.world.runner.velocity, 0.0);
    }

    #[test]
    fn test_small_swipe_ignored() {
        let mut state = new_state();
        tick(&mut state, &TickInput::swipe(-50.0));
        tick(&mut state, &TickInput::swipe(50.0));
        assert_eq!(state.world.runner.state, RunnerState::Running);
    }

    #[test]
    fn test_slide_lasts_slide_ticks() {
        let mut state = new_state();
        tick(&mut state, &TickInput::swipe(120.0));
        assert_eq!(state.world.runner.state, RunnerState::Sliding);
        assert_eq!(state.world.runner.slide_ticks, SLIDE_TICKS);

        // Swipe up mid-slide does nothing
        tick(&mut state, &TickInput::swipe(-120.0));
        assert_eq!(state.world.runner.state, RunnerState::Sliding);

        for _ in 1..SLIDE_TICKS - 1 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.world.runner.state, RunnerState::Sliding);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.world.runner.state, RunnerState::Running);
    }

    #[test]
    fn test_obstacle_spawns_on_cadence_and_scrolls_off() {
        let mut state = new_state();
        state.time_ticks = OBSTACLE_CADENCE - 1;

        state.time_ticks += 1;
        spawn_obstacles(&mut state);
        assert_eq!(state.world.obstacles.len(), 1);
        let id = state.world.obstacles[0].id;
        let mut last_x = state.world.obstacles[0].pos.x;
        assert_eq!(last_x, SCREEN_WIDTH - SCROLL_SPEED);
        assert_eq!(state.world.obstacles[0].pos.y, state.tuning.ground_y());

        loop {
            state.time_ticks += 1;
            spawn_obstacles(&mut state);
            match state.world.obstacles.iter().find(|o| o.id == id) {
                Some(o) => {
                    assert_eq!(o.pos.x, last_x - SCROLL_SPEED);
                    assert!(o.pos.x > -OBSTACLE_SIZE);
                    last_x = o.pos.x;
                }
                None => {
                    // Removed exactly when the next step crosses the threshold
                    assert!(last_x - SCROLL_SPEED <= -OBSTACLE_SIZE);
                    break;
                }
            }
        }
    }

    #[test]
    fn test_entities_stay_oldest_first() {
        let mut state = new_state();
        for _ in 0..(ORB_CADENCE * 4) {
            state.time_ticks += 1;
            spawn_obstacles(&mut state);
            spawn_orbs(&mut state);
        }
        assert!(state.world.obstacles.len() > 1);
        assert!(state.world.obstacles.windows(2).all(|w| w[0].pos.x < w[1].pos.x && w[0].id < w[1].id));
        assert!(state.world.orbs.windows(2).all(|w| w[0].pos.x < w[1].pos.x && w[0].id < w[1].id));

        let band = ORB_BAND_TOP..(SCREEN_HEIGHT - ORB_BAND_BOTTOM);
        assert!(state.world.orbs.iter().all(|o| band.contains(&o.pos.y)));
    }

    fn place_obstacle(state: &mut GameState, kind: ObstacleKind) {
        let id = state.world.next_entity_id();
        // Lands on the runner after this tick's scroll
        let pos = state.world.runner.pos + Vec2::new(SCROLL_SPEED, 0.0);
        state.world.obstacles.push(Obstacle { id, kind, pos });
    }

    #[test]
    fn test_sliding_passes_under_laser() {
        let mut state = new_state();
        tick(&mut state, &TickInput::swipe(100.0));
        place_obstacle(&mut state, ObstacleKind::Laser);
        assert_eq!(tick(&mut state, &TickInput::default()), None);
    }

    #[test]
    fn test_sliding_into_drone_ends_run() {
        let mut state = new_state();
        tick(&mut state, &TickInput::swipe(100.0));
        place_obstacle(&mut state, ObstacleKind::Drone);
        let score_before = state.score;

        let ended = tick(&mut state, &TickInput::default());
        assert!(matches!(
            ended,
            Some(EndReason::Hit {
                kind: ObstacleKind::Drone,
                ..
            })
        ));
        // Death tick still pays the per-tick score
        assert_eq!(state.score, score_before + SCORE_PER_TICK);

        // Ended sessions do not advance
        let ticks = state.time_ticks;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_running_into_laser_ends_run() {
        let mut state = new_state();
        place_obstacle(&mut state, ObstacleKind::Laser);
        assert!(tick(&mut state, &TickInput::default()).is_some());
    }

    #[test]
    fn test_orb_collection() {
        let mut state = new_state();
        let near = state.world.runner.pos + Vec2::new(SCROLL_SPEED, 0.0);
        let far = Vec2::new(SCREEN_WIDTH - 10.0, 100.0);
        let a = state.world.next_entity_id();
        let b = state.world.next_entity_id();
        state.world.orbs.push(Orb { id: a, pos: near });
        state.world.orbs.push(Orb { id: b, pos: far });

        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, ORB_BONUS + SCORE_PER_TICK);
        assert_eq!(state.world.orbs.len(), 1);
        assert_eq!(state.world.orbs[0].id, b);
    }

    #[test]
    fn test_every_orb_in_tick_pays() {
        let mut state = new_state();
        for dx in [0.0, 5.0, 10.0] {
            let id = state.world.next_entity_id();
            let pos = state.world.runner.pos + Vec2::new(dx, 0.0);
            state.world.orbs.push(Orb { id, pos });
        }
        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 3 * ORB_BONUS + SCORE_PER_TICK);
        assert!(state.world.orbs.is_empty());
    }

    #[test]
    fn test_out_of_bounds_on_short_screen() {
        // Ground at y=100: a full jump rises 120px and leaves the screen
        let tuning = Tuning::for_screen(SCREEN_WIDTH, 200.0);
        let mut state = GameState::new(tuning, 1);
        tick(&mut state, &TickInput::swipe(-100.0));

        let mut ended = None;
        for _ in 0..40 {
            ended = tick(&mut state, &TickInput::default());
            if ended.is_some() {
                break;
            }
        }
        assert_eq!(ended, Some(EndReason::OutOfBounds));
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(Tuning::default(), 99999);
        let mut state2 = GameState::new(Tuning::default(), 99999);

        for i in 0..400u32 {
            let input = if i % 45 == 0 {
                TickInput::swipe(-90.0)
            } else {
                TickInput::default()
            };
            tick(&mut state1, &input);
            tick(&mut state2, &input);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.world, state2.world);
        assert_eq!(state1.ended, state2.ended);
    }

    proptest! {
        #[test]
        fn prop_runner_transitions_follow_allowed_edges(
            swipes in prop::collection::vec(prop::option::of(-200.0f32..200.0), 1..300)
        ) {
            // No spawns so the run never ends early
            let tuning = Tuning { obstacle_cadence: 0, orb_cadence: 0, ..Tuning::default() };
            let mut state = GameState::new(tuning, 7);
            let mut prev = state.world.runner.state;

            for swipe_y in swipes {
                tick(&mut state, &TickInput { swipe_y });
                let next = state.world.runner.state;
                prop_assert!(prev.can_become(next), "{:?} -> {:?}", prev, next);
                prop_assert!(state.world.runner.pos.y <= state.tuning.ground_y());
                prev = next;
            }
        }

        #[test]
        fn prop_scrolling_moves_by_speed(start in 0u64..500, steps in 1usize..200) {
            let mut state = GameState::new(Tuning::default(), start);
            state.time_ticks = start;
            for _ in 0..steps {
                let before: Vec<(u32, f32)> =
                    state.world.orbs.iter().map(|o| (o.id, o.pos.x)).collect();
                state.time_ticks += 1;
                spawn_orbs(&mut state);
                for (id, x) in before {
                    match state.world.orbs.iter().find(|o| o.id == id) {
                        Some(o) => prop_assert_eq!(o.pos.x, x - SCROLL_SPEED),
                        None => prop_assert!(x - SCROLL_SPEED <= -ORB_SIZE),
                    }
                }
            }
        }
    }
}
