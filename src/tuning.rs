//! Game balance and layout parameters
//!
//! Persisted separately from the leaderboard under its own storage key.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::persistence::Storage;

/// Tunable gameplay values. Every field falls back to its default when
/// missing from the stored JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Layout ===
    /// Visible area width (pixels)
    pub screen_width: f32,
    /// Visible area height (pixels)
    pub screen_height: f32,
    /// Distance from the bottom edge to ground level
    pub ground_offset: f32,

    // === Entities ===
    pub runner_size: f32,
    pub obstacle_size: f32,
    pub orb_size: f32,
    /// Leftward scroll per tick
    pub scroll_speed: f32,

    // === Runner physics ===
    pub jump_velocity: f32,
    pub gravity: f32,
    pub swipe_threshold: f32,
    pub slide_ticks: u32,

    // === Spawning ===
    pub obstacle_cadence: u64,
    pub orb_cadence: u64,
    pub orb_band_top: f32,
    pub orb_band_bottom: f32,

    // === Scoring ===
    pub orb_bonus: u64,
    pub score_per_tick: u64,

    /// Fixed RNG seed; `None` seeds each session from the clock
    pub seed: Option<u64>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground_offset: GROUND_OFFSET,

            runner_size: RUNNER_SIZE,
            obstacle_size: OBSTACLE_SIZE,
            orb_size: ORB_SIZE,
            scroll_speed: SCROLL_SPEED,

            jump_velocity: JUMP_VELOCITY,
            gravity: GRAVITY,
            swipe_threshold: SWIPE_THRESHOLD,
            slide_ticks: SLIDE_TICKS,

            obstacle_cadence: OBSTACLE_CADENCE,
            orb_cadence: ORB_CADENCE,
            orb_band_top: ORB_BAND_TOP,
            orb_band_bottom: ORB_BAND_BOTTOM,

            orb_bonus: ORB_BONUS,
            score_per_tick: SCORE_PER_TICK,

            seed: None,
        }
    }
}

impl Tuning {
    /// Storage key
    const STORAGE_KEY: &'static str = "tuning";

    /// Tuning for a given screen size
    pub fn for_screen(width: f32, height: f32) -> Self {
        Self {
            screen_width: width,
            screen_height: height,
            ..Self::default()
        }
    }

    /// Ground level (y grows downward)
    pub fn ground_y(&self) -> f32 {
        self.screen_height - self.ground_offset
    }

    /// Runner start x
    pub fn runner_start_x(&self) -> f32 {
        self.screen_width / 4.0
    }

    /// Height of the band orbs may spawn in
    pub fn orb_band_height(&self) -> f32 {
        (self.screen_height - self.orb_band_top - self.orb_band_bottom).max(0.0)
    }

    /// Load tuning from storage, falling back to defaults
    pub fn load(storage: &dyn Storage) -> Self {
        match storage.get(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from storage");
                    return tuning;
                }
                Err(e) => log::warn!("Ignoring malformed tuning: {}", e),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Tuning unavailable: {}", e),
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Save tuning to storage (failures are logged)
    pub fn save(&self, storage: &mut dyn Storage) {
        match serde_json::to_string(self) {
            Ok(json) => match storage.set(Self::STORAGE_KEY, &json) {
                Ok(()) => log::info!("Tuning saved"),
                Err(e) => log::warn!("Failed to save tuning: {}", e),
            },
            Err(e) => log::warn!("Failed to serialize tuning: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;

    #[test]
    fn test_default_geometry() {
        let tuning = Tuning::default();
        assert_eq!(tuning.ground_y(), SCREEN_HEIGHT - GROUND_OFFSET);
        assert_eq!(tuning.runner_start_x(), SCREEN_WIDTH / 4.0);
        assert_eq!(tuning.orb_band_height(), SCREEN_HEIGHT - 200.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let mut storage = MemoryStorage::new();
        storage
            .set("tuning", r#"{"scroll_speed": 6.0, "seed": 7}"#)
            .unwrap();

        let tuning = Tuning::load(&storage);
        assert_eq!(tuning.scroll_speed, 6.0);
        assert_eq!(tuning.seed, Some(7));
        assert_eq!(tuning.gravity, GRAVITY);
    }

    #[test]
    fn test_malformed_json_falls_back() {
        let mut storage = MemoryStorage::new();
        storage.set("tuning", "not json").unwrap();
        assert_eq!(Tuning::load(&storage), Tuning::default());
    }

    #[test]
    fn test_save_then_load() {
        let mut storage = MemoryStorage::new();
        let tuning = Tuning {
            slide_ticks: 45,
            ..Tuning::for_screen(400.0, 800.0)
        };
        tuning.save(&mut storage);
        assert_eq!(Tuning::load(&storage), tuning);
    }
}
