//! Read-only view handed to the front end once per frame

use serde::Serialize;

use super::sprites::{Sprite, world_sprites};
use crate::app::Screen;
use crate::highscores::HighScores;
use crate::sim::World;
use crate::tuning::Tuning;

/// Everything a front end needs to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub screen: Screen,
    /// Score of the current (or just finished) run
    pub score: u64,
    /// Leaderboard rank of the last finished run
    pub last_rank: Option<usize>,
    /// Entities of the current run, if any
    pub world: Option<World>,
    /// Draw list derived from `world`
    pub sprites: Vec<Sprite>,
    pub high_scores: HighScores,
}

impl Snapshot {
    pub fn capture(
        screen: Screen,
        score: u64,
        last_rank: Option<usize>,
        world: Option<&World>,
        tuning: &Tuning,
        high_scores: &HighScores,
    ) -> Self {
        Self {
            screen,
            score,
            last_rank,
            sprites: world
                .map(|w| world_sprites(w, tuning))
                .unwrap_or_default(),
            world: world.cloned(),
            high_scores: high_scores.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
