//! Gesture input

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// A pan gesture reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gesture {
    /// Vertical drag distance (pixels, negative is up)
    pub translation_y: f32,
}

/// Holds the most recent gesture until the next tick consumes it
#[derive(Debug, Clone, Default)]
pub struct GestureBuffer {
    pending: Option<Gesture>,
}

impl GestureBuffer {
    pub fn push(&mut self, gesture: Gesture) {
        self.pending = Some(gesture);
    }

    /// Take the pending gesture as tick input (one-shot)
    pub fn take(&mut self) -> TickInput {
        TickInput {
            swipe_y: self.pending.take().map(|g| g.translation_y),
        }
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}
