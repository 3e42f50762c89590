//! Platform abstraction layer
//!
//! Handles the glue between a host front end and the simulation:
//! - Time: real frame deltas to whole simulation ticks
//! - Input: pan gestures buffered until the next tick

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::{Gesture, GestureBuffer};
