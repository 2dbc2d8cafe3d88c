#![no_std]

//! Seven-segment display core
//!
//! Architecture layers:
//! - `digits` - digit→segment tables and the pure frame renderer
//! - `state` - shared device state observed across tasks
//! - `driver` - hardware abstraction ([`LedDriver`] trait)
//! - `engine` - render loop polling the dirty flag
//! - `color` - RGB helpers
//!
//! The engine is generic over [`LedDriver`], allowing different hardware
//! backends (and recording drivers in tests).

#[cfg(test)]
extern crate std;

pub mod color;
pub mod digits;
pub mod driver;
pub mod engine;
pub mod state;

// Color exports
pub use color::{Rgb, rgb_from_u32};

// Renderer exports
pub use digits::{
    DIGIT_SEGMENTS,
    LEDS_PER_DIGIT,
    LEDS_PER_SEGMENT,
    NUM_DIGITS,
    NUM_LEDS,
    SEGMENTS_PER_DIGIT,
    render_digits,
    split_digits,
};

// Driver exports
pub use driver::LedDriver;

// Engine exports
pub use engine::RenderEngine;

// State exports
pub use state::CounterState;
