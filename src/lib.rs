//! Gamepad input overlay
//!
//! Shows, per connected controller, every button and axis that has been used
//! since the overlay started, with live values.

pub mod config;
pub mod input;
pub mod paths;

#[cfg(test)]
mod testing;
