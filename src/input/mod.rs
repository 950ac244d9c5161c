//! Input devices observed by the overlay

pub mod gamepad;
