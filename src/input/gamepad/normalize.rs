//! Stick vector normalization
//!
//! Controllers report each stick axis independently, so diagonals can land
//! outside the unit circle (a square-gated stick reaches `(1, 1)`, magnitude
//! 1.414). The overlay clamps such vectors radially before plotting them.

/// Euclidean length of a 2D stick vector
pub fn stick_magnitude(x: f32, y: f32) -> f32 {
    (x * x + y * y).sqrt()
}

/// Clamp a stick vector to the unit circle.
///
/// Vectors inside the circle are returned unchanged; longer ones are scaled
/// back to magnitude 1.0 keeping their direction.
///
/// # Example
/// ```
/// use gamepad_overlay::input::gamepad::normalize::radial_clamp;
///
/// assert_eq!(radial_clamp(0.5, 0.5), (0.5, 0.5));
///
/// let (x, y) = radial_clamp(1.0, 1.0);
/// assert!((x - 0.7071).abs() < 0.001);
/// assert!((y - 0.7071).abs() < 0.001);
/// ```
pub fn radial_clamp(x: f32, y: f32) -> (f32, f32) {
    let magnitude = stick_magnitude(x, y);

    if magnitude <= 1.0 {
        (x, y)
    } else {
        (x / magnitude, y / magnitude)
    }
}
