//! Damped spring response curves.
//!
//! The indicator animates with a spring response rather than a fixed
//! easing curve. The curve is normalized: input time runs 0.0 to 1.0
//! over the animation's duration and the output fraction runs from 0.0
//! toward 1.0.

/// Decay exponent at the end of the normalized duration.
///
/// `ln(1000)`: the oscillation envelope has decayed to 0.1% of the
/// travel distance when `t` reaches 1.0, so snapping to the target at
/// that point is not visible.
const SETTLE: f32 = 6.907_755;

/// Lower bound on the damping ratio to keep the frequency finite.
const MIN_DAMPING: f32 = 0.05;

/// Evaluate the normalized spring response at time `t` in `[0, 1]`.
///
/// * `damping_ratio` - 1.0 settles without oscillation; values below
///   1.0 overshoot and ring before settling.
/// * `initial_velocity` - starting velocity in units of total travel
///   distance per normalized duration. 0.0 starts at rest.
pub fn spring_fraction(t: f32, damping_ratio: f32, initial_velocity: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let zeta = damping_ratio.clamp(MIN_DAMPING, 1.0);
    let omega = SETTLE / zeta;
    let v0 = initial_velocity;

    if zeta >= 1.0 {
        // Critically damped: no oscillation.
        let decay = (-omega * t).exp();
        1.0 - (1.0 + (omega - v0) * t) * decay
    } else {
        // Underdamped: decaying oscillation around the target.
        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        let decay = (-zeta * omega * t).exp();
        let coeff = (zeta * omega - v0) / omega_d;
        1.0 - decay * ((omega_d * t).cos() + coeff * (omega_d * t).sin())
    }
}
