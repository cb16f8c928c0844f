use std::f64::consts::TAU;

use crate::body::Body;

/// Advances a phase by `angular_velocity * dt_days` and reduces it into
/// `[0, 2π)`. Pure: identical inputs give bit-identical outputs. A step that
/// overflows to a non-finite value leaves the angle where it was.
pub fn advance_angle(angle: f64, angular_velocity: f64, dt_days: f64) -> f64 {
    let delta = angular_velocity * dt_days;
    if !delta.is_finite() {
        return angle;
    }
    let next = (angle + delta).rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if next >= TAU {
        0.0
    } else {
        next
    }
}

/// Advances an orbiting body by `dt_days` of simulated time. Anchors are
/// left untouched.
pub fn advance(body: &mut Body, dt_days: f64) {
    let Some(orbit) = body.orbit() else {
        return;
    };
    let angle = advance_angle(orbit.angle(), orbit.angular_velocity(), dt_days);
    body.set_angle(angle);
}
