use std::f64::consts::PI;

use crate::constants::{Degree, Hour, FULL_CIRCLE, FULL_DAY_HOURS};

/// Sine of an angle given in degrees.
#[inline]
pub fn sin_deg(angle: Degree) -> f64 {
    (angle * PI / 180.0).sin()
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn cos_deg(angle: Degree) -> f64 {
    (angle * PI / 180.0).cos()
}

/// Convert an angle of planetary rotation into hours of local time.
#[inline]
pub fn degrees_to_hours(angle: Degree) -> Hour {
    angle * 24.0 / 360.0
}

/// Non-negative remainder of `value` by `cycle`, in `[0, cycle)`.
///
/// `rem_euclid` can land exactly on `cycle` when a tiny negative value is
/// shifted up by a full cycle, so that case is folded back to zero.
#[inline]
fn wrap_cycle(value: f64, cycle: f64) -> f64 {
    let r = value.rem_euclid(cycle);
    if r >= cycle {
        0.0
    } else {
        r
    }
}

/// Principal value of an angle in degrees, in `[0, 360)`.
#[inline]
pub fn wrap_degrees(angle: Degree) -> Degree {
    wrap_cycle(angle, FULL_CIRCLE)
}

/// Principal value of a time of day in hours, in `[0, 24)`.
#[inline]
pub fn wrap_hours(hours: Hour) -> Hour {
    wrap_cycle(hours, FULL_DAY_HOURS)
}

/// Bring an hour value back into `[0, 24)` with a single cycle adjustment.
///
/// Inputs are sums of two quantities already in `[0, 24)` and a small
/// correction, so one adjustment is always enough.
#[inline]
pub fn within_24(hours: Hour) -> Hour {
    if hours < 0.0 {
        hours + FULL_DAY_HOURS
    } else if hours >= FULL_DAY_HOURS {
        hours - FULL_DAY_HOURS
    } else {
        hours
    }
}
