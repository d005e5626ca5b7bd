//! Rendering of fractional hours as clock strings.
//!
//! All renderers split `h × 3600` seconds with floors: hours are
//! `floor(total / 3600)`, minutes `floor((total mod 3600) / 60)`. Only the
//! seconds field is rounded, so `hours_to_hm(23.999999)` is `"23:59"`.
use crate::constants::{Hour, SECONDS_PER_HOUR};
use crate::marsclock_errors::MarsClockError;

/// Split fractional hours into `(hours, minutes, remaining seconds)`.
fn split_hours(h: Hour) -> (i64, i64, f64) {
    let total = h * SECONDS_PER_HOUR;
    let hh = (total / SECONDS_PER_HOUR).floor() as i64;
    let rem = total.rem_euclid(SECONDS_PER_HOUR);
    let mm = (rem / 60.0).floor() as i64;
    (hh, mm, rem.rem_euclid(60.0))
}

/// Format fractional hours as `HH:MM:SS`.
///
/// The seconds are rounded half to even. A remainder such as 59.7 s rounds
/// up to a full minute, which is carried into the minutes and then the hours;
/// a carry past `23:59:59` wraps to `00:00:00`.
///
/// See [`hours_to_hms_unnormalized`] for the rendering without carry.
pub fn hours_to_hms(h: Hour) -> String {
    let (mut hh, mut mm, secs) = split_hours(h);
    let mut ss = secs.round_ties_even() as i64;
    if ss >= 60 {
        ss -= 60;
        mm += 1;
    }
    if mm >= 60 {
        mm -= 60;
        hh = (hh + 1).rem_euclid(24);
    }
    format!("{hh:02}:{mm:02}:{ss:02}")
}

/// Format fractional hours as `HH:MM:SS` without carrying rounded seconds.
///
/// Reproduces the historical status display, which can print a seconds
/// field of `60` (e.g. `"12:34:60"`) when the remainder rounds up.
pub fn hours_to_hms_unnormalized(h: Hour) -> String {
    let (hh, mm, secs) = split_hours(h);
    let ss = secs.round_ties_even() as i64;
    format!("{hh:02}:{mm:02}:{ss:02}")
}

/// Format fractional hours as `HH:MM`, truncating the seconds.
pub fn hours_to_hm(h: Hour) -> String {
    let (hh, mm, _) = split_hours(h);
    format!("{hh:02}:{mm:02}")
}

/// Integer sol count of a continuous sol date.
pub fn floor_to_sol(x: f64) -> i64 {
    x.floor() as i64
}

/// Parse `HH:MM` or `HH:MM:SS` back into fractional hours.
///
/// A seconds field of `60` is accepted so the output of
/// [`hours_to_hms_unnormalized`] parses as well.
///
/// Argument
/// --------
/// * `text`: the clock string
///
/// Return
/// ------
/// * the fractional hours, or [`MarsClockError::InvalidTimeFormat`]
pub fn parse_hms(text: &str) -> Result<Hour, MarsClockError> {
    let invalid = || MarsClockError::InvalidTimeFormat(text.to_string());

    let fields = text
        .trim()
        .split(':')
        .map(|f| f.parse::<u32>().map_err(|_| invalid()))
        .collect::<Result<Vec<u32>, _>>()?;

    let (hh, mm, ss) = match fields.as_slice() {
        [hh, mm] => (*hh, *mm, 0),
        [hh, mm, ss] => (*hh, *mm, *ss),
        _ => return Err(invalid()),
    };

    if hh >= 24 || mm >= 60 || ss > 60 {
        return Err(invalid());
    }

    Ok(hh as f64 + mm as f64 / 60.0 + ss as f64 / SECONDS_PER_HOUR)
}
