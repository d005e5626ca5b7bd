use hifitime::Epoch;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::{
    JulianDate, UnixSeconds, DEFAULT_TT_MINUS_UTC, JD_J2000, JD_UNIX_EPOCH, SECONDS_PER_DAY,
    TT_MINUS_TAI,
};
use crate::marsclock_errors::MarsClockError;

/// Time-scale settings injected into the ephemeris.
///
/// The TT − UTC offset grows each time a leap second is announced; keeping it
/// out of the formulas lets a deployment update it without touching the
/// ephemeris code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeConfig {
    /// TT − UTC in seconds (leap seconds + 32.184 s)
    pub tt_minus_utc_seconds: f64,
}

impl Default for TimeConfig {
    fn default() -> Self {
        TimeConfig {
            tt_minus_utc_seconds: DEFAULT_TT_MINUS_UTC,
        }
    }
}

impl TimeConfig {
    pub fn new(tt_minus_utc_seconds: f64) -> Self {
        TimeConfig {
            tt_minus_utc_seconds,
        }
    }

    /// Build the TT − UTC offset from hifitime's IERS leap second table.
    ///
    /// Argument
    /// --------
    /// * `epoch`: the instant at which the leap second count is evaluated
    ///
    /// Return
    /// ------
    /// * `None` before 1972, where the table has no IERS entry
    pub fn from_leap_second_table(epoch: Epoch) -> Option<Self> {
        epoch
            .leap_seconds(true)
            .map(|leap| TimeConfig::new(leap + TT_MINUS_TAI))
    }

    /// TT − UTC expressed in days
    pub fn tt_minus_utc_days(&self) -> f64 {
        self.tt_minus_utc_seconds / SECONDS_PER_DAY
    }
}

/// Transformation from seconds since the Unix epoch to Julian Date (UT)
///
/// Argument
/// --------
/// * `secs`: seconds since 1970-01-01T00:00:00 UTC
///
/// Return
/// ------
/// * the Julian Date in the UT scale
pub fn unix_to_jd_ut(secs: UnixSeconds) -> JulianDate {
    JD_UNIX_EPOCH + secs / SECONDS_PER_DAY
}

/// Shift a UT Julian Date into Terrestrial Time using the configured offset
pub fn jd_ut_to_tt(jd_ut: JulianDate, config: &TimeConfig) -> JulianDate {
    jd_ut + config.tt_minus_utc_days()
}

/// Days elapsed since J2000.0 for a TT Julian Date
pub fn j2000_offset(jd_tt: JulianDate) -> f64 {
    jd_tt - JD_J2000
}

/// Current system time as seconds since the Unix epoch
pub fn now_unix_seconds() -> Result<UnixSeconds, MarsClockError> {
    Ok(Epoch::now()?.to_unix_seconds())
}

/// Parse a terrestrial timestamp given either as plain Unix seconds
/// (e.g. `"1344230277"`) or as a date string understood by hifitime
/// (e.g. `"2012-08-06T05:17:57 UTC"`).
///
/// Argument
/// --------
/// * `input`: the textual timestamp
///
/// Return
/// ------
/// * seconds since the Unix epoch, or [`MarsClockError::InvalidEpoch`]
pub fn parse_timestamp(input: &str) -> Result<UnixSeconds, MarsClockError> {
    let trimmed = input.trim();
    if let Ok(secs) = trimmed.parse::<f64>() {
        if !secs.is_finite() {
            return Err(MarsClockError::InvalidInput(secs));
        }
        return Ok(secs);
    }
    let epoch = Epoch::from_str(trimmed)?;
    Ok(epoch.to_unix_seconds())
}
