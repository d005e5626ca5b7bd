//! # Constants and type definitions for marsclock
//!
//! This module centralizes the **calendar constants**, **conversion factors** and
//! **type aliases** shared by the ephemeris, the formatter and the mission clocks.
//!
//! ## Overview
//!
//! - Terrestrial calendar anchors (Unix epoch and J2000.0 as Julian Dates)
//! - The default TT − UTC offset
//! - Mars Sol Date anchors (Mars24, Allison & McEwen 2000)
//! - Unit conversions (days ↔ seconds, full cycles)

// -------------------------------------------------------------------------------------------------
// Terrestrial time anchors
// -------------------------------------------------------------------------------------------------

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Number of seconds in an hour
pub const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Julian Date of the Unix epoch (1970-01-01T00:00:00 UTC)
pub const JD_UNIX_EPOCH: f64 = 2_440_587.5;

/// Julian Date of J2000.0 (2000-01-01T12:00:00 TT)
pub const JD_J2000: f64 = 2_451_545.0;

/// TAI − UTC accumulated leap seconds, as of the 2017-01-01 leap second
pub const DEFAULT_LEAP_SECONDS: f64 = 35.0;

/// TT − TAI, fixed by definition
pub const TT_MINUS_TAI: f64 = 32.184;

/// Default TT − UTC offset in seconds
pub const DEFAULT_TT_MINUS_UTC: f64 = DEFAULT_LEAP_SECONDS + TT_MINUS_TAI;

// -------------------------------------------------------------------------------------------------
// Mars calendar anchors
// -------------------------------------------------------------------------------------------------

/// Ratio between a Mars solar day and a Julian day
pub const SOL_TO_DAY: f64 = 1.027_491_252;

/// J2000 offset (days) used as the zero point of the MSD linear term
pub const MSD_J2000_SHIFT: f64 = 4.5;

/// MSD on 2000-01-06T00:00:00 TT
pub const MSD_AT_SHIFT: f64 = 44_796.0;

/// Small empirical correction to the MSD (sols)
pub const MSD_CORRECTION: f64 = 0.000_96;

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// A full turn in degrees
pub const FULL_CIRCLE: f64 = 360.0;

/// A full day in hours
pub const FULL_DAY_HOURS: f64 = 24.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Duration or time of day in hours
pub type Hour = f64;
/// Julian Date (days)
pub type JulianDate = f64;
/// Seconds since the Unix epoch
pub type UnixSeconds = f64;
/// Continuous Mars day count
pub type SolDate = f64;
