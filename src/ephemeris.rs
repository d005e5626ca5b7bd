//! # Mars ephemeris engine
//!
//! Converts a terrestrial timestamp into Mars time coordinates following the
//! Mars24 algorithm (Allison & McEwen, 2000, *Planet. Space Sci.* 48, 215–235;
//! NASA GISS technical notes).
//!
//! ## Pipeline
//!
//! ```text
//! unix seconds ─▶ JD(UT) ─▶ JD(TT) ─▶ Δt_J2000
//!                                       │
//!        ┌──────────────┬───────────────┼──────────────────┐
//!        ▼              ▼               ▼                  ▼
//!   mean anomaly M   α_FMS          PBS terms          MSD ─▶ MTC
//!        └──────┬───────┘               │                  │
//!               ▼                       │                  │
//!     equation of center ν−M ◀──────────┘                  │
//!               │                                          │
//!               ▼                                          ▼
//!        Ls ─▶ equation of time ───────────────▶ mission clocks (LMST, LTST, sol)
//! ```
//!
//! Every quantity is a pure function of the timestamp and the injected
//! [`TimeConfig`]; a [`TimeSnapshot`] carries all of them at once.
//!
//! ## Usage
//!
//! ```rust
//! use marsclock::ephemeris::compute;
//!
//! let snapshot = compute(1_344_230_277.0).unwrap();
//! assert_eq!(snapshot.curiosity.sol_index, 0);
//! assert_eq!(snapshot.mars_sol(), 49269);
//! ```
use hifitime::Epoch;
use serde::Serialize;

use crate::angles::{cos_deg, degrees_to_hours, sin_deg, wrap_degrees, wrap_hours};
use crate::constants::{
    Degree, Hour, JulianDate, SolDate, UnixSeconds, MSD_AT_SHIFT, MSD_CORRECTION,
    MSD_J2000_SHIFT, SOL_TO_DAY,
};
use crate::format::floor_to_sol;
use crate::marsclock_errors::MarsClockError;
use crate::missions::{MissionTime, CURIOSITY, OPPORTUNITY};
use crate::time::{j2000_offset, jd_ut_to_tt, now_unix_seconds, unix_to_jd_ut, TimeConfig};

/// Planetary perturbation terms `(amplitude, period, phase)`, degrees and Julian years.
const PERTURBATIONS: [(f64, f64, f64); 7] = [
    (0.0071, 2.2353, 49.409),
    (0.0057, 2.7543, 168.173),
    (0.0039, 1.1177, 191.837),
    (0.0037, 15.7866, 21.736),
    (0.0021, 2.1354, 15.704),
    (0.0020, 2.4694, 95.528),
    (0.0018, 32.8493, 49.095),
];

/// Mean motion factor converting days since J2000 into degrees per year of period
const PBS_RATE: f64 = 0.985626;

/// All Mars time quantities derived from one terrestrial timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeSnapshot {
    /// Input time, seconds since the Unix epoch
    pub epoch_seconds: UnixSeconds,
    /// Julian Date, UT
    pub julian_date_ut: JulianDate,
    /// Julian Date, TT
    pub julian_date_tt: JulianDate,
    /// Days since J2000.0 (TT)
    pub j2000_offset: f64,
    /// Mars mean anomaly, `[0, 360)`
    pub mean_anomaly_m: Degree,
    /// Areocentric longitude of the fictitious mean sun, `[0, 360)`
    pub fictitious_mean_sun_alpha: Degree,
    pub orbital_eccentricity: f64,
    /// Sum of the planetary perturbation terms
    pub perturbation_sum_pbs: Degree,
    /// Equation of center ν − M
    pub equation_of_center_nu_m: Degree,
    /// True anomaly ν
    pub true_anomaly_nu: Degree,
    /// Areocentric solar longitude Ls, `[0, 360)`
    pub areocentric_solar_longitude_ls: Degree,
    /// Equation of time, degrees
    pub equation_of_time_eot: Degree,
    /// Equation of time, hours
    pub equation_of_time_eot_h: Hour,
    /// Mars Sol Date
    pub mars_sol_date_msd: SolDate,
    /// Coordinated Mars Time, `[0, 24)`
    pub coordinated_mars_time_mtc: Hour,
    pub curiosity: MissionTime,
    pub opportunity: MissionTime,
}

impl TimeSnapshot {
    /// Integer Mars Sol Date
    pub fn mars_sol(&self) -> i64 {
        floor_to_sol(self.mars_sol_date_msd)
    }

    /// Equation of time converted to hours
    pub fn equation_of_time_hours(&self) -> Hour {
        self.equation_of_time_eot_h
    }
}

/// Ephemeris engine configured with a time-scale policy.
///
/// The engine holds no state besides its configuration; every call starts
/// from its own timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MarsEphemeris {
    config: TimeConfig,
}

impl MarsEphemeris {
    pub fn new(config: TimeConfig) -> Self {
        MarsEphemeris { config }
    }

    pub fn config(&self) -> &TimeConfig {
        &self.config
    }

    /// Compute every Mars time quantity at a terrestrial instant.
    ///
    /// Arguments
    /// ---------
    /// * `epoch_seconds`: seconds since 1970-01-01T00:00:00 UTC
    ///
    /// Return
    /// ------
    /// * the [`TimeSnapshot`] at that instant, or
    ///   [`MarsClockError::InvalidInput`] if the timestamp is NaN or infinite
    pub fn compute(&self, epoch_seconds: UnixSeconds) -> Result<TimeSnapshot, MarsClockError> {
        if !epoch_seconds.is_finite() {
            return Err(MarsClockError::InvalidInput(epoch_seconds));
        }

        let jd_ut = unix_to_jd_ut(epoch_seconds);
        let jd_tt = jd_ut_to_tt(jd_ut, &self.config);
        let j2000 = j2000_offset(jd_tt);

        let m = mean_anomaly(j2000);
        let alpha_fms = fictitious_mean_sun(j2000);
        let e = 0.09340 + 2.477e-9 * j2000;
        let pbs = perturbations(j2000);
        let nu_m = equation_of_center(j2000, m, pbs);
        let l_s = wrap_degrees(alpha_fms + nu_m);
        let eot = equation_of_time(l_s, nu_m);
        let msd = mars_sol_date(j2000);
        let mtc = wrap_hours(24.0 * msd);

        Ok(TimeSnapshot {
            epoch_seconds,
            julian_date_ut: jd_ut,
            julian_date_tt: jd_tt,
            j2000_offset: j2000,
            mean_anomaly_m: m,
            fictitious_mean_sun_alpha: alpha_fms,
            orbital_eccentricity: e,
            perturbation_sum_pbs: pbs,
            equation_of_center_nu_m: nu_m,
            true_anomaly_nu: nu_m + m,
            areocentric_solar_longitude_ls: l_s,
            equation_of_time_eot: eot,
            equation_of_time_eot_h: degrees_to_hours(eot),
            mars_sol_date_msd: msd,
            coordinated_mars_time_mtc: mtc,
            curiosity: CURIOSITY.time_at(msd, mtc, eot),
            opportunity: OPPORTUNITY.time_at(msd, mtc, eot),
        })
    }

    /// Snapshot at a hifitime [`Epoch`], whatever its time scale.
    pub fn at_epoch(&self, epoch: Epoch) -> Result<TimeSnapshot, MarsClockError> {
        self.compute(epoch.to_unix_seconds())
    }

    /// Snapshot at the current system time.
    pub fn now(&self) -> Result<TimeSnapshot, MarsClockError> {
        self.compute(now_unix_seconds()?)
    }
}

/// Compute a [`TimeSnapshot`] with the default TT − UTC offset.
pub fn compute(epoch_seconds: UnixSeconds) -> Result<TimeSnapshot, MarsClockError> {
    MarsEphemeris::default().compute(epoch_seconds)
}

/// Mars mean anomaly M, degrees
fn mean_anomaly(j2000: f64) -> Degree {
    wrap_degrees(19.3870 + 0.52402075 * j2000)
}

/// Areocentric longitude of the fictitious mean sun α_FMS, degrees
fn fictitious_mean_sun(j2000: f64) -> Degree {
    wrap_degrees(270.3863 + 0.52403840 * j2000)
}

/// Sum of the perturbations by Jupiter, Earth and Venus (PBS)
fn perturbations(j2000: f64) -> Degree {
    PERTURBATIONS
        .iter()
        .map(|&(amplitude, period, phase)| {
            amplitude * cos_deg((PBS_RATE * j2000 / period) + phase)
        })
        .sum()
}

/// Equation of center ν − M, degrees
fn equation_of_center(j2000: f64, m: Degree, pbs: Degree) -> Degree {
    (10.691 + 3.0e-7 * j2000) * sin_deg(m)
        + 0.623 * sin_deg(2.0 * m)
        + 0.050 * sin_deg(3.0 * m)
        + 0.005 * sin_deg(4.0 * m)
        + 0.0005 * sin_deg(5.0 * m)
        + pbs
}

/// Equation of time, degrees
fn equation_of_time(l_s: Degree, nu_m: Degree) -> Degree {
    2.861 * sin_deg(2.0 * l_s) - 0.071 * sin_deg(4.0 * l_s) + 0.002 * sin_deg(6.0 * l_s) - nu_m
}

/// Mars Sol Date
fn mars_sol_date(j2000: f64) -> SolDate {
    ((j2000 - MSD_J2000_SHIFT) / SOL_TO_DAY) + MSD_AT_SHIFT - MSD_CORRECTION
}

#[cfg(test)]
mod ephemeris_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unix_epoch() {
        let s = compute(0.0).unwrap();
        assert_eq!(s.julian_date_ut, 2440587.5);
        assert_relative_eq!(
            s.j2000_offset,
            -10957.5 + (35.0 + 32.184) / 86400.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(s.mean_anomaly_m, 37.4300393495605, epsilon = 1e-8);
        assert_relative_eq!(s.fictitious_mean_sun_alpha, 288.235939488286, epsilon = 1e-8);
        assert_relative_eq!(s.orbital_eccentricity, 0.0933728582744261, epsilon = 1e-15);
        assert_relative_eq!(s.perturbation_sum_pbs, -0.0020912328779696255, epsilon = 1e-10);
        assert_relative_eq!(s.equation_of_center_nu_m, 7.143916679152386, epsilon = 1e-8);
        assert_relative_eq!(s.true_anomaly_nu, 44.5739560287129, epsilon = 1e-8);
        assert_relative_eq!(
            s.areocentric_solar_longitude_ls,
            295.3798561674384,
            epsilon = 1e-8
        );
        assert_relative_eq!(s.equation_of_time_eot, -9.430261027887887, epsilon = 1e-8);
        assert_relative_eq!(s.mars_sol_date_msd, 34127.29582615737, epsilon = 1e-4);
        assert_relative_eq!(s.coordinated_mars_time_mtc, 7.099827776895836, epsilon = 1e-7);
        assert_eq!(s.curiosity.sol_index, -15142);
        assert_eq!(s.opportunity.sol_index, -12108);
    }

    #[test]
    fn test_mars24_reference_date() {
        // 2000-01-06T00:00:00 UTC, MSD 44795.9998 in the Mars24 tables
        let s = compute(947116800.0).unwrap();
        assert_relative_eq!(s.mars_sol_date_msd, 44795.9998, epsilon = 1e-4);
        assert_relative_eq!(s.coordinated_mars_time_mtc, 23.995122897205874, epsilon = 1e-7);
        assert_relative_eq!(
            s.areocentric_solar_longitude_ls,
            277.1867916573855,
            epsilon = 1e-8
        );
        assert_eq!(s.mars_sol(), 44795);
    }

    #[test]
    fn test_curiosity_landing() {
        let s = compute(1344230277.0).unwrap();
        assert_eq!(s.mars_sol(), 49269);
        assert_eq!(s.curiosity.sol_index, 0);
        assert_relative_eq!(s.curiosity.local_true_solar_time, 15.602010489513276, epsilon = 1e-7);
        assert_relative_eq!(s.equation_of_time_eot, 8.26048842264039, epsilon = 1e-8);
        assert_relative_eq!(s.equation_of_time_hours(), 8.26048842264039 / 15.0, epsilon = 1e-9);
        assert_eq!(s.opportunity.sol_index, 3034);
    }

    #[test]
    fn test_opportunity_landing() {
        let s = compute(1075007100.0).unwrap();
        assert_eq!(s.opportunity.sol_index, 1);
        assert_eq!(s.curiosity.sol_index, -3033);
        assert_relative_eq!(
            s.opportunity.local_true_solar_time,
            12.727493091397266,
            epsilon = 1e-7
        );
    }

    #[test]
    fn test_injected_offset() {
        let default = compute(1_700_000_000.0).unwrap();
        let shifted = MarsEphemeris::new(TimeConfig::new(35.0 + 32.184 + 86400.0))
            .compute(1_700_000_000.0)
            .unwrap();
        assert_relative_eq!(
            shifted.j2000_offset - default.j2000_offset,
            1.0,
            epsilon = 1e-9
        );
        assert_eq!(shifted.julian_date_ut, default.julian_date_ut);
    }

    #[test]
    fn test_at_epoch_matches_compute() {
        let epoch = Epoch::from_unix_seconds(1_582_059_300.0);
        let a = MarsEphemeris::default().at_epoch(epoch).unwrap();
        let b = compute(1_582_059_300.0).unwrap();
        assert_relative_eq!(a.mars_sol_date_msd, b.mars_sol_date_msd, epsilon = 1e-9);
        assert_eq!(a.curiosity.sol_index, 2679);
        assert_eq!(a.opportunity.sol_index, 5713);
    }

    #[test]
    fn test_non_finite_input() {
        assert_eq!(
            compute(f64::INFINITY),
            Err(MarsClockError::InvalidInput(f64::INFINITY))
        );
        assert!(matches!(
            compute(f64::NAN),
            Err(MarsClockError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_now() {
        let s = MarsEphemeris::default().now().unwrap();
        assert!(s.curiosity.sol_index > 4000);
    }
}
