//! # Mission clocks
//!
//! Each surface mission keeps its own sol count and local solar time. Two
//! timekeeping rules cover the rovers handled here:
//!
//! - [`MissionClock::LongitudeOffset`] derives local mean solar time from the
//!   landing site longitude and counts sols from a fixed MSD epoch (Curiosity).
//! - [`MissionClock::SolDateOffset`] shifts the MSD by the landing instant and
//!   runs the mission clock directly from that shifted date (Opportunity).
//!
//! New landing sites are described with data, see [`Mission`].
use serde::Serialize;

use crate::angles::{degrees_to_hours, within_24, wrap_hours};
use crate::constants::{Degree, Hour, SolDate, FULL_CIRCLE};
use crate::format::hours_to_hm;

/// Timekeeping rule of a mission
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MissionClock {
    /// Local time from the site longitude, sols counted from `sol_epoch`.
    LongitudeOffset {
        /// Landing site longitude, degrees east
        east_longitude: Degree,
        /// MSD integer at which the mission sol count is zero
        sol_epoch: i64,
    },
    /// Mission sol date `msd - sol_epoch - landing_offset`.
    SolDateOffset {
        /// Integer part of the MSD at landing
        sol_epoch: SolDate,
        /// Fractional offset aligning the mission clock with the landing
        landing_offset: SolDate,
    },
}

/// A surface mission and its clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mission {
    pub name: &'static str,
    pub clock: MissionClock,
}

/// Mars Science Laboratory, Gale crater, landed 2012-08-06T05:17:57 UTC
pub const CURIOSITY: Mission = Mission {
    name: "Curiosity",
    clock: MissionClock::LongitudeOffset {
        east_longitude: 137.4,
        sol_epoch: 49_268,
    },
};

/// Mars Exploration Rover B, Meridiani Planum, landed 2004-01-25T05:05 UTC
pub const OPPORTUNITY: Mission = Mission {
    name: "Opportunity",
    clock: MissionClock::SolDateOffset {
        sol_epoch: 46_235.0,
        landing_offset: 0.042_431,
    },
};

/// Sol count and local solar times of a mission at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MissionTime {
    /// Mission sol, floor of the mission sol date
    pub sol_index: i64,
    /// Local mean solar time (mission clock hours for sol-date missions), `[0, 24)`
    pub local_mean_solar_time: Hour,
    /// Local true solar time, `[0, 24)`
    pub local_true_solar_time: Hour,
}

impl MissionTime {
    /// Local true solar time as `HH:MM`
    pub fn ltst_hm(&self) -> String {
        hours_to_hm(self.local_true_solar_time)
    }

    /// Local mean solar time as `HH:MM`
    pub fn lmst_hm(&self) -> String {
        hours_to_hm(self.local_mean_solar_time)
    }
}

impl Mission {
    /// Evaluate the mission clock.
    ///
    /// Arguments
    /// ---------
    /// * `msd`: Mars Sol Date
    /// * `mtc`: Coordinated Mars Time, hours in `[0, 24)`
    /// * `eot`: equation of time, degrees
    ///
    /// Return
    /// ------
    /// * the mission [`MissionTime`]
    pub fn time_at(&self, msd: SolDate, mtc: Hour, eot: Degree) -> MissionTime {
        match self.clock {
            MissionClock::LongitudeOffset {
                east_longitude,
                sol_epoch,
            } => {
                let west_longitude = FULL_CIRCLE - east_longitude;
                let sol_index = (msd - west_longitude / FULL_CIRCLE).floor() as i64 - sol_epoch;
                let lmst = within_24(mtc - degrees_to_hours(west_longitude));
                let ltst = within_24(lmst + degrees_to_hours(eot));
                MissionTime {
                    sol_index,
                    local_mean_solar_time: lmst,
                    local_true_solar_time: ltst,
                }
            }
            MissionClock::SolDateOffset {
                sol_epoch,
                landing_offset,
            } => {
                let sol_date = msd - sol_epoch - landing_offset;
                let mission_hours = wrap_hours(24.0 * sol_date);
                let ltst = within_24(mission_hours + degrees_to_hours(eot));
                MissionTime {
                    sol_index: sol_date.floor() as i64,
                    local_mean_solar_time: mission_hours,
                    local_true_solar_time: ltst,
                }
            }
        }
    }
}

#[cfg(test)]
mod missions_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_curiosity_at_landing() {
        // Snapshot values at 2012-08-06T05:17:57 UTC
        let time = CURIOSITY.time_at(49269.24547130256, 5.8913112613372505, 8.26048842264039);
        assert_eq!(time.sol_index, 0);
        assert_relative_eq!(time.local_mean_solar_time, 15.05131126133725, epsilon = 1e-9);
        assert_relative_eq!(time.local_true_solar_time, 15.602010489513276, epsilon = 1e-9);
        assert_eq!(time.ltst_hm(), "15:36");
    }

    #[test]
    fn test_opportunity_at_landing() {
        // Snapshot values at 2004-01-25T05:05:00 UTC
        let time = OPPORTUNITY.time_at(46236.60749312961, 14.579835110576823, -12.509970288566507);
        assert_eq!(time.sol_index, 1);
        assert_relative_eq!(time.local_mean_solar_time, 13.561491110635032, epsilon = 1e-7);
        assert_relative_eq!(time.local_true_solar_time, 12.727493091397266, epsilon = 1e-7);
        assert_eq!(time.lmst_hm(), "13:33");
    }

    #[test]
    fn test_longitude_wraps_local_time() {
        // MTC just after midnight is behind Gale crater's offset, so the sum wraps
        let time = CURIOSITY.time_at(50000.01, 0.24, 0.0);
        assert!(time.local_mean_solar_time >= 0.0 && time.local_mean_solar_time < 24.0);
        assert_relative_eq!(time.local_mean_solar_time, 0.24 - 14.84 + 24.0, epsilon = 1e-12);
    }

    #[test]
    fn test_custom_site() {
        let prime_meridian = Mission {
            name: "Airy-0",
            clock: MissionClock::LongitudeOffset {
                east_longitude: 360.0,
                sol_epoch: 0,
            },
        };
        let time = prime_meridian.time_at(100.25, 6.0, 0.0);
        assert_eq!(time.sol_index, 100);
        assert_eq!(time.local_mean_solar_time, 6.0);
        assert_eq!(time.local_true_solar_time, 6.0);
    }
}
