use marsclock::TimeSnapshot;

/// Unix seconds at 00:00 UTC on 1 January of each year from 1970 to 2100, every 5 years
pub fn sample_epochs() -> Vec<f64> {
    (0..=26).map(|i| i as f64 * 5.0 * 365.25 * 86400.0).collect()
}

pub fn assert_in_degrees(value: f64, what: &str) {
    assert!(
        (0.0..360.0).contains(&value),
        "{what} = {value} outside [0, 360)"
    );
}

pub fn assert_in_hours(value: f64, what: &str) {
    assert!((0.0..24.0).contains(&value), "{what} = {value} outside [0, 24)");
}

pub fn assert_snapshot_ranges(s: &TimeSnapshot) {
    assert_in_degrees(s.mean_anomaly_m, "mean anomaly");
    assert_in_degrees(s.fictitious_mean_sun_alpha, "alpha FMS");
    assert_in_degrees(s.areocentric_solar_longitude_ls, "Ls");
    assert_in_hours(s.coordinated_mars_time_mtc, "MTC");
    assert_in_hours(s.curiosity.local_mean_solar_time, "Curiosity LMST");
    assert_in_hours(s.curiosity.local_true_solar_time, "Curiosity LTST");
    assert_in_hours(s.opportunity.local_mean_solar_time, "Opportunity mission time");
    assert_in_hours(s.opportunity.local_true_solar_time, "Opportunity LTST");
}
