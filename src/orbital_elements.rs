use hifitime::Epoch;

use crate::constants::{Day, Degree, RevPerDay};
use crate::time::tle_epoch;

/// Classical orbital elements of one satellite at its epoch, as published in a TLE.
///
/// Units:
/// * `mean_anomaly`: degrees (M0 at epoch)
/// * `mean_motion`: revolutions per day
/// * `mean_motion_dot`: revolutions per day², used as the quadratic term of the mean anomaly
/// * `eccentricity`: unitless, `0 <= e < 1`
/// * `epoch_year`: four-digit year
/// * `epoch_day`: fractional day of year, 1-based
/// * `inclination`: degrees
/// * `raan`: degrees, right ascension of the ascending node at epoch
/// * `arg_of_perigee`: degrees, at epoch
///
/// The value is immutable once decoded. The propagation formulas assume an elliptical orbit
/// (`0 <= eccentricity < 1`) and `mean_motion > 0`; the caller is responsible for both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub mean_anomaly: Degree,
    pub mean_motion: RevPerDay,
    pub mean_motion_dot: f64,
    pub eccentricity: f64,
    pub epoch_year: i32,
    pub epoch_day: Day,
    pub inclination: Degree,
    pub raan: Degree,
    pub arg_of_perigee: Degree,
}

impl OrbitalElements {
    /// Epoch of the element set, `epoch_year-01-01T00:00:00 UTC` shifted by `epoch_day - 1` days.
    pub fn epoch(&self) -> Epoch {
        tle_epoch(self.epoch_year, self.epoch_day)
    }

    /// Orbital period in minutes.
    pub fn period_minutes(&self) -> f64 {
        1440.0 / self.mean_motion
    }

    /// True when the invariants required by the propagation formulas hold.
    pub fn is_elliptical(&self) -> bool {
        (0.0..1.0).contains(&self.eccentricity) && self.mean_motion > 0.0
    }
}
