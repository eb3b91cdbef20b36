//! # Reference frames of the propagation pipeline
//!
//! Three chained transforms bring a satellite from its orbital plane to the Earth-fixed frame:
//!
//! 1. [`orbital_plane_position`] – position on the ellipse, origin at the focus (Earth's center).
//! 2. [`perifocal_to_equatorial`] – `R_z(Ω) · R_x(i) · R_z(ω)` into the pseudo-inertial
//!    equatorial frame (x axis towards the vernal equinox).
//! 3. [`equatorial_to_earth_fixed`] – `R_z(−θ)` with θ the Greenwich sidereal angle given by
//!    [`sidereal_angle`].
//!
//! Rotations are active, right-handed and built with [`Rotation3::from_axis_angle`]. Sign of
//! each angle, order of the composition and handedness are all significant: a mistake in any
//! of them still produces a plausible looking position.
use hifitime::Epoch;
use nalgebra::{Rotation3, Vector3};

use crate::constants::{
    Kilometer, Radian, DPI, SIDEREAL_CYCLES_AT_REF, SIDEREAL_CYCLES_PER_DAY, SIDEREAL_REF_YEAR,
};
use crate::time::elapsed_days;

/// Coordinate axis of an elementary rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Elementary rotation of `alpha` radians about one coordinate axis.
pub fn rotmt(alpha: Radian, axis: Axis) -> Rotation3<f64> {
    let axis = match axis {
        Axis::X => Vector3::x_axis(),
        Axis::Y => Vector3::y_axis(),
        Axis::Z => Vector3::z_axis(),
    };
    Rotation3::from_axis_angle(&axis, alpha)
}

/// Position in the orbital plane, origin at the focus.
///
/// `u = a·cos(E) − a·e`, `v = a·√(1−e²)·sin(E)`, `w = 0`. The `−a·e` term moves the origin from
/// the center of the ellipse to the focus.
pub fn orbital_plane_position(
    semi_major_axis: Kilometer,
    eccentricity: f64,
    eccentric_anomaly: Radian,
) -> Vector3<Kilometer> {
    let a = semi_major_axis;
    let u = a * eccentric_anomaly.cos() - a * eccentricity;
    let v = a * (1.0 - eccentricity * eccentricity).sqrt() * eccentric_anomaly.sin();
    Vector3::new(u, v, 0.0)
}

/// Rotation from the orbital plane to the equatorial frame.
///
/// Arguments
/// ---------
/// * `arg_of_perigee`: ω, radians
/// * `inclination`: i, radians
/// * `raan`: Ω, radians
///
/// Return
/// ------
/// * `R_z(Ω) · R_x(i) · R_z(ω)`
pub fn perifocal_to_equatorial(
    arg_of_perigee: Radian,
    inclination: Radian,
    raan: Radian,
) -> Rotation3<f64> {
    rotmt(raan, Axis::Z) * rotmt(inclination, Axis::X) * rotmt(arg_of_perigee, Axis::Z)
}

/// Reference epoch of the linear sidereal-time model, 2006-01-01T00:00:00 UTC.
pub fn sidereal_reference_epoch() -> Epoch {
    Epoch::from_gregorian_utc_at_midnight(SIDEREAL_REF_YEAR, 1, 1)
}

/// Greenwich sidereal angle of an instant, in radians.
///
/// Linear model: `0.27644444444` turns at the reference epoch plus `1.002737909` turns per
/// solar day. Only the fractional part of the accumulated turns is kept (truncated towards
/// zero, so instants before the reference epoch give a negative angle).
pub fn sidereal_angle(epoch: Epoch) -> Radian {
    let days = elapsed_days(sidereal_reference_epoch(), epoch);
    let turns = SIDEREAL_CYCLES_AT_REF + SIDEREAL_CYCLES_PER_DAY * days;
    turns.fract() * DPI
}

/// Rotate an equatorial position into the Earth-fixed frame at the given instant.
pub fn equatorial_to_earth_fixed(equatorial: &Vector3<f64>, epoch: Epoch) -> Vector3<f64> {
    rotmt(-sidereal_angle(epoch), Axis::Z) * equatorial
}
