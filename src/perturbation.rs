use std::f64::consts::PI;

use crate::constants::{Day, Degree, Kilometer, EARTH_RADIUS, PERTURBATION_COEFF};

/// Node and perigee angles after secular drift, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecularAngles {
    pub arg_of_perigee: Degree,
    pub raan: Degree,
}

/// Apply the linear secular drift of the argument of perigee and of the ascending node.
///
/// Simplified J2-like model, linear in the elapsed time:
///
/// ```text
/// ω = ω0 + 180·0.174·(2 − 2.5·sin²i) / (π·(a/R_E)^3.5) · Δt
/// Ω = Ω0 − 180·0.174·cos i / (π·(a/R_E)^3.5) · Δt
/// ```
///
/// Arguments
/// ---------
/// * `raan0`: right ascension of the ascending node at epoch, degrees
/// * `arg_perigee0`: argument of perigee at epoch, degrees
/// * `inclination`: degrees
/// * `semi_major_axis`: km
/// * `elapsed_days`: time since epoch, days
///
/// Return
/// ------
/// * the drifted angles; NaN when `semi_major_axis <= 0`
pub fn secular_correction(
    raan0: Degree,
    arg_perigee0: Degree,
    inclination: Degree,
    semi_major_axis: Kilometer,
    elapsed_days: Day,
) -> SecularAngles {
    let incl = inclination.to_radians();
    let scale = PI * (semi_major_axis / EARTH_RADIUS).powf(3.5);

    let perigee_rate = 180.0 * PERTURBATION_COEFF * (2.0 - 2.5 * incl.sin().powi(2)) / scale;
    let node_rate = 180.0 * PERTURBATION_COEFF * incl.cos() / scale;

    SecularAngles {
        arg_of_perigee: arg_perigee0 + perigee_rate * elapsed_days,
        raan: raan0 - node_rate * elapsed_days,
    }
}

#[cfg(test)]
mod perturbation_test {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_no_drift_at_epoch() {
        let angles = secular_correction(166.3609, 99.1558, 53.0517, 6925.347, 0.0);
        assert_eq!(
            angles,
            SecularAngles {
                arg_of_perigee: 99.1558,
                raan: 166.3609
            }
        );
    }

    #[test]
    fn test_leo_drift_rates() {
        // STARLINK-1008 like orbit: node regresses by about 4.4 deg/day
        let angles = secular_correction(166.3609, 99.1558, 53.0517, 6925.347, 1.0);
        let node_rate = angles.raan - 166.3609;
        let perigee_rate = angles.arg_of_perigee - 99.1558;

        assert!(node_rate < 0.0);
        assert!(perigee_rate > 0.0);
        assert_relative_eq!(node_rate, -4.44010, epsilon = 1e-4);
        assert_relative_eq!(perigee_rate, 2.97894, epsilon = 1e-4);
    }

    #[test]
    fn test_critical_and_polar_inclinations() {
        // 2 − 2.5·sin²i vanishes at the critical inclination (63.43 deg)
        let critical = 0.8_f64.sqrt().asin().to_degrees();
        let angles = secular_correction(10.0, 20.0, critical, 7000.0, 30.0);
        assert_relative_eq!(angles.arg_of_perigee, 20.0, epsilon = 1e-9);

        // no nodal regression for a polar orbit
        let angles = secular_correction(10.0, 20.0, 90.0, 7000.0, 30.0);
        assert_relative_eq!(angles.raan, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate_axis_is_nan() {
        let angles = secular_correction(10.0, 20.0, 53.0, -1.0, 1.0);
        assert!(angles.raan.is_nan());
        assert!(angles.arg_of_perigee.is_nan());
    }
}
