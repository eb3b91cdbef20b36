use crate::constants::{Radian, KEPLER_ITERATIONS};

/// Result of the fixed-step Kepler solve.
///
/// * `eccentric_anomaly`: E after the last Newton–Raphson step, in radians
/// * `residual`: `|E_n − E_{n−1}|`, the size of the last correction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    pub eccentric_anomaly: Radian,
    pub residual: f64,
}

/// Kepler's equation `E − e·sin(E) − M`.
pub fn kepler_equation(
    eccentricity: f64,
    eccentric_anomaly: Radian,
    mean_anomaly: Radian,
) -> f64 {
    eccentric_anomaly - eccentricity * eccentric_anomaly.sin() - mean_anomaly
}

/// One Newton–Raphson step on Kepler's equation, `f'(E) = 1 − e·cos(E)`.
fn newton_step(eccentricity: f64, eccentric_anomaly: Radian, mean_anomaly: Radian) -> Radian {
    eccentric_anomaly
        - kepler_equation(eccentricity, eccentric_anomaly, mean_anomaly)
            / (1.0 - eccentricity * eccentric_anomaly.cos())
}

/// Solve Kepler's equation for the eccentric anomaly.
///
/// Starts from `E0 = M` and always performs exactly [`KEPLER_ITERATIONS`] Newton–Raphson
/// steps, whatever the residual. Callers that need an accuracy guarantee check
/// [`KeplerSolution::residual`] themselves.
///
/// Arguments
/// ---------
/// * `eccentricity`: orbit eccentricity, expected in `[0, 1)` (not validated)
/// * `mean_anomaly`: mean anomaly in radians
///
/// Return
/// ------
/// * a [`KeplerSolution`] with the eccentric anomaly and the last correction size
pub fn solve_kepler(eccentricity: f64, mean_anomaly: Radian) -> KeplerSolution {
    let mut before = mean_anomaly;
    let mut after = mean_anomaly;
    let mut residual = f64::INFINITY;

    for _ in 0..KEPLER_ITERATIONS {
        after = newton_step(eccentricity, before, mean_anomaly);
        residual = (after - before).abs();
        before = after;
    }

    KeplerSolution {
        eccentric_anomaly: after,
        residual,
    }
}
