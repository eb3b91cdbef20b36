//! # Propagator: from orbital elements to an Earth-fixed location
//!
//! This module defines [`Propagator`], the orchestrator of the pipeline, together with its
//! configuration ([`PropagatorConfig`], [`PropagatorConfigBuilder`]) and output values
//! ([`SatLocation`], [`PropagationState`]).
//!
//! ## Pipeline
//!
//! For a target instant `t`, [`Propagator::propagate_state`] runs, in this fixed order:
//!
//! 1. elapsed time since the element epoch (`Δt < 0` is rejected),
//! 2. semi-major / semi-minor axes from the mean motion (Kepler's third law),
//! 3. mean anomaly at `t` (quadratic in `Δt`, fractional revolutions),
//! 4. eccentric anomaly ([`solve_kepler`]),
//! 5. orbital-plane position ([`orbital_plane_position`]),
//! 6. secular drift of ω and Ω ([`secular_correction`]),
//! 7. equatorial frame ([`perifocal_to_equatorial`]),
//! 8. Earth-fixed frame ([`equatorial_to_earth_fixed`]),
//! 9. latitude / longitude / altitude ([`project`]).
//!
//! Each stage consumes the previous stage's output plus the static elements only. The
//! propagator holds no state besides its configuration, so one instance can be shared across
//! threads and called for many satellites independently.
//!
//! ## Logging
//!
//! Stage intermediates are emitted through `tracing` at debug level when the configured
//! [`LogLevel`] is [`LogLevel::Debug`]. The level is a plain configuration value carried by the
//! propagator; installing a subscriber is up to the application.
use std::str::FromStr;

use hifitime::{Epoch, TimeScale, Unit};
use nalgebra::Vector3;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    catalog::TleCatalog,
    constants::{
        Day, Degree, Kilometer, Radian, RevPerDay, DPI, MU_SCALED, ORBIT_FLATTENING,
    },
    geodetic::{project, GeodeticPosition},
    kepler::solve_kepler,
    orbital_elements::OrbitalElements,
    perturbation::secular_correction,
    ref_system::{
        equatorial_to_earth_fixed, orbital_plane_position, perifocal_to_equatorial,
        sidereal_angle,
    },
    satloc_errors::SatlocError,
    time::elapsed_days,
    tle::TleDecoder,
};

/// Verbosity of the diagnostics emitted by the propagation pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Failures only
    Error,
    /// Failures and batch summaries
    #[default]
    Info,
    /// Everything, including every stage intermediate
    Debug,
}

impl LogLevel {
    /// Level from an optional environment value such as `STARLINK_LOG_LEVEL`.
    ///
    /// Missing or unknown values fall back to [`LogLevel::Info`].
    pub fn from_env_value(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }

    /// True when messages of `level` should be emitted under this verbosity.
    pub fn enables(&self, level: LogLevel) -> bool {
        level <= *self
    }
}

impl FromStr for LogLevel {
    type Err = SatlocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ERROR" => Ok(LogLevel::Error),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            other => Err(SatlocError::InvalidConfig(format!(
                "unknown log level {other:?}"
            ))),
        }
    }
}

/// Configuration of a [`Propagator`].
///
/// Fields
/// -----------------
/// * `log_level` – verbosity of the pipeline diagnostics.
/// * `velocity_step_seconds` – sampling interval of the finite-difference velocity (1 s).
/// * `verify_checksum` – whether TLEs decoded through the propagator check their checksums.
#[derive(Debug, Clone, PartialEq)]
pub struct PropagatorConfig {
    pub log_level: LogLevel,
    pub velocity_step_seconds: f64,
    pub verify_checksum: bool,
}

impl Default for PropagatorConfig {
    fn default() -> Self {
        PropagatorConfig {
            log_level: LogLevel::Info,
            velocity_step_seconds: 1.0,
            verify_checksum: false,
        }
    }
}

impl PropagatorConfig {
    /// Construct a new [`PropagatorConfig`] with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`PropagatorConfigBuilder`] starting from the defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use satloc::propagator::{LogLevel, PropagatorConfig};
    ///
    /// let config = PropagatorConfig::builder()
    ///     .log_level(LogLevel::Debug)
    ///     .verify_checksum(true)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(config.velocity_step_seconds, 1.0);
    /// ```
    pub fn builder() -> PropagatorConfigBuilder {
        PropagatorConfigBuilder::new()
    }
}

/// Builder for [`PropagatorConfig`], with validation.
#[derive(Debug, Clone, Default)]
pub struct PropagatorConfigBuilder {
    config: PropagatorConfig,
}

impl PropagatorConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: PropagatorConfig::default(),
        }
    }

    pub fn log_level(mut self, v: LogLevel) -> Self {
        self.config.log_level = v;
        self
    }
    pub fn velocity_step_seconds(mut self, v: f64) -> Self {
        self.config.velocity_step_seconds = v;
        self
    }
    pub fn verify_checksum(mut self, v: bool) -> Self {
        self.config.verify_checksum = v;
        self
    }

    /// Validate and return the configuration.
    ///
    /// Errors
    /// ----------
    /// * [`SatlocError::InvalidConfig`] if the velocity step is not a finite positive number.
    pub fn build(self) -> Result<PropagatorConfig, SatlocError> {
        let step = self.config.velocity_step_seconds;
        if !step.is_finite() || step <= 0.0 {
            return Err(SatlocError::InvalidConfig(format!(
                "velocity_step_seconds must be > 0, got {step}"
            )));
        }
        Ok(self.config)
    }
}

/// Location of a satellite at one instant.
///
/// Units
/// -----------------
/// * `x`, `y`, `z`: Earth-fixed Cartesian coordinates, km
/// * `latitude`, `longitude`: degrees, spherical Earth
/// * `altitude`: km above the spherical Earth
/// * `velocity`: km/s, only set by [`Propagator::locate`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SatLocation {
    pub x: Kilometer,
    pub y: Kilometer,
    pub z: Kilometer,
    pub latitude: Degree,
    pub longitude: Degree,
    pub altitude: Kilometer,
    pub velocity: Option<f64>,
}

impl SatLocation {
    /// Earth-fixed position vector, km.
    pub fn earth_fixed(&self) -> Vector3<Kilometer> {
        Vector3::new(self.x, self.y, self.z)
    }
}

/// Every intermediate quantity of one propagation.
#[derive(Debug, Clone, PartialEq)]
pub struct PropagationState {
    /// Time since the element epoch, days
    pub elapsed_days: Day,
    /// km
    pub semi_major_axis: Kilometer,
    /// km, informational
    pub semi_minor_axis: Kilometer,
    /// Mean anomaly at the target instant, radians
    pub mean_anomaly: Radian,
    /// radians
    pub eccentric_anomaly: Radian,
    /// Last Newton–Raphson correction of the Kepler solve
    pub kepler_residual: f64,
    /// `(u, v, 0)`, km
    pub orbital_plane: Vector3<Kilometer>,
    /// Argument of perigee after secular drift, degrees
    pub arg_of_perigee: Degree,
    /// Right ascension of the ascending node after secular drift, degrees
    pub raan: Degree,
    /// km
    pub equatorial: Vector3<Kilometer>,
    /// Greenwich sidereal angle, radians
    pub sidereal_angle: Radian,
    /// km
    pub earth_fixed: Vector3<Kilometer>,
    pub geodetic: GeodeticPosition,
}

impl From<&PropagationState> for SatLocation {
    fn from(state: &PropagationState) -> Self {
        SatLocation {
            x: state.earth_fixed.x,
            y: state.earth_fixed.y,
            z: state.earth_fixed.z,
            latitude: state.geodetic.latitude,
            longitude: state.geodetic.longitude,
            altitude: state.geodetic.altitude,
            velocity: None,
        }
    }
}

/// Semi-major and semi-minor axes (km) from the mean motion (rev/day).
///
/// `a = ∛(μ / (4π²·n²))`; `b = √(a² − a²·f²)` only has an informational role.
pub fn semi_axes(mean_motion: RevPerDay) -> (Kilometer, Kilometer) {
    let a = (MU_SCALED / (DPI * DPI * mean_motion * mean_motion)).cbrt();
    let b = (a * a - a * a * ORBIT_FLATTENING * ORBIT_FLATTENING).sqrt();
    (a, b)
}

/// Mean anomaly (radians) after `elapsed_days`.
///
/// `M = M0/360 + n·Δt + ½·ṅ·Δt²` revolutions, of which only the fractional part is kept.
pub fn mean_anomaly_at(
    mean_anomaly: Degree,
    mean_motion: RevPerDay,
    mean_motion_dot: f64,
    elapsed_days: Day,
) -> Radian {
    let revolutions = mean_anomaly / 360.0
        + mean_motion * elapsed_days
        + 0.5 * mean_motion_dot * elapsed_days * elapsed_days;
    revolutions.fract() * DPI
}

/// Simplified analytical propagator.
#[derive(Debug, Clone, Default)]
pub struct Propagator {
    config: PropagatorConfig,
}

impl Propagator {
    pub fn new(config: PropagatorConfig) -> Self {
        Propagator { config }
    }

    pub fn config(&self) -> &PropagatorConfig {
        &self.config
    }

    /// TLE decoder configured like this propagator.
    pub fn decoder(&self) -> TleDecoder {
        TleDecoder::new(self.config.verify_checksum)
    }

    fn debug_enabled(&self) -> bool {
        self.config.log_level.enables(LogLevel::Debug)
    }

    /// Run the whole pipeline and keep every intermediate.
    ///
    /// Arguments
    /// -----------------
    /// * `elements`: the decoded element set
    /// * `target`: the target instant, interpreted in UTC
    ///
    /// Return
    /// ----------
    /// * the [`PropagationState`] at `target`
    ///
    /// Errors
    /// ----------
    /// * [`SatlocError::TargetBeforeEpoch`] when `target` precedes the element epoch. The model
    ///   only propagates forward; this error must not be recovered into a position.
    pub fn propagate_state(
        &self,
        elements: &OrbitalElements,
        target: Epoch,
    ) -> Result<PropagationState, SatlocError> {
        let target = target.to_time_scale(TimeScale::UTC);
        let epoch = elements.epoch();

        if !elements.is_elliptical() && self.config.log_level.enables(LogLevel::Error) {
            warn!(
                eccentricity = elements.eccentricity,
                mean_motion = elements.mean_motion,
                "elements outside the elliptical domain, results are undefined"
            );
        }

        let dt = elapsed_days(epoch, target);
        if dt < 0.0 {
            return Err(SatlocError::TargetBeforeEpoch {
                target,
                epoch,
                elapsed_days: dt,
            });
        }

        let (a, b) = semi_axes(elements.mean_motion);
        let mean_anomaly = mean_anomaly_at(
            elements.mean_anomaly,
            elements.mean_motion,
            elements.mean_motion_dot,
            dt,
        );

        let kepler = solve_kepler(elements.eccentricity, mean_anomaly);
        let orbital_plane =
            orbital_plane_position(a, elements.eccentricity, kepler.eccentric_anomaly);

        let drifted = secular_correction(
            elements.raan,
            elements.arg_of_perigee,
            elements.inclination,
            a,
            dt,
        );

        let rotation = perifocal_to_equatorial(
            drifted.arg_of_perigee.to_radians(),
            elements.inclination.to_radians(),
            drifted.raan.to_radians(),
        );
        let equatorial = rotation * orbital_plane;

        let theta = sidereal_angle(target);
        let earth_fixed = equatorial_to_earth_fixed(&equatorial, target);
        let geodetic = project(&earth_fixed);

        if self.debug_enabled() {
            debug!(%target, elapsed_days = dt, "elapsed time since epoch");
            debug!(semi_major_axis = a, semi_minor_axis = b, "semi axes [km]");
            debug!(
                mean_anomaly,
                eccentric_anomaly = kepler.eccentric_anomaly,
                residual = kepler.residual,
                "anomalies [rad]"
            );
            debug!(u = orbital_plane.x, v = orbital_plane.y, "orbital plane [km]");
            debug!(
                arg_of_perigee = drifted.arg_of_perigee,
                raan = drifted.raan,
                "perturbed angles [deg]"
            );
            debug!(
                x = equatorial.x,
                y = equatorial.y,
                z = equatorial.z,
                "equatorial frame [km]"
            );
            debug!(sidereal_angle = theta.to_degrees(), "sidereal angle [deg]");
            debug!(
                x = earth_fixed.x,
                y = earth_fixed.y,
                z = earth_fixed.z,
                "earth fixed frame [km]"
            );
            debug!(
                latitude = geodetic.latitude,
                longitude = geodetic.longitude,
                altitude = geodetic.altitude,
                "geodetic position"
            );
        }

        Ok(PropagationState {
            elapsed_days: dt,
            semi_major_axis: a,
            semi_minor_axis: b,
            mean_anomaly,
            eccentric_anomaly: kepler.eccentric_anomaly,
            kepler_residual: kepler.residual,
            orbital_plane,
            arg_of_perigee: drifted.arg_of_perigee,
            raan: drifted.raan,
            equatorial,
            sidereal_angle: theta,
            earth_fixed,
            geodetic,
        })
    }

    /// Position of the satellite at `target`, without velocity.
    ///
    /// See also
    /// ------------
    /// * [`Propagator::propagate_state`] – Same pipeline keeping the intermediates.
    /// * [`Propagator::locate`] – Position with the finite-difference velocity.
    pub fn propagate(
        &self,
        elements: &OrbitalElements,
        target: Epoch,
    ) -> Result<SatLocation, SatlocError> {
        self.propagate_state(elements, target)
            .map(|state| SatLocation::from(&state))
    }

    /// Speed estimate in km/s from two propagations one velocity step apart.
    ///
    /// Finite difference of the Earth-fixed positions at `target` and
    /// `target + velocity_step_seconds`; accurate enough on low Earth orbit timescales only.
    pub fn velocity_estimate(
        &self,
        elements: &OrbitalElements,
        target: Epoch,
    ) -> Result<f64, SatlocError> {
        let first = self.propagate(elements, target)?;
        self.velocity_between(elements, &first, target)
    }

    fn velocity_between(
        &self,
        elements: &OrbitalElements,
        first: &SatLocation,
        target: Epoch,
    ) -> Result<f64, SatlocError> {
        let step = self.config.velocity_step_seconds;
        let second = self.propagate(elements, target + Unit::Second * step)?;
        let velocity = (second.earth_fixed() - first.earth_fixed()).norm() / step;

        if self.debug_enabled() {
            let diff = second.earth_fixed() - first.earth_fixed();
            debug!(dx = diff.x, dy = diff.y, dz = diff.z, velocity, "velocity [km/s]");
        }
        Ok(velocity)
    }

    /// Position at `target` with its finite-difference velocity filled in.
    pub fn locate(
        &self,
        elements: &OrbitalElements,
        target: Epoch,
    ) -> Result<SatLocation, SatlocError> {
        let location = self.propagate(elements, target)?;
        let velocity = self.velocity_between(elements, &location, target)?;
        Ok(SatLocation {
            velocity: Some(velocity),
            ..location
        })
    }

    /// Locate several satellites of a catalog at the same instant.
    ///
    /// Each name is resolved with [`TleCatalog::find`], decoded with [`Propagator::decoder`] and
    /// located with [`Propagator::locate`]. A failure on one satellite is reported in its own
    /// slot and does not stop the batch.
    ///
    /// Return
    /// ----------
    /// * one `(name, result)` pair per requested name, in request order
    pub fn locate_catalog<S: AsRef<str>>(
        &self,
        catalog: &TleCatalog,
        names: &[S],
        target: Epoch,
    ) -> Vec<(String, Result<SatLocation, SatlocError>)> {
        let decoder = self.decoder();
        let results: Vec<_> = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                let result = catalog
                    .find(name)
                    .and_then(|entry| entry.decode(&decoder))
                    .and_then(|tle| self.locate(&tle.elements, target));

                if let Err(err) = &result {
                    if self.config.log_level.enables(LogLevel::Error) {
                        warn!(satellite = name, error = %err, "unable to locate satellite");
                    }
                }
                (name.to_string(), result)
            })
            .collect();

        if self.config.log_level.enables(LogLevel::Info) {
            let located = results.iter().filter(|(_, r)| r.is_ok()).count();
            info!(requested = names.len(), located, %target, "catalog located");
        }
        results
    }

    /// Locate every satellite of a catalog at the same instant.
    pub fn locate_all(
        &self,
        catalog: &TleCatalog,
        target: Epoch,
    ) -> Vec<(String, Result<SatLocation, SatlocError>)> {
        self.locate_catalog(catalog, &catalog.names(), target)
    }
}
