//! # Constants and type definitions for satloc
//!
//! This module centralizes the **physical constants**, **model coefficients** and **unit
//! aliases** used by the propagation pipeline.
//!
//! ## Overview
//!
//! - Earth model constants (spherical radius, flattening-like ratio)
//! - Kepler's third law constant folded into km / day units
//! - Secular perturbation coefficient
//! - Linear sidereal-time model anchored at 2006-01-01T00:00:00 UTC
//! - Type aliases documenting the unit carried by an `f64`
//!
//! The Earth radius is shared by the perturbation model and the altitude computation.
//! The perturbation coefficient was fitted against this polar value, so swapping it for the
//! equatorial radius requires re-deriving [`PERTURBATION_COEFF`].

// -------------------------------------------------------------------------------------------------
// Mathematical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

// -------------------------------------------------------------------------------------------------
// Earth model
// -------------------------------------------------------------------------------------------------

/// Mean Earth radius used across the whole pipeline, in kilometers (polar value)
pub const EARTH_RADIUS: Kilometer = 6356.752;

/// Gravitational parameter scaled for mean motions in rev/day, giving a semi-major axis in km
pub const MU_SCALED: f64 = 2.975537e15;

/// Flattening-like ratio used for the informational semi-minor axis
pub const ORBIT_FLATTENING: f64 = 0.0001679;

/// Coefficient of the linear secular drift of the node and the perigee
pub const PERTURBATION_COEFF: f64 = 0.174;

// -------------------------------------------------------------------------------------------------
// Sidereal time model
// -------------------------------------------------------------------------------------------------

/// Year of the sidereal reference epoch (2006-01-01T00:00:00 UTC)
pub const SIDEREAL_REF_YEAR: i32 = 2006;

/// Fraction of a sidereal turn at the reference epoch
pub const SIDEREAL_CYCLES_AT_REF: f64 = 0.27644444444;

/// Sidereal turns per solar day
pub const SIDEREAL_CYCLES_PER_DAY: f64 = 1.002737909;

// -------------------------------------------------------------------------------------------------
// Solver controls
// -------------------------------------------------------------------------------------------------

/// Fixed number of Newton–Raphson steps performed on Kepler's equation
pub const KEPLER_ITERATIONS: usize = 10;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Duration in (solar) days
pub type Day = f64;
/// Revolutions per day
pub type RevPerDay = f64;
