//! Simplified analytical satellite propagation from Two-Line Element sets.
//!
//! ```rust
//! use satloc::{decode, Propagator};
//!
//! let elements = decode(
//!     "1 44714U 19074B   25117.42924319 -.00001157  00000+0 -58773-4 0  9990",
//!     "2 44714  53.0517 166.3609 0001116  99.1558 260.9557 15.06400606301084",
//! )
//! .unwrap();
//!
//! let location = Propagator::default()
//!     .locate(&elements, elements.epoch())
//!     .unwrap();
//! assert!(location.altitude > 300.0);
//! ```
pub mod catalog;
pub mod constants;
pub mod export;
pub mod geodetic;
pub mod kepler;
pub mod orbital_elements;
pub mod perturbation;
pub mod propagator;
pub mod ref_system;
pub mod satloc_errors;
pub mod time;
pub mod tle;

pub use catalog::{read_catalog_file, CatalogEntry, TleCatalog};
pub use orbital_elements::OrbitalElements;
pub use propagator::{
    LogLevel, PropagationState, Propagator, PropagatorConfig, PropagatorConfigBuilder,
    SatLocation,
};
pub use satloc_errors::SatlocError;
pub use tle::{decode, Tle, TleDecoder};
