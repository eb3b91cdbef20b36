use nalgebra::Vector3;
use serde::Serialize;

use crate::constants::{Degree, Kilometer, EARTH_RADIUS};

/// Latitude, longitude and altitude over a spherical Earth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeodeticPosition {
    pub latitude: Degree,
    pub longitude: Degree,
    pub altitude: Kilometer,
}

/// Project an Earth-fixed position onto the spherical Earth.
///
/// `latitude = asin(Z / r)`, `longitude = atan2(Y, X)`, `altitude = r − R_E` with
/// `r = |(X, Y, Z)|` and `R_E` = [`EARTH_RADIUS`]. No flattening correction is applied.
///
/// The origin has no direction: latitude and longitude come out NaN and no error is raised.
pub fn project(earth_fixed: &Vector3<Kilometer>) -> GeodeticPosition {
    let r = earth_fixed.norm();
    // atan2(0, 0) is 0, keep the origin undefined on both angles
    let longitude = if r > 0.0 {
        earth_fixed.y.atan2(earth_fixed.x).to_degrees()
    } else {
        f64::NAN
    };
    GeodeticPosition {
        latitude: (earth_fixed.z / r).asin().to_degrees(),
        longitude,
        altitude: r - EARTH_RADIUS,
    }
}

#[cfg(test)]
mod geodetic_test {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_project_axes() {
        let pos = project(&Vector3::new(EARTH_RADIUS + 500.0, 0.0, 0.0));
        assert_eq!(pos.latitude, 0.0);
        assert_eq!(pos.longitude, 0.0);
        assert_relative_eq!(pos.altitude, 500.0, epsilon = 1e-9);

        let pos = project(&Vector3::new(0.0, -7000.0, 0.0));
        assert_relative_eq!(pos.longitude, -90.0, epsilon = 1e-12);

        let pos = project(&Vector3::new(0.0, 0.0, 7000.0));
        assert_relative_eq!(pos.latitude, 90.0, epsilon = 1e-12);
        assert_relative_eq!(pos.altitude, 7000.0 - EARTH_RADIUS, epsilon = 1e-9);
    }

    #[test]
    fn test_project_mid_latitude() {
        let (lat, lon, r) = (35.0_f64.to_radians(), 139.7_f64.to_radians(), 6900.0);
        let v = Vector3::new(
            r * lat.cos() * lon.cos(),
            r * lat.cos() * lon.sin(),
            r * lat.sin(),
        );
        let pos = project(&v);
        assert_relative_eq!(pos.latitude, 35.0, epsilon = 1e-9);
        assert_relative_eq!(pos.longitude, 139.7, epsilon = 1e-9);
        assert_relative_eq!(pos.altitude, 6900.0 - EARTH_RADIUS, epsilon = 1e-9);
    }

    #[test]
    fn test_origin_is_nan() {
        let pos = project(&Vector3::zeros());
        assert!(pos.latitude.is_nan());
        assert!(pos.longitude.is_nan());
        assert_eq!(pos.altitude, -EARTH_RADIUS);
    }
}
