//! # Rectangular Coordinates
//!
//! Heliocentric and geocentric positions are differenced as rectangular
//! vectors and converted back to spherical form. This module wraps an
//! `nalgebra::Vector3` with the spherical conversions the position
//! pipeline needs.
//!
//! ## Coordinate System Convention
//!
//! - **X-axis**: toward the equinox (longitude 0°, latitude 0°)
//! - **Y-axis**: toward longitude 90°, latitude 0°
//! - **Z-axis**: toward the pole of the reference plane
//!
//! ```rust
//! use meeus_ephem::coordinates::angle::Angle;
//! use meeus_ephem::coordinates::cartesian::Cartesian3;
//!
//! let v = Cartesian3::from_spherical(Angle::from_degrees(90.0), Angle::ZERO, 2.0);
//! assert!((v.y() - 2.0).abs() < 1e-12);
//! ```

use nalgebra::Vector3;

use super::angle::Angle;

/// Three-dimensional rectangular coordinates, units set by the caller (AU here)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cartesian3 {
    inner: Vector3<f64>,
}

impl Cartesian3 {
    /// Creates a vector from its components
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian3 {
            inner: Vector3::new(x, y, z),
        }
    }

    /// Builds rectangular coordinates from longitude, latitude and distance
    pub fn from_spherical(lon: Angle, lat: Angle, distance: f64) -> Self {
        let (sl, cl) = lon.sin_cos();
        let (sb, cb) = lat.sin_cos();
        Cartesian3::new(distance * cb * cl, distance * cb * sl, distance * sb)
    }

    /// Converts back to `(longitude, latitude, distance)`
    ///
    /// Longitude comes from `atan2(y, x)` and is not normalized; latitude is
    /// `atan2(z, hypot(x, y))`, which stays well conditioned near the poles.
    pub fn to_spherical(&self) -> (Angle, Angle, f64) {
        let (x, y, z) = (self.x(), self.y(), self.z());
        let lon = Angle::from_radians(y.atan2(x));
        let lat = Angle::from_radians(z.atan2(x.hypot(y)));
        (lon, lat, self.magnitude())
    }

    pub fn x(&self) -> f64 {
        self.inner.x
    }

    pub fn y(&self) -> f64 {
        self.inner.y
    }

    pub fn z(&self) -> f64 {
        self.inner.z
    }

    /// Euclidean length
    pub fn magnitude(&self) -> f64 {
        self.inner.norm()
    }
}

impl std::ops::Sub for Cartesian3 {
    type Output = Cartesian3;

    fn sub(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3 {
            inner: self.inner - other.inner,
        }
    }
}
