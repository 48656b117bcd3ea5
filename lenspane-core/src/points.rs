use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A point in the pane's logical 3D space.
///
/// `z` is typically used as depth: lens models feed it into their effective
/// depth term, and the pane maps it to the object's stacking order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ORIGIN: Point3 = Point3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Splat a single value across all three components.
    pub fn splat(value: f64) -> Self {
        Self::new(value, value, value)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Component-wise product, used for pane-space scaling.
    pub fn scale(&self, factor: &Point3) -> Self {
        Self::new(self.x * factor.x, self.y * factor.y, self.z * factor.z)
    }
}

impl Add for Point3 {
    type Output = Point3;

    fn add(self, other: Point3) -> Point3 {
        Point3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Point3 {
    type Output = Point3;

    fn sub(self, other: Point3) -> Point3 {
        Point3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Point3 {
    type Output = Point3;

    fn mul(self, scalar: f64) -> Point3 {
        Point3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl From<(f64, f64, f64)> for Point3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

// Array forms: missing trailing components default to zero.
impl From<[f64; 3]> for Point3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[f64; 2]> for Point3 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y, 0.0)
    }
}

impl From<[f64; 1]> for Point3 {
    fn from([x]: [f64; 1]) -> Self {
        Self::new(x, 0.0, 0.0)
    }
}

/// Cylindrical-polar form of a [`Point3`].
///
/// - `r`: radial distance in the xy-plane, always ≥ 0 when derived via
///   [`crate::projection::to_polar`]
/// - `phi`: azimuth in (−π, π], with the convention that the xy-origin maps
///   to phi = 0
/// - `z`: depth, passed through unchanged
///
/// Derived from a cartesian point for the duration of a lens remapping and
/// never persisted independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarCoord {
    pub r: f64,
    pub phi: f64,
    pub z: f64,
}

impl PolarCoord {
    pub fn new(r: f64, phi: f64, z: f64) -> Self {
        Self { r, phi, z }
    }

    /// Same angle and depth with a different radius.
    pub fn with_radius(&self, r: f64) -> Self {
        Self::new(r, self.phi, self.z)
    }
}
