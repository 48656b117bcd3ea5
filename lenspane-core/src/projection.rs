//! Pure conversions between cartesian points and cylindrical-polar
//! coordinates.
//!
//! Every lens model round-trips through these: `to_plane(remap(to_polar(p)))`.
//! Both directions leave `z` untouched.

use crate::points::{Point3, PolarCoord};

/// Converts a cartesian point to cylindrical-polar coordinates.
///
/// `r = hypot(x, y)`, `phi` is the two-argument arctangent of (y, x) in
/// (−π, π]. The xy-origin maps to phi = 0 by convention; IEEE `atan2` would
/// yield ±π there for a negative-zero x, so that case is handled explicitly.
pub fn to_polar(point: Point3) -> PolarCoord {
    let r = point.x.hypot(point.y);
    let phi = if point.x == 0.0 && point.y == 0.0 {
        0.0
    } else {
        point.y.atan2(point.x)
    };
    PolarCoord::new(r, phi, point.z)
}

/// Converts cylindrical-polar coordinates back to a cartesian point.
pub fn to_plane(polar: PolarCoord) -> Point3 {
    Point3::new(
        polar.r * polar.phi.cos(),
        polar.r * polar.phi.sin(),
        polar.z,
    )
}
