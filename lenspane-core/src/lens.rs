//! The lens-model family.
//!
//! Every lens shares one pipeline: convert the point to cylindrical-polar
//! form, remap the radius as a function of the original radius and depth,
//! convert back. The variants differ only in the radius law, so they form a
//! closed [`LensKind`] set matched in one place rather than a hierarchy.

use crate::points::{Point3, PolarCoord};
use crate::projection::{to_plane, to_polar};
use dyn_clone::DynClone;
use serde::{Deserialize, Serialize};

/// A policy mapping a 3D point to its projected position.
///
/// Implementations are stateless after construction and are shared across
/// panes by cloning; `DynClone` keeps boxed filters clonable.
pub trait PointTransform: DynClone {
    fn transform(&self, point: Point3) -> Point3;
}

dyn_clone::clone_trait_object!(PointTransform);

/// Passthrough transform, the default pane filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl PointTransform for Identity {
    fn transform(&self, point: Point3) -> Point3 {
        point
    }
}

/// The closed set of supported optical projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LensKind {
    /// `r' = f · r / d'`, the base pinhole projection.
    Rectilinear,
    /// `r' = f · atan(r / d')`, fisheye, linear in the incidence angle.
    Equidistant,
    /// `r' = f · r / sqrt(r² + d'²)`, fisheye, sine of the incidence angle.
    Orthographic,
    /// `r' = 2f · sin(θ/2)` with `sin θ = r / sqrt(r² + d'²)`, the equal-area
    /// fisheye.
    Equisolid,
    /// `r' = 2f · tan(θ/2)` with `tan θ = r / d'`, stereographic-like and
    /// angle-preserving.
    Conform,
}

/// A lens projection parameterized by focal length `f` and lens-to-subject
/// distance `d`.
///
/// The radius law sees each point through its effective depth `d' = z + d − f`.
/// At `d' = 0` (the focal plane) the law is singular: the result goes
/// non-finite under IEEE arithmetic and is deliberately not special-cased.
/// Callers needing robustness clamp `d'` away from zero or post-filter
/// non-finite output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lens {
    kind: LensKind,
    f: f64,
    d: f64,
}

impl Lens {
    /// Create a lens with default parameters (`f = 1`, `d = 1.5·f`).
    pub fn new(kind: LensKind) -> Self {
        Self::with_focal_length(kind, 1.0)
    }

    /// Create a lens with the given focal length and the default distance
    /// `d = 1.5·f`.
    pub fn with_focal_length(kind: LensKind, f: f64) -> Self {
        Self::with_parameters(kind, f, 1.5 * f)
    }

    /// Create a lens with explicit focal length and distance.
    pub fn with_parameters(kind: LensKind, f: f64, d: f64) -> Self {
        Self { kind, f, d }
    }

    pub fn kind(&self) -> LensKind {
        self.kind
    }

    pub fn focal_length(&self) -> f64 {
        self.f
    }

    pub fn distance(&self) -> f64 {
        self.d
    }

    /// Remap the polar radius through this lens's law.
    ///
    /// Leaves `phi` and `z` untouched; only the radius changes.
    pub fn remap(&self, polar: PolarCoord) -> PolarCoord {
        let depth = polar.z + self.d - self.f;
        let r = match self.kind {
            LensKind::Rectilinear => self.f * polar.r / depth,
            LensKind::Equidistant => self.f * (polar.r / depth).atan(),
            LensKind::Orthographic => {
                self.f * polar.r / (polar.r * polar.r + depth * depth).sqrt()
            }
            LensKind::Equisolid => {
                let sin_theta = polar.r / (polar.r * polar.r + depth * depth).sqrt();
                2.0 * self.f * (sin_theta.asin() / 2.0).sin()
            }
            LensKind::Conform => 2.0 * self.f * ((polar.r / depth).atan() / 2.0).tan(),
        };
        polar.with_radius(r)
    }
}

impl PointTransform for Lens {
    fn transform(&self, point: Point3) -> Point3 {
        to_plane(self.remap(to_polar(point)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn all_kinds() -> [LensKind; 5] {
        [
            LensKind::Rectilinear,
            LensKind::Equidistant,
            LensKind::Orthographic,
            LensKind::Equisolid,
            LensKind::Conform,
        ]
    }

    #[test]
    fn identity_returns_input_unchanged() {
        let samples = [
            Point3::ORIGIN,
            Point3::new(1.0, -2.0, 3.0),
            Point3::new(-0.5, 0.0, 100.0),
        ];
        for point in samples {
            assert_eq!(Identity.transform(point), point);
        }
    }

    #[test]
    fn default_parameters() {
        let lens = Lens::new(LensKind::Rectilinear);
        assert_eq!(lens.focal_length(), 1.0);
        assert_eq!(lens.distance(), 1.5);

        let wide = Lens::with_focal_length(LensKind::Equidistant, 2.0);
        assert_eq!(wide.distance(), 3.0);
    }

    // f = 1, d = 1.5 and the point (1, 0, 0) give effective depth 0.5; each
    // law has a hand-computable radius there.
    #[test]
    fn known_radii_at_reference_point() {
        let point = Point3::new(1.0, 0.0, 0.0);
        let expected = [
            (LensKind::Rectilinear, 2.0),
            (LensKind::Equidistant, 2.0_f64.atan()),
            (LensKind::Orthographic, 1.0 / 1.25_f64.sqrt()),
            (LensKind::Equisolid, 1.0514622242382672),
            (LensKind::Conform, 1.2360679774997896),
        ];
        for (kind, radius) in expected {
            let projected = Lens::new(kind).transform(point);
            // phi = 0 is preserved, so the result stays on the x-axis.
            assert!(
                (projected.x - radius).abs() < EPSILON,
                "{:?}: expected r {}, got {:?}",
                kind,
                radius,
                projected
            );
            assert!(projected.y.abs() < EPSILON);
            assert_eq!(projected.z, 0.0);
        }
    }

    #[test]
    fn azimuth_is_preserved() {
        let point = Point3::new(-1.0, 2.0, 0.25);
        let original_phi = to_polar(point).phi;
        for kind in all_kinds() {
            let remapped = Lens::new(kind).remap(to_polar(point));
            assert_eq!(remapped.phi, original_phi, "{:?} moved phi", kind);
            assert_eq!(remapped.z, 0.25);
        }
    }

    #[test]
    fn optical_axis_stays_on_the_optical_axis() {
        // r = 0 must map to r = 0 for every variant when d' != 0.
        for kind in all_kinds() {
            for z in [0.0, 1.0, -2.0, 10.0] {
                let projected = Lens::new(kind).transform(Point3::new(0.0, 0.0, z));
                assert_eq!(
                    projected,
                    Point3::new(0.0, 0.0, z),
                    "{:?} left the axis at z {}",
                    kind,
                    z
                );
            }
        }
    }

    // With f = 1, d = 1.5, the focal plane sits at z = -0.5 (d' = 0).
    #[test]
    fn rectilinear_diverges_on_the_focal_plane() {
        let lens = Lens::new(LensKind::Rectilinear);
        let projected = lens.transform(Point3::new(1.0, 0.0, -0.5));
        assert!(projected.x.is_infinite());
    }

    #[test]
    fn bounded_variants_saturate_on_the_focal_plane() {
        use std::f64::consts::{FRAC_PI_2, SQRT_2};

        let point = Point3::new(1.0, 0.0, -0.5);
        let cases = [
            (LensKind::Equidistant, FRAC_PI_2),
            (LensKind::Orthographic, 1.0),
            (LensKind::Equisolid, SQRT_2),
            (LensKind::Conform, 2.0),
        ];
        for (kind, radius) in cases {
            let projected = Lens::new(kind).transform(point);
            assert!(
                (projected.x - radius).abs() < EPSILON,
                "{:?}: expected {}, got {:?}",
                kind,
                radius,
                projected
            );
        }
    }

    #[test]
    fn focal_plane_origin_is_nan_for_every_variant() {
        // r = 0 and d' = 0 is 0/0 territory; it surfaces as NaN, never as a
        // panic, and never gets silently repaired.
        for kind in all_kinds() {
            let projected = Lens::new(kind).transform(Point3::new(0.0, 0.0, -0.5));
            assert!(projected.x.is_nan(), "{:?} masked the singularity", kind);
        }
    }

    #[test]
    fn boxed_filters_are_clonable() {
        let filter: Box<dyn PointTransform> = Box::new(Lens::new(LensKind::Conform));
        let copy = filter.clone();
        let point = Point3::new(0.5, -0.5, 1.0);
        assert_eq!(filter.transform(point), copy.transform(point));
    }
}
