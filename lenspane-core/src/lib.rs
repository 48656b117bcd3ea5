pub mod lens;
pub mod points;
pub mod projection;

pub use lens::{Identity, Lens, LensKind, PointTransform};
pub use points::{Point3, PolarCoord};
pub use projection::{to_plane, to_polar};
