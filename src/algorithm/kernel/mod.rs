//! Geometry operations delegated to the geometry kernel.
//!
//! Each trait has a blanket implementation for every [`KernelScalar`](crate::trait_::KernelScalar),
//! so the operations are available on [`Geometry`](crate::scalar::Geometry), on each typed
//! wrapper, and on borrowed members of collections alike.

mod area;
mod distance;
mod intersection;
mod intersects;
mod is_empty;

pub use area::Area;
pub use distance::Distance;
pub use intersection::Intersection;
pub use intersects::Intersects;
pub use is_empty::IsEmpty;
