//! Typed wrappers around kernel geometry handles.
//!
//! Every wrapper is generic over its [`Handle`](crate::handle::Handle): `Point` (the default,
//! `Point<Owned>`) owns its geometry, while `Point<Borrowed<'a>>` is a view into a parent that
//! lives for `'a`. [`Geometry`] unifies the seven wrappers and is what the kernel's type tag
//! dispatches to.

/// Generates the parts every typed wrapper shares: the struct itself, tag-checked construction,
/// [`KernelScalar`](crate::trait_::KernelScalar) and conversions to and from
/// [`Geometry`].
macro_rules! impl_scalar {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy)]
        pub struct $name<H: $crate::handle::Handle = $crate::handle::Owned>(pub(crate) H);

        impl<H: $crate::handle::Handle> $name<H> {
            /// Wrap `handle` without checking the kernel type.
            pub fn new_unchecked(handle: H) -> Self {
                Self(handle)
            }

            /// Wrap `handle`, checking that the kernel reports the matching type.
            pub fn try_new(handle: H) -> $crate::error::Result<Self> {
                let reported = handle.borrowed().geometry_type()?;
                if reported == $crate::datatypes::GeometryType::$name {
                    Ok(Self(handle))
                } else {
                    Err($crate::error::GeoShapeError::IncorrectType(
                        format!(
                            "expected {}, kernel reported {}",
                            $crate::datatypes::GeometryType::$name,
                            reported
                        )
                        .into(),
                    ))
                }
            }

            pub fn into_handle(self) -> H {
                self.0
            }
        }

        impl<H: $crate::handle::Handle> $crate::trait_::KernelScalar for $name<H> {
            fn handle(&self) -> $crate::handle::Borrowed<'_> {
                self.0.borrowed()
            }

            fn owns_handle(&self) -> bool {
                self.0.owns_handle()
            }
        }

        impl<H: $crate::handle::Handle> From<$name<H>> for $crate::scalar::Geometry<H> {
            fn from(value: $name<H>) -> Self {
                $crate::scalar::Geometry::$name(value)
            }
        }

        impl<H: $crate::handle::Handle> TryFrom<$crate::scalar::Geometry<H>> for $name<H> {
            type Error = $crate::error::GeoShapeError;

            fn try_from(value: $crate::scalar::Geometry<H>) -> $crate::error::Result<Self> {
                match value {
                    $crate::scalar::Geometry::$name(geom) => Ok(geom),
                    other => Err($crate::error::GeoShapeError::IncorrectType(
                        format!(
                            "expected {}, found {}",
                            $crate::datatypes::GeometryType::$name,
                            other.kind()
                        )
                        .into(),
                    )),
                }
            }
        }
    };
}

/// Generates the members accessors shared by the four collection wrappers.
macro_rules! impl_collection {
    ($name:ident) => {
        impl<H: $crate::handle::Handle> $name<H> {
            /// Number of member geometries.
            pub fn num_geometries(&self) -> usize {
                self.geoms().len()
            }

            /// A lazy view of the member geometries, borrowed from this collection.
            pub fn geoms(&self) -> $crate::scalar::GeometrySequence<'_> {
                $crate::scalar::GeometrySequence::new(self.0.borrowed())
            }
        }
    };
}

pub use geometry::{Geometry, GeometryRef};
pub use geometrycollection::GeometryCollection;
pub use linestring::LineString;
pub use multilinestring::MultiLineString;
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;
pub use sequence::{GeometryIter, GeometrySequence};

pub mod geometry;
pub mod geometrycollection;
pub mod linestring;
pub mod multilinestring;
pub mod multipoint;
pub mod multipolygon;
pub mod point;
pub mod polygon;
pub mod sequence;
