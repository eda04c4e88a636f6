use crate::datatypes::GeometryType;
use crate::error::Result;
use crate::handle::{Borrowed, Handle, Owned};
use crate::scalar::*;
use crate::trait_::KernelScalar;

/// Any of the seven geometry types.
///
/// The variant always matches the type the kernel reports for the handle, since values are only
/// produced by [`Geometry::try_from_handle`] or by constructors of the typed wrappers.
#[derive(Debug, Clone, Copy)]
pub enum Geometry<H: Handle = Owned> {
    Point(Point<H>),
    LineString(LineString<H>),
    Polygon(Polygon<H>),
    MultiPoint(MultiPoint<H>),
    MultiLineString(MultiLineString<H>),
    MultiPolygon(MultiPolygon<H>),
    GeometryCollection(GeometryCollection<H>),
}

/// A geometry borrowed from a parent that lives for `'a`.
pub type GeometryRef<'a> = Geometry<Borrowed<'a>>;

impl<H: Handle> Geometry<H> {
    /// Wrap `handle` in the variant matching its kernel type.
    pub fn try_from_handle(handle: H) -> Result<Self> {
        let geom = match handle.borrowed().geometry_type()? {
            GeometryType::Point => Geometry::Point(Point::new_unchecked(handle)),
            GeometryType::LineString => Geometry::LineString(LineString::new_unchecked(handle)),
            GeometryType::Polygon => Geometry::Polygon(Polygon::new_unchecked(handle)),
            GeometryType::MultiPoint => Geometry::MultiPoint(MultiPoint::new_unchecked(handle)),
            GeometryType::MultiLineString => {
                Geometry::MultiLineString(MultiLineString::new_unchecked(handle))
            }
            GeometryType::MultiPolygon => {
                Geometry::MultiPolygon(MultiPolygon::new_unchecked(handle))
            }
            GeometryType::GeometryCollection => {
                Geometry::GeometryCollection(GeometryCollection::new_unchecked(handle))
            }
        };
        Ok(geom)
    }

    /// The type of this variant.
    pub fn kind(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    pub fn into_handle(self) -> H {
        match self {
            Geometry::Point(g) => g.into_handle(),
            Geometry::LineString(g) => g.into_handle(),
            Geometry::Polygon(g) => g.into_handle(),
            Geometry::MultiPoint(g) => g.into_handle(),
            Geometry::MultiLineString(g) => g.into_handle(),
            Geometry::MultiPolygon(g) => g.into_handle(),
            Geometry::GeometryCollection(g) => g.into_handle(),
        }
    }
}

impl<H: Handle> KernelScalar for Geometry<H> {
    fn handle(&self) -> Borrowed<'_> {
        match self {
            Geometry::Point(g) => g.handle(),
            Geometry::LineString(g) => g.handle(),
            Geometry::Polygon(g) => g.handle(),
            Geometry::MultiPoint(g) => g.handle(),
            Geometry::MultiLineString(g) => g.handle(),
            Geometry::MultiPolygon(g) => g.handle(),
            Geometry::GeometryCollection(g) => g.handle(),
        }
    }

    fn owns_handle(&self) -> bool {
        match self {
            Geometry::Point(g) => g.owns_handle(),
            Geometry::LineString(g) => g.owns_handle(),
            Geometry::Polygon(g) => g.owns_handle(),
            Geometry::MultiPoint(g) => g.owns_handle(),
            Geometry::MultiLineString(g) => g.owns_handle(),
            Geometry::MultiPolygon(g) => g.owns_handle(),
            Geometry::GeometryCollection(g) => g.owns_handle(),
        }
    }
}
