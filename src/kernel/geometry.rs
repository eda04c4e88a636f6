use std::os::raw::c_int;

use super::{
    TYPE_GEOMETRYCOLLECTION, TYPE_LINESTRING, TYPE_MULTILINESTRING, TYPE_MULTIPOINT,
    TYPE_MULTIPOLYGON, TYPE_POINT, TYPE_POLYGON,
};

/// The object behind every kernel handle.
///
/// Callers only ever see `*mut KernelGeometry` / `*const KernelGeometry`; the layout is private
/// to the kernel.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelGeometry {
    pub(super) kind: Kind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum CollectionKind {
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

// Children are boxed so that `*_n` accessors can hand out pointers that stay valid while the
// parent grows.
#[allow(clippy::vec_box)]
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Kind {
    Point(Option<Xyz>),
    /// Every child is a non-empty point.
    LineString(Vec<Box<KernelGeometry>>),
    /// Every child is a linestring; the first one is the exterior ring. No rings means empty.
    Polygon(Vec<Box<KernelGeometry>>),
    Collection(CollectionKind, Vec<Box<KernelGeometry>>),
}

impl KernelGeometry {
    pub(super) fn point(coord: Option<Xyz>) -> Self {
        Self {
            kind: Kind::Point(coord),
        }
    }

    pub(super) fn line_string(points: Vec<Box<KernelGeometry>>) -> Self {
        Self {
            kind: Kind::LineString(points),
        }
    }

    pub(super) fn polygon(rings: Vec<Box<KernelGeometry>>) -> Self {
        Self {
            kind: Kind::Polygon(rings),
        }
    }

    pub(super) fn collection(kind: CollectionKind, children: Vec<Box<KernelGeometry>>) -> Self {
        Self {
            kind: Kind::Collection(kind, children),
        }
    }

    pub(super) fn empty_collection() -> Self {
        Self::collection(CollectionKind::GeometryCollection, vec![])
    }

    pub(super) fn type_id(&self) -> c_int {
        match &self.kind {
            Kind::Point(_) => TYPE_POINT,
            Kind::LineString(_) => TYPE_LINESTRING,
            Kind::Polygon(_) => TYPE_POLYGON,
            Kind::Collection(CollectionKind::MultiPoint, _) => TYPE_MULTIPOINT,
            Kind::Collection(CollectionKind::MultiLineString, _) => TYPE_MULTILINESTRING,
            Kind::Collection(CollectionKind::MultiPolygon, _) => TYPE_MULTIPOLYGON,
            Kind::Collection(CollectionKind::GeometryCollection, _) => TYPE_GEOMETRYCOLLECTION,
        }
    }

    pub(super) fn type_name(&self) -> &'static str {
        match &self.kind {
            Kind::Point(_) => "Point",
            Kind::LineString(_) => "LineString",
            Kind::Polygon(_) => "Polygon",
            Kind::Collection(CollectionKind::MultiPoint, _) => "MultiPoint",
            Kind::Collection(CollectionKind::MultiLineString, _) => "MultiLineString",
            Kind::Collection(CollectionKind::MultiPolygon, _) => "MultiPolygon",
            Kind::Collection(CollectionKind::GeometryCollection, _) => "GeometryCollection",
        }
    }

    pub(super) fn coord(&self) -> Option<Xyz> {
        match &self.kind {
            Kind::Point(coord) => *coord,
            _ => None,
        }
    }

    /// Child geometries: points of a linestring, rings of a polygon, members of a collection.
    pub(super) fn children(&self) -> &[Box<KernelGeometry>] {
        match &self.kind {
            Kind::Point(_) => &[],
            Kind::LineString(children)
            | Kind::Polygon(children)
            | Kind::Collection(_, children) => children,
        }
    }

    pub(super) fn is_3d(&self) -> bool {
        match &self.kind {
            Kind::Point(coord) => coord.is_some_and(|c| c.z.is_some()),
            _ => self.children().iter().any(|child| child.is_3d()),
        }
    }

    pub(super) fn is_empty(&self) -> bool {
        match &self.kind {
            Kind::Point(coord) => coord.is_none(),
            Kind::LineString(points) => points.is_empty(),
            Kind::Polygon(rings) => rings.first().map_or(true, |exterior| exterior.is_empty()),
            Kind::Collection(_, children) => children.iter().all(|child| child.is_empty()),
        }
    }

    /// Whether `child` may be appended to this collection.
    pub(super) fn accepts(&self, child: &KernelGeometry) -> bool {
        match (&self.kind, &child.kind) {
            (Kind::Collection(CollectionKind::MultiPoint, _), Kind::Point(_)) => true,
            (Kind::Collection(CollectionKind::MultiLineString, _), Kind::LineString(_)) => true,
            (Kind::Collection(CollectionKind::MultiPolygon, _), Kind::Polygon(_)) => true,
            (Kind::Collection(CollectionKind::GeometryCollection, _), _) => true,
            _ => false,
        }
    }

    /// Iterate over every non-empty point stored anywhere below this geometry.
    pub(super) fn coords(&self) -> Box<dyn Iterator<Item = Xyz> + '_> {
        match &self.kind {
            Kind::Point(coord) => Box::new(coord.iter().copied()),
            _ => Box::new(self.children().iter().flat_map(|child| child.coords())),
        }
    }
}
