//! Kernel algorithms, delegated to the [`geo`] crate.
//!
//! Everything here works on the planar (x, y) projection except [`distance_3d`], which needs
//! vector math that [`geo`] does not offer and uses [`nalgebra`] for it. Polygons take part in 3D
//! distance as planar surfaces.

use std::panic::{catch_unwind, AssertUnwindSafe};

use geo::line_intersection::{line_intersection, LineIntersection};
use geo::{Area, BooleanOps, EuclideanDistance, Intersects};
use nalgebra::{Point3, Unit, Vector3};

use super::geometry::{CollectionKind, Kind, KernelGeometry, Xyz};

type OpResult<T> = std::result::Result<T, String>;

fn coord_to_geo(coord: Xyz) -> geo::Coord {
    geo::coord! { x: coord.x, y: coord.y }
}

fn line_string_to_geo(geom: &KernelGeometry) -> geo::LineString {
    geo::LineString::new(geom.coords().map(coord_to_geo).collect())
}

fn polygon_to_geo(geom: &KernelGeometry) -> geo::Polygon {
    let rings = geom.children();
    match rings.split_first() {
        Some((exterior, interiors)) => geo::Polygon::new(
            line_string_to_geo(exterior),
            interiors.iter().map(|ring| line_string_to_geo(ring)).collect(),
        ),
        None => geo::Polygon::new(geo::LineString::new(vec![]), vec![]),
    }
}

/// Convert to a planar [`geo::Geometry`], dropping z.
pub(super) fn to_geo(geom: &KernelGeometry) -> geo::Geometry {
    match &geom.kind {
        Kind::Point(Some(coord)) => geo::Geometry::Point(coord_to_geo(*coord).into()),
        Kind::Point(None) => geo::Geometry::MultiPoint(geo::MultiPoint::new(vec![])),
        Kind::LineString(_) => geo::Geometry::LineString(line_string_to_geo(geom)),
        Kind::Polygon(_) => geo::Geometry::Polygon(polygon_to_geo(geom)),
        Kind::Collection(CollectionKind::MultiPoint, children) => geo::Geometry::MultiPoint(
            children
                .iter()
                .filter_map(|child| child.coord())
                .map(|coord| geo::Point::from(coord_to_geo(coord)))
                .collect(),
        ),
        Kind::Collection(CollectionKind::MultiLineString, children) => {
            geo::Geometry::MultiLineString(geo::MultiLineString::new(
                children.iter().map(|child| line_string_to_geo(child)).collect(),
            ))
        }
        Kind::Collection(CollectionKind::MultiPolygon, children) => geo::Geometry::MultiPolygon(
            geo::MultiPolygon::new(children.iter().map(|child| polygon_to_geo(child)).collect()),
        ),
        Kind::Collection(CollectionKind::GeometryCollection, children) => {
            geo::Geometry::GeometryCollection(geo::GeometryCollection::new_from(
                children.iter().map(|child| to_geo(child)).collect(),
            ))
        }
    }
}

fn point_from_geo(coord: geo::Coord) -> Box<KernelGeometry> {
    Box::new(KernelGeometry::point(Some(Xyz {
        x: coord.x,
        y: coord.y,
        z: None,
    })))
}

fn line_string_from_geo(line_string: &geo::LineString) -> Box<KernelGeometry> {
    Box::new(KernelGeometry::line_string(
        line_string.coords().copied().map(point_from_geo).collect(),
    ))
}

fn polygon_from_geo(polygon: &geo::Polygon) -> Box<KernelGeometry> {
    let mut rings = vec![line_string_from_geo(polygon.exterior())];
    rings.extend(polygon.interiors().iter().map(line_string_from_geo));
    Box::new(KernelGeometry::polygon(rings))
}

/// Collapse a list of results: nothing is an empty collection, one member stands alone.
fn collapse(kind: CollectionKind, mut members: Vec<Box<KernelGeometry>>) -> KernelGeometry {
    match members.len() {
        0 => KernelGeometry::empty_collection(),
        1 => members.pop().map_or_else(KernelGeometry::empty_collection, |member| *member),
        _ => KernelGeometry::collection(kind, members),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Puntal,
    Lineal,
    Polygonal,
    Mixed,
}

fn class(geom: &KernelGeometry) -> Class {
    match &geom.kind {
        Kind::Point(_) | Kind::Collection(CollectionKind::MultiPoint, _) => Class::Puntal,
        Kind::LineString(_) | Kind::Collection(CollectionKind::MultiLineString, _) => {
            Class::Lineal
        }
        Kind::Polygon(_) | Kind::Collection(CollectionKind::MultiPolygon, _) => Class::Polygonal,
        Kind::Collection(CollectionKind::GeometryCollection, _) => Class::Mixed,
    }
}

fn multi_polygon(geom: &KernelGeometry) -> geo::MultiPolygon {
    match to_geo(geom) {
        geo::Geometry::Polygon(polygon) => geo::MultiPolygon::new(vec![polygon]),
        geo::Geometry::MultiPolygon(multi_polygon) => multi_polygon,
        _ => geo::MultiPolygon::new(vec![]),
    }
}

fn multi_line_string(geom: &KernelGeometry) -> geo::MultiLineString {
    match to_geo(geom) {
        geo::Geometry::LineString(line_string) => geo::MultiLineString::new(vec![line_string]),
        geo::Geometry::MultiLineString(multi_line_string) => multi_line_string,
        _ => geo::MultiLineString::new(vec![]),
    }
}

fn guarded<T>(name: &str, op: impl FnOnce() -> T) -> OpResult<T> {
    catch_unwind(AssertUnwindSafe(op)).map_err(|_| format!("{name} failed inside the kernel"))
}

pub(super) fn area(geom: &KernelGeometry) -> OpResult<f64> {
    guarded("area", || to_geo(geom).unsigned_area())
}

pub(super) fn intersects(a: &KernelGeometry, b: &KernelGeometry) -> OpResult<bool> {
    if a.is_empty() || b.is_empty() {
        return Ok(false);
    }
    guarded("intersects", || to_geo(a).intersects(&to_geo(b)))
}

fn puntal_intersection(
    points: &KernelGeometry,
    other: &KernelGeometry,
) -> OpResult<KernelGeometry> {
    let other_geo = to_geo(other);
    let kept = guarded("intersection", || {
        points
            .coords()
            .filter(|coord| {
                geo::Geometry::Point(coord_to_geo(*coord).into()).intersects(&other_geo)
            })
            .map(|coord| Box::new(KernelGeometry::point(Some(coord))))
            .collect::<Vec<_>>()
    })?;
    Ok(collapse(CollectionKind::MultiPoint, kept))
}

fn polygonal_intersection(a: &KernelGeometry, b: &KernelGeometry) -> OpResult<KernelGeometry> {
    let result = guarded("intersection", || {
        multi_polygon(a).intersection(&multi_polygon(b))
    })?;
    let members = result.0.iter().map(polygon_from_geo).collect();
    Ok(collapse(CollectionKind::MultiPolygon, members))
}

fn lineal_intersection(
    lines: &KernelGeometry,
    polygons: &KernelGeometry,
) -> OpResult<KernelGeometry> {
    let result = guarded("intersection", || {
        multi_polygon(polygons).clip(&multi_line_string(lines), false)
    })?;
    let members = result
        .0
        .iter()
        .filter(|line| line.0.len() > 1)
        .map(line_string_from_geo)
        .collect();
    Ok(collapse(CollectionKind::MultiLineString, members))
}

fn lineal_lineal_intersection(
    a: &KernelGeometry,
    b: &KernelGeometry,
) -> OpResult<KernelGeometry> {
    let (crossings, overlaps) = guarded("intersection", || {
        let (a, b) = (multi_line_string(a), multi_line_string(b));
        let mut crossings: Vec<geo::Coord> = vec![];
        let mut overlaps: Vec<geo::Line> = vec![];
        for p in a.iter().flat_map(|line| line.lines()) {
            for q in b.iter().flat_map(|line| line.lines()) {
                match line_intersection(p, q) {
                    Some(LineIntersection::SinglePoint { intersection, .. }) => {
                        crossings.push(intersection)
                    }
                    Some(LineIntersection::Collinear { intersection }) => {
                        overlaps.push(intersection)
                    }
                    None => {}
                }
            }
        }
        // A crossing at a shared vertex is found once per adjacent segment.
        let mut unique: Vec<geo::Coord> = vec![];
        for coord in crossings {
            let on_overlap = overlaps.iter().any(|line| line.intersects(&coord));
            if !on_overlap && !unique.contains(&coord) {
                unique.push(coord);
            }
        }
        (unique, overlaps)
    })?;

    let points: Vec<_> = crossings.into_iter().map(point_from_geo).collect();
    let lines: Vec<_> = overlaps
        .into_iter()
        .map(|line| line_string_from_geo(&geo::LineString::from(line)))
        .collect();
    Ok(match (points.is_empty(), lines.is_empty()) {
        (_, true) => collapse(CollectionKind::MultiPoint, points),
        (true, false) => collapse(CollectionKind::MultiLineString, lines),
        (false, false) => KernelGeometry::collection(
            CollectionKind::GeometryCollection,
            points.into_iter().chain(lines).collect(),
        ),
    })
}

/// Intersect every member of `collection` with `other` and keep the non-empty results.
fn mixed_intersection(
    collection: &KernelGeometry,
    other: &KernelGeometry,
) -> OpResult<KernelGeometry> {
    let mut parts = vec![];
    for member in collection.children() {
        let part = intersection(member, other)?;
        if !part.is_empty() {
            parts.push(Box::new(part));
        }
    }
    Ok(collapse(CollectionKind::GeometryCollection, parts))
}

/// Intersection of two geometries.
///
/// The result type depends on the operands and the data: a single result stands alone, several
/// form the matching multi-geometry, and an empty result is an empty collection.
pub(super) fn intersection(a: &KernelGeometry, b: &KernelGeometry) -> OpResult<KernelGeometry> {
    if a.is_empty() || b.is_empty() {
        return Ok(KernelGeometry::empty_collection());
    }
    match (class(a), class(b)) {
        (Class::Puntal, _) => puntal_intersection(a, b),
        (_, Class::Puntal) => puntal_intersection(b, a),
        (Class::Mixed, _) => mixed_intersection(a, b),
        (_, Class::Mixed) => mixed_intersection(b, a),
        (Class::Polygonal, Class::Polygonal) => polygonal_intersection(a, b),
        (Class::Lineal, Class::Polygonal) => lineal_intersection(a, b),
        (Class::Polygonal, Class::Lineal) => lineal_intersection(b, a),
        (Class::Lineal, Class::Lineal) => lineal_lineal_intersection(a, b),
    }
}

type Vec3 = Vector3<f64>;

fn project(p: &Point3<f64>, drop_axis: usize) -> geo::Coord {
    match drop_axis {
        0 => geo::coord! { x: p.y, y: p.z },
        1 => geo::coord! { x: p.x, y: p.z },
        _ => geo::coord! { x: p.x, y: p.y },
    }
}

/// A planar polygon lifted into three dimensions.
#[derive(Debug)]
struct Surface {
    origin: Point3<f64>,
    normal: Unit<Vec3>,
    /// The axis dropped to project the surface onto a coordinate plane.
    drop_axis: usize,
    projected: geo::Polygon,
    boundary: Vec<(Point3<f64>, Point3<f64>)>,
}

impl Surface {
    /// `None` for a ring without area, which only takes part through its boundary.
    fn new(rings: &[Box<KernelGeometry>], lift: impl Fn(Xyz) -> Point3<f64>) -> Option<Self> {
        let lifted: Vec<Vec<Point3<f64>>> = rings
            .iter()
            .map(|ring| ring.coords().map(&lift).collect())
            .collect();
        let exterior = lifted.first()?;
        let origin = *exterior.first()?;
        // Newell's method.
        let newell = exterior
            .iter()
            .zip(exterior.iter().cycle().skip(1))
            .fold(Vec3::zeros(), |acc, (p, q)| {
                acc + (p.coords - origin.coords).cross(&(q.coords - origin.coords))
            });
        let normal = Unit::try_new(newell, f64::EPSILON)?;
        let drop_axis = normal.iamax();
        let projected_rings: Vec<geo::LineString> = lifted
            .iter()
            .map(|ring| ring.iter().map(|p| project(p, drop_axis)).collect())
            .collect();
        let (projected_exterior, projected_interiors) = projected_rings.split_first()?;
        let boundary = lifted
            .iter()
            .flat_map(|ring| ring.windows(2).map(|pair| (pair[0], pair[1])))
            .collect();
        Some(Self {
            origin,
            normal,
            drop_axis,
            projected: geo::Polygon::new(
                projected_exterior.clone(),
                projected_interiors.to_vec(),
            ),
            boundary,
        })
    }

    /// Signed distance from the plane of the surface.
    fn height(&self, p: Point3<f64>) -> f64 {
        self.normal.dot(&(p - self.origin))
    }

    /// Whether `p`, assumed to lie in the plane, is on the surface.
    fn covers(&self, p: Point3<f64>) -> bool {
        self.projected.intersects(&project(&p, self.drop_axis))
    }

    fn boundary_distance(&self, to: impl Fn(Point3<f64>, Point3<f64>) -> f64) -> f64 {
        self.boundary
            .iter()
            .map(|(a, b)| to(*a, *b))
            .fold(f64::INFINITY, f64::min)
    }

    fn point_distance(&self, p: Point3<f64>) -> f64 {
        let height = self.height(p);
        if self.covers(p - self.normal.into_inner() * height) {
            height.abs()
        } else {
            self.boundary_distance(|a, b| point_segment(p, a, b))
        }
    }

    fn segment_distance(&self, p: Point3<f64>, q: Point3<f64>) -> f64 {
        let (hp, hq) = (self.height(p), self.height(q));
        if hp * hq <= 0. && hp != hq && self.covers(p + (q - p) * (hp / (hp - hq))) {
            return 0.;
        }
        self.point_distance(p)
            .min(self.point_distance(q))
            .min(self.boundary_distance(|a, b| segment_segment(p, q, a, b)))
    }

    fn surface_distance(&self, other: &Surface) -> f64 {
        let one_way = |from: &Surface, to: &Surface| {
            from.boundary_distance(|a, b| to.segment_distance(a, b))
        };
        one_way(self, other).min(one_way(other, self))
    }
}

#[derive(Debug)]
enum Primitive {
    Point(Point3<f64>),
    Segment(Point3<f64>, Point3<f64>),
    Surface(Surface),
}

fn point_segment(p: Point3<f64>, a: Point3<f64>, b: Point3<f64>) -> f64 {
    let ab = b - a;
    let length = ab.norm_squared();
    if length == 0. {
        return nalgebra::distance(&p, &a);
    }
    let t = ((p - a).dot(&ab) / length).clamp(0., 1.);
    nalgebra::distance(&p, &(a + ab * t))
}

/// Closest approach of segments `p1 q1` and `p2 q2`.
fn segment_segment(p1: Point3<f64>, q1: Point3<f64>, p2: Point3<f64>, q2: Point3<f64>) -> f64 {
    let d1 = q1 - p1;
    let d2 = q2 - p2;
    let r = p1 - p2;
    let a = d1.norm_squared();
    let e = d2.norm_squared();
    if a == 0. {
        return point_segment(p1, p2, q2);
    }
    if e == 0. {
        return point_segment(p2, p1, q1);
    }

    let b = d1.dot(&d2);
    let c = d1.dot(&r);
    let f = d2.dot(&r);
    let denom = a * e - b * b;
    let mut s = if denom != 0. {
        ((b * f - c * e) / denom).clamp(0., 1.)
    } else {
        0.
    };
    let mut t = (b * s + f) / e;
    if t < 0. {
        t = 0.;
        s = (-c / a).clamp(0., 1.);
    } else if t > 1. {
        t = 1.;
        s = ((b - c) / a).clamp(0., 1.);
    }
    nalgebra::distance(&(p1 + d1 * s), &(p2 + d2 * t))
}

fn primitive_distance(a: &Primitive, b: &Primitive) -> f64 {
    match (a, b) {
        (Primitive::Point(p), Primitive::Point(q)) => nalgebra::distance(p, q),
        (Primitive::Point(p), Primitive::Segment(s, e))
        | (Primitive::Segment(s, e), Primitive::Point(p)) => point_segment(*p, *s, *e),
        (Primitive::Segment(s1, e1), Primitive::Segment(s2, e2)) => {
            segment_segment(*s1, *e1, *s2, *e2)
        }
        (Primitive::Point(p), Primitive::Surface(surface))
        | (Primitive::Surface(surface), Primitive::Point(p)) => surface.point_distance(*p),
        (Primitive::Segment(s, e), Primitive::Surface(surface))
        | (Primitive::Surface(surface), Primitive::Segment(s, e)) => {
            surface.segment_distance(*s, *e)
        }
        (Primitive::Surface(a), Primitive::Surface(b)) => a.surface_distance(b),
    }
}

/// A missing z is taken as 0.
fn lift(coord: Xyz) -> Point3<f64> {
    Point3::new(coord.x, coord.y, coord.z.unwrap_or(0.))
}

fn primitives(geom: &KernelGeometry, out: &mut Vec<Primitive>) {
    match &geom.kind {
        Kind::Point(coord) => out.extend(coord.map(|coord| Primitive::Point(lift(coord)))),
        Kind::LineString(_) => {
            let points: Vec<Point3<f64>> = geom.coords().map(lift).collect();
            if let [single] = points.as_slice() {
                out.push(Primitive::Point(*single));
            }
            out.extend(
                points
                    .windows(2)
                    .map(|pair| Primitive::Segment(pair[0], pair[1])),
            );
        }
        Kind::Polygon(rings) => match Surface::new(rings, lift) {
            Some(surface) => out.push(Primitive::Surface(surface)),
            None => rings.iter().for_each(|ring| primitives(ring, out)),
        },
        Kind::Collection(_, members) => members.iter().for_each(|member| primitives(member, out)),
    }
}

pub(super) fn distance(a: &KernelGeometry, b: &KernelGeometry) -> OpResult<f64> {
    if a.is_empty() || b.is_empty() {
        return Err("distance is undefined for empty geometries".to_string());
    }
    guarded("distance", || to_geo(a).euclidean_distance(&to_geo(b)))
}

/// Distance in three dimensions. Planar when neither operand has a z ordinate.
pub(super) fn distance_3d(a: &KernelGeometry, b: &KernelGeometry) -> OpResult<f64> {
    if !a.is_3d() && !b.is_3d() {
        return distance(a, b);
    }
    if a.is_empty() || b.is_empty() {
        return Err("distance is undefined for empty geometries".to_string());
    }
    guarded("distance_3d", || {
        let mut left = vec![];
        let mut right = vec![];
        primitives(a, &mut left);
        primitives(b, &mut right);
        left.iter()
            .flat_map(|p| right.iter().map(move |q| primitive_distance(p, q)))
            .fold(f64::INFINITY, f64::min)
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    fn point(x: f64, y: f64, z: Option<f64>) -> KernelGeometry {
        KernelGeometry::point(Some(Xyz { x, y, z }))
    }

    fn square(min: f64, max: f64) -> KernelGeometry {
        let ring = geo::LineString::from(vec![
            (min, min),
            (max, min),
            (max, max),
            (min, max),
            (min, min),
        ]);
        *polygon_from_geo(&geo::Polygon::new(ring, vec![]))
    }

    fn line(coords: &[(f64, f64)]) -> KernelGeometry {
        KernelGeometry::line_string(
            coords
                .iter()
                .map(|(x, y)| Box::new(point(*x, *y, None)))
                .collect(),
        )
    }

    fn square_at(min: f64, max: f64, z: f64) -> KernelGeometry {
        let corners = [(min, min), (max, min), (max, max), (min, max), (min, min)];
        let ring = KernelGeometry::line_string(
            corners
                .iter()
                .map(|(x, y)| Box::new(point(*x, *y, Some(z))))
                .collect(),
        );
        KernelGeometry::polygon(vec![Box::new(ring)])
    }

    #[test]
    fn skew_segments() {
        let d = segment_segment(
            Point3::new(0., 0., 0.),
            Point3::new(1., 0., 0.),
            Point3::new(0.5, -1., 1.),
            Point3::new(0.5, 1., 1.),
        );
        assert_relative_eq!(d, 1.0);
    }

    #[test]
    fn point_over_a_surface() {
        let inside = point(5., 5., Some(0.));
        assert_eq!(distance_3d(&inside, &square(0., 10.)).unwrap(), 0.);
        assert_eq!(distance(&inside, &square(0., 10.)).unwrap(), 0.);

        let above = point(5., 5., Some(1.));
        assert_relative_eq!(distance_3d(&above, &square_at(0., 10., 0.)).unwrap(), 1.);
        assert_relative_eq!(distance_3d(&square_at(0., 10., 0.), &above).unwrap(), 1.);

        // Beyond the edge the closest point is on the boundary.
        let beside = point(13., 5., Some(4.));
        assert_relative_eq!(distance_3d(&beside, &square_at(0., 10., 0.)).unwrap(), 5.);
    }

    #[test]
    fn segment_through_a_surface() {
        let through = KernelGeometry::line_string(vec![
            Box::new(point(5., 5., Some(-1.))),
            Box::new(point(5., 5., Some(1.))),
        ]);
        assert_eq!(distance_3d(&through, &square_at(0., 10., 0.)).unwrap(), 0.);

        let hovering = KernelGeometry::line_string(vec![
            Box::new(point(2., 2., Some(3.))),
            Box::new(point(8., 8., Some(2.))),
        ]);
        assert_relative_eq!(distance_3d(&hovering, &square_at(0., 10., 0.)).unwrap(), 2.);
    }

    #[test]
    fn stacked_surfaces() {
        assert_relative_eq!(
            distance_3d(&square_at(0., 10., 0.), &square_at(2., 4., 3.)).unwrap(),
            3.
        );
    }

    #[test]
    fn planar_distance_to_a_line() {
        let target = point(5., 5., None);
        assert_relative_eq!(
            distance(&line(&[(0., 0.), (0., 10.)]), &target).unwrap(),
            5.
        );
    }

    fn assert_point(geom: &KernelGeometry, x: f64, y: f64) {
        assert_eq!(geom.type_name(), "Point");
        let coord = geom.coord().unwrap();
        assert_relative_eq!(coord.x, x);
        assert_relative_eq!(coord.y, y);
    }

    #[test]
    fn disjoint_polygons_measure_between_boundaries() {
        assert_relative_eq!(
            distance(&square(0., 1.), &square(3., 4.)).unwrap(),
            8f64.sqrt()
        );
        assert_eq!(distance(&square(0., 5.), &square(1., 2.)).unwrap(), 0.);
    }

    #[test]
    fn points_in_three_dimensions() {
        let a = point(0., 0., Some(0.));
        let b = point(0., 0., Some(2.));
        assert_eq!(distance_3d(&a, &b).unwrap(), 2.);
        assert_eq!(distance(&a, &b).unwrap(), 0.);
    }

    #[test]
    fn crossing_lines_meet_in_a_point() {
        let result = intersection(
            &line(&[(0., 0.), (2., 2.)]),
            &line(&[(0., 2.), (2., 0.)]),
        )
        .unwrap();
        assert_point(&result, 1., 1.);
    }

    #[test]
    fn lines_crossing_at_a_vertex_meet_once() {
        let result = intersection(
            &line(&[(0., 0.), (1., 1.), (2., 2.)]),
            &line(&[(0., 2.), (2., 0.)]),
        )
        .unwrap();
        assert_point(&result, 1., 1.);
    }

    #[test]
    fn overlapping_lines_share_a_segment() {
        let result = intersection(
            &line(&[(0., 0.), (2., 0.)]),
            &line(&[(1., 0.), (3., 0.)]),
        )
        .unwrap();
        assert_eq!(result.type_name(), "LineString");
        let mut xs: Vec<f64> = result.coords().map(|coord| coord.x).collect();
        xs.sort_by(f64::total_cmp);
        assert_eq!(xs, vec![1., 2.]);
    }

    #[test]
    fn disjoint_lines() {
        let result = intersection(
            &line(&[(0., 0.), (1., 0.)]),
            &line(&[(0., 1.), (1., 1.)]),
        )
        .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn collections_intersect_member_by_member() {
        let collection = KernelGeometry::collection(
            CollectionKind::GeometryCollection,
            vec![
                Box::new(line(&[(0., 2.), (2., 0.)])),
                Box::new(point(9., 9., None)),
            ],
        );
        let result = intersection(&collection, &line(&[(0., 0.), (2., 2.)])).unwrap();
        assert_point(&result, 1., 1.);

        let result = intersection(&square(0., 5.), &collection).unwrap();
        assert_eq!(result.type_name(), "LineString");
    }

    #[test]
    fn empty_operands_intersect_to_empty_collection() {
        let result = intersection(&KernelGeometry::point(None), &square(0., 1.)).unwrap();
        assert_eq!(result, KernelGeometry::empty_collection());
    }
}
