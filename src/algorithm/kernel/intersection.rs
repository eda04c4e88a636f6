use crate::buffer::last_kernel_error;
use crate::error::{GeoShapeError, Result};
use crate::handle::Owned;
use crate::kernel;
use crate::scalar::Geometry;
use crate::trait_::KernelScalar;

/// The point set shared by two geometries.
///
/// The result is a new owned geometry whose variant follows the kernel's result type: for
/// instance a point inside a polygon yields that point, and two disjoint geometries yield an
/// empty geometry collection.
pub trait Intersection {
    type Output;

    fn intersection(&self, other: &impl KernelScalar) -> Self::Output;
}

impl<G: KernelScalar> Intersection for G {
    type Output = Result<Geometry>;

    fn intersection(&self, other: &impl KernelScalar) -> Self::Output {
        let ptr = unsafe {
            kernel::geometry_intersection(self.handle().as_ptr(), other.handle().as_ptr())
        };
        if ptr.is_null() {
            return Err(GeoShapeError::InvalidGeometry(last_kernel_error()));
        }
        Geometry::try_from_handle(unsafe { Owned::from_raw(ptr) }?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::kernel::{Area, IsEmpty};
    use crate::datatypes::GeometryType;
    use crate::scalar::{GeometryCollection, LineString, Point};
    use crate::test::unit_overlap;
    use approx::assert_relative_eq;

    #[test]
    fn point_in_polygon() {
        let point = Point::new(2., 3.).unwrap();
        let (polygon1, polygon2) = unit_overlap();

        let inside = Point::try_from(point.intersection(&polygon1).unwrap()).unwrap();
        assert!(!inside.is_empty());
        assert_eq!(inside.x().unwrap(), point.x().unwrap());
        assert_eq!(inside.y().unwrap(), point.y().unwrap());

        let outside = point.intersection(&polygon2).unwrap();
        assert_eq!(outside.kind(), GeometryType::GeometryCollection);
        assert!(outside.is_empty());
        assert!(GeometryCollection::try_from(outside).is_ok());
    }

    #[test]
    fn polygon_polygon() {
        let (polygon1, polygon2) = unit_overlap();
        let overlap = polygon1.intersection(&polygon2).unwrap();
        assert!(overlap.owns_handle());
        assert_relative_eq!(overlap.area().unwrap(), 1.0);
    }

    #[test]
    fn crossing_lines() {
        let segment = |from: (f64, f64), to: (f64, f64)| {
            LineString::new(vec![
                Point::new(from.0, from.1).unwrap(),
                Point::new(to.0, to.1).unwrap(),
            ])
            .unwrap()
        };
        let crossing = segment((0., 0.), (2., 2.))
            .intersection(&segment((0., 2.), (2., 0.)))
            .unwrap();
        let crossing = Point::try_from(crossing).unwrap();
        assert_relative_eq!(crossing.x().unwrap(), 1.0);
        assert_relative_eq!(crossing.y().unwrap(), 1.0);
    }
}
