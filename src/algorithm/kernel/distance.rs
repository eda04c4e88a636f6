use crate::buffer::last_kernel_error;
use crate::error::{GeoShapeError, Result};
use crate::kernel::{self, KernelGeometry};
use crate::trait_::KernelScalar;

/// Minimum distance between two geometries.
pub trait Distance {
    type Output;

    /// Planar distance, ignoring z.
    fn distance(&self, other: &impl KernelScalar) -> Self::Output;

    /// Distance in three dimensions. A missing z counts as zero.
    fn distance_3d(&self, other: &impl KernelScalar) -> Self::Output;
}

fn checked_distance(
    a: &impl KernelScalar,
    b: &impl KernelScalar,
    op: unsafe extern "C" fn(*const KernelGeometry, *const KernelGeometry) -> f64,
) -> Result<f64> {
    let distance = unsafe { op(a.handle().as_ptr(), b.handle().as_ptr()) };
    if distance.is_nan() {
        Err(GeoShapeError::InvalidGeometry(last_kernel_error()))
    } else {
        Ok(distance)
    }
}

impl<G: KernelScalar> Distance for G {
    type Output = Result<f64>;

    fn distance(&self, other: &impl KernelScalar) -> Self::Output {
        checked_distance(self, other, kernel::geometry_distance)
    }

    fn distance_3d(&self, other: &impl KernelScalar) -> Self::Output {
        checked_distance(self, other, kernel::geometry_distance_3d)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::scalar::{GeometryCollection, Point};
    use crate::test::polygon_from;
    use approx::assert_relative_eq;

    #[test]
    fn planar_and_3d() {
        let a = Point::new_xyz(0., 0., 0.).unwrap();
        let b = Point::new_xyz(3., 4., 12.).unwrap();
        assert_relative_eq!(a.distance(&b).unwrap(), 5.0);
        assert_relative_eq!(a.distance_3d(&b).unwrap(), 13.0);
    }

    #[test]
    fn empty_operand_is_invalid() {
        let point = Point::new(0., 0.).unwrap();
        let empty = GeometryCollection::new(vec![]).unwrap();
        assert!(matches!(
            point.distance(&empty),
            Err(GeoShapeError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn point_over_a_polygon() {
        let square = polygon_from(&[[0., 0.], [10., 0.], [10., 10.], [0., 10.], [0., 0.]]);
        let on = Point::new_xyz(5., 5., 0.).unwrap();
        assert_eq!(on.distance_3d(&square).unwrap(), 0.0);
        let above = Point::new_xyz(5., 5., 1.).unwrap();
        assert_relative_eq!(above.distance_3d(&square).unwrap(), 1.0);
        assert_eq!(above.distance(&square).unwrap(), 0.0);
    }
}
