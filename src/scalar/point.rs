use crate::buffer::last_kernel_error;
use crate::ensure_init;
use crate::error::{GeoShapeError, Result};
use crate::handle::{Handle, Owned};
use crate::kernel::{self, KernelGeometry};
use crate::trait_::KernelScalar;

impl_scalar!(Point, "A single position in 2D or 3D, or an empty point.");

fn check_finite(ordinates: &[f64]) -> Result<()> {
    if ordinates.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(GeoShapeError::MalformedCoordinate(format!(
            "coordinates must be finite, found {ordinates:?}"
        )))
    }
}

impl Point {
    /// A 2D point.
    pub fn new(x: f64, y: f64) -> Result<Self> {
        check_finite(&[x, y])?;
        ensure_init();
        Ok(Self(unsafe { Owned::from_raw(kernel::point_create_from_xy(x, y)) }?))
    }

    /// A 3D point.
    pub fn new_xyz(x: f64, y: f64, z: f64) -> Result<Self> {
        check_finite(&[x, y, z])?;
        ensure_init();
        Ok(Self(unsafe { Owned::from_raw(kernel::point_create_from_xyz(x, y, z)) }?))
    }
}

impl<H: Handle> Point<H> {
    fn ordinate(&self, accessor: unsafe extern "C" fn(*const KernelGeometry) -> f64) -> Result<f64> {
        let value = unsafe { accessor(self.0.borrowed().as_ptr()) };
        if value.is_nan() {
            Err(GeoShapeError::InvalidGeometry(last_kernel_error()))
        } else {
            Ok(value)
        }
    }

    pub fn x(&self) -> Result<f64> {
        self.ordinate(kernel::point_x)
    }

    pub fn y(&self) -> Result<f64> {
        self.ordinate(kernel::point_y)
    }

    /// The z ordinate. Fails with [`GeoShapeError::Dimension`] on a 2D point.
    pub fn z(&self) -> Result<f64> {
        if !self.is_3d() {
            return Err(GeoShapeError::Dimension(
                "z is only available on 3D points".to_string(),
            ));
        }
        self.ordinate(kernel::point_z)
    }

    /// `[x, y]`, `[x, y, z]`, or an empty vector for an empty point.
    pub fn coords(&self) -> Result<Vec<f64>> {
        if unsafe { kernel::geometry_is_empty(self.0.borrowed().as_ptr()) } == 1 {
            return Ok(vec![]);
        }
        let mut coords = vec![self.x()?, self.y()?];
        if self.is_3d() {
            coords.push(self.z()?);
        }
        Ok(coords)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accessors() {
        let point = Point::new(54.1305020, -23.64328494).unwrap();
        assert_eq!(point.x().unwrap(), 54.1305020);
        assert_eq!(point.y().unwrap(), -23.64328494);
        assert!(!point.is_3d());
        assert!(matches!(point.z(), Err(GeoShapeError::Dimension(_))));
        assert_eq!(point.coords().unwrap(), vec![54.1305020, -23.64328494]);

        let point = Point::new_xyz(1., 2., 3.).unwrap();
        assert_eq!(point.z().unwrap(), 3.);
        assert_eq!(point.coords().unwrap(), vec![1., 2., 3.]);
    }

    #[test]
    fn rejects_non_finite() {
        assert!(matches!(
            Point::new(f64::NAN, 0.),
            Err(GeoShapeError::MalformedCoordinate(_))
        ));
        assert!(matches!(
            Point::new_xyz(0., 0., f64::INFINITY),
            Err(GeoShapeError::MalformedCoordinate(_))
        ));
    }
}
