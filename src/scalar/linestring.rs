use crate::ensure_init;
use crate::error::{GeoShapeError, Result};
use crate::handle::{Borrowed, Handle, Owned};
use crate::kernel;
use crate::scalar::Point;
use crate::trait_::KernelScalar;

impl_scalar!(LineString, "A sequence of points, possibly empty.");

/// Fails when `geoms` mix 2D and 3D coordinates. Empty geometries have no dimension.
pub(crate) fn check_uniform_dimension<'a>(
    geoms: impl IntoIterator<Item = &'a dyn KernelScalar>,
) -> Result<()> {
    let mut dimension = None;
    for geom in geoms {
        if unsafe { kernel::geometry_is_empty(geom.handle().as_ptr()) } == 1 {
            continue;
        }
        let is_3d = geom.is_3d();
        match dimension {
            None => dimension = Some(is_3d),
            Some(expected) if expected != is_3d => {
                return Err(GeoShapeError::MalformedCoordinate(
                    "cannot mix 2D and 3D coordinates".to_string(),
                ))
            }
            Some(_) => {}
        }
    }
    Ok(())
}

impl LineString {
    /// A linestring through `points`, in order. All points must share one dimension.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        check_uniform_dimension(points.iter().map(|point| point as &dyn KernelScalar))?;
        ensure_init();
        let mut line = unsafe { Owned::from_raw(kernel::linestring_create()) }?;
        for point in points {
            line.add_point(point.0)?;
        }
        Ok(Self(line))
    }
}

impl<H: Handle> LineString<H> {
    pub fn num_points(&self) -> usize {
        unsafe { kernel::linestring_num_points(self.0.borrowed().as_ptr()) }
    }

    /// The point at `index`, borrowed from this linestring.
    pub fn point(&self, index: usize) -> Result<Point<Borrowed<'_>>> {
        let len = self.num_points();
        if index >= len {
            return Err(GeoShapeError::IndexOutOfRange {
                index: index as isize,
                len,
            });
        }
        let ptr = unsafe { kernel::linestring_point_n(self.0.borrowed().as_ptr(), index) };
        Ok(Point::new_unchecked(unsafe { Borrowed::from_raw(ptr) }?))
    }

    pub fn points(&self) -> impl Iterator<Item = Result<Point<Borrowed<'_>>>> + '_ {
        (0..self.num_points()).map(|index| self.point(index))
    }
}
