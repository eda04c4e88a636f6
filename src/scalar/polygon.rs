use crate::ensure_init;
use crate::error::{GeoShapeError, Result};
use crate::handle::{Borrowed, Handle, Owned};
use crate::kernel;
use crate::scalar::linestring::check_uniform_dimension;
use crate::scalar::LineString;
use crate::trait_::KernelScalar;

impl_scalar!(
    Polygon,
    "A surface bounded by an exterior ring, with zero or more interior rings (holes)."
);

impl Polygon {
    /// A polygon from its exterior ring and holes. All rings must share one dimension and the
    /// exterior ring cannot be empty.
    pub fn new(exterior: LineString, interiors: Vec<LineString>) -> Result<Self> {
        if exterior.num_points() == 0 {
            return Err(GeoShapeError::MalformedCoordinate(
                "the exterior ring of a polygon cannot be empty".to_string(),
            ));
        }
        check_uniform_dimension(
            std::iter::once(&exterior)
                .chain(interiors.iter())
                .map(|ring| ring as &dyn KernelScalar),
        )?;
        ensure_init();
        let mut polygon = unsafe {
            Owned::from_raw(kernel::polygon_create_from_exterior_ring(
                exterior.0.into_raw(),
            ))
        }?;
        for interior in interiors {
            polygon.add_interior_ring(interior.0)?;
        }
        Ok(Self(polygon))
    }
}

impl<H: Handle> Polygon<H> {
    /// The exterior ring, or `None` for an empty polygon without holes.
    pub fn exterior(&self) -> Result<Option<LineString<Borrowed<'_>>>> {
        let ptr = self.0.borrowed().as_ptr();
        if unsafe { kernel::geometry_is_empty(ptr) } == 1 && self.num_interiors() == 0 {
            return Ok(None);
        }
        let ring = unsafe { Borrowed::from_raw(kernel::polygon_exterior_ring(ptr)) }?;
        Ok(Some(LineString::new_unchecked(ring)))
    }

    pub fn num_interiors(&self) -> usize {
        unsafe { kernel::polygon_num_interior_rings(self.0.borrowed().as_ptr()) }
    }

    /// The interior ring at `index`, borrowed from this polygon.
    pub fn interior(&self, index: usize) -> Result<LineString<Borrowed<'_>>> {
        let len = self.num_interiors();
        if index >= len {
            return Err(GeoShapeError::IndexOutOfRange {
                index: index as isize,
                len,
            });
        }
        let ptr = unsafe { kernel::polygon_interior_ring_n(self.0.borrowed().as_ptr(), index) };
        Ok(LineString::new_unchecked(unsafe { Borrowed::from_raw(ptr) }?))
    }
}
