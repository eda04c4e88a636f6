use crate::buffer::last_kernel_error;
use crate::ensure_init;
use crate::error::{GeoShapeError, Result};
use crate::handle::Owned;
use crate::kernel;
use crate::scalar::Geometry;

/// Parse well-known text into an owned geometry.
///
/// ```
/// use geoshape::io::wkt::read_wkt;
///
/// let geom = read_wkt("LINESTRING (0 0, 1 2)").unwrap();
/// assert_eq!(geom.kind().name(), "LineString");
/// ```
pub fn read_wkt(text: &str) -> Result<Geometry> {
    ensure_init();
    let ptr = unsafe { kernel::io_read_wkt(text.as_ptr().cast(), text.len()) };
    if ptr.is_null() {
        return Err(GeoShapeError::Wkt(last_kernel_error()));
    }
    Geometry::try_from_handle(unsafe { Owned::from_raw(ptr) }?)
}
