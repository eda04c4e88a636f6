use crate::buffer::last_kernel_error;
use crate::error::{GeoShapeError, Result};
use crate::kernel;
use crate::trait_::KernelScalar;

/// Unsigned planar area of a geometry.
///
/// Points and linestrings have zero area.
pub trait Area {
    type Output;

    fn area(&self) -> Self::Output;
}

impl<G: KernelScalar> Area for G {
    type Output = Result<f64>;

    fn area(&self) -> Self::Output {
        let area = unsafe { kernel::geometry_area(self.handle().as_ptr()) };
        if area.is_nan() {
            Err(GeoShapeError::InvalidGeometry(last_kernel_error()))
        } else {
            Ok(area)
        }
    }
}
