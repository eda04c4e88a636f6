use crate::buffer::last_kernel_error;
use crate::error::{GeoShapeError, Result};
use crate::kernel;
use crate::trait_::KernelScalar;

/// Whether two geometries share at least one point.
pub trait Intersects {
    type Output;

    fn intersects(&self, other: &impl KernelScalar) -> Self::Output;
}

impl<G: KernelScalar> Intersects for G {
    type Output = Result<bool>;

    fn intersects(&self, other: &impl KernelScalar) -> Self::Output {
        match unsafe { kernel::geometry_intersects(self.handle().as_ptr(), other.handle().as_ptr()) } {
            1 => Ok(true),
            0 => Ok(false),
            _ => Err(GeoShapeError::InvalidGeometry(last_kernel_error())),
        }
    }
}
