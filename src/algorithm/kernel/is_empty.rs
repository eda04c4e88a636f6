use crate::kernel;
use crate::trait_::KernelScalar;

/// Whether a geometry has no points at all.
///
/// Collections whose members are all empty are empty too.
pub trait IsEmpty {
    type Output;

    fn is_empty(&self) -> Self::Output;
}

impl<G: KernelScalar> IsEmpty for G {
    type Output = bool;

    fn is_empty(&self) -> Self::Output {
        unsafe { kernel::geometry_is_empty(self.handle().as_ptr()) == 1 }
    }
}
