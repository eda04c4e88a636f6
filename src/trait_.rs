use crate::datatypes::GeometryType;
use crate::error::Result;
use crate::handle::Borrowed;
use crate::kernel;
use crate::scalar::Geometry;

/// A value backed by a kernel geometry handle, owned or borrowed.
///
/// Implemented by [`Geometry`] and each typed wrapper. The kernel algorithms in
/// [`crate::algorithm::kernel`] and the writers in [`crate::io`] are available on every
/// implementor.
pub trait KernelScalar {
    /// A non-owning view of the underlying handle.
    fn handle(&self) -> Borrowed<'_>;

    /// Whether this value releases its handle when dropped.
    fn owns_handle(&self) -> bool;

    /// The geometry type as reported by the kernel.
    fn geometry_type(&self) -> Result<GeometryType> {
        self.handle().geometry_type()
    }

    /// Whether any coordinate of this geometry carries a z value.
    fn is_3d(&self) -> bool {
        unsafe { kernel::geometry_is_3d(self.handle().as_ptr()) == 1 }
    }

    /// An independent deep copy, owned by the caller.
    ///
    /// This is how a borrowed child is kept beyond the lifetime of its parent.
    fn to_owned_geometry(&self) -> Result<Geometry> {
        Geometry::try_from_handle(self.handle().clone_geometry()?)
    }
}
