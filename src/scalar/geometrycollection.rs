use crate::ensure_init;
use crate::error::Result;
use crate::handle::Owned;
use crate::kernel::{self, KernelGeometry};
use crate::scalar::Geometry;

impl_scalar!(
    GeometryCollection,
    "A heterogeneous collection of geometries, possibly nested."
);
impl_collection!(GeometryCollection);

/// Create an empty collection with one of the kernel's `*_create` constructors and fill it.
pub(crate) fn build_collection(
    create: extern "C" fn() -> *mut KernelGeometry,
    members: impl IntoIterator<Item = Owned>,
) -> Result<Owned> {
    ensure_init();
    let mut collection = unsafe { Owned::from_raw(create()) }?;
    for member in members {
        collection.add_geometry(member)?;
    }
    Ok(collection)
}

impl GeometryCollection {
    pub fn new(geoms: Vec<Geometry>) -> Result<Self> {
        let collection = build_collection(
            kernel::geometry_collection_create,
            geoms.into_iter().map(Geometry::into_handle),
        )?;
        Ok(Self(collection))
    }

    /// Move `geom` into this collection.
    pub fn push(&mut self, geom: impl Into<Geometry>) -> Result<()> {
        self.0.add_geometry(geom.into().into_handle())
    }
}
