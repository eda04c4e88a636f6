//! Owning and borrowing references to kernel geometries.
//!
//! [`Owned`] releases its geometry exactly once, when dropped. [`Borrowed`] is a copyable view
//! into a geometry owned by someone else (usually a parent collection, polygon or linestring)
//! and is tied to that owner by its lifetime, so it can neither release the geometry nor outlive
//! it. Neither is `Send` or `Sync`: the kernel does not support sharing handles across threads.

use std::fmt::Debug;
use std::marker::PhantomData;
use std::os::raw::c_int;
use std::ptr::NonNull;

use crate::buffer::last_kernel_error;
use crate::datatypes::GeometryType;
use crate::error::{GeoShapeError, Result};
use crate::kernel::{self, KernelGeometry};

mod private {
    pub trait Sealed {}
}

/// A reference to a kernel geometry, either [`Owned`] or [`Borrowed`].
///
/// This trait is sealed.
pub trait Handle: private::Sealed + Debug {
    /// A non-owning view of the same geometry.
    fn borrowed(&self) -> Borrowed<'_>;

    /// Whether dropping this handle releases the geometry.
    fn owns_handle(&self) -> bool;
}

/// A kernel geometry owned by the caller.
#[derive(Debug)]
pub struct Owned {
    ptr: NonNull<KernelGeometry>,
}

impl Owned {
    /// Take ownership of a geometry returned by a kernel constructor.
    ///
    /// A null pointer means the kernel failed; its message is returned as
    /// [`GeoShapeError::General`].
    ///
    /// # Safety
    ///
    /// `ptr` must be null or a geometry that nothing else owns.
    pub(crate) unsafe fn from_raw(ptr: *mut KernelGeometry) -> Result<Self> {
        NonNull::new(ptr)
            .map(|ptr| Self { ptr })
            .ok_or_else(|| GeoShapeError::General(last_kernel_error()))
    }

    /// Give up ownership without releasing the geometry.
    pub(crate) fn into_raw(self) -> *mut KernelGeometry {
        let ptr = self.ptr.as_ptr();
        std::mem::forget(self);
        ptr
    }

    fn as_mut_ptr(&mut self) -> *mut KernelGeometry {
        self.ptr.as_ptr()
    }

    /// Append a point to this linestring. The point is consumed even when the kernel refuses it.
    pub(crate) fn add_point(&mut self, point: Owned) -> Result<()> {
        check_status(unsafe { kernel::linestring_add_point(self.as_mut_ptr(), point.into_raw()) })
    }

    /// Append an interior ring to this polygon.
    pub(crate) fn add_interior_ring(&mut self, ring: Owned) -> Result<()> {
        check_status(unsafe {
            kernel::polygon_add_interior_ring(self.as_mut_ptr(), ring.into_raw())
        })
    }

    /// Append a member to this collection.
    pub(crate) fn add_geometry(&mut self, geom: Owned) -> Result<()> {
        check_status(unsafe {
            kernel::geometry_collection_add_geometry(self.as_mut_ptr(), geom.into_raw())
        })
    }
}

fn check_status(status: c_int) -> Result<()> {
    if status == 1 {
        Ok(())
    } else {
        Err(GeoShapeError::InvalidGeometry(last_kernel_error()))
    }
}

/// Deep copy through the kernel.
///
/// # Panics
///
/// Panics if the kernel cannot copy a live geometry, which only happens when it runs out of
/// memory.
impl Clone for Owned {
    fn clone(&self) -> Self {
        match self.borrowed().clone_geometry() {
            Ok(owned) => owned,
            Err(err) => panic!("kernel failed to copy a geometry: {err}"),
        }
    }
}

impl Drop for Owned {
    fn drop(&mut self) {
        log::trace!("releasing kernel geometry {:p}", self.ptr);
        unsafe { kernel::geometry_delete(self.ptr.as_ptr()) }
    }
}

impl private::Sealed for Owned {}

impl Handle for Owned {
    fn borrowed(&self) -> Borrowed<'_> {
        Borrowed {
            ptr: self.ptr,
            _owner: PhantomData,
        }
    }

    fn owns_handle(&self) -> bool {
        true
    }
}

/// A view of a kernel geometry owned elsewhere, valid for `'a`.
#[derive(Debug, Clone, Copy)]
pub struct Borrowed<'a> {
    ptr: NonNull<KernelGeometry>,
    _owner: PhantomData<&'a KernelGeometry>,
}

impl<'a> Borrowed<'a> {
    /// Wrap a child pointer returned by a kernel accessor.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or a geometry that stays alive and unmodified for `'a`.
    pub(crate) unsafe fn from_raw(ptr: *const KernelGeometry) -> Result<Self> {
        NonNull::new(ptr.cast_mut())
            .map(|ptr| Self {
                ptr,
                _owner: PhantomData,
            })
            .ok_or_else(|| GeoShapeError::General(last_kernel_error()))
    }

    pub(crate) fn as_ptr(self) -> *const KernelGeometry {
        self.ptr.as_ptr()
    }

    /// The kernel-reported type of this geometry.
    pub(crate) fn geometry_type(self) -> Result<GeometryType> {
        let id = unsafe { kernel::geometry_type_id(self.as_ptr()) };
        Ok(GeometryType::try_from(id)?)
    }

    pub(crate) fn clone_geometry(self) -> Result<Owned> {
        unsafe { Owned::from_raw(kernel::geometry_clone(self.as_ptr())) }
    }
}

impl private::Sealed for Borrowed<'_> {}

impl Handle for Borrowed<'_> {
    fn borrowed(&self) -> Borrowed<'_> {
        *self
    }

    fn owns_handle(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ensure_init;

    #[test]
    fn clone_is_independent() {
        ensure_init();
        let original = unsafe { Owned::from_raw(kernel::point_create_from_xy(1., 2.)) }.unwrap();
        let copy = original.clone();
        assert_ne!(original.borrowed().as_ptr(), copy.borrowed().as_ptr());
        drop(original);
        assert_eq!(copy.borrowed().geometry_type().unwrap(), GeometryType::Point);
        assert!(copy.owns_handle());
        assert!(!copy.borrowed().owns_handle());
    }

    #[test]
    fn rejected_child_is_consumed() {
        ensure_init();
        let mut line = unsafe { Owned::from_raw(kernel::linestring_create()) }.unwrap();
        let other_line = unsafe { Owned::from_raw(kernel::linestring_create()) }.unwrap();
        let err = line.add_point(other_line).unwrap_err();
        assert!(matches!(err, GeoShapeError::InvalidGeometry(_)));
    }
}
