//! Scoped ownership of text allocated by the kernel.

use std::os::raw::c_char;
use std::ptr::{self, NonNull};

use crate::error::Result;
use crate::kernel;

/// A kernel-allocated text buffer, released with [`kernel::text_free`] on drop.
///
/// Wrap a buffer the moment the kernel hands it over so that it is released on every exit path.
#[derive(Debug)]
pub(crate) struct KernelBuffer {
    ptr: NonNull<c_char>,
    len: usize,
}

impl KernelBuffer {
    /// Take ownership of `len` bytes at `ptr`. Returns `None` for a null pointer.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or a buffer of at least `len` bytes produced by the kernel and not yet
    /// released.
    pub(crate) unsafe fn from_raw(ptr: *mut c_char, len: usize) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| Self { ptr, len })
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        // SAFETY: the kernel reported `len` readable bytes for this buffer.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr().cast::<u8>(), self.len) }
    }

    pub(crate) fn to_str(&self) -> Result<&str> {
        Ok(std::str::from_utf8(self.as_bytes())?)
    }
}

impl Drop for KernelBuffer {
    fn drop(&mut self) {
        unsafe { kernel::text_free(self.ptr.as_ptr()) }
    }
}

/// Take the kernel's last error message for this thread.
pub(crate) fn last_kernel_error() -> String {
    let mut ptr = ptr::null_mut();
    let mut len = 0;
    let status = unsafe { kernel::last_error(&mut ptr, &mut len) };
    let message = match unsafe { KernelBuffer::from_raw(ptr, len) } {
        Some(buffer) if status == 1 => String::from_utf8_lossy(buffer.as_bytes()).into_owned(),
        _ => "unknown kernel error".to_string(),
    };
    log::debug!("kernel error: {message}");
    message
}
