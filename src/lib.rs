//! Owned and borrowed geometry values backed by a computational-geometry kernel, with
//! conversion to and from [GeoJSON](https://geojson.org/)-like coordinate structures and
//! well-known text.
//!
//! ```
//! use geoshape::algorithm::kernel::{Area, Intersection};
//! use geoshape::io::geojson::{decode, shape};
//! use serde_json::json;
//!
//! let square = shape(&json!({
//!     "type": "Polygon",
//!     "coordinates": [[[0, 0], [5, 0], [5, 5], [0, 5], [0, 0]]]
//! }))
//! .unwrap();
//! let corner = shape(&json!({
//!     "type": "Polygon",
//!     "coordinates": [[[-1, -1], [1, -1], [1, 1], [-1, 1], [-1, -1]]]
//! }))
//! .unwrap();
//! let overlap = square.intersection(&corner).unwrap();
//! assert!((overlap.area().unwrap() - 1.0).abs() < 1e-12);
//! assert!(matches!(decode(&overlap).unwrap(), geojson::Value::Polygon(_)));
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

use std::ffi::CStr;
use std::sync::Once;

pub use datatypes::GeometryType;
pub use error::{GeoShapeError, Result};
pub use scalar::{Geometry, GeometryRef};
pub use trait_::KernelScalar;

pub mod algorithm;
mod buffer;
pub mod datatypes;
pub mod error;
pub mod handle;
pub mod io;
pub mod kernel;
pub mod scalar;
#[cfg(test)]
pub(crate) mod test;
pub mod trait_;

/// Initialize the kernel once per process. Every constructor calls this first.
pub(crate) fn ensure_init() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        kernel::kernel_init();
        log::debug!("initialized geometry kernel {}", kernel_version());
    });
}

/// Version string reported by the geometry kernel.
pub fn kernel_version() -> String {
    unsafe { CStr::from_ptr(kernel::kernel_version()) }
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    #[test]
    fn version() {
        assert_eq!(super::kernel_version(), env!("CARGO_PKG_VERSION"));
    }
}
