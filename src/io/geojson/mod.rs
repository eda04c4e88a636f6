//! Conversion between geometries and [GeoJSON](https://geojson.org/)-like structures.
//!
//! [`encode`] builds a kernel geometry from a [`geojson::Value`] (the nested coordinate arrays
//! of a GeoJSON geometry) and [`decode`] reads one back. [`shape`] and [`mapping`] do the same
//! for whole GeoJSON geometry objects held as JSON.

pub use decode::{decode, to_geojson};
pub use encode::encode;
pub use mapping::{mapping, shape, shape_str};

mod decode;
mod encode;
mod mapping;
