//! Conversion between geometries and interchange formats.

pub mod geojson;
pub mod wkt;
