//! Read from and write to [well-known text](https://en.wikipedia.org/wiki/Well-known_text_representation_of_geometry).
//!
//! Parsing and formatting both happen inside the geometry kernel. Every geometry with a z
//! ordinate is written with the `Z` tag, so 3D text reads back as 3D.

pub use reader::read_wkt;
pub use writer::{write_wkt, write_wkt_with_options, ToWkt, WktWriteOptions};

mod reader;
mod writer;
