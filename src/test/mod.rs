//! Shared fixtures: the same geometries as GeoJSON coordinate structures.

pub(crate) use geometrycollection::gc1;
pub(crate) use linestring::{line1, line2};
pub(crate) use multilinestring::multilinestring1;
pub(crate) use multipoint::multipoint;
pub(crate) use multipolygon::multipolygon1;
pub(crate) use point::{point1, point2};
pub(crate) use polygon::{polygon1, polygon_from, unit_overlap};

mod multilinestring;
mod multipoint;
mod polygon;

/// Every fixture, by name.
pub(crate) fn all() -> Vec<(&'static str, geojson::Value)> {
    vec![
        ("point1", point1()),
        ("point2", point2()),
        ("multipoint", multipoint()),
        ("line1", line1()),
        ("line2", line2()),
        ("multilinestring1", multilinestring1()),
        ("polygon1", polygon1()),
        ("multipolygon1", multipolygon1()),
        ("gc1", gc1()),
    ]
}
