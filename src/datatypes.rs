use std::fmt;
use std::str::FromStr;

use num_enum::{IntoPrimitive, TryFromPrimitive, TryFromPrimitiveError};

use crate::error::GeoShapeError;

/// The seven geometry variants, numbered as the kernel numbers them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive,
)]
#[repr(i32)]
pub enum GeometryType {
    Point = 1,
    LineString = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
}

impl GeometryType {
    pub const ALL: [GeometryType; 7] = [
        GeometryType::Point,
        GeometryType::LineString,
        GeometryType::Polygon,
        GeometryType::MultiPoint,
        GeometryType::MultiLineString,
        GeometryType::MultiPolygon,
        GeometryType::GeometryCollection,
    ];

    /// Canonical GeoJSON spelling.
    pub fn name(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
        }
    }

    /// Whether geometries of this type hold a sequence of member geometries.
    pub fn is_collection(&self) -> bool {
        matches!(
            self,
            GeometryType::MultiPoint
                | GeometryType::MultiLineString
                | GeometryType::MultiPolygon
                | GeometryType::GeometryCollection
        )
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a type tag, ignoring ASCII case.
impl FromStr for GeometryType {
    type Err = GeoShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeometryType::ALL
            .into_iter()
            .find(|typ| typ.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| GeoShapeError::UnknownGeometryType(s.to_string()))
    }
}

impl From<TryFromPrimitiveError<GeometryType>> for GeoShapeError {
    fn from(err: TryFromPrimitiveError<GeometryType>) -> Self {
        GeoShapeError::UnknownGeometryType(format!("kernel type id {}", err.number))
    }
}

impl From<&geojson::Value> for GeometryType {
    fn from(value: &geojson::Value) -> Self {
        match value {
            geojson::Value::Point(_) => GeometryType::Point,
            geojson::Value::LineString(_) => GeometryType::LineString,
            geojson::Value::Polygon(_) => GeometryType::Polygon,
            geojson::Value::MultiPoint(_) => GeometryType::MultiPoint,
            geojson::Value::MultiLineString(_) => GeometryType::MultiLineString,
            geojson::Value::MultiPolygon(_) => GeometryType::MultiPolygon,
            geojson::Value::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }
}
