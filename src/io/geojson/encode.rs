use geojson::{LineStringType, PointType, PolygonType};

use crate::datatypes::GeometryType;
use crate::error::{GeoShapeError, Result};
use crate::scalar::*;
use crate::trait_::KernelScalar;

/// Build a geometry from nested coordinate arrays.
///
/// Positions must hold two or three finite numbers. All positions of one linestring, or of all
/// rings of one polygon, must share a dimension. A polygon needs a non-empty exterior ring.
pub fn encode(value: &geojson::Value) -> Result<Geometry> {
    let declared = GeometryType::from(value);
    let geom = encode_value(value)?;
    let reported = geom.geometry_type()?;
    if reported != declared {
        return Err(GeoShapeError::UnknownGeometryType(format!(
            "declared {declared}, kernel built {reported}"
        )));
    }
    Ok(geom)
}

fn encode_value(value: &geojson::Value) -> Result<Geometry> {
    let geom: Geometry = match value {
        geojson::Value::Point(position) => encode_point(position)?.into(),
        geojson::Value::LineString(positions) => encode_line_string(positions)?.into(),
        geojson::Value::Polygon(rings) => encode_polygon(rings)?.into(),
        geojson::Value::MultiPoint(points) => MultiPoint::new(
            points
                .iter()
                .map(encode_point)
                .collect::<Result<_>>()?,
        )?
        .into(),
        geojson::Value::MultiLineString(line_strings) => MultiLineString::new(
            line_strings
                .iter()
                .map(encode_line_string)
                .collect::<Result<_>>()?,
        )?
        .into(),
        geojson::Value::MultiPolygon(polygons) => MultiPolygon::new(
            polygons
                .iter()
                .map(encode_polygon)
                .collect::<Result<_>>()?,
        )?
        .into(),
        geojson::Value::GeometryCollection(geoms) => GeometryCollection::new(
            geoms
                .iter()
                .map(|geom| encode(&geom.value))
                .collect::<Result<_>>()?,
        )?
        .into(),
    };
    Ok(geom)
}

fn encode_point(position: &PointType) -> Result<Point> {
    match position.as_slice() {
        [x, y] => Point::new(*x, *y),
        [x, y, z] => Point::new_xyz(*x, *y, *z),
        other => Err(GeoShapeError::MalformedCoordinate(format!(
            "a position needs 2 or 3 ordinates, found {}",
            other.len()
        ))),
    }
}

fn encode_line_string(positions: &LineStringType) -> Result<LineString> {
    LineString::new(
        positions
            .iter()
            .map(encode_point)
            .collect::<Result<_>>()?,
    )
}

fn encode_polygon(rings: &PolygonType) -> Result<Polygon> {
    let Some((exterior, interiors)) = rings.split_first() else {
        return Err(GeoShapeError::MalformedCoordinate(
            "a polygon needs at least an exterior ring".to_string(),
        ));
    };
    Polygon::new(
        encode_line_string(exterior)?,
        interiors
            .iter()
            .map(encode_line_string)
            .collect::<Result<_>>()?,
    )
}

impl TryFrom<&geojson::Value> for Geometry {
    type Error = GeoShapeError;

    fn try_from(value: &geojson::Value) -> Result<Self> {
        encode(value)
    }
}

impl TryFrom<&geojson::Geometry> for Geometry {
    type Error = GeoShapeError;

    fn try_from(value: &geojson::Geometry) -> Result<Self> {
        encode(&value.value)
    }
}
