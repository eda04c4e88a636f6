use geojson::JsonObject;
use serde_json::Value as JsonValue;

use crate::datatypes::GeometryType;
use crate::error::{GeoShapeError, Result};
use crate::io::geojson::{encode, to_geojson};
use crate::scalar::Geometry;
use crate::trait_::KernelScalar;

fn malformed(err: serde_json::Error) -> GeoShapeError {
    GeoShapeError::MalformedCoordinate(err.to_string())
}

fn field<'a>(object: &'a JsonObject, key: &str, typ: GeometryType) -> Result<&'a JsonValue> {
    object.get(key).ok_or_else(|| {
        GeoShapeError::MalformedCoordinate(format!("{typ} object has no \"{key}\" member"))
    })
}

/// Parse a GeoJSON geometry object into nested coordinate arrays.
///
/// The `"type"` member is matched ignoring case.
fn value_from_mapping(mapping: &JsonValue) -> Result<geojson::Value> {
    let object = mapping.as_object().ok_or_else(|| {
        GeoShapeError::MalformedCoordinate(format!("expected a geometry object, found {mapping}"))
    })?;
    let typ: GeometryType = object
        .get("type")
        .and_then(JsonValue::as_str)
        .ok_or_else(|| {
            GeoShapeError::UnknownGeometryType("object has no \"type\" string".to_string())
        })?
        .parse()?;

    let coordinates = || -> Result<JsonValue> { Ok(field(object, "coordinates", typ)?.clone()) };
    let value = match typ {
        GeometryType::Point => {
            geojson::Value::Point(serde_json::from_value(coordinates()?).map_err(malformed)?)
        }
        GeometryType::LineString => {
            geojson::Value::LineString(serde_json::from_value(coordinates()?).map_err(malformed)?)
        }
        GeometryType::Polygon => {
            geojson::Value::Polygon(serde_json::from_value(coordinates()?).map_err(malformed)?)
        }
        GeometryType::MultiPoint => {
            geojson::Value::MultiPoint(serde_json::from_value(coordinates()?).map_err(malformed)?)
        }
        GeometryType::MultiLineString => geojson::Value::MultiLineString(
            serde_json::from_value(coordinates()?).map_err(malformed)?,
        ),
        GeometryType::MultiPolygon => geojson::Value::MultiPolygon(
            serde_json::from_value(coordinates()?).map_err(malformed)?,
        ),
        GeometryType::GeometryCollection => geojson::Value::GeometryCollection(
            field(object, "geometries", typ)?
                .as_array()
                .ok_or_else(|| {
                    GeoShapeError::MalformedCoordinate(
                        "\"geometries\" must be an array".to_string(),
                    )
                })?
                .iter()
                .map(|geom| value_from_mapping(geom).map(geojson::Geometry::new))
                .collect::<Result<_>>()?,
        ),
    };
    Ok(value)
}

/// Build a geometry from a GeoJSON geometry object.
///
/// ```
/// use geoshape::io::geojson::shape;
/// use serde_json::json;
///
/// let geom = shape(&json!({"type": "point", "coordinates": [1.0, 2.0]})).unwrap();
/// assert_eq!(geom.kind().name(), "Point");
/// ```
pub fn shape(mapping: &JsonValue) -> Result<Geometry> {
    encode(&value_from_mapping(mapping)?)
}

/// Like [`shape`], parsing the object from JSON text first.
pub fn shape_str(text: &str) -> Result<Geometry> {
    let mapping: JsonValue = serde_json::from_str(text)?;
    shape(&mapping)
}

/// A GeoJSON geometry object for `geom`, with its type spelled canonically.
pub fn mapping(geom: &impl KernelScalar) -> Result<JsonObject> {
    Ok(JsonObject::from(&to_geojson(geom)?))
}
