use geojson::{LineStringType, PolygonType};

use crate::error::{GeoShapeError, Result};
use crate::handle::Handle;
use crate::scalar::*;
use crate::trait_::KernelScalar;

/// Read a geometry back into nested coordinate arrays.
///
/// Dispatches on the type the kernel reports for the handle. An empty point decodes to an empty
/// position and an empty polygon to no rings.
pub fn decode(geom: &impl KernelScalar) -> Result<geojson::Value> {
    decode_geometry(&Geometry::try_from_handle(geom.handle())?)
}

/// Like [`decode`], wrapped in a [`geojson::Geometry`].
pub fn to_geojson(geom: &impl KernelScalar) -> Result<geojson::Geometry> {
    Ok(geojson::Geometry::new(decode(geom)?))
}

fn decode_geometry<H: Handle>(geom: &Geometry<H>) -> Result<geojson::Value> {
    let value = match geom {
        Geometry::Point(point) => geojson::Value::Point(point.coords()?),
        Geometry::LineString(line_string) => {
            geojson::Value::LineString(line_string_positions(line_string)?)
        }
        Geometry::Polygon(polygon) => geojson::Value::Polygon(polygon_rings(polygon)?),
        Geometry::MultiPoint(multi_point) => geojson::Value::MultiPoint(
            multi_point
                .geoms()
                .iter()
                .map(|member| Point::try_from(member?)?.coords())
                .collect::<Result<_>>()?,
        ),
        Geometry::MultiLineString(multi_line_string) => geojson::Value::MultiLineString(
            multi_line_string
                .geoms()
                .iter()
                .map(|member| line_string_positions(&LineString::try_from(member?)?))
                .collect::<Result<_>>()?,
        ),
        Geometry::MultiPolygon(multi_polygon) => geojson::Value::MultiPolygon(
            multi_polygon
                .geoms()
                .iter()
                .map(|member| polygon_rings(&Polygon::try_from(member?)?))
                .collect::<Result<_>>()?,
        ),
        Geometry::GeometryCollection(collection) => geojson::Value::GeometryCollection(
            collection
                .geoms()
                .iter()
                .map(|member| Ok(geojson::Geometry::new(decode_geometry(&member?)?)))
                .collect::<Result<_>>()?,
        ),
    };
    Ok(value)
}

fn line_string_positions<H: Handle>(line_string: &LineString<H>) -> Result<LineStringType> {
    line_string.points().map(|point| point?.coords()).collect()
}

fn polygon_rings<H: Handle>(polygon: &Polygon<H>) -> Result<PolygonType> {
    let Some(exterior) = polygon.exterior()? else {
        return Ok(vec![]);
    };
    let mut rings = Vec::with_capacity(polygon.num_interiors() + 1);
    rings.push(line_string_positions(&exterior)?);
    for index in 0..polygon.num_interiors() {
        rings.push(line_string_positions(&polygon.interior(index)?)?);
    }
    Ok(rings)
}

impl<H: Handle> TryFrom<&Geometry<H>> for geojson::Value {
    type Error = GeoShapeError;

    fn try_from(value: &Geometry<H>) -> Result<Self> {
        decode_geometry(value)
    }
}

impl<H: Handle> TryFrom<&Geometry<H>> for geojson::Geometry {
    type Error = GeoShapeError;

    fn try_from(value: &Geometry<H>) -> Result<Self> {
        Ok(geojson::Geometry::new(decode_geometry(value)?))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::geojson::encode;
    use crate::test::*;

    #[test]
    fn round_trip() {
        for (name, value) in all() {
            let geom = encode(&value).unwrap();
            assert_eq!(decode(&geom).unwrap(), value, "{name}");
        }
    }

    #[test]
    fn members_of_a_collection() {
        let collection = GeometryCollection::try_from(encode(&gc1()).unwrap()).unwrap();
        let line = collection.geoms().get(1).unwrap();
        assert_eq!(decode(&line).unwrap(), line1());
        let polygon = geojson::Value::try_from(&collection.geoms().get(-1).unwrap()).unwrap();
        assert_eq!(polygon, polygon1());
    }

    #[test]
    fn empty_geometries() {
        let empty = LineString::new(vec![]).unwrap();
        assert_eq!(decode(&empty).unwrap(), geojson::Value::LineString(vec![]));
        let empty = GeometryCollection::new(vec![]).unwrap();
        assert_eq!(
            decode(&empty).unwrap(),
            geojson::Value::GeometryCollection(vec![])
        );
    }

    #[test]
    fn geojson_geometry() {
        let geom = encode(&point2()).unwrap();
        let geometry = geojson::Geometry::try_from(&geom).unwrap();
        assert_eq!(geometry.value, point2());
        assert_eq!(to_geojson(&geom).unwrap(), geometry);
    }
}
