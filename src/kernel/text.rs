//! Well-known text. Parsing is delegated to the [`wkt`] crate; writing is done here so that
//! every geometry type carries its dimension tag.

use std::fmt;
use std::str::FromStr;

use super::geometry::{CollectionKind, Kind, KernelGeometry, Xyz};

fn round_to(value: f64, decimals: Option<u32>) -> f64 {
    match decimals {
        // Beyond 15 places the factor no longer fits the mantissa.
        Some(decimals) if decimals <= 15 => {
            let factor = 10f64.powi(decimals as i32);
            (value * factor).round() / factor
        }
        _ => value,
    }
}

/// Formats a geometry as well-known text.
///
/// Every geometry with a z ordinate carries the `Z` tag, so the text reads back with the same
/// dimension. Inside a 3D geometry a position without z is written with z 0.
struct WktDisplay<'a> {
    geom: &'a KernelGeometry,
    decimals: Option<u32>,
}

impl WktDisplay<'_> {
    fn coord(&self, f: &mut fmt::Formatter<'_>, coord: Xyz, with_z: bool) -> fmt::Result {
        write!(
            f,
            "{} {}",
            round_to(coord.x, self.decimals),
            round_to(coord.y, self.decimals)
        )?;
        if with_z {
            write!(f, " {}", round_to(coord.z.unwrap_or(0.), self.decimals))?;
        }
        Ok(())
    }

    /// `(x y, x y, ...)` for a point or linestring.
    fn positions(
        &self,
        f: &mut fmt::Formatter<'_>,
        geom: &KernelGeometry,
        with_z: bool,
    ) -> fmt::Result {
        if geom.is_empty() {
            return f.write_str("EMPTY");
        }
        f.write_str("(")?;
        for (i, coord) in geom.coords().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            self.coord(f, coord, with_z)?;
        }
        f.write_str(")")
    }

    /// `(child, child, ...)`, each child written by `write_child`.
    fn nested(
        &self,
        f: &mut fmt::Formatter<'_>,
        children: &[Box<KernelGeometry>],
        mut write_child: impl FnMut(&mut fmt::Formatter<'_>, &KernelGeometry) -> fmt::Result,
    ) -> fmt::Result {
        f.write_str("(")?;
        for (i, child) in children.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_child(f, child)?;
        }
        f.write_str(")")
    }

    fn rings(
        &self,
        f: &mut fmt::Formatter<'_>,
        polygon: &KernelGeometry,
        with_z: bool,
    ) -> fmt::Result {
        if polygon.children().is_empty() {
            return f.write_str("EMPTY");
        }
        self.nested(f, polygon.children(), |f, ring| self.positions(f, ring, with_z))
    }
}

impl fmt::Display for WktDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let geom = self.geom;
        let with_z = geom.is_3d();
        f.write_str(&geom.type_name().to_uppercase())?;
        f.write_str(if with_z { " Z " } else { " " })?;
        match &geom.kind {
            Kind::Point(_) | Kind::LineString(_) => self.positions(f, geom, with_z),
            Kind::Polygon(_) => self.rings(f, geom, with_z),
            Kind::Collection(_, children) if children.is_empty() => f.write_str("EMPTY"),
            Kind::Collection(CollectionKind::MultiPoint, children) => {
                self.nested(f, children, |f, point| self.positions(f, point, with_z))
            }
            Kind::Collection(CollectionKind::MultiLineString, children) => {
                self.nested(f, children, |f, line| self.positions(f, line, with_z))
            }
            Kind::Collection(CollectionKind::MultiPolygon, children) => {
                self.nested(f, children, |f, polygon| self.rings(f, polygon, with_z))
            }
            Kind::Collection(CollectionKind::GeometryCollection, children) => {
                self.nested(f, children, |f, member| {
                    let member = WktDisplay {
                        geom: member,
                        decimals: self.decimals,
                    };
                    fmt::Display::fmt(&member, f)
                })
            }
        }
    }
}

/// Well-known text for `geom`, optionally rounding every ordinate to `decimals` places.
pub(super) fn write(geom: &KernelGeometry, decimals: Option<u32>) -> String {
    WktDisplay { geom, decimals }.to_string()
}

fn coord_from_wkt(coord: &wkt::types::Coord<f64>) -> Xyz {
    Xyz {
        x: coord.x,
        y: coord.y,
        z: coord.z,
    }
}

fn point_from_wkt(point: &wkt::types::Point<f64>) -> Box<KernelGeometry> {
    Box::new(KernelGeometry::point(point.0.as_ref().map(coord_from_wkt)))
}

fn line_string_from_wkt(line_string: &wkt::types::LineString<f64>) -> Box<KernelGeometry> {
    Box::new(KernelGeometry::line_string(
        line_string
            .0
            .iter()
            .map(|coord| Box::new(KernelGeometry::point(Some(coord_from_wkt(coord)))))
            .collect(),
    ))
}

fn polygon_from_wkt(polygon: &wkt::types::Polygon<f64>) -> Box<KernelGeometry> {
    Box::new(KernelGeometry::polygon(
        polygon.0.iter().map(line_string_from_wkt).collect(),
    ))
}

fn from_wkt(geom: &wkt::Wkt<f64>) -> KernelGeometry {
    match geom {
        wkt::Wkt::Point(point) => *point_from_wkt(point),
        wkt::Wkt::LineString(line_string) => *line_string_from_wkt(line_string),
        wkt::Wkt::Polygon(polygon) => *polygon_from_wkt(polygon),
        wkt::Wkt::MultiPoint(multi_point) => KernelGeometry::collection(
            CollectionKind::MultiPoint,
            multi_point.0.iter().map(point_from_wkt).collect(),
        ),
        wkt::Wkt::MultiLineString(multi_line_string) => KernelGeometry::collection(
            CollectionKind::MultiLineString,
            multi_line_string.0.iter().map(line_string_from_wkt).collect(),
        ),
        wkt::Wkt::MultiPolygon(multi_polygon) => KernelGeometry::collection(
            CollectionKind::MultiPolygon,
            multi_polygon.0.iter().map(polygon_from_wkt).collect(),
        ),
        wkt::Wkt::GeometryCollection(collection) => KernelGeometry::collection(
            CollectionKind::GeometryCollection,
            collection
                .0
                .iter()
                .map(|child| Box::new(from_wkt(child)))
                .collect(),
        ),
    }
}

pub(super) fn read(text: &str) -> Result<KernelGeometry, String> {
    let parsed = wkt::Wkt::<f64>::from_str(text).map_err(|err| err.to_string())?;
    Ok(from_wkt(&parsed))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn read_write_3d_line() {
        let geom = read("LINESTRING Z (3.4 6.4 3.7, 5.6 2.5 3.6)").unwrap();
        assert!(geom.is_3d());
        assert_eq!(geom.children().len(), 2);
        assert_eq!(read(&write(&geom, None)).unwrap(), geom);
    }

    #[test]
    fn every_3d_type_is_tagged() {
        for text in [
            "POINT Z (1 2 3)",
            "LINESTRING Z (0 0 1, 1 1 2)",
            "POLYGON Z ((0 0 0, 1 0 0, 1 1 0, 0 0 0), (0.2 0.1 0, 0.3 0.1 0, 0.3 0.2 0, 0.2 0.1 0))",
            "MULTIPOINT Z ((1 2 3), (4 5 6))",
            "MULTILINESTRING Z ((0 0 1, 1 1 2), (2 2 2, 3 3 3))",
            "MULTIPOLYGON Z (((0 0 5, 1 0 5, 1 1 5, 0 0 5)))",
            "GEOMETRYCOLLECTION Z (POINT Z (1 2 3), LINESTRING (0 0, 1 1))",
        ] {
            let geom = read(text).unwrap();
            assert_eq!(write(&geom, None), text);
        }
    }

    #[test]
    fn empties() {
        for text in ["POINT EMPTY", "LINESTRING EMPTY", "GEOMETRYCOLLECTION EMPTY"] {
            assert_eq!(write(&read(text).unwrap(), None), text);
        }
    }

    #[test]
    fn missing_z_inside_3d_geometry_is_zero() {
        let multi_point = KernelGeometry::collection(
            CollectionKind::MultiPoint,
            vec![
                Box::new(KernelGeometry::point(Some(Xyz {
                    x: 1.,
                    y: 2.,
                    z: None,
                }))),
                Box::new(KernelGeometry::point(Some(Xyz {
                    x: 3.,
                    y: 4.,
                    z: Some(5.),
                }))),
            ],
        );
        assert_eq!(write(&multi_point, None), "MULTIPOINT Z ((1 2 0), (3 4 5))");
        assert!(read(&write(&multi_point, None)).is_ok());
    }

    #[test]
    fn rounding() {
        let geom = read("POINT (1.23456 2)").unwrap();
        let rounded = read(&write(&geom, Some(2))).unwrap();
        assert_eq!(rounded.coord().unwrap().x, 1.23);
    }

    #[test]
    fn invalid_text() {
        assert!(read("POINT (1 2").is_err());
        assert!(read("NOT A GEOMETRY").is_err());
    }
}
