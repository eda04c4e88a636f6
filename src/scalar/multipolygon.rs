use crate::error::Result;
use crate::kernel;
use crate::scalar::geometrycollection::build_collection;
use crate::scalar::Polygon;

impl_scalar!(MultiPolygon, "A collection of polygons.");
impl_collection!(MultiPolygon);

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Result<Self> {
        let collection = build_collection(
            kernel::multi_polygon_create,
            polygons.into_iter().map(Polygon::into_handle),
        )?;
        Ok(Self(collection))
    }

    pub fn push(&mut self, polygon: Polygon) -> Result<()> {
        self.0.add_geometry(polygon.0)
    }
}
