use crate::error::Result;
use crate::kernel;
use crate::scalar::geometrycollection::build_collection;
use crate::scalar::Point;

impl_scalar!(MultiPoint, "A collection of points.");
impl_collection!(MultiPoint);

impl MultiPoint {
    pub fn new(points: Vec<Point>) -> Result<Self> {
        let collection = build_collection(
            kernel::multi_point_create,
            points.into_iter().map(Point::into_handle),
        )?;
        Ok(Self(collection))
    }

    pub fn push(&mut self, point: Point) -> Result<()> {
        self.0.add_geometry(point.0)
    }
}
