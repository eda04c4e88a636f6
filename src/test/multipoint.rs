use geojson::Value;

use crate::test::{point1, point2};

/// One 2D and one 3D member.
pub(crate) fn multipoint() -> Value {
    let (Value::Point(p1), Value::Point(p2)) = (point1(), point2()) else {
        unreachable!()
    };
    Value::MultiPoint(vec![p1, p2])
}
