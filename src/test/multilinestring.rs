use geojson::Value;

use crate::test::{line1, line2};

pub(crate) fn multilinestring1() -> Value {
    let (Value::LineString(l1), Value::LineString(l2)) = (line1(), line2()) else {
        unreachable!()
    };
    Value::MultiLineString(vec![l1, l2])
}
