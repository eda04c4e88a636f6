use crate::scalar::{LineString, Point, Polygon};

pub(crate) fn polygon1() -> geojson::Value {
    geojson::Value::Polygon(vec![vec![
        vec![0., 0.],
        vec![0., 1.],
        vec![1., 1.],
        vec![1., 0.],
        vec![0., 0.],
    ]])
}

/// A polygon without holes.
pub(crate) fn polygon_from(exterior: &[[f64; 2]]) -> Polygon {
    let points = exterior
        .iter()
        .map(|[x, y]| Point::new(*x, *y).unwrap())
        .collect();
    Polygon::new(LineString::new(points).unwrap(), vec![]).unwrap()
}

/// Two squares sharing exactly the unit square `[0, 1] x [0, 1]`.
pub(crate) fn unit_overlap() -> (Polygon, Polygon) {
    (
        polygon_from(&[[0., 0.], [5., 0.], [5., 5.], [0., 5.], [0., 0.]]),
        polygon_from(&[[-1., -1.], [1., -1.], [1., 1.], [-1., 1.], [-1., -1.]]),
    )
}
