use crate::error::{GeoShapeError, Result};
use crate::handle::Borrowed;
use crate::kernel;
use crate::scalar::{Geometry, GeometryRef};

/// A lazy view over the members of a collection.
///
/// Every member is handed out as a [`GeometryRef`] borrowed from the collection, which therefore
/// cannot be modified or dropped while the view or any member is alive. Lengths are asked of the
/// kernel on each call rather than cached.
#[derive(Debug, Clone, Copy)]
pub struct GeometrySequence<'a> {
    parent: Borrowed<'a>,
}

impl<'a> GeometrySequence<'a> {
    pub(crate) fn new(parent: Borrowed<'a>) -> Self {
        Self { parent }
    }

    pub fn len(&self) -> usize {
        unsafe { kernel::geometry_collection_num_geometries(self.parent.as_ptr()) }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn member(&self, index: usize) -> Result<GeometryRef<'a>> {
        let ptr = unsafe { kernel::geometry_collection_geometry_n(self.parent.as_ptr(), index) };
        Geometry::try_from_handle(unsafe { Borrowed::from_raw(ptr) }?)
    }

    /// The member at `index`. Negative indices count back from the end, so `-1` is the last one.
    pub fn get(&self, index: isize) -> Result<GeometryRef<'a>> {
        let len = self.len();
        let resolved = if index < 0 {
            index.checked_add(len as isize)
        } else {
            Some(index)
        };
        match resolved {
            Some(resolved) if (0..len as isize).contains(&resolved) => {
                self.member(resolved as usize)
            }
            _ => Err(GeoShapeError::IndexOutOfRange { index, len }),
        }
    }

    /// Every `step`-th member from `start` up to, but excluding, `stop`.
    ///
    /// Negative bounds count back from the end and out-of-range bounds are clamped. A negative
    /// `step` walks backwards, from the last member by default. A zero `step` is an error.
    pub fn slice(
        &self,
        start: Option<isize>,
        stop: Option<isize>,
        step: Option<isize>,
    ) -> Result<Vec<GeometryRef<'a>>> {
        let step = step.unwrap_or(1);
        if step == 0 {
            return Err(GeoShapeError::General("slice step cannot be zero".to_string()));
        }
        let len = self.len() as isize;
        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };
        let clamp = |bound: isize| {
            if bound < 0 {
                (bound + len).max(lower)
            } else {
                bound.min(upper)
            }
        };
        let start = start.map_or(if step < 0 { upper } else { lower }, clamp);
        let stop = stop.map_or(if step < 0 { lower } else { upper }, clamp);

        let mut members = vec![];
        let mut index = start;
        while (step > 0 && index < stop) || (step < 0 && index > stop) {
            members.push(self.member(index as usize)?);
            index += step;
        }
        Ok(members)
    }

    /// Iterate over the members in order. The length is read once, when iteration starts.
    pub fn iter(&self) -> GeometryIter<'a> {
        GeometryIter {
            sequence: *self,
            index: 0,
            len: self.len(),
        }
    }
}

impl<'a> IntoIterator for GeometrySequence<'a> {
    type Item = Result<GeometryRef<'a>>;
    type IntoIter = GeometryIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &GeometrySequence<'a> {
    type Item = Result<GeometryRef<'a>>;
    type IntoIter = GeometryIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the members of a [`GeometrySequence`].
#[derive(Debug, Clone)]
pub struct GeometryIter<'a> {
    sequence: GeometrySequence<'a>,
    index: usize,
    len: usize,
}

impl<'a> Iterator for GeometryIter<'a> {
    type Item = Result<GeometryRef<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.len {
            return None;
        }
        let member = self.sequence.member(self.index);
        self.index += 1;
        Some(member)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GeometryIter<'_> {}

#[cfg(test)]
mod test {
    use crate::datatypes::GeometryType;
    use crate::error::GeoShapeError;
    use crate::io::geojson::{decode, encode};
    use crate::scalar::GeometryCollection;
    use crate::test::gc1;
    use crate::trait_::KernelScalar;

    fn collection() -> GeometryCollection {
        GeometryCollection::try_from(encode(&gc1()).unwrap()).unwrap()
    }

    #[test]
    fn index_resolution() {
        let collection = collection();
        let geoms = collection.geoms();
        assert_eq!(geoms.len(), 3);
        assert_eq!(geoms.get(1).unwrap().kind(), GeometryType::LineString);
        assert_eq!(geoms.get(-1).unwrap().kind(), GeometryType::Polygon);
        assert_eq!(geoms.get(-3).unwrap().kind(), GeometryType::Point);
        assert!(matches!(
            geoms.get(3),
            Err(GeoShapeError::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert!(matches!(
            geoms.get(-4),
            Err(GeoShapeError::IndexOutOfRange { index: -4, len: 3 })
        ));
    }

    #[test]
    fn slices() {
        let collection = collection();
        let geoms = collection.geoms();
        let kinds = |start, stop, step| {
            geoms
                .slice(start, stop, step)
                .unwrap()
                .iter()
                .map(|geom| geom.kind())
                .collect::<Vec<_>>()
        };
        assert_eq!(
            kinds(Some(0), Some(2), None),
            vec![GeometryType::Point, GeometryType::LineString]
        );
        assert_eq!(
            kinds(None, None, Some(-1)),
            vec![
                GeometryType::Polygon,
                GeometryType::LineString,
                GeometryType::Point
            ]
        );
        assert_eq!(kinds(Some(-2), None, None).len(), 2);
        assert_eq!(
            kinds(None, None, Some(2)),
            vec![GeometryType::Point, GeometryType::Polygon]
        );
        assert!(kinds(Some(5), Some(10), None).is_empty());
        assert!(matches!(
            geoms.slice(None, None, Some(0)),
            Err(GeoShapeError::General(_))
        ));
    }

    #[test]
    fn iteration_is_restartable() {
        let collection = collection();
        let geoms = collection.geoms();
        let first: Vec<_> = geoms.iter().map(|geom| geom.unwrap().kind()).collect();
        let second: Vec<_> = geoms.into_iter().map(|geom| geom.unwrap().kind()).collect();
        assert_eq!(first, second);
        assert_eq!(geoms.iter().len(), 3);
    }

    #[test]
    fn dropped_members_leave_the_collection_intact() {
        let collection = collection();
        for index in [0, 1, -1] {
            let member = collection.geoms().get(index).unwrap();
            assert!(!member.owns_handle());
            let copy = member.to_owned_geometry().unwrap();
            assert!(copy.owns_handle());
        }
        assert_eq!(collection.num_geometries(), 3);
        assert_eq!(decode(&collection).unwrap(), gc1());
    }

    #[test]
    fn empty_collection() {
        let collection = GeometryCollection::new(vec![]).unwrap();
        assert!(collection.geoms().is_empty());
        assert_eq!(collection.geoms().iter().count(), 0);
        assert!(collection.geoms().get(0).is_err());
        assert!(collection.geoms().get(-1).is_err());
    }
}
