use crate::error::Result;
use crate::kernel;
use crate::scalar::geometrycollection::build_collection;
use crate::scalar::LineString;

impl_scalar!(MultiLineString, "A collection of linestrings.");
impl_collection!(MultiLineString);

impl MultiLineString {
    pub fn new(line_strings: Vec<LineString>) -> Result<Self> {
        let collection = build_collection(
            kernel::multi_linestring_create,
            line_strings.into_iter().map(LineString::into_handle),
        )?;
        Ok(Self(collection))
    }

    pub fn push(&mut self, line_string: LineString) -> Result<()> {
        self.0.add_geometry(line_string.0)
    }
}
