//! Defines [`GeoShapeError`], representing all errors returned by this crate.

use std::borrow::Cow;
use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoShapeError {
    /// A geometry type tag or kernel type id that does not name one of the seven variants, or a
    /// built geometry whose kernel type differs from the declared one.
    #[error("Unknown geometry type: {0}")]
    UnknownGeometryType(String),

    /// A coordinate or nested coordinate structure that cannot describe a geometry.
    #[error("Malformed coordinate: {0}")]
    MalformedCoordinate(String),

    /// Collection index outside `-len..len`.
    #[error("Index {index} out of range for collection of length {len}")]
    IndexOutOfRange { index: isize, len: usize },

    /// The kernel rejected an operation. Carries the kernel's own message.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A 3D-only accessor was used on a 2D geometry.
    #[error("Dimension error: {0}")]
    Dimension(String),

    /// Incorrect type was passed to an operation.
    #[error("Incorrect type passed to operation: {0}")]
    IncorrectType(Cow<'static, str>),

    /// The kernel could not parse well-known text.
    #[error("WKT error: {0}")]
    Wkt(String),

    /// General error.
    #[error("General error: {0}")]
    General(String),

    /// [serde_json::Error]
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    /// [std::str::Utf8Error]
    #[error(transparent)]
    Utf8(#[from] std::str::Utf8Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoShapeError>;
