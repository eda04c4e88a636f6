//! The geometry kernel and its C-ABI surface.
//!
//! Everything outside this module treats the kernel as a black box: geometries are opaque
//! [`KernelGeometry`] handles, created, inspected and released only through the functions below.
//! Algorithms are delegated to [`geo`] and the text grammar to [`wkt`].
//!
//! # Safety
//!
//! All `unsafe` functions share one contract:
//!
//! - geometry pointers are null or point to live handles produced by this kernel;
//! - a `*mut KernelGeometry` argument documented as *consumed* is owned by the kernel after the
//!   call, whether or not the call succeeds, and must not be used or released again;
//! - `*const KernelGeometry` values returned by `*_n` / `*_ring` accessors borrow from their
//!   parent and become invalid when the parent is released or mutated;
//! - text buffers written by [`geometry_as_text`] and [`last_error`] must be released with
//!   [`text_free`], exactly once.
//!
//! Failures are signalled through the return value (null, `NaN`, `0` or `-1`) and a thread-local
//! message retrieved with [`last_error`]. The kernel is not thread-safe for shared handles.
#![allow(clippy::missing_safety_doc)]

mod error;
mod geometry;
mod ops;
mod text;

use std::ffi::CString;
use std::os::raw::{c_char, c_int};
use std::ptr;
use std::sync::atomic::{AtomicBool, Ordering};

pub use geometry::KernelGeometry;
use geometry::{CollectionKind, Kind, Xyz};

pub const TYPE_POINT: c_int = 1;
pub const TYPE_LINESTRING: c_int = 2;
pub const TYPE_POLYGON: c_int = 3;
pub const TYPE_MULTIPOINT: c_int = 4;
pub const TYPE_MULTILINESTRING: c_int = 5;
pub const TYPE_MULTIPOLYGON: c_int = 6;
pub const TYPE_GEOMETRYCOLLECTION: c_int = 7;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");

static INITIALIZED: AtomicBool = AtomicBool::new(false);

fn initialized() -> bool {
    let initialized = INITIALIZED.load(Ordering::Acquire);
    if !initialized {
        error::set("kernel_init has not been called");
    }
    initialized
}

fn into_handle(geom: KernelGeometry) -> *mut KernelGeometry {
    Box::into_raw(Box::new(geom))
}

unsafe fn geometry<'a>(geom: *const KernelGeometry) -> Option<&'a KernelGeometry> {
    let geom = geom.as_ref();
    if geom.is_none() {
        error::set("null geometry handle");
    }
    geom
}

unsafe fn geometry_mut<'a>(geom: *mut KernelGeometry) -> Option<&'a mut KernelGeometry> {
    let geom = geom.as_mut();
    if geom.is_none() {
        error::set("null geometry handle");
    }
    geom
}

/// Take ownership of a consumed argument.
unsafe fn consume(geom: *mut KernelGeometry) -> Option<Box<KernelGeometry>> {
    if geom.is_null() {
        error::set("null geometry handle");
        None
    } else {
        Some(Box::from_raw(geom))
    }
}

unsafe fn write_text(text: String, buffer: *mut *mut c_char, len: *mut usize) -> c_int {
    if buffer.is_null() || len.is_null() {
        error::set("null output pointer");
        return 0;
    }
    match CString::new(text) {
        Ok(text) => {
            *len = text.as_bytes().len();
            *buffer = text.into_raw();
            1
        }
        Err(_) => {
            *buffer = ptr::null_mut();
            *len = 0;
            error::set("text contains an interior NUL byte");
            0
        }
    }
}

/// Initialize the kernel. Must be called before any geometry is created.
pub extern "C" fn kernel_init() {
    INITIALIZED.store(true, Ordering::Release);
}

/// NUL-terminated, statically allocated version string.
pub extern "C" fn kernel_version() -> *const c_char {
    VERSION.as_ptr().cast()
}

/// Move the last error message of this thread into a new text buffer.
///
/// Returns `1` and fills `buffer`/`len` when there was an error, `0` otherwise.
pub unsafe extern "C" fn last_error(buffer: *mut *mut c_char, len: *mut usize) -> c_int {
    match error::take() {
        Some(message) => write_text(message, buffer, len),
        None => 0,
    }
}

/// Release a text buffer produced by the kernel.
pub unsafe extern "C" fn text_free(buffer: *mut c_char) {
    if !buffer.is_null() {
        drop(CString::from_raw(buffer));
    }
}

/// Parse `len` bytes of well-known text.
pub unsafe extern "C" fn io_read_wkt(text: *const c_char, len: usize) -> *mut KernelGeometry {
    if !initialized() {
        return ptr::null_mut();
    }
    if text.is_null() {
        error::set("null text pointer");
        return ptr::null_mut();
    }
    let bytes = std::slice::from_raw_parts(text.cast::<u8>(), len);
    let text = match std::str::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            error::set(format!("text is not valid UTF-8: {err}"));
            return ptr::null_mut();
        }
    };
    match text::read(text) {
        Ok(geom) => into_handle(geom),
        Err(message) => {
            error::set(message);
            ptr::null_mut()
        }
    }
}

/// Write `geom` as well-known text into a new buffer of `len` bytes (plus a trailing NUL).
pub unsafe extern "C" fn geometry_as_text(
    geom: *const KernelGeometry,
    buffer: *mut *mut c_char,
    len: *mut usize,
) -> c_int {
    geometry_as_text_decim(geom, -1, buffer, len)
}

/// Like [`geometry_as_text`], rounding ordinates to `decimals` places. Negative means exact.
pub unsafe extern "C" fn geometry_as_text_decim(
    geom: *const KernelGeometry,
    decimals: c_int,
    buffer: *mut *mut c_char,
    len: *mut usize,
) -> c_int {
    let Some(geom) = geometry(geom) else {
        return 0;
    };
    write_text(text::write(geom, u32::try_from(decimals).ok()), buffer, len)
}

/// One of the `TYPE_*` constants, or `0` for a null handle.
pub unsafe extern "C" fn geometry_type_id(geom: *const KernelGeometry) -> c_int {
    geometry(geom).map_or(0, KernelGeometry::type_id)
}

/// `1` if any position carries a z ordinate, `0` otherwise or for a null handle.
pub unsafe extern "C" fn geometry_is_3d(geom: *const KernelGeometry) -> c_int {
    geometry(geom).map_or(0, |geom| geom.is_3d() as c_int)
}

/// `1` for an empty geometry, `0` for a non-empty one, `-1` for a null handle.
pub unsafe extern "C" fn geometry_is_empty(geom: *const KernelGeometry) -> c_int {
    geometry(geom).map_or(-1, |geom| geom.is_empty() as c_int)
}

/// Deep copy. The copy is owned by the caller.
pub unsafe extern "C" fn geometry_clone(geom: *const KernelGeometry) -> *mut KernelGeometry {
    geometry(geom).map_or(ptr::null_mut(), |geom| into_handle(geom.clone()))
}

/// Release `geom` and everything it contains.
pub unsafe extern "C" fn geometry_delete(geom: *mut KernelGeometry) {
    if !geom.is_null() {
        drop(Box::from_raw(geom));
    }
}

pub extern "C" fn point_create_from_xy(x: f64, y: f64) -> *mut KernelGeometry {
    if !initialized() {
        return ptr::null_mut();
    }
    into_handle(KernelGeometry::point(Some(Xyz { x, y, z: None })))
}

pub extern "C" fn point_create_from_xyz(x: f64, y: f64, z: f64) -> *mut KernelGeometry {
    if !initialized() {
        return ptr::null_mut();
    }
    into_handle(KernelGeometry::point(Some(Xyz { x, y, z: Some(z) })))
}

unsafe fn point_ordinate(geom: *const KernelGeometry, ordinate: fn(Xyz) -> Option<f64>) -> f64 {
    let Some(geom) = geometry(geom) else {
        return f64::NAN;
    };
    match &geom.kind {
        Kind::Point(Some(coord)) => ordinate(*coord).unwrap_or_else(|| {
            error::set("point has no z coordinate");
            f64::NAN
        }),
        Kind::Point(None) => {
            error::set("empty point has no coordinates");
            f64::NAN
        }
        _ => {
            error::set(format!("{} is not a point", geom.type_name()));
            f64::NAN
        }
    }
}

pub unsafe extern "C" fn point_x(geom: *const KernelGeometry) -> f64 {
    point_ordinate(geom, |coord| Some(coord.x))
}

pub unsafe extern "C" fn point_y(geom: *const KernelGeometry) -> f64 {
    point_ordinate(geom, |coord| Some(coord.y))
}

pub unsafe extern "C" fn point_z(geom: *const KernelGeometry) -> f64 {
    point_ordinate(geom, |coord| coord.z)
}

unsafe fn child_count(geom: *const KernelGeometry, is_expected: fn(&Kind) -> bool) -> usize {
    match geometry(geom) {
        Some(geom) if is_expected(&geom.kind) => geom.children().len(),
        Some(geom) => {
            error::set(format!("unexpected {}", geom.type_name()));
            0
        }
        None => 0,
    }
}

unsafe fn child_at(
    geom: *const KernelGeometry,
    n: usize,
    is_expected: fn(&Kind) -> bool,
) -> *const KernelGeometry {
    match geometry(geom) {
        Some(geom) if is_expected(&geom.kind) => match geom.children().get(n) {
            Some(child) => &**child as *const KernelGeometry,
            None => {
                error::set(format!("index {n} out of range for {}", geom.type_name()));
                ptr::null()
            }
        },
        Some(geom) => {
            error::set(format!("unexpected {}", geom.type_name()));
            ptr::null()
        }
        None => ptr::null(),
    }
}

fn is_line_string(kind: &Kind) -> bool {
    matches!(kind, Kind::LineString(_))
}

fn is_polygon(kind: &Kind) -> bool {
    matches!(kind, Kind::Polygon(_))
}

fn is_collection(kind: &Kind) -> bool {
    matches!(kind, Kind::Collection(..))
}

pub extern "C" fn linestring_create() -> *mut KernelGeometry {
    if !initialized() {
        return ptr::null_mut();
    }
    into_handle(KernelGeometry::line_string(vec![]))
}

/// Append `point` (consumed) to `linestring`. Returns `1` on success.
pub unsafe extern "C" fn linestring_add_point(
    linestring: *mut KernelGeometry,
    point: *mut KernelGeometry,
) -> c_int {
    let Some(point) = consume(point) else {
        return 0;
    };
    let Some(linestring) = geometry_mut(linestring) else {
        return 0;
    };
    let name = linestring.type_name();
    match (&mut linestring.kind, &point.kind) {
        (Kind::LineString(points), Kind::Point(Some(_))) => {
            points.push(point);
            1
        }
        (Kind::LineString(_), _) => {
            error::set(format!("cannot add {} to a LineString", point.type_name()));
            0
        }
        _ => {
            error::set(format!("{name} is not a LineString"));
            0
        }
    }
}

pub unsafe extern "C" fn linestring_num_points(linestring: *const KernelGeometry) -> usize {
    child_count(linestring, is_line_string)
}

pub unsafe extern "C" fn linestring_point_n(
    linestring: *const KernelGeometry,
    n: usize,
) -> *const KernelGeometry {
    child_at(linestring, n, is_line_string)
}

/// Create a polygon around `ring` (consumed).
pub unsafe extern "C" fn polygon_create_from_exterior_ring(
    ring: *mut KernelGeometry,
) -> *mut KernelGeometry {
    let Some(ring) = consume(ring) else {
        return ptr::null_mut();
    };
    if !initialized() {
        return ptr::null_mut();
    }
    if !is_line_string(&ring.kind) {
        error::set(format!("a {} cannot be a polygon ring", ring.type_name()));
        return ptr::null_mut();
    }
    into_handle(KernelGeometry::polygon(vec![ring]))
}

/// Append `ring` (consumed) as an interior ring. Returns `1` on success.
pub unsafe extern "C" fn polygon_add_interior_ring(
    polygon: *mut KernelGeometry,
    ring: *mut KernelGeometry,
) -> c_int {
    let Some(ring) = consume(ring) else {
        return 0;
    };
    let Some(polygon) = geometry_mut(polygon) else {
        return 0;
    };
    let name = polygon.type_name();
    match &mut polygon.kind {
        Kind::Polygon(rings) if !rings.is_empty() && is_line_string(&ring.kind) => {
            rings.push(ring);
            1
        }
        Kind::Polygon(rings) if rings.is_empty() => {
            error::set("cannot add an interior ring to an empty Polygon");
            0
        }
        Kind::Polygon(_) => {
            error::set(format!("a {} cannot be a polygon ring", ring.type_name()));
            0
        }
        _ => {
            error::set(format!("{name} is not a Polygon"));
            0
        }
    }
}

/// The first ring, borrowed from `polygon`. Null for a polygon without rings.
pub unsafe extern "C" fn polygon_exterior_ring(
    polygon: *const KernelGeometry,
) -> *const KernelGeometry {
    child_at(polygon, 0, is_polygon)
}

pub unsafe extern "C" fn polygon_num_interior_rings(polygon: *const KernelGeometry) -> usize {
    child_count(polygon, is_polygon).saturating_sub(1)
}

pub unsafe extern "C" fn polygon_interior_ring_n(
    polygon: *const KernelGeometry,
    n: usize,
) -> *const KernelGeometry {
    child_at(polygon, n.saturating_add(1), is_polygon)
}

fn collection_create(kind: CollectionKind) -> *mut KernelGeometry {
    if !initialized() {
        return ptr::null_mut();
    }
    into_handle(KernelGeometry::collection(kind, vec![]))
}

pub extern "C" fn multi_point_create() -> *mut KernelGeometry {
    collection_create(CollectionKind::MultiPoint)
}

pub extern "C" fn multi_linestring_create() -> *mut KernelGeometry {
    collection_create(CollectionKind::MultiLineString)
}

pub extern "C" fn multi_polygon_create() -> *mut KernelGeometry {
    collection_create(CollectionKind::MultiPolygon)
}

pub extern "C" fn geometry_collection_create() -> *mut KernelGeometry {
    collection_create(CollectionKind::GeometryCollection)
}

/// Append `geom` (consumed) to `collection`. Typed collections only accept their member type.
pub unsafe extern "C" fn geometry_collection_add_geometry(
    collection: *mut KernelGeometry,
    geom: *mut KernelGeometry,
) -> c_int {
    let Some(geom) = consume(geom) else {
        return 0;
    };
    let Some(collection) = geometry_mut(collection) else {
        return 0;
    };
    if !collection.accepts(&geom) {
        error::set(format!(
            "cannot add {} to {}",
            geom.type_name(),
            collection.type_name()
        ));
        return 0;
    }
    match &mut collection.kind {
        Kind::Collection(_, children) => {
            children.push(geom);
            1
        }
        _ => 0,
    }
}

pub unsafe extern "C" fn geometry_collection_num_geometries(
    collection: *const KernelGeometry,
) -> usize {
    child_count(collection, is_collection)
}

pub unsafe extern "C" fn geometry_collection_geometry_n(
    collection: *const KernelGeometry,
    n: usize,
) -> *const KernelGeometry {
    child_at(collection, n, is_collection)
}

unsafe fn binary<T>(
    a: *const KernelGeometry,
    b: *const KernelGeometry,
    op: fn(&KernelGeometry, &KernelGeometry) -> Result<T, String>,
) -> Option<T> {
    let a = geometry(a)?;
    let b = geometry(b)?;
    op(a, b).map_err(error::set).ok()
}

/// Planar distance, or `NaN` on failure.
pub unsafe extern "C" fn geometry_distance(a: *const KernelGeometry, b: *const KernelGeometry) -> f64 {
    binary(a, b, ops::distance).unwrap_or(f64::NAN)
}

/// 3D distance (missing z counts as 0), or `NaN` on failure.
pub unsafe extern "C" fn geometry_distance_3d(
    a: *const KernelGeometry,
    b: *const KernelGeometry,
) -> f64 {
    binary(a, b, ops::distance_3d).unwrap_or(f64::NAN)
}

/// Planar area, or `NaN` on failure.
pub unsafe extern "C" fn geometry_area(geom: *const KernelGeometry) -> f64 {
    geometry(geom)
        .and_then(|geom| ops::area(geom).map_err(error::set).ok())
        .unwrap_or(f64::NAN)
}

/// `1` if the geometries intersect, `0` if not, `-1` on failure.
pub unsafe extern "C" fn geometry_intersects(a: *const KernelGeometry, b: *const KernelGeometry) -> c_int {
    match binary(a, b, ops::intersects) {
        Some(true) => 1,
        Some(false) => 0,
        None => -1,
    }
}

/// A new geometry owned by the caller, or null on failure.
pub unsafe extern "C" fn geometry_intersection(
    a: *const KernelGeometry,
    b: *const KernelGeometry,
) -> *mut KernelGeometry {
    binary(a, b, ops::intersection).map_or(ptr::null_mut(), into_handle)
}

#[cfg(test)]
mod test {
    use super::*;

    fn take_text(buffer: *mut c_char, len: usize) -> String {
        let text = unsafe { std::slice::from_raw_parts(buffer.cast::<u8>(), len) };
        let text = String::from_utf8(text.to_vec()).unwrap();
        unsafe { text_free(buffer) };
        text
    }

    fn last_message() -> Option<String> {
        let mut buffer = ptr::null_mut();
        let mut len = 0;
        if unsafe { last_error(&mut buffer, &mut len) } == 1 {
            Some(take_text(buffer, len))
        } else {
            None
        }
    }

    #[test]
    fn build_and_read_back_a_linestring() {
        kernel_init();
        unsafe {
            let line = linestring_create();
            assert_eq!(linestring_add_point(line, point_create_from_xy(0., 0.)), 1);
            assert_eq!(linestring_add_point(line, point_create_from_xyz(1., 2., 3.)), 1);
            assert_eq!(linestring_num_points(line), 2);
            assert_eq!(point_z(linestring_point_n(line, 1)), 3.);
            assert!(linestring_point_n(line, 2).is_null());
            assert!(last_message().unwrap().contains("out of range"));
            geometry_delete(line);
        }
    }

    #[test]
    fn typed_collection_consumes_rejected_member() {
        kernel_init();
        unsafe {
            let multi_point = multi_point_create();
            assert_eq!(
                geometry_collection_add_geometry(multi_point, linestring_create()),
                0
            );
            assert_eq!(
                last_message().unwrap(),
                "cannot add LineString to MultiPoint"
            );
            assert_eq!(geometry_collection_num_geometries(multi_point), 0);
            geometry_delete(multi_point);
        }
    }

    #[test]
    fn text_round_trip() {
        kernel_init();
        let wkt = "POINT (1 2)";
        unsafe {
            let geom = io_read_wkt(wkt.as_ptr().cast(), wkt.len());
            assert_eq!(geometry_type_id(geom), TYPE_POINT);
            let mut buffer = ptr::null_mut();
            let mut len = 0;
            assert_eq!(geometry_as_text(geom, &mut buffer, &mut len), 1);
            let text = take_text(buffer, len);
            geometry_delete(geom);

            let again = io_read_wkt(text.as_ptr().cast(), text.len());
            assert_eq!(point_x(again), 1.);
            assert_eq!(point_y(again), 2.);
            geometry_delete(again);
        }
    }

    #[test]
    fn failures_report_through_last_error() {
        kernel_init();
        unsafe {
            let empty = geometry_collection_create();
            let point = point_create_from_xy(0., 0.);
            assert!(geometry_distance(empty, point).is_nan());
            assert!(last_message().unwrap().contains("empty"));
            assert!(point_x(empty).is_nan());
            assert_eq!(last_message().unwrap(), "GeometryCollection is not a point");
            assert!(last_message().is_none());
            geometry_delete(empty);
            geometry_delete(point);
        }
    }
}
