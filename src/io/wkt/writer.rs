use std::os::raw::c_int;
use std::ptr;

use crate::buffer::{last_kernel_error, KernelBuffer};
use crate::error::{GeoShapeError, Result};
use crate::kernel;
use crate::trait_::KernelScalar;

/// Options for writing well-known text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WktWriteOptions {
    /// Round every ordinate to this many decimal places. `None` writes full precision.
    pub decimals: Option<u32>,
}

/// Write `geom` as well-known text at full precision.
pub fn write_wkt(geom: &impl KernelScalar) -> Result<String> {
    write_wkt_with_options(geom, &WktWriteOptions::default())
}

/// Write `geom` as well-known text, configured by `options`.
pub fn write_wkt_with_options(
    geom: &impl KernelScalar,
    options: &WktWriteOptions,
) -> Result<String> {
    let mut text = ptr::null_mut();
    let mut len = 0;
    let handle = geom.handle().as_ptr();
    let status = unsafe {
        match options.decimals {
            Some(decimals) => kernel::geometry_as_text_decim(
                handle,
                c_int::try_from(decimals).unwrap_or(c_int::MAX),
                &mut text,
                &mut len,
            ),
            None => kernel::geometry_as_text(handle, &mut text, &mut len),
        }
    };
    match unsafe { KernelBuffer::from_raw(text, len) } {
        Some(buffer) if status == 1 => Ok(buffer.to_str()?.to_string()),
        _ => Err(GeoShapeError::General(last_kernel_error())),
    }
}

/// Well-known text output for any geometry.
pub trait ToWkt {
    fn to_wkt(&self) -> Result<String>;

    fn to_wkt_with_options(&self, options: &WktWriteOptions) -> Result<String>;
}

impl<G: KernelScalar> ToWkt for G {
    fn to_wkt(&self) -> Result<String> {
        write_wkt(self)
    }

    fn to_wkt_with_options(&self, options: &WktWriteOptions) -> Result<String> {
        write_wkt_with_options(self, options)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::geojson::{decode, encode};
    use crate::io::wkt::read_wkt;
    use crate::scalar::Point;
    use crate::test::*;

    #[test]
    fn round_trip() {
        // 2D members of a 3D multi-geometry read back with z 0.
        for (name, value) in all()
            .into_iter()
            .filter(|(name, _)| !["multipoint", "multilinestring1"].contains(name))
        {
            let text = encode(&value).unwrap().to_wkt().unwrap();
            assert!(!text.is_empty());
            let geom = read_wkt(&text).unwrap();
            assert_eq!(decode(&geom).unwrap(), value, "{name}: {text}");
        }
    }

    #[test]
    fn z_tag() {
        let text = Point::new_xyz(1., 2., 3.).unwrap().to_wkt().unwrap();
        assert!(text.contains('Z'), "{text}");
        let text = Point::new(1., 2.).unwrap().to_wkt().unwrap();
        assert!(!text.contains('Z'), "{text}");
    }

    #[test]
    fn line_3d_round_trip() {
        let text = encode(&line2()).unwrap().to_wkt().unwrap();
        assert!(text.starts_with("LINESTRING Z ("), "{text}");
        let geom = read_wkt(&text).unwrap();
        assert!(geom.is_3d());
        assert_eq!(decode(&geom).unwrap(), line2());
    }

    #[test]
    fn mixed_members_read_back_with_zero_z() {
        let multi_point = geojson::Value::MultiPoint(vec![vec![1., 2.], vec![3., 4., 5.]]);
        let text = encode(&multi_point).unwrap().to_wkt().unwrap();
        assert_eq!(
            decode(&read_wkt(&text).unwrap()).unwrap(),
            geojson::Value::MultiPoint(vec![vec![1., 2., 0.], vec![3., 4., 5.]])
        );
    }

    #[test]
    fn decimals() {
        let point = Point::new(1.23456, -7.891011).unwrap();
        let options = WktWriteOptions { decimals: Some(2) };
        let text = point.to_wkt_with_options(&options).unwrap();
        let rounded = Point::try_from(read_wkt(&text).unwrap()).unwrap();
        assert_eq!(rounded.x().unwrap(), 1.23);
        assert_eq!(rounded.y().unwrap(), -7.89);
    }
}
