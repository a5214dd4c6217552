//! Centered logo overlay with a white backing square.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::errors::Result;

/// The logo takes 1/4 of the base edge; fixed, within the ~30% damage
/// tolerance of error-correction level H.
const LOGO_DIVISOR: u32 = 4;
/// White backing margin around the logo, in pixels per side.
const BACKING_MARGIN: u32 = 10;

/// Placement arithmetic for a centered square logo and its backing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoGeometry {
    /// Logo edge length in pixels.
    pub logo_edge: u32,
    /// Top-left offset of the logo, applied to both axes.
    pub logo_offset: u32,
    /// Backing square edge length.
    pub backing_edge: u32,
    /// Top-left offset of the backing square, applied to both axes.
    pub backing_offset: u32,
}

impl LogoGeometry {
    /// Compute placement for a base image of the given edge length.
    pub fn for_base_edge(base_edge: u32) -> Self {
        let logo_edge = base_edge / LOGO_DIVISOR;
        let logo_offset = (base_edge - logo_edge) / 2;
        Self {
            logo_edge,
            logo_offset,
            backing_edge: logo_edge + 2 * BACKING_MARGIN,
            backing_offset: logo_offset.saturating_sub(BACKING_MARGIN),
        }
    }
}

/// Composite the logo at `logo_path` onto the center of `base`.
///
/// The backing square is painted before the logo: reversed, modules would
/// show through the margin. `to_rgba8` guarantees an alpha channel (fully
/// opaque for sources without one), so the alpha-aware overlay always has
/// a mask to work with.
pub fn overlay_logo(base: &mut RgbaImage, logo_path: &Path) -> Result<()> {
    let logo = image::open(logo_path)?.to_rgba8();
    let geometry = LogoGeometry::for_base_edge(base.width());
    let logo = imageops::resize(
        &logo,
        geometry.logo_edge,
        geometry.logo_edge,
        FilterType::Lanczos3,
    );

    paint_backing(base, geometry);
    imageops::overlay(
        base,
        &logo,
        i64::from(geometry.logo_offset),
        i64::from(geometry.logo_offset),
    );
    Ok(())
}

/// Opaque white square behind the logo, for contrast and quiet zone.
fn paint_backing(base: &mut RgbaImage, geometry: LogoGeometry) {
    let white = Rgba([255, 255, 255, 255]);
    let x_end = (geometry.backing_offset + geometry.backing_edge).min(base.width());
    let y_end = (geometry.backing_offset + geometry.backing_edge).min(base.height());
    for y in geometry.backing_offset..y_end {
        for x in geometry.backing_offset..x_end {
            base.put_pixel(x, y, white);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_for_a_400px_base() {
        let geometry = LogoGeometry::for_base_edge(400);
        assert_eq!(geometry.logo_edge, 100);
        assert_eq!(geometry.logo_offset, 150);
        assert_eq!(geometry.backing_edge, 120);
        assert_eq!(geometry.backing_offset, 140);
    }

    #[test]
    fn geometry_uses_integer_division() {
        let geometry = LogoGeometry::for_base_edge(402);
        assert_eq!(geometry.logo_edge, 100);
        assert_eq!(geometry.logo_offset, 151);
    }

    #[test]
    fn overlay_paints_backing_then_logo() {
        let dir = tempfile::tempdir().unwrap();
        let logo_path = dir.path().join("logo.png");
        // fully opaque red logo
        let logo = RgbaImage::from_pixel(64, 64, Rgba([255, 0, 0, 255]));
        logo.save(&logo_path).unwrap();

        let mut base = RgbaImage::from_pixel(400, 400, Rgba([0, 0, 0, 255]));
        overlay_logo(&mut base, &logo_path).unwrap();

        // logo area center is red
        assert_eq!(base.get_pixel(200, 200).0, [255, 0, 0, 255]);
        // backing margin around the logo is white, not the dark modules
        assert_eq!(base.get_pixel(145, 145).0, [255, 255, 255, 255]);
        assert_eq!(base.get_pixel(255, 255).0, [255, 255, 255, 255]);
        // outside the backing the base is untouched
        assert_eq!(base.get_pixel(100, 100).0, [0, 0, 0, 255]);
    }

    #[test]
    fn transparent_logo_pixels_leave_the_backing_visible() {
        let dir = tempfile::tempdir().unwrap();
        let logo_path = dir.path().join("logo.png");
        // fully transparent logo: the paste mask keeps every base pixel
        let logo = RgbaImage::from_pixel(64, 64, Rgba([255, 0, 0, 0]));
        logo.save(&logo_path).unwrap();

        let mut base = RgbaImage::from_pixel(400, 400, Rgba([0, 0, 0, 255]));
        overlay_logo(&mut base, &logo_path).unwrap();

        // the white backing shows through instead of the red logo
        assert_eq!(base.get_pixel(200, 200).0, [255, 255, 255, 255]);
    }

    #[test]
    fn missing_logo_file_is_an_error() {
        let mut base = RgbaImage::from_pixel(400, 400, Rgba([0, 0, 0, 255]));
        let missing = Path::new("definitely/not/here.png");
        assert!(overlay_logo(&mut base, missing).is_err());
    }
}
