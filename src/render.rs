//! Styled rasterization of an encoded QR symbol.
//!
//! Encoding (segmentation, error correction, masking) belongs to the
//! `qrcode` crate; this module only turns the module matrix into pixels.

use image::RgbaImage;
use qrcode::{Color as Module, EcLevel, QrCode};

use crate::color::Rgb;
use crate::errors::Result;
use crate::presets::{ModuleStyle, Theme, ThemeColors};

/// Pixels per module.
pub const MODULE_SIZE: u32 = 12;
/// Quiet zone width, in modules.
pub const BORDER_MODULES: u32 = 4;

/// Encode `data` and rasterize it with the given theme and module style.
///
/// Error correction is pinned at level H (~30% damage tolerance), which
/// keeps the symbol scannable under a centered logo overlay.
/// Deterministic: identical inputs produce identical pixels.
pub fn render(data: &str, theme: &Theme, style: ModuleStyle) -> Result<RgbaImage> {
    let code = QrCode::with_error_correction_level(data, EcLevel::H)?;
    let width = code.width() as u32;
    let image_edge = (width + 2 * BORDER_MODULES) * MODULE_SIZE;

    let back = theme.colors.back().to_rgba(255);
    let mut img = RgbaImage::from_pixel(image_edge, image_edge, back);

    for my in 0..width {
        for mx in 0..width {
            if code[(mx as usize, my as usize)] != Module::Dark {
                continue;
            }
            let x0 = (BORDER_MODULES + mx) * MODULE_SIZE;
            let y0 = (BORDER_MODULES + my) * MODULE_SIZE;
            for dy in 0..MODULE_SIZE {
                for dx in 0..MODULE_SIZE {
                    if !covers(style, dx, dy) {
                        continue;
                    }
                    let (px, py) = (x0 + dx, y0 + dy);
                    let fill = foreground_at(&theme.colors, px, py, image_edge);
                    img.put_pixel(px, py, fill.to_rgba(255));
                }
            }
        }
    }

    Ok(img)
}

/// Whether the pixel at cell offset `(dx, dy)` is covered by a dark module
/// drawn in the given style. Offsets are within `[0, MODULE_SIZE)`.
fn covers(style: ModuleStyle, dx: u32, dy: u32) -> bool {
    let size = MODULE_SIZE as f32;
    let half = size / 2.0;
    // pixel center relative to the cell center
    let cx = dx as f32 + 0.5 - half;
    let cy = dy as f32 + 0.5 - half;
    // 10% inset per side, shared by the gapped and bar styles
    let inset = (size * 0.1).round() as u32;

    match style {
        ModuleStyle::Square => true,
        ModuleStyle::GappedSquare => {
            dx >= inset && dx < MODULE_SIZE - inset && dy >= inset && dy < MODULE_SIZE - inset
        }
        ModuleStyle::Circle => cx * cx + cy * cy <= half * half,
        ModuleStyle::Rounded => in_rounded_square(cx.abs(), cy.abs()),
        // one-axis inset only, so adjacent modules fuse into bars
        ModuleStyle::VerticalBars => dx >= inset && dx < MODULE_SIZE - inset,
        ModuleStyle::HorizontalBars => dy >= inset && dy < MODULE_SIZE - inset,
    }
}

/// Full-cell square with quarter-circle corners of radius `MODULE_SIZE / 4`,
/// tested in absolute cell-center coordinates.
fn in_rounded_square(ax: f32, ay: f32) -> bool {
    let half = MODULE_SIZE as f32 / 2.0;
    let radius = MODULE_SIZE as f32 / 4.0;
    if ax > half || ay > half {
        return false;
    }
    if ax <= half - radius || ay <= half - radius {
        return true;
    }
    let dx = ax - (half - radius);
    let dy = ay - (half - radius);
    dx * dx + dy * dy <= radius * radius
}

/// Theme foreground color at pixel `(px, py)` in an image of the given edge.
fn foreground_at(colors: &ThemeColors, px: u32, py: u32, image_edge: u32) -> Rgb {
    match *colors {
        ThemeColors::Solid { fill, .. } => fill,
        ThemeColors::Gradient {
            center,
            edge: edge_color,
            ..
        } => {
            let half = image_edge as f32 / 2.0;
            let dx = px as f32 + 0.5 - half;
            let dy = py as f32 + 0.5 - half;
            let t = (dx * dx + dy * dy).sqrt() / half;
            center.lerp(edge_color, t)
        }
    }
}
