//! The composer: one render request in, one image file out.
//!
//! Both the CLI and the interactive surface build a [`RenderRequest`] and
//! hand it to [`compose`]; nothing else touches the pipeline.

use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::logo::overlay_logo;
use crate::errors::{QrForgeError, Result};
use crate::presets::{StylePreset, Theme};
use crate::render;

/// Default output filename when none is given.
pub const DEFAULT_OUTPUT: &str = "qr_code.png";

/// Everything needed for one generation run. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub data: String,
    pub theme: Theme,
    pub style: StylePreset,
    pub logo_path: Option<PathBuf>,
    pub output: PathBuf,
}

impl RenderRequest {
    /// Validate and normalize the inputs for one run.
    ///
    /// Fails only on empty data; the output path gets a `.png` suffix
    /// appended unless it already carries one.
    pub fn new(
        data: impl Into<String>,
        theme: Theme,
        style: StylePreset,
        logo_path: Option<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Result<Self> {
        let data = data.into();
        if data.trim().is_empty() {
            return Err(QrForgeError::EmptyData);
        }
        Ok(Self {
            data,
            theme,
            style,
            logo_path,
            output: normalize_output(output.into()),
        })
    }
}

/// Run the full pipeline for one request and write the image to disk.
///
/// The QR image is the primary deliverable: a logo that fails to load
/// degrades to a warning and the image is saved without it. The output
/// file is overwritten in place.
pub fn compose(request: &RenderRequest) -> Result<PathBuf> {
    let mut img = render::render(&request.data, &request.theme, request.style.style)?;

    if let Some(logo_path) = request.logo_path.as_deref() {
        apply_logo(&mut img, logo_path);
    }

    img.save(&request.output)?;
    Ok(request.output.clone())
}

fn apply_logo(img: &mut RgbaImage, logo_path: &Path) {
    if let Err(e) = overlay_logo(img, logo_path) {
        tracing::warn!("logo overlay skipped ({}): {e}", logo_path.display());
        eprintln!(
            "⚠️  Could not add logo {}: {e} (continuing without it)",
            logo_path.display()
        );
    }
}

/// Append `.png` unless the path already ends with it.
fn normalize_output(path: PathBuf) -> PathBuf {
    match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("png") => path,
        _ => {
            let mut raw = path.into_os_string();
            raw.push(".png");
            PathBuf::from(raw)
        }
    }
}
