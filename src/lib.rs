//! # qrforge
//!
//! Styled QR code generation: color themes (solid or radial gradient),
//! module drawing styles, optional centered logo overlay. QR symbol
//! encoding is delegated to the `qrcode` crate and pixel work to `image`;
//! this crate owns preset resolution, color handling, styled
//! rasterization, and compositing arithmetic.

pub mod cli;
pub mod color;
pub mod composer;
pub mod errors;
pub mod interactive;
pub mod logo;
pub mod presets;
pub mod render;

pub use composer::{compose, RenderRequest};
pub use errors::{QrForgeError, Result};
