//! Error types for qrforge.

use thiserror::Error;

/// Errors that can occur while composing a QR image
#[derive(Error, Debug)]
pub enum QrForgeError {
    /// No data was given to encode
    #[error("no data given to encode")]
    EmptyData,

    /// A user-supplied hex color could not be parsed
    #[error("invalid hex color {value:?} (expected 6 hex digits, e.g. \"#7F00FF\")")]
    InvalidColor { value: String },

    /// The barcode library rejected the input (e.g. too long for level H)
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),

    /// Image decode/encode error from the imaging library
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result with QrForgeError
pub type Result<T> = std::result::Result<T, QrForgeError>;
