//! Command-line surface: flags in, one composed image out.

use std::path::PathBuf;

use clap::Parser;

use crate::composer::{self, RenderRequest, DEFAULT_OUTPUT};
use crate::errors::Result;
use crate::presets::{self, Theme};

/// Styled QR code generator
#[derive(Debug, Parser)]
#[command(name = "qrforge", version, about = "🔳 Styled QR code generator")]
pub struct Cli {
    /// URL or text to encode in the QR code
    #[arg(short, long, required_unless_present = "interactive")]
    pub data: Option<String>,

    /// Color theme (1-8)
    #[arg(short, long, default_value = "5")]
    pub theme: String,

    /// QR code style (1-6)
    #[arg(short, long, default_value = "1")]
    pub style: String,

    /// Output filename
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Optional logo image to center on the code
    #[arg(short, long)]
    pub logo: Option<PathBuf>,

    /// Prompt for everything instead of reading flags
    #[arg(short, long)]
    pub interactive: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Debug logging
    #[arg(long)]
    pub debug: bool,
}

/// One-shot run from parsed flags.
pub fn run(args: Cli) -> Result<()> {
    let theme = Theme::from(presets::resolve_theme(&args.theme));
    let style = *presets::resolve_style(&args.style);
    let request = RenderRequest::new(
        args.data.unwrap_or_default(),
        theme,
        style,
        args.logo,
        args.output,
    )?;

    let rule = "═".repeat(50);
    println!("{rule}");
    println!("🔳 QR Code Generator");
    println!("{rule}");
    println!("📝 Data: {}", request.data);
    println!("🎨 Theme: {}", request.theme.name);
    println!("🔲 Style: {}", request.style.name);
    println!("💾 Output: {}", request.output.display());
    println!("{rule}");

    let saved = composer::compose(&request)?;

    println!();
    println!("✅ SUCCESS! QR code saved as: {}", saved.display());
    println!("{rule}");
    Ok(())
}
