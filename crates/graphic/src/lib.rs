//! Feature graphic generation for Google Play.
//!
//! This crate provides:
//! - A clipped RGB canvas with line, circle outline and text primitives
//! - An explicit font probe with a built-in bitmap fallback
//! - The fixed promotional layout (title, subtitle, decorations)
//! - PNG output with parent directory creation

#![warn(missing_docs)]

mod builtin_font;
mod canvas;
mod color;
mod error;
mod font;
mod layout;

pub use canvas::Canvas;
pub use color::{color_name, parse_hex_color};
pub use error::{GraphicError, Result};
pub use font::{probe_font, FallbackReason, FontSelection, Typeface};
pub use layout::{Circle, Layout, Line};

use image::{ImageFormat, Rgb, RgbImage};
use playprep_core::config::GraphicConfig;
use std::path::{Path, PathBuf};

/// Colours used by the graphic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Canvas fill
    pub background: Rgb<u8>,
    /// Text and decorations
    pub accent: Rgb<u8>,
    /// Text shadow
    pub shadow: Rgb<u8>,
}

impl Theme {
    /// Parse the configured hex colours
    pub fn from_config(config: &GraphicConfig) -> Result<Self> {
        Ok(Self {
            background: parse_hex_color(&config.background)?,
            accent: parse_hex_color(&config.accent)?,
            shadow: parse_hex_color(&config.shadow)?,
        })
    }
}

/// Which font ended up drawing the text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontUsed {
    /// A preferred TrueType font
    TrueType(PathBuf),
    /// The built-in bitmap font
    Builtin,
}

/// Result of a successful [`generate`] call
#[derive(Debug, Clone)]
pub struct GraphicOutcome {
    /// Written file
    pub path: PathBuf,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Size of the written file
    pub size_bytes: u64,
    /// Font that rendered the text
    pub font: FontUsed,
}

/// Render the feature graphic in memory
///
/// The image always has the configured dimensions, whichever font is used.
/// Sizes that [`GraphicConfig::validate`] rejects are refused before any
/// allocation.
pub fn render(config: &GraphicConfig) -> Result<(RgbImage, FontUsed)> {
    config.validate().map_err(GraphicError::InvalidConfig)?;
    let theme = Theme::from_config(config)?;
    let selection = probe_font(&config.font_paths);
    let font_used = match &selection {
        FontSelection::TrueType { path, .. } => FontUsed::TrueType(path.clone()),
        FontSelection::Builtin { reason } => {
            tracing::debug!(%reason, "Using built-in bitmap font");
            FontUsed::Builtin
        }
    };
    let typeface = Typeface::from(selection);

    let mut canvas = Canvas::new(config.width, config.height, theme.background);
    let layout = Layout::for_height(config.height);

    draw_centered(
        &mut canvas,
        &typeface,
        &config.title,
        config.title_size,
        layout.title_y,
        layout.title_shadow,
        &theme,
    );
    draw_centered(
        &mut canvas,
        &typeface,
        &config.subtitle,
        config.subtitle_size,
        layout.subtitle_y,
        layout.subtitle_shadow,
        &theme,
    );

    for circle in &layout.circles {
        canvas.draw_circle_outline(circle.cx, circle.cy, circle.radius, circle.stroke, theme.accent);
    }
    for line in &layout.lines {
        canvas.draw_line(line.x0, line.y0, line.x1, line.y1, line.stroke, theme.accent);
    }

    Ok((canvas.into_image(), font_used))
}

/// Draw text horizontally centred, shadow first
fn draw_centered(
    canvas: &mut Canvas,
    typeface: &Typeface,
    text: &str,
    size: f32,
    y: i32,
    shadow_offset: i32,
    theme: &Theme,
) {
    let (text_width, _) = typeface.measure(text, size);
    let x = (i64::from(canvas.width()) - i64::from(text_width)) / 2;
    let x = i32::try_from(x).unwrap_or(0);

    typeface.draw(canvas, text, x + shadow_offset, y + shadow_offset, size, theme.shadow);
    typeface.draw(canvas, text, x, y, size, theme.accent);
}

/// Render the feature graphic and write it as PNG
///
/// Parent directories are created as needed and an existing file is
/// overwritten.
pub fn generate(config: &GraphicConfig) -> Result<GraphicOutcome> {
    let (image, font) = render(config)?;
    let path = config.output.clone();

    ensure_parent(&path)?;
    image.save_with_format(&path, ImageFormat::Png)?;

    let size_bytes = std::fs::metadata(&path)
        .map_err(|source| GraphicError::Io { path: path.clone(), source })?
        .len();

    tracing::info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        size_bytes,
        "Feature graphic written"
    );

    Ok(GraphicOutcome {
        path,
        width: image.width(),
        height: image.height(),
        size_bytes,
        font,
    })
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .map_err(|source| GraphicError::Io { path: parent.to_path_buf(), source }),
        _ => Ok(()),
    }
}
