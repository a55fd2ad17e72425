//! Font probing and text rendering.

use crate::{builtin_font, Canvas};
use ab_glyph::{point, Font, FontVec, GlyphId, PxScale, PxScaleFont, ScaleFont};
use image::Rgb;
use std::fmt;
use std::path::{Path, PathBuf};

/// Outcome of probing the preferred fonts
pub enum FontSelection {
    /// A preferred font loaded
    TrueType {
        /// Where it was loaded from
        path: PathBuf,
        /// Parsed font
        font: FontVec,
    },
    /// No preferred font was usable
    Builtin {
        /// Why the fallback was taken
        reason: FallbackReason,
    },
}

impl fmt::Debug for FontSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSelection::TrueType { path, .. } => f.debug_struct("TrueType").field("path", path).finish(),
            FontSelection::Builtin { reason } => f.debug_struct("Builtin").field("reason", reason).finish(),
        }
    }
}

/// Why the built-in font was selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// No preferred fonts were configured
    NoCandidates,
    /// Every candidate was missing, unreadable or not a font
    Unavailable {
        /// Number of candidates tried
        tried: usize,
    },
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::NoCandidates => write!(f, "no preferred fonts configured"),
            FallbackReason::Unavailable { tried } => write!(f, "none of {tried} preferred fonts could be loaded"),
        }
    }
}

/// Try each candidate font in order and report what is usable
///
/// Never fails: an unusable candidate is logged at debug level and skipped.
pub fn probe_font(candidates: &[PathBuf]) -> FontSelection {
    if candidates.is_empty() {
        return FontSelection::Builtin {
            reason: FallbackReason::NoCandidates,
        };
    }

    for path in candidates {
        match load_font(path) {
            Ok(font) => {
                tracing::debug!(path = %path.display(), "Loaded preferred font");
                return FontSelection::TrueType {
                    path: path.clone(),
                    font,
                };
            }
            Err(reason) => {
                tracing::debug!(path = %path.display(), %reason, "Preferred font unavailable");
            }
        }
    }

    FontSelection::Builtin {
        reason: FallbackReason::Unavailable { tried: candidates.len() },
    }
}

fn load_font(path: &Path) -> Result<FontVec, String> {
    let data = std::fs::read(path).map_err(|e| e.to_string())?;
    FontVec::try_from_vec(data).map_err(|e| e.to_string())
}

/// Text renderer chosen by [`probe_font`]
pub enum Typeface {
    /// Anti-aliased outline font
    TrueType(FontVec),
    /// Scaled bitmap font
    Builtin,
}

impl From<FontSelection> for Typeface {
    fn from(selection: FontSelection) -> Self {
        match selection {
            FontSelection::TrueType { font, .. } => Typeface::TrueType(font),
            FontSelection::Builtin { .. } => Typeface::Builtin,
        }
    }
}

impl Typeface {
    /// Width and height of `text` at `size` pixels
    pub fn measure(&self, text: &str, size: f32) -> (u32, u32) {
        match self {
            Typeface::TrueType(font) => {
                let scaled = font.as_scaled(PxScale::from(size));
                let width = layout_advances(&scaled, text).last().map_or(0.0, |&(_, end)| end);
                (width.ceil().max(0.0) as u32, scaled.height().ceil().max(0.0) as u32)
            }
            Typeface::Builtin => builtin_font::measure(text, size),
        }
    }

    /// Draw `text` with the top of its line box at `y`
    pub fn draw(&self, canvas: &mut Canvas, text: &str, x: i32, y: i32, size: f32, color: Rgb<u8>) {
        match self {
            Typeface::TrueType(font) => draw_outlined(canvas, font, text, x, y, size, color),
            Typeface::Builtin => builtin_font::draw(canvas, text, x, y, size, color),
        }
    }
}

/// Glyph ids with the caret position after each one, kerning applied
fn layout_advances(scaled: &PxScaleFont<&FontVec>, text: &str) -> Vec<(GlyphId, f32)> {
    let mut caret = 0.0;
    let mut previous: Option<GlyphId> = None;
    let mut out = Vec::with_capacity(text.len());

    for ch in text.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, id);
        }
        caret += scaled.h_advance(id);
        out.push((id, caret));
        previous = Some(id);
    }
    out
}

fn draw_outlined(canvas: &mut Canvas, font: &FontVec, text: &str, x: i32, y: i32, size: f32, color: Rgb<u8>) {
    let scale = PxScale::from(size);
    let scaled = font.as_scaled(scale);
    let baseline = y as f32 + scaled.ascent();

    for (id, end) in layout_advances(&scaled, text) {
        let origin = x as f32 + end - scaled.h_advance(id);
        let glyph = id.with_scale_and_position(scale, point(origin, baseline));
        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                canvas.blend(
                    bounds.min.x as i32 + gx as i32,
                    bounds.min.y as i32 + gy as i32,
                    color,
                    coverage,
                );
            });
        }
    }
}
