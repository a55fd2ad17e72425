//! Hex colour parsing.

use crate::{GraphicError, Result};
use image::Rgb;

/// Parse `#RRGGBB` or `#RGB` (leading `#` optional).
pub fn parse_hex_color(value: &str) -> Result<Rgb<u8>> {
    let invalid = || GraphicError::InvalidColor(value.to_string());
    let hex = value.trim().trim_start_matches('#');

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

    match hex.len() {
        6 => Ok(Rgb([channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?])),
        3 => {
            let mut out = [0u8; 3];
            for (slot, i) in out.iter_mut().zip(0..3) {
                let digit = channel(&hex[i..=i])?;
                *slot = digit * 17;
            }
            Ok(Rgb(out))
        }
        _ => Err(invalid()),
    }
}

const NAMED: [(Rgb<u8>, &str); 3] = [
    (Rgb([0, 150, 136]), "Teal"),
    (Rgb([255, 255, 255]), "White"),
    (Rgb([0, 0, 0]), "Black"),
];

/// Common name for a hex colour, if it has one
pub fn color_name(value: &str) -> Option<&'static str> {
    let rgb = parse_hex_color(value).ok()?;
    NAMED.iter().find(|(named, _)| *named == rgb).map(|&(_, name)| name)
}
