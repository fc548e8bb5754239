//! Palette swatch helpers for the colors section.

use serde::Serialize;

/// Text tone that stays readable on top of a swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTone {
    Light,
    Dark,
}

/// Parse `#rrggbb`, `rrggbb`, `#rgb` or `rgb` into its channels.
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let clean = hex.trim().trim_start_matches('#');
    if !clean.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let full: String = match clean.len() {
        3 => clean.chars().flat_map(|c| [c, c]).collect(),
        6 => clean.to_string(),
        _ => return None,
    };
    let channel = |i: usize| u8::from_str_radix(&full[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Pick the label tone for a swatch using the YIQ brightness formula.
///
/// Bright swatches (YIQ >= 128) get dark text. Empty or malformed hex
/// values get light text.
pub fn contrast_tone(hex: &str) -> TextTone {
    match parse_hex(hex) {
        Some((r, g, b)) => {
            let yiq = (u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000;
            if yiq >= 128 {
                TextTone::Dark
            } else {
                TextTone::Light
            }
        }
        None => TextTone::Light,
    }
}
