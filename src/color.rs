//! Parsing of textual color specifications.
//!
//! Accepted forms are `#RRGGBB`, `#AARRGGBB` and a small set of case-insensitive
//! color names (`red`, `navy`, `lightgray`, ...).

use egui::Color32;

use crate::error::{DrawingError, DrawingResult};

const NAMED_COLORS: &[(&str, u32)] = &[
    ("black", 0xFF000000),
    ("darkgray", 0xFF444444),
    ("darkgrey", 0xFF444444),
    ("gray", 0xFF888888),
    ("grey", 0xFF888888),
    ("lightgray", 0xFFCCCCCC),
    ("lightgrey", 0xFFCCCCCC),
    ("white", 0xFFFFFFFF),
    ("red", 0xFFFF0000),
    ("green", 0xFF00FF00),
    ("blue", 0xFF0000FF),
    ("yellow", 0xFFFFFF00),
    ("cyan", 0xFF00FFFF),
    ("magenta", 0xFFFF00FF),
    ("aqua", 0xFF00FFFF),
    ("fuchsia", 0xFFFF00FF),
    ("lime", 0xFF00FF00),
    ("maroon", 0xFF800000),
    ("navy", 0xFF000080),
    ("olive", 0xFF808000),
    ("purple", 0xFF800080),
    ("silver", 0xFFC0C0C0),
    ("teal", 0xFF008080),
];

/// Parse a color specification into a [`Color32`].
pub fn parse_color(spec: &str) -> DrawingResult<Color32> {
    let invalid = || DrawingError::InvalidColorFormat(spec.to_owned());

    if let Some(hex) = spec.strip_prefix('#') {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        return match hex.len() {
            6 => Ok(argb_to_color(0xFF00_0000 | value)),
            8 => Ok(argb_to_color(value)),
            _ => Err(invalid()),
        };
    }

    let name = spec.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, argb)| argb_to_color(*argb))
        .ok_or_else(invalid)
}

/// Format a color as `#RRGGBB`, or `#AARRGGBB` when it is not opaque.
pub fn format_color(color: Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    if a == u8::MAX {
        format!("#{r:02X}{g:02X}{b:02X}")
    } else {
        format!("#{a:02X}{r:02X}{g:02X}{b:02X}")
    }
}

fn argb_to_color(argb: u32) -> Color32 {
    let [a, r, g, b] = argb.to_be_bytes();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}
