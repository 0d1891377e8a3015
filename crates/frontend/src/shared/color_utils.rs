//! Color helpers for category chips.

/// Neutral gray used when a stored color fails to parse.
const FALLBACK_RGB: (u8, u8, u8) = (107, 114, 128);

/// Convert a `#RGB` or `#RRGGBB` hex color to an `rgba(...)` string.
/// Malformed input falls back on a neutral gray instead of failing the
/// render.
pub fn hex_to_rgba(hex: &str, alpha: f32) -> String {
    let (r, g, b) = parse_hex(hex).unwrap_or(FALLBACK_RGB);
    let alpha = alpha.clamp(0.0, 1.0);
    format!("rgba({}, {}, {}, {})", r, g, b, alpha)
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.trim().strip_prefix('#')?;
    match digits.len() {
        3 => {
            let mut chars = digits.chars();
            let r = chars.next()?.to_digit(16)? as u8;
            let g = chars.next()?.to_digit(16)? as u8;
            let b = chars.next()?.to_digit(16)? as u8;
            Some((r * 17, g * 17, b * 17))
        }
        6 => {
            let r = u8::from_str_radix(digits.get(0..2)?, 16).ok()?;
            let g = u8::from_str_radix(digits.get(2..4)?, 16).ok()?;
            let b = u8::from_str_radix(digits.get(4..6)?, 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_hex() {
        assert_eq!(hex_to_rgba("#2F80ED", 1.0), "rgba(47, 128, 237, 1)");
        assert_eq!(hex_to_rgba("#2f80ed", 0.15), "rgba(47, 128, 237, 0.15)");
    }

    #[test]
    fn short_hex_expands() {
        assert_eq!(hex_to_rgba("#fff", 1.0), "rgba(255, 255, 255, 1)");
        assert_eq!(hex_to_rgba("#f00", 0.5), "rgba(255, 0, 0, 0.5)");
    }

    #[test]
    fn malformed_falls_back() {
        assert_eq!(hex_to_rgba("2F80ED", 1.0), "rgba(107, 114, 128, 1)");
        assert_eq!(hex_to_rgba("#2F80", 1.0), "rgba(107, 114, 128, 1)");
        assert_eq!(hex_to_rgba("#gggggg", 1.0), "rgba(107, 114, 128, 1)");
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(hex_to_rgba("#000", 7.0), "rgba(0, 0, 0, 1)");
        assert_eq!(hex_to_rgba("#000", -1.0), "rgba(0, 0, 0, 0)");
    }
}
