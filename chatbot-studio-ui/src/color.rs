//! Hex and HSV color helpers for the color selector and preview.
//!
//! Components are normalized floats (0.0-1.0). Hue is also stored 0.0-1.0
//! so it maps directly onto the picker strip's x axis.

use crate::settings::DEFAULT_BUBBLE_COLOR;

/// Parse a `#RRGGBB` hex string (leading `#` optional, case-insensitive)
/// into normalized RGB. Returns `None` for anything malformed.
pub fn parse_hex(hex: &str) -> Option<[f32; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some([
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
    ])
}

/// Format normalized RGB as an uppercase `#RRGGBB` string.
pub fn format_hex(rgb: [f32; 3]) -> String {
    let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("#{:02X}{:02X}{:02X}", to_byte(rgb[0]), to_byte(rgb[1]), to_byte(rgb[2]))
}

/// Parse a hex color for rendering, falling back to the default bubble blue
/// when the string is malformed. The stored settings value is unaffected.
pub fn parse_hex_or_default(hex: &str) -> [f32; 3] {
    parse_hex(hex)
        .or_else(|| parse_hex(DEFAULT_BUBBLE_COLOR))
        .unwrap_or([0.0, 0.0, 0.0])
}

/// Convert HSV (all components 0.0-1.0) to normalized RGB.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let h = (h.clamp(0.0, 1.0) * 6.0).min(5.999_9);
    let i = h.floor();
    let f = h - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i as u32 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

/// Convert normalized RGB to HSV (all components 0.0-1.0).
pub fn rgb_to_hsv(rgb: [f32; 3]) -> [f32; 3] {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        (((g - b) / delta).rem_euclid(6.0)) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };
    let s = if max == 0.0 { 0.0 } else { delta / max };

    [h, s, max]
}

/// Fold an RGB color onto an existing HSV position. Achromatic input does
/// not determine hue (nor saturation at zero value); those components keep
/// their previous values, so a picker echoing black or white does not snap
/// back to red.
pub fn merge_hsv(prev: [f32; 3], rgb: [f32; 3]) -> [f32; 3] {
    let [h, s, v] = rgb_to_hsv(rgb);
    [
        if s > 0.0 { h } else { prev[0] },
        if v > 0.0 { s } else { prev[1] },
        v,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 0.005, "expected {} ~ {}", a, b);
    }

    #[test]
    fn test_parse_hex() {
        let rgb = parse_hex("#3B82F6").unwrap();
        assert_close(rgb[0], 0.231);
        assert_close(rgb[1], 0.510);
        assert_close(rgb[2], 0.965);

        // Leading '#' optional, case-insensitive
        assert_eq!(parse_hex("ff0000"), Some([1.0, 0.0, 0.0]));
        assert_eq!(parse_hex("#FF0000"), parse_hex("#ff0000"));
    }

    #[test]
    fn test_parse_hex_rejects_malformed() {
        assert_eq!(parse_hex(""), None);
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("#12345"), None);
        assert_eq!(parse_hex("#1234567"), None);
        assert_eq!(parse_hex("#GGGGGG"), None);
        assert_eq!(parse_hex("not-a-color"), None);
    }

    #[test]
    fn test_format_hex_round_trip() {
        for hex in ["#3B82F6", "#FF0000", "#000000", "#FFFFFF", "#10B981"] {
            let rgb = parse_hex(hex).unwrap();
            assert_eq!(format_hex(rgb), hex);
        }
    }

    #[test]
    fn test_parse_hex_or_default_falls_back() {
        assert_eq!(parse_hex_or_default("garbage"), parse_hex("#3B82F6").unwrap());
        assert_eq!(parse_hex_or_default("#FF0000"), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_hsv_anchor_points() {
        // Pure red
        let red = hsv_to_rgb(0.0, 1.0, 1.0);
        assert_eq!(red, [1.0, 0.0, 0.0]);

        // Pure green is a third of the way around the wheel
        let green = hsv_to_rgb(1.0 / 3.0, 1.0, 1.0);
        assert_close(green[0], 0.0);
        assert_close(green[1], 1.0);
        assert_close(green[2], 0.0);

        // Zero saturation is grayscale regardless of hue
        let gray = hsv_to_rgb(0.7, 0.0, 0.5);
        assert_close(gray[0], 0.5);
        assert_close(gray[1], 0.5);
        assert_close(gray[2], 0.5);
    }

    #[test]
    fn test_rgb_hsv_round_trip() {
        for hex in ["#3B82F6", "#10B981", "#EF4444", "#F59E0B"] {
            let rgb = parse_hex(hex).unwrap();
            let [h, s, v] = rgb_to_hsv(rgb);
            let back = hsv_to_rgb(h, s, v);
            assert_close(back[0], rgb[0]);
            assert_close(back[1], rgb[1]);
            assert_close(back[2], rgb[2]);
        }
    }

    #[test]
    fn test_rgb_to_hsv_white_and_black() {
        assert_eq!(rgb_to_hsv([1.0, 1.0, 1.0]), [0.0, 0.0, 1.0]);
        assert_eq!(rgb_to_hsv([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_merge_hsv_preserves_undetermined_components() {
        let blue = rgb_to_hsv(parse_hex("#3B82F6").unwrap());

        // Black pins value only; hue and saturation stay where they were
        let black = merge_hsv(blue, [0.0, 0.0, 0.0]);
        assert_eq!(black[0], blue[0]);
        assert_eq!(black[1], blue[1]);
        assert_eq!(black[2], 0.0);

        // White zeroes saturation but hue stays put
        let white = merge_hsv(blue, [1.0, 1.0, 1.0]);
        assert_eq!(white[0], blue[0]);
        assert_eq!(white[1], 0.0);
        assert_eq!(white[2], 1.0);

        // Grays keep the hue too
        let gray = merge_hsv(blue, [0.5, 0.5, 0.5]);
        assert_eq!(gray[0], blue[0]);
        assert_eq!(gray[1], 0.0);
        assert_close(gray[2], 0.5);

        // A chromatic color determines everything
        assert_eq!(merge_hsv(blue, [1.0, 0.0, 0.0]), [0.0, 1.0, 1.0]);
    }
}
