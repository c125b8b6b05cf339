//! Color parsing and WCAG contrast math.
//!
//! Only the color syntaxes that appear in simple inline styles are
//! understood: `#rrggbb`, `rgb(r, g, b)` and a handful of named colors.
//! Unknown syntax yields `None` so callers can skip the check.

/// Minimum contrast ratio for normal text (WCAG 1.4.3).
pub const NORMAL_TEXT_RATIO: f64 = 4.5;

/// Minimum contrast ratio for large text (WCAG 1.4.3).
pub const LARGE_TEXT_RATIO: f64 = 3.0;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Relative luminance per WCAG 2.x.
    /// <https://www.w3.org/TR/WCAG20/#relativeluminancedef>
    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        let [r, g, b] = [self.r, self.g, self.b].map(linearize);
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Parses a CSS color value.
#[must_use]
pub fn parse_color(value: &str) -> Option<Rgb> {
    let value = value.trim().to_ascii_lowercase();
    if let Some(hex) = value.strip_prefix('#') {
        parse_hex(hex)
    } else if let Some(args) = value.strip_prefix("rgb(") {
        parse_rgb_args(args.strip_suffix(')')?)
    } else {
        named_color(&value)
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

fn parse_rgb_args(args: &str) -> Option<Rgb> {
    let mut channels = args.split(',').map(|c| c.trim().parse::<u8>());
    let r = channels.next()?.ok()?;
    let g = channels.next()?.ok()?;
    let b = channels.next()?.ok()?;
    if channels.next().is_some() {
        return None;
    }
    Some(Rgb::new(r, g, b))
}

fn named_color(name: &str) -> Option<Rgb> {
    match name {
        "black" => Some(Rgb::new(0, 0, 0)),
        "white" => Some(Rgb::new(255, 255, 255)),
        "red" => Some(Rgb::new(255, 0, 0)),
        "green" => Some(Rgb::new(0, 128, 0)),
        "blue" => Some(Rgb::new(0, 0, 255)),
        "yellow" => Some(Rgb::new(255, 255, 0)),
        "gray" | "grey" => Some(Rgb::new(128, 128, 128)),
        _ => None,
    }
}

/// Contrast ratio between two colors, in `1.0..=21.0`.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let l1 = a.relative_luminance();
    let l2 = b.relative_luminance();
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Returns true for text that qualifies as "large" under WCAG.
#[must_use]
pub fn is_large_text(font_size_px: Option<f64>, bold: bool) -> bool {
    match font_size_px {
        Some(size) => size >= 18.0 || (size >= 14.0 && bold),
        None => false,
    }
}

/// Required contrast ratio for text of the given size and weight.
#[must_use]
pub fn required_ratio(font_size_px: Option<f64>, bold: bool) -> f64 {
    if is_large_text(font_size_px, bold) {
        LARGE_TEXT_RATIO
    } else {
        NORMAL_TEXT_RATIO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb = Rgb::new(0, 0, 0);
    const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[test]
    fn parses_hex_case_insensitively() {
        assert_eq!(parse_color("#000000"), Some(BLACK));
        assert_eq!(parse_color("#FFFFFF"), Some(WHITE));
        assert_eq!(parse_color(" #1a2B3c "), Some(Rgb::new(0x1a, 0x2b, 0x3c)));
    }

    #[test]
    fn rejects_short_and_malformed_hex() {
        assert_eq!(parse_color("#fff"), None);
        assert_eq!(parse_color("#gggggg"), None);
        assert_eq!(parse_color("#1234567"), None);
    }

    #[test]
    fn parses_rgb_function() {
        assert_eq!(parse_color("rgb(255, 0, 10)"), Some(Rgb::new(255, 0, 10)));
        assert_eq!(parse_color("RGB(1,2,3)"), Some(Rgb::new(1, 2, 3)));
        assert_eq!(parse_color("rgb(256, 0, 0)"), None);
        assert_eq!(parse_color("rgb(1, 2)"), None);
        assert_eq!(parse_color("rgba(1, 2, 3, 0.5)"), None);
    }

    #[test]
    fn parses_named_colors() {
        assert_eq!(parse_color("Black"), Some(BLACK));
        assert_eq!(parse_color("grey"), parse_color("gray"));
        assert_eq!(parse_color("not-a-color"), None);
        assert_eq!(parse_color("transparent"), None);
    }

    #[test]
    fn black_on_white_is_twenty_one() {
        let ratio = contrast_ratio(BLACK, WHITE);
        assert!((ratio - 21.0).abs() < 0.01, "got {ratio}");
    }

    #[test]
    fn ratio_is_symmetric_and_one_for_same_color() {
        let a = Rgb::new(119, 119, 119);
        let b = Rgb::new(240, 10, 80);
        assert!((contrast_ratio(a, b) - contrast_ratio(b, a)).abs() < f64::EPSILON);
        assert!((contrast_ratio(a, a) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn large_text_threshold() {
        assert!((required_ratio(None, true) - NORMAL_TEXT_RATIO).abs() < f64::EPSILON);
        assert!((required_ratio(Some(18.0), false) - LARGE_TEXT_RATIO).abs() < f64::EPSILON);
        assert!((required_ratio(Some(14.0), true) - LARGE_TEXT_RATIO).abs() < f64::EPSILON);
        assert!((required_ratio(Some(14.0), false) - NORMAL_TEXT_RATIO).abs() < f64::EPSILON);
    }

    #[test]
    fn display_is_lowercase_hex() {
        assert_eq!(Rgb::new(255, 0, 171).to_string(), "#ff00ab");
    }
}
