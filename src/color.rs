use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Theme colours
// ---------------------------------------------------------------------------

pub const ACCENT: Color32 = Color32::from_rgb(0x56, 0xcf, 0xe1);
pub const HIGHLIGHT: Color32 = Color32::from_rgb(0xf4, 0xa2, 0x61);
pub const LOGOUT: Color32 = Color32::from_rgb(0xf4, 0x8c, 0x06);
pub const SIDEBAR: Color32 = Color32::from_rgb(0x39, 0x48, 0x67);

pub const SUCCESS: Color32 = Color32::from_rgb(0x3b, 0xb2, 0x73);
pub const WARNING: Color32 = Color32::from_rgb(0xe9, 0xc4, 0x6a);
pub const ERROR: Color32 = Color32::from_rgb(0xe6, 0x39, 0x46);

// ---------------------------------------------------------------------------
// Series palette
// ---------------------------------------------------------------------------

/// First hue sits on the accent blue so a single series matches the theme.
const BASE_HUE: f32 = 190.0;
const SATURATION: f32 = 0.7;
const LIGHTNESS: f32 = 0.55;

/// `n` visually distinct colours on evenly spaced hues, one per series or
/// pie slice.
pub fn series_colors(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (BASE_HUE + i as f32 / n as f32 * 360.0) % 360.0;
            let rgb: Srgb = Hsl::new(hue, SATURATION, LIGHTNESS).into_color();
            let rgb: Srgb<u8> = rgb.into_format();
            Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
        })
        .collect()
}
