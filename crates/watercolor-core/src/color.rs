use std::fmt;

/// Hue/saturation/lightness triple; alpha is supplied at draw time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    pub const fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// CSS `hsla(...)` string with the given opacity, clamped to [0, 1].
    pub fn css_with_alpha(&self, alpha: f32) -> String {
        format!(
            "hsla({}, {}%, {}%, {})",
            self.hue,
            self.saturation,
            self.lightness,
            alpha.clamp(0.0, 1.0)
        )
    }
}

/// Straight RGBA color with 8-bit channels and a float alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            self.a.clamp(0.0, 1.0)
        )
    }
}

// Teal/blue pigments
pub const DEFAULT_PALETTE: [Hsl; 10] = [
    Hsl::new(174.0, 72.0, 45.0), // teal primary
    Hsl::new(190.0, 70.0, 50.0), // lighter teal
    Hsl::new(200.0, 65.0, 55.0), // blue-teal
    Hsl::new(160.0, 60.0, 45.0), // green-teal
    Hsl::new(180.0, 50.0, 60.0), // cyan
    Hsl::new(210.0, 45.0, 55.0), // soft blue
    Hsl::new(170.0, 80.0, 40.0), // deep teal
    Hsl::new(185.0, 55.0, 50.0), // medium cyan
    Hsl::new(175.0, 90.0, 55.0), // bright teal
    Hsl::new(195.0, 75.0, 60.0), // light blue
];

/// Page background at very low opacity; painting it every frame fades old strokes.
pub const DEFAULT_TRAIL_FILL: Rgba = Rgba::new(245, 244, 250, 0.025);
