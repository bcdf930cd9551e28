use palette::{encoding, FromColor, Hsl, Srgb};

/// A color in HSL space.
///
/// Hue is kept in `[0, 360)`, saturation and lightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPoint {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl ColorPoint {
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        let mut hue = hue.rem_euclid(360.0);
        // rem_euclid may round up to the modulus for tiny negative inputs
        if hue >= 360.0 {
            hue = 0.0;
        }

        Self {
            hue,
            saturation: saturation.clamp(0.0, 1.0),
            lightness: lightness.clamp(0.0, 1.0),
        }
    }

    /// Rotate the hue by `degrees`, wrapping around the color wheel.
    pub fn spin(self, degrees: f64) -> Self {
        Self::new(self.hue + degrees, self.saturation, self.lightness)
    }

    pub fn saturate(self, amount: f64) -> Self {
        Self::new(self.hue, self.saturation + amount, self.lightness)
    }

    pub fn lighten(self, amount: f64) -> Self {
        Self::new(self.hue, self.saturation, self.lightness + amount)
    }

    pub fn darken(self, amount: f64) -> Self {
        Self::new(self.hue, self.saturation, self.lightness - amount)
    }

    /// Resolve to a concrete sRGB color.
    pub fn to_hex(&self) -> HexColor {
        let hsl: Hsl<encoding::Srgb, f64> = Hsl::new(self.hue, self.saturation, self.lightness);
        let rgb: Srgb<f64> = Srgb::from_color(hsl);

        HexColor([
            channel(rgb.red),
            channel(rgb.green),
            channel(rgb.blue),
        ])
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Resolved 8-bit sRGB color, displayed as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(pub [u8; 3]);

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", hex::encode(self.0))
    }
}
