//! Deterministic gradient derivation.
//!
//! An identifier is hashed into a [`HashSeed`], which picks a base hue. Four
//! palette colors are derived by rotating that hue around the color wheel, a
//! linear gradient direction is derived from the same seed and six mesh
//! anchors are lightly jittered with the remaining digest bytes.
//!
//! Everything here is pure: the same identifier always yields the same
//! [`GradientSpec`].

use std::f64::consts::PI;

pub mod color;
pub mod seed;

pub use color::{ColorPoint, HexColor};
pub use seed::HashSeed;

const BASE_SATURATION: f64 = 0.85;
const BASE_LIGHTNESS: f64 = 0.6;

/// Canonical mesh anchors before jitter.
const MESH_ANCHORS: [(f64, f64); 6] = [
    (0.0, 0.0),
    (1.0, 0.0),
    (0.3, 0.7),
    (0.8, 0.4),
    (0.2, 1.0),
    (1.0, 1.0),
];

/// Maximum distance an anchor moves on each axis.
const MESH_JITTER: f64 = 0.08;

const MESH_MIN_SCALE: f64 = 0.5;
const MESH_SCALE_SPREAD: f64 = 0.3;

/// A palette entry with both its HSL source and resolved color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    pub color: ColorPoint,
    pub hex: HexColor,
}

impl From<ColorPoint> for Swatch {
    fn from(color: ColorPoint) -> Self {
        Self {
            color,
            hex: color.to_hex(),
        }
    }
}

/// Endpoints of the main linear gradient, in the unit square.
///
/// The two endpoints mirror each other through `(0.5, 0.5)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientDirection {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl GradientDirection {
    /// Direction for an angle in degrees.
    pub fn from_degrees(degrees: u16) -> Self {
        let angle = f64::from(degrees) * (PI / 180.0);

        Self {
            x1: (angle + PI).cos() * 0.5 + 0.5,
            y1: (angle + PI).sin() * 0.5 + 0.5,
            x2: angle.cos() * 0.5 + 0.5,
            y2: angle.sin() * 0.5 + 0.5,
        }
    }
}

/// Center of a radial overlay layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshPoint {
    pub x: f64,
    pub y: f64,
    pub color: HexColor,
    pub scale: f64,
}

/// Everything a compositor needs to draw an avatar.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSpec {
    pub hue: u16,
    pub palette: [Swatch; 4],
    pub direction: GradientDirection,
    pub mesh: Vec<MeshPoint>,
}

impl GradientSpec {
    pub fn generate(identifier: &str) -> Self {
        let seed = HashSeed::from_identifier(identifier);
        let hue = seed.hue();

        let base = ColorPoint::new(f64::from(hue), BASE_SATURATION, BASE_LIGHTNESS);
        let palette: [Swatch; 4] = [
            base.into(),
            base.spin(90.0).saturate(0.10).lighten(0.10).into(),
            base.spin(180.0).saturate(0.15).darken(0.05).into(),
            base.spin(270.0).saturate(0.05).lighten(0.15).into(),
        ];

        let mesh = mesh_points(&seed, &palette);

        Self {
            hue,
            palette,
            direction: GradientDirection::from_degrees(hue),
            mesh,
        }
    }

    /// Resolved palette colors, base color first.
    pub fn colors(&self) -> impl Iterator<Item = HexColor> + '_ {
        self.palette.iter().map(|swatch| swatch.hex)
    }
}

/// Shorthand for [`GradientSpec::generate`].
pub fn generate_gradient(identifier: &str) -> GradientSpec {
    GradientSpec::generate(identifier)
}

fn mesh_points(seed: &HashSeed, palette: &[Swatch; 4]) -> Vec<MeshPoint> {
    MESH_ANCHORS
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| {
            let offset = i * 3;

            MeshPoint {
                x: jitter(x, seed.unit(offset)),
                y: jitter(y, seed.unit(offset + 1)),
                color: palette[i % palette.len()].hex,
                scale: MESH_MIN_SCALE + MESH_SCALE_SPREAD * seed.unit(offset + 2),
            }
        })
        .collect()
}

fn jitter(anchor: f64, unit: f64) -> f64 {
    (anchor + (unit - 0.5) * 2.0 * MESH_JITTER).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{faker::internet::en::Username, Fake};

    const EPSILON: f64 = 1e-9;

    fn assert_in_range(spec: &GradientSpec) {
        assert!(spec.hue < 360);

        for swatch in &spec.palette {
            assert!((0.0..360.0).contains(&swatch.color.hue));
            assert!((0.0..=1.0).contains(&swatch.color.saturation));
            assert!((0.0..=1.0).contains(&swatch.color.lightness));
            assert_eq!(swatch.hex.to_string().len(), 7);
        }

        let d = spec.direction;
        for v in [d.x1, d.y1, d.x2, d.y2] {
            assert!((0.0..=1.0).contains(&v), "{v} is outside the unit square");
        }

        assert_eq!(spec.mesh.len(), MESH_ANCHORS.len());
        for point in &spec.mesh {
            assert!((0.0..=1.0).contains(&point.x));
            assert!((0.0..=1.0).contains(&point.y));
            assert!((MESH_MIN_SCALE..=MESH_MIN_SCALE + MESH_SCALE_SPREAD).contains(&point.scale));
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        for _ in 0..50 {
            let username: String = Username().fake();
            assert_eq!(
                GradientSpec::generate(&username),
                GradientSpec::generate(&username),
                "{} should produce the same gradient",
                username
            );
        }
    }

    #[test]
    fn test_generate_is_total() {
        let long = "a very long string".repeat(10_000);
        let inputs = ["", " ", "\t\n", "ユーザー", "🦀🦀", "\u{0}", long.as_str()];

        for input in inputs {
            assert_in_range(&generate_gradient(input));
        }
    }

    #[test]
    fn test_random_identifiers_stay_in_range() {
        for _ in 0..200 {
            let username: String = Username().fake();
            assert_in_range(&generate_gradient(&username));
        }
    }

    #[test]
    fn test_direction_is_antipodal() {
        for degrees in 0..360 {
            let d = GradientDirection::from_degrees(degrees);

            assert!((d.x1 + d.x2 - 1.0).abs() < EPSILON);
            assert!((d.y1 + d.y2 - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_alice_and_bob_differ() {
        let alice = generate_gradient("alice");
        let bob = generate_gradient("bob");

        assert_eq!(alice.hue, 85);
        assert_eq!(bob.hue, 350);
        assert_ne!(alice.palette[0].hex, bob.palette[0].hex);
    }

    #[test]
    fn test_alice_base_color() {
        let spec = generate_gradient("alice");
        let expected = ColorPoint::new(85.0, BASE_SATURATION, BASE_LIGHTNESS).to_hex();

        assert_eq!(spec.palette[0].hex, expected);
        assert_eq!(spec.colors().next().map(|c| c.to_string()).as_deref(), Some("#a7f042"));
    }

    #[test]
    fn test_palette_rotates_hue() {
        let spec = generate_gradient("alice");
        let hues: Vec<f64> = spec.palette.iter().map(|s| s.color.hue).collect();

        assert_eq!(hues, vec![85.0, 175.0, 265.0, 355.0]);
    }

    #[test]
    fn test_empty_identifier() {
        let spec = generate_gradient("");

        assert_eq!(spec.hue, 190);
        assert_in_range(&spec);
    }

    #[test]
    fn test_hue_zero_is_red() {
        let direction = GradientDirection::from_degrees(0);

        assert!((direction.x1 - 0.0).abs() < EPSILON);
        assert!((direction.y1 - 0.5).abs() < EPSILON);
        assert!((direction.x2 - 1.0).abs() < EPSILON);
        assert!((direction.y2 - 0.5).abs() < EPSILON);

        let base: Swatch = ColorPoint::new(0.0, BASE_SATURATION, BASE_LIGHTNESS).into();
        assert_eq!(base.hex.to_string(), "#f04242");
    }

    #[test]
    fn test_mesh_reuses_palette_colors() {
        let spec = generate_gradient("carol");
        let colors: Vec<HexColor> = spec.colors().collect();

        for (i, point) in spec.mesh.iter().enumerate() {
            assert_eq!(point.color, colors[i % colors.len()]);
        }
    }
}
