use std::fmt::{self, Display, Formatter};

use crate::app::gradient::GradientSpec;

/// Radius of a mesh layer relative to its point scale.
const MESH_RADIUS_FACTOR: f64 = 0.7;
const MESH_OPACITY: f64 = 0.8;

/// Layered svg document for an avatar.
///
/// A base linear gradient over all palette colors, then one semi transparent
/// radial layer per mesh point and an optional centered label on top.
pub struct SvgAvatar<'a> {
    pub spec: &'a GradientSpec,
    pub size: u32,
    pub rounded: u32,
    pub text: Option<&'a str>,
}

impl SvgAvatar<'_> {
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn font_size(&self, text: &str) -> f64 {
        let len = text.chars().count().max(1);
        #[allow(clippy::cast_precision_loss)]
        let len = len as f64;

        f64::from(self.size) * 0.9 / len
    }
}

impl Display for SvgAvatar<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let size = self.size;
        let rounded = self.rounded;
        let direction = self.spec.direction;

        write!(
            f,
            r#"<svg width="{size}" height="{size}" viewBox="0 0 {size} {size}" version="1.1" xmlns="http://www.w3.org/2000/svg">"#
        )?;
        write!(f, "<g><defs>")?;

        write!(
            f,
            r#"<linearGradient id="base" x1="{:.4}" y1="{:.4}" x2="{:.4}" y2="{:.4}" gradientUnits="objectBoundingBox">"#,
            direction.x1, direction.y1, direction.x2, direction.y2
        )?;
        let last = self.spec.palette.len() - 1;
        for (i, color) in self.spec.colors().enumerate() {
            let offset = i * 100 / last;
            write!(f, r#"<stop offset="{offset}%" stop-color="{color}"/>"#)?;
        }
        write!(f, "</linearGradient>")?;

        for (i, point) in self.spec.mesh.iter().enumerate() {
            write!(
                f,
                r#"<radialGradient id="mesh{i}" cx="{:.4}" cy="{:.4}" r="{:.4}" gradientUnits="objectBoundingBox">"#,
                point.x,
                point.y,
                point.scale * MESH_RADIUS_FACTOR
            )?;
            write!(
                f,
                r#"<stop offset="0%" stop-color="{}" stop-opacity="{MESH_OPACITY}"/><stop offset="100%" stop-color="{}" stop-opacity="0"/>"#,
                point.color, point.color
            )?;
            write!(f, "</radialGradient>")?;
        }
        write!(f, "</defs>")?;

        write!(
            f,
            r#"<rect fill="url(#base)" x="0" y="0" width="{size}" height="{size}" rx="{rounded}" ry="{rounded}"/>"#
        )?;
        for i in 0..self.spec.mesh.len() {
            write!(
                f,
                r#"<rect fill="url(#mesh{i})" x="0" y="0" width="{size}" height="{size}" rx="{rounded}" ry="{rounded}" style="mix-blend-mode:multiply"/>"#
            )?;
        }

        if let Some(text) = self.text.filter(|t| !t.is_empty()) {
            write!(
                f,
                r##"<text x="50%" y="50%" alignment-baseline="central" dominant-baseline="central" text-anchor="middle" fill="#fff" font-family="sans-serif" font-size="{:.2}" style="filter:drop-shadow(0 1px 2px rgba(0,0,0,0.3))">{}</text>"##,
                self.font_size(text),
                XmlEscaped(text)
            )?;
        }

        write!(f, "</g></svg>")
    }
}

struct XmlEscaped<'a>(&'a str);

impl Display for XmlEscaped<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&apos;")?,
                c => write!(f, "{c}")?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::gradient::generate_gradient;

    #[test]
    fn test_svg_contains_palette_and_layers() {
        let spec = generate_gradient("alice");
        let svg = SvgAvatar {
            spec: &spec,
            size: 120,
            rounded: 12,
            text: None,
        }
        .render();

        assert!(svg.starts_with("<svg width=\"120\" height=\"120\""));
        assert!(svg.ends_with("</svg>"));
        for color in spec.colors() {
            assert!(svg.contains(&color.to_string()));
        }
        assert_eq!(svg.matches("<radialGradient").count(), spec.mesh.len());
        assert!(svg.contains(r#"<stop offset="33%""#));
        assert!(svg.contains(r#"<stop offset="100%""#));
        assert!(svg.contains(r#"rx="12""#));
        assert_eq!(
            svg.matches(r#"stop-opacity="0.8""#).count(),
            spec.mesh.len()
        );
        assert!(!svg.contains("<text"));
    }

    #[test]
    fn test_svg_text_is_escaped_and_sized() {
        let spec = generate_gradient("alice");
        let svg = SvgAvatar {
            spec: &spec,
            size: 100,
            rounded: 0,
            text: Some("<a&b>"),
        }
        .render();

        assert!(svg.contains("&lt;a&amp;b&gt;</text>"));
        assert!(svg.contains(r#"font-size="18.00""#));
    }

    #[test]
    fn test_svg_skips_empty_text() {
        let spec = generate_gradient("alice");
        let svg = SvgAvatar {
            spec: &spec,
            size: 100,
            rounded: 0,
            text: Some(""),
        }
        .render();

        assert!(!svg.contains("<text"));
    }
}
