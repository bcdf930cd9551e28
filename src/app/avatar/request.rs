use serde::{de, Deserialize, Deserializer};
use utoipa::IntoParams;
use validator::Validate;

pub const MAX_AVATAR_SIZE: u32 = 2048;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarFormat {
    Svg,
    Png,
}

impl AvatarFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            AvatarFormat::Svg => "image/svg+xml",
            AvatarFormat::Png => "image/png",
        }
    }
}

impl std::fmt::Display for AvatarFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AvatarFormat::Svg => write!(f, "svg"),
            AvatarFormat::Png => write!(f, "png"),
        }
    }
}

/// Identifier and output format decoded from a `name.ext` path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarName {
    pub identifier: String,
    pub format: AvatarFormat,
}

impl AvatarName {
    /// Only the first two dot separated parts are looked at.
    /// Anything that isn't an svg extension renders as png.
    pub fn parse(name: &str) -> Self {
        let mut parts = name.split('.');
        let username = parts.next().unwrap_or_default();
        let format = match parts.next() {
            Some(ext) if ext.contains("svg") => AvatarFormat::Svg,
            _ => AvatarFormat::Png,
        };

        let identifier = if username.is_empty() {
            // No identity to derive from, every request gets a fresh look
            rand::random::<f64>().to_string()
        } else {
            username.to_string()
        };

        Self { identifier, format }
    }
}

#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AvatarQuery {
    /// Label drawn in the middle of svg avatars
    pub text: Option<String>,

    /// Width and height in pixels
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(range(min = 1, max = 2048))]
    pub size: Option<u32>,

    /// Corner radius in pixels
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(range(max = 2048))]
    pub rounded: Option<u32>,
}

/// `?size=` means the same as leaving `size` out.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}
