pub mod raster;
pub mod request;
pub mod svg;

pub use raster::{rasterize_png, RenderError};
pub use request::{AvatarFormat, AvatarName, AvatarQuery, MAX_AVATAR_SIZE};
pub use svg::SvgAvatar;
