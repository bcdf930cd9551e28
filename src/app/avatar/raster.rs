use resvg::{tiny_skia, usvg};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to parse svg document")]
    Parse(#[from] usvg::Error),

    #[error("failed to allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },

    #[error("failed to encode png: {0}")]
    Encode(String),
}

/// Rasterize an svg document into a `size` x `size` png.
///
/// CPU bound, run it on the blocking pool.
pub fn rasterize_png(svg: &str, size: u32) -> Result<Vec<u8>, RenderError> {
    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())?;

    let mut pixmap = tiny_skia::Pixmap::new(size, size).ok_or(RenderError::Canvas {
        width: size,
        height: size,
    })?;

    let source = tree.size();
    #[allow(clippy::cast_precision_loss)]
    let transform = tiny_skia::Transform::from_scale(
        size as f32 / source.width(),
        size as f32 / source.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| RenderError::Encode(e.to_string()))
}
