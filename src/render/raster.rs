//! Rasterize generated SVG documents into RGBA images.

use resvg::{tiny_skia, usvg};

/// Rasterization failures. The geometry and SVG builders are total; only
/// this boundary can fail.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to parse svg document: {0}")]
    Svg(#[from] usvg::Error),
    #[error("cannot allocate a {width}x{height} pixmap")]
    Pixmap { width: u32, height: u32 },
}

/// Render an SVG document at `scale` and return straight-alpha RGBA pixels.
pub fn rasterize(svg: &str, scale: f32) -> Result<image::RgbaImage, RenderError> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &options)?;

    let size = tree.size();
    let width = (size.width() * scale).ceil().max(1.0) as u32;
    let height = (size.height() * scale).ceil().max(1.0) as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or(RenderError::Pixmap { width, height })?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    log::debug!("rasterized {}x{} document at scale {}", width, height, scale);

    let mut out = image::RgbaImage::new(width, height);
    for (pixel, px) in out.pixels_mut().zip(pixmap.pixels()) {
        let c = px.demultiply();
        *pixel = image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    Ok(out)
}
