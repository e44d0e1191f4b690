use crate::foundation::error::{KolamError, KolamResult};
use crate::render::surface::Surface;

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Straight-alpha RGBA8 copy, as image encoders expect.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }
}

/// Parse `svg` with usvg and draw it with resvg into a `width`×`height` premultiplied frame.
pub fn rasterize_svg(svg: &str, width: u32, height: u32) -> KolamResult<FrameRGBA> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opts)
        .map_err(|e| KolamError::render(format!("parse svg: {e}")))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| KolamError::render("failed to allocate pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(&tree, xform, &mut pixmap.as_mut());
    Ok(FrameRGBA {
        width,
        height,
        data: pixmap.take(),
        premultiplied: true,
    })
}

/// Rasterize the reveal state of `surface` at `t_secs`.
pub fn rasterize_frame(surface: &Surface, t_secs: f64) -> KolamResult<FrameRGBA> {
    rasterize_svg(
        &surface.frame_svg(t_secs),
        surface.canvas.width,
        surface.canvas.height,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
