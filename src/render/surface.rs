//! Pure mapping from a generated kolam to a drawable surface value.
//!
//! The [`Surface`] is an immutable description of everything that ends up on
//! screen: guide circle, stroked paths and dots, in paint order, plus reveal
//! timing when animation is enabled. [`DrawingSurface`] is the presenter-owned
//! handle; it only ever swaps whole values.

use crate::animation::reveal::Reveal;
use crate::engine::kolam::GeneratedKolam;
use crate::foundation::core::{Canvas, Point, Rgb8};
use crate::geometry::path::PathData;
use crate::palette::resolve::{GradientDef, Paint, ResolvedPalette};
use crate::params::model::{GenerationParameters, Theme};

const GUIDE_RADIUS_FACTOR: f64 = 0.45;
const GUIDE_STROKE_WIDTH: f64 = 1.0;
const GUIDE_OPACITY: f64 = 0.2;
pub const DOT_OPACITY: f64 = 0.7;

/// Presentation switches that do not influence generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub theme: Theme,
    pub show_dots: bool,
    pub animation_enabled: bool,
}

impl RenderOptions {
    pub fn from_params(params: &GenerationParameters) -> Self {
        Self {
            theme: params.theme,
            show_dots: params.show_dots,
            animation_enabled: params.animation_enabled,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    GuideCircle {
        center: Point,
        radius: f64,
        stroke: Rgb8,
        stroke_width: f64,
        opacity: f64,
    },
    Path {
        d: PathData,
        paint: Paint,
        stroke_width: f64,
        opacity: f64,
        /// Stroked length, drives the dash reveal.
        length: f64,
        reveal: Option<Reveal>,
    },
    Dot {
        center: Point,
        radius: f64,
        fill: Rgb8,
        opacity: f64,
        reveal: Option<Reveal>,
    },
}

impl Element {
    pub fn reveal(&self) -> Option<Reveal> {
        match self {
            Self::GuideCircle { .. } => None,
            Self::Path { reveal, .. } | Self::Dot { reveal, .. } => *reveal,
        }
    }
}

/// Everything needed to draw one kolam.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    pub canvas: Canvas,
    pub theme: Theme,
    pub base: Rgb8,
    pub gradients: Vec<GradientDef>,
    pub elements: Vec<Element>,
    pub animated: bool,
}

impl Surface {
    pub fn path_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, Element::Path { .. }))
            .count()
    }

    pub fn dot_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, Element::Dot { .. }))
            .count()
    }

    /// Time at which the last reveal completes; zero for a static surface.
    pub fn reveal_end_secs(&self) -> f64 {
        self.elements
            .iter()
            .filter_map(Element::reveal)
            .map(|r| r.end_secs())
            .fold(0.0, f64::max)
    }
}

/// Build the surface value for `kolam`. Pure.
pub fn render(kolam: &GeneratedKolam, palette: &ResolvedPalette, opts: RenderOptions) -> Surface {
    let canvas = kolam.canvas;
    let mut elements = Vec::with_capacity(1 + kolam.paths.len() + kolam.dots.len());

    elements.push(Element::GuideCircle {
        center: canvas.center(),
        radius: canvas.min_side() * GUIDE_RADIUS_FACTOR,
        stroke: palette.ink(),
        stroke_width: GUIDE_STROKE_WIDTH,
        opacity: GUIDE_OPACITY,
    });

    for (i, path) in kolam.paths.iter().enumerate() {
        elements.push(Element::Path {
            d: path.d.clone(),
            paint: palette.paint_for_path(i),
            stroke_width: path.stroke_width,
            opacity: path.effective_opacity(),
            length: path.d.arclen(),
            reveal: opts.animation_enabled.then(|| Reveal::path(i)),
        });
    }

    if opts.show_dots {
        for (i, dot) in kolam.dots.iter().enumerate() {
            elements.push(Element::Dot {
                center: dot.pos(),
                radius: dot.radius,
                fill: palette.dot_fill(),
                opacity: DOT_OPACITY,
                reveal: opts.animation_enabled.then(|| Reveal::dot(i)),
            });
        }
    }

    Surface {
        canvas,
        theme: opts.theme,
        base: palette.base(),
        gradients: palette.gradients().to_vec(),
        elements,
        animated: opts.animation_enabled,
    }
}

/// Presenter-owned drawing area. Presenting replaces everything previously drawn.
#[derive(Debug, Default)]
pub struct DrawingSurface {
    current: Option<Surface>,
}

impl DrawingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content. Last writer wins.
    pub fn present(&mut self, surface: Surface) {
        tracing::debug!(
            paths = surface.path_count(),
            dots = surface.dot_count(),
            "surface presented"
        );
        self.current = Some(surface);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Surface> {
        self.current.as_ref()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
