//! SVG serialization of a [`Surface`].

use std::fmt::Write as _;

use crate::foundation::core::{Point, Rgb8};
use crate::foundation::math::{fmt_coord, fmt_scalar};
use crate::palette::resolve::{GradientDef, Paint};
use crate::render::surface::{DOT_OPACITY, Element, Surface};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const DRAW_KEYFRAMES: &str = "kolam-draw";
const FADE_KEYFRAMES: &str = "kolam-fade";

impl Surface {
    /// Self-contained document. Animated surfaces carry CSS keyframes.
    pub fn to_svg(&self) -> String {
        let mut out = self.open_document();
        if self.animated {
            push_keyframes(&mut out);
        }
        for element in &self.elements {
            match element {
                Element::GuideCircle { .. } => push_guide(&mut out, element),
                Element::Path {
                    d,
                    paint,
                    stroke_width,
                    opacity,
                    length,
                    reveal,
                } => {
                    let style = reveal.map(|r| {
                        let len = fmt_scalar(*length);
                        format!(
                            "stroke-dasharray:{len};stroke-dashoffset:{len};animation:{DRAW_KEYFRAMES} {}s {} {}s forwards",
                            fmt_scalar(r.duration_secs),
                            r.ease.css(),
                            fmt_scalar(r.delay_secs)
                        )
                    });
                    push_path(
                        &mut out,
                        &d.to_svg_d(),
                        paint,
                        *stroke_width,
                        *opacity,
                        style.as_deref(),
                    );
                }
                Element::Dot {
                    center,
                    radius,
                    fill,
                    opacity,
                    reveal,
                } => {
                    let style = reveal.map(|r| {
                        format!(
                            "opacity:0;transform-box:fill-box;transform-origin:center;animation:{FADE_KEYFRAMES} {}s {} {}s forwards",
                            fmt_scalar(r.duration_secs),
                            r.ease.css(),
                            fmt_scalar(r.delay_secs)
                        )
                    });
                    push_dot(&mut out, *center, *radius, *fill, *opacity, style.as_deref());
                }
            }
        }
        out.push_str("</svg>\n");
        out
    }

    /// Reveal state at `t_secs` baked into a static document over the base color.
    ///
    /// Elements whose reveal has not started are omitted.
    pub fn frame_svg(&self, t_secs: f64) -> String {
        let mut out = self.open_document();
        let _ = writeln!(
            out,
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            self.base.to_hex()
        );
        for element in &self.elements {
            let progress = element.reveal().map_or(1.0, |r| r.progress(t_secs));
            if progress <= 0.0 {
                continue;
            }
            match element {
                Element::GuideCircle { .. } => push_guide(&mut out, element),
                Element::Path {
                    d,
                    paint,
                    stroke_width,
                    opacity,
                    length,
                    ..
                } => {
                    let style = (progress < 1.0).then(|| {
                        let len = fmt_scalar(*length);
                        format!(
                            "stroke-dasharray:{len} {len};stroke-dashoffset:{}",
                            fmt_scalar(length * (1.0 - progress))
                        )
                    });
                    push_path(
                        &mut out,
                        &d.to_svg_d(),
                        paint,
                        *stroke_width,
                        *opacity,
                        style.as_deref(),
                    );
                }
                Element::Dot {
                    center,
                    radius,
                    fill,
                    opacity,
                    ..
                } => {
                    push_dot(
                        &mut out,
                        *center,
                        radius * progress,
                        *fill,
                        opacity * progress,
                        None,
                    );
                }
            }
        }
        out.push_str("</svg>\n");
        out
    }

    fn open_document(&self) -> String {
        let (w, h) = (self.canvas.width, self.canvas.height);
        let mut out = String::with_capacity(256 + self.elements.len() * 160);
        let _ = writeln!(
            out,
            r#"<svg xmlns="{SVG_NS}" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );
        if !self.gradients.is_empty() {
            out.push_str("<defs>\n");
            for g in &self.gradients {
                push_gradient(&mut out, g);
            }
            out.push_str("</defs>\n");
        }
        out
    }
}

// User-space units: a bounding-box gradient paints nothing on a zero-height stroke.
fn push_gradient(out: &mut String, g: &GradientDef) {
    let _ = writeln!(
        out,
        r#"<linearGradient id="{}" gradientUnits="userSpaceOnUse" x1="0%" y1="0%" x2="100%" y2="100%">"#,
        g.id
    );
    for stop in &g.stops {
        let _ = writeln!(
            out,
            r#"<stop offset="{}%" stop-color="{}"/>"#,
            fmt_scalar(stop.offset * 100.0),
            stop.color.to_hex()
        );
    }
    out.push_str("</linearGradient>\n");
}

fn push_keyframes(out: &mut String) {
    let _ = writeln!(
        out,
        "<style>@keyframes {DRAW_KEYFRAMES}{{to{{stroke-dashoffset:0}}}}@keyframes {FADE_KEYFRAMES}{{from{{opacity:0;transform:scale(0)}}to{{opacity:{};transform:scale(1)}}}}</style>",
        fmt_scalar(DOT_OPACITY)
    );
}

fn push_guide(out: &mut String, element: &Element) {
    if let Element::GuideCircle {
        center,
        radius,
        stroke,
        stroke_width,
        opacity,
    } = element
    {
        let _ = writeln!(
            out,
            r#"<circle cx="{}" cy="{}" r="{}" fill="none" stroke="{}" stroke-width="{}" opacity="{}"/>"#,
            fmt_coord(center.x),
            fmt_coord(center.y),
            fmt_coord(*radius),
            stroke.to_hex(),
            fmt_scalar(*stroke_width),
            fmt_scalar(*opacity)
        );
    }
}

fn paint_attr(paint: &Paint) -> String {
    match paint {
        Paint::Solid(c) => c.to_hex(),
        Paint::Gradient(id) => format!("url(#{id})"),
    }
}

fn push_path(
    out: &mut String,
    d: &str,
    paint: &Paint,
    stroke_width: f64,
    opacity: f64,
    style: Option<&str>,
) {
    let _ = write!(
        out,
        r#"<path d="{d}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round" opacity="{}""#,
        paint_attr(paint),
        fmt_scalar(stroke_width),
        fmt_scalar(opacity)
    );
    if let Some(style) = style {
        let _ = write!(out, r#" style="{style}""#);
    }
    out.push_str("/>\n");
}

fn push_dot(
    out: &mut String,
    center: Point,
    radius: f64,
    fill: Rgb8,
    opacity: f64,
    style: Option<&str>,
) {
    let _ = write!(
        out,
        r#"<circle cx="{}" cy="{}" r="{}" fill="{}" opacity="{}""#,
        fmt_coord(center.x),
        fmt_coord(center.y),
        fmt_scalar(radius),
        fill.to_hex(),
        fmt_scalar(opacity)
    );
    if let Some(style) = style {
        let _ = write!(out, r#" style="{style}""#);
    }
    out.push_str("/>\n");
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
