//! Fixed, preset-independent motifs selected by a suggestion keyword.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::foundation::core::{Affine, Canvas, Point, Vec2};
use crate::geometry::path::{PathData, PathSegment};

// Cubic handle length for a quarter circle.
const KAPPA: f64 = 0.552_284_749_830_793_4;
const LEMNISCATE_SAMPLES: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motif {
    Flower,
    Star,
    Festival,
    Abstract,
}

impl Motif {
    pub const ALL: [Motif; 4] = [Motif::Flower, Motif::Star, Motif::Festival, Motif::Abstract];

    pub fn key(self) -> &'static str {
        match self {
            Self::Flower => "flower",
            Self::Star => "star",
            Self::Festival => "festival",
            Self::Abstract => "abstract",
        }
    }

    /// Case-insensitive lookup; `None` for anything that is not a motif.
    pub fn from_suggestion(suggestion: &str) -> Option<Self> {
        let s = suggestion.trim();
        Self::ALL.into_iter().find(|m| m.key().eq_ignore_ascii_case(s))
    }

    pub fn paths(self, canvas: Canvas) -> Vec<PathSegment> {
        let center = canvas.center();
        let r = canvas.max_radius();
        match self {
            Self::Flower => flower(center, r),
            Self::Star => star(center, r),
            Self::Festival => festival(center, r),
            Self::Abstract => lemniscates(center, r),
        }
    }
}

fn polar(center: Point, r: f64, angle: f64) -> Point {
    center + Vec2::from_angle(angle) * r
}

fn flower(center: Point, r: f64) -> Vec<PathSegment> {
    const PETALS: u32 = 8;
    const SPREAD: f64 = 0.35;
    (0..PETALS)
        .map(|i| {
            let a = f64::from(i) * TAU / f64::from(PETALS);
            let tip = polar(center, r, a);
            let d = PathData::new()
                .move_to(center)
                .cubic_to(
                    polar(center, r * 0.45, a - SPREAD),
                    polar(center, r * 0.85, a - SPREAD * 0.6),
                    tip,
                )
                .cubic_to(
                    polar(center, r * 0.85, a + SPREAD * 0.6),
                    polar(center, r * 0.45, a + SPREAD),
                    center,
                );
            PathSegment::new(d, 1.8, "flower")
        })
        .collect()
}

fn star(center: Point, r: f64) -> Vec<PathSegment> {
    const POINTS: u32 = 5;
    let inner = r * 0.4;
    let step = TAU / f64::from(POINTS);
    (0..POINTS)
        .map(|i| {
            // first point straight up
            let a = -FRAC_PI_2 + f64::from(i) * step;
            let d = PathData::new()
                .move_to(polar(center, inner, a - step / 2.0))
                .line_to(polar(center, r, a))
                .line_to(polar(center, inner, a + step / 2.0));
            PathSegment::new(d, 2.0, "star")
        })
        .collect()
}

fn circle(center: Point, r: f64) -> PathData {
    let k = r * KAPPA;
    let (cx, cy) = (center.x, center.y);
    PathData::new()
        .move_to(Point::new(cx + r, cy))
        .cubic_to(
            Point::new(cx + r, cy + k),
            Point::new(cx + k, cy + r),
            Point::new(cx, cy + r),
        )
        .cubic_to(
            Point::new(cx - k, cy + r),
            Point::new(cx - r, cy + k),
            Point::new(cx - r, cy),
        )
        .cubic_to(
            Point::new(cx - r, cy - k),
            Point::new(cx - k, cy - r),
            Point::new(cx, cy - r),
        )
        .cubic_to(
            Point::new(cx + k, cy - r),
            Point::new(cx + r, cy - k),
            Point::new(cx + r, cy),
        )
}

fn festival(center: Point, r: f64) -> Vec<PathSegment> {
    let mut out: Vec<PathSegment> = [1.0 / 3.0, 2.0 / 3.0, 1.0]
        .into_iter()
        .map(|f| PathSegment::new(circle(center, r * f), 1.6, "festival"))
        .collect();
    for i in 0..8u32 {
        let a = f64::from(i) * TAU / 8.0;
        let d = PathData::new()
            .move_to(polar(center, r / 3.0, a))
            .line_to(polar(center, r, a));
        out.push(PathSegment::new(d, 1.4, "festival"));
    }
    out
}

// Lemniscate of Bernoulli, sampled as a closed polyline.
fn lemniscate(center: Point, a: f64) -> PathData {
    let at = |t: f64| {
        let s = t.sin();
        let denom = 1.0 + s * s;
        Point::new(center.x + a * t.cos() / denom, center.y + a * s * t.cos() / denom)
    };
    let mut d = PathData::new().move_to(at(0.0));
    for i in 1..=LEMNISCATE_SAMPLES {
        d = d.line_to(at(i as f64 * TAU / LEMNISCATE_SAMPLES as f64));
    }
    d
}

fn lemniscates(center: Point, r: f64) -> Vec<PathSegment> {
    let first = lemniscate(center, r);
    let second = first.transform(Affine::rotate_about(FRAC_PI_2, center));
    vec![
        PathSegment::new(first, 1.8, "abstract"),
        PathSegment::new(second, 1.8, "abstract").with_opacity(0.9),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/connect/motif.rs"]
mod tests;
