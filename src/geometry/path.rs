use kurbo::ParamCurveArclen as _;

use crate::foundation::core::{Affine, BezPath, Point};
use crate::foundation::math::fmt_coord;

/// Opacity applied when a segment does not carry its own.
pub const DEFAULT_PATH_OPACITY: f64 = 0.8;

const ARCLEN_ACCURACY: f64 = 1e-3;

/// One drawing command with absolute coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "cmd", rename_all = "camelCase")]
pub enum PathCommand {
    MoveTo { to: Point },
    LineTo { to: Point },
    QuadTo { ctrl: Point, to: Point },
    CubicTo { ctrl1: Point, ctrl2: Point, to: Point },
}

impl PathCommand {
    /// Apply `f` to every coordinate pair carried by the command.
    pub fn map_points(self, mut f: impl FnMut(Point) -> Point) -> Self {
        match self {
            Self::MoveTo { to } => Self::MoveTo { to: f(to) },
            Self::LineTo { to } => Self::LineTo { to: f(to) },
            Self::QuadTo { ctrl, to } => Self::QuadTo {
                ctrl: f(ctrl),
                to: f(to),
            },
            Self::CubicTo { ctrl1, ctrl2, to } => Self::CubicTo {
                ctrl1: f(ctrl1),
                ctrl2: f(ctrl2),
                to: f(to),
            },
        }
    }

    /// End point of the command.
    pub fn end(self) -> Point {
        match self {
            Self::MoveTo { to }
            | Self::LineTo { to }
            | Self::QuadTo { to, .. }
            | Self::CubicTo { to, .. } => to,
        }
    }
}

/// Structured path description.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, to: Point) -> Self {
        self.commands.push(PathCommand::MoveTo { to });
        self
    }

    pub fn line_to(mut self, to: Point) -> Self {
        self.commands.push(PathCommand::LineTo { to });
        self
    }

    pub fn quad_to(mut self, ctrl: Point, to: Point) -> Self {
        self.commands.push(PathCommand::QuadTo { ctrl, to });
        self
    }

    pub fn cubic_to(mut self, ctrl1: Point, ctrl2: Point, to: Point) -> Self {
        self.commands.push(PathCommand::CubicTo { ctrl1, ctrl2, to });
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every coordinate pair in command order (control points before end points).
    pub fn points(&self) -> Vec<Point> {
        let mut out = Vec::with_capacity(self.commands.len() * 3);
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo { to } | PathCommand::LineTo { to } => out.push(to),
                PathCommand::QuadTo { ctrl, to } => out.extend([ctrl, to]),
                PathCommand::CubicTo { ctrl1, ctrl2, to } => out.extend([ctrl1, ctrl2, to]),
            }
        }
        out
    }

    /// Copy with every coordinate mapped through `affine`.
    pub fn transform(&self, affine: Affine) -> Self {
        Self {
            commands: self
                .commands
                .iter()
                .map(|c| c.map_points(|p| affine * p))
                .collect(),
        }
    }

    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo { to } => path.move_to(to),
                PathCommand::LineTo { to } => path.line_to(to),
                PathCommand::QuadTo { ctrl, to } => path.quad_to(ctrl, to),
                PathCommand::CubicTo { ctrl1, ctrl2, to } => path.curve_to(ctrl1, ctrl2, to),
            }
        }
        path
    }

    /// Total stroked length.
    pub fn arclen(&self) -> f64 {
        self.to_bez_path()
            .segments()
            .map(|seg| seg.arclen(ARCLEN_ACCURACY))
            .sum()
    }

    /// SVG `d` attribute, coordinates fixed to two decimals.
    pub fn to_svg_d(&self) -> String {
        let mut parts = Vec::with_capacity(self.commands.len());
        let pt = |p: Point| format!("{} {}", fmt_coord(p.x), fmt_coord(p.y));
        for cmd in &self.commands {
            parts.push(match *cmd {
                PathCommand::MoveTo { to } => format!("M {}", pt(to)),
                PathCommand::LineTo { to } => format!("L {}", pt(to)),
                PathCommand::QuadTo { ctrl, to } => format!("Q {} {}", pt(ctrl), pt(to)),
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    format!("C {}, {}, {}", pt(ctrl1), pt(ctrl2), pt(to))
                }
            });
        }
        parts.join(" ")
    }
}

/// A stroked curve produced by one connector rule.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathSegment {
    pub d: PathData,
    pub stroke_width: f64,
    /// Name of the generating rule, kept for inspection.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl PathSegment {
    pub fn new(d: PathData, stroke_width: f64, kind: impl Into<String>) -> Self {
        Self {
            d,
            stroke_width,
            kind: kind.into(),
            opacity: None,
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    /// Opacity to draw with.
    pub fn effective_opacity(&self) -> f64 {
        self.opacity.unwrap_or(DEFAULT_PATH_OPACITY)
    }

    /// Same styling, geometry mapped through `affine`.
    pub fn transformed(&self, affine: Affine) -> Self {
        Self {
            d: self.d.transform(affine),
            ..self.clone()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/path.rs"]
mod tests;
