use std::f64::consts::TAU;

use crate::foundation::core::{Affine, Point};
use crate::geometry::path::PathSegment;

/// How a path is replicated about the canvas center.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymmetryKind {
    /// `folds` evenly spaced rotations.
    Rotational,
    /// Mirror images across the vertical and horizontal center lines.
    Reflection,
}

/// Rotation order for a complexity level. Capped at 4 to keep dense levels legible.
pub fn folds_for_complexity(complexity: u8) -> u32 {
    if complexity >= 7 { 4 } else { 2 }
}

/// The original path followed by its symmetric copies.
///
/// Copies are new values; `path` is never modified. `folds` is ignored for
/// [`SymmetryKind::Reflection`].
pub fn apply_symmetry(
    path: &PathSegment,
    kind: SymmetryKind,
    folds: u32,
    center: Point,
) -> Vec<PathSegment> {
    let mut out = vec![path.clone()];
    match kind {
        SymmetryKind::Rotational => {
            for i in 1..folds {
                let angle = f64::from(i) * TAU / f64::from(folds);
                out.push(path.transformed(Affine::rotate_about(angle, center)));
            }
        }
        SymmetryKind::Reflection => {
            out.push(path.transformed(mirror_vertical(center.x)));
            out.push(path.transformed(mirror_horizontal(center.y)));
        }
    }
    out
}

// x' = 2cx - x
fn mirror_vertical(cx: f64) -> Affine {
    Affine::new([-1.0, 0.0, 0.0, 1.0, 2.0 * cx, 0.0])
}

// y' = 2cy - y
fn mirror_horizontal(cy: f64) -> Affine {
    Affine::new([1.0, 0.0, 0.0, -1.0, 0.0, 2.0 * cy])
}

#[cfg(test)]
#[path = "../../tests/unit/symmetry/transform.rs"]
mod tests;
