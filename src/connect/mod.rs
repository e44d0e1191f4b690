pub(crate) mod jitter;
pub(crate) mod modern;
pub(crate) mod motif;
pub(crate) mod synth;
pub(crate) mod traditional;

use crate::foundation::core::{Point, Vec2};

/// Chord midpoint pulled toward `center` by `fraction` of its offset.
pub(crate) fn pull_toward(center: Point, a: Point, b: Point, fraction: f64) -> Point {
    let mid = a.midpoint(b);
    mid + (center - mid) * fraction
}

/// Unit vector from `center` to `p`, or `fallback` when they coincide.
pub(crate) fn outward(center: Point, p: Point, fallback: Vec2) -> Vec2 {
    let v = p - center;
    let len = v.hypot();
    if len < 1e-9 { fallback } else { v / len }
}
