use crate::connect::jitter::JitterSource;
use crate::geometry::path::{PathData, PathSegment};
use crate::layout::dots::Dot;

/// Flowing cubic connections between every `step`-th dot and the dot `2·step` ahead.
pub fn connect(dots: &[Dot], complexity: u8, jitter: &mut JitterSource) -> Vec<PathSegment> {
    let n = dots.len();
    if n < 2 {
        return Vec::new();
    }
    let step = (n / 12).max(2);
    let amplitude = 30.0 * f64::from(complexity) / 10.0;
    let width = 1.1 + f64::from(complexity) * 0.1;

    (0..n)
        .step_by(step)
        .map(|i| {
            let a = dots[i].pos();
            let b = dots[(i + 2 * step) % n].pos();
            let chord = b - a;
            let c1 = a + chord / 3.0 + jitter.offset(amplitude);
            let c2 = a + chord * (2.0 / 3.0) + jitter.offset(amplitude);
            PathSegment::new(PathData::new().move_to(a).cubic_to(c1, c2, b), width, "modern")
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/connect/modern.rs"]
mod tests;
