//! Preset-specific connector rules for the traditional style.

use std::collections::BTreeMap;

use crate::connect::jitter::JitterSource;
use crate::connect::{outward, pull_toward};
use crate::foundation::core::{Point, Vec2};
use crate::geometry::path::{PathData, PathSegment};
use crate::layout::dots::Dot;
use crate::params::model::Preset;

const KAMBI_JITTER: f64 = 20.0;
const GRID_BOW: f64 = 4.0;
// Coordinates closer than this share a row/column.
const GRID_EPSILON: f64 = 0.01;

pub fn connect(
    dots: &[Dot],
    complexity: u8,
    preset: Preset,
    center: Point,
    jitter: &mut JitterSource,
) -> Vec<PathSegment> {
    match preset {
        Preset::ElevenToOne => eleven_to_one(dots, complexity, center),
        Preset::ThirteenToSeven => thirteen_to_seven(dots, center),
        Preset::Grid8x8 => kambi(dots, complexity, jitter),
        Preset::RadialLotus => lotus(dots, center),
        Preset::Grid5x5 | Preset::Grid7x7 => grid_loops(dots, center),
    }
}

fn ring_positions(dots: &[Dot], ring: u32) -> Vec<Point> {
    dots.iter().filter(|d| d.ring == ring).map(Dot::pos).collect()
}

fn quad(a: Point, ctrl: Point, b: Point) -> PathData {
    PathData::new().move_to(a).quad_to(ctrl, b)
}

fn eleven_to_one(dots: &[Dot], complexity: u8, center: Point) -> Vec<PathSegment> {
    let outer = ring_positions(dots, 0);
    let n = outer.len();
    if n == 0 {
        return Vec::new();
    }

    // (offset to partner, stride over outer dots, pull, width, tag)
    let (offset, stride, pull, width, kind) = match complexity {
        0..=3 => (1, 1, 0.3, 1.6 + f64::from(complexity) * 0.1, "petal"),
        4..=7 => (2, 2, 0.35, 1.5, "nested-min"),
        _ => (3, 1, 0.4, 1.3, "complex-min"),
    };

    (0..n)
        .step_by(stride)
        .map(|i| {
            let (a, b) = (outer[i], outer[(i + offset) % n]);
            PathSegment::new(quad(a, pull_toward(center, a, b, pull), b), width, kind)
        })
        .collect()
}

fn thirteen_to_seven(dots: &[Dot], center: Point) -> Vec<PathSegment> {
    let outer = ring_positions(dots, 0);
    let inner = ring_positions(dots, 1);
    let mut paths = Vec::new();

    let n = outer.len();
    for i in 0..n {
        let (a, b) = (outer[i], outer[(i + 3) % n]);
        paths.push(PathSegment::new(
            quad(a, pull_toward(center, a, b, 0.3), b),
            1.4,
            "star",
        ));
    }

    if !inner.is_empty() && n > 0 {
        let m = inner.len();
        for i in (0..n).step_by(2) {
            let j = ((i * m) as f64 / n as f64).round() as usize % m;
            let (a, b) = (outer[i], inner[j]);
            paths.push(PathSegment::new(
                quad(a, pull_toward(center, a, b, 0.45), b),
                1.6,
                "petal",
            ));
        }

        for j in (0..m).step_by(2) {
            let a = inner[j];
            let radial = a - center;
            let bow = Vec2::new(-radial.y, radial.x) * 0.1;
            let ctrl = center.midpoint(a) + bow;
            paths.push(
                PathSegment::new(quad(a, ctrl, center), 1.2, "spoke").with_opacity(0.75),
            );
        }
    }

    paths
}

fn kambi(dots: &[Dot], complexity: u8, jitter: &mut JitterSource) -> Vec<PathSegment> {
    let mut sorted = dots.to_vec();
    sorted.sort_by_key(|d| d.ring);
    let n = sorted.len();
    if n < 2 {
        return Vec::new();
    }

    if complexity <= 3 {
        return (0..n - 1)
            .step_by(2)
            .map(|i| {
                let d = PathData::new()
                    .move_to(sorted[i].pos())
                    .line_to(sorted[i + 1].pos());
                PathSegment::new(d, 1.8, "grid")
            })
            .collect();
    }

    let width = 1.2 + f64::from(complexity) * 0.1;
    (0..n)
        .step_by(4)
        .map(|i| {
            let (a, b) = (sorted[i].pos(), sorted[(i + 3) % n].pos());
            let ctrl = a.midpoint(b) + jitter.offset(KAMBI_JITTER);
            PathSegment::new(quad(a, ctrl, b), width, "kambi")
        })
        .collect()
}

fn lotus(dots: &[Dot], center: Point) -> Vec<PathSegment> {
    let mut paths = Vec::new();
    for ring in 0..2u32 {
        let current = ring_positions(dots, ring);
        let next = ring_positions(dots, ring + 1);
        if current.is_empty() || next.is_empty() {
            continue;
        }
        let width = 1.8 - f64::from(ring) * 0.2;
        for i in (0..current.len()).step_by(2) {
            let (a, b) = (current[i], next[i % next.len()]);
            paths.push(PathSegment::new(
                quad(a, pull_toward(center, a, b, 0.3), b),
                width,
                "lotus",
            ));
        }
    }
    paths
}

fn grid_key(v: f64) -> i64 {
    (v / GRID_EPSILON).round() as i64
}

fn grid_loops(dots: &[Dot], center: Point) -> Vec<PathSegment> {
    let mut rows: BTreeMap<i64, Vec<Point>> = BTreeMap::new();
    let mut cols: BTreeMap<i64, Vec<Point>> = BTreeMap::new();
    for d in dots {
        rows.entry(grid_key(d.y)).or_default().push(d.pos());
        cols.entry(grid_key(d.x)).or_default().push(d.pos());
    }

    let mut paths = Vec::new();
    for mut row in rows.into_values() {
        row.sort_by(|a, b| a.x.total_cmp(&b.x));
        paths.extend(bowed_pairs(&row, center, Vec2::new(0.0, -1.0), "row"));
    }
    for mut col in cols.into_values() {
        col.sort_by(|a, b| a.y.total_cmp(&b.y));
        paths.extend(bowed_pairs(&col, center, Vec2::new(-1.0, 0.0), "column"));
    }
    paths
}

// Pairs (0,1), (2,3), ... bowed away from the canvas center.
fn bowed_pairs(line: &[Point], center: Point, fallback: Vec2, kind: &str) -> Vec<PathSegment> {
    line.chunks_exact(2)
        .map(|pair| {
            let (a, b) = (pair[0], pair[1]);
            let mid = a.midpoint(b);
            let ctrl = mid + outward(center, mid, fallback) * GRID_BOW;
            PathSegment::new(quad(a, ctrl, b), 1.6, kind)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/connect/traditional.rs"]
mod tests;
