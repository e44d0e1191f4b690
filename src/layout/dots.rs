use std::f64::consts::TAU;

use crate::foundation::core::{Canvas, Point};
use crate::params::model::Preset;

/// Anchor point of the pattern.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dot {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// Grouping index used for traversal order.
    pub ring: u32,
}

impl Dot {
    pub fn pos(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Dot sequence for `preset` on `canvas`. Pure and deterministic.
pub fn generate_layout(preset: Preset, canvas: Canvas) -> Vec<Dot> {
    let center = canvas.center();
    let max_radius = canvas.max_radius();

    match preset {
        Preset::ElevenToOne => {
            let mut dots = ring(center, max_radius, 11, 2.0, 0);
            dots.push(center_dot(center, 3.0, 1));
            dots
        }
        Preset::ThirteenToSeven => {
            let mut dots = ring(center, max_radius, 13, 2.0, 0);
            dots.extend(ring(center, max_radius * 0.6, 7, 1.5, 1));
            dots.push(center_dot(center, 3.0, 2));
            dots
        }
        Preset::Grid8x8 => lattice(center, max_radius, 8, 1.4, 1.5),
        Preset::Grid5x5 => lattice(center, max_radius, 5, 1.2, 2.0),
        Preset::Grid7x7 => lattice(center, max_radius, 7, 1.3, 1.8),
        Preset::RadialLotus => {
            const PETALS: usize = 8;
            let mut dots = Vec::with_capacity(81);
            for k in 0..4u32 {
                let r = max_radius * f64::from(k + 1) / 4.0;
                let count = PETALS * (k as usize + 1);
                dots.extend(ring(center, r, count, 2.0 - f64::from(k) * 0.3, k));
            }
            dots.push(center_dot(center, 4.0, 4));
            dots
        }
    }
}

fn ring(center: Point, r: f64, count: usize, dot_radius: f64, ring: u32) -> Vec<Dot> {
    (0..count)
        .map(|i| {
            let angle = i as f64 * TAU / count as f64;
            Dot {
                x: center.x + r * angle.cos(),
                y: center.y + r * angle.sin(),
                radius: dot_radius,
                ring,
            }
        })
        .collect()
}

fn center_dot(center: Point, radius: f64, ring: u32) -> Dot {
    Dot {
        x: center.x,
        y: center.y,
        radius,
        ring,
    }
}

// Column-major; ring is the integer distance from the lattice corner.
fn lattice(center: Point, max_radius: f64, n: u32, span: f64, dot_radius: f64) -> Vec<Dot> {
    let spacing = max_radius * span / f64::from(n - 1);
    let half = f64::from(n - 1) * spacing / 2.0;
    let mut dots = Vec::with_capacity((n * n) as usize);
    for i in 0..n {
        for j in 0..n {
            dots.push(Dot {
                x: center.x - half + f64::from(i) * spacing,
                y: center.y - half + f64::from(j) * spacing,
                radius: dot_radius,
                ring: f64::from(i * i + j * j).sqrt().floor() as u32,
            });
        }
    }
    dots
}

#[cfg(test)]
#[path = "../../tests/unit/layout/dots.rs"]
mod tests;
