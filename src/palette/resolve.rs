//! Theme and palette resolution: gradient definitions, per-path paint and theme colors.

use crate::foundation::core::Rgb8;
use crate::params::model::{PaletteType, Theme};

const MAROON: Rgb8 = Rgb8::new(0x80, 0x00, 0x00);
const GOLD: Rgb8 = Rgb8::new(0xFF, 0xD7, 0x00);
const SAFFRON: Rgb8 = Rgb8::new(0xFF, 0x99, 0x33);
const WHITE: Rgb8 = Rgb8::new(0xFF, 0xFF, 0xFF);
const SLATE: Rgb8 = Rgb8::new(0x1F, 0x29, 0x37);

/// Light traditional sequence; also the fallback for an unusable custom list.
const LIGHT_TRADITIONAL: [Rgb8; 4] = [
    WHITE,
    Rgb8::new(0xC4, 0x1E, 0x3A),
    GOLD,
    Rgb8::new(0x1E, 0x3A, 0x8A),
];

const MODERN_PAIRS: [(Rgb8, Rgb8); 4] = [
    (Rgb8::new(0xFF, 0x6B, 0x6B), Rgb8::new(0x4E, 0xCD, 0xC4)),
    (Rgb8::new(0xA8, 0x55, 0xF7), Rgb8::new(0xEC, 0x48, 0x99)),
    (Rgb8::new(0x06, 0xB6, 0xD4), Rgb8::new(0x3B, 0x82, 0xF6)),
    (Rgb8::new(0xF5, 0x9E, 0x0B), Rgb8::new(0xEF, 0x44, 0x44)),
];

pub const GRADIENT_ID: &str = "kolamGradient";

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GradientStop {
    /// 0.0..=1.0 along the diagonal.
    pub offset: f64,
    pub color: Rgb8,
}

/// Linear gradient running from the top-left to the bottom-right of the path bounds.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GradientDef {
    pub id: String,
    pub stops: Vec<GradientStop>,
}

impl GradientDef {
    /// Stops spread evenly over `colors`.
    pub fn even(id: impl Into<String>, colors: &[Rgb8]) -> Self {
        let last = colors.len().saturating_sub(1).max(1) as f64;
        Self {
            id: id.into(),
            stops: colors
                .iter()
                .enumerate()
                .map(|(i, &color)| GradientStop {
                    offset: i as f64 / last,
                    color,
                })
                .collect(),
        }
    }
}

/// Stroke paint of one path.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Paint {
    Solid(Rgb8),
    /// Reference to a [`GradientDef`] by id.
    Gradient(String),
}

#[derive(Clone, Debug, PartialEq)]
enum Assignment {
    Shared(Paint),
    /// Path i uses gradient `ids[i % 4]`.
    Cycle([String; MODERN_PAIRS.len()]),
}

/// Colors for one render.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedPalette {
    gradients: Vec<GradientDef>,
    assignment: Assignment,
    dot_fill: Rgb8,
    ink: Rgb8,
    base: Rgb8,
}

impl ResolvedPalette {
    pub fn gradients(&self) -> &[GradientDef] {
        &self.gradients
    }

    /// Paint for the path at `index` in final order.
    pub fn paint_for_path(&self, index: usize) -> Paint {
        match &self.assignment {
            Assignment::Shared(paint) => paint.clone(),
            Assignment::Cycle(ids) => Paint::Gradient(ids[index % ids.len()].clone()),
        }
    }

    pub fn dot_fill(&self) -> Rgb8 {
        self.dot_fill
    }

    /// Theme accent for the guide circle and the default dot fill.
    pub fn ink(&self) -> Rgb8 {
        self.ink
    }

    /// Container background.
    pub fn base(&self) -> Rgb8 {
        self.base
    }
}

fn theme_colors(theme: Theme) -> (Rgb8, Rgb8) {
    match theme {
        Theme::Light => (MAROON, WHITE),
        Theme::Dark => (GOLD, SLATE),
    }
}

/// Resolve gradients, path paint and theme colors.
///
/// Never fails: unparsable custom colors are skipped and an empty result falls
/// back to the light traditional sequence.
pub fn resolve_palette(
    palette_type: PaletteType,
    theme: Theme,
    custom_colors: &[String],
) -> ResolvedPalette {
    let (ink, base) = theme_colors(theme);
    let shared = || Assignment::Shared(Paint::Gradient(GRADIENT_ID.to_string()));

    match palette_type {
        PaletteType::Traditional => {
            let gradient = match theme {
                Theme::Dark => GradientDef::even(GRADIENT_ID, &[GOLD, SAFFRON]),
                Theme::Light => GradientDef::even(GRADIENT_ID, &LIGHT_TRADITIONAL),
            };
            ResolvedPalette {
                gradients: vec![gradient],
                assignment: shared(),
                dot_fill: ink,
                ink,
                base,
            }
        }
        PaletteType::Modern => {
            let ids: [String; MODERN_PAIRS.len()] =
                std::array::from_fn(|i| format!("{GRADIENT_ID}{i}"));
            let gradients = ids
                .iter()
                .zip(MODERN_PAIRS)
                .map(|(id, (a, b))| GradientDef::even(id.clone(), &[a, b]))
                .collect();
            ResolvedPalette {
                gradients,
                assignment: Assignment::Cycle(ids),
                dot_fill: ink,
                ink,
                base,
            }
        }
        PaletteType::Custom => {
            let colors = parse_custom(custom_colors);
            match colors.as_slice() {
                [] => {
                    tracing::warn!("no usable custom colors, using the traditional sequence");
                    ResolvedPalette {
                        gradients: vec![GradientDef::even(GRADIENT_ID, &LIGHT_TRADITIONAL)],
                        assignment: shared(),
                        dot_fill: ink,
                        ink,
                        base,
                    }
                }
                [single] => ResolvedPalette {
                    gradients: Vec::new(),
                    assignment: Assignment::Shared(Paint::Solid(*single)),
                    dot_fill: *single,
                    ink,
                    base,
                },
                [first, ..] => ResolvedPalette {
                    gradients: vec![GradientDef::even(GRADIENT_ID, &colors)],
                    assignment: shared(),
                    dot_fill: *first,
                    ink,
                    base,
                },
            }
        }
    }
}

fn parse_custom(custom_colors: &[String]) -> Vec<Rgb8> {
    custom_colors
        .iter()
        .filter_map(|s| match Rgb8::parse_hex(s) {
            Ok(c) => Some(c),
            Err(err) => {
                tracing::warn!(color = %s, %err, "skipping custom color");
                None
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/palette/resolve.rs"]
mod tests;
