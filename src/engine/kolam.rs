use crate::connect::jitter::JitterSource;
use crate::connect::synth::synthesize;
use crate::foundation::core::Canvas;
use crate::geometry::path::PathSegment;
use crate::layout::dots::{Dot, generate_layout};
use crate::params::model::GenerationParameters;
use crate::symmetry::transform::{SymmetryKind, apply_symmetry, folds_for_complexity};

/// Upper bound on the number of paths a run emits.
pub const MAX_PATHS: usize = 80;

/// Result of one generation run: dots plus the final, capped path set.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeneratedKolam {
    pub canvas: Canvas,
    pub dots: Vec<Dot>,
    pub paths: Vec<PathSegment>,
}

impl GeneratedKolam {
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }
}

/// Run layout, connectors and symmetry for `params`.
///
/// Never fails. Out-of-range complexity is clamped and an unknown preset has
/// already degraded to the default grid while parsing.
#[tracing::instrument(skip(params), fields(preset = %params.preset, complexity = params.complexity))]
pub fn generate_kolam(params: &GenerationParameters) -> GeneratedKolam {
    let params = params.normalized();
    let canvas = params.canvas();
    let center = canvas.center();

    let dots = generate_layout(params.preset, canvas);
    let mut jitter = JitterSource::new(params.jitter);
    let raw = synthesize(
        &dots,
        params.complexity,
        params.style,
        params.preset,
        params.suggestion.as_deref(),
        canvas,
        &mut jitter,
    );

    let folds = folds_for_complexity(params.complexity);
    let mut paths: Vec<PathSegment> = raw
        .iter()
        .flat_map(|p| apply_symmetry(p, SymmetryKind::Rotational, folds, center))
        .collect();

    let expanded = paths.len();
    if expanded > MAX_PATHS {
        tracing::warn!(expanded, cap = MAX_PATHS, "path set capped");
        paths.truncate(MAX_PATHS);
    }
    tracing::debug!(
        dots = dots.len(),
        raw = raw.len(),
        folds,
        paths = paths.len(),
        "kolam generated"
    );

    GeneratedKolam {
        canvas,
        dots,
        paths,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/kolam.rs"]
mod tests;
