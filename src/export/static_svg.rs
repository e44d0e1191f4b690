use crate::export::artifact::{ExportArtifact, SVG_MIME};
use crate::params::model::GenerationParameters;
use crate::render::surface::DrawingSurface;

/// Serialize whatever the handle currently shows. `None` when nothing is presented.
pub fn export_svg(handle: &DrawingSurface, params: &GenerationParameters) -> Option<ExportArtifact> {
    let Some(surface) = handle.current() else {
        tracing::debug!("svg export skipped: no surface");
        return None;
    };
    let artifact = ExportArtifact {
        file_name: format!("{}.svg", params.file_stem()),
        mime: SVG_MIME,
        bytes: surface.to_svg().into_bytes(),
    };
    tracing::info!(file = %artifact.file_name, "svg exported");
    Some(artifact)
}

#[cfg(test)]
#[path = "../../tests/unit/export/static_svg.rs"]
mod tests;
