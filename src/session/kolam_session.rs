use crate::encode::sink::FrameSink;
use crate::engine::kolam::{GeneratedKolam, generate_kolam};
use crate::export::artifact::ExportArtifact;
use crate::export::capture::{CaptureSettings, CaptureStats};
use crate::export::static_svg::export_svg;
use crate::export::video::{CaptureOutcome, VideoExporter};
use crate::foundation::error::KolamResult;
use crate::palette::resolve::resolve_palette;
use crate::params::model::GenerationParameters;
use crate::render::surface::{DrawingSurface, RenderOptions, Surface, render};

/// Stateful front door: holds parameters, the last generated kolam and the
/// presented surface, and routes export requests.
#[derive(Debug)]
pub struct KolamSession {
    params: GenerationParameters,
    kolam: Option<GeneratedKolam>,
    surface: DrawingSurface,
    exporter: VideoExporter,
}

impl Default for KolamSession {
    fn default() -> Self {
        Self::new(GenerationParameters::default(), CaptureSettings::default())
    }
}

impl KolamSession {
    /// Create a session and present the first kolam.
    pub fn new(params: GenerationParameters, capture: CaptureSettings) -> Self {
        let mut session = Self {
            params,
            kolam: None,
            surface: DrawingSurface::new(),
            exporter: VideoExporter::new(capture),
        };
        session.generate();
        session
    }

    pub fn params(&self) -> &GenerationParameters {
        &self.params
    }

    pub fn kolam(&self) -> Option<&GeneratedKolam> {
        self.kolam.as_ref()
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.surface.current()
    }

    /// Replace parameters. Regenerates only when they differ; returns whether it did.
    pub fn set_params(&mut self, params: GenerationParameters) -> bool {
        if params == self.params {
            return false;
        }
        self.params = params;
        self.generate();
        true
    }

    /// Regenerate and re-present unconditionally.
    pub fn generate(&mut self) -> &GeneratedKolam {
        let kolam = generate_kolam(&self.params);
        let palette = resolve_palette(
            self.params.palette_type,
            self.params.theme,
            &self.params.custom_colors,
        );
        self.surface.present(render(
            &kolam,
            &palette,
            RenderOptions::from_params(&self.params),
        ));
        self.kolam.insert(kolam)
    }

    pub fn export_svg(&self) -> Option<ExportArtifact> {
        export_svg(&self.surface, &self.params)
    }

    pub fn export_video(&self) -> KolamResult<CaptureOutcome> {
        self.exporter.export(&self.surface, &self.params)
    }

    pub fn export_video_to_sink(
        &self,
        sink: &mut dyn FrameSink,
    ) -> KolamResult<CaptureOutcome<CaptureStats>> {
        self.exporter.export_to_sink(&self.surface, &self.params, sink)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/kolam_session.rs"]
mod tests;
