use crate::connect::jitter::JitterSource;
use crate::connect::motif::Motif;
use crate::connect::{modern, traditional};
use crate::foundation::core::Canvas;
use crate::geometry::path::PathSegment;
use crate::layout::dots::Dot;
use crate::params::model::{Preset, Style};

/// Which family of rules a run uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connection {
    Motif(Motif),
    Standard { style: Style, preset: Preset },
}

impl Connection {
    /// A recognised suggestion wins over style and preset.
    pub fn resolve(style: Style, preset: Preset, suggestion: Option<&str>) -> Self {
        match suggestion.and_then(Motif::from_suggestion) {
            Some(motif) => Self::Motif(motif),
            None => Self::Standard { style, preset },
        }
    }
}

/// Raw (pre-symmetry) connector paths for one run.
pub fn synthesize(
    dots: &[Dot],
    complexity: u8,
    style: Style,
    preset: Preset,
    suggestion: Option<&str>,
    canvas: Canvas,
    jitter: &mut JitterSource,
) -> Vec<PathSegment> {
    let connection = Connection::resolve(style, preset, suggestion);
    tracing::debug!(?connection, "connector rules resolved");
    match connection {
        Connection::Motif(motif) => motif.paths(canvas),
        Connection::Standard {
            style: Style::Modern,
            ..
        } => modern::connect(dots, complexity, jitter),
        Connection::Standard {
            style: Style::Traditional,
            preset,
        } => traditional::connect(dots, complexity, preset, canvas.center(), jitter),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/connect/synth.rs"]
mod tests;
