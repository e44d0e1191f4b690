use crate::params::model::{CanvasSize, GenerationParameters, Preset, Style, Theme};

/// A curated gallery entry.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ShowcasePreset {
    pub name: &'static str,
    pub description: &'static str,
    pub params: GenerationParameters,
}

fn entry(
    name: &'static str,
    description: &'static str,
    preset: Preset,
    complexity: u8,
) -> ShowcasePreset {
    ShowcasePreset {
        name,
        description,
        params: GenerationParameters {
            size: CanvasSize::Small,
            complexity,
            style: Style::Traditional,
            preset,
            theme: Theme::Light,
            show_dots: true,
            ..GenerationParameters::default()
        },
    }
}

/// The curated gallery, in display order.
pub fn showcase_presets() -> Vec<ShowcasePreset> {
    vec![
        entry(
            "11→1 Petal",
            "Traditional 11-dot petal pattern with nested loops",
            Preset::ElevenToOne,
            7,
        ),
        entry(
            "8×8 Grid Kambi",
            "Classic kambi pattern on an 8×8 grid with flowing curves",
            Preset::Grid8x8,
            5,
        ),
        entry(
            "Radial Lotus 4-fold",
            "Radial lotus design with 4-fold symmetry and multiple rings",
            Preset::RadialLotus,
            9,
        ),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/params/showcase.rs"]
mod tests;
