use super::*;
use crate::engine::kolam::generate_kolam;
use crate::palette::resolve::resolve_palette;
use crate::params::model::{Preset, Style};
use crate::render::surface::{RenderOptions, render};

#[test]
fn no_surface_exports_nothing() {
    let handle = DrawingSurface::new();
    assert!(export_svg(&handle, &GenerationParameters::default()).is_none());
}

#[test]
fn exports_current_surface_with_param_name() {
    let params = GenerationParameters {
        preset: Preset::RadialLotus,
        complexity: 9,
        style: Style::Traditional,
        ..GenerationParameters::default()
    };
    let kolam = generate_kolam(&params);
    let palette = resolve_palette(params.palette_type, params.theme, &params.custom_colors);
    let mut handle = DrawingSurface::new();
    handle.present(render(&kolam, &palette, RenderOptions::from_params(&params)));

    let artifact = export_svg(&handle, &params).unwrap();
    assert_eq!(artifact.file_name, "kolam-radial-lotus-9-traditional.svg");
    assert_eq!(artifact.mime, "image/svg+xml");
    let text = String::from_utf8(artifact.bytes).unwrap();
    assert!(text.starts_with("<svg "));
}

#[test]
fn artifact_is_written_to_disk() {
    let dir = std::env::temp_dir().join(format!("kolam_artifact_{}", std::process::id()));
    let artifact = ExportArtifact {
        file_name: "kolam-test.svg".to_string(),
        mime: "image/svg+xml",
        bytes: b"<svg/>".to_vec(),
    };
    let path = artifact.write_to(&dir).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"<svg/>");
    let _ = std::fs::remove_dir_all(&dir);
}
