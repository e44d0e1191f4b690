use super::*;
use crate::foundation::core::Fps;
use crate::params::model::{Jitter, Preset, Style};

#[test]
fn empty_object_is_all_defaults() {
    let cfg = KolamConfig::from_json("{}").unwrap();
    assert_eq!(cfg, KolamConfig::default());
    assert_eq!(cfg.capture.fps, Fps::default());
    assert_eq!(cfg.capture.chunk_size, 32);
}

#[test]
fn partial_params_and_capture() {
    let cfg = KolamConfig::from_json(
        r#"{
            "params": { "preset": "13to7", "style": "modern", "complexity": 8, "jitter": { "seeded": 9 } },
            "capture": { "fps": { "num": 24, "den": 1 }, "parallel": true }
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.params.preset, Preset::ThirteenToSeven);
    assert_eq!(cfg.params.style, Style::Modern);
    assert_eq!(cfg.params.complexity, 8);
    assert_eq!(cfg.params.jitter, Jitter::Seeded(9));
    assert!(cfg.params.show_dots);
    assert_eq!(cfg.capture.fps.num, 24);
    assert!(cfg.capture.parallel);
}

#[test]
fn unknown_preset_degrades() {
    let cfg = KolamConfig::from_json(r#"{ "params": { "preset": "spiral" } }"#).unwrap();
    assert_eq!(cfg.params.preset, Preset::Grid7x7);
}

#[test]
fn malformed_json_is_serde_error() {
    let err = KolamConfig::from_json("{ nope").unwrap_err();
    assert!(matches!(err, KolamError::Serde(_)));
}

#[test]
fn zero_fps_is_rejected() {
    let err = KolamConfig::from_json(r#"{ "capture": { "fps": { "num": 0, "den": 1 } } }"#)
        .unwrap_err();
    assert!(matches!(err, KolamError::Validation(_)));
}

#[test]
fn load_reads_file() {
    let path = std::env::temp_dir().join(format!("kolam_config_{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "params": { "size": "large" } }"#).unwrap();
    let cfg = KolamConfig::load(&path).unwrap();
    assert_eq!(cfg.params.canvas().width, 500);
    let _ = std::fs::remove_file(&path);
    assert!(KolamConfig::load(&path).is_err());
}

#[test]
fn oversized_complexity_in_config_is_clamped() {
    let cfg = KolamConfig::from_json(r#"{ "params": { "complexity": 300 } }"#).unwrap();
    assert_eq!(cfg.params.complexity, 10);
}
