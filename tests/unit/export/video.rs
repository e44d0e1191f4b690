use std::sync::Arc;

use super::*;
use crate::encode::ffmpeg::is_ffmpeg_on_path;
use crate::encode::sink::{InMemorySink, SinkConfig};
use crate::engine::kolam::generate_kolam;
use crate::foundation::core::{Fps, FrameIndex};
use crate::palette::resolve::resolve_palette;
use crate::params::model::{CanvasSize, Preset};
use crate::render::raster::FrameRGBA;
use crate::render::surface::{RenderOptions, render};

fn params(animation_enabled: bool) -> GenerationParameters {
    GenerationParameters {
        size: CanvasSize::Small,
        preset: Preset::ElevenToOne,
        animation_enabled,
        ..GenerationParameters::default()
    }
}

fn presented(params: &GenerationParameters) -> DrawingSurface {
    let kolam = generate_kolam(params);
    let palette = resolve_palette(params.palette_type, params.theme, &params.custom_colors);
    let mut handle = DrawingSurface::new();
    handle.present(render(&kolam, &palette, RenderOptions::from_params(params)));
    handle
}

fn fast() -> CaptureSettings {
    CaptureSettings {
        fps: Fps::new(5, 1).unwrap(),
        ..CaptureSettings::default()
    }
}

#[test]
fn disabled_animation_is_reported() {
    let exporter = VideoExporter::new(fast());
    let p = params(false);
    let handle = presented(&p);
    let out = exporter
        .export_to_sink(&handle, &p, &mut InMemorySink::new())
        .unwrap();
    assert_eq!(out, CaptureOutcome::AnimationDisabled);
}

#[test]
fn missing_surface_is_reported() {
    let exporter = VideoExporter::new(fast());
    let out = exporter
        .export_to_sink(&DrawingSurface::new(), &params(true), &mut InMemorySink::new())
        .unwrap();
    assert_eq!(out, CaptureOutcome::NoSurface);
}

#[test]
fn capture_into_sink_finishes() {
    let exporter = VideoExporter::new(fast());
    let p = params(true);
    let handle = presented(&p);
    let mut sink = InMemorySink::new();
    let stats = exporter
        .export_to_sink(&handle, &p, &mut sink)
        .unwrap()
        .finished()
        .unwrap();
    // 3600 ms at 5 fps
    assert_eq!(stats.frames_total, 18);
    assert_eq!(sink.frames().len(), 18);
    assert!(!exporter.is_busy());
}

struct ReentrantSink {
    exporter: Arc<VideoExporter>,
    handle: DrawingSurface,
    params: GenerationParameters,
    nested: Option<CaptureOutcome<CaptureStats>>,
}

impl FrameSink for ReentrantSink {
    fn begin(&mut self, _cfg: SinkConfig) -> KolamResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, _idx: FrameIndex, _frame: &FrameRGBA) -> KolamResult<()> {
        if self.nested.is_none() {
            assert!(self.exporter.is_busy());
            self.nested = Some(self.exporter.export_to_sink(
                &self.handle,
                &self.params,
                &mut InMemorySink::new(),
            )?);
        }
        Ok(())
    }

    fn end(&mut self) -> KolamResult<()> {
        Ok(())
    }
}

#[test]
fn concurrent_request_is_busy() {
    let exporter = Arc::new(VideoExporter::new(fast()));
    let p = params(true);
    let handle = presented(&p);
    let mut sink = ReentrantSink {
        exporter: Arc::clone(&exporter),
        handle: presented(&p),
        params: p.clone(),
        nested: None,
    };
    let outer = exporter.export_to_sink(&handle, &p, &mut sink).unwrap();
    assert!(matches!(outer, CaptureOutcome::Finished(_)));
    assert_eq!(sink.nested, Some(CaptureOutcome::Busy));
    assert!(!exporter.is_busy());
}

#[test]
fn busy_flag_is_released_on_error() {
    struct FailingSink;
    impl FrameSink for FailingSink {
        fn begin(&mut self, _cfg: SinkConfig) -> KolamResult<()> {
            Err(crate::foundation::error::KolamError::encode("boom"))
        }
        fn push_frame(&mut self, _idx: FrameIndex, _frame: &FrameRGBA) -> KolamResult<()> {
            Ok(())
        }
        fn end(&mut self) -> KolamResult<()> {
            Ok(())
        }
    }

    let exporter = VideoExporter::new(fast());
    let p = params(true);
    let handle = presented(&p);
    assert!(exporter.export_to_sink(&handle, &p, &mut FailingSink).is_err());
    assert!(!exporter.is_busy());
}

#[test]
fn webm_export_through_ffmpeg() {
    if !is_ffmpeg_on_path() {
        eprintln!("skipping: ffmpeg not on PATH");
        return;
    }
    let exporter = VideoExporter::new(fast());
    let p = params(true);
    let handle = presented(&p);
    let artifact = exporter.export(&handle, &p).unwrap().finished().unwrap();
    assert_eq!(artifact.file_name, "kolam-11to1-5-traditional.webm");
    assert_eq!(artifact.mime, "video/webm");
    // EBML header
    assert_eq!(&artifact.bytes[..4], &[0x1A, 0x45, 0xDF, 0xA3]);
}

fn scratch_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("kolam_test_{tag}_{}.webm", std::process::id()))
}

#[test]
fn temp_file_guard_removes_file_on_drop() {
    let path = scratch_path("guard");
    std::fs::write(&path, b"partial").unwrap();
    let guard = TempFileGuard(path.clone());
    assert!(guard.path().exists());
    drop(guard);
    assert!(!path.exists());
}

#[test]
fn temp_file_guard_tolerates_missing_file() {
    let path = scratch_path("never-written");
    drop(TempFileGuard(path.clone()));
    assert!(!path.exists());
}

/// Writes a fixed container to `path` when the stream ends.
struct FileWritingSink {
    path: PathBuf,
    fail_on_begin: bool,
}

impl FrameSink for FileWritingSink {
    fn begin(&mut self, _cfg: SinkConfig) -> KolamResult<()> {
        std::fs::write(&self.path, b"header").unwrap();
        if self.fail_on_begin {
            return Err(crate::foundation::error::KolamError::encode("encoder refused config"));
        }
        Ok(())
    }

    fn push_frame(&mut self, _idx: FrameIndex, _frame: &FrameRGBA) -> KolamResult<()> {
        Ok(())
    }

    fn end(&mut self) -> KolamResult<()> {
        std::fs::write(&self.path, b"kolam-video").unwrap();
        Ok(())
    }
}

#[test]
fn encoded_file_is_read_back_then_removed() {
    let exporter = VideoExporter::new(fast());
    let p = params(true);
    let handle = presented(&p);
    let path = scratch_path("success");
    let mut sink = FileWritingSink {
        path: path.clone(),
        fail_on_begin: false,
    };
    let (bytes, stats) = exporter
        .encode_to_file(handle.current().unwrap(), path.clone(), &mut sink)
        .unwrap();
    assert_eq!(bytes, b"kolam-video");
    assert_eq!(stats.frames_total, 18);
    assert!(!path.exists());
}

#[test]
fn encoded_file_is_removed_when_encoder_fails() {
    let exporter = VideoExporter::new(fast());
    let p = params(true);
    let handle = presented(&p);
    let path = scratch_path("failure");
    let mut sink = FileWritingSink {
        path: path.clone(),
        fail_on_begin: true,
    };
    assert!(
        exporter
            .encode_to_file(handle.current().unwrap(), path.clone(), &mut sink)
            .is_err()
    );
    assert!(!path.exists());
}

#[test]
fn failed_webm_export_leaves_no_capture_file() {
    if is_ffmpeg_on_path() {
        eprintln!("skipping: ffmpeg on PATH, export would succeed");
        return;
    }
    let prefix = format!("kolam_capture_{}_", std::process::id());
    let leftovers = || {
        std::fs::read_dir(std::env::temp_dir())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().starts_with(&prefix))
            .count()
    };
    let exporter = VideoExporter::new(fast());
    let p = params(true);
    let handle = presented(&p);
    assert!(exporter.export(&handle, &p).is_err());
    assert!(!exporter.is_busy());
    assert_eq!(leftovers(), 0);
}
