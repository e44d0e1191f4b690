use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Context as _;

use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use crate::encode::sink::FrameSink;
use crate::export::artifact::{ExportArtifact, WEBM_MIME};
use crate::export::capture::{CaptureSettings, CaptureStats, capture_frames};
use crate::foundation::error::KolamResult;
use crate::params::model::GenerationParameters;
use crate::render::surface::{DrawingSurface, Surface};

/// What a capture request did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaptureOutcome<T = ExportArtifact> {
    Finished(T),
    /// Another capture was running; the request was ignored.
    Busy,
    /// Nothing has been presented yet.
    NoSurface,
    /// Capture only runs for animated surfaces.
    AnimationDisabled,
}

impl<T> CaptureOutcome<T> {
    pub fn finished(self) -> Option<T> {
        match self {
            Self::Finished(v) => Some(v),
            _ => None,
        }
    }
}

/// Records the reveal animation of the presented surface.
///
/// At most one capture runs per exporter; concurrent requests get
/// [`CaptureOutcome::Busy`].
#[derive(Debug, Default)]
pub struct VideoExporter {
    settings: CaptureSettings,
    busy: AtomicBool,
}

struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

struct TempFileGuard(PathBuf);

impl TempFileGuard {
    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

impl VideoExporter {
    pub fn new(settings: CaptureSettings) -> Self {
        Self {
            settings,
            busy: AtomicBool::new(false),
        }
    }

    pub fn settings(&self) -> &CaptureSettings {
        &self.settings
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Capture into a WebM through the system `ffmpeg`.
    ///
    /// The temporary video file is removed on every exit path.
    #[tracing::instrument(skip_all, fields(stem = %params.file_stem()))]
    pub fn export(
        &self,
        handle: &DrawingSurface,
        params: &GenerationParameters,
    ) -> KolamResult<CaptureOutcome> {
        self.run(handle, params, |surface| {
            let path = temp_video_path();
            let mut sink = FfmpegSink::new(FfmpegSinkOpts {
                out_path: path.clone(),
                overwrite: true,
                bg_rgba: self.settings.bg_rgba.unwrap_or(surface.base.to_rgba()),
            });
            let (bytes, stats) = self.encode_to_file(surface, path, &mut sink)?;

            let artifact = ExportArtifact {
                file_name: format!("{}.webm", params.file_stem()),
                mime: WEBM_MIME,
                bytes,
            };
            tracing::info!(
                file = %artifact.file_name,
                bytes = artifact.bytes.len(),
                frames = stats.frames_total,
                "video exported"
            );
            Ok(artifact)
        })
    }

    // `sink` writes its container to `path`; the file is gone once this returns.
    fn encode_to_file(
        &self,
        surface: &Surface,
        path: PathBuf,
        sink: &mut dyn FrameSink,
    ) -> KolamResult<(Vec<u8>, CaptureStats)> {
        let tmp = TempFileGuard(path);
        let stats = capture_frames(surface, &self.settings, sink)?;
        let path = tmp.path();
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read captured video '{}'", path.display()))?;
        Ok((bytes, stats))
    }

    /// Capture into a caller-provided sink.
    pub fn export_to_sink(
        &self,
        handle: &DrawingSurface,
        params: &GenerationParameters,
        sink: &mut dyn FrameSink,
    ) -> KolamResult<CaptureOutcome<CaptureStats>> {
        self.run(handle, params, |surface| {
            capture_frames(surface, &self.settings, sink)
        })
    }

    fn run<T>(
        &self,
        handle: &DrawingSurface,
        params: &GenerationParameters,
        capture: impl FnOnce(&Surface) -> KolamResult<T>,
    ) -> KolamResult<CaptureOutcome<T>> {
        if !params.animation_enabled {
            return Ok(CaptureOutcome::AnimationDisabled);
        }
        let Some(surface) = handle.current() else {
            return Ok(CaptureOutcome::NoSurface);
        };
        let Some(_busy) = BusyGuard::acquire(&self.busy) else {
            tracing::debug!("capture already running, request ignored");
            return Ok(CaptureOutcome::Busy);
        };
        capture(surface).map(CaptureOutcome::Finished)
    }
}

fn temp_video_path() -> PathBuf {
    std::env::temp_dir().join(format!(
        "kolam_capture_{}_{}.webm",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0)
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/export/video.rs"]
mod tests;
