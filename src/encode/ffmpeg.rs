use std::io::{Read, Write as _};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::thread::JoinHandle;

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{KolamError, KolamResult};
use crate::foundation::math::mul_div255_u16;
use crate::render::raster::FrameRGBA;

/// Where and how [`FfmpegSink`] writes its video.
#[derive(Clone, Debug)]
pub struct FfmpegSinkOpts {
    pub out_path: PathBuf,
    /// Replace an existing file at `out_path` instead of failing.
    pub overwrite: bool,
    /// Straight-alpha color that transparent pixels are composited onto.
    pub bg_rgba: [u8; 4],
}

impl FfmpegSinkOpts {
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            bg_rgba: [255, 255, 255, 255],
        }
    }
}

/// Pipes opaque RGBA frames into a system `ffmpeg` process that writes VP9 WebM.
pub struct FfmpegSink {
    opts: FfmpegSinkOpts,
    encoder: Option<Encoder>,
    opaque: Vec<u8>,
    last_idx: Option<FrameIndex>,
}

// A spawned ffmpeg plus the thread collecting its diagnostics.
struct Encoder {
    cfg: SinkConfig,
    child: Child,
    stdin: Option<ChildStdin>,
    diagnostics: Option<JoinHandle<std::io::Result<Vec<u8>>>>,
}

impl FfmpegSink {
    pub fn new(opts: FfmpegSinkOpts) -> Self {
        Self {
            opts,
            encoder: None,
            opaque: Vec::new(),
            last_idx: None,
        }
    }

    fn webm_command(&self, cfg: SinkConfig) -> Command {
        let mut cmd = Command::new("ffmpeg");
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .arg(if self.opts.overwrite { "-y" } else { "-n" })
            .args(["-loglevel", "error", "-f", "rawvideo", "-pix_fmt", "rgba"])
            .args(["-s", &format!("{}x{}", cfg.width, cfg.height)])
            // rate of the piped stream, so it has to precede `-i`
            .args(["-r", &format!("{}/{}", cfg.fps.num, cfg.fps.den)])
            .args(["-i", "pipe:0", "-an"])
            .args(["-c:v", "libvpx-vp9", "-pix_fmt", "yuv420p"])
            .args(["-b:v", "0", "-crf", "32", "-f", "webm"])
            .arg(&self.opts.out_path);
        cmd
    }
}

fn check_dimensions(cfg: &SinkConfig) -> KolamResult<()> {
    if cfg.fps.num == 0 || cfg.fps.den == 0 {
        return Err(KolamError::validation("capture rate must be non-zero"));
    }
    if cfg.width == 0 || cfg.height == 0 {
        return Err(KolamError::validation(format!(
            "cannot encode an empty {}x{} canvas",
            cfg.width, cfg.height
        )));
    }
    if !cfg.width.is_multiple_of(2) || !cfg.height.is_multiple_of(2) {
        return Err(KolamError::validation(format!(
            "VP9 yuv420p needs an even canvas, got {}x{}",
            cfg.width, cfg.height
        )));
    }
    Ok(())
}

impl FrameSink for FfmpegSink {
    fn begin(&mut self, cfg: SinkConfig) -> KolamResult<()> {
        check_dimensions(&cfg)?;
        ensure_parent_dir(&self.opts.out_path)?;
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(KolamError::validation(format!(
                "refusing to replace '{}'",
                self.opts.out_path.display()
            )));
        }
        if !is_ffmpeg_on_path() {
            return Err(KolamError::encode(
                "WebM export needs the `ffmpeg` executable on PATH",
            ));
        }

        let mut child = self
            .webm_command(cfg)
            .spawn()
            .map_err(|e| KolamError::encode(format!("could not start ffmpeg: {e}")))?;
        let stdin = child.stdin.take();
        let diagnostics = child.stderr.take().map(|mut stderr| {
            std::thread::spawn(move || {
                let mut buf = Vec::new();
                stderr.read_to_end(&mut buf)?;
                Ok(buf)
            })
        });
        if stdin.is_none() {
            let _ = child.kill();
            return Err(KolamError::encode("ffmpeg came up without a stdin pipe"));
        }

        tracing::debug!(
            out = %self.opts.out_path.display(),
            width = cfg.width,
            height = cfg.height,
            "ffmpeg started"
        );
        self.opaque = vec![0u8; cfg.width as usize * cfg.height as usize * 4];
        self.last_idx = None;
        self.encoder = Some(Encoder {
            cfg,
            child,
            stdin,
            diagnostics,
        });
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> KolamResult<()> {
        let Some(encoder) = self.encoder.as_mut() else {
            return Err(KolamError::encode("frame pushed before the encoder started"));
        };
        if self.last_idx.is_some_and(|last| idx.0 <= last.0) {
            return Err(KolamError::encode(format!(
                "frame {} arrived after frame {}",
                idx.0,
                self.last_idx.map_or(0, |l| l.0)
            )));
        }
        if frame.width != encoder.cfg.width
            || frame.height != encoder.cfg.height
            || frame.data.len() != self.opaque.len()
        {
            return Err(KolamError::validation(format!(
                "frame is {}x{} ({} bytes), encoder expects {}x{}",
                frame.width,
                frame.height,
                frame.data.len(),
                encoder.cfg.width,
                encoder.cfg.height
            )));
        }
        self.last_idx = Some(idx);

        composite_onto_background(&mut self.opaque, &frame.data, self.opts.bg_rgba);
        let Some(stdin) = encoder.stdin.as_mut() else {
            return Err(KolamError::encode("encoder input is already closed"));
        };
        stdin
            .write_all(&self.opaque)
            .map_err(|e| KolamError::encode(format!("ffmpeg stopped accepting frames: {e}")))
    }

    fn end(&mut self) -> KolamResult<()> {
        let Some(mut encoder) = self.encoder.take() else {
            return Err(KolamError::encode("encoder was never started"));
        };
        // EOF on stdin lets ffmpeg finalize the container.
        drop(encoder.stdin.take());
        let status = encoder
            .child
            .wait()
            .map_err(|e| KolamError::encode(format!("lost track of ffmpeg: {e}")))?;
        let log = match encoder.diagnostics.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| KolamError::encode("ffmpeg log reader panicked"))?
                .map_err(|e| KolamError::encode(format!("could not read ffmpeg log: {e}")))?,
            None => Vec::new(),
        };
        if !status.success() {
            return Err(KolamError::encode(format!(
                "ffmpeg failed ({status}): {}",
                String::from_utf8_lossy(&log).trim()
            )));
        }
        Ok(())
    }
}

impl Drop for FfmpegSink {
    fn drop(&mut self) {
        if let Some(mut encoder) = self.encoder.take() {
            drop(encoder.stdin.take());
            let _ = encoder.child.kill();
            let _ = encoder.child.wait();
        }
    }
}

// `premul` is premultiplied RGBA8 of the same length as `out`.
fn composite_onto_background(out: &mut [u8], premul: &[u8], bg: [u8; 4]) {
    for (px, src) in out.chunks_exact_mut(4).zip(premul.chunks_exact(4)) {
        let uncovered = 255 - u16::from(src[3]);
        for c in 0..3 {
            let v = u16::from(src[c]) + mul_div255_u16(u16::from(bg[c]), uncovered);
            px[c] = v.min(255) as u8;
        }
        px[3] = 255;
    }
}

/// Create the directory that will hold `path`.
fn ensure_parent_dir(path: &Path) -> KolamResult<()> {
    if let Some(parent) = path.parent() {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("cannot create '{}'", parent.display()))?;
    }
    Ok(())
}

/// `true` when `ffmpeg -version` runs successfully.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
