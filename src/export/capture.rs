//! Frame-by-frame capture of a surface's reveal into a [`FrameSink`].
//!
//! Frames are produced in chunks. Within a chunk every frame is baked to SVG and
//! fingerprinted; identical frames are rasterized once and reused, which covers
//! the long tail after every reveal has finished. Unique frames may be rasterized
//! on a rayon pool. Frames always reach the sink in increasing index order.

use std::collections::HashMap;

use rayon::prelude::*;
use xxhash_rust::xxh3::xxh3_64;

use crate::animation::reveal::capture_duration_millis;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{KolamError, KolamResult};
use crate::render::raster::{FrameRGBA, rasterize_svg};
use crate::render::surface::Surface;

/// Capture tuning. Every field has a default.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaptureSettings {
    pub fps: Fps,
    /// Flattening color for the encoder; the surface base color when unset.
    pub bg_rgba: Option<[u8; 4]>,
    pub parallel: bool,
    pub chunk_size: usize,
    pub threads: Option<usize>,
    pub static_frame_elision: bool,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            fps: Fps::default(),
            bg_rgba: None,
            parallel: false,
            chunk_size: 32,
            threads: None,
            static_frame_elision: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct CaptureStats {
    pub frames_total: u64,
    pub frames_rendered: u64,
    pub frames_elided: u64,
}

/// Number of frames a capture of `surface` produces at `fps`.
pub fn capture_frame_count(surface: &Surface, fps: Fps) -> u64 {
    fps.frames_for_millis(capture_duration_millis(surface.path_count()))
}

/// Drive `sink` through one full capture of `surface`.
#[tracing::instrument(skip_all, fields(paths = surface.path_count()))]
pub fn capture_frames(
    surface: &Surface,
    settings: &CaptureSettings,
    sink: &mut dyn FrameSink,
) -> KolamResult<CaptureStats> {
    let total = capture_frame_count(surface, settings.fps);
    let chunk_size = normalized_chunk_size(settings.chunk_size);
    let pool = if settings.parallel {
        Some(build_thread_pool(settings.threads)?)
    } else {
        None
    };

    sink.begin(SinkConfig {
        width: surface.canvas.width,
        height: surface.canvas.height,
        fps: settings.fps,
    })?;

    let mut stats = CaptureStats::default();
    let mut carry: Option<(u64, FrameRGBA)> = None;
    let mut chunk_start = 0u64;
    while chunk_start < total {
        let chunk_end = (chunk_start + chunk_size).min(total);
        let chunk_stats = capture_chunk(
            surface,
            chunk_start..chunk_end,
            settings,
            pool.as_ref(),
            &mut carry,
            sink,
        )?;
        stats.frames_total += chunk_stats.frames_total;
        stats.frames_rendered += chunk_stats.frames_rendered;
        stats.frames_elided += chunk_stats.frames_elided;
        chunk_start = chunk_end;
    }

    sink.end()?;
    tracing::debug!(
        total = stats.frames_total,
        rendered = stats.frames_rendered,
        elided = stats.frames_elided,
        "capture finished"
    );
    Ok(stats)
}

fn capture_chunk(
    surface: &Surface,
    range: std::ops::Range<u64>,
    settings: &CaptureSettings,
    pool: Option<&rayon::ThreadPool>,
    carry: &mut Option<(u64, FrameRGBA)>,
    sink: &mut dyn FrameSink,
) -> KolamResult<CaptureStats> {
    let (width, height) = (surface.canvas.width, surface.canvas.height);
    let svgs: Vec<String> = range
        .clone()
        .map(|f| surface.frame_svg(settings.fps.frames_to_secs(f)))
        .collect();
    let fingerprints: Vec<u64> = svgs.iter().map(|s| xxh3_64(s.as_bytes())).collect();

    // Slot 0 may hold the last frame of the previous chunk.
    let mut slots = Vec::<Option<FrameRGBA>>::new();
    let mut first = HashMap::<u64, usize>::new();
    if settings.static_frame_elision
        && let Some((fp, frame)) = carry.take()
    {
        first.insert(fp, 0);
        slots.push(Some(frame));
    }

    let mut to_render = Vec::<(usize, usize)>::new();
    let mut frame_to_slot = Vec::<usize>::with_capacity(svgs.len());
    for (idx, fp) in fingerprints.iter().enumerate() {
        if settings.static_frame_elision
            && let Some(&slot) = first.get(fp)
        {
            frame_to_slot.push(slot);
            continue;
        }
        let slot = slots.len();
        slots.push(None);
        first.insert(*fp, slot);
        to_render.push((slot, idx));
        frame_to_slot.push(slot);
    }

    let raster = |&(_, idx): &(usize, usize)| rasterize_svg(&svgs[idx], width, height);
    let rendered: Vec<KolamResult<FrameRGBA>> = match pool {
        Some(pool) => pool.install(|| to_render.par_iter().map(raster).collect()),
        None => to_render.iter().map(raster).collect(),
    };
    for (&(slot, _), frame) in to_render.iter().zip(rendered) {
        slots[slot] = Some(frame?);
    }

    for (offset, &slot) in frame_to_slot.iter().enumerate() {
        let frame = slots[slot]
            .as_ref()
            .ok_or_else(|| KolamError::render("internal error: captured frame missing"))?;
        sink.push_frame(FrameIndex(range.start + offset as u64), frame)?;
    }

    if settings.static_frame_elision
        && let (Some(&fp), Some(&slot)) = (fingerprints.last(), frame_to_slot.last())
        && let Some(frame) = slots[slot].take()
    {
        *carry = Some((fp, frame));
    }

    let total = frame_to_slot.len() as u64;
    let rendered = to_render.len() as u64;
    Ok(CaptureStats {
        frames_total: total,
        frames_rendered: rendered,
        frames_elided: total - rendered,
    })
}

fn build_thread_pool(threads: Option<usize>) -> KolamResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(KolamError::validation(
            "capture 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| KolamError::render(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/capture.rs"]
mod tests;
