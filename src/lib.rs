//! Procedural kolam pattern engine.
//!
//! A run is a pure function of [`GenerationParameters`]:
//!
//! - lay out anchor dots for a named preset ([`generate_layout`])
//! - stitch them into connector curves ([`synthesize`])
//! - replicate the curves under rotational symmetry ([`apply_symmetry`])
//!
//! [`generate_kolam`] runs all three and caps the result. Rendering maps a
//! [`GeneratedKolam`] and a [`ResolvedPalette`] onto a [`Surface`], which can be
//! serialized to SVG, rasterized, or captured frame by frame into a
//! [`FrameSink`] (WebM through the system `ffmpeg`). [`KolamSession`] ties the
//! pieces together for interactive use.
#![forbid(unsafe_code)]

mod animation;
mod config;
mod connect;
mod encode;
mod engine;
mod export;
mod foundation;
mod geometry;
mod layout;
mod palette;
mod params;
mod render;
mod session;
mod symmetry;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, Point, Rgb8, Vec2,
};
pub use crate::foundation::error::{KolamError, KolamResult};

pub use crate::params::model::{
    CanvasSize, GenerationParameters, Jitter, MAX_COMPLEXITY, MIN_COMPLEXITY, PaletteType,
    Preset, Style, Theme,
};
pub use crate::params::showcase::{ShowcasePreset, showcase_presets};

pub use crate::geometry::path::{DEFAULT_PATH_OPACITY, PathCommand, PathData, PathSegment};
pub use crate::layout::dots::{Dot, generate_layout};
pub use crate::symmetry::transform::{SymmetryKind, apply_symmetry, folds_for_complexity};

pub use crate::connect::jitter::JitterSource;
pub use crate::connect::motif::Motif;
pub use crate::connect::synth::{Connection, synthesize};

pub use crate::engine::kolam::{GeneratedKolam, MAX_PATHS, generate_kolam};
pub use crate::palette::resolve::{
    GRADIENT_ID, GradientDef, GradientStop, Paint, ResolvedPalette, resolve_palette,
};

pub use crate::animation::ease::Ease;
pub use crate::animation::reveal::{Reveal, capture_duration_millis};

pub use crate::render::raster::{FrameRGBA, rasterize_frame, rasterize_svg};
pub use crate::render::surface::{DrawingSurface, Element, RenderOptions, Surface, render};

pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};

pub use crate::export::artifact::{ExportArtifact, SVG_MIME, WEBM_MIME};
pub use crate::export::capture::{
    CaptureSettings, CaptureStats, capture_frame_count, capture_frames,
};
pub use crate::export::static_svg::export_svg;
pub use crate::export::video::{CaptureOutcome, VideoExporter};

pub use crate::config::KolamConfig;
pub use crate::session::kolam_session::KolamSession;
