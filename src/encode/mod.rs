//! Frame sinks consuming captured frames in timeline order.

/// WebM output via the system `ffmpeg`.
pub(crate) mod ffmpeg;
/// Sink trait and the in-memory sink.
pub(crate) mod sink;
