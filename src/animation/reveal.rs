use crate::animation::ease::Ease;

/// Delay between consecutive path reveals.
pub const PATH_STAGGER_SECS: f64 = 0.05;
/// Stroke-length reveal duration of one path.
pub const PATH_REVEAL_SECS: f64 = 2.0;
/// Delay between consecutive dot reveals.
pub const DOT_STAGGER_SECS: f64 = 0.02;
/// Fade and scale-in duration of one dot.
pub const DOT_REVEAL_SECS: f64 = 1.0;

const CAPTURE_BASE_MILLIS: u64 = 3000;
const CAPTURE_PER_PATH_MILLIS: u64 = 50;

/// Timing of one element's reveal.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Reveal {
    pub delay_secs: f64,
    pub duration_secs: f64,
    pub ease: Ease,
}

impl Reveal {
    pub fn path(index: usize) -> Self {
        Self {
            delay_secs: index as f64 * PATH_STAGGER_SECS,
            duration_secs: PATH_REVEAL_SECS,
            ease: Ease::EaseInOut,
        }
    }

    pub fn dot(index: usize) -> Self {
        Self {
            delay_secs: index as f64 * DOT_STAGGER_SECS,
            duration_secs: DOT_REVEAL_SECS,
            ease: Ease::EaseInOut,
        }
    }

    /// Eased progress in `[0, 1]` at `t_secs` after the reveal started.
    pub fn progress(&self, t_secs: f64) -> f64 {
        if t_secs <= self.delay_secs {
            return 0.0;
        }
        if self.duration_secs <= 0.0 {
            return 1.0;
        }
        self.ease
            .apply((t_secs - self.delay_secs) / self.duration_secs)
    }

    pub fn end_secs(&self) -> f64 {
        self.delay_secs + self.duration_secs
    }
}

/// Capture length for a surface with `path_count` paths.
pub fn capture_duration_millis(path_count: usize) -> u64 {
    CAPTURE_BASE_MILLIS + CAPTURE_PER_PATH_MILLIS * path_count as u64
}

#[cfg(test)]
#[path = "../../tests/unit/animation/reveal.rs"]
mod tests;
