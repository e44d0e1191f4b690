#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    /// `cubic-bezier(0.42, 0, 0.58, 1)`, the stylesheet `ease-in-out` curve.
    #[default]
    EaseInOut,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
        }
    }

    /// Keyword used in generated stylesheets.
    pub fn css(self) -> &'static str {
        match self {
            Self::EaseInOut => "ease-in-out",
        }
    }
}

// y(t) for the unit cubic bezier through (x1,y1) and (x2,y2), x solved by bisection.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    let bez = |a: f64, b: f64, s: f64| {
        let u = 1.0 - s;
        3.0 * u * u * s * a + 3.0 * u * s * s * b + s * s * s
    };
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    for _ in 0..48 {
        let mid = 0.5 * (lo + hi);
        if bez(x1, x2, mid) < x {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    bez(y1, y2, 0.5 * (lo + hi))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
