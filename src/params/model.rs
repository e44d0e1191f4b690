use crate::foundation::core::Canvas;

/// Lowest accepted complexity level.
pub const MIN_COMPLEXITY: u8 = 1;
/// Highest accepted complexity level.
pub const MAX_COMPLEXITY: u8 = 10;

/// Canvas size selection. Every size is square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanvasSize {
    /// 300×300 px.
    Small,
    /// 400×400 px.
    #[default]
    Medium,
    /// 500×500 px.
    Large,
}

impl CanvasSize {
    /// Pixel canvas for this size.
    pub fn canvas(self) -> Canvas {
        match self {
            Self::Small => Canvas::square(300),
            Self::Medium => Canvas::square(400),
            Self::Large => Canvas::square(500),
        }
    }
}

/// Connector family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Preset-specific rules.
    #[default]
    Traditional,
    /// Flowing cubic connectors across the whole dot sequence.
    Modern,
}

impl Style {
    /// Stable key used in file names.
    pub fn key(self) -> &'static str {
        match self {
            Self::Traditional => "traditional",
            Self::Modern => "modern",
        }
    }
}

/// Named dot-layout template.
///
/// Unknown keys parse to [`Preset::Grid7x7`] instead of failing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Preset {
    /// 11 outer dots and a center dot.
    ElevenToOne,
    /// 13 outer, 7 inner and a center dot.
    ThirteenToSeven,
    /// 8×8 lattice, kambi rules.
    Grid8x8,
    /// 5×5 lattice.
    Grid5x5,
    /// Four concentric rings of 8, 16, 24 and 32 dots plus a center dot.
    RadialLotus,
    /// 7×7 lattice.
    #[default]
    Grid7x7,
}

impl Preset {
    /// All presets in declaration order.
    pub const ALL: [Preset; 6] = [
        Preset::ElevenToOne,
        Preset::ThirteenToSeven,
        Preset::Grid8x8,
        Preset::Grid5x5,
        Preset::RadialLotus,
        Preset::Grid7x7,
    ];

    /// Stable key (`11to1`, `8x8grid`, ...).
    pub fn key(self) -> &'static str {
        match self {
            Self::ElevenToOne => "11to1",
            Self::ThirteenToSeven => "13to7",
            Self::Grid8x8 => "8x8grid",
            Self::Grid5x5 => "5x5grid",
            Self::RadialLotus => "radial-lotus",
            Self::Grid7x7 => "7x7grid",
        }
    }

    /// Parse a key, degrading to the default grid for anything unknown.
    pub fn parse_lenient(key: &str) -> Self {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(key))
            .unwrap_or_else(|| {
                tracing::warn!(preset = key, "unknown preset, using 7x7grid");
                Self::default()
            })
    }
}

impl From<String> for Preset {
    fn from(value: String) -> Self {
        Self::parse_lenient(&value)
    }
}

impl From<Preset> for String {
    fn from(value: Preset) -> Self {
        value.key().to_string()
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Light or dark presentation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// White container, maroon ink.
    #[default]
    Light,
    /// Slate container, gold ink.
    Dark,
}

/// Palette family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    /// One theme-dependent gradient shared by every path.
    #[default]
    Traditional,
    /// Four gradients cycled by path order.
    Modern,
    /// One gradient from user colors.
    Custom,
}

/// Random control-point displacement for the modern and kambi connectors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Jitter {
    /// No displacement. Every run is reproducible.
    #[default]
    Off,
    /// Displacement drawn from a generator seeded with this value.
    Seeded(u64),
    /// Displacement drawn from an OS-seeded generator.
    Entropy,
}

/// Sole input of a generation run.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationParameters {
    pub size: CanvasSize,
    /// 1..=10, clamped on deserialization and by [`GenerationParameters::normalized`].
    #[serde(deserialize_with = "clamped_complexity")]
    pub complexity: u8,
    pub style: Style,
    pub preset: Preset,
    pub theme: Theme,
    pub show_dots: bool,
    pub palette_type: PaletteType,
    /// Ordered color strings, read only for [`PaletteType::Custom`].
    pub custom_colors: Vec<String>,
    pub animation_enabled: bool,
    /// Motif key (`flower`, `star`, `festival`, `abstract`).
    pub suggestion: Option<String>,
    pub jitter: Jitter,
}

// Any JSON number is accepted and pulled into range.
fn clamped_complexity<'de, D: serde::Deserializer<'de>>(de: D) -> Result<u8, D::Error> {
    let raw = <f64 as serde::Deserialize>::deserialize(de)?;
    if raw.is_nan() {
        return Ok(GenerationParameters::default().complexity);
    }
    Ok(raw
        .round()
        .clamp(f64::from(MIN_COMPLEXITY), f64::from(MAX_COMPLEXITY)) as u8)
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            size: CanvasSize::Medium,
            complexity: 5,
            style: Style::Traditional,
            preset: Preset::Grid7x7,
            theme: Theme::Light,
            show_dots: true,
            palette_type: PaletteType::Traditional,
            custom_colors: Vec::new(),
            animation_enabled: false,
            suggestion: None,
            jitter: Jitter::Off,
        }
    }
}

impl GenerationParameters {
    /// Canvas selected by `size`.
    pub fn canvas(&self) -> Canvas {
        self.size.canvas()
    }

    /// Copy with complexity clamped into range and a blank suggestion dropped.
    pub fn normalized(&self) -> Self {
        let mut out = self.clone();
        out.complexity = self.complexity.clamp(MIN_COMPLEXITY, MAX_COMPLEXITY);
        out.suggestion = self
            .suggestion
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        out
    }

    /// `kolam-{preset}-{complexity}-{style}` (no extension).
    pub fn file_stem(&self) -> String {
        let p = self.normalized();
        format!("kolam-{}-{}-{}", p.preset.key(), p.complexity, p.style.key())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/model.rs"]
mod tests;
