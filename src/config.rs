use std::path::Path;

use anyhow::Context as _;

use crate::export::capture::CaptureSettings;
use crate::foundation::error::{KolamError, KolamResult};
use crate::params::model::GenerationParameters;

/// On-disk configuration: generation parameters plus capture tuning.
///
/// Every field is optional in the file.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KolamConfig {
    pub params: GenerationParameters,
    pub capture: CaptureSettings,
}

impl KolamConfig {
    pub fn load(path: &Path) -> KolamResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> KolamResult<Self> {
        let cfg: Self = serde_json::from_str(text).map_err(|e| KolamError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> KolamResult<()> {
        if self.capture.fps.num == 0 || self.capture.fps.den == 0 {
            return Err(KolamError::validation("capture fps must be non-zero"));
        }
        if self.capture.threads == Some(0) {
            return Err(KolamError::validation("capture threads must be >= 1 when set"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
