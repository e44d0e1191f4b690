use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::KolamResult;

pub const SVG_MIME: &str = "image/svg+xml";
pub const WEBM_MIME: &str = "video/webm";

/// A finished export ready to be offered as a download or written to disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Write into `dir` under `file_name`, returning the full path.
    pub fn write_to(&self, dir: &Path) -> KolamResult<PathBuf> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory '{}'", dir.display()))?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.bytes)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        tracing::info!(path = %path.display(), bytes = self.bytes.len(), "export written");
        Ok(path)
    }
}
