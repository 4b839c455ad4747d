use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Booklet conversion configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct BookletOptions {
    pub mode: BookletMode,

    /// Gap on each side of the fold, in points
    pub inner_margin_pt: f32,

    /// Fixed scale for source pages; fit-to-half when unset
    pub scale: Option<f32>,

    /// Flate-compress output streams before writing
    pub compress_streams: bool,
}

impl Default for BookletOptions {
    fn default() -> Self {
        Self {
            mode: BookletMode::SheetWise,
            inner_margin_pt: 0.0,
            scale: None,
            compress_streams: false,
        }
    }
}

impl BookletOptions {
    pub fn with_mode(mode: BookletMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| BookletError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BookletError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Check values that do not depend on the source page size
    pub fn validate(&self) -> Result<()> {
        if !self.inner_margin_pt.is_finite() || self.inner_margin_pt < 0.0 {
            return Err(BookletError::Geometry(format!(
                "inner margin must be zero or positive, got {}",
                self.inner_margin_pt
            )));
        }

        if let Some(scale) = self.scale {
            if !scale.is_finite() || scale <= 0.0 {
                return Err(BookletError::Geometry(format!(
                    "scale must be a positive number, got {}",
                    scale
                )));
            }
        }

        Ok(())
    }
}
