use crate::constants::{
    DEFAULT_INTERMEDIATE_SUFFIX, DEFAULT_MARKER_TEXT, DEFAULT_OUTPUT_SUFFIX, mm_to_pt,
};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Booklet generation configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BookletOptions {
    // Output sheet
    pub paper_size: PaperSize,
    pub orientation: Orientation,

    // Padding
    pub marker_text: String,

    // File naming
    pub intermediate_suffix: String,
    pub output_suffix: String,
}

impl Default for BookletOptions {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
            marker_text: DEFAULT_MARKER_TEXT.to_string(),
            intermediate_suffix: DEFAULT_INTERMEDIATE_SUFFIX.to_string(),
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
        }
    }
}

impl BookletOptions {
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

    /// Output sheet size in points (width, height)
    pub fn sheet_size_pt(&self) -> (f32, f32) {
        let (w, h) = self.paper_size.dimensions_with_orientation(self.orientation);
        (mm_to_pt(w), mm_to_pt(h))
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let (width, height) = self.paper_size.dimensions_mm();
        if !(width > 0.0 && height > 0.0) {
            return Err(BookletError::Config(format!(
                "Paper dimensions must be positive, got {}mm x {}mm",
                width, height
            )));
        }

        if self.marker_text.trim().is_empty() {
            return Err(BookletError::Config(
                "Marker text must not be empty".to_string(),
            ));
        }

        if self.intermediate_suffix.is_empty() || self.output_suffix.is_empty() {
            return Err(BookletError::Config(
                "File suffixes must not be empty".to_string(),
            ));
        }

        if self.intermediate_suffix == self.output_suffix {
            return Err(BookletError::Config(format!(
                "Intermediate and output suffixes must differ (both are {:?})",
                self.output_suffix
            )));
        }

        Ok(())
    }
}
