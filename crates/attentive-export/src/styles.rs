use serde::{Deserialize, Serialize};

/// Fonts and sizes used when a report is written to DOCX.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    pub body_font: String,
    pub heading_font: String,
    /// Point sizes.
    pub body_size: usize,
    pub heading1_size: usize,
    pub heading2_size: usize,
    pub heading3_size: usize,
}

impl DocumentStyles {
    pub fn heading_size(&self, level: u8) -> usize {
        match level {
            1 => self.heading1_size,
            2 => self.heading2_size,
            _ => self.heading3_size,
        }
    }
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            heading_font: "Calibri".to_string(),
            body_size: 11,
            heading1_size: 18,
            heading2_size: 14,
            heading3_size: 12,
        }
    }
}
