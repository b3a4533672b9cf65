use std::path::{Path, PathBuf};

use attentive_export::styles::DocumentStyles;
use serde::{Deserialize, Serialize};

use crate::output::ReportFormat;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttentiveConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Used when `--format` is not given.
    #[serde(default)]
    pub default_format: ReportFormat,
    /// Tera template replacing the built-in report layout. Relative paths
    /// resolve against the config file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_template: Option<PathBuf>,
    /// DOCX fonts and sizes. Added in v1.
    #[serde(default)]
    pub styles: DocumentStyles,
}

impl Default for AttentiveConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            default_format: ReportFormat::default(),
            report_template: None,
            styles: DocumentStyles::default(),
        }
    }
}

impl AttentiveConfig {
    pub fn template_path(&self, config_path: &Path) -> Option<PathBuf> {
        let template = self.report_template.as_ref()?;
        if template.is_absolute() {
            return Some(template.clone());
        }
        let base = config_path.parent().unwrap_or_else(|| Path::new("."));
        Some(base.join(template))
    }
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("attentive").join("config.json"))
}

/// Load the config at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> eyre::Result<AttentiveConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AttentiveConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: AttentiveConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update attentive."
        ));
    }

    let obj = json
        .as_object_mut()
        .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;

    // v0 → v1: add styles
    if from_version < 1 {
        let styles = serde_json::to_value(DocumentStyles::default())?;
        obj.entry("styles").or_insert(styles);
        obj.insert("config_version".to_string(), serde_json::Value::from(1u32));
        tracing::info!("migrated config v0 → v1 (added styles)");
    }

    // v1 → v2: `format` renamed to `default_format`, `template` to `report_template`
    if from_version < 2 {
        for (old, new) in [("format", "default_format"), ("template", "report_template")] {
            if let Some(value) = obj.remove(old) {
                obj.entry(new).or_insert(value);
            }
        }
        obj.insert("config_version".to_string(), serde_json::Value::from(2u32));
        tracing::info!("migrated config v1 → v2 (renamed format and template)");
    }

    Ok(json)
}

pub fn save_config(config: &AttentiveConfig, path: &Path) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
