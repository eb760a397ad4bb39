use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const SETTINGS_FILE: &str = "settings.json";

const ENV_REPORT_DIR: &str = "HISAR_REPORT_DIR";
const ENV_CHAT_DELAY_MS: &str = "HISAR_CHAT_DELAY_MS";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PortalSettings {
    pub hospital_name: String,
    pub chat_reply_delay_ms: u64,
    pub notification_ttl_ms: u64,
    pub report_dir: Option<PathBuf>,
    pub treatment_cost: f64, // TRY, used for the insurance estimate
}

impl Default for PortalSettings {
    fn default() -> Self {
        Self {
            hospital_name: "Hisar Hospital".to_string(),
            chat_reply_delay_ms: 1000,
            notification_ttl_ms: 3000,
            report_dir: None,
            treatment_cost: 52_500.0,
        }
    }
}

impl PortalSettings {
    pub fn chat_delay(&self) -> Duration {
        Duration::from_millis(self.chat_reply_delay_ms)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }

    /// Where the BMI report lands: configured dir, else Downloads, else temp
    pub fn resolved_report_dir(&self) -> PathBuf {
        self.report_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| std::env::temp_dir().join("hisar-portal"))
    }

    /// Env vars take priority over the file
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup(ENV_REPORT_DIR) {
            if !dir.is_empty() {
                self.report_dir = Some(PathBuf::from(dir));
            }
        }
        if let Some(ms) = lookup(ENV_CHAT_DELAY_MS) {
            match ms.parse() {
                Ok(ms) => self.chat_reply_delay_ms = ms,
                Err(e) => log::warn!("Ignoring {}={:?}: {}", ENV_CHAT_DELAY_MS, ms, e),
            }
        }
    }
}

/// Load settings from `path`, or defaults if the file does not exist
pub fn load(path: &Path) -> Result<PortalSettings> {
    let mut settings = if path.exists() {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings {}", path.display()))?;
        serde_json::from_str(&data).context("Failed to parse settings")?
    } else {
        PortalSettings::default()
    };
    settings.apply_env();
    Ok(settings)
}

pub fn save(path: &Path, settings: &PortalSettings) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).context("Failed to create config dir")?;
    }
    let data = serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;
    std::fs::write(path, data)
        .with_context(|| format!("Failed to write settings {}", path.display()))?;
    Ok(())
}
