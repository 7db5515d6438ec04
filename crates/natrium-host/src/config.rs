//! Host module configuration. Plain JSON, every field defaulted.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::HostError;

const CONFIG_FILE: &str = "natrium.json";

/// Settings for a [`Module`](crate::Module).
///
/// Loaded from `{dir}/natrium.json`; missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HostConfig {
    /// Name the module is registered under in the host.
    #[serde(default = "default_module_name")]
    pub module_name: String,

    /// Emit a `debug` event (function and error kind only) for each failed call.
    #[serde(default = "default_log_failures")]
    pub log_failures: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            module_name: default_module_name(),
            log_failures: default_log_failures(),
        }
    }
}

fn default_module_name() -> String {
    "natrium".into()
}
const fn default_log_failures() -> bool {
    true
}

impl HostConfig {
    /// Load from `{dir}/natrium.json`.
    ///
    /// Returns [`Default::default()`] when the file is missing or is not
    /// valid JSON.
    #[must_use]
    pub fn load(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE);
        fs::read_to_string(&path).map_or_else(
            |_| Self::default(),
            |contents| {
                serde_json::from_str(&contents).unwrap_or_else(|e| {
                    tracing::warn!(path = %path.display(), "ignoring corrupt config: {e}");
                    Self::default()
                })
            },
        )
    }

    /// Write to `{dir}/natrium.json` via a temporary file and rename.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::ConfigFormat`] if serialization fails or
    /// [`HostError::ConfigIo`] if the write or rename fails.
    pub fn save(&self, dir: &Path) -> Result<(), HostError> {
        let path = dir.join(CONFIG_FILE);
        let tmp = dir.join(format!("{CONFIG_FILE}.tmp"));
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}
