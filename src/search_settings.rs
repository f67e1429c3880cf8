use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::global_constants;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub base_url: String,
    pub tags: String,
    pub timeout_ms: u64,
    pub max_message_size: usize,
    pub log_target: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            base_url: global_constants::HACKERNEWS_SEARCH_URL.to_string(),
            tags: global_constants::DEFAULT_SEARCH_TAGS.to_string(),
            timeout_ms: global_constants::DEFAULT_SEARCH_TIMEOUT_MS,
            max_message_size: global_constants::MAX_MESSAGE_SIZE,
            log_target: global_constants::DEFAULT_LOG_TARGET.to_string(),
        }
    }
}

impl SearchSettings {
    /// Defaults, then the user's settings file if present, then environment overrides.
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;

        let mut settings = if settings_path.exists() {
            Self::load_from(&settings_path)?
        } else {
            let settings = Self::default();
            log::info!(
                target: settings.log_target.as_str(),
                "{} {}: {:?}",
                global_constants::LOG_TAG_SETTINGS,
                global_constants::MESSAGE_SETTINGS_DEFAULTS,
                settings_path
            );
            settings
        };

        settings.apply_env_overrides(|key| std::env::var(key).ok());
        settings.validate()?;

        log::debug!(
            target: settings.log_target.as_str(),
            "{} {}: {}",
            global_constants::LOG_TAG_SETTINGS,
            global_constants::MESSAGE_SEARCH_URL,
            settings.base_url
        );
        log::debug!(
            target: settings.log_target.as_str(),
            "{} Timeout: {}ms, max message size: {}",
            global_constants::LOG_TAG_SETTINGS,
            settings.timeout_ms,
            settings.max_message_size
        );

        Ok(settings)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let settings: SearchSettings = serde_json::from_str(&contents)?;

        log::info!(
            target: settings.log_target.as_str(),
            "{} {} {:?}",
            global_constants::LOG_TAG_SETTINGS,
            global_constants::MESSAGE_SETTINGS_LOADED,
            path
        );

        Ok(settings)
    }

    /// Unparsable numeric values are ignored so a typo never disables the bot.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = non_empty(lookup(global_constants::ENV_BASE_URL)) {
            self.base_url = base_url;
        }
        if let Some(tags) = non_empty(lookup(global_constants::ENV_TAGS)) {
            self.tags = tags;
        }
        if let Some(timeout_ms) = lookup(global_constants::ENV_TIMEOUT_MS).and_then(|s| s.parse().ok()) {
            self.timeout_ms = timeout_ms;
        }
        if let Some(max_message_size) =
            lookup(global_constants::ENV_MAX_MESSAGE_SIZE).and_then(|s| s.parse().ok())
        {
            self.max_message_size = max_message_size;
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.base_url.trim().is_empty() {
            anyhow::bail!("base_url must not be empty");
        }
        if self.timeout_ms == 0 {
            anyhow::bail!("timeout_ms must be greater than zero");
        }
        if self.max_message_size == 0 {
            anyhow::bail!("max_message_size must be greater than zero");
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::APPLICATION_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
