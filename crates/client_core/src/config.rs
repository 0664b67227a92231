use std::{collections::HashMap, fs, path::Path, time::Duration};

use anyhow::Context;

pub const DEFAULT_CONFIG_FILE: &str = "crud_panel.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub notification_auto_hide_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".into(),
            request_timeout_secs: 10,
            notification_auto_hide_ms: 6000,
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Values beyond what `chrono` can represent saturate at its maximum.
    pub fn notification_auto_hide(&self) -> chrono::Duration {
        i64::try_from(self.notification_auto_hide_ms)
            .ok()
            .and_then(chrono::Duration::try_milliseconds)
            .unwrap_or_else(chrono::Duration::max_value)
    }
}

/// Defaults, then the TOML file, then environment variables.
///
/// An explicit `config_path` must exist; the default file is optional.
pub fn load_settings(config_path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?;
            apply_file_overrides(&mut settings, &raw)
                .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
        }
        None => {
            if let Ok(raw) = fs::read_to_string(DEFAULT_CONFIG_FILE) {
                apply_file_overrides(&mut settings, &raw).with_context(|| {
                    format!("failed to parse config file '{DEFAULT_CONFIG_FILE}'")
                })?;
            }
        }
    }

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

pub(crate) fn apply_file_overrides(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg = toml::from_str::<HashMap<String, toml::Value>>(raw)?;

    if let Some(v) = file_cfg.get("api_base_url").and_then(toml::Value::as_str) {
        settings.api_base_url = v.to_string();
    }
    if let Some(v) = file_cfg
        .get("request_timeout_secs")
        .and_then(toml::Value::as_integer)
    {
        settings.request_timeout_secs = u64::try_from(v).context("request_timeout_secs")?;
    }
    if let Some(v) = file_cfg
        .get("notification_auto_hide_ms")
        .and_then(toml::Value::as_integer)
    {
        settings.notification_auto_hide_ms =
            parse_auto_hide_ms(v).context("notification_auto_hide_ms")?;
    }

    Ok(())
}

/// Auto-hide delays must be non-negative and fit a signed millisecond count.
fn parse_auto_hide_ms(raw: i64) -> anyhow::Result<u64> {
    Ok(u64::try_from(raw)?)
}

pub(crate) fn apply_env_overrides(
    settings: &mut Settings,
    lookup: impl Fn(&str) -> Option<String>,
) {
    if let Some(v) = lookup("API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = lookup("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }

    if let Some(v) = lookup("APP__REQUEST_TIMEOUT_SECS") {
        match v.parse::<u64>() {
            Ok(parsed) => settings.request_timeout_secs = parsed,
            Err(_) => tracing::warn!(value = %v, "ignoring invalid APP__REQUEST_TIMEOUT_SECS"),
        }
    }

    if let Some(v) = lookup("APP__NOTIFICATION_AUTO_HIDE_MS") {
        match v.parse::<i64>().map_err(anyhow::Error::from).and_then(parse_auto_hide_ms) {
            Ok(parsed) => settings.notification_auto_hide_ms = parsed,
            Err(err) => {
                tracing::warn!(value = %v, %err, "ignoring invalid APP__NOTIFICATION_AUTO_HIDE_MS")
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
