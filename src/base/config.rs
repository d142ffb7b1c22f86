//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc, time::Duration};

use serde::Deserialize;

use crate::base::templates;

use super::types::{Locale, Res, Void};

/// Default keyword locales: every supported language.
fn default_locales() -> Vec<Locale> {
    Locale::ALL.to_vec()
}

/// Default crisis-card language.
fn default_display_locale() -> Locale {
    Locale::En
}

/// Default "typing" delay before a reply lands.
fn default_typing_delay_ms() -> u64 {
    1500
}

/// Default emergency contact number.
fn default_emergency_phone() -> String {
    "(555) 123-4567".to_string()
}

/// Default greeting for a new session.
fn default_greeting() -> String {
    templates::GREETING.to_string()
}

/// Configuration for the PsyCare application.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl From<ConfigInner> for Config {
    fn from(inner: ConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ConfigInner {
    /// Languages whose keyword phrases are matched (`LOCALES`, comma separated).
    /// A user may type in any of them, so the phrases are unioned.
    #[serde(default = "default_locales")]
    pub locales: Vec<Locale>,
    /// Language of the crisis card (`DISPLAY_LOCALE`).
    #[serde(default = "default_display_locale")]
    pub display_locale: Locale,
    /// Simulated typing delay in milliseconds (`TYPING_DELAY_MS`).
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,
    /// Number dialed by the crisis card's call action (`EMERGENCY_PHONE`).
    #[serde(default = "default_emergency_phone")]
    pub emergency_phone: String,
    /// Optional custom greeting to override the default (`GREETING`).
    #[serde(default = "default_greeting")]
    pub greeting: String,
}

impl Default for ConfigInner {
    fn default() -> Self {
        Self {
            locales: default_locales(),
            display_locale: default_display_locale(),
            typing_delay_ms: default_typing_delay_ms(),
            emergency_phone: default_emergency_phone(),
            greeting: default_greeting(),
        }
    }
}

impl ConfigInner {
    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }
}

impl Config {
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let env = config::Environment::default()
            .prefix("PSYCARE")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("locales");

        let mut cfg = config::Config::builder().add_source(env);

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        result.validate()?;

        Ok(result)
    }

    pub fn validate(&self) -> Void {
        if self.locales.is_empty() {
            return Err(anyhow::anyhow!("At least one keyword locale must be enabled."));
        }

        if self.typing_delay_ms > 10_000 {
            return Err(anyhow::anyhow!("Typing delay must be at most 10000 ms."));
        }

        if self.emergency_phone.trim().is_empty() {
            return Err(anyhow::anyhow!("Emergency phone number must not be empty."));
        }

        if self.greeting.trim().is_empty() {
            return Err(anyhow::anyhow!("Greeting must not be empty."));
        }

        Ok(())
    }
}
