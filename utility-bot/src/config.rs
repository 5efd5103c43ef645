//! Bot config loaded from env: BOT_TOKEN (or BOT_API_TOKEN), TELEGRAM_API_URL (or TELOXIDE_API_URL),
//! LOG_FILE, SESSION_IDLE_TTL_SECS.

use anyhow::Result;
use std::env;
use std::time::Duration;

pub const DEFAULT_LOG_FILE: &str = "logs/utility-bot.log";

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub bot_token: String,
    /// Custom Bot API base URL (e.g. a local Bot API server or a mock in tests).
    pub telegram_api_url: Option<String>,
    pub log_file: String,
    /// When set, sessions idle this long are pruned in the background.
    pub session_idle_ttl_secs: Option<u64>,
}

impl BotConfig {
    /// Loads from env. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN")
                .or_else(|_| env::var("BOT_API_TOKEN"))
                .map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let session_idle_ttl_secs = match env::var("SESSION_IDLE_TTL_SECS") {
            Ok(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                anyhow::anyhow!("SESSION_IDLE_TTL_SECS is not a number: {} ({})", raw, e)
            })?),
            Err(_) => None,
        };

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            session_idle_ttl_secs,
        })
    }

    /// Builds config with the given token; everything else default.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            log_file: DEFAULT_LOG_FILE.to_string(),
            session_idle_ttl_secs: None,
        }
    }

    /// Fails fast on an empty token, an unparsable API URL, or a zero TTL.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if self.session_idle_ttl_secs == Some(0) {
            anyhow::bail!("SESSION_IDLE_TTL_SECS must be positive");
        }
        Ok(())
    }

    pub fn session_idle_ttl(&self) -> Option<Duration> {
        self.session_idle_ttl_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "BOT_TOKEN",
            "BOT_API_TOKEN",
            "TELEGRAM_API_URL",
            "TELOXIDE_API_URL",
            "LOG_FILE",
            "SESSION_IDLE_TTL_SECS",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        clear_env();
        env::set_var("BOT_TOKEN", "test_token");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.bot_token, "test_token");
        assert!(config.telegram_api_url.is_none());
        assert_eq!(config.log_file, DEFAULT_LOG_FILE);
        assert!(config.session_idle_ttl().is_none());
        assert!(config.validate().is_ok());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_config_with_custom_values() {
        clear_env();
        env::set_var("BOT_API_TOKEN", "legacy_token");
        env::set_var("TELOXIDE_API_URL", "http://127.0.0.1:8081");
        env::set_var("LOG_FILE", "/tmp/bot.log");
        env::set_var("SESSION_IDLE_TTL_SECS", "600");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.bot_token, "legacy_token");
        assert_eq!(config.telegram_api_url.as_deref(), Some("http://127.0.0.1:8081"));
        assert_eq!(config.log_file, "/tmp/bot.log");
        assert_eq!(config.session_idle_ttl(), Some(Duration::from_secs(600)));
        assert!(config.validate().is_ok());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_config_with_override_token() {
        clear_env();
        env::set_var("BOT_TOKEN", "env_token");

        let config = BotConfig::load(Some("override_token".to_string())).unwrap();

        assert_eq!(config.bot_token, "override_token");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_config_missing_token() {
        clear_env();
        assert!(BotConfig::load(None).is_err());
    }

    #[test]
    #[serial]
    fn test_load_config_bad_ttl() {
        clear_env();
        env::set_var("BOT_TOKEN", "t");
        env::set_var("SESSION_IDLE_TTL_SECS", "soon");
        assert!(BotConfig::load(None).is_err());
        clear_env();
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = BotConfig::with_token("t".to_string());
        config.telegram_api_url = Some("not-a-valid-url".to_string());
        assert!(config.validate().is_err());

        let mut config = BotConfig::with_token("t".to_string());
        config.session_idle_ttl_secs = Some(0);
        assert!(config.validate().is_err());

        assert!(BotConfig::with_token("  ".to_string()).validate().is_err());
    }
}
