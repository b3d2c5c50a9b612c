use std::{env, fs, path::Path};

use crate::{errors::Error, Result};

/// Typed configuration for the resolver service.
///
/// All values come from the environment (with `.env` support); the handler
/// receives this struct at construction time and never reads env vars ad hoc.
#[derive(Clone, Debug)]
pub struct Config {
    /// Telegram Bot API access token.
    pub bot_token: String,
    /// Photo URL returned when an entity has no profile/chat photo.
    pub fallback_photo_url: String,

    // HTTP server
    pub bind_addr: String,
    pub port: u16,
}

pub const DEFAULT_FALLBACK_PHOTO_URL: &str = "https://example.com/default.jpg";

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let bot_token = env_str("BOT_TOKEN").unwrap_or_default();
        if bot_token.trim().is_empty() {
            return Err(Error::Config(
                "BOT_TOKEN environment variable is required".to_string(),
            ));
        }

        let fallback_photo_url = env_str("PROFILE_ERROR_URL")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_FALLBACK_PHOTO_URL.to_string());

        let bind_addr = env_str("BIND_ADDR")
            .and_then(non_empty)
            .unwrap_or_else(|| "0.0.0.0".to_string());
        let port = env_u16("PORT").unwrap_or(8080);

        Ok(Self {
            bot_token,
            fallback_photo_url,
            bind_addr,
            port,
        })
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn env_u16(key: &str) -> Option<u16> {
    env_str(key).and_then(|s| s.trim().parse::<u16>().ok())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
