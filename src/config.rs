// src/config.rs
use std::net::SocketAddr;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not valid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Credentials for the hosted backend properties are synced from.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub url: Url,
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database_path: String,
    pub max_workers: usize,
    /// Used to build absolute share links.
    pub public_base_url: Url,
    pub page_size: usize,
    pub backend: Option<BackendConfig>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = parse_var("BIND_ADDR", get("BIND_ADDR"), "127.0.0.1:3000")?;
        let max_workers = parse_var("MAX_WORKERS", get("MAX_WORKERS"), "8")?;
        let page_size: usize = parse_var("PAGE_SIZE", get("PAGE_SIZE"), "12")?;
        if page_size == 0 {
            return Err(ConfigError::Invalid {
                var: "PAGE_SIZE",
                reason: "must be at least 1".into(),
            });
        }

        let public_base_url = parse_url(
            "PUBLIC_BASE_URL",
            &get("PUBLIC_BASE_URL").unwrap_or_else(|| "http://127.0.0.1:3000".into()),
        )?;

        let backend = match (get("BACKEND_URL"), get("BACKEND_API_KEY")) {
            (Some(url), Some(api_key)) => Some(BackendConfig {
                url: parse_url("BACKEND_URL", &url)?,
                api_key,
            }),
            _ => None,
        };

        Ok(AppConfig {
            bind_addr,
            database_path: get("DATABASE_PATH").unwrap_or_else(|| "realty_crm.sqlite3".into()),
            max_workers,
            public_base_url,
            page_size,
            backend,
        })
    }
}

fn parse_var<T>(var: &'static str, value: Option<String>, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = value.unwrap_or_else(|| default.to_string());
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        reason: format!("{raw:?}: {e}"),
    })
}

fn parse_url(var: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|e| ConfigError::Invalid {
        var,
        reason: format!("{raw:?}: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(cfg.max_workers, 8);
        assert_eq!(cfg.page_size, 12);
        assert_eq!(cfg.database_path, "realty_crm.sqlite3");
        assert!(cfg.backend.is_none());
    }

    #[test]
    fn backend_needs_url_and_key() {
        let cfg = config(&[("BACKEND_URL", "https://example.supabase.co")]).unwrap();
        assert!(cfg.backend.is_none());

        let cfg = config(&[
            ("BACKEND_URL", "https://example.supabase.co"),
            ("BACKEND_API_KEY", "anon-key"),
        ])
        .unwrap();
        assert_eq!(cfg.backend.unwrap().api_key, "anon-key");
    }

    #[test]
    fn invalid_values_name_the_variable() {
        let err = config(&[("MAX_WORKERS", "many")]).unwrap_err();
        assert!(err.to_string().contains("MAX_WORKERS"));

        assert!(config(&[("PAGE_SIZE", "0")]).is_err());
        assert!(config(&[("PUBLIC_BASE_URL", "not a url")]).is_err());
    }
}
