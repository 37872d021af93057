/// Bundled config for builds without a `.env` (web, packaged desktop)
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const API_BASE_VAR: &str = "WIKI_API_BASE";
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_base(std::env::var(API_BASE_VAR).ok())
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let base = pairs
            .into_iter()
            .find(|(key, _)| key.as_ref() == API_BASE_VAR)
            .map(|(_, value)| value.into());
        Self::from_base(base)
    }

    fn from_base(raw: Option<String>) -> Self {
        match raw {
            Some(raw) => match normalize_base(&raw) {
                Some(api_base) => Self { api_base },
                None => {
                    tracing::warn!(value = %raw, "ignoring malformed {API_BASE_VAR}");
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }
}

/// Trims whitespace and trailing slashes; rejects anything that is not an
/// http(s) URL.
fn normalize_base(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_scheme = trimmed.starts_with("http://") || trimmed.starts_with("https://");
    if !has_scheme {
        return None;
    }
    Some(trimmed.to_string())
}

/// Parses `KEY=VALUE` lines, skipping blanks and `#` comments.
pub fn parse_env_lines(text: &str) -> Vec<(String, String)> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load() -> AppConfig {
    // First try to load from .env file (desktop dev)
    if dotenvy::dotenv().is_err() {
        load_bundled_config();
    }
    AppConfig::from_env()
}

#[cfg(target_arch = "wasm32")]
pub fn load() -> AppConfig {
    AppConfig::from_pairs(parse_env_lines(BUNDLED_CONFIG))
}

#[cfg(not(target_arch = "wasm32"))]
fn load_bundled_config() {
    for (key, value) in parse_env_lines(BUNDLED_CONFIG) {
        // Only set if not already set (allow env override)
        if std::env::var(&key).is_err() {
            // SAFETY: called from `main` before the UI runtime spawns any threads
            unsafe {
                std::env::set_var(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_env_lines() {
        let text = "# comment\n\nWIKI_API_BASE = http://api.local:8080/\nbroken line\n";
        let pairs = parse_env_lines(text);
        assert_eq!(
            pairs,
            vec![(
                "WIKI_API_BASE".to_string(),
                "http://api.local:8080/".to_string()
            )]
        );
    }

    #[test]
    fn base_is_normalized() {
        let config = AppConfig::from_pairs([(API_BASE_VAR, "https://wiki.example.com//")]);
        assert_eq!(config.api_base, "https://wiki.example.com");
    }

    #[test]
    fn malformed_base_falls_back_to_default() {
        let config = AppConfig::from_pairs([(API_BASE_VAR, "localhost:5000")]);
        assert_eq!(config, AppConfig::default());

        let config = AppConfig::from_pairs([(API_BASE_VAR, "http://")]);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn missing_key_uses_default() {
        let config = AppConfig::from_pairs(Vec::<(String, String)>::new());
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn bundled_config_is_well_formed() {
        let config = AppConfig::from_pairs(parse_env_lines(BUNDLED_CONFIG));
        assert!(config.api_base.starts_with("http"));
    }
}
