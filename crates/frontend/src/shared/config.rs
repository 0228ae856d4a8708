use super::api_utils::page_origin;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin plus the `/api/feirinha` prefix, without trailing slash
    #[serde(rename = "apiBaseUrl")]
    pub api_base_url: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
# Base URL of the feirinha API (origin + blueprint prefix).
# A value starting with "/" is resolved against the page origin.
apiBaseUrl = "http://localhost:5000/api/feirinha"
"#;

/// Resolve the application configuration once, at startup.
///
/// Order:
/// 1. `FEIRINHA_API_BASE_URL` set when the bundle was built
/// 2. Embedded default config
pub fn load_config() -> anyhow::Result<AppConfig> {
    let mut config: AppConfig = toml::from_str(DEFAULT_CONFIG)?;

    if let Some(url) = option_env!("FEIRINHA_API_BASE_URL") {
        log::info!("Using build-time API base URL: {}", url);
        config.api_base_url = url.to_string();
    }

    config.api_base_url = resolve_base_url(&config.api_base_url, page_origin().as_deref())?;
    log::info!("API base URL: {}", config.api_base_url);
    Ok(config)
}

/// Normalize a configured base URL.
/// Relative values ("/api/feirinha") need the page origin.
pub fn resolve_base_url(raw: &str, origin: Option<&str>) -> anyhow::Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        anyhow::bail!("apiBaseUrl is empty");
    }

    if trimmed.starts_with('/') {
        let origin = origin.ok_or_else(|| {
            anyhow::anyhow!("apiBaseUrl '{}' is relative but the page origin is unknown", trimmed)
        })?;
        return Ok(format!("{}{}", origin.trim_end_matches('/'), trimmed));
    }

    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        anyhow::bail!("apiBaseUrl must start with http:// or https://, got '{}'", trimmed);
    }

    Ok(trimmed.to_string())
}
