use dioxus::prelude::*;
use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiConfig {
    #[serde(rename = "apiBaseUrl", default = "default_base_url")]
    pub api_base_url: String,
    #[serde(rename = "apiKey", default)]
    pub api_key: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_base_url(),
            api_key: None,
        }
    }
}

pub fn use_api_config() -> Resource<ApiConfig> {
    use_resource(|| async move { load_api_config().await })
}

#[cfg(target_arch = "wasm32")]
async fn load_api_config() -> ApiConfig {
    match fetch_config_from("/config.json").await {
        Ok(config) => config,
        Err(first) => match fetch_config_from("/assets/config.json").await {
            Ok(config) => config,
            Err(second) => {
                tracing::debug!("config load failed ({first}; {second}), using defaults");
                ApiConfig::default()
            }
        },
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_config_from(path: &str) -> Result<ApiConfig, String> {
    let response = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|err| format!("config fetch failed: {err}"))?;
    if !response.ok() {
        return Err(format!("config fetch failed: status {}", response.status()));
    }
    response
        .json::<ApiConfig>()
        .await
        .map_err(|err| format!("config decode failed: {err}"))
}

#[cfg(not(target_arch = "wasm32"))]
async fn load_api_config() -> ApiConfig {
    // The key is re-read from the environment on every call-time lookup; this
    // only seeds the context value used by the UI shell.
    ApiConfig {
        api_base_url: std::env::var("API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
        api_key: std::env::var("API_KEY").ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: ApiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn runtime_file_overrides_defaults() {
        let config: ApiConfig = serde_json::from_str(
            r#"{"apiBaseUrl":"https://proxy.meridian.dev","apiKey":"k-123"}"#,
        )
        .unwrap();
        assert_eq!(config.api_base_url, "https://proxy.meridian.dev");
        assert_eq!(config.api_key.as_deref(), Some("k-123"));
    }
}
