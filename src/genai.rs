use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use gloo_net::http::Request;
use serde_json::json;
use std::fmt;

use crate::config::ApiConfig;

pub const TEXT_MODEL: &str = "gemini-2.5-flash";
pub const IMAGE_MODEL: &str = "imagen-4.0-generate-001";
pub const VIDEO_MODEL: &str = "veo-2.0-generate-001";

#[derive(Clone, Debug, PartialEq)]
pub enum GenaiError {
    MissingKey,
    Network(String),
    Http { status: u16, body: String },
    Decode(String),
}

impl GenaiError {
    pub fn is_quota(&self) -> bool {
        match self {
            GenaiError::Http { status: 429, .. } => true,
            GenaiError::Http { body, .. } => body.contains("RESOURCE_EXHAUSTED"),
            _ => false,
        }
    }
}

impl fmt::Display for GenaiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenaiError::MissingKey => write!(f, "api key not configured"),
            GenaiError::Network(message) => write!(f, "request failed: {message}"),
            GenaiError::Http { status, .. } => write!(f, "http {status}"),
            GenaiError::Decode(message) => write!(f, "decode failed: {message}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum VideoPoll {
    Pending,
    Done { uri: String },
}

fn require_key(config: &ApiConfig) -> Result<String, GenaiError> {
    match &config.api_key {
        Some(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => Err(GenaiError::MissingKey),
    }
}

pub fn model_url(config: &ApiConfig, model: &str, action: &str, key: &str) -> String {
    format!(
        "{}/v1beta/models/{}:{}?key={}",
        config.api_base_url.trim_end_matches('/'),
        model,
        action,
        urlencoding::encode(key)
    )
}

fn operation_url(config: &ApiConfig, operation: &str, key: &str) -> String {
    format!(
        "{}/v1beta/{}?key={}",
        config.api_base_url.trim_end_matches('/'),
        operation.trim_start_matches('/'),
        urlencoding::encode(key)
    )
}

pub fn text_request_body(prompt: &str) -> serde_json::Value {
    json!({
        "contents": [ { "parts": [ { "text": prompt } ] } ]
    })
}

pub fn structured_request_body(prompt: &str, schema: &serde_json::Value) -> serde_json::Value {
    json!({
        "contents": [ { "parts": [ { "text": prompt } ] } ],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": schema,
        }
    })
}

pub fn image_request_body(prompt: &str, aspect_ratio: &str, mime: &str) -> serde_json::Value {
    json!({
        "instances": [ { "prompt": prompt } ],
        "parameters": {
            "sampleCount": 1,
            "aspectRatio": aspect_ratio,
            "outputMimeType": mime,
        }
    })
}

pub fn video_request_body(prompt: &str) -> serde_json::Value {
    json!({
        "instances": [ { "prompt": prompt } ],
        "parameters": { "sampleCount": 1 }
    })
}

pub fn candidate_text(value: &serde_json::Value) -> Result<String, GenaiError> {
    value["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| GenaiError::Decode("response missing candidate text".to_string()))
}

pub fn prediction_bytes(value: &serde_json::Value) -> Result<String, GenaiError> {
    let encoded = value["predictions"][0]["bytesBase64Encoded"]
        .as_str()
        .ok_or_else(|| GenaiError::Decode("response missing image bytes".to_string()))?;
    BASE64
        .decode(encoded)
        .map_err(|err| GenaiError::Decode(format!("image bytes: {err}")))?;
    Ok(encoded.to_string())
}

pub fn operation_name(value: &serde_json::Value) -> Result<String, GenaiError> {
    value["name"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| GenaiError::Decode("response missing operation name".to_string()))
}

pub fn poll_outcome(value: &serde_json::Value) -> Result<VideoPoll, GenaiError> {
    if let Some(error) = value.get("error") {
        let status = error["code"].as_u64().unwrap_or(0) as u16;
        let body = format!(
            "{} {}",
            error["status"].as_str().unwrap_or_default(),
            error["message"].as_str().unwrap_or_default()
        );
        return Err(GenaiError::Http { status, body });
    }
    if !value["done"].as_bool().unwrap_or(false) {
        return Ok(VideoPoll::Pending);
    }
    value["response"]["generateVideoResponse"]["generatedSamples"][0]["video"]["uri"]
        .as_str()
        .map(|uri| VideoPoll::Done {
            uri: uri.to_string(),
        })
        .ok_or_else(|| GenaiError::Decode("video operation missing download uri".to_string()))
}

pub fn signed_download_url(uri: &str, key: &str) -> String {
    let separator = if uri.contains('?') { '&' } else { '?' };
    format!("{uri}{separator}key={}", urlencoding::encode(key))
}

async fn post_json(url: &str, body: &serde_json::Value) -> Result<serde_json::Value, GenaiError> {
    let response = Request::post(url)
        .header("Content-Type", "application/json")
        .body(body.to_string())
        .map_err(|err| GenaiError::Network(format!("request build failed: {err}")))?
        .send()
        .await
        .map_err(|err| GenaiError::Network(format!("{err}")))?;
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(GenaiError::Http { status, body });
    }
    response
        .json::<serde_json::Value>()
        .await
        .map_err(|err| GenaiError::Decode(format!("{err}")))
}

async fn get_json(url: &str) -> Result<serde_json::Value, GenaiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| GenaiError::Network(format!("{err}")))?;
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(GenaiError::Http { status, body });
    }
    response
        .json::<serde_json::Value>()
        .await
        .map_err(|err| GenaiError::Decode(format!("{err}")))
}

pub async fn generate_text(config: &ApiConfig, prompt: &str) -> Result<String, GenaiError> {
    let key = require_key(config)?;
    let url = model_url(config, TEXT_MODEL, "generateContent", &key);
    let value = post_json(&url, &text_request_body(prompt)).await?;
    candidate_text(&value)
}

pub async fn generate_structured(
    config: &ApiConfig,
    prompt: &str,
    schema: &serde_json::Value,
) -> Result<serde_json::Value, GenaiError> {
    let key = require_key(config)?;
    let url = model_url(config, TEXT_MODEL, "generateContent", &key);
    let value = post_json(&url, &structured_request_body(prompt, schema)).await?;
    let text = candidate_text(&value)?;
    serde_json::from_str(&text).map_err(|err| GenaiError::Decode(format!("structured payload: {err}")))
}

pub async fn generate_image(
    config: &ApiConfig,
    prompt: &str,
    aspect_ratio: &str,
    mime: &str,
) -> Result<String, GenaiError> {
    let key = require_key(config)?;
    let url = model_url(config, IMAGE_MODEL, "predict", &key);
    let value = post_json(&url, &image_request_body(prompt, aspect_ratio, mime)).await?;
    prediction_bytes(&value)
}

pub async fn submit_video_job(config: &ApiConfig, prompt: &str) -> Result<String, GenaiError> {
    let key = require_key(config)?;
    let url = model_url(config, VIDEO_MODEL, "predictLongRunning", &key);
    let value = post_json(&url, &video_request_body(prompt)).await?;
    operation_name(&value)
}

pub async fn poll_video_job(config: &ApiConfig, operation: &str) -> Result<VideoPoll, GenaiError> {
    let key = require_key(config)?;
    let value = get_json(&operation_url(config, operation, &key)).await?;
    poll_outcome(&value)
}

pub async fn download_video(config: &ApiConfig, uri: &str) -> Result<Vec<u8>, GenaiError> {
    let key = require_key(config)?;
    let response = Request::get(&signed_download_url(uri, &key))
        .send()
        .await
        .map_err(|err| GenaiError::Network(format!("{err}")))?;
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(GenaiError::Http { status, body });
    }
    response
        .binary()
        .await
        .map_err(|err| GenaiError::Decode(format!("{err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn config_with_key(key: &str) -> ApiConfig {
        ApiConfig {
            api_base_url: "https://generativelanguage.googleapis.com/".to_string(),
            api_key: Some(key.to_string()),
        }
    }

    #[test]
    fn missing_key_is_an_ordinary_failure() {
        let config = ApiConfig {
            api_key: None,
            ..ApiConfig::default()
        };
        assert_eq!(require_key(&config), Err(GenaiError::MissingKey));
        let blank = ApiConfig {
            api_key: Some("   ".to_string()),
            ..ApiConfig::default()
        };
        assert_eq!(require_key(&blank), Err(GenaiError::MissingKey));
    }

    #[test]
    fn model_url_encodes_the_credential() {
        let config = config_with_key("k");
        let url = model_url(&config, TEXT_MODEL, "generateContent", "a b+c");
        assert_eq!(
            url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent?key=a%20b%2Bc"
        );
    }

    #[test]
    fn text_body_carries_the_prompt() {
        let body = text_request_body("hello");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn structured_body_constrains_the_output() {
        let schema = json!({"type": "object"});
        let body = structured_request_body("p", &schema);
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(body["generationConfig"]["responseSchema"], schema);
    }

    #[test]
    fn image_body_requests_one_sample() {
        let body = image_request_body("an avatar", "1:1", "image/png");
        assert_eq!(body["instances"][0]["prompt"], "an avatar");
        assert_eq!(body["parameters"]["sampleCount"], 1);
        assert_eq!(body["parameters"]["aspectRatio"], "1:1");
    }

    #[test]
    fn candidate_text_reads_the_first_part() {
        let value = json!({
            "candidates": [
                { "content": { "parts": [ { "text": "answer" } ] } }
            ]
        });
        assert_eq!(candidate_text(&value).unwrap(), "answer");
    }

    #[test]
    fn candidate_text_rejects_empty_responses() {
        let value = json!({ "candidates": [] });
        assert!(matches!(
            candidate_text(&value),
            Err(GenaiError::Decode(_))
        ));
    }

    #[test]
    fn prediction_bytes_validates_the_encoding() {
        let value = json!({
            "predictions": [ { "bytesBase64Encoded": "aGVsbG8=" } ]
        });
        assert_eq!(prediction_bytes(&value).unwrap(), "aGVsbG8=");

        let invalid = json!({
            "predictions": [ { "bytesBase64Encoded": "not base64!!" } ]
        });
        assert!(matches!(
            prediction_bytes(&invalid),
            Err(GenaiError::Decode(_))
        ));
    }

    #[test]
    fn poll_outcome_distinguishes_pending_and_done() {
        let pending = json!({ "name": "operations/abc", "done": false });
        assert_eq!(poll_outcome(&pending).unwrap(), VideoPoll::Pending);

        let done = json!({
            "name": "operations/abc",
            "done": true,
            "response": {
                "generateVideoResponse": {
                    "generatedSamples": [ { "video": { "uri": "https://cdn/video" } } ]
                }
            }
        });
        assert_eq!(
            poll_outcome(&done).unwrap(),
            VideoPoll::Done {
                uri: "https://cdn/video".to_string()
            }
        );
    }

    #[test]
    fn poll_outcome_surfaces_operation_errors() {
        let failed = json!({
            "name": "operations/abc",
            "error": { "code": 429, "status": "RESOURCE_EXHAUSTED", "message": "quota" }
        });
        let err = poll_outcome(&failed).unwrap_err();
        assert!(err.is_quota());
    }

    #[test]
    fn done_without_uri_is_malformed() {
        let done = json!({ "name": "operations/abc", "done": true, "response": {} });
        assert!(matches!(
            poll_outcome(&done),
            Err(GenaiError::Decode(_))
        ));
    }

    #[test]
    fn quota_classification_covers_both_signals() {
        assert!(GenaiError::Http {
            status: 429,
            body: String::new()
        }
        .is_quota());
        assert!(GenaiError::Http {
            status: 500,
            body: "RESOURCE_EXHAUSTED: slow down".to_string()
        }
        .is_quota());
        assert!(!GenaiError::Http {
            status: 500,
            body: "internal".to_string()
        }
        .is_quota());
        assert!(!GenaiError::MissingKey.is_quota());
    }

    #[test]
    fn signed_download_url_appends_the_key() {
        assert_eq!(
            signed_download_url("https://cdn/video?x=1", "k"),
            "https://cdn/video?x=1&key=k"
        );
        assert_eq!(
            signed_download_url("https://cdn/video", "k"),
            "https://cdn/video?key=k"
        );
    }
}
