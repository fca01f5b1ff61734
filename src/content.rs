use dioxus::prelude::*;
use serde::Deserialize;
use serde_json::json;

use crate::config::ApiConfig;
use crate::genai::{self, GenaiError};

pub const MAX_BATCH: usize = 6;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContentItem {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FallbackItem {
    pub title: &'static str,
    pub description: &'static str,
}

impl FallbackItem {
    pub fn to_item(self) -> ContentItem {
        ContentItem {
            title: self.title.to_string(),
            description: self.description.to_string(),
        }
    }
}

pub fn items_schema(field: &str) -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            field: {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "title": { "type": "string" },
                        "description": { "type": "string" },
                    }
                }
            }
        }
    })
}

pub fn parse_items(payload: &serde_json::Value, field: &str) -> Result<Vec<ContentItem>, GenaiError> {
    let raw = payload
        .get(field)
        .ok_or_else(|| GenaiError::Decode(format!("missing field {field}")))?;
    let mut items: Vec<ContentItem> = serde_json::from_value(raw.clone())
        .map_err(|err| GenaiError::Decode(format!("field {field}: {err}")))?;
    if items.is_empty() {
        return Err(GenaiError::Decode(format!("field {field} is empty")));
    }
    items.truncate(MAX_BATCH);
    Ok(items)
}

pub async fn fetch_items(
    config: &ApiConfig,
    prompt: &str,
    field: &str,
) -> Result<Vec<ContentItem>, GenaiError> {
    let payload = genai::generate_structured(config, prompt, &items_schema(field)).await?;
    parse_items(&payload, field)
}

/// Any failure collapses to the caller's fallback dataset; the result is
/// indistinguishable from a successful fetch downstream.
pub fn resolve_items(
    result: Result<Vec<ContentItem>, GenaiError>,
    context: &str,
    fallback: &[FallbackItem],
) -> Vec<ContentItem> {
    match result {
        Ok(items) => items,
        Err(err) => {
            tracing::debug!("{context}: content fetch failed, using fallback: {err}");
            fallback.iter().map(|item| item.to_item()).collect()
        }
    }
}

pub fn use_generated_items(
    prompt: &'static str,
    field: &'static str,
    context: &'static str,
    fallback: &'static [FallbackItem],
) -> Resource<Vec<ContentItem>> {
    let config = use_context::<ApiConfig>();
    use_resource(move || {
        let config = config.clone();
        async move { resolve_items(fetch_items(&config, prompt, field).await, context, fallback) }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const FALLBACK: &[FallbackItem] = &[
        FallbackItem {
            title: "First",
            description: "first description",
        },
        FallbackItem {
            title: "Second",
            description: "second description",
        },
    ];

    #[test]
    fn parse_items_reads_the_declared_field() {
        let payload = json!({
            "features": [
                { "title": "A", "description": "a" },
                { "title": "B", "description": "b" },
            ]
        });
        let items = parse_items(&payload, "features").unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "A");
    }

    #[test]
    fn parse_items_clamps_oversized_batches() {
        let oversized: Vec<_> = (0..9)
            .map(|i| json!({ "title": format!("t{i}"), "description": "d" }))
            .collect();
        let payload = json!({ "features": oversized });
        assert_eq!(parse_items(&payload, "features").unwrap().len(), MAX_BATCH);
    }

    #[test]
    fn parse_items_rejects_missing_or_empty_fields() {
        assert!(parse_items(&json!({}), "features").is_err());
        assert!(parse_items(&json!({ "features": [] }), "features").is_err());
        assert!(parse_items(&json!({ "features": "nope" }), "features").is_err());
    }

    #[test]
    fn every_failure_kind_substitutes_the_fallback_verbatim() {
        let expected: Vec<ContentItem> = FALLBACK.iter().map(|item| item.to_item()).collect();
        for err in [
            GenaiError::MissingKey,
            GenaiError::Network("offline".to_string()),
            GenaiError::Http {
                status: 500,
                body: "boom".to_string(),
            },
            GenaiError::Decode("bad json".to_string()),
        ] {
            assert_eq!(resolve_items(Err(err), "test", FALLBACK), expected);
        }
    }

    #[test]
    fn successful_fetches_pass_through_untouched() {
        let items = vec![ContentItem {
            title: "Generated".to_string(),
            description: "live".to_string(),
        }];
        assert_eq!(
            resolve_items(Ok(items.clone()), "test", FALLBACK),
            items
        );
    }
}
