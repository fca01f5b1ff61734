use dioxus::prelude::*;

use crate::config::ApiConfig;
use crate::genai::{self, GenaiError};

pub const OVERVIEW_FALLBACK_IMAGE: &str = "https://picsum.photos/600/400?grayscale";

const OVERVIEW_IMAGE_PROMPT: &str = "A modern, abstract visualization of a global developer platform, with interconnected nodes and data streams on a world map. Dark theme with blue and purple neon accents. Photorealistic, cinematic lighting.";

pub fn resolve_image(result: Result<String, GenaiError>) -> String {
    match result {
        Ok(encoded) => format!("data:image/jpeg;base64,{encoded}"),
        Err(err) => {
            tracing::debug!("overview image generation failed, using placeholder: {err}");
            OVERVIEW_FALLBACK_IMAGE.to_string()
        }
    }
}

#[component]
pub fn PlatformOverview() -> Element {
    let config = use_context::<ApiConfig>();
    let image = use_resource(move || {
        let config = config.clone();
        async move {
            resolve_image(genai::generate_image(&config, OVERVIEW_IMAGE_PROMPT, "4:3", "image/jpeg").await)
        }
    });

    rsx! {
        section { class: "section",
            div { class: "container split",
                div {
                    h2 { "Everything You Need in One Platform" }
                    p { class: "muted",
                        "Meridian combines the power of modern development tools with the simplicity \
                         of a unified platform. Build faster, deploy easier, and scale without limits."
                    }
                    ul { class: "check-list",
                        li { "Integrated toolchain from editor to edge" }
                        li { "One dashboard for builds, deploys, and monitoring" }
                        li { "Security and compliance baked in" }
                    }
                }
                div { class: "overview-media",
                    match image() {
                        Some(src) => rsx! {
                            img { class: "overview-image", src: "{src}", alt: "Platform overview" }
                        },
                        None => rsx! {
                            div { class: "skeleton media", aria_label: "Generating overview image" }
                        },
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn generated_bytes_become_a_data_url() {
        assert_eq!(
            resolve_image(Ok("aGVsbG8=".to_string())),
            "data:image/jpeg;base64,aGVsbG8="
        );
    }

    #[test]
    fn any_failure_keeps_the_placeholder() {
        assert_eq!(
            resolve_image(Err(GenaiError::MissingKey)),
            OVERVIEW_FALLBACK_IMAGE
        );
        assert_eq!(
            resolve_image(Err(GenaiError::Network("offline".to_string()))),
            OVERVIEW_FALLBACK_IMAGE
        );
    }
}
