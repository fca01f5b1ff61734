use dioxus::prelude::*;

use crate::config::ApiConfig;
use crate::genai;

pub const BIO_FALLBACK: &str = "Could not generate bio. Please try different keywords.";

pub fn avatar_prompt(description: &str) -> String {
    format!(
        "A professional, clean, circular profile avatar based on the following description: \
         \"{}\". Vector art style.",
        description.trim()
    )
}

pub fn bio_prompt(keywords: &str) -> String {
    format!(
        "Write a professional and engaging user bio for a developer platform profile. The bio \
         should be around 3-4 sentences and based on these keywords: \"{}\".",
        keywords.trim()
    )
}

#[component]
pub fn ProfilePage() -> Element {
    let config = use_context::<ApiConfig>();
    let mut avatar_description = use_signal(String::new);
    let mut avatar_url = use_signal(|| None::<String>);
    let mut generating_avatar = use_signal(|| false);
    let mut bio_keywords = use_signal(String::new);
    let mut bio = use_signal(String::new);
    let mut generating_bio = use_signal(|| false);

    let avatar_config = config.clone();

    rsx! {
        document::Title { "Your Profile | Meridian" }
        section { class: "section page",
            div { class: "container",
                div { class: "centered section-head",
                    h1 { "Your Profile" }
                    p { class: "muted", "Personalize your Meridian profile with our AI-powered tools." }
                }
                div { class: "card-grid two narrow",
                    div { class: "card stack",
                        h2 { "Profile Details" }
                        div { class: "centered stack",
                            match (generating_avatar(), avatar_url()) {
                                (true, _) => rsx! {
                                    div { class: "avatar-frame skeleton", aria_label: "Generating avatar" }
                                },
                                (false, Some(url)) => rsx! {
                                    img { class: "avatar-frame", src: "{url}", alt: "Generated avatar" }
                                },
                                (false, None) => rsx! {
                                    div { class: "avatar-frame placeholder", "👤" }
                                },
                            }
                            p { class: "strong", "John Doe" }
                            p { class: "muted", "john@company.com" }
                        }
                        div { class: "stack divided",
                            h3 { "AI Avatar Generator" }
                            input {
                                r#type: "text",
                                class: "text-input",
                                placeholder: "e.g., a pixel art cat wearing headphones",
                                value: "{avatar_description}",
                                oninput: move |event| avatar_description.set(event.value()),
                            }
                            button {
                                class: "button primary",
                                disabled: generating_avatar(),
                                onclick: move |_| {
                                    let description = avatar_description();
                                    if description.trim().is_empty() {
                                        return;
                                    }
                                    let config = avatar_config.clone();
                                    generating_avatar.set(true);
                                    spawn(async move {
                                        match genai::generate_image(&config, &avatar_prompt(&description), "1:1", "image/png").await {
                                            Ok(encoded) => {
                                                avatar_url.set(Some(format!("data:image/png;base64,{encoded}")));
                                            }
                                            Err(err) => {
                                                // Placeholder glyph stays; never an error banner.
                                                tracing::debug!("avatar generation failed: {err}");
                                            }
                                        }
                                        generating_avatar.set(false);
                                    });
                                },
                                if generating_avatar() { "Generating..." } else { "Generate Avatar" }
                            }
                        }
                    }
                    div { class: "card stack",
                        h2 { "AI Bio Assistant" }
                        div { class: "field",
                            label { r#for: "bio-keywords", "Enter a few keywords about yourself:" }
                            input {
                                id: "bio-keywords",
                                r#type: "text",
                                class: "text-input",
                                placeholder: "e.g., React, full-stack, cloud enthusiast",
                                value: "{bio_keywords}",
                                oninput: move |event| bio_keywords.set(event.value()),
                            }
                        }
                        button {
                            class: "button ghost",
                            disabled: generating_bio(),
                            onclick: move |_| {
                                let keywords = bio_keywords();
                                if keywords.trim().is_empty() {
                                    return;
                                }
                                let config = config.clone();
                                generating_bio.set(true);
                                spawn(async move {
                                    match genai::generate_text(&config, &bio_prompt(&keywords)).await {
                                        Ok(text) => bio.set(text),
                                        Err(err) => {
                                            tracing::debug!("bio generation failed: {err}");
                                            bio.set(BIO_FALLBACK.to_string());
                                        }
                                    }
                                    generating_bio.set(false);
                                });
                            },
                            if generating_bio() { "Generating..." } else { "Generate Bio" }
                        }
                        div { class: "field",
                            label { r#for: "generated-bio", "Your Generated Bio:" }
                            textarea {
                                id: "generated-bio",
                                rows: "6",
                                readonly: true,
                                placeholder: "Your AI-generated bio will appear here...",
                                value: "{bio}",
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_prompts_wrap_the_description() {
        let prompt = avatar_prompt("  a robot  ");
        assert!(prompt.contains("\"a robot\""));
        assert!(prompt.contains("Vector art style"));
    }

    #[test]
    fn bio_prompts_wrap_the_keywords() {
        let prompt = bio_prompt("rust, wasm");
        assert!(prompt.contains("\"rust, wasm\""));
    }
}
