use dioxus::prelude::*;

use crate::config::ApiConfig;
use crate::genai;

pub const INITIAL_TAGLINE: &str = "Build, Deploy, and Scale with Meridian";
pub const FALLBACK_TAGLINE: &str = "The Ultimate Toolkit for Modern Developers";

pub const PERSONAS: &[&str] = &[
    "a startup founder",
    "an enterprise developer",
    "a freelance developer",
    "a student learning to code",
];

pub fn tagline_prompt(persona: &str) -> String {
    format!(
        "Generate a short, catchy, and professional tagline for a complete developer platform \
         called Meridian. The tagline should be under 10 words and appeal to {persona}. \
         Do not use quotes."
    )
}

pub fn clean_tagline(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '"' && *c != '*')
        .collect::<String>()
        .trim()
        .to_string()
}

fn pick_persona() -> &'static str {
    #[cfg(target_arch = "wasm32")]
    {
        let index = (js_sys::Math::random() * PERSONAS.len() as f64) as usize;
        return PERSONAS[index.min(PERSONAS.len() - 1)];
    }
    #[cfg(not(target_arch = "wasm32"))]
    PERSONAS[0]
}

#[component]
pub fn Hero() -> Element {
    let config = use_context::<ApiConfig>();
    let mut tagline = use_signal(|| INITIAL_TAGLINE.to_string());
    let mut loading = use_signal(|| false);

    rsx! {
        section { class: "section hero",
            div { class: "container centered",
                h1 { class: "hero-title", "Complete Developer Platform" }
                p { class: "hero-tagline",
                    if loading() { "Generating..." } else { "{tagline}" }
                }
                p { class: "hero-copy",
                    "Your comprehensive tech platform for software development, training, hosting, \
                     and cloud deployment. Everything developers need in one powerful ecosystem."
                }
                div { class: "hero-actions",
                    a { href: "/#", class: "button primary", "Start Building" }
                    button {
                        class: "button ghost",
                        disabled: loading(),
                        onclick: move |_| {
                            let config = config.clone();
                            loading.set(true);
                            spawn(async move {
                                let persona = pick_persona();
                                match genai::generate_text(&config, &tagline_prompt(persona)).await {
                                    Ok(text) => tagline.set(clean_tagline(&text)),
                                    Err(err) => {
                                        tracing::debug!("tagline generation failed: {err}");
                                        tagline.set(FALLBACK_TAGLINE.to_string());
                                    }
                                }
                                loading.set(false);
                            });
                        },
                        if loading() { "Personalizing..." } else { "Personalize" }
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
    fn prompts_are_persona_specific() {
        let prompt = tagline_prompt("a startup founder");
        assert!(prompt.contains("appeal to a startup founder"));
    }

    #[test]
    fn taglines_are_stripped_of_quote_noise() {
        assert_eq!(
            clean_tagline("  \"Ship *faster* with Meridian\"  "),
            "Ship faster with Meridian"
        );
        assert_eq!(clean_tagline("plain"), "plain");
    }
}
