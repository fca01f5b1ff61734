use dioxus::prelude::*;
use serde::Deserialize;
use serde_json::json;

use crate::config::ApiConfig;
use crate::genai::{self, GenaiError};

pub const TESTIMONIAL_PROMPT: &str = "Generate one new, unique, and positive testimonial for a developer platform called Meridian. The testimonial should be from a fictional person with a realistic name, title, and company. It should highlight a specific feature like App Builder, Cloud Hosting, or Developer Training.";

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub title: String,
    pub initials: String,
}

const SEED_TESTIMONIALS: &[(&str, &str, &str)] = &[
    (
        "Meridian transformed our development workflow. The integrated platform saved us months of setup time and the deployment process is seamless.",
        "Sarah Johnson",
        "Lead Developer, TechCorp",
    ),
    (
        "The training programs are exceptional. I went from junior to senior developer in 8 months thanks to Meridian's comprehensive curriculum.",
        "Michael Rodriguez",
        "Full Stack Developer",
    ),
    (
        "Outstanding platform reliability and support. Our apps have 99.9% uptime and the global CDN makes everything lightning fast.",
        "Alex Liu",
        "CTO, StartupXYZ",
    ),
];

pub fn seed_testimonials() -> Vec<Testimonial> {
    SEED_TESTIMONIALS
        .iter()
        .map(|(quote, name, title)| Testimonial {
            quote: quote.to_string(),
            name: name.to_string(),
            title: title.to_string(),
            initials: initials_of(name),
        })
        .collect()
}

pub fn initials_of(name: &str) -> String {
    let mut parts = name.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(first), Some(second)) => first
            .chars()
            .take(1)
            .chain(second.chars().take(1))
            .collect::<String>()
            .to_uppercase(),
        (Some(only), None) => only.chars().take(2).collect::<String>().to_uppercase(),
        _ => String::new(),
    }
}

fn testimonial_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "quote": { "type": "string", "description": "The testimonial quote." },
            "name": { "type": "string", "description": "Full name of the person." },
            "title": { "type": "string", "description": "Job title of the person." },
        }
    })
}

#[derive(Clone, Debug, Deserialize)]
struct RawTestimonial {
    quote: String,
    name: String,
    title: String,
}

pub fn parse_testimonial(payload: &serde_json::Value) -> Result<Testimonial, GenaiError> {
    let raw: RawTestimonial = serde_json::from_value(payload.clone())
        .map_err(|err| GenaiError::Decode(format!("testimonial: {err}")))?;
    let initials = initials_of(&raw.name);
    Ok(Testimonial {
        quote: raw.quote,
        name: raw.name,
        title: raw.title,
        initials,
    })
}

#[component]
pub fn Testimonials() -> Element {
    let config = use_context::<ApiConfig>();
    let mut testimonials = use_signal(seed_testimonials);
    let mut loading = use_signal(|| false);

    rsx! {
        section { class: "section",
            div { class: "container",
                div { class: "centered section-head",
                    h2 { "Trusted by Developers Worldwide" }
                    p { class: "muted", "See what developers and teams are saying about Meridian" }
                }
                div { class: "card-grid three",
                    for testimonial in testimonials().iter() {
                        div { key: "{testimonial.name}", class: "card",
                            p { class: "quote", "\"{testimonial.quote}\"" }
                            div { class: "attribution",
                                span { class: "avatar-circle", "{testimonial.initials}" }
                                div {
                                    p { class: "strong", "{testimonial.name}" }
                                    p { class: "muted", "{testimonial.title}" }
                                }
                            }
                        }
                    }
                }
                div { class: "centered",
                    button {
                        class: "button ghost",
                        disabled: loading(),
                        onclick: move |_| {
                            let config = config.clone();
                            loading.set(true);
                            spawn(async move {
                                match genai::generate_structured(&config, TESTIMONIAL_PROMPT, &testimonial_schema())
                                    .await
                                    .and_then(|payload| parse_testimonial(&payload))
                                {
                                    Ok(new_testimonial) => {
                                        testimonials.with_mut(|items| items.insert(0, new_testimonial));
                                    }
                                    Err(err) => {
                                        tracing::debug!("testimonial generation failed: {err}");
                                    }
                                }
                                loading.set(false);
                            });
                        },
                        if loading() { "Generating..." } else { "Generate another testimonial" }
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
    use serde_json::json;

    #[test]
    fn initials_come_from_the_first_two_names() {
        assert_eq!(initials_of("Sarah Johnson"), "SJ");
        assert_eq!(initials_of("alex liu"), "AL");
        assert_eq!(initials_of("Prince"), "PR");
        assert_eq!(initials_of(""), "");
    }

    #[test]
    fn parsed_testimonials_carry_derived_initials() {
        let payload = json!({
            "quote": "Great platform.",
            "name": "Dana Fox",
            "title": "CTO, Foxline"
        });
        let testimonial = parse_testimonial(&payload).unwrap();
        assert_eq!(testimonial.initials, "DF");
        assert_eq!(testimonial.quote, "Great platform.");
    }

    #[test]
    fn malformed_testimonials_are_rejected() {
        assert!(parse_testimonial(&json!({ "quote": "only" })).is_err());
    }

    #[test]
    fn the_seed_list_is_ready_to_render() {
        let seeds = seed_testimonials();
        assert_eq!(seeds.len(), 3);
        assert!(seeds.iter().all(|t| !t.initials.is_empty()));
    }
}
