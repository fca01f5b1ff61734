use dioxus::prelude::*;

use crate::config::ApiConfig;
use crate::genai;

pub const EMPTY_DESCRIPTION_HINT: &str = "Please describe your project needs.";
pub const RECOMMENDER_FALLBACK: &str =
    "Sorry, we couldn't generate a recommendation at this time.";

pub fn recommendation_prompt(description: &str) -> String {
    format!(
        "A user is looking for a pricing plan for the Meridian developer platform. Here are the plans:\n\
         - Starter ($29/month): For individual developers, 5 projects, 100GB storage.\n\
         - Pro ($99/month): For growing teams, unlimited projects, 1TB storage, priority support, team collaboration.\n\
         - Enterprise (Custom): For large organizations, unlimited everything, dedicated support, SLA.\n\n\
         Based on the user's project description, recommend one plan and provide a brief explanation \
         for your choice.\nUser description: \"{}\"",
        description.trim()
    )
}

#[component]
pub fn PricingRecommenderPage() -> Element {
    let config = use_context::<ApiConfig>();
    let mut description = use_signal(String::new);
    let mut recommendation = use_signal(|| None::<String>);
    let mut hint = use_signal(|| None::<&'static str>);
    let mut loading = use_signal(|| false);

    rsx! {
        document::Title { "AI Pricing Recommender | Meridian" }
        section { class: "section page",
            div { class: "container",
                div { class: "centered section-head",
                    h1 { "AI Pricing Recommender" }
                    p { class: "muted",
                        "Not sure which plan is right for you? Describe your project, team size, and \
                         goals, and our AI assistant will suggest the perfect fit."
                    }
                }
                div { class: "card stack narrow",
                    div { class: "field",
                        label { r#for: "description", "Describe your needs:" }
                        textarea {
                            id: "description",
                            rows: "5",
                            placeholder: "e.g., I'm a solo developer working on a personal blog...",
                            value: "{description}",
                            oninput: move |event| description.set(event.value()),
                        }
                    }
                    button {
                        class: "button primary",
                        disabled: loading(),
                        onclick: move |_| {
                            let entered = description();
                            if entered.trim().is_empty() {
                                hint.set(Some(EMPTY_DESCRIPTION_HINT));
                                return;
                            }
                            hint.set(None);
                            recommendation.set(None);
                            let config = config.clone();
                            loading.set(true);
                            spawn(async move {
                                let text = match genai::generate_text(&config, &recommendation_prompt(&entered)).await {
                                    Ok(text) => text,
                                    Err(err) => {
                                        tracing::debug!("pricing recommendation failed: {err}");
                                        RECOMMENDER_FALLBACK.to_string()
                                    }
                                };
                                recommendation.set(Some(text));
                                loading.set(false);
                            });
                        },
                        if loading() { "Analyzing..." } else { "Get Recommendation" }
                    }
                    if let Some(message) = hint() {
                        p { class: "field-error centered", "{message}" }
                    }
                    if let Some(text) = recommendation() {
                        div { class: "stack divided",
                            h3 { "Our Recommendation:" }
                            div { class: "card quiet",
                                p { class: "prewrap", "{text}" }
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
    fn prompts_carry_the_plan_sheet_and_description() {
        let prompt = recommendation_prompt("  a solo blog  ");
        assert!(prompt.contains("Starter ($29/month)"));
        assert!(prompt.contains("Pro ($99/month)"));
        assert!(prompt.contains("Enterprise (Custom)"));
        assert!(prompt.contains("User description: \"a solo blog\""));
    }
}
