use dioxus::prelude::*;

use crate::config::ApiConfig;
use crate::forms::FormState;
use crate::genai;

pub const MAX_MESSAGE_LEN: usize = 500;
pub const AI_ASSIST_FALLBACK: &str = "Error generating message. Please write your own.";

pub fn assist_prompt(keywords: &str) -> String {
    format!(
        "Based on these keywords: \"{}\", write a professional project description for a \
         consultation request for the Meridian developer platform. The message should be \
         friendly, concise, and under {MAX_MESSAGE_LEN} characters.",
        keywords.trim()
    )
}

#[component]
pub fn Cta() -> Element {
    let config = use_context::<ApiConfig>();
    let mut form = use_signal(FormState::default);
    let mut keywords = use_signal(String::new);
    let mut generating = use_signal(|| false);

    let current = form();
    let name_value = current.value("name").to_string();
    let email_value = current.value("email").to_string();
    let company_value = current.value("company").to_string();
    let phone_value = current.value("phone").to_string();
    let message_value = current.value("message").to_string();
    let name_error = current.error("name").map(str::to_string);
    let email_error = current.error("email").map(str::to_string);
    let phone_error = current.error("phone").map(str::to_string);
    let message_len = message_value.chars().count();

    rsx! {
        section { class: "section",
            div { class: "container split",
                div {
                    h2 { "Ready to Build Something Amazing?" }
                    p { class: "muted",
                        "Join thousands of developers who trust Meridian for their development, \
                         hosting, and deployment needs."
                    }
                }
                div { class: "card form-card",
                    h3 { "Schedule Consultation" }
                    form {
                        class: "stack",
                        novalidate: true,
                        onsubmit: move |event| {
                            event.prevent_default();
                            let clean = form.with_mut(|form| form.validate_submission());
                            if clean {
                                // Terminal no-op: recorded for observability only.
                                let requester = form.peek().value("name").to_string();
                                tracing::info!("consultation request recorded for {requester}");
                            }
                        },
                        div { class: "field-row",
                            div { class: "field",
                                input {
                                    r#type: "text",
                                    name: "name",
                                    placeholder: "John Doe",
                                    value: "{name_value}",
                                    oninput: move |event| form.with_mut(|form| form.set_value("name", event.value())),
                                    onblur: move |_| form.with_mut(|form| form.validate_field("name")),
                                }
                                if let Some(message) = name_error {
                                    p { class: "field-error", "{message}" }
                                }
                            }
                            div { class: "field",
                                input {
                                    r#type: "email",
                                    name: "email",
                                    placeholder: "john@company.com",
                                    value: "{email_value}",
                                    oninput: move |event| form.with_mut(|form| form.set_value("email", event.value())),
                                    onblur: move |_| form.with_mut(|form| form.validate_field("email")),
                                }
                                if let Some(message) = email_error {
                                    p { class: "field-error", "{message}" }
                                }
                            }
                        }
                        div { class: "field-row",
                            div { class: "field",
                                input {
                                    r#type: "text",
                                    name: "company",
                                    placeholder: "Your Company",
                                    value: "{company_value}",
                                    oninput: move |event| form.with_mut(|form| form.set_value("company", event.value())),
                                }
                            }
                            div { class: "field",
                                input {
                                    r#type: "tel",
                                    name: "phone",
                                    placeholder: "+1 (555) 123-4567",
                                    value: "{phone_value}",
                                    oninput: move |event| form.with_mut(|form| form.set_value("phone", event.value())),
                                    onblur: move |_| form.with_mut(|form| form.validate_field("phone")),
                                }
                                if let Some(message) = phone_error {
                                    p { class: "field-error", "{message}" }
                                }
                            }
                        }
                        div { class: "field",
                            div { class: "assist-row",
                                input {
                                    r#type: "text",
                                    placeholder: "Enter keywords for AI...",
                                    value: "{keywords}",
                                    oninput: move |event| keywords.set(event.value()),
                                }
                                button {
                                    r#type: "button",
                                    class: "button ghost",
                                    disabled: generating(),
                                    onclick: move |_| {
                                        let entered = keywords();
                                        if entered.trim().is_empty() {
                                            return;
                                        }
                                        let config = config.clone();
                                        generating.set(true);
                                        spawn(async move {
                                            let drafted = match genai::generate_text(&config, &assist_prompt(&entered)).await {
                                                Ok(text) => text,
                                                Err(err) => {
                                                    tracing::debug!("ai assist failed: {err}");
                                                    AI_ASSIST_FALLBACK.to_string()
                                                }
                                            };
                                            form.with_mut(|form| form.set_value("message", drafted));
                                            generating.set(false);
                                        });
                                    },
                                    if generating() { "Drafting..." } else { "AI Assist" }
                                }
                            }
                            textarea {
                                name: "message",
                                rows: "4",
                                maxlength: "{MAX_MESSAGE_LEN}",
                                placeholder: "Tell us about your project and goals...",
                                value: "{message_value}",
                                oninput: move |event| form.with_mut(|form| form.set_value("message", event.value())),
                            }
                            p { class: "muted right", "{message_len}/{MAX_MESSAGE_LEN} characters" }
                        }
                        button { r#type: "submit", class: "button primary", "Schedule Consultation" }
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
    fn assist_prompts_embed_keywords_and_the_length_limit() {
        let prompt = assist_prompt("  rust, wasm  ");
        assert!(prompt.contains("\"rust, wasm\""));
        assert!(prompt.contains("under 500 characters"));
    }
}
