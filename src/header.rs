use dioxus::prelude::*;
use serde::Deserialize;
use serde_json::json;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::config::ApiConfig;
use crate::genai::{self, GenaiError};

pub const MIN_QUERY_LEN: usize = 3;
pub const SEARCH_DEBOUNCE_MS: i32 = 500;
pub const MAX_NOTIFICATIONS: usize = 5;

pub const SEARCH_FALLBACK: &str =
    "Sorry, I couldn't find an answer. Please try rephrasing your question.";

pub const NOTIFICATIONS_PROMPT: &str = "Generate a list of 5 realistic, unread notifications for a developer platform dashboard called Meridian. Topics can include build status (success/failure), security alerts, new comments on projects, or plan updates. Provide a 'message' and a 'kind' ('success', 'error', 'info') for each.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    pub kind: NotificationKind,
    pub read: bool,
}

const FALLBACK_NOTIFICATIONS: &[(&str, NotificationKind)] = &[
    (
        "Build #4821 for WebApp-Prod completed successfully.",
        NotificationKind::Success,
    ),
    (
        "Security alert: new sign-in from an unrecognized device.",
        NotificationKind::Error,
    ),
    (
        "Jane Doe commented on Mobile-API: \"Ready for review.\"",
        NotificationKind::Info,
    ),
    (
        "Deployment of Marketing-Site failed: missing environment variable.",
        NotificationKind::Error,
    ),
    ("Your Pro plan renews in 7 days.", NotificationKind::Info),
];

pub fn should_search(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_LEN
}

pub fn search_prompt(query: &str) -> String {
    format!(
        "You are a helpful search assistant for a developer platform called Meridian. \
         Meridian offers software development, training, hosting, app building, deployment, \
         and security. Answer the user's query concisely based on these services. Query: \"{}\"",
        query.trim()
    )
}

pub fn parse_kind(raw: &str) -> NotificationKind {
    match raw {
        "success" => NotificationKind::Success,
        "error" => NotificationKind::Error,
        _ => NotificationKind::Info,
    }
}

fn notifications_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "notifications": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "message": { "type": "string" },
                        "kind": { "type": "string" },
                    }
                }
            }
        }
    })
}

#[derive(Clone, Debug, Deserialize)]
struct RawNotification {
    message: String,
    #[serde(default)]
    kind: Option<String>,
}

pub fn parse_notifications(payload: &serde_json::Value) -> Result<Vec<Notification>, GenaiError> {
    let raw = payload
        .get("notifications")
        .ok_or_else(|| GenaiError::Decode("missing field notifications".to_string()))?;
    let raw: Vec<RawNotification> = serde_json::from_value(raw.clone())
        .map_err(|err| GenaiError::Decode(format!("notifications: {err}")))?;
    if raw.is_empty() {
        return Err(GenaiError::Decode("notifications list is empty".to_string()));
    }
    Ok(raw
        .into_iter()
        .take(MAX_NOTIFICATIONS)
        .enumerate()
        .map(|(index, item)| Notification {
            id: index as u32,
            message: item.message,
            kind: parse_kind(item.kind.as_deref().unwrap_or("")),
            read: false,
        })
        .collect())
}

pub fn fallback_notifications() -> Vec<Notification> {
    FALLBACK_NOTIFICATIONS
        .iter()
        .enumerate()
        .map(|(index, (message, kind))| Notification {
            id: index as u32,
            message: message.to_string(),
            kind: *kind,
            read: false,
        })
        .collect()
}

pub fn mark_all_read(items: &mut [Notification]) {
    for item in items {
        item.read = true;
    }
}

pub fn unread_count(items: &[Notification]) -> usize {
    items.iter().filter(|item| !item.read).count()
}

#[cfg(target_arch = "wasm32")]
struct TimeoutHandle {
    id: i32,
    _closure: Rc<wasm_bindgen::closure::Closure<dyn FnMut()>>,
}

#[component]
pub fn Header() -> Element {
    let config = use_context::<ApiConfig>();

    let mut query = use_signal(String::new);
    let mut debounced_query = use_signal(String::new);
    let mut show_results = use_signal(|| false);
    let mut searching = use_signal(|| false);
    let answer = use_signal(|| None::<String>);
    let mut last_query = use_signal(|| None::<String>);
    let sequence = use_signal(|| 0u64);
    #[cfg(target_arch = "wasm32")]
    let mut debounce_handle = use_signal(|| None::<TimeoutHandle>);

    let mut menu_open = use_signal(|| false);
    let mut bell_open = use_signal(|| false);
    let notifications = use_signal(Vec::<Notification>::new);
    let mut fetched_notifications = use_signal(|| false);
    let loading_notifications = use_signal(|| false);

    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        use wasm_bindgen::closure::Closure;

        let next = query();
        let trimmed = next.trim().to_string();
        if let Some(handle) = debounce_handle.read().as_ref() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(handle.id);
            }
        }
        if !should_search(&trimmed) {
            debounced_query.set(String::new());
            debounce_handle.set(None);
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let mut debounced = debounced_query;
        let mut debounce_handle = debounce_handle;
        let closure = Rc::new(Closure::wrap(Box::new(move || {
            debounced.set(trimmed.clone());
            debounce_handle.set(None);
        }) as Box<dyn FnMut()>));
        if let Ok(id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().as_ref().unchecked_ref(),
            SEARCH_DEBOUNCE_MS,
        ) {
            debounce_handle.set(Some(TimeoutHandle { id, _closure: closure }));
        }
    });

    #[cfg(not(target_arch = "wasm32"))]
    use_effect(move || {
        let next = query();
        let trimmed = next.trim().to_string();
        if should_search(&trimmed) {
            debounced_query.set(trimmed);
        } else {
            debounced_query.set(String::new());
        }
    });

    use_effect({
        let config = config.clone();
        move || {
            let fired = debounced_query();
            if fired.is_empty() {
                return;
            }
            if last_query().as_deref() == Some(fired.as_str()) {
                return;
            }
            last_query.set(Some(fired.clone()));
            let mut sequence = sequence;
            let issued = sequence() + 1;
            sequence.set(issued);
            let config = config.clone();
            spawn(run_search(config, fired, issued, sequence, answer, searching));
        }
    });

    #[cfg(target_arch = "wasm32")]
    {
        let debounce_handle = debounce_handle;
        use_drop(move || {
            if let Some(handle) = debounce_handle.read().as_ref() {
                if let Some(window) = web_sys::window() {
                    window.clear_timeout_with_handle(handle.id);
                }
            }
        });
    }

    let unread = unread_count(&notifications());

    rsx! {
        header { class: "site-header",
            div { class: "container header-row",
                a { href: "/#", class: "brand", "Meridian" }
                div { class: "search-box",
                    input {
                        r#type: "search",
                        class: "search-input",
                        placeholder: "Ask the AI Assistant...",
                        value: "{query}",
                        oninput: move |event| {
                            let next = event.value();
                            if should_search(&next) {
                                searching.set(true);
                                show_results.set(true);
                            } else {
                                show_results.set(false);
                            }
                            query.set(next);
                        },
                    }
                    if show_results() {
                        div { class: "search-results",
                            match (searching(), answer()) {
                                (true, _) => rsx! {
                                    div { class: "spinner", aria_label: "Searching" }
                                },
                                (false, Some(text)) => rsx! {
                                    p { class: "search-answer", "{text}" }
                                },
                                (false, None) => rsx! {},
                            }
                        }
                    }
                }
                div { class: "header-actions",
                    div { class: "bell-menu",
                        button {
                            class: "icon-button",
                            aria_label: "View notifications",
                            onclick: move |_| {
                                let was_open = bell_open();
                                bell_open.set(!was_open);
                                if !was_open && !fetched_notifications() {
                                    fetched_notifications.set(true);
                                    let config = config.clone();
                                    spawn(load_notifications(config, notifications, loading_notifications));
                                }
                            },
                            "🔔"
                            if unread > 0 {
                                span { class: "badge", "{unread}" }
                            }
                        }
                        if bell_open() {
                            div { class: "popover notifications-popover",
                                div { class: "popover-head",
                                    h3 { "Notifications" }
                                    button {
                                        class: "link-button",
                                        disabled: unread == 0,
                                        onclick: move |_| {
                                            let mut notifications = notifications;
                                            notifications.with_mut(|items| mark_all_read(items));
                                        },
                                        "Mark all as read"
                                    }
                                }
                                div { class: "popover-body",
                                    if loading_notifications() {
                                        div { class: "spinner", aria_label: "Loading notifications" }
                                    } else if notifications().is_empty() {
                                        p { class: "muted", "No new notifications" }
                                    } else {
                                        for item in notifications().iter() {
                                            div { key: "{item.id}", class: "notification-row",
                                                if !item.read {
                                                    span { class: "unread-dot" }
                                                }
                                                p { "{item.message}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    div { class: "user-menu",
                        button {
                            class: "icon-button",
                            aria_label: "Open user menu",
                            onclick: move |_| menu_open.set(!menu_open()),
                            "👤"
                        }
                        if menu_open() {
                            div { class: "popover",
                                a { href: "/#/dashboard", onclick: move |_| menu_open.set(false), "Dashboard" }
                                a { href: "/#/profile", onclick: move |_| menu_open.set(false), "Your Profile" }
                                a { href: "/#/account", onclick: move |_| menu_open.set(false), "Settings" }
                                a { href: "/#", onclick: move |_| menu_open.set(false), "Sign out" }
                            }
                        }
                    }
                }
            }
        }
    }
}

// Shared state is overwritten on arrival ("last response wins"); the
// strict-search-ordering feature drops responses for superseded queries.
async fn run_search(
    config: ApiConfig,
    fired: String,
    issued: u64,
    sequence: Signal<u64>,
    mut answer: Signal<Option<String>>,
    mut searching: Signal<bool>,
) {
    let result = genai::generate_text(&config, &search_prompt(&fired)).await;
    #[cfg(feature = "strict-search-ordering")]
    if *sequence.peek() != issued {
        tracing::debug!("search: dropping stale response for {fired:?}");
        return;
    }
    match result {
        Ok(text) => answer.set(Some(text)),
        Err(err) => {
            tracing::debug!("search failed for {fired:?}: {err}");
            answer.set(Some(SEARCH_FALLBACK.to_string()));
        }
    }
    searching.set(false);
}

async fn load_notifications(
    config: ApiConfig,
    mut notifications: Signal<Vec<Notification>>,
    mut loading: Signal<bool>,
) {
    loading.set(true);
    let result = genai::generate_structured(&config, NOTIFICATIONS_PROMPT, &notifications_schema())
        .await
        .and_then(|payload| parse_notifications(&payload));
    match result {
        Ok(items) => notifications.set(items),
        Err(err) => {
            tracing::debug!("notifications fetch failed, using fallback: {err}");
            notifications.set(fallback_notifications());
        }
    }
    loading.set(false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn short_queries_issue_no_request() {
        assert!(!should_search(""));
        assert!(!should_search("re"));
        assert!(!should_search("  re  "));
        assert!(should_search("rea"));
        assert!(should_search("react"));
    }

    #[test]
    fn the_quiescence_window_is_half_a_second() {
        assert_eq!(SEARCH_DEBOUNCE_MS, 500);
    }

    #[test]
    fn the_fired_prompt_embeds_the_query() {
        let prompt = search_prompt("  react  ");
        assert!(prompt.contains("Query: \"react\""));
    }

    #[test]
    fn notification_kinds_coerce_unknowns_to_info() {
        assert_eq!(parse_kind("success"), NotificationKind::Success);
        assert_eq!(parse_kind("error"), NotificationKind::Error);
        assert_eq!(parse_kind("info"), NotificationKind::Info);
        assert_eq!(parse_kind("warning"), NotificationKind::Info);
        assert_eq!(parse_kind(""), NotificationKind::Info);
    }

    #[test]
    fn parsed_notifications_arrive_unread_and_clamped() {
        let oversized: Vec<_> = (0..8)
            .map(|i| json!({ "message": format!("n{i}"), "kind": "success" }))
            .collect();
        let payload = json!({ "notifications": oversized });
        let items = parse_notifications(&payload).unwrap();
        assert_eq!(items.len(), MAX_NOTIFICATIONS);
        assert!(items.iter().all(|item| !item.read));
        assert_eq!(unread_count(&items), MAX_NOTIFICATIONS);
    }

    #[test]
    fn malformed_notification_payloads_are_rejected() {
        assert!(parse_notifications(&json!({})).is_err());
        assert!(parse_notifications(&json!({ "notifications": [] })).is_err());
        assert!(parse_notifications(&json!({ "notifications": "x" })).is_err());
    }

    #[test]
    fn mark_all_read_zeroes_the_unread_counter() {
        let mut items = fallback_notifications();
        assert_eq!(unread_count(&items), items.len());
        mark_all_read(&mut items);
        assert!(items.iter().all(|item| item.read));
        assert_eq!(unread_count(&items), 0);
    }

    #[test]
    fn fallback_set_is_within_the_batch_limit() {
        let items = fallback_notifications();
        assert!(!items.is_empty());
        assert!(items.len() <= MAX_NOTIFICATIONS);
    }
}
