use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::config::ApiConfig;
use crate::genai::{self, GenaiError};

pub const POLL_INTERVAL_MS: u32 = 10_000;
pub const MAX_POLLS: u32 = 45;
pub const MESSAGE_ROTATION_MS: i32 = 3_000;

pub const LOADING_MESSAGES: &[&str] = &[
    "Initializing video generation...",
    "Crafting the visuals...",
    "Assembling the demo...",
    "Applying high-tech aesthetic...",
    "Finalizing the experience...",
    "Almost ready...",
];

pub const QUOTA_MESSAGE: &str = "The video demo is currently unavailable due to high demand. You've exceeded the API quota. Please try again later.";
pub const MISSING_KEY_MESSAGE: &str = "This feature is not available. API key is missing.";
pub const GENERIC_FAILURE_MESSAGE: &str =
    "An error occurred while generating the video demo.";
pub const TIMEOUT_MESSAGE: &str = "Video generation took too long. Please try again.";

pub const VIDEO_PLACEHOLDER_IMAGE: &str = "https://picsum.photos/600/400?grayscale";

const BASE_PROMPT: &str = "A dynamic and futuristic promotional video for the Meridian developer platform. Showcasing a seamless workflow from coding on a sleek dark-mode interface, to one-click deployment to a global network represented by glowing nodes on a world map. The video should have a modern, high-tech aesthetic with blue and purple neon accents, conveying speed, reliability, and innovation.";

pub fn video_prompt(keyword: &str) -> String {
    let trimmed = keyword.trim();
    if trimmed.is_empty() {
        BASE_PROMPT.to_string()
    } else {
        format!("{BASE_PROMPT} The video should have a theme related to {trimmed}.")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum VideoPhase {
    Idle,
    Submitting,
    Polling { operation: String, polls: u32 },
    Downloading { uri: String },
    Ready { url: String },
    Unavailable { message: String, quota: bool },
}

impl VideoPhase {
    pub fn is_loading(&self) -> bool {
        matches!(
            self,
            VideoPhase::Submitting | VideoPhase::Polling { .. } | VideoPhase::Downloading { .. }
        )
    }

    pub fn is_quota_blocked(&self) -> bool {
        matches!(self, VideoPhase::Unavailable { quota: true, .. })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum VideoEvent {
    JobAccepted { operation: String },
    PollPending,
    PollComplete { uri: String },
    Downloaded { url: String },
    Failed { message: String, quota: bool },
}

pub fn advance(phase: &VideoPhase, event: VideoEvent) -> VideoPhase {
    match (phase, event) {
        (_, VideoEvent::Failed { message, quota }) => VideoPhase::Unavailable { message, quota },
        (VideoPhase::Submitting, VideoEvent::JobAccepted { operation }) => VideoPhase::Polling {
            operation,
            polls: 0,
        },
        (VideoPhase::Polling { operation, polls }, VideoEvent::PollPending) => {
            if polls + 1 >= MAX_POLLS {
                VideoPhase::Unavailable {
                    message: TIMEOUT_MESSAGE.to_string(),
                    quota: false,
                }
            } else {
                VideoPhase::Polling {
                    operation: operation.clone(),
                    polls: polls + 1,
                }
            }
        }
        (VideoPhase::Polling { .. }, VideoEvent::PollComplete { uri }) => {
            VideoPhase::Downloading { uri }
        }
        (VideoPhase::Downloading { .. }, VideoEvent::Downloaded { url }) => {
            VideoPhase::Ready { url }
        }
        (current, _) => current.clone(),
    }
}

pub fn failure_event(err: &GenaiError) -> VideoEvent {
    let quota = err.is_quota();
    let message = if quota {
        QUOTA_MESSAGE.to_string()
    } else if matches!(err, GenaiError::MissingKey) {
        MISSING_KEY_MESSAGE.to_string()
    } else {
        GENERIC_FAILURE_MESSAGE.to_string()
    };
    VideoEvent::Failed { message, quota }
}

#[cfg(target_arch = "wasm32")]
struct IntervalHandle {
    id: i32,
    _closure: Rc<wasm_bindgen::closure::Closure<dyn FnMut()>>,
}

#[component]
pub fn VideoDemo() -> Element {
    let config = use_context::<ApiConfig>();
    let mut phase = use_signal(|| VideoPhase::Idle);
    let mut keyword = use_signal(String::new);
    let mut message_index = use_signal(|| 0usize);
    let mut run = use_signal(|| 0u64);
    #[cfg(target_arch = "wasm32")]
    let mut rotate_handle = use_signal(|| None::<IntervalHandle>);
    #[cfg(target_arch = "wasm32")]
    let mut last_loading = use_signal(|| None::<bool>);

    #[cfg(target_arch = "wasm32")]
    {
        use_effect(move || {
            use wasm_bindgen::closure::Closure;

            let loading = phase().is_loading();
            if last_loading() == Some(loading) {
                return;
            }
            last_loading.set(Some(loading));
            let Some(window) = web_sys::window() else {
                return;
            };
            let current_id = rotate_handle.read().as_ref().map(|handle| handle.id);
            if let Some(id) = current_id {
                window.clear_interval_with_handle(id);
                rotate_handle.set(None);
            }
            if !loading {
                return;
            }
            let mut rotate_index = message_index;
            let closure = Rc::new(Closure::wrap(Box::new(move || {
                let next = (rotate_index() + 1) % LOADING_MESSAGES.len();
                rotate_index.set(next);
            }) as Box<dyn FnMut()>));
            if let Ok(id) = window.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().as_ref().unchecked_ref(),
                MESSAGE_ROTATION_MS,
            ) {
                rotate_handle.set(Some(IntervalHandle { id, _closure: closure }));
            }
        });

        let rotate_handle = rotate_handle;
        use_drop(move || {
            if let Some(handle) = rotate_handle.read().as_ref() {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(handle.id);
                }
            }
        });
    }

    let loading = phase().is_loading();
    let quota_blocked = phase().is_quota_blocked();
    let loading_message = LOADING_MESSAGES[message_index() % LOADING_MESSAGES.len()];

    rsx! {
        section { class: "section",
            div { class: "container",
                div { class: "centered section-head",
                    h2 { "See Meridian in Action" }
                    p { class: "muted",
                        "Enter a keyword (e.g., \"gaming\", \"e-commerce\") to generate a platform \
                         demo tailored to your industry."
                    }
                }
                div { class: "demo-controls",
                    input {
                        r#type: "text",
                        class: "text-input",
                        placeholder: "Enter a keyword (optional)",
                        value: "{keyword}",
                        oninput: move |event| {
                            keyword.set(event.value());
                            // Editing the keyword re-arms generation after a quota stop.
                            if phase.peek().is_quota_blocked() {
                                phase.set(VideoPhase::Idle);
                            }
                        },
                    }
                    button {
                        class: "button primary",
                        disabled: loading || quota_blocked,
                        onclick: move |_| {
                            if phase.peek().is_loading() || phase.peek().is_quota_blocked() {
                                return;
                            }
                            let next_run = run() + 1;
                            run.set(next_run);
                            #[cfg(target_arch = "wasm32")]
                            if let VideoPhase::Ready { url } = &*phase.peek() {
                                let _ = web_sys::Url::revoke_object_url(url);
                            }
                            message_index.set(0);
                            phase.set(VideoPhase::Submitting);
                            let config = config.clone();
                            spawn(run_generation(config, keyword(), next_run, run, phase));
                        },
                        if loading {
                            "Generating..."
                        } else if quota_blocked {
                            "Quota Reached"
                        } else {
                            "Generate Demo"
                        }
                    }
                    if loading {
                        button {
                            class: "button ghost",
                            onclick: move |_| {
                                run.set(run() + 1);
                                phase.set(VideoPhase::Idle);
                            },
                            "Cancel"
                        }
                    }
                }
                div { class: "demo-frame",
                    match phase() {
                        VideoPhase::Ready { url } => rsx! {
                            video {
                                class: "demo-video",
                                src: "{url}",
                                controls: true,
                                autoplay: true,
                                muted: true,
                            }
                        },
                        VideoPhase::Unavailable { message, .. } => rsx! {
                            div { class: "demo-panel",
                                img { class: "panel-backdrop", src: VIDEO_PLACEHOLDER_IMAGE, alt: "Platform dashboard fallback" }
                                div { class: "panel-copy",
                                    h3 { class: "warning", "Demo Temporarily Unavailable" }
                                    p { class: "muted", "{message}" }
                                }
                            }
                        },
                        phase if phase.is_loading() => rsx! {
                            div { class: "demo-panel",
                                div { class: "spinner large", aria_label: "Generating video" }
                                h3 { "Generating Your Platform Demo" }
                                p { class: "muted", "{loading_message}" }
                            }
                        },
                        _ => rsx! {
                            div { class: "demo-panel",
                                img { class: "panel-backdrop", src: VIDEO_PLACEHOLDER_IMAGE, alt: "Platform dashboard placeholder" }
                                p { class: "panel-copy", "Enter a keyword to generate a personalized demo." }
                            }
                        },
                    }
                }
            }
        }
    }
}

// In-flight requests are never aborted; a superseded run keeps resolving but
// its results are discarded by comparing run ids.
async fn run_generation(
    config: ApiConfig,
    keyword: String,
    run_id: u64,
    run: Signal<u64>,
    mut phase: Signal<VideoPhase>,
) {
    fn apply(
        run: &Signal<u64>,
        run_id: u64,
        phase: &mut Signal<VideoPhase>,
        event: VideoEvent,
    ) -> VideoPhase {
        let next = advance(&phase.peek(), event);
        if *run.peek() == run_id {
            phase.set(next.clone());
        }
        next
    }

    let operation = match genai::submit_video_job(&config, &video_prompt(&keyword)).await {
        Ok(operation) => operation,
        Err(err) => {
            tracing::debug!("video submit failed: {err}");
            apply(&run, run_id, &mut phase, failure_event(&err));
            return;
        }
    };
    let mut current = apply(
        &run,
        run_id,
        &mut phase,
        VideoEvent::JobAccepted {
            operation: operation.clone(),
        },
    );

    loop {
        if *run.peek() != run_id {
            return;
        }
        poll_delay().await;
        match genai::poll_video_job(&config, &operation).await {
            Ok(genai::VideoPoll::Pending) => {
                current = apply(&run, run_id, &mut phase, VideoEvent::PollPending);
                if matches!(current, VideoPhase::Unavailable { .. }) {
                    return;
                }
            }
            Ok(genai::VideoPoll::Done { uri }) => {
                current = apply(&run, run_id, &mut phase, VideoEvent::PollComplete { uri });
                break;
            }
            Err(err) => {
                tracing::debug!("video poll failed: {err}");
                apply(&run, run_id, &mut phase, failure_event(&err));
                return;
            }
        }
    }

    let VideoPhase::Downloading { uri } = current else {
        return;
    };
    match genai::download_video(&config, &uri).await {
        Ok(bytes) => match video_object_url(&bytes) {
            Ok(url) => {
                apply(&run, run_id, &mut phase, VideoEvent::Downloaded { url });
            }
            Err(message) => {
                tracing::debug!("video blob failed: {message}");
                apply(
                    &run,
                    run_id,
                    &mut phase,
                    VideoEvent::Failed {
                        message: GENERIC_FAILURE_MESSAGE.to_string(),
                        quota: false,
                    },
                );
            }
        },
        Err(err) => {
            tracing::debug!("video download failed: {err}");
            apply(&run, run_id, &mut phase, failure_event(&err));
        }
    }
}

async fn poll_delay() {
    #[cfg(target_arch = "wasm32")]
    TimeoutFuture::new(POLL_INTERVAL_MS).await;
}

#[cfg(target_arch = "wasm32")]
fn video_object_url(bytes: &[u8]) -> Result<String, String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("video/mp4");
    let blob = web_sys::Blob::new_with_buffer_source_sequence_and_options(&parts, &options)
        .map_err(|_| "blob failed".to_string())?;
    web_sys::Url::create_object_url_with_blob(&blob).map_err(|_| "object url failed".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn video_object_url(_bytes: &[u8]) -> Result<String, String> {
    Err("video playback requires a browser".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn the_keyword_themes_the_prompt() {
        assert_eq!(video_prompt("   "), BASE_PROMPT);
        assert!(video_prompt("gaming").ends_with("The video should have a theme related to gaming."));
    }

    #[test]
    fn the_happy_path_walks_every_phase() {
        let phase = advance(
            &VideoPhase::Submitting,
            VideoEvent::JobAccepted {
                operation: "operations/abc".to_string(),
            },
        );
        assert_eq!(
            phase,
            VideoPhase::Polling {
                operation: "operations/abc".to_string(),
                polls: 0
            }
        );
        let phase = advance(&phase, VideoEvent::PollPending);
        assert_eq!(
            phase,
            VideoPhase::Polling {
                operation: "operations/abc".to_string(),
                polls: 1
            }
        );
        let phase = advance(
            &phase,
            VideoEvent::PollComplete {
                uri: "https://cdn/v".to_string(),
            },
        );
        assert_eq!(
            phase,
            VideoPhase::Downloading {
                uri: "https://cdn/v".to_string()
            }
        );
        let phase = advance(
            &phase,
            VideoEvent::Downloaded {
                url: "blob:demo".to_string(),
            },
        );
        assert_eq!(
            phase,
            VideoPhase::Ready {
                url: "blob:demo".to_string()
            }
        );
    }

    #[test]
    fn the_poll_window_spans_several_minutes() {
        let window_ms = u64::from(POLL_INTERVAL_MS) * u64::from(MAX_POLLS);
        assert!(window_ms >= 5 * 60 * 1_000);
        assert!(MESSAGE_ROTATION_MS > 0);
    }

    #[test]
    fn polling_is_bounded() {
        let mut phase = VideoPhase::Polling {
            operation: "operations/abc".to_string(),
            polls: 0,
        };
        let mut pending_polls = 0;
        loop {
            phase = advance(&phase, VideoEvent::PollPending);
            pending_polls += 1;
            if matches!(phase, VideoPhase::Unavailable { .. }) {
                break;
            }
            assert!(pending_polls < MAX_POLLS + 1, "polling never terminated");
        }
        assert_eq!(pending_polls, MAX_POLLS);
        assert_eq!(
            phase,
            VideoPhase::Unavailable {
                message: TIMEOUT_MESSAGE.to_string(),
                quota: false
            }
        );
    }

    #[test]
    fn quota_failures_latch_and_others_do_not() {
        let quota = failure_event(&GenaiError::Http {
            status: 429,
            body: String::new(),
        });
        let phase = advance(&VideoPhase::Submitting, quota);
        assert!(phase.is_quota_blocked());
        assert_eq!(
            phase,
            VideoPhase::Unavailable {
                message: QUOTA_MESSAGE.to_string(),
                quota: true
            }
        );

        let transport = failure_event(&GenaiError::Network("offline".to_string()));
        let phase = advance(&VideoPhase::Submitting, transport);
        assert!(!phase.is_quota_blocked());
        assert_eq!(
            phase,
            VideoPhase::Unavailable {
                message: GENERIC_FAILURE_MESSAGE.to_string(),
                quota: false
            }
        );
    }

    #[test]
    fn a_missing_key_reads_as_feature_unavailable() {
        let event = failure_event(&GenaiError::MissingKey);
        assert_eq!(
            event,
            VideoEvent::Failed {
                message: MISSING_KEY_MESSAGE.to_string(),
                quota: false
            }
        );
    }

    #[test]
    fn resource_exhausted_bodies_count_as_quota() {
        let event = failure_event(&GenaiError::Http {
            status: 500,
            body: "RESOURCE_EXHAUSTED".to_string(),
        });
        assert!(matches!(event, VideoEvent::Failed { quota: true, .. }));
    }

    #[test]
    fn stray_events_do_not_derail_terminal_phases() {
        let ready = VideoPhase::Ready {
            url: "blob:demo".to_string(),
        };
        assert_eq!(advance(&ready, VideoEvent::PollPending), ready);
        assert_eq!(advance(&VideoPhase::Idle, VideoEvent::PollPending), VideoPhase::Idle);
    }
}
