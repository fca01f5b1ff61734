use dioxus::prelude::*;

use crate::content::use_generated_items;
use crate::pages::catalog;
use crate::router::Route;

#[component]
pub fn ContentPage(route: Route) -> Element {
    let Some(spec) = catalog::page_for(route) else {
        return rsx! {};
    };
    let items = use_generated_items(spec.prompt, spec.field, spec.title, spec.fallback);

    rsx! {
        document::Title { "{spec.title} | Meridian" }
        section { class: "section page",
            div { class: "container",
                div { class: "centered section-head",
                    h1 { "{spec.title}" }
                    p { class: "muted", "{spec.intro}" }
                }
                div { class: "stack narrow",
                    match items() {
                        Some(items) => rsx! {
                            for item in items.iter() {
                                div { key: "{item.title}", class: "card",
                                    h3 { "{item.title}" }
                                    p { "{item.description}" }
                                }
                            }
                        },
                        None => rsx! {
                            for index in 0..spec.fallback.len() {
                                div { key: "{index}", class: "card skeleton",
                                    div { class: "skeleton-line wide" }
                                    div { class: "skeleton-line" }
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}
