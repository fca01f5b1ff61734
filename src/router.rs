use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::config::use_api_config;
use crate::footer::Footer;
use crate::header::Header;
use crate::pages::{catalog, ContentPage, DashboardPage, PricingRecommenderPage, ProfilePage};
use crate::sections::{
    Cta, Features, Hero, PlatformOverview, PricingSection, StatsBand, StatusStrip, Testimonials,
    VideoDemo,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Landing,
    Studio,
    Pos,
    MobileSdk,
    AppBuilder,
    CloudHosting,
    EnterpriseSolutions,
    Documentation,
    Support,
    Status,
    DeveloperTraining,
    Deployment,
    Monitoring,
    AboutUs,
    Product,
    Solution,
    Services,
    Builds,
    Account,
    Dashboard,
    Profile,
    PricingRecommender,
}

// Exact-match table; anything else renders the landing composition.
pub const ROUTES: &[(&str, Route)] = &[
    ("#/studio", Route::Studio),
    ("#/pos", Route::Pos),
    ("#/mobile-sdk", Route::MobileSdk),
    ("#/app-builder", Route::AppBuilder),
    ("#/cloud-hosting", Route::CloudHosting),
    ("#/enterprise-solutions", Route::EnterpriseSolutions),
    ("#/documentation", Route::Documentation),
    ("#/support", Route::Support),
    ("#/status", Route::Status),
    ("#/developer-training", Route::DeveloperTraining),
    ("#/deployment", Route::Deployment),
    ("#/monitoring", Route::Monitoring),
    ("#/about-us", Route::AboutUs),
    ("#/product", Route::Product),
    ("#/solution", Route::Solution),
    ("#/services", Route::Services),
    ("#/builds", Route::Builds),
    ("#/account", Route::Account),
    ("#/dashboard", Route::Dashboard),
    ("#/profile", Route::Profile),
    ("#/pricing-recommender", Route::PricingRecommender),
];

impl Route {
    pub fn resolve(fragment: &str) -> Route {
        ROUTES
            .iter()
            .find(|(key, _)| *key == fragment)
            .map(|(_, route)| *route)
            .unwrap_or(Route::Landing)
    }

    pub fn fragment(self) -> Option<&'static str> {
        ROUTES
            .iter()
            .find(|(_, route)| *route == self)
            .map(|(key, _)| *key)
    }
}

fn current_fragment() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(hash) = window.location().hash() {
                return hash;
            }
        }
    }
    String::new()
}

#[cfg(target_arch = "wasm32")]
struct HashListener {
    closure: Rc<wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>>,
}

#[component]
pub fn App() -> Element {
    let config_resource = use_api_config();
    let Some(config) = config_resource() else {
        return rsx! {
            document::Title { "Meridian" }
            div { class: "page loading",
                h1 { "Loading..." }
            }
        };
    };
    use_context_provider(|| config);

    let fragment = use_signal(current_fragment);

    #[cfg(target_arch = "wasm32")]
    {
        let mut listener = use_signal(|| None::<HashListener>);
        use_effect(move || {
            if listener.read().is_some() {
                return;
            }
            use wasm_bindgen::closure::Closure;
            let Some(window) = web_sys::window() else {
                return;
            };
            let mut fragment = fragment;
            let closure = Rc::new(Closure::wrap(Box::new(move |_event: web_sys::Event| {
                fragment.set(current_fragment());
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
            }) as Box<dyn FnMut(_)>));
            let _ = window.add_event_listener_with_callback(
                "hashchange",
                closure.as_ref().as_ref().unchecked_ref(),
            );
            listener.set(Some(HashListener { closure }));
        });

        let listener = listener;
        use_drop(move || {
            if let Some(handle) = listener.read().as_ref() {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "hashchange",
                        handle.closure.as_ref().as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let route = Route::resolve(&fragment());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Meridian — Complete Developer Platform" }
        div { class: "shell",
            Header {}
            main { class: "content",
                {render_route(route)}
            }
            Footer {}
        }
    }
}

fn landing() -> Element {
    rsx! {
        Hero {}
        Features {}
        PlatformOverview {}
        VideoDemo {}
        StatusStrip {}
        PricingSection {}
        Testimonials {}
        StatsBand {}
        Cta {}
    }
}

fn render_route(route: Route) -> Element {
    match route {
        Route::Landing => landing(),
        Route::Dashboard => rsx! { DashboardPage {} },
        Route::Profile => rsx! { ProfilePage {} },
        Route::PricingRecommender => rsx! { PricingRecommenderPage {} },
        other => match catalog::page_for(other) {
            // Keyed per route so navigation tears the page down and refetches.
            Some(spec) => rsx! { ContentPage { key: "{spec.title}", route: spec.route } },
            None => landing(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_fragments_resolve_to_their_pages() {
        assert_eq!(Route::resolve("#/studio"), Route::Studio);
        assert_eq!(Route::resolve("#/dashboard"), Route::Dashboard);
        assert_eq!(Route::resolve("#/pricing-recommender"), Route::PricingRecommender);
    }

    #[test]
    fn unknown_fragments_fall_back_to_the_landing_composition() {
        assert_eq!(Route::resolve("#/nonexistent"), Route::Landing);
        assert_eq!(Route::resolve("#/studio/nested"), Route::Landing);
        assert_eq!(Route::resolve("#/studio?plan=pro"), Route::Landing);
    }

    #[test]
    fn empty_fragment_renders_the_landing_composition() {
        assert_eq!(Route::resolve(""), Route::Landing);
        assert_eq!(Route::resolve("#"), Route::Landing);
        assert_eq!(Route::resolve("#/"), Route::Landing);
    }

    #[test]
    fn matching_is_exact_and_case_sensitive() {
        assert_eq!(Route::resolve("#/Studio"), Route::Landing);
        assert_eq!(Route::resolve("#/studio "), Route::Landing);
    }

    #[test]
    fn the_table_has_no_duplicate_fragments() {
        for (index, (fragment, _)) in ROUTES.iter().enumerate() {
            assert!(
                !ROUTES[index + 1..].iter().any(|(other, _)| other == fragment),
                "duplicate fragment {fragment}"
            );
        }
    }

    #[test]
    fn fragments_round_trip_through_resolve() {
        for (fragment, route) in ROUTES {
            assert_eq!(Route::resolve(fragment), *route);
            assert_eq!(route.fragment(), Some(*fragment));
        }
        assert_eq!(Route::Landing.fragment(), None);
    }
}
