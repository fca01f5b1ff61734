use dioxus::prelude::*;

const FOOTER_COLUMNS: &[(&str, &[(&str, &str)])] = &[
    (
        "Platform",
        &[
            ("Studio IDE", "/#/studio"),
            ("eCommerce & POS", "/#/pos"),
            ("Mobile SDK", "/#/mobile-sdk"),
            ("App Builder", "/#/app-builder"),
            ("Cloud Hosting", "/#/cloud-hosting"),
            ("Enterprise", "/#/enterprise-solutions"),
        ],
    ),
    (
        "Resources",
        &[
            ("Documentation", "/#/documentation"),
            ("Support", "/#/support"),
            ("Status", "/#/status"),
            ("Developer Training", "/#/developer-training"),
            ("Deployment", "/#/deployment"),
            ("Security & Monitoring", "/#/monitoring"),
        ],
    ),
    (
        "Company",
        &[
            ("About Us", "/#/about-us"),
            ("Product", "/#/product"),
            ("Solutions", "/#/solution"),
            ("Services", "/#/services"),
            ("Builds", "/#/builds"),
        ],
    ),
    (
        "Account",
        &[
            ("Dashboard", "/#/dashboard"),
            ("Profile", "/#/profile"),
            ("Settings", "/#/account"),
            ("Pricing Recommender", "/#/pricing-recommender"),
        ],
    ),
];

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "container footer-grid",
                for (heading, links) in FOOTER_COLUMNS.iter() {
                    nav { key: "{heading}", class: "footer-column", aria_label: "{heading}",
                        h4 { "{heading}" }
                        ul {
                            for (label, href) in links.iter() {
                                li { key: "{label}",
                                    a { href: "{href}", "{label}" }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "container footer-base",
                p { class: "muted", "© 2025 Meridian. All rights reserved." }
            }
        }
    }
}
