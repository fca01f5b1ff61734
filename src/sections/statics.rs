use dioxus::prelude::*;

const STATUS_ITEMS: &[(&str, &str)] = &[
    ("99.9%", "Uptime"),
    ("100ms", "Response Time"),
    ("50+", "Global Regions"),
    ("24/7", "Support"),
];

const STATS: &[(&str, &str)] = &[
    ("50K+", "Active Developers"),
    ("1M+", "Apps Deployed"),
    ("99.9%", "Uptime SLA"),
    ("150+", "Countries Served"),
];

#[component]
pub fn StatusStrip() -> Element {
    rsx! {
        section { class: "section slim",
            div { class: "container centered",
                h3 { "Platform Status" }
                span { class: "status-pill", "All Systems Operational" }
                div { class: "stat-row",
                    for (value, label) in STATUS_ITEMS.iter() {
                        div { key: "{label}", class: "stat",
                            p { class: "stat-value", "{value}" }
                            p { class: "muted", "{label}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn PricingSection() -> Element {
    rsx! {
        section { class: "section", id: "pricing",
            div { class: "container",
                div { class: "centered section-head",
                    h2 { "Simple, Transparent Pricing" }
                    p { class: "muted",
                        "Choose the perfect plan for your development needs. Scale up or down anytime."
                    }
                }
                div { class: "card-grid three",
                    div { class: "card plan",
                        h3 { "Starter" }
                        p { class: "plan-price", "$29" span { class: "muted", "/month" } }
                        ul { class: "point-list",
                            li { "5 Projects" }
                            li { "100GB Storage" }
                            li { "Basic Support" }
                            li { "SSL Certificates" }
                            li { "Global CDN" }
                        }
                        a { href: "/#", class: "button ghost", "Get Started" }
                    }
                    div { class: "card plan highlighted",
                        h3 { "Pro" }
                        p { class: "plan-price", "$99" span { class: "muted", "/month" } }
                        ul { class: "point-list",
                            li { "Unlimited Projects" }
                            li { "1TB Storage" }
                            li { "Priority Support" }
                            li { "Advanced Analytics" }
                            li { "Team Collaboration" }
                            li { "Custom Domains" }
                        }
                        a { href: "/#", class: "button primary", "Start Pro Trial" }
                    }
                    div { class: "card plan",
                        h3 { "Enterprise" }
                        p { class: "plan-price", "Custom" }
                        ul { class: "point-list",
                            li { "Unlimited Everything" }
                            li { "Dedicated Support" }
                            li { "SLA Guarantees" }
                            li { "Custom Integrations" }
                            li { "On-premise Options" }
                        }
                        a { href: "/#", class: "button ghost", "Contact Sales" }
                    }
                }
                div { class: "centered",
                    a { href: "/#/pricing-recommender", class: "card-link", "Help Me Choose" }
                }
            }
        }
    }
}

#[component]
pub fn StatsBand() -> Element {
    rsx! {
        section { class: "section band",
            div { class: "container stat-row",
                for (value, label) in STATS.iter() {
                    div { key: "{label}", class: "stat",
                        p { class: "stat-value", "{value}" }
                        p { class: "muted", "{label}" }
                    }
                }
            }
        }
    }
}
