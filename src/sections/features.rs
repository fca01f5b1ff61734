use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Feature {
    title: &'static str,
    description: &'static str,
    points: &'static [&'static str],
    link: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Meridian Studio IDE",
        description: "A powerful, cross-platform IDE for desktop, mobile, and the cloud.",
        points: &[
            "Unified development environment",
            "Cloud-synced workspaces",
            "Integrated debugging tools",
            "Extensible plugin architecture",
        ],
        link: "/#/studio",
    },
    Feature {
        title: "eCommerce & POS Suite",
        description: "A comprehensive system for managing online sales, inventory, and accounting.",
        points: &[
            "Real-time inventory sync",
            "Integrated payment gateways",
            "Customer relationship management",
            "Ledger export support",
        ],
        link: "/#/pos",
    },
    Feature {
        title: "Mobile SDK",
        description: "Build powerful, cross-platform mobile apps for business management.",
        points: &[
            "Single codebase, native feel",
            "Real-time data synchronization",
            "Offline capabilities",
            "Pre-built business modules",
        ],
        link: "/#/mobile-sdk",
    },
    Feature {
        title: "App Builder",
        description: "Visual app builder with drag-and-drop interface and pre-built components.",
        points: &[
            "No-code/low-code builder",
            "Pre-built templates",
            "Custom component library",
            "Real-time collaboration",
        ],
        link: "/#/app-builder",
    },
    Feature {
        title: "Cloud Hosting",
        description: "Reliable, scalable hosting solutions with global CDN and monitoring.",
        points: &[
            "Auto-scaling infrastructure",
            "Global edge deployment",
            "SSL certificates included",
            "99.9% uptime guarantee",
        ],
        link: "/#/cloud-hosting",
    },
    Feature {
        title: "Enterprise Solutions",
        description: "Custom solutions, consulting, and support for large organizations.",
        points: &[
            "Strategic consulting",
            "Custom development",
            "Team augmentation",
            "Dedicated enterprise support",
        ],
        link: "/#/enterprise-solutions",
    },
];

#[component]
pub fn Features() -> Element {
    rsx! {
        section { class: "section", id: "features",
            div { class: "container",
                div { class: "centered section-head",
                    h2 { "Complete Development Ecosystem" }
                    p { class: "muted",
                        "From concept to deployment, Meridian provides all the tools and services \
                         you need to build exceptional software."
                    }
                }
                div { class: "card-grid three",
                    for feature in FEATURES.iter() {
                        div { key: "{feature.title}", class: "card",
                            h3 { "{feature.title}" }
                            p { class: "muted", "{feature.description}" }
                            ul { class: "point-list",
                                for point in feature.points.iter() {
                                    li { "{point}" }
                                }
                            }
                            a { href: "{feature.link}", class: "card-link", "Learn More →" }
                        }
                    }
                }
            }
        }
    }
}
