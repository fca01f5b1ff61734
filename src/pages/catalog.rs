use crate::content::FallbackItem;
use crate::router::Route;

// One row per brochure page; ContentPage renders any of them. Fallback copy
// must stay shape-identical to generated copy so rendering never branches on
// provenance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageSpec {
    pub route: Route,
    pub title: &'static str,
    pub intro: &'static str,
    pub prompt: &'static str,
    pub field: &'static str,
    pub fallback: &'static [FallbackItem],
}

pub fn page_for(route: Route) -> Option<&'static PageSpec> {
    PAGES.iter().find(|spec| spec.route == route)
}

pub const PAGES: &[PageSpec] = &[
    PageSpec {
        route: Route::Studio,
        title: "Meridian Studio IDE",
        intro: "The heart of the Meridian ecosystem. A powerful, cross-platform Integrated Development Environment built for modern workflows.",
        prompt: "Generate content for a product page about 'Meridian Studio IDE'. It's a cross-platform IDE for desktop, mobile, and cloud. Mention it's the core of the Meridian platform. Generate a list of 3 key features with a title and a short description for each.",
        field: "features",
        fallback: &[
            FallbackItem {
                title: "True Cross-Platform Development",
                description: "Write code once and deploy seamlessly across desktop, mobile, and cloud environments from a single, unified IDE.",
            },
            FallbackItem {
                title: "Cloud-Synced Workspaces",
                description: "Start a project on your desktop and pick up right where you left off in the cloud, with all your settings and files synchronized.",
            },
            FallbackItem {
                title: "Intelligent Code Completion",
                description: "Accelerate your workflow with AI-powered code suggestions, smart refactoring, and integrated debugging tools.",
            },
        ],
    },
    PageSpec {
        route: Route::Pos,
        title: "eCommerce & POS Suite",
        intro: "A comprehensive system for managing online sales, inventory, and accounting from one place.",
        prompt: "Generate content for a product page about the 'Meridian eCommerce & POS Suite', a system for managing online sales, inventory, and accounting. Generate a list of 3 key features with a title and a short description for each.",
        field: "features",
        fallback: &[
            FallbackItem {
                title: "Real-Time Inventory Sync",
                description: "Stock levels update instantly across your storefront, point of sale, and warehouse so you never oversell.",
            },
            FallbackItem {
                title: "Integrated Payment Gateways",
                description: "Accept cards, mobile wallets, and online payments out of the box with unified settlement reporting.",
            },
            FallbackItem {
                title: "Built-In Customer Management",
                description: "Track purchase history, loyalty, and outreach from the same dashboard that runs your sales.",
            },
        ],
    },
    PageSpec {
        route: Route::MobileSdk,
        title: "Meridian Mobile SDK",
        intro: "Build powerful, cross-platform mobile apps for business management from a single codebase.",
        prompt: "Generate content for a product page about the 'Meridian Mobile SDK'. Mention it's for building cross-platform mobile business management apps from a single codebase. Generate a list of 3 key features with a title and a short description for each.",
        field: "features",
        fallback: &[
            FallbackItem {
                title: "One Codebase, Native Feel",
                description: "Build beautiful, high-performance native apps for both iOS and Android from a single codebase.",
            },
            FallbackItem {
                title: "Business Logic Included",
                description: "Get a head start with pre-built modules for common business tasks like real-time sales tracking, stock transactions, and user management.",
            },
            FallbackItem {
                title: "Offline-First Synchronization",
                description: "Build reliable apps that work even without an internet connection. Data automatically syncs with the cloud once connectivity is restored.",
            },
        ],
    },
    PageSpec {
        route: Route::AppBuilder,
        title: "App Builder",
        intro: "A visual app builder with a drag-and-drop interface, pre-built templates, and real-time collaboration.",
        prompt: "Generate content for a product page about the 'Meridian App Builder', a no-code/low-code visual builder with drag-and-drop components and real-time collaboration. Generate a list of 3 key features with a title and a short description for each.",
        field: "features",
        fallback: &[
            FallbackItem {
                title: "Drag-and-Drop Canvas",
                description: "Compose screens visually from a library of pre-built, production-ready components without writing boilerplate.",
            },
            FallbackItem {
                title: "Template Gallery",
                description: "Start from proven layouts for dashboards, storefronts, and internal tools, then customize every detail.",
            },
            FallbackItem {
                title: "Real-Time Collaboration",
                description: "Design together with your team and watch edits appear live, with granular roles and change history.",
            },
        ],
    },
    PageSpec {
        route: Route::CloudHosting,
        title: "Cloud Hosting",
        intro: "Reliable, scalable hosting with a global CDN, automatic SSL, and monitoring built in.",
        prompt: "Generate content for a product page about 'Meridian Cloud Hosting', a reliable auto-scaling hosting service with a global CDN and included SSL. Generate a list of 3 key features with a title and a short description for each.",
        field: "features",
        fallback: &[
            FallbackItem {
                title: "Auto-Scaling Infrastructure",
                description: "Capacity grows and shrinks with your traffic automatically, so launches and spikes never take you down.",
            },
            FallbackItem {
                title: "Global Edge Network",
                description: "Serve users from the region closest to them with built-in CDN caching across 50+ locations.",
            },
            FallbackItem {
                title: "Certificates and Backups Included",
                description: "Every site gets managed SSL, scheduled backups, and one-click restores at no extra cost.",
            },
        ],
    },
    PageSpec {
        route: Route::EnterpriseSolutions,
        title: "Enterprise Solutions",
        intro: "Custom development, strategic consulting, and team augmentation for large organizations.",
        prompt: "Generate content for a page about 'Enterprise Solutions' on the Meridian developer platform. This should cover custom development, strategic consulting, and team augmentation for large organizations. Generate a list of 3 key offerings with a title and a short description for each.",
        field: "offerings",
        fallback: &[
            FallbackItem {
                title: "Strategic Technology Consulting",
                description: "Partner with our architects to design scalable systems, optimize your cloud strategy, and implement best practices for security and compliance.",
            },
            FallbackItem {
                title: "Custom Feature & Application Development",
                description: "Our expert engineering team can build bespoke features, complex integrations, or entire applications on top of the Meridian platform to meet your unique business needs.",
            },
            FallbackItem {
                title: "Developer Team Augmentation",
                description: "Embed our senior Meridian developers directly into your teams to accelerate project timelines, transfer knowledge, and upskill your existing talent.",
            },
        ],
    },
    PageSpec {
        route: Route::Documentation,
        title: "Documentation",
        intro: "Guides, references, and deep dives for every corner of the platform.",
        prompt: "Generate a list of 3 key sections for the Documentation page on the Meridian developer platform. Provide a title and a short description for each section.",
        field: "sections",
        fallback: &[
            FallbackItem {
                title: "Getting Started Guide",
                description: "Follow our step-by-step tutorial to create and deploy your first application on Meridian.",
            },
            FallbackItem {
                title: "API Reference",
                description: "Explore detailed documentation for our platform's REST and GraphQL APIs, including endpoints and examples.",
            },
            FallbackItem {
                title: "Platform Services",
                description: "Deep dive into the specifics of each service, from Cloud Hosting configurations to CI/CD pipeline setup.",
            },
        ],
    },
    PageSpec {
        route: Route::Support,
        title: "Support",
        intro: "Help when you need it, from community answers to dedicated engineers.",
        prompt: "Generate a list of 3 support options for the Support page on the Meridian developer platform. Provide a title and a short description for each option.",
        field: "options",
        fallback: &[
            FallbackItem {
                title: "Community Forum",
                description: "Ask questions and share knowledge with other Meridian developers in our active community forum.",
            },
            FallbackItem {
                title: "Ticket Support",
                description: "Submit a support ticket for technical issues and get a response from our expert team within 24 hours (Pro and Enterprise).",
            },
            FallbackItem {
                title: "Live Chat",
                description: "Get instant help with your questions via live chat, available 24/7 for Enterprise plan customers.",
            },
        ],
    },
    PageSpec {
        route: Route::Status,
        title: "Platform Status",
        intro: "Current operational state of every Meridian system.",
        prompt: "Generate a list of 4 key systems for a developer platform's status page. Examples: API, App Builder, Cloud Hosting. For each, provide the system name as the title and a one-line operational status as the description.",
        field: "systems",
        fallback: &[
            FallbackItem {
                title: "Platform API",
                description: "Operational",
            },
            FallbackItem {
                title: "App Builder",
                description: "Operational",
            },
            FallbackItem {
                title: "Cloud Hosting",
                description: "Operational",
            },
            FallbackItem {
                title: "Deployment Services",
                description: "Operational",
            },
        ],
    },
    PageSpec {
        route: Route::DeveloperTraining,
        title: "Developer Training",
        intro: "Programs that take developers from first commit to production fluency.",
        prompt: "Generate a list of 3 key programs offered under 'Developer Training' on the Meridian developer platform. Provide a title and a short description for each program.",
        field: "programs",
        fallback: &[
            FallbackItem {
                title: "Full-Stack Bootcamp",
                description: "An intensive, project-based program covering everything from front-end frameworks to back-end architecture.",
            },
            FallbackItem {
                title: "Advanced DevOps",
                description: "Master CI/CD, containerization with Docker and Kubernetes, and infrastructure as code.",
            },
            FallbackItem {
                title: "Mentorship Program",
                description: "Get paired with a senior developer for one-on-one guidance, code reviews, and career advice.",
            },
        ],
    },
    PageSpec {
        route: Route::Deployment,
        title: "Deployment Environments",
        intro: "From git push to production, with previews and rollbacks along the way.",
        prompt: "Generate a list of 3 key features for a Deployment Environment service on the Meridian developer platform. Provide a title and a short description for each feature.",
        field: "features",
        fallback: &[
            FallbackItem {
                title: "Git-Based Workflows",
                description: "Connect your repository and deploy automatically on every push.",
            },
            FallbackItem {
                title: "Automated CI/CD Pipelines",
                description: "Build, test, and deploy your applications with zero-configuration, fully managed pipelines.",
            },
            FallbackItem {
                title: "Instant Rollbacks",
                description: "Easily revert to any previous deployment with a single click, ensuring stability and peace of mind.",
            },
        ],
    },
    PageSpec {
        route: Route::Monitoring,
        title: "Security & Monitoring",
        intro: "Keep applications healthy and protected around the clock.",
        prompt: "Generate a list of 3 key features for a Security & Monitoring service on the Meridian developer platform. Provide a title and a short description for each feature.",
        field: "features",
        fallback: &[
            FallbackItem {
                title: "Real-Time Performance Monitoring",
                description: "Track your application's health, response times, and error rates with our intuitive dashboards.",
            },
            FallbackItem {
                title: "DDoS Protection",
                description: "Enterprise-grade protection against distributed denial-of-service attacks to ensure your application stays online.",
            },
            FallbackItem {
                title: "Automated Security Audits",
                description: "Receive regular, automated security scans and reports to identify and patch vulnerabilities proactively.",
            },
        ],
    },
    PageSpec {
        route: Route::AboutUs,
        title: "About Meridian",
        intro: "The story and the people behind the platform.",
        prompt: "Write the content for an 'About Us' page for a developer platform called Meridian. The tone should be professional, inspiring, and focused on the company's origin and mission. Create two sections: one for 'Our Story' explaining how initial projects like Meridian Studio and the POS suite grew into a comprehensive platform, and one for 'Our Founder' with a brief bio of founder Amara Vance and her vision. Provide a title and a description for each section.",
        field: "sections",
        fallback: &[
            FallbackItem {
                title: "Our Story",
                description: "Meridian began as a collection of powerful, cross-platform software solutions designed to solve real-world business challenges. From the versatile Meridian Studio IDE to the robust eCommerce & POS system, each component was built with a developer-first mindset. As these tools evolved, they converged into the unified, comprehensive platform you see today, dedicated to empowering developers to build, deploy, and scale without limits.",
            },
            FallbackItem {
                title: "Our Founder",
                description: "Meridian was founded by Amara Vance, a developer with a passion for creating seamless, cross-platform tools. Her initial projects laid the groundwork for Meridian's core mission: to provide an integrated ecosystem that streamlines the entire development lifecycle, enabling businesses and developers to achieve their goals more efficiently.",
            },
        ],
    },
    PageSpec {
        route: Route::Product,
        title: "Product",
        intro: "The pillars that hold the platform together.",
        prompt: "Generate a list of 3 key 'Product Pillars' for the Meridian developer platform. Provide a title and a short description for each pillar.",
        field: "pillars",
        fallback: &[
            FallbackItem {
                title: "Unified Workflow",
                description: "From coding to deployment, all tools are integrated into one seamless experience to maximize productivity.",
            },
            FallbackItem {
                title: "Infinite Scalability",
                description: "Built on serverless architecture, our platform scales effortlessly to handle any workload without manual intervention.",
            },
            FallbackItem {
                title: "Developer-Centric Experience",
                description: "Designed by developers, for developers, with a focus on clean APIs, comprehensive documentation, and powerful CLI tools.",
            },
        ],
    },
    PageSpec {
        route: Route::Solution,
        title: "Solutions",
        intro: "Tailored paths for teams of every shape and size.",
        prompt: "Generate a list of 3 'Solutions' for different customer types on the Meridian developer platform (e.g., startups, enterprises). Provide a title and a short description for each solution.",
        field: "solutions",
        fallback: &[
            FallbackItem {
                title: "Solution for Startups",
                description: "Launch faster with our all-in-one platform. Go from idea to production in record time with scalable infrastructure that grows with you.",
            },
            FallbackItem {
                title: "Solution for Enterprises",
                description: "Enhance productivity and ensure governance with our secure, reliable platform. Benefit from dedicated support and enterprise-grade features.",
            },
            FallbackItem {
                title: "Solution for Agencies",
                description: "Manage multiple client projects effortlessly. Standardize your stack, streamline deployments, and collaborate efficiently with your team.",
            },
        ],
    },
    PageSpec {
        route: Route::Services,
        title: "Software Development",
        intro: "Hands-on engineering services from the team that builds the platform.",
        prompt: "Generate a list of 3 key services offered under 'Software Development' on the Meridian developer platform. Provide a title and a short description for each service.",
        field: "services",
        fallback: &[
            FallbackItem {
                title: "Custom Web Applications",
                description: "We build scalable, high-performance web apps tailored to your business needs using modern frameworks.",
            },
            FallbackItem {
                title: "Mobile App Development",
                description: "Engage your users on the go with native and cross-platform mobile applications for iOS and Android.",
            },
            FallbackItem {
                title: "API Design & Integration",
                description: "Create robust APIs and integrate third-party services to extend your application's functionality.",
            },
        ],
    },
    PageSpec {
        route: Route::Builds,
        title: "Builds",
        intro: "Continuous integration with full visibility into every pipeline run.",
        prompt: "Generate a list of 3 key features for a 'Builds' or CI/CD page on the Meridian developer platform. Provide a title and a short description for each feature.",
        field: "features",
        fallback: &[
            FallbackItem {
                title: "Deployment History",
                description: "View a complete, immutable log of all your deployments, including who deployed, when, and from which commit.",
            },
            FallbackItem {
                title: "Live Build Logs",
                description: "Stream build and test logs in real-time to quickly diagnose and resolve any issues in your CI/CD pipeline.",
            },
            FallbackItem {
                title: "Preview Deployments",
                description: "For every pull request, automatically generate a unique preview URL to test changes before merging to production.",
            },
        ],
    },
    PageSpec {
        route: Route::Account,
        title: "Account Settings",
        intro: "Manage your profile, billing, and account preferences here.",
        prompt: "Generate a list of 3 typical settings a user could manage in their Account Settings on the Meridian developer platform. Provide a title and a short description for each setting.",
        field: "settings",
        fallback: &[
            FallbackItem {
                title: "Profile Information",
                description: "Update your name, email address, and profile picture.",
            },
            FallbackItem {
                title: "Billing & Subscriptions",
                description: "Manage your payment methods, view invoices, and change your subscription plan.",
            },
            FallbackItem {
                title: "Security Settings",
                description: "Change your password, set up two-factor authentication, and view active sessions.",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MAX_BATCH;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_catalog_route_is_reachable_from_a_fragment() {
        for spec in PAGES {
            let fragment = spec.route.fragment().expect("catalog route has a fragment");
            assert_eq!(Route::resolve(fragment), spec.route);
            assert_eq!(page_for(spec.route), Some(spec));
        }
    }

    #[test]
    fn no_route_appears_twice() {
        for (index, spec) in PAGES.iter().enumerate() {
            assert!(
                !PAGES[index + 1..].iter().any(|other| other.route == spec.route),
                "duplicate catalog entry for {:?}",
                spec.route
            );
        }
    }

    #[test]
    fn fallback_batches_stay_within_requested_sizes() {
        for spec in PAGES {
            assert!(
                (2..=MAX_BATCH).contains(&spec.fallback.len()),
                "{:?} fallback batch out of range",
                spec.route
            );
        }
    }

    #[test]
    fn copy_is_present_for_every_entry() {
        for spec in PAGES {
            assert!(!spec.title.is_empty());
            assert!(!spec.intro.is_empty());
            assert!(!spec.prompt.is_empty());
            assert!(!spec.field.is_empty());
            for item in spec.fallback {
                assert!(!item.title.is_empty());
                assert!(!item.description.is_empty());
            }
        }
    }

    #[test]
    fn special_pages_stay_out_of_the_catalog() {
        for route in [
            Route::Landing,
            Route::Dashboard,
            Route::Profile,
            Route::PricingRecommender,
        ] {
            assert_eq!(page_for(route), None);
        }
    }
}
