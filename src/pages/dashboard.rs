use dioxus::prelude::*;
use serde::Deserialize;
use serde_json::json;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::config::ApiConfig;
use crate::genai::{self, GenaiError};

pub const STATUS_TICK_MS: i32 = 3_000;
pub const SUMMARY_FALLBACK: &str = "Could not load summary for this project.";

pub const DASHBOARD_PROMPT: &str = "Generate realistic data for a developer dashboard on the Meridian platform. Provide: 1. A list of 6 'projects' with just an id and a name (e.g., 'WebApp-Prod', 'Mobile-API'). 2. A list of 5 recent 'activity' items with an id, a short text description, and a relative time (e.g., '5m ago'). 3. A list of 4 'stats' for summary cards with a value (string), label (string), and a short description (string). The labels must be 'Active Projects', 'Deployments (Week)', 'Build Success', and 'Uptime'.";

const TECH_STACKS: &[&str] = &["React", "Vue", "Node.js", "Python", "Go", "Rust"];

pub const STATUS_ROTATION: &[ProjectStatus] = &[
    ProjectStatus::Active,
    ProjectStatus::Building,
    ProjectStatus::Error,
    ProjectStatus::Idle,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectStatus {
    Active,
    Building,
    Error,
    Idle,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Building => "Building",
            ProjectStatus::Error => "Error",
            ProjectStatus::Idle => "Idle",
        }
    }

    fn css_class(self) -> &'static str {
        match self {
            ProjectStatus::Active => "status-dot active",
            ProjectStatus::Building => "status-dot building",
            ProjectStatus::Error => "status-dot error",
            ProjectStatus::Idle => "status-dot idle",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatCard {
    pub value: String,
    pub label: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub tech: &'static str,
    pub status: ProjectStatus,
    pub last_deployed: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActivityItem {
    pub id: String,
    pub text: String,
    pub time: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardData {
    pub stats: Vec<StatCard>,
    pub projects: Vec<Project>,
    pub activity: Vec<ActivityItem>,
}

#[derive(Clone, Debug, Deserialize)]
struct RawProject {
    id: String,
    name: String,
}

#[derive(Clone, Debug, Deserialize)]
struct RawActivity {
    id: String,
    text: String,
    time: String,
}

#[derive(Clone, Debug, Deserialize)]
struct RawStat {
    value: String,
    label: String,
    description: String,
}

#[derive(Clone, Debug, Deserialize)]
struct RawDashboard {
    stats: Vec<RawStat>,
    projects: Vec<RawProject>,
    activity: Vec<RawActivity>,
}

fn dashboard_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "projects": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string" },
                        "name": { "type": "string" },
                    }
                }
            },
            "activity": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string" },
                        "text": { "type": "string" },
                        "time": { "type": "string" },
                    }
                }
            },
            "stats": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "value": { "type": "string" },
                        "label": { "type": "string" },
                        "description": { "type": "string" },
                    }
                }
            }
        }
    })
}

pub fn summary_prompt(project_name: &str) -> String {
    format!(
        "Generate a brief, one-paragraph project status summary for a project named \
         \"{project_name}\" on the Meridian developer platform. Include fictional but realistic \
         details about its latest build status (e.g., successful), last deployment time, and a \
         potential monitoring alert (e.g., 'CPU usage is high'). Keep it concise."
    )
}

fn enrich_projects(raw: Vec<RawProject>) -> Vec<Project> {
    raw.into_iter()
        .enumerate()
        .map(|(index, project)| Project {
            id: project.id,
            name: project.name,
            tech: TECH_STACKS[index % TECH_STACKS.len()],
            status: ProjectStatus::Active,
            last_deployed: format!("{} hours ago", (index * 5 + 2) % 24),
        })
        .collect()
}

pub fn parse_dashboard(payload: &serde_json::Value) -> Result<DashboardData, GenaiError> {
    let raw: RawDashboard = serde_json::from_value(payload.clone())
        .map_err(|err| GenaiError::Decode(format!("dashboard: {err}")))?;
    if raw.projects.is_empty() || raw.stats.is_empty() {
        return Err(GenaiError::Decode("dashboard payload is empty".to_string()));
    }
    Ok(DashboardData {
        stats: raw
            .stats
            .into_iter()
            .map(|stat| StatCard {
                value: stat.value,
                label: stat.label,
                description: stat.description,
            })
            .collect(),
        projects: enrich_projects(raw.projects),
        activity: raw
            .activity
            .into_iter()
            .map(|item| ActivityItem {
                id: item.id,
                text: item.text,
                time: item.time,
            })
            .collect(),
    })
}

pub fn fallback_dashboard() -> DashboardData {
    DashboardData {
        stats: vec![
            StatCard {
                value: "6".to_string(),
                label: "Active Projects".to_string(),
                description: "Projects with recent activity.".to_string(),
            },
            StatCard {
                value: "12".to_string(),
                label: "Deployments (Week)".to_string(),
                description: "Successful deployments in the last 7 days.".to_string(),
            },
            StatCard {
                value: "98.5%".to_string(),
                label: "Build Success".to_string(),
                description: "Success rate for all CI/CD builds.".to_string(),
            },
            StatCard {
                value: "99.98%".to_string(),
                label: "Uptime".to_string(),
                description: "Platform uptime over the last 30 days.".to_string(),
            },
        ],
        projects: vec![
            Project {
                id: "proj1".to_string(),
                name: "WebApp-Prod".to_string(),
                tech: "React",
                status: ProjectStatus::Active,
                last_deployed: "2 hours ago".to_string(),
            },
            Project {
                id: "proj2".to_string(),
                name: "Mobile-API".to_string(),
                tech: "Node.js",
                status: ProjectStatus::Idle,
                last_deployed: "1 day ago".to_string(),
            },
            Project {
                id: "proj3".to_string(),
                name: "Data-Pipeline".to_string(),
                tech: "Python",
                status: ProjectStatus::Building,
                last_deployed: "5 minutes ago".to_string(),
            },
            Project {
                id: "proj4".to_string(),
                name: "Marketing-Site".to_string(),
                tech: "Vue",
                status: ProjectStatus::Error,
                last_deployed: "3 hours ago".to_string(),
            },
        ],
        activity: vec![
            ActivityItem {
                id: "act1".to_string(),
                text: "Deployed 'WebApp-Prod' to production.".to_string(),
                time: "10m ago".to_string(),
            },
            ActivityItem {
                id: "act2".to_string(),
                text: "New comment on 'Mobile-API' by Jane Doe.".to_string(),
                time: "1h ago".to_string(),
            },
        ],
    }
}

pub fn apply_status_tick(projects: &mut [Project], pick: usize, status: ProjectStatus) {
    if projects.is_empty() {
        return;
    }
    let index = pick % projects.len();
    projects[index].status = status;
}

async fn load_dashboard(config: &ApiConfig) -> DashboardData {
    match genai::generate_structured(config, DASHBOARD_PROMPT, &dashboard_schema())
        .await
        .and_then(|payload| parse_dashboard(&payload))
    {
        Ok(data) => data,
        Err(err) => {
            tracing::debug!("dashboard fetch failed, using fallback: {err}");
            fallback_dashboard()
        }
    }
}

async fn load_summary(
    config: ApiConfig,
    project: Project,
    mut summary: Signal<String>,
    mut loading: Signal<bool>,
) {
    loading.set(true);
    match genai::generate_text(&config, &summary_prompt(&project.name)).await {
        Ok(text) => summary.set(text),
        Err(err) => {
            tracing::debug!("project summary failed for {}: {err}", project.name);
            summary.set(SUMMARY_FALLBACK.to_string());
        }
    }
    loading.set(false);
}

#[cfg(target_arch = "wasm32")]
struct IntervalHandle {
    id: i32,
    _closure: Rc<wasm_bindgen::closure::Closure<dyn FnMut()>>,
}

#[component]
pub fn DashboardPage() -> Element {
    let config = use_context::<ApiConfig>();
    let data = {
        let config = config.clone();
        use_resource(move || {
            let config = config.clone();
            async move { load_dashboard(&config).await }
        })
    };

    let mut projects = use_signal(Vec::<Project>::new);
    let mut selected = use_signal(|| None::<Project>);
    let summary = use_signal(String::new);
    let summary_loading = use_signal(|| false);
    let mut seeded = use_signal(|| false);
    let mut last_summary_id = use_signal(|| None::<String>);
    #[cfg(target_arch = "wasm32")]
    let mut simulation = use_signal(|| None::<IntervalHandle>);

    use_effect(move || {
        if seeded() {
            return;
        }
        let Some(loaded) = data() else {
            return;
        };
        seeded.set(true);
        projects.set(loaded.projects.clone());
        if let Some(first) = loaded.projects.first() {
            selected.set(Some(first.clone()));
        }
    });

    // One summary request per selection change; reselecting is a no-op.
    use_effect({
        let config = config.clone();
        move || {
            let selection = selected();
            let selection_id = selection.as_ref().map(|project| project.id.clone());
            if last_summary_id() == selection_id {
                return;
            }
            last_summary_id.set(selection_id);
            if let Some(project) = selection {
                spawn(load_summary(
                    config.clone(),
                    project,
                    summary,
                    summary_loading,
                ));
            }
        }
    });

    #[cfg(target_arch = "wasm32")]
    {
        use_effect(move || {
            use wasm_bindgen::closure::Closure;

            if simulation.read().is_some() {
                return;
            }
            let Some(window) = web_sys::window() else {
                return;
            };
            let mut tick_projects = projects;
            let closure = Rc::new(Closure::wrap(Box::new(move || {
                tick_projects.with_mut(|items| {
                    if items.is_empty() {
                        return;
                    }
                    let pick = (js_sys::Math::random() * items.len() as f64) as usize;
                    let status_index =
                        (js_sys::Math::random() * STATUS_ROTATION.len() as f64) as usize;
                    let status = STATUS_ROTATION[status_index.min(STATUS_ROTATION.len() - 1)];
                    apply_status_tick(items, pick, status);
                });
            }) as Box<dyn FnMut()>));
            if let Ok(id) = window.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().as_ref().unchecked_ref(),
                STATUS_TICK_MS,
            ) {
                simulation.set(Some(IntervalHandle { id, _closure: closure }));
            }
        });

        let simulation = simulation;
        use_drop(move || {
            if let Some(handle) = simulation.read().as_ref() {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(handle.id);
                }
            }
        });
    }

    let Some(loaded) = data() else {
        return rsx! {
            document::Title { "Dashboard | Meridian" }
            section { class: "section page",
                div { class: "container centered",
                    div { class: "spinner large", aria_label: "Loading dashboard" }
                    p { "Loading Dashboard..." }
                }
            }
        };
    };

    let selected_id = selected().map(|project| project.id);
    let selected_name = selected().map(|project| project.name).unwrap_or_default();

    rsx! {
        document::Title { "Dashboard | Meridian" }
        section { class: "section page",
            div { class: "container",
                div { class: "page-head",
                    div {
                        h1 { "Dashboard" }
                        p { class: "muted", "Welcome back, here's a summary of your projects." }
                    }
                    button { class: "button primary", "New Project" }
                }
                div { class: "card-grid four",
                    for stat in loaded.stats.iter() {
                        div { key: "{stat.label}", class: "card stat-card",
                            p { class: "stat-value", "{stat.value}" }
                            p { class: "strong", "{stat.label}" }
                            p { class: "muted small", "{stat.description}" }
                        }
                    }
                }
                div { class: "dashboard-grid",
                    div {
                        h2 { "Your Projects" }
                        div { class: "card-grid two",
                            {projects().into_iter().map(|project| {
                                let is_selected = selected_id.as_deref() == Some(project.id.as_str());
                                let card_class = if is_selected {
                                    "card project selected"
                                } else {
                                    "card project"
                                };
                                let chosen = project.clone();
                                rsx! {
                                    div {
                                        key: "{project.id}",
                                        class: "{card_class}",
                                        onclick: move |_| {
                                            let already = selected
                                                .peek()
                                                .as_ref()
                                                .map(|current| current.id.clone());
                                            if already.as_deref() == Some(chosen.id.as_str()) {
                                                return;
                                            }
                                            selected.set(Some(chosen.clone()));
                                        },
                                        div { class: "project-head",
                                            h3 { "{project.name}" }
                                            span { class: "tech-tag", "{project.tech}" }
                                        }
                                        div { class: "project-status",
                                            span { class: "{project.status.css_class()}" }
                                            span { "{project.status.label()}" }
                                        }
                                        p { class: "muted small", "Last deployed: {project.last_deployed}" }
                                    }
                                }
                            })}
                        }
                    }
                    div { class: "stack",
                        div { class: "card",
                            h3 { "AI-Generated Status for {selected_name}" }
                            if summary_loading() {
                                div { class: "stack",
                                    div { class: "skeleton-line wide" }
                                    div { class: "skeleton-line wide" }
                                    div { class: "skeleton-line" }
                                }
                            } else {
                                p { class: "muted prewrap", "{summary}" }
                            }
                        }
                        div { class: "card",
                            h2 { "Recent Activity" }
                            ul { class: "activity-list",
                                for item in loaded.activity.iter() {
                                    li { key: "{item.id}",
                                        p { "{item.text}" }
                                        p { class: "muted small", "{item.time}" }
                                    }
                                }
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
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn parsed_payloads_are_enriched_deterministically() {
        let payload = json!({
            "stats": [
                { "value": "6", "label": "Active Projects", "description": "d" },
            ],
            "projects": [
                { "id": "p1", "name": "WebApp-Prod" },
                { "id": "p2", "name": "Mobile-API" },
            ],
            "activity": [
                { "id": "a1", "text": "Deployed.", "time": "5m ago" },
            ]
        });
        let data = parse_dashboard(&payload).unwrap();
        assert_eq!(data.projects.len(), 2);
        assert_eq!(data.projects[0].tech, "React");
        assert_eq!(data.projects[1].tech, "Vue");
        assert!(data
            .projects
            .iter()
            .all(|project| project.status == ProjectStatus::Active));
    }

    #[test]
    fn empty_payloads_are_malformed() {
        let payload = json!({ "stats": [], "projects": [], "activity": [] });
        assert!(parse_dashboard(&payload).is_err());
        assert!(parse_dashboard(&json!({})).is_err());
    }

    #[test]
    fn the_fallback_dataset_is_render_ready() {
        let data = fallback_dashboard();
        assert_eq!(data.stats.len(), 4);
        assert_eq!(data.stats[0].label, "Active Projects");
        assert!(!data.projects.is_empty());
        assert!(!data.activity.is_empty());
    }

    #[test]
    fn status_ticks_wrap_and_tolerate_empty_lists() {
        assert_eq!(STATUS_ROTATION.len(), 4);
        assert!(STATUS_TICK_MS > 0);
        let mut projects = fallback_dashboard().projects;
        let count = projects.len();
        apply_status_tick(&mut projects, count + 1, ProjectStatus::Error);
        assert_eq!(projects[1].status, ProjectStatus::Error);

        let mut none: Vec<Project> = Vec::new();
        apply_status_tick(&mut none, 0, ProjectStatus::Idle);
        assert!(none.is_empty());
    }

    #[test]
    fn summary_prompts_name_the_project() {
        assert!(summary_prompt("WebApp-Prod").contains("\"WebApp-Prod\""));
    }
}
