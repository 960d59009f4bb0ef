//! Admin dashboard: tabbed panels managing resources, projects, team
//! members, and admin accounts over in-memory collections.

use leptos::*;

mod components;
mod editor;
mod models;
mod utils;
mod views;

use editor::CollectionEditor;
use models::{AdminUser, Project, Resource, TeamMember};
use utils::log::log_info;
use views::{AccessView, DashboardView, ProjectsView, ResourcesView, SettingsView, TeamView};

/// Shared state of one dashboard instance. Created per mounted `App`, so
/// two dashboards (or a test harness) never share collections.
#[derive(Clone, Copy)]
pub struct DashboardContext {
    pub resources: ReadSignal<CollectionEditor<Resource>>,
    pub set_resources: WriteSignal<CollectionEditor<Resource>>,
    pub projects: ReadSignal<CollectionEditor<Project>>,
    pub set_projects: WriteSignal<CollectionEditor<Project>>,
    pub team: ReadSignal<CollectionEditor<TeamMember>>,
    pub set_team: WriteSignal<CollectionEditor<TeamMember>>,
    pub admins: ReadSignal<CollectionEditor<AdminUser>>,
    pub set_admins: WriteSignal<CollectionEditor<AdminUser>>,
}

impl DashboardContext {
    fn new() -> Self {
        let (resources, set_resources) = create_signal(CollectionEditor::new());
        let (projects, set_projects) =
            create_signal(CollectionEditor::seeded(models::seed_projects()));
        let (team, set_team) = create_signal(CollectionEditor::seeded(models::seed_team()));
        let (admins, set_admins) = create_signal(CollectionEditor::seeded(models::seed_admins()));
        DashboardContext {
            resources,
            set_resources,
            projects,
            set_projects,
            team,
            set_team,
            admins,
            set_admins,
        }
    }
}

// ============================================
// Tab navigation
// ============================================

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Dashboard,
    Resources,
    Projects,
    Team,
    Access,
    Settings,
}

const TABS: &[(Tab, &str)] = &[
    (Tab::Dashboard, "Dashboard"),
    (Tab::Resources, "Resources"),
    (Tab::Projects, "Projects"),
    (Tab::Team, "Team"),
    (Tab::Access, "Access"),
    (Tab::Settings, "Settings"),
];

#[component]
fn App() -> impl IntoView {
    let (current_tab, set_current_tab) = create_signal(Tab::Dashboard);
    provide_context(DashboardContext::new());

    view! {
        <div class="app">
            <h1 class="app-title">"Admin Dashboard"</h1>
            <div class="layout">
                <nav class="sidebar">
                    {TABS.iter().map(|(tab, label)| {
                        let tab = *tab;
                        view! {
                            <button
                                class=move || if current_tab.get() == tab { "tab-btn active" } else { "tab-btn" }
                                on:click=move |_| set_current_tab.set(tab)
                            >
                                {*label}
                            </button>
                        }
                    }).collect_view()}
                </nav>

                <main class="content">
                    {move || match current_tab.get() {
                        Tab::Dashboard => view! { <DashboardView /> }.into_view(),
                        Tab::Resources => view! { <ResourcesView /> }.into_view(),
                        Tab::Projects => view! { <ProjectsView /> }.into_view(),
                        Tab::Team => view! { <TeamView /> }.into_view(),
                        Tab::Access => view! { <AccessView /> }.into_view(),
                        Tab::Settings => view! { <SettingsView /> }.into_view(),
                    }}
                </main>
            </div>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    log_info("app", "admin dashboard mounted");
    mount_to_body(App);
}
