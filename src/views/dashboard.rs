//! Dashboard overview tab

use leptos::*;
use crate::components::StatsCard;
use crate::DashboardContext;

/// Headline counts, derived live from the four collections
#[component]
pub fn DashboardView() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");

    view! {
        <div class="dashboard-grid">
            <StatsCard title="Total Resources" value=move || ctx.resources.with(|e| e.len()) />
            <StatsCard title="Active Projects" value=move || ctx.projects.with(|e| e.len()) />
            <StatsCard title="Team Members" value=move || ctx.team.with(|e| e.len()) />
            <StatsCard title="Admin Users" value=move || ctx.admins.with(|e| e.len()) />
        </div>
    }
}
