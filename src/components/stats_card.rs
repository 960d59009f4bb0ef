//! Dashboard stat card

use leptos::*;

/// Single headline figure on the dashboard tab
#[component]
pub fn StatsCard<V>(title: &'static str, value: V) -> impl IntoView
where
    V: Fn() -> usize + 'static,
{
    view! {
        <div class="stats-card">
            <span class="stats-title">{title}</span>
            <span class="stats-value">{move || value()}</span>
        </div>
    }
}
