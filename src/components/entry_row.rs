//! List row shared by all four management panels

use leptos::*;

/// One collection entry: primary/secondary text plus the row actions
#[component]
pub fn EntryRow<E, D>(
    primary: String,
    secondary: String,
    on_edit: E,
    on_delete: D,
) -> impl IntoView
where
    E: Fn(()) + 'static,
    D: Fn(()) + 'static,
{
    view! {
        <div class="entry-row">
            <div class="entry-text">
                <p class="entry-primary">{primary}</p>
                <p class="entry-secondary">{secondary}</p>
            </div>
            <div class="entry-actions">
                <button class="edit-btn" on:click=move |_| on_edit(())>"Edit"</button>
                <button class="delete-btn" on:click=move |_| on_delete(())>"Delete"</button>
            </div>
        </div>
    }
}
