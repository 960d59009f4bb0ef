//! Admin access management panel

use leptos::*;
use crate::components::{Dialog, EntryRow, SelectField, TextField};
use crate::models::POSITION_OPTIONS;
use crate::utils::log::{log_info, log_info_with_data};
use crate::DashboardContext;
use serde_json::json;

#[component]
pub fn AccessView() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");
    let editor = ctx.admins;
    let set_editor = ctx.set_admins;

    let form_open = create_memo(move |_| editor.with(|e| e.form_open()));
    let entries = create_memo(move |_| editor.with(|e| e.entries().to_vec()));

    let open_form = move |_| {
        log_info("ui-action", "admin form opened");
        set_editor.update(|e| e.open());
    };

    view! {
        <div class="manager">
            <div class="manager-header">
                <h2>"Manage Admin Access"</h2>
                <p class="manager-subtitle">"Control admin permissions"</p>
            </div>
            <button class="add-btn wide" on:click=open_form>"+ Add Admin"</button>

            {move || form_open.get().then(|| view! { <AdminDialog /> })}

            <div class="entry-list">
                {move || entries.get().into_iter().map(|entry| {
                    let id = entry.id;
                    let on_edit = move |_| {
                        log_info("ui-action", &format!("edit admin {}", id));
                        set_editor.update(|e| { e.start_edit(id); });
                    };
                    let on_delete = move |_| {
                        log_info("ui-action", &format!("delete admin {}", id));
                        set_editor.update(|e| { e.remove(id); });
                    };
                    let secondary = format!("{} - {}", entry.record.role, entry.record.email);
                    view! {
                        <EntryRow
                            primary=entry.record.name.clone()
                            secondary=secondary
                            on_edit=on_edit
                            on_delete=on_delete
                        />
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Creation / edit dialog for one admin account
#[component]
fn AdminDialog() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");
    let editor = ctx.admins;
    let set_editor = ctx.set_admins;

    let title = if editor.with_untracked(|e| e.editing().is_some()) {
        "Edit Admin"
    } else {
        "Add New Admin"
    };

    let submit = move |_| {
        set_editor.update(|e| {
            let replacing = e.editing().is_some();
            let id = e.submit();
            log_info_with_data(
                "ui-action",
                if replacing { "admin updated" } else { "admin added" },
                json!({ "id": id }),
            );
        });
    };

    let close = move |_: ()| {
        log_info("ui-action", "admin form closed");
        set_editor.update(|e| e.cancel());
    };

    view! {
        <Dialog title=title.to_string() on_close=close>
            <div class="form-grid">
                <TextField label="Name"
                    value=move || editor.with(|e| e.draft().name.clone())
                    on_input=move |v| set_editor.update(|e| e.update_draft(|d| d.name = v))
                />
                <TextField label="Email"
                    value=move || editor.with(|e| e.draft().email.clone())
                    on_input=move |v| set_editor.update(|e| e.update_draft(|d| d.email = v))
                />
                <SelectField label="Role"
                    placeholder="Select Role"
                    options=POSITION_OPTIONS
                    value=move || editor.with(|e| e.draft().role.clone())
                    on_change=move |v| set_editor.update(|e| e.update_draft(|d| d.role = v))
                />
            </div>
            <button class="submit-btn wide" on:click=submit>"Submit"</button>
        </Dialog>
    }
}
