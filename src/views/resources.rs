//! Resources management panel

use leptos::*;
use crate::components::{Dialog, EntryRow, LinkFieldRow, TextAreaField, TextField};
use crate::utils::log::{log_info, log_info_with_data};
use crate::DashboardContext;
use serde_json::json;

#[component]
pub fn ResourcesView() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");
    let editor = ctx.resources;
    let set_editor = ctx.set_resources;

    // Memos keep the dialog and list from being rebuilt on every draft keystroke.
    let form_open = create_memo(move |_| editor.with(|e| e.form_open()));
    let entries = create_memo(move |_| editor.with(|e| e.entries().to_vec()));

    let open_form = move |_| {
        log_info("ui-action", "resource form opened");
        set_editor.update(|e| e.open());
    };

    view! {
        <div class="manager">
            <div class="manager-header">
                <h2>"Manage Resources"</h2>
                <p class="manager-subtitle">"Add, edit, or delete resources"</p>
            </div>
            <button class="add-btn wide" on:click=open_form>"+ Add Resource"</button>

            {move || form_open.get().then(|| view! { <ResourceDialog /> })}

            <div class="entry-list">
                {move || editor.with(|e| e.is_empty()).then(|| view! {
                    <p class="empty-note">"No resources yet. Add the first one."</p>
                })}
                {move || entries.get().into_iter().map(|entry| {
                    let id = entry.id;
                    let on_edit = move |_| {
                        log_info("ui-action", &format!("edit resource {}", id));
                        set_editor.update(|e| { e.start_edit(id); });
                    };
                    let on_delete = move |_| {
                        log_info("ui-action", &format!("delete resource {}", id));
                        set_editor.update(|e| { e.remove(id); });
                    };
                    view! {
                        <EntryRow
                            primary=entry.record.name.clone()
                            secondary=entry.record.description.clone()
                            on_edit=on_edit
                            on_delete=on_delete
                        />
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Creation / edit dialog for one resource
#[component]
fn ResourceDialog() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");
    let editor = ctx.resources;
    let set_editor = ctx.set_resources;

    // Fixed at dialog creation; editing is set before the dialog opens.
    let title = if editor.with_untracked(|e| e.editing().is_some()) {
        "Edit Resource"
    } else {
        "Add New Resource"
    };

    let submit = move |_| {
        set_editor.update(|e| {
            let replacing = e.editing().is_some();
            let id = e.submit();
            log_info_with_data(
                "ui-action",
                if replacing { "resource updated" } else { "resource added" },
                json!({ "id": id }),
            );
        });
    };

    let close = move |_: ()| {
        log_info("ui-action", "resource form closed");
        set_editor.update(|e| e.cancel());
    };

    view! {
        <Dialog title=title.to_string() on_close=close>
            <TextField label="Name"
                value=move || editor.with(|e| e.draft().name.clone())
                on_input=move |v| set_editor.update(|e| e.update_draft(|d| d.name = v))
            />
            <TextAreaField label="Description"
                value=move || editor.with(|e| e.draft().description.clone())
                on_input=move |v| set_editor.update(|e| e.update_draft(|d| d.description = v))
            />
            <TextField label="Logo"
                value=move || editor.with(|e| e.draft().logo.clone())
                on_input=move |v| set_editor.update(|e| e.update_draft(|d| d.logo = v))
            />
            <LinkFieldRow label="Documents"
                value=move || editor.with(|e| e.draft().documents.clone())
                on_toggle=move |checked| set_editor.update(|e| e.update_draft(|d| d.documents.checked = checked))
                on_url=move |url| set_editor.update(|e| e.update_draft(|d| d.documents.url = url))
            />
            <LinkFieldRow label="Course"
                value=move || editor.with(|e| e.draft().course.clone())
                on_toggle=move |checked| set_editor.update(|e| e.update_draft(|d| d.course.checked = checked))
                on_url=move |url| set_editor.update(|e| e.update_draft(|d| d.course.url = url))
            />
            <LinkFieldRow label="Community"
                value=move || editor.with(|e| e.draft().community.clone())
                on_toggle=move |checked| set_editor.update(|e| e.update_draft(|d| d.community.checked = checked))
                on_url=move |url| set_editor.update(|e| e.update_draft(|d| d.community.url = url))
            />
            <button class="submit-btn" on:click=submit>"Submit"</button>
        </Dialog>
    }
}
