//! Projects management panel

use leptos::*;
use crate::components::{Dialog, EntryRow, TextAreaField, TextField};
use crate::utils::log::{log_info, log_info_with_data};
use crate::DashboardContext;
use serde_json::json;

#[component]
pub fn ProjectsView() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");
    let editor = ctx.projects;
    let set_editor = ctx.set_projects;

    let form_open = create_memo(move |_| editor.with(|e| e.form_open()));
    let entries = create_memo(move |_| editor.with(|e| e.entries().to_vec()));

    let open_form = move |_| {
        log_info("ui-action", "project form opened");
        set_editor.update(|e| e.open());
    };

    view! {
        <div class="manager">
            <div class="manager-header">
                <h2>"Manage Projects"</h2>
                <p class="manager-subtitle">"Add, edit, or delete projects"</p>
            </div>
            <button class="add-btn wide" on:click=open_form>"+ Add Project"</button>

            {move || form_open.get().then(|| view! { <ProjectDialog /> })}

            <div class="entry-list">
                {move || entries.get().into_iter().map(|entry| {
                    let id = entry.id;
                    let on_edit = move |_| {
                        log_info("ui-action", &format!("edit project {}", id));
                        set_editor.update(|e| { e.start_edit(id); });
                    };
                    let on_delete = move |_| {
                        log_info("ui-action", &format!("delete project {}", id));
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

/// Creation / edit dialog for one project, team lead fields included
#[component]
fn ProjectDialog() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");
    let editor = ctx.projects;
    let set_editor = ctx.set_projects;

    let title = if editor.with_untracked(|e| e.editing().is_some()) {
        "Edit Project"
    } else {
        "Add New Project"
    };

    let submit = move |_| {
        set_editor.update(|e| {
            let replacing = e.editing().is_some();
            let id = e.submit();
            log_info_with_data(
                "ui-action",
                if replacing { "project updated" } else { "project added" },
                json!({ "id": id }),
            );
        });
    };

    let close = move |_: ()| {
        log_info("ui-action", "project form closed");
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
            <TextAreaField label="Full Description"
                value=move || editor.with(|e| e.draft().full_description.clone())
                on_input=move |v| set_editor.update(|e| e.update_draft(|d| d.full_description = v))
            />
            <div class="form-subsection">
                <label class="subsection-label">"Team Lead"</label>
                <TextField label="Name"
                    value=move || editor.with(|e| e.draft().team_lead.name.clone())
                    on_input=move |v| set_editor.update(|e| e.update_draft(|d| d.team_lead.name = v))
                />
                <TextField label="Photo URL"
                    value=move || editor.with(|e| e.draft().team_lead.photo.clone())
                    on_input=move |v| set_editor.update(|e| e.update_draft(|d| d.team_lead.photo = v))
                />
                <TextField label="LinkedIn"
                    value=move || editor.with(|e| e.draft().team_lead.linkedin.clone())
                    on_input=move |v| set_editor.update(|e| e.update_draft(|d| d.team_lead.linkedin = v))
                />
                <TextField label="GitHub"
                    value=move || editor.with(|e| e.draft().team_lead.github.clone())
                    on_input=move |v| set_editor.update(|e| e.update_draft(|d| d.team_lead.github = v))
                />
            </div>
            <button class="submit-btn" on:click=submit>"Submit"</button>
        </Dialog>
    }
}
