//! Team members management panel

use leptos::*;
use crate::components::{Dialog, EntryRow, SelectField, TextAreaField, TextField};
use crate::models::POSITION_OPTIONS;
use crate::utils::log::{log_info, log_info_with_data};
use crate::DashboardContext;
use serde_json::json;

#[component]
pub fn TeamView() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");
    let editor = ctx.team;
    let set_editor = ctx.set_team;

    let form_open = create_memo(move |_| editor.with(|e| e.form_open()));
    let entries = create_memo(move |_| editor.with(|e| e.entries().to_vec()));

    let open_form = move |_| {
        log_info("ui-action", "team member form opened");
        set_editor.update(|e| e.open());
    };

    view! {
        <div class="manager">
            <div class="manager-header">
                <h2>"Manage Team"</h2>
                <p class="manager-subtitle">"Add, edit, or delete team members"</p>
            </div>
            <button class="add-btn wide" on:click=open_form>"+ Add Team Member"</button>

            {move || form_open.get().then(|| view! { <TeamMemberDialog /> })}

            <div class="entry-list">
                {move || entries.get().into_iter().map(|entry| {
                    let id = entry.id;
                    let on_edit = move |_| {
                        log_info("ui-action", &format!("edit team member {}", id));
                        set_editor.update(|e| { e.start_edit(id); });
                    };
                    let on_delete = move |_| {
                        log_info("ui-action", &format!("delete team member {}", id));
                        set_editor.update(|e| { e.remove(id); });
                    };
                    let secondary = format!("{} - {}", entry.record.role, entry.record.position);
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

/// Creation / edit dialog for one team member
#[component]
fn TeamMemberDialog() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");
    let editor = ctx.team;
    let set_editor = ctx.set_team;

    let title = if editor.with_untracked(|e| e.editing().is_some()) {
        "Edit Team Member"
    } else {
        "Add New Team Member"
    };

    let submit = move |_| {
        set_editor.update(|e| {
            let replacing = e.editing().is_some();
            let id = e.submit();
            log_info_with_data(
                "ui-action",
                if replacing { "team member updated" } else { "team member added" },
                json!({ "id": id }),
            );
        });
    };

    let close = move |_: ()| {
        log_info("ui-action", "team member form closed");
        set_editor.update(|e| e.cancel());
    };

    view! {
        <Dialog title=title.to_string() on_close=close>
            <div class="form-grid">
                <TextField label="Name"
                    value=move || editor.with(|e| e.draft().name.clone())
                    on_input=move |v| set_editor.update(|e| e.update_draft(|d| d.name = v))
                />
                <TextField label="Role"
                    value=move || editor.with(|e| e.draft().role.clone())
                    on_input=move |v| set_editor.update(|e| e.update_draft(|d| d.role = v))
                />
                <SelectField label="Position"
                    placeholder="Select Position"
                    options=POSITION_OPTIONS
                    value=move || editor.with(|e| e.draft().position.clone())
                    on_change=move |v| set_editor.update(|e| e.update_draft(|d| d.position = v))
                />
                <TextAreaField label="Bio"
                    value=move || editor.with(|e| e.draft().bio.clone())
                    on_input=move |v| set_editor.update(|e| e.update_draft(|d| d.bio = v))
                />
                <TextField label="Image URL"
                    value=move || editor.with(|e| e.draft().image.clone())
                    on_input=move |v| set_editor.update(|e| e.update_draft(|d| d.image = v))
                />
                <TextField label="LinkedIn"
                    value=move || editor.with(|e| e.draft().linkedin.clone())
                    on_input=move |v| set_editor.update(|e| e.update_draft(|d| d.linkedin = v))
                />
                <TextField label="GitHub"
                    value=move || editor.with(|e| e.draft().github.clone())
                    on_input=move |v| set_editor.update(|e| e.update_draft(|d| d.github = v))
                />
            </div>
            <button class="submit-btn wide" on:click=submit>"Submit"</button>
        </Dialog>
    }
}
