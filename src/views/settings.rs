//! Admin settings tab
//!
//! Form only; nothing is persisted anywhere, the Save button just logs.

use leptos::*;
use crate::utils::log::{get_logs_json, log_warn};

#[component]
pub fn SettingsView() -> impl IntoView {
    let (site_name, set_site_name) = create_signal(String::new());
    let (admin_email, set_admin_email) = create_signal(String::new());
    let (timezone, set_timezone) = create_signal(String::new());
    let (show_log, set_show_log) = create_signal(false);

    let save = move |_| {
        log_warn(
            "settings",
            &format!("save requested for '{}' (no persistence configured)", site_name.get()),
        );
    };

    view! {
        <div class="manager">
            <div class="manager-header">
                <h2>"Admin Settings"</h2>
                <p class="manager-subtitle">"Configure admin dashboard settings"</p>
            </div>
            <div class="form-group">
                <label>"Site Name"</label>
                <input type="text" placeholder="Enter site name"
                    prop:value=move || site_name.get()
                    on:input=move |ev| set_site_name.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label>"Admin Email"</label>
                <input type="email" placeholder="admin@example.com"
                    prop:value=move || admin_email.get()
                    on:input=move |ev| set_admin_email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label>"Timezone"</label>
                <input type="text" placeholder="Select timezone"
                    prop:value=move || timezone.get()
                    on:input=move |ev| set_timezone.set(event_target_value(&ev))
                />
            </div>
            <button class="submit-btn wide" on:click=save>"Save Settings"</button>

            <div class="diagnostics">
                <button class="log-toggle" on:click=move |_| set_show_log.update(|s| *s = !*s)>
                    {move || if show_log.get() { "Hide Session Log" } else { "Show Session Log" }}
                </button>
                // Snapshot taken at toggle time, not live.
                {move || show_log.get().then(|| view! {
                    <pre class="log-dump">{get_logs_json()}</pre>
                })}
            </div>
        </div>
    }
}
