//! Modal dialog and draft form field components
//!
//! Dialog, TextField, TextAreaField, SelectField, LinkFieldRow

use leptos::*;
use crate::models::LinkField;

/// Modal overlay with a titled content box. Clicking the overlay or the
/// close button fires `on_close`; clicks inside the box stay inside.
#[component]
pub fn Dialog<C>(title: String, on_close: C, children: Children) -> impl IntoView
where
    C: Fn(()) + 'static + Clone,
{
    let on_close_overlay = on_close.clone();
    let on_close_btn = on_close;

    view! {
        <div class="dialog-overlay" on:click=move |_| on_close_overlay(())>
            <div class="dialog-content" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog-header">
                    <h3>{title}</h3>
                    <button class="close-btn" on:click=move |_| on_close_btn(())>"✕"</button>
                </div>
                <div class="dialog-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Labeled single-line text input bound to a draft field
#[component]
pub fn TextField<G, S>(label: &'static str, value: G, on_input: S) -> impl IntoView
where
    G: Fn() -> String + 'static,
    S: Fn(String) + 'static,
{
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input type="text"
                prop:value=move || value()
                on:input=move |ev| on_input(event_target_value(&ev))
            />
        </div>
    }
}

/// Labeled multi-line text input bound to a draft field
#[component]
pub fn TextAreaField<G, S>(label: &'static str, value: G, on_input: S) -> impl IntoView
where
    G: Fn() -> String + 'static,
    S: Fn(String) + 'static,
{
    view! {
        <div class="form-group">
            <label>{label}</label>
            <textarea
                prop:value=move || value()
                on:input=move |ev| on_input(event_target_value(&ev))
            ></textarea>
        </div>
    }
}

/// Labeled select with a blank placeholder option
#[component]
pub fn SelectField<G, S>(
    label: &'static str,
    placeholder: &'static str,
    options: &'static [&'static str],
    value: G,
    on_change: S,
) -> impl IntoView
where
    G: Fn() -> String + 'static + Clone,
    S: Fn(String) + 'static,
{
    view! {
        <div class="form-group">
            <label>{label}</label>
            <select on:change=move |ev| on_change(event_target_value(&ev))>
                <option value="">{placeholder}</option>
                {options.iter().map(|opt| {
                    let value = value.clone();
                    view! {
                        <option value=*opt selected=move || value() == *opt>{*opt}</option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

/// Checkbox + URL pair for a resource link; the URL input only shows
/// while the box is checked.
#[component]
pub fn LinkFieldRow<G, S, U>(
    label: &'static str,
    value: G,
    on_toggle: S,
    on_url: U,
) -> impl IntoView
where
    G: Fn() -> LinkField + 'static + Clone,
    S: Fn(bool) + 'static,
    U: Fn(String) + 'static + Clone,
{
    let value_checked = value.clone();
    let value_shown = value.clone();
    let value_url = value;

    view! {
        <div class="link-field-row">
            <label class="checkbox-label">
                <input type="checkbox"
                    prop:checked=move || value_checked().checked
                    on:change=move |ev| on_toggle(event_target_checked(&ev))
                />
                <span class="link-label">{label}</span>
            </label>
            {move || {
                let value_url = value_url.clone();
                let on_url = on_url.clone();
                value_shown().checked.then(move || view! {
                    <input type="text" class="url-input"
                        placeholder=format!("Enter {} URL", label.to_lowercase())
                        prop:value=move || value_url().url
                        on:input=move |ev| on_url(event_target_value(&ev))
                    />
                })
            }}
        </div>
    }
}
