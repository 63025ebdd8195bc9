use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Form field with label, input and inline error message
#[component]
pub fn FormField(
    /// Field label text
    label: String,
    /// Control name submitted with the form
    #[prop(default = "")]
    name: &'static str,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Browser autofill hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Called when the input loses focus
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let has_error = move || error.as_ref().and_then(|e| e.get()).is_some();

    view! {
        <div class="space-y-1.5">
            <label class="label" for=name>
                {label}
            </label>
            <input
                type=input_type
                id=name
                name=name
                autocomplete=autocomplete
                class="input-base"
                class:border-red-500=has_error
                aria-invalid=move || if has_error() { "true" } else { "false" }
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| {
                    if let Some(callback) = on_blur.as_ref() {
                        callback.run(());
                    }
                }
            />
            {move || {
                error.as_ref().and_then(|e| e.get()).map(|err| view! {
                    <div class="flex items-center text-sm text-theme-error" role="alert">
                        <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                        <span>{err}</span>
                    </div>
                })
            }}
        </div>
    }
}
