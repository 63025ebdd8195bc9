use leptos::prelude::*;

/// Spinner size options
#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "spinner-sm",
            SpinnerSize::Medium => "spinner-md",
            SpinnerSize::Large => "spinner-lg",
        }
    }
}

/// Loading spinner component
#[component]
pub fn Spinner(
    /// Spinner size
    #[prop(default = SpinnerSize::Medium)]
    size: SpinnerSize,
    /// Optional label text
    #[prop(default = String::new())]
    label: String,
    /// Whether to center the spinner
    #[prop(default = false)]
    centered: bool,
) -> impl IntoView {
    let container_class = if centered {
        "spinner-container spinner-centered"
    } else {
        "spinner-container"
    };

    view! {
        <div class=container_class>
            <div class=format!("spinner {}", size.class()) role="status" aria-live="polite">
                <div class="spinner-circle-inner"></div>
                <span class="sr-only">"Loading..."</span>
            </div>
            {(!label.is_empty()).then(|| view! {
                <div class="spinner-label">{label.clone()}</div>
            })}
        </div>
    }
}

/// Simple loading spinner with default settings
#[component]
pub fn LoadingSpinner(
    /// Optional loading message
    #[prop(default = String::new())]
    message: String,
) -> impl IntoView {
    view! {
        <Spinner size=SpinnerSize::Medium label=message centered=true />
    }
}

/// Full-viewport overlay that blocks pointer input while visible
#[component]
pub fn LoadingOverlay(
    /// Whether overlay is visible
    #[prop(into)]
    visible: Signal<bool>,
    /// Background opacity (0.0 to 1.0)
    #[prop(default = 0.5)]
    opacity: f32,
) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div
                class="z-10 fixed inset-0 flex items-center justify-center"
                style=format!("background-color: rgba(255, 255, 255, {})", opacity)
                aria-busy="true"
            >
                <Spinner size=SpinnerSize::Small />
            </div>
        </Show>
    }
}
