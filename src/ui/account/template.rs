use leptos::prelude::*;

use super::context::use_account_context;
use super::login_form::LoginForm;
use crate::core::{AccountSession, LoginView};

/// Signed-out account area: the sign-in form or one of its sibling views
#[component]
pub fn LoginTemplate() -> impl IntoView {
    let account = use_account_context();

    view! {
        <div class="w-full flex justify-center px-8 py-12">
            {move || match account.login_view.get() {
                LoginView::SignIn => view! { <LoginForm /> }.into_any(),
                selected => view! { <SiblingView selected=selected /> }.into_any(),
            }}
        </div>
    }
}

/// Register and forgot-password live in their own flows; this keeps the way
/// back to sign-in.
#[component]
fn SiblingView(selected: LoginView) -> impl IntoView {
    let account = use_account_context();

    view! {
        <div class="max-w-sm w-full flex flex-col items-center">
            <h1 class="text-large-semi uppercase mb-6">{selected.title()}</h1>
            <span class="text-center text-gray-700 text-small-regular">
                "Already a member? "
                <button
                    type="button"
                    class="underline"
                    on:click=move |_| account.set_login_view(LoginView::SignIn)
                >
                    "Back to sign in"
                </button>
                "."
            </span>
        </div>
    }
}
