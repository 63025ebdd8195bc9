//! Login page component
//!
//! The signed-out account area, redirects to the account page once a
//! customer session exists.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::core::ACCOUNT_PATH;
use crate::ui::account::{LoginTemplate, use_account_context};

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let account = use_account_context();

    // Redirect if already signed in
    Effect::new(move |_| {
        if account.is_signed_in() {
            let navigate = use_navigate();
            navigate(ACCOUNT_PATH, Default::default());
        }
    });

    view! {
        <div class="content-container flex flex-col items-center">
            <LoginTemplate />
        </div>
    }
}
