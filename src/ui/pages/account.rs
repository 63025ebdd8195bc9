//! Account landing page
//!
//! Greets the signed-in customer, or points to the login page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::account::use_account_context;
use crate::ui::common::LoadingSpinner;

/// Account overview page component
#[component]
pub fn AccountPage() -> impl IntoView {
    let account = use_account_context();

    view! {
        <div class="content-container flex justify-center py-12">
            {move || match account.customer.get() {
                Some(customer) => view! {
                    <div class="max-w-sm w-full flex flex-col gap-y-2">
                        <h1 class="text-large-semi">"Hello " {customer.display_name()}</h1>
                        <p class="text-base-regular text-gray-700">
                            "Signed in as " <span class="font-semibold">{customer.email.clone()}</span>
                        </p>
                    </div>
                }.into_any(),
                None if account.is_loading() => view! {
                    <LoadingSpinner message="Loading your account".to_string() />
                }.into_any(),
                None => view! {
                    <div class="max-w-sm w-full flex flex-col items-center gap-y-4">
                        <p class="text-base-regular text-gray-700">"You are not signed in."</p>
                        <A href="/account/login" attr:class="btn-primary">"Sign in"</A>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
