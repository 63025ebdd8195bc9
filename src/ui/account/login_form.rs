//! Login form component
//!
//! Sign-in form for returning customers: email and password, a blocking
//! overlay while the request is outstanding, and links to the register and
//! forgot-password views.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use super::context::{RouterNavigator, use_account_context};
use crate::core::config::Config;
use crate::core::{Field, LoginController, LoginFormState, LoginView, MedusaClient};
use crate::ui::common::{FormField, LoadingOverlay};

/// Login form component
#[component]
pub fn LoginForm() -> impl IntoView {
    let account = use_account_context();
    let config = expect_context::<Config>();

    let controller = LoginController::new(
        MedusaClient::new(&config),
        account,
        RouterNavigator::new(use_navigate()),
        &config,
    );

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form = RwSignal::new(LoginFormState::default());

    let submitting = Signal::derive(move || form.with(LoginFormState::is_submitting));
    let field_error = move |field: Field| {
        Signal::derive(move || form.with(|state| state.field_error(field).map(str::to_string)))
    };

    let on_submit = {
        let controller = controller.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();

            let controller = controller.clone();
            let email = email.get_untracked();
            let password = password.get_untracked();

            spawn_local(async move {
                controller.submit(&form, &email, &password).await;
            });
        }
    };

    let join_us = {
        let controller = controller.clone();
        move |_: leptos::ev::MouseEvent| controller.switch_view(LoginView::Register)
    };
    let forgot_password =
        move |_: leptos::ev::MouseEvent| controller.switch_view(LoginView::ForgotPassword);

    view! {
        <div class="max-w-sm w-full flex flex-col items-center">
            <LoadingOverlay visible=submitting />

            <h1 class="text-large-semi uppercase mb-6">{LoginView::SignIn.title()}</h1>
            <p class="text-center text-base-regular text-gray-700 mb-8">
                "Sign in to access an enhanced shopping experience."
            </p>

            <form class="w-full" novalidate=true on:submit=on_submit>
                <div class="flex flex-col w-full gap-y-2">
                    <FormField
                        label=Field::Email.to_string()
                        name=Field::Email.name()
                        input_type="email"
                        autocomplete="email"
                        value=email
                        on_input=Callback::new(move |value: String| {
                            email.set(value);
                            form.update(|state| state.clear_field_error(Field::Email));
                        })
                        on_blur=Callback::new(move |_: ()| {
                            form.update(|state| {
                                state.validate_field(Field::Email, &email.get_untracked())
                            });
                        })
                        error=field_error(Field::Email)
                    />
                    <FormField
                        label=Field::Password.to_string()
                        name=Field::Password.name()
                        input_type="password"
                        autocomplete="current-password"
                        value=password
                        on_input=Callback::new(move |value: String| {
                            password.set(value);
                            form.update(|state| state.clear_field_error(Field::Password));
                        })
                        on_blur=Callback::new(move |_: ()| {
                            form.update(|state| {
                                state.validate_field(Field::Password, &password.get_untracked())
                            });
                        })
                        error=field_error(Field::Password)
                    />
                </div>

                {move || {
                    form.with(LoginFormState::auth_error).map(|message| {
                        view! {
                            <div>
                                <span class="text-rose-500 w-full text-small-regular">{message}</span>
                            </div>
                        }
                    })
                }}

                <button
                    type="submit"
                    class="btn-primary w-full mt-6 disabled:opacity-50 disabled:cursor-not-allowed"
                    disabled=move || submitting.get()
                >
                    "Enter"
                </button>
            </form>

            <span class="text-center text-gray-700 text-small-regular mt-6">
                "Not a member? "
                <button type="button" class="underline" on:click=join_us>
                    "Join us"
                </button>
                "."
            </span>
            <span class="text-center text-gray-700 text-small-regular">
                <button type="button" class="underline" on:click=forgot_password>
                    "Forgot your password"
                </button>
                "?"
            </span>
        </div>
    }
}
