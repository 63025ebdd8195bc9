//! Sign-in flow
//!
//! `LoginFormState` holds what the form renders (field errors, the auth error
//! and the submitting flag). `LoginController` drives one submit cycle
//! against the injected collaborators:
//! - `AuthClient` to authenticate the credentials
//! - `AccountSession` to refresh the customer and switch sub-views
//! - `Navigator` to leave the form after a successful sign-in

use std::cell::RefCell;

use super::client::{AuthClient, AuthClientError, Customer, RequestContext};
use super::credentials::{Field, FieldErrors, SignInCredentials, validate_field};
use super::view::LoginView;
use crate::core::config::{Config, ConfigError};

/// Shown for every failed sign-in, whatever the cause
pub const AUTH_ERROR_MESSAGE: &str = "Invalid email or password";

/// Landing page after a successful sign-in
pub const ACCOUNT_PATH: &str = "/account";

/// Why a sign-in attempt failed. Never shown to the customer.
#[derive(Debug, thiserror::Error)]
pub enum SignInError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Auth(#[from] AuthClientError),
}

/// Account-wide session state shared with sibling views
pub trait AccountSession {
    /// Re-derive the current customer after the session changed
    fn refetch_customer(&self);

    fn set_login_view(&self, view: LoginView);
}

pub trait Navigator {
    fn navigate_to(&self, path: &str);
}

/// Local state of the sign-in form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFormState {
    field_errors: FieldErrors,
    auth_error: Option<&'static str>,
    submitting: bool,
}

impl LoginFormState {
    pub fn field_error(&self, field: Field) -> Option<&'static str> {
        self.field_errors.get(field)
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn auth_error(&self) -> Option<&'static str> {
        self.auth_error
    }

    /// True while an authentication request is outstanding
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Re-check one field, e.g. when it loses focus
    pub fn validate_field(&mut self, field: Field, value: &str) {
        self.field_errors.set(field, validate_field(field, value));
    }

    pub fn clear_field_error(&mut self, field: Field) {
        self.field_errors.set(field, None);
    }

    /// Start a submit cycle.
    ///
    /// Returns the credentials to send, or `None` when a field is missing or
    /// a previous attempt is still outstanding.
    pub fn begin_submit(&mut self, email: &str, password: &str) -> Option<SignInCredentials> {
        if self.submitting {
            return None;
        }

        self.auth_error = None;

        match SignInCredentials::validate(email, password) {
            Ok(credentials) => {
                self.field_errors = FieldErrors::default();
                self.submitting = true;
                Some(credentials)
            }
            Err(errors) => {
                self.field_errors = errors;
                None
            }
        }
    }

    /// End the submit cycle started by `begin_submit`
    pub fn finish_submit<T>(&mut self, result: &Result<T, SignInError>) {
        self.submitting = false;
        if result.is_err() {
            self.auth_error = Some(AUTH_ERROR_MESSAGE);
        }
    }
}

/// Somewhere the form state lives.
///
/// `modify` returns `None` when the state is gone, e.g. because the form was
/// unmounted by a navigation while the request was in flight.
pub trait FormStore {
    fn modify<R>(&self, f: impl FnOnce(&mut LoginFormState) -> R) -> Option<R>;
}

impl FormStore for RefCell<LoginFormState> {
    fn modify<R>(&self, f: impl FnOnce(&mut LoginFormState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Result of one submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed or an attempt was already running; nothing was sent
    NotSent,
    SignedIn,
    Failed,
}

/// Drives the sign-in form against its collaborators
#[derive(Debug, Clone)]
pub struct LoginController<A, S, N> {
    auth: A,
    session: S,
    navigator: N,
    sales_channel_id: Option<String>,
}

impl<A, S, N> LoginController<A, S, N>
where
    A: AuthClient,
    S: AccountSession,
    N: Navigator,
{
    pub fn new(auth: A, session: S, navigator: N, config: &Config) -> Self {
        Self {
            auth,
            session,
            navigator,
            sales_channel_id: config.sales_channel_id.clone(),
        }
    }

    /// Validate the input and, if complete, run one sign-in attempt.
    pub async fn submit<F: FormStore>(&self, form: &F, email: &str, password: &str) -> SubmitOutcome {
        let Some(credentials) = form
            .modify(|state| state.begin_submit(email, password))
            .flatten()
        else {
            return SubmitOutcome::NotSent;
        };

        let result = self.sign_in(&credentials).await;
        form.modify(|state| state.finish_submit(&result));

        match result {
            Ok(_) => SubmitOutcome::SignedIn,
            Err(_) => SubmitOutcome::Failed,
        }
    }

    /// Authenticate, then refresh the session and go to the account page.
    pub async fn sign_in(&self, credentials: &SignInCredentials) -> Result<Customer, SignInError> {
        match self.authenticate(credentials).await {
            Ok(customer) => {
                leptos::logging::log!("Customer signed in: {}", customer.id);
                self.session.refetch_customer();
                self.navigator.navigate_to(ACCOUNT_PATH);
                Ok(customer)
            }
            Err(SignInError::Config(err)) => {
                leptos::logging::error!("Sign-in misconfigured: {}", err);
                Err(err.into())
            }
            Err(err) => {
                leptos::logging::warn!("Sign-in rejected: {}", err);
                Err(err)
            }
        }
    }

    pub fn switch_view(&self, view: LoginView) {
        self.session.set_login_view(view);
    }

    async fn authenticate(&self, credentials: &SignInCredentials) -> Result<Customer, SignInError> {
        let sales_channel_id = self
            .sales_channel_id
            .clone()
            .ok_or(ConfigError::MissingSalesChannel)?;

        let context = RequestContext { sales_channel_id };
        Ok(self.auth.authenticate(credentials, &context).await?)
    }
}
