//! Customer sign-in for the storefront account area
//!
//! Framework-independent pieces of the sign-in form: credentials and their
//! validation, the form state, the authentication client and the controller
//! that ties them together. The Leptos components live in `ui::account`.

mod client;
mod credentials;
mod login;
mod session;
mod view;

pub use client::{AuthClient, AuthClientError, Customer, MedusaClient, RequestContext};
pub use credentials::{Field, FieldErrors, SignInCredentials, validate_field};
pub use login::{
    ACCOUNT_PATH, AUTH_ERROR_MESSAGE, AccountSession, FormStore, LoginController,
    LoginFormState, Navigator, SignInError, SubmitOutcome,
};
pub use session::{RefreshTicket, SessionRefresh};
pub use view::LoginView;
