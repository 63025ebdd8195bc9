//! Common reusable UI components
//!
//! Form inputs and loading indicators shared by the account pages.

pub mod form;
pub mod spinner;

pub use form::FormField;
pub use spinner::{LoadingOverlay, LoadingSpinner, Spinner, SpinnerSize};
