//! Account UI module
//!
//! Sign-in form, the template switching between the signed-out sub-views,
//! and the account context they share.

mod context;
mod login_form;
mod template;

pub use context::{
    AccountContext, RouterNavigator, provide_account_context, use_account_context,
};
pub use login_form::LoginForm;
pub use template::LoginTemplate;
