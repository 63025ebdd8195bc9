//! Application pages module
//!
//! - Account overview (`/account`)
//! - Login (`/account/login`)
//! - Not found fallback

mod account;
mod login;
mod not_found;

pub use account::AccountPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
