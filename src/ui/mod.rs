pub mod account;
pub mod common;
pub mod icon;
pub mod pages;

pub use account::{AccountContext, LoginForm, LoginTemplate, provide_account_context};
pub use icon::{Icon, icons};
