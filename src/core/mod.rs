//! Core domain models and business logic for the storefront account area

pub mod account;
pub mod config;

pub use account::*;
