//! Shared Kernel - Domain-crossing minimal core
//!
//! Vocabulary every Vida crate agrees on:
//! - The unified [`error::app_error::AppError`] and its result alias
//! - The [`error::kind::ErrorKind`] classification and its HTTP mapping
//!
//! Only things with the same meaning in every crate belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
