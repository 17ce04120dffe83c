//! Entity Module

pub mod dashboard;
pub mod registration;
