//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: rejected user intents

pub mod error;
