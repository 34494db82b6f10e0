//! # Error Types — Structured Error Hierarchy
//!
//! Errors raised by the core data model. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! Identifier validation failures carry the rejected value so a caller
//! (or a catalog author reading a log line) can see exactly which string
//! was refused.

use thiserror::Error;

/// Validation failures for identifier newtypes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Continent identifier is empty or contains characters outside the
    /// slug alphabet (lowercase ASCII letters, digits, `-`).
    #[error("invalid continent id: {0:?}")]
    InvalidContinentId(String),

    /// Country slug is empty or contains characters outside the slug alphabet.
    #[error("invalid country slug: {0:?}")]
    InvalidCountrySlug(String),

    /// Region slug is empty or contains characters outside the slug alphabet.
    #[error("invalid region slug: {0:?}")]
    InvalidRegionSlug(String),

    /// City slug is empty or contains characters outside the slug alphabet.
    #[error("invalid city slug: {0:?}")]
    InvalidCitySlug(String),
}
