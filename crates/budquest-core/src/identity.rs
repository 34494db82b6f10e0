//! # Identifier Newtypes
//!
//! Domain-primitive newtypes for the four levels of the destination
//! hierarchy. Each identifier is a distinct type — you cannot pass a
//! [`CitySlug`] where a [`CountrySlug`] is expected, so a drill-down path
//! can never mix up its components.
//!
//! ## Validation
//!
//! All identifiers share the slug alphabet: non-empty, lowercase ASCII
//! letters, digits, and `-`, with no leading or trailing dash. Values are
//! trimmed before validation. Slugs are unique among siblings in a
//! catalog (enforced by [`crate::Catalog::integrity`]), not globally.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Check a candidate against the slug alphabet.
fn is_valid_slug(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with('-')
        && !s.ends_with('-')
        && s.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Helper macro to define a validated slug newtype. Generates the struct,
/// a validating `new()` constructor, `as_str()`, `Display`, and a
/// `Deserialize` impl that deserializes as a plain `String` and routes
/// through `new()` so invalid values are rejected at deserialization time —
/// not silently accepted.
macro_rules! slug_newtype {
    ($(#[$meta:meta])* $ty:ident, $err:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        pub struct $ty(String);

        impl $ty {
            /// Create the identifier from a string, validating the slug alphabet.
            ///
            /// # Errors
            ///
            /// Returns a [`ValidationError`] if the trimmed value is
            /// empty or contains characters outside the slug alphabet.
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let trimmed = value.into().trim().to_string();
                if !is_valid_slug(&trimmed) {
                    return Err(ValidationError::$err(trimmed));
                }
                Ok(Self(trimmed))
            }

            /// Access the identifier string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

slug_newtype!(
    /// Identifier for a continent, unique across the whole catalog
    /// (e.g., `north-america`).
    ContinentId,
    InvalidContinentId
);

slug_newtype!(
    /// Identifier for a country, unique among its continent's countries
    /// (e.g., `netherlands`).
    CountrySlug,
    InvalidCountrySlug
);

slug_newtype!(
    /// Identifier for a state or region, unique among its country's
    /// regions (e.g., `colorado`).
    RegionSlug,
    InvalidRegionSlug
);

slug_newtype!(
    /// Identifier for a city, unique among its region's cities
    /// (e.g., `denver`).
    CitySlug,
    InvalidCitySlug
);
