//! # Legal-Status Classification — Single Source of Truth
//!
//! Defines the [`LegalStatus`] enum attached to every country in the
//! catalog. This is the ONE definition used across the stack; every
//! `match` on `LegalStatus` must be exhaustive.
//!
//! ## Forward Compatibility
//!
//! The classification set is closed at compile time, but catalog data is
//! not: a newer dataset may introduce a category this binary does not
//! know. Parsing therefore never fails — any unrecognized string maps to
//! [`LegalStatus::Other`]. The classification is display metadata only;
//! it is never a legal determination and never participates in search
//! matching.

use serde::{Deserialize, Serialize};

/// Legal-status classification of a country, for display purposes only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LegalStatus {
    /// Adult-use sales and possession are lawful nationwide or in most
    /// of the country.
    Recreational,
    /// Access is limited to medical programs.
    Medical,
    /// Possession of small amounts carries no criminal penalty, but sales
    /// remain restricted.
    Decriminalized,
    /// Anything else: tolerance policies, regional patchworks, or
    /// categories introduced after this binary was built.
    #[default]
    Other,
}

/// Total number of known classifications. Used for exhaustiveness checks
/// in tests.
pub const LEGAL_STATUS_COUNT: usize = 4;

impl LegalStatus {
    /// All known classifications in canonical order.
    pub fn all() -> &'static [LegalStatus] {
        &[
            Self::Recreational,
            Self::Medical,
            Self::Decriminalized,
            Self::Other,
        ]
    }

    /// The canonical wire name of this classification (e.g., `recreational`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recreational => "recreational",
            Self::Medical => "medical",
            Self::Decriminalized => "decriminalized",
            Self::Other => "other",
        }
    }

    /// Badge label shown next to a country card.
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Recreational => "Legal — adult use",
            Self::Medical => "Medical only",
            Self::Decriminalized => "Decriminalized",
            Self::Other => "Check local rules",
        }
    }
}

impl std::fmt::Display for LegalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LegalStatus {
    type Err = std::convert::Infallible;

    /// Parse a classification name. Matching is case-insensitive and an
    /// unrecognized name yields [`LegalStatus::Other`] — never an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "recreational" => Self::Recreational,
            "medical" => Self::Medical,
            "decriminalized" => Self::Decriminalized,
            _ => Self::Other,
        })
    }
}

impl Serialize for LegalStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LegalStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        // FromStr is infallible: unknown classifications degrade to Other.
        Ok(raw.parse().unwrap_or_default())
    }
}
