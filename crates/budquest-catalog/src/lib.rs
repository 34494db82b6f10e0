//! # budquest-catalog — Catalog Acquisition
//!
//! Turns catalog sources into the [`budquest_core::Catalog`] value the
//! browser consumes. Three sources are supported:
//!
//! - [`builtin`] — the world dataset embedded in this crate,
//! - [`load_file`] — an operator-supplied YAML file (`--catalog`),
//! - [`from_yaml_str`] — any YAML string (tests, fixtures).
//!
//! The catalog file format mirrors the data model field for field: a
//! top-level `continents:` list with nested `countries:`, `regions:`,
//! `cities:`, and `facts:` sequences, all in display order.
//!
//! Loading is deliberately tolerant: structural defects are logged and
//! reported, never thrown (see [`loader`] for the rationale).

pub mod error;
pub mod loader;

pub use error::CatalogError;
pub use loader::{builtin, from_yaml_str, load_file};
