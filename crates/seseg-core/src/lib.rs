//! # seseg-core
//!
//! Compose a single space-separated class name string from an arbitrarily
//! nested mix of text, numbers, booleans, absent values, lists, and
//! key → condition maps.
//!
//! Falsy values (`None`, `false`, `0`, `NaN`, empty or blank text) contribute
//! nothing. Lists are flattened. Map keys become tokens when their value is
//! truthy, except the reserved keys `class` and `className`, whose values are
//! composed recursively. Tokens are never deduplicated.
//!
//! ## Quick start
//!
//! ```rust
//! use seseg_core::{class_map, classes, compose_json};
//!
//! let loading = false;
//! let out = classes!(
//!     "btn",
//!     class_map! { "btn-loading" => loading, "btn-primary" => true },
//!     vec!["rounded", "shadow"],
//! );
//! assert_eq!(out, "btn btn-primary rounded shadow");
//!
//! // Same thing from JSON text
//! let json = r#"["btn", {"btn-loading": false, "btn-primary": true}, ["rounded", "shadow"]]"#;
//! assert_eq!(compose_json(json).unwrap(), out);
//! ```
//!
//! ## Modules
//!
//! - [`compose`] — aggregation, per-value production, whitespace normalization
//! - [`types`] — `ClassValue` input tree and insertion-ordered `ClassMap`
//! - [`json`] — `serde_json` conversion and JSON text entry points
//! - [`error`] — Error types for the text-parsing entry points

pub mod compose;
pub mod error;
pub mod json;
mod macros;
pub mod types;

pub use compose::{classes, normalize_whitespace, seseg, Composer, DEFAULT_RESERVED_KEYS};
pub use error::SesegError;
pub use json::{compose_json, compose_json_args};
pub use types::{ClassMap, ClassValue};
