//! Scope validation - from raw, caller-supplied vocabularies to frozen,
//! checksum-verified scopes.
//!
//! A scope binds a name to an ordered, duplicate-free tag list and a
//! canonical checksum of that list. Validation is all-or-nothing: any
//! defect (empty name, reserved delimiter, checksum mismatch) rejects the
//! scope, and in a batch the first rejection aborts the whole batch.
//!
//! # Example
//!
//! ```rust
//! use tagwire_core::checksum::canonical_checksum;
//! use tagwire_core::scope::{validate, RawScope};
//!
//! let tags = vec!["c".to_string(), "a".to_string(), "b".to_string()];
//! let scope = validate(RawScope {
//!     name: "xtest".to_string(),
//!     checksum: canonical_checksum(&tags),
//!     tags,
//! })
//! .unwrap();
//!
//! assert_eq!(scope.index_of("c"), Some(0));
//! assert_eq!(scope.index_of("b"), Some(2));
//! ```

mod types;
mod validate;

pub use types::{RawScope, TagSelection, ValidScope};
pub use validate::{validate, validate_all, ValidationError};
