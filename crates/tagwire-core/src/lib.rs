//! tagwire Core Engine
//!
//! Encodes which subset of a checksum-pinned tag vocabulary ("scope") was
//! selected into a short, reversible ASCII string, and decodes it back.
//! Two parties holding the same vocabulary exchange selections without
//! transmitting tag names; the content-derived checksum catches silently
//! diverged vocabularies at registry construction time, before any wire
//! text is produced.
//!
//! Designed to run identically in browser (WASM) and server (native)
//! environments.
//!
//! # Features
//!
//! - `native` - Enable all native optimizations
//! - `parallel` - Parallel per-tag hashing via rayon for large vocabularies
//! - `wasm` - WASM-compatible build (excludes native-only features)
//!
//! # Example
//!
//! ```rust
//! use tagwire_core::{canonical_checksum, RawScope, ScopeRegistry, TagSelection};
//!
//! let tags: Vec<String> = vec!["read".into(), "write".into(), "admin".into()];
//! let registry = ScopeRegistry::new(vec![RawScope {
//!     name: "acl".to_string(),
//!     checksum: canonical_checksum(&tags),
//!     tags,
//! }])
//! .unwrap();
//!
//! let wire = registry
//!     .encode(&[TagSelection::new("acl", ["read", "admin"])])
//!     .unwrap();
//! assert_eq!(registry.decode(&wire).unwrap()[0].tags, vec!["read", "admin"]);
//! ```

pub mod bridge;
pub mod checksum;
pub mod codec;
pub mod digest;
pub mod registry;
pub mod scope;

// Re-export main types at crate root
pub use checksum::canonical_checksum;
pub use codec::{DecodeError, EncodeError};
pub use registry::ScopeRegistry;
pub use scope::{validate, validate_all, RawScope, TagSelection, ValidScope, ValidationError};

// JSON-based entry points for WASM bridge
pub use bridge::{checksum_json, decode_json, encode_json, registry_build_json};
