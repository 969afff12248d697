//! Registry façade over a fixed set of validated scopes.

use crate::codec::{self, DecodeError, EncodeError};
use crate::scope::{validate_all, RawScope, TagSelection, ValidScope, ValidationError};

/// An immutable, name-keyed set of validated scopes.
///
/// Construction is atomic: every raw scope validates or no registry is
/// produced. After construction the registry is read-only, so concurrent
/// `encode`/`decode` calls from multiple threads need no synchronization.
///
/// # Example
///
/// ```rust
/// use tagwire_core::{canonical_checksum, RawScope, ScopeRegistry, TagSelection};
///
/// let tags: Vec<String> = vec!["read".into(), "write".into(), "admin".into()];
/// let registry = ScopeRegistry::new(vec![RawScope {
///     name: "acl".to_string(),
///     checksum: canonical_checksum(&tags),
///     tags,
/// }])
/// .unwrap();
///
/// let wire = registry
///     .encode(&[TagSelection::new("acl", ["admin", "read"])])
///     .unwrap();
/// let decoded = registry.decode(&wire).unwrap();
/// assert_eq!(decoded[0].tags, vec!["read", "admin"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeRegistry {
    scopes: Vec<ValidScope>,
}

impl ScopeRegistry {
    /// Validate `raws` in input order and freeze them into a registry.
    pub fn new(raws: Vec<RawScope>) -> Result<Self, ValidationError> {
        Ok(Self {
            scopes: validate_all(raws)?,
        })
    }

    /// Pack `selections` into wire text.
    ///
    /// Selections resolving to no tags contribute no block; the first
    /// unknown scope or tag aborts the whole call.
    pub fn encode(&self, selections: &[TagSelection]) -> Result<String, EncodeError> {
        codec::encode(&self.scopes, selections)
    }

    /// Parse wire text back into selections, one per block, tags in
    /// ascending index order.
    pub fn decode(&self, wire: &str) -> Result<Vec<TagSelection>, DecodeError> {
        codec::decode(&self.scopes, wire)
    }

    /// Look up a scope by name.
    pub fn find(&self, name: &str) -> Option<&ValidScope> {
        codec::find(&self.scopes, name)
    }

    /// Validated scopes in registration order.
    pub fn scopes(&self) -> &[ValidScope] {
        &self.scopes
    }

    /// Number of registered scopes.
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Returns true if no scopes are registered.
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}
