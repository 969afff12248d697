//! Raw scope validation

use std::collections::HashSet;

use thiserror::Error;

use super::types::{RawScope, ValidScope};
use crate::checksum::canonical_checksum;

/// Validation errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("scope name is empty")]
    EmptyScopeName,

    #[error("scope name '{name}' contains a reserved delimiter ('[' or ']')")]
    ReservedScopeName { name: String },

    #[error("checksum mismatch for scope '{name}': declared {declared}, computed {computed}")]
    ChecksumMismatch {
        name: String,
        declared: String,
        computed: String,
    },
}

/// Validate a single raw scope.
///
/// Duplicate tags are removed keeping the first occurrence, each surviving
/// tag is assigned its position as index, and the declared checksum must
/// match the canonical checksum of the deduplicated list.
pub fn validate(raw: RawScope) -> Result<ValidScope, ValidationError> {
    if raw.name.is_empty() {
        return Err(ValidationError::EmptyScopeName);
    }
    if raw.name.contains(['[', ']']) {
        return Err(ValidationError::ReservedScopeName { name: raw.name });
    }

    let tags = dedup_first_occurrence(raw.tags);
    let computed = canonical_checksum(&tags);
    if computed != raw.checksum {
        return Err(ValidationError::ChecksumMismatch {
            name: raw.name,
            declared: raw.checksum,
            computed,
        });
    }

    let tag_index = tags
        .iter()
        .enumerate()
        .map(|(idx, tag)| (tag.clone(), idx))
        .collect();

    Ok(ValidScope {
        name: raw.name,
        checksum: raw.checksum,
        tags,
        tag_index,
    })
}

/// Validate scopes in input order.
///
/// The first failure aborts the whole batch; no partial result is
/// returned.
pub fn validate_all(raws: Vec<RawScope>) -> Result<Vec<ValidScope>, ValidationError> {
    let mut scopes = Vec::with_capacity(raws.len());
    for raw in raws {
        scopes.push(validate(raw)?);
    }
    Ok(scopes)
}

/// Remove duplicate tags, keeping the first occurrence of each.
fn dedup_first_occurrence(tags: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(tags.len());
    tags.into_iter().filter(|tag| seen.insert(tag.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const AB_CHECKSUM: &str = "2HGWGNKVpyBAqxPboi5rSY5rStbRtUrfUWrnQwTzF3gM";
    const CAB_CHECKSUM: &str = "2icyXAVNHz29D1dTVYE59sm5foRZmqqBTY26bZdN3q58";

    fn raw(name: &str, checksum: &str, tags: &[&str]) -> RawScope {
        RawScope {
            name: name.to_string(),
            checksum: checksum.to_string(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn index_follows_first_occurrence_order() {
        let scope = validate(raw("xtest", CAB_CHECKSUM, &["c", "a", "b"])).unwrap();
        assert_eq!(scope.name(), "xtest");
        assert_eq!(scope.checksum(), CAB_CHECKSUM);
        assert_eq!(scope.tags(), ["c", "a", "b"]);
        assert_eq!(scope.index_of("c"), Some(0));
        assert_eq!(scope.index_of("a"), Some(1));
        assert_eq!(scope.index_of("b"), Some(2));
        assert_eq!(scope.index_of("d"), None);
    }

    #[test]
    fn duplicate_tags_collapse() {
        // Same checksum as the duplicate-free list, same index assignment
        let scope = validate(raw("xtest", CAB_CHECKSUM, &["c", "a", "b", "a", "c"])).unwrap();
        assert_eq!(scope.tags(), ["c", "a", "b"]);
        assert_eq!(scope.len(), 3);
    }

    #[test]
    fn empty_name_rejected() {
        let err = validate(raw("", AB_CHECKSUM, &["a", "b"])).unwrap_err();
        assert_eq!(err, ValidationError::EmptyScopeName);
    }

    #[test]
    fn reserved_delimiters_rejected() {
        for name in ["test[😇", "test]😇", "[", "a]b"] {
            let err = validate(raw(name, AB_CHECKSUM, &["a", "b"])).unwrap_err();
            assert_eq!(
                err,
                ValidationError::ReservedScopeName {
                    name: name.to_string()
                }
            );
        }
    }

    #[test]
    fn non_ascii_name_accepted() {
        assert!(validate(raw("test😇", AB_CHECKSUM, &["a", "b"])).is_ok());
    }

    #[test]
    fn checksum_mismatch_rejected() {
        let err = validate(raw("test", "ab19ec537f09499b26f", &["a", "b"])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::ChecksumMismatch {
                name: "test".to_string(),
                declared: "ab19ec537f09499b26f".to_string(),
                computed: AB_CHECKSUM.to_string(),
            }
        );
    }

    #[test]
    fn batch_aborts_on_first_failure() {
        // Second scope is defective; the valid first scope must not leak out
        let result = validate_all(vec![
            raw("test", AB_CHECKSUM, &["a", "b"]),
            raw("broken", "not-a-checksum", &["a", "b"]),
            raw("xtest", CAB_CHECKSUM, &["c", "a", "b"]),
        ]);
        assert!(matches!(
            result,
            Err(ValidationError::ChecksumMismatch { ref name, .. }) if name == "broken"
        ));
    }

    #[test]
    fn empty_batch_is_valid() {
        assert_eq!(validate_all(Vec::new()).unwrap(), Vec::new());
    }

    #[test]
    fn dedup_preserves_first_occurrence() {
        assert_eq!(
            dedup_first_occurrence(
                ["d", "a", "b", "a", "c"].iter().map(|s| s.to_string()).collect()
            ),
            ["d", "a", "b", "c"]
        );
    }
}
