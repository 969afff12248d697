//! Bitset wire codec.
//!
//! A selection is packed into the minimal byte array that addresses its
//! highest tag index, one bit per tag, then rendered as `name[payload]`
//! with a base58 payload. Blocks are self-delimiting, so the wire string
//! is their plain concatenation with no separator.
//!
//! # Wire grammar
//!
//! ```text
//! wire    ::= block*
//! block   ::= name "[" payload "]"
//! name    ::= one or more characters excluding '[' and ']'
//! payload ::= base58 text of a byte-packed bitset
//! ```
//!
//! A selection that resolves to no tags contributes no block, not an
//! empty-payload block.

use thiserror::Error;

use crate::digest::{from_text, to_text};
use crate::scope::{TagSelection, ValidScope};

/// Encode errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EncodeError {
    #[error("scope not found: {name}")]
    ScopeNotFound { name: String },

    #[error("tag not found in scope '{scope}': {tag}")]
    TagNotFound { scope: String, tag: String },
}

/// Decode errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeError {
    #[error("scope not found: {name}")]
    ScopeNotFound { name: String },

    #[error("malformed encoding: {reason}")]
    MalformedEncoding { reason: String },
}

/// Pack `selections` into wire text against `scopes`.
///
/// Fail-fast: the first unknown scope or tag aborts the call and no
/// partial wire string is returned.
pub(crate) fn encode(
    scopes: &[ValidScope],
    selections: &[TagSelection],
) -> Result<String, EncodeError> {
    let mut out = String::new();
    for selection in selections {
        let scope = find(scopes, &selection.name).ok_or_else(|| EncodeError::ScopeNotFound {
            name: selection.name.clone(),
        })?;

        let mut indices = Vec::with_capacity(selection.tags.len());
        let mut max_index: Option<usize> = None;
        for tag in &selection.tags {
            let idx = scope.index_of(tag).ok_or_else(|| EncodeError::TagNotFound {
                scope: selection.name.clone(),
                tag: tag.clone(),
            })?;
            indices.push(idx);
            max_index = Some(max_index.map_or(idx, |m| m.max(idx)));
        }

        // An empty selection contributes no block
        let Some(max_index) = max_index else {
            continue;
        };

        // Minimal byte count addressing the highest bit; the truncating
        // division is the bitset boundary
        let mut bits = vec![0u8; max_index / 8 + 1];
        for idx in indices {
            bits[idx / 8] |= 1 << (idx % 8);
        }

        out.push_str(scope.name());
        out.push('[');
        out.push_str(&to_text(&bits));
        out.push(']');
    }
    Ok(out)
}

/// Parse wire text back into selections against `scopes`.
///
/// Every block becomes its own [`TagSelection`] in block order; repeated
/// scope names are not merged. Output tags are in ascending index order.
/// Fail-fast: the first defective block aborts the call.
pub(crate) fn decode(scopes: &[ValidScope], wire: &str) -> Result<Vec<TagSelection>, DecodeError> {
    let mut out = Vec::new();
    for block in wire.split(']').map(str::trim).filter(|b| !b.is_empty()) {
        let (name, payload) =
            block
                .split_once('[')
                .ok_or_else(|| DecodeError::MalformedEncoding {
                    reason: format!("block '{block}' has no '[' delimiter"),
                })?;

        let bits = from_text(payload).map_err(|e| DecodeError::MalformedEncoding {
            reason: e.to_string(),
        })?;

        let scope = find(scopes, name).ok_or_else(|| DecodeError::ScopeNotFound {
            name: name.to_string(),
        })?;

        let mut tags = Vec::new();
        for (byte_idx, byte) in bits.iter().enumerate() {
            for bit in 0..8 {
                if byte & (1 << bit) == 0 {
                    continue;
                }
                let idx = byte_idx * 8 + bit;
                let tag = scope
                    .tag_at(idx)
                    .ok_or_else(|| DecodeError::MalformedEncoding {
                        reason: format!(
                            "bit {idx} is out of range for scope '{name}' ({} tags)",
                            scope.len()
                        ),
                    })?;
                tags.push(tag.to_string());
            }
        }

        out.push(TagSelection {
            name: name.to_string(),
            tags,
        });
    }
    Ok(out)
}

/// Look up a scope by name in registration order.
pub(crate) fn find<'a>(scopes: &'a [ValidScope], name: &str) -> Option<&'a ValidScope> {
    scopes.iter().find(|scope| scope.name() == name)
}
