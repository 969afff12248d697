//! Canonical vocabulary checksum.
//!
//! The checksum of a tag vocabulary depends only on the set of distinct
//! tags present: every tag is digested independently, the digests are
//! sorted, and the concatenation is digested again. Tag order and duplicate
//! entries do not change the result, so encoder and decoder can pin the
//! same vocabulary without agreeing on element order first.

use crate::digest::hash_text;

#[cfg(all(not(target_arch = "wasm32"), feature = "parallel"))]
use rayon::prelude::*;

/// Vocabularies at or above this size digest their tags in parallel
/// when the `parallel` feature is enabled.
#[cfg(all(not(target_arch = "wasm32"), feature = "parallel"))]
const PARALLEL_THRESHOLD: usize = 256;

/// Compute the canonical checksum of a tag vocabulary.
///
/// Order-invariant and duplicate-invariant: `["a", "b"]`, `["b", "a"]` and
/// `["a", "b", "a"]` all produce the same checksum.
pub fn canonical_checksum(tags: &[String]) -> String {
    let mut digests = tag_digests(tags);
    digests.sort_unstable();
    hash_text(&digests.concat())
}

/// Per-tag digests - parallel on native for large vocabularies, sequential
/// otherwise. Tags have no data dependency between each other; only the
/// sort above needs them all.
#[cfg(all(not(target_arch = "wasm32"), feature = "parallel"))]
fn tag_digests(tags: &[String]) -> Vec<String> {
    if tags.len() >= PARALLEL_THRESHOLD {
        tags.par_iter().map(|tag| hash_text(tag)).collect()
    } else {
        tags.iter().map(|tag| hash_text(tag)).collect()
    }
}

/// Sequential digests (WASM or when the parallel feature is disabled)
#[cfg(any(target_arch = "wasm32", not(feature = "parallel")))]
fn tag_digests(tags: &[String]) -> Vec<String> {
    tags.iter().map(|tag| hash_text(tag)).collect()
}
