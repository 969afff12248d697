//! JSON entry points for the WASM bridge.
//!
//! String-in/string-out wrappers around the core, matching the host-side
//! calling convention: every function takes one JSON document and returns
//! one JSON document, with failures reported as `{"error":"..."}`. The
//! bridge owns a thread-local registry instance so hosts without shared
//! state can build once and encode/decode many times; the library API
//! proper stays stateless and takes the registry explicitly.

use std::cell::RefCell;

use serde::Deserialize;

use crate::checksum::canonical_checksum;
use crate::registry::ScopeRegistry;
use crate::scope::{RawScope, TagSelection};

thread_local! {
    static REGISTRY: RefCell<Option<ScopeRegistry>> = RefCell::new(None);
}

/// Build the bridge registry, replacing any previous instance.
/// Input: `{"scopes":[{"name":"...","checksum":"...","tags":["..."]},...]}`
/// Output: `{"ok":true,"scopes":N}` or `{"error":"..."}`
pub fn registry_build_json(input: &str) -> String {
    #[derive(Deserialize)]
    struct Input {
        scopes: Vec<RawScope>,
    }

    let parsed: Input = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(e) => return format!(r#"{{"error":"invalid JSON: {}"}}"#, e),
    };

    match ScopeRegistry::new(parsed.scopes) {
        Ok(registry) => {
            let count = registry.len();
            REGISTRY.with(|r| *r.borrow_mut() = Some(registry));
            format!(r#"{{"ok":true,"scopes":{}}}"#, count)
        }
        Err(e) => format!(
            r#"{{"error":"{}"}}"#,
            e.to_string().replace('"', "\\\"")
        ),
    }
}

/// Encode selections through the bridge registry.
/// Input: `{"selections":[{"name":"...","tags":["..."]},...]}`
/// Output: `{"encoded":"..."}` or `{"error":"..."}`
pub fn encode_json(input: &str) -> String {
    #[derive(Deserialize)]
    struct Input {
        selections: Vec<TagSelection>,
    }

    let parsed: Input = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(e) => return format!(r#"{{"error":"invalid JSON: {}"}}"#, e),
    };

    REGISTRY.with(|r| match r.borrow().as_ref() {
        None => r#"{"error":"registry not built"}"#.into(),
        Some(registry) => match registry.encode(&parsed.selections) {
            Ok(encoded) => match serde_json::to_string(&encoded) {
                Ok(json) => format!(r#"{{"encoded":{}}}"#, json),
                Err(e) => format!(r#"{{"error":"serialization failed: {}"}}"#, e),
            },
            Err(e) => format!(
                r#"{{"error":"{}"}}"#,
                e.to_string().replace('"', "\\\"")
            ),
        },
    })
}

/// Decode wire text through the bridge registry.
/// Input: `{"encoded":"..."}`
/// Output: `{"selections":[{"name":"...","tags":["..."]},...]}` or `{"error":"..."}`
pub fn decode_json(input: &str) -> String {
    #[derive(Deserialize)]
    struct Input {
        encoded: String,
    }

    let parsed: Input = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(e) => return format!(r#"{{"error":"invalid JSON: {}"}}"#, e),
    };

    REGISTRY.with(|r| match r.borrow().as_ref() {
        None => r#"{"error":"registry not built"}"#.into(),
        Some(registry) => match registry.decode(&parsed.encoded) {
            Ok(selections) => match serde_json::to_string(&selections) {
                Ok(json) => format!(r#"{{"selections":{}}}"#, json),
                Err(e) => format!(r#"{{"error":"serialization failed: {}"}}"#, e),
            },
            Err(e) => format!(
                r#"{{"error":"{}"}}"#,
                e.to_string().replace('"', "\\\"")
            ),
        },
    })
}

/// Canonical checksum of a tag list, for callers pinning a vocabulary.
/// Input: `{"tags":["..."]}`
/// Output: `{"checksum":"..."}` or `{"error":"..."}`
pub fn checksum_json(input: &str) -> String {
    #[derive(Deserialize)]
    struct Input {
        tags: Vec<String>,
    }

    let parsed: Input = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(e) => return format!(r#"{{"error":"invalid JSON: {}"}}"#, e),
    };

    format!(r#"{{"checksum":"{}"}}"#, canonical_checksum(&parsed.tags))
}
