//! Known error signatures and the matcher that applies them.
//!
//! The registry is compiled once and is read-only afterwards, so it can be
//! shared freely between threads.

pub mod http;
pub mod registry;

pub use http::{http_status_explanation, known_status_codes};
pub use registry::{Explainer, Signature};

use crate::core::MatchedError;
use once_cell::sync::Lazy;

static REGISTRY: Lazy<Vec<Signature>> =
    Lazy::new(|| registry::compile_table(registry::SIGNATURE_TABLE));

/// All signatures in the order they are checked.
pub fn signatures() -> &'static [Signature] {
    &REGISTRY
}

/// Run every signature against `text`.
///
/// Each signature contributes at most one match (its first occurrence).
/// Signatures are independent: several may fire on the same span.
pub fn match_all(text: &str) -> Vec<MatchedError> {
    match_with(signatures(), text)
}

pub fn match_with(signatures: &[Signature], text: &str) -> Vec<MatchedError> {
    signatures
        .iter()
        .filter_map(|signature| {
            signature
                .find(text)
                .map(|(matched_text, explanation)| MatchedError {
                    pattern: signature.pattern().to_string(),
                    matched_text,
                    explanation,
                })
        })
        .collect()
}
