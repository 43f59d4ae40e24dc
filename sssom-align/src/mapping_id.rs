//! Mapping IRI derivation.
//!
//! Mappings that carry a correspondence id are minted as `<set>#m<cid>`.
//! Cells without one fall back to a content hash of the entity pair: SHA-256
//! over the two terms' N-Triples forms, truncated to 16 hex characters. The
//! digest is stable across runs and implementations, unlike a process-seeded
//! hash, but offers no uniqueness guarantee — two cells repeating the same
//! entity pair collapse into one mapping IRI.

use std::fmt::Write as _;

use oxigraph::model::TermRef;
use sha2::{Digest, Sha256};

/// Digest bytes kept in the fallback id (16 hex characters).
const DIGEST_PREFIX_LEN: usize = 8;

/// Mapping IRI for a cell with a correspondence id.
pub fn from_cid(set_iri: &str, cid: &str) -> String {
    format!("{set_iri}#m{cid}")
}

/// Fallback mapping IRI for a cell without a correspondence id.
pub fn from_entity_pair(set_iri: &str, entity1: TermRef<'_>, entity2: TermRef<'_>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(entity1.to_string().as_bytes());
    hasher.update(b"\n");
    hasher.update(entity2.to_string().as_bytes());
    let digest = hasher.finalize();

    let mut id = String::with_capacity(DIGEST_PREFIX_LEN * 2);
    for byte in &digest[..DIGEST_PREFIX_LEN] {
        // infallible on String
        let _ = write!(id, "{byte:02x}");
    }
    format!("{set_iri}#m{id}")
}
