//! IRI local-name handling.
//!
//! Alignment API files in the wild use arbitrary prefixes for the alignment
//! vocabulary (IRIs like `http://…/alignmentonto1`), so the schema is
//! recovered by matching local names against known suffixes rather than
//! against a fixed namespace. The local name is the only signal used.

/// Return the local name of an IRI: the substring after the last `#`, or
/// after the last `/` when no `#` is present (trailing slashes stripped).
///
/// This is a naming-convention signal, not a guaranteed-unique identifier.
pub fn local_name(iri: &str) -> &str {
    if let Some(idx) = iri.rfind('#') {
        return &iri[idx + 1..];
    }
    let trimmed = iri.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}
