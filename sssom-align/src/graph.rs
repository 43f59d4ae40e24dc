//! Shared helpers for in-memory RDF graphs.
//!
//! Every pipeline in this crate works the same way: parse a file into a
//! fresh in-memory [`Store`], query it with triple patterns, and serialize a
//! store back to Turtle. The helpers here keep that plumbing in one place.

use std::fs;
use std::path::{Path, PathBuf};

use oxigraph::io::{RdfFormat, RdfSerializer};
use oxigraph::model::{GraphNameRef, NamedNodeRef, SubjectRef, Term};
use oxigraph::store::Store;

use crate::error::{AlignError, Result};

/// Prefixes bound in serialized Turtle output.
pub const OUTPUT_PREFIXES: [(&str, &str); 6] = [
    ("rdf", sssom_vocab::rdf::NS),
    ("owl", sssom_vocab::owl::NS),
    ("xsd", sssom_vocab::xsd::NS),
    ("skos", sssom_vocab::skos::NS),
    ("sssom", sssom_vocab::sssom::NS),
    ("semapv", sssom_vocab::semapv::NS),
];

/// Parse a Turtle document into a fresh in-memory store.
pub fn parse_turtle(turtle: &str) -> Result<Store> {
    let store = Store::new()?;
    store.load_from_reader(RdfFormat::Turtle, turtle.as_bytes())?;
    Ok(store)
}

/// Parse a Turtle file into a fresh in-memory store.
pub fn parse_turtle_file(path: &Path) -> Result<Store> {
    let text = read_to_string(path)?;
    parse_turtle(&text)
}

/// Parse an RDF/XML file into a fresh in-memory store.
pub fn parse_rdfxml_file(path: &Path) -> Result<Store> {
    let text = read_to_string(path)?;
    let store = Store::new()?;
    store.load_from_reader(RdfFormat::RdfXml, text.as_bytes())?;
    Ok(store)
}

/// Serialize the default graph of `store` as Turtle with the standard
/// prefixes bound.
pub fn serialize_turtle(store: &Store) -> Result<Vec<u8>> {
    let mut serializer = RdfSerializer::from_format(RdfFormat::Turtle);
    for (prefix, ns) in OUTPUT_PREFIXES {
        serializer = serializer.with_prefix(prefix, ns)?;
    }
    Ok(store.dump_graph_to_writer(GraphNameRef::DefaultGraph, serializer, Vec::new())?)
}

/// Serialize the default graph of `store` to `path` as Turtle.
///
/// The write goes through a `.tmp` sibling and rename; parent directories
/// are created as needed.
pub fn write_turtle_file(store: &Store, path: &Path) -> Result<()> {
    let bytes = serialize_turtle(store)?;
    write_atomic(path, &bytes)
}

/// Read a file to a string, attaching the path to any I/O error.
pub(crate) fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| AlignError::io(path, e))
}

/// Write `bytes` to `path` via a `.tmp` sibling and rename, creating parent
/// directories first.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| AlignError::io(parent, e))?;
        }
    }
    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);
    fs::write(&tmp, bytes).map_err(|e| AlignError::io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| AlignError::io(path, e))
}

/// First object of `(subject, predicate)` in the default graph, if any.
pub(crate) fn object_for(
    store: &Store,
    subject: SubjectRef<'_>,
    predicate: NamedNodeRef<'_>,
) -> Result<Option<Term>> {
    match store
        .quads_for_pattern(Some(subject), Some(predicate), None, None)
        .next()
    {
        Some(quad) => Ok(Some(quad?.object)),
        None => Ok(None),
    }
}

/// View a term as a subject for further pattern queries. Literals (and any
/// other non-resource term) have no subject form.
pub(crate) fn term_as_subject(term: &Term) -> Option<SubjectRef<'_>> {
    match term {
        Term::NamedNode(n) => Some(n.as_ref().into()),
        Term::BlankNode(b) => Some(b.as_ref().into()),
        _ => None,
    }
}

/// Text form of a term: the lexical value of a literal, or the IRI text of a
/// named node.
pub(crate) fn term_text(term: &Term) -> Option<String> {
    match term {
        Term::NamedNode(n) => Some(n.as_str().to_owned()),
        Term::Literal(l) => Some(l.value().to_owned()),
        _ => None,
    }
}
