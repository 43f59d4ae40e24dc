//! RDF/XML → Turtle transcoding.
//!
//! Matcher tooling emits RDF/XML; everything downstream here speaks Turtle.
//! This is a pure syntax conversion, no triples are touched.

use std::path::Path;

use crate::error::Result;
use crate::graph;

/// Convert one RDF/XML file to Turtle at `output`.
///
/// Propagates parse errors so a batch driver can report and move on.
pub fn rdfxml_to_turtle(input: &Path, output: &Path) -> Result<()> {
    let store = graph::parse_rdfxml_file(input)?;
    graph::write_turtle_file(&store, output)
}
