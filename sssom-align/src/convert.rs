//! Alignment API → SSSOM conversion.
//!
//! One procedure over two in-memory graphs: discover the alignment schema of
//! the input (see [`crate::schema`]), walk its `Alignment` resources and
//! their cells, and assert the equivalent SSSOM mapping-set triples into a
//! fresh output store.

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use oxigraph::model::{
    GraphNameRef, Literal, NamedNode, NamedNodeRef, QuadRef, Subject, SubjectRef, Term, TermRef,
};
use oxigraph::store::Store;
use tracing::debug;

use crate::error::Result;
use crate::graph::{self, object_for, term_as_subject, term_text};
use crate::mapping_id;
use crate::schema::{self, Role};
use crate::terms;

/// Base IRI under which per-file mapping sets are minted.
pub const MAPPING_SET_BASE: &str = "http://example.org/mappings/";

/// Why an input produced no mapping set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Required discovery roles could not be resolved.
    MissingRoles(Vec<Role>),
    /// The graph contains no instance of the discovered Alignment class.
    NoAlignments,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingRoles(roles) => {
                let names: Vec<&str> = roles.iter().map(|r| r.suffix()).collect();
                write!(f, "missing expected elements: {}", names.join(", "))
            }
            SkipReason::NoAlignments => write!(f, "no Alignment instances found"),
        }
    }
}

/// A successfully generated SSSOM mapping set.
pub struct MappingSet {
    /// IRI of the mapping set resource.
    pub iri: NamedNode,
    /// Number of distinct mappings in the set.
    pub mapping_count: usize,
    store: Store,
}

impl MappingSet {
    /// Serialized Turtle with the standard SSSOM prefixes bound.
    pub fn to_turtle(&self) -> Result<Vec<u8>> {
        graph::serialize_turtle(&self.store)
    }

    /// Write the set to `path` as Turtle (atomic, parents created).
    pub fn write(&self, path: &Path) -> Result<()> {
        graph::write_turtle_file(&self.store, path)
    }

    /// The generated triples.
    pub fn store(&self) -> &Store {
        &self.store
    }
}

/// Outcome of converting one alignment document.
pub enum Outcome {
    /// A mapping set was produced.
    Converted(MappingSet),
    /// Nothing was produced; the reason is reportable to the user.
    Skipped(SkipReason),
}

/// Outcome of converting one file on disk.
pub enum FileOutcome {
    /// The mapping set was written to `path`.
    Written {
        path: PathBuf,
        mapping_count: usize,
    },
    /// No output file was produced.
    Skipped(SkipReason),
}

/// Convert an Alignment API Turtle document into an SSSOM mapping set.
///
/// `stem` names the set: its IRI is [`MAPPING_SET_BASE`] followed by `stem`.
/// Propagates Turtle syntax errors; schema or content shortfalls are
/// reported as [`Outcome::Skipped`], not errors.
pub fn convert_turtle(turtle: &str, stem: &str) -> Result<Outcome> {
    let input = graph::parse_turtle(turtle)?;
    convert_store(&input, stem)
}

/// Convert an already-parsed alignment graph into an SSSOM mapping set.
pub fn convert_store(input: &Store, stem: &str) -> Result<Outcome> {
    let schema = match schema::discover(input)?.resolve() {
        Ok(schema) => schema,
        Err(missing) => return Ok(Outcome::Skipped(SkipReason::MissingRoles(missing))),
    };

    // All resources typed as the discovered Alignment class, in lexicographic
    // IRI order so "first alignment wins" below is stable across runs.
    let mut alignments: Vec<Subject> = Vec::new();
    for quad in input.quads_for_pattern(
        None,
        Some(terms::RDF_TYPE),
        Some(schema.alignment.as_ref().into()),
        None,
    ) {
        alignments.push(quad?.subject);
    }
    alignments.sort_by_key(|subject| subject.to_string());
    alignments.dedup();
    if alignments.is_empty() {
        return Ok(Outcome::Skipped(SkipReason::NoAlignments));
    }

    let out = Store::new()?;
    let set_iri = NamedNode::new(format!("{MAPPING_SET_BASE}{stem}"))?;
    insert(&out, &set_iri, terms::RDF_TYPE, terms::OWL_ONTOLOGY)?;
    insert(&out, &set_iri, terms::RDF_TYPE, terms::SSSOM_MAPPING_SET)?;

    let mut subject_source: Option<Term> = None;
    let mut object_source: Option<Term> = None;
    let mut mapping_nodes: Vec<NamedNode> = Vec::new();
    let mut seen: BTreeSet<String> = BTreeSet::new();

    for alignment in &alignments {
        // First discovered sources win; later alignments never override.
        if subject_source.is_none() {
            subject_source = object_for(input, alignment.as_ref(), schema.onto1.as_ref())?;
        }
        if object_source.is_none() {
            object_source = object_for(input, alignment.as_ref(), schema.onto2.as_ref())?;
        }

        let mut cells: Vec<Term> = Vec::new();
        for quad in input.quads_for_pattern(
            Some(alignment.as_ref()),
            Some(schema.map.as_ref()),
            None,
            None,
        ) {
            cells.push(quad?.object);
        }
        cells.sort_by_key(|cell| cell.to_string());
        cells.dedup();

        for cell in &cells {
            let Some(cell_subject) = term_as_subject(cell) else {
                continue;
            };

            let entity1 = object_for(input, cell_subject, schema.entity1.as_ref())?;
            let entity2 = object_for(input, cell_subject, schema.entity2.as_ref())?;
            let (Some(entity1), Some(entity2)) = (entity1, entity2) else {
                // incomplete correspondence
                continue;
            };

            let measure = object_for(input, cell_subject, schema.measure.as_ref())?;
            let relation = object_for(input, cell_subject, schema.relation.as_ref())?;
            let cid = match &schema.cid {
                Some(predicate) => object_for(input, cell_subject, predicate.as_ref())?,
                None => None,
            };
            let cid = cid
                .as_ref()
                .and_then(term_text)
                .filter(|value| !value.is_empty());

            let mapping_iri = match &cid {
                Some(cid) => mapping_id::from_cid(set_iri.as_str(), cid),
                None => mapping_id::from_entity_pair(
                    set_iri.as_str(),
                    entity1.as_ref(),
                    entity2.as_ref(),
                ),
            };
            let mapping = NamedNode::new(mapping_iri)?;

            insert(&out, &mapping, terms::RDF_TYPE, terms::SSSOM_MAPPING)?;
            if let Some(cid) = &cid {
                let record_id = Literal::new_simple_literal(cid.as_str());
                insert(&out, &mapping, terms::SSSOM_RECORD_ID, &record_id)?;
            }

            insert(&out, &mapping, terms::SSSOM_SUBJECT_ID, entity1.as_ref())?;

            // Alignment "=" becomes skos:exactMatch; every other relation
            // value (including absent) becomes skos:relatedMatch.
            let predicate = match &relation {
                Some(Term::Literal(l)) if l.value() == "=" => terms::SKOS_EXACT_MATCH,
                _ => terms::SKOS_RELATED_MATCH,
            };
            insert(&out, &mapping, terms::SSSOM_PREDICATE_ID, predicate)?;
            insert(&out, &mapping, terms::SSSOM_OBJECT_ID, entity2.as_ref())?;

            // Non-numeric measures are ignored
            if let Some(value) = measure
                .as_ref()
                .and_then(term_text)
                .and_then(|text| text.trim().parse::<f64>().ok())
            {
                let confidence = Literal::new_typed_literal(value.to_string(), terms::XSD_DOUBLE);
                insert(&out, &mapping, terms::SSSOM_CONFIDENCE, &confidence)?;
            }

            insert(
                &out,
                &mapping,
                terms::SSSOM_MAPPING_JUSTIFICATION,
                terms::SEMAPV_UNSPECIFIED_MATCHING,
            )?;

            if seen.insert(mapping.as_str().to_owned()) {
                mapping_nodes.push(mapping);
            }
        }
    }

    if let Some(source) = &subject_source {
        insert(&out, &set_iri, terms::SSSOM_SUBJECT_SOURCE, source.as_ref())?;
    }
    if let Some(source) = &object_source {
        insert(&out, &set_iri, terms::SSSOM_OBJECT_SOURCE, source.as_ref())?;
    }
    for mapping in &mapping_nodes {
        insert(&out, &set_iri, terms::SSSOM_MAPPINGS, mapping)?;
    }

    debug!(
        "converted {} alignment(s) into {} mapping(s) for {}",
        alignments.len(),
        mapping_nodes.len(),
        set_iri
    );

    Ok(Outcome::Converted(MappingSet {
        iri: set_iri,
        mapping_count: mapping_nodes.len(),
        store: out,
    }))
}

/// Convert one Turtle file on disk, writing `<output>` on success.
///
/// The mapping set is named after the input file's stem. Serialization only
/// happens after extraction has fully succeeded, so no partial output file
/// is ever left behind.
pub fn convert_file(input: &Path, output: &Path) -> Result<FileOutcome> {
    let turtle = graph::read_to_string(input)?;
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    match convert_turtle(&turtle, &stem)? {
        Outcome::Converted(set) => {
            set.write(output)?;
            Ok(FileOutcome::Written {
                path: output.to_path_buf(),
                mapping_count: set.mapping_count,
            })
        }
        Outcome::Skipped(reason) => Ok(FileOutcome::Skipped(reason)),
    }
}

fn insert<'a>(
    store: &Store,
    subject: impl Into<SubjectRef<'a>>,
    predicate: impl Into<NamedNodeRef<'a>>,
    object: impl Into<TermRef<'a>>,
) -> Result<()> {
    store.insert(QuadRef::new(
        subject.into(),
        predicate.into(),
        object.into(),
        GraphNameRef::DefaultGraph,
    ))?;
    Ok(())
}
