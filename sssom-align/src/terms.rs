//! Vocabulary IRIs as borrowed oxigraph terms.
//!
//! `sssom-vocab` keeps the IRIs as plain strings; this module lifts the ones
//! the library actually asserts into `NamedNodeRef` constants.

use oxigraph::model::NamedNodeRef;
use sssom_vocab::{owl, rdf, semapv, skos, sssom, xsd};

pub const RDF_TYPE: NamedNodeRef<'static> = NamedNodeRef::new_unchecked(rdf::TYPE);

pub const OWL_ONTOLOGY: NamedNodeRef<'static> = NamedNodeRef::new_unchecked(owl::ONTOLOGY);
pub const OWL_AXIOM: NamedNodeRef<'static> = NamedNodeRef::new_unchecked(owl::AXIOM);

pub const XSD_DOUBLE: NamedNodeRef<'static> = NamedNodeRef::new_unchecked(xsd::DOUBLE);

pub const SKOS_EXACT_MATCH: NamedNodeRef<'static> = NamedNodeRef::new_unchecked(skos::EXACT_MATCH);
pub const SKOS_RELATED_MATCH: NamedNodeRef<'static> =
    NamedNodeRef::new_unchecked(skos::RELATED_MATCH);

pub const SSSOM_MAPPING_SET: NamedNodeRef<'static> = NamedNodeRef::new_unchecked(sssom::MAPPING_SET);
pub const SSSOM_MAPPING: NamedNodeRef<'static> = NamedNodeRef::new_unchecked(sssom::MAPPING);
pub const SSSOM_MAPPINGS: NamedNodeRef<'static> = NamedNodeRef::new_unchecked(sssom::MAPPINGS);
pub const SSSOM_SUBJECT_ID: NamedNodeRef<'static> = NamedNodeRef::new_unchecked(sssom::SUBJECT_ID);
pub const SSSOM_OBJECT_ID: NamedNodeRef<'static> = NamedNodeRef::new_unchecked(sssom::OBJECT_ID);
pub const SSSOM_PREDICATE_ID: NamedNodeRef<'static> =
    NamedNodeRef::new_unchecked(sssom::PREDICATE_ID);
pub const SSSOM_CONFIDENCE: NamedNodeRef<'static> = NamedNodeRef::new_unchecked(sssom::CONFIDENCE);
pub const SSSOM_MAPPING_JUSTIFICATION: NamedNodeRef<'static> =
    NamedNodeRef::new_unchecked(sssom::MAPPING_JUSTIFICATION);
pub const SSSOM_RECORD_ID: NamedNodeRef<'static> = NamedNodeRef::new_unchecked(sssom::RECORD_ID);
pub const SSSOM_SUBJECT_SOURCE: NamedNodeRef<'static> =
    NamedNodeRef::new_unchecked(sssom::SUBJECT_SOURCE);
pub const SSSOM_OBJECT_SOURCE: NamedNodeRef<'static> =
    NamedNodeRef::new_unchecked(sssom::OBJECT_SOURCE);
pub const SSSOM_CURATION_RULE: NamedNodeRef<'static> =
    NamedNodeRef::new_unchecked(sssom::CURATION_RULE);
pub const SSSOM_REVIEWER_ID: NamedNodeRef<'static> = NamedNodeRef::new_unchecked(sssom::REVIEWER_ID);
pub const SSSOM_REVIEWER_LABEL: NamedNodeRef<'static> =
    NamedNodeRef::new_unchecked(sssom::REVIEWER_LABEL);
pub const SSSOM_REVIEWER_DECISION: NamedNodeRef<'static> =
    NamedNodeRef::new_unchecked(sssom::REVIEWER_DECISION);
pub const SSSOM_REVIEWER_JUSTIFICATION: NamedNodeRef<'static> =
    NamedNodeRef::new_unchecked(sssom::REVIEWER_JUSTIFICATION);

pub const SEMAPV_UNSPECIFIED_MATCHING: NamedNodeRef<'static> =
    NamedNodeRef::new_unchecked(semapv::UNSPECIFIED_MATCHING);
