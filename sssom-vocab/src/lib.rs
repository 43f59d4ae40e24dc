//! RDF Vocabulary Constants for the SSSOM Alignment Toolkit
//!
//! This crate provides a centralized location for the vocabulary IRIs used
//! when generating and curating SSSOM mapping sets.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `rdf` - RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `owl` - OWL vocabulary (http://www.w3.org/2002/07/owl#)
//! - `xsd` - XSD vocabulary (http://www.w3.org/2001/XMLSchema#)
//! - `skos` - SKOS vocabulary (http://www.w3.org/2004/02/skos/core#)
//! - `sssom` - SSSOM vocabulary (https://w3id.org/sssom/)
//! - `semapv` - Semantic Mapping Vocabulary (https://w3id.org/semapv/vocab/)

/// RDF vocabulary constants
pub mod rdf {
    /// RDF namespace
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// OWL vocabulary constants
pub mod owl {
    /// OWL namespace
    pub const NS: &str = "http://www.w3.org/2002/07/owl#";

    /// owl:Ontology IRI
    pub const ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";

    /// owl:Axiom IRI
    pub const AXIOM: &str = "http://www.w3.org/2002/07/owl#Axiom";
}

/// XSD vocabulary constants
pub mod xsd {
    /// XSD namespace
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";

    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:double IRI
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
}

/// SKOS vocabulary constants
pub mod skos {
    /// SKOS namespace
    pub const NS: &str = "http://www.w3.org/2004/02/skos/core#";

    /// skos:exactMatch IRI
    pub const EXACT_MATCH: &str = "http://www.w3.org/2004/02/skos/core#exactMatch";

    /// skos:closeMatch IRI
    pub const CLOSE_MATCH: &str = "http://www.w3.org/2004/02/skos/core#closeMatch";

    /// skos:relatedMatch IRI
    pub const RELATED_MATCH: &str = "http://www.w3.org/2004/02/skos/core#relatedMatch";

    /// skos:broadMatch IRI
    pub const BROAD_MATCH: &str = "http://www.w3.org/2004/02/skos/core#broadMatch";

    /// skos:narrowMatch IRI
    pub const NARROW_MATCH: &str = "http://www.w3.org/2004/02/skos/core#narrowMatch";
}

/// SSSOM vocabulary constants
///
/// Includes the four `reviewer_*` predicates this toolkit uses to attach
/// review decisions to mapping axioms (an extension of the published SSSOM
/// schema).
pub mod sssom {
    /// SSSOM namespace
    pub const NS: &str = "https://w3id.org/sssom/";

    /// sssom:MappingSet IRI
    pub const MAPPING_SET: &str = "https://w3id.org/sssom/MappingSet";

    /// sssom:Mapping IRI
    pub const MAPPING: &str = "https://w3id.org/sssom/Mapping";

    /// sssom:mappings IRI (mapping set membership)
    pub const MAPPINGS: &str = "https://w3id.org/sssom/mappings";

    /// sssom:subject_id IRI
    pub const SUBJECT_ID: &str = "https://w3id.org/sssom/subject_id";

    /// sssom:object_id IRI
    pub const OBJECT_ID: &str = "https://w3id.org/sssom/object_id";

    /// sssom:predicate_id IRI
    pub const PREDICATE_ID: &str = "https://w3id.org/sssom/predicate_id";

    /// sssom:confidence IRI
    pub const CONFIDENCE: &str = "https://w3id.org/sssom/confidence";

    /// sssom:mapping_justification IRI
    pub const MAPPING_JUSTIFICATION: &str = "https://w3id.org/sssom/mapping_justification";

    /// sssom:record_id IRI
    pub const RECORD_ID: &str = "https://w3id.org/sssom/record_id";

    /// sssom:subject_source IRI
    pub const SUBJECT_SOURCE: &str = "https://w3id.org/sssom/subject_source";

    /// sssom:object_source IRI
    pub const OBJECT_SOURCE: &str = "https://w3id.org/sssom/object_source";

    /// sssom:curation_rule IRI
    pub const CURATION_RULE: &str = "https://w3id.org/sssom/curation_rule";

    /// sssom:reviewer_id IRI (review extension)
    pub const REVIEWER_ID: &str = "https://w3id.org/sssom/reviewer_id";

    /// sssom:reviewer_label IRI (review extension)
    pub const REVIEWER_LABEL: &str = "https://w3id.org/sssom/reviewer_label";

    /// sssom:reviewer_decision IRI (review extension)
    pub const REVIEWER_DECISION: &str = "https://w3id.org/sssom/reviewer_decision";

    /// sssom:reviewer_justification IRI (review extension)
    pub const REVIEWER_JUSTIFICATION: &str = "https://w3id.org/sssom/reviewer_justification";
}

/// Semantic Mapping Vocabulary constants
pub mod semapv {
    /// SEMAPV namespace
    pub const NS: &str = "https://w3id.org/semapv/vocab/";

    /// semapv:UnspecifiedMatching IRI
    pub const UNSPECIFIED_MATCHING: &str = "https://w3id.org/semapv/vocab/UnspecifiedMatching";

    /// semapv:ManualMappingCuration IRI
    pub const MANUAL_MAPPING_CURATION: &str = "https://w3id.org/semapv/vocab/ManualMappingCuration";

    /// semapv:LexicalMatching IRI
    pub const LEXICAL_MATCHING: &str = "https://w3id.org/semapv/vocab/LexicalMatching";
}
