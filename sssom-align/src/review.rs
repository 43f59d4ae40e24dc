//! Review annotations for SSSOM mapping axioms.
//!
//! Curated mapping sets circulate as OWL reification: each mapping is an
//! `owl:Axiom` resource carrying `sssom:subject_id` / `sssom:object_id` and
//! friends. A review pass walks those axioms and appends the reviewer
//! extension predicates (`sssom:reviewer_id`, `reviewer_label`,
//! `reviewer_decision`, `reviewer_justification`) in place, so the reviewed
//! file keeps every original triple.

use oxigraph::model::{GraphNameRef, Literal, QuadRef, Subject, SubjectRef};
use oxigraph::store::Store;

use crate::error::Result;
use crate::graph::{object_for, term_text};
use crate::terms;

/// One SSSOM mapping expressed as an annotated `owl:Axiom`.
#[derive(Debug, Clone)]
pub struct AxiomMapping {
    /// The axiom resource carrying the mapping.
    pub axiom: Subject,
    pub subject_id: String,
    pub object_id: String,
    pub predicate_id: Option<String>,
    pub confidence: Option<f64>,
    pub curation_rule: Option<String>,
}

/// Reviewer verdict for one mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Reject,
    RequiresRefinement,
    Unspecified,
}

impl Decision {
    /// Literal value recorded in the output graph.
    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Accept => "accept",
            Decision::Reject => "reject",
            Decision::RequiresRefinement => "requires_refinement",
            Decision::Unspecified => "unspecified",
        }
    }
}

/// A reviewer's verdict and identity for one axiom.
#[derive(Debug, Clone)]
pub struct Review {
    /// ORCID or other identifying IRI of the reviewer.
    pub reviewer_id: String,
    /// Human-readable reviewer name.
    pub reviewer_label: String,
    pub decision: Decision,
    pub justification: String,
}

/// Collect every `owl:Axiom` carrying both a subject and an object id,
/// sorted by axiom IRI for a stable presentation order.
///
/// Axioms without both ids are not SSSOM mappings and are skipped.
pub fn load_axiom_mappings(store: &Store) -> Result<Vec<AxiomMapping>> {
    let mut axioms: Vec<Subject> = Vec::new();
    for quad in store.quads_for_pattern(
        None,
        Some(terms::RDF_TYPE),
        Some(terms::OWL_AXIOM.into()),
        None,
    ) {
        axioms.push(quad?.subject);
    }
    axioms.sort_by_key(|axiom| axiom.to_string());
    axioms.dedup();

    let mut mappings = Vec::new();
    for axiom in axioms {
        let subject_id = value_text(store, axiom.as_ref(), terms::SSSOM_SUBJECT_ID)?;
        let object_id = value_text(store, axiom.as_ref(), terms::SSSOM_OBJECT_ID)?;
        let (Some(subject_id), Some(object_id)) = (subject_id, object_id) else {
            continue;
        };

        let predicate_id = value_text(store, axiom.as_ref(), terms::SSSOM_PREDICATE_ID)?;
        let confidence = value_text(store, axiom.as_ref(), terms::SSSOM_CONFIDENCE)?
            .and_then(|text| text.trim().parse::<f64>().ok());
        let curation_rule = value_text(store, axiom.as_ref(), terms::SSSOM_CURATION_RULE)?;

        mappings.push(AxiomMapping {
            axiom,
            subject_id,
            object_id,
            predicate_id,
            confidence,
            curation_rule,
        });
    }
    Ok(mappings)
}

/// Append the four reviewer annotation triples to `axiom` in place.
pub fn annotate(store: &Store, axiom: SubjectRef<'_>, review: &Review) -> Result<()> {
    let fields = [
        (terms::SSSOM_REVIEWER_ID, review.reviewer_id.as_str()),
        (terms::SSSOM_REVIEWER_LABEL, review.reviewer_label.as_str()),
        (terms::SSSOM_REVIEWER_DECISION, review.decision.as_str()),
        (
            terms::SSSOM_REVIEWER_JUSTIFICATION,
            review.justification.as_str(),
        ),
    ];
    for (predicate, value) in fields {
        let literal = Literal::new_simple_literal(value);
        store.insert(QuadRef::new(
            axiom,
            predicate,
            literal.as_ref(),
            GraphNameRef::DefaultGraph,
        ))?;
    }
    Ok(())
}

fn value_text(
    store: &Store,
    subject: SubjectRef<'_>,
    predicate: oxigraph::model::NamedNodeRef<'_>,
) -> Result<Option<String>> {
    Ok(object_for(store, subject, predicate)?
        .as_ref()
        .and_then(term_text))
}
