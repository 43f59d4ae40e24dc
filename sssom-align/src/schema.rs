//! Alignment API schema discovery.
//!
//! The Alignment API has no fixed namespace in practice: files produced by
//! different matchers use differently-prefixed IRIs whose local names merely
//! *end with* the conventional element names (`…alignmentonto1`,
//! `…cellentity2`, and so on). Discovery therefore scans every triple once
//! and classifies predicate local names (and the local names of `rdf:type`
//! objects) by suffix against an explicit role table.
//!
//! When several distinct IRIs match the same role the lexicographically
//! smallest one is kept and a warning is logged; this keeps resolution
//! deterministic regardless of store iteration order.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use oxigraph::model::{NamedNode, Term};
use oxigraph::store::Store;
use tracing::warn;

use crate::error::Result;
use crate::iri::local_name;
use crate::terms;

/// Semantic roles recovered from an Alignment API graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    /// Predicate linking an alignment to its first ontology IRI
    Onto1,
    /// Predicate linking an alignment to its second ontology IRI
    Onto2,
    /// Predicate linking an alignment to its cells
    Map,
    /// Predicate for a cell's first entity
    Entity1,
    /// Predicate for a cell's second entity
    Entity2,
    /// Predicate for a cell's confidence measure
    Measure,
    /// Predicate for a cell's relation literal
    Relation,
    /// Predicate for a cell's correspondence id (optional, often foreign)
    Cid,
    /// The Alignment class
    Alignment,
    /// The Cell class (discovered for completeness, not required)
    Cell,
}

impl Role {
    /// Roles matched against predicate local names.
    pub const PREDICATES: [Role; 8] = [
        Role::Onto1,
        Role::Onto2,
        Role::Map,
        Role::Entity1,
        Role::Entity2,
        Role::Measure,
        Role::Relation,
        Role::Cid,
    ];

    /// Roles matched against the local names of `rdf:type` objects.
    pub const CLASSES: [Role; 2] = [Role::Alignment, Role::Cell];

    /// Roles that must resolve for conversion to proceed.
    pub const REQUIRED: [Role; 8] = [
        Role::Onto1,
        Role::Onto2,
        Role::Map,
        Role::Entity1,
        Role::Entity2,
        Role::Measure,
        Role::Relation,
        Role::Alignment,
    ];

    /// Local-name suffix that identifies this role.
    pub fn suffix(self) -> &'static str {
        match self {
            Role::Onto1 => "onto1",
            Role::Onto2 => "onto2",
            Role::Map => "map",
            Role::Entity1 => "entity1",
            Role::Entity2 => "entity2",
            Role::Measure => "measure",
            Role::Relation => "relation",
            Role::Cid => "cid",
            Role::Alignment => "Alignment",
            Role::Cell => "Cell",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Concrete predicate/class IRIs resolved for one input file.
///
/// Every entry may be empty; [`Schema::resolve`] is the gate that decides
/// whether conversion can proceed.
#[derive(Debug, Default, Clone)]
pub struct Schema {
    roles: BTreeMap<Role, NamedNode>,
}

impl Schema {
    /// IRI resolved for `role`, if any.
    pub fn get(&self, role: Role) -> Option<&NamedNode> {
        self.roles.get(&role)
    }

    /// Required roles that did not resolve.
    pub fn missing_required(&self) -> Vec<Role> {
        Role::REQUIRED
            .into_iter()
            .filter(|role| !self.roles.contains_key(role))
            .collect()
    }

    /// Narrow to a schema with every required role present, or report the
    /// missing ones.
    pub fn resolve(&self) -> std::result::Result<ResolvedSchema, Vec<Role>> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(missing);
        }
        let required = |role: Role| -> NamedNode {
            // guarded by the missing_required check above
            self.roles[&role].clone()
        };
        Ok(ResolvedSchema {
            onto1: required(Role::Onto1),
            onto2: required(Role::Onto2),
            map: required(Role::Map),
            entity1: required(Role::Entity1),
            entity2: required(Role::Entity2),
            measure: required(Role::Measure),
            relation: required(Role::Relation),
            alignment: required(Role::Alignment),
            cid: self.roles.get(&Role::Cid).cloned(),
        })
    }
}

/// Discovery result with every required role present.
#[derive(Debug, Clone)]
pub struct ResolvedSchema {
    pub onto1: NamedNode,
    pub onto2: NamedNode,
    pub map: NamedNode,
    pub entity1: NamedNode,
    pub entity2: NamedNode,
    pub measure: NamedNode,
    pub relation: NamedNode,
    pub alignment: NamedNode,
    /// Optional: correspondence ids may live in a foreign namespace or be
    /// absent entirely.
    pub cid: Option<NamedNode>,
}

/// Discover the Alignment API schema of `store` by local-name suffix.
///
/// Scans every triple once. Never fails on content: unresolved roles are
/// simply absent from the returned [`Schema`] and the caller decides whether
/// to proceed.
pub fn discover(store: &Store) -> Result<Schema> {
    let mut candidates: BTreeMap<Role, BTreeSet<String>> = BTreeMap::new();

    for quad in store.iter() {
        let quad = quad?;

        let pred_local = local_name(quad.predicate.as_str());
        for role in Role::PREDICATES {
            if pred_local.ends_with(role.suffix()) {
                candidates
                    .entry(role)
                    .or_default()
                    .insert(quad.predicate.as_str().to_owned());
                break;
            }
        }

        if quad.predicate.as_ref() == terms::RDF_TYPE {
            if let Term::NamedNode(class) = &quad.object {
                let class_local = local_name(class.as_str());
                for role in Role::CLASSES {
                    if class_local.ends_with(role.suffix()) {
                        candidates
                            .entry(role)
                            .or_default()
                            .insert(class.as_str().to_owned());
                        break;
                    }
                }
            }
        }
    }

    let mut schema = Schema::default();
    for (role, iris) in candidates {
        let Some(chosen) = iris.first() else { continue };
        if iris.len() > 1 {
            warn!(
                "multiple IRIs match role '{role}': {iris:?}; keeping {chosen}"
            );
        }
        schema
            .roles
            .insert(role, NamedNode::new_unchecked(chosen.clone()));
    }
    Ok(schema)
}
