//! Alignment API → SSSOM conversion and curation.
//!
//! This crate converts ontology alignments in the Alignment API RDF format
//! (as produced by OAEI matchers) into SSSOM mapping sets, annotates
//! reviewed mappings, and transcodes RDF/XML to Turtle. The alignment
//! vocabulary is recovered per input file by local-name suffix, so files
//! with arbitrary namespace prefixes convert without configuration.
//!
//! # Example
//!
//! ```
//! use sssom_align::{convert_turtle, Outcome};
//!
//! let turtle = r#"
//!     @prefix align: <http://knowledgeweb.semanticweb.org/heterogeneity/alignment#> .
//!     @prefix ex: <http://example.org/> .
//!
//!     ex:aln a align:Alignment ;
//!         align:onto1 <http://a/> ;
//!         align:onto2 <http://b/> ;
//!         align:map ex:cell1 .
//!
//!     ex:cell1 a align:Cell ;
//!         align:entity1 <http://a/x> ;
//!         align:entity2 <http://b/y> ;
//!         align:relation "=" ;
//!         align:measure "0.95" .
//! "#;
//!
//! let outcome = convert_turtle(turtle, "demo").unwrap();
//! let Outcome::Converted(set) = outcome else {
//!     panic!("expected a conversion");
//! };
//! assert_eq!(set.mapping_count, 1);
//! ```

pub mod convert;
pub mod error;
pub mod graph;
pub mod iri;
pub mod mapping_id;
pub mod review;
pub mod schema;
mod terms;
pub mod transcode;

pub use convert::{
    convert_file, convert_store, convert_turtle, FileOutcome, MappingSet, Outcome, SkipReason,
};
pub use error::{AlignError, Result};
pub use schema::{discover, ResolvedSchema, Role, Schema};
