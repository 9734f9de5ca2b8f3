//! # semanno
//!
//! A queryable object model over semantic-annotation (enhancement) graphs:
//! parses RDF-style statements describing spans of text, candidate named
//! entities, and confidence-scored links between them, and answers
//! confidence-ranked queries over the result.
//!
//! ## Architecture
//!
//! - **Statement store** (`store`): subject → predicate → ordered value
//!   lists, built from a serialized RDF document via the oxigraph I/O stack
//! - **Entity model** (`entity`): multi-valued, multilingual property bags
//! - **Annotation model** (`model`): the common enhancement contract with
//!   `TextAnnotation`/`EntityAnnotation` variants and the `Enhancements`
//!   aggregate with its ranking and best-match queries
//! - **Graph parser** (`parser`): two-pass transformation from statements to
//!   cross-referenced annotations plus detected languages
//! - **Entity serializer** (`serializer`): entities back to statement text
//!   for upstream create/update requests
//!
//! ## Library usage
//!
//! ```
//! use semanno::model::Enhancement;
//! use semanno::parser::EnhancementsParser;
//!
//! let graph = r#"
//!     @prefix fise: <http://fise.iks-project.eu/ontology/> .
//!     <urn:enhancement:1> a fise:TextAnnotation ;
//!         fise:confidence 0.9 ;
//!         fise:selected-text "Paris"@en .
//! "#;
//! let enhancements = EnhancementsParser::new(graph).unwrap().create_enhancements();
//! let ranked = enhancements.text_annotations_by_confidence(0.5);
//! assert_eq!(ranked[0].selected_text(), Some("Paris"));
//! ```

pub mod entity;
pub mod error;
pub mod format;
pub mod model;
pub mod parser;
pub mod serializer;
pub mod store;
pub mod vocab;
