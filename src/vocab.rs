//! Ontology IRI constants used throughout the enhancement graph.
//!
//! Enhancement graphs describe annotations with the FISE enhancement
//! structure ontology, Dublin Core terms for provenance and relations, and
//! the EntityHub vocabulary for referenced-site information.

/// FISE enhancement structure ontology.
pub mod fise {
    pub const NS: &str = "http://fise.iks-project.eu/ontology/";

    pub const TEXT_ANNOTATION: &str = "http://fise.iks-project.eu/ontology/TextAnnotation";
    pub const ENTITY_ANNOTATION: &str = "http://fise.iks-project.eu/ontology/EntityAnnotation";

    pub const CONFIDENCE: &str = "http://fise.iks-project.eu/ontology/confidence";
    pub const EXTRACTED_FROM: &str = "http://fise.iks-project.eu/ontology/extracted-from";

    pub const SELECTED_TEXT: &str = "http://fise.iks-project.eu/ontology/selected-text";
    pub const SELECTION_CONTEXT: &str = "http://fise.iks-project.eu/ontology/selection-context";
    pub const START: &str = "http://fise.iks-project.eu/ontology/start";
    pub const END: &str = "http://fise.iks-project.eu/ontology/end";

    pub const ENTITY_LABEL: &str = "http://fise.iks-project.eu/ontology/entity-label";
    pub const ENTITY_REFERENCE: &str = "http://fise.iks-project.eu/ontology/entity-reference";
    pub const ENTITY_TYPE: &str = "http://fise.iks-project.eu/ontology/entity-type";
}

/// Dublin Core terms.
pub mod dcterms {
    pub const NS: &str = "http://purl.org/dc/terms/";

    pub const CREATED: &str = "http://purl.org/dc/terms/created";
    pub const CREATOR: &str = "http://purl.org/dc/terms/creator";
    pub const LANGUAGE: &str = "http://purl.org/dc/terms/language";
    pub const RELATION: &str = "http://purl.org/dc/terms/relation";
    pub const TYPE: &str = "http://purl.org/dc/terms/type";

    /// Class of detected-language resources in the enhancement graph.
    pub const LINGUISTIC_SYSTEM: &str = "http://purl.org/dc/terms/LinguisticSystem";
}

/// RDF syntax vocabulary.
pub mod rdf {
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// EntityHub vocabulary.
pub mod entityhub {
    pub const SITE: &str = "http://stanbol.apache.org/ontology/entityhub/entityhub#site";
}
