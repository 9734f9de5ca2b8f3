//! Graph parser: statement store → populated annotation model.
//!
//! A pure, single-shot transformation in two ordered passes. The discovery
//! pass finds every subject typed as a text or entity annotation and
//! populates it (common provenance fields first, variant fields second).
//! The relation pass then resolves `dct:relation` values against the set of
//! annotations found in the same parse; targets outside that set are
//! silently dropped. Detected content languages are collected independently
//! from subjects typed as linguistic systems.
//!
//! Field-level gaps in the graph are never errors: a missing confidence is
//! 0.0, missing offsets are 0, missing strings are absent. The only fatal
//! condition is a store-level structural parse failure, raised at
//! construction.

use std::collections::{HashMap, HashSet};

use crate::entity::Entity;
use crate::error::SemannoResult;
use crate::format::StatementFormat;
use crate::model::{
    Enhancement, EnhancementCore, Enhancements, EntityAnnotation, TextAnnotation,
};
use crate::store::StatementStore;
use crate::vocab::{dcterms, entityhub, fise, rdf};

/// Creator identifier of the language-detection engine. Text annotations it
/// produces are per-language detection artifacts, not textual annotations,
/// and are dropped from the text-annotation set during discovery.
pub const LANGUAGE_DETECTION_ENGINE: &str =
    "org.apache.stanbol.enhancer.engines.langdetect.LanguageDetectionEnhancementEngine";

/// Parser over one statement graph.
///
/// Entities are memoized per parser instance, so a reference entity shared
/// by several entity annotations is only assembled once.
#[derive(Debug)]
pub struct EnhancementsParser {
    store: StatementStore,
    entity_cache: HashMap<String, Entity>,
}

impl EnhancementsParser {
    /// Parse a serialized statement graph, guessing the format from its
    /// content. Fails only on a structural parse failure.
    pub fn new(raw: &str) -> SemannoResult<Self> {
        Self::with_format(raw, StatementFormat::guess(raw))
    }

    /// Parse a serialized statement graph in an explicit format.
    pub fn with_format(raw: &str, format: StatementFormat) -> SemannoResult<Self> {
        Ok(Self::from_store(StatementStore::parse(raw, format)?))
    }

    /// Wrap an already populated store.
    pub fn from_store(store: StatementStore) -> Self {
        Self {
            store,
            entity_cache: HashMap::new(),
        }
    }

    /// The underlying statement store.
    pub fn store(&self) -> &StatementStore {
        &self.store
    }

    /// Run the full parse and assemble the [`Enhancements`] aggregate.
    ///
    /// Text annotations are registered first, then entity annotations; the
    /// store is handed over as the aggregate's raw model.
    pub fn create_enhancements(mut self) -> Enhancements {
        let mut text_annotations = self.parse_text_annotations();
        let mut entity_annotations = self.parse_entity_annotations();

        let known: HashSet<String> = text_annotations
            .iter()
            .map(|a| a.uri().to_owned())
            .chain(entity_annotations.iter().map(|a| a.uri().to_owned()))
            .collect();
        let store = &self.store;
        for core in text_annotations
            .iter_mut()
            .map(|a| &mut a.core)
            .chain(entity_annotations.iter_mut().map(|a| &mut a.core))
        {
            core.relations = resolve_relations(store, &core.uri, &known);
        }

        let languages = self.parse_languages();
        tracing::debug!(
            text_annotations = text_annotations.len(),
            entity_annotations = entity_annotations.len(),
            languages = languages.len(),
            "assembled enhancement model"
        );

        let mut enhancements = Enhancements::new(self.store);
        for annotation in text_annotations {
            enhancements.add_enhancement(annotation.into());
        }
        for annotation in entity_annotations {
            enhancements.add_enhancement(annotation.into());
        }
        enhancements.set_languages(languages);
        enhancements
    }

    /// Discover and populate all text annotations.
    ///
    /// Subjects whose creator is the language-detection engine are skipped;
    /// their language value is harvested by [`Self::parse_languages`].
    pub fn parse_text_annotations(&self) -> Vec<TextAnnotation> {
        let mut annotations = Vec::new();
        for subject in self.store.subjects_matching(rdf::TYPE, fise::TEXT_ANNOTATION) {
            let creator = self.store.first_value(subject, dcterms::CREATOR);
            if creator.is_some_and(|v| v.value == LANGUAGE_DETECTION_ENGINE) {
                continue;
            }

            let mut annotation = TextAnnotation {
                core: self.read_core(subject),
                ..TextAnnotation::default()
            };
            annotation.annotation_type = self.first_string(subject, dcterms::TYPE);
            annotation.starts = self.first_offset(subject, fise::START);
            annotation.ends = self.first_offset(subject, fise::END);
            annotation.selection_context = self.first_string(subject, fise::SELECTION_CONTEXT);

            let selected = self.store.first_value(subject, fise::SELECTED_TEXT);
            annotation.selected_text = selected.map(|v| v.value.clone());
            // No explicit language statement: adopt the selected-text tag.
            if annotation.core.language.is_none() {
                annotation.core.language = selected.and_then(|v| v.language.clone());
            }

            annotations.push(annotation);
        }
        annotations
    }

    /// Discover and populate all entity annotations. No exclusions.
    pub fn parse_entity_annotations(&mut self) -> Vec<EntityAnnotation> {
        let subjects: Vec<String> = self
            .store
            .subjects_matching(rdf::TYPE, fise::ENTITY_ANNOTATION)
            .into_iter()
            .map(str::to_owned)
            .collect();

        let mut annotations = Vec::with_capacity(subjects.len());
        for subject in subjects {
            let mut annotation = EntityAnnotation {
                core: self.read_core(&subject),
                ..EntityAnnotation::default()
            };
            annotation.entity_label = self.first_string(&subject, fise::ENTITY_LABEL);
            annotation.entity_types = self
                .store
                .values_of(&subject, fise::ENTITY_TYPE)
                .iter()
                .map(|v| v.value.clone())
                .collect();
            annotation.site = self.first_string(&subject, entityhub::SITE);

            let reference = self.first_string(&subject, fise::ENTITY_REFERENCE);
            if let Some(reference) = reference {
                annotation.entity_reference = Some(self.parse_entity(&reference));
            }

            annotations.push(annotation);
        }
        annotations
    }

    /// Detected content languages: subjects typed `dct:LinguisticSystem`,
    /// first `dct:language` value each, deduplicated, empty values skipped.
    ///
    /// Distinct from the per-annotation language attribute.
    pub fn parse_languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = Vec::new();
        for subject in self
            .store
            .subjects_matching(dcterms::TYPE, dcterms::LINGUISTIC_SYSTEM)
        {
            if let Some(value) = self.store.first_value(subject, dcterms::LANGUAGE) {
                if !value.value.is_empty() && !languages.contains(&value.value) {
                    languages.push(value.value.clone());
                }
            }
        }
        languages
    }

    /// Parse the entity identified by `uri` from its own statements: every
    /// predicate/value pair of that subject, language tags preserved.
    ///
    /// A URI without statements yields an empty entity. Results are
    /// memoized for the lifetime of the parser.
    pub fn parse_entity(&mut self, uri: &str) -> Entity {
        if let Some(cached) = self.entity_cache.get(uri) {
            return cached.clone();
        }

        let mut entity = Entity::new(uri);
        for (property, values) in self.store.properties_of(uri) {
            for value in values {
                entity.add_property_value(property, value.value.clone(), value.language.as_deref());
            }
        }

        self.entity_cache.insert(uri.to_owned(), entity.clone());
        entity
    }

    /// Common provenance fields, read before any variant field.
    fn read_core(&self, uri: &str) -> EnhancementCore {
        EnhancementCore {
            uri: uri.to_owned(),
            confidence: self
                .store
                .first_value(uri, fise::CONFIDENCE)
                .and_then(|v| v.value.parse().ok())
                .unwrap_or(0.0),
            created: self.first_string(uri, dcterms::CREATED),
            creator: self.first_string(uri, dcterms::CREATOR),
            language: self.first_string(uri, dcterms::LANGUAGE),
            extracted_from: self.first_string(uri, fise::EXTRACTED_FROM),
            relations: Vec::new(),
        }
    }

    fn first_string(&self, subject: &str, predicate: &str) -> Option<String> {
        self.store
            .first_value(subject, predicate)
            .map(|v| v.value.clone())
    }

    fn first_offset(&self, subject: &str, predicate: &str) -> u64 {
        self.store
            .first_value(subject, predicate)
            .and_then(|v| v.value.parse().ok())
            .unwrap_or(0)
    }
}

/// `dct:relation` values of `uri` that name an enhancement parsed in the
/// same pass, deduplicated, in statement order.
fn resolve_relations(
    store: &StatementStore,
    uri: &str,
    known: &HashSet<String>,
) -> Vec<String> {
    let mut relations = Vec::new();
    for value in store.values_of(uri, dcterms::RELATION) {
        if known.contains(&value.value) && !relations.contains(&value.value) {
            relations.push(value.value.clone());
        }
    }
    relations
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAPH: &str = r#"
        @prefix fise: <http://fise.iks-project.eu/ontology/> .
        @prefix dct: <http://purl.org/dc/terms/> .
        @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
        @prefix hub: <http://stanbol.apache.org/ontology/entityhub/entityhub#> .

        <urn:enhancement:ta1> a fise:TextAnnotation ;
            dct:creator "org.example.engines.ner.NerEngine" ;
            dct:created "2024-03-01T10:00:00Z" ;
            fise:confidence 0.8 ;
            fise:extracted-from <urn:content:1> ;
            fise:selected-text "Paris"@en ;
            fise:selection-context "Paris is the capital of France."@en ;
            fise:start 0 ;
            fise:end 5 ;
            dct:relation <urn:enhancement:unknown> .

        <urn:enhancement:lang1> a fise:TextAnnotation ;
            dct:type dct:LinguisticSystem ;
            dct:language "en" ;
            dct:creator "org.apache.stanbol.enhancer.engines.langdetect.LanguageDetectionEnhancementEngine" .

        <urn:enhancement:ea1> a fise:EntityAnnotation ;
            fise:confidence 0.75 ;
            fise:entity-label "Paris" ;
            fise:entity-reference <http://dbpedia.org/resource/Paris> ;
            fise:entity-type <http://dbpedia.org/ontology/Place> ;
            fise:entity-type <http://dbpedia.org/ontology/City> ;
            hub:site "dbpedia" ;
            dct:relation <urn:enhancement:ta1> .

        <http://dbpedia.org/resource/Paris>
            rdfs:label "Paris"@en, "Paris ville"@fr ;
            a <http://dbpedia.org/ontology/Place> .
    "#;

    fn parser() -> EnhancementsParser {
        EnhancementsParser::with_format(GRAPH, StatementFormat::Turtle).unwrap()
    }

    #[test]
    fn guessing_constructor_handles_turtle() {
        assert!(EnhancementsParser::new(GRAPH).is_ok());
    }

    #[test]
    fn language_detection_artifacts_are_excluded() {
        let annotations = parser().parse_text_annotations();
        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].uri(), "urn:enhancement:ta1");
    }

    #[test]
    fn common_fields_are_populated() {
        let annotations = parser().parse_text_annotations();
        let ta = &annotations[0];
        assert!((ta.confidence() - 0.8).abs() < f64::EPSILON);
        assert_eq!(ta.created(), Some("2024-03-01T10:00:00Z"));
        assert_eq!(ta.creator(), Some("org.example.engines.ner.NerEngine"));
        assert_eq!(ta.extracted_from(), Some("urn:content:1"));
        assert_eq!(ta.starts, 0);
        assert_eq!(ta.ends, 5);
        assert_eq!(ta.selected_text(), Some("Paris"));
    }

    #[test]
    fn language_is_inferred_from_selected_text_tag() {
        // ta1 has no dct:language statement but selected-text is tagged @en.
        let annotations = parser().parse_text_annotations();
        assert_eq!(annotations[0].language(), Some("en"));
    }

    #[test]
    fn missing_numeric_fields_default_to_zero() {
        let graph = r#"
            @prefix fise: <http://fise.iks-project.eu/ontology/> .
            <urn:enhancement:bare> a fise:TextAnnotation .
        "#;
        let parser = EnhancementsParser::with_format(graph, StatementFormat::Turtle).unwrap();
        let annotations = parser.parse_text_annotations();
        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].starts, 0);
        assert_eq!(annotations[0].ends, 0);
        assert_eq!(annotations[0].confidence(), 0.0);
        assert!(annotations[0].language().is_none());
    }

    #[test]
    fn entity_annotations_carry_a_fully_parsed_entity() {
        let mut parser = parser();
        let annotations = parser.parse_entity_annotations();
        assert_eq!(annotations.len(), 1);
        let ea = &annotations[0];
        assert_eq!(ea.entity_label(), Some("Paris"));
        assert_eq!(ea.site(), Some("dbpedia"));
        assert_eq!(ea.entity_types().len(), 2);

        let entity = ea.entity_reference().unwrap();
        assert_eq!(entity.uri(), "http://dbpedia.org/resource/Paris");
        assert_eq!(
            entity.value("http://www.w3.org/2000/01/rdf-schema#label", Some("en")),
            Some("Paris")
        );
        assert_eq!(
            entity.value("http://www.w3.org/2000/01/rdf-schema#label", Some("fr")),
            Some("Paris ville")
        );
    }

    #[test]
    fn unknown_relation_targets_are_dropped() {
        let enhancements = parser().create_enhancements();
        let ta = enhancements.text_annotations().next().unwrap();
        // ta1 relates only to urn:enhancement:unknown, which is not a
        // parsed enhancement.
        assert!(ta.relations().is_empty());

        let ea = enhancements.entity_annotations().next().unwrap();
        assert_eq!(ea.relations(), ["urn:enhancement:ta1"]);
    }

    #[test]
    fn languages_come_from_linguistic_system_subjects() {
        let enhancements = parser().create_enhancements();
        assert_eq!(enhancements.languages(), ["en"]);
    }

    #[test]
    fn parse_entity_memoizes() {
        let mut parser = parser();
        let first = parser.parse_entity("http://dbpedia.org/resource/Paris");
        let second = parser.parse_entity("http://dbpedia.org/resource/Paris");
        assert_eq!(first, second);
        assert_eq!(parser.entity_cache.len(), 1);
    }

    #[test]
    fn parse_entity_of_unknown_subject_is_empty() {
        let mut parser = parser();
        let entity = parser.parse_entity("http://example.com/nothing");
        assert_eq!(entity.uri(), "http://example.com/nothing");
        assert_eq!(entity.property_count(), 0);
    }

    #[test]
    fn aggregate_retains_raw_model() {
        let enhancements = parser().create_enhancements();
        assert!(enhancements.model().contains_subject("urn:enhancement:ta1"));
    }

    #[test]
    fn structural_failure_is_fatal_at_construction() {
        let result = EnhancementsParser::with_format("<broken", StatementFormat::Turtle);
        assert!(result.is_err());
    }
}
