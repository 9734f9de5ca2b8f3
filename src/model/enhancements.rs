//! The `Enhancements` aggregate: every annotation of one parse, indexed for
//! confidence-ranked queries and best-match pairing.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::store::StatementStore;

use super::{
    filter_and_rank, AnyEnhancement, Enhancement, EnhancementRef, EntityAnnotation,
    TextAnnotation,
};

/// Result set of one enhancement parse.
///
/// Owns the parsed statement store (retained as the raw model for
/// introspection), per-variant annotation maps, the entity index, and the
/// detected content languages. Constructed once per parse; mutable only
/// through [`Enhancements::add_enhancement`], [`Enhancements::set_languages`]
/// and [`Enhancements::add_language`]; entries are never removed. Relations
/// between annotations resolve at query time, so annotations may be added in
/// any order.
///
/// Not synchronized: concurrent mutation needs external locking, though any
/// number of parses may run in parallel on their own aggregates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Enhancements {
    model: StatementStore,
    text_annotations: IndexMap<String, TextAnnotation>,
    entity_annotations: IndexMap<String, EntityAnnotation>,
    entities: IndexMap<String, Entity>,
    languages: Vec<String>,
}

impl Enhancements {
    /// An empty aggregate retaining the given store as its raw model.
    pub fn new(model: StatementStore) -> Self {
        Self {
            model,
            ..Self::default()
        }
    }

    /// Insert an annotation into its variant map, keyed by URI.
    ///
    /// For entity annotations this also registers the reference entity under
    /// the entity's own URI (overwriting a previous entity with the same
    /// URI, never merging).
    pub fn add_enhancement(&mut self, enhancement: AnyEnhancement) {
        match enhancement {
            AnyEnhancement::Text(annotation) => {
                self.text_annotations
                    .insert(annotation.uri().to_owned(), annotation);
            }
            AnyEnhancement::Entity(annotation) => {
                if let Some(entity) = annotation.entity_reference() {
                    self.entities.insert(entity.uri().to_owned(), entity.clone());
                }
                self.entity_annotations
                    .insert(annotation.uri().to_owned(), annotation);
            }
        }
    }

    /// All annotations: text annotations first, then entity annotations,
    /// each in insertion order.
    pub fn enhancements(&self) -> Vec<EnhancementRef<'_>> {
        self.text_annotations
            .values()
            .map(EnhancementRef::Text)
            .chain(self.entity_annotations.values().map(EnhancementRef::Entity))
            .collect()
    }

    /// Look up an annotation of either variant by URI.
    pub fn enhancement(&self, uri: &str) -> Option<EnhancementRef<'_>> {
        self.text_annotations
            .get(uri)
            .map(EnhancementRef::Text)
            .or_else(|| self.entity_annotations.get(uri).map(EnhancementRef::Entity))
    }

    /// All text annotations, in insertion order.
    pub fn text_annotations(&self) -> impl Iterator<Item = &TextAnnotation> {
        self.text_annotations.values()
    }

    /// All entity annotations, in insertion order.
    pub fn entity_annotations(&self) -> impl Iterator<Item = &EntityAnnotation> {
        self.entity_annotations.values()
    }

    /// Entity annotations related to the given text annotation, in the order
    /// they were added. Empty when the text annotation has none.
    ///
    /// Resolved at query time against the current entity-annotation map, so
    /// the result is complete regardless of the order annotations were added.
    pub fn entity_annotations_for(&self, annotation: &TextAnnotation) -> Vec<&EntityAnnotation> {
        self.entity_annotations
            .values()
            .filter(|candidate| {
                candidate
                    .relations()
                    .iter()
                    .any(|relation| relation == annotation.uri())
            })
            .collect()
    }

    /// All distinct entities referenced by entity annotations. An entity URI
    /// appears once even when several annotations reference it.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// The entity with the given URI, if any annotation referenced it.
    /// A missing URI is a lookup miss, not a malformed-graph signal.
    pub fn entity(&self, uri: &str) -> Option<&Entity> {
        self.entities.get(uri)
    }

    /// Replace the detected-language list.
    pub fn set_languages(&mut self, languages: Vec<String>) {
        self.languages = languages;
    }

    /// Append a detected language, skipping duplicates.
    pub fn add_language(&mut self, language: impl Into<String>) {
        let language = language.into();
        if !self.languages.contains(&language) {
            self.languages.push(language);
        }
    }

    /// Detected content languages, deduplicated, in detection order.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// The raw statement store this aggregate was parsed from.
    pub fn model(&self) -> &StatementStore {
        &self.model
    }

    // -----------------------------------------------------------------------
    // Confidence queries
    // -----------------------------------------------------------------------

    /// Text annotations with `confidence >= threshold`, sorted descending by
    /// confidence; ties keep insertion order.
    pub fn text_annotations_by_confidence(&self, threshold: f64) -> Vec<&TextAnnotation> {
        filter_and_rank(self.text_annotations.values(), threshold)
    }

    /// Entity annotations with `confidence >= threshold`, sorted descending
    /// by confidence; ties keep insertion order.
    pub fn entity_annotations_by_confidence(&self, threshold: f64) -> Vec<&EntityAnnotation> {
        filter_and_rank(self.entity_annotations.values(), threshold)
    }

    /// Reference entities of the entity annotations that pass the threshold,
    /// in ranked annotation order.
    ///
    /// Two surviving annotations referencing the same entity URI yield the
    /// entity twice — the result mirrors the annotation ranking and is
    /// deliberately not deduplicated.
    pub fn entities_by_confidence(&self, threshold: f64) -> Vec<&Entity> {
        self.entity_annotations_by_confidence(threshold)
            .into_iter()
            .filter_map(EntityAnnotation::entity_reference)
            .collect()
    }

    /// The highest-confidence related entity annotation for each text
    /// annotation that has at least one.
    ///
    /// Text annotations without related entity annotations are omitted —
    /// a deliberate filter, not an error. Pairs appear in the order the
    /// text annotations were first referenced; confidence ties keep the
    /// earliest-added entity annotation. Like
    /// [`Enhancements::entity_annotations_for`], relations resolve at query
    /// time, independent of annotation insertion order.
    pub fn best_annotations(&self) -> Vec<(&TextAnnotation, &EntityAnnotation)> {
        let mut best: IndexMap<&str, (&TextAnnotation, &EntityAnnotation)> = IndexMap::new();
        for candidate in self.entity_annotations.values() {
            for relation in candidate.relations() {
                let Some(text_annotation) = self.text_annotations.get(relation.as_str()) else {
                    continue;
                };
                match best.entry(relation.as_str()) {
                    indexmap::map::Entry::Occupied(mut entry) => {
                        if candidate.confidence() > entry.get().1.confidence() {
                            entry.insert((text_annotation, candidate));
                        }
                    }
                    indexmap::map::Entry::Vacant(entry) => {
                        entry.insert((text_annotation, candidate));
                    }
                }
            }
        }
        best.into_values().collect()
    }
}
