//! The two concrete annotation variants.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;

use super::{Enhancement, EnhancementCore};

/// A span of source text identified by an enhancement engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextAnnotation {
    /// Shared provenance fields.
    pub core: EnhancementCore,
    /// Type of the annotated span (e.g. a dbpedia-ont:Person IRI).
    pub annotation_type: Option<String>,
    /// Start offset of the span in the source text. 0 when absent.
    pub starts: u64,
    /// End offset of the span in the source text. 0 when absent.
    pub ends: u64,
    /// The annotated text itself.
    pub selected_text: Option<String>,
    /// Surrounding context of the annotated span.
    pub selection_context: Option<String>,
}

impl TextAnnotation {
    /// An empty text annotation with the given URI.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            core: EnhancementCore::new(uri),
            ..Self::default()
        }
    }

    pub fn annotation_type(&self) -> Option<&str> {
        self.annotation_type.as_deref()
    }

    pub fn selected_text(&self) -> Option<&str> {
        self.selected_text.as_deref()
    }

    pub fn selection_context(&self) -> Option<&str> {
        self.selection_context.as_deref()
    }
}

impl Enhancement for TextAnnotation {
    fn core(&self) -> &EnhancementCore {
        &self.core
    }
}

/// A candidate named-entity match for a text annotation, carrying a
/// confidence score and a fully parsed reference entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityAnnotation {
    /// Shared provenance fields.
    pub core: EnhancementCore,
    /// Label of the matched entity.
    pub entity_label: Option<String>,
    /// The matched entity, parsed recursively from its own statements.
    pub entity_reference: Option<Entity>,
    /// Type IRIs of the matched entity.
    pub entity_types: Vec<String>,
    /// Referenced site the entity was matched against.
    pub site: Option<String>,
}

impl EntityAnnotation {
    /// An empty entity annotation with the given URI.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            core: EnhancementCore::new(uri),
            ..Self::default()
        }
    }

    pub fn entity_label(&self) -> Option<&str> {
        self.entity_label.as_deref()
    }

    pub fn entity_reference(&self) -> Option<&Entity> {
        self.entity_reference.as_ref()
    }

    pub fn entity_types(&self) -> &[String] {
        &self.entity_types
    }

    pub fn site(&self) -> Option<&str> {
        self.site.as_deref()
    }
}

impl Enhancement for EntityAnnotation {
    fn core(&self) -> &EnhancementCore {
        &self.core
    }
}
