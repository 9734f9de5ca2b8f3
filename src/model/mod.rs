//! Annotation model: the common enhancement contract and its two concrete
//! variants.
//!
//! Every annotation produced by an enhancement engine shares the same
//! provenance block ([`EnhancementCore`]): confidence, creation timestamp,
//! creator engine, language, source content, and same-parse relations.
//! [`TextAnnotation`] marks a span of source text; [`EntityAnnotation`] is a
//! candidate named-entity match for one or more text annotations.
//!
//! Relations are stored as URIs rather than owned copies of the related
//! annotation. The [`Enhancements`] aggregate owns every annotation exactly
//! once and resolves relation URIs on demand.

pub mod annotation;
pub mod enhancements;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

pub use annotation::{EntityAnnotation, TextAnnotation};
pub use enhancements::Enhancements;

/// Fields shared by every enhancement, extracted before any variant field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnhancementCore {
    /// URI of the enhancement resource.
    pub uri: String,
    /// Confidence score, conventionally in 0.0–1.0. Defaults to 0.0 when the
    /// graph carries no confidence statement.
    pub confidence: f64,
    /// Creation timestamp, as written by the engine.
    pub created: Option<String>,
    /// Identifier of the enhancement engine that produced this annotation.
    pub creator: Option<String>,
    /// Language of the annotated content, if stated or inferred.
    pub language: Option<String>,
    /// URI of the content item the annotation was extracted from.
    pub extracted_from: Option<String>,
    /// URIs of related enhancements resolved within the same parse.
    /// Unknown targets are dropped during relation resolution.
    pub relations: Vec<String>,
}

impl EnhancementCore {
    /// An empty core for the given enhancement URI.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            ..Self::default()
        }
    }
}

/// Common read contract over both annotation variants.
pub trait Enhancement {
    /// The shared provenance block.
    fn core(&self) -> &EnhancementCore;

    /// URI of the enhancement resource.
    fn uri(&self) -> &str {
        &self.core().uri
    }

    /// Confidence score (0.0 when absent from the graph).
    fn confidence(&self) -> f64 {
        self.core().confidence
    }

    /// Creation timestamp.
    fn created(&self) -> Option<&str> {
        self.core().created.as_deref()
    }

    /// Producing engine identifier.
    fn creator(&self) -> Option<&str> {
        self.core().creator.as_deref()
    }

    /// Stated or inferred language.
    fn language(&self) -> Option<&str> {
        self.core().language.as_deref()
    }

    /// URI of the source content item.
    fn extracted_from(&self) -> Option<&str> {
        self.core().extracted_from.as_deref()
    }

    /// URIs of related enhancements from the same parse.
    fn relations(&self) -> &[String] {
        &self.core().relations
    }
}

/// An enhancement of either concrete variant, for heterogeneous collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnyEnhancement {
    Text(TextAnnotation),
    Entity(EntityAnnotation),
}

impl Enhancement for AnyEnhancement {
    fn core(&self) -> &EnhancementCore {
        match self {
            AnyEnhancement::Text(t) => t.core(),
            AnyEnhancement::Entity(e) => e.core(),
        }
    }
}

impl From<TextAnnotation> for AnyEnhancement {
    fn from(annotation: TextAnnotation) -> Self {
        AnyEnhancement::Text(annotation)
    }
}

impl From<EntityAnnotation> for AnyEnhancement {
    fn from(annotation: EntityAnnotation) -> Self {
        AnyEnhancement::Entity(annotation)
    }
}

/// Borrowed view over an enhancement of either variant.
#[derive(Debug, Clone, Copy)]
pub enum EnhancementRef<'a> {
    Text(&'a TextAnnotation),
    Entity(&'a EntityAnnotation),
}

impl Enhancement for EnhancementRef<'_> {
    fn core(&self) -> &EnhancementCore {
        match self {
            EnhancementRef::Text(t) => t.core(),
            EnhancementRef::Entity(e) => e.core(),
        }
    }
}

/// Keep enhancements with `confidence >= threshold`, sorted descending by
/// confidence.
///
/// The sort is stable, so equal-confidence enhancements keep their original
/// relative order. Deterministic tie-breaking is part of the query contract.
pub(crate) fn filter_and_rank<'a, E, I>(enhancements: I, threshold: f64) -> Vec<&'a E>
where
    E: Enhancement,
    I: IntoIterator<Item = &'a E>,
{
    let mut ranked: Vec<&E> = enhancements
        .into_iter()
        .filter(|e| e.confidence() >= threshold)
        .collect();
    ranked.sort_by(|a, b| {
        b.confidence()
            .partial_cmp(&a.confidence())
            .unwrap_or(Ordering::Equal)
    });
    ranked
}
