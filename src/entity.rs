//! Multi-valued, multilingual property bag identified by a URI.
//!
//! Every property maps language slots (the untagged slot or a language tag)
//! to ordered value lists, matching RDF semantics: a property may carry
//! untagged and language-tagged values at the same time.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered map from language slot to values. `None` is the untagged slot.
pub type PropertySlots = IndexMap<Option<String>, Vec<String>>;

/// An entity: a URI plus a property → slot → values structure.
///
/// The URI may be empty for entities that have not been assigned one yet
/// (e.g. candidates produced by a search). Entities are created empty and
/// populated incrementally with [`Entity::add_property_value`]; values are
/// never deduplicated and keep insertion order, as do properties and slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    uri: String,
    properties: IndexMap<String, PropertySlots>,
}

impl Entity {
    /// Create an empty entity with the given URI.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            properties: IndexMap::new(),
        }
    }

    /// The entity URI. Empty for not-yet-assigned entities.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Append a value to the given property and language slot.
    pub fn add_property_value(
        &mut self,
        property: impl Into<String>,
        value: impl Into<String>,
        language: Option<&str>,
    ) {
        self.properties
            .entry(property.into())
            .or_default()
            .entry(language.map(str::to_owned))
            .or_default()
            .push(value.into());
    }

    /// All values of a property in the given slot (`None` = untagged),
    /// in insertion order. Empty if the property or slot is absent.
    pub fn values(&self, property: &str, language: Option<&str>) -> &[String] {
        self.properties
            .get(property)
            .and_then(|slots| slots.get(&language.map(str::to_owned)))
            .map(|values| values.as_slice())
            .unwrap_or(&[])
    }

    /// The first value of a property in the given slot.
    pub fn value(&self, property: &str, language: Option<&str>) -> Option<&str> {
        self.values(property, language).first().map(String::as_str)
    }

    /// The first value of a property, preferring the untagged slot.
    ///
    /// If the property has no untagged value, the first value of the first
    /// populated slot in slot-insertion order is returned. The fallback is
    /// deliberately insertion-ordered, not preferred-language.
    pub fn first_property_value(&self, property: &str) -> Option<&str> {
        let slots = self.properties.get(property)?;
        if let Some(values) = slots.get(&None) {
            if let Some(first) = values.first() {
                return Some(first);
            }
        }
        slots
            .values()
            .find_map(|values| values.first())
            .map(String::as_str)
    }

    /// Distinct property URIs, in insertion order.
    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Number of distinct properties.
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// The full property → slot → values structure, for serialization.
    pub fn raw_properties(&self) -> &IndexMap<String, PropertySlots> {
        &self.properties
    }
}
