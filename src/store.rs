//! In-memory statement store: subject → predicate → ordered value list.
//!
//! The store is built once from a serialized RDF document and read by the
//! graph parser. Values within one subject/predicate pair keep their arrival
//! order, and subjects keep first-arrival order, so a parse over the store is
//! deterministic. Quads from named graphs are merged into a single statement
//! set; the graph name is dropped.

use indexmap::IndexMap;
use oxrdf::{NamedNode, Subject, Term};
use oxrdfio::RdfParser;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::format::StatementFormat;

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Whether a statement value names another resource or carries a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// The value is the URI of another resource (or a blank node label).
    Reference,
    /// The value is a literal, optionally language-tagged or datatyped.
    Literal,
}

/// One value of a (subject, predicate) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementValue {
    /// Reference or literal.
    pub kind: ValueKind,
    /// The lexical value: a URI for references, the literal text otherwise.
    pub value: String,
    /// Language tag of a language-tagged literal.
    pub language: Option<String>,
    /// Datatype IRI of a typed literal (absent for plain and language-tagged
    /// literals).
    pub datatype: Option<String>,
}

impl StatementValue {
    /// A reference value naming another resource.
    pub fn reference(uri: impl Into<String>) -> Self {
        Self {
            kind: ValueKind::Reference,
            value: uri.into(),
            language: None,
            datatype: None,
        }
    }

    /// A plain literal value.
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            kind: ValueKind::Literal,
            value: value.into(),
            language: None,
            datatype: None,
        }
    }

    /// A language-tagged literal value.
    pub fn literal_with_language(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            kind: ValueKind::Literal,
            value: value.into(),
            language: Some(language.into()),
            datatype: None,
        }
    }
}

/// Statement graph indexed for subject-centric reads.
///
/// The nested map preserves insertion order at every level: subjects in
/// first-arrival order, predicates per subject in first-arrival order, and
/// values per predicate in statement arrival order. The first value of a
/// pair is "the" value when a single-valued field is read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatementStore {
    subjects: IndexMap<String, IndexMap<String, Vec<StatementValue>>>,
    statement_count: usize,
}

impl StatementStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a serialized RDF document into a store.
    ///
    /// This is the one fatal failure point of the crate: if the document is
    /// not well-formed in the given format, no store is produced and every
    /// downstream operation is unreachable.
    pub fn parse(content: &str, format: StatementFormat) -> StoreResult<Self> {
        let mut store = Self::new();
        let parser = RdfParser::from_format(format.rdf_format());
        for quad in parser.for_reader(content.as_bytes()) {
            let quad = quad.map_err(|e| StoreError::Parse {
                format: format.to_string(),
                message: e.to_string(),
            })?;

            let subject = match quad.subject {
                Subject::NamedNode(n) => n.into_string(),
                Subject::BlankNode(b) => b.to_string(),
                #[allow(unreachable_patterns)]
                _ => continue,
            };
            let value = match quad.object {
                Term::NamedNode(n) => StatementValue::reference(n.into_string()),
                Term::BlankNode(b) => StatementValue::reference(b.to_string()),
                Term::Literal(l) => {
                    let (value, datatype, language) = l.destruct();
                    StatementValue {
                        kind: ValueKind::Literal,
                        value,
                        language,
                        datatype: datatype.map(NamedNode::into_string),
                    }
                }
                #[allow(unreachable_patterns)]
                _ => continue,
            };

            store.insert(subject, quad.predicate.into_string(), value);
        }

        tracing::debug!(
            subjects = store.subject_count(),
            statements = store.len(),
            %format,
            "parsed statement graph"
        );
        Ok(store)
    }

    /// Append a statement. Duplicate values are kept; order is arrival order.
    pub fn insert(
        &mut self,
        subject: impl Into<String>,
        predicate: impl Into<String>,
        value: StatementValue,
    ) {
        self.subjects
            .entry(subject.into())
            .or_default()
            .entry(predicate.into())
            .or_default()
            .push(value);
        self.statement_count += 1;
    }

    /// All values of a (subject, predicate) pair, in arrival order.
    /// Empty if the subject or predicate is absent.
    pub fn values_of(&self, subject: &str, predicate: &str) -> &[StatementValue] {
        self.subjects
            .get(subject)
            .and_then(|props| props.get(predicate))
            .map(|values| values.as_slice())
            .unwrap_or(&[])
    }

    /// The first value of a (subject, predicate) pair.
    pub fn first_value(&self, subject: &str, predicate: &str) -> Option<&StatementValue> {
        self.values_of(subject, predicate).first()
    }

    /// Subjects that carry a statement (predicate, value), compared on the
    /// lexical value regardless of kind. Used for type discovery.
    pub fn subjects_matching(&self, predicate: &str, value: &str) -> Vec<&str> {
        self.subjects
            .iter()
            .filter(|(_, props)| {
                props
                    .get(predicate)
                    .is_some_and(|values| values.iter().any(|v| v.value == value))
            })
            .map(|(subject, _)| subject.as_str())
            .collect()
    }

    /// Whether the store holds any statement about the subject.
    pub fn contains_subject(&self, subject: &str) -> bool {
        self.subjects.contains_key(subject)
    }

    /// All (predicate, values) pairs of a subject, in first-arrival order.
    pub fn properties_of(
        &self,
        subject: &str,
    ) -> impl Iterator<Item = (&str, &[StatementValue])> {
        self.subjects
            .get(subject)
            .into_iter()
            .flat_map(|props| props.iter().map(|(p, vs)| (p.as_str(), vs.as_slice())))
    }

    /// All subjects, in first-arrival order.
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.subjects.keys().map(String::as_str)
    }

    /// Number of distinct subjects.
    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    /// Total number of statements.
    pub fn len(&self) -> usize {
        self.statement_count
    }

    /// Whether the store holds no statements.
    pub fn is_empty(&self) -> bool {
        self.statement_count == 0
    }
}
