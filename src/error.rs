//! Diagnostic error types for the semanno crate.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]`
//! derives, providing error codes and help text. Malformed statement data is
//! never an error — missing fields resolve to defaults inside the parser —
//! so the taxonomy is small: the statement store can fail to parse its
//! input, and the entity serializer can fail to emit valid RDF.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the semanno crate.
///
/// Each variant wraps a subsystem-specific error, preserving the full
/// diagnostic chain (error codes, help text) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum SemannoError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Serialize(#[from] SerializeError),
}

// ---------------------------------------------------------------------------
// Statement store errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum StoreError {
    #[error("statement graph could not be parsed as {format}: {message}")]
    #[diagnostic(
        code(semanno::store::parse),
        help(
            "The input is not a well-formed document in the expected RDF \
             serialization. Check that the payload is complete and that the \
             format matches the serialization actually used — pass an \
             explicit StatementFormat instead of relying on guessing if the \
             content sniffing picked the wrong one."
        )
    )]
    Parse { format: String, message: String },
}

// ---------------------------------------------------------------------------
// Entity serializer errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum SerializeError {
    #[error("not a valid absolute IRI: {iri}")]
    #[diagnostic(
        code(semanno::serialize::invalid_iri),
        help(
            "Entity URIs and property URIs must be valid absolute IRIs to be \
             serialized as RDF. Entities produced by search results may have \
             an empty URI — assign one before serializing."
        )
    )]
    InvalidIri { iri: String },

    #[error("invalid language tag {tag:?} on value {value:?}")]
    #[diagnostic(
        code(semanno::serialize::invalid_language_tag),
        help(
            "Language slots must hold BCP47 language tags (e.g. \"en\", \
             \"de-AT\"). Re-add the property value with a valid tag or with \
             no tag at all."
        )
    )]
    InvalidLanguageTag { tag: String, value: String },

    #[error("failed to emit serialized statements: {source}")]
    #[diagnostic(
        code(semanno::serialize::emit),
        help(
            "The underlying RDF writer rejected the statement stream. This \
             usually means a property IRI cannot be represented in the \
             chosen output format (RDF/XML requires predicate IRIs that \
             split into a namespace and an XML name)."
        )
    )]
    Emit {
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for functions returning semanno results.
pub type SemannoResult<T> = std::result::Result<T, SemannoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_converts_to_semanno_error() {
        let err = StoreError::Parse {
            format: "Turtle".into(),
            message: "unexpected end of file".into(),
        };
        let top: SemannoError = err.into();
        assert!(matches!(top, SemannoError::Store(StoreError::Parse { .. })));
    }

    #[test]
    fn serialize_error_converts_to_semanno_error() {
        let err = SerializeError::InvalidIri { iri: "".into() };
        let top: SemannoError = err.into();
        assert!(matches!(
            top,
            SemannoError::Serialize(SerializeError::InvalidIri { .. })
        ));
    }

    #[test]
    fn error_display_messages_are_descriptive() {
        let err = StoreError::Parse {
            format: "RDF/XML".into(),
            message: "mismatched tag".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("RDF/XML"));
        assert!(msg.contains("mismatched tag"));
    }
}
