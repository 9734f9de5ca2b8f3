//! Serialization formats for statement graphs.
//!
//! The enhancement service hands the client an opaque serialized graph; the
//! media type on the response (or, failing that, a sniff of the content)
//! decides which concrete syntax the statement store parses.

use oxrdfio::RdfFormat;
use serde::{Deserialize, Serialize};

/// Concrete RDF serialization of a statement graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatementFormat {
    /// Turtle (`text/turtle`). Superset of N-Triples; the guessing default.
    Turtle,
    /// N-Triples (`application/n-triples`).
    NTriples,
    /// RDF/XML (`application/rdf+xml`), the enhancement service default.
    RdfXml,
    /// TriG (`application/trig`). Graph names are ignored by the store.
    TriG,
    /// N-Quads (`application/n-quads`). Graph names are ignored by the store.
    NQuads,
}

impl StatementFormat {
    /// Canonical media type for this format.
    pub fn media_type(self) -> &'static str {
        match self {
            StatementFormat::Turtle => "text/turtle",
            StatementFormat::NTriples => "application/n-triples",
            StatementFormat::RdfXml => "application/rdf+xml",
            StatementFormat::TriG => "application/trig",
            StatementFormat::NQuads => "application/n-quads",
        }
    }

    /// Resolve a media type (optionally with parameters) to a format.
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        let essence = media_type.split(';').next()?.trim();
        match essence {
            "text/turtle" | "application/x-turtle" => Some(StatementFormat::Turtle),
            "application/n-triples" | "text/plain" => Some(StatementFormat::NTriples),
            "application/rdf+xml" | "application/xml" | "text/xml" => {
                Some(StatementFormat::RdfXml)
            }
            "application/trig" => Some(StatementFormat::TriG),
            "application/n-quads" => Some(StatementFormat::NQuads),
            _ => None,
        }
    }

    /// Resolve a file extension to a format.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.trim_start_matches('.') {
            "ttl" | "turtle" => Some(StatementFormat::Turtle),
            "nt" | "ntriples" => Some(StatementFormat::NTriples),
            "rdf" | "rdfxml" | "owl" | "xml" => Some(StatementFormat::RdfXml),
            "trig" => Some(StatementFormat::TriG),
            "nq" | "nquads" => Some(StatementFormat::NQuads),
            _ => None,
        }
    }

    /// Guess the format of a serialized graph from its content.
    ///
    /// XML markers pick RDF/XML; everything else falls back to Turtle,
    /// which also covers N-Triples input. Callers that know the media type
    /// should prefer [`StatementFormat::from_media_type`].
    pub fn guess(content: &str) -> Self {
        let head = content.trim_start();
        if head.starts_with("<?xml") || head.starts_with("<rdf:RDF") || head.contains("<rdf:RDF") {
            StatementFormat::RdfXml
        } else {
            StatementFormat::Turtle
        }
    }

    /// The corresponding `oxrdfio` parser/serializer format.
    pub(crate) fn rdf_format(self) -> RdfFormat {
        match self {
            StatementFormat::Turtle => RdfFormat::Turtle,
            StatementFormat::NTriples => RdfFormat::NTriples,
            StatementFormat::RdfXml => RdfFormat::RdfXml,
            StatementFormat::TriG => RdfFormat::TriG,
            StatementFormat::NQuads => RdfFormat::NQuads,
        }
    }
}

impl std::fmt::Display for StatementFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatementFormat::Turtle => write!(f, "Turtle"),
            StatementFormat::NTriples => write!(f, "N-Triples"),
            StatementFormat::RdfXml => write!(f, "RDF/XML"),
            StatementFormat::TriG => write!(f, "TriG"),
            StatementFormat::NQuads => write!(f, "N-Quads"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_round_trip() {
        for format in [
            StatementFormat::Turtle,
            StatementFormat::NTriples,
            StatementFormat::RdfXml,
            StatementFormat::TriG,
            StatementFormat::NQuads,
        ] {
            assert_eq!(StatementFormat::from_media_type(format.media_type()), Some(format));
        }
    }

    #[test]
    fn media_type_parameters_are_ignored() {
        assert_eq!(
            StatementFormat::from_media_type("text/turtle; charset=utf-8"),
            Some(StatementFormat::Turtle)
        );
    }

    #[test]
    fn unknown_media_type_is_none() {
        assert_eq!(StatementFormat::from_media_type("application/pdf"), None);
    }

    #[test]
    fn guesses_rdf_xml_from_xml_declaration() {
        assert_eq!(
            StatementFormat::guess("<?xml version=\"1.0\"?><rdf:RDF/>"),
            StatementFormat::RdfXml
        );
        assert_eq!(
            StatementFormat::guess("\n  <rdf:RDF xmlns:rdf=\"x\"></rdf:RDF>"),
            StatementFormat::RdfXml
        );
    }

    #[test]
    fn guesses_turtle_otherwise() {
        assert_eq!(
            StatementFormat::guess("@prefix ex: <http://example.com/> ."),
            StatementFormat::Turtle
        );
        assert_eq!(
            StatementFormat::guess("<http://a> <http://b> \"c\" ."),
            StatementFormat::Turtle
        );
    }

    #[test]
    fn extension_lookup() {
        assert_eq!(StatementFormat::from_extension("ttl"), Some(StatementFormat::Turtle));
        assert_eq!(StatementFormat::from_extension(".rdf"), Some(StatementFormat::RdfXml));
        assert_eq!(StatementFormat::from_extension("doc"), None);
    }
}
