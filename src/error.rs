//! Error types for the axiom ↔ graph mapping.

use crate::axiom::AxiomKind;
use oxrdf::NamedNode;
use std::fmt;

/// An error raised while translating between axioms and RDF statements.
#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    /// No translator is registered for the axiom kind. This is a programming
    /// error: the registry covers every structural axiom kind.
    #[error("no translator is registered for axiom kind {0:?}")]
    UnsupportedKind(AxiomKind),
    /// The triples present do not match any recognized shape for the claimed
    /// axiom kind. Callers scanning a heterogeneous graph may skip the
    /// offending statement and continue.
    #[error(transparent)]
    GraphShape(#[from] GraphShapeError),
    /// The annotation reification structure of a statement contains a cycle.
    #[error(transparent)]
    CyclicAnnotations(#[from] CyclicAnnotationGraphError),
    /// A literal could not be built from the graph.
    #[error(transparent)]
    Literal(#[from] LiteralError),
}

/// The triples present in the graph do not form a recognized axiom or
/// expression shape.
#[derive(Debug, thiserror::Error)]
#[error("{kind:?}: {message}")]
pub struct GraphShapeError {
    kind: GraphShapeErrorKind,
    message: String,
}

/// The kind of malformed graph shape that was encountered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphShapeErrorKind {
    /// A property required by the shape is missing.
    MissingProperty,
    /// A property value has the wrong node type.
    InvalidValue,
    /// The anonymous node does not encode any known construct.
    UnknownConstruct,
    /// An `rdf:first`/`rdf:rest` list is broken.
    MalformedList,
    /// A blank-node structure references itself.
    CircularReference,
    /// A cardinality value is not a non-negative integer.
    InvalidCardinality,
}

impl GraphShapeError {
    /// Creates a new graph shape error.
    pub fn new(kind: GraphShapeErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates a missing property error.
    pub fn missing_property(property: impl fmt::Display) -> Self {
        Self::new(
            GraphShapeErrorKind::MissingProperty,
            format!("missing required property {property}"),
        )
    }

    /// Creates an invalid value error.
    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::new(GraphShapeErrorKind::InvalidValue, message)
    }

    /// Creates a malformed list error.
    pub fn malformed_list(message: impl Into<String>) -> Self {
        Self::new(GraphShapeErrorKind::MalformedList, message)
    }

    /// Creates a circular reference error.
    pub fn circular_reference(node: impl fmt::Display) -> Self {
        Self::new(
            GraphShapeErrorKind::CircularReference,
            format!("self-referential structure at {node}"),
        )
    }

    /// Creates an unknown construct error.
    pub fn unknown_construct(message: impl Into<String>) -> Self {
        Self::new(GraphShapeErrorKind::UnknownConstruct, message)
    }

    /// Returns the error kind.
    pub fn kind(&self) -> GraphShapeErrorKind {
        self.kind
    }
}

/// The annotation reification structure attached to a statement loops back on
/// itself. The statement's annotation set cannot be resolved; the error is
/// surfaced to the axioms-stream caller rather than producing a silently
/// unannotated axiom.
#[derive(Debug, Clone, thiserror::Error)]
#[error("cyclic annotation structure through reification node {node}")]
pub struct CyclicAnnotationGraphError {
    node: String,
}

impl CyclicAnnotationGraphError {
    pub(crate) fn new(node: impl fmt::Display) -> Self {
        Self {
            node: node.to_string(),
        }
    }

    /// The reification node at which the cycle was detected, in N-Triples form.
    pub fn node(&self) -> &str {
        &self.node
    }
}

/// An error raised while constructing a [`Literal`](crate::Literal).
#[derive(Debug, thiserror::Error)]
pub enum LiteralError {
    /// A language tag was combined with a datatype other than
    /// `rdf:langString` or `rdf:PlainLiteral`.
    #[error(transparent)]
    IncompatibleLanguageTag(#[from] IncompatibleLanguageTagError),
    /// The language tag is not a valid BCP47 tag.
    #[error(transparent)]
    LanguageTag(#[from] oxilangtag::LanguageTagParseError),
}

/// A language-tagged literal can only have the `rdf:langString` datatype.
#[derive(Debug, Clone, thiserror::Error)]
#[error("cannot build a literal with datatype {datatype} and language tag \"{language}\"")]
pub struct IncompatibleLanguageTagError {
    datatype: NamedNode,
    language: String,
}

impl IncompatibleLanguageTagError {
    pub(crate) fn new(datatype: NamedNode, language: impl Into<String>) -> Self {
        Self {
            datatype,
            language: language.into(),
        }
    }

    /// The rejected datatype.
    pub fn datatype(&self) -> &NamedNode {
        &self.datatype
    }

    /// The offending language tag.
    pub fn language(&self) -> &str {
        &self.language
    }
}

/// The lexical form of a literal is not valid for the requested value-space
/// interpretation.
///
/// Literals with ill-typed lexical forms are still constructible; this error
/// only surfaces when a typed value is actually requested.
#[derive(Debug, Clone, thiserror::Error)]
#[error("\"{lexical}\" is not a valid {value_space} lexical form")]
pub struct LexicalParseError {
    lexical: String,
    value_space: &'static str,
}

impl LexicalParseError {
    pub(crate) fn new(lexical: impl Into<String>, value_space: &'static str) -> Self {
        Self {
            lexical: lexical.into(),
            value_space,
        }
    }

    /// The lexical form that failed to parse.
    pub fn lexical(&self) -> &str {
        &self.lexical
    }
}
