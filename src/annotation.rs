//! OWL 2 annotations.

use crate::entity::AnnotationProperty;
use crate::expression::canonical_operands;
use crate::literal::Literal;
use oxrdf::{BlankNode, NamedNode, Term, TermRef};
use std::fmt;

/// An OWL 2 annotation: a property, a value, and optionally further
/// annotations on the annotation itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Annotation {
    property: AnnotationProperty,
    value: AnnotationValue,
    annotations: Vec<Annotation>,
}

impl Annotation {
    /// Creates a plain annotation.
    pub fn new(property: AnnotationProperty, value: impl Into<AnnotationValue>) -> Self {
        Self {
            property,
            value: value.into(),
            annotations: Vec::new(),
        }
    }

    /// Creates an annotation carrying nested annotations.
    pub fn with_annotations(
        property: AnnotationProperty,
        value: impl Into<AnnotationValue>,
        annotations: Vec<Annotation>,
    ) -> Self {
        Self {
            property,
            value: value.into(),
            annotations: canonical_operands(annotations),
        }
    }

    /// The annotation property.
    pub fn property(&self) -> &AnnotationProperty {
        &self.property
    }

    /// The annotation value.
    pub fn value(&self) -> &AnnotationValue {
        &self.value
    }

    /// Annotations on this annotation, in canonical order.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Annotation(")?;
        for nested in &self.annotations {
            write!(f, "{nested} ")?;
        }
        write!(f, "{} {})", self.property, self.value)
    }
}

/// The value of an annotation: an IRI, an anonymous individual or a literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnnotationValue {
    /// An IRI
    Iri(NamedNode),
    /// An anonymous individual
    Anonymous(BlankNode),
    /// A literal
    Literal(Literal),
}

impl AnnotationValue {
    /// Converts the value to the RDF term it is written as.
    pub fn to_term(&self) -> Term {
        match self {
            Self::Iri(n) => n.clone().into(),
            Self::Anonymous(b) => b.clone().into(),
            Self::Literal(l) => l.to_rdf().into(),
        }
    }

    /// Builds the value from the RDF term it was read from.
    pub fn from_term(term: TermRef<'_>) -> Self {
        match term {
            TermRef::NamedNode(n) => Self::Iri(n.into_owned()),
            TermRef::BlankNode(b) => Self::Anonymous(b.into_owned()),
            TermRef::Literal(l) => Self::Literal(Literal::from_rdf(l)),
        }
    }
}

impl fmt::Display for AnnotationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(n) => write!(f, "{n}"),
            Self::Anonymous(b) => write!(f, "{b}"),
            Self::Literal(l) => write!(f, "{l}"),
        }
    }
}

impl From<NamedNode> for AnnotationValue {
    fn from(node: NamedNode) -> Self {
        Self::Iri(node)
    }
}

impl From<BlankNode> for AnnotationValue {
    fn from(node: BlankNode) -> Self {
        Self::Anonymous(node)
    }
}

impl From<Literal> for AnnotationValue {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

/// The subject of an annotation assertion: an IRI or an anonymous individual.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnnotationSubject {
    /// An IRI
    Iri(NamedNode),
    /// An anonymous individual
    Anonymous(BlankNode),
}

impl fmt::Display for AnnotationSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(n) => write!(f, "{n}"),
            Self::Anonymous(b) => write!(f, "{b}"),
        }
    }
}

impl From<NamedNode> for AnnotationSubject {
    fn from(node: NamedNode) -> Self {
        Self::Iri(node)
    }
}

impl From<BlankNode> for AnnotationSubject {
    fn from(node: BlankNode) -> Self {
        Self::Anonymous(node)
    }
}
