//! OWL 2 entities: classes, properties, datatypes and individuals.
//!
//! Entities are thin immutable wrappers around IRIs. They are the leaves of
//! every expression and axiom the translators produce.

use crate::datatype::BuiltinDatatype;
use oxrdf::{BlankNode, NamedNode, Term};
use std::fmt;

/// An OWL class (`owl:Class`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwlClass(NamedNode);

/// An OWL object property (`owl:ObjectProperty`).
///
/// Object properties relate individuals to individuals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectProperty(NamedNode);

/// An OWL data property (`owl:DatatypeProperty`).
///
/// Data properties relate individuals to literals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataProperty(NamedNode);

/// An OWL annotation property (`owl:AnnotationProperty`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnnotationProperty(NamedNode);

/// An OWL datatype (`rdfs:Datatype`), built-in or ontology-defined.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Datatype(NamedNode);

macro_rules! iri_entity {
    ($ty:ty) => {
        impl $ty {
            /// Creates the entity from a named node.
            #[inline]
            pub fn new(iri: NamedNode) -> Self {
                Self(iri)
            }

            /// Creates the entity from an IRI string.
            #[inline]
            pub fn new_from_iri(iri: impl Into<String>) -> Result<Self, oxiri::IriParseError> {
                Ok(Self(NamedNode::new(iri)?))
            }

            /// Returns the IRI of this entity.
            #[inline]
            pub fn iri(&self) -> &NamedNode {
                &self.0
            }

            /// Converts this entity into its underlying named node.
            #[inline]
            pub fn into_inner(self) -> NamedNode {
                self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<NamedNode> for $ty {
            fn from(node: NamedNode) -> Self {
                Self(node)
            }
        }

        impl From<$ty> for NamedNode {
            fn from(entity: $ty) -> Self {
                entity.0
            }
        }

        impl From<$ty> for Term {
            fn from(entity: $ty) -> Self {
                entity.0.into()
            }
        }

        impl AsRef<NamedNode> for $ty {
            fn as_ref(&self) -> &NamedNode {
                &self.0
            }
        }
    };
}

iri_entity!(OwlClass);
iri_entity!(ObjectProperty);
iri_entity!(DataProperty);
iri_entity!(AnnotationProperty);
iri_entity!(Datatype);

impl Datatype {
    /// The built-in datatype behind this IRI, if any.
    pub fn as_builtin(&self) -> Option<BuiltinDatatype> {
        BuiltinDatatype::from_iri(self.0.as_ref())
    }

    /// Returns true if this datatype needs no declaration.
    pub fn is_builtin(&self) -> bool {
        self.as_builtin().is_some()
    }
}

impl From<BuiltinDatatype> for Datatype {
    fn from(builtin: BuiltinDatatype) -> Self {
        Self(builtin.iri().into_owned())
    }
}

/// An OWL individual, either named by an IRI or anonymous.
///
/// Anonymous individuals are scoped to the graph they come from; they are
/// carried through translation as blank nodes without renaming.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Individual {
    /// A named individual.
    Named(NamedNode),
    /// An anonymous individual, represented by a blank node.
    Anonymous(BlankNode),
}

impl Individual {
    /// Returns the IRI if this is a named individual.
    pub fn iri(&self) -> Option<&NamedNode> {
        match self {
            Self::Named(n) => Some(n),
            Self::Anonymous(_) => None,
        }
    }

    /// Returns true if this individual is anonymous.
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous(_))
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(n) => write!(f, "{n}"),
            Self::Anonymous(b) => write!(f, "{b}"),
        }
    }
}

impl From<NamedNode> for Individual {
    fn from(node: NamedNode) -> Self {
        Self::Named(node)
    }
}

impl From<BlankNode> for Individual {
    fn from(node: BlankNode) -> Self {
        Self::Anonymous(node)
    }
}

impl From<Individual> for Term {
    fn from(individual: Individual) -> Self {
        match individual {
            Individual::Named(n) => n.into(),
            Individual::Anonymous(b) => b.into(),
        }
    }
}
