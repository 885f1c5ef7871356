//! OWL 2 axiom ↔ RDF graph mapping for Oxigraph.
//!
//! This crate implements both directions of the W3C
//! [OWL 2 Mapping to RDF Graphs](https://www.w3.org/TR/owl2-mapping-to-rdf/):
//! - reading the structural axioms encoded by the statements of an
//!   [`oxrdf::Graph`], with their annotations, and
//! - writing structural axioms back out as statements, reattaching
//!   annotations through `owl:Axiom` reification.
//!
//! # Example
//! ```
//! use oxowlrdf::{read_axioms, write_axiom, AnnotatedAxiom, Axiom, ClassExpression, OwlClass, ReaderConfig};
//! use oxrdf::{Graph, NamedNode};
//!
//! let dog = OwlClass::new(NamedNode::new("http://example.org/Dog").unwrap());
//! let animal = OwlClass::new(NamedNode::new("http://example.org/Animal").unwrap());
//! let axiom = AnnotatedAxiom::from(Axiom::subclass_of(
//!     ClassExpression::class(dog),
//!     ClassExpression::class(animal),
//! ));
//!
//! let mut graph = Graph::new();
//! write_axiom(&axiom, &mut graph).unwrap();
//!
//! let config = ReaderConfig::default();
//! let axioms: Vec<_> = read_axioms(&graph, &config).collect::<Result<_, _>>().unwrap();
//! assert_eq!(axioms.len(), 1);
//! assert_eq!(axioms[0].value(), &axiom);
//! ```

mod annotation;
mod axiom;
mod config;
mod datatype;
mod entity;
mod error;
mod expression;
mod graph;
mod literal;
mod translated;
mod translator;
pub mod vocab;

pub use annotation::{Annotation, AnnotationSubject, AnnotationValue};
pub use axiom::{AnnotatedAxiom, Axiom, AxiomKind};
pub use config::ReaderConfig;
pub use datatype::BuiltinDatatype;
pub use entity::{
    AnnotationProperty, DataProperty, Datatype, Individual, ObjectProperty, OwlClass,
};
pub use error::{
    CyclicAnnotationGraphError, GraphShapeError, GraphShapeErrorKind,
    IncompatibleLanguageTagError, LexicalParseError, LiteralError, TranslationError,
};
pub use expression::{ClassExpression, DataRange, ObjectPropertyExpression};
pub use graph::{GraphWriter, LocalGraph};
pub use literal::Literal;
pub use translated::Translated;
pub use translator::{
    read_axioms, translator_for, translators, write_axiom, write_axioms, Translator,
};
