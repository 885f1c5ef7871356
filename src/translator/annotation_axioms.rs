//! Translators for annotation axioms.
//!
//! These translators only produce axioms when the reader configuration asks
//! for annotation axioms; by default annotation triples stay attached to the
//! statements they annotate.

use crate::annotation::{AnnotationSubject, AnnotationValue};
use crate::axiom::{AnnotatedAxiom, Axiom, AxiomKind};
use crate::entity::AnnotationProperty;
use crate::error::TranslationError;
use crate::graph::{subject_to_term, GraphWriter, LocalGraph};
use crate::translated::Translated;
use crate::translator::class_axioms::named_subject;
use crate::translator::reader::is_annotation_property;
use crate::translator::{axiom_with_annotations, wrong_kind, Translator};
use crate::vocab::owl;
use oxrdf::vocab::rdfs;
use oxrdf::{NamedNodeRef, SubjectRef, Term, TermRef, TripleRef};

/// Annotation properties that need no declaration.
const BUILTIN_ANNOTATION_PROPERTIES: &[NamedNodeRef<'static>] = &[
    rdfs::LABEL,
    rdfs::COMMENT,
    rdfs::SEE_ALSO,
    rdfs::IS_DEFINED_BY,
    owl::VERSION_INFO,
    owl::DEPRECATED,
    owl::BACKWARD_COMPATIBLE_WITH,
    owl::INCOMPATIBLE_WITH,
    owl::PRIOR_VERSION,
];

fn is_annotation_predicate(graph: LocalGraph<'_>, predicate: NamedNodeRef<'_>) -> bool {
    BUILTIN_ANNOTATION_PROPERTIES
        .iter()
        .any(|builtin| predicate == *builtin)
        || is_annotation_property(graph, predicate.into())
}

/// True if the subject node carries an axiom by itself, so that annotation
/// triples on it belong to that axiom instead of being assertions.
fn is_axiom_carrier(graph: LocalGraph<'_>, subject: SubjectRef<'_>) -> bool {
    [
        owl::AXIOM,
        owl::ANNOTATION,
        owl::NEGATIVE_PROPERTY_ASSERTION,
        owl::ALL_DISJOINT_CLASSES,
        owl::ALL_DISJOINT_PROPERTIES,
        owl::ALL_DIFFERENT,
    ]
    .iter()
    .any(|class| graph.has_type(subject, *class))
}

/// AnnotationAssertion ↔ `s A v` for an annotation property `A`.
pub(crate) struct AnnotationAssertionTranslator;

impl Translator for AnnotationAssertionTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::AnnotationAssertion
    }

    fn statements<'g>(
        &self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = TripleRef<'g>> + 'g> {
        if graph.config().load_annotation_axioms {
            Box::new(graph.statements())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn test(&self, graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
        is_annotation_predicate(graph, statement.predicate.into())
            && !is_axiom_carrier(graph, statement.subject)
    }

    fn to_axiom(
        &self,
        graph: LocalGraph<'_>,
        statement: TripleRef<'_>,
    ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
        let subject = match statement.subject {
            SubjectRef::NamedNode(n) => AnnotationSubject::Iri(n.into_owned()),
            SubjectRef::BlankNode(b) => AnnotationSubject::Anonymous(b.into_owned()),
        };
        axiom_with_annotations(
            graph,
            statement,
            Translated::new(()),
            Axiom::AnnotationAssertion {
                property: AnnotationProperty::new(statement.predicate.into_owned()),
                subject,
                value: AnnotationValue::from_term(statement.object),
            },
        )
    }

    fn write(
        &self,
        axiom: &AnnotatedAxiom,
        writer: &mut GraphWriter<'_>,
    ) -> Result<(), TranslationError> {
        let Axiom::AnnotationAssertion {
            property,
            subject,
            value,
        } = axiom.axiom()
        else {
            return Err(wrong_kind(axiom));
        };
        let subject: oxrdf::Subject = match subject {
            AnnotationSubject::Iri(n) => n.clone().into(),
            AnnotationSubject::Anonymous(b) => b.clone().into(),
        };
        let triple = writer.insert(subject, property.iri().clone(), value.to_term());
        writer.annotate(&triple, axiom.annotations());
        Ok(())
    }
}

/// SubAnnotationPropertyOf ↔ `A1 rdfs:subPropertyOf A2` on declared
/// annotation properties.
pub(crate) struct SubAnnotationPropertyOfTranslator;

impl Translator for SubAnnotationPropertyOfTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::SubAnnotationPropertyOf
    }

    fn statements<'g>(
        &self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = TripleRef<'g>> + 'g> {
        if graph.config().load_annotation_axioms {
            Box::new(graph.statements_for_predicate(rdfs::SUB_PROPERTY_OF))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn test(&self, graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
        let subject = subject_to_term(statement.subject);
        matches!(statement.object, TermRef::NamedNode(_))
            && is_annotation_property(graph, subject.as_ref())
    }

    fn to_axiom(
        &self,
        graph: LocalGraph<'_>,
        statement: TripleRef<'_>,
    ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
        let sub_property = AnnotationProperty::new(named_subject(statement)?);
        let super_property = match statement.object {
            TermRef::NamedNode(n) => AnnotationProperty::new(n.into_owned()),
            _ => {
                return Err(crate::error::GraphShapeError::invalid_value(
                    "expected a named annotation property",
                )
                .into())
            }
        };
        axiom_with_annotations(
            graph,
            statement,
            Translated::new(()),
            Axiom::SubAnnotationPropertyOf {
                sub_property,
                super_property,
            },
        )
    }

    fn write(
        &self,
        axiom: &AnnotatedAxiom,
        writer: &mut GraphWriter<'_>,
    ) -> Result<(), TranslationError> {
        let Axiom::SubAnnotationPropertyOf {
            sub_property,
            super_property,
        } = axiom.axiom()
        else {
            return Err(wrong_kind(axiom));
        };
        let triple = writer.insert(
            sub_property.iri().clone(),
            rdfs::SUB_PROPERTY_OF.into_owned(),
            super_property.iri().clone(),
        );
        writer.annotate(&triple, axiom.annotations());
        Ok(())
    }
}

macro_rules! annotation_scope_translator {
    ($(#[$doc:meta])* $name:ident, $kind:ident, $variant:ident, $field:ident, $predicate:expr) => {
        $(#[$doc])*
        pub(crate) struct $name;

        impl Translator for $name {
            fn kind(&self) -> AxiomKind {
                AxiomKind::$kind
            }

            fn statements<'g>(
                &self,
                graph: LocalGraph<'g>,
            ) -> Box<dyn Iterator<Item = TripleRef<'g>> + 'g> {
                if graph.config().load_annotation_axioms {
                    Box::new(graph.statements_for_predicate($predicate))
                } else {
                    Box::new(std::iter::empty())
                }
            }

            fn test(&self, graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
                let subject = subject_to_term(statement.subject);
                matches!(statement.object, TermRef::NamedNode(_))
                    && is_annotation_property(graph, subject.as_ref())
            }

            fn to_axiom(
                &self,
                graph: LocalGraph<'_>,
                statement: TripleRef<'_>,
            ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
                let property = AnnotationProperty::new(named_subject(statement)?);
                let $field = match statement.object {
                    TermRef::NamedNode(n) => n.into_owned(),
                    _ => {
                        return Err(crate::error::GraphShapeError::invalid_value(
                            "expected an IRI",
                        )
                        .into())
                    }
                };
                axiom_with_annotations(
                    graph,
                    statement,
                    Translated::new(()),
                    Axiom::$variant { property, $field },
                )
            }

            fn write(
                &self,
                axiom: &AnnotatedAxiom,
                writer: &mut GraphWriter<'_>,
            ) -> Result<(), TranslationError> {
                let Axiom::$variant { property, $field } = axiom.axiom() else {
                    return Err(wrong_kind(axiom));
                };
                let triple = writer.insert(
                    property.iri().clone(),
                    NamedNodeRef::into_owned($predicate),
                    Term::from($field.clone()),
                );
                writer.annotate(&triple, axiom.annotations());
                Ok(())
            }
        }
    };
}

annotation_scope_translator!(
    /// AnnotationPropertyDomain ↔ `A rdfs:domain U`.
    AnnotationPropertyDomainTranslator,
    AnnotationPropertyDomain,
    AnnotationPropertyDomain,
    domain,
    rdfs::DOMAIN
);
annotation_scope_translator!(
    /// AnnotationPropertyRange ↔ `A rdfs:range U`.
    AnnotationPropertyRangeTranslator,
    AnnotationPropertyRange,
    AnnotationPropertyRange,
    range,
    rdfs::RANGE
);
