//! Translators for entity declarations, `E rdf:type <entity class>`.

use crate::axiom::{AnnotatedAxiom, Axiom, AxiomKind};
use crate::entity::{
    AnnotationProperty, DataProperty, Datatype, Individual, ObjectProperty, OwlClass,
};
use crate::error::TranslationError;
use crate::graph::{GraphWriter, LocalGraph};
use crate::translated::Translated;
use crate::translator::class_axioms::named_subject;
use crate::translator::{axiom_with_annotations, wrong_kind, Translator};
use crate::vocab::owl;
use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{NamedNodeRef, SubjectRef, TripleRef};

macro_rules! declaration_translator {
    ($(#[$doc:meta])* $name:ident, $kind:ident, $variant:ident, $entity:ident, $class:expr) => {
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
                Box::new(graph.statements_for_type($class))
            }

            fn test(&self, _graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
                matches!(statement.subject, SubjectRef::NamedNode(_))
            }

            fn to_axiom(
                &self,
                graph: LocalGraph<'_>,
                statement: TripleRef<'_>,
            ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
                let entity = $entity::new(named_subject(statement)?);
                axiom_with_annotations(
                    graph,
                    statement,
                    Translated::new(()),
                    Axiom::$variant(entity),
                )
            }

            fn write(
                &self,
                axiom: &AnnotatedAxiom,
                writer: &mut GraphWriter<'_>,
            ) -> Result<(), TranslationError> {
                let Axiom::$variant(entity) = axiom.axiom() else {
                    return Err(wrong_kind(axiom));
                };
                let triple = writer.insert(
                    entity.iri().clone(),
                    rdf::TYPE.into_owned(),
                    NamedNodeRef::into_owned($class),
                );
                writer.annotate(&triple, axiom.annotations());
                Ok(())
            }
        }
    };
}

declaration_translator!(
    /// Declaration(Class) ↔ `C rdf:type owl:Class`.
    DeclareClassTranslator,
    DeclareClass,
    DeclareClass,
    OwlClass,
    owl::CLASS
);
declaration_translator!(
    /// Declaration(Datatype) ↔ `D rdf:type rdfs:Datatype`.
    DeclareDatatypeTranslator,
    DeclareDatatype,
    DeclareDatatype,
    Datatype,
    rdfs::DATATYPE
);
declaration_translator!(
    /// Declaration(ObjectProperty) ↔ `P rdf:type owl:ObjectProperty`.
    DeclareObjectPropertyTranslator,
    DeclareObjectProperty,
    DeclareObjectProperty,
    ObjectProperty,
    owl::OBJECT_PROPERTY
);
declaration_translator!(
    /// Declaration(DataProperty) ↔ `P rdf:type owl:DatatypeProperty`.
    DeclareDataPropertyTranslator,
    DeclareDataProperty,
    DeclareDataProperty,
    DataProperty,
    owl::DATATYPE_PROPERTY
);
declaration_translator!(
    /// Declaration(AnnotationProperty) ↔ `P rdf:type owl:AnnotationProperty`.
    DeclareAnnotationPropertyTranslator,
    DeclareAnnotationProperty,
    DeclareAnnotationProperty,
    AnnotationProperty,
    owl::ANNOTATION_PROPERTY
);

/// Declaration(NamedIndividual) ↔ `a rdf:type owl:NamedIndividual`.
pub(crate) struct DeclareNamedIndividualTranslator;

impl Translator for DeclareNamedIndividualTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::DeclareNamedIndividual
    }

    fn statements<'g>(
        &self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = TripleRef<'g>> + 'g> {
        Box::new(graph.statements_for_type(owl::NAMED_INDIVIDUAL))
    }

    fn test(&self, _graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
        matches!(statement.subject, SubjectRef::NamedNode(_))
    }

    fn to_axiom(
        &self,
        graph: LocalGraph<'_>,
        statement: TripleRef<'_>,
    ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
        let individual = Individual::Named(named_subject(statement)?);
        axiom_with_annotations(
            graph,
            statement,
            Translated::new(()),
            Axiom::DeclareNamedIndividual(individual),
        )
    }

    fn write(
        &self,
        axiom: &AnnotatedAxiom,
        writer: &mut GraphWriter<'_>,
    ) -> Result<(), TranslationError> {
        let Axiom::DeclareNamedIndividual(individual) = axiom.axiom() else {
            return Err(wrong_kind(axiom));
        };
        let subject = match individual {
            Individual::Named(n) => oxrdf::Subject::from(n.clone()),
            Individual::Anonymous(b) => oxrdf::Subject::from(b.clone()),
        };
        let triple = writer.insert(
            subject,
            rdf::TYPE.into_owned(),
            owl::NAMED_INDIVIDUAL.into_owned(),
        );
        writer.annotate(&triple, axiom.annotations());
        Ok(())
    }
}
