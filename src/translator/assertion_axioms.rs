//! Translators for individual axioms: class and property assertions,
//! negative assertions, individual equality and inequality.

use crate::axiom::{AnnotatedAxiom, Axiom, AxiomKind};
use crate::entity::{DataProperty, Individual, ObjectProperty};
use crate::error::{GraphShapeError, TranslationError};
use crate::graph::{subject_to_term, GraphWriter, LocalGraph};
use crate::translated::Translated;
use crate::translator::reader::{
    is_reserved_vocabulary, read_class_expression, read_individual, read_literal,
};
use crate::translator::writer::{
    expression_subject, individual_subject, individual_term, write_class_expression,
};
use crate::translator::{axiom_with_annotations, nary, wrong_kind, Translator};
use crate::vocab::owl;
use oxrdf::vocab::rdf;
use oxrdf::{Term, TermRef, TripleRef};

fn read_individual_operand(
    _graph: LocalGraph<'_>,
    term: TermRef<'_>,
) -> Result<Translated<Individual>, TranslationError> {
    read_individual(term).map(Translated::new)
}

/// ClassAssertion ↔ `a rdf:type C` where `C` is not reserved vocabulary.
pub(crate) struct ClassAssertionTranslator;

impl Translator for ClassAssertionTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::ClassAssertion
    }

    fn statements<'g>(
        &self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = TripleRef<'g>> + 'g> {
        Box::new(graph.statements_for_predicate(rdf::TYPE))
    }

    fn test(&self, graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
        match statement.object {
            TermRef::NamedNode(class) => !is_reserved_vocabulary(class.as_str()),
            TermRef::BlankNode(node) => {
                // only anonymous nodes that encode a class expression
                let subject = node.into();
                graph.has_type(subject, owl::RESTRICTION)
                    || graph.object_for(subject, owl::INTERSECTION_OF).is_some()
                    || graph.object_for(subject, owl::UNION_OF).is_some()
                    || graph.object_for(subject, owl::COMPLEMENT_OF).is_some()
                    || graph.object_for(subject, owl::ONE_OF).is_some()
            }
            TermRef::Literal(_) => false,
        }
    }

    fn to_axiom(
        &self,
        graph: LocalGraph<'_>,
        statement: TripleRef<'_>,
    ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
        let individual = read_individual(subject_to_term(statement.subject).as_ref())?;
        let (provenance, class) =
            Translated::new(()).append(read_class_expression(graph, statement.object)?);
        axiom_with_annotations(
            graph,
            statement,
            provenance,
            Axiom::ClassAssertion { class, individual },
        )
    }

    fn write(
        &self,
        axiom: &AnnotatedAxiom,
        writer: &mut GraphWriter<'_>,
    ) -> Result<(), TranslationError> {
        let Axiom::ClassAssertion { class, individual } = axiom.axiom() else {
            return Err(wrong_kind(axiom));
        };
        let class = write_class_expression(writer, class);
        let triple = writer.insert(
            individual_subject(individual),
            rdf::TYPE.into_owned(),
            class,
        );
        writer.annotate(&triple, axiom.annotations());
        Ok(())
    }
}

/// ObjectPropertyAssertion ↔ `a P b` where `P` is a declared object property.
pub(crate) struct ObjectPropertyAssertionTranslator;

impl Translator for ObjectPropertyAssertionTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::ObjectPropertyAssertion
    }

    fn statements<'g>(
        &self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = TripleRef<'g>> + 'g> {
        Box::new(graph.statements())
    }

    fn test(&self, graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
        !matches!(statement.object, TermRef::Literal(_))
            && graph.term_has_type(statement.predicate.into(), owl::OBJECT_PROPERTY)
    }

    fn to_axiom(
        &self,
        graph: LocalGraph<'_>,
        statement: TripleRef<'_>,
    ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
        let property = ObjectProperty::new(statement.predicate.into_owned());
        let source = read_individual(subject_to_term(statement.subject).as_ref())?;
        let target = read_individual(statement.object)?;
        axiom_with_annotations(
            graph,
            statement,
            Translated::new(()),
            Axiom::ObjectPropertyAssertion {
                property,
                source,
                target,
            },
        )
    }

    fn write(
        &self,
        axiom: &AnnotatedAxiom,
        writer: &mut GraphWriter<'_>,
    ) -> Result<(), TranslationError> {
        let Axiom::ObjectPropertyAssertion {
            property,
            source,
            target,
        } = axiom.axiom()
        else {
            return Err(wrong_kind(axiom));
        };
        let triple = writer.insert(
            individual_subject(source),
            property.iri().clone(),
            individual_term(target),
        );
        writer.annotate(&triple, axiom.annotations());
        Ok(())
    }
}

/// DataPropertyAssertion ↔ `a P v` where `P` is a declared data property.
pub(crate) struct DataPropertyAssertionTranslator;

impl Translator for DataPropertyAssertionTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::DataPropertyAssertion
    }

    fn statements<'g>(
        &self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = TripleRef<'g>> + 'g> {
        Box::new(graph.statements())
    }

    fn test(&self, graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
        matches!(statement.object, TermRef::Literal(_))
            && graph.term_has_type(statement.predicate.into(), owl::DATATYPE_PROPERTY)
    }

    fn to_axiom(
        &self,
        graph: LocalGraph<'_>,
        statement: TripleRef<'_>,
    ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
        let property = DataProperty::new(statement.predicate.into_owned());
        let source = read_individual(subject_to_term(statement.subject).as_ref())?;
        let target = read_literal(statement.object)?;
        axiom_with_annotations(
            graph,
            statement,
            Translated::new(()),
            Axiom::DataPropertyAssertion {
                property,
                source,
                target,
            },
        )
    }

    fn write(
        &self,
        axiom: &AnnotatedAxiom,
        writer: &mut GraphWriter<'_>,
    ) -> Result<(), TranslationError> {
        let Axiom::DataPropertyAssertion {
            property,
            source,
            target,
        } = axiom.axiom()
        else {
            return Err(wrong_kind(axiom));
        };
        let triple = writer.insert(
            individual_subject(source),
            property.iri().clone(),
            target.to_rdf(),
        );
        writer.annotate(&triple, axiom.annotations());
        Ok(())
    }
}

const NEGATIVE_ASSERTION_MACHINERY: &[oxrdf::NamedNodeRef<'static>] = &[
    owl::SOURCE_INDIVIDUAL,
    owl::ASSERTION_PROPERTY,
    owl::TARGET_INDIVIDUAL,
    owl::TARGET_VALUE,
];

fn negative_assertion_parts<'g>(
    graph: LocalGraph<'g>,
    statement: TripleRef<'_>,
) -> Result<(Translated<()>, Individual, oxrdf::NamedNode, TermRef<'g>), TranslationError> {
    let root = statement.subject;
    let source = graph
        .object_for(root, owl::SOURCE_INDIVIDUAL)
        .ok_or_else(|| GraphShapeError::missing_property(owl::SOURCE_INDIVIDUAL))?;
    let property = graph
        .object_for(root, owl::ASSERTION_PROPERTY)
        .ok_or_else(|| GraphShapeError::missing_property(owl::ASSERTION_PROPERTY))?;
    let TermRef::NamedNode(property) = property else {
        return Err(
            GraphShapeError::invalid_value("owl:assertionProperty must be a named property").into(),
        );
    };
    let (target_predicate, target) = graph
        .object_for(root, owl::TARGET_INDIVIDUAL)
        .map(|target| (owl::TARGET_INDIVIDUAL, target))
        .or_else(|| {
            graph
                .object_for(root, owl::TARGET_VALUE)
                .map(|target| (owl::TARGET_VALUE, target))
        })
        .ok_or_else(|| GraphShapeError::missing_property(owl::TARGET_INDIVIDUAL))?;

    let provenance = Translated::new(())
        .with_source(statement)
        .with_source(TripleRef::new(root, owl::SOURCE_INDIVIDUAL, source))
        .with_source(TripleRef::new(root, owl::ASSERTION_PROPERTY, property))
        .with_source(TripleRef::new(root, target_predicate, target));
    Ok((
        provenance,
        read_individual(source)?,
        property.into_owned(),
        target,
    ))
}

fn write_negative_assertion(
    writer: &mut GraphWriter<'_>,
    source: &Individual,
    property: &oxrdf::NamedNode,
    target: Term,
    target_predicate: oxrdf::NamedNodeRef<'static>,
    axiom: &AnnotatedAxiom,
) {
    let root = writer.fresh_blank_node();
    writer.insert(
        root.clone(),
        rdf::TYPE.into_owned(),
        owl::NEGATIVE_PROPERTY_ASSERTION.into_owned(),
    );
    writer.insert(
        root.clone(),
        owl::SOURCE_INDIVIDUAL.into_owned(),
        individual_term(source),
    );
    writer.insert(
        root.clone(),
        owl::ASSERTION_PROPERTY.into_owned(),
        property.clone(),
    );
    writer.insert(root.clone(), target_predicate.into_owned(), target);
    writer.annotate_node(&root.into(), axiom.annotations());
}

/// NegativeObjectPropertyAssertion ↔ a reified
/// `owl:NegativePropertyAssertion` node with an `owl:targetIndividual`.
pub(crate) struct NegativeObjectPropertyAssertionTranslator;

impl Translator for NegativeObjectPropertyAssertionTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::NegativeObjectPropertyAssertion
    }

    fn statements<'g>(
        &self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = TripleRef<'g>> + 'g> {
        Box::new(graph.statements_for_type(owl::NEGATIVE_PROPERTY_ASSERTION))
    }

    fn test(&self, graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
        graph
            .object_for(statement.subject, owl::TARGET_INDIVIDUAL)
            .is_some()
    }

    fn to_axiom(
        &self,
        graph: LocalGraph<'_>,
        statement: TripleRef<'_>,
    ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
        let (provenance, source, property, target) = negative_assertion_parts(graph, statement)?;
        let target = read_individual(target)?;
        let (provenance, annotations) = provenance.append(
            graph.node_annotations(statement.subject, NEGATIVE_ASSERTION_MACHINERY)?,
        );
        Ok(provenance.map(|()| {
            AnnotatedAxiom::new(
                Axiom::NegativeObjectPropertyAssertion {
                    property: ObjectProperty::new(property),
                    source,
                    target,
                },
                annotations,
            )
        }))
    }

    fn write(
        &self,
        axiom: &AnnotatedAxiom,
        writer: &mut GraphWriter<'_>,
    ) -> Result<(), TranslationError> {
        let Axiom::NegativeObjectPropertyAssertion {
            property,
            source,
            target,
        } = axiom.axiom()
        else {
            return Err(wrong_kind(axiom));
        };
        write_negative_assertion(
            writer,
            source,
            property.iri(),
            individual_term(target),
            owl::TARGET_INDIVIDUAL,
            axiom,
        );
        Ok(())
    }
}

/// NegativeDataPropertyAssertion ↔ a reified
/// `owl:NegativePropertyAssertion` node with an `owl:targetValue`.
pub(crate) struct NegativeDataPropertyAssertionTranslator;

impl Translator for NegativeDataPropertyAssertionTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::NegativeDataPropertyAssertion
    }

    fn statements<'g>(
        &self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = TripleRef<'g>> + 'g> {
        Box::new(graph.statements_for_type(owl::NEGATIVE_PROPERTY_ASSERTION))
    }

    fn test(&self, graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
        graph
            .object_for(statement.subject, owl::TARGET_VALUE)
            .is_some()
    }

    fn to_axiom(
        &self,
        graph: LocalGraph<'_>,
        statement: TripleRef<'_>,
    ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
        let (provenance, source, property, target) = negative_assertion_parts(graph, statement)?;
        let target = read_literal(target)?;
        let (provenance, annotations) = provenance.append(
            graph.node_annotations(statement.subject, NEGATIVE_ASSERTION_MACHINERY)?,
        );
        Ok(provenance.map(|()| {
            AnnotatedAxiom::new(
                Axiom::NegativeDataPropertyAssertion {
                    property: DataProperty::new(property),
                    source,
                    target,
                },
                annotations,
            )
        }))
    }

    fn write(
        &self,
        axiom: &AnnotatedAxiom,
        writer: &mut GraphWriter<'_>,
    ) -> Result<(), TranslationError> {
        let Axiom::NegativeDataPropertyAssertion {
            property,
            source,
            target,
        } = axiom.axiom()
        else {
            return Err(wrong_kind(axiom));
        };
        write_negative_assertion(
            writer,
            source,
            property.iri(),
            target.to_rdf().into(),
            owl::TARGET_VALUE,
            axiom,
        );
        Ok(())
    }
}

/// SameIndividual ↔ pairwise `a owl:sameAs b`.
pub(crate) struct SameIndividualTranslator;

impl Translator for SameIndividualTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::SameIndividual
    }

    fn statements<'g>(
        &self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = TripleRef<'g>> + 'g> {
        Box::new(graph.statements_for_predicate(owl::SAME_AS))
    }

    fn test(&self, _graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
        !matches!(statement.object, TermRef::Literal(_))
    }

    fn to_axiom(
        &self,
        graph: LocalGraph<'_>,
        statement: TripleRef<'_>,
    ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
        let a = read_individual(subject_to_term(statement.subject).as_ref())?;
        let b = read_individual(statement.object)?;
        axiom_with_annotations(
            graph,
            statement,
            Translated::new(()),
            Axiom::same_individual(vec![a, b]),
        )
    }

    fn axioms<'g>(
        &'g self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = Result<Translated<AnnotatedAxiom>, TranslationError>> + 'g> {
        nary::nary_axioms(self, graph, read_individual_operand, Axiom::same_individual)
    }

    fn write(
        &self,
        axiom: &AnnotatedAxiom,
        writer: &mut GraphWriter<'_>,
    ) -> Result<(), TranslationError> {
        let Axiom::SameIndividual(individuals) = axiom.axiom() else {
            return Err(wrong_kind(axiom));
        };
        write_pairwise_individuals(writer, individuals, owl::SAME_AS, axiom);
        Ok(())
    }
}

fn write_pairwise_individuals(
    writer: &mut GraphWriter<'_>,
    individuals: &[Individual],
    predicate: oxrdf::NamedNodeRef<'static>,
    axiom: &AnnotatedAxiom,
) {
    let operands = crate::expression::canonical_operands(individuals.to_vec());
    let terms: Vec<Term> = operands.iter().map(individual_term).collect();
    for (i, subject) in terms.iter().enumerate() {
        for object in &terms[i + 1..] {
            let triple = writer.insert(
                expression_subject(subject.clone()),
                predicate.into_owned(),
                object.clone(),
            );
            writer.annotate(&triple, axiom.annotations());
        }
    }
}

/// DifferentIndividuals ↔ pairwise `a owl:differentFrom b`, or a reified
/// `owl:AllDifferent` node with `owl:members` or `owl:distinctMembers`.
pub(crate) struct DifferentIndividualsTranslator;

impl Translator for DifferentIndividualsTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::DifferentIndividuals
    }

    fn statements<'g>(
        &self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = TripleRef<'g>> + 'g> {
        Box::new(
            graph
                .statements_for_predicate(owl::DIFFERENT_FROM)
                .chain(graph.statements_for_type(owl::ALL_DIFFERENT)),
        )
    }

    fn test(&self, graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
        if statement.predicate == rdf::TYPE {
            return graph.object_for(statement.subject, owl::MEMBERS).is_some()
                || graph
                    .object_for(statement.subject, owl::DISTINCT_MEMBERS)
                    .is_some();
        }
        !matches!(statement.object, TermRef::Literal(_))
    }

    fn to_axiom(
        &self,
        graph: LocalGraph<'_>,
        statement: TripleRef<'_>,
    ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
        if statement.predicate == rdf::TYPE {
            return reified_different_individuals(graph, statement);
        }
        let a = read_individual(subject_to_term(statement.subject).as_ref())?;
        let b = read_individual(statement.object)?;
        axiom_with_annotations(
            graph,
            statement,
            Translated::new(()),
            Axiom::different_individuals(vec![a, b]),
        )
    }

    fn axioms<'g>(
        &'g self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = Result<Translated<AnnotatedAxiom>, TranslationError>> + 'g> {
        nary::nary_axioms(
            self,
            graph,
            read_individual_operand,
            Axiom::different_individuals,
        )
    }

    fn write(
        &self,
        axiom: &AnnotatedAxiom,
        writer: &mut GraphWriter<'_>,
    ) -> Result<(), TranslationError> {
        let Axiom::DifferentIndividuals(individuals) = axiom.axiom() else {
            return Err(wrong_kind(axiom));
        };
        write_pairwise_individuals(writer, individuals, owl::DIFFERENT_FROM, axiom);
        Ok(())
    }
}

fn reified_different_individuals(
    graph: LocalGraph<'_>,
    statement: TripleRef<'_>,
) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
    let (members_predicate, members_head) = graph
        .object_for(statement.subject, owl::MEMBERS)
        .map(|head| (owl::MEMBERS, head))
        .or_else(|| {
            graph
                .object_for(statement.subject, owl::DISTINCT_MEMBERS)
                .map(|head| (owl::DISTINCT_MEMBERS, head))
        })
        .ok_or_else(|| GraphShapeError::missing_property(owl::MEMBERS))?;
    let mut provenance = Translated::new(())
        .with_source(statement)
        .with_source(TripleRef::new(
            statement.subject,
            members_predicate,
            members_head,
        ));
    let (members, sources) = graph.read_list(members_head)?.into_parts();
    provenance.extend_sources(sources);
    let mut individuals = Vec::with_capacity(members.len());
    for member in &members {
        individuals.push(read_individual(member.as_ref())?);
    }
    let (provenance, annotations) = provenance.append(graph.node_annotations(
        statement.subject,
        &[owl::MEMBERS, owl::DISTINCT_MEMBERS],
    )?);
    Ok(provenance
        .map(|()| AnnotatedAxiom::new(Axiom::different_individuals(individuals), annotations)))
}
