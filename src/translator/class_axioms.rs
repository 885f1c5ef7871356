//! Translators for class axioms: subclassing, equivalence, disjointness,
//! disjoint unions and keys.

use crate::axiom::{AnnotatedAxiom, Axiom, AxiomKind};
use crate::entity::OwlClass;
use crate::error::{GraphShapeError, TranslationError};
use crate::expression::canonical_operands;
use crate::graph::{subject_to_term, GraphWriter, LocalGraph};
use crate::translated::Translated;
use crate::translator::reader::{
    is_data_property, is_datatype, read_class_expression, read_data_property,
    read_object_property_expression,
};
use crate::translator::writer::{expression_subject, write_class_expression};
use crate::translator::{axiom_with_annotations, nary, wrong_kind, Translator};
use crate::vocab::owl;
use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{NamedNode, SubjectRef, Term, TermRef, TripleRef};

pub(crate) fn named_subject(statement: TripleRef<'_>) -> Result<NamedNode, TranslationError> {
    match statement.subject {
        SubjectRef::NamedNode(n) => Ok(n.into_owned()),
        SubjectRef::BlankNode(_) => {
            Err(GraphShapeError::invalid_value("expected an IRI subject").into())
        }
    }
}

/// Writes one pairwise triple per distinct operand pair, in canonical operand
/// order, each carrying a copy of the full annotation set.
pub(crate) fn write_pairwise(
    writer: &mut GraphWriter<'_>,
    terms: Vec<Term>,
    predicate: oxrdf::NamedNodeRef<'static>,
    axiom: &AnnotatedAxiom,
) {
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

/// SubClassOf ↔ `C1 rdfs:subClassOf C2`.
pub(crate) struct SubClassOfTranslator;

impl Translator for SubClassOfTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::SubClassOf
    }

    fn statements<'g>(
        &self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = TripleRef<'g>> + 'g> {
        Box::new(graph.statements_for_predicate(rdfs::SUB_CLASS_OF))
    }

    fn test(&self, _graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
        !matches!(statement.object, TermRef::Literal(_))
    }

    fn to_axiom(
        &self,
        graph: LocalGraph<'_>,
        statement: TripleRef<'_>,
    ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
        let subject = subject_to_term(statement.subject);
        let provenance = Translated::new(());
        let (provenance, sub_class) =
            provenance.append(read_class_expression(graph, subject.as_ref())?);
        let (provenance, super_class) =
            provenance.append(read_class_expression(graph, statement.object)?);
        axiom_with_annotations(
            graph,
            statement,
            provenance,
            Axiom::SubClassOf {
                sub_class,
                super_class,
            },
        )
    }

    fn write(
        &self,
        axiom: &AnnotatedAxiom,
        writer: &mut GraphWriter<'_>,
    ) -> Result<(), TranslationError> {
        let Axiom::SubClassOf {
            sub_class,
            super_class,
        } = axiom.axiom()
        else {
            return Err(wrong_kind(axiom));
        };
        let sub = write_class_expression(writer, sub_class);
        let sup = write_class_expression(writer, super_class);
        let triple = writer.insert(
            expression_subject(sub),
            rdfs::SUB_CLASS_OF.into_owned(),
            sup,
        );
        writer.annotate(&triple, axiom.annotations());
        Ok(())
    }
}

/// EquivalentClasses ↔ pairwise `C1 owl:equivalentClass C2`.
pub(crate) struct EquivalentClassesTranslator;

impl Translator for EquivalentClassesTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::EquivalentClasses
    }

    fn statements<'g>(
        &self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = TripleRef<'g>> + 'g> {
        Box::new(graph.statements_for_predicate(owl::EQUIVALENT_CLASS))
    }

    fn test(&self, graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
        // datatype subjects encode DatatypeDefinition, not class equivalence
        !matches!(statement.object, TermRef::Literal(_))
            && !is_datatype(graph, subject_to_term(statement.subject).as_ref())
    }

    fn to_axiom(
        &self,
        graph: LocalGraph<'_>,
        statement: TripleRef<'_>,
    ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
        let subject = subject_to_term(statement.subject);
        let provenance = Translated::new(());
        let (provenance, a) = provenance.append(read_class_expression(graph, subject.as_ref())?);
        let (provenance, b) = provenance.append(read_class_expression(graph, statement.object)?);
        axiom_with_annotations(
            graph,
            statement,
            provenance,
            Axiom::equivalent_classes(vec![a, b]),
        )
    }

    fn axioms<'g>(
        &'g self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = Result<Translated<AnnotatedAxiom>, TranslationError>> + 'g> {
        nary::nary_axioms(self, graph, read_class_expression, Axiom::equivalent_classes)
    }

    fn write(
        &self,
        axiom: &AnnotatedAxiom,
        writer: &mut GraphWriter<'_>,
    ) -> Result<(), TranslationError> {
        let Axiom::EquivalentClasses(operands) = axiom.axiom() else {
            return Err(wrong_kind(axiom));
        };
        let operands = canonical_operands(operands.clone());
        let terms = operands
            .iter()
            .map(|operand| write_class_expression(writer, operand))
            .collect();
        write_pairwise(writer, terms, owl::EQUIVALENT_CLASS, axiom);
        Ok(())
    }
}

/// DisjointClasses ↔ pairwise `C1 owl:disjointWith C2`, or a reified
/// `owl:AllDisjointClasses` node with an `owl:members` list.
pub(crate) struct DisjointClassesTranslator;

impl Translator for DisjointClassesTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::DisjointClasses
    }

    fn statements<'g>(
        &self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = TripleRef<'g>> + 'g> {
        Box::new(
            graph
                .statements_for_predicate(owl::DISJOINT_WITH)
                .chain(graph.statements_for_type(owl::ALL_DISJOINT_CLASSES)),
        )
    }

    fn test(&self, graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
        if statement.predicate == rdf::TYPE {
            graph.object_for(statement.subject, owl::MEMBERS).is_some()
        } else {
            !matches!(statement.object, TermRef::Literal(_))
        }
    }

    fn to_axiom(
        &self,
        graph: LocalGraph<'_>,
        statement: TripleRef<'_>,
    ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
        if statement.predicate == rdf::TYPE {
            return reified_disjoint_classes(graph, statement);
        }
        let subject = subject_to_term(statement.subject);
        let provenance = Translated::new(());
        let (provenance, a) = provenance.append(read_class_expression(graph, subject.as_ref())?);
        let (provenance, b) = provenance.append(read_class_expression(graph, statement.object)?);
        axiom_with_annotations(
            graph,
            statement,
            provenance,
            Axiom::disjoint_classes(vec![a, b]),
        )
    }

    fn axioms<'g>(
        &'g self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = Result<Translated<AnnotatedAxiom>, TranslationError>> + 'g> {
        nary::nary_axioms(self, graph, read_class_expression, Axiom::disjoint_classes)
    }

    fn write(
        &self,
        axiom: &AnnotatedAxiom,
        writer: &mut GraphWriter<'_>,
    ) -> Result<(), TranslationError> {
        let Axiom::DisjointClasses(operands) = axiom.axiom() else {
            return Err(wrong_kind(axiom));
        };
        let operands = canonical_operands(operands.clone());
        let terms = operands
            .iter()
            .map(|operand| write_class_expression(writer, operand))
            .collect();
        write_pairwise(writer, terms, owl::DISJOINT_WITH, axiom);
        Ok(())
    }
}

fn reified_disjoint_classes(
    graph: LocalGraph<'_>,
    statement: TripleRef<'_>,
) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
    let members_head = graph
        .object_for(statement.subject, owl::MEMBERS)
        .ok_or_else(|| GraphShapeError::missing_property(owl::MEMBERS))?;
    let mut provenance = Translated::new(()).with_source(statement).with_source(
        TripleRef::new(statement.subject, owl::MEMBERS, members_head),
    );
    let (members, sources) = graph.read_list(members_head)?.into_parts();
    provenance.extend_sources(sources);
    let mut operands = Vec::with_capacity(members.len());
    for member in &members {
        let (merged, operand) =
            provenance.append(read_class_expression(graph, member.as_ref())?);
        provenance = merged;
        operands.push(operand);
    }
    let (provenance, annotations) = provenance.append(
        graph.node_annotations(statement.subject, &[owl::MEMBERS])?,
    );
    Ok(provenance.map(|()| AnnotatedAxiom::new(Axiom::disjoint_classes(operands), annotations)))
}

/// DisjointUnion ↔ `C owl:disjointUnionOf (C1 ... Cn)`.
pub(crate) struct DisjointUnionTranslator;

impl Translator for DisjointUnionTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::DisjointUnion
    }

    fn statements<'g>(
        &self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = TripleRef<'g>> + 'g> {
        Box::new(graph.statements_for_predicate(owl::DISJOINT_UNION_OF))
    }

    fn test(&self, _graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
        matches!(statement.subject, SubjectRef::NamedNode(_))
    }

    fn to_axiom(
        &self,
        graph: LocalGraph<'_>,
        statement: TripleRef<'_>,
    ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
        let class = OwlClass::new(named_subject(statement)?);
        let (members, sources) = graph.read_list(statement.object)?.into_parts();
        let mut provenance = Translated::new(());
        provenance.extend_sources(sources);
        let mut operands = Vec::with_capacity(members.len());
        for member in &members {
            let (merged, operand) =
                provenance.append(read_class_expression(graph, member.as_ref())?);
            provenance = merged;
            operands.push(operand);
        }
        axiom_with_annotations(
            graph,
            statement,
            provenance,
            Axiom::DisjointUnion {
                class,
                disjoint_classes: canonical_operands(operands),
            },
        )
    }

    fn write(
        &self,
        axiom: &AnnotatedAxiom,
        writer: &mut GraphWriter<'_>,
    ) -> Result<(), TranslationError> {
        let Axiom::DisjointUnion {
            class,
            disjoint_classes,
        } = axiom.axiom()
        else {
            return Err(wrong_kind(axiom));
        };
        let members = canonical_operands(disjoint_classes.clone())
            .iter()
            .map(|operand| write_class_expression(writer, operand))
            .collect();
        let list = writer.write_list(members);
        let triple = writer.insert(
            class.iri().clone(),
            owl::DISJOINT_UNION_OF.into_owned(),
            list,
        );
        writer.annotate(&triple, axiom.annotations());
        Ok(())
    }
}

/// HasKey ↔ `C owl:hasKey (P1 ... Pn)`.
pub(crate) struct HasKeyTranslator;

impl Translator for HasKeyTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::HasKey
    }

    fn statements<'g>(
        &self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = TripleRef<'g>> + 'g> {
        Box::new(graph.statements_for_predicate(owl::HAS_KEY))
    }

    fn test(&self, _graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
        !matches!(statement.object, TermRef::Literal(_))
    }

    fn to_axiom(
        &self,
        graph: LocalGraph<'_>,
        statement: TripleRef<'_>,
    ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
        let subject = subject_to_term(statement.subject);
        let provenance = Translated::new(());
        let (mut provenance, class) =
            provenance.append(read_class_expression(graph, subject.as_ref())?);
        let (members, sources) = graph.read_list(statement.object)?.into_parts();
        provenance.extend_sources(sources);
        let mut object_properties = Vec::new();
        let mut data_properties = Vec::new();
        for member in &members {
            if is_data_property(graph, member.as_ref()) {
                data_properties.push(read_data_property(member.as_ref())?);
            } else {
                let (merged, property) =
                    provenance.append(read_object_property_expression(graph, member.as_ref())?);
                provenance = merged;
                object_properties.push(property.base_property().clone());
            }
        }
        axiom_with_annotations(
            graph,
            statement,
            provenance,
            Axiom::HasKey {
                class,
                object_properties: canonical_operands(object_properties),
                data_properties: canonical_operands(data_properties),
            },
        )
    }

    fn write(
        &self,
        axiom: &AnnotatedAxiom,
        writer: &mut GraphWriter<'_>,
    ) -> Result<(), TranslationError> {
        let Axiom::HasKey {
            class,
            object_properties,
            data_properties,
        } = axiom.axiom()
        else {
            return Err(wrong_kind(axiom));
        };
        let class = write_class_expression(writer, class);
        let mut members: Vec<Term> = Vec::new();
        for property in canonical_operands(object_properties.clone()) {
            members.push(property.iri().clone().into());
        }
        for property in canonical_operands(data_properties.clone()) {
            members.push(property.iri().clone().into());
        }
        let list = writer.write_list(members);
        let triple = writer.insert(expression_subject(class), owl::HAS_KEY.into_owned(), list);
        writer.annotate(&triple, axiom.annotations());
        Ok(())
    }
}
