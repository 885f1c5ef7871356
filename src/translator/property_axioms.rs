//! Translators for object property, data property and datatype axioms.

use crate::axiom::{AnnotatedAxiom, Axiom, AxiomKind};
use crate::entity::{DataProperty, Datatype, ObjectProperty};
use crate::error::TranslationError;
use crate::expression::canonical_operands;
use crate::graph::{subject_to_term, term_to_subject_ref, GraphWriter, LocalGraph};
use crate::translated::Translated;
use crate::translator::class_axioms::{named_subject, write_pairwise};
use crate::translator::reader::{
    is_data_property, is_datatype, is_object_property, read_class_expression, read_data_property,
    read_data_range, read_object_property_expression,
};
use crate::translator::writer::{
    expression_subject, write_class_expression, write_data_range,
    write_object_property_expression,
};
use crate::translator::{axiom_with_annotations, nary, wrong_kind, Translator};
use crate::vocab::owl;
use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{NamedNodeRef, SubjectRef, TermRef, TripleRef};

fn read_named_object_property(
    _graph: LocalGraph<'_>,
    term: TermRef<'_>,
) -> Result<Translated<ObjectProperty>, TranslationError> {
    match term {
        TermRef::NamedNode(n) => Ok(Translated::new(ObjectProperty::new(n.into_owned()))),
        _ => Err(crate::error::GraphShapeError::invalid_value(
            "expected a named object property",
        )
        .into()),
    }
}

fn read_named_data_property(
    _graph: LocalGraph<'_>,
    term: TermRef<'_>,
) -> Result<Translated<DataProperty>, TranslationError> {
    read_data_property(term).map(Translated::new)
}

/// SubObjectPropertyOf ↔ `P1 rdfs:subPropertyOf P2`.
///
/// `rdfs:subPropertyOf` is shared by the object, data and annotation
/// readings; a declaration as data or annotation property claims the
/// statement for those translators, everything else reads as object.
pub(crate) struct SubObjectPropertyOfTranslator;

impl Translator for SubObjectPropertyOfTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::SubObjectPropertyOf
    }

    fn statements<'g>(
        &self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = TripleRef<'g>> + 'g> {
        Box::new(graph.statements_for_predicate(rdfs::SUB_PROPERTY_OF))
    }

    fn test(&self, graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
        let subject = subject_to_term(statement.subject);
        is_object_property(graph, subject.as_ref()) && is_object_property(graph, statement.object)
    }

    fn to_axiom(
        &self,
        graph: LocalGraph<'_>,
        statement: TripleRef<'_>,
    ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
        let subject = subject_to_term(statement.subject);
        let provenance = Translated::new(());
        let (provenance, sub_property) =
            provenance.append(read_object_property_expression(graph, subject.as_ref())?);
        let (provenance, super_property) =
            provenance.append(read_object_property_expression(graph, statement.object)?);
        axiom_with_annotations(
            graph,
            statement,
            provenance,
            Axiom::SubObjectPropertyOf {
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
        let Axiom::SubObjectPropertyOf {
            sub_property,
            super_property,
        } = axiom.axiom()
        else {
            return Err(wrong_kind(axiom));
        };
        let sub = write_object_property_expression(writer, sub_property);
        let sup = write_object_property_expression(writer, super_property);
        let triple = writer.insert(
            expression_subject(sub),
            rdfs::SUB_PROPERTY_OF.into_owned(),
            sup,
        );
        writer.annotate(&triple, axiom.annotations());
        Ok(())
    }
}

/// SubObjectPropertyOf over a chain ↔ `P owl:propertyChainAxiom (P1 ... Pn)`.
pub(crate) struct SubPropertyChainOfTranslator;

impl Translator for SubPropertyChainOfTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::SubPropertyChainOf
    }

    fn statements<'g>(
        &self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = TripleRef<'g>> + 'g> {
        Box::new(graph.statements_for_predicate(owl::PROPERTY_CHAIN_AXIOM))
    }

    fn test(&self, _graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
        matches!(statement.subject, SubjectRef::NamedNode(_))
    }

    fn to_axiom(
        &self,
        graph: LocalGraph<'_>,
        statement: TripleRef<'_>,
    ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
        let super_property = ObjectProperty::new(named_subject(statement)?);
        let (members, sources) = graph.read_list(statement.object)?.into_parts();
        let mut provenance = Translated::new(());
        provenance.extend_sources(sources);
        let mut property_chain = Vec::with_capacity(members.len());
        for member in &members {
            let (merged, property) =
                provenance.append(read_object_property_expression(graph, member.as_ref())?);
            provenance = merged;
            property_chain.push(property);
        }
        axiom_with_annotations(
            graph,
            statement,
            provenance,
            Axiom::SubPropertyChainOf {
                property_chain,
                super_property,
            },
        )
    }

    fn write(
        &self,
        axiom: &AnnotatedAxiom,
        writer: &mut GraphWriter<'_>,
    ) -> Result<(), TranslationError> {
        let Axiom::SubPropertyChainOf {
            property_chain,
            super_property,
        } = axiom.axiom()
        else {
            return Err(wrong_kind(axiom));
        };
        // chain order is significant, no canonicalization
        let members = property_chain
            .iter()
            .map(|property| write_object_property_expression(writer, property))
            .collect();
        let list = writer.write_list(members);
        let triple = writer.insert(
            super_property.iri().clone(),
            owl::PROPERTY_CHAIN_AXIOM.into_owned(),
            list,
        );
        writer.annotate(&triple, axiom.annotations());
        Ok(())
    }
}

/// EquivalentObjectProperties ↔ pairwise `P1 owl:equivalentProperty P2`.
pub(crate) struct EquivalentObjectPropertiesTranslator;

impl Translator for EquivalentObjectPropertiesTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::EquivalentObjectProperties
    }

    fn statements<'g>(
        &self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = TripleRef<'g>> + 'g> {
        Box::new(graph.statements_for_predicate(owl::EQUIVALENT_PROPERTY))
    }

    fn test(&self, graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
        let subject = subject_to_term(statement.subject);
        matches!(statement.subject, SubjectRef::NamedNode(_))
            && matches!(statement.object, TermRef::NamedNode(_))
            && is_object_property(graph, subject.as_ref())
            && is_object_property(graph, statement.object)
    }

    fn to_axiom(
        &self,
        graph: LocalGraph<'_>,
        statement: TripleRef<'_>,
    ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
        let subject = subject_to_term(statement.subject);
        let provenance = Translated::new(());
        let (provenance, a) = provenance.append(read_named_object_property(graph, subject.as_ref())?);
        let (provenance, b) = provenance.append(read_named_object_property(graph, statement.object)?);
        axiom_with_annotations(
            graph,
            statement,
            provenance,
            Axiom::equivalent_object_properties(vec![a, b]),
        )
    }

    fn axioms<'g>(
        &'g self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = Result<Translated<AnnotatedAxiom>, TranslationError>> + 'g> {
        nary::nary_axioms(
            self,
            graph,
            read_named_object_property,
            Axiom::equivalent_object_properties,
        )
    }

    fn write(
        &self,
        axiom: &AnnotatedAxiom,
        writer: &mut GraphWriter<'_>,
    ) -> Result<(), TranslationError> {
        let Axiom::EquivalentObjectProperties(operands) = axiom.axiom() else {
            return Err(wrong_kind(axiom));
        };
        let terms = canonical_operands(operands.clone())
            .iter()
            .map(|property| property.iri().clone().into())
            .collect();
        write_pairwise(writer, terms, owl::EQUIVALENT_PROPERTY, axiom);
        Ok(())
    }
}

/// DisjointObjectProperties ↔ pairwise `P1 owl:propertyDisjointWith P2`, or a
/// reified `owl:AllDisjointProperties` node.
pub(crate) struct DisjointObjectPropertiesTranslator;

fn first_member(graph: LocalGraph<'_>, root: SubjectRef<'_>) -> Option<oxrdf::Term> {
    let head = graph.object_for(root, owl::MEMBERS)?;
    let head = term_to_subject_ref(head)?;
    graph.object_for(head, rdf::FIRST).map(|t| t.into_owned())
}

impl Translator for DisjointObjectPropertiesTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::DisjointObjectProperties
    }

    fn statements<'g>(
        &self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = TripleRef<'g>> + 'g> {
        Box::new(
            graph
                .statements_for_predicate(owl::PROPERTY_DISJOINT_WITH)
                .chain(graph.statements_for_type(owl::ALL_DISJOINT_PROPERTIES)),
        )
    }

    fn test(&self, graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
        if statement.predicate == rdf::TYPE {
            return first_member(graph, statement.subject)
                .is_some_and(|member| is_object_property(graph, member.as_ref()));
        }
        let subject = subject_to_term(statement.subject);
        is_object_property(graph, subject.as_ref()) && is_object_property(graph, statement.object)
    }

    fn to_axiom(
        &self,
        graph: LocalGraph<'_>,
        statement: TripleRef<'_>,
    ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
        if statement.predicate == rdf::TYPE {
            return reified_members(
                graph,
                statement,
                read_named_object_property,
                Axiom::disjoint_object_properties,
            );
        }
        let subject = subject_to_term(statement.subject);
        let provenance = Translated::new(());
        let (provenance, a) = provenance.append(read_named_object_property(graph, subject.as_ref())?);
        let (provenance, b) = provenance.append(read_named_object_property(graph, statement.object)?);
        axiom_with_annotations(
            graph,
            statement,
            provenance,
            Axiom::disjoint_object_properties(vec![a, b]),
        )
    }

    fn axioms<'g>(
        &'g self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = Result<Translated<AnnotatedAxiom>, TranslationError>> + 'g> {
        nary::nary_axioms(
            self,
            graph,
            read_named_object_property,
            Axiom::disjoint_object_properties,
        )
    }

    fn write(
        &self,
        axiom: &AnnotatedAxiom,
        writer: &mut GraphWriter<'_>,
    ) -> Result<(), TranslationError> {
        let Axiom::DisjointObjectProperties(operands) = axiom.axiom() else {
            return Err(wrong_kind(axiom));
        };
        let terms = canonical_operands(operands.clone())
            .iter()
            .map(|property| property.iri().clone().into())
            .collect();
        write_pairwise(writer, terms, owl::PROPERTY_DISJOINT_WITH, axiom);
        Ok(())
    }
}

/// Reads a reified n-ary node (`owl:AllDisjointProperties`-style) through its
/// `owl:members` list.
pub(crate) fn reified_members<O>(
    graph: LocalGraph<'_>,
    statement: TripleRef<'_>,
    read_operand: impl Fn(LocalGraph<'_>, TermRef<'_>) -> Result<Translated<O>, TranslationError>,
    make_axiom: impl FnOnce(Vec<O>) -> Axiom,
) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
    let members_head = graph
        .object_for(statement.subject, owl::MEMBERS)
        .ok_or_else(|| crate::error::GraphShapeError::missing_property(owl::MEMBERS))?;
    let mut provenance = Translated::new(())
        .with_source(statement)
        .with_source(TripleRef::new(
            statement.subject,
            owl::MEMBERS,
            members_head,
        ));
    let (members, sources) = graph.read_list(members_head)?.into_parts();
    provenance.extend_sources(sources);
    let mut operands = Vec::with_capacity(members.len());
    for member in &members {
        let (merged, operand) = provenance.append(read_operand(graph, member.as_ref())?);
        provenance = merged;
        operands.push(operand);
    }
    let (provenance, annotations) =
        provenance.append(graph.node_annotations(statement.subject, &[owl::MEMBERS])?);
    Ok(provenance.map(|()| AnnotatedAxiom::new(make_axiom(operands), annotations)))
}

/// ObjectPropertyDomain ↔ `P rdfs:domain C`.
pub(crate) struct ObjectPropertyDomainTranslator;

impl Translator for ObjectPropertyDomainTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::ObjectPropertyDomain
    }

    fn statements<'g>(
        &self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = TripleRef<'g>> + 'g> {
        Box::new(graph.statements_for_predicate(rdfs::DOMAIN))
    }

    fn test(&self, graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
        let subject = subject_to_term(statement.subject);
        matches!(statement.subject, SubjectRef::NamedNode(_))
            && !matches!(statement.object, TermRef::Literal(_))
            && is_object_property(graph, subject.as_ref())
    }

    fn to_axiom(
        &self,
        graph: LocalGraph<'_>,
        statement: TripleRef<'_>,
    ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
        let property = ObjectProperty::new(named_subject(statement)?);
        let (provenance, domain) =
            Translated::new(()).append(read_class_expression(graph, statement.object)?);
        axiom_with_annotations(
            graph,
            statement,
            provenance,
            Axiom::ObjectPropertyDomain { property, domain },
        )
    }

    fn write(
        &self,
        axiom: &AnnotatedAxiom,
        writer: &mut GraphWriter<'_>,
    ) -> Result<(), TranslationError> {
        let Axiom::ObjectPropertyDomain { property, domain } = axiom.axiom() else {
            return Err(wrong_kind(axiom));
        };
        let domain = write_class_expression(writer, domain);
        let triple = writer.insert(property.iri().clone(), rdfs::DOMAIN.into_owned(), domain);
        writer.annotate(&triple, axiom.annotations());
        Ok(())
    }
}

/// ObjectPropertyRange ↔ `P rdfs:range C`.
pub(crate) struct ObjectPropertyRangeTranslator;

impl Translator for ObjectPropertyRangeTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::ObjectPropertyRange
    }

    fn statements<'g>(
        &self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = TripleRef<'g>> + 'g> {
        Box::new(graph.statements_for_predicate(rdfs::RANGE))
    }

    fn test(&self, graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
        let subject = subject_to_term(statement.subject);
        matches!(statement.subject, SubjectRef::NamedNode(_))
            && !matches!(statement.object, TermRef::Literal(_))
            && is_object_property(graph, subject.as_ref())
    }

    fn to_axiom(
        &self,
        graph: LocalGraph<'_>,
        statement: TripleRef<'_>,
    ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
        let property = ObjectProperty::new(named_subject(statement)?);
        let (provenance, range) =
            Translated::new(()).append(read_class_expression(graph, statement.object)?);
        axiom_with_annotations(
            graph,
            statement,
            provenance,
            Axiom::ObjectPropertyRange { property, range },
        )
    }

    fn write(
        &self,
        axiom: &AnnotatedAxiom,
        writer: &mut GraphWriter<'_>,
    ) -> Result<(), TranslationError> {
        let Axiom::ObjectPropertyRange { property, range } = axiom.axiom() else {
            return Err(wrong_kind(axiom));
        };
        let range = write_class_expression(writer, range);
        let triple = writer.insert(property.iri().clone(), rdfs::RANGE.into_owned(), range);
        writer.annotate(&triple, axiom.annotations());
        Ok(())
    }
}

/// InverseObjectProperties ↔ `P1 owl:inverseOf P2`.
///
/// Anonymous subjects are inverse property *expressions* and belong to the
/// expression reader, not to this axiom.
pub(crate) struct InverseObjectPropertiesTranslator;

impl Translator for InverseObjectPropertiesTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::InverseObjectProperties
    }

    fn statements<'g>(
        &self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = TripleRef<'g>> + 'g> {
        Box::new(graph.statements_for_predicate(owl::INVERSE_OF))
    }

    fn test(&self, _graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
        matches!(statement.subject, SubjectRef::NamedNode(_))
            && matches!(statement.object, TermRef::NamedNode(_))
    }

    fn to_axiom(
        &self,
        graph: LocalGraph<'_>,
        statement: TripleRef<'_>,
    ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
        let first = ObjectProperty::new(named_subject(statement)?);
        let second = read_named_object_property(graph, statement.object)?.into_inner();
        axiom_with_annotations(
            graph,
            statement,
            Translated::new(()),
            Axiom::InverseObjectProperties(first, second),
        )
    }

    fn write(
        &self,
        axiom: &AnnotatedAxiom,
        writer: &mut GraphWriter<'_>,
    ) -> Result<(), TranslationError> {
        let Axiom::InverseObjectProperties(first, second) = axiom.axiom() else {
            return Err(wrong_kind(axiom));
        };
        let triple = writer.insert(
            first.iri().clone(),
            owl::INVERSE_OF.into_owned(),
            second.iri().clone(),
        );
        writer.annotate(&triple, axiom.annotations());
        Ok(())
    }
}

/// A property characteristic encoded as `P rdf:type owl:XProperty`.
macro_rules! object_characteristic_translator {
    ($(#[$doc:meta])* $name:ident, $kind:ident, $variant:ident, $class:expr) => {
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

            fn test(&self, graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
                let subject = subject_to_term(statement.subject);
                matches!(statement.subject, SubjectRef::NamedNode(_))
                    && is_object_property(graph, subject.as_ref())
            }

            fn to_axiom(
                &self,
                graph: LocalGraph<'_>,
                statement: TripleRef<'_>,
            ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
                let property = ObjectProperty::new(named_subject(statement)?);
                axiom_with_annotations(
                    graph,
                    statement,
                    Translated::new(()),
                    Axiom::$variant(property),
                )
            }

            fn write(
                &self,
                axiom: &AnnotatedAxiom,
                writer: &mut GraphWriter<'_>,
            ) -> Result<(), TranslationError> {
                let Axiom::$variant(property) = axiom.axiom() else {
                    return Err(wrong_kind(axiom));
                };
                let triple = writer.insert(
                    property.iri().clone(),
                    rdf::TYPE.into_owned(),
                    NamedNodeRef::into_owned($class),
                );
                writer.annotate(&triple, axiom.annotations());
                Ok(())
            }
        }
    };
}

object_characteristic_translator!(
    /// FunctionalObjectProperty ↔ `P rdf:type owl:FunctionalProperty`.
    ///
    /// `owl:FunctionalProperty` is also used for data properties; a data
    /// property declaration claims the statement for the data translator.
    FunctionalObjectPropertyTranslator,
    FunctionalObjectProperty,
    FunctionalObjectProperty,
    owl::FUNCTIONAL_PROPERTY
);
object_characteristic_translator!(
    /// InverseFunctionalObjectProperty ↔ `P rdf:type owl:InverseFunctionalProperty`.
    InverseFunctionalObjectPropertyTranslator,
    InverseFunctionalObjectProperty,
    InverseFunctionalObjectProperty,
    owl::INVERSE_FUNCTIONAL_PROPERTY
);
object_characteristic_translator!(
    /// ReflexiveObjectProperty ↔ `P rdf:type owl:ReflexiveProperty`.
    ReflexiveObjectPropertyTranslator,
    ReflexiveObjectProperty,
    ReflexiveObjectProperty,
    owl::REFLEXIVE_PROPERTY
);
object_characteristic_translator!(
    /// IrreflexiveObjectProperty ↔ `P rdf:type owl:IrreflexiveProperty`.
    IrreflexiveObjectPropertyTranslator,
    IrreflexiveObjectProperty,
    IrreflexiveObjectProperty,
    owl::IRREFLEXIVE_PROPERTY
);
object_characteristic_translator!(
    /// SymmetricObjectProperty ↔ `P rdf:type owl:SymmetricProperty`.
    SymmetricObjectPropertyTranslator,
    SymmetricObjectProperty,
    SymmetricObjectProperty,
    owl::SYMMETRIC_PROPERTY
);
object_characteristic_translator!(
    /// AsymmetricObjectProperty ↔ `P rdf:type owl:AsymmetricProperty`.
    AsymmetricObjectPropertyTranslator,
    AsymmetricObjectProperty,
    AsymmetricObjectProperty,
    owl::ASYMMETRIC_PROPERTY
);
object_characteristic_translator!(
    /// TransitiveObjectProperty ↔ `P rdf:type owl:TransitiveProperty`.
    TransitiveObjectPropertyTranslator,
    TransitiveObjectProperty,
    TransitiveObjectProperty,
    owl::TRANSITIVE_PROPERTY
);

/// SubDataPropertyOf ↔ `P1 rdfs:subPropertyOf P2` on declared data properties.
pub(crate) struct SubDataPropertyOfTranslator;

impl Translator for SubDataPropertyOfTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::SubDataPropertyOf
    }

    fn statements<'g>(
        &self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = TripleRef<'g>> + 'g> {
        Box::new(graph.statements_for_predicate(rdfs::SUB_PROPERTY_OF))
    }

    fn test(&self, graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
        let subject = subject_to_term(statement.subject);
        is_data_property(graph, subject.as_ref()) && is_data_property(graph, statement.object)
    }

    fn to_axiom(
        &self,
        graph: LocalGraph<'_>,
        statement: TripleRef<'_>,
    ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
        let sub_property = DataProperty::new(named_subject(statement)?);
        let super_property = read_named_data_property(graph, statement.object)?.into_inner();
        axiom_with_annotations(
            graph,
            statement,
            Translated::new(()),
            Axiom::SubDataPropertyOf {
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
        let Axiom::SubDataPropertyOf {
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

/// EquivalentDataProperties ↔ pairwise `P1 owl:equivalentProperty P2` on
/// declared data properties.
pub(crate) struct EquivalentDataPropertiesTranslator;

impl Translator for EquivalentDataPropertiesTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::EquivalentDataProperties
    }

    fn statements<'g>(
        &self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = TripleRef<'g>> + 'g> {
        Box::new(graph.statements_for_predicate(owl::EQUIVALENT_PROPERTY))
    }

    fn test(&self, graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
        let subject = subject_to_term(statement.subject);
        is_data_property(graph, subject.as_ref()) && is_data_property(graph, statement.object)
    }

    fn to_axiom(
        &self,
        graph: LocalGraph<'_>,
        statement: TripleRef<'_>,
    ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
        let subject = subject_to_term(statement.subject);
        let provenance = Translated::new(());
        let (provenance, a) = provenance.append(read_named_data_property(graph, subject.as_ref())?);
        let (provenance, b) = provenance.append(read_named_data_property(graph, statement.object)?);
        axiom_with_annotations(
            graph,
            statement,
            provenance,
            Axiom::equivalent_data_properties(vec![a, b]),
        )
    }

    fn axioms<'g>(
        &'g self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = Result<Translated<AnnotatedAxiom>, TranslationError>> + 'g> {
        nary::nary_axioms(
            self,
            graph,
            read_named_data_property,
            Axiom::equivalent_data_properties,
        )
    }

    fn write(
        &self,
        axiom: &AnnotatedAxiom,
        writer: &mut GraphWriter<'_>,
    ) -> Result<(), TranslationError> {
        let Axiom::EquivalentDataProperties(operands) = axiom.axiom() else {
            return Err(wrong_kind(axiom));
        };
        let terms = canonical_operands(operands.clone())
            .iter()
            .map(|property| property.iri().clone().into())
            .collect();
        write_pairwise(writer, terms, owl::EQUIVALENT_PROPERTY, axiom);
        Ok(())
    }
}

/// DisjointDataProperties ↔ pairwise `P1 owl:propertyDisjointWith P2`, or a
/// reified `owl:AllDisjointProperties` node over data properties.
pub(crate) struct DisjointDataPropertiesTranslator;

impl Translator for DisjointDataPropertiesTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::DisjointDataProperties
    }

    fn statements<'g>(
        &self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = TripleRef<'g>> + 'g> {
        Box::new(
            graph
                .statements_for_predicate(owl::PROPERTY_DISJOINT_WITH)
                .chain(graph.statements_for_type(owl::ALL_DISJOINT_PROPERTIES)),
        )
    }

    fn test(&self, graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
        if statement.predicate == rdf::TYPE {
            return first_member(graph, statement.subject)
                .is_some_and(|member| is_data_property(graph, member.as_ref()));
        }
        let subject = subject_to_term(statement.subject);
        is_data_property(graph, subject.as_ref()) && is_data_property(graph, statement.object)
    }

    fn to_axiom(
        &self,
        graph: LocalGraph<'_>,
        statement: TripleRef<'_>,
    ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
        if statement.predicate == rdf::TYPE {
            return reified_members(
                graph,
                statement,
                read_named_data_property,
                Axiom::disjoint_data_properties,
            );
        }
        let subject = subject_to_term(statement.subject);
        let provenance = Translated::new(());
        let (provenance, a) = provenance.append(read_named_data_property(graph, subject.as_ref())?);
        let (provenance, b) = provenance.append(read_named_data_property(graph, statement.object)?);
        axiom_with_annotations(
            graph,
            statement,
            provenance,
            Axiom::disjoint_data_properties(vec![a, b]),
        )
    }

    fn axioms<'g>(
        &'g self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = Result<Translated<AnnotatedAxiom>, TranslationError>> + 'g> {
        nary::nary_axioms(
            self,
            graph,
            read_named_data_property,
            Axiom::disjoint_data_properties,
        )
    }

    fn write(
        &self,
        axiom: &AnnotatedAxiom,
        writer: &mut GraphWriter<'_>,
    ) -> Result<(), TranslationError> {
        let Axiom::DisjointDataProperties(operands) = axiom.axiom() else {
            return Err(wrong_kind(axiom));
        };
        let terms = canonical_operands(operands.clone())
            .iter()
            .map(|property| property.iri().clone().into())
            .collect();
        write_pairwise(writer, terms, owl::PROPERTY_DISJOINT_WITH, axiom);
        Ok(())
    }
}

/// DataPropertyDomain ↔ `P rdfs:domain C` on declared data properties.
pub(crate) struct DataPropertyDomainTranslator;

impl Translator for DataPropertyDomainTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::DataPropertyDomain
    }

    fn statements<'g>(
        &self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = TripleRef<'g>> + 'g> {
        Box::new(graph.statements_for_predicate(rdfs::DOMAIN))
    }

    fn test(&self, graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
        let subject = subject_to_term(statement.subject);
        matches!(statement.subject, SubjectRef::NamedNode(_))
            && !matches!(statement.object, TermRef::Literal(_))
            && is_data_property(graph, subject.as_ref())
    }

    fn to_axiom(
        &self,
        graph: LocalGraph<'_>,
        statement: TripleRef<'_>,
    ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
        let property = DataProperty::new(named_subject(statement)?);
        let (provenance, domain) =
            Translated::new(()).append(read_class_expression(graph, statement.object)?);
        axiom_with_annotations(
            graph,
            statement,
            provenance,
            Axiom::DataPropertyDomain { property, domain },
        )
    }

    fn write(
        &self,
        axiom: &AnnotatedAxiom,
        writer: &mut GraphWriter<'_>,
    ) -> Result<(), TranslationError> {
        let Axiom::DataPropertyDomain { property, domain } = axiom.axiom() else {
            return Err(wrong_kind(axiom));
        };
        let domain = write_class_expression(writer, domain);
        let triple = writer.insert(property.iri().clone(), rdfs::DOMAIN.into_owned(), domain);
        writer.annotate(&triple, axiom.annotations());
        Ok(())
    }
}

/// DataPropertyRange ↔ `P rdfs:range D` on declared data properties.
pub(crate) struct DataPropertyRangeTranslator;

impl Translator for DataPropertyRangeTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::DataPropertyRange
    }

    fn statements<'g>(
        &self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = TripleRef<'g>> + 'g> {
        Box::new(graph.statements_for_predicate(rdfs::RANGE))
    }

    fn test(&self, graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
        let subject = subject_to_term(statement.subject);
        matches!(statement.subject, SubjectRef::NamedNode(_))
            && !matches!(statement.object, TermRef::Literal(_))
            && is_data_property(graph, subject.as_ref())
    }

    fn to_axiom(
        &self,
        graph: LocalGraph<'_>,
        statement: TripleRef<'_>,
    ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
        let property = DataProperty::new(named_subject(statement)?);
        let (provenance, range) =
            Translated::new(()).append(read_data_range(graph, statement.object)?);
        axiom_with_annotations(
            graph,
            statement,
            provenance,
            Axiom::DataPropertyRange { property, range },
        )
    }

    fn write(
        &self,
        axiom: &AnnotatedAxiom,
        writer: &mut GraphWriter<'_>,
    ) -> Result<(), TranslationError> {
        let Axiom::DataPropertyRange { property, range } = axiom.axiom() else {
            return Err(wrong_kind(axiom));
        };
        let range = write_data_range(writer, range);
        let triple = writer.insert(property.iri().clone(), rdfs::RANGE.into_owned(), range);
        writer.annotate(&triple, axiom.annotations());
        Ok(())
    }
}

/// FunctionalDataProperty ↔ `P rdf:type owl:FunctionalProperty` on declared
/// data properties.
pub(crate) struct FunctionalDataPropertyTranslator;

impl Translator for FunctionalDataPropertyTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::FunctionalDataProperty
    }

    fn statements<'g>(
        &self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = TripleRef<'g>> + 'g> {
        Box::new(graph.statements_for_type(owl::FUNCTIONAL_PROPERTY))
    }

    fn test(&self, graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
        let subject = subject_to_term(statement.subject);
        matches!(statement.subject, SubjectRef::NamedNode(_))
            && is_data_property(graph, subject.as_ref())
    }

    fn to_axiom(
        &self,
        graph: LocalGraph<'_>,
        statement: TripleRef<'_>,
    ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
        let property = DataProperty::new(named_subject(statement)?);
        axiom_with_annotations(
            graph,
            statement,
            Translated::new(()),
            Axiom::FunctionalDataProperty(property),
        )
    }

    fn write(
        &self,
        axiom: &AnnotatedAxiom,
        writer: &mut GraphWriter<'_>,
    ) -> Result<(), TranslationError> {
        let Axiom::FunctionalDataProperty(property) = axiom.axiom() else {
            return Err(wrong_kind(axiom));
        };
        let triple = writer.insert(
            property.iri().clone(),
            rdf::TYPE.into_owned(),
            owl::FUNCTIONAL_PROPERTY.into_owned(),
        );
        writer.annotate(&triple, axiom.annotations());
        Ok(())
    }
}

/// DatatypeDefinition ↔ `D owl:equivalentClass DR` on a datatype subject.
pub(crate) struct DatatypeDefinitionTranslator;

impl Translator for DatatypeDefinitionTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::DatatypeDefinition
    }

    fn statements<'g>(
        &self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = TripleRef<'g>> + 'g> {
        Box::new(graph.statements_for_predicate(owl::EQUIVALENT_CLASS))
    }

    fn test(&self, graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool {
        let subject = subject_to_term(statement.subject);
        matches!(statement.subject, SubjectRef::NamedNode(_))
            && !matches!(statement.object, TermRef::Literal(_))
            && is_datatype(graph, subject.as_ref())
    }

    fn to_axiom(
        &self,
        graph: LocalGraph<'_>,
        statement: TripleRef<'_>,
    ) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
        let datatype = Datatype::new(named_subject(statement)?);
        let (provenance, data_range) =
            Translated::new(()).append(read_data_range(graph, statement.object)?);
        axiom_with_annotations(
            graph,
            statement,
            provenance,
            Axiom::DatatypeDefinition {
                datatype,
                data_range,
            },
        )
    }

    fn write(
        &self,
        axiom: &AnnotatedAxiom,
        writer: &mut GraphWriter<'_>,
    ) -> Result<(), TranslationError> {
        let Axiom::DatatypeDefinition {
            datatype,
            data_range,
        } = axiom.axiom()
        else {
            return Err(wrong_kind(axiom));
        };
        let range = write_data_range(writer, data_range);
        let triple = writer.insert(
            datatype.iri().clone(),
            owl::EQUIVALENT_CLASS.into_owned(),
            range,
        );
        writer.annotate(&triple, axiom.annotations());
        Ok(())
    }
}
