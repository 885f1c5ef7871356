//! Shared writers emitting expressions and data ranges as blank-node
//! structures in the target graph.

use crate::entity::Individual;
use crate::expression::{ClassExpression, DataRange, ObjectPropertyExpression};
use crate::graph::GraphWriter;
use crate::vocab::owl;
use oxrdf::vocab::{rdf, xsd};
use oxrdf::{Literal, Subject, Term};

/// Converts an expression term to a subject. Expression writers only ever
/// produce named or blank nodes.
pub(crate) fn expression_subject(term: Term) -> Subject {
    match term {
        Term::NamedNode(n) => n.into(),
        Term::BlankNode(b) => b.into(),
        Term::Literal(_) => unreachable!("expression writers never produce literals"),
    }
}

/// Converts an individual to the term it is written as.
pub(crate) fn individual_term(individual: &Individual) -> Term {
    match individual {
        Individual::Named(n) => n.clone().into(),
        Individual::Anonymous(b) => b.clone().into(),
    }
}

/// Converts an individual to a statement subject.
pub(crate) fn individual_subject(individual: &Individual) -> Subject {
    match individual {
        Individual::Named(n) => n.clone().into(),
        Individual::Anonymous(b) => b.clone().into(),
    }
}

fn cardinality_literal(cardinality: u32) -> Literal {
    Literal::new_typed_literal(cardinality.to_string(), xsd::NON_NEGATIVE_INTEGER)
}

/// Writes an object property expression, returning the term standing for it.
pub(crate) fn write_object_property_expression(
    writer: &mut GraphWriter<'_>,
    expression: &ObjectPropertyExpression,
) -> Term {
    match expression {
        ObjectPropertyExpression::ObjectProperty(property) => property.iri().clone().into(),
        ObjectPropertyExpression::ObjectInverseOf(property) => {
            let node = writer.fresh_blank_node();
            writer.insert(
                node.clone(),
                owl::INVERSE_OF.into_owned(),
                property.iri().clone(),
            );
            node.into()
        }
    }
}

/// Writes a class expression, returning the term standing for it. Anonymous
/// expressions are written as fresh blank-node structures.
pub(crate) fn write_class_expression(
    writer: &mut GraphWriter<'_>,
    expression: &ClassExpression,
) -> Term {
    match expression {
        ClassExpression::Class(class) => class.iri().clone().into(),

        ClassExpression::ObjectIntersectionOf(members) => {
            write_expression_list(writer, owl::INTERSECTION_OF, members)
        }
        ClassExpression::ObjectUnionOf(members) => {
            write_expression_list(writer, owl::UNION_OF, members)
        }
        ClassExpression::ObjectComplementOf(inner) => {
            let node = writer.fresh_blank_node();
            let inner = write_class_expression(writer, inner);
            writer.insert(node.clone(), owl::COMPLEMENT_OF.into_owned(), inner);
            node.into()
        }
        ClassExpression::ObjectOneOf(individuals) => {
            let node = writer.fresh_blank_node();
            let members = individuals.iter().map(individual_term).collect();
            let list = writer.write_list(members);
            writer.insert(node.clone(), owl::ONE_OF.into_owned(), list);
            node.into()
        }

        ClassExpression::ObjectSomeValuesFrom { property, filler } => {
            let filler = write_class_expression(writer, filler);
            let property = write_object_property_expression(writer, property);
            write_restriction(writer, property, owl::SOME_VALUES_FROM, filler)
        }
        ClassExpression::ObjectAllValuesFrom { property, filler } => {
            let filler = write_class_expression(writer, filler);
            let property = write_object_property_expression(writer, property);
            write_restriction(writer, property, owl::ALL_VALUES_FROM, filler)
        }
        ClassExpression::ObjectHasValue {
            property,
            individual,
        } => {
            let property = write_object_property_expression(writer, property);
            write_restriction(writer, property, owl::HAS_VALUE, individual_term(individual))
        }
        ClassExpression::ObjectHasSelf(property) => {
            let property = write_object_property_expression(writer, property);
            write_restriction(
                writer,
                property,
                owl::HAS_SELF,
                Literal::from(true).into(),
            )
        }

        ClassExpression::ObjectMinCardinality {
            cardinality,
            property,
            filler,
        } => {
            let property = write_object_property_expression(writer, property);
            let filler = filler
                .as_ref()
                .map(|filler| write_class_expression(writer, filler));
            write_cardinality_restriction(
                writer,
                property,
                owl::MIN_CARDINALITY,
                owl::MIN_QUALIFIED_CARDINALITY,
                *cardinality,
                owl::ON_CLASS,
                filler,
            )
        }
        ClassExpression::ObjectMaxCardinality {
            cardinality,
            property,
            filler,
        } => {
            let property = write_object_property_expression(writer, property);
            let filler = filler
                .as_ref()
                .map(|filler| write_class_expression(writer, filler));
            write_cardinality_restriction(
                writer,
                property,
                owl::MAX_CARDINALITY,
                owl::MAX_QUALIFIED_CARDINALITY,
                *cardinality,
                owl::ON_CLASS,
                filler,
            )
        }
        ClassExpression::ObjectExactCardinality {
            cardinality,
            property,
            filler,
        } => {
            let property = write_object_property_expression(writer, property);
            let filler = filler
                .as_ref()
                .map(|filler| write_class_expression(writer, filler));
            write_cardinality_restriction(
                writer,
                property,
                owl::CARDINALITY,
                owl::QUALIFIED_CARDINALITY,
                *cardinality,
                owl::ON_CLASS,
                filler,
            )
        }

        ClassExpression::DataSomeValuesFrom { property, filler } => {
            let filler = write_data_range(writer, filler);
            write_restriction(
                writer,
                property.iri().clone().into(),
                owl::SOME_VALUES_FROM,
                filler,
            )
        }
        ClassExpression::DataAllValuesFrom { property, filler } => {
            let filler = write_data_range(writer, filler);
            write_restriction(
                writer,
                property.iri().clone().into(),
                owl::ALL_VALUES_FROM,
                filler,
            )
        }
        ClassExpression::DataHasValue { property, value } => write_restriction(
            writer,
            property.iri().clone().into(),
            owl::HAS_VALUE,
            value.to_rdf().into(),
        ),

        ClassExpression::DataMinCardinality {
            cardinality,
            property,
            filler,
        } => {
            let filler = filler.as_ref().map(|filler| write_data_range(writer, filler));
            write_cardinality_restriction(
                writer,
                property.iri().clone().into(),
                owl::MIN_CARDINALITY,
                owl::MIN_QUALIFIED_CARDINALITY,
                *cardinality,
                owl::ON_DATA_RANGE,
                filler,
            )
        }
        ClassExpression::DataMaxCardinality {
            cardinality,
            property,
            filler,
        } => {
            let filler = filler.as_ref().map(|filler| write_data_range(writer, filler));
            write_cardinality_restriction(
                writer,
                property.iri().clone().into(),
                owl::MAX_CARDINALITY,
                owl::MAX_QUALIFIED_CARDINALITY,
                *cardinality,
                owl::ON_DATA_RANGE,
                filler,
            )
        }
        ClassExpression::DataExactCardinality {
            cardinality,
            property,
            filler,
        } => {
            let filler = filler.as_ref().map(|filler| write_data_range(writer, filler));
            write_cardinality_restriction(
                writer,
                property.iri().clone().into(),
                owl::CARDINALITY,
                owl::QUALIFIED_CARDINALITY,
                *cardinality,
                owl::ON_DATA_RANGE,
                filler,
            )
        }
    }
}

fn write_expression_list(
    writer: &mut GraphWriter<'_>,
    predicate: oxrdf::NamedNodeRef<'static>,
    members: &[ClassExpression],
) -> Term {
    let node = writer.fresh_blank_node();
    let members = members
        .iter()
        .map(|member| write_class_expression(writer, member))
        .collect();
    let list = writer.write_list(members);
    writer.insert(node.clone(), predicate.into_owned(), list);
    node.into()
}

fn write_restriction_node(
    writer: &mut GraphWriter<'_>,
    property: Term,
    constraint: oxrdf::NamedNodeRef<'static>,
    value: Term,
) -> oxrdf::BlankNode {
    let node = writer.fresh_blank_node();
    writer.insert(
        node.clone(),
        rdf::TYPE.into_owned(),
        owl::RESTRICTION.into_owned(),
    );
    writer.insert(node.clone(), owl::ON_PROPERTY.into_owned(), property);
    writer.insert(node.clone(), constraint.into_owned(), value);
    node
}

fn write_restriction(
    writer: &mut GraphWriter<'_>,
    property: Term,
    constraint: oxrdf::NamedNodeRef<'static>,
    value: Term,
) -> Term {
    write_restriction_node(writer, property, constraint, value).into()
}

fn write_cardinality_restriction(
    writer: &mut GraphWriter<'_>,
    property: Term,
    plain_predicate: oxrdf::NamedNodeRef<'static>,
    qualified_predicate: oxrdf::NamedNodeRef<'static>,
    cardinality: u32,
    filler_predicate: oxrdf::NamedNodeRef<'static>,
    filler: Option<Term>,
) -> Term {
    let predicate = if filler.is_some() {
        qualified_predicate
    } else {
        plain_predicate
    };
    let node = write_restriction_node(
        writer,
        property,
        predicate,
        cardinality_literal(cardinality).into(),
    );
    if let Some(filler) = filler {
        writer.insert(node.clone(), filler_predicate.into_owned(), filler);
    }
    node.into()
}

/// Writes a data range, returning the term standing for it.
pub(crate) fn write_data_range(writer: &mut GraphWriter<'_>, range: &DataRange) -> Term {
    match range {
        DataRange::Datatype(datatype) => datatype.iri().clone().into(),

        DataRange::DataIntersectionOf(members) => {
            write_data_range_list(writer, owl::INTERSECTION_OF, members)
        }
        DataRange::DataUnionOf(members) => write_data_range_list(writer, owl::UNION_OF, members),
        DataRange::DataComplementOf(inner) => {
            let node = writer.fresh_blank_node();
            let inner = write_data_range(writer, inner);
            writer.insert(
                node.clone(),
                owl::DATATYPE_COMPLEMENT_OF.into_owned(),
                inner,
            );
            node.into()
        }
        DataRange::DataOneOf(literals) => {
            let node = writer.fresh_blank_node();
            let members = literals
                .iter()
                .map(|literal| literal.to_rdf().into())
                .collect();
            let list = writer.write_list(members);
            writer.insert(node.clone(), owl::ONE_OF.into_owned(), list);
            node.into()
        }
        DataRange::DatatypeRestriction { datatype, facets } => {
            let node = writer.fresh_blank_node();
            writer.insert(
                node.clone(),
                owl::ON_DATATYPE.into_owned(),
                datatype.iri().clone(),
            );
            let mut facet_nodes = Vec::with_capacity(facets.len());
            for (facet, value) in facets {
                let facet_node = writer.fresh_blank_node();
                writer.insert(facet_node.clone(), facet.clone(), value.to_rdf());
                facet_nodes.push(facet_node.into());
            }
            let list = writer.write_list(facet_nodes);
            writer.insert(node.clone(), owl::WITH_RESTRICTIONS.into_owned(), list);
            node.into()
        }
    }
}

fn write_data_range_list(
    writer: &mut GraphWriter<'_>,
    predicate: oxrdf::NamedNodeRef<'static>,
    members: &[DataRange],
) -> Term {
    let node = writer.fresh_blank_node();
    let members = members
        .iter()
        .map(|member| write_data_range(writer, member))
        .collect();
    let list = writer.write_list(members);
    writer.insert(node.clone(), predicate.into_owned(), list);
    node.into()
}
