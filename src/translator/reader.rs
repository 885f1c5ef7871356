//! Shared readers resolving graph terms into expressions, literals and
//! entities. Every reader returns the statements it consumed alongside the
//! object it built.

use crate::entity::{DataProperty, Datatype, Individual, ObjectProperty, OwlClass};
use crate::error::{GraphShapeError, GraphShapeErrorKind, TranslationError};
use crate::expression::{ClassExpression, DataRange, ObjectPropertyExpression};
use crate::graph::{term_to_subject_ref, LocalGraph};
use crate::literal::Literal;
use crate::translated::Translated;
use crate::vocab::owl;
use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{LiteralRef, Term, TermRef};
use rustc_hash::FxHashSet;

/// True if the IRI belongs to the RDF, RDFS, XSD or OWL namespace.
pub(crate) fn is_reserved_vocabulary(iri: &str) -> bool {
    iri.starts_with(owl::NAMESPACE)
        || iri.starts_with("http://www.w3.org/1999/02/22-rdf-syntax-ns#")
        || iri.starts_with("http://www.w3.org/2000/01/rdf-schema#")
        || iri.starts_with("http://www.w3.org/2001/XMLSchema#")
}

/// True if the term is declared as an object property, or is undeclared.
///
/// OWL properties used without a declaration are read as object properties;
/// the data and annotation readings both require an explicit declaration.
pub(crate) fn is_object_property(graph: LocalGraph<'_>, term: TermRef<'_>) -> bool {
    match term {
        TermRef::NamedNode(_) | TermRef::BlankNode(_) => {
            !is_data_property(graph, term) && !is_annotation_property(graph, term)
        }
        TermRef::Literal(_) => false,
    }
}

/// True if the term is declared as a data property.
pub(crate) fn is_data_property(graph: LocalGraph<'_>, term: TermRef<'_>) -> bool {
    graph.term_has_type(term, owl::DATATYPE_PROPERTY)
}

/// True if the term is declared as an annotation property.
pub(crate) fn is_annotation_property(graph: LocalGraph<'_>, term: TermRef<'_>) -> bool {
    graph.term_has_type(term, owl::ANNOTATION_PROPERTY)
}

/// True if the term names a datatype: a built-in datatype IRI or a resource
/// declared `rdfs:Datatype`.
pub(crate) fn is_datatype(graph: LocalGraph<'_>, term: TermRef<'_>) -> bool {
    crate::datatype::BuiltinDatatype::is_builtin_iri(term)
        || graph.term_has_type(term, rdfs::DATATYPE)
}

/// True if the term should be read as a data range rather than a class
/// expression when both readings are syntactically possible.
pub(crate) fn is_data_range_term(graph: LocalGraph<'_>, term: TermRef<'_>) -> bool {
    match term {
        TermRef::NamedNode(_) => is_datatype(graph, term),
        TermRef::BlankNode(b) => {
            let subject = b.into();
            graph.has_type(subject, rdfs::DATATYPE)
                || graph.object_for(subject, owl::ON_DATATYPE).is_some()
                || graph
                    .object_for(subject, owl::DATATYPE_COMPLEMENT_OF)
                    .is_some()
                || graph
                    .object_for(subject, owl::ONE_OF)
                    .and_then(|head| term_to_subject_ref(head))
                    .and_then(|head| graph.object_for(head, rdf::FIRST))
                    .is_some_and(|first| matches!(first, TermRef::Literal(_)))
        }
        TermRef::Literal(_) => false,
    }
}

/// Reads a term as an individual.
pub(crate) fn read_individual(term: TermRef<'_>) -> Result<Individual, TranslationError> {
    match term {
        TermRef::NamedNode(n) => Ok(Individual::Named(n.into_owned())),
        TermRef::BlankNode(b) => Ok(Individual::Anonymous(b.into_owned())),
        TermRef::Literal(_) => {
            Err(GraphShapeError::invalid_value("expected an individual, found a literal").into())
        }
    }
}

/// Reads a term as a literal.
pub(crate) fn read_literal(term: TermRef<'_>) -> Result<Literal, TranslationError> {
    match term {
        TermRef::Literal(l) => Ok(Literal::from_rdf(l)),
        _ => Err(GraphShapeError::invalid_value("expected a literal").into()),
    }
}

/// Reads a cardinality literal as a non-negative integer.
pub(crate) fn read_cardinality(literal: LiteralRef<'_>) -> Result<u32, TranslationError> {
    literal.value().parse().map_err(|_| {
        GraphShapeError::new(
            GraphShapeErrorKind::InvalidCardinality,
            format!("\"{}\" is not a non-negative integer", literal.value()),
        )
        .into()
    })
}

/// Reads a term as an object property expression: a named property or an
/// anonymous `owl:inverseOf` node.
pub(crate) fn read_object_property_expression(
    graph: LocalGraph<'_>,
    term: TermRef<'_>,
) -> Result<Translated<ObjectPropertyExpression>, TranslationError> {
    match term {
        TermRef::NamedNode(n) => Ok(Translated::new(ObjectPropertyExpression::ObjectProperty(
            ObjectProperty::new(n.into_owned()),
        ))),
        TermRef::BlankNode(b) => {
            let inverse = graph
                .object_for(b.into(), owl::INVERSE_OF)
                .ok_or_else(|| GraphShapeError::missing_property(owl::INVERSE_OF))?;
            match inverse {
                TermRef::NamedNode(n) => Ok(Translated::new(
                    ObjectPropertyExpression::ObjectInverseOf(ObjectProperty::new(n.into_owned())),
                )
                .with_source(oxrdf::TripleRef::new(b, owl::INVERSE_OF, inverse))),
                _ => Err(GraphShapeError::invalid_value(
                    "owl:inverseOf must point to a named property",
                )
                .into()),
            }
        }
        TermRef::Literal(_) => {
            Err(GraphShapeError::invalid_value("expected an object property expression").into())
        }
    }
}

/// Reads a term as a data property.
pub(crate) fn read_data_property(term: TermRef<'_>) -> Result<DataProperty, TranslationError> {
    match term {
        TermRef::NamedNode(n) => Ok(DataProperty::new(n.into_owned())),
        _ => Err(GraphShapeError::invalid_value("expected a named data property").into()),
    }
}

/// Reads a term as a class expression.
pub(crate) fn read_class_expression(
    graph: LocalGraph<'_>,
    term: TermRef<'_>,
) -> Result<Translated<ClassExpression>, TranslationError> {
    let mut visited = FxHashSet::default();
    class_expression(graph, term, &mut visited)
}

fn class_expression(
    graph: LocalGraph<'_>,
    term: TermRef<'_>,
    visited: &mut FxHashSet<Term>,
) -> Result<Translated<ClassExpression>, TranslationError> {
    match term {
        TermRef::NamedNode(n) => Ok(Translated::new(ClassExpression::Class(OwlClass::new(
            n.into_owned(),
        )))),
        TermRef::BlankNode(b) => {
            let node = term.into_owned();
            if !visited.insert(node.clone()) {
                return Err(GraphShapeError::circular_reference(b).into());
            }
            let result = anonymous_class_expression(graph, b.into(), visited);
            visited.remove(&node);
            result
        }
        TermRef::Literal(_) => {
            Err(GraphShapeError::invalid_value("a literal cannot be a class expression").into())
        }
    }
}

fn anonymous_class_expression(
    graph: LocalGraph<'_>,
    subject: oxrdf::SubjectRef<'_>,
    visited: &mut FxHashSet<Term>,
) -> Result<Translated<ClassExpression>, TranslationError> {
    if graph.has_type(subject, owl::RESTRICTION) {
        return restriction(graph, subject, visited);
    }

    for statement in graph.statements_for_subject(subject) {
        if statement.predicate == owl::INTERSECTION_OF {
            let members = expression_list(graph, statement.object, visited)?;
            return Ok(members
                .with_source(statement)
                .map(ClassExpression::intersection));
        } else if statement.predicate == owl::UNION_OF {
            let members = expression_list(graph, statement.object, visited)?;
            return Ok(members.with_source(statement).map(ClassExpression::union));
        } else if statement.predicate == owl::COMPLEMENT_OF {
            let inner = class_expression(graph, statement.object, visited)?;
            return Ok(inner
                .with_source(statement)
                .map(|inner| ClassExpression::complement(inner)));
        } else if statement.predicate == owl::ONE_OF {
            let list = graph.read_list(statement.object)?;
            let individuals = list
                .value()
                .iter()
                .map(|term| read_individual(term.as_ref()))
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(list
                .with_source(statement)
                .map(|_| ClassExpression::one_of(individuals)));
        }
    }

    Err(GraphShapeError::unknown_construct(format!(
        "anonymous node {subject} does not encode a class expression"
    ))
    .into())
}

fn expression_list(
    graph: LocalGraph<'_>,
    head: TermRef<'_>,
    visited: &mut FxHashSet<Term>,
) -> Result<Translated<Vec<ClassExpression>>, TranslationError> {
    let (members, sources) = graph.read_list(head)?.into_parts();
    let mut provenance = Translated::new(());
    provenance.extend_sources(sources);
    let mut expressions = Vec::with_capacity(members.len());
    for member in &members {
        let (merged, expression) =
            provenance.append(class_expression(graph, member.as_ref(), visited)?);
        provenance = merged;
        expressions.push(expression);
    }
    Ok(provenance.map(|()| expressions))
}

struct RestrictionParts<'g> {
    property: Option<TermRef<'g>>,
    some_values: Option<TermRef<'g>>,
    all_values: Option<TermRef<'g>>,
    has_value: Option<TermRef<'g>>,
    has_self: bool,
    min: Option<LiteralRef<'g>>,
    max: Option<LiteralRef<'g>>,
    exact: Option<LiteralRef<'g>>,
    on_class: Option<TermRef<'g>>,
    on_data_range: Option<TermRef<'g>>,
}

fn restriction(
    graph: LocalGraph<'_>,
    subject: oxrdf::SubjectRef<'_>,
    visited: &mut FxHashSet<Term>,
) -> Result<Translated<ClassExpression>, TranslationError> {
    let mut parts = RestrictionParts {
        property: None,
        some_values: None,
        all_values: None,
        has_value: None,
        has_self: false,
        min: None,
        max: None,
        exact: None,
        on_class: None,
        on_data_range: None,
    };
    let mut provenance = Translated::new(());

    for statement in graph.statements_for_subject(subject) {
        let consumed = if statement.predicate == owl::ON_PROPERTY {
            parts.property = Some(statement.object);
            true
        } else if statement.predicate == owl::SOME_VALUES_FROM {
            parts.some_values = Some(statement.object);
            true
        } else if statement.predicate == owl::ALL_VALUES_FROM {
            parts.all_values = Some(statement.object);
            true
        } else if statement.predicate == owl::HAS_VALUE {
            parts.has_value = Some(statement.object);
            true
        } else if statement.predicate == owl::HAS_SELF {
            parts.has_self = true;
            true
        } else if statement.predicate == owl::MIN_CARDINALITY
            || statement.predicate == owl::MIN_QUALIFIED_CARDINALITY
        {
            parts.min = as_literal(statement.object);
            true
        } else if statement.predicate == owl::MAX_CARDINALITY
            || statement.predicate == owl::MAX_QUALIFIED_CARDINALITY
        {
            parts.max = as_literal(statement.object);
            true
        } else if statement.predicate == owl::CARDINALITY
            || statement.predicate == owl::QUALIFIED_CARDINALITY
        {
            parts.exact = as_literal(statement.object);
            true
        } else if statement.predicate == owl::ON_CLASS {
            parts.on_class = Some(statement.object);
            true
        } else if statement.predicate == owl::ON_DATA_RANGE {
            parts.on_data_range = Some(statement.object);
            true
        } else {
            statement.predicate == rdf::TYPE
        };
        if consumed {
            provenance = provenance.with_source(statement);
        }
    }

    let property = parts
        .property
        .ok_or_else(|| GraphShapeError::missing_property(owl::ON_PROPERTY))?;

    let on_data = parts.on_data_range.is_some()
        || is_data_property(graph, property)
        || matches!(parts.has_value, Some(TermRef::Literal(_)))
        || parts
            .some_values
            .is_some_and(|filler| is_data_range_term(graph, filler))
        || parts
            .all_values
            .is_some_and(|filler| is_data_range_term(graph, filler));

    if on_data {
        data_restriction(graph, property, parts, provenance)
    } else {
        object_restriction(graph, property, parts, provenance, visited)
    }
}

fn as_literal(term: TermRef<'_>) -> Option<LiteralRef<'_>> {
    match term {
        TermRef::Literal(l) => Some(l),
        _ => None,
    }
}

fn object_restriction(
    graph: LocalGraph<'_>,
    property: TermRef<'_>,
    parts: RestrictionParts<'_>,
    provenance: Translated<()>,
    visited: &mut FxHashSet<Term>,
) -> Result<Translated<ClassExpression>, TranslationError> {
    let (provenance, property) =
        provenance.append(read_object_property_expression(graph, property)?);

    if let Some(filler) = parts.some_values {
        let (provenance, filler) = provenance.append(class_expression(graph, filler, visited)?);
        return Ok(provenance.map(|()| ClassExpression::ObjectSomeValuesFrom {
            property,
            filler: Box::new(filler),
        }));
    }
    if let Some(filler) = parts.all_values {
        let (provenance, filler) = provenance.append(class_expression(graph, filler, visited)?);
        return Ok(provenance.map(|()| ClassExpression::ObjectAllValuesFrom {
            property,
            filler: Box::new(filler),
        }));
    }
    if let Some(value) = parts.has_value {
        let individual = read_individual(value)?;
        return Ok(provenance.map(|()| ClassExpression::ObjectHasValue {
            property,
            individual,
        }));
    }
    if parts.has_self {
        return Ok(provenance.map(|()| ClassExpression::ObjectHasSelf(property)));
    }

    let (provenance, filler) = match parts.on_class {
        Some(term) => {
            let (merged, filler) = provenance.append(class_expression(graph, term, visited)?);
            (merged, Some(Box::new(filler)))
        }
        None => (provenance, None),
    };
    cardinality_expression(parts, provenance, property, filler)
}

fn cardinality_expression(
    parts: RestrictionParts<'_>,
    provenance: Translated<()>,
    property: ObjectPropertyExpression,
    filler: Option<Box<ClassExpression>>,
) -> Result<Translated<ClassExpression>, TranslationError> {
    if let Some(n) = parts.min {
        let cardinality = read_cardinality(n)?;
        return Ok(provenance.map(|()| ClassExpression::ObjectMinCardinality {
            cardinality,
            property,
            filler,
        }));
    }
    if let Some(n) = parts.max {
        let cardinality = read_cardinality(n)?;
        return Ok(provenance.map(|()| ClassExpression::ObjectMaxCardinality {
            cardinality,
            property,
            filler,
        }));
    }
    if let Some(n) = parts.exact {
        let cardinality = read_cardinality(n)?;
        return Ok(provenance.map(|()| ClassExpression::ObjectExactCardinality {
            cardinality,
            property,
            filler,
        }));
    }
    Err(GraphShapeError::unknown_construct("restriction without a recognized constraint").into())
}

fn data_restriction(
    graph: LocalGraph<'_>,
    property: TermRef<'_>,
    parts: RestrictionParts<'_>,
    provenance: Translated<()>,
) -> Result<Translated<ClassExpression>, TranslationError> {
    let property = read_data_property(property)?;

    if let Some(filler) = parts.some_values {
        let (provenance, filler) = provenance.append(read_data_range(graph, filler)?);
        return Ok(provenance.map(|()| ClassExpression::DataSomeValuesFrom { property, filler }));
    }
    if let Some(filler) = parts.all_values {
        let (provenance, filler) = provenance.append(read_data_range(graph, filler)?);
        return Ok(provenance.map(|()| ClassExpression::DataAllValuesFrom { property, filler }));
    }
    if let Some(value) = parts.has_value {
        let value = read_literal(value)?;
        return Ok(provenance.map(|()| ClassExpression::DataHasValue { property, value }));
    }

    let (provenance, filler) = match parts.on_data_range {
        Some(term) => {
            let (merged, filler) = provenance.append(read_data_range(graph, term)?);
            (merged, Some(filler))
        }
        None => (provenance, None),
    };
    if let Some(n) = parts.min {
        let cardinality = read_cardinality(n)?;
        return Ok(provenance.map(|()| ClassExpression::DataMinCardinality {
            cardinality,
            property,
            filler,
        }));
    }
    if let Some(n) = parts.max {
        let cardinality = read_cardinality(n)?;
        return Ok(provenance.map(|()| ClassExpression::DataMaxCardinality {
            cardinality,
            property,
            filler,
        }));
    }
    if let Some(n) = parts.exact {
        let cardinality = read_cardinality(n)?;
        return Ok(provenance.map(|()| ClassExpression::DataExactCardinality {
            cardinality,
            property,
            filler,
        }));
    }
    Err(GraphShapeError::unknown_construct("restriction without a recognized constraint").into())
}

/// Reads a term as a data range.
pub(crate) fn read_data_range(
    graph: LocalGraph<'_>,
    term: TermRef<'_>,
) -> Result<Translated<DataRange>, TranslationError> {
    let mut visited = FxHashSet::default();
    data_range(graph, term, &mut visited)
}

fn data_range(
    graph: LocalGraph<'_>,
    term: TermRef<'_>,
    visited: &mut FxHashSet<Term>,
) -> Result<Translated<DataRange>, TranslationError> {
    match term {
        TermRef::NamedNode(n) => Ok(Translated::new(DataRange::Datatype(Datatype::new(
            n.into_owned(),
        )))),
        TermRef::BlankNode(b) => {
            let node = term.into_owned();
            if !visited.insert(node.clone()) {
                return Err(GraphShapeError::circular_reference(b).into());
            }
            let result = anonymous_data_range(graph, b.into(), visited);
            visited.remove(&node);
            result
        }
        TermRef::Literal(_) => {
            Err(GraphShapeError::invalid_value("a literal cannot be a data range").into())
        }
    }
}

fn anonymous_data_range(
    graph: LocalGraph<'_>,
    subject: oxrdf::SubjectRef<'_>,
    visited: &mut FxHashSet<Term>,
) -> Result<Translated<DataRange>, TranslationError> {
    if let Some(base) = graph.object_for(subject, owl::ON_DATATYPE) {
        return datatype_restriction(graph, subject, base);
    }

    for statement in graph.statements_for_subject(subject) {
        if statement.predicate == owl::DATATYPE_COMPLEMENT_OF {
            let inner = data_range(graph, statement.object, visited)?;
            return Ok(inner
                .with_source(statement)
                .map(|inner| DataRange::DataComplementOf(Box::new(inner))));
        } else if statement.predicate == owl::INTERSECTION_OF {
            let members = data_range_list(graph, statement.object, visited)?;
            return Ok(members.with_source(statement).map(DataRange::intersection));
        } else if statement.predicate == owl::UNION_OF {
            let members = data_range_list(graph, statement.object, visited)?;
            return Ok(members.with_source(statement).map(DataRange::union));
        } else if statement.predicate == owl::ONE_OF {
            let list = graph.read_list(statement.object)?;
            let literals = list
                .value()
                .iter()
                .map(|term| read_literal(term.as_ref()))
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(list
                .with_source(statement)
                .map(|_| DataRange::one_of(literals)));
        }
    }

    Err(GraphShapeError::unknown_construct(format!(
        "anonymous node {subject} does not encode a data range"
    ))
    .into())
}

fn data_range_list(
    graph: LocalGraph<'_>,
    head: TermRef<'_>,
    visited: &mut FxHashSet<Term>,
) -> Result<Translated<Vec<DataRange>>, TranslationError> {
    let list = graph.read_list(head)?;
    let (members, sources) = list.into_parts();
    let mut provenance = Translated::new(());
    provenance.extend_sources(sources);
    let mut ranges = Vec::with_capacity(members.len());
    for member in &members {
        let (merged, range) = provenance.append(data_range(graph, member.as_ref(), visited)?);
        provenance = merged;
        ranges.push(range);
    }
    Ok(provenance.map(|()| ranges))
}

fn datatype_restriction(
    graph: LocalGraph<'_>,
    subject: oxrdf::SubjectRef<'_>,
    base: TermRef<'_>,
) -> Result<Translated<DataRange>, TranslationError> {
    let datatype = match base {
        TermRef::NamedNode(n) => Datatype::new(n.into_owned()),
        _ => {
            return Err(
                GraphShapeError::invalid_value("owl:onDatatype must point to a datatype").into(),
            )
        }
    };
    let facet_list_head = graph
        .object_for(subject, owl::WITH_RESTRICTIONS)
        .ok_or_else(|| GraphShapeError::missing_property(owl::WITH_RESTRICTIONS))?;
    let mut provenance = Translated::new(())
        .with_source(oxrdf::TripleRef::new(subject, owl::ON_DATATYPE, base))
        .with_source(oxrdf::TripleRef::new(
            subject,
            owl::WITH_RESTRICTIONS,
            facet_list_head,
        ));
    let list = graph.read_list(facet_list_head)?;
    let (facet_nodes, sources) = list.into_parts();
    provenance.extend_sources(sources);

    let mut facets = Vec::new();
    for node in &facet_nodes {
        let node_subject = term_to_subject_ref(node.as_ref())
            .ok_or_else(|| GraphShapeError::invalid_value("facet must be a resource"))?;
        let mut found = false;
        for statement in graph.statements_for_subject(node_subject) {
            if let TermRef::Literal(value) = statement.object {
                facets.push((
                    statement.predicate.into_owned(),
                    Literal::from_rdf(value),
                ));
                provenance = provenance.with_source(statement);
                found = true;
            }
        }
        if !found {
            return Err(GraphShapeError::invalid_value("facet without a literal value").into());
        }
    }

    Ok(provenance.map(|()| DataRange::DatatypeRestriction { datatype, facets }))
}
