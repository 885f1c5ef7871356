//! OWL 2 class expressions, object property expressions and data ranges.
//!
//! N-ary constructors canonicalize their operands: duplicates are dropped and
//! the remaining operands are sorted by their rendered form. Intersections,
//! unions and enumerations are unordered in the specification, so the
//! canonical order makes structurally equal expressions compare equal
//! independently of construction order and keeps write output deterministic.

use crate::entity::{DataProperty, Datatype, Individual, ObjectProperty, OwlClass};
use crate::literal::Literal;
use rustc_hash::FxHashSet;
use std::fmt;
use std::hash::Hash;

/// Sorts operands by rendered form and drops structural duplicates.
pub(crate) fn canonical_operands<T>(mut operands: Vec<T>) -> Vec<T>
where
    T: fmt::Display + Clone + Eq + Hash,
{
    operands.sort_by_cached_key(ToString::to_string);
    let mut seen = FxHashSet::default();
    operands.retain(|operand| seen.insert(operand.clone()));
    operands
}

/// An OWL 2 class expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClassExpression {
    /// A named class
    Class(OwlClass),

    /// ObjectIntersectionOf(C1, ..., Cn)
    ObjectIntersectionOf(Vec<ClassExpression>),

    /// ObjectUnionOf(C1, ..., Cn)
    ObjectUnionOf(Vec<ClassExpression>),

    /// ObjectComplementOf(C)
    ObjectComplementOf(Box<ClassExpression>),

    /// ObjectOneOf(a1, ..., an)
    ObjectOneOf(Vec<Individual>),

    /// ObjectSomeValuesFrom(P, C)
    ObjectSomeValuesFrom {
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },

    /// ObjectAllValuesFrom(P, C)
    ObjectAllValuesFrom {
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },

    /// ObjectHasValue(P, a)
    ObjectHasValue {
        property: ObjectPropertyExpression,
        individual: Individual,
    },

    /// ObjectHasSelf(P)
    ObjectHasSelf(ObjectPropertyExpression),

    /// ObjectMinCardinality(n, P) or ObjectMinCardinality(n, P, C)
    ObjectMinCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
        filler: Option<Box<ClassExpression>>,
    },

    /// ObjectMaxCardinality(n, P) or ObjectMaxCardinality(n, P, C)
    ObjectMaxCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
        filler: Option<Box<ClassExpression>>,
    },

    /// ObjectExactCardinality(n, P) or ObjectExactCardinality(n, P, C)
    ObjectExactCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
        filler: Option<Box<ClassExpression>>,
    },

    /// DataSomeValuesFrom(P, D)
    DataSomeValuesFrom {
        property: DataProperty,
        filler: DataRange,
    },

    /// DataAllValuesFrom(P, D)
    DataAllValuesFrom {
        property: DataProperty,
        filler: DataRange,
    },

    /// DataHasValue(P, v)
    DataHasValue {
        property: DataProperty,
        value: Literal,
    },

    /// DataMinCardinality(n, P) or DataMinCardinality(n, P, D)
    DataMinCardinality {
        cardinality: u32,
        property: DataProperty,
        filler: Option<DataRange>,
    },

    /// DataMaxCardinality(n, P) or DataMaxCardinality(n, P, D)
    DataMaxCardinality {
        cardinality: u32,
        property: DataProperty,
        filler: Option<DataRange>,
    },

    /// DataExactCardinality(n, P) or DataExactCardinality(n, P, D)
    DataExactCardinality {
        cardinality: u32,
        property: DataProperty,
        filler: Option<DataRange>,
    },
}

impl ClassExpression {
    /// Creates a named class expression.
    pub fn class(class: impl Into<OwlClass>) -> Self {
        Self::Class(class.into())
    }

    /// Creates an intersection with canonical operand order.
    pub fn intersection(operands: Vec<ClassExpression>) -> Self {
        Self::ObjectIntersectionOf(canonical_operands(operands))
    }

    /// Creates a union with canonical operand order.
    pub fn union(operands: Vec<ClassExpression>) -> Self {
        Self::ObjectUnionOf(canonical_operands(operands))
    }

    /// Creates the complement of a class expression.
    pub fn complement(operand: ClassExpression) -> Self {
        Self::ObjectComplementOf(Box::new(operand))
    }

    /// Creates an enumeration of individuals with canonical operand order.
    pub fn one_of(individuals: Vec<Individual>) -> Self {
        Self::ObjectOneOf(canonical_operands(individuals))
    }

    /// Creates an existential restriction.
    pub fn some_values_from(
        property: impl Into<ObjectPropertyExpression>,
        filler: ClassExpression,
    ) -> Self {
        Self::ObjectSomeValuesFrom {
            property: property.into(),
            filler: Box::new(filler),
        }
    }

    /// Creates a universal restriction.
    pub fn all_values_from(
        property: impl Into<ObjectPropertyExpression>,
        filler: ClassExpression,
    ) -> Self {
        Self::ObjectAllValuesFrom {
            property: property.into(),
            filler: Box::new(filler),
        }
    }

    /// Returns true if this is a named class.
    pub fn is_named(&self) -> bool {
        matches!(self, Self::Class(_))
    }

    /// Returns the named class if this is one.
    pub fn as_class(&self) -> Option<&OwlClass> {
        match self {
            Self::Class(class) => Some(class),
            _ => None,
        }
    }
}

impl From<OwlClass> for ClassExpression {
    fn from(class: OwlClass) -> Self {
        Self::Class(class)
    }
}

impl fmt::Display for ClassExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(class) => write!(f, "{class}"),
            Self::ObjectIntersectionOf(operands) => {
                write_nary(f, "ObjectIntersectionOf", operands)
            }
            Self::ObjectUnionOf(operands) => write_nary(f, "ObjectUnionOf", operands),
            Self::ObjectComplementOf(operand) => write!(f, "ObjectComplementOf({operand})"),
            Self::ObjectOneOf(individuals) => write_nary(f, "ObjectOneOf", individuals),
            Self::ObjectSomeValuesFrom { property, filler } => {
                write!(f, "ObjectSomeValuesFrom({property} {filler})")
            }
            Self::ObjectAllValuesFrom { property, filler } => {
                write!(f, "ObjectAllValuesFrom({property} {filler})")
            }
            Self::ObjectHasValue {
                property,
                individual,
            } => write!(f, "ObjectHasValue({property} {individual})"),
            Self::ObjectHasSelf(property) => write!(f, "ObjectHasSelf({property})"),
            Self::ObjectMinCardinality {
                cardinality,
                property,
                filler,
            } => write_cardinality(f, "ObjectMinCardinality", *cardinality, property, filler),
            Self::ObjectMaxCardinality {
                cardinality,
                property,
                filler,
            } => write_cardinality(f, "ObjectMaxCardinality", *cardinality, property, filler),
            Self::ObjectExactCardinality {
                cardinality,
                property,
                filler,
            } => write_cardinality(f, "ObjectExactCardinality", *cardinality, property, filler),
            Self::DataSomeValuesFrom { property, filler } => {
                write!(f, "DataSomeValuesFrom({property} {filler})")
            }
            Self::DataAllValuesFrom { property, filler } => {
                write!(f, "DataAllValuesFrom({property} {filler})")
            }
            Self::DataHasValue { property, value } => {
                write!(f, "DataHasValue({property} {value})")
            }
            Self::DataMinCardinality {
                cardinality,
                property,
                filler,
            } => write_cardinality(f, "DataMinCardinality", *cardinality, property, filler),
            Self::DataMaxCardinality {
                cardinality,
                property,
                filler,
            } => write_cardinality(f, "DataMaxCardinality", *cardinality, property, filler),
            Self::DataExactCardinality {
                cardinality,
                property,
                filler,
            } => write_cardinality(f, "DataExactCardinality", *cardinality, property, filler),
        }
    }
}

fn write_nary<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    operands: &[T],
) -> fmt::Result {
    write!(f, "{name}(")?;
    for (i, operand) in operands.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{operand}")?;
    }
    write!(f, ")")
}

fn write_cardinality<P: fmt::Display, C: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    cardinality: u32,
    property: &P,
    filler: &Option<C>,
) -> fmt::Result {
    match filler {
        Some(filler) => write!(f, "{name}({cardinality} {property} {filler})"),
        None => write!(f, "{name}({cardinality} {property})"),
    }
}

/// An OWL 2 object property expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectPropertyExpression {
    /// A named object property
    ObjectProperty(ObjectProperty),

    /// ObjectInverseOf(P)
    ObjectInverseOf(ObjectProperty),
}

impl ObjectPropertyExpression {
    /// Creates an inverse property expression.
    pub fn inverse(property: ObjectProperty) -> Self {
        Self::ObjectInverseOf(property)
    }

    /// Returns true if this is a named property.
    pub fn is_named(&self) -> bool {
        matches!(self, Self::ObjectProperty(_))
    }

    /// Returns the underlying named property, stripping an inverse.
    pub fn base_property(&self) -> &ObjectProperty {
        match self {
            Self::ObjectProperty(property) | Self::ObjectInverseOf(property) => property,
        }
    }
}

impl From<ObjectProperty> for ObjectPropertyExpression {
    fn from(property: ObjectProperty) -> Self {
        Self::ObjectProperty(property)
    }
}

impl fmt::Display for ObjectPropertyExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ObjectProperty(property) => write!(f, "{property}"),
            Self::ObjectInverseOf(property) => write!(f, "ObjectInverseOf({property})"),
        }
    }
}

/// An OWL 2 data range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataRange {
    /// A datatype, built-in or ontology-defined
    Datatype(Datatype),

    /// DataIntersectionOf(D1, ..., Dn)
    DataIntersectionOf(Vec<DataRange>),

    /// DataUnionOf(D1, ..., Dn)
    DataUnionOf(Vec<DataRange>),

    /// DataComplementOf(D)
    DataComplementOf(Box<DataRange>),

    /// DataOneOf(v1, ..., vn)
    DataOneOf(Vec<Literal>),

    /// DatatypeRestriction(D, facet1 value1, ...)
    DatatypeRestriction {
        datatype: Datatype,
        facets: Vec<(oxrdf::NamedNode, Literal)>,
    },
}

impl DataRange {
    /// Creates a datatype data range.
    pub fn datatype(datatype: impl Into<Datatype>) -> Self {
        Self::Datatype(datatype.into())
    }

    /// Creates an intersection with canonical operand order.
    pub fn intersection(operands: Vec<DataRange>) -> Self {
        Self::DataIntersectionOf(canonical_operands(operands))
    }

    /// Creates a union with canonical operand order.
    pub fn union(operands: Vec<DataRange>) -> Self {
        Self::DataUnionOf(canonical_operands(operands))
    }

    /// Creates an enumeration of literals with canonical operand order.
    pub fn one_of(literals: Vec<Literal>) -> Self {
        Self::DataOneOf(canonical_operands(literals))
    }

    /// Returns the datatype if this is a plain datatype range.
    pub fn as_datatype(&self) -> Option<&Datatype> {
        match self {
            Self::Datatype(datatype) => Some(datatype),
            _ => None,
        }
    }
}

impl From<Datatype> for DataRange {
    fn from(datatype: Datatype) -> Self {
        Self::Datatype(datatype)
    }
}

impl fmt::Display for DataRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Datatype(datatype) => write!(f, "{datatype}"),
            Self::DataIntersectionOf(operands) => write_nary(f, "DataIntersectionOf", operands),
            Self::DataUnionOf(operands) => write_nary(f, "DataUnionOf", operands),
            Self::DataComplementOf(operand) => write!(f, "DataComplementOf({operand})"),
            Self::DataOneOf(literals) => write_nary(f, "DataOneOf", literals),
            Self::DatatypeRestriction { datatype, facets } => {
                write!(f, "DatatypeRestriction({datatype}")?;
                for (facet, value) in facets {
                    write!(f, " {facet} {value}")?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::NamedNode;

    fn class(iri: &str) -> ClassExpression {
        ClassExpression::class(OwlClass::new(NamedNode::new_unchecked(
            format!("http://example.org/{iri}"),
        )))
    }

    #[test]
    fn intersection_is_order_independent() {
        let a = ClassExpression::intersection(vec![class("A"), class("B")]);
        let b = ClassExpression::intersection(vec![class("B"), class("A")]);
        assert_eq!(a, b);
    }

    #[test]
    fn intersection_drops_duplicates() {
        let expr = ClassExpression::intersection(vec![class("A"), class("B"), class("A")]);
        match expr {
            ClassExpression::ObjectIntersectionOf(operands) => assert_eq!(operands.len(), 2),
            _ => unreachable!(),
        }
    }
}
