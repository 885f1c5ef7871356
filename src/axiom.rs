//! OWL 2 axiom types.
//!
//! [`Axiom`] is the annotation-free structural statement; [`AnnotatedAxiom`]
//! pairs it with its annotation set. The translators read and write
//! [`AnnotatedAxiom`]s.

use crate::annotation::{Annotation, AnnotationSubject, AnnotationValue};
use crate::entity::{
    AnnotationProperty, DataProperty, Datatype, Individual, ObjectProperty, OwlClass,
};
use crate::expression::{
    canonical_operands, ClassExpression, DataRange, ObjectPropertyExpression,
};
use crate::literal::Literal;

/// An OWL 2 axiom without its annotations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Axiom {
    // === Class Axioms ===
    /// SubClassOf(sub, super)
    SubClassOf {
        sub_class: ClassExpression,
        super_class: ClassExpression,
    },

    /// EquivalentClasses(C1, C2, ...)
    EquivalentClasses(Vec<ClassExpression>),

    /// DisjointClasses(C1, C2, ...)
    DisjointClasses(Vec<ClassExpression>),

    /// DisjointUnion(C, C1, ..., Cn)
    DisjointUnion {
        class: OwlClass,
        disjoint_classes: Vec<ClassExpression>,
    },

    // === Object Property Axioms ===
    /// SubObjectPropertyOf(sub, super)
    SubObjectPropertyOf {
        sub_property: ObjectPropertyExpression,
        super_property: ObjectPropertyExpression,
    },

    /// SubObjectPropertyOf(ObjectPropertyChain(P1...Pn), P)
    SubPropertyChainOf {
        property_chain: Vec<ObjectPropertyExpression>,
        super_property: ObjectProperty,
    },

    /// EquivalentObjectProperties(P1, P2, ...)
    EquivalentObjectProperties(Vec<ObjectProperty>),

    /// DisjointObjectProperties(P1, P2, ...)
    DisjointObjectProperties(Vec<ObjectProperty>),

    /// ObjectPropertyDomain(P, C)
    ObjectPropertyDomain {
        property: ObjectProperty,
        domain: ClassExpression,
    },

    /// ObjectPropertyRange(P, C)
    ObjectPropertyRange {
        property: ObjectProperty,
        range: ClassExpression,
    },

    /// InverseObjectProperties(P1, P2)
    InverseObjectProperties(ObjectProperty, ObjectProperty),

    /// FunctionalObjectProperty(P)
    FunctionalObjectProperty(ObjectProperty),

    /// InverseFunctionalObjectProperty(P)
    InverseFunctionalObjectProperty(ObjectProperty),

    /// ReflexiveObjectProperty(P)
    ReflexiveObjectProperty(ObjectProperty),

    /// IrreflexiveObjectProperty(P)
    IrreflexiveObjectProperty(ObjectProperty),

    /// SymmetricObjectProperty(P)
    SymmetricObjectProperty(ObjectProperty),

    /// AsymmetricObjectProperty(P)
    AsymmetricObjectProperty(ObjectProperty),

    /// TransitiveObjectProperty(P)
    TransitiveObjectProperty(ObjectProperty),

    // === Data Property Axioms ===
    /// SubDataPropertyOf(sub, super)
    SubDataPropertyOf {
        sub_property: DataProperty,
        super_property: DataProperty,
    },

    /// EquivalentDataProperties(P1, P2, ...)
    EquivalentDataProperties(Vec<DataProperty>),

    /// DisjointDataProperties(P1, P2, ...)
    DisjointDataProperties(Vec<DataProperty>),

    /// DataPropertyDomain(P, C)
    DataPropertyDomain {
        property: DataProperty,
        domain: ClassExpression,
    },

    /// DataPropertyRange(P, D)
    DataPropertyRange {
        property: DataProperty,
        range: DataRange,
    },

    /// FunctionalDataProperty(P)
    FunctionalDataProperty(DataProperty),

    // === Datatype Axioms ===
    /// DatatypeDefinition(D, DR)
    DatatypeDefinition {
        datatype: Datatype,
        data_range: DataRange,
    },

    // === Keys ===
    /// HasKey(C, (P1...Pm), (D1...Dn))
    HasKey {
        class: ClassExpression,
        object_properties: Vec<ObjectProperty>,
        data_properties: Vec<DataProperty>,
    },

    // === Assertions ===
    /// ClassAssertion(C, a)
    ClassAssertion {
        class: ClassExpression,
        individual: Individual,
    },

    /// ObjectPropertyAssertion(P, a, b)
    ObjectPropertyAssertion {
        property: ObjectProperty,
        source: Individual,
        target: Individual,
    },

    /// NegativeObjectPropertyAssertion(P, a, b)
    NegativeObjectPropertyAssertion {
        property: ObjectProperty,
        source: Individual,
        target: Individual,
    },

    /// DataPropertyAssertion(P, a, v)
    DataPropertyAssertion {
        property: DataProperty,
        source: Individual,
        target: Literal,
    },

    /// NegativeDataPropertyAssertion(P, a, v)
    NegativeDataPropertyAssertion {
        property: DataProperty,
        source: Individual,
        target: Literal,
    },

    /// SameIndividual(a1, a2, ...)
    SameIndividual(Vec<Individual>),

    /// DifferentIndividuals(a1, a2, ...)
    DifferentIndividuals(Vec<Individual>),

    // === Annotation Axioms ===
    /// AnnotationAssertion(A, s, v)
    AnnotationAssertion {
        property: AnnotationProperty,
        subject: AnnotationSubject,
        value: AnnotationValue,
    },

    /// SubAnnotationPropertyOf(sub, super)
    SubAnnotationPropertyOf {
        sub_property: AnnotationProperty,
        super_property: AnnotationProperty,
    },

    /// AnnotationPropertyDomain(A, U)
    AnnotationPropertyDomain {
        property: AnnotationProperty,
        domain: oxrdf::NamedNode,
    },

    /// AnnotationPropertyRange(A, U)
    AnnotationPropertyRange {
        property: AnnotationProperty,
        range: oxrdf::NamedNode,
    },

    // === Declarations ===
    /// Declaration(Class(C))
    DeclareClass(OwlClass),

    /// Declaration(Datatype(D))
    DeclareDatatype(Datatype),

    /// Declaration(ObjectProperty(P))
    DeclareObjectProperty(ObjectProperty),

    /// Declaration(DataProperty(P))
    DeclareDataProperty(DataProperty),

    /// Declaration(AnnotationProperty(P))
    DeclareAnnotationProperty(AnnotationProperty),

    /// Declaration(NamedIndividual(a))
    DeclareNamedIndividual(Individual),
}

/// The kind of an axiom, used for translator dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxiomKind {
    SubClassOf,
    EquivalentClasses,
    DisjointClasses,
    DisjointUnion,
    SubObjectPropertyOf,
    SubPropertyChainOf,
    EquivalentObjectProperties,
    DisjointObjectProperties,
    ObjectPropertyDomain,
    ObjectPropertyRange,
    InverseObjectProperties,
    FunctionalObjectProperty,
    InverseFunctionalObjectProperty,
    ReflexiveObjectProperty,
    IrreflexiveObjectProperty,
    SymmetricObjectProperty,
    AsymmetricObjectProperty,
    TransitiveObjectProperty,
    SubDataPropertyOf,
    EquivalentDataProperties,
    DisjointDataProperties,
    DataPropertyDomain,
    DataPropertyRange,
    FunctionalDataProperty,
    DatatypeDefinition,
    HasKey,
    ClassAssertion,
    ObjectPropertyAssertion,
    NegativeObjectPropertyAssertion,
    DataPropertyAssertion,
    NegativeDataPropertyAssertion,
    SameIndividual,
    DifferentIndividuals,
    AnnotationAssertion,
    SubAnnotationPropertyOf,
    AnnotationPropertyDomain,
    AnnotationPropertyRange,
    DeclareClass,
    DeclareDatatype,
    DeclareObjectProperty,
    DeclareDataProperty,
    DeclareAnnotationProperty,
    DeclareNamedIndividual,
}

impl AxiomKind {
    /// Every axiom kind, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::SubClassOf,
        Self::EquivalentClasses,
        Self::DisjointClasses,
        Self::DisjointUnion,
        Self::SubObjectPropertyOf,
        Self::SubPropertyChainOf,
        Self::EquivalentObjectProperties,
        Self::DisjointObjectProperties,
        Self::ObjectPropertyDomain,
        Self::ObjectPropertyRange,
        Self::InverseObjectProperties,
        Self::FunctionalObjectProperty,
        Self::InverseFunctionalObjectProperty,
        Self::ReflexiveObjectProperty,
        Self::IrreflexiveObjectProperty,
        Self::SymmetricObjectProperty,
        Self::AsymmetricObjectProperty,
        Self::TransitiveObjectProperty,
        Self::SubDataPropertyOf,
        Self::EquivalentDataProperties,
        Self::DisjointDataProperties,
        Self::DataPropertyDomain,
        Self::DataPropertyRange,
        Self::FunctionalDataProperty,
        Self::DatatypeDefinition,
        Self::HasKey,
        Self::ClassAssertion,
        Self::ObjectPropertyAssertion,
        Self::NegativeObjectPropertyAssertion,
        Self::DataPropertyAssertion,
        Self::NegativeDataPropertyAssertion,
        Self::SameIndividual,
        Self::DifferentIndividuals,
        Self::AnnotationAssertion,
        Self::SubAnnotationPropertyOf,
        Self::AnnotationPropertyDomain,
        Self::AnnotationPropertyRange,
        Self::DeclareClass,
        Self::DeclareDatatype,
        Self::DeclareObjectProperty,
        Self::DeclareDataProperty,
        Self::DeclareAnnotationProperty,
        Self::DeclareNamedIndividual,
    ];
}

impl Axiom {
    /// The kind of this axiom.
    pub fn kind(&self) -> AxiomKind {
        match self {
            Self::SubClassOf { .. } => AxiomKind::SubClassOf,
            Self::EquivalentClasses(_) => AxiomKind::EquivalentClasses,
            Self::DisjointClasses(_) => AxiomKind::DisjointClasses,
            Self::DisjointUnion { .. } => AxiomKind::DisjointUnion,
            Self::SubObjectPropertyOf { .. } => AxiomKind::SubObjectPropertyOf,
            Self::SubPropertyChainOf { .. } => AxiomKind::SubPropertyChainOf,
            Self::EquivalentObjectProperties(_) => AxiomKind::EquivalentObjectProperties,
            Self::DisjointObjectProperties(_) => AxiomKind::DisjointObjectProperties,
            Self::ObjectPropertyDomain { .. } => AxiomKind::ObjectPropertyDomain,
            Self::ObjectPropertyRange { .. } => AxiomKind::ObjectPropertyRange,
            Self::InverseObjectProperties(_, _) => AxiomKind::InverseObjectProperties,
            Self::FunctionalObjectProperty(_) => AxiomKind::FunctionalObjectProperty,
            Self::InverseFunctionalObjectProperty(_) => AxiomKind::InverseFunctionalObjectProperty,
            Self::ReflexiveObjectProperty(_) => AxiomKind::ReflexiveObjectProperty,
            Self::IrreflexiveObjectProperty(_) => AxiomKind::IrreflexiveObjectProperty,
            Self::SymmetricObjectProperty(_) => AxiomKind::SymmetricObjectProperty,
            Self::AsymmetricObjectProperty(_) => AxiomKind::AsymmetricObjectProperty,
            Self::TransitiveObjectProperty(_) => AxiomKind::TransitiveObjectProperty,
            Self::SubDataPropertyOf { .. } => AxiomKind::SubDataPropertyOf,
            Self::EquivalentDataProperties(_) => AxiomKind::EquivalentDataProperties,
            Self::DisjointDataProperties(_) => AxiomKind::DisjointDataProperties,
            Self::DataPropertyDomain { .. } => AxiomKind::DataPropertyDomain,
            Self::DataPropertyRange { .. } => AxiomKind::DataPropertyRange,
            Self::FunctionalDataProperty(_) => AxiomKind::FunctionalDataProperty,
            Self::DatatypeDefinition { .. } => AxiomKind::DatatypeDefinition,
            Self::HasKey { .. } => AxiomKind::HasKey,
            Self::ClassAssertion { .. } => AxiomKind::ClassAssertion,
            Self::ObjectPropertyAssertion { .. } => AxiomKind::ObjectPropertyAssertion,
            Self::NegativeObjectPropertyAssertion { .. } => {
                AxiomKind::NegativeObjectPropertyAssertion
            }
            Self::DataPropertyAssertion { .. } => AxiomKind::DataPropertyAssertion,
            Self::NegativeDataPropertyAssertion { .. } => AxiomKind::NegativeDataPropertyAssertion,
            Self::SameIndividual(_) => AxiomKind::SameIndividual,
            Self::DifferentIndividuals(_) => AxiomKind::DifferentIndividuals,
            Self::AnnotationAssertion { .. } => AxiomKind::AnnotationAssertion,
            Self::SubAnnotationPropertyOf { .. } => AxiomKind::SubAnnotationPropertyOf,
            Self::AnnotationPropertyDomain { .. } => AxiomKind::AnnotationPropertyDomain,
            Self::AnnotationPropertyRange { .. } => AxiomKind::AnnotationPropertyRange,
            Self::DeclareClass(_) => AxiomKind::DeclareClass,
            Self::DeclareDatatype(_) => AxiomKind::DeclareDatatype,
            Self::DeclareObjectProperty(_) => AxiomKind::DeclareObjectProperty,
            Self::DeclareDataProperty(_) => AxiomKind::DeclareDataProperty,
            Self::DeclareAnnotationProperty(_) => AxiomKind::DeclareAnnotationProperty,
            Self::DeclareNamedIndividual(_) => AxiomKind::DeclareNamedIndividual,
        }
    }

    /// Creates a SubClassOf axiom.
    pub fn subclass_of(sub: impl Into<ClassExpression>, sup: impl Into<ClassExpression>) -> Self {
        Self::SubClassOf {
            sub_class: sub.into(),
            super_class: sup.into(),
        }
    }

    /// Creates an EquivalentClasses axiom with canonical operand order.
    pub fn equivalent_classes(classes: Vec<ClassExpression>) -> Self {
        Self::EquivalentClasses(canonical_operands(classes))
    }

    /// Creates a DisjointClasses axiom with canonical operand order.
    pub fn disjoint_classes(classes: Vec<ClassExpression>) -> Self {
        Self::DisjointClasses(canonical_operands(classes))
    }

    /// Creates an EquivalentObjectProperties axiom with canonical operand order.
    pub fn equivalent_object_properties(properties: Vec<ObjectProperty>) -> Self {
        Self::EquivalentObjectProperties(canonical_operands(properties))
    }

    /// Creates a DisjointObjectProperties axiom with canonical operand order.
    pub fn disjoint_object_properties(properties: Vec<ObjectProperty>) -> Self {
        Self::DisjointObjectProperties(canonical_operands(properties))
    }

    /// Creates an EquivalentDataProperties axiom with canonical operand order.
    pub fn equivalent_data_properties(properties: Vec<DataProperty>) -> Self {
        Self::EquivalentDataProperties(canonical_operands(properties))
    }

    /// Creates a DisjointDataProperties axiom with canonical operand order.
    pub fn disjoint_data_properties(properties: Vec<DataProperty>) -> Self {
        Self::DisjointDataProperties(canonical_operands(properties))
    }

    /// Creates a SameIndividual axiom with canonical operand order.
    pub fn same_individual(individuals: Vec<Individual>) -> Self {
        Self::SameIndividual(canonical_operands(individuals))
    }

    /// Creates a DifferentIndividuals axiom with canonical operand order.
    pub fn different_individuals(individuals: Vec<Individual>) -> Self {
        Self::DifferentIndividuals(canonical_operands(individuals))
    }

    /// Creates a ClassAssertion axiom.
    pub fn class_assertion(
        class: impl Into<ClassExpression>,
        individual: impl Into<Individual>,
    ) -> Self {
        Self::ClassAssertion {
            class: class.into(),
            individual: individual.into(),
        }
    }
}

/// An axiom together with its annotation set.
///
/// Two annotated axioms over the same structural axiom compare equal through
/// [`axiom`](Self::axiom) regardless of their annotations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnnotatedAxiom {
    axiom: Axiom,
    annotations: Vec<Annotation>,
}

impl AnnotatedAxiom {
    /// Wraps an axiom with an annotation set, in canonical order.
    pub fn new(axiom: Axiom, annotations: Vec<Annotation>) -> Self {
        Self {
            axiom,
            annotations: canonical_operands(annotations),
        }
    }

    /// The annotation-stripped view of this axiom.
    pub fn axiom(&self) -> &Axiom {
        &self.axiom
    }

    /// The annotations, in canonical order.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Returns the same axiom without any annotations.
    pub fn without_annotations(&self) -> Self {
        Self {
            axiom: self.axiom.clone(),
            annotations: Vec::new(),
        }
    }

    /// Returns the same axiom with the annotation set replaced.
    pub fn with_annotations(&self, annotations: Vec<Annotation>) -> Self {
        Self::new(self.axiom.clone(), annotations)
    }

    /// Unwraps into the structural axiom, dropping annotations.
    pub fn into_axiom(self) -> Axiom {
        self.axiom
    }
}

impl From<Axiom> for AnnotatedAxiom {
    fn from(axiom: Axiom) -> Self {
        Self::new(axiom, Vec::new())
    }
}
