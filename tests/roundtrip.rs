//! Round-trip tests: every supported axiom kind can be written to a graph
//! and read back as an equal axiom.

use oxowlrdf::{
    read_axioms, write_axiom, write_axioms, AnnotatedAxiom, Axiom, AxiomKind, ClassExpression,
    DataProperty, DataRange, Datatype, Individual, Literal, ObjectProperty,
    ObjectPropertyExpression, OwlClass, ReaderConfig,
};
use oxrdf::vocab::xsd;
use oxrdf::{Graph, NamedNode};

fn named(local: &str) -> NamedNode {
    NamedNode::new_unchecked(format!("http://example.org/{local}"))
}

fn class(local: &str) -> ClassExpression {
    ClassExpression::class(OwlClass::new(named(local)))
}

fn object_property(local: &str) -> ObjectProperty {
    ObjectProperty::new(named(local))
}

fn data_property(local: &str) -> DataProperty {
    DataProperty::new(named(local))
}

fn individual(local: &str) -> Individual {
    Individual::Named(named(local))
}

/// Writes the axioms, reads the graph back and returns the axioms of the
/// given kind.
fn roundtrip(axioms: &[AnnotatedAxiom], kind: AxiomKind) -> Vec<AnnotatedAxiom> {
    let mut graph = Graph::new();
    write_axioms(axioms, &mut graph).expect("write failed");
    let config = ReaderConfig::default();
    read_axioms(&graph, &config)
        .map(|result| result.expect("read failed").into_inner())
        .filter(|axiom| axiom.axiom().kind() == kind)
        .collect()
}

fn assert_roundtrips(axiom: Axiom) {
    let kind = axiom.kind();
    let annotated = AnnotatedAxiom::from(axiom);
    let read = roundtrip(std::slice::from_ref(&annotated), kind);
    assert_eq!(read, vec![annotated]);
}

fn assert_roundtrips_with(context: &[Axiom], axiom: Axiom) {
    let kind = axiom.kind();
    let annotated = AnnotatedAxiom::from(axiom);
    let mut axioms: Vec<AnnotatedAxiom> =
        context.iter().cloned().map(AnnotatedAxiom::from).collect();
    axioms.push(annotated.clone());
    let read = roundtrip(&axioms, kind);
    assert_eq!(read, vec![annotated]);
}

#[test]
fn subclass_of() {
    assert_roundtrips(Axiom::subclass_of(class("Dog"), class("Animal")));
}

#[test]
fn subclass_of_existential_restriction() {
    assert_roundtrips(Axiom::subclass_of(
        class("DogOwner"),
        ClassExpression::some_values_from(object_property("owns"), class("Dog")),
    ));
}

#[test]
fn subclass_of_universal_restriction() {
    assert_roundtrips(Axiom::subclass_of(
        class("Kennel"),
        ClassExpression::all_values_from(object_property("hosts"), class("Dog")),
    ));
}

#[test]
fn subclass_of_boolean_expressions() {
    assert_roundtrips(Axiom::subclass_of(
        ClassExpression::intersection(vec![class("Animal"), class("Pet")]),
        ClassExpression::union(vec![class("Cat"), class("Dog")]),
    ));
}

#[test]
fn subclass_of_complement_and_one_of() {
    assert_roundtrips(Axiom::subclass_of(
        ClassExpression::complement(class("Cat")),
        ClassExpression::one_of(vec![individual("rex"), individual("fido")]),
    ));
}

#[test]
fn subclass_of_has_value_and_has_self() {
    assert_roundtrips(Axiom::subclass_of(
        ClassExpression::ObjectHasValue {
            property: object_property("owns").into(),
            individual: individual("rex"),
        },
        ClassExpression::ObjectHasSelf(object_property("knows").into()),
    ));
}

#[test]
fn subclass_of_cardinality_restrictions() {
    assert_roundtrips(Axiom::subclass_of(
        ClassExpression::ObjectMinCardinality {
            cardinality: 2,
            property: object_property("owns").into(),
            filler: None,
        },
        ClassExpression::ObjectMaxCardinality {
            cardinality: 5,
            property: object_property("owns").into(),
            filler: Some(Box::new(class("Dog"))),
        },
    ));
}

#[test]
fn subclass_of_exact_cardinality() {
    assert_roundtrips(Axiom::subclass_of(
        class("OneDogOwner"),
        ClassExpression::ObjectExactCardinality {
            cardinality: 1,
            property: object_property("owns").into(),
            filler: Some(Box::new(class("Dog"))),
        },
    ));
}

#[test]
fn subclass_of_inverse_property_restriction() {
    assert_roundtrips(Axiom::subclass_of(
        class("Owned"),
        ClassExpression::some_values_from(
            ObjectPropertyExpression::inverse(object_property("owns")),
            class("Person"),
        ),
    ));
}

#[test]
fn subclass_of_data_restrictions() {
    let age = data_property("age");
    assert_roundtrips_with(
        &[Axiom::DeclareDataProperty(age.clone())],
        Axiom::subclass_of(
            class("Adult"),
            ClassExpression::DataSomeValuesFrom {
                property: age.clone(),
                filler: DataRange::datatype(Datatype::new(xsd::INTEGER.into_owned())),
            },
        ),
    );
}

#[test]
fn subclass_of_data_has_value() {
    let status = data_property("status");
    assert_roundtrips_with(
        &[Axiom::DeclareDataProperty(status.clone())],
        Axiom::subclass_of(
            class("Active"),
            ClassExpression::DataHasValue {
                property: status,
                value: Literal::simple("active"),
            },
        ),
    );
}

#[test]
fn subclass_of_data_cardinality() {
    let name = data_property("name");
    assert_roundtrips_with(
        &[Axiom::DeclareDataProperty(name.clone())],
        Axiom::subclass_of(
            class("Named"),
            ClassExpression::DataMinCardinality {
                cardinality: 1,
                property: name,
                filler: Some(DataRange::datatype(Datatype::new(xsd::STRING.into_owned()))),
            },
        ),
    );
}

#[test]
fn equivalent_classes() {
    assert_roundtrips(Axiom::equivalent_classes(vec![
        class("Human"),
        class("Person"),
    ]));
}

#[test]
fn equivalent_classes_with_expression() {
    assert_roundtrips(Axiom::equivalent_classes(vec![
        class("DogOwner"),
        ClassExpression::some_values_from(object_property("owns"), class("Dog")),
    ]));
}

#[test]
fn disjoint_classes() {
    assert_roundtrips(Axiom::disjoint_classes(vec![class("Cat"), class("Dog")]));
}

#[test]
fn disjoint_union() {
    assert_roundtrips(Axiom::DisjointUnion {
        class: OwlClass::new(named("Pet")),
        disjoint_classes: vec![class("Cat"), class("Dog")],
    });
}

#[test]
fn has_key() {
    let id = data_property("id");
    assert_roundtrips_with(
        &[Axiom::DeclareDataProperty(id.clone())],
        Axiom::HasKey {
            class: class("Person"),
            object_properties: vec![object_property("employer")],
            data_properties: vec![id],
        },
    );
}

#[test]
fn sub_object_property_of() {
    assert_roundtrips(Axiom::SubObjectPropertyOf {
        sub_property: object_property("hasDog").into(),
        super_property: object_property("hasPet").into(),
    });
}

#[test]
fn sub_property_chain_of() {
    assert_roundtrips(Axiom::SubPropertyChainOf {
        property_chain: vec![
            object_property("hasParent").into(),
            object_property("hasBrother").into(),
        ],
        super_property: object_property("hasUncle"),
    });
}

#[test]
fn equivalent_object_properties() {
    assert_roundtrips(Axiom::equivalent_object_properties(vec![
        object_property("hasPet"),
        object_property("keeps"),
    ]));
}

#[test]
fn disjoint_object_properties() {
    assert_roundtrips(Axiom::disjoint_object_properties(vec![
        object_property("likes"),
        object_property("dislikes"),
    ]));
}

#[test]
fn object_property_domain_and_range() {
    assert_roundtrips(Axiom::ObjectPropertyDomain {
        property: object_property("owns"),
        domain: class("Person"),
    });
    assert_roundtrips(Axiom::ObjectPropertyRange {
        property: object_property("owns"),
        range: class("Pet"),
    });
}

#[test]
fn inverse_object_properties() {
    assert_roundtrips(Axiom::InverseObjectProperties(
        object_property("owns"),
        object_property("ownedBy"),
    ));
}

#[test]
fn object_property_characteristics() {
    assert_roundtrips(Axiom::FunctionalObjectProperty(object_property("hasFather")));
    assert_roundtrips(Axiom::InverseFunctionalObjectProperty(object_property(
        "fatherOf",
    )));
    assert_roundtrips(Axiom::ReflexiveObjectProperty(object_property("knows")));
    assert_roundtrips(Axiom::IrreflexiveObjectProperty(object_property("parentOf")));
    assert_roundtrips(Axiom::SymmetricObjectProperty(object_property("siblingOf")));
    assert_roundtrips(Axiom::AsymmetricObjectProperty(object_property("childOf")));
    assert_roundtrips(Axiom::TransitiveObjectProperty(object_property("ancestorOf")));
}

#[test]
fn sub_data_property_of() {
    let sub = data_property("nickname");
    let sup = data_property("name");
    assert_roundtrips_with(
        &[
            Axiom::DeclareDataProperty(sub.clone()),
            Axiom::DeclareDataProperty(sup.clone()),
        ],
        Axiom::SubDataPropertyOf {
            sub_property: sub,
            super_property: sup,
        },
    );
}

#[test]
fn equivalent_data_properties() {
    let a = data_property("age");
    let b = data_property("yearsOld");
    assert_roundtrips_with(
        &[
            Axiom::DeclareDataProperty(a.clone()),
            Axiom::DeclareDataProperty(b.clone()),
        ],
        Axiom::equivalent_data_properties(vec![a, b]),
    );
}

#[test]
fn disjoint_data_properties() {
    let a = data_property("birthDate");
    let b = data_property("deathDate");
    assert_roundtrips_with(
        &[
            Axiom::DeclareDataProperty(a.clone()),
            Axiom::DeclareDataProperty(b.clone()),
        ],
        Axiom::disjoint_data_properties(vec![a, b]),
    );
}

#[test]
fn data_property_domain_and_range() {
    let age = data_property("age");
    assert_roundtrips_with(
        &[Axiom::DeclareDataProperty(age.clone())],
        Axiom::DataPropertyDomain {
            property: age.clone(),
            domain: class("Person"),
        },
    );
    assert_roundtrips_with(
        &[Axiom::DeclareDataProperty(age.clone())],
        Axiom::DataPropertyRange {
            property: age,
            range: DataRange::datatype(Datatype::new(xsd::INTEGER.into_owned())),
        },
    );
}

#[test]
fn data_property_range_restriction() {
    let age = data_property("age");
    assert_roundtrips_with(
        &[Axiom::DeclareDataProperty(age.clone())],
        Axiom::DataPropertyRange {
            property: age,
            range: DataRange::DatatypeRestriction {
                datatype: Datatype::new(xsd::INTEGER.into_owned()),
                facets: vec![(
                    NamedNode::new_unchecked("http://www.w3.org/2001/XMLSchema#minInclusive"),
                    Literal::typed("18", Datatype::new(xsd::INTEGER.into_owned())),
                )],
            },
        },
    );
}

#[test]
fn data_property_range_one_of() {
    let status = data_property("status");
    assert_roundtrips_with(
        &[Axiom::DeclareDataProperty(status.clone())],
        Axiom::DataPropertyRange {
            property: status,
            range: DataRange::one_of(vec![
                Literal::simple("active"),
                Literal::simple("inactive"),
            ]),
        },
    );
}

#[test]
fn functional_data_property() {
    let age = data_property("age");
    assert_roundtrips_with(
        &[Axiom::DeclareDataProperty(age.clone())],
        Axiom::FunctionalDataProperty(age),
    );
}

#[test]
fn datatype_definition() {
    let adult_age = Datatype::new(named("AdultAge"));
    assert_roundtrips_with(
        &[Axiom::DeclareDatatype(adult_age.clone())],
        Axiom::DatatypeDefinition {
            datatype: adult_age,
            data_range: DataRange::datatype(Datatype::new(xsd::INTEGER.into_owned())),
        },
    );
}

#[test]
fn class_assertion() {
    assert_roundtrips(Axiom::class_assertion(class("Dog"), individual("rex")));
}

#[test]
fn class_assertion_anonymous_individual() {
    assert_roundtrips(Axiom::class_assertion(
        class("Dog"),
        Individual::Anonymous(oxrdf::BlankNode::new_unchecked("stray")),
    ));
}

#[test]
fn object_property_assertion() {
    let owns = object_property("owns");
    assert_roundtrips_with(
        &[Axiom::DeclareObjectProperty(owns.clone())],
        Axiom::ObjectPropertyAssertion {
            property: owns,
            source: individual("alice"),
            target: individual("rex"),
        },
    );
}

#[test]
fn negative_object_property_assertion() {
    assert_roundtrips(Axiom::NegativeObjectPropertyAssertion {
        property: object_property("owns"),
        source: individual("bob"),
        target: individual("rex"),
    });
}

#[test]
fn data_property_assertion() {
    let age = data_property("age");
    assert_roundtrips_with(
        &[Axiom::DeclareDataProperty(age.clone())],
        Axiom::DataPropertyAssertion {
            property: age,
            source: individual("alice"),
            target: Literal::typed("30", Datatype::new(xsd::INTEGER.into_owned())),
        },
    );
}

#[test]
fn negative_data_property_assertion() {
    assert_roundtrips(Axiom::NegativeDataPropertyAssertion {
        property: data_property("age"),
        source: individual("bob"),
        target: Literal::typed("12", Datatype::new(xsd::INTEGER.into_owned())),
    });
}

#[test]
fn same_individual() {
    assert_roundtrips(Axiom::same_individual(vec![
        individual("alice"),
        individual("a-smith"),
    ]));
}

#[test]
fn different_individuals() {
    assert_roundtrips(Axiom::different_individuals(vec![
        individual("alice"),
        individual("bob"),
    ]));
}

#[test]
fn declarations() {
    assert_roundtrips(Axiom::DeclareClass(OwlClass::new(named("Dog"))));
    assert_roundtrips(Axiom::DeclareDatatype(Datatype::new(named("AdultAge"))));
    assert_roundtrips(Axiom::DeclareObjectProperty(object_property("owns")));
    assert_roundtrips(Axiom::DeclareDataProperty(data_property("age")));
    assert_roundtrips(Axiom::DeclareAnnotationProperty(
        oxowlrdf::AnnotationProperty::new(named("note")),
    ));
    assert_roundtrips(Axiom::DeclareNamedIndividual(individual("rex")));
}

#[test]
fn annotation_axioms_roundtrip_when_enabled() {
    use oxowlrdf::{AnnotationSubject, AnnotationValue};

    let note = oxowlrdf::AnnotationProperty::new(named("note"));
    let assertion = AnnotatedAxiom::from(Axiom::AnnotationAssertion {
        property: note.clone(),
        subject: AnnotationSubject::Iri(named("Dog")),
        value: AnnotationValue::Literal(Literal::simple("good dogs")),
    });
    let declaration = AnnotatedAxiom::from(Axiom::DeclareAnnotationProperty(note));

    let mut graph = Graph::new();
    write_axioms([&declaration, &assertion], &mut graph).expect("write failed");

    let config = ReaderConfig::default().load_annotation_axioms(true);
    let read: Vec<_> = read_axioms(&graph, &config)
        .map(|result| result.expect("read failed").into_inner())
        .filter(|axiom| axiom.axiom().kind() == AxiomKind::AnnotationAssertion)
        .collect();
    assert_eq!(read, vec![assertion]);
}

#[test]
fn annotation_assertions_are_skipped_by_default() {
    let mut graph = Graph::new();
    let axiom = AnnotatedAxiom::from(Axiom::AnnotationAssertion {
        property: oxowlrdf::AnnotationProperty::new(
            oxrdf::vocab::rdfs::COMMENT.into_owned(),
        ),
        subject: oxowlrdf::AnnotationSubject::Iri(named("Dog")),
        value: oxowlrdf::AnnotationValue::Literal(Literal::simple("a comment")),
    });
    write_axiom(&axiom, &mut graph).expect("write failed");

    let config = ReaderConfig::default();
    assert_eq!(read_axioms(&graph, &config).count(), 0);
}

#[test]
fn sub_annotation_property_of_roundtrip() {
    let sub = oxowlrdf::AnnotationProperty::new(named("editorialNote"));
    let sup = oxowlrdf::AnnotationProperty::new(named("note"));
    let axiom = AnnotatedAxiom::from(Axiom::SubAnnotationPropertyOf {
        sub_property: sub.clone(),
        super_property: sup.clone(),
    });
    let context = [
        AnnotatedAxiom::from(Axiom::DeclareAnnotationProperty(sub)),
        AnnotatedAxiom::from(Axiom::DeclareAnnotationProperty(sup)),
    ];

    let mut graph = Graph::new();
    write_axioms(context.iter().chain(std::iter::once(&axiom)), &mut graph)
        .expect("write failed");

    let config = ReaderConfig::default().load_annotation_axioms(true);
    let read: Vec<_> = read_axioms(&graph, &config)
        .map(|result| result.expect("read failed").into_inner())
        .filter(|read| read.axiom().kind() == AxiomKind::SubAnnotationPropertyOf)
        .collect();
    assert_eq!(read, vec![axiom]);
}

#[test]
fn annotation_property_domain_and_range() {
    let note = oxowlrdf::AnnotationProperty::new(named("note"));
    let context = [AnnotatedAxiom::from(Axiom::DeclareAnnotationProperty(
        note.clone(),
    ))];
    for axiom in [
        Axiom::AnnotationPropertyDomain {
            property: note.clone(),
            domain: named("Dog"),
        },
        Axiom::AnnotationPropertyRange {
            property: note.clone(),
            range: named("Text"),
        },
    ] {
        let kind = axiom.kind();
        let annotated = AnnotatedAxiom::from(axiom);
        let mut graph = Graph::new();
        write_axioms(context.iter().chain(std::iter::once(&annotated)), &mut graph)
            .expect("write failed");
        let config = ReaderConfig::default().load_annotation_axioms(true);
        let read: Vec<_> = read_axioms(&graph, &config)
            .map(|result| result.expect("read failed").into_inner())
            .filter(|read| read.axiom().kind() == kind)
            .collect();
        assert_eq!(read, vec![annotated]);
    }
}
