//! Axiom annotation handling: reified annotations, nesting, cycles.

use oxowlrdf::vocab::owl;
use oxowlrdf::{
    read_axioms, write_axiom, AnnotatedAxiom, Annotation, AnnotationProperty, AnnotationValue,
    Axiom, AxiomKind, ClassExpression, Literal, OwlClass, ReaderConfig, TranslationError,
};
use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{BlankNode, Graph, NamedNode, Triple};

fn named(local: &str) -> NamedNode {
    NamedNode::new_unchecked(format!("http://example.org/{local}"))
}

fn class(local: &str) -> ClassExpression {
    ClassExpression::class(OwlClass::new(named(local)))
}

fn comment(value: &str) -> Annotation {
    Annotation::new(
        AnnotationProperty::new(rdfs::COMMENT.into_owned()),
        AnnotationValue::Literal(Literal::simple(value)),
    )
}

/// The reification of `(:A owl:equivalentClass :B)` carrying one
/// `rdfs:comment`.
fn equivalence_with_reified_comment() -> Graph {
    let mut graph = Graph::new();
    graph.insert(&Triple::new(
        named("A"),
        owl::EQUIVALENT_CLASS.into_owned(),
        named("B"),
    ));
    let root = BlankNode::default();
    graph.insert(&Triple::new(
        root.clone(),
        rdf::TYPE.into_owned(),
        owl::AXIOM.into_owned(),
    ));
    graph.insert(&Triple::new(
        root.clone(),
        owl::ANNOTATED_SOURCE.into_owned(),
        named("A"),
    ));
    graph.insert(&Triple::new(
        root.clone(),
        owl::ANNOTATED_PROPERTY.into_owned(),
        owl::EQUIVALENT_CLASS.into_owned(),
    ));
    graph.insert(&Triple::new(
        root.clone(),
        owl::ANNOTATED_TARGET.into_owned(),
        named("B"),
    ));
    graph.insert(&Triple::new(
        root,
        rdfs::COMMENT.into_owned(),
        oxrdf::Literal::new_simple_literal("x"),
    ));
    graph
}

#[test]
fn reified_annotation_is_attached_to_the_axiom() {
    let graph = equivalence_with_reified_comment();
    let config = ReaderConfig::default();
    let read: Vec<_> = read_axioms(&graph, &config)
        .map(|result| result.expect("read failed").into_inner())
        .collect();
    assert_eq!(
        read,
        vec![AnnotatedAxiom::new(
            Axiom::equivalent_classes(vec![class("A"), class("B")]),
            vec![comment("x")],
        )]
    );
}

#[test]
fn reification_statements_count_as_consumed() {
    let graph = equivalence_with_reified_comment();
    let config = ReaderConfig::default();
    let read: Vec<_> = read_axioms(&graph, &config)
        .map(|result| result.expect("read failed"))
        .collect();
    assert_eq!(read.len(), 1);
    // the equivalence triple plus the whole reification structure
    assert_eq!(read[0].triples().len(), graph.len());
}

#[test]
fn annotated_axiom_round_trips() {
    let axiom = AnnotatedAxiom::new(
        Axiom::equivalent_classes(vec![class("A"), class("B")]),
        vec![comment("x")],
    );
    let mut graph = Graph::new();
    write_axiom(&axiom, &mut graph).expect("write failed");

    // one equivalence triple, four reification triples, one annotation
    assert_eq!(graph.len(), 6);

    let config = ReaderConfig::default();
    let read: Vec<_> = read_axioms(&graph, &config)
        .map(|result| result.expect("read failed").into_inner())
        .collect();
    assert_eq!(read, vec![axiom]);
}

#[test]
fn nested_annotations_round_trip() {
    let axiom = AnnotatedAxiom::new(
        Axiom::subclass_of(class("Dog"), class("Animal")),
        vec![Annotation::with_annotations(
            AnnotationProperty::new(rdfs::COMMENT.into_owned()),
            AnnotationValue::Literal(Literal::simple("outer")),
            vec![comment("inner")],
        )],
    );
    let mut graph = Graph::new();
    write_axiom(&axiom, &mut graph).expect("write failed");

    let config = ReaderConfig::default();
    let read: Vec<_> = read_axioms(&graph, &config)
        .map(|result| result.expect("read failed").into_inner())
        .filter(|read| read.axiom().kind() == AxiomKind::SubClassOf)
        .collect();
    assert_eq!(read, vec![axiom]);
}

#[test]
fn annotations_on_pairwise_triples_merge_without_duplicates() {
    let axiom = AnnotatedAxiom::new(
        Axiom::disjoint_classes(vec![class("Bird"), class("Cat"), class("Dog")]),
        vec![comment("pairwise")],
    );
    let mut graph = Graph::new();
    write_axiom(&axiom, &mut graph).expect("write failed");

    let config = ReaderConfig::default();
    let read: Vec<_> = read_axioms(&graph, &config)
        .map(|result| result.expect("read failed").into_inner())
        .collect();
    // three annotated pairwise triples merge back into the one axiom with
    // one copy of the annotation
    assert_eq!(read, vec![axiom]);
}

#[test]
fn ignore_axiom_annotations_strips_annotations() {
    let graph = equivalence_with_reified_comment();
    let config = ReaderConfig::default().ignore_axiom_annotations(true);
    let read: Vec<_> = read_axioms(&graph, &config)
        .map(|result| result.expect("read failed").into_inner())
        .collect();
    assert_eq!(
        read,
        vec![AnnotatedAxiom::from(Axiom::equivalent_classes(vec![
            class("A"),
            class("B"),
        ]))]
    );
}

#[test]
fn stripped_view_ignores_annotations() {
    let annotated = AnnotatedAxiom::new(
        Axiom::subclass_of(class("Dog"), class("Animal")),
        vec![comment("x")],
    );
    let bare = AnnotatedAxiom::from(Axiom::subclass_of(class("Dog"), class("Animal")));
    assert_ne!(annotated, bare);
    assert_eq!(annotated.axiom(), bare.axiom());
    assert_eq!(annotated.without_annotations(), bare);
}

#[test]
fn cyclic_annotation_structure_is_an_error() {
    // (:A owl:equivalentClass :B) reified by R1, R1's comment annotation
    // reified by :A itself, whose "annotation" triple is the equivalence
    // again, reified by R1: a closed loop R1 → :A → R1.
    let mut graph = Graph::new();
    graph.insert(&Triple::new(
        named("A"),
        owl::EQUIVALENT_CLASS.into_owned(),
        named("B"),
    ));
    let r1 = BlankNode::default();
    for class in [owl::AXIOM, owl::ANNOTATION] {
        graph.insert(&Triple::new(
            r1.clone(),
            rdf::TYPE.into_owned(),
            class.into_owned(),
        ));
    }
    graph.insert(&Triple::new(
        r1.clone(),
        owl::ANNOTATED_SOURCE.into_owned(),
        named("A"),
    ));
    graph.insert(&Triple::new(
        r1.clone(),
        owl::ANNOTATED_PROPERTY.into_owned(),
        owl::EQUIVALENT_CLASS.into_owned(),
    ));
    graph.insert(&Triple::new(
        r1.clone(),
        owl::ANNOTATED_TARGET.into_owned(),
        named("B"),
    ));
    graph.insert(&Triple::new(
        r1.clone(),
        rdfs::COMMENT.into_owned(),
        oxrdf::Literal::new_simple_literal("x"),
    ));
    graph.insert(&Triple::new(
        named("A"),
        rdf::TYPE.into_owned(),
        owl::ANNOTATION.into_owned(),
    ));
    graph.insert(&Triple::new(
        named("A"),
        owl::ANNOTATED_SOURCE.into_owned(),
        r1.clone(),
    ));
    graph.insert(&Triple::new(
        named("A"),
        owl::ANNOTATED_PROPERTY.into_owned(),
        rdfs::COMMENT.into_owned(),
    ));
    graph.insert(&Triple::new(
        named("A"),
        owl::ANNOTATED_TARGET.into_owned(),
        oxrdf::Literal::new_simple_literal("x"),
    ));

    let config = ReaderConfig::default();
    let saw_cycle = read_axioms(&graph, &config)
        .any(|result| matches!(result, Err(TranslationError::CyclicAnnotations(_))));
    assert!(saw_cycle);
}

#[test]
fn negative_assertion_annotations_attach_to_the_node() {
    let axiom = AnnotatedAxiom::new(
        Axiom::NegativeObjectPropertyAssertion {
            property: oxowlrdf::ObjectProperty::new(named("owns")),
            source: oxowlrdf::Individual::Named(named("bob")),
            target: oxowlrdf::Individual::Named(named("rex")),
        },
        vec![comment("denied")],
    );
    let mut graph = Graph::new();
    write_axiom(&axiom, &mut graph).expect("write failed");

    let config = ReaderConfig::default();
    let read: Vec<_> = read_axioms(&graph, &config)
        .map(|result| result.expect("read failed").into_inner())
        .collect();
    assert_eq!(read, vec![axiom]);
}
