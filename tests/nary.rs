//! Tests for the n-ary split/merge behavior: pairwise triples scattered
//! across a graph must come back as one merged axiom.

use oxowlrdf::{
    read_axioms, write_axiom, AnnotatedAxiom, Axiom, AxiomKind, ClassExpression, Individual,
    OwlClass, ReaderConfig,
};
use oxowlrdf::vocab::owl;
use oxrdf::vocab::rdf;
use oxrdf::{BlankNode, Graph, NamedNode, Term, Triple};

fn named(local: &str) -> NamedNode {
    NamedNode::new_unchecked(format!("http://example.org/{local}"))
}

fn class(local: &str) -> ClassExpression {
    ClassExpression::class(OwlClass::new(named(local)))
}

fn read_kind(graph: &Graph, config: &ReaderConfig, kind: AxiomKind) -> Vec<AnnotatedAxiom> {
    read_axioms(graph, config)
        .map(|result| result.expect("read failed").into_inner())
        .filter(|axiom| axiom.axiom().kind() == kind)
        .collect()
}

#[test]
fn pairwise_equivalences_merge_transitively() {
    let mut graph = Graph::new();
    graph.insert(&Triple::new(
        named("A"),
        owl::EQUIVALENT_CLASS.into_owned(),
        named("B"),
    ));
    graph.insert(&Triple::new(
        named("B"),
        owl::EQUIVALENT_CLASS.into_owned(),
        named("C"),
    ));

    let config = ReaderConfig::default();
    let read = read_kind(&graph, &config, AxiomKind::EquivalentClasses);
    assert_eq!(
        read,
        vec![AnnotatedAxiom::from(Axiom::equivalent_classes(vec![
            class("A"),
            class("B"),
            class("C"),
        ]))]
    );
}

#[test]
fn materialized_closure_yields_one_axiom() {
    let mut graph = Graph::new();
    for (a, b) in [("A", "B"), ("B", "C"), ("A", "C")] {
        graph.insert(&Triple::new(
            named(a),
            owl::EQUIVALENT_CLASS.into_owned(),
            named(b),
        ));
    }

    let config = ReaderConfig::default();
    let read = read_kind(&graph, &config, AxiomKind::EquivalentClasses);
    assert_eq!(
        read,
        vec![AnnotatedAxiom::from(Axiom::equivalent_classes(vec![
            class("A"),
            class("B"),
            class("C"),
        ]))]
    );
}

#[test]
fn unconnected_components_stay_separate() {
    let mut graph = Graph::new();
    for (a, b) in [("A", "B"), ("C", "D")] {
        graph.insert(&Triple::new(
            named(a),
            owl::EQUIVALENT_CLASS.into_owned(),
            named(b),
        ));
    }

    let config = ReaderConfig::default();
    let read = read_kind(&graph, &config, AxiomKind::EquivalentClasses);
    assert_eq!(read.len(), 2);
    assert!(read.contains(&AnnotatedAxiom::from(Axiom::equivalent_classes(vec![
        class("A"),
        class("B"),
    ]))));
    assert!(read.contains(&AnnotatedAxiom::from(Axiom::equivalent_classes(vec![
        class("C"),
        class("D"),
    ]))));
}

#[test]
fn allow_duplicates_keeps_pairwise_axioms() {
    let mut graph = Graph::new();
    for (a, b) in [("A", "B"), ("B", "C")] {
        graph.insert(&Triple::new(
            named(a),
            owl::EQUIVALENT_CLASS.into_owned(),
            named(b),
        ));
    }

    let config = ReaderConfig::default().allow_duplicates_in_nary_axioms(true);
    let read = read_kind(&graph, &config, AxiomKind::EquivalentClasses);
    assert_eq!(read.len(), 2);
    for axiom in &read {
        match axiom.axiom() {
            Axiom::EquivalentClasses(operands) => assert_eq!(operands.len(), 2),
            _ => unreachable!(),
        }
    }
}

#[test]
fn three_operand_axiom_splits_and_merges_back() {
    let axiom = AnnotatedAxiom::from(Axiom::disjoint_classes(vec![
        class("Bird"),
        class("Cat"),
        class("Dog"),
    ]));
    let mut graph = Graph::new();
    write_axiom(&axiom, &mut graph).expect("write failed");

    // all distinct pairs, one triple each
    assert_eq!(graph.len(), 3);

    let config = ReaderConfig::default();
    let read = read_kind(&graph, &config, AxiomKind::DisjointClasses);
    assert_eq!(read, vec![axiom]);
}

#[test]
fn same_individual_merges() {
    let mut graph = Graph::new();
    graph.insert(&Triple::new(
        named("alice"),
        owl::SAME_AS.into_owned(),
        named("a-smith"),
    ));
    graph.insert(&Triple::new(
        named("a-smith"),
        owl::SAME_AS.into_owned(),
        named("ally"),
    ));

    let config = ReaderConfig::default();
    let read = read_kind(&graph, &config, AxiomKind::SameIndividual);
    assert_eq!(
        read,
        vec![AnnotatedAxiom::from(Axiom::same_individual(vec![
            Individual::Named(named("a-smith")),
            Individual::Named(named("alice")),
            Individual::Named(named("ally")),
        ]))]
    );
}

#[test]
fn all_different_is_read_through_members_list() {
    let mut graph = Graph::new();
    let root = BlankNode::default();
    graph.insert(&Triple::new(
        root.clone(),
        rdf::TYPE.into_owned(),
        owl::ALL_DIFFERENT.into_owned(),
    ));
    // members list (alice bob carol)
    let mut head: Term = rdf::NIL.into_owned().into();
    for name in ["carol", "bob", "alice"] {
        let node = BlankNode::default();
        graph.insert(&Triple::new(node.clone(), rdf::FIRST.into_owned(), named(name)));
        graph.insert(&Triple::new(node.clone(), rdf::REST.into_owned(), head));
        head = node.into();
    }
    graph.insert(&Triple::new(root, owl::MEMBERS.into_owned(), head));

    let config = ReaderConfig::default();
    let read = read_kind(&graph, &config, AxiomKind::DifferentIndividuals);
    assert_eq!(
        read,
        vec![AnnotatedAxiom::from(Axiom::different_individuals(vec![
            Individual::Named(named("alice")),
            Individual::Named(named("bob")),
            Individual::Named(named("carol")),
        ]))]
    );
}

#[test]
fn reflexive_pair_is_dropped() {
    let mut graph = Graph::new();
    graph.insert(&Triple::new(
        named("A"),
        owl::EQUIVALENT_CLASS.into_owned(),
        named("A"),
    ));

    let config = ReaderConfig::default();
    assert!(read_kind(&graph, &config, AxiomKind::EquivalentClasses).is_empty());
}
