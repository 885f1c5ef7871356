//! Merging of symmetric n-ary axioms scattered across pairwise triples.
//!
//! RDF cannot state equivalence or disjointness over more than two entities
//! in one triple, so an n-ary axiom is written as pairwise triples and read
//! back by closing the pairwise relation transitively: the triples A≡B and
//! B≡C yield one axiom over {A, B, C}. A graph that already materializes the
//! closure (A≡B, B≡C, A≡C) still yields exactly one axiom.

use crate::axiom::{AnnotatedAxiom, Axiom};
use crate::error::TranslationError;
use crate::graph::{subject_to_term, LocalGraph};
use crate::translated::Translated;
use crate::translator::Translator;
use oxrdf::vocab::rdf;
use oxrdf::{Term, TermRef, TripleRef};
use rustc_hash::FxHashMap;

struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new() -> Self {
        Self { parent: Vec::new() }
    }

    fn make(&mut self) -> usize {
        self.parent.push(self.parent.len());
        self.parent.len() - 1
    }

    fn find(&mut self, mut node: usize) -> usize {
        while self.parent[node] != node {
            self.parent[node] = self.parent[self.parent[node]];
            node = self.parent[node];
        }
        node
    }

    fn union(&mut self, a: usize, b: usize) {
        let a = self.find(a);
        let b = self.find(b);
        if a != b {
            self.parent[a] = b;
        }
    }
}

/// Merges pairwise statements of one symmetric predicate into one axiom per
/// connected component of the undirected operand adjacency.
///
/// The component's annotation set is the union of the member statements'
/// annotation sets. Components with fewer than two distinct operands are
/// dropped (a reflexive triple carries no n-ary information).
pub(crate) fn merge_pairwise<'g, O>(
    graph: LocalGraph<'g>,
    statements: Vec<TripleRef<'g>>,
    read_operand: impl Fn(LocalGraph<'g>, TermRef<'_>) -> Result<Translated<O>, TranslationError>,
    make_axiom: impl Fn(Vec<O>) -> Axiom,
) -> Vec<Result<Translated<AnnotatedAxiom>, TranslationError>> {
    let mut nodes = UnionFind::new();
    let mut index: FxHashMap<Term, usize> = FxHashMap::default();
    let mut terms: Vec<Term> = Vec::new();
    let mut endpoints = Vec::with_capacity(statements.len());

    let mut intern = |term: Term, nodes: &mut UnionFind| -> usize {
        if let Some(i) = index.get(&term) {
            *i
        } else {
            let i = nodes.make();
            index.insert(term.clone(), i);
            terms.push(term);
            i
        }
    };

    for statement in &statements {
        let subject = intern(subject_to_term(statement.subject), &mut nodes);
        let object = intern(statement.object.into_owned(), &mut nodes);
        nodes.union(subject, object);
        endpoints.push(subject);
    }

    let mut component_statements: FxHashMap<usize, Vec<TripleRef<'g>>> = FxHashMap::default();
    for (statement, endpoint) in statements.iter().zip(&endpoints) {
        component_statements
            .entry(nodes.find(*endpoint))
            .or_default()
            .push(*statement);
    }
    let mut component_terms: FxHashMap<usize, Vec<usize>> = FxHashMap::default();
    for i in 0..terms.len() {
        component_terms.entry(nodes.find(i)).or_default().push(i);
    }

    // Deterministic component order: by first statement position.
    let mut roots: Vec<usize> = component_statements.keys().copied().collect();
    roots.sort_unstable_by_key(|root| {
        endpoints
            .iter()
            .position(|endpoint| nodes.find(*endpoint) == *root)
    });

    let mut result = Vec::new();
    for root in roots {
        let members = &component_terms[&root];
        if members.len() < 2 {
            continue;
        }
        result.push(merge_component(
            graph,
            &component_statements[&root],
            members.iter().map(|i| &terms[*i]),
            &read_operand,
            &make_axiom,
        ));
    }
    result
}

fn merge_component<'g, 't, O>(
    graph: LocalGraph<'g>,
    statements: &[TripleRef<'g>],
    members: impl Iterator<Item = &'t Term>,
    read_operand: &impl Fn(LocalGraph<'g>, TermRef<'_>) -> Result<Translated<O>, TranslationError>,
    make_axiom: &impl Fn(Vec<O>) -> Axiom,
) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
    let mut provenance = Translated::new(());
    let mut annotations = Vec::new();
    for statement in statements {
        let (merged, statement_annotations) =
            provenance.append(graph.statement_annotations(*statement)?);
        provenance = merged.with_source(*statement);
        annotations.extend(statement_annotations);
    }
    let mut operands = Vec::new();
    for member in members {
        let (merged, operand) = provenance.append(read_operand(graph, member.as_ref())?);
        provenance = merged;
        operands.push(operand);
    }
    Ok(provenance.map(|()| AnnotatedAxiom::new(make_axiom(operands), annotations)))
}

/// The read direction shared by the n-ary translators: pairwise statements
/// are merged by transitive closure (unless the configuration keeps them as
/// separate pairwise axioms), reified forms anchored on `rdf:type`
/// statements are read one axiom per anchor.
pub(crate) fn nary_axioms<'g, T, O>(
    translator: &'g T,
    graph: LocalGraph<'g>,
    read_operand: impl Fn(LocalGraph<'g>, TermRef<'_>) -> Result<Translated<O>, TranslationError> + 'g,
    make_axiom: impl Fn(Vec<O>) -> Axiom + 'g,
) -> Box<dyn Iterator<Item = Result<Translated<AnnotatedAxiom>, TranslationError>> + 'g>
where
    T: Translator + ?Sized,
{
    let (reified, pairwise): (Vec<_>, Vec<_>) = translator
        .statements(graph)
        .filter(|statement| translator.test(graph, *statement))
        .partition(|statement| statement.predicate == rdf::TYPE);

    let mut results = if graph.config().allow_duplicates_in_nary_axioms {
        pairwise
            .into_iter()
            .map(|statement| translator.to_axiom(graph, statement))
            .collect()
    } else {
        merge_pairwise(graph, pairwise, read_operand, make_axiom)
    };
    results.extend(
        reified
            .into_iter()
            .map(|statement| translator.to_axiom(graph, statement)),
    );
    Box::new(results.into_iter())
}
