//! The statement/graph abstraction boundary.
//!
//! The engine does not own any RDF storage: it reads from and writes to an
//! [`oxrdf::Graph`] through the narrow interfaces in this module. The graph
//! handed to a [`LocalGraph`] is expected to hold only local statements;
//! resolving imports is the responsibility of the caller.

use crate::annotation::{Annotation, AnnotationValue};
use crate::config::ReaderConfig;
use crate::entity::AnnotationProperty;
use crate::error::{CyclicAnnotationGraphError, GraphShapeError, TranslationError};
use crate::translated::Translated;
use crate::vocab::owl;
use oxrdf::vocab::rdf;
use oxrdf::{
    BlankNode, Graph, NamedNodeRef, Subject, SubjectRef, Term, TermRef, Triple, TripleRef,
};
use rustc_hash::FxHashSet;

/// Converts a statement subject to the equivalent term.
pub(crate) fn subject_to_term(subject: SubjectRef<'_>) -> Term {
    match subject {
        SubjectRef::NamedNode(n) => n.into_owned().into(),
        SubjectRef::BlankNode(b) => b.into_owned().into(),
    }
}

/// Converts a term to a statement subject, if it can be one.
pub(crate) fn term_to_subject(term: TermRef<'_>) -> Option<Subject> {
    match term {
        TermRef::NamedNode(n) => Some(n.into_owned().into()),
        TermRef::BlankNode(b) => Some(b.into_owned().into()),
        TermRef::Literal(_) => None,
    }
}

/// Converts a term reference to a subject reference, if it can be one.
pub(crate) fn term_to_subject_ref(term: TermRef<'_>) -> Option<SubjectRef<'_>> {
    match term {
        TermRef::NamedNode(n) => Some(n.into()),
        TermRef::BlankNode(b) => Some(b.into()),
        TermRef::Literal(_) => None,
    }
}

/// A read-only view over the local statements of a graph.
///
/// Every iteration this view hands out is restartable: the underlying graph
/// must not be mutated while a read pass is in progress, which the borrow
/// rules already enforce within this crate.
#[derive(Clone, Copy)]
pub struct LocalGraph<'g> {
    graph: &'g Graph,
    config: &'g ReaderConfig,
}

impl<'g> LocalGraph<'g> {
    /// Creates a view over a graph with the given read configuration.
    pub fn new(graph: &'g Graph, config: &'g ReaderConfig) -> Self {
        Self { graph, config }
    }

    /// The read configuration.
    pub fn config(self) -> &'g ReaderConfig {
        self.config
    }

    /// All local statements.
    pub fn statements(self) -> impl Iterator<Item = TripleRef<'g>> + 'g {
        self.graph.iter()
    }

    /// All local statements with the given predicate.
    pub fn statements_for_predicate(
        self,
        predicate: NamedNodeRef<'static>,
    ) -> impl Iterator<Item = TripleRef<'g>> + 'g {
        self.graph.triples_for_predicate(predicate)
    }

    /// All local `rdf:type` statements with the given type as object.
    pub fn statements_for_type(
        self,
        class: NamedNodeRef<'static>,
    ) -> impl Iterator<Item = TripleRef<'g>> + 'g {
        self.graph
            .triples_for_predicate(rdf::TYPE)
            .filter(move |t| t.object == TermRef::from(class))
    }

    /// All statements with the given subject.
    pub fn statements_for_subject(
        self,
        subject: SubjectRef<'_>,
    ) -> impl Iterator<Item = TripleRef<'g>> + 'g + use<'g, '_> {
        self.graph.triples_for_subject(subject)
    }

    /// The unique object of (subject, predicate), if present.
    pub fn object_for(
        self,
        subject: SubjectRef<'_>,
        predicate: NamedNodeRef<'_>,
    ) -> Option<TermRef<'g>> {
        self.graph.object_for_subject_predicate(subject, predicate)
    }

    /// True if the subject is asserted to have the given `rdf:type`.
    pub fn has_type(self, subject: SubjectRef<'_>, class: NamedNodeRef<'_>) -> bool {
        self.graph
            .contains(TripleRef::new(subject, rdf::TYPE, class))
    }

    /// True if the term is a resource asserted to have the given `rdf:type`.
    pub fn term_has_type(self, term: TermRef<'_>, class: NamedNodeRef<'_>) -> bool {
        term_to_subject_ref(term).is_some_and(|subject| self.has_type(subject, class))
    }

    /// Reads an `rdf:first`/`rdf:rest` list into its member terms.
    pub fn read_list(self, head: TermRef<'_>) -> Result<Translated<Vec<Term>>, TranslationError> {
        let mut items = Vec::new();
        let mut result = Translated::new(());
        let mut visited = FxHashSet::default();
        let mut current = head.into_owned();
        let nil = Term::from(rdf::NIL.into_owned());

        while current != nil {
            if !visited.insert(current.clone()) {
                return Err(GraphShapeError::circular_reference(&current).into());
            }
            let node = term_to_subject(current.as_ref())
                .ok_or_else(|| GraphShapeError::malformed_list("literal in list position"))?;
            let first = self
                .object_for(node.as_ref(), rdf::FIRST)
                .ok_or_else(|| GraphShapeError::malformed_list("missing rdf:first"))?;
            let rest = self
                .object_for(node.as_ref(), rdf::REST)
                .ok_or_else(|| GraphShapeError::malformed_list("missing rdf:rest"))?;
            result.extend_sources([
                Triple::new(node.clone(), rdf::FIRST.into_owned(), first.into_owned()),
                Triple::new(node, rdf::REST.into_owned(), rest.into_owned()),
            ]);
            items.push(first.into_owned());
            current = rest.into_owned();
        }

        Ok(result.map(|()| items))
    }

    /// Resolves the annotation set attached to a statement.
    ///
    /// Walks `owl:Axiom` reifications of the statement and, recursively,
    /// `owl:Annotation` reifications of the annotation triples themselves.
    /// There is no depth cap; a reification node reached twice on one walk is
    /// a [`CyclicAnnotationGraphError`].
    pub fn statement_annotations(
        self,
        statement: TripleRef<'_>,
    ) -> Result<Translated<Vec<Annotation>>, TranslationError> {
        if self.config.ignore_axiom_annotations {
            return Ok(Translated::new(Vec::new()));
        }
        let mut visited = FxHashSet::default();
        self.collect_annotations(statement, owl::AXIOM, &mut visited)
    }

    fn collect_annotations(
        self,
        statement: TripleRef<'_>,
        reification_type: NamedNodeRef<'static>,
        visited: &mut FxHashSet<Subject>,
    ) -> Result<Translated<Vec<Annotation>>, TranslationError> {
        let mut annotations = Vec::new();
        let mut result = Translated::new(());
        let subject_term = subject_to_term(statement.subject);
        let predicate_term = TermRef::from(statement.predicate);

        for root in self
            .graph
            .subjects_for_predicate_object(owl::ANNOTATED_SOURCE, subject_term.as_ref())
        {
            if !self.has_type(root, reification_type)
                || self.object_for(root, owl::ANNOTATED_PROPERTY) != Some(predicate_term)
                || self.object_for(root, owl::ANNOTATED_TARGET) != Some(statement.object)
            {
                continue;
            }
            let owned_root = root.into_owned();
            if !visited.insert(owned_root.clone()) {
                return Err(CyclicAnnotationGraphError::new(&owned_root).into());
            }

            result.extend_sources([
                Triple::new(
                    owned_root.clone(),
                    rdf::TYPE.into_owned(),
                    reification_type.into_owned(),
                ),
                Triple::new(
                    owned_root.clone(),
                    owl::ANNOTATED_SOURCE.into_owned(),
                    subject_term.clone(),
                ),
                Triple::new(
                    owned_root.clone(),
                    owl::ANNOTATED_PROPERTY.into_owned(),
                    predicate_term.into_owned(),
                ),
                Triple::new(
                    owned_root.clone(),
                    owl::ANNOTATED_TARGET.into_owned(),
                    statement.object.into_owned(),
                ),
            ]);

            for triple in self.statements_for_subject(root) {
                if triple.predicate == rdf::TYPE
                    || triple.predicate == owl::ANNOTATED_SOURCE
                    || triple.predicate == owl::ANNOTATED_PROPERTY
                    || triple.predicate == owl::ANNOTATED_TARGET
                {
                    continue;
                }
                let nested = self.collect_annotations(triple, owl::ANNOTATION, visited)?;
                let (merged, nested_annotations) = result.append(nested);
                result = merged.with_source(triple);
                annotations.push(Annotation::with_annotations(
                    AnnotationProperty::new(triple.predicate.into_owned()),
                    AnnotationValue::from_term(triple.object),
                    nested_annotations,
                ));
            }

            visited.remove(&owned_root);
        }

        Ok(result.map(|()| annotations))
    }

    /// Resolves the annotations written directly onto a node that itself
    /// stands for an axiom (negative property assertions, `owl:AllDifferent`
    /// and friends). Every statement whose predicate is not part of the
    /// construct's machinery is read as an annotation.
    pub fn node_annotations(
        self,
        node: SubjectRef<'_>,
        machinery: &[NamedNodeRef<'static>],
    ) -> Result<Translated<Vec<Annotation>>, TranslationError> {
        if self.config.ignore_axiom_annotations {
            return Ok(Translated::new(Vec::new()));
        }
        let mut annotations = Vec::new();
        let mut result = Translated::new(());
        let mut visited = FxHashSet::default();
        visited.insert(node.into_owned());
        for triple in self.statements_for_subject(node) {
            if triple.predicate == rdf::TYPE
                || machinery.iter().any(|p| triple.predicate == *p)
            {
                continue;
            }
            let nested = self.collect_annotations(triple, owl::ANNOTATION, &mut visited)?;
            let (merged, nested_annotations) = result.append(nested);
            result = merged.with_source(triple);
            annotations.push(Annotation::with_annotations(
                AnnotationProperty::new(triple.predicate.into_owned()),
                AnnotationValue::from_term(triple.object),
                nested_annotations,
            ));
        }
        Ok(result.map(|()| annotations))
    }
}

/// A writer over a target graph.
///
/// Writes are not safe for concurrent use; the exclusive borrow keeps a
/// single writer active per graph.
pub struct GraphWriter<'a> {
    graph: &'a mut Graph,
}

impl<'a> GraphWriter<'a> {
    /// Creates a writer over the graph.
    pub fn new(graph: &'a mut Graph) -> Self {
        Self { graph }
    }

    /// Allocates a blank node that is fresh for this graph.
    pub fn fresh_blank_node(&mut self) -> BlankNode {
        BlankNode::default()
    }

    /// Inserts a triple and returns it for further annotation.
    pub fn insert(
        &mut self,
        subject: impl Into<Subject>,
        predicate: impl Into<oxrdf::NamedNode>,
        object: impl Into<Term>,
    ) -> Triple {
        let triple = Triple::new(subject, predicate, object);
        self.graph.insert(&triple);
        triple
    }

    /// Writes terms out as an `rdf:first`/`rdf:rest` list, returning its head.
    pub fn write_list(&mut self, items: Vec<Term>) -> Term {
        let mut current = Term::from(rdf::NIL.into_owned());
        for item in items.into_iter().rev() {
            let node = self.fresh_blank_node();
            self.insert(node.clone(), rdf::FIRST.into_owned(), item);
            self.insert(node.clone(), rdf::REST.into_owned(), current);
            current = node.into();
        }
        current
    }

    /// Attaches annotations to a written statement, reifying it as an
    /// `owl:Axiom` node. Does nothing for an empty annotation set.
    pub fn annotate(&mut self, statement: &Triple, annotations: &[Annotation]) {
        self.reify(statement, annotations, owl::AXIOM);
    }

    fn reify(
        &mut self,
        statement: &Triple,
        annotations: &[Annotation],
        reification_type: NamedNodeRef<'static>,
    ) {
        if annotations.is_empty() {
            return;
        }
        let root = self.fresh_blank_node();
        self.insert(
            root.clone(),
            rdf::TYPE.into_owned(),
            reification_type.into_owned(),
        );
        self.insert(
            root.clone(),
            owl::ANNOTATED_SOURCE.into_owned(),
            subject_to_term(statement.subject.as_ref()),
        );
        self.insert(
            root.clone(),
            owl::ANNOTATED_PROPERTY.into_owned(),
            statement.predicate.clone(),
        );
        self.insert(
            root.clone(),
            owl::ANNOTATED_TARGET.into_owned(),
            statement.object.clone(),
        );
        self.annotate_node(&root.into(), annotations);
    }

    /// Writes annotations directly onto a node that itself stands for an
    /// axiom (reification roots, negative property assertions).
    pub fn annotate_node(&mut self, node: &Subject, annotations: &[Annotation]) {
        for annotation in annotations {
            let triple = self.insert(
                node.clone(),
                annotation.property().iri().clone(),
                annotation.value().to_term(),
            );
            self.reify(&triple, annotation.annotations(), owl::ANNOTATION);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::NamedNode;

    fn named(iri: &str) -> NamedNode {
        NamedNode::new_unchecked(format!("http://example.org/{iri}"))
    }

    #[test]
    fn list_round_trips() {
        let mut graph = Graph::new();
        let items: Vec<Term> = vec![named("a").into(), named("b").into(), named("c").into()];
        let head = {
            let mut writer = GraphWriter::new(&mut graph);
            writer.write_list(items.clone())
        };
        let config = ReaderConfig::default();
        let local = LocalGraph::new(&graph, &config);
        let read = local.read_list(head.as_ref()).unwrap();
        assert_eq!(read.value(), &items);
        assert_eq!(read.triples().len(), 6);
    }

    #[test]
    fn empty_list_is_nil() {
        let mut graph = Graph::new();
        let head = GraphWriter::new(&mut graph).write_list(Vec::new());
        assert_eq!(head, Term::from(rdf::NIL.into_owned()));
        let config = ReaderConfig::default();
        let local = LocalGraph::new(&graph, &config);
        assert!(local.read_list(head.as_ref()).unwrap().value().is_empty());
    }

    #[test]
    fn malformed_list_is_reported() {
        let mut graph = Graph::new();
        let node = BlankNode::default();
        let value = named("a");
        graph.insert(TripleRef::new(node.as_ref(), rdf::FIRST, value.as_ref()));
        // no rdf:rest
        let config = ReaderConfig::default();
        let local = LocalGraph::new(&graph, &config);
        assert!(local.read_list(node.as_ref().into()).is_err());
    }
}
