//! The axiom ↔ statement translation engine.
//!
//! One translator per axiom kind implements both directions of the W3C
//! [Mapping to RDF Graphs](https://www.w3.org/TR/owl2-mapping-to-rdf/):
//! recognizing and reading the statements that encode the kind, and writing
//! an axiom of the kind back out as statements. Dispatch is by
//! [`AxiomKind`], never by the runtime shape of the axiom value: the same
//! kind can be encoded by several statement shapes, and the same predicate
//! can encode several kinds.

mod annotation_axioms;
mod assertion_axioms;
mod class_axioms;
mod declaration;
mod nary;
mod property_axioms;
mod reader;
mod writer;

use crate::axiom::{AnnotatedAxiom, Axiom, AxiomKind};
use crate::config::ReaderConfig;
use crate::error::TranslationError;
use crate::graph::{GraphWriter, LocalGraph};
use crate::translated::Translated;
use oxrdf::{Graph, TripleRef};
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// Both directions of the statement ↔ axiom mapping for one axiom kind.
pub trait Translator: Sync {
    /// The axiom kind this translator handles.
    fn kind(&self) -> AxiomKind;

    /// The local statements that are candidates for this axiom kind.
    ///
    /// The sequence is lazy and restartable; candidates still have to pass
    /// [`test`](Self::test).
    fn statements<'g>(&self, graph: LocalGraph<'g>) -> Box<dyn Iterator<Item = TripleRef<'g>> + 'g>;

    /// Cheap, side-effect-free check that a statement truly encodes this
    /// axiom kind. Guards against predicate collisions, e.g.
    /// `owl:equivalentProperty` is used for object and data properties alike.
    fn test(&self, graph: LocalGraph<'_>, statement: TripleRef<'_>) -> bool;

    /// Reads the axiom encoded by a statement, together with every statement
    /// consumed while resolving its operands and annotations.
    fn to_axiom(
        &self,
        graph: LocalGraph<'_>,
        statement: TripleRef<'_>,
    ) -> Result<Translated<AnnotatedAxiom>, TranslationError>;

    /// Writes the axiom into the target graph, attaching its annotations.
    fn write(
        &self,
        axiom: &AnnotatedAxiom,
        writer: &mut GraphWriter<'_>,
    ) -> Result<(), TranslationError>;

    /// All axioms of this kind in the graph.
    ///
    /// Each element is either a complete axiom or a typed error for one
    /// statement; the caller decides between skip-and-continue and
    /// abort-on-first-error.
    fn axioms<'g>(
        &'g self,
        graph: LocalGraph<'g>,
    ) -> Box<dyn Iterator<Item = Result<Translated<AnnotatedAxiom>, TranslationError>> + 'g> {
        Box::new(
            self.statements(graph)
                .filter(move |statement| self.test(graph, *statement))
                .map(move |statement| self.to_axiom(graph, statement)),
        )
    }
}

/// The process-wide translator table, one entry per axiom kind. Built once,
/// read-only thereafter.
static TRANSLATORS: &[&dyn Translator] = &[
    &class_axioms::SubClassOfTranslator,
    &class_axioms::EquivalentClassesTranslator,
    &class_axioms::DisjointClassesTranslator,
    &class_axioms::DisjointUnionTranslator,
    &class_axioms::HasKeyTranslator,
    &property_axioms::SubObjectPropertyOfTranslator,
    &property_axioms::SubPropertyChainOfTranslator,
    &property_axioms::EquivalentObjectPropertiesTranslator,
    &property_axioms::DisjointObjectPropertiesTranslator,
    &property_axioms::ObjectPropertyDomainTranslator,
    &property_axioms::ObjectPropertyRangeTranslator,
    &property_axioms::InverseObjectPropertiesTranslator,
    &property_axioms::FunctionalObjectPropertyTranslator,
    &property_axioms::InverseFunctionalObjectPropertyTranslator,
    &property_axioms::ReflexiveObjectPropertyTranslator,
    &property_axioms::IrreflexiveObjectPropertyTranslator,
    &property_axioms::SymmetricObjectPropertyTranslator,
    &property_axioms::AsymmetricObjectPropertyTranslator,
    &property_axioms::TransitiveObjectPropertyTranslator,
    &property_axioms::SubDataPropertyOfTranslator,
    &property_axioms::EquivalentDataPropertiesTranslator,
    &property_axioms::DisjointDataPropertiesTranslator,
    &property_axioms::DataPropertyDomainTranslator,
    &property_axioms::DataPropertyRangeTranslator,
    &property_axioms::FunctionalDataPropertyTranslator,
    &property_axioms::DatatypeDefinitionTranslator,
    &assertion_axioms::ClassAssertionTranslator,
    &assertion_axioms::ObjectPropertyAssertionTranslator,
    &assertion_axioms::NegativeObjectPropertyAssertionTranslator,
    &assertion_axioms::DataPropertyAssertionTranslator,
    &assertion_axioms::NegativeDataPropertyAssertionTranslator,
    &assertion_axioms::SameIndividualTranslator,
    &assertion_axioms::DifferentIndividualsTranslator,
    &annotation_axioms::AnnotationAssertionTranslator,
    &annotation_axioms::SubAnnotationPropertyOfTranslator,
    &annotation_axioms::AnnotationPropertyDomainTranslator,
    &annotation_axioms::AnnotationPropertyRangeTranslator,
    &declaration::DeclareClassTranslator,
    &declaration::DeclareDatatypeTranslator,
    &declaration::DeclareObjectPropertyTranslator,
    &declaration::DeclareDataPropertyTranslator,
    &declaration::DeclareAnnotationPropertyTranslator,
    &declaration::DeclareNamedIndividualTranslator,
];

/// All registered translators.
pub fn translators() -> &'static [&'static dyn Translator] {
    TRANSLATORS
}

/// Looks the translator for an axiom kind up.
///
/// Failing here is a programming error: the table covers every structural
/// axiom kind.
pub fn translator_for(kind: AxiomKind) -> Result<&'static dyn Translator, TranslationError> {
    static BY_KIND: OnceLock<FxHashMap<AxiomKind, &'static dyn Translator>> = OnceLock::new();
    BY_KIND
        .get_or_init(|| {
            TRANSLATORS
                .iter()
                .map(|translator| (translator.kind(), *translator))
                .collect()
        })
        .get(&kind)
        .copied()
        .ok_or(TranslationError::UnsupportedKind(kind))
}

/// Reads every axiom encoded in the graph, lazily, one translator after the
/// other.
///
/// The read is side-effect-free; each produced element is a complete axiom
/// with its provenance, or a typed error the caller may skip.
pub fn read_axioms<'g>(
    graph: &'g Graph,
    config: &'g ReaderConfig,
) -> impl Iterator<Item = Result<Translated<AnnotatedAxiom>, TranslationError>> + 'g {
    let local = LocalGraph::new(graph, config);
    TRANSLATORS
        .iter()
        .flat_map(move |translator| translator.axioms(local))
}

/// Writes one axiom into the graph.
pub fn write_axiom(axiom: &AnnotatedAxiom, graph: &mut Graph) -> Result<(), TranslationError> {
    let translator = translator_for(axiom.axiom().kind())?;
    let mut writer = GraphWriter::new(graph);
    translator.write(axiom, &mut writer)
}

/// Writes a sequence of axioms into the graph.
pub fn write_axioms<'a>(
    axioms: impl IntoIterator<Item = &'a AnnotatedAxiom>,
    graph: &mut Graph,
) -> Result<(), TranslationError> {
    let mut writer = GraphWriter::new(graph);
    for axiom in axioms {
        translator_for(axiom.axiom().kind())?.write(axiom, &mut writer)?;
    }
    Ok(())
}

/// Finishes a read: attaches the statement's annotations and the statement
/// itself to the provenance and wraps the axiom.
pub(crate) fn axiom_with_annotations(
    graph: LocalGraph<'_>,
    statement: TripleRef<'_>,
    provenance: Translated<()>,
    axiom: Axiom,
) -> Result<Translated<AnnotatedAxiom>, TranslationError> {
    let (provenance, annotations) = provenance.append(graph.statement_annotations(statement)?);
    Ok(provenance
        .with_source(statement)
        .map(|()| AnnotatedAxiom::new(axiom, annotations)))
}

/// The write half of an axiom kind whose statement shape the given axiom
/// does not have. Dispatch goes through [`translator_for`], so reaching this
/// is a programming error surfaced as [`TranslationError::UnsupportedKind`].
pub(crate) fn wrong_kind(axiom: &AnnotatedAxiom) -> TranslationError {
    TranslationError::UnsupportedKind(axiom.axiom().kind())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_translator() {
        for kind in AxiomKind::ALL {
            let translator = translator_for(*kind).unwrap();
            assert_eq!(translator.kind(), *kind);
        }
    }

    #[test]
    fn registry_has_no_duplicate_kinds() {
        let mut seen = FxHashMap::default();
        for translator in translators() {
            assert!(
                seen.insert(translator.kind(), ()).is_none(),
                "duplicate translator for {:?}",
                translator.kind()
            );
        }
        assert_eq!(seen.len(), AxiomKind::ALL.len());
    }
}
