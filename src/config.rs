//! Reader configuration.

/// Options recognized by the graph → axiom read direction.
///
/// A graph that carries no configuration is read with the fixed default:
/// every option off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Whether triples built from annotation properties are read as
    /// AnnotationAssertion axioms.
    pub load_annotation_axioms: bool,
    /// Whether annotation sets attached to statements are dropped, producing
    /// unannotated axioms.
    pub ignore_axiom_annotations: bool,
    /// Whether pairwise triples of a symmetric n-ary relation are kept as
    /// separate two-operand axioms instead of being merged by transitive
    /// closure.
    pub allow_duplicates_in_nary_axioms: bool,
}

impl ReaderConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables reading annotation assertion axioms.
    #[must_use]
    pub fn load_annotation_axioms(mut self, value: bool) -> Self {
        self.load_annotation_axioms = value;
        self
    }

    /// Enables dropping axiom annotations on read.
    #[must_use]
    pub fn ignore_axiom_annotations(mut self, value: bool) -> Self {
        self.ignore_axiom_annotations = value;
        self
    }

    /// Disables the transitive n-ary merge.
    #[must_use]
    pub fn allow_duplicates_in_nary_axioms(mut self, value: bool) -> Self {
        self.allow_duplicates_in_nary_axioms = value;
        self
    }
}
