//! OWL literals with value-aware equality.
//!
//! A literal is a lexical form, an optional language tag and a datatype.
//! Unlike plain RDF literals, equality and hashing look through the lexical
//! form to the parsed value when the datatype is a numeric or boolean
//! built-in: `"1"^^xsd:integer` and `"01"^^xsd:integer` are the same literal.
//! A lexical form that does not parse for its declared datatype is still a
//! valid literal (several W3C conformance tests rely on ill-typed literals);
//! such literals fall back to comparison by raw lexical form.

use crate::datatype::BuiltinDatatype;
use crate::entity::Datatype;
use crate::error::{IncompatibleLanguageTagError, LexicalParseError, LiteralError};
use oxilangtag::LanguageTag;
use oxrdf::vocab::{rdf, xsd};
use oxrdf::LiteralRef;
use oxsdatatypes::{Boolean, Double, Float, Integer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// An OWL literal value.
#[derive(Debug, Clone)]
pub struct Literal {
    lexical: String,
    language: Option<String>,
    datatype: Datatype,
}

impl Literal {
    /// Builds a literal from a lexical form, an optional language tag and an
    /// optional datatype.
    ///
    /// A non-empty language tag forces the datatype to `rdf:langString`;
    /// combining it with any other explicit datatype except `rdf:PlainLiteral`
    /// is a construction error. Without a language tag the datatype defaults
    /// to `xsd:string`. Language tags are validated against BCP47 and
    /// lowercased.
    pub fn new(
        lexical: impl Into<String>,
        language: Option<&str>,
        datatype: Option<Datatype>,
    ) -> Result<Self, LiteralError> {
        let lexical = lexical.into();
        match language.filter(|l| !l.is_empty()) {
            Some(language) => {
                if let Some(datatype) = datatype {
                    let iri = datatype.iri().as_ref();
                    if iri != rdf::LANG_STRING && iri != crate::vocab::rdf_extra::PLAIN_LITERAL {
                        return Err(IncompatibleLanguageTagError::new(
                            datatype.into_inner(),
                            language,
                        )
                        .into());
                    }
                }
                let mut language = language.to_owned();
                language.make_ascii_lowercase();
                let language = LanguageTag::parse(language)
                    .map_err(LiteralError::LanguageTag)?
                    .into_inner();
                Ok(Self {
                    lexical,
                    language: Some(language),
                    datatype: Datatype::new(rdf::LANG_STRING.into_owned()),
                })
            }
            None => Ok(Self {
                lexical,
                language: None,
                datatype: datatype.unwrap_or_else(|| Datatype::new(xsd::STRING.into_owned())),
            }),
        }
    }

    /// Builds a simple `xsd:string` literal.
    #[inline]
    pub fn simple(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            language: None,
            datatype: Datatype::new(xsd::STRING.into_owned()),
        }
    }

    /// Builds a typed literal.
    ///
    /// The lexical form is not checked against the datatype.
    #[inline]
    pub fn typed(lexical: impl Into<String>, datatype: impl Into<Datatype>) -> Self {
        Self {
            lexical: lexical.into(),
            language: None,
            datatype: datatype.into(),
        }
    }

    /// Builds a language-tagged string literal.
    #[inline]
    pub fn language_tagged(
        lexical: impl Into<String>,
        language: impl AsRef<str>,
    ) -> Result<Self, LiteralError> {
        Self::new(lexical, Some(language.as_ref()), None)
    }

    /// The lexical form.
    #[inline]
    pub fn lexical_form(&self) -> &str {
        &self.lexical
    }

    /// The language tag, if any. Always lowercase.
    #[inline]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// The datatype. `rdf:langString` for language-tagged literals.
    #[inline]
    pub fn datatype(&self) -> &Datatype {
        &self.datatype
    }

    /// The built-in datatype, when the datatype is one.
    #[inline]
    pub fn builtin_datatype(&self) -> Option<BuiltinDatatype> {
        self.datatype.as_builtin()
    }

    /// Parses the lexical form as an `xsd:boolean` value.
    pub fn as_boolean(&self) -> Result<bool, LexicalParseError> {
        self.lexical
            .parse::<Boolean>()
            .map(bool::from)
            .map_err(|_| LexicalParseError::new(&*self.lexical, "xsd:boolean"))
    }

    /// Parses the lexical form as an `xsd:integer` value.
    pub fn as_integer(&self) -> Result<i64, LexicalParseError> {
        self.lexical
            .parse::<Integer>()
            .map(i64::from)
            .map_err(|_| LexicalParseError::new(&*self.lexical, "xsd:integer"))
    }

    /// Parses the lexical form as an `xsd:double` value.
    pub fn as_double(&self) -> Result<f64, LexicalParseError> {
        self.lexical
            .parse::<Double>()
            .map(f64::from)
            .map_err(|_| LexicalParseError::new(&*self.lexical, "xsd:double"))
    }

    /// Parses the lexical form as an `xsd:float` value.
    pub fn as_float(&self) -> Result<f32, LexicalParseError> {
        self.lexical
            .parse::<Float>()
            .map(f32::from)
            .map_err(|_| LexicalParseError::new(&*self.lexical, "xsd:float"))
    }

    /// The value this literal compares and hashes by: the parsed value for
    /// valid numeric/boolean lexical forms, the raw lexical form otherwise.
    fn value(&self) -> LiteralValue<'_> {
        if let Some(builtin) = self.builtin_datatype() {
            if builtin.is_integer() {
                if let Ok(i) = self.as_integer() {
                    return LiteralValue::Integer(i);
                }
            } else if builtin.is_double() {
                if let Ok(d) = self.as_double() {
                    return LiteralValue::Double(d.to_bits());
                }
            } else if builtin.is_float() {
                if let Ok(f) = self.as_float() {
                    return LiteralValue::Float(f.to_bits());
                }
            } else if builtin.is_boolean() {
                if let Ok(b) = self.as_boolean() {
                    return LiteralValue::Boolean(b);
                }
            }
        }
        LiteralValue::Lexical(&self.lexical)
    }

    /// Converts to the plain RDF literal carrying the same lexical form.
    pub fn to_rdf(&self) -> oxrdf::Literal {
        match &self.language {
            Some(language) => oxrdf::Literal::new_language_tagged_literal_unchecked(
                &*self.lexical,
                language.as_str(),
            ),
            None => oxrdf::Literal::new_typed_literal(&*self.lexical, self.datatype.iri().clone()),
        }
    }

    /// Builds from a plain RDF literal. Never fails: RDF literals already
    /// satisfy the language tag invariant.
    pub fn from_rdf(literal: LiteralRef<'_>) -> Self {
        match literal.language() {
            Some(language) => Self {
                lexical: literal.value().to_owned(),
                language: Some(language.to_owned()),
                datatype: Datatype::new(rdf::LANG_STRING.into_owned()),
            },
            None => Self {
                lexical: literal.value().to_owned(),
                language: None,
                datatype: Datatype::new(literal.datatype().into_owned()),
            },
        }
    }
}

/// The derived comparison value. Floating point values compare by bit
/// pattern so that equality stays reflexive for NaN.
#[derive(PartialEq, Eq, Hash)]
enum LiteralValue<'a> {
    Boolean(bool),
    Integer(i64),
    Double(u64),
    Float(u32),
    Lexical(&'a str),
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.datatype == other.datatype
            && self.language == other.language
            && self.value() == other.value()
    }
}

impl Eq for Literal {}

impl Hash for Literal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.datatype.hash(state);
        self.language.hash(state);
        self.value().hash(state);
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_rdf())
    }
}

impl From<oxrdf::Literal> for Literal {
    fn from(literal: oxrdf::Literal) -> Self {
        Self::from_rdf(literal.as_ref())
    }
}

impl From<Literal> for oxrdf::Literal {
    fn from(literal: Literal) -> Self {
        literal.to_rdf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(literal: &Literal) -> u64 {
        let mut hasher = DefaultHasher::new();
        literal.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn language_tag_forces_lang_string() {
        let literal = Literal::new("abc", Some("en"), None).unwrap();
        assert_eq!(literal.language(), Some("en"));
        assert_eq!(literal.datatype().iri().as_ref(), rdf::LANG_STRING);
    }

    #[test]
    fn language_tag_rejects_other_datatypes() {
        let result = Literal::new(
            "abc",
            Some("en"),
            Some(Datatype::new(xsd::INTEGER.into_owned())),
        );
        assert!(matches!(
            result,
            Err(LiteralError::IncompatibleLanguageTag(_))
        ));
    }

    #[test]
    fn numeric_literals_compare_by_value() {
        let a = Literal::typed("1", Datatype::new(xsd::INTEGER.into_owned()));
        let b = Literal::typed("01", Datatype::new(xsd::INTEGER.into_owned()));
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn ill_typed_literals_compare_by_lexical_form() {
        let a = Literal::typed("abc", Datatype::new(xsd::INTEGER.into_owned()));
        let b = Literal::typed("abc", Datatype::new(xsd::INTEGER.into_owned()));
        let c = Literal::typed("abd", Datatype::new(xsd::INTEGER.into_owned()));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.as_integer().is_err());
    }

    #[test]
    fn boolean_accepts_xsd_lexical_forms() {
        let literal = Literal::typed("1", Datatype::new(xsd::BOOLEAN.into_owned()));
        assert_eq!(literal.as_boolean().unwrap(), true);
    }
}
