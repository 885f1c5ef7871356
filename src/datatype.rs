//! The closed enumeration of OWL 2 built-in datatypes.

use crate::vocab::{owl, rdf_extra};
use oxrdf::vocab::{rdf, rdfs, xsd};
use oxrdf::{NamedNodeRef, TermRef};

/// One of the [OWL 2 built-in datatypes](https://www.w3.org/TR/owl2-syntax/#Datatype_Maps).
///
/// Built-in datatypes require no declaration in the ontology. There is one
/// shared member per datatype; equality is equality of the datatype IRI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinDatatype {
    RdfsLiteral,
    RdfLangString,
    RdfPlainLiteral,
    RdfXmlLiteral,
    OwlReal,
    OwlRational,
    XsdString,
    XsdNormalizedString,
    XsdToken,
    XsdLanguage,
    XsdName,
    XsdNcName,
    XsdNmToken,
    XsdBoolean,
    XsdDecimal,
    XsdInteger,
    XsdNonNegativeInteger,
    XsdNonPositiveInteger,
    XsdPositiveInteger,
    XsdNegativeInteger,
    XsdLong,
    XsdInt,
    XsdShort,
    XsdByte,
    XsdUnsignedLong,
    XsdUnsignedInt,
    XsdUnsignedShort,
    XsdUnsignedByte,
    XsdDouble,
    XsdFloat,
    XsdHexBinary,
    XsdBase64Binary,
    XsdAnyUri,
    XsdDateTime,
    XsdDateTimeStamp,
}

impl BuiltinDatatype {
    /// All built-in datatypes.
    pub const ALL: &'static [Self] = &[
        Self::RdfsLiteral,
        Self::RdfLangString,
        Self::RdfPlainLiteral,
        Self::RdfXmlLiteral,
        Self::OwlReal,
        Self::OwlRational,
        Self::XsdString,
        Self::XsdNormalizedString,
        Self::XsdToken,
        Self::XsdLanguage,
        Self::XsdName,
        Self::XsdNcName,
        Self::XsdNmToken,
        Self::XsdBoolean,
        Self::XsdDecimal,
        Self::XsdInteger,
        Self::XsdNonNegativeInteger,
        Self::XsdNonPositiveInteger,
        Self::XsdPositiveInteger,
        Self::XsdNegativeInteger,
        Self::XsdLong,
        Self::XsdInt,
        Self::XsdShort,
        Self::XsdByte,
        Self::XsdUnsignedLong,
        Self::XsdUnsignedInt,
        Self::XsdUnsignedShort,
        Self::XsdUnsignedByte,
        Self::XsdDouble,
        Self::XsdFloat,
        Self::XsdHexBinary,
        Self::XsdBase64Binary,
        Self::XsdAnyUri,
        Self::XsdDateTime,
        Self::XsdDateTimeStamp,
    ];

    /// The IRI of this datatype.
    pub const fn iri(self) -> NamedNodeRef<'static> {
        match self {
            Self::RdfsLiteral => rdfs::LITERAL,
            Self::RdfLangString => rdf::LANG_STRING,
            Self::RdfPlainLiteral => rdf_extra::PLAIN_LITERAL,
            Self::RdfXmlLiteral => rdf::XML_LITERAL,
            Self::OwlReal => owl::REAL,
            Self::OwlRational => owl::RATIONAL,
            Self::XsdString => xsd::STRING,
            Self::XsdNormalizedString => xsd::NORMALIZED_STRING,
            Self::XsdToken => xsd::TOKEN,
            Self::XsdLanguage => xsd::LANGUAGE,
            Self::XsdName => xsd::NAME,
            Self::XsdNcName => xsd::NC_NAME,
            Self::XsdNmToken => xsd::NMTOKEN,
            Self::XsdBoolean => xsd::BOOLEAN,
            Self::XsdDecimal => xsd::DECIMAL,
            Self::XsdInteger => xsd::INTEGER,
            Self::XsdNonNegativeInteger => xsd::NON_NEGATIVE_INTEGER,
            Self::XsdNonPositiveInteger => xsd::NON_POSITIVE_INTEGER,
            Self::XsdPositiveInteger => xsd::POSITIVE_INTEGER,
            Self::XsdNegativeInteger => xsd::NEGATIVE_INTEGER,
            Self::XsdLong => xsd::LONG,
            Self::XsdInt => xsd::INT,
            Self::XsdShort => xsd::SHORT,
            Self::XsdByte => xsd::BYTE,
            Self::XsdUnsignedLong => xsd::UNSIGNED_LONG,
            Self::XsdUnsignedInt => xsd::UNSIGNED_INT,
            Self::XsdUnsignedShort => xsd::UNSIGNED_SHORT,
            Self::XsdUnsignedByte => xsd::UNSIGNED_BYTE,
            Self::XsdDouble => xsd::DOUBLE,
            Self::XsdFloat => xsd::FLOAT,
            Self::XsdHexBinary => xsd::HEX_BINARY,
            Self::XsdBase64Binary => xsd::BASE_64_BINARY,
            Self::XsdAnyUri => xsd::ANY_URI,
            Self::XsdDateTime => xsd::DATE_TIME,
            Self::XsdDateTimeStamp => xsd::DATE_TIME_STAMP,
        }
    }

    /// Looks a built-in datatype up by IRI.
    pub fn from_iri(iri: NamedNodeRef<'_>) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.iri() == iri)
    }

    /// Returns true if the term is the IRI of a built-in datatype.
    pub fn is_builtin_iri(term: TermRef<'_>) -> bool {
        match term {
            TermRef::NamedNode(n) => Self::from_iri(n).is_some(),
            _ => false,
        }
    }

    /// Returns true if this is exactly `xsd:integer`.
    pub fn is_integer(self) -> bool {
        self == Self::XsdInteger
    }

    /// Returns true if this is exactly `xsd:boolean`.
    pub fn is_boolean(self) -> bool {
        self == Self::XsdBoolean
    }

    /// Returns true if this is exactly `xsd:double`.
    pub fn is_double(self) -> bool {
        self == Self::XsdDouble
    }

    /// Returns true if this is exactly `xsd:float`.
    pub fn is_float(self) -> bool {
        self == Self::XsdFloat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_iri_round_trips_every_member() {
        for datatype in BuiltinDatatype::ALL {
            assert_eq!(BuiltinDatatype::from_iri(datatype.iri()), Some(*datatype));
        }
    }

    #[test]
    fn unknown_iri_is_not_builtin() {
        let custom = oxrdf::NamedNode::new_unchecked("http://example.org/myDatatype");
        assert_eq!(BuiltinDatatype::from_iri(custom.as_ref()), None);
    }
}
