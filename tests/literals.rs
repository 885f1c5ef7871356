//! Literal construction, equality and hashing behavior.

use oxowlrdf::{Datatype, Literal, LiteralError};
use oxrdf::vocab::{rdf, xsd};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn integer() -> Datatype {
    Datatype::new(xsd::INTEGER.into_owned())
}

fn hash_of(literal: &Literal) -> u64 {
    let mut hasher = DefaultHasher::new();
    literal.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn plain_literal_defaults_to_string() {
    let literal = Literal::new("abc", None, None).unwrap();
    assert_eq!(literal.datatype().iri().as_ref(), xsd::STRING);
    assert_eq!(literal.language(), None);
}

#[test]
fn language_tagged_literal_gets_lang_string() {
    let literal = Literal::new("abc", Some("en"), None).unwrap();
    assert_eq!(literal.datatype().iri().as_ref(), rdf::LANG_STRING);
    assert_eq!(literal.language(), Some("en"));
}

#[test]
fn language_tags_are_lowercased() {
    let literal = Literal::new("abc", Some("EN-US"), None).unwrap();
    assert_eq!(literal.language(), Some("en-us"));
}

#[test]
fn language_tag_with_incompatible_datatype_is_rejected() {
    let result = Literal::new("abc", Some("en"), Some(integer()));
    assert!(matches!(
        result,
        Err(LiteralError::IncompatibleLanguageTag(_))
    ));
}

#[test]
fn invalid_language_tag_is_rejected() {
    assert!(matches!(
        Literal::new("abc", Some("not a tag"), None),
        Err(LiteralError::LanguageTag(_))
    ));
}

#[test]
fn numeric_literals_hash_by_parsed_value() {
    let a = Literal::typed("1", integer());
    let b = Literal::typed("01", integer());
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn numeric_literals_with_different_values_differ() {
    assert_ne!(Literal::typed("1", integer()), Literal::typed("2", integer()));
}

#[test]
fn ill_typed_literal_is_constructible() {
    let literal = Literal::typed("abc", integer());
    assert!(literal.as_integer().is_err());
    assert_eq!(literal.lexical_form(), "abc");
}

#[test]
fn ill_typed_literals_compare_by_raw_form() {
    let a = Literal::typed("abc", integer());
    let b = Literal::typed("abc", integer());
    let c = Literal::typed("abd", integer());
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_ne!(a, c);
}

#[test]
fn valid_and_invalid_forms_are_unequal() {
    assert_ne!(Literal::typed("1", integer()), Literal::typed("abc", integer()));
}

#[test]
fn double_special_values_parse() {
    let datatype = Datatype::new(xsd::DOUBLE.into_owned());
    assert_eq!(
        Literal::typed("INF", datatype.clone()).as_double().unwrap(),
        f64::INFINITY
    );
    let nan = Literal::typed("NaN", datatype.clone());
    assert!(nan.as_double().unwrap().is_nan());
    // NaN still equals itself as a literal
    assert_eq!(nan, Literal::typed("NaN", datatype));
}

#[test]
fn boolean_accepts_numeric_forms() {
    let datatype = Datatype::new(xsd::BOOLEAN.into_owned());
    assert!(Literal::typed("1", datatype.clone()).as_boolean().unwrap());
    assert!(!Literal::typed("0", datatype.clone()).as_boolean().unwrap());
    assert_eq!(
        Literal::typed("1", datatype.clone()),
        Literal::typed("true", datatype)
    );
}

#[test]
fn string_literals_keep_exact_form() {
    assert_ne!(Literal::simple("a"), Literal::simple("a "));
}

#[test]
fn rdf_conversion_round_trips() {
    let original = Literal::new("chien", Some("fr"), None).unwrap();
    let rdf_literal = original.to_rdf();
    assert_eq!(Literal::from_rdf(rdf_literal.as_ref()), original);

    let typed = Literal::typed("42", integer());
    assert_eq!(Literal::from_rdf(typed.to_rdf().as_ref()), typed);
}
