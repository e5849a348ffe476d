//! Serialization Tests
//!
//! Containers encode exactly like their raw value, and decoding runs the
//! gateway again. Metadata is never written; it is recomputed on decode.

use crate::test_utils::{words, Person, ShortPerson, TagSet};
use proptest::prelude::*;
use semantic_type::catalog::{
    CaselessString, Cents, EmailAddress, EmailAddressExt, Identifier, NonEmptyVec,
    NonEmptyVecExt, Percentage,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Invoice {
    id: Identifier,
    contact: EmailAddress,
    amounts: NonEmptyVec<i64>,
    discount: Percentage,
}

fn sample_invoice() -> Invoice {
    Invoice {
        id: Identifier::create("inv-2024.07".to_string()).unwrap(),
        contact: EmailAddress::create("Billing@Example.com".to_string()).unwrap(),
        amounts: NonEmptyVec::<i64>::create(vec![1200, 350]).unwrap(),
        discount: Percentage::create(12.5).unwrap(),
    }
}

// ============================================================================
// Transparent encoding
// ============================================================================

#[test]
fn json_matches_raw_value() {
    let email = EmailAddress::create("joe@gmail.com".to_string()).unwrap();
    assert_eq!(serde_json::to_string(&email).unwrap(), "\"joe@gmail.com\"");

    let tags = TagSet::create(words(&["b", "a"])).unwrap();
    assert_eq!(serde_json::to_string(&tags).unwrap(), r#"["a","b"]"#);
}

#[test]
fn binary_formats_match_raw_value() {
    let person = ShortPerson::create(Person::new("Ann")).unwrap();
    assert_eq!(
        bincode::serialize(&person).unwrap(),
        bincode::serialize(&Person::new("Ann")).unwrap()
    );
    assert_eq!(
        rmp_serde::to_vec(&Cents::new(-99)).unwrap(),
        rmp_serde::to_vec(&-99i64).unwrap()
    );
}

// ============================================================================
// Decoding re-runs the gateway
// ============================================================================

#[test]
fn decoding_normalizes() {
    let name: CaselessString = serde_json::from_str("\"HeLLo\"").unwrap();
    assert_eq!(name.raw_value(), "hello");

    let tags: TagSet = serde_json::from_str(r#"["c","a","c"]"#).unwrap();
    assert_eq!(tags.raw_value(), &words(&["a", "c"]));
    assert_eq!(*tags.metadata(), 2);
}

#[test]
fn decoding_recomputes_metadata() {
    let email: EmailAddress = serde_json::from_str("\"Joe@Gmail.com\"").unwrap();
    assert_eq!(email.user(), "joe");
    assert_eq!(email.host(), "gmail.com");

    let list: NonEmptyVec<i64> = serde_json::from_str("[4, 5, 6]").unwrap();
    assert_eq!((*list.first(), *list.last()), (4, 6));
}

#[test]
fn decoding_rejection_names_contract() {
    let err = serde_json::from_str::<EmailAddress>("\"@gmail.com\"").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("EmailAddressSpec"), "{}", message);
    assert!(message.contains("@gmail.com"), "{}", message);

    let err = serde_json::from_str::<NonEmptyVec<i64>>("[]").unwrap_err();
    assert!(err.to_string().contains("array is empty"));

    let bytes = rmp_serde::to_vec(&Person::new("Joseph")).unwrap();
    assert!(rmp_serde::from_slice::<ShortPerson>(&bytes).is_err());
}

#[test]
fn rejection_inside_struct_fails_whole_decode() {
    let json = r#"{"id":"-bad","contact":"a@b","amounts":[1],"discount":1.0}"#;
    let err = serde_json::from_str::<Invoice>(json).unwrap_err();
    assert!(err.to_string().contains("IdentifierSpec"));
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn struct_round_trips_through_every_format() {
    let invoice = sample_invoice();

    let json = serde_json::to_string(&invoice).unwrap();
    assert_eq!(serde_json::from_str::<Invoice>(&json).unwrap(), invoice);

    let bin = bincode::serialize(&invoice).unwrap();
    assert_eq!(bincode::deserialize::<Invoice>(&bin).unwrap(), invoice);

    let packed = rmp_serde::to_vec(&invoice).unwrap();
    assert_eq!(rmp_serde::from_slice::<Invoice>(&packed).unwrap(), invoice);
}

proptest! {
    #[test]
    fn caseless_round_trip(raw in "[a-zA-Z ]{0,24}") {
        let name = CaselessString::new(raw);
        let json = serde_json::to_string(&name).unwrap();
        prop_assert_eq!(serde_json::from_str::<CaselessString>(&json).unwrap(), name);
    }

    #[test]
    fn non_empty_round_trip(raw in prop::collection::vec(any::<i64>(), 1..12)) {
        let list = NonEmptyVec::<i64>::create(raw).unwrap();
        let bytes = bincode::serialize(&list).unwrap();
        let decoded: NonEmptyVec<i64> = bincode::deserialize(&bytes).unwrap();
        prop_assert_eq!(decoded.metadata(), list.metadata());
        prop_assert_eq!(decoded, list);
    }
}
