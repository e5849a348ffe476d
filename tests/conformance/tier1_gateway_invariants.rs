//! Gateway Invariant Tests
//!
//! A container exists only as the output of a successful gateway call, and
//! a failed call hands back the gateway's own error.

use crate::test_utils::{words, Person, ShortNameError, ShortPerson, TagSet, TagSetSpec, MAX_TAGS};
use proptest::prelude::*;
use semantic_type::catalog::{
    CaselessString, FixedLengthWords, Identifier, IdentifierError, NonEmptyVec, NonEmptyVecError,
};
use semantic_type::{GatewaySpec, Rejected};
use std::error::Error as _;

// ============================================================================
// create mirrors the gateway
// ============================================================================

#[test]
fn create_returns_normalized_value() {
    let cases = [
        ("HeLlo, WorLD.", "hello, world."),
        ("Why would JERRY bring anything?", "why would jerry bring anything?"),
        ("Yo-Yo Ma", "yo-yo ma"),
    ];
    for (input, expected) in cases {
        assert_eq!(CaselessString::new(input.to_string()).raw_value(), expected);
    }
}

#[test]
fn create_stores_metadata_from_same_call() {
    let tags = TagSet::create(words(&["b", "a", "b"])).unwrap();
    assert_eq!(tags.raw_value(), &words(&["a", "b"]));
    assert_eq!(*tags.metadata(), 2);
}

#[test]
fn create_returns_gateway_error_verbatim() {
    let err = FixedLengthWords::<5>::create(words(&["water", "melon", "ab"])).unwrap_err();
    assert_eq!(err.excluded_words, words(&["ab"]));

    let err = NonEmptyVec::<i64>::create(Vec::new()).unwrap_err();
    assert_eq!(err, NonEmptyVecError::ArrayIsEmpty);
}

#[test]
fn create_rejects_after_normalization() {
    let too_many: Vec<String> = (0..=MAX_TAGS).map(|i| i.to_string()).collect();
    assert!(TagSet::create(too_many.clone()).is_err());

    // Duplicates collapse before the size check.
    let mut duplicated = too_many[..MAX_TAGS].to_vec();
    duplicated.push("0".to_string());
    assert_eq!(*TagSet::create(duplicated).unwrap().metadata(), MAX_TAGS);
}

// ============================================================================
// try_new
// ============================================================================

#[test]
fn try_new_tags_error_with_contract_name() {
    let err = ShortPerson::try_new(Person::new("Joseph")).unwrap_err();
    assert_eq!(err.spec(), "ShortPersonSpec");
    assert!(err.to_string().contains("ShortPersonSpec"));
    assert_eq!(
        err.source().unwrap().to_string(),
        "name is too long: Joseph"
    );
    assert_eq!(
        err.into_inner(),
        ShortNameError::NameTooLong {
            name: "Joseph".to_string()
        }
    );
}

#[test]
fn try_new_composes_with_question_mark() {
    fn parse_id(raw: &str) -> Result<Identifier, Box<dyn std::error::Error>> {
        Ok(Identifier::try_new(raw.to_string())?)
    }

    assert!(parse_id("job-1").is_ok());
    let err = parse_id(".hidden").unwrap_err();
    let rejected = err
        .downcast_ref::<Rejected<IdentifierError>>()
        .unwrap();
    assert_eq!(
        rejected.get_ref(),
        &IdentifierError::InvalidStart { character: '.' }
    );
}

// ============================================================================
// Property: create succeeds iff the gateway does
// ============================================================================

proptest! {
    #[test]
    fn create_agrees_with_gateway(tags in prop::collection::vec("[a-d]{1,2}", 0..16)) {
        let direct = <TagSetSpec as GatewaySpec>::gateway(tags.clone());
        let created = TagSet::create(tags);
        match (direct, created) {
            (Ok(output), Ok(container)) => {
                prop_assert_eq!(&output.raw_value, container.raw_value());
                prop_assert_eq!(&output.metadata, container.metadata());
            }
            (Err(expected), Err(actual)) => prop_assert_eq!(expected, actual),
            _ => prop_assert!(false, "create disagreed with the gateway"),
        }
    }

    #[test]
    fn try_map_identity_is_idempotent(tags in prop::collection::vec("[a-z]{1,3}", 0..8)) {
        let tags = TagSet::create(tags).unwrap();
        let same = tags.try_map(|raw| raw).unwrap();
        prop_assert_eq!(same, tags);
    }
}
