//! End-to-End Scenarios
//!
//! Small stories that pull the pieces together: build a value, read its
//! metadata, evolve it, and hit the rejection paths.

use crate::test_utils::words;
use semantic_type::catalog::{
    CaselessString, EmailAddress, EmailAddressExt, Ends, FixedLengthWords, InvalidEmail,
    NonEmptyVec, NonEmptyVecError, NonEmptyVecExt, Seconds, WrongWordLength,
};
use semantic_type::FromLiteral;

// ============================================================================
// Lower-casing strings
// ============================================================================

#[test]
fn caseless_string_lowercases() {
    let hello = CaselessString::create("HeLLo".to_string()).unwrap();
    assert_eq!(hello.raw_value(), "hello");
    assert_eq!(hello, CaselessString::from_literal("HELLO"));
}

#[test]
fn caseless_string_stays_lowercase_after_edits() {
    let mut hello = CaselessString::from_literal("hello");
    hello.mutating_map(|raw| raw.push_str(", WORLD"));
    assert_eq!(hello.raw_value(), "hello, world");

    let shout = hello.map(|raw| raw.to_uppercase());
    assert_eq!(shout, hello);
}

// ============================================================================
// Non-empty arrays with ends
// ============================================================================

#[test]
fn non_empty_vec_scenario() {
    assert_eq!(
        NonEmptyVec::<i32>::create(vec![]).unwrap_err(),
        NonEmptyVecError::ArrayIsEmpty
    );

    let list = NonEmptyVec::<i32>::create(vec![1, 2, 3]).unwrap();
    assert_eq!(list.metadata(), &Ends { first: 1, last: 3 });
    assert_eq!((*list.first(), *list.last()), (1, 3));
}

#[test]
fn non_empty_vec_cannot_be_drained() {
    let mut list = NonEmptyVec::<i32>::create(vec![7]).unwrap();
    assert_eq!(
        list.mutating_try_map(|raw| raw.clear()),
        Err(NonEmptyVecError::ArrayIsEmpty)
    );
    assert_eq!(list.raw_value(), &vec![7]);

    list.mutating_try_map(|raw| raw.push(8)).unwrap();
    assert_eq!(*list.last(), 8);
}

// ============================================================================
// Email addresses
// ============================================================================

#[test]
fn email_scenario() {
    let joe = EmailAddress::create("joe@gmail.com".to_string()).unwrap();
    assert_eq!(joe.user(), "joe");
    assert_eq!(joe.host(), "gmail.com");

    assert_eq!(
        EmailAddress::create("@gmail.com".to_string()).unwrap_err(),
        InvalidEmail {
            candidate: "@gmail.com".to_string()
        }
    );
}

#[test]
fn email_change_of_host() {
    let joe = EmailAddress::create("joe@gmail.com".to_string()).unwrap();
    let moved = joe
        .try_map(|raw| raw.replace("gmail.com", "Example.org"))
        .unwrap();
    assert_eq!(moved.raw_value(), "joe@example.org");
    assert_eq!(moved.host(), "example.org");
    assert_eq!(joe.host(), "gmail.com");
}

// ============================================================================
// Seconds arithmetic
// ============================================================================

#[test]
fn seconds_scenario() {
    assert_eq!(Seconds::new(5) + Seconds::new(10), Seconds::new(15));
    assert_eq!(Seconds::new(5) + 7, Seconds::new(12));
    assert_eq!(Seconds::new(5) * 3, Seconds::new(15));
}

#[test]
fn seconds_accumulate_laps() {
    let laps = [Seconds::new(61), Seconds::new(59), Seconds::new(60)];
    let total: Seconds = laps.iter().copied().sum();
    assert_eq!(total, Seconds::new(180));
    assert_eq!(total / 60, Seconds::new(3));
    assert!(laps.iter().max() == Some(&Seconds::new(61)));
}

// ============================================================================
// Fixed-length words
// ============================================================================

#[test]
fn fixed_length_words_reports_excluded_words() {
    let err = FixedLengthWords::<5>::create(words(&["water", "melon", "ab"])).unwrap_err();
    assert_eq!(
        err,
        WrongWordLength {
            length: 5,
            excluded_words: words(&["ab"]),
        }
    );
    assert_eq!(err.to_string(), "words without exactly 5 characters: [\"ab\"]");
}

#[test]
fn fixed_length_words_growth() {
    let mut list = FixedLengthWords::<5>::create(words(&["water"])).unwrap();
    list.mutating_try_map(|raw| raw.push("melon".to_string())).unwrap();
    assert!(list
        .mutating_try_map(|raw| raw.push("kiwi".to_string()))
        .is_err());
    assert_eq!(list.raw_value(), &words(&["water", "melon"]));
}
