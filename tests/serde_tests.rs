#![cfg(feature = "serde")]

//! Integration tests for serde support in primeset.

use primeset::PrimeSet;
use rstest::rstest;

#[rstest]
fn test_prime_set_json_roundtrip() {
    let set: PrimeSet = [13, 3, 7, 5].into_iter().collect();
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, "[3,5,7,13]");

    let restored: PrimeSet = serde_json::from_str(&json).unwrap();
    assert_eq!(set, restored);
}

#[rstest]
fn test_empty_prime_set_json_roundtrip() {
    let set = PrimeSet::new();
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, "[]");

    let restored: PrimeSet = serde_json::from_str(&json).unwrap();
    assert!(restored.is_empty());
}

#[rstest]
fn test_deserialize_skips_non_primes_and_duplicates() {
    let set: PrimeSet = serde_json::from_str("[9, 7, 2, 3, 7, -5, 1]").unwrap();
    assert_eq!(set.to_string(), "{3,7}");
    assert_eq!(set.num_of_elements(), 2);
}

#[rstest]
fn test_deserialize_rejects_non_sequence() {
    assert!(serde_json::from_str::<PrimeSet>("{\"a\": 3}").is_err());
    assert!(serde_json::from_str::<PrimeSet>("[3, \"five\"]").is_err());
}
