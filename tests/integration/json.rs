//! Containers as serde struct fields.

use super::common::{sample_profile, Address, Profile};
use optres::{as_crate_error, Error, Optional, Outcome};

#[test]
fn test_profile_round_trip() {
    let profile = sample_profile();
    let encoded = serde_json::to_string(&profile).unwrap();
    assert_eq!(
        encoded,
        r#"{"name":"ada","nickname":"countess","age":36,"address":{"city":"London","zip":null}}"#
    );

    let decoded: Profile = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, profile);
}

#[test]
fn test_empty_fields_encode_as_null_or_are_skipped() {
    let profile = Profile {
        name: "grace".to_string(),
        nickname: Optional::none(),
        age: Outcome::failure("unknown"),
        address: Optional::none(),
    };

    let encoded = serde_json::to_string(&profile).unwrap();
    assert_eq!(encoded, r#"{"name":"grace","age":null,"address":null}"#);
}

#[test]
fn test_missing_and_null_fields_decode_to_empty() {
    let decoded: Profile = serde_json::from_str(r#"{"name":"grace","age":null}"#).unwrap();

    assert!(decoded.nickname.is_none());
    assert!(decoded.address.is_none());
    assert_eq!(
        as_crate_error(&decoded.age.unwrap_err()),
        Some(&Error::Null)
    );
}

#[test]
fn test_nested_decode_failure_fails_the_record() {
    let result: Result<Profile, _> =
        serde_json::from_str(r#"{"name":"x","age":"old","address":null}"#);
    assert!(result.is_err());

    let result: Result<Address, _> = serde_json::from_str(r#"{"city":"Paris","zip":5}"#);
    assert!(result.is_err());
}

#[test]
fn test_byte_helpers_match_serde_json() -> anyhow::Result<()> {
    let profile = sample_profile();
    let wrapped = Optional::some(profile.clone());
    assert_eq!(wrapped.to_json()?, serde_json::to_vec(&profile)?);
    assert_eq!(Optional::<Profile>::from_json(b"null")?, Optional::none());
    assert!(matches!(
        Outcome::<u8>::from_json(b"{").unwrap_err(),
        Error::Json(_)
    ));
    Ok(())
}
