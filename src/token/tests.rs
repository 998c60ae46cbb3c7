//! Tests for the token codec and registry

use super::*;
use crate::config::builtin_defaults;
use crate::coordinate::{
    CoordinateSpec, LanguageSpec, LogicSpec, Precedence, PremiseType, StampSpec, StampTime, Status,
};
use crate::error::Error;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use pretty_assertions::assert_eq;
use proptest::collection::{btree_set, vec};
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::sync::Arc;

fn sample_spec() -> CoordinateSpec {
    CoordinateSpec {
        stamp: StampSpec {
            time: StampTime::At(1_662_409_000_000),
            path_id: 2,
            precedence: Precedence::Time,
            modules: [10, 20, 30].into_iter().collect(),
            allowed_states: [Status::Active, Status::Inactive].into_iter().collect(),
        },
        language: LanguageSpec {
            language_id: 11,
            dialect_prefs: vec![22, 21],
            description_type_prefs: vec![32, 31, 32],
        },
        logic: LogicSpec {
            stated_assemblage_id: 41,
            inferred_assemblage_id: 42,
            description_profile_id: 43,
            classifier_id: 44,
        },
        premise: PremiseType::Inferred,
    }
}

/// Build a token string from raw payload bytes
fn token_from_payload(payload: &[u8]) -> String {
    let mut token = String::new();
    token.push(FORMAT_VERSION);
    URL_SAFE_NO_PAD.encode_string(payload, &mut token);
    token
}

// ============================================================================
// Codec Tests
// ============================================================================

#[test]
fn test_round_trip() {
    for spec in [builtin_defaults(), sample_spec()] {
        let token = encode(&spec);
        assert_eq!(decode(&token).unwrap(), spec);
    }
}

#[test]
fn test_encode_is_deterministic() {
    let spec = sample_spec();
    assert_eq!(encode(&spec), encode(&spec));
    assert_eq!(encode(&spec), encode(&spec.clone()));
}

#[test]
fn test_token_is_url_safe() {
    let token = encode(&sample_spec());
    assert!(token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
}

#[test]
fn test_unsupported_version_rejected() {
    let token = encode(&sample_spec());
    for version in ['0', '2', '9', 'A', 'z'] {
        let mut tampered = token.clone();
        tampered.replace_range(0..1, &version.to_string());
        match decode(&tampered) {
            Err(Error::UnsupportedTokenVersion { version: v }) => assert_eq!(v, version),
            other => panic!("expected UnsupportedTokenVersion, got {other:?}"),
        }
    }
}

#[test]
fn test_empty_token_rejected() {
    assert!(matches!(decode(""), Err(Error::MalformedToken { .. })));
}

#[test]
fn test_non_alphabet_characters_rejected() {
    let token = encode(&sample_spec());
    let tampered = format!("{token}!");
    assert!(matches!(
        decode(&tampered),
        Err(Error::MalformedToken { .. })
    ));
}

#[test]
fn test_truncated_token_rejected() {
    let token = encode(&sample_spec());
    // every proper prefix of the body must fail, never mis-decode
    for end in 1..token.len() {
        assert!(
            decode(&token[..end]).is_err(),
            "prefix of length {end} decoded"
        );
    }
}

#[test]
fn test_trailing_bytes_rejected() {
    let spec = sample_spec();
    let token = encode(&spec);
    let mut payload = URL_SAFE_NO_PAD.decode(&token[1..]).unwrap();
    payload.push(0);
    let err = decode(&token_from_payload(&payload)).unwrap_err();
    assert!(matches!(err, Error::MalformedToken { .. }));
    assert!(err.to_string().contains("trailing"));
}

#[test]
fn test_empty_state_list_rejected() {
    let spec = sample_spec();
    let token = encode(&spec);
    let payload = URL_SAFE_NO_PAD.decode(&token[1..]).unwrap();

    // stamp layout: tag(1) + millis(8) + path(4) + precedence(1) + module
    // count(4) + 3 modules(12), then the state count byte
    let state_count_at = 1 + 8 + 4 + 1 + 4 + 12;
    let mut tampered = payload.clone();
    tampered[state_count_at] = 0;
    // drop the two state code bytes so the rest of the layout still lines up
    tampered.drain(state_count_at + 1..state_count_at + 3);

    let err = decode(&token_from_payload(&tampered)).unwrap_err();
    assert!(err.to_string().contains("allowed states"));
}

#[test]
fn test_unsorted_module_list_rejected() {
    let spec = sample_spec();
    let token = encode(&spec);
    let mut payload = URL_SAFE_NO_PAD.decode(&token[1..]).unwrap();

    // swap the first two module ids (offsets 18..22 and 22..26)
    let modules_at = 1 + 8 + 4 + 1 + 4;
    for i in 0..4 {
        payload.swap(modules_at + i, modules_at + 4 + i);
    }

    let err = decode(&token_from_payload(&payload)).unwrap_err();
    assert!(err.to_string().contains("ascending"));
}

#[test]
fn test_oversized_list_length_rejected() {
    // a stamp whose module count claims far more than the payload holds
    let mut payload = vec![0u8]; // time = latest
    payload.extend_from_slice(&1u32.to_be_bytes()); // path
    payload.push(0); // precedence = path
    payload.extend_from_slice(&u32::MAX.to_be_bytes()); // absurd module count

    let err = decode(&token_from_payload(&payload)).unwrap_err();
    assert!(err.to_string().contains("exceeds remaining payload"));
}

#[test]
fn test_unknown_codes_rejected() {
    let spec = sample_spec();
    let token = encode(&spec);
    let payload = URL_SAFE_NO_PAD.decode(&token[1..]).unwrap();

    // time tag
    let mut tampered = payload.clone();
    tampered[0] = 7;
    assert!(decode(&token_from_payload(&tampered))
        .unwrap_err()
        .to_string()
        .contains("time tag"));

    // premise code is the final byte
    let mut tampered = payload.clone();
    *tampered.last_mut().unwrap() = 9;
    assert!(decode(&token_from_payload(&tampered))
        .unwrap_err()
        .to_string()
        .contains("premise"));
}

#[test]
fn test_decoded_token_reencodes_to_itself() {
    let token = encode(&sample_spec());
    let decoded = decode(&token).unwrap();
    assert_eq!(encode(&decoded), token);
}

// ============================================================================
// Codec Properties
// ============================================================================

fn arb_status() -> impl Strategy<Value = Status> {
    prop_oneof![
        Just(Status::Active),
        Just(Status::Inactive),
        Just(Status::Primordial),
        Just(Status::Canceled),
    ]
}

fn arb_spec() -> impl Strategy<Value = CoordinateSpec> {
    let stamp = (
        prop_oneof![Just(StampTime::Latest), any::<i64>().prop_map(StampTime::At)],
        any::<u32>(),
        prop_oneof![Just(Precedence::Path), Just(Precedence::Time)],
        btree_set(any::<u32>(), 0..6),
        btree_set(arb_status(), 1..=4),
    )
        .prop_map(
            |(time, path_id, precedence, modules, allowed_states)| StampSpec {
                time,
                path_id,
                precedence,
                modules,
                allowed_states,
            },
        );
    let language = (any::<u32>(), vec(any::<u32>(), 0..6), vec(any::<u32>(), 0..6)).prop_map(
        |(language_id, dialect_prefs, description_type_prefs)| LanguageSpec {
            language_id,
            dialect_prefs,
            description_type_prefs,
        },
    );
    let logic = (any::<u32>(), any::<u32>(), any::<u32>(), any::<u32>()).prop_map(
        |(stated, inferred, profile, classifier)| LogicSpec {
            stated_assemblage_id: stated,
            inferred_assemblage_id: inferred,
            description_profile_id: profile,
            classifier_id: classifier,
        },
    );
    let premise = prop_oneof![Just(PremiseType::Stated), Just(PremiseType::Inferred)];

    (stamp, language, logic, premise).prop_map(|(stamp, language, logic, premise)| {
        CoordinateSpec {
            stamp,
            language,
            logic,
            premise,
        }
    })
}

proptest! {
    #[test]
    fn prop_round_trip(spec in arb_spec()) {
        let token = encode(&spec);
        prop_assert_eq!(decode(&token).unwrap(), spec);
    }

    #[test]
    fn prop_url_safe_alphabet(spec in arb_spec()) {
        prop_assert!(encode(&spec)
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn prop_injective(a in arb_spec(), b in arb_spec()) {
        prop_assert_eq!(encode(&a) == encode(&b), a == b);
    }
}

// ============================================================================
// Registry Tests
// ============================================================================

#[test]
fn test_default_token_seeded_eagerly() {
    let registry = TokenRegistry::with_builtin_defaults();
    assert_eq!(registry.len(), 1);
    assert!(!registry.is_empty());
    assert_eq!(*registry.default_token().spec(), builtin_defaults());
}

#[test]
fn test_default_token_is_canonical() {
    let registry = TokenRegistry::with_builtin_defaults();
    let by_spec = registry.get_or_create(&builtin_defaults());
    let by_string = registry
        .get_or_create_str(registry.default_token().serialized())
        .unwrap();

    assert!(registry.default_token().same_instance(&by_spec));
    assert!(registry.default_token().same_instance(&by_string));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_cache_identity_by_spec() {
    let registry = TokenRegistry::with_builtin_defaults();
    let spec = sample_spec();

    let first = registry.get_or_create(&spec);
    let second = registry.get_or_create(&spec);

    assert!(first.same_instance(&second));
    assert_eq!(first.serialized(), second.serialized());
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_cache_identity_by_string() {
    let registry = TokenRegistry::with_builtin_defaults();
    let token = encode(&sample_spec());

    let first = registry.get_or_create_str(&token).unwrap();
    let second = registry.get_or_create_str(&token).unwrap();

    assert!(first.same_instance(&second));
    assert_eq!(first.serialized(), token);
}

#[test]
fn test_cache_identity_across_entry_points() {
    let registry = TokenRegistry::with_builtin_defaults();
    let spec = sample_spec();

    let by_spec = registry.get_or_create(&spec);
    let by_string = registry.get_or_create_str(&encode(&spec)).unwrap();

    assert!(by_spec.same_instance(&by_string));
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_bad_string_not_registered() {
    let registry = TokenRegistry::with_builtin_defaults();
    assert!(registry.get_or_create_str("1garbage!").is_err());
    assert!(registry.get_or_create_str("").is_err());
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_racing_inserters_observe_one_winner() {
    let registry = Arc::new(TokenRegistry::with_builtin_defaults());
    let spec = sample_spec();

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let spec = spec.clone();
            std::thread::spawn(move || registry.get_or_create(&spec))
        })
        .collect();

    let tokens: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for token in &tokens[1..] {
        assert!(tokens[0].same_instance(token));
    }
    assert_eq!(registry.len(), 2);
}
