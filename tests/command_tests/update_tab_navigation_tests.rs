//! Tests for Update Tab Navigation decoding
//!
//! These tests verify:
//! - Every field of the pickle region in order
//! - Packed transition word splitting
//! - Short-circuit on the first failing field

use snss::command::{TransitionFlag, TransitionType, UpdateTabNavigation};
use snss::SnssError;

use crate::common::{wrap_region, NavigationFields};

// =============================================================================
// Successful Decoding
// =============================================================================

#[test]
fn test_decode_all_fields() {
    let fields = NavigationFields::default();
    let cmd = UpdateTabNavigation::decode(&fields.payload()).unwrap();

    assert_eq!(cmd.tab_id, 3);
    assert_eq!(cmd.index, 1);
    assert_eq!(cmd.url, "https://example.com/");
    assert_eq!(cmd.title, "Example Domain");
    assert_eq!(&cmd.page_state[..], &[0xDE, 0xAD, 0xBE, 0xEF, 0x01]);
    assert_eq!(cmd.transition_type, TransitionType::OmnibarUrl);
    assert!(cmd.transition_mode.is_empty());
    assert!(!cmd.has_post_data);
    assert_eq!(cmd.referrer_url, "https://search.example/?q=example");
    assert_eq!(cmd.referrer_policy, 2);
    assert_eq!(cmd.original_request_url, "http://example.com/");
    assert!(cmd.is_overriding_user_agent);
}

#[test]
fn test_decode_unicode_title() {
    let fields = NavigationFields {
        title: "Ünïcödé — 日本語 😀".to_string(),
        ..NavigationFields::default()
    };
    let cmd = UpdateTabNavigation::decode(&fields.payload()).unwrap();
    assert_eq!(cmd.title, "Ünïcödé — 日本語 😀");
}

#[test]
fn test_decode_empty_strings() {
    let fields = NavigationFields {
        url: String::new(),
        title: String::new(),
        page_state: Vec::new(),
        referrer_url: String::new(),
        original_request_url: String::new(),
        ..NavigationFields::default()
    };
    let cmd = UpdateTabNavigation::decode(&fields.payload()).unwrap();

    assert!(cmd.url.is_empty());
    assert!(cmd.title.is_empty());
    assert!(cmd.page_state.is_empty());
    assert!(cmd.is_overriding_user_agent);
}

#[test]
fn test_packed_transition_word() {
    let fields = NavigationFields {
        transition: 0x4300_0008,
        has_post_data: 1,
        ..NavigationFields::default()
    };
    let cmd = UpdateTabNavigation::decode(&fields.payload()).unwrap();

    assert_eq!(cmd.transition_type, TransitionType::Reloaded);
    let flags: Vec<_> = cmd.transition_mode.iter().collect();
    assert_eq!(
        flags,
        vec![
            TransitionFlag::BackFwdButton,
            TransitionFlag::AddressBar,
            TransitionFlag::ServerRedir
        ]
    );
    assert!(cmd.has_post_data);
}

#[test]
fn test_unknown_transition_type_is_preserved() {
    let fields = NavigationFields {
        transition: 0x0000_002A,
        ..NavigationFields::default()
    };
    let cmd = UpdateTabNavigation::decode(&fields.payload()).unwrap();
    assert_eq!(cmd.transition_type, TransitionType::Unknown(42));
    assert_eq!(cmd.transition_type.raw(), 42);
}

#[test]
fn test_boolean_fields_require_exactly_one() {
    let fields = NavigationFields {
        has_post_data: 2,
        is_overriding_user_agent: 0x0100,
        ..NavigationFields::default()
    };
    let cmd = UpdateTabNavigation::decode(&fields.payload()).unwrap();
    assert!(!cmd.has_post_data);
    assert!(!cmd.is_overriding_user_agent);
}

#[test]
fn test_bytes_after_region_are_ignored() {
    let mut payload = NavigationFields::default().payload();
    payload.extend_from_slice(&[0xFF; 12]);

    let cmd = UpdateTabNavigation::decode(&payload).unwrap();
    assert_eq!(cmd.tab_id, 3);
}

// =============================================================================
// Structural Errors
// =============================================================================

#[test]
fn test_missing_region_length_is_truncated() {
    let err = UpdateTabNavigation::decode(&[0x10, 0x00]).unwrap_err();
    assert!(matches!(err, SnssError::Truncated(_)));
}

#[test]
fn test_region_longer_than_payload_is_truncated() {
    let region = NavigationFields::default().region();
    let mut payload = ((region.len() + 1) as u32).to_le_bytes().to_vec();
    payload.extend_from_slice(&region);

    let err = UpdateTabNavigation::decode(&payload).unwrap_err();
    assert!(matches!(err, SnssError::Truncated(_)));
}

#[test]
fn test_url_overrunning_region_is_underflow() {
    let mut region = Vec::new();
    region.extend_from_slice(&1i32.to_le_bytes());
    region.extend_from_slice(&0i32.to_le_bytes());
    region.extend_from_slice(&64u32.to_le_bytes());
    region.extend_from_slice(b"https://");

    let err = UpdateTabNavigation::decode(&wrap_region(&region)).unwrap_err();
    assert!(matches!(
        err,
        SnssError::Underflow {
            needed: 64,
            available: 8
        }
    ));
}

#[test]
fn test_region_bound_is_enforced_even_if_payload_continues() {
    // Region stops mid-title; the bytes after it must not be used
    let full = NavigationFields::default().region();
    let cut = 4 + 4 + 24 + 6;
    let mut payload = wrap_region(&full[..cut]);
    payload.extend_from_slice(&full[cut..]);

    let err = UpdateTabNavigation::decode(&payload).unwrap_err();
    assert!(matches!(err, SnssError::Underflow { .. }));
}

#[test]
fn test_missing_final_field_is_truncated() {
    let region = NavigationFields::default().region();
    let err = UpdateTabNavigation::decode(&wrap_region(&region[..region.len() - 4])).unwrap_err();
    assert!(matches!(err, SnssError::Truncated(_)));
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_display_mentions_fields() {
    let fields = NavigationFields {
        transition: 0x0300_0000,
        ..NavigationFields::default()
    };
    let rendered = UpdateTabNavigation::decode(&fields.payload())
        .unwrap()
        .to_string();

    assert!(rendered.starts_with("Update Tab Navigation: Tab: 3, Index: 1"));
    assert!(rendered.contains("URL: https://example.com/"));
    assert!(rendered.contains("user clicked link"));
    assert!(rendered.contains("used browser back or fwd button,used address bar"));
    assert!(rendered.contains("Page state: 5 bytes"));
}
