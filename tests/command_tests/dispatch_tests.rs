//! Tests for kind-tag dispatch

use bytes::Bytes;
use snss::{Command, CommandKind, SnssError};

use crate::common::{selected_navigation_payload, NavigationFields, SAMPLE_TIMESTAMP};

#[test]
fn test_dispatch_selected_navigation() {
    let payload = Bytes::from(selected_navigation_payload(7, 2, SAMPLE_TIMESTAMP));

    match Command::decode(0x04, payload).unwrap() {
        Command::SelectedNavigationInTab(cmd) => {
            assert_eq!(cmd.tab_id, 7);
            assert_eq!(cmd.index, 2);
        }
        other => panic!("Expected SelectedNavigationInTab, got {:?}", other),
    }
}

#[test]
fn test_dispatch_update_tab_navigation() {
    let payload = Bytes::from(NavigationFields::default().payload());
    let cmd = Command::decode(0x01, payload).unwrap();

    assert_eq!(cmd.kind(), Some(CommandKind::UpdateTabNavigation));
    assert_eq!(cmd.tag(), 0x01);
    assert!(!cmd.is_unknown());
}

#[test]
fn test_enumerated_kind_without_decoder_is_unknown() {
    // Restored Entry: layout unconfirmed, carried as-is
    let payload = Bytes::from_static(&[1, 2, 3, 4, 5]);
    let cmd = Command::decode(0x02, payload.clone()).unwrap();

    assert_eq!(
        cmd,
        Command::Unknown {
            kind: 0x02,
            payload
        }
    );
    assert_eq!(cmd.kind(), Some(CommandKind::RestoredEntry));
}

#[test]
fn test_unrecognized_tag_is_unknown() {
    let cmd = Command::decode(0xEE, Bytes::new()).unwrap();

    assert!(cmd.is_unknown());
    assert_eq!(cmd.tag(), 0xEE);
    assert_eq!(cmd.kind(), None);
}

#[test]
fn test_decoder_errors_propagate() {
    let err = Command::decode(0x04, Bytes::from_static(&[0; 8])).unwrap_err();
    assert!(matches!(err, SnssError::Truncated(_)));
}

#[test]
fn test_command_kind_tags_and_names() {
    let expected = [
        (0x01, "Update Tab Navigation", true),
        (0x02, "Restored Entry", false),
        (0x03, "Window", false),
        (0x04, "Selected Navigation In Tab", true),
        (0x05, "Pinned State", false),
        (0x06, "Set Extension App ID", false),
    ];
    for (tag, name, decoded) in expected {
        let kind = CommandKind::from_tag(tag).unwrap();
        assert_eq!(kind.tag(), tag);
        assert_eq!(kind.to_string(), name);
        assert_eq!(kind.has_decoder(), decoded);
    }
    assert_eq!(CommandKind::from_tag(0x00), None);
    assert_eq!(CommandKind::from_tag(0x07), None);
}

#[test]
fn test_unknown_display() {
    let window = Command::decode(0x03, Bytes::from_static(&[0; 12])).unwrap();
    assert_eq!(window.to_string(), "Window (0x03): 12 bytes, not decoded");

    let other = Command::decode(0x1F, Bytes::from_static(&[0; 3])).unwrap();
    assert_eq!(other.to_string(), "Unknown (0x1f): 3 bytes, not decoded");
}

#[test]
fn test_json_is_tagged_by_command() {
    let cmd = Command::decode(0x04, Bytes::from(selected_navigation_payload(7, 2, 99))).unwrap();
    let value: serde_json::Value = serde_json::to_value(&cmd).unwrap();

    assert_eq!(value["command"], "selected_navigation_in_tab");
    assert_eq!(value["tab_id"], 7);
    assert_eq!(value["index"], 2);
    assert_eq!(value["timestamp"], 99);
}
