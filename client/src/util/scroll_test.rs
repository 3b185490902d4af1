use super::*;

#[test]
fn anchor_target_strips_hash() {
    assert_eq!(anchor_target("#skills"), Some("skills"));
}

#[test]
fn bare_hash_has_no_target() {
    assert_eq!(anchor_target("#"), None);
}

#[test]
fn external_links_are_not_anchors() {
    assert_eq!(anchor_target("https://example.com/#skills"), None);
    assert_eq!(anchor_target("/about"), None);
    assert_eq!(anchor_target(""), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn scroll_to_anchor_claims_only_in_page_links() {
    assert!(scroll_to_anchor("#contact"));
    assert!(scroll_to_anchor("#"));
    assert!(!scroll_to_anchor("mailto:someone@example.com"));
}
