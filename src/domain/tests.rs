// Domain module tests.

use super::*;

#[test]
fn test_normalize_domain_basic() {
    assert_eq!(normalize_domain("example.com").unwrap(), "example.com.");
    assert_eq!(normalize_domain("Example.COM.").unwrap(), "example.com.");
    assert_eq!(normalize_domain("  example.com  ").unwrap(), "example.com.");
}

#[test]
fn test_normalize_domain_idna() {
    assert_eq!(
        normalize_domain("bücher.example").unwrap(),
        "xn--bcher-kva.example."
    );
}

#[test]
fn test_normalize_domain_allows_service_labels() {
    assert_eq!(
        normalize_domain("_dmarc.example.com").unwrap(),
        "_dmarc.example.com."
    );
}

#[test]
fn test_normalize_domain_rejects_empty() {
    assert!(normalize_domain("").is_err());
    assert!(normalize_domain(".").is_err());
    assert!(normalize_domain("   ").is_err());
}

#[test]
fn test_normalize_domain_rejects_ip_addresses() {
    assert!(normalize_domain("192.168.1.1").is_err());
    assert!(normalize_domain("[::1]").is_err());
}

#[test]
fn test_normalize_domain_rejects_bad_labels() {
    assert!(normalize_domain("-bad.example.com").is_err());
    assert!(normalize_domain("bad-.example.com").is_err());
    assert!(normalize_domain("a..example.com").is_err());
    assert!(normalize_domain("exa mple.com").is_err());
    assert!(normalize_domain("exa*mple.com").is_err());

    let long_label = "a".repeat(64);
    assert!(normalize_domain(&format!("{long_label}.com")).is_err());
}

#[test]
fn test_normalize_domain_rejects_overlong_names() {
    let label = "a".repeat(60);
    let name = vec![label.as_str(); 5].join(".");
    assert!(name.len() > 253);
    assert!(normalize_domain(&name).is_err());
}

#[test]
fn test_normalize_domain_error_carries_input() {
    match normalize_domain("exa mple.com") {
        Err(DiscoveryError::InvalidDomain { input, .. }) => assert_eq!(input, "exa mple.com"),
        other => panic!("expected InvalidDomain, got {other:?}"),
    }
}

#[test]
fn test_to_fqdn() {
    assert_eq!(to_fqdn("Mail.Example.com"), "mail.example.com.");
    assert_eq!(to_fqdn("mail.example.com."), "mail.example.com.");
    assert_eq!(to_fqdn("mail.example.com.."), "mail.example.com.");
}

#[test]
fn test_is_within() {
    assert!(is_within("example.com.", "example.com."));
    assert!(is_within("mail.example.com", "example.com."));
    assert!(is_within("a.b.example.com.", "EXAMPLE.com"));
    assert!(!is_within("notexample.com.", "example.com."));
    assert!(!is_within("example.org.", "example.com."));
    assert!(!is_within("com.", "example.com."));
}

#[test]
fn test_relative_label() {
    assert_eq!(
        relative_label("mail.example.com.", "example.com."),
        Some("mail".to_string())
    );
    assert_eq!(
        relative_label("ns1.dns.example.com", "example.com."),
        Some("ns1.dns".to_string())
    );
    assert_eq!(relative_label("example.com.", "example.com."), None);
    assert_eq!(relative_label("mail.example.org.", "example.com."), None);
    assert_eq!(relative_label("mailexample.com.", "example.com."), None);
}

#[test]
fn test_normalize_label() {
    assert_eq!(normalize_label("Dev"), Some("dev".to_string()));
    assert_eq!(normalize_label(".staging."), Some("staging".to_string()));
    assert_eq!(normalize_label("  "), None);
    assert_eq!(normalize_label("."), None);
}

#[test]
fn test_is_valid_subdomain() {
    assert!(is_valid_subdomain("mail"));
    assert!(is_valid_subdomain("_sip._tcp"));
    assert!(is_valid_subdomain("ns1.dns"));
    assert!(!is_valid_subdomain(""));
    assert!(!is_valid_subdomain("a..b"));
    assert!(!is_valid_subdomain("%{i}._spf"));
}
