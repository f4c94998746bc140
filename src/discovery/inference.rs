//! Subdomain inference from already-fetched records.
//!
//! Three sources propose candidates, each as a label relative to the domain:
//! - NS targets inside the domain (`ns1.example.com.` -> `ns1`)
//! - MX exchange hosts inside the domain (`10 mail.example.com.` -> `mail`)
//! - SPF `include:`, `a:` and `mx:` mechanisms in TXT records naming hosts
//!   inside the domain (`include:_spf.example.com` -> `_spf`)

use crate::domain::relative_label;
use crate::record::{Record, RecordType};

const SPF_MARKER: &str = "v=spf1";
const SPF_HOST_MECHANISMS: [&str; 3] = ["include:", "a:", "mx:"];
const SPF_QUALIFIERS: [char; 4] = ['+', '-', '~', '?'];

/// Proposes subdomain labels implied by a record.
///
/// Returns an empty list for record types that carry no hostnames of
/// interest. Deduplication is left to the candidate queue.
pub(crate) fn infer_subdomains(record: &Record, domain: &str) -> Vec<String> {
    match record.record_type() {
        RecordType::NS => relative_label(record.data().trim(), domain)
            .into_iter()
            .collect(),
        RecordType::MX => from_mx(record.data(), domain).into_iter().collect(),
        RecordType::TXT => from_spf(record.data(), domain),
        _ => Vec::new(),
    }
}

/// MX data is `"<preference> <exchange>"`.
fn from_mx(data: &str, domain: &str) -> Option<String> {
    let exchange = data.split_whitespace().nth(1)?;
    relative_label(exchange, domain)
}

fn from_spf(data: &str, domain: &str) -> Vec<String> {
    let policy = data.to_ascii_lowercase();
    let bare_domain = domain.trim_end_matches('.').to_ascii_lowercase();
    if !policy.contains(SPF_MARKER) || !policy.contains(&bare_domain) {
        return Vec::new();
    }

    policy
        .split_whitespace()
        .filter_map(|token| {
            let mechanism = token.trim_start_matches(SPF_QUALIFIERS);
            let value = SPF_HOST_MECHANISMS
                .iter()
                .find_map(|prefix| mechanism.strip_prefix(prefix))?;
            // a:host/24 and mx:host//64 carry CIDR lengths after the host
            let host = value.split('/').next().unwrap_or(value);
            relative_label(host, domain)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOMAIN: &str = "example.com.";

    fn txt(data: &str) -> Record {
        Record::new(DOMAIN, RecordType::TXT, 300, data)
    }

    #[test]
    fn test_infer_from_ns() {
        let inside = Record::new(DOMAIN, RecordType::NS, 300, "ns1.example.com.");
        assert_eq!(infer_subdomains(&inside, DOMAIN), vec!["ns1"]);

        let outside = Record::new(DOMAIN, RecordType::NS, 300, "a.iana-servers.net.");
        assert!(infer_subdomains(&outside, DOMAIN).is_empty());

        let root = Record::new(DOMAIN, RecordType::NS, 300, "example.com.");
        assert!(infer_subdomains(&root, DOMAIN).is_empty());
    }

    #[test]
    fn test_infer_from_mx() {
        let mx = Record::new(DOMAIN, RecordType::MX, 300, "10 mail.example.com.");
        assert_eq!(infer_subdomains(&mx, DOMAIN), vec!["mail"]);

        let external = Record::new(DOMAIN, RecordType::MX, 300, "1 aspmx.l.google.com.");
        assert!(infer_subdomains(&external, DOMAIN).is_empty());

        let malformed = Record::new(DOMAIN, RecordType::MX, 300, "mail.example.com.");
        assert!(infer_subdomains(&malformed, DOMAIN).is_empty());
    }

    #[test]
    fn test_infer_from_spf_mechanisms() {
        let record = txt(
            "v=spf1 include:_spf.example.com a:relay.example.com/24 mx:mx2.example.com \
             include:_spf.google.com ip4:192.0.2.0/24 ~all",
        );
        assert_eq!(
            infer_subdomains(&record, DOMAIN),
            vec!["_spf", "relay", "mx2"]
        );
    }

    #[test]
    fn test_infer_from_spf_handles_qualifiers_and_case() {
        let record = txt("V=SPF1 +a:Out.Example.com ?include:bounce.example.com -all");
        assert_eq!(infer_subdomains(&record, DOMAIN), vec!["out", "bounce"]);
    }

    #[test]
    fn test_infer_from_spf_requires_marker_and_domain() {
        let not_spf = txt("google-site-verification=include:x.example.com");
        assert!(infer_subdomains(&not_spf, DOMAIN).is_empty());

        let foreign = txt("v=spf1 include:_spf.google.com -all");
        assert!(infer_subdomains(&foreign, DOMAIN).is_empty());
    }

    #[test]
    fn test_infer_from_spf_ignores_lookalike_domains() {
        let record = txt("v=spf1 include:notexample.com a:example.com -all");
        assert!(infer_subdomains(&record, DOMAIN).is_empty());
    }

    #[test]
    fn test_infer_ignores_other_types() {
        let a = Record::new("mail.example.com.", RecordType::A, 300, "192.0.2.1");
        assert!(infer_subdomains(&a, DOMAIN).is_empty());
        let cname = Record::new("www.example.com.", RecordType::CNAME, 300, "cdn.example.com.");
        assert!(infer_subdomains(&cname, DOMAIN).is_empty());
    }
}
