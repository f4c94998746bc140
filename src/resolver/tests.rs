//! Resolver module tests.

use super::dig::parse_dig_output;
use super::*;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Backend answering every query with a single fixed A record.
struct FixedResolver;

#[async_trait]
impl Resolver for FixedResolver {
    async fn query(
        &self,
        name: &str,
        _record_type: RecordType,
    ) -> Result<Vec<Record>, ResolverError> {
        Ok(vec![Record::new(name, RecordType::A, 60, "192.0.2.1")])
    }
}

fn doh_resolver(server: &MockServer) -> DohResolver {
    DohResolver::new(
        Arc::new(reqwest::Client::new()),
        format!("{}/dns-query", server.uri()),
    )
}

#[tokio::test]
async fn test_registry_unknown_key_fails_at_query_time() {
    let registry = ResolverRegistry::new();
    // Selecting never fails
    let resolver = registry.select(&Backend::named("nope"));
    match resolver.query("example.com.", RecordType::A).await {
        Err(ResolverError::UnknownBackend(key)) => assert_eq!(key, "nope"),
        other => panic!("expected UnknownBackend, got {other:?}"),
    }
}

#[tokio::test]
async fn test_registry_select_named_and_custom() {
    let mut registry = ResolverRegistry::new();
    registry.register("fixed", Arc::new(FixedResolver));
    assert_eq!(registry.keys(), vec!["fixed"]);

    let records = registry
        .select(&Backend::named("fixed"))
        .query("www.example.com.", RecordType::A)
        .await
        .expect("registered backend should answer");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name(), "www.example.com.");

    let records = registry
        .select(&Backend::custom(FixedResolver))
        .query("api.example.com.", RecordType::A)
        .await
        .expect("custom backend should answer");
    assert_eq!(records[0].name(), "api.example.com.");
}

#[tokio::test]
async fn test_registry_with_default_backends() {
    let registry = ResolverRegistry::with_default_backends().expect("registry should build");
    assert_eq!(registry.keys(), vec!["cloudflare", "dig", "google", "system"]);
}

#[test]
fn test_backend_equality() {
    assert_eq!(Backend::named("google"), Backend::named("google"));
    assert_ne!(Backend::named("google"), Backend::named("cloudflare"));

    let custom = Backend::custom(FixedResolver);
    assert_eq!(custom, custom.clone());
    assert_ne!(custom, Backend::custom(FixedResolver));
    assert_eq!(format!("{:?}", Backend::named("dig")), "Named(\"dig\")");
}

#[tokio::test]
async fn test_doh_parses_answers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dns-query"))
        .and(query_param("name", "example.com."))
        .and(query_param("type", "MX"))
        .and(header("accept", "application/dns-json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Status": 0,
            "Answer": [
                {"name": "example.com.", "type": 15, "TTL": 3600, "data": "10 mail.example.com."},
                {"name": "example.com.", "type": 15, "TTL": 3600, "data": "20 backup.example.com."}
            ]
        })))
        .mount(&server)
        .await;

    let records = doh_resolver(&server)
        .query("example.com.", RecordType::MX)
        .await
        .expect("DoH query should succeed");
    assert_eq!(
        records,
        vec![
            Record::new("example.com.", RecordType::MX, 3600, "10 mail.example.com."),
            Record::new("example.com.", RecordType::MX, 3600, "20 backup.example.com."),
        ]
    );
}

#[tokio::test]
async fn test_doh_unquotes_txt_and_drops_malformed_answers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dns-query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Status": 0,
            "Answer": [
                {"name": "example.com.", "type": 16, "TTL": 300, "data": "\"v=spf1 include:_spf.example.com -all\""},
                {"name": "example.com.", "type": 46, "TTL": 300, "data": "A 13 2 300 ..."},
                {"name": "example.com.", "type": 16, "data": "\"missing ttl\""},
                {"name": "example.com.", "type": "TXT", "TTL": 300, "data": "\"bad type\""}
            ]
        })))
        .mount(&server)
        .await;

    let records = doh_resolver(&server)
        .query("example.com.", RecordType::TXT)
        .await
        .expect("DoH query should succeed");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].data(), "v=spf1 include:_spf.example.com -all");
}

#[tokio::test]
async fn test_doh_nxdomain_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Status": 3})))
        .mount(&server)
        .await;

    let records = doh_resolver(&server)
        .query("nope.example.com.", RecordType::A)
        .await
        .expect("NXDOMAIN should not be an error");
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_doh_servfail_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Status": 2})))
        .mount(&server)
        .await;

    let result = doh_resolver(&server)
        .query("example.com.", RecordType::A)
        .await;
    assert!(matches!(
        result,
        Err(ResolverError::ResponseCode { code: 2, .. })
    ));
}

#[tokio::test]
async fn test_doh_http_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = doh_resolver(&server)
        .query("example.com.", RecordType::A)
        .await;
    assert!(matches!(result, Err(ResolverError::HttpStatus(503))));
}

#[test]
fn test_parse_dig_output() {
    let stdout = "\
example.com.\t\t3600\tIN\tTXT\t\"v=spf1 \" \"-all\"
; <<>> DiG 9.18 <<>> +noall +answer
www.example.com.\t300\tIN\tCNAME\texample.com.

example.com.\t300\tIN\tA\t93.184.216.34
";
    let records = parse_dig_output(stdout);
    assert_eq!(
        records,
        vec![
            Record::new("example.com.", RecordType::TXT, 3600, "v=spf1 -all"),
            Record::new("www.example.com.", RecordType::CNAME, 300, "example.com."),
            Record::new("example.com.", RecordType::A, 300, "93.184.216.34"),
        ]
    );
}

#[test]
fn test_parse_dig_output_decodes_txt_escapes() {
    let stdout = "example.com.\t300\tIN\tTXT\t\"say \\\"hi\\\"\\059 caf\\195\\169\"\n";
    let records = parse_dig_output(stdout);
    assert_eq!(
        records,
        vec![Record::new(
            "example.com.",
            RecordType::TXT,
            300,
            "say \"hi\"; caf\u{e9}"
        )]
    );
}

#[tokio::test]
async fn test_dig_missing_program_is_io_error() {
    let resolver = DigResolver::new("definitely-not-a-real-dig-binary-12345");
    let result = resolver.query("example.com.", RecordType::A).await;
    assert!(matches!(result, Err(ResolverError::Io(_))));
}
