//! DNS-over-HTTPS backend (JSON API).
//!
//! Speaks the `application/dns-json` flavour offered by Cloudflare and Google:
//! `GET <endpoint>?name=<name>&type=<TYPE>` returning `{"Status": rcode,
//! "Answer": [{"name", "type", "TTL", "data"}]}`.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde_json::Value;

use super::Resolver;
use crate::config::DOH_CONTENT_TYPE;
use crate::error_handling::ResolverError;
use crate::record::{unquote_txt, Record, RecordType};

const RCODE_NOERROR: u32 = 0;
const RCODE_NXDOMAIN: u32 = 3;

#[derive(Debug, Deserialize)]
struct DohResponse {
    #[serde(rename = "Status")]
    status: u32,
    // Entries are decoded one by one so a single bad answer doesn't sink the rest
    #[serde(rename = "Answer", default)]
    answer: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct DohAnswer {
    name: String,
    #[serde(rename = "type")]
    record_type: u16,
    #[serde(rename = "TTL")]
    ttl: u32,
    data: String,
}

/// Resolver backed by a DoH JSON endpoint.
pub struct DohResolver {
    client: Arc<reqwest::Client>,
    endpoint: String,
}

impl DohResolver {
    /// Creates a backend sending queries to `endpoint` through `client`.
    pub fn new(client: Arc<reqwest::Client>, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

/// Converts one raw answer entry, or `None` if it is malformed or of a type
/// discovery doesn't track.
fn parse_answer(raw: Value) -> Option<Record> {
    let answer: DohAnswer = match serde_json::from_value(raw) {
        Ok(answer) => answer,
        Err(e) => {
            log::debug!("Dropping malformed DoH answer: {e}");
            return None;
        }
    };
    let record_type = RecordType::from_code(answer.record_type)?;
    let data = match record_type {
        RecordType::TXT => unquote_txt(&answer.data),
        _ => answer.data.trim().to_string(),
    };
    if answer.name.trim().is_empty() || data.is_empty() {
        return None;
    }
    Some(Record::new(answer.name, record_type, answer.ttl, data))
}

#[async_trait]
impl Resolver for DohResolver {
    async fn query(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<Record>, ResolverError> {
        log::debug!("DoH {record_type} lookup for {name} via {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("name", name), ("type", record_type.as_ref())])
            .header(ACCEPT, DOH_CONTENT_TYPE)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolverError::HttpStatus(status.as_u16()));
        }

        let body: DohResponse = response.json().await?;
        match body.status {
            RCODE_NOERROR => {}
            RCODE_NXDOMAIN => return Ok(Vec::new()),
            code => {
                return Err(ResolverError::ResponseCode {
                    name: name.to_string(),
                    code,
                })
            }
        }

        Ok(body.answer.into_iter().filter_map(parse_answer).collect())
    }
}
