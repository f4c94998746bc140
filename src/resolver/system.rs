//! OS resolver backend.
//!
//! Queries through `hickory-resolver` configured from the system's resolver
//! settings (see `initialization::init_resolver`).

use std::sync::Arc;

use async_trait::async_trait;
use hickory_resolver::error::ResolveErrorKind;
use hickory_resolver::proto::rr::{RData, Record as HickoryRecord, RecordType as HickoryRecordType};
use hickory_resolver::TokioAsyncResolver;

use super::Resolver;
use crate::error_handling::ResolverError;
use crate::record::{Record, RecordType};

/// Resolver backed by the operating system's DNS configuration.
pub struct SystemResolver {
    resolver: Arc<TokioAsyncResolver>,
}

impl SystemResolver {
    /// Wraps an initialized hickory resolver.
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

/// Converts a hickory record into a discovery `Record`.
///
/// Returns `None` for record types discovery doesn't track and for records
/// without data.
fn convert_record(record: &HickoryRecord) -> Option<Record> {
    let record_type = RecordType::from_code(u16::from(record.record_type()))?;
    let data = match record.data()? {
        // TXT records can contain multiple strings - join them
        RData::TXT(txt) => txt
            .iter()
            .map(|bytes| String::from_utf8_lossy(bytes).to_string())
            .collect::<Vec<String>>()
            .join(""),
        rdata => rdata.to_string(),
    };
    Some(Record::new(
        record.name().to_ascii(),
        record_type,
        record.ttl(),
        data,
    ))
}

#[async_trait]
impl Resolver for SystemResolver {
    async fn query(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<Record>, ResolverError> {
        let query_type = HickoryRecordType::from(record_type.code());
        match self.resolver.lookup(name, query_type).await {
            Ok(lookup) => Ok(lookup.records().iter().filter_map(convert_record).collect()),
            Err(e) => {
                // No records / NXDOMAIN is an ordinary empty answer
                if matches!(e.kind(), ResolveErrorKind::NoRecordsFound { .. }) {
                    return Ok(Vec::new());
                }
                let error_msg = e.to_string();
                if error_msg.contains("timeout") || error_msg.contains("timed out") {
                    log::warn!("{record_type} record lookup timed out for {name}: {e}");
                } else {
                    log::warn!("Failed to lookup {record_type} records for {name}: {e}");
                }
                Err(ResolverError::Lookup(error_msg))
            }
        }
    }
}
