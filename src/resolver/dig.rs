//! `dig` shell-tool backend.

use async_trait::async_trait;
use tokio::process::Command;

use super::Resolver;
use crate::error_handling::ResolverError;
use crate::record::{parse_presentation_line, unquote_txt, Record, RecordType};

/// Resolver that shells out to `dig +noall +answer`.
pub struct DigResolver {
    program: String,
}

impl DigResolver {
    /// Creates a backend running `program` (normally `dig` from `PATH`).
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

/// Parses the answer section printed by `dig +noall +answer`.
///
/// Lines that don't parse (comments, blank lines, unknown types) are skipped.
pub(crate) fn parse_dig_output(stdout: &str) -> Vec<Record> {
    stdout
        .lines()
        .filter_map(|line| parse_presentation_line(line).ok())
        .map(|record| match record.record_type() {
            RecordType::TXT => Record::new(
                record.name(),
                RecordType::TXT,
                record.ttl(),
                unquote_txt(record.data()),
            ),
            _ => record,
        })
        .collect()
}

#[async_trait]
impl Resolver for DigResolver {
    async fn query(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<Record>, ResolverError> {
        let output = Command::new(&self.program)
            .args(["+noall", "+answer"])
            .arg(name)
            .arg(record_type.to_string())
            .kill_on_drop(true)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = match stderr.trim() {
                "" => format!("{} exited with {}", self.program, output.status),
                trimmed => trimmed.to_string(),
            };
            return Err(ResolverError::Command(message));
        }

        Ok(parse_dig_output(&String::from_utf8_lossy(&output.stdout)))
    }
}
