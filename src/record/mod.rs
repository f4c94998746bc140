//! DNS record model.
//!
//! This module provides the immutable unit of discovered data:
//! - `Record` - one resource record (name, type, ttl, data)
//! - `RecordType` - the record types the discovery engine understands
//! - Tab-separated wire form (`Display` / `FromStr`) in zone-file column order
//!
//! Record names are stored lowercase with a trailing dot. Identity for
//! deduplication is `(name, type, data)`; the TTL is not part of it.

mod wire;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

pub(crate) use wire::parse_presentation_line;
pub use wire::{unquote_txt, RecordParseError};

/// DNS record types handled by discovery.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[allow(missing_docs)] // Standard mnemonics
pub enum RecordType {
    A,
    NS,
    CNAME,
    SOA,
    PTR,
    MX,
    TXT,
    AAAA,
    SRV,
    NAPTR,
    DS,
    SSHFP,
    DNSKEY,
    TLSA,
    SVCB,
    HTTPS,
    CAA,
}

impl RecordType {
    /// Numeric type code as assigned by IANA.
    pub fn code(self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::PTR => 12,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
            RecordType::SRV => 33,
            RecordType::NAPTR => 35,
            RecordType::DS => 43,
            RecordType::SSHFP => 44,
            RecordType::DNSKEY => 48,
            RecordType::TLSA => 52,
            RecordType::SVCB => 64,
            RecordType::HTTPS => 65,
            RecordType::CAA => 257,
        }
    }

    /// Maps a numeric type code back to a `RecordType`.
    ///
    /// Returns `None` for codes discovery does not track (RRSIG, OPT, ...).
    pub fn from_code(code: u16) -> Option<Self> {
        let record_type = match code {
            1 => RecordType::A,
            2 => RecordType::NS,
            5 => RecordType::CNAME,
            6 => RecordType::SOA,
            12 => RecordType::PTR,
            15 => RecordType::MX,
            16 => RecordType::TXT,
            28 => RecordType::AAAA,
            33 => RecordType::SRV,
            35 => RecordType::NAPTR,
            43 => RecordType::DS,
            44 => RecordType::SSHFP,
            48 => RecordType::DNSKEY,
            52 => RecordType::TLSA,
            64 => RecordType::SVCB,
            65 => RecordType::HTTPS,
            257 => RecordType::CAA,
            _ => return None,
        };
        Some(record_type)
    }

    /// Whether records of this type resolve a name to an address or an alias.
    ///
    /// Only these types take part in wildcard detection.
    pub fn is_address_bearing(self) -> bool {
        matches!(self, RecordType::A | RecordType::AAAA | RecordType::CNAME)
    }
}

/// Identity of a record for deduplication: `(name, type, data)`.
pub type RecordKey = (String, RecordType, String);

/// A single discovered DNS resource record.
///
/// Records are immutable once constructed. The name is canonicalized to
/// lowercase with a trailing dot; the data is kept in presentation format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    name: String,
    ttl: u32,
    #[serde(rename = "type")]
    record_type: RecordType,
    data: String,
}

impl Record {
    /// Creates a record, canonicalizing the owner name.
    pub fn new(
        name: impl AsRef<str>,
        record_type: RecordType,
        ttl: u32,
        data: impl Into<String>,
    ) -> Self {
        Self {
            name: crate::domain::to_fqdn(name.as_ref()),
            ttl,
            record_type,
            data: data.into(),
        }
    }

    /// Owner name, lowercase with trailing dot.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record type.
    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    /// Time to live in seconds.
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Record data in presentation format.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Returns the deduplication identity of this record.
    pub fn key(&self) -> RecordKey {
        (self.name.clone(), self.record_type, self.data.clone())
    }

    /// Returns a copy of this record under a different owner name.
    pub(crate) fn renamed(&self, name: &str) -> Self {
        Self::new(name, self.record_type, self.ttl, self.data.clone())
    }
}
