//! Tab-separated text form of a record.
//!
//! One record per line, columns `name, ttl, "IN", type, data` as in zone-file
//! presentation. Parsing accepts any run of whitespace between the first four
//! columns so that `dig +answer` output reads through the same path; the data
//! column is the remainder of the line without surrounding ASCII whitespace.
//!
//! The data column is escaped so every record stays on one line and reads
//! back unchanged: `\` becomes `\\`, control characters and a leading or
//! trailing space become `\DDD` decimal escapes.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use thiserror::Error;

use super::{Record, RecordType};

/// Only the Internet class is ever produced or accepted.
const CLASS_IN: &str = "IN";

/// Errors from parsing the text form of a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordParseError {
    /// The line ended before the named column
    #[error("missing {0} column")]
    MissingField(&'static str),

    /// TTL column is not an unsigned 32-bit integer
    #[error("invalid TTL: {0}")]
    InvalidTtl(String),

    /// Class column is something other than `IN`
    #[error("unsupported class: {0}")]
    UnsupportedClass(String),

    /// Type column names a type discovery does not track
    #[error("unknown record type: {0}")]
    UnknownType(String),
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t",
            self.name, self.ttl, CLASS_IN, self.record_type
        )?;
        write_escaped(f, &self.data)
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, data: &str) -> fmt::Result {
    let last = data.len().saturating_sub(1);
    for (i, c) in data.char_indices() {
        match c {
            '\\' => f.write_str("\\\\")?,
            ' ' if i == 0 || i == last => f.write_str("\\032")?,
            c if c.is_ascii_control() => write!(f, "\\{:03}", u32::from(c))?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}

/// Decodes one escape; `rest` starts right after the backslash.
///
/// Three decimal digits are a single byte, anything else stands for itself.
/// Returns how many bytes of `rest` were used.
fn decode_escape(rest: &[u8], out: &mut Vec<u8>) -> usize {
    match rest {
        [a, b, c, ..] if a.is_ascii_digit() && b.is_ascii_digit() && c.is_ascii_digit() => {
            let value =
                u16::from(a - b'0') * 100 + u16::from(b - b'0') * 10 + u16::from(c - b'0');
            match u8::try_from(value) {
                Ok(byte) => {
                    out.push(byte);
                    3
                }
                Err(_) => {
                    out.push(*a);
                    1
                }
            }
        }
        [next, ..] => {
            out.push(*next);
            1
        }
        [] => {
            out.push(b'\\');
            0
        }
    }
}

fn unescape(data: &str) -> String {
    let bytes = data.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' {
            i += 1 + decode_escape(&bytes[i + 1..], &mut out);
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Splits off the next whitespace-delimited column.
fn next_field<'a>(
    input: &'a str,
    column: &'static str,
) -> Result<(&'a str, &'a str), RecordParseError> {
    let input = input.trim_start();
    if input.is_empty() {
        return Err(RecordParseError::MissingField(column));
    }
    Ok(input.split_once(char::is_whitespace).unwrap_or((input, "")))
}

/// Parses one line in zone presentation form, keeping the data column as
/// printed (quotes and escapes included).
///
/// This is the shape `dig +answer` prints; [`Record`]'s `FromStr` is the
/// same parse followed by unescaping the data column.
pub(crate) fn parse_presentation_line(line: &str) -> Result<Record, RecordParseError> {
    let (name, rest) = next_field(line, "name")?;
    let (ttl, rest) = next_field(rest, "ttl")?;
    let (class, rest) = next_field(rest, "class")?;
    let (record_type, rest) = next_field(rest, "type")?;

    let ttl = ttl
        .parse::<u32>()
        .map_err(|_| RecordParseError::InvalidTtl(ttl.to_string()))?;
    if !class.eq_ignore_ascii_case(CLASS_IN) {
        return Err(RecordParseError::UnsupportedClass(class.to_string()));
    }
    let record_type = record_type
        .parse::<RecordType>()
        .map_err(|_| RecordParseError::UnknownType(record_type.to_string()))?;

    let data = rest.trim_matches(|c: char| c.is_ascii_whitespace());
    if data.is_empty() {
        return Err(RecordParseError::MissingField("data"));
    }

    Ok(Record::new(name, record_type, ttl, data))
}

impl FromStr for Record {
    type Err = RecordParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let record = parse_presentation_line(line)?;
        let data = unescape(record.data());
        Ok(Record { data, ..record })
    }
}

/// Turns a presentation-format TXT value into its plain text.
///
/// Resolvers hand TXT data back as one or more quoted character strings
/// (`"v=spf1 " "include:_spf.example.com ~all"`); the strings are unquoted,
/// unescaped (`\"`, `\\` and decimal `\DDD` bytes) and concatenated.
/// Unquoted input is returned trimmed.
pub fn unquote_txt(data: &str) -> String {
    let trimmed = data.trim();
    if !trimmed.starts_with('"') {
        return trimmed.to_string();
    }

    let bytes = trimmed.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut in_quotes = false;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                in_quotes = !in_quotes;
                i += 1;
            }
            b'\\' if in_quotes => {
                i += 1 + decode_escape(&bytes[i + 1..], &mut out);
            }
            byte => {
                if in_quotes {
                    out.push(byte);
                }
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}
