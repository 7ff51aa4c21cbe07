//! Record encoding.
//!
//! Records travel as a UTF-8 JSON array of flat objects. The codec is
//! generic over the record type so credentials and transactions share it.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::trace;

use crate::error::{FormatError, Result};

/// Encode records as a JSON array.
///
/// # Errors
///
/// Returns `FormatError::Records` if a record cannot be serialized.
pub fn encode<R: Serialize>(records: &[R]) -> Result<Vec<u8>> {
    let bytes = serde_json::to_vec(records).map_err(FormatError::Records)?;
    trace!(records = records.len(), bytes = bytes.len(), "encoded records");
    Ok(bytes)
}

/// Decode a JSON array of records.
///
/// # Errors
///
/// Returns `FormatError::Encoding` if the bytes are not UTF-8 and
/// `FormatError::Records` if they are not a JSON array of complete records.
pub fn decode<R: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<R>> {
    let text = String::from_utf8(bytes.to_vec()).map_err(FormatError::Encoding)?;
    let records: Vec<R> = serde_json::from_str(&text).map_err(FormatError::Records)?;
    trace!(records = records.len(), "decoded records");
    Ok(records)
}
