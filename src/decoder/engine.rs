use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;
use tracing::{debug, warn};

use crate::decoder::errors::DecodeError;
use crate::decoder::repair::{repair, repair_aggressive, strip_control_chars};
use crate::models::{DecodedPayload, TransactionRecord};

/// Decodes a base64-encoded JSON document into a validated record collection.
///
/// The upstream encoder is not trusted to produce strictly valid JSON, so
/// the pipeline cleans and repairs the decoded text before parsing: control
/// characters are stripped, a conservative repair chain fixes common syntax
/// defects, and only if a strict parse still fails does a second, lossier
/// chain re-quote keys and swap single quotes before one final attempt.
///
/// # Errors
/// Returns `DecodeError` if:
/// - The input is empty.
/// - The base64 encoding or the decoded bytes' UTF-8 is invalid.
/// - Both parse attempts fail.
/// - The parsed document has no array under the `data` key.
pub fn decode(raw: &str) -> Result<DecodedPayload, DecodeError> {
    if raw.is_empty() {
        return Err(DecodeError::MissingInput);
    }

    let bytes = STANDARD.decode(raw).map_err(DecodeError::invalid_encoding)?;
    let text = String::from_utf8(bytes).map_err(DecodeError::invalid_encoding)?;
    let cleaned = repair(&strip_control_chars(&text));
    let document = parse(&cleaned)?;

    let Some(items) = document.get("data").and_then(Value::as_array) else {
        return Err(DecodeError::InvalidShape);
    };

    Ok(DecodedPayload {
        data: items.iter().map(into_record).collect(),
    })
}

fn parse(cleaned: &str) -> Result<Value, DecodeError> {
    match serde_json::from_str(cleaned) {
        Ok(document) => Ok(document),
        Err(strict_error) => {
            debug!("Strict JSON parse failed, retrying after aggressive repair: {strict_error}");

            let fixed = repair_aggressive(cleaned);

            serde_json::from_str(&fixed)
                .map_err(|repaired_error| DecodeError::malformed_json(strict_error, repaired_error))
        }
    }
}

fn into_record(item: &Value) -> TransactionRecord {
    match serde_json::from_value(item.clone()) {
        Ok(record) => record,
        Err(error) => {
            //NOTE: The feed occasionally carries stray scalars inside the record array. Dropping
            //      them would change the record count the report is built on, so they become
            //      all-default records instead, exactly as if every field were absent.
            warn!("Record entry [{item}] is not an object, substituting defaults: {error}");
            TransactionRecord::default()
        }
    }
}
