use std::fmt::Display;

use thiserror::Error;

/// Failures of the decode pipeline.
///
/// Every variant is terminal for the current attempt: the caller surfaces a
/// single descriptive message and the user supplies corrected input. Nothing
/// is retried automatically.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("No data provided in the input")]
    MissingInput,
    #[error("Invalid base64 payload: {cause}")]
    InvalidEncoding { cause: String },
    #[error("Malformed JSON payload | strict parse: [{strict}] | repaired parse: [{repaired}]")]
    MalformedJson { strict: String, repaired: String },
    #[error("Decoded payload does not contain an ordered record collection under the \"data\" key")]
    InvalidShape,
}

impl DecodeError {
    pub fn invalid_encoding(cause: impl Display) -> Self {
        Self::InvalidEncoding {
            cause: cause.to_string(),
        }
    }

    /// Carries both parse failures so the caller can diagnose which repair
    /// tier gave up and why.
    pub fn malformed_json(strict: impl Display, repaired: impl Display) -> Self {
        Self::MalformedJson {
            strict: strict.to_string(),
            repaired: repaired.to_string(),
        }
    }
}
