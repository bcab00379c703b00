mod payload;
mod record;

pub use payload::DecodedPayload;
pub use record::TransactionRecord;
