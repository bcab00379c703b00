mod engine;
mod errors;
mod repair;

pub use engine::decode;
pub use errors::DecodeError;
