mod count;
#[cfg(test)]
mod tests;

pub use count::Count;

pub type PartnerId = String;
