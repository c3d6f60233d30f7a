pub mod dictionary;
pub mod entropy;
pub mod trim;

pub use dictionary::encode as dictionary_encode;
pub use entropy::estimate as estimate_entropy;
pub use trim::trim;
