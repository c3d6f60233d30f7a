use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AtcError {
	#[error("entropy is undefined for an empty buffer")]
	EmptyInput,

	#[error("alignment must be a positive number of elements")]
	InvalidAlignment,

	#[error("dictionary overflow: {distinct} distinct values exceed the {capacity} addressable by a {width}-bit index")]
	DictionaryOverflow {
		distinct: usize,
		capacity: usize,
		width: u8,
	},

	#[error("unknown compression method: {0}")]
	InvalidMethod(String),
}

pub type Result<T> = std::result::Result<T, AtcError>;
