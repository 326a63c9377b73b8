//! Contains error types used throughout the library.



//		Packages

use serde_json::Error as JsonError;
use thiserror::Error as ThisError;



//		Enums

//		ArithmeticError
/// Represents all possible failures of the arithmetic entry points.
///
/// Saturating conversions are not failures and never produce one of these.
/// Broken internal invariants are not represented here either, as they panic.
///
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ArithmeticError {
	/// An operand of a fold is not a number. The payload is the printed form
	/// of the offending value.
	#[error("number expected, but got {0}")]
	TypeMismatch(String),
}

//		ConversionError
/// Represents all possible conversion errors that can occur.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ConversionError {
	/// The word buffer is empty.
	#[error("Empty word buffer")]
	EmptyWords,

	/// The sign is not one of `-1`, `0`, or `1`.
	#[error("Invalid sign: {0}")]
	InvalidSign(i8),

	/// The data could not be parsed as JSON.
	#[error("Invalid JSON: {0}")]
	Json(String),

	/// The most-significant word is zero, which a canonical value never has.
	#[error("Leading zero word")]
	LeadingZeroWord,

	/// The incoming value is negative, which is not allowed by the destination
	/// type.
	#[error("Value is negative")]
	ValueIsNegative,

	/// The incoming value is too large to be converted to the destination type.
	#[error("Value too large")]
	ValueTooLarge,

	/// A canonical value never carries a zero sign, as zero is always a fixnum.
	#[error("Zero sign on a canonical value")]
	ZeroSign,
}

//󰭅		From<JsonError>
impl From<JsonError> for ConversionError {
	//		from
	fn from(err: JsonError) -> Self {
		Self::Json(err.to_string())
	}
}
