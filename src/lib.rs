//! The Bignum crate is the arbitrary-precision integer core of a dynamic
//! language runtime's numeric tower.
//!
//! Integers that fit in a tagged machine word are fixnums and live in
//! [`Integer::Fixnum`]. Anything larger is a [`BigInt`]: a sign plus a
//! magnitude of 64-bit [`Word`]s, least significant first. Every arithmetic
//! entry point returns an [`Integer`], so a result that fits in a fixnum is
//! always demoted to one.
//!
//! The heterogeneous folds [`fold_add()`] and [`fold_sub()`] accept any mix of
//! fixnums, bignums, floats, and complex numbers, and switch permanently to
//! inexact arithmetic at the first float or complex operand.



//		Global configuration

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cast_precision_loss,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::expect_used,
	clippy::float_cmp,
	clippy::indexing_slicing,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::panic,
	clippy::unreadable_literal,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

mod bigint;
mod errors;
mod integer;
mod magnitude;
mod number;
mod word;



//		Packages

pub use bigint::{BigInt, Sign};
pub use errors::{ArithmeticError, ConversionError};
pub use integer::{Integer, SMALL_INT_BITS, SMALL_INT_MAX, SMALL_INT_MIN};
pub use magnitude::mul_accumulate_word;
pub use number::{Complex, Number, Operand, fold_add, fold_sub};
pub use word::{HALF_BITS, WORD_BITS, WORD_MAX, Word, add_with_carry, mul_word, sub_with_borrow};
