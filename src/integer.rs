//! The normalized integer: a fixnum when the value fits, a bignum otherwise.

#![allow(clippy::arithmetic_side_effects, reason = "Fixnum arithmetic is widened to i128 first")]
#![allow(clippy::should_implement_trait, reason = "Operator traits are implemented on references")]



//		Modules

#[cfg(test)]
#[path = "tests/integer.rs"]
mod tests;



//		Packages

use crate::{
	bigint::{BigInt, Sign},
	magnitude::Magnitude,
	word::WORD_BITS,
};
use core::{
	fmt::{Formatter, LowerHex, self},
	ops::{Add, Mul, Neg, Shl, Shr, Sub},
};



//		Constants

/// The number of value bits in a fixnum. The host keeps three tag bits of each
/// machine word for itself.
pub const SMALL_INT_BITS: u32 = WORD_BITS - 3;

/// The largest value held as a fixnum.
pub const SMALL_INT_MAX: i64 = (1 << SMALL_INT_BITS) - 1;

/// The smallest value held as a fixnum.
pub const SMALL_INT_MIN: i64 = -(1 << SMALL_INT_BITS);



//		Enums

//		Integer
/// An exact integer in canonical form.
///
/// Every arithmetic entry point returns one of these. Values within
/// [`SMALL_INT_MIN`]`..=`[`SMALL_INT_MAX`] are always [`Fixnum`](Integer::Fixnum)s,
/// and everything else is a normalized [`BigInt`]. Constructing a `Fixnum`
/// outside that range by hand is possible but not canonical; arithmetic on it
/// still gives correct, canonical results.
///
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Integer {
	/// A value in the small-integer range.
	Fixnum(i64),

	/// A value outside the small-integer range.
	Bignum(BigInt),
}

//󰭅		Integer
impl Integer {
	//		Public methods

	//		is_fixnum
	/// Whether the value is held as a fixnum.
	#[must_use]
	pub const fn is_fixnum(&self) -> bool {
		matches!(self, Self::Fixnum(_))
	}

	//		is_zero
	/// Whether the value is zero.
	#[must_use]
	pub const fn is_zero(&self) -> bool {
		matches!(self, Self::Fixnum(0))
	}

	//		shl
	/// Shifts left by `amount` bits. See [`BigInt::shl()`].
	#[must_use]
	pub fn shl(&self, amount: usize) -> Self {
		match self {
			Self::Fixnum(v) => BigInt::from_i64(*v).shl(amount),
			Self::Bignum(b) => b.shl(amount),
		}
	}

	//		shr
	/// Shifts right by `amount` bits. See [`BigInt::shr()`].
	#[must_use]
	pub fn shr(&self, amount: usize) -> Self {
		match self {
			Self::Fixnum(v) => BigInt::from_i64(*v).shr(amount),
			Self::Bignum(b) => b.shr(amount),
		}
	}

	//		to_f64
	/// Converts to a floating-point value, approximately for bignums.
	#[must_use]
	#[expect(clippy::cast_precision_loss, reason = "Approximate by definition")]
	pub fn to_f64(&self) -> f64 {
		match self {
			Self::Fixnum(v) => *v as f64,
			Self::Bignum(b) => b.to_f64(),
		}
	}

	//		to_i64
	/// Converts to a native signed word, saturating. See [`BigInt::to_i64()`].
	#[must_use]
	pub fn to_i64(&self) -> i64 {
		match self {
			Self::Fixnum(v) => *v,
			Self::Bignum(b) => b.to_i64(),
		}
	}
}

//󰭅		Add
impl Add for &Integer {
	type Output = Integer;

	//		add
	fn add(self, rhs: Self) -> Self::Output {
		match (self, rhs) {
			(Integer::Fixnum(x), Integer::Fixnum(y)) => Integer::from(i128::from(*x) + i128::from(*y)),
			(Integer::Bignum(x), Integer::Fixnum(y)) |
			(Integer::Fixnum(y), Integer::Bignum(x)) => x.add_i64(*y),
			(Integer::Bignum(x), Integer::Bignum(y)) => x.add(y),
		}
	}
}

//󰭅		From<BigInt>
impl From<BigInt> for Integer {
	//		from
	fn from(value: BigInt) -> Self {
		value.normalize()
	}
}

//󰭅		From<i64>
impl From<i64> for Integer {
	//		from
	fn from(value: i64) -> Self {
		Magnitude::from_i64(value).normalize()
	}
}

//󰭅		From<i128>
impl From<i128> for Integer {
	//		from
	fn from(value: i128) -> Self {
		BigInt::from(value).normalize()
	}
}

//󰭅		From<u64>
impl From<u64> for Integer {
	//		from
	fn from(value: u64) -> Self {
		BigInt::from(value).normalize()
	}
}

//󰭅		From<u128>
impl From<u128> for Integer {
	//		from
	fn from(value: u128) -> Self {
		BigInt::from(value).normalize()
	}
}

//󰭅		LowerHex
impl LowerHex for Integer {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::Fixnum(v) => LowerHex::fmt(&BigInt::from_i64(*v), f),
			Self::Bignum(b) => LowerHex::fmt(b, f),
		}
	}
}

//󰭅		Mul
impl Mul for &Integer {
	type Output = Integer;

	//		mul
	fn mul(self, rhs: Self) -> Self::Output {
		match (self, rhs) {
			(Integer::Fixnum(x), Integer::Fixnum(y)) => Integer::from(i128::from(*x) * i128::from(*y)),
			(Integer::Bignum(x), Integer::Fixnum(y)) |
			(Integer::Fixnum(y), Integer::Bignum(x)) => x.mul_i64(*y),
			(Integer::Bignum(x), Integer::Bignum(y)) => x.mul(y),
		}
	}
}

//󰭅		Neg
impl Neg for &Integer {
	type Output = Integer;

	//		neg
	fn neg(self) -> Self::Output {
		match self {
			Integer::Fixnum(v) => Integer::from(-i128::from(*v)),
			Integer::Bignum(b) => b.negate(),
		}
	}
}

//󰭅		Shl
impl Shl<usize> for &Integer {
	type Output = Integer;

	//		shl
	fn shl(self, rhs: usize) -> Self::Output {
		Integer::shl(self, rhs)
	}
}

//󰭅		Shr
impl Shr<usize> for &Integer {
	type Output = Integer;

	//		shr
	fn shr(self, rhs: usize) -> Self::Output {
		Integer::shr(self, rhs)
	}
}

//󰭅		Sub
impl Sub for &Integer {
	type Output = Integer;

	//		sub
	fn sub(self, rhs: Self) -> Self::Output {
		match (self, rhs) {
			(Integer::Fixnum(x), Integer::Fixnum(y)) => Integer::from(i128::from(*x) - i128::from(*y)),
			(Integer::Bignum(x), Integer::Fixnum(y)) => x.sub_i64(*y),
			(Integer::Fixnum(x), Integer::Bignum(y)) => BigInt::from_i64(*x).sub(y),
			(Integer::Bignum(x), Integer::Bignum(y)) => x.sub(y),
		}
	}
}

//󰭅		From<&Integer> for Sign
impl From<&Integer> for Sign {
	//		from
	fn from(value: &Integer) -> Self {
		match value {
			Integer::Fixnum(v) => Self::of(*v),
			Integer::Bignum(b) => b.sign(),
		}
	}
}
