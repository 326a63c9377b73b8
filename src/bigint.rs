//! The published, immutable multi-word integer.

#![allow(clippy::arithmetic_side_effects, reason = "Length arithmetic on small word counts")]
#![allow(clippy::should_implement_trait, reason = "Operator traits are implemented on references")]



//		Modules

#[cfg(test)]
#[path = "tests/bigint.rs"]
mod tests;



//		Packages

use crate::{
	errors::ConversionError,
	integer::Integer,
	magnitude::{Magnitude, words_to_f64},
	word::Word,
};
use core::{
	fmt::{Debug, Formatter, LowerHex, UpperHex, self},
	ops::{Add, Mul, Neg, Shl, Shr, Sub},
};
use serde::{Deserialize, Serialize};



//		Enums

//		Sign
/// The sign of an integer, stored separately from its magnitude.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Sign {
	/// Less than zero.
	Negative,

	/// Exactly zero. A canonical [`BigInt`] never has this sign.
	Zero,

	/// Greater than zero.
	Positive,
}

//󰭅		Sign
impl Sign {
	//		of
	/// The sign of a native signed word.
	#[must_use]
	pub const fn of(value: i64) -> Self {
		if value < 0 {
			Self::Negative
		} else if value == 0 {
			Self::Zero
		} else {
			Self::Positive
		}
	}

	//		flip
	/// The opposite sign. Zero stays zero.
	#[must_use]
	pub const fn flip(self) -> Self {
		match self {
			Self::Negative => Self::Positive,
			Self::Zero     => Self::Zero,
			Self::Positive => Self::Negative,
		}
	}

	//		additive
	/// The sign a zero magnitude takes part in addition with.
	pub(crate) const fn additive(self) -> Self {
		match self {
			Self::Zero => Self::Positive,
			other      => other,
		}
	}

	//		product
	/// The sign of a product of values with these signs.
	pub(crate) fn product(self, other: Self) -> Self {
		match (self, other) {
			(Self::Zero, _) | (_, Self::Zero) => Self::Zero,
			(a, b) if a == b                  => Self::Positive,
			_                                 => Self::Negative,
		}
	}
}

//󰭅		From<Sign> for i8
impl From<Sign> for i8 {
	//		from
	fn from(sign: Sign) -> Self {
		match sign {
			Sign::Negative => -1,
			Sign::Zero     => 0,
			Sign::Positive => 1,
		}
	}
}

//󰭅		TryFrom<i8>
impl TryFrom<i8> for Sign {
	type Error = ConversionError;

	//		try_from
	fn try_from(value: i8) -> Result<Self, Self::Error> {
		match value {
			-1 => Ok(Self::Negative),
			0  => Ok(Self::Zero),
			1  => Ok(Self::Positive),
			_  => Err(ConversionError::InvalidSign(value)),
		}
	}
}



//		Structs

//		BigInt
/// An integer too large for a fixnum, stored as sign and magnitude.
///
/// # Representation
///
/// The magnitude is a sequence of [`Word`]s, least significant first. A value
/// that has been through normalization (everything returned inside
/// [`Integer::Bignum`]) upholds these invariants:
///
///   - There is at least one word.
///   - The most-significant word is non-zero.
///   - The sign is never [`Sign::Zero`], as zero is always a fixnum.
///   - The value does not fit in the fixnum range.
///
/// The constructors taking native integers ([`BigInt::from_i64()`] and the
/// [`From`] implementations) produce unnormalized values, and
/// [`BigInt::normalize()`] brings those into canonical form.
///
/// # Immutability
///
/// A `BigInt` has no mutating methods. Every operation allocates a new result,
/// and [`Clone`] produces a deep copy that owns an independent buffer.
///
/// # Results
///
/// Arithmetic returns [`Integer`] rather than `BigInt`, because a result may
/// fit in a fixnum and must then be demoted.
///
#[derive(Clone, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(into = "RawBigInt", try_from = "RawBigInt")]
pub struct BigInt {
	/// The sign of the value.
	sign:  Sign,

	/// The absolute value, least-significant word first.
	words: Vec<Word>,
}

//󰭅		BigInt
impl BigInt {
	//		Constructors

	//		from_i64
	/// Creates a one-word [`BigInt`] from a native signed word.
	///
	/// The result is not normalized, so small values are kept as bignums until
	/// [`normalize()`](BigInt::normalize()) is called.
	///
	/// # Parameters
	///
	/// * `value` - The value to convert. [`i64::MIN`] is representable, as its
	///             absolute value fits in one unsigned word.
	///
	#[must_use]
	pub fn from_i64(value: i64) -> Self {
		Magnitude::from_i64(value).into_bigint()
	}

	//		from_parts
	/// Creates a [`BigInt`] from a sign and raw words.
	///
	/// # Parameters
	///
	/// * `sign`  - The sign of the value.
	/// * `words` - The absolute value, least-significant word first.
	///
	/// # Errors
	///
	/// Returns an error if the words are empty, if the most-significant word is
	/// zero, or if the sign is zero. Values inside the fixnum range are
	/// accepted; [`normalize()`](BigInt::normalize()) will demote them.
	///
	pub fn from_parts(sign: Sign, words: Vec<Word>) -> Result<Self, ConversionError> {
		match words.last() {
			None    => Err(ConversionError::EmptyWords),
			Some(0) => Err(ConversionError::LeadingZeroWord),
			Some(_) if sign == Sign::Zero => Err(ConversionError::ZeroSign),
			Some(_) => Ok(Self { sign, words }),
		}
	}

	//		from_json
	/// Parses a [`BigInt`] from its JSON form.
	///
	/// # Errors
	///
	/// Returns an error if the JSON is malformed or does not describe a
	/// canonical value.
	///
	pub fn from_json(json: &str) -> Result<Self, ConversionError> {
		Ok(serde_json::from_str(json)?)
	}

	//		from_raw
	/// Wraps words without any validation.
	pub(crate) const fn from_raw(sign: Sign, words: Vec<Word>) -> Self {
		Self { sign, words }
	}

	//		Public methods

	//		abs
	/// The absolute value, normalized.
	#[must_use]
	pub fn abs(&self) -> Integer {
		let sign = if self.sign == Sign::Negative { Sign::Positive } else { self.sign };
		Magnitude::copy_of(sign, &self.words).normalize()
	}

	//		add
	/// Computes `self + rhs`, normalized.
	#[must_use]
	pub fn add(&self, rhs: &Self) -> Integer {
		Magnitude::sum(self.sign, &self.words, rhs.sign, &rhs.words).normalize()
	}

	//		add_i64
	/// Computes `self + rhs` for a native word, normalized.
	///
	/// Adding zero returns `self` without doing any word arithmetic.
	///
	#[must_use]
	pub fn add_i64(&self, rhs: i64) -> Integer {
		if rhs == 0 {
			return self.clone().normalize();
		}
		Magnitude::sum_scalar(self.sign, &self.words, Sign::of(rhs), rhs.unsigned_abs()).normalize()
	}

	//		dump
	/// Renders the raw representation for diagnostics.
	///
	/// The output is `#<bignum `, a `-` for negative values, then every word as
	/// sixteen hex digits, most-significant first, each followed by a space,
	/// then `>`.
	///
	#[must_use]
	pub fn dump(&self) -> String {
		let mut out = String::from("#<bignum ");
		if self.sign == Sign::Negative {
			out.push('-');
		}
		for word in self.words_msf() {
			out.push_str(&format!("{word:016x} "));
		}
		out.push('>');
		out
	}

	//		is_negative
	/// Whether the value is below zero.
	#[must_use]
	pub fn is_negative(&self) -> bool {
		self.sign == Sign::Negative
	}

	//		is_positive
	/// Whether the value is above zero.
	#[must_use]
	pub fn is_positive(&self) -> bool {
		self.sign == Sign::Positive && self.words.iter().any(|&w| w != 0)
	}

	//		mul
	/// Computes `self * rhs`, normalized.
	#[must_use]
	pub fn mul(&self, rhs: &Self) -> Integer {
		Magnitude::product(self.sign, &self.words, rhs.sign, &rhs.words).normalize()
	}

	//		mul_i64
	/// Computes `self * rhs` for a native word, normalized.
	#[must_use]
	pub fn mul_i64(&self, rhs: i64) -> Integer {
		Magnitude::product(self.sign, &self.words, Sign::of(rhs), &[rhs.unsigned_abs()]).normalize()
	}

	//		negate
	/// Computes `-self`, normalized.
	#[must_use]
	pub fn negate(&self) -> Integer {
		Magnitude::copy_of(self.sign.flip(), &self.words).normalize()
	}

	//		normalize
	/// Converts into canonical form, demoting to a fixnum if the value fits.
	#[must_use]
	pub fn normalize(self) -> Integer {
		Magnitude::copy_of(self.sign, &self.words).normalize()
	}

	//		shl
	/// Shifts the magnitude left by `amount` bits, keeping the sign.
	///
	/// This is exact multiplication by `2^amount`.
	///
	#[must_use]
	pub fn shl(&self, amount: usize) -> Integer {
		Magnitude::shifted_left(self.sign, &self.words, amount).normalize()
	}

	//		shr
	/// Shifts the magnitude right by `amount` bits, keeping the sign.
	///
	/// As the shift works on the magnitude, negative values are truncated
	/// towards zero, i.e. `-5 >> 1` is `-2`. Shifting out every bit gives zero.
	///
	#[must_use]
	pub fn shr(&self, amount: usize) -> Integer {
		Magnitude::shifted_right(self.sign, &self.words, amount).normalize()
	}

	//		sign
	/// The sign of the value.
	#[must_use]
	pub const fn sign(&self) -> Sign {
		self.sign
	}

	//		size
	/// The number of words in the magnitude.
	#[must_use]
	pub fn size(&self) -> usize {
		self.words.len()
	}

	//		sub
	/// Computes `self - rhs`, normalized.
	#[must_use]
	pub fn sub(&self, rhs: &Self) -> Integer {
		Magnitude::difference(self.sign, &self.words, rhs.sign, &rhs.words).normalize()
	}

	//		sub_i64
	/// Computes `self - rhs` for a native word, normalized.
	///
	/// The sign of `rhs` is flipped rather than the value negated, so
	/// [`i64::MIN`] is handled exactly.
	///
	#[must_use]
	pub fn sub_i64(&self, rhs: i64) -> Integer {
		if rhs == 0 {
			return self.clone().normalize();
		}
		Magnitude::sum_scalar(self.sign, &self.words, Sign::of(rhs).flip(), rhs.unsigned_abs()).normalize()
	}

	//		to_f64
	/// Approximates the value as a floating-point number.
	///
	/// Only the three most-significant words are used, so precision beyond the
	/// mantissa is lost. Values beyond the floating range become infinite.
	///
	#[must_use]
	pub fn to_f64(&self) -> f64 {
		words_to_f64(self.sign, &self.words)
	}

	//		to_i64
	/// Converts to a native signed word, saturating.
	///
	/// Values beyond the [`i64`] range are clamped to [`i64::MAX`] or
	/// [`i64::MIN`] rather than wrapped. Use [`TryFrom`] for a conversion that
	/// fails instead.
	///
	#[must_use]
	pub fn to_i64(&self) -> i64 {
		let clamp = if self.sign == Sign::Negative { i64::MIN } else { i64::MAX };
		i64::try_from(self).unwrap_or(clamp)
	}

	//		to_json
	/// Serialises the value to JSON.
	///
	/// # Errors
	///
	/// Returns an error if serialisation fails.
	///
	pub fn to_json(&self) -> Result<String, ConversionError> {
		Ok(serde_json::to_string(self)?)
	}

	//		words
	/// The magnitude, least-significant word first.
	#[must_use]
	pub fn words(&self) -> &[Word] {
		&self.words
	}

	//		words_msf
	/// Iterates over the magnitude, most-significant word first.
	pub fn words_msf(&self) -> impl DoubleEndedIterator<Item = Word> + ExactSizeIterator + '_ {
		self.words.iter().rev().copied()
	}

	//		Private methods

	//		magnitude_u128
	/// The magnitude as a double-width value, if it fits.
	fn magnitude_u128(&self) -> Option<u128> {
		let len = self.words.iter().rposition(|&w| w != 0).map_or(1, |top| top + 1);
		match self.words[..len.min(self.words.len())] {
			[lo]     => Some(u128::from(lo)),
			[lo, hi] => Some((u128::from(hi) << Word::BITS) | u128::from(lo)),
			_        => None,
		}
	}

	//		hex
	/// Shared body of the hex formatters.
	fn hex(&self, f: &mut Formatter<'_>, upper: bool) -> fmt::Result {
		if self.sign == Sign::Negative {
			write!(f, "-")?;
		}
		if f.alternate() {
			write!(f, "0x")?;
		}

		//	Find first non-zero word (or the lowest word if all zero)
		let start = self.words.iter().rposition(|&w| w != 0).unwrap_or(0);
		let mut words = self.words[..=start].iter().rev();

		//	Handle first word without leading zeros
		if let Some(top) = words.next() {
			if upper { write!(f, "{top:X}")? } else { write!(f, "{top:x}")? }
		}

		//	Handle remaining words with full width
		for word in words {
			if upper { write!(f, "{word:016X}")? } else { write!(f, "{word:016x}")? }
		}
		Ok(())
	}
}

//󰭅		Add
impl Add for &BigInt {
	type Output = Integer;

	//		add
	fn add(self, rhs: Self) -> Self::Output {
		BigInt::add(self, rhs)
	}
}

//󰭅		Add<i64>
impl Add<i64> for &BigInt {
	type Output = Integer;

	//		add
	fn add(self, rhs: i64) -> Self::Output {
		self.add_i64(rhs)
	}
}

//󰭅		Debug
impl Debug for BigInt {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(&self.dump())
	}
}

//󰭅		From<i64>
impl From<i64> for BigInt {
	//		from
	fn from(value: i64) -> Self {
		Self::from_i64(value)
	}
}

//󰭅		From<i128>
impl From<i128> for BigInt {
	//		from
	fn from(value: i128) -> Self {
		let sign = match value.signum() {
			-1 => Sign::Negative,
			0  => Sign::Zero,
			_  => Sign::Positive,
		};
		Magnitude::from_wide(sign, value.unsigned_abs()).into_bigint()
	}
}

//󰭅		From<u64>
impl From<u64> for BigInt {
	//		from
	fn from(value: u64) -> Self {
		let sign = if value == 0 { Sign::Zero } else { Sign::Positive };
		Self { sign, words: vec![value] }
	}
}

//󰭅		From<u128>
impl From<u128> for BigInt {
	//		from
	fn from(value: u128) -> Self {
		let sign = if value == 0 { Sign::Zero } else { Sign::Positive };
		Magnitude::from_wide(sign, value).into_bigint()
	}
}

//󰭅		LowerHex
impl LowerHex for BigInt {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.hex(f, false)
	}
}

//󰭅		Mul
impl Mul for &BigInt {
	type Output = Integer;

	//		mul
	fn mul(self, rhs: Self) -> Self::Output {
		BigInt::mul(self, rhs)
	}
}

//󰭅		Neg
impl Neg for &BigInt {
	type Output = Integer;

	//		neg
	fn neg(self) -> Self::Output {
		self.negate()
	}
}

//󰭅		Shl
impl Shl<usize> for &BigInt {
	type Output = Integer;

	//		shl
	fn shl(self, rhs: usize) -> Self::Output {
		BigInt::shl(self, rhs)
	}
}

//󰭅		Shr
impl Shr<usize> for &BigInt {
	type Output = Integer;

	//		shr
	fn shr(self, rhs: usize) -> Self::Output {
		BigInt::shr(self, rhs)
	}
}

//󰭅		Sub
impl Sub for &BigInt {
	type Output = Integer;

	//		sub
	fn sub(self, rhs: Self) -> Self::Output {
		BigInt::sub(self, rhs)
	}
}

//󰭅		Sub<i64>
impl Sub<i64> for &BigInt {
	type Output = Integer;

	//		sub
	fn sub(self, rhs: i64) -> Self::Output {
		self.sub_i64(rhs)
	}
}

//󰭅		TryFrom<&BigInt> for i64
impl TryFrom<&BigInt> for i64 {
	type Error = ConversionError;

	//		try_from
	fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
		Self::try_from(i128::try_from(value)?).map_err(|_| ConversionError::ValueTooLarge)
	}
}

//󰭅		TryFrom<&BigInt> for i128
impl TryFrom<&BigInt> for i128 {
	type Error = ConversionError;

	//		try_from
	fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
		let magnitude = value.magnitude_u128().ok_or(ConversionError::ValueTooLarge)?;
		if value.sign == Sign::Negative {
			0_i128.checked_sub_unsigned(magnitude).ok_or(ConversionError::ValueTooLarge)
		} else {
			Self::try_from(magnitude).map_err(|_| ConversionError::ValueTooLarge)
		}
	}
}

//󰭅		TryFrom<&BigInt> for u64
impl TryFrom<&BigInt> for u64 {
	type Error = ConversionError;

	//		try_from
	fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
		Self::try_from(u128::try_from(value)?).map_err(|_| ConversionError::ValueTooLarge)
	}
}

//󰭅		TryFrom<&BigInt> for u128
impl TryFrom<&BigInt> for u128 {
	type Error = ConversionError;

	//		try_from
	fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
		let magnitude = value.magnitude_u128().ok_or(ConversionError::ValueTooLarge)?;
		if value.sign == Sign::Negative && magnitude != 0 {
			return Err(ConversionError::ValueIsNegative);
		}
		Ok(magnitude)
	}
}

//󰭅		UpperHex
impl UpperHex for BigInt {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.hex(f, true)
	}
}



//		RawBigInt
/// The serialised form of a [`BigInt`], validated on the way in.
#[derive(Deserialize, Serialize)]
struct RawBigInt {
	/// The sign as `-1`, `0`, or `1`.
	sign:  Sign,

	/// The magnitude, least-significant word first.
	words: Vec<Word>,
}

//󰭅		From<BigInt> for RawBigInt
impl From<BigInt> for RawBigInt {
	//		from
	fn from(value: BigInt) -> Self {
		Self { sign: value.sign, words: value.words }
	}
}

//󰭅		TryFrom<RawBigInt> for BigInt
impl TryFrom<RawBigInt> for BigInt {
	type Error = ConversionError;

	//		try_from
	fn try_from(raw: RawBigInt) -> Result<Self, Self::Error> {
		Self::from_parts(raw.sign, raw.words)
	}
}
