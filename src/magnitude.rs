//! The private builder buffer for multi-word results.
//!
//! A [`Magnitude`] is the only place where words are written in place. Every
//! arithmetic entry point sizes one up front, fills it with the word-wise
//! algorithms below, and hands it to [`Magnitude::normalize()`], which is the
//! sole exit into the published [`BigInt`] or fixnum world. Nothing outside
//! the crate can obtain a `Magnitude`, so a published value can never be
//! mutated.

#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "Buffers are always sized before they are filled"
)]
#![allow(clippy::arithmetic_side_effects, reason = "Word arithmetic is bounded by construction")]



//		Modules

#[cfg(test)]
#[path = "tests/magnitude.rs"]
mod tests;



//		Packages

use crate::{
	bigint::{BigInt, Sign},
	integer::{Integer, SMALL_INT_MAX, SMALL_INT_MIN},
	word::{Word, WORD_BITS, WORD_MAX, add_with_carry, mul_word, sub_with_borrow},
};
use tracing::trace;



//		Structs

//		Magnitude
/// A uniquely-owned, fixed-capacity word buffer under construction.
///
/// The buffer is allocated at its final size and never grows. Its length may
/// exceed what the value strictly needs, and the top words may be zero until
/// [`normalize()`](Magnitude::normalize()) strips them.
///
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Magnitude {
	/// The sign of the value being built.
	sign:  Sign,

	/// The words of the absolute value, least significant first.
	words: Vec<Word>,
}

//󰭅		Magnitude
impl Magnitude {
	//		Constructors

	//		zeroed
	/// Allocates a buffer of `size` zero words.
	pub(crate) fn zeroed(sign: Sign, size: usize) -> Self {
		assert!(size > 0, "A magnitude needs at least one word");
		Self { sign, words: vec![0; size] }
	}

	//		from_i64
	/// Builds a one-word magnitude from a native signed word.
	///
	/// The absolute value of every [`i64`], including [`i64::MIN`], fits in one
	/// unsigned word, so the result is always exactly one word long.
	///
	pub(crate) fn from_i64(value: i64) -> Self {
		Self { sign: Sign::of(value), words: vec![value.unsigned_abs()] }
	}

	//		from_wide
	/// Builds a magnitude from a double-width absolute value.
	pub(crate) fn from_wide(sign: Sign, value: u128) -> Self {
		#[expect(clippy::cast_possible_truncation, reason = "Splitting into words")]
		let (lo, hi) = (value as Word, (value >> WORD_BITS) as Word);
		let mut magnitude = Self { sign, words: vec![lo, hi] };
		magnitude.trim();
		magnitude
	}

	//		copy_of
	/// Copies existing words into a fresh buffer that owns its own storage.
	pub(crate) fn copy_of(sign: Sign, words: &[Word]) -> Self {
		assert!(!words.is_empty(), "A magnitude needs at least one word");
		Self { sign, words: words.to_vec() }
	}

	//		Public methods

	//		sign
	pub(crate) const fn sign(&self) -> Sign {
		self.sign
	}

	//		words
	pub(crate) fn words(&self) -> &[Word] {
		&self.words
	}

	//		into_bigint
	/// Publishes the buffer as-is, without normalizing it.
	///
	/// Only used by constructors whose output is defined to be unnormalized.
	///
	pub(crate) fn into_bigint(self) -> BigInt {
		BigInt::from_raw(self.sign, self.words)
	}

	//		trim
	/// Drops zero words from the top, keeping at least one word.
	///
	/// This never demotes to a fixnum; it keeps long-running folds from
	/// accumulating dead words.
	///
	pub(crate) fn trim(&mut self) {
		while self.words.len() > 1 && self.words.last() == Some(&0) {
			let _ = self.words.pop();
		}
	}

	//		normalize
	/// Produces the canonical representation of the value.
	///
	/// Zero words are stripped from the top. A value that then fits in the
	/// fixnum range is returned as [`Integer::Fixnum`]; anything else is
	/// published as a [`BigInt`].
	///
	pub(crate) fn normalize(mut self) -> Integer {
		self.trim();
		if let [word] = self.words[..] {
			if self.sign == Sign::Zero || word == 0 {
				return Integer::Fixnum(0);
			}
			let demoted = match self.sign {
				Sign::Positive => i64::try_from(word).ok().filter(|&v| v <= SMALL_INT_MAX),
				Sign::Negative if word <= SMALL_INT_MIN.unsigned_abs() => {
					i64::try_from(word).ok().map(|v| -v)
				},
				_ => None,
			};
			if let Some(value) = demoted {
				trace!(value, "Demoted to fixnum");
				return Integer::Fixnum(value);
			}
		}
		Integer::Bignum(self.into_bigint())
	}

	//		to_f64
	/// See [`words_to_f64()`].
	pub(crate) fn to_f64(&self) -> f64 {
		words_to_f64(self.sign, &self.words)
	}

	//		Additive engine

	//		safe_size_for_add
	/// The smallest buffer length guaranteed to hold `|x| ± |y|`.
	///
	/// With unequal lengths the longer operand's length suffices unless its top
	/// word is all ones, in which case a carry out of the top word is possible.
	/// With equal lengths such a carry is always possible.
	///
	pub(crate) fn safe_size_for_add(x: &[Word], y: &[Word]) -> usize {
		let longer = match x.len().cmp(&y.len()) {
			core::cmp::Ordering::Greater => x,
			core::cmp::Ordering::Less    => y,
			core::cmp::Ordering::Equal   => return x.len() + 1,
		};
		if longer.last() == Some(&WORD_MAX) {
			longer.len() + 1
		} else {
			longer.len()
		}
	}

	//		sum
	/// Computes `x + y` in signed-magnitude arithmetic.
	///
	/// Matching signs add the magnitudes. Differing signs subtract them, and
	/// the two's-complement fixup corrects the sign when `|y| > |x|`.
	///
	pub(crate) fn sum(x_sign: Sign, x: &[Word], y_sign: Sign, y: &[Word]) -> Self {
		let (x_sign, y_sign) = (x_sign.additive(), y_sign.additive());
		let mut result       = Self::zeroed(x_sign, Self::safe_size_for_add(x, y));
		if x_sign == y_sign {
			result.add_words(x, y);
		} else {
			result.sub_words(x, y);
		}
		result
	}

	//		difference
	/// Computes `x - y`; the mirror of [`sum()`](Magnitude::sum()).
	pub(crate) fn difference(x_sign: Sign, x: &[Word], y_sign: Sign, y: &[Word]) -> Self {
		let (x_sign, y_sign) = (x_sign.additive(), y_sign.additive());
		let mut result       = Self::zeroed(x_sign, Self::safe_size_for_add(x, y));
		if x_sign == y_sign {
			result.sub_words(x, y);
		} else {
			result.add_words(x, y);
		}
		result
	}

	//		sum_scalar
	/// Computes `x + y` where `y` is a single word with its own sign.
	///
	/// The result buffer is one word longer than `x`, which covers the carry
	/// out of the top word.
	///
	pub(crate) fn sum_scalar(x_sign: Sign, x: &[Word], y_sign: Sign, y: Word) -> Self {
		let (x_sign, y_sign) = (x_sign.additive(), y_sign.additive());
		let mut result       = Self::zeroed(x_sign, x.len() + 1);
		if x_sign == y_sign {
			result.add_words(x, &[y]);
		} else {
			result.sub_words(x, &[y]);
		}
		result
	}

	//		add_words
	/// Fills the buffer with `|x| + |y|`.
	fn add_words(&mut self, x: &[Word], y: &[Word]) {
		let mut carry = 0;
		for (i, slot) in self.words.iter_mut().enumerate() {
			let xi        = x.get(i).copied().unwrap_or(0);
			let yi        = y.get(i).copied().unwrap_or(0);
			(*slot, carry) = add_with_carry(xi, yi, carry);
		}
		assert!(carry == 0, "Addition overflowed its buffer");
	}

	//		sub_words
	/// Fills the buffer with `|x| - |y|`.
	///
	/// If the subtraction borrows out of the top word, the buffer holds the
	/// two's-complement wraparound of a negative difference, so it is fixed up
	/// and the sign is flipped.
	///
	fn sub_words(&mut self, x: &[Word], y: &[Word]) {
		let mut borrow = 0;
		for (i, slot) in self.words.iter_mut().enumerate() {
			let xi          = x.get(i).copied().unwrap_or(0);
			let yi          = y.get(i).copied().unwrap_or(0);
			(*slot, borrow) = sub_with_borrow(xi, yi, borrow);
		}
		if borrow != 0 {
			self.twos_complement();
			self.sign = self.sign.flip();
		}
	}

	//		twos_complement
	/// Negates the buffer in two's complement: invert every word, then add one.
	fn twos_complement(&mut self) {
		let mut carry = 1;
		for slot in &mut self.words {
			(*slot, carry) = add_with_carry(!*slot, 0, carry);
		}
		assert!(carry == 0, "Borrow left over after two's-complement fixup");
	}

	//		Shift engine

	//		shifted_left
	/// Builds `|x| << amount`, keeping the sign of `x`.
	///
	/// The buffer grows by the whole-word part of the shift, plus one word for
	/// the bits pushed out of the top when the residual is non-zero.
	///
	pub(crate) fn shifted_left(sign: Sign, x: &[Word], amount: usize) -> Self {
		let (nwords, nbits) = split_shift(amount);
		let mut result      = Self::zeroed(sign, x.len() + nwords + usize::from(nbits != 0));
		result.words[..x.len()].copy_from_slice(x);
		result.shl_in_place(x.len(), amount);
		result
	}

	//		shifted_right
	/// Builds `|x| >> amount`, keeping the sign of `x`.
	pub(crate) fn shifted_right(sign: Sign, x: &[Word], amount: usize) -> Self {
		let mut result = Self::copy_of(sign, x);
		result.shr_in_place(amount);
		result
	}

	//		shl_in_place
	/// Shifts the first `len` words of the buffer left by `amount` bits.
	///
	/// Words are processed from the top down, so every source word is read
	/// before its slot is overwritten. The buffer must already be long enough.
	///
	fn shl_in_place(&mut self, len: usize, amount: usize) {
		let (nwords, nbits) = split_shift(amount);
		assert!(len > 0, "Nothing to shift");
		assert!(
			len + nwords + usize::from(nbits != 0) <= self.words.len(),
			"Shift destination is too small",
		);

		let words = &mut self.words;
		if nbits == 0 {
			//	A full-width bit shift is not a valid shift, so whole words move
			words.copy_within(0..len, nwords);
		} else {
			let back              = WORD_BITS - nbits;
			words[len + nwords]   = words[len - 1] >> back;
			for i in (1..len).rev() {
				words[i + nwords] = (words[i] << nbits) | (words[i - 1] >> back);
			}
			words[nwords]         = words[0] << nbits;
		}
		words[..nwords].fill(0);
	}

	//		shr_in_place
	/// Shifts the whole buffer right by `amount` bits.
	///
	/// Words are processed from the bottom up, and the vacated top words are
	/// zeroed. Shifting by the buffer's width or more leaves zero.
	///
	fn shr_in_place(&mut self, amount: usize) {
		let (nwords, nbits) = split_shift(amount);
		let len             = self.words.len();
		if nwords >= len {
			self.words.fill(0);
			return;
		}

		let keep  = len - nwords;
		let words = &mut self.words;
		if nbits == 0 {
			words.copy_within(nwords.., 0);
		} else {
			let back     = WORD_BITS - nbits;
			for i in 0..keep {
				let high = words.get(i + nwords + 1).map_or(0, |&w| w << back);
				words[i] = (words[i + nwords] >> nbits) | high;
			}
		}
		words[keep..].fill(0);
	}

	//		Multiplication

	//		product
	/// Computes `x * y` by schoolbook multiplication.
	///
	/// Each word of `y` is multiplied against the whole of `x` and accumulated
	/// into the window of the result starting at that word's index.
	///
	pub(crate) fn product(x_sign: Sign, x: &[Word], y_sign: Sign, y: &[Word]) -> Self {
		let mut result = Self::zeroed(x_sign.product(y_sign), x.len() + y.len());
		for (j, &word) in y.iter().enumerate() {
			if word != 0 {
				mul_accumulate_word(&mut result.words[j..j + x.len() + 1], x, word);
			}
		}
		result
	}
}



//		Functions

//		mul_accumulate_word
/// Adds `x * y` into `dest` in place.
///
/// This is the building block of schoolbook multiplication. The destination
/// must be at least one word longer than `x`, and the accumulated value must
/// fit in it; a carry escaping the destination is a caller bug and panics.
///
/// # Parameters
///
/// * `dest` - The accumulator, least-significant word first.
/// * `x`    - The multi-word multiplicand.
/// * `y`    - The single-word multiplier.
///
/// # Panics
///
/// Panics if `dest` is not longer than `x`, or if the sum does not fit in
/// `dest`.
///
pub fn mul_accumulate_word(dest: &mut [Word], x: &[Word], y: Word) {
	assert!(dest.len() > x.len(), "Accumulator must be longer than the multiplicand");

	let mut carry = 0;
	for (slot, &xi) in dest.iter_mut().zip(x) {
		let (hi, lo) = mul_word(xi, y);
		let (r, c1)  = add_with_carry(*slot, lo, 0);
		let (r, c2)  = add_with_carry(r, carry, 0);
		*slot        = r;
		//	x*y + slot + carry < 2^(2W), so this never overflows
		carry        = hi + c1 + c2;
	}
	for slot in &mut dest[x.len()..] {
		if carry == 0 {
			break;
		}
		(*slot, carry) = add_with_carry(*slot, carry, 0);
	}
	assert!(carry == 0, "Carry escaped the accumulation window");
}

//		words_to_f64
/// Approximates a magnitude as a floating-point value.
///
/// Only the three most-significant non-zero-led words contribute, each scaled
/// by `2^(W * index)`. Anything below them is beyond the mantissa anyway, but
/// the result is an approximation, not an exact conversion. Magnitudes past
/// the floating range become infinite.
///
pub(crate) fn words_to_f64(sign: Sign, words: &[Word]) -> f64 {
	let len       = words.iter().rposition(|&w| w != 0).map_or(0, |top| top + 1);
	let magnitude = words[..len].iter()
		.enumerate()
		.rev()
		.take(3)
		.map(|(index, &word)| scale(word, index))
		.sum::<f64>()
	;
	if sign == Sign::Negative { -magnitude } else { magnitude }
}

//		scale
/// Computes `word * 2^(W * index)`.
#[expect(clippy::cast_precision_loss, reason = "Approximate by definition")]
fn scale(word: Word, index: usize) -> f64 {
	if word == 0 {
		return 0.0;
	}
	let exponent = index
		.checked_mul(WORD_BITS as usize)
		.and_then(|e| i32::try_from(e).ok())
		.unwrap_or(i32::MAX)
	;
	word as f64 * 2.0_f64.powi(exponent)
}

//		split_shift
/// Splits a bit count into whole words and residual bits.
#[expect(clippy::integer_division, reason = "Whole words are wanted")]
#[expect(clippy::cast_possible_truncation, reason = "Residual is below WORD_BITS")]
const fn split_shift(amount: usize) -> (usize, u32) {
	let bits = WORD_BITS as usize;
	(amount / bits, (amount % bits) as u32)
}
