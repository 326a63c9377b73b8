//! Single-word primitives: add with carry, subtract with borrow, and the
//! double-width product of two words.
//!
//! Everything here works on one [`Word`] at a time and returns the result word
//! together with the outgoing carry, borrow, or high half. The multi-word
//! algorithms in the magnitude module are built entirely from these.

#![allow(clippy::arithmetic_side_effects, reason = "Half-word products cannot overflow a word")]



//		Modules

#[cfg(test)]
#[path = "tests/word.rs"]
mod tests;



//		Type aliases

/// The unit of storage in a magnitude buffer.
pub type Word = u64;



//		Constants

/// The number of bits in a [`Word`].
pub const WORD_BITS: u32 = Word::BITS;

/// The number of bits in half a [`Word`].
pub const HALF_BITS: u32 = WORD_BITS >> 1;

/// The all-ones word.
pub const WORD_MAX: Word = Word::MAX;

/// Mask selecting the low half of a [`Word`].
const LO_MASK: Word = (1 << HALF_BITS) - 1;



//		Functions

//		add_with_carry
/// Adds two words and an incoming carry.
///
/// Returns `(x + y + carry) mod 2^W` and the outgoing carry. The carry is set
/// when the sum wrapped, i.e. when the result is below `x`, or when it is equal
/// to `x` even though something non-zero was added (which only happens if the
/// addend and the carry summed to exactly `2^W`).
///
/// # Parameters
///
/// * `x`     - The first addend.
/// * `y`     - The second addend.
/// * `carry` - The incoming carry, `0` or `1`.
///
#[must_use]
pub const fn add_with_carry(x: Word, y: Word, carry: Word) -> (Word, Word) {
	let result = x.wrapping_add(y).wrapping_add(carry);
	let out    = result < x || (result == x && (y > 0 || carry > 0));
	(result, out as Word)
}

//		sub_with_borrow
/// Subtracts a word and an incoming borrow from another word.
///
/// Returns `(x - y - borrow) mod 2^W` and the outgoing borrow, using the mirror
/// image of the rule in [`add_with_carry()`].
///
/// # Parameters
///
/// * `x`      - The minuend.
/// * `y`      - The subtrahend.
/// * `borrow` - The incoming borrow, `0` or `1`.
///
#[must_use]
pub const fn sub_with_borrow(x: Word, y: Word, borrow: Word) -> (Word, Word) {
	let result = x.wrapping_sub(y).wrapping_sub(borrow);
	let out    = result > x || (result == x && (y > 0 || borrow > 0));
	(result, out as Word)
}

//		mul_word
/// Multiplies two full-width words.
///
/// Returns the high and low words of the double-width product. Each operand is
/// split into half words so that every partial product fits in one word, and
/// the four cross products are recombined with explicit carries.
///
/// # Parameters
///
/// * `x` - The multiplicand.
/// * `y` - The multiplier.
///
#[must_use]
pub const fn mul_word(x: Word, y: Word) -> (Word, Word) {
	let (xl, xh) = (x & LO_MASK, x >> HALF_BITS);
	let (yl, yh) = (y & LO_MASK, y >> HALF_BITS);

	let mut lo = xl * yl;
	let     t1 = xl * yh;
	let     t2 = xh * yl;
	let mut hi = xh * yh;

	//	Middle terms, which may themselves overflow one word
	let t3 = t1.wrapping_add(t2);
	if t3 < t1 {
		hi += 1 << HALF_BITS;
	}
	hi += t3 >> HALF_BITS;

	let t4 = (t3 & LO_MASK) << HALF_BITS;
	lo     = lo.wrapping_add(t4);
	if lo < t4 {
		hi += 1;
	}
	(hi, lo)
}
