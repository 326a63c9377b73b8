//		Packages

use super::*;



//		Tests

mod carries {
	use super::*;

	//		add_with_carry
	#[test]
	fn add_with_carry__no_carry() {
		assert_eq!(add_with_carry(1, 2, 0), (3, 0));
		assert_eq!(add_with_carry(1, 2, 1), (4, 0));
		assert_eq!(add_with_carry(0, 0, 0), (0, 0));
	}
	#[test]
	fn add_with_carry__wraps() {
		assert_eq!(add_with_carry(WORD_MAX, 1, 0),        (0, 1));
		assert_eq!(add_with_carry(WORD_MAX, WORD_MAX, 0), (WORD_MAX - 1, 1));
		assert_eq!(add_with_carry(WORD_MAX, WORD_MAX, 1), (WORD_MAX, 1));
	}
	#[test]
	fn add_with_carry__result_equals_x() {
		//	The addend plus carry is exactly 2^W, so the result equals x
		assert_eq!(add_with_carry(5, WORD_MAX, 1), (5, 1));
		assert_eq!(add_with_carry(5, 0, 0),        (5, 0));
	}
	#[test]
	fn add_with_carry__carry_only() {
		assert_eq!(add_with_carry(WORD_MAX, 0, 1), (0, 1));
		assert_eq!(add_with_carry(7, 0, 1),        (8, 0));
	}

	//		sub_with_borrow
	#[test]
	fn sub_with_borrow__no_borrow() {
		assert_eq!(sub_with_borrow(5, 3, 0), (2, 0));
		assert_eq!(sub_with_borrow(5, 3, 1), (1, 0));
		assert_eq!(sub_with_borrow(5, 5, 0), (0, 0));
	}
	#[test]
	fn sub_with_borrow__wraps() {
		assert_eq!(sub_with_borrow(0, 1, 0), (WORD_MAX, 1));
		assert_eq!(sub_with_borrow(3, 5, 0), (WORD_MAX - 1, 1));
		assert_eq!(sub_with_borrow(0, 0, 1), (WORD_MAX, 1));
	}
	#[test]
	fn sub_with_borrow__result_equals_x() {
		assert_eq!(sub_with_borrow(5, WORD_MAX, 1), (5, 1));
		assert_eq!(sub_with_borrow(5, 0, 0),        (5, 0));
	}
}

mod multiplication {
	use super::*;

	fn reference(x: Word, y: Word) -> (Word, Word) {
		let product = u128::from(x) * u128::from(y);
		((product >> WORD_BITS) as Word, product as Word)
	}

	//		mul_word
	#[test]
	fn mul_word__small() {
		assert_eq!(mul_word(0, 0),         (0, 0));
		assert_eq!(mul_word(6, 7),         (0, 42));
		assert_eq!(mul_word(1, WORD_MAX),  (0, WORD_MAX));
	}
	#[test]
	fn mul_word__full_width() {
		assert_eq!(mul_word(WORD_MAX, WORD_MAX), (WORD_MAX - 1, 1));
		assert_eq!(mul_word(1 << 63, 2),         (1, 0));
		assert_eq!(mul_word(1 << 32, 1 << 32),   (1, 0));
	}
	#[test]
	fn mul_word__matches_double_width() {
		let samples = [
			0,
			1,
			0xFFFF_FFFF,
			0x1_0000_0000,
			0x8000_0000_0000_0000,
			0xDEAD_BEEF_CAFE_BABE,
			0x0123_4567_89AB_CDEF,
			WORD_MAX,
			WORD_MAX - 1,
		];
		for &x in &samples {
			for &y in &samples {
				assert_eq!(mul_word(x, y), reference(x, y), "{x:#x} * {y:#x}");
			}
		}
	}
	#[test]
	fn mul_word__middle_term_overflow() {
		//	Both cross products are close to 2^64, so their sum wraps
		let x = 0xFFFF_FFFF_0000_0001;
		let y = 0x0000_0001_FFFF_FFFF;
		assert_eq!(mul_word(x, y), reference(x, y));
		assert_eq!(mul_word(y, x), reference(x, y));
	}
}
