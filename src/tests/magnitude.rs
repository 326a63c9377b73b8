//		Packages

use super::*;
use claims::assert_matches;



//		Tests

mod construction {
	use super::*;

	//		from_i64
	#[test]
	fn from_i64__positive() {
		let m = Magnitude::from_i64(42);
		assert_eq!(m.sign(),  Sign::Positive);
		assert_eq!(m.words(), &[42]);
	}
	#[test]
	fn from_i64__negative() {
		let m = Magnitude::from_i64(-42);
		assert_eq!(m.sign(),  Sign::Negative);
		assert_eq!(m.words(), &[42]);
	}
	#[test]
	fn from_i64__zero() {
		let m = Magnitude::from_i64(0);
		assert_eq!(m.sign(),  Sign::Zero);
		assert_eq!(m.words(), &[0]);
	}
	#[test]
	fn from_i64__min() {
		let m = Magnitude::from_i64(i64::MIN);
		assert_eq!(m.sign(),  Sign::Negative);
		assert_eq!(m.words(), &[1 << 63]);
	}

	//		from_wide
	#[test]
	fn from_wide__trims() {
		assert_eq!(Magnitude::from_wide(Sign::Positive, 5).words(),            &[5]);
		assert_eq!(Magnitude::from_wide(Sign::Positive, 1 << 64).words(),      &[0, 1]);
		assert_eq!(Magnitude::from_wide(Sign::Zero,     0).words(),            &[0]);
	}

	//		copy_of
	#[test]
	fn copy_of__independent() {
		let source = vec![1, 2, 3];
		let mut m  = Magnitude::copy_of(Sign::Positive, &source);
		m.words[0] = 99;
		assert_eq!(source,    vec![1, 2, 3]);
		assert_eq!(m.words(), &[99, 2, 3]);
	}
	#[test]
	#[should_panic(expected = "A magnitude needs at least one word")]
	fn copy_of__empty() {
		let _ = Magnitude::copy_of(Sign::Positive, &[]);
	}
}

mod normalization {
	use super::*;

	//		normalize
	#[test]
	fn normalize__strips_leading_zeros() {
		let m = Magnitude::copy_of(Sign::Positive, &[1, 2, 0, 0]);
		assert_matches!(m.normalize(), Integer::Bignum(b) if b.words() == [1, 2]);
	}
	#[test]
	fn normalize__zero() {
		assert_eq!(Magnitude::copy_of(Sign::Positive, &[0, 0, 0]).normalize(), Integer::Fixnum(0));
		assert_eq!(Magnitude::copy_of(Sign::Negative, &[0]).normalize(),       Integer::Fixnum(0));
		assert_eq!(Magnitude::copy_of(Sign::Zero,     &[0]).normalize(),       Integer::Fixnum(0));
	}
	#[test]
	fn normalize__demotes_at_boundaries() {
		let max = SMALL_INT_MAX.unsigned_abs();
		let min = SMALL_INT_MIN.unsigned_abs();
		assert_eq!(Magnitude::copy_of(Sign::Positive, &[max, 0]).normalize(), Integer::Fixnum(SMALL_INT_MAX));
		assert_eq!(Magnitude::copy_of(Sign::Negative, &[min, 0]).normalize(), Integer::Fixnum(SMALL_INT_MIN));
	}
	#[test]
	fn normalize__keeps_beyond_boundaries() {
		let max = SMALL_INT_MAX.unsigned_abs() + 1;
		let min = SMALL_INT_MIN.unsigned_abs() + 1;
		assert_matches!(
			Magnitude::copy_of(Sign::Positive, &[max]).normalize(),
			Integer::Bignum(b) if b.words() == [max] && b.sign() == Sign::Positive
		);
		assert_matches!(
			Magnitude::copy_of(Sign::Negative, &[min]).normalize(),
			Integer::Bignum(b) if b.words() == [min] && b.sign() == Sign::Negative
		);
	}

	//		trim
	#[test]
	fn trim__keeps_one_word() {
		let mut m = Magnitude::copy_of(Sign::Positive, &[0, 0, 0]);
		m.trim();
		assert_eq!(m.words(), &[0]);
	}
}

mod additive {
	use super::*;

	//		safe_size_for_add
	#[test]
	fn safe_size_for_add__equal_lengths() {
		assert_eq!(Magnitude::safe_size_for_add(&[1],    &[2]),    2);
		assert_eq!(Magnitude::safe_size_for_add(&[1, 1], &[2, 2]), 3);
	}
	#[test]
	fn safe_size_for_add__unequal_lengths() {
		assert_eq!(Magnitude::safe_size_for_add(&[1, 1],        &[2]),    2);
		assert_eq!(Magnitude::safe_size_for_add(&[2],           &[1, 1]), 2);
		assert_eq!(Magnitude::safe_size_for_add(&[1, WORD_MAX], &[2]),    3);
		assert_eq!(Magnitude::safe_size_for_add(&[2], &[1, 1, WORD_MAX]), 4);
	}

	//		sum
	#[test]
	fn sum__carry_into_new_word() {
		let m = Magnitude::sum(Sign::Positive, &[WORD_MAX], Sign::Positive, &[1]);
		assert_eq!(m.words(), &[0, 1]);
		assert_eq!(m.sign(),  Sign::Positive);
	}
	#[test]
	fn sum__carry_through_longer_operand() {
		let m = Magnitude::sum(Sign::Negative, &[WORD_MAX, WORD_MAX], Sign::Negative, &[1]);
		assert_eq!(m.words(), &[0, 0, 1]);
		assert_eq!(m.sign(),  Sign::Negative);
	}
	#[test]
	fn sum__mixed_signs_flip() {
		//	10 + -15 underflows and is fixed up to -5
		let m = Magnitude::sum(Sign::Positive, &[10], Sign::Negative, &[15]);
		assert_eq!(m.words()[0], 5);
		assert_eq!(m.sign(),     Sign::Negative);
	}
	#[test]
	fn sum__zero_sign_acts_positive() {
		let m = Magnitude::sum(Sign::Zero, &[0], Sign::Negative, &[7]);
		assert_eq!(m.words()[0], 7);
		assert_eq!(m.sign(),     Sign::Negative);
	}

	//		difference
	#[test]
	fn difference__borrow_across_words() {
		let m = Magnitude::difference(Sign::Positive, &[0, 1], Sign::Positive, &[1]);
		assert_eq!(m.words(), &[WORD_MAX, 0]);
		assert_eq!(m.sign(),  Sign::Positive);
	}
	#[test]
	fn difference__longer_subtrahend() {
		//	1 - 2^64 = -(2^64 - 1)
		let m = Magnitude::difference(Sign::Positive, &[1], Sign::Positive, &[0, 1]);
		assert_eq!(m.words(), &[WORD_MAX, 0]);
		assert_eq!(m.sign(),  Sign::Negative);
	}
	#[test]
	fn difference__equal_is_zero() {
		let m = Magnitude::difference(Sign::Negative, &[3, 4], Sign::Negative, &[3, 4]);
		assert_eq!(m.normalize(), Integer::Fixnum(0));
	}

	//		sum_scalar
	#[test]
	fn sum_scalar__carry() {
		let m = Magnitude::sum_scalar(Sign::Positive, &[WORD_MAX, WORD_MAX], Sign::Positive, 1);
		assert_eq!(m.words(), &[0, 0, 1]);
	}
	#[test]
	fn sum_scalar__underflow() {
		let m = Magnitude::sum_scalar(Sign::Positive, &[3], Sign::Negative, 10);
		assert_eq!(m.words(), &[7, 0]);
		assert_eq!(m.sign(),  Sign::Negative);
	}
}

mod shifting {
	use super::*;

	//		shifted_left
	#[test]
	fn shifted_left__within_word() {
		let m = Magnitude::shifted_left(Sign::Positive, &[0b1011], 4);
		assert_eq!(m.words(), &[0b1011_0000, 0]);
	}
	#[test]
	fn shifted_left__across_words() {
		let m = Magnitude::shifted_left(Sign::Positive, &[1 << 63, 1], 1);
		assert_eq!(m.words(), &[0, 3, 0]);
	}
	#[test]
	fn shifted_left__whole_words() {
		let m = Magnitude::shifted_left(Sign::Negative, &[5, 6], 128);
		assert_eq!(m.words(), &[0, 0, 5, 6]);
		assert_eq!(m.sign(),  Sign::Negative);
	}
	#[test]
	fn shifted_left__words_and_bits() {
		let m = Magnitude::shifted_left(Sign::Positive, &[WORD_MAX], 68);
		assert_eq!(m.words(), &[0, WORD_MAX << 4, 0xF]);
	}
	#[test]
	fn shifted_left__zero_amount() {
		let m = Magnitude::shifted_left(Sign::Positive, &[1, 2], 0);
		assert_eq!(m.words(), &[1, 2]);
	}

	//		shifted_right
	#[test]
	fn shifted_right__within_word() {
		let m = Magnitude::shifted_right(Sign::Positive, &[0b1011_0000], 4);
		assert_eq!(m.words(), &[0b1011]);
	}
	#[test]
	fn shifted_right__across_words() {
		let m = Magnitude::shifted_right(Sign::Positive, &[0, 3], 1);
		assert_eq!(m.words(), &[1 << 63, 1]);
	}
	#[test]
	fn shifted_right__whole_words() {
		let m = Magnitude::shifted_right(Sign::Positive, &[1, 2, 3], 64);
		assert_eq!(m.words(), &[2, 3, 0]);
	}
	#[test]
	fn shifted_right__words_and_bits() {
		let m = Magnitude::shifted_right(Sign::Positive, &[0, WORD_MAX << 4, 0xF], 68);
		assert_eq!(m.words(), &[WORD_MAX, 0, 0]);
	}
	#[test]
	fn shifted_right__everything() {
		let m = Magnitude::shifted_right(Sign::Positive, &[1, 2], 128);
		assert_eq!(m.words(), &[0, 0]);
		let m = Magnitude::shifted_right(Sign::Positive, &[1, 2], 1000);
		assert_eq!(m.words(), &[0, 0]);
	}

	//		shl_in_place
	#[test]
	fn shl_in_place__shares_buffer() {
		let mut m = Magnitude::zeroed(Sign::Positive, 4);
		m.words[..2].copy_from_slice(&[WORD_MAX, 1]);
		m.shl_in_place(2, 65);
		assert_eq!(m.words(), &[0, WORD_MAX << 1, 3, 0]);
	}
	#[test]
	#[should_panic(expected = "Shift destination is too small")]
	fn shl_in_place__undersized() {
		let mut m = Magnitude::copy_of(Sign::Positive, &[1, 2]);
		m.shl_in_place(2, 1);
	}
}

mod multiplication {
	use super::*;

	//		mul_accumulate_word
	#[test]
	fn mul_accumulate_word__into_zero() {
		let mut dest = [0; 2];
		mul_accumulate_word(&mut dest, &[123_456_789], 987_654_321);
		assert_eq!(dest, [121_932_631_112_635_269, 0]);
	}
	#[test]
	fn mul_accumulate_word__accumulates() {
		let mut dest = [10, 0, 0];
		mul_accumulate_word(&mut dest, &[WORD_MAX, WORD_MAX], WORD_MAX);
		//	(2^128 - 1)(2^64 - 1) + 10 = 2^192 - 2^128 - 2^64 + 11
		assert_eq!(dest, [11, WORD_MAX, WORD_MAX - 1]);
	}
	#[test]
	fn mul_accumulate_word__carry_propagates() {
		let mut dest = [WORD_MAX, WORD_MAX, 0];
		mul_accumulate_word(&mut dest, &[1], 1);
		assert_eq!(dest, [0, 0, 1]);
	}
	#[test]
	#[should_panic(expected = "Accumulator must be longer than the multiplicand")]
	fn mul_accumulate_word__undersized() {
		let mut dest = [0; 2];
		mul_accumulate_word(&mut dest, &[1, 2], 3);
	}
	#[test]
	#[should_panic(expected = "Carry escaped the accumulation window")]
	fn mul_accumulate_word__overflowing_window() {
		let mut dest = [0, WORD_MAX];
		mul_accumulate_word(&mut dest, &[WORD_MAX], 2);
	}

	//		product
	#[test]
	fn product__schoolbook() {
		let m = Magnitude::product(Sign::Positive, &[WORD_MAX, WORD_MAX], Sign::Negative, &[WORD_MAX, WORD_MAX]);
		//	(2^128 - 1)^2 = 2^256 - 2^129 + 1
		assert_eq!(m.words(), &[1, 0, WORD_MAX - 1, WORD_MAX]);
		assert_eq!(m.sign(),  Sign::Negative);
	}
}

mod conversion {
	use super::*;

	//		words_to_f64
	#[test]
	fn words_to_f64__single() {
		assert_eq!(words_to_f64(Sign::Positive, &[42]), 42.0);
		assert_eq!(words_to_f64(Sign::Negative, &[42]), -42.0);
	}
	#[test]
	fn words_to_f64__ignores_leading_zeros() {
		assert_eq!(words_to_f64(Sign::Positive, &[0, 1, 0, 0]), 2.0_f64.powi(64));
	}
	#[test]
	fn words_to_f64__top_three_words() {
		//	The lowest word is below the mantissa of the top word
		let value = words_to_f64(Sign::Positive, &[WORD_MAX, 0, 0, 1]);
		assert_eq!(value, 2.0_f64.powi(192));
	}
	#[test]
	fn words_to_f64__infinite() {
		let mut words = vec![0; 17];
		words[16]     = 1;
		assert_eq!(words_to_f64(Sign::Positive, &words), f64::INFINITY);
		assert_eq!(words_to_f64(Sign::Negative, &words), f64::NEG_INFINITY);
	}
}
