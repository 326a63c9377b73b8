//! Heterogeneous numbers and the left folds over them.
//!
//! The folds start from a [`BigInt`] accumulator and consume operands of any
//! numeric kind. Exact operands are accumulated in a single builder buffer and
//! normalized once at the end. The first inexact operand converts the
//! accumulator to a float, and the rest of the fold, that operand included, is
//! carried out in inexact arithmetic; there is no way back to exact integers.



//		Modules

#[cfg(test)]
#[path = "tests/number.rs"]
mod tests;



//		Packages

use crate::{
	bigint::{BigInt, Sign},
	errors::ArithmeticError,
	integer::Integer,
	magnitude::Magnitude,
};
use core::ops::{Add, Sub};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};



//		Enums

//		Number
/// A value of any numeric kind the folds understand.
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
	/// An exact integer in the small-integer range.
	Fixnum(i64),

	/// An exact integer outside the small-integer range.
	Bignum(BigInt),

	/// A double-precision float.
	Flonum(f64),

	/// A complex number with float components.
	Complex(Complex),
}

//󰭅		Number
impl Number {
	//		is_exact
	/// Whether the value is an exact integer.
	#[must_use]
	pub const fn is_exact(&self) -> bool {
		matches!(self, Self::Fixnum(_) | Self::Bignum(_))
	}

	//		to_inexact
	/// The value as a float or complex number.
	#[expect(clippy::cast_precision_loss, reason = "Inexact arithmetic is approximate")]
	fn to_inexact(&self) -> Inexact {
		match self {
			Self::Fixnum(v)  => Inexact::Real(*v as f64),
			Self::Bignum(b)  => Inexact::Real(b.to_f64()),
			Self::Flonum(f)  => Inexact::Real(*f),
			Self::Complex(z) => Inexact::Complex(*z),
		}
	}
}

//󰭅		From<Complex>
impl From<Complex> for Number {
	//		from
	fn from(value: Complex) -> Self {
		Self::Complex(value)
	}
}

//󰭅		From<f64>
impl From<f64> for Number {
	//		from
	fn from(value: f64) -> Self {
		Self::Flonum(value)
	}
}

//󰭅		From<Integer>
impl From<Integer> for Number {
	//		from
	fn from(value: Integer) -> Self {
		match value {
			Integer::Fixnum(v) => Self::Fixnum(v),
			Integer::Bignum(b) => Self::Bignum(b),
		}
	}
}

//		Operand
/// One element of a fold: a number, or any other host value.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
	/// A numeric value.
	Number(Number),

	/// Anything that is not a number, given as its printed form.
	NonNumeric(String),
}

//󰭅		From<BigInt>
impl From<BigInt> for Operand {
	//		from
	fn from(value: BigInt) -> Self {
		Self::Number(Number::Bignum(value))
	}
}

//󰭅		From<Complex>
impl From<Complex> for Operand {
	//		from
	fn from(value: Complex) -> Self {
		Self::Number(Number::Complex(value))
	}
}

//󰭅		From<f64>
impl From<f64> for Operand {
	//		from
	fn from(value: f64) -> Self {
		Self::Number(Number::Flonum(value))
	}
}

//󰭅		From<i64>
impl From<i64> for Operand {
	//		from
	fn from(value: i64) -> Self {
		Self::Number(Number::Fixnum(value))
	}
}

//󰭅		From<Integer>
impl From<Integer> for Operand {
	//		from
	fn from(value: Integer) -> Self {
		Self::Number(value.into())
	}
}

//󰭅		From<Number>
impl From<Number> for Operand {
	//		from
	fn from(value: Number) -> Self {
		Self::Number(value)
	}
}

//		Direction
/// Whether a fold adds or subtracts its operands.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Direction {
	Add,
	Sub,
}

//		Inexact
/// The accumulator of a fold once it has been promoted.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Inexact {
	Real(f64),
	Complex(Complex),
}

//󰭅		Inexact
impl Inexact {
	//		apply
	fn apply(self, direction: Direction, rhs: Self) -> Self {
		match (self, rhs) {
			(Self::Real(x), Self::Real(y)) => match direction {
				Direction::Add => Self::Real(x + y),
				Direction::Sub => Self::Real(x - y),
			},
			(x, y) => {
				let (x, y) = (x.to_complex(), y.to_complex());
				Self::Complex(match direction {
					Direction::Add => x + y,
					Direction::Sub => x - y,
				})
			},
		}
	}

	//		to_complex
	const fn to_complex(self) -> Complex {
		match self {
			Self::Real(re)   => Complex::new(re, 0.0),
			Self::Complex(z) => z,
		}
	}

	//		into_number
	/// A complex result with no imaginary part collapses to a float.
	fn into_number(self) -> Number {
		match self {
			Self::Real(x)                   => Number::Flonum(x),
			Self::Complex(z) if z.im == 0.0 => Number::Flonum(z.re),
			Self::Complex(z)                => Number::Complex(z),
		}
	}
}



//		Structs

//		Complex
/// A complex number with double-precision components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Complex {
	/// The real part.
	pub re: f64,

	/// The imaginary part.
	pub im: f64,
}

//󰭅		Complex
impl Complex {
	//		new
	/// Creates a new [`Complex`].
	#[must_use]
	pub const fn new(re: f64, im: f64) -> Self {
		Self { re, im }
	}
}

//󰭅		Add
impl Add for Complex {
	type Output = Self;

	//		add
	fn add(self, rhs: Self) -> Self::Output {
		Self::new(self.re + rhs.re, self.im + rhs.im)
	}
}

//󰭅		Sub
impl Sub for Complex {
	type Output = Self;

	//		sub
	fn sub(self, rhs: Self) -> Self::Output {
		Self::new(self.re - rhs.re, self.im - rhs.im)
	}
}



//		Functions

//		fold_add
/// Computes `acc + operands[0] + operands[1] + ...`.
///
/// Fixnums and bignums are added exactly and the result is normalized. Once a
/// float or complex operand is met, the accumulator is converted with
/// [`BigInt::to_f64()`] and every remaining operand is added inexactly, so the
/// result is then a [`Number::Flonum`] or [`Number::Complex`].
///
/// # Parameters
///
/// * `acc`      - The starting value.
/// * `operands` - The values to add, in order.
///
/// # Errors
///
/// Returns [`ArithmeticError::TypeMismatch`] for the first non-numeric
/// operand. Nothing after it is looked at.
///
pub fn fold_add(acc: &BigInt, operands: &[Operand]) -> Result<Number, ArithmeticError> {
	fold(acc, operands, Direction::Add)
}

//		fold_sub
/// Computes `acc - operands[0] - operands[1] - ...`.
///
/// Promotion and errors follow [`fold_add()`].
///
/// # Errors
///
/// Returns [`ArithmeticError::TypeMismatch`] for the first non-numeric
/// operand.
///
pub fn fold_sub(acc: &BigInt, operands: &[Operand]) -> Result<Number, ArithmeticError> {
	fold(acc, operands, Direction::Sub)
}

//		fold
/// Shared exact phase of both folds.
fn fold(acc: &BigInt, operands: &[Operand], direction: Direction) -> Result<Number, ArithmeticError> {
	let mut r = Magnitude::copy_of(acc.sign(), acc.words());
	for (index, operand) in operands.iter().enumerate() {
		match operand {
			Operand::Number(Number::Fixnum(0)) => {},
			Operand::Number(Number::Fixnum(y)) => {
				let y_sign = match direction {
					Direction::Add => Sign::of(*y),
					Direction::Sub => Sign::of(*y).flip(),
				};
				r = Magnitude::sum_scalar(r.sign(), r.words(), y_sign, y.unsigned_abs());
			},
			Operand::Number(Number::Bignum(y)) => {
				r = match direction {
					Direction::Add => Magnitude::sum(r.sign(), r.words(), y.sign(), y.words()),
					Direction::Sub => Magnitude::difference(r.sign(), r.words(), y.sign(), y.words()),
				};
			},
			Operand::Number(Number::Flonum(_) | Number::Complex(_)) => {
				trace!(index, "Promoting fold to inexact arithmetic");
				let rest = operands.get(index..).unwrap_or_default();
				return fold_inexact(Inexact::Real(r.to_f64()), rest, direction);
			},
			Operand::NonNumeric(value) => {
				debug!(index, value = %value, "Non-numeric operand in fold");
				return Err(ArithmeticError::TypeMismatch(value.clone()));
			},
		}
		r.trim();
	}
	Ok(r.normalize().into())
}

//		fold_inexact
/// Inexact phase of both folds, from the first inexact operand onwards.
fn fold_inexact(
	mut acc:   Inexact,
	operands:  &[Operand],
	direction: Direction,
) -> Result<Number, ArithmeticError> {
	for operand in operands {
		match operand {
			Operand::Number(number)    => acc = acc.apply(direction, number.to_inexact()),
			Operand::NonNumeric(value) => {
				debug!(value = %value, "Non-numeric operand in inexact fold");
				return Err(ArithmeticError::TypeMismatch(value.clone()));
			},
		}
	}
	Ok(acc.into_number())
}
