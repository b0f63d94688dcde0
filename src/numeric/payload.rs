// ============================================================================
// Numeric Payloads
// Classification of box payloads as finite numbers
// ============================================================================

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Classifies a payload as a number without coercing it.
///
/// Every type that may sit inside a [`NumericBox`](super::NumericBox) and
/// reach the validity gate implements this trait. Text, booleans and unit
/// are never numbers, even when their content looks numeric (`"0"` stays a
/// string).
pub trait Numeric {
    /// Numeric reading of the payload, `None` when it is not a number at all.
    fn as_f64(&self) -> Option<f64>;

    /// True when the payload is a number and neither NaN nor infinite.
    #[inline]
    fn is_number(&self) -> bool {
        self.as_f64().is_some_and(f64::is_finite)
    }
}

/// Right-hand operand of the arithmetic operations.
///
/// Non-numbers read as NaN, which the next gate rejects. This includes
/// `true`, `()` and `None`: they are not coerced to `1` or `0`.
pub trait Operand {
    /// The operand as `f64`, NaN when it is not a number.
    fn operand(&self) -> f64;
}

// ============================================================================
// Floating Point
// ============================================================================

impl Numeric for f64 {
    #[inline]
    fn as_f64(&self) -> Option<f64> {
        Some(*self)
    }
}

impl Numeric for f32 {
    #[inline]
    fn as_f64(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

// ============================================================================
// Integers (always finite)
// ============================================================================

macro_rules! impl_numeric_for_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Numeric for $ty {
                #[inline]
                fn as_f64(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

impl_numeric_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Numeric for Decimal {
    #[inline]
    fn as_f64(&self) -> Option<f64> {
        self.to_f64()
    }
}

// ============================================================================
// Non-numbers
// ============================================================================

macro_rules! impl_non_numeric {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Numeric for $ty {
                #[inline]
                fn as_f64(&self) -> Option<f64> {
                    None
                }
            }
        )*
    };
}

impl_non_numeric!(str, String, char, bool, ());

// ============================================================================
// Wrappers
// ============================================================================

/// `None` plays the part of a null payload.
impl<T: Numeric> Numeric for Option<T> {
    #[inline]
    fn as_f64(&self) -> Option<f64> {
        self.as_ref().and_then(Numeric::as_f64)
    }
}

impl<T: Numeric + ?Sized> Numeric for &T {
    #[inline]
    fn as_f64(&self) -> Option<f64> {
        (**self).as_f64()
    }
}

// ============================================================================
// Operands
// ============================================================================

macro_rules! impl_operand_from_numeric {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Operand for $ty {
                #[inline]
                fn operand(&self) -> f64 {
                    self.as_f64().unwrap_or(f64::NAN)
                }
            }
        )*
    };
}

impl_operand_from_numeric!(
    f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    str, String, char, bool, (),
);

impl Operand for Decimal {
    #[inline]
    fn operand(&self) -> f64 {
        Numeric::as_f64(self).unwrap_or(f64::NAN)
    }
}

impl<T: Numeric> Operand for Option<T> {
    #[inline]
    fn operand(&self) -> f64 {
        Numeric::as_f64(self).unwrap_or(f64::NAN)
    }
}

impl<T: Operand + ?Sized> Operand for &T {
    #[inline]
    fn operand(&self) -> f64 {
        (**self).operand()
    }
}
