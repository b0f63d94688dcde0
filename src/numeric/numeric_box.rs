// ============================================================================
// Numeric Box
// Immutable wrapper with finite-number gated functor/applicative/chain
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::payload::{Numeric, Operand};
use std::fmt;

/// Immutable container for a single payload, gated on finite numbers.
///
/// Every consuming operation first checks that the payload is a finite
/// number. When it is not, the operation returns [`NumericBox::Invalid`]
/// without running any user function, so invalidity is absorbing: nothing
/// derived from an invalid box is ever valid again. Only a fresh
/// [`NumericBox::of`] produces a valid box.
///
/// Payloads produced by [`map`](NumericBox::map) are not classified when
/// they are stored; they are checked at the next gate instead. A division by
/// zero therefore yields `Value(inf)`, which reports itself invalid on the
/// following operation or extraction.
///
/// # Example
/// ```
/// use numeric_box::numeric::NumericBox;
///
/// let golden = NumericBox::of(5.0).sqrt().add(1).div(2);
/// assert_eq!(golden.value_of(), Some((5.0_f64.sqrt() + 1.0) / 2.0));
///
/// assert_eq!(NumericBox::of(2).add("foo").value_of(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NumericBox<T> {
    /// A held payload (a number, or a function for applicative use)
    Value(T),
    /// The canonical invalid box
    #[default]
    Invalid,
}

// ============================================================================
// Construction
// ============================================================================

impl<T> NumericBox<T> {
    /// Wrap any payload without classification.
    ///
    /// This is the applicative point. It is how functions enter the algebra:
    /// `NumericBox::pure(f).ap(NumericBox::of(x))`.
    #[inline]
    pub const fn pure(value: T) -> Self {
        NumericBox::Value(value)
    }

    /// The canonical invalid box.
    #[inline]
    pub const fn invalid() -> Self {
        NumericBox::Invalid
    }
}

impl<T: Numeric> NumericBox<T> {
    /// Wrap a payload, tagging it invalid up front if it is not a finite number.
    #[inline]
    pub fn of(value: T) -> Self {
        if value.is_number() {
            NumericBox::Value(value)
        } else {
            tracing::trace!("rejected non-finite payload at construction");
            NumericBox::Invalid
        }
    }
}

// ============================================================================
// Validity Gate and Extraction
// ============================================================================

impl<T: Numeric> NumericBox<T> {
    /// True when the box holds a finite number.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.value().is_some()
    }

    /// Borrow the payload if it passes the gate.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            NumericBox::Value(v) if v.is_number() => Some(v),
            NumericBox::Value(_) => {
                tracing::trace!("held payload failed the finite-number gate");
                None
            },
            NumericBox::Invalid => None,
        }
    }

    /// Extract the payload, `None` when the box is invalid.
    ///
    /// This is the only way to observe the wrapped value from outside the
    /// algebra. A legitimate zero is `Some(0)`, never confused with absence.
    #[inline]
    pub fn value_of(self) -> Option<T> {
        match self {
            NumericBox::Value(v) if v.is_number() => Some(v),
            NumericBox::Value(_) => {
                tracing::trace!("held payload failed the finite-number gate");
                None
            },
            NumericBox::Invalid => None,
        }
    }

    /// Extract the payload for use with `?`.
    ///
    /// # Errors
    /// Returns `InvalidNumericState` if the box does not hold a finite number.
    #[inline]
    pub fn try_value(self) -> NumericResult<T> {
        self.value_of().ok_or(NumericError::InvalidNumericState)
    }
}

// ============================================================================
// Functor and Chain
// ============================================================================

impl<T: Numeric> NumericBox<T> {
    /// Apply `f` to a valid payload; an invalid box short-circuits without calling `f`.
    ///
    /// The result is not classified here, so `f` may return a function (for
    /// later use with [`ap`](NumericBox::ap)) or a non-finite number.
    #[inline]
    pub fn map<U, F>(self, f: F) -> NumericBox<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.value_of() {
            Some(v) => NumericBox::Value(f(v)),
            None => NumericBox::Invalid,
        }
    }

    /// Sequence a computation that itself returns a box.
    ///
    /// The result of `f` is returned as is, not re-wrapped.
    #[inline]
    pub fn chain<U, F>(self, f: F) -> NumericBox<U>
    where
        F: FnOnce(T) -> NumericBox<U>,
    {
        match self.value_of() {
            Some(v) => f(v),
            None => NumericBox::Invalid,
        }
    }
}

// ============================================================================
// Applicative
// ============================================================================

impl<F> NumericBox<F> {
    /// Apply the held function to the value held by `other`.
    ///
    /// Delegates to `other.map`, so the only gate is the one on `other`.
    /// Curried functions apply one argument at a time:
    ///
    /// ```
    /// use numeric_box::numeric::NumericBox;
    ///
    /// let add = |a: f64| move |b: f64| a + b;
    /// let hyp = NumericBox::pure(add)
    ///     .ap(NumericBox::of(3.0).sqr())
    ///     .ap(NumericBox::of(4.0).sqr())
    ///     .sqrt();
    /// assert_eq!(hyp.value_of(), Some(5.0));
    /// ```
    #[inline]
    pub fn ap<A, B>(self, other: NumericBox<A>) -> NumericBox<B>
    where
        F: FnOnce(A) -> B,
        A: Numeric,
    {
        match self {
            NumericBox::Value(f) => other.map(f),
            NumericBox::Invalid => NumericBox::Invalid,
        }
    }
}

/// Lift a curried binary function over two boxes.
///
/// Equivalent to `fx.map(f).ap(fy)`.
#[inline]
pub fn lift_a2<A, B, C, G, F>(f: F, fx: NumericBox<A>, fy: NumericBox<B>) -> NumericBox<C>
where
    A: Numeric,
    B: Numeric,
    F: FnOnce(A) -> G,
    G: FnOnce(B) -> C,
{
    fx.map(f).ap(fy)
}

// ============================================================================
// Arithmetic
// ============================================================================

impl<T: Numeric> NumericBox<T> {
    /// Map over the payload read as `f64`.
    #[inline]
    fn map_f64<F>(self, f: F) -> NumericBox<f64>
    where
        F: FnOnce(f64) -> f64,
    {
        self.map(|a| f(a.as_f64().unwrap_or(f64::NAN)))
    }

    /// `a + b`
    #[inline]
    pub fn add<N: Operand>(self, b: N) -> NumericBox<f64> {
        let b = b.operand();
        self.map_f64(|a| a + b)
    }

    /// `a - b`
    #[inline]
    pub fn sub<N: Operand>(self, b: N) -> NumericBox<f64> {
        let b = b.operand();
        self.map_f64(|a| a - b)
    }

    /// `b - a`
    #[inline]
    pub fn sub_from<N: Operand>(self, b: N) -> NumericBox<f64> {
        let b = b.operand();
        self.map_f64(|a| b - a)
    }

    /// `a * b`
    #[inline]
    pub fn mul<N: Operand>(self, b: N) -> NumericBox<f64> {
        let b = b.operand();
        self.map_f64(|a| a * b)
    }

    /// `a / b`. Dividing by zero holds an infinity that fails the next gate.
    #[inline]
    pub fn div<N: Operand>(self, b: N) -> NumericBox<f64> {
        let b = b.operand();
        self.map_f64(|a| a / b)
    }

    /// `a` raised to the power `b`
    #[inline]
    pub fn exp<N: Operand>(self, b: N) -> NumericBox<f64> {
        let b = b.operand();
        self.map_f64(|a| a.powf(b))
    }

    /// `a` squared
    #[inline]
    pub fn sqr(self) -> NumericBox<f64> {
        self.map_f64(|a| a.powi(2))
    }

    /// Principal square root; negative payloads yield NaN.
    #[inline]
    pub fn sqrt(self) -> NumericBox<f64> {
        self.map_f64(f64::sqrt)
    }

    /// `a + 1`
    #[inline]
    pub fn inc(self) -> NumericBox<f64> {
        self.map_f64(|a| a + 1.0)
    }

    /// `a - 1`
    #[inline]
    pub fn dec(self) -> NumericBox<f64> {
        self.map_f64(|a| a - 1.0)
    }

    /// `-a`
    #[inline]
    pub fn neg(self) -> NumericBox<f64> {
        self.map_f64(|a| -a)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

/// A box is never a number itself, so a nested box fails the gate.
impl<T> Numeric for NumericBox<T> {
    #[inline]
    fn as_f64(&self) -> Option<f64> {
        None
    }
}

/// A box used as an operand reads as its gated payload.
impl<T: Numeric> Operand for NumericBox<T> {
    #[inline]
    fn operand(&self) -> f64 {
        self.value()
            .and_then(Numeric::as_f64)
            .unwrap_or(f64::NAN)
    }
}

impl<T: Numeric> From<NumericBox<T>> for Option<T> {
    #[inline]
    fn from(value: NumericBox<T>) -> Self {
        value.value_of()
    }
}

impl<T: Numeric + fmt::Display> fmt::Display for NumericBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(v) => write!(f, "{}", v),
            None => write!(f, "undefined"),
        }
    }
}

// ============================================================================
// Serialization (as an optional payload)
// ============================================================================

#[cfg(feature = "serde")]
impl<T: Numeric + serde::Serialize> serde::Serialize for NumericBox<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.value(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Numeric + serde::Deserialize<'de>> serde::Deserialize<'de> for NumericBox<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match <Option<T> as serde::Deserialize>::deserialize(deserializer)? {
            Some(v) => NumericBox::of(v),
            None => NumericBox::Invalid,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("box should be valid");
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_pointed() {
        assert_eq!(NumericBox::of(0).value_of(), Some(0));
        assert_eq!(NumericBox::of(0.0).value_of(), Some(0.0));
    }

    #[test]
    fn test_of_tags_invalid_payloads() {
        assert_eq!(NumericBox::of(f64::NAN), NumericBox::Invalid);
        assert_eq!(NumericBox::of("foo"), NumericBox::Invalid);
        assert_eq!(NumericBox::of(3), NumericBox::Value(3));
        assert_eq!(NumericBox::<f64>::default(), NumericBox::invalid());
    }

    #[test]
    fn test_recognises_numbers() {
        assert!(NumericBox::of(5).is_valid());
        assert!(NumericBox::of(-1).is_valid());
        assert!(NumericBox::of(2.5_f32).is_valid());
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(!NumericBox::of(f64::NAN).is_valid());
        assert!(!NumericBox::of(f64::INFINITY).is_valid());
        assert!(!NumericBox::of(f64::NEG_INFINITY).is_valid());
    }

    #[test]
    fn test_does_not_coerce() {
        assert!(!NumericBox::of("0").is_valid());
        assert!(!NumericBox::of(None::<f64>).is_valid());
        assert!(!NumericBox::of(()).is_valid());
    }

    #[test]
    fn test_adds() {
        assert_eq!(NumericBox::of(0).add(1).value_of(), Some(1.0));
    }

    #[test]
    fn test_subtracts() {
        assert_eq!(NumericBox::of(0).sub(1).value_of(), Some(-1.0));
        assert_eq!(NumericBox::of(3).sub_from(1).value_of(), Some(-2.0));
    }

    #[test]
    fn test_multiplies_and_divides() {
        assert_eq!(NumericBox::of(2).mul(2).value_of(), Some(4.0));
        assert_eq!(NumericBox::of(-2).mul(2).value_of(), Some(-4.0));
        assert_eq!(NumericBox::of(4).div(2).value_of(), Some(2.0));
    }

    #[test]
    fn test_powers() {
        assert_eq!(NumericBox::of(4).sqr().value_of(), Some(16.0));
        assert_eq!(NumericBox::of(16).sqrt().value_of(), Some(4.0));
        assert_close(NumericBox::of(2).exp(3).value_of(), 8.0);
        assert_close(NumericBox::of(3).exp(2).value_of(), 9.0);
        assert_close(NumericBox::of(3).exp(2.5).value_of(), 15.588457268119896);
        assert_close(NumericBox::of(10).exp(-1).value_of(), 0.1);
        assert_close(NumericBox::of(2).exp(3).exp(2).value_of(), 64.0);
    }

    #[test]
    fn test_unary_steps() {
        assert_eq!(NumericBox::of(3).inc().value_of(), Some(4.0));
        assert_eq!(NumericBox::of(3).dec().value_of(), Some(2.0));
        assert_eq!(NumericBox::of(3).neg().value_of(), Some(-3.0));
    }

    #[test]
    fn test_division_by_zero_fails_at_next_gate() {
        let quotient = NumericBox::of(1).div(0);
        assert_eq!(quotient, NumericBox::Value(f64::INFINITY));
        assert!(!quotient.is_valid());
        assert_eq!(quotient.inc().value_of(), None);
    }

    #[test]
    fn test_negative_sqrt_is_invalid() {
        assert_eq!(NumericBox::of(-4).sqrt().value_of(), None);
    }

    #[test]
    fn test_non_numeric_operand() {
        let sum = NumericBox::of(2).add("foo");
        assert!(matches!(sum, NumericBox::Value(v) if v.is_nan()));
        assert_eq!(sum.value_of(), None);
        assert_eq!(NumericBox::of(2).add(true).value_of(), None);
        assert_eq!(NumericBox::of(2).add(None::<f64>).value_of(), None);
        assert_eq!(NumericBox::of(2).add(Some(1)).value_of(), Some(3.0));
    }

    #[test]
    fn test_box_as_operand() {
        let sum = NumericBox::of(2).add(NumericBox::of(3));
        assert_eq!(sum.value_of(), Some(5.0));
        assert_eq!(NumericBox::of(2).mul(NumericBox::<f64>::invalid()).value_of(), None);
    }

    #[test]
    fn test_nested_box_is_not_a_number() {
        let nested = NumericBox::of(NumericBox::of(3));
        assert!(!nested.is_valid());
        assert_eq!(nested, NumericBox::Invalid);
        assert_eq!(nested.map(|inner| inner.value_of()).value_of(), None);
    }

    #[test]
    fn test_map_skips_function_on_invalid() {
        let mut called = false;
        let result = NumericBox::of("foo").map(|_| {
            called = true;
            1.0
        });
        assert!(!called);
        assert_eq!(result, NumericBox::Invalid);
    }

    #[test]
    fn test_chain() {
        assert_eq!(NumericBox::of(2).chain(|n| NumericBox::of(n + 2)).value_of(), Some(4));
        assert_eq!(NumericBox::of(10).chain(|x| NumericBox::of(x * x)).value_of(), Some(100));
        assert_eq!(
            NumericBox::of(f64::INFINITY)
                .chain(|x| NumericBox::of(x))
                .value_of(),
            None
        );
    }

    #[test]
    fn test_ap() {
        let add = |a: f64| move |b: f64| a + b;
        assert_eq!(
            NumericBox::pure(add)
                .ap(NumericBox::of(2.0))
                .ap(NumericBox::of(2.0))
                .value_of(),
            Some(4.0)
        );
        assert_eq!(
            NumericBox::<fn(f64) -> f64>::invalid()
                .ap(NumericBox::of(2.0))
                .value_of(),
            None
        );
    }

    #[test]
    fn test_lift_a2() {
        let add = |a: i32| move |b: i32| a + b;
        assert_eq!(lift_a2(add, NumericBox::of(2), NumericBox::of(4)).value_of(), Some(6));
        assert_eq!(lift_a2(add, NumericBox::of(2), NumericBox::invalid()).value_of(), None);
    }

    #[test]
    fn test_try_value() {
        assert_eq!(NumericBox::of(7).try_value(), Ok(7));
        assert_eq!(
            NumericBox::of(1).div(0).try_value(),
            Err(NumericError::InvalidNumericState)
        );
    }

    #[test]
    fn test_into_option() {
        let valid: Option<i64> = NumericBox::of(9_i64).into();
        let invalid: Option<f64> = NumericBox::of(f64::NAN).into();
        assert_eq!(valid, Some(9));
        assert_eq!(invalid, None);
    }

    #[test]
    fn test_display() {
        assert_eq!(NumericBox::of(2.5).to_string(), "2.5");
        assert_eq!(NumericBox::of(1).div(0).to_string(), "undefined");
    }

    #[test]
    fn test_decimal_payload() {
        let d = rust_decimal::Decimal::new(25, 1); // 2.5
        assert_eq!(NumericBox::of(d).mul(2).value_of(), Some(5.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_optional() {
        assert_eq!(serde_json::to_string(&NumericBox::of(1.5)).unwrap(), "1.5");
        assert_eq!(serde_json::to_string(&NumericBox::of(1).div(0)).unwrap(), "null");

        let parsed: NumericBox<f64> = serde_json::from_str("2.0").unwrap();
        assert_eq!(parsed.value_of(), Some(2.0));
        let parsed: NumericBox<f64> = serde_json::from_str("null").unwrap();
        assert_eq!(parsed, NumericBox::Invalid);
    }
}
