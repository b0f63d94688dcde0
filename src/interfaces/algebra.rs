// ============================================================================
// Algebraic Interfaces
// Functor, applicative and chain contracts for wrapper types
// ============================================================================

use crate::numeric::{Numeric, NumericBox};

/// Structure-preserving map over a contained value.
///
/// # Laws
/// - Identity: `x.fmap(|v| v)` extracts to the same value as `x`.
/// - Composition: `x.fmap(f).fmap(g)` extracts to the same value as
///   `x.fmap(|v| g(f(v)))`.
pub trait Functor: Sized {
    /// The contained value
    type Item;

    /// The same structure holding a `U`
    type Mapped<U>;

    /// Map `f` over the contained value.
    fn fmap<U, F>(self, f: F) -> Self::Mapped<U>
    where
        F: FnOnce(Self::Item) -> U;
}

/// Application of a wrapped function to a wrapped argument.
///
/// # Laws
/// - Homomorphism: `pure(f).apply(pure(v))` extracts to the same value as
///   `pure(v).fmap(f)`.
pub trait Applicative<Arg>: Sized {
    /// Result of applying the held function
    type Output;

    /// Apply the held function to `arg`.
    fn apply(self, arg: Arg) -> Self::Output;
}

/// Sequencing of computations that themselves return a wrapped value.
///
/// # Laws
/// - Associativity: `x.flat_map(f).flat_map(g)` extracts to the same value as
///   `x.flat_map(|v| f(v).flat_map(g))`.
pub trait Chain: Functor {
    /// Feed the contained value to `f` and return its result unchanged.
    fn flat_map<U, F>(self, f: F) -> Self::Mapped<U>
    where
        F: FnOnce(Self::Item) -> Self::Mapped<U>;
}

// ============================================================================
// NumericBox Implementations
// ============================================================================

impl<T: Numeric> Functor for NumericBox<T> {
    type Item = T;
    type Mapped<U> = NumericBox<U>;

    #[inline]
    fn fmap<U, F>(self, f: F) -> NumericBox<U>
    where
        F: FnOnce(T) -> U,
    {
        self.map(f)
    }
}

impl<F, A, B> Applicative<NumericBox<A>> for NumericBox<F>
where
    F: FnOnce(A) -> B,
    A: Numeric,
{
    type Output = NumericBox<B>;

    #[inline]
    fn apply(self, arg: NumericBox<A>) -> NumericBox<B> {
        self.ap(arg)
    }
}

impl<T: Numeric> Chain for NumericBox<T> {
    #[inline]
    fn flat_map<U, F>(self, f: F) -> NumericBox<U>
    where
        F: FnOnce(T) -> NumericBox<U>,
    {
        self.chain(f)
    }
}
