// ============================================================================
// Numeric Box Library
// Finite-number wrapper with functor, applicative and chain interfaces
// ============================================================================

//! # Numeric Box
//!
//! An immutable wrapper over a single numeric value whose arithmetic silently
//! short-circuits to an invalid box as soon as an intermediate value stops
//! being a finite number.
//!
//! ## Features
//!
//! - **Functor, applicative and chain** interfaces over one wrapper type
//! - **Absorbing invalidity**: NaN, infinities and non-numeric payloads
//!   collapse to `None` at extraction, never to a panic
//! - **No coercion**: `"0"` is a string, not a number
//! - **Arithmetic conveniences** (`add`, `sub`, `sub_from`, `mul`, `div`,
//!   `exp`, `sqr`, `sqrt`, `inc`, `dec`, `neg`) all defined through `map`
//!
//! ## Example
//!
//! ```rust
//! use numeric_box::prelude::*;
//!
//! // Pythagoras through applicative lifting
//! let add = |a: f64| move |b: f64| a + b;
//! let hypotenuse = NumericBox::pure(add)
//!     .ap(NumericBox::of(3.0).sqr())
//!     .ap(NumericBox::of(4.0).sqr())
//!     .sqrt();
//! assert_eq!(hypotenuse.value_of(), Some(5.0));
//!
//! // Division by zero is only reported when the result is inspected
//! let broken = NumericBox::of(1).div(0).inc();
//! assert!(!broken.is_valid());
//! assert_eq!(broken.value_of(), None);
//! ```

pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::interfaces::{Applicative, Chain, Functor};
    pub use crate::numeric::{
        lift_a2, Numeric, NumericBox, NumericError, NumericResult, Operand,
    };
}
