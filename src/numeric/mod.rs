// ============================================================================
// Numeric Module
// Finite-number gated wrapper and payload classification
// ============================================================================
//
// This module provides:
// - NumericBox<T>: Immutable wrapper with functor/applicative/chain methods
// - Numeric: Classification of payloads as finite numbers
// - Operand: Reading of right-hand arithmetic operands
// - NumericError: Error surfaced when extracting with `?`
//
// Design principles:
// - Invalidity is absorbing; nothing derived from an invalid box is valid
// - No panics and no coercion of non-numeric payloads
// - Every arithmetic operation is a `map`

mod errors;
mod numeric_box;
mod payload;

pub use errors::{NumericError, NumericResult};
pub use numeric_box::{lift_a2, NumericBox};
pub use payload::{Numeric, Operand};
