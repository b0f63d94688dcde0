// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod algebra;

pub use algebra::{Applicative, Chain, Functor};
