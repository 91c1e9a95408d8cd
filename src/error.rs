//! Error types for the Kleira library.
//!
//! Seed derivation, grid construction and the substitution transform are
//! total functions and never fail. Errors only arise from bounds-checked
//! grid access and from addressing records a [`PhraseBook`] does not hold.
//!
//! [`PhraseBook`]: crate::phrase::PhraseBook

use thiserror::Error;
use uuid::Uuid;

/// Errors produced by the Kleira library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KleiraError {
    /// Grid coordinates lie outside the 7x5 matrix.
    #[error("grid cell ({row}, {col}) is outside the 7x5 grid")]
    CellOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// No cipher phrase with the given id exists.
    #[error("no cipher phrase with id {0}")]
    PhraseNotFound(Uuid),
}
