//! Kleira: deterministic passphrase-seeded substitution grid.
//!
//! Given a passphrase, Kleira builds a fixed 7x5 grid of the symbols
//! `A`-`Z` and `1`-`9` and assigns every symbol a four-character code. Any
//! text can then be turned into a password by replacing each symbol with
//! its code. The same passphrase always rebuilds the same grid, on every
//! platform, so nothing but the passphrase needs to be remembered.
//!
//! The grid is not a cryptographic primitive. Anyone who knows the
//! passphrase can reconstruct it.
//!
//! # Architecture
//!
//! ```text
//! derive_seed       (MD5 of the passphrase, first 4 bytes little-endian)
//!     ↓
//! MersenneTwister   (MT19937, 624-word state)
//!     ↓ 140 words, row-major
//! build_grid        (7x5 alphabet grid + symbol -> code table)
//!     ↓
//! transform         (uppercase, substitute, pass everything else through)
//! ```
//!
//! # Examples
//!
//! ```
//! use kleira::{build_grid, transform};
//!
//! let grid = build_grid("test");
//! assert_eq!(grid.symbol_at(0, 1).unwrap(), 'B');
//! assert_eq!(transform(&grid, "AB"), "LhoI2lzu");
//!
//! // Rebuilding from the same passphrase gives the same grid.
//! assert_eq!(grid, build_grid("test"));
//! assert_ne!(grid, build_grid("Test"));
//! ```

#![deny(clippy::all)]

pub mod cipher;
pub mod error;
pub mod grid;
pub mod phrase;
pub mod random;

pub use cipher::transform;
pub use error::KleiraError;
pub use grid::{build_grid, build_grid_with, Cell, Grid};
pub use phrase::{CipherPhrase, PhraseBook};
pub use random::mersenne_twister::MersenneTwister;
pub use random::seed::derive_seed;
pub use random::word_source::WordSource;
