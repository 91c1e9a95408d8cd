//! Random number generation subsystem for Kleira.
//!
//! Provides passphrase seeding and the MT19937 generator that drives
//! code-table generation.

pub mod mersenne_twister;
pub mod seed;
pub mod word_source;
