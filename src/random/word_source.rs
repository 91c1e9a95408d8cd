//! WordSource trait for code-table generation.
//!
//! Defines the interface between a pseudorandom generator and the grid
//! builder. The builder only ever asks for raw 32-bit words, in order,
//! so any deterministic sequence can drive it.

/// Trait for deterministic sources of 32-bit words.
///
/// The grid builder consumes exactly 140 words (35 symbols x 4 code
/// characters) from a source, strictly in sequence. Implementations must
/// return the same sequence every time they are constructed from the same
/// input, otherwise generated grids are not reproducible.
pub trait WordSource {
    /// Returns the next 32-bit word of the sequence.
    fn next_word(&mut self) -> u32;
}

impl<S: WordSource + ?Sized> WordSource for &mut S {
    fn next_word(&mut self) -> u32 {
        (**self).next_word()
    }
}
