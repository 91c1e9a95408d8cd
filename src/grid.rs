//! Symbol grid and per-symbol code table.
//!
//! The grid is a fixed 7x5 matrix holding the 35-symbol alphabet
//! (`A`-`Z` then `1`-`9`) in row-major order. Only the code table depends
//! on the passphrase: each cell, visited row by row, draws four consecutive
//! words from the generator and maps each word onto the 78-character code
//! alphabet with `word % 78`. A full grid consumes exactly 140 words.
//!
//! Grids are immutable once built and can be shared freely across threads.

use std::fmt;

use tracing::debug;

use crate::error::KleiraError;
use crate::random::mersenne_twister::MersenneTwister;
use crate::random::seed::derive_seed;
use crate::random::word_source::WordSource;

/// Number of grid rows.
pub const GRID_ROWS: usize = 7;

/// Number of grid columns.
pub const GRID_COLS: usize = 5;

/// Number of grid cells, equal to the alphabet length.
pub const CELL_COUNT: usize = GRID_ROWS * GRID_COLS;

/// Number of characters in every symbol code.
pub const CODE_LEN: usize = 4;

/// Ordered grid alphabet.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ123456789";

/// Ordered code alphabet: lowercase, uppercase, digits, then 16 punctuation marks.
pub const CODE_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()-+=<>?";

const SYMBOLS: &[u8; CELL_COUNT] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ123456789";

const CODE_CHARS: &[u8; 78] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()-+=<>?";

/// One grid cell as seen by a presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell<'a> {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
    /// Alphabet symbol held by the cell.
    pub symbol: char,
    /// Four-character replacement code for the symbol.
    pub code: &'a str,
}

/// A fully built 7x5 symbol grid with its code table.
///
/// Construct with [`build_grid`] (from a passphrase) or [`build_grid_with`]
/// (from any [`WordSource`]). Two grids built from the same passphrase are
/// equal.
///
/// # Examples
///
/// ```
/// use kleira::build_grid;
///
/// let grid = build_grid("test");
/// assert_eq!(grid.symbol_at(0, 0).unwrap(), 'A');
/// assert_eq!(grid.code_for('A'), Some("LhoI"));
/// assert_eq!(grid.transform("ab"), "LhoI2lzu");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [char; CELL_COUNT],
    codes: [[u8; CODE_LEN]; CELL_COUNT],
}

/// Builds the grid and code table for a passphrase.
///
/// The passphrase is hashed into a seed with [`derive_seed`], which seeds a
/// fresh [`MersenneTwister`]. Hashing is case-sensitive, so `"test"` and
/// `"Test"` produce different code tables.
pub fn build_grid(passphrase: &str) -> Grid {
    let seed = derive_seed(passphrase);
    debug!(seed, "building cipher grid");
    build_grid_with(MersenneTwister::new(seed))
}

/// Builds a grid whose code table is drawn from `source`.
///
/// Exactly [`CELL_COUNT`] x [`CODE_LEN`] words are consumed, cell by cell in
/// row-major order, with no words skipped in between.
pub fn build_grid_with<S: WordSource>(mut source: S) -> Grid {
    let mut cells = [' '; CELL_COUNT];
    for (cell, &symbol) in cells.iter_mut().zip(SYMBOLS.iter()) {
        *cell = symbol as char;
    }

    let mut codes = [[0u8; CODE_LEN]; CELL_COUNT];
    for code in codes.iter_mut() {
        for byte in code.iter_mut() {
            let index = source.next_word() % CODE_CHARS.len() as u32;
            *byte = CODE_CHARS[index as usize];
        }
    }

    Grid { cells, codes }
}

impl Grid {
    /// Returns the symbol at `(row, col)`.
    ///
    /// # Errors
    /// Returns [`KleiraError::CellOutOfBounds`] if `row >= 7` or `col >= 5`.
    pub fn symbol_at(&self, row: usize, col: usize) -> Result<char, KleiraError> {
        if row >= GRID_ROWS || col >= GRID_COLS {
            return Err(KleiraError::CellOutOfBounds { row, col });
        }
        Ok(self.cells[row * GRID_COLS + col])
    }

    /// Returns the code for `symbol`, or `None` if it is not in the alphabet.
    ///
    /// Lookup uses the first character of the symbol's uppercase mapping,
    /// so `'a'` and `'A'` share a code.
    pub fn code_for(&self, symbol: char) -> Option<&str> {
        let upper = symbol.to_uppercase().next().unwrap_or(symbol);
        let index = self.cells.iter().position(|&c| c == upper)?;
        Some(self.code_at(index))
    }

    /// Returns the symbols of row `row`, or `None` past the last row.
    pub fn row(&self, row: usize) -> Option<&[char]> {
        if row >= GRID_ROWS {
            return None;
        }
        let start = row * GRID_COLS;
        Some(&self.cells[start..start + GRID_COLS])
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell<'_>> + '_ {
        (0..CELL_COUNT).map(move |index| Cell {
            row: index / GRID_COLS,
            col: index % GRID_COLS,
            symbol: self.cells[index],
            code: self.code_at(index),
        })
    }

    /// Substitutes `input` through this grid's code table.
    ///
    /// See [`transform`](crate::cipher::transform).
    pub fn transform(&self, input: &str) -> String {
        crate::cipher::transform(self, input)
    }

    fn code_at(&self, index: usize) -> &str {
        // Codes only ever hold bytes from CODE_CHARS, which is ASCII.
        std::str::from_utf8(&self.codes[index]).unwrap_or_default()
    }
}

impl fmt::Display for Grid {
    /// Renders one grid row per line as `SYMBOL:CODE` pairs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, cell) in self.cells().enumerate() {
            if cell.col > 0 {
                f.write_str("  ")?;
            } else if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}:{}", cell.symbol, cell.code)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of words, cycling when exhausted.
    struct Scripted {
        words: Vec<u32>,
        pos: usize,
        drawn: usize,
    }

    impl Scripted {
        fn new(words: Vec<u32>) -> Self {
            Scripted {
                words,
                pos: 0,
                drawn: 0,
            }
        }
    }

    impl WordSource for Scripted {
        fn next_word(&mut self) -> u32 {
            let word = self.words[self.pos];
            self.pos = (self.pos + 1) % self.words.len();
            self.drawn += 1;
            word
        }
    }

    #[test]
    fn test_alphabet_lengths() {
        assert_eq!(ALPHABET.chars().count(), CELL_COUNT);
        assert_eq!(CODE_ALPHABET.chars().count(), 78);
        assert_eq!(ALPHABET.as_bytes(), SYMBOLS);
        assert_eq!(CODE_ALPHABET.as_bytes(), CODE_CHARS);
    }

    #[test]
    fn test_grid_is_row_major_alphabet() {
        let grid = build_grid("layout");
        let mut expected = ALPHABET.chars();
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                assert_eq!(grid.symbol_at(row, col).unwrap(), expected.next().unwrap());
            }
        }
        assert_eq!(grid.symbol_at(6, 4).unwrap(), '9');
    }

    #[test]
    fn test_symbol_at_out_of_bounds() {
        let grid = build_grid("bounds");
        assert_eq!(
            grid.symbol_at(7, 0),
            Err(KleiraError::CellOutOfBounds { row: 7, col: 0 })
        );
        assert_eq!(
            grid.symbol_at(0, 5),
            Err(KleiraError::CellOutOfBounds { row: 0, col: 5 })
        );
        assert!(grid.symbol_at(usize::MAX, usize::MAX).is_err());
    }

    #[test]
    fn test_build_grid_with_consumes_140_words() {
        let mut source = Scripted::new(vec![0, 1, 2, 3]);
        let _ = build_grid_with(&mut source);
        assert_eq!(source.drawn, CELL_COUNT * CODE_LEN);
    }

    #[test]
    fn test_build_grid_with_maps_word_mod_78() {
        // 78 -> 'a', 79 -> 'b', 77 -> '?', 26 -> 'A'
        let grid = build_grid_with(Scripted::new(vec![78, 79, 77, 26]));
        for cell in grid.cells() {
            assert_eq!(cell.code, "ab?A");
        }
    }

    #[test]
    fn test_words_consumed_sequentially_across_cells() {
        let words: Vec<u32> = (0..140).collect();
        let grid = build_grid_with(Scripted::new(words));
        assert_eq!(grid.code_for('A'), Some("abcd"));
        assert_eq!(grid.code_for('B'), Some("efgh"));
        // Cell 19 ('T') draws words 76..80.
        assert_eq!(grid.code_for('T'), Some(">?ab"));
        assert_eq!(grid.code_for('U'), Some("cdef"));
    }

    #[test]
    fn test_code_for_is_case_insensitive() {
        let grid = build_grid("case");
        assert_eq!(grid.code_for('q'), grid.code_for('Q'));
        assert!(grid.code_for('q').is_some());
    }

    #[test]
    fn test_code_for_absent_symbols() {
        let grid = build_grid("absent");
        assert_eq!(grid.code_for('0'), None);
        assert_eq!(grid.code_for(' '), None);
        assert_eq!(grid.code_for('!'), None);
        assert_eq!(grid.code_for('\u{e9}'), None);
    }

    #[test]
    fn test_row_slices() {
        let grid = build_grid("rows");
        assert_eq!(grid.row(0), Some(&['A', 'B', 'C', 'D', 'E'][..]));
        assert_eq!(grid.row(6), Some(&['5', '6', '7', '8', '9'][..]));
        assert_eq!(grid.row(7), None);
    }

    #[test]
    fn test_cells_iterates_row_major() {
        let grid = build_grid("cells");
        let cells: Vec<Cell<'_>> = grid.cells().collect();
        assert_eq!(cells.len(), CELL_COUNT);
        assert_eq!((cells[0].row, cells[0].col, cells[0].symbol), (0, 0, 'A'));
        assert_eq!((cells[5].row, cells[5].col, cells[5].symbol), (1, 0, 'F'));
        assert_eq!((cells[34].row, cells[34].col, cells[34].symbol), (6, 4, '9'));
    }

    #[test]
    fn test_display_layout() {
        let grid = build_grid_with(Scripted::new(vec![0]));
        let rendered = grid.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), GRID_ROWS);
        assert_eq!(lines[0], "A:aaaa  B:aaaa  C:aaaa  D:aaaa  E:aaaa");
        assert_eq!(lines[6], "5:aaaa  6:aaaa  7:aaaa  8:aaaa  9:aaaa");
    }

    #[test]
    fn test_grid_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Grid>();
    }
}
