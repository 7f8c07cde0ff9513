//! The 26x26 substitution table the cipher is built on

use std::fmt;

use crate::alphabet::{letter_position, position_to_letter, ALPHABET, ALPHABET_LEN};

/// The full substitution matrix: one shift row per letter of the alphabet.
///
/// Row `p` holds the alphabet cyclically rotated left by `p` positions, so
/// the row for `a` is the alphabet itself and every row is a permutation.
/// The single relation `rows[pos(msg)][pos(key)] == cipher` ties the three
/// per-character lookups together: encoding reads it forward, decoding scans
/// the key's column for the message letter, and deciphering scans the
/// message letter's row for the key letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherTable {
    rows: [[u8; 26]; 26],
}

impl CipherTable {
    /// Builds the table from the fixed alphabet.
    ///
    /// A pure function of no input: callers may rebuild the table per
    /// operation or keep one around, the result is identical either way.
    pub fn new() -> Self {
        let mut rows = [[0u8; 26]; 26];
        for pos in 0..ALPHABET_LEN {
            for col in 0..ALPHABET_LEN {
                // Cyclic left shift of the alphabet by the row position
                rows[pos][col] = ALPHABET[(pos + col) % ALPHABET_LEN];
            }
        }
        CipherTable { rows }
    }

    /// The shift row for a letter: the alphabet rotated left by its position.
    pub fn row(&self, letter: u8) -> &[u8; 26] {
        &self.rows[letter_position(letter)]
    }

    /// Encodes one message letter under one key letter.
    pub fn encode_char(&self, key: u8, msg: u8) -> u8 {
        self.rows[letter_position(msg)][letter_position(key)]
    }

    /// Decodes one ciphertext letter under one key letter: the unique
    /// message letter whose row carries `cipher` in the key's column.
    pub fn decode_char(&self, key: u8, cipher: u8) -> u8 {
        let col = letter_position(key);
        let pos = self
            .rows
            .iter()
            .position(|row| row[col] == cipher)
            .unwrap_or(0);
        position_to_letter(pos)
    }

    /// Recovers one key letter from a ciphertext/message letter pair: the
    /// column at which the message letter's row carries `cipher`.
    pub fn decipher_char(&self, cipher: u8, msg: u8) -> u8 {
        let col = self
            .row(msg)
            .iter()
            .position(|&cell| cell == cipher)
            .unwrap_or(0);
        position_to_letter(col)
    }
}

impl Default for CipherTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the full table with a key header row, for diagnostic printing.
impl fmt::Display for CipherTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for letter in ALPHABET {
            write!(f, " {}", letter as char)?;
        }
        writeln!(f)?;

        for (pos, row) in self.rows.iter().enumerate() {
            write!(f, "{}:", position_to_letter(pos) as char)?;
            for &cell in row {
                write!(f, " {}", cell as char)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
