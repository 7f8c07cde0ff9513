//! Keyword recovery from a ciphertext/plaintext pair

use crate::alphabet::sanitize;
use crate::error::{CipherError, Result};
use crate::table::CipherTable;

use super::AlphabetCipher;

impl AlphabetCipher {
    /// Recovers the shortest keyword whose cyclic repetition encodes
    /// `message` to `ciphertext`.
    ///
    /// Algorithm:
    /// 1. Sanitize both inputs; their lengths must match afterwards.
    /// 2. Reconstruct the expanded key: at each position, the unique key
    ///    letter carrying that message letter to that ciphertext letter.
    /// 3. The keyword is the shortest prefix of the expanded key whose
    ///    cyclic repetition spells out the whole expanded key.
    ///
    /// Because every table row is a permutation, the expanded key letter at
    /// a position is the only letter that re-encodes the message letter to
    /// the ciphertext letter there, so checking a prefix against the
    /// expanded key is equivalent to re-encoding the message with it.
    pub fn decipher(ciphertext: &str, message: &str) -> Result<String> {
        let ciphertext = sanitize(ciphertext);
        let message = sanitize(message);

        if ciphertext.len() != message.len() {
            return Err(CipherError::LengthMismatch {
                cipher: ciphertext.len(),
                message: message.len(),
            });
        }

        let table = CipherTable::new();
        let expanded: Vec<u8> = ciphertext
            .bytes()
            .zip(message.bytes())
            .map(|(cipher, msg)| table.decipher_char(cipher, msg))
            .collect();

        // Smallest period wins; only empty inputs leave no candidate at all
        for period in 1..=expanded.len() {
            if repeats_with_period(&expanded, period) {
                let keyword = expanded[..period].iter().map(|&b| b as char).collect();
                return Ok(keyword);
            }
        }

        Err(CipherError::KeywordNotFound)
    }
}

/// True when the whole key is its first `period` bytes repeated cyclically.
fn repeats_with_period(key: &[u8], period: usize) -> bool {
    key.iter().enumerate().all(|(i, &b)| b == key[i % period])
}
