//! Decoding a ciphertext with a keyword

use crate::error::Result;
use crate::table::CipherTable;

use super::{transform, AlphabetCipher};

impl AlphabetCipher {
    /// Decodes a ciphertext with the given keyword, inverting
    /// [`AlphabetCipher::encode`].
    ///
    /// Inputs are sanitized first, so decoding only round-trips text that
    /// was already lowercase a-z when it was encoded.
    pub fn decode(keyword: &str, ciphertext: &str) -> Result<String> {
        let table = CipherTable::new();
        transform(keyword, ciphertext, |key, cipher| {
            table.decode_char(key, cipher)
        })
    }
}
