//! Encoding a message with a keyword

use crate::error::Result;
use crate::table::CipherTable;

use super::{transform, AlphabetCipher};

impl AlphabetCipher {
    /// Encodes a message with the given keyword.
    ///
    /// Each message letter is looked up in its shift row at the key
    /// letter's column. Both inputs are sanitized first, so the output
    /// holds exactly one lowercase letter per letter of `message`; case
    /// and non-letter characters are not preserved.
    ///
    /// # Arguments
    ///
    /// * `keyword` - The keyword, repeated cyclically over the message.
    /// * `message` - The plaintext to encode.
    ///
    /// # Returns
    ///
    /// The ciphertext, or `CipherError::EmptyKeyword` when the keyword
    /// sanitizes to nothing.
    pub fn encode(keyword: &str, message: &str) -> Result<String> {
        let table = CipherTable::new();
        transform(keyword, message, |key, msg| table.encode_char(key, msg))
    }
}
