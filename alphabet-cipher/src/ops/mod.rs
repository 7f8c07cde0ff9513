//! Cipher operations implementation

pub mod decipher;
pub mod decode;
pub mod encode;

use crate::alphabet::sanitize;
use crate::error::{CipherError, Result};

/// Main struct for the cipher operations
pub struct AlphabetCipher;

/// Shared shape of encode and decode: sanitize both inputs, repeat the
/// keyword cyclically over the text (the key stream), and map each
/// key/text character pair through `op`.
///
/// The key stream is never materialized; the cycled keyword bytes are
/// zipped directly against the text bytes, so the output length always
/// equals the sanitized text length.
fn transform<F>(keyword: &str, text: &str, op: F) -> Result<String>
where
    F: Fn(u8, u8) -> u8,
{
    let keyword = sanitize(keyword);
    let text = sanitize(text);

    // Cyclic repetition of an empty keyword is undefined
    if keyword.is_empty() {
        return Err(CipherError::EmptyKeyword);
    }

    let out = keyword
        .bytes()
        .cycle()
        .zip(text.bytes())
        .map(|(key, ch)| op(key, ch) as char)
        .collect();

    Ok(out)
}
