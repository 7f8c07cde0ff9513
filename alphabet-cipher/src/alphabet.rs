//! Alphabet utilities: letter/position conversions and input sanitization

/// The fixed lowercase alphabet the cipher operates on.
pub const ALPHABET: [u8; 26] = *b"abcdefghijklmnopqrstuvwxyz";

/// Number of letters in the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Returns the zero-based position of a letter (a=0, b=1, ..., z=25),
/// accepting either case.
///
/// Callers must sanitize first; non-alphabetic bytes are undefined at this layer.
pub fn letter_position(letter: u8) -> usize {
    (letter.to_ascii_lowercase() - b'a') as usize
}

/// Returns the lowercase letter at a zero-based position (0=a, 1=b, ..., 25=z).
///
/// Positions must already be reduced to `0..26`; wrapping is the caller's job.
pub fn position_to_letter(pos: usize) -> u8 {
    b'a' + pos as u8
}

/// Strips text down to cipher-safe form by lowercasing it and keeping only
/// the letters a-z, preserving their order.
///
/// # Arguments
///
/// * `text` - The raw input text.
///
/// # Returns
///
/// A `String` containing only lowercase a-z characters. This is the only
/// boundary between raw input and the cipher table; every operation applies
/// it before any table lookup.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
