//! # Alphabet Cipher Library
//!
//! This library implements the alphabet cipher, a Vigenère-family
//! substitution cipher built on a 26x26 table of cyclically shifted
//! alphabets.
//!
//! ## Supported Operations
//!
//! - **Encode** - encrypt a message with a keyword
//! - **Decode** - decrypt a ciphertext with a keyword
//! - **Decipher** - recover the shortest keyword from a ciphertext/plaintext pair
//!
//! ## Usage
//!
//! ```rust
//! use alphabet_cipher::AlphabetCipher;
//!
//! let ciphertext = AlphabetCipher::encode("scones", "meetmebythetree")?;
//! assert_eq!(ciphertext, "egsgqwtahuiljgs");
//!
//! let message = AlphabetCipher::decode("scones", &ciphertext)?;
//! assert_eq!(message, "meetmebythetree");
//!
//! let keyword = AlphabetCipher::decipher(&ciphertext, &message)?;
//! assert_eq!(keyword, "scones");
//! # Ok::<(), alphabet_cipher::CipherError>(())
//! ```
//!
//! ## Notes
//!
//! - Inputs are sanitized to lowercase a-z before every operation; case and
//!   non-letter characters are never preserved.
//! - Every operation is a pure function: no state survives a call and the
//!   substitution table is rebuilt from the fixed alphabet on each use.
//! - This is a classical teaching cipher and offers **no** real
//!   cryptographic security.

// Public modules
pub mod alphabet;
pub mod error;
pub mod ops;
pub mod table;

// Re-exports for easy access
pub use alphabet::sanitize;
pub use error::{CipherError, Result};
pub use ops::AlphabetCipher;
pub use table::CipherTable;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Convenience functions for common operations
impl AlphabetCipher {
    /// Get version information
    pub fn version() -> &'static str {
        VERSION
    }

    /// List all supported cipher operations
    pub fn supported_operations() -> Vec<&'static str> {
        vec!["encode", "decode", "decipher"]
    }
}

// Comprehensive tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_operations_integration() {
        let keyword = "vigilance";
        let message = "meetmeontuesdayeveningatseven";

        let ciphertext = AlphabetCipher::encode(keyword, message).unwrap();
        assert_eq!(ciphertext, "hmkbxebpxpmyllyrxiiqtoltfgzzv");

        let decoded = AlphabetCipher::decode(keyword, &ciphertext).unwrap();
        assert_eq!(decoded, message);

        let recovered = AlphabetCipher::decipher(&ciphertext, message).unwrap();
        assert_eq!(recovered, keyword);
    }

    #[test]
    fn test_round_trip_on_sanitized_text() {
        let pairs = [
            ("scones", "meetmebythetree"),
            ("banquet", "thetimehascomethewalrussaid"),
            ("q", "totalkofmanythings"),
        ];
        for (keyword, message) in pairs {
            let ciphertext = AlphabetCipher::encode(keyword, message).unwrap();
            assert_eq!(
                AlphabetCipher::decode(keyword, &ciphertext).unwrap(),
                message
            );
        }
    }

    #[test]
    fn test_decipher_recovers_equivalent_keyword() {
        let message = "ofshoesandshipsandsealingwax";
        for keyword in ["x", "queen", "cabbage", "cabbagecabbage"] {
            let ciphertext = AlphabetCipher::encode(keyword, message).unwrap();
            let recovered = AlphabetCipher::decipher(&ciphertext, message).unwrap();

            // The recovered keyword encodes identically and is never longer
            assert_eq!(
                AlphabetCipher::encode(&recovered, message).unwrap(),
                ciphertext
            );
            assert!(recovered.len() <= keyword.len());
        }
    }

    #[test]
    fn test_raw_and_sanitized_inputs_agree() {
        let raw = AlphabetCipher::encode("Vigilance?!", "Meet me on Tuesday evening at seven.");
        let clean = AlphabetCipher::encode("vigilance", "meetmeontuesdayeveningatseven");
        assert_eq!(raw.unwrap(), clean.unwrap());
    }

    #[test]
    fn test_cipher_metadata() {
        assert_eq!(
            AlphabetCipher::supported_operations(),
            vec!["encode", "decode", "decipher"]
        );
        assert!(!AlphabetCipher::version().is_empty());
    }
}
