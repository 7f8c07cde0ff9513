use clap::{Parser, ValueEnum};

use alphabet_cipher::{AlphabetCipher, CipherTable};

/// Command-line arguments for the alphabet cipher program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing the message or ciphertext
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Keyword for the cipher (encode and decode modes)
    #[arg(short, long, help = "Keyword for the cipher (encode/decode)")]
    key: Option<String>,

    /// Path to the known plaintext file (decipher mode)
    #[arg(short, long, help = "Path to the known plaintext file (decipher)")]
    plain: Option<String>,

    /// Path to the output file where the result will be saved
    #[arg(short, long, help = "Path to the output file (stdout if omitted)")]
    output: Option<String>,

    /// Mode of operation (encode, decode or decipher)
    #[arg(short, long, help = "Mode of operation (encode/decode/decipher)")]
    mode: OperationMode,

    /// Print the substitution table before the operation
    #[arg(short, long, help = "Print the cipher table before the operation")]
    table: bool,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    /// Encode a message with a keyword
    Encode,
    /// Decode a ciphertext with a keyword
    Decode,
    /// Recover the shortest keyword from a ciphertext/plaintext pair
    Decipher,
}

/// Main entry point for the alphabet cipher program.
fn main() {
    // Parse command-line arguments
    let cli: Cli = Cli::parse();

    // Optional diagnostic dump of the substitution table
    if cli.table {
        println!("{}", CipherTable::new());
    }

    // Read input file content
    let content: String = std::fs::read_to_string(&cli.file)
        .expect("Failed to read input file");

    // Process based on selected mode
    let result = match cli.mode {
        OperationMode::Encode => {
            let key = require_key(&cli);
            println!("Encoding with keyword: {}", key);
            AlphabetCipher::encode(key, &content)
        }
        OperationMode::Decode => {
            let key = require_key(&cli);
            println!("Decoding with keyword: {}", key);
            AlphabetCipher::decode(key, &content)
        }
        OperationMode::Decipher => {
            let plain_path = require_plain(&cli);
            let plaintext: String = std::fs::read_to_string(plain_path)
                .expect("Failed to read plaintext file");
            println!("Recovering keyword from {} and {}", cli.file, plain_path);
            AlphabetCipher::decipher(&content, &plaintext)
        }
    };

    let result = match result {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Write result to the output file, or print it when no file was given
    match &cli.output {
        Some(path) => {
            std::fs::write(path, &result)
                .expect("Failed to write output file");
            println!("Operation completed successfully! Output saved to: {}", path);
        }
        None => println!("{}", result),
    }
}

/// The keyword argument, required for encode and decode modes.
fn require_key(cli: &Cli) -> &str {
    match &cli.key {
        Some(key) => key,
        None => {
            eprintln!("--key is required for {:?} mode", cli.mode);
            std::process::exit(2);
        }
    }
}

/// The known plaintext path, required for decipher mode.
fn require_plain(cli: &Cli) -> &str {
    match &cli.plain {
        Some(path) => path,
        None => {
            eprintln!("--plain is required for decipher mode");
            std::process::exit(2);
        }
    }
}
