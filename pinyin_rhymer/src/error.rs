// Error taxonomy for parsing, lookup, and rhyme scheme selection.
//
// Every fallible operation in the crate returns `Result<T>` with a
// `RhymeError`. Errors are raised synchronously where they are detected
// and never retried or swallowed internally; the caller decides recovery.
// Phonotactic invalidity is not an error: `PinYin::is_valid` reports it as
// a boolean, and rhyme generation filters candidates on it.

use thiserror::Error;

/// Errors produced by the pinyin parser, the classifiers, and the rhyme
/// engine's option parsing.
#[derive(Debug, Error)]
pub enum RhymeError {
    /// The input text does not parse as any Mandarin syllable.
    #[error("\"{0}\" is not a valid pinyin")]
    InvalidSyllable(String),

    /// Onset text matches no known consonant (shorthand capitals included).
    #[error("\"{0}\" is not a valid consonant")]
    InvalidConsonant(String),

    /// Final text matches no known final in any of its spellings.
    #[error("\"{0}\" is not a valid final")]
    InvalidFinal(String),

    /// A scheme name outside the closed set of consonant/vowel schemes.
    #[error("unknown rhyme scheme \"{0}\"")]
    UnknownScheme(String),

    /// A tone filter character that is not a digit 1-5.
    #[error("\"{0}\" is not a valid tone")]
    InvalidTone(String),

    /// The syllable inventory JSON could not be parsed.
    #[error("malformed syllable inventory: {0}")]
    Inventory(#[source] serde_json::Error),

    /// A rhyme configuration JSON document could not be parsed.
    #[error("malformed rhyme config: {0}")]
    Config(#[source] serde_json::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RhymeError>;
