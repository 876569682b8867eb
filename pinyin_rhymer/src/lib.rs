// Mandarin pinyin rhyme engine.
//
// Parses pinyin syllables, classifies their onsets and finals
// phonologically, and generates the set of real syllables that rhyme with a
// given one under a chosen pair of similarity schemes and a tone filter.
//
// Architecture (each layer only uses the ones above it):
// - `error.rs`: `RhymeError` and the crate `Result` alias
// - `types.rs`: `Tone`, `ToneSet`
// - `consonant.rs`: onsets, manner families, places of articulation
// - `monophthong.rs`: nucleus phonemes and vowel-space distance
// - `phonotactics.rs`: onset/final compatibility table
// - `scheme.rs`: `ConsonantScheme`, `VowelScheme`
// - `config.rs`: `SimilarityConfig`, `RhymeConfig`
// - `vowel.rs`: the 39 finals and every final-similarity scheme
// - `pinyin.rs`: `PinYin` parse / validate / render
// - `inventory.rs`: attested syllables, embedded from
//   `data/mandarin_syllables.json`
// - `rhyme.rs`: `Rhymer`, `RhymeOptions`, batch generation
// - `lib.rs` (this file): re-exports and string-level convenience functions
//   over the process-wide default rhymer
//
// All tables are constants and every public value is immutable, so the
// crate is safe to use from any number of threads. Output sets are
// `BTreeSet`s and iterate deterministically.

pub mod config;
pub mod consonant;
pub mod error;
pub mod inventory;
pub mod monophthong;
pub mod phonotactics;
pub mod pinyin;
pub mod rhyme;
pub mod scheme;
pub mod types;
pub mod vowel;

// Re-export key types at crate root for convenience.
pub use config::{RhymeConfig, SimilarityConfig};
pub use consonant::{Consonant, ConsonantFamily, Place};
pub use error::{Result, RhymeError};
pub use inventory::{Inventory, default_inventory};
pub use monophthong::Monophthong;
pub use phonotactics::FinalClass;
pub use pinyin::PinYin;
pub use rhyme::{RhymeOptions, RhymeQuery, Rhymer, default_rhymer};
pub use scheme::{ConsonantScheme, VowelScheme};
pub use types::{Tone, ToneSet};
pub use vowel::{Coda, Medial, MouthShape, Segment, Vowel};

use std::collections::BTreeSet;

/// Rhymes for a syllable given as text, with schemes and tones given by
/// name: e.g. `generate_rhymes("shuang1", "FAMILY", "FOURTEEN_RHYMES", "1")`.
pub fn generate_rhymes(
    text: &str,
    consonants: &str,
    vowels: &str,
    tones: &str,
) -> Result<BTreeSet<PinYin>> {
    let syllable = PinYin::parse(text)?;
    let consonants = ConsonantScheme::parse(consonants)?;
    let vowels: VowelScheme = vowels.parse()?;
    let tones = ToneSet::parse(tones)?;
    Ok(default_rhymer().generate_rhymes(&syllable, &consonants, vowels, &tones))
}

/// Whether `other` rhymes with `text`. `options` are positional
/// `[consonants, vowels, tones]`; omitted ones default to `ALL`,
/// `TRADITIONAL`, and the tone of `text`.
pub fn rhymes_with(text: &str, other: &str, options: &[&str]) -> Result<bool> {
    let syllable = PinYin::parse(text)?;
    let other = PinYin::parse(other)?;
    let options = RhymeOptions::from_args(options)?;
    Ok(default_rhymer().rhymes_with(&syllable, &other, &options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_rhymes_by_name() {
        let rhymes = generate_rhymes("shei2", "fSs", "FOURTEEN_RHYMES", "2").unwrap();
        let texts: Vec<String> = rhymes.iter().map(ToString::to_string).collect();
        assert_eq!(texts.len(), 4);
        for expected in ["fei2", "shei2", "shui2", "sui2"] {
            assert!(texts.iter().any(|t| t == expected), "missing {expected}");
        }
    }

    #[test]
    fn test_generate_rhymes_errors() {
        assert!(matches!(
            generate_rhymes("wah3", "ALL", "TRADITIONAL", "3"),
            Err(RhymeError::InvalidSyllable(_))
        ));
        assert!(matches!(
            generate_rhymes("ma1", "SOME", "TRADITIONAL", "1"),
            Err(RhymeError::UnknownScheme(_))
        ));
        assert!(matches!(
            generate_rhymes("ma1", "ALL", "RHYMISH", "1"),
            Err(RhymeError::UnknownScheme(_))
        ));
        assert!(matches!(
            generate_rhymes("ma1", "ALL", "TRADITIONAL", "one"),
            Err(RhymeError::InvalidTone(_))
        ));
    }

    #[test]
    fn test_rhymes_with_default_options() {
        assert!(rhymes_with("a4", "ba4", &[]).unwrap());
        assert!(!rhymes_with("a4", "ba1", &[]).unwrap());
        assert!(rhymes_with("a4", "ba1", &["ALL", "TRADITIONAL", "14"]).unwrap());
    }
}
