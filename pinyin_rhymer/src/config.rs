// Data-driven rhyme configuration.
//
// Every tunable number the similarity schemes read lives in
// `SimilarityConfig`; the rhyme engine's default scheme choices live in
// `RhymeConfig`. Both load from JSON via `from_json()` with
// `#[serde(default)]`, so a document only needs to name the fields it
// overrides. `Default` gives the stock tuning.
//
// Thresholds are distances in the monophthong vowel space (see
// `monophthong.rs`); comparisons against them are strict.
//
// See also: `vowel.rs` (`Vowel::similar_with`), `rhyme.rs` (`Rhymer`).

use crate::error::{Result, RhymeError};
use crate::scheme::{ConsonantScheme, VowelScheme};
use serde::{Deserialize, Serialize};

/// Vowel-space thresholds for the distance-based schemes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// `SIMILAR_BODY`: maximum (exclusive) surface-quality distance.
    pub body_threshold: f64,
    /// `SIMILAR_SOUNDING`: base distance, applied to both the surface
    /// quality and the coda target.
    pub sounding_threshold: f64,
    /// Added to `sounding_threshold` once per step of `similar_sounding(more)`.
    pub sounding_step: f64,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            body_threshold: 0.15,
            sounding_threshold: 0.1,
            sounding_step: 0.1,
        }
    }
}

impl SimilarityConfig {
    /// Effective `SIMILAR_SOUNDING` threshold after widening `more` steps.
    pub fn sounding_threshold_for(&self, more: u32) -> f64 {
        self.sounding_threshold + f64::from(more) * self.sounding_step
    }
}

/// Top-level configuration for a `Rhymer`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RhymeConfig {
    pub similarity: SimilarityConfig,
    /// Onset scheme `rhymes_with` uses when none is given.
    pub default_consonant_scheme: ConsonantScheme,
    /// Final scheme `rhymes_with` uses when none is given.
    pub default_vowel_scheme: VowelScheme,
}

impl Default for RhymeConfig {
    fn default() -> Self {
        Self {
            similarity: SimilarityConfig::default(),
            default_consonant_scheme: ConsonantScheme::All,
            default_vowel_scheme: VowelScheme::Traditional,
        }
    }
}

impl RhymeConfig {
    /// Parse a configuration from a JSON string. Missing fields keep their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(RhymeError::Config)
    }
}
