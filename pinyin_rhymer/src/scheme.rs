// Rhyme scheme selectors for onsets and finals.
//
// Scheme names are a closed, case-sensitive vocabulary: `ALL` and `FAMILY`
// for onsets, and eight names for finals (`TRADITIONAL`, `FOURTEEN_RHYMES`,
// ...). Any other onset scheme text is read as a custom consonant set
// written as concatenated symbols (`"fSs"` = {f, sh, s}); if that fails the
// name is unknown.
//
// Both enums (de)serialize as their names. `ConsonantScheme` uses custom
// string serde because the `Custom` variant carries a set.

use crate::consonant::Consonant;
use crate::error::{Result, RhymeError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Which onsets count as interchangeable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConsonantScheme {
    /// Ignore the onset: every consonant, empty included.
    All,
    /// Same manner family as the original onset.
    Family,
    /// An explicit set, independent of the original onset.
    Custom(BTreeSet<Consonant>),
}

impl ConsonantScheme {
    /// Parse a scheme name or a custom consonant string.
    pub fn parse(text: &str) -> Result<Self> {
        match text {
            "ALL" => Ok(ConsonantScheme::All),
            "FAMILY" => Ok(ConsonantScheme::Family),
            "" => Err(RhymeError::UnknownScheme(text.to_string())),
            custom => Consonant::parse_set(custom)
                .map(ConsonantScheme::Custom)
                .map_err(|_| RhymeError::UnknownScheme(text.to_string())),
        }
    }
}

impl FromStr for ConsonantScheme {
    type Err = RhymeError;

    fn from_str(s: &str) -> Result<Self> {
        ConsonantScheme::parse(s)
    }
}

impl fmt::Display for ConsonantScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsonantScheme::All => f.write_str("ALL"),
            ConsonantScheme::Family => f.write_str("FAMILY"),
            // Shorthand capitals keep e.g. {z, h} from reading back as zh.
            ConsonantScheme::Custom(set) => {
                for c in set {
                    let symbol = match c {
                        Consonant::Zh => "Z",
                        Consonant::Ch => "C",
                        Consonant::Sh => "S",
                        other => other.as_str(),
                    };
                    f.write_str(symbol)?;
                }
                Ok(())
            }
        }
    }
}

impl Serialize for ConsonantScheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ConsonantScheme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ConsonantScheme::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Which finals count as rhyming.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VowelScheme {
    /// Same nucleus and coda.
    Traditional,
    /// The classical fourteen-rhyme table.
    FourteenRhymes,
    /// Nearby nucleus, any coda.
    SimilarBody,
    /// Nearby nucleus, same coda class.
    SimilarTail,
    /// Very near nucleus, identical coda.
    SimilarSounding,
    /// Same jaw trajectory.
    SimilarMouthMovement,
    /// The final, or one segment longer.
    Additive,
    /// The final, or one segment shorter.
    Subtractive,
}

impl VowelScheme {
    pub const ALL: [VowelScheme; 8] = [
        VowelScheme::Traditional,
        VowelScheme::FourteenRhymes,
        VowelScheme::SimilarBody,
        VowelScheme::SimilarTail,
        VowelScheme::SimilarSounding,
        VowelScheme::SimilarMouthMovement,
        VowelScheme::Additive,
        VowelScheme::Subtractive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VowelScheme::Traditional => "TRADITIONAL",
            VowelScheme::FourteenRhymes => "FOURTEEN_RHYMES",
            VowelScheme::SimilarBody => "SIMILAR_BODY",
            VowelScheme::SimilarTail => "SIMILAR_TAIL",
            VowelScheme::SimilarSounding => "SIMILAR_SOUNDING",
            VowelScheme::SimilarMouthMovement => "SIMILAR_MOUTH_MOVEMENT",
            VowelScheme::Additive => "ADDITIVE",
            VowelScheme::Subtractive => "SUBTRACTIVE",
        }
    }

    /// Whether `a ~ b` implies `b ~ a` under this scheme.
    pub fn is_symmetric(self) -> bool {
        !matches!(self, VowelScheme::Additive | VowelScheme::Subtractive)
    }
}

impl FromStr for VowelScheme {
    type Err = RhymeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "TRADITIONAL" => Ok(VowelScheme::Traditional),
            "FOURTEEN_RHYMES" => Ok(VowelScheme::FourteenRhymes),
            "SIMILAR_BODY" => Ok(VowelScheme::SimilarBody),
            "SIMILAR_TAIL" => Ok(VowelScheme::SimilarTail),
            "SIMILAR_SOUNDING" => Ok(VowelScheme::SimilarSounding),
            "SIMILAR_MOUTH_MOVEMENT" => Ok(VowelScheme::SimilarMouthMovement),
            "ADDITIVE" => Ok(VowelScheme::Additive),
            "SUBTRACTIVE" => Ok(VowelScheme::Subtractive),
            _ => Err(RhymeError::UnknownScheme(s.to_string())),
        }
    }
}

impl fmt::Display for VowelScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
