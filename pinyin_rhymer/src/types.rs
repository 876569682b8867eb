// Core tone types: the five Mandarin tones and tone filter sets.
//
// `Tone` names each tone by its pitch contour and maps to the conventional
// pinyin digit (1-4, with 5 for the neutral tone). `ToneSet` is the
// admissible-tone filter used by rhyme generation, parsed from a digit
// string such as "125".
//
// The type hierarchy is:
// - `Tone`: pitch contour of a syllable (level, rising, dipping, falling, neutral)
// - `ToneSet`: an ordered set of tones

use crate::error::{Result, RhymeError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

/// Pitch contour tone for a syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// First tone: high and held steady (ā).
    Level,
    /// Second tone: pitch ascends (á).
    Rising,
    /// Third tone: down-up valley shape (ǎ).
    Dipping,
    /// Fourth tone: sharp descent (à).
    Falling,
    /// Fifth / neutral tone: short and unstressed, written without a mark.
    Neutral,
}

impl Tone {
    /// All five tones in digit order.
    pub const ALL: [Tone; 5] = [
        Tone::Level,
        Tone::Rising,
        Tone::Dipping,
        Tone::Falling,
        Tone::Neutral,
    ];

    /// The pinyin tone number, 1 through 5.
    pub fn number(self) -> u8 {
        match self {
            Tone::Level => 1,
            Tone::Rising => 2,
            Tone::Dipping => 3,
            Tone::Falling => 4,
            Tone::Neutral => 5,
        }
    }

    /// Look up a tone by its pinyin number.
    pub fn from_number(n: u8) -> Option<Tone> {
        match n {
            1 => Some(Tone::Level),
            2 => Some(Tone::Rising),
            3 => Some(Tone::Dipping),
            4 => Some(Tone::Falling),
            5 => Some(Tone::Neutral),
            _ => None,
        }
    }

    /// Look up a tone by its digit character ('1'..='5').
    pub fn from_digit(c: char) -> Option<Tone> {
        let n = c.to_digit(10)?;
        u8::try_from(n).ok().and_then(Tone::from_number)
    }

    /// Whether this tone is written with a diacritic.
    pub fn is_marked(self) -> bool {
        self != Tone::Neutral
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A set of admissible tones, e.g. the filter "125" = {Level, Rising, Neutral}.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ToneSet(BTreeSet<Tone>);

impl ToneSet {
    /// Every tone.
    pub fn all() -> Self {
        ToneSet(Tone::ALL.into_iter().collect())
    }

    /// A set holding a single tone.
    pub fn only(tone: Tone) -> Self {
        ToneSet(BTreeSet::from([tone]))
    }

    /// Parse a digit-string tone filter. Repeated digits are harmless; any
    /// character other than '1'..='5' fails with `InvalidTone`.
    pub fn parse(digits: &str) -> Result<Self> {
        digits
            .chars()
            .map(|c| Tone::from_digit(c).ok_or_else(|| RhymeError::InvalidTone(c.to_string())))
            .collect::<Result<BTreeSet<Tone>>>()
            .map(ToneSet)
    }

    pub fn contains(&self, tone: Tone) -> bool {
        self.0.contains(&tone)
    }

    pub fn iter(&self) -> impl Iterator<Item = Tone> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Tone> for ToneSet {
    fn from_iter<I: IntoIterator<Item = Tone>>(iter: I) -> Self {
        ToneSet(iter.into_iter().collect())
    }
}

impl fmt::Display for ToneSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tone in &self.0 {
            write!(f, "{tone}")?;
        }
        Ok(())
    }
}

// Serialized as the digit string, matching how tone filters are written.
impl Serialize for ToneSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ToneSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ToneSet::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_numbers() {
        assert_eq!(Tone::Level.number(), 1);
        assert_eq!(Tone::Rising.number(), 2);
        assert_eq!(Tone::Dipping.number(), 3);
        assert_eq!(Tone::Falling.number(), 4);
        assert_eq!(Tone::Neutral.number(), 5);
    }

    #[test]
    fn test_tone_from_number_inverts_number() {
        for tone in Tone::ALL {
            assert_eq!(Tone::from_number(tone.number()), Some(tone));
        }
        assert_eq!(Tone::from_number(0), None);
        assert_eq!(Tone::from_number(6), None);
    }

    #[test]
    fn test_tone_from_digit() {
        assert_eq!(Tone::from_digit('3'), Some(Tone::Dipping));
        assert_eq!(Tone::from_digit('0'), None);
        assert_eq!(Tone::from_digit('x'), None);
    }

    #[test]
    fn test_only_neutral_is_unmarked() {
        assert!(Tone::Level.is_marked());
        assert!(Tone::Falling.is_marked());
        assert!(!Tone::Neutral.is_marked());
    }

    #[test]
    fn test_tone_serde_roundtrip() {
        let json = serde_json::to_string(&Tone::Rising).unwrap();
        assert_eq!(json, "\"rising\"");
        let parsed: Tone = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Tone::Rising);
    }

    #[test]
    fn test_tone_set_parse() {
        let set = ToneSet::parse("125").unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains(Tone::Level));
        assert!(set.contains(Tone::Rising));
        assert!(set.contains(Tone::Neutral));
        assert!(!set.contains(Tone::Dipping));
        assert_eq!(set.to_string(), "125");
    }

    #[test]
    fn test_tone_set_parse_dedups_and_sorts() {
        let set = ToneSet::parse("4114").unwrap();
        assert_eq!(set.to_string(), "14");
    }

    #[test]
    fn test_tone_set_rejects_bad_digit() {
        let err = ToneSet::parse("16").unwrap_err();
        assert!(matches!(err, RhymeError::InvalidTone(ref s) if s == "6"));
    }

    #[test]
    fn test_tone_set_serde_as_digits() {
        let set = ToneSet::parse("53").unwrap();
        assert_eq!(serde_json::to_string(&set).unwrap(), "\"35\"");
        let parsed: ToneSet = serde_json::from_str("\"124\"").unwrap();
        assert_eq!(parsed, ToneSet::parse("421").unwrap());
        assert!(serde_json::from_str::<ToneSet>("\"17\"").is_err());
    }

    #[test]
    fn test_tone_set_empty_string_is_empty() {
        assert!(ToneSet::parse("").unwrap().is_empty());
        assert_eq!(ToneSet::all().len(), 5);
    }
}
