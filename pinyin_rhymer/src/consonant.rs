// Consonant classifier: the 21 Mandarin onsets plus the empty onset.
//
// Each onset carries two fixed classifications:
// - `ConsonantFamily`: manner of articulation (plosive, fricative, affricate,
//   lateral, nasal). Drives the `FAMILY` onset-similarity scheme.
// - `Place`: place of articulation (bilabial, alveolar, velar, ...). Drives
//   the phonotactic compatibility table in `phonotactics.rs`.
//
// The empty onset has a place (`Place::Zero`) but no family. Shorthand
// capitals `Z`, `C`, `S` normalize to the retroflex digraphs `zh`, `ch`, `sh`.
//
// See also: `scheme.rs` for `ConsonantScheme`, `pinyin.rs` which uses
// `split_onset` to peel the onset off a syllable.

use crate::error::{Result, RhymeError};
use crate::scheme::ConsonantScheme;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A syllable onset. `Empty` stands for a vowel-initial syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Consonant {
    #[serde(rename = "")]
    Empty,
    B,
    P,
    M,
    F,
    D,
    T,
    N,
    L,
    G,
    K,
    H,
    J,
    Q,
    X,
    Zh,
    Ch,
    Sh,
    R,
    Z,
    C,
    S,
}

/// Every consonant, empty onset first, in the traditional bopomofo order.
const ALL_CONSONANTS: [Consonant; 22] = [
    Consonant::Empty,
    Consonant::B,
    Consonant::P,
    Consonant::M,
    Consonant::F,
    Consonant::D,
    Consonant::T,
    Consonant::N,
    Consonant::L,
    Consonant::G,
    Consonant::K,
    Consonant::H,
    Consonant::J,
    Consonant::Q,
    Consonant::X,
    Consonant::Zh,
    Consonant::Ch,
    Consonant::Sh,
    Consonant::R,
    Consonant::Z,
    Consonant::C,
    Consonant::S,
];

/// Onset spellings tried when splitting a syllable, digraphs before their
/// single-letter prefixes so `zhang` never splits as `z` + `hang`.
const ONSET_SPELLINGS: [(&str, Consonant); 24] = [
    ("zh", Consonant::Zh),
    ("ch", Consonant::Ch),
    ("sh", Consonant::Sh),
    ("Z", Consonant::Zh),
    ("C", Consonant::Ch),
    ("S", Consonant::Sh),
    ("b", Consonant::B),
    ("p", Consonant::P),
    ("m", Consonant::M),
    ("f", Consonant::F),
    ("d", Consonant::D),
    ("t", Consonant::T),
    ("n", Consonant::N),
    ("l", Consonant::L),
    ("g", Consonant::G),
    ("k", Consonant::K),
    ("h", Consonant::H),
    ("j", Consonant::J),
    ("q", Consonant::Q),
    ("x", Consonant::X),
    ("r", Consonant::R),
    ("z", Consonant::Z),
    ("c", Consonant::C),
    ("s", Consonant::S),
];

/// Manner of articulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsonantFamily {
    Plosive,
    Fricative,
    Affricate,
    Lateral,
    Nasal,
}

/// Place of articulation, the key for onset/final compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Place {
    /// b, p, m
    Bilabial,
    /// f
    Labiodental,
    /// d, t, n, l
    Alveolar,
    /// g, k, h
    Velar,
    /// j, q, x
    Palatal,
    /// zh, ch, sh, r
    Retroflex,
    /// z, c, s
    Dental,
    /// The empty onset.
    Zero,
}

impl Consonant {
    /// All 22 consonants, including the empty onset.
    pub fn all() -> &'static [Consonant] {
        &ALL_CONSONANTS
    }

    /// The 21 real onsets (everything but `Empty`).
    pub fn onsets() -> &'static [Consonant] {
        &ALL_CONSONANTS[1..]
    }

    /// Canonical pinyin spelling; the empty string for `Empty`.
    pub fn as_str(self) -> &'static str {
        match self {
            Consonant::Empty => "",
            Consonant::B => "b",
            Consonant::P => "p",
            Consonant::M => "m",
            Consonant::F => "f",
            Consonant::D => "d",
            Consonant::T => "t",
            Consonant::N => "n",
            Consonant::L => "l",
            Consonant::G => "g",
            Consonant::K => "k",
            Consonant::H => "h",
            Consonant::J => "j",
            Consonant::Q => "q",
            Consonant::X => "x",
            Consonant::Zh => "zh",
            Consonant::Ch => "ch",
            Consonant::Sh => "sh",
            Consonant::R => "r",
            Consonant::Z => "z",
            Consonant::C => "c",
            Consonant::S => "s",
        }
    }

    /// Canonical lookup. Applies the shorthand translation (`Z`→`zh`,
    /// `C`→`ch`, `S`→`sh`) first; `""` is the empty onset.
    pub fn normalize(text: &str) -> Result<Consonant> {
        let canonical = match text {
            "Z" => "zh",
            "C" => "ch",
            "S" => "sh",
            other => other,
        };
        ALL_CONSONANTS
            .iter()
            .copied()
            .find(|c| c.as_str() == canonical)
            .ok_or_else(|| RhymeError::InvalidConsonant(text.to_string()))
    }

    /// Manner family; `None` only for the empty onset.
    pub fn family(self) -> Option<ConsonantFamily> {
        use Consonant::*;
        match self {
            Empty => None,
            B | P | D | T | G | K => Some(ConsonantFamily::Plosive),
            F | H | S | Sh | X => Some(ConsonantFamily::Fricative),
            Z | C | Zh | Ch | J | Q => Some(ConsonantFamily::Affricate),
            L | R => Some(ConsonantFamily::Lateral),
            M | N => Some(ConsonantFamily::Nasal),
        }
    }

    pub fn place(self) -> Place {
        use Consonant::*;
        match self {
            Empty => Place::Zero,
            B | P | M => Place::Bilabial,
            F => Place::Labiodental,
            D | T | N | L => Place::Alveolar,
            G | K | H => Place::Velar,
            J | Q | X => Place::Palatal,
            Zh | Ch | Sh | R => Place::Retroflex,
            Z | C | S => Place::Dental,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Consonant::Empty
    }

    /// Onsets that count as interchangeable with `self` under `scheme`.
    ///
    /// `All` ignores the onset entirely (every consonant, empty included).
    /// `Family` is reflexive: it returns every consonant of `self`'s family,
    /// or just `{Empty}` for the empty onset. `Custom` returns its set as-is.
    pub fn matches(self, scheme: &ConsonantScheme) -> BTreeSet<Consonant> {
        match scheme {
            ConsonantScheme::All => ALL_CONSONANTS.iter().copied().collect(),
            ConsonantScheme::Family => match self.family() {
                None => BTreeSet::from([Consonant::Empty]),
                Some(family) => ALL_CONSONANTS
                    .iter()
                    .copied()
                    .filter(|c| c.family() == Some(family))
                    .collect(),
            },
            ConsonantScheme::Custom(set) => set.clone(),
        }
    }

    /// Parse a run of concatenated consonant symbols such as `"fSs"` or
    /// `"bpmf"`. Fails with `InvalidConsonant` on the first unrecognized
    /// character.
    pub fn parse_set(text: &str) -> Result<BTreeSet<Consonant>> {
        let mut set = BTreeSet::new();
        let mut rest = text;
        while !rest.is_empty() {
            match split_onset(rest) {
                (Consonant::Empty, _) => {
                    return Err(RhymeError::InvalidConsonant(rest.to_string()));
                }
                (consonant, tail) => {
                    set.insert(consonant);
                    rest = tail;
                }
            }
        }
        Ok(set)
    }
}

/// Split the longest onset prefix off `text`. Returns `Empty` and the whole
/// input when `text` starts with no consonant.
pub fn split_onset(text: &str) -> (Consonant, &str) {
    ONSET_SPELLINGS
        .iter()
        .find_map(|&(spelling, consonant)| {
            text.strip_prefix(spelling).map(|rest| (consonant, rest))
        })
        .unwrap_or((Consonant::Empty, text))
}

impl fmt::Display for Consonant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
