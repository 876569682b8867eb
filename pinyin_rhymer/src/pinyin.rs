// Syllable parser, validator, and renderer.
//
// `PinYin` is an immutable (onset, final, tone) triple. Parsing accepts
// ASCII with an optional tone digit (`shuang1`, `nv3`, `e`) or Unicode with
// tone marks (`shuāng`, `nǚ`), including decomposed combining marks. The
// pipeline is:
// 1. Fold diacritics to ASCII plus a trailing tone digit (ü → v).
// 2. Split the onset by longest match (`zh` before `z`, shorthand `Z`/`C`/`S`).
// 3. Peel an optional tone digit, check the final's alphabet.
// 4. Undo the onset-conditioned spellings: `i` after z/c/s is the dental
//    apical, `i` after zh/ch/sh/r the retroflex apical, `o` after b/p/m/f is
//    `uo`, and a leading `u` after j/q/x is `ü`.
// 5. Resolve the final by its written form. Member names of the apical
//    finals are not spellings, so `shr` or `br` is not a syllable. Any
//    failure reports the original text.
//
// Rendering reverses step 4. `Display` gives ASCII plus digit;
// `with_tone_mark` gives the marked Unicode form. Both round-trip through
// `parse` for every attested syllable.
//
// Validity is phonotactic (see `phonotactics.rs`) and is a boolean, not an
// error: impossible syllables such as `ber` still parse.
//
// `PinYin` serializes as its ASCII string.

use crate::consonant::{Consonant, Place, split_onset};
use crate::error::{Result, RhymeError};
use crate::phonotactics;
use crate::types::Tone;
use crate::vowel::Vowel;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Letters that may appear in the ASCII final of a syllable.
const FINAL_LETTERS: &str = "aeiouvngwyr";

/// Precomposed tone-marked vowels, grouped by tone. Index % 6 picks the base
/// vowel from `MARK_BASES`, index / 6 the tone.
const MARKED_VOWELS: [char; 24] = [
    'ā', 'ē', 'ī', 'ō', 'ū', 'ǖ', //
    'á', 'é', 'í', 'ó', 'ú', 'ǘ', //
    'ǎ', 'ě', 'ǐ', 'ǒ', 'ǔ', 'ǚ', //
    'à', 'è', 'ì', 'ò', 'ù', 'ǜ',
];
const MARK_BASES: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'ü'];

const COMBINING_MACRON: char = '\u{0304}';
const COMBINING_ACUTE: char = '\u{0301}';
const COMBINING_CARON: char = '\u{030C}';
const COMBINING_GRAVE: char = '\u{0300}';
const COMBINING_DIAERESIS: char = '\u{0308}';

/// A Mandarin syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PinYin {
    consonant: Consonant,
    vowel: Vowel,
    tone: Tone,
}

impl PinYin {
    pub fn new(consonant: Consonant, vowel: Vowel, tone: Tone) -> Self {
        Self {
            consonant,
            vowel,
            tone,
        }
    }

    /// Parse ASCII or tone-marked Unicode pinyin.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || RhymeError::InvalidSyllable(text.to_string());

        let ascii = fold_diacritics(text).ok_or_else(invalid)?;
        let (consonant, rest) = split_onset(&ascii);

        let (body, tone) = match rest.chars().last() {
            Some(c) if c.is_ascii_digit() => {
                let tone = Tone::from_digit(c).ok_or_else(invalid)?;
                (&rest[..rest.len() - 1], tone)
            }
            _ => (rest, Tone::Neutral),
        };

        if body.is_empty() || !body.chars().all(|c| FINAL_LETTERS.contains(c)) {
            return Err(invalid());
        }
        if !consonant.is_empty() && body.starts_with(['w', 'y']) {
            return Err(invalid());
        }

        let vowel = match (consonant.place(), body) {
            (Place::Dental, "i") => Some(Vowel::Z),
            (Place::Retroflex, "i") => Some(Vowel::R),
            (Place::Bilabial | Place::Labiodental, "o") => Some(Vowel::Wo),
            (Place::Palatal, _) => match body.strip_prefix('u') {
                Some(rest) => Vowel::from_spelling(&format!("v{rest}")),
                None => Vowel::from_spelling(body),
            },
            _ => Vowel::from_spelling(body),
        }
        .ok_or_else(invalid)?;

        Ok(Self::new(consonant, vowel, tone))
    }

    pub fn consonant(&self) -> Consonant {
        self.consonant
    }

    pub fn vowel(&self) -> Vowel {
        self.vowel
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    /// The same onset and final with a different tone.
    pub fn with_tone(&self, tone: Tone) -> Self {
        Self { tone, ..*self }
    }

    /// Whether the onset may combine with the final at all.
    pub fn is_valid(&self) -> bool {
        phonotactics::is_compatible(self.consonant, self.vowel.class())
    }

    /// The final as written after this onset, in ASCII.
    fn final_spelling(&self) -> Cow<'static, str> {
        if self.consonant.is_empty() {
            return Cow::Borrowed(self.vowel.without_consonant());
        }
        let spell = self.vowel.with_consonant();
        match self.consonant.place() {
            Place::Bilabial | Place::Labiodental if self.vowel == Vowel::Wo => Cow::Borrowed("o"),
            Place::Palatal => match spell.strip_prefix('v') {
                Some(rest) => Cow::Owned(format!("u{rest}")),
                None => Cow::Borrowed(spell),
            },
            _ => Cow::Borrowed(spell),
        }
    }

    /// Unicode rendering with a tone mark (no mark for the neutral tone).
    pub fn with_tone_mark(&self) -> String {
        let plain = format!("{}{}", self.consonant, self.final_spelling()).replace('v', "ü");
        if !self.tone.is_marked() {
            return plain;
        }

        let Some(at) = mark_position(&plain) else {
            return plain;
        };
        plain
            .char_indices()
            .map(|(i, c)| if i == at { mark(c, self.tone) } else { c })
            .collect()
    }
}

/// Byte index of the vowel that carries the tone mark: `a`, else `e`, else
/// the `o` of `ou`, else the last vowel.
fn mark_position(plain: &str) -> Option<usize> {
    plain
        .find('a')
        .or_else(|| plain.find('e'))
        .or_else(|| plain.find("ou"))
        .or_else(|| {
            plain
                .char_indices()
                .rfind(|&(_, c)| MARK_BASES.contains(&c))
                .map(|(i, _)| i)
        })
}

fn mark(vowel: char, tone: Tone) -> char {
    let (Some(base), Some(row)) = (
        MARK_BASES.iter().position(|&b| b == vowel),
        usize::from(tone.number()).checked_sub(1),
    ) else {
        return vowel;
    };
    MARKED_VOWELS.get(row * MARK_BASES.len() + base).copied().unwrap_or(vowel)
}

/// Fold tone marks and diaeresis into ASCII pinyin with a trailing digit.
/// Returns `None` when the text carries more than one tone mark.
fn fold_diacritics(text: &str) -> Option<String> {
    let mut out = String::with_capacity(text.len() + 1);
    let mut tone: Option<u8> = None;
    let mut set_tone = |n: u8| match tone.replace(n) {
        None => Some(()),
        Some(_) => None,
    };

    for c in text.chars() {
        if let Some(i) = MARKED_VOWELS.iter().position(|&m| m == c) {
            let base = MARK_BASES[i % MARK_BASES.len()];
            out.push(if base == 'ü' { 'v' } else { base });
            set_tone((i / MARK_BASES.len()) as u8 + 1)?;
            continue;
        }
        match c {
            'ü' => out.push('v'),
            COMBINING_MACRON => set_tone(1)?,
            COMBINING_ACUTE => set_tone(2)?,
            COMBINING_CARON => set_tone(3)?,
            COMBINING_GRAVE => set_tone(4)?,
            COMBINING_DIAERESIS => {
                if out.ends_with('u') {
                    out.pop();
                    out.push('v');
                }
            }
            other => out.push(other),
        }
    }

    if let Some(n) = tone {
        out.push(char::from(b'0' + n));
    }
    Some(out)
}

impl FromStr for PinYin {
    type Err = RhymeError;

    fn from_str(s: &str) -> Result<Self> {
        PinYin::parse(s)
    }
}

impl fmt::Display for PinYin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.consonant, self.final_spelling(), self.tone)
    }
}

// Custom serde: serialize as the ASCII string so syllables read naturally
// in JSON and work as map keys.
impl Serialize for PinYin {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PinYin {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        PinYin::parse(&s).map_err(serde::de::Error::custom)
    }
}
