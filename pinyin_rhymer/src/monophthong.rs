// Monophthong geometry: the twelve vowel qualities and their distances.
//
// Each quality sits at a fixed point in a normalized vowel space of
// (openness, backness), both in [0, 1]. Points are stored as integer
// hundredths so that threshold comparisons at table boundaries stay exact;
// the public accessors convert to f64.
//
// Distance is Chebyshev (the larger of the two axis deltas). Two qualities
// are "within" a threshold when their distance is strictly below it.
//
// The apical vowels get their own points: ɿ is the buzzed vowel after
// z/c/s and ʅ the one after zh/ch/sh/r. `FrontA` never heads a final
// phonemically; it is the surface quality of the `a` in `an`, `yan`, `wan`
// and `yuan`, kept apart from the `a` of `ang` and `ao`.
//
// See also: `vowel.rs`, which places each final's surface quality here for
// the body and sounding schemes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A vowel quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Monophthong {
    /// i
    I,
    /// ü, spelled `v` in ASCII pinyin.
    Yu,
    /// ɿ
    ApicalDental,
    /// ʅ
    ApicalRetroflex,
    /// u
    U,
    /// e, as in `ye` and `ei`.
    E,
    /// ə, as in `en` and `eng`.
    Schwa,
    /// ɚ
    Rhotic,
    /// ɤ, the standalone `e`.
    BackE,
    /// o
    O,
    /// Front a, the surface vowel of `an`.
    FrontA,
    /// a
    A,
}

impl Monophthong {
    pub const ALL: [Monophthong; 12] = [
        Monophthong::I,
        Monophthong::Yu,
        Monophthong::ApicalDental,
        Monophthong::ApicalRetroflex,
        Monophthong::U,
        Monophthong::E,
        Monophthong::Schwa,
        Monophthong::Rhotic,
        Monophthong::BackE,
        Monophthong::O,
        Monophthong::FrontA,
        Monophthong::A,
    ];

    /// (openness, backness) in hundredths.
    pub(crate) const fn point(self) -> (i32, i32) {
        match self {
            Monophthong::I => (10, 10),
            Monophthong::Yu => (10, 18),
            Monophthong::ApicalDental => (10, 35),
            Monophthong::ApicalRetroflex => (15, 60),
            Monophthong::U => (10, 90),
            Monophthong::E => (40, 20),
            Monophthong::Schwa => (45, 65),
            Monophthong::Rhotic => (38, 96),
            Monophthong::BackE => (30, 85),
            Monophthong::O => (60, 80),
            Monophthong::FrontA => (80, 30),
            Monophthong::A => (85, 65),
        }
    }

    pub fn openness(self) -> f64 {
        f64::from(self.point().0) / 100.0
    }

    pub fn backness(self) -> f64 {
        f64::from(self.point().1) / 100.0
    }

    /// IPA symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Monophthong::I => "i",
            Monophthong::Yu => "y",
            Monophthong::ApicalDental => "ɿ",
            Monophthong::ApicalRetroflex => "ʅ",
            Monophthong::U => "u",
            Monophthong::E => "e",
            Monophthong::Schwa => "ə",
            Monophthong::Rhotic => "ɚ",
            Monophthong::BackE => "ɤ",
            Monophthong::O => "o",
            Monophthong::FrontA => "æ",
            Monophthong::A => "a",
        }
    }

    /// Chebyshev distance between two phonemes.
    pub fn distance(self, other: Monophthong) -> f64 {
        let (o1, b1) = self.point();
        let (o2, b2) = other.point();
        let hundredths = (o1 - o2).abs().max((b1 - b2).abs());
        f64::from(hundredths) / 100.0
    }

    /// Every phoneme strictly closer than `threshold`, `self` included for
    /// any positive threshold.
    pub fn similar(self, threshold: f64) -> BTreeSet<Monophthong> {
        Monophthong::ALL
            .into_iter()
            .filter(|&other| within(self, other, threshold))
            .collect()
    }

    /// Pairwise proximity test used by the sounding scheme.
    pub fn similar_sounding(self, other: Monophthong, threshold: f64) -> bool {
        within(self, other, threshold)
    }
}

/// True when `a` and `b` are strictly closer than `threshold`.
pub fn within(a: Monophthong, b: Monophthong, threshold: f64) -> bool {
    a.distance(b) < threshold
}

impl fmt::Display for Monophthong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
