// Final classifier: the 39 Mandarin finals and their rhyme relations.
//
// A final (`Vowel`) is everything after the onset. Each member is described
// by one row of `FINALS`: its post-consonant spelling, an optional medial
// glide, a phonemic nucleus, the surface vowel quality, an optional coda,
// a phonotactic `FinalClass` and a mouth-shape group. The phonemic nucleus
// drives segmentation and TRADITIONAL; the surface quality is what the
// distance schemes measure, so `an` (front a) and `ang` (back a) differ
// there while sharing a phoneme. Member names are the standalone spellings
// (`yi`, `wo`, `yuan`), except the two apical finals `z` and `r`, which spell
// `yi` when standing alone and `i` after their onsets.
//
// The similarity schemes all live here:
// - TRADITIONAL: identical (nucleus, coda).
// - FOURTEEN_RHYMES: a fixed partition into fourteen groups.
// - SIMILAR_BODY: surface qualities within `body_threshold`.
// - SIMILAR_TAIL: the same final sound (`tail`), so `ai` rhymes with `yi`
//   and `an` with `yin`, but `an` not with `ang`.
// - SIMILAR_SOUNDING: surface qualities and coda targets both within the
//   sounding threshold. Widening it lets `u` and `ng` codas meet first.
// - SIMILAR_MOUTH_MOVEMENT: the same `MouthShape` group.
// - SUBTRACTIVE / ADDITIVE: one segment shorter / longer.
//
// Every scheme result contains the queried final.
//
// See also: `monophthong.rs` for distances, `config.rs` for thresholds,
// `phonotactics.rs` for `FinalClass`.

use crate::config::SimilarityConfig;
use crate::error::{Result, RhymeError};
use crate::monophthong::Monophthong;
use crate::phonotactics::FinalClass;
use crate::scheme::VowelScheme;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Final components
// ---------------------------------------------------------------------------

/// Glide between onset and nucleus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medial {
    I,
    U,
    /// ü
    V,
}

impl Medial {
    /// The vowel the glide starts from.
    pub fn monophthong(self) -> Monophthong {
        match self {
            Medial::I => Monophthong::I,
            Medial::U => Monophthong::U,
            Medial::V => Monophthong::Yu,
        }
    }
}

/// Trailing offglide or nasal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coda {
    I,
    U,
    N,
    Ng,
}

impl Coda {
    /// (openness, backness) in hundredths of the articulatory target.
    const fn target(self) -> (i32, i32) {
        match self {
            Coda::I => (10, 10),
            Coda::U => (10, 90),
            Coda::N => (10, 35),
            Coda::Ng => (10, 80),
        }
    }

    /// Chebyshev distance between two coda targets.
    pub fn distance(self, other: Coda) -> f64 {
        let (o1, b1) = self.target();
        let (o2, b2) = other.target();
        f64::from((o1 - o2).abs().max((b1 - b2).abs())) / 100.0
    }
}

/// Whether two (possibly absent) codas are strictly closer than
/// `threshold`. An open final only matches another open final.
fn codas_within(a: Option<Coda>, b: Option<Coda>, threshold: f64) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.distance(b) < threshold,
        _ => false,
    }
}

/// One phoneme-sized piece of a final. `ng` contributes two units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Segment {
    Vowel(Monophthong),
    N,
    G,
}

/// Jaw-movement groups for `SIMILAR_MOUTH_MOVEMENT`, each named after a
/// representative final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouthShape {
    /// Held steady: single vowels without a glide.
    A,
    /// Closing onto a front glide.
    Ai,
    /// `n` after a non-high vowel, and the rounded `ou`/`ong` closings.
    An,
    /// `ng` after a non-high vowel, `ao`, and the high nasal `in`/`ün`.
    Ang,
    /// Opening out of a glide.
    Ya,
    /// `ing`.
    Ying,
}

// ---------------------------------------------------------------------------
// The final table
// ---------------------------------------------------------------------------

/// A Mandarin final, named by its standalone spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vowel {
    A,
    O,
    E,
    Ai,
    Ei,
    Ao,
    Ou,
    An,
    En,
    Ang,
    Eng,
    Ong,
    Er,
    /// Apical i after z, c, s.
    Z,
    /// Apical i after zh, ch, sh, r.
    R,
    Yi,
    Ya,
    Yo,
    Ye,
    Yao,
    You,
    Yan,
    Yin,
    Yang,
    Ying,
    Yong,
    Wu,
    Wa,
    Wo,
    Wai,
    Wei,
    Wan,
    Wen,
    Wang,
    Weng,
    Yu,
    Yue,
    Yuan,
    Yun,
}

struct FinalRow {
    vowel: Vowel,
    name: &'static str,
    spell: &'static str,
    medial: Option<Medial>,
    nucleus: Monophthong,
    quality: Monophthong,
    coda: Option<Coda>,
    class: FinalClass,
    mouth: MouthShape,
}

macro_rules! finals {
    ($(($vowel:ident, $name:literal, $spell:literal, $medial:expr, $nucleus:ident, $quality:ident, $coda:expr, $class:ident, $mouth:ident)),* $(,)?) => {
        const FINALS: &[FinalRow] = &[
            $(FinalRow {
                vowel: Vowel::$vowel,
                name: $name,
                spell: $spell,
                medial: $medial,
                nucleus: Monophthong::$nucleus,
                quality: Monophthong::$quality,
                coda: $coda,
                class: FinalClass::$class,
                mouth: MouthShape::$mouth,
            }),*
        ];
    };
}

const NO_MEDIAL: Option<Medial> = None;
const MED_I: Option<Medial> = Some(Medial::I);
const MED_U: Option<Medial> = Some(Medial::U);
const MED_V: Option<Medial> = Some(Medial::V);
const OPEN: Option<Coda> = None;
const CODA_I: Option<Coda> = Some(Coda::I);
const CODA_U: Option<Coda> = Some(Coda::U);
const CODA_N: Option<Coda> = Some(Coda::N);
const CODA_NG: Option<Coda> = Some(Coda::Ng);

// Row order matches the `Vowel` declaration order.
finals! {
    (A, "a", "a", NO_MEDIAL, A, A, OPEN, Open, A),
    (O, "o", "o", NO_MEDIAL, O, O, OPEN, ZeroOnly, A),
    (E, "e", "e", NO_MEDIAL, BackE, BackE, OPEN, Open, A),
    (Ai, "ai", "ai", NO_MEDIAL, A, A, CODA_I, Open, Ai),
    (Ei, "ei", "ei", NO_MEDIAL, E, E, CODA_I, Open, Ai),
    (Ao, "ao", "ao", NO_MEDIAL, A, A, CODA_U, Open, Ang),
    (Ou, "ou", "ou", NO_MEDIAL, O, O, CODA_U, Open, An),
    (An, "an", "an", NO_MEDIAL, A, FrontA, CODA_N, Open, An),
    (En, "en", "en", NO_MEDIAL, Schwa, E, CODA_N, Open, An),
    (Ang, "ang", "ang", NO_MEDIAL, A, A, CODA_NG, Open, Ang),
    (Eng, "eng", "eng", NO_MEDIAL, Schwa, Schwa, CODA_NG, Open, Ang),
    (Ong, "ong", "ong", NO_MEDIAL, O, O, CODA_NG, Ong, An),
    (Er, "er", "er", NO_MEDIAL, Rhotic, Rhotic, OPEN, ZeroOnly, A),
    (Z, "z", "i", NO_MEDIAL, ApicalDental, ApicalDental, OPEN, ApicalDental, A),
    (R, "r", "i", NO_MEDIAL, ApicalRetroflex, ApicalRetroflex, OPEN, ApicalRetroflex, A),
    (Yi, "yi", "i", NO_MEDIAL, I, I, OPEN, Front, A),
    (Ya, "ya", "ia", MED_I, A, A, OPEN, Front, Ya),
    (Yo, "yo", "io", MED_I, O, O, OPEN, ZeroOnly, Ya),
    (Ye, "ye", "ie", MED_I, E, E, OPEN, Front, Ya),
    (Yao, "yao", "iao", MED_I, A, A, CODA_U, Front, Ang),
    (You, "you", "iu", MED_I, O, O, CODA_U, Front, An),
    (Yan, "yan", "ian", MED_I, A, FrontA, CODA_N, Front, An),
    (Yin, "yin", "in", NO_MEDIAL, I, I, CODA_N, Front, Ang),
    (Yang, "yang", "iang", MED_I, A, A, CODA_NG, Front, Ang),
    (Ying, "ying", "ing", NO_MEDIAL, I, I, CODA_NG, Front, Ying),
    (Yong, "yong", "iong", MED_I, O, O, CODA_NG, Rounded, An),
    (Wu, "wu", "u", NO_MEDIAL, U, U, OPEN, U, A),
    (Wa, "wa", "ua", MED_U, A, A, OPEN, BackWide, Ya),
    (Wo, "wo", "uo", MED_U, O, O, OPEN, U, Ya),
    (Wai, "wai", "uai", MED_U, A, A, CODA_I, BackWide, Ai),
    (Wei, "wei", "ui", MED_U, E, E, CODA_I, Back, Ai),
    (Wan, "wan", "uan", MED_U, A, FrontA, CODA_N, Back, An),
    (Wen, "wen", "un", MED_U, Schwa, E, CODA_N, Back, An),
    (Wang, "wang", "uang", MED_U, A, A, CODA_NG, BackWide, Ang),
    (Weng, "weng", "ueng", MED_U, Schwa, Schwa, CODA_NG, ZeroOnly, Ang),
    (Yu, "yu", "v", NO_MEDIAL, Yu, Yu, OPEN, Rounded, A),
    (Yue, "yue", "ve", MED_V, E, E, OPEN, Rounded, Ya),
    (Yuan, "yuan", "van", MED_V, A, FrontA, CODA_N, Rounded, An),
    (Yun, "yun", "vn", NO_MEDIAL, Yu, Yu, CODA_N, Rounded, Ang),
}

/// Full-form spellings accepted by `normalize` in addition to names and
/// post-consonant spellings.
const EXTRA_SPELLINGS: [(&str, Vowel); 4] = [
    ("ue", Vowel::Yue),
    ("iou", Vowel::You),
    ("uei", Vowel::Wei),
    ("uen", Vowel::Wen),
];

/// The fourteen classical rhyme groups.
const FOURTEEN_RHYMES: [&[Vowel]; 14] = {
    use Vowel::*;
    [
        &[A, Ya, Wa],
        &[E, O, Wo, Yo],
        &[Ye, Yue],
        &[Ai, Wai],
        &[Ei, Wei],
        &[Ao, Yao],
        &[Ou, You],
        &[An, Yan, Wan, Yuan],
        &[En, Yin, Wen, Yun],
        &[Ang, Yang, Wang],
        &[Eng, Ying, Ong, Yong, Weng],
        &[Yi, Yu, Er],
        &[Z, R],
        &[Wu],
    ]
};

impl Vowel {
    /// Every final, in table order.
    pub fn all() -> impl Iterator<Item = Vowel> {
        FINALS.iter().map(|row| row.vowel)
    }

    fn row(self) -> &'static FinalRow {
        &FINALS[self as usize]
    }

    /// Canonical lookup. Accepts a member name (`wo`, `z`), a
    /// post-consonant spelling (`uo`), or a full form (`uei`). The apical
    /// finals are only reachable by name, so `i` resolves to `yi`.
    pub fn normalize(text: &str) -> Result<Vowel> {
        FINALS
            .iter()
            .find(|row| row.name == text)
            .map(|row| row.vowel)
            .or_else(|| Vowel::from_spelling(text))
            .ok_or_else(|| RhymeError::InvalidFinal(text.to_string()))
    }

    /// Lookup by written form only: a post-consonant spelling, a standalone
    /// spelling, or a full form. Never yields an apical final.
    pub fn from_spelling(text: &str) -> Option<Vowel> {
        FINALS
            .iter()
            .filter(|row| !row.vowel.is_apical())
            .find(|row| row.spell == text || row.name == text)
            .map(|row| row.vowel)
            .or_else(|| {
                EXTRA_SPELLINGS
                    .iter()
                    .find(|(spelling, _)| *spelling == text)
                    .map(|&(_, vowel)| vowel)
            })
    }

    pub fn name(self) -> &'static str {
        self.row().name
    }

    pub fn medial(self) -> Option<Medial> {
        self.row().medial
    }

    /// Phonemic nucleus.
    pub fn nucleus(self) -> Monophthong {
        self.row().nucleus
    }

    /// Surface vowel quality of the nucleus.
    pub fn quality(self) -> Monophthong {
        self.row().quality
    }

    pub fn coda(self) -> Option<Coda> {
        self.row().coda
    }

    /// Spelling after an onset, in ASCII (`v` for ü).
    pub fn spell(self) -> &'static str {
        self.row().spell
    }

    pub fn with_consonant(self) -> &'static str {
        self.spell()
    }

    /// Standalone spelling.
    pub fn without_consonant(self) -> &'static str {
        if self.is_apical() { "yi" } else { self.name() }
    }

    pub fn class(self) -> FinalClass {
        self.row().class
    }

    pub fn is_apical(self) -> bool {
        matches!(self, Vowel::Z | Vowel::R)
    }

    /// Phoneme sequence: medial, nucleus, then coda units (`ng` as n + g).
    pub fn segments(self) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(4);
        if let Some(medial) = self.medial() {
            segments.push(Segment::Vowel(medial.monophthong()));
        }
        segments.push(Segment::Vowel(self.nucleus()));
        match self.coda() {
            None => {}
            Some(Coda::I) => segments.push(Segment::Vowel(Monophthong::I)),
            Some(Coda::U) => segments.push(Segment::Vowel(Monophthong::U)),
            Some(Coda::N) => segments.push(Segment::N),
            Some(Coda::Ng) => segments.extend([Segment::N, Segment::G]),
        }
        segments
    }

    fn from_segments(segments: &[Segment]) -> Option<Vowel> {
        Vowel::all().find(|v| v.segments() == segments)
    }

    /// The final sound: the coda's last unit, or the nucleus when open.
    pub fn tail(self) -> Segment {
        match self.coda() {
            None => Segment::Vowel(self.nucleus()),
            Some(Coda::I) => Segment::Vowel(Monophthong::I),
            Some(Coda::U) => Segment::Vowel(Monophthong::U),
            Some(Coda::N) => Segment::N,
            Some(Coda::Ng) => Segment::G,
        }
    }

    pub fn mouth_shape(self) -> MouthShape {
        self.row().mouth
    }

    // -----------------------------------------------------------------------
    // Similarity schemes
    // -----------------------------------------------------------------------

    /// Finals rhyming with `self` under `scheme`, using stock thresholds.
    pub fn similar(self, scheme: VowelScheme) -> BTreeSet<Vowel> {
        self.similar_with(scheme, &SimilarityConfig::default())
    }

    /// Finals rhyming with `self` under `scheme`. Always contains `self`.
    pub fn similar_with(self, scheme: VowelScheme, config: &SimilarityConfig) -> BTreeSet<Vowel> {
        match scheme {
            VowelScheme::Traditional => self.filter(|v| {
                v.nucleus() == self.nucleus() && v.coda() == self.coda()
            }),
            VowelScheme::FourteenRhymes => FOURTEEN_RHYMES
                .iter()
                .find(|group| group.contains(&self))
                .map(|group| group.iter().copied().collect())
                .unwrap_or_else(|| BTreeSet::from([self])),
            VowelScheme::SimilarBody => {
                let body = self.quality().similar(config.body_threshold);
                self.filter(|v| body.contains(&v.quality()))
            }
            VowelScheme::SimilarTail => self.filter(|v| v.tail() == self.tail()),
            VowelScheme::SimilarSounding => self.similar_sounding_with(0, config),
            VowelScheme::SimilarMouthMovement => {
                let shape = self.mouth_shape();
                self.filter(|v| v.mouth_shape() == shape)
            }
            VowelScheme::Additive => self.additive(),
            VowelScheme::Subtractive => self.subtractive(),
        }
    }

    /// `SIMILAR_SOUNDING` widened by `more` threshold steps.
    pub fn similar_sounding(self, more: u32) -> BTreeSet<Vowel> {
        self.similar_sounding_with(more, &SimilarityConfig::default())
    }

    pub fn similar_sounding_with(self, more: u32, config: &SimilarityConfig) -> BTreeSet<Vowel> {
        let threshold = config.sounding_threshold_for(more);
        self.filter(|v| {
            codas_within(v.coda(), self.coda(), threshold)
                && v.quality().similar_sounding(self.quality(), threshold)
        })
    }

    /// `self` plus every final one segment shorter: without the medial, or
    /// without the last segment.
    pub fn subtractive(self) -> BTreeSet<Vowel> {
        let segments = self.segments();
        let mut out = BTreeSet::from([self]);
        if self.medial().is_some() {
            out.extend(Vowel::from_segments(&segments[1..]));
        }
        if segments.len() > 1 {
            out.extend(Vowel::from_segments(&segments[..segments.len() - 1]));
        }
        out
    }

    /// Every final whose subtractive set contains `self`.
    pub fn additive(self) -> BTreeSet<Vowel> {
        self.filter(|v| v.subtractive().contains(&self))
    }

    fn filter(self, keep: impl Fn(Vowel) -> bool) -> BTreeSet<Vowel> {
        let mut out: BTreeSet<Vowel> = Vowel::all().filter(|&v| keep(v)).collect();
        out.insert(self);
        out
    }
}

impl fmt::Display for Vowel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
