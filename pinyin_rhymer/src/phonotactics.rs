// Mandarin phonotactics: which onsets may combine with which finals.
//
// Finals fall into ten distribution classes (`FinalClass`), and each class
// admits a fixed set of onset places of articulation. The table below is
// the whole rule set: bilabials and f take no rounded or back-glide finals,
// palatals take only i- and ü-series finals, the apical finals each take
// exactly one place, and a few finals (o, yo, er, weng) stand only alone.
//
// `is_compatible` is the single lookup; `PinYin::is_valid` calls it.

use crate::consonant::{Consonant, Place};
use serde::{Deserialize, Serialize};

/// Distribution class of a final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalClass {
    /// a e ai ei ao ou an en ang eng
    Open,
    /// ong
    Ong,
    /// yi ya ye yao you yan yin yang ying
    Front,
    /// wu wo
    U,
    /// wei wan wen
    Back,
    /// wa wai wang
    BackWide,
    /// yu yue yuan yun yong
    Rounded,
    /// The buzzed i after z, c, s.
    ApicalDental,
    /// The buzzed i after zh, ch, sh, r.
    ApicalRetroflex,
    /// o yo er weng
    ZeroOnly,
}

use Place::*;

const NON_PALATAL: &[Place] = &[
    Bilabial,
    Labiodental,
    Alveolar,
    Velar,
    Retroflex,
    Dental,
    Zero,
];

impl FinalClass {
    /// Onset places this class admits.
    pub fn allowed_places(self) -> &'static [Place] {
        match self {
            FinalClass::Open | FinalClass::U => NON_PALATAL,
            FinalClass::Ong => &[Alveolar, Velar, Retroflex, Dental],
            FinalClass::Front => &[Bilabial, Alveolar, Palatal, Zero],
            FinalClass::Back => &[Alveolar, Velar, Retroflex, Dental, Zero],
            FinalClass::BackWide => &[Velar, Retroflex, Zero],
            FinalClass::Rounded => &[Alveolar, Palatal, Zero],
            FinalClass::ApicalDental => &[Dental],
            FinalClass::ApicalRetroflex => &[Retroflex],
            FinalClass::ZeroOnly => &[Zero],
        }
    }
}

/// Whether `onset` may precede a final of class `class`.
pub fn is_compatible(onset: Consonant, class: FinalClass) -> bool {
    class.allowed_places().contains(&onset.place())
}
