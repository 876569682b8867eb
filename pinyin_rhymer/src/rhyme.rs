// Rhyme generation engine.
//
// A rhyme query is a syllable plus three selectors: an onset scheme, a
// final scheme, and a set of admissible tones. Generation expands each
// selector independently (onsets via `Consonant::matches`, finals via
// `Vowel::similar_with`), takes the Cartesian product, and keeps the
// candidates that are both phonotactically valid and attested with that
// tone in the `Inventory`. The queried syllable is never excluded; it
// appears whenever its own tone is admitted.
//
// `rhymes_with` is set membership over the same generation. With default
// options it asks "same final rhyme (TRADITIONAL), any onset, same tone".
//
// `Rhymer` is immutable after construction and `Send + Sync`, so batch
// generation fans out over rayon without locking. `default_rhymer()` is
// built once per process from the embedded inventory.
//
// See also: `scheme.rs` for selector names, `config.rs` for tuning.

use crate::config::RhymeConfig;
use crate::error::{Result, RhymeError};
use crate::inventory::{Inventory, default_inventory};
use crate::pinyin::PinYin;
use crate::scheme::{ConsonantScheme, VowelScheme};
use crate::types::ToneSet;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::sync::OnceLock;
use tracing::{debug, trace};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Selectors for a rhyme query.
#[derive(Clone, Debug, PartialEq)]
pub struct RhymeOptions {
    pub consonants: ConsonantScheme,
    pub vowels: VowelScheme,
    /// Admissible tones; `None` means the queried syllable's own tone.
    pub tones: Option<ToneSet>,
}

impl Default for RhymeOptions {
    fn default() -> Self {
        Self {
            consonants: ConsonantScheme::All,
            vowels: VowelScheme::Traditional,
            tones: None,
        }
    }
}

impl RhymeOptions {
    /// Options with the configured default schemes and the own-tone filter.
    pub fn from_config(config: &RhymeConfig) -> Self {
        Self {
            consonants: config.default_consonant_scheme.clone(),
            vowels: config.default_vowel_scheme,
            tones: None,
        }
    }

    /// Parse positional options `[consonants, vowels, tones]`. Missing
    /// trailing positions keep their defaults.
    pub fn from_args(args: &[&str]) -> Result<Self> {
        let mut options = Self::default();
        let mut args = args.iter();
        if let Some(consonants) = args.next() {
            options.consonants = consonants.parse()?;
        }
        if let Some(vowels) = args.next() {
            options.vowels = vowels.parse()?;
        }
        if let Some(tones) = args.next() {
            options.tones = Some(ToneSet::parse(tones)?);
        }
        if let Some(extra) = args.next() {
            return Err(RhymeError::UnknownScheme(extra.to_string()));
        }
        Ok(options)
    }

    fn tones_for(&self, syllable: &PinYin) -> ToneSet {
        self.tones
            .clone()
            .unwrap_or_else(|| ToneSet::only(syllable.tone()))
    }
}

/// One entry of a batch request.
#[derive(Clone, Debug, PartialEq)]
pub struct RhymeQuery {
    pub syllable: PinYin,
    pub options: RhymeOptions,
}

// ---------------------------------------------------------------------------
// Rhymer
// ---------------------------------------------------------------------------

/// Rhyme generator over an attested inventory.
#[derive(Clone, Debug)]
pub struct Rhymer {
    inventory: Inventory,
    config: RhymeConfig,
}

impl Default for Rhymer {
    fn default() -> Self {
        Self::new(default_inventory().clone(), RhymeConfig::default())
    }
}

impl Rhymer {
    pub fn new(inventory: Inventory, config: RhymeConfig) -> Self {
        Self { inventory, config }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn config(&self) -> &RhymeConfig {
        &self.config
    }

    /// Options `rhymes_with` falls back to.
    pub fn default_options(&self) -> RhymeOptions {
        RhymeOptions::from_config(&self.config)
    }

    /// Every attested syllable that rhymes with `syllable` under the given
    /// schemes and tones.
    pub fn generate_rhymes(
        &self,
        syllable: &PinYin,
        consonants: &ConsonantScheme,
        vowels: VowelScheme,
        tones: &ToneSet,
    ) -> BTreeSet<PinYin> {
        let onsets = syllable.consonant().matches(consonants);
        let finals = syllable
            .vowel()
            .similar_with(vowels, &self.config.similarity);

        let mut rhymes = BTreeSet::new();
        let mut candidates = 0usize;
        for &consonant in &onsets {
            for &vowel in &finals {
                for tone in tones.iter() {
                    candidates += 1;
                    let candidate = PinYin::new(consonant, vowel, tone);
                    if !candidate.is_valid() {
                        trace!(%candidate, "rejected: onset and final never combine");
                    } else if !self.inventory.contains(&candidate) {
                        trace!(%candidate, "rejected: not attested");
                    } else {
                        rhymes.insert(candidate);
                    }
                }
            }
        }

        debug!(
            %syllable,
            consonants = %consonants,
            vowels = %vowels,
            tones = %tones,
            onsets = onsets.len(),
            finals = finals.len(),
            candidates,
            rhymes = rhymes.len(),
            "generated rhymes"
        );
        rhymes
    }

    /// `generate_rhymes` driven by a `RhymeOptions`.
    pub fn generate_with(&self, syllable: &PinYin, options: &RhymeOptions) -> BTreeSet<PinYin> {
        self.generate_rhymes(
            syllable,
            &options.consonants,
            options.vowels,
            &options.tones_for(syllable),
        )
    }

    /// Whether `other` is among the rhymes of `syllable`.
    pub fn rhymes_with(&self, syllable: &PinYin, other: &PinYin, options: &RhymeOptions) -> bool {
        let tones = options.tones_for(syllable);
        if !tones.contains(other.tone()) {
            return false;
        }
        self.generate_rhymes(syllable, &options.consonants, options.vowels, &tones)
            .contains(other)
    }

    /// Run many queries in parallel. Results are in query order.
    pub fn generate_rhymes_batch(&self, queries: &[RhymeQuery]) -> Vec<BTreeSet<PinYin>> {
        queries
            .par_iter()
            .map(|query| self.generate_with(&query.syllable, &query.options))
            .collect()
    }
}

/// Process-wide rhymer over the embedded inventory with stock tuning.
pub fn default_rhymer() -> &'static Rhymer {
    static RHYMER: OnceLock<Rhymer> = OnceLock::new();
    RHYMER.get_or_init(Rhymer::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tone;

    fn p(text: &str) -> PinYin {
        PinYin::parse(text).unwrap()
    }

    fn texts(rhymes: &BTreeSet<PinYin>) -> BTreeSet<String> {
        rhymes.iter().map(ToString::to_string).collect()
    }

    fn strings(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_options_default() {
        let options = RhymeOptions::default();
        assert_eq!(options.consonants, ConsonantScheme::All);
        assert_eq!(options.vowels, VowelScheme::Traditional);
        assert_eq!(options.tones, None);
        assert_eq!(RhymeOptions::from_args(&[]).unwrap(), options);
    }

    #[test]
    fn test_options_from_args() {
        let options = RhymeOptions::from_args(&["FAMILY", "SIMILAR_TAIL", "12"]).unwrap();
        assert_eq!(options.consonants, ConsonantScheme::Family);
        assert_eq!(options.vowels, VowelScheme::SimilarTail);
        assert_eq!(options.tones, Some(ToneSet::parse("12").unwrap()));

        let partial = RhymeOptions::from_args(&["fSs"]).unwrap();
        assert!(matches!(partial.consonants, ConsonantScheme::Custom(_)));
        assert_eq!(partial.vowels, VowelScheme::Traditional);
    }

    #[test]
    fn test_options_from_args_errors() {
        assert!(matches!(
            RhymeOptions::from_args(&["ALL", "RHYMISH"]),
            Err(RhymeError::UnknownScheme(_))
        ));
        assert!(matches!(
            RhymeOptions::from_args(&["ALL", "TRADITIONAL", "1x"]),
            Err(RhymeError::InvalidTone(_))
        ));
        assert!(matches!(
            RhymeOptions::from_args(&["ALL", "TRADITIONAL", "1", "extra"]),
            Err(RhymeError::UnknownScheme(ref s)) if s == "extra"
        ));
    }

    #[test]
    fn test_generate_family_fourteen() {
        let rhymes = default_rhymer().generate_rhymes(
            &p("shuang1"),
            &ConsonantScheme::Family,
            VowelScheme::FourteenRhymes,
            &ToneSet::only(Tone::Level),
        );
        assert_eq!(
            texts(&rhymes),
            strings(&["fang1", "hang1", "huang1", "sang1", "shang1", "shuang1", "xiang1"])
        );
    }

    #[test]
    fn test_generate_keeps_only_valid_attested() {
        let rhymer = default_rhymer();
        for scheme in VowelScheme::ALL {
            let rhymes = rhymer.generate_rhymes(
                &p("xiang4"),
                &ConsonantScheme::All,
                scheme,
                &ToneSet::all(),
            );
            for r in &rhymes {
                assert!(r.is_valid(), "{r}");
                assert!(rhymer.inventory().contains(r), "{r}");
            }
        }
    }

    #[test]
    fn test_empty_tone_set_yields_nothing() {
        let rhymes = default_rhymer().generate_rhymes(
            &p("ma1"),
            &ConsonantScheme::All,
            VowelScheme::Traditional,
            &ToneSet::default(),
        );
        assert!(rhymes.is_empty());
    }

    #[test]
    fn test_rhymes_with_defaults() {
        let rhymer = default_rhymer();
        let options = rhymer.default_options();
        assert!(rhymer.rhymes_with(&p("a4"), &p("ba4"), &options));
        assert!(!rhymer.rhymes_with(&p("a4"), &p("ba3"), &options));
        assert!(!rhymer.rhymes_with(&p("a4"), &p("bai4"), &options));
    }

    #[test]
    fn test_batch_matches_sequential() {
        let rhymer = default_rhymer();
        let queries: Vec<RhymeQuery> = ["ma1", "zhe5", "ren2", "guang1", "yu3"]
            .iter()
            .map(|text| RhymeQuery {
                syllable: p(text),
                options: RhymeOptions {
                    consonants: ConsonantScheme::Family,
                    vowels: VowelScheme::SimilarTail,
                    tones: None,
                },
            })
            .collect();
        let batch = rhymer.generate_rhymes_batch(&queries);
        assert_eq!(batch.len(), queries.len());
        for (query, result) in queries.iter().zip(&batch) {
            assert_eq!(result, &rhymer.generate_with(&query.syllable, &query.options));
        }
    }

    #[test]
    fn test_custom_inventory_restricts_output() {
        let inventory: Inventory = [p("ma1"), p("ba1"), p("pa1")].into_iter().collect();
        let rhymer = Rhymer::new(inventory, RhymeConfig::default());
        let rhymes = rhymer.generate_with(&p("ma1"), &RhymeOptions::default());
        assert_eq!(texts(&rhymes), strings(&["ba1", "ma1", "pa1"]));
    }
}
