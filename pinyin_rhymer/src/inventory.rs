// Attested syllable inventory.
//
// Structural validity (`PinYin::is_valid`) admits combinations that never
// occur as real Mandarin syllables, and says nothing about tone. The
// inventory is the list of syllables that actually exist, each with the
// tones it is attested in. Rhyme generation keeps only candidates found
// here.
//
// The inventory is loaded from `data/mandarin_syllables.json` via
// `Inventory::from_json()`. Each entry is a toneless ASCII syllable plus a
// digit string of attested tones:
//
//     {"syllables": [{"text": "nv", "tones": "34"}, ...]}
//
// `default_inventory()` embeds that file with `include_str!` and parses it
// once per process.

use crate::error::{Result, RhymeError};
use crate::pinyin::PinYin;
use crate::types::ToneSet;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::sync::OnceLock;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct InventoryEntry {
    text: String,
    tones: ToneSet,
}

/// The top-level JSON structure for the inventory file.
#[derive(Debug, Deserialize)]
struct InventoryFile {
    syllables: Vec<InventoryEntry>,
}

/// Every attested (onset, final, tone) combination.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    syllables: BTreeSet<PinYin>,
}

impl Inventory {
    /// Parse an inventory from a JSON string. Malformed JSON is an
    /// `Inventory` error; an entry that is not a syllable fails with
    /// `InvalidSyllable`.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: InventoryFile = serde_json::from_str(json).map_err(RhymeError::Inventory)?;
        let mut syllables = BTreeSet::new();
        for entry in &file.syllables {
            let base = PinYin::parse(&entry.text)?;
            syllables.extend(entry.tones.iter().map(|tone| base.with_tone(tone)));
        }
        debug!(
            entries = file.syllables.len(),
            syllables = syllables.len(),
            "loaded syllable inventory"
        );
        Ok(Self { syllables })
    }

    pub fn contains(&self, syllable: &PinYin) -> bool {
        self.syllables.contains(syllable)
    }

    /// All attested syllables, in (onset, final, tone) order.
    pub fn iter(&self) -> impl Iterator<Item = &PinYin> + '_ {
        self.syllables.iter()
    }

    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }
}

impl FromIterator<PinYin> for Inventory {
    fn from_iter<I: IntoIterator<Item = PinYin>>(iter: I) -> Self {
        Self {
            syllables: iter.into_iter().collect(),
        }
    }
}

/// The embedded standard Mandarin inventory, parsed on first use.
///
/// Panics if the embedded JSON is malformed (should never happen in a
/// released build).
pub fn default_inventory() -> &'static Inventory {
    static INVENTORY: OnceLock<Inventory> = OnceLock::new();
    INVENTORY.get_or_init(|| {
        let json = include_str!("../../data/mandarin_syllables.json");
        Inventory::from_json(json).expect("embedded mandarin_syllables.json is malformed")
    })
}
