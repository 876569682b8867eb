// End-to-end rhyme queries against the embedded inventory.
//
// Each test drives the public string-level API the way a caller would and
// compares the resulting syllables as sets of ASCII strings.

use pinyin_rhymer::{
    ConsonantScheme, PinYin, RhymeError, RhymeOptions, Tone, ToneSet, VowelScheme,
    default_inventory, default_rhymer, generate_rhymes, rhymes_with,
};
use std::collections::BTreeSet;

fn rhymes(text: &str, consonants: &str, vowels: &str, tones: &str) -> BTreeSet<String> {
    generate_rhymes(text, consonants, vowels, tones)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_family_fourteen_rhymes() {
    assert_eq!(
        rhymes("shuang1", "FAMILY", "FOURTEEN_RHYMES", "1"),
        set(&["fang1", "hang1", "huang1", "sang1", "shang1", "shuang1", "xiang1"])
    );
}

#[test]
fn test_all_similar_body_neutral_tone() {
    assert_eq!(
        rhymes("zhe5", "ALL", "SIMILAR_BODY", "5"),
        set(&["e5", "de5", "ke5", "le5", "me5", "ne5", "te5", "ze5", "zhe5"])
    );
}

#[test]
fn test_custom_consonants() {
    assert_eq!(
        rhymes("shei2", "fSs", "FOURTEEN_RHYMES", "2"),
        set(&["fei2", "shei2", "shui2", "sui2"])
    );
    // Shorthand and digraph spellings of the same set agree.
    assert_eq!(
        rhymes("shei2", "fshs", "FOURTEEN_RHYMES", "2"),
        rhymes("shei2", "fSs", "FOURTEEN_RHYMES", "2")
    );
}

#[test]
fn test_traditional_any_onset() {
    let result = rhymes("a4", "ALL", "TRADITIONAL", "4");
    assert!(result.contains("ba4"));
    assert!(result.contains("a4"));
    assert!(result.contains("jia4"));
    assert!(result.contains("hua4"));
    assert!(!result.contains("ban4"));

    assert_eq!(
        rhymes("yu3", "ALL", "TRADITIONAL", "3"),
        set(&["ju3", "lv3", "nv3", "qu3", "xu3", "yu3"])
    );
}

#[test]
fn test_additive() {
    assert_eq!(
        rhymes("ma1", "FAMILY", "ADDITIVE", "1"),
        set(&["ma1", "man1", "mao1", "na1", "nan1"])
    );
}

#[test]
fn test_subtractive() {
    let result = rhymes("xiang4", "ALL", "SUBTRACTIVE", "4");
    assert_eq!(result.len(), 33);
    for expected in ["ang4", "bang4", "bian4", "xian4", "xiang4", "yan4", "yang4", "zhang4"] {
        assert!(result.contains(expected), "missing {expected}");
    }
    assert!(!result.contains("xia4"));
}

#[test]
fn test_mouth_movement() {
    assert_eq!(
        rhymes("shuai4", "FAMILY", "SIMILAR_MOUTH_MOVEMENT", "4"),
        set(&[
            "fei4", "hai4", "huai4", "hui4", "sai4", "shai4", "shuai4", "shui4", "sui4"
        ])
    );

    let result = rhymes("guang1", "FAMILY", "SIMILAR_MOUTH_MOVEMENT", "1");
    for expected in ["gao1", "geng1", "biao1", "bin1", "kuang1"] {
        assert!(result.contains(expected), "missing {expected}");
    }
    for absent in ["diu1", "gan1", "gou1", "ding1"] {
        assert!(!result.contains(absent), "unexpected {absent}");
    }
}

#[test]
fn test_similar_sounding() {
    assert_eq!(
        rhymes("ren2", "FAMILY", "SIMILAR_SOUNDING", "2"),
        set(&["lun2", "ren2"])
    );
    assert_eq!(
        rhymes("zhe4", "FAMILY", "SIMILAR_SOUNDING", "4"),
        set(&["ce4", "che4", "ze4", "zhe4"])
    );
}

#[test]
fn test_similar_tail_follows_final_sound() {
    assert_eq!(
        rhymes("lv4", "ALL", "SIMILAR_TAIL", "4"),
        set(&["ju4", "lv4", "qu4", "xu4", "yu4"])
    );
    assert_eq!(
        rhymes("ren2", "FAMILY", "SIMILAR_TAIL", "2"),
        set(&["lan2", "lian2", "lin2", "luan2", "lun2", "ran2", "ren2"])
    );
    let result = rhymes("ai4", "ALL", "SIMILAR_TAIL", "4");
    assert!(result.contains("yi4"));
    assert!(result.contains("mei4"));
    assert!(!result.contains("ye4"));
}

#[test]
fn test_similar_body_apicals() {
    assert_eq!(
        rhymes("zi3", "FAMILY", "SIMILAR_BODY", "3"),
        set(&["ci3", "zi3"])
    );
}

#[test]
fn test_unicode_query_matches_ascii() {
    assert_eq!(
        rhymes("shuāng", "FAMILY", "FOURTEEN_RHYMES", "1"),
        rhymes("shuang1", "FAMILY", "FOURTEEN_RHYMES", "1")
    );
}

#[test]
fn test_multiple_tones() {
    let result = rhymes("ma1", "ALL", "TRADITIONAL", "12");
    assert!(result.contains("ma1"));
    assert!(result.contains("ma2"));
    assert!(!result.contains("ma3"));
}

#[test]
fn test_rhymes_with_defaults() {
    assert!(rhymes_with("a4", "ba4", &[]).unwrap());
    assert!(!rhymes_with("a4", "ba2", &[]).unwrap());
    assert!(rhymes_with("shuang1", "xiang1", &["FAMILY", "FOURTEEN_RHYMES"]).unwrap());
    assert!(!rhymes_with("shuang1", "kang1", &["FAMILY", "FOURTEEN_RHYMES"]).unwrap());
}

#[test]
fn test_malformed_syllables() {
    for bad in ["not a pinyin", "wah3", "bar", "shr4", "br"] {
        match generate_rhymes(bad, "ALL", "TRADITIONAL", "1") {
            Err(RhymeError::InvalidSyllable(text)) => assert_eq!(text, bad),
            other => panic!("{bad}: expected InvalidSyllable, got {other:?}"),
        }
    }
}

#[test]
fn test_every_attested_syllable_round_trips() {
    let inventory = default_inventory();
    assert_eq!(inventory.len(), 1259);
    for syllable in inventory.iter() {
        assert!(syllable.is_valid(), "{syllable}");
        let ascii = syllable.to_string();
        assert_eq!(PinYin::parse(&ascii).unwrap(), *syllable, "{ascii}");
        let marked = syllable.with_tone_mark();
        assert_eq!(PinYin::parse(&marked).unwrap(), *syllable, "{marked}");
    }
}

#[test]
fn test_results_are_valid_and_contain_query() {
    let rhymer = default_rhymer();
    let consonant_schemes = [ConsonantScheme::All, ConsonantScheme::Family];
    for text in ["ma1", "zhe5", "xiang4", "lv3", "er2", "yong3", "chuang1"] {
        let syllable = PinYin::parse(text).unwrap();
        for consonants in &consonant_schemes {
            for vowels in VowelScheme::ALL {
                let result = rhymer.generate_rhymes(
                    &syllable,
                    consonants,
                    vowels,
                    &ToneSet::only(syllable.tone()),
                );
                assert!(result.contains(&syllable), "{text} {consonants} {vowels}");
                assert!(result.iter().all(|r| r.is_valid() && r.tone() == syllable.tone()));
            }
        }
    }
}

#[test]
fn test_rhymes_with_matches_generation() {
    let rhymer = default_rhymer();
    let syllable = PinYin::parse("ren2").unwrap();
    let options = RhymeOptions {
        consonants: ConsonantScheme::All,
        vowels: VowelScheme::SimilarTail,
        tones: Some(ToneSet::parse("23").unwrap()),
    };
    let generated = rhymer.generate_with(&syllable, &options);
    for other in default_inventory().iter() {
        assert_eq!(
            rhymer.rhymes_with(&syllable, other, &options),
            generated.contains(other),
            "{other}"
        );
    }
    assert!(generated.iter().all(|r| r.tone() != Tone::Level));
}
