use criterion::{Criterion, criterion_group, criterion_main};
use pinyin_rhymer::{
    ConsonantScheme, PinYin, RhymeOptions, RhymeQuery, ToneSet, VowelScheme, default_rhymer,
};
use std::hint::black_box;

fn benchmark_parse(c: &mut Criterion) {
    c.bench_function("parse_ascii", |b| {
        b.iter(|| PinYin::parse(black_box("chuang1")))
    });
    c.bench_function("parse_tone_mark", |b| {
        b.iter(|| PinYin::parse(black_box("chuāng")))
    });
}

fn benchmark_generate(c: &mut Criterion) {
    let rhymer = default_rhymer();
    let syllable = PinYin::parse("xiang4").unwrap();
    let tones = ToneSet::all();

    // Widest onset scheme, so every final is crossed with all 22 onsets.
    for vowels in [
        VowelScheme::Traditional,
        VowelScheme::SimilarBody,
        VowelScheme::SimilarMouthMovement,
        VowelScheme::Additive,
    ] {
        c.bench_function(&format!("generate_all_{vowels}"), |b| {
            b.iter(|| {
                rhymer.generate_rhymes(
                    black_box(&syllable),
                    &ConsonantScheme::All,
                    vowels,
                    &tones,
                )
            })
        });
    }
}

fn benchmark_batch(c: &mut Criterion) {
    let rhymer = default_rhymer();
    let queries: Vec<RhymeQuery> = rhymer
        .inventory()
        .iter()
        .take(200)
        .map(|&syllable| RhymeQuery {
            syllable,
            options: RhymeOptions {
                vowels: VowelScheme::SimilarTail,
                ..RhymeOptions::default()
            },
        })
        .collect();

    c.bench_function("generate_batch_200", |b| {
        b.iter(|| rhymer.generate_rhymes_batch(black_box(&queries)))
    });
}

criterion_group!(benches, benchmark_parse, benchmark_generate, benchmark_batch);
criterion_main!(benches);
