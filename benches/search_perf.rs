//! Benchmarks for match scoring and the full multi-source search.
//!
//! Run with: cargo bench
//! HTML reports land in target/criterion/.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use wyrmseek::matcher::{infix_distance, match_collection, FieldValue, FieldWeight};
use wyrmseek::model::{Catalog, Character, CharacterClass, Quality};
use wyrmseek::search;

const PREFIXES: &[&str] = &[
    "Fire", "Frost", "Storm", "Ash", "Ember", "Night", "Dawn", "Iron", "Wyrm", "Gale",
];
const SUFFIXES: &[&str] = &[
    "knight", "caller", "strider", "priest", "warden", "brand", "singer", "guard", "dancer",
    "ward",
];

fn character(name: String) -> Character {
    Character {
        name,
        quality: Quality::Epic,
        character_class: CharacterClass::Warrior,
        factions: vec![],
        is_global: true,
        subclasses: vec![],
        portraits: vec![],
        illustrations: vec![],
        height: String::new(),
        weight: String::new(),
        lore: String::new(),
        abilities: vec![],
    }
}

/// 500 plausible character names built from syllable pairs.
fn roster() -> Vec<Character> {
    let mut characters = Vec::with_capacity(500);
    for round in 0..5 {
        for prefix in PREFIXES {
            for suffix in SUFFIXES {
                characters.push(character(format!("{}{} {:02}", prefix, suffix, round)));
            }
        }
    }
    characters
}

static NAME_FIELD: &[FieldWeight<Character>] = &[FieldWeight {
    name: "name",
    weight: 2.0,
    value: |c| FieldValue::Text(&c.name),
}];

fn bench_infix_distance(c: &mut Criterion) {
    let query: Vec<char> = "firekn".chars().collect();
    let short: Vec<char> = "fireknight".chars().collect();
    let long: Vec<char> = "the grand order of the emberbound fireknights of the western reach"
        .chars()
        .collect();

    c.bench_function("infix_distance/short_text", |b| {
        b.iter(|| infix_distance(black_box(&query), black_box(&short), 3))
    });
    c.bench_function("infix_distance/long_text", |b| {
        b.iter(|| infix_distance(black_box(&query), black_box(&long), 3))
    });
}

fn bench_match_collection(c: &mut Criterion) {
    let records = roster();
    let mut group = c.benchmark_group("match_collection");

    for query in ["fireknight 03", "firekn", "firekngiht", "zzzzzz"] {
        group.bench_with_input(BenchmarkId::from_parameter(query), query, |b, query| {
            b.iter(|| match_collection(black_box(&records), NAME_FIELD, black_box(query), 0.3))
        });
    }
    group.finish();
}

fn bench_full_search(c: &mut Criterion) {
    let catalog = Catalog {
        characters: Arc::new(roster()),
        ..Catalog::default()
    };
    let mut group = c.benchmark_group("search");

    for query in ["firekn", "chars", "f"] {
        group.bench_with_input(BenchmarkId::from_parameter(query), query, |b, query| {
            b.iter(|| search(black_box(&catalog), black_box(query), 0.3, 12))
        });
    }
    group.finish();
}

/// Baseline: the same roster scored by SkimMatcherV2, for comparison in the
/// criterion reports.
fn bench_skim_baseline(c: &mut Criterion) {
    let records = roster();
    let skim = SkimMatcherV2::default();

    c.bench_function("skim_baseline/firekn", |b| {
        b.iter(|| {
            records
                .iter()
                .filter_map(|r| skim.fuzzy_match(&r.name, black_box("firekn")))
                .count()
        })
    });
}

criterion_group!(
    benches,
    bench_infix_distance,
    bench_match_collection,
    bench_full_search,
    bench_skim_baseline
);
criterion_main!(benches);
