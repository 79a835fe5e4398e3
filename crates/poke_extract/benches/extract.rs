//! Benchmarks for the line-oriented parsers.
//!
//! Runs the evos/attacks and wild grammars over synthetic corpora the
//! size of a full species list.
//!
//! Run with:
//!   cargo bench --package poke_extract --bench extract

use std::fmt::Write;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use poke_extract::map_encounter_rates;
use poke_extract::parsers::{evos_attacks, wild};

const SPECIES: &[&str] = &[
    "BULBASAUR", "CHARMANDER", "SQUIRTLE", "PIDGEY", "RATTATA", "SENTRET", "HOOTHOOT",
    "SPEAROW", "EKANS", "PIKACHU", "SANDSHREW", "NIDORAN_F", "NIDORAN_M", "ZUBAT", "ODDISH",
    "MR__MIME",
];

fn evos_attacks_corpus(blocks: usize) -> String {
    let mut text = String::new();
    for index in 0..blocks {
        let species = SPECIES[index % SPECIES.len()];
        let target = SPECIES[(index + 1) % SPECIES.len()];
        let _ = writeln!(text, "Mon{index}EvosAttacks:");
        let _ = writeln!(text, "\tevo_data EVOLVE_LEVEL, {}, {target}", 10 + index % 40);
        let _ = writeln!(text, "\tevo_data EVOLVE_ITEM, MOON_STONE, {species}");
        let _ = writeln!(text, "\tdb 0 ; no more evolutions");
        for level in (1..=45).step_by(4) {
            let _ = writeln!(text, "\tdb {level}, TACKLE");
        }
        let _ = writeln!(text, "\tdb 0 ; no more level-up moves\n");
    }
    text
}

fn wild_corpus(areas: usize) -> String {
    let mut text = String::new();
    for area in 0..areas {
        let _ = writeln!(text, "def_grass_wildmons ROUTE_{area}");
        let _ = writeln!(text, "\tdb 10 percent, 10 percent, 10 percent ; encounter rates: morn/day/nite");
        for time in ["morn", "day", "nite"] {
            let _ = writeln!(text, "\t; {time}");
            for slot in 0..7 {
                let species = SPECIES[(area + slot) % SPECIES.len()];
                let _ = writeln!(text, "\twildmon {}, {species}", 2 + slot);
            }
        }
        let _ = writeln!(text, "end_grass_wildmons\n");
    }
    text
}

fn bench_evos_attacks(c: &mut Criterion) {
    let corpus = evos_attacks_corpus(500);
    let mut group = c.benchmark_group("evos_attacks");
    group.throughput(Throughput::Bytes(corpus.len() as u64));
    group.bench_function("parse_500_blocks", |b| {
        b.iter(|| evos_attacks::parse_evos_attacks("bench.asm", black_box(&corpus)))
    });
    group.finish();
}

fn bench_wild(c: &mut Criterion) {
    let corpus = wild_corpus(200);
    let mut group = c.benchmark_group("wild");
    group.throughput(Throughput::Bytes(corpus.len() as u64));
    group.bench_function("parse_200_areas", |b| {
        b.iter(|| wild::parse_wild("bench.asm", black_box(&corpus)))
    });
    group.finish();
}

fn bench_rates(c: &mut Criterion) {
    let species: Vec<&str> = SPECIES.iter().copied().take(7).collect();
    c.bench_function("map_encounter_rates_grass", |b| {
        b.iter(|| map_encounter_rates(black_box(&species), black_box("grass")))
    });
}

criterion_group!(benches, bench_evos_attacks, bench_wild, bench_rates);
criterion_main!(benches);
