#[macro_use]
extern crate criterion;
extern crate hand_odds;

use criterion::Criterion;
use hand_odds::core::{Card, DeckModel};
use hand_odds::odds::Engine;
use hand_odds::pattern::HandPattern;

fn full_house_standard_deck(c: &mut Criterion) {
    let engine = Engine::new(DeckModel::new(13, 4).unwrap());
    let pattern = HandPattern::full_house();
    c.bench_function("Full house in 7 of 52", move |b| {
        b.iter(|| engine.probability(&pattern, &[], 7).unwrap())
    });
}

fn two_pair_with_held(c: &mut Criterion) {
    let engine = Engine::new(DeckModel::new(13, 4).unwrap());
    let pattern = HandPattern::two_pair();
    let held = [Card::new(12, 0), Card::new(12, 1), Card::new(3, 2)];
    c.bench_function("Two pair holding 3 drawing 10 of 49", move |b| {
        b.iter(|| engine.probability(&pattern, &held, 10).unwrap())
    });
}

fn exact_profile_large_deck(c: &mut Criterion) {
    let engine = Engine::new(DeckModel::new(32, 4).unwrap());
    let pattern = HandPattern::exact_ranks(vec![4, 3, 3, 2, 2, 1, 1, 1]);
    c.bench_function("Exact profile in 17 of 128", move |b| {
        b.iter(|| engine.probability(&pattern, &[], 17).unwrap())
    });
}

criterion_group!(
    benches,
    full_house_standard_deck,
    two_pair_with_held,
    exact_profile_large_deck
);
criterion_main!(benches);
