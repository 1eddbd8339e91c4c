//! Per-turn decision latency on a crowded mid-game board.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use photosynth_bot::analysis::TurnAnalysis;
use photosynth_bot::core::{Action, Board, BotConfig, CellId, Forest, Tree, TreeSize, TurnSnapshot};
use photosynth_bot::policy::{DecisionPolicy, GreedyPolicy};

fn mid_game() -> TurnSnapshot {
    let sizes = [TreeSize::Seed, TreeSize::Small, TreeSize::Medium, TreeSize::Large];
    let forest = Forest::from_trees((0..37u8).step_by(2).enumerate().map(|(i, c)| {
        Tree::new(CellId::new(c), sizes[i % 4], i % 3 != 0)
    }))
    .unwrap();

    let mut actions = vec![Action::Wait];
    for tree in forest.mine() {
        let cell = tree.cell;
        match tree.size {
            TreeSize::Large => actions.push(Action::Complete { cell }),
            _ => actions.push(Action::Grow { cell }),
        }
        if tree.size != TreeSize::Seed {
            for to in (1..37u8).step_by(2) {
                actions.push(Action::Seed { from: cell, to: CellId::new(to) });
            }
        }
    }

    TurnSnapshot::new(14)
        .with_nutrient(15)
        .with_sun(12)
        .with_forest(forest)
        .with_actions(actions)
}

fn bench_decide(c: &mut Criterion) {
    let board = Board::standard();
    let snapshot = mid_game();
    let policy = GreedyPolicy::default();

    c.bench_function("decide_mid_game", |b| {
        b.iter(|| policy.decide(black_box(&board), black_box(&snapshot)))
    });
}

fn bench_analysis(c: &mut Criterion) {
    let board = Board::standard();
    let snapshot = mid_game();
    let weights = BotConfig::default().weights;

    c.bench_function("turn_analysis", |b| {
        b.iter(|| TurnAnalysis::compute(black_box(&board), black_box(&snapshot), &weights))
    });
}

criterion_group!(benches, bench_decide, bench_analysis);
criterion_main!(benches);
