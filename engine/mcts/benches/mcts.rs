//! MCTS benchmarks for performance profiling.
//!
//! Run with: `cargo bench -p mcts`
//!
//! These benchmarks measure:
//! - Full MCTS search with varying iteration counts
//! - Search from different game states (opening, midgame, near-terminal)
//! - Tree operations (selection, backpropagation, best action)
//! - Exploration constant impact on search cost

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use games_tictactoe::{State, TicTacToe};
use mcts::{rollout, MctsConfig, MctsSearch, MctsTree};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

// =============================================================================
// Full MCTS Search Benchmarks
// =============================================================================

fn bench_mcts_search_iterations(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcts_search_iterations");
    let game = TicTacToe::new();

    for iterations in [50u32, 100, 200, 400, 800, 1600] {
        group.throughput(Throughput::Elements(iterations as u64));
        group.bench_with_input(
            BenchmarkId::new("tictactoe", iterations),
            &iterations,
            |b, &iterations| {
                let config = MctsConfig::default().with_iterations(iterations);
                b.iter(|| {
                    let mut rng = ChaCha20Rng::seed_from_u64(42);
                    let mut search = MctsSearch::new(&game, config.clone(), State::new());
                    black_box(search.run(&mut rng).unwrap())
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Game Phase Benchmarks
// =============================================================================

fn bench_mcts_game_phases(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcts_game_phases");
    let game = TicTacToe::new();
    let config = MctsConfig::default().with_iterations(400);

    let phases = [
        ("opening", State::new()),
        ("midgame", State::from_moves(&[4, 0, 8])),
        ("near_terminal", State::from_moves(&[0, 3, 1, 4, 8])),
    ];

    for (name, state) in phases {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut rng = ChaCha20Rng::seed_from_u64(42);
                let mut search = MctsSearch::new(&game, config.clone(), state);
                black_box(search.run(&mut rng).unwrap())
            });
        });
    }

    group.finish();
}

// =============================================================================
// Rollout Benchmarks
// =============================================================================

fn bench_rollout(c: &mut Criterion) {
    let mut group = c.benchmark_group("rollout");
    let game = TicTacToe::new();

    group.bench_function("tictactoe_from_opening", |b| {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        b.iter(|| black_box(rollout(&game, State::new(), &mut rng)));
    });

    group.finish();
}

// =============================================================================
// Tree Operation Benchmarks
// =============================================================================

/// Build a wide, two-level tree with some visit statistics.
fn build_tree(width: u32) -> MctsTree<u32> {
    let mut tree = MctsTree::new((0..width).collect());
    let root = tree.root();

    while let Some(action) = tree.pop_untried(root) {
        let child = tree.add_child(root, action, (0..width).collect());
        for i in 0..=action {
            tree.backpropagate(child, i % 3 == 0);
        }
    }

    tree
}

fn bench_tree_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_operations");

    for width in [9u32, 32, 128] {
        let tree = build_tree(width);

        group.bench_with_input(BenchmarkId::new("select_child", width), &tree, |b, tree| {
            b.iter(|| black_box(tree.select_child(tree.root(), 2.0, false)));
        });

        group.bench_with_input(BenchmarkId::new("best_action", width), &tree, |b, tree| {
            b.iter(|| black_box(tree.best_action()));
        });
    }

    group.bench_function("backpropagate_depth_64", |b| {
        let mut tree = MctsTree::new(vec![0u32]);
        let mut leaf = tree.root();
        for depth in 0..64u32 {
            leaf = tree.add_child(leaf, depth, vec![]);
        }
        b.iter(|| tree.backpropagate(black_box(leaf), true));
    });

    group.finish();
}

// =============================================================================
// Configuration Benchmarks
// =============================================================================

fn bench_mcts_configs(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcts_exploration");
    let game = TicTacToe::new();

    for exploration in [0.5f64, 1.0, 2.0, 4.0] {
        group.bench_with_input(
            BenchmarkId::from_parameter(exploration),
            &exploration,
            |b, &exploration| {
                let config = MctsConfig::default()
                    .with_iterations(400)
                    .with_exploration(exploration);
                b.iter(|| {
                    let mut rng = ChaCha20Rng::seed_from_u64(42);
                    let mut search = MctsSearch::new(&game, config.clone(), State::new());
                    black_box(search.run(&mut rng).unwrap())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_mcts_search_iterations,
    bench_mcts_game_phases,
    bench_rollout,
    bench_tree_operations,
    bench_mcts_configs,
);
criterion_main!(benches);
