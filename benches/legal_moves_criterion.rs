use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use solo_chess::game_state::board::Board;
use solo_chess::game_state::chess_rules::STARTING_PLACEMENT;
use solo_chess::game_state::chess_types::Color;
use solo_chess::move_generation::game_status::evaluate_status;
use solo_chess::move_generation::legal_move_filter::legal_moves;
use solo_chess::move_generation::perft::perft;
use solo_chess::utils::placement::parse_placement;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    placement: &'static str,
    to_move: Color,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        placement: STARTING_PLACEMENT,
        to_move: Color::White,
    },
    BenchCase {
        name: "open_middlegame",
        placement: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1",
        to_move: Color::White,
    },
    BenchCase {
        name: "queen_endgame",
        placement: "6k1/5ppp/8/3Q4/8/8/3q1PPP/6K1",
        to_move: Color::Black,
    },
];

/// Startpos node counts; castling and en passant cannot occur this shallow.
const STARTPOS_NODES: &[usize] = &[20, 400, 8902, 197_281];

fn selected_depth() -> usize {
    match std::env::var("SOLO_CHESS_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => 4,
        _ => 3,
    }
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for case in CASES {
        let board = parse_placement(case.placement).expect("benchmark placement should parse");
        let mut probe = board.clone();
        let count = legal_moves(&mut probe, case.to_move).len();
        assert!(count > 0, "{} should have legal moves", case.name);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.name), case, |b, case| {
            let mut scratch = board.clone();
            b.iter(|| black_box(legal_moves(black_box(&mut scratch), case.to_move).len()));
        });
    }

    group.finish();

    let mut group = c.benchmark_group("evaluate_status");
    for case in CASES {
        let board = parse_placement(case.placement).expect("benchmark placement should parse");
        group.bench_with_input(BenchmarkId::from_parameter(case.name), case, |b, case| {
            let mut scratch = board.clone();
            b.iter(|| black_box(evaluate_status(black_box(&mut scratch), case.to_move)));
        });
    }
    group.finish();
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_startpos");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    let board = Board::initial();
    for (depth_idx, expected_nodes) in STARTPOS_NODES.iter().take(selected_depth()).enumerate() {
        let depth = (depth_idx + 1) as u8;

        // Correctness guard before benchmarking.
        let warmup = perft(&board, Color::White, depth);
        assert_eq!(warmup.nodes, *expected_nodes, "node mismatch at depth {depth}");

        group.throughput(Throughput::Elements(*expected_nodes as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("d{depth}")),
            expected_nodes,
            |b, expected| {
                b.iter(|| {
                    let counts = perft(black_box(&board), Color::White, black_box(depth));
                    assert_eq!(counts.nodes, *expected);
                    black_box(counts.nodes)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(legal_move_benches, bench_legal_moves, bench_perft);
criterion_main!(legal_move_benches);
