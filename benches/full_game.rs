use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trilha::{
    Board, CardKind, MemoryStore, PlayerColor, PlayerSetup, TrailConfig, TurnEngine,
};

fn setups(n: usize) -> Vec<PlayerSetup> {
    (0..n)
        .map(|seat| PlayerSetup::new(format!("P{}", seat), PlayerColor::for_seat(seat)))
        .collect()
}

/// Play one game to the end, sharing on every collaboration card.
fn play(seed: u64, players: usize, board: &Board) -> u64 {
    let store = MemoryStore::with_board(board);
    let config = TrailConfig::default().with_seed(seed);
    let mut engine = TurnEngine::start(config, &setups(players), store).expect("start");

    while !engine.is_finished() {
        let player = engine.current_player();
        let (_, outcome) = engine.roll_dice(player).expect("roll");
        if let Some(effect) = outcome.effect {
            if effect.kind == CardKind::Collaboration {
                let donors: Vec<_> = engine
                    .collaboration()
                    .map(|w| w.eligible_donors(engine.roster()).collect())
                    .unwrap_or_default();
                for donor in donors {
                    let _ = engine.share_stress_card(donor, player);
                }
            }
            engine.acknowledge().expect("acknowledge");
        }
    }
    engine.version()
}

fn bench_full_game(c: &mut Criterion) {
    let board = Board::standard();

    c.bench_function("trilha/full_game(players=2)", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            black_box(play(seed, 2, &board));
        })
    });

    c.bench_function("trilha/full_game(players=6)", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            black_box(play(seed, 6, &board));
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let store = MemoryStore::with_board(&Board::standard());
    let engine = TurnEngine::start(TrailConfig::default().with_seed(1), &setups(6), store).expect("start");

    c.bench_function("trilha/snapshot(players=6)", |b| {
        b.iter(|| black_box(engine.snapshot()))
    });
}

criterion_group!(benches, bench_full_game, bench_snapshot);
criterion_main!(benches);
