use criterion::{black_box, criterion_group, criterion_main, Criterion};

use memory_match::{generate, Difficulty, Game, GameConfig, GameRng, Vocabulary};

fn bench_generate(c: &mut Criterion) {
    let candidates = Vocabulary::Animals.candidates(&mut GameRng::new(0));

    for difficulty in Difficulty::ALL {
        c.bench_function(&format!("generate_{difficulty}"), |b| {
            let mut rng = GameRng::new(42);
            b.iter(|| generate(black_box(&candidates), difficulty.tile_count(), &mut rng))
        });
    }
}

fn bench_full_round(c: &mut Criterion) {
    let config = GameConfig::new(Difficulty::Hard, Vocabulary::Letters).with_seed(7);

    c.bench_function("solve_hard", |b| {
        b.iter(|| {
            let mut game = Game::new(&config).unwrap();
            let pairs: Vec<_> = game
                .deck()
                .iter()
                .filter(|t| t.id() < t.partner())
                .map(|t| (t.id(), t.partner()))
                .collect();
            for (a, b) in pairs {
                game.pick(a);
                game.pick(b);
            }
            game.settle();
            black_box(game.is_won())
        })
    });
}

criterion_group!(benches, bench_generate, bench_full_round);
criterion_main!(benches);
