use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::collections::HashSet;
use std::hint::black_box;
use std::time::Duration;
use common::games::GameRng;
use common::games::snake::{
    is_reachable, Direction, GameInput, GameSettings, GameStatus, Grid, Point, SnakeGameState,
    WallCollisionMode,
};
use common::leaderboard::Leaderboard;

fn bench_settings() -> GameSettings {
    let mut settings = GameSettings::new();
    settings.features.leaderboard = false;
    settings.obstacles.every_n_foods = 1;
    settings
}

fn bench_play_1000_ticks() {
    let mut rng = GameRng::new(12345);
    let mut state = SnakeGameState::new(bench_settings(), Leaderboard::new(5), &mut rng)
        .expect("bench settings are valid");

    for tick in 0..1000u32 {
        if tick % 7 == 0 {
            let direction = Direction::ALL[rng.random_range(0..4)];
            state.handle_input(GameInput::Turn(direction), &mut rng);
        }
        state.tick(&mut rng);
        if state.status() == GameStatus::GameOver {
            state.handle_input(GameInput::Restart, &mut rng);
        }
    }
    black_box(state.score());
}

fn maze_blocked(grid: &Grid) -> HashSet<Point> {
    // Serpentine walls, each with a single gap at alternating ends.
    let mut blocked = HashSet::new();
    for x in (1..grid.width()).step_by(2) {
        let gap = if (x / 2) % 2 == 0 { grid.height() - 1 } else { 0 };
        for y in 0..grid.height() {
            if y != gap {
                blocked.insert(Point::new(x, y));
            }
        }
    }
    blocked
}

fn bench_reachability_maze() {
    let grid = Grid::new(30, 30, WallCollisionMode::Death);
    let blocked = maze_blocked(&grid);
    black_box(is_reachable(&grid, Point::new(0, 0), Point::new(28, 29), &blocked));
}

fn tick_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("snake");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(10));

    group.bench_function("1000_ticks", |b| {
        b.iter(bench_play_1000_ticks)
    });

    group.bench_function("reachability_maze", |b| {
        b.iter(bench_reachability_maze)
    });

    group.finish();
}

criterion_group!(benches, tick_bench);
criterion_main!(benches);
