//! Serial vs rayon generation timing across grid sizes

use std::time::Instant;
use life_sandbox::{GridState, TransitionEngine};

fn random_grid(size: usize) -> GridState {
    let mut grid = match GridState::new(size, size) {
        Ok(grid) => grid,
        Err(err) => panic!("benchmark grid {size}x{size}: {err}"),
    };
    if let Err(err) = grid.randomize(0.25) {
        panic!("benchmark randomize: {err}");
    }
    grid
}

fn benchmark(size: usize, iterations: u32, step: fn(&GridState) -> GridState) -> f64 {
    let mut grid = random_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = step(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Life Sandbox Step Benchmark ===\n");

    let sizes = [32, 100, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(size, iterations, TransitionEngine::step_serial);
        let parallel_ms = benchmark(size, iterations, TransitionEngine::step_parallel);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }
}
