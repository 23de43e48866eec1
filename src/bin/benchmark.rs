//! Step timing for both rule variants

use std::time::Instant;

use lattice_life::domain::Automaton;
use rand::{SeedableRng, rngs::StdRng};

fn benchmark(mut automaton: Automaton, rng: &mut StdRng, iterations: u32) -> f64 {
    automaton.initialize_random_with(rng);

    let start = Instant::now();
    for _ in 0..iterations {
        automaton.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() -> anyhow::Result<()> {
    println!("=== Lattice Life Step Benchmark ===\n");

    let sizes = [25, 50, 100, 200, 400];
    let iterations = 10;
    let mut rng = StdRng::seed_from_u64(0x5EED);

    println!("{:>10} {:>14} {:>14} {:>10}", "Size", "Discrete", "Convolution", "Ratio");
    println!("{:-<52}", "");

    for size in sizes {
        let discrete_ms = benchmark(Automaton::discrete(size, size)?, &mut rng, iterations);
        let convolution = Automaton::convolution(size, size, &mut rng)?;
        let convolution_ms = benchmark(convolution, &mut rng, iterations);

        println!(
            "{:>10} {:>11.2} ms {:>11.2} ms {:>9.1}x",
            format!("{}x{}", size, size),
            discrete_ms,
            convolution_ms,
            convolution_ms / discrete_ms
        );
    }

    let size = 200;
    let cells = (size * size) as f64;
    let discrete_ms = benchmark(Automaton::discrete(size, size)?, &mut rng, iterations);
    println!("\n=== Throughput at {size}x{size} ===\n");
    println!(
        "Discrete:    {:.2} ms/gen, {:.1}M cells/sec",
        discrete_ms,
        cells / (discrete_ms / 1000.0) / 1_000_000.0
    );

    Ok(())
}
