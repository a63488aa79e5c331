// src/bin/perf_one.rs
// Throughput of the scanner on one generated input, then on many inputs
// scanned in parallel with rayon.
use std::{env, time::Instant};

use lexiscan::{dev::generator::gen_source, lexer::scan};
use rand::{SeedableRng, rngs::StdRng};
use rayon::prelude::*;

fn fmt_mib(bytes: u64) -> String {
    let mib = (bytes as f64) / (1024.0 * 1024.0);
    format!("{mib:.2} MiB")
}

fn throughput_mibs(bytes: u64, ms: f64) -> f64 {
    if ms <= 0.0 {
        return 0.0;
    }
    (bytes as f64) / (1024.0 * 1024.0) / (ms / 1_000.0)
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|s| s.parse::<T>().ok())
        .unwrap_or(default)
}

fn main() {
    env_logger::init();
    let len: usize = env_parse("PERF_ONE_LEN", 10_000_000);
    let seed: u64 = env_parse("PERF_ONE_SEED", 42);
    let batch: usize = env_parse("PERF_ONE_BATCH", 64);

    let mut rng = StdRng::seed_from_u64(seed);
    let src = gen_source(&mut rng, len);
    let bytes = src.len() as u64;
    eprintln!("[perf_one] generated {} (seed={seed})", fmt_mib(bytes));

    let t0 = Instant::now();
    let out = scan(&src);
    let ms = t0.elapsed().as_secs_f64() * 1_000.0;
    eprintln!(
        "[perf_one] single: {} tokens in {ms:.1} ms ({:.1} MiB/s)",
        out.tokens.len(),
        throughput_mibs(bytes, ms)
    );

    // Parallel: `batch` independent inputs of len/batch bytes each.
    let per = (len / batch.max(1)).max(1);
    let inputs: Vec<String> = (0..batch)
        .map(|i| gen_source(&mut StdRng::seed_from_u64(seed + i as u64), per))
        .collect();
    let total: u64 = inputs.iter().map(|s| s.len() as u64).sum();

    let t1 = Instant::now();
    let tokens: usize = inputs.par_iter().map(|s| scan(s).tokens.len()).sum();
    let ms = t1.elapsed().as_secs_f64() * 1_000.0;
    eprintln!(
        "[perf_one] parallel: {batch} inputs, {} total, {tokens} tokens in {ms:.1} ms ({:.1} MiB/s, {} threads)",
        fmt_mib(total),
        throughput_mibs(total, ms),
        rayon::current_num_threads()
    );
}
