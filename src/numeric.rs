//! Sequence and sampling exercises
//!
//! Fibonacci sequences, factorials, and Monte Carlo circle-area
//! estimation.

use rand::Rng;

/// First `n` Fibonacci numbers, starting 0, 1.
///
/// Terms are `u64`; fib(93) is the last one that fits, so `n` can be at
/// most 94 before the addition overflows.
pub fn fibonacci(n: usize) -> Vec<u64> {
    let mut seq: Vec<u64> = Vec::with_capacity(n);
    for i in 0..n {
        let term = match i {
            0 => 0,
            1 => 1,
            _ => seq[i - 1] + seq[i - 2],
        };
        seq.push(term);
    }
    seq
}

/// Cubes of the first `n` Fibonacci numbers.
///
/// Overflows earlier than [`fibonacci`]: fib(32) is the last term whose
/// cube fits in a `u64`, so `n` can be at most 33.
pub fn fibonacci_cubes(n: usize) -> Vec<u64> {
    fibonacci(n).into_iter().map(|x| x * x * x).collect()
}

/// Recursive factorial, `0! = 1`.
pub fn factorial_recursive(n: u32) -> u64 {
    if n <= 1 {
        1
    } else {
        n as u64 * factorial_recursive(n - 1)
    }
}

/// Iterative factorial, `0! = 1`.
pub fn factorial_iterative(n: u32) -> u64 {
    (1..=n as u64).product()
}

/// Estimate the area of a circle by Monte Carlo sampling.
///
/// Samples `trials` uniform points in the bounding square `[-r, r]²` and
/// scales the hit ratio by the square's area. A zero radius or zero trial
/// count yields 0. With `radius = 1` the estimate approximates π.
pub fn circle_area_monte_carlo<R: Rng + ?Sized>(radius: f64, trials: u32, rng: &mut R) -> f64 {
    if radius <= 0.0 || trials == 0 {
        return 0.0;
    }

    let mut hits = 0u32;
    for _ in 0..trials {
        let x = rng.gen_range(-radius..=radius);
        let y = rng.gen_range(-radius..=radius);
        if x * x + y * y <= radius * radius {
            hits += 1;
        }
    }

    let square_area = (2.0 * radius) * (2.0 * radius);
    hits as f64 / trials as f64 * square_area
}
