use fastatan::fastatan;
use std::env;
use std::time::Instant;

const ABS_TOL: f64 = 1e-15;
const DEFAULT_SAMPLES: usize = 1_000_000;

fn lcg_next(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *state
}

fn gen_range(count: usize, min: f64, max: f64, seed: u64) -> Vec<f64> {
    let mut state = seed;
    let span = max - min;
    (0..count)
        .map(|_| {
            let bits = lcg_next(&mut state) >> 11;
            min + (bits as f64) / ((1u64 << 53) as f64) * span
        })
        .collect()
}

fn sample_count() -> usize {
    env::var("FASTATAN_SAMPLES")
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(DEFAULT_SAMPLES)
}

#[test]
fn uniform_five_batch_has_no_misses() {
    let data = gen_range(sample_count(), -5.0, 5.0, 0x5eed_a7a1_0000_0001);
    let reference: Vec<f64> = data.iter().map(|x| x.atan()).collect();

    let start = Instant::now();
    let output = fastatan::atan_batch(&data);
    let runtime = start.elapsed();

    assert_eq!(output.len(), data.len());
    let missed: Vec<usize> = output
        .iter()
        .zip(&reference)
        .enumerate()
        .filter(|(_, (got, want))| (**got - **want).abs() > ABS_TOL)
        .map(|(i, _)| i)
        .collect();
    let max_err = output
        .iter()
        .zip(&reference)
        .map(|(got, want)| (got - want).abs())
        .fold(0.0f64, f64::max);

    println!(
        "{} samples, max abs err {max_err:e}, runtime {:.4} s",
        data.len(),
        runtime.as_secs_f64()
    );
    assert!(missed.is_empty(), "missed: {missed:?}");
}

#[test]
fn batch_is_index_aligned_with_scalar() {
    let data = gen_range(4096, -1e3, 1e3, 42);
    let batch = fastatan::atan_batch(&data);
    for (i, (&x, &y)) in data.iter().zip(&batch).enumerate() {
        assert_eq!(y.to_bits(), fastatan::atan(x).to_bits(), "index {i}");
    }
}

#[test]
fn kernel_is_shareable_across_threads() {
    let data = gen_range(8192, -5.0, 5.0, 7);
    let kernel = fastatan::AtanKernel::new();
    let serial = kernel.eval_batch(&data);

    let parts: Vec<Vec<f64>> = std::thread::scope(|s| {
        let handles: Vec<_> = data
            .chunks(1024)
            .map(|chunk| s.spawn(move || kernel.eval_batch(chunk)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    let joined: Vec<f64> = parts.into_iter().flatten().collect();
    assert_eq!(joined, serial);
}
