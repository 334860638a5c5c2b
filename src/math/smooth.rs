//! One-dimensional Gaussian smoothing.
//!
//! Matches the usual image-processing convention: the kernel is truncated at
//! `truncate × sigma` samples and the signal is extended by mirror reflection
//! including the edge sample (`d c b a | a b c d | d c b a`).

/// Kernel half-width in units of sigma.
pub const DEFAULT_TRUNCATE: f64 = 4.0;

/// Smooth `input` with a Gaussian of standard deviation `sigma` (in samples).
///
/// A non-positive or non-finite `sigma` returns the input unchanged.
pub fn gaussian_filter1d(input: &[f64], sigma: f64, truncate: f64) -> Vec<f64> {
    if input.is_empty() || !(sigma.is_finite() && sigma > 0.0) {
        return input.to_vec();
    }

    let kernel = gaussian_kernel(sigma, truncate);
    let radius = (kernel.len() / 2) as isize;
    let n = input.len() as isize;

    (0..n)
        .map(|i| {
            kernel
                .iter()
                .enumerate()
                .map(|(k, w)| w * input[reflect(i + k as isize - radius, n)])
                .sum()
        })
        .collect()
}

fn gaussian_kernel(sigma: f64, truncate: f64) -> Vec<f64> {
    let radius = (truncate * sigma + 0.5) as isize;
    let mut kernel: Vec<f64> = (-radius..=radius)
        .map(|x| (-0.5 * (x as f64 / sigma).powi(2)).exp())
        .collect();
    let total: f64 = kernel.iter().sum();
    for w in &mut kernel {
        *w /= total;
    }
    kernel
}

fn reflect(idx: isize, n: isize) -> usize {
    let m = idx.rem_euclid(2 * n);
    (if m < n { m } else { 2 * n - 1 - m }) as usize
}
