//! Leibniz-series workload kernel.
//!
//! Computes three running accumulators over a fixed number of iterations.
//! The loop is deliberately CPU-bound and allocation-free; the cost scales
//! linearly with `iterations`, which is what the benchmark measures.

/// The accumulator triple produced by one run of the series.
///
/// `sum` and `custom` accumulate the *running* partial sum of the series,
/// before the final scaling by 4 is applied to `pi`. The asymmetry is part
/// of the workload contract and must not be normalized away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiSeries {
    pub pi: f64,
    pub sum: f64,
    pub custom: f64,
}

impl PiSeries {
    /// Render the triple as a `pi;sum;custom` line.
    ///
    /// Uses `f64`'s default formatting (shortest decimal that round-trips),
    /// no padding, no trailing separator.
    pub fn encode(&self) -> String {
        format!("{};{};{}", self.pi, self.sum, self.custom)
    }
}

/// Run the series for `iterations` steps.
///
/// Pure function of its input; the operation order inside the loop is fixed
/// so results are bit-identical across calls and across builds.
pub fn compute(iterations: u64) -> PiSeries {
    let mut pi = 0.0;
    let mut denominator = 1.0;
    let mut sum = 0.0;
    let mut custom = 0.0;

    for x in 0..iterations {
        if x % 2 == 0 {
            pi += 1.0 / denominator;
        } else {
            pi -= 1.0 / denominator;
        }
        denominator += 2.0;

        sum += pi;
        match x % 3 {
            0 => custom += pi,
            1 => custom -= pi,
            _ => custom /= 2.0,
        }
    }

    PiSeries {
        pi: pi * 4.0,
        sum,
        custom,
    }
}
