//! Result sequence of a Monte Carlo run.
//!
//! One first-passage time per completed trial, in trial-execution order,
//! immutable once the run completes.

/// Ordered first-passage times of one run.
///
/// Length equals the configured trial count; ordering is trial-execution
/// order. The sequence is immutable once produced.
///
/// # Examples
///
/// ```rust
/// use passage_mc::mc::PassageTimes;
///
/// let times = PassageTimes::from(vec![0.5, 1.0, 1.5]);
/// assert_eq!(times.len(), 3);
/// assert!((times.mean() - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PassageTimes {
    times: Vec<f64>,
}

impl PassageTimes {
    /// Returns the number of recorded trials.
    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the run recorded no trials.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Returns the times as a slice, in trial-execution order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.times
    }

    /// Sample mean; `NaN` for an empty run.
    pub fn mean(&self) -> f64 {
        if self.times.is_empty() {
            return f64::NAN;
        }
        self.times.iter().sum::<f64>() / self.times.len() as f64
    }

    /// Standard error of the mean (sample variance with the `n - 1`
    /// divisor); `NaN` for fewer than two trials.
    pub fn std_error(&self) -> f64 {
        let n = self.times.len();
        if n < 2 {
            return f64::NAN;
        }
        let mean = self.mean();
        let variance = self
            .times
            .iter()
            .map(|&t| (t - mean) * (t - mean))
            .sum::<f64>()
            / (n - 1) as f64;
        (variance / n as f64).sqrt()
    }

    /// Shortest recorded first-passage time.
    pub fn min(&self) -> Option<f64> {
        self.times.iter().copied().reduce(f64::min)
    }

    /// Longest recorded first-passage time.
    pub fn max(&self) -> Option<f64> {
        self.times.iter().copied().reduce(f64::max)
    }

    /// Aggregates the run into a summary record.
    pub fn summary(&self) -> PassageSummary {
        PassageSummary {
            trials: self.len(),
            mean: self.mean(),
            std_error: self.std_error(),
            min: self.min().unwrap_or(f64::NAN),
            max: self.max().unwrap_or(f64::NAN),
        }
    }

    /// Consumes the sequence, returning the underlying vector.
    #[inline]
    pub fn into_inner(self) -> Vec<f64> {
        self.times
    }
}

impl From<Vec<f64>> for PassageTimes {
    fn from(times: Vec<f64>) -> Self {
        Self { times }
    }
}

impl AsRef<[f64]> for PassageTimes {
    fn as_ref(&self) -> &[f64] {
        &self.times
    }
}

/// Summary statistics of one run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassageSummary {
    /// Number of completed trials.
    pub trials: usize,
    /// Sample mean first-passage time.
    pub mean: f64,
    /// Standard error of the mean.
    pub std_error: f64,
    /// Shortest recorded time (`NaN` for an empty run).
    pub min: f64,
    /// Longest recorded time (`NaN` for an empty run).
    pub max: f64,
}
