//! Summary statistics over trial samples.

use serde::{Deserialize, Serialize};

use crate::core::{MedianMethod, Result, SimError};

/// Arithmetic mean. Needs at least one sample.
pub fn mean(samples: &[f64]) -> Result<f64> {
    if samples.is_empty() {
        return Err(SimError::InsufficientSamples { got: 0 });
    }
    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Middle value, or the mean of the two middle values.
pub fn median(samples: &[f64]) -> Result<f64> {
    if samples.is_empty() {
        return Err(SimError::InsufficientSamples { got: 0 });
    }
    let sorted = sorted(samples);
    let n = sorted.len();
    if n % 2 == 1 {
        Ok(sorted[n / 2])
    } else {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

/// Median of grouped data, each value taken as the midpoint of a class
/// of width 1.
///
/// Interpolates inside the median class, so repeated integer results
/// (turn numbers) give a finer estimate than the plain median.
pub fn median_grouped(samples: &[f64]) -> Result<f64> {
    if samples.is_empty() {
        return Err(SimError::InsufficientSamples { got: 0 });
    }
    let sorted = sorted(samples);
    let n = sorted.len();
    let x = sorted[n / 2];

    // Cumulative frequency below the median class, and its frequency.
    let below = sorted.partition_point(|v| *v < x);
    let within = sorted[below..].partition_point(|v| *v <= x);

    let lower = x - 0.5;
    Ok(lower + (n as f64 / 2.0 - below as f64) / within as f64)
}

/// Sample standard deviation (n - 1 denominator). Needs at least two
/// samples.
pub fn stdev(samples: &[f64]) -> Result<f64> {
    if samples.len() < 2 {
        return Err(SimError::InsufficientSamples { got: samples.len() });
    }
    let m = mean(samples)?;
    let ss: f64 = samples.iter().map(|x| (x - m) * (x - m)).sum();
    Ok((ss / (samples.len() - 1) as f64).sqrt())
}

fn sorted(samples: &[f64]) -> Vec<f64> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Distribution summary for one parameter combination.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub median: f64,
    pub mean: f64,
    pub stdev: f64,
}

impl Summary {
    /// Column names, in table order.
    pub const NAMES: [&'static str; 3] = ["median", "mean", "stdev"];

    /// Summarize samples. Fails with fewer than two samples.
    pub fn from_samples(samples: &[f64], method: MedianMethod) -> Result<Self> {
        let stdev = stdev(samples)?;
        let median = match method {
            MedianMethod::Middle => median(samples)?,
            MedianMethod::Grouped => median_grouped(samples)?,
        };
        Ok(Self {
            median,
            mean: mean(samples)?,
            stdev,
        })
    }

    /// Values in the order of `NAMES`.
    #[must_use]
    pub fn values(&self) -> [f64; 3] {
        [self.median, self.mean, self.stdev]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 6.0]), Ok(3.0));
        assert!(mean(&[]).is_err());
    }

    #[test]
    fn test_median() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Ok(2.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Ok(2.5));
        assert_eq!(median(&[5.0]), Ok(5.0));
        assert!(median(&[]).is_err());
    }

    #[test]
    fn test_median_grouped() {
        assert!(close(median_grouped(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5));
        assert!(close(median_grouped(&[1.0, 3.0, 3.0, 5.0]).unwrap(), 3.0));
        assert!(close(median_grouped(&[7.0; 5]).unwrap(), 7.0));
        // 2.5 + (3.5 - 3) / 3
        assert!(close(
            median_grouped(&[1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0]).unwrap(),
            2.5 + 0.5 / 3.0
        ));
        assert!(median_grouped(&[]).is_err());
    }

    #[test]
    fn test_stdev() {
        // Sample variance of 2,4,4,4,5,5,7,9 is 32/7
        let samples = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!(close(stdev(&samples).unwrap(), (32.0f64 / 7.0).sqrt()));
        assert_eq!(stdev(&[7.0, 7.0]), Ok(0.0));
    }

    #[test]
    fn test_stdev_needs_two_samples() {
        assert_eq!(stdev(&[1.0]), Err(SimError::InsufficientSamples { got: 1 }));
        assert_eq!(stdev(&[]), Err(SimError::InsufficientSamples { got: 0 }));
    }

    #[test]
    fn test_summary_constant_samples() {
        let summary = Summary::from_samples(&[7.0; 5], MedianMethod::Grouped).unwrap();
        assert_eq!(summary.median, 7.0);
        assert_eq!(summary.mean, 7.0);
        assert_eq!(summary.stdev, 0.0);
    }

    #[test]
    fn test_summary_median_methods() {
        let samples = [1.0, 3.0, 3.0, 3.0, 4.0, 6.0];
        let middle = Summary::from_samples(&samples, MedianMethod::Middle).unwrap();
        let grouped = Summary::from_samples(&samples, MedianMethod::Grouped).unwrap();

        assert_eq!(middle.median, 3.0);
        // Median class [2.5, 3.5), one sample below it, three in it
        assert!(close(grouped.median, 2.5 + (3.0 - 1.0) / 3.0));
        assert_eq!(middle.mean, grouped.mean);
    }

    #[test]
    fn test_summary_single_sample_fails() {
        assert_eq!(
            Summary::from_samples(&[3.0], MedianMethod::Middle),
            Err(SimError::InsufficientSamples { got: 1 })
        );
    }

    #[test]
    fn test_summary_values_order() {
        let summary = Summary { median: 1.0, mean: 2.0, stdev: 3.0 };
        assert_eq!(summary.values(), [1.0, 2.0, 3.0]);
        assert_eq!(Summary::NAMES, ["median", "mean", "stdev"]);
    }
}
