//! Per-matrix-size aggregation of benchmark records

use std::collections::BTreeMap;

use crate::results::BenchmarkRecord;

/// Aggregated timing statistics for one matrix size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeStats {
    pub matrix_size: u32,
    /// Number of successful runs in the group
    pub samples: usize,
    pub mean_ms: f64,
    /// Sample standard deviation; 0.0 for a single-sample group so error
    /// bars always have a finite extent
    pub std_dev_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

/// Group records by matrix size and compute per-group statistics.
///
/// Grouping is exact integer equality; output is in ascending size order so
/// chart series render left to right without sorting downstream.
pub fn aggregate(records: &[BenchmarkRecord]) -> Vec<SizeStats> {
    let mut groups: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.matrix_size)
            .or_default()
            .push(record.runtime_ms);
    }

    groups
        .into_iter()
        .map(|(matrix_size, runtimes)| {
            let samples = runtimes.len();
            let mean_ms = runtimes.iter().sum::<f64>() / samples as f64;
            let std_dev_ms = sample_std_dev(&runtimes, mean_ms);
            let min_ms = runtimes.iter().copied().fold(f64::INFINITY, f64::min);
            let max_ms = runtimes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            SizeStats {
                matrix_size,
                samples,
                mean_ms,
                std_dev_ms,
                min_ms,
                max_ms,
            }
        })
        .collect()
}

/// Sample standard deviation (ddof = 1), 0.0 when fewer than two samples
fn sample_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let variance = values
        .iter()
        .map(|v| {
            let d = v - mean;
            d * d
        })
        .sum::<f64>()
        / (values.len() - 1) as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(matrix_size: u32, runtime_ms: f64) -> BenchmarkRecord {
        BenchmarkRecord {
            matrix_size,
            runtime_ms,
        }
    }

    #[test]
    fn groups_cover_exactly_the_distinct_sizes() {
        let records = vec![
            record(256, 4.0),
            record(64, 1.0),
            record(128, 2.0),
            record(64, 1.5),
        ];
        let stats = aggregate(&records);
        let sizes: Vec<u32> = stats.iter().map(|s| s.matrix_size).collect();
        assert_eq!(sizes, vec![64, 128, 256]);
    }

    #[test]
    fn groups_are_in_ascending_size_order() {
        let records = vec![record(1024, 8.0), record(64, 1.0), record(512, 4.0)];
        let stats = aggregate(&records);
        assert!(stats.windows(2).all(|w| w[0].matrix_size < w[1].matrix_size));
    }

    #[test]
    fn mean_of_identical_values_is_that_value() {
        let records = vec![record(64, 7.25), record(64, 7.25), record(64, 7.25)];
        let stats = aggregate(&records);
        assert_eq!(stats[0].mean_ms, 7.25);
        assert_eq!(stats[0].std_dev_ms, 0.0);
        assert_eq!(stats[0].samples, 3);
    }

    #[test]
    fn single_sample_group_has_zero_std_dev() {
        let stats = aggregate(&[record(128, 20.0)]);
        assert_eq!(stats[0].mean_ms, 20.0);
        assert_eq!(stats[0].std_dev_ms, 0.0);
        assert_eq!(stats[0].min_ms, 20.0);
        assert_eq!(stats[0].max_ms, 20.0);
    }

    #[test]
    fn sample_std_dev_matches_hand_computation() {
        // values 1, 2, 3: mean 2, sample variance ((1)+(0)+(1))/2 = 1
        let stats = aggregate(&[record(64, 1.0), record(64, 2.0), record(64, 3.0)]);
        assert!((stats[0].std_dev_ms - 1.0).abs() < 1e-12);
        assert_eq!(stats[0].min_ms, 1.0);
        assert_eq!(stats[0].max_ms, 3.0);
    }

    #[test]
    fn filtered_then_aggregated_example() {
        // the (64, ERROR) row never reaches this layer; what remains is
        // (64, 10.0) and (128, 20.0)
        let stats = aggregate(&[record(64, 10.0), record(128, 20.0)]);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].matrix_size, 64);
        assert_eq!(stats[0].mean_ms, 10.0);
        assert_eq!(stats[0].std_dev_ms, 0.0);
        assert_eq!(stats[1].matrix_size, 128);
        assert_eq!(stats[1].mean_ms, 20.0);
    }
}
