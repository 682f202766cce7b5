//! CSV loader for benchmark timing results
//!
//! Input files have a `matrix_size` column and a `runtime_ms` column. The
//! runtime field is either a number or the literal `ERROR` marker written by
//! the benchmark harness when a run failed; error rows carry no timing
//! information and are dropped before any statistics are computed.

use std::path::Path;

use serde::Deserialize;

use super::{ResultsError, ResultsResult};

/// Marker value the benchmark harness writes for a failed run
pub const ERROR_SENTINEL: &str = "ERROR";

/// One successful benchmark run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkRecord {
    /// Dimension N of the square matrices multiplied in the run
    pub matrix_size: u32,
    /// Wall-clock runtime of the run in milliseconds
    pub runtime_ms: f64,
}

/// Raw CSV row; runtime stays a string until the sentinel check
#[derive(Debug, Deserialize)]
struct RawRow {
    matrix_size: u32,
    runtime_ms: String,
}

/// Load benchmark records from a CSV file.
///
/// Rows whose runtime field equals [`ERROR_SENTINEL`] are dropped. Any other
/// non-numeric runtime is a fatal parse error rather than a silent zero. If
/// nothing survives filtering the file is unusable and the caller gets
/// [`ResultsError::NoValidData`].
pub fn load_results(path: &Path) -> ResultsResult<Vec<BenchmarkRecord>> {
    if !path.exists() {
        return Err(ResultsError::MissingFile(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path).map_err(|source| ResultsError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    let mut records = Vec::new();
    let mut error_rows = 0usize;

    for row in reader.deserialize::<RawRow>() {
        let row = row.map_err(|source| ResultsError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

        let field = row.runtime_ms.trim();
        if field == ERROR_SENTINEL {
            error_rows += 1;
            continue;
        }

        let runtime_ms = field
            .parse::<f64>()
            .map_err(|_| ResultsError::MalformedRuntime {
                path: path.to_path_buf(),
                value: row.runtime_ms.clone(),
            })?;

        records.push(BenchmarkRecord {
            matrix_size: row.matrix_size,
            runtime_ms,
        });
    }

    if error_rows > 0 {
        log::debug!(
            "{}: dropped {} error row(s), kept {} record(s)",
            path.display(),
            error_rows,
            records.len()
        );
    }

    if records.is_empty() {
        return Err(ResultsError::NoValidData(path.to_path_buf()));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_and_filters_error_rows() {
        let file = write_csv("matrix_size,runtime_ms\n64,ERROR\n64,10.0\n128,20.0\n");
        let records = load_results(file.path()).unwrap();
        assert_eq!(
            records,
            vec![
                BenchmarkRecord {
                    matrix_size: 64,
                    runtime_ms: 10.0
                },
                BenchmarkRecord {
                    matrix_size: 128,
                    runtime_ms: 20.0
                },
            ]
        );
    }

    #[test]
    fn missing_file_is_reported() {
        let err = load_results(Path::new("results/does_not_exist.csv")).unwrap_err();
        assert!(matches!(err, ResultsError::MissingFile(_)));
        assert!(err.needs_benchmark_run());
    }

    #[test]
    fn all_error_rows_yield_no_valid_data() {
        let file = write_csv("matrix_size,runtime_ms\n64,ERROR\n128,ERROR\n");
        let err = load_results(file.path()).unwrap_err();
        assert!(matches!(err, ResultsError::NoValidData(_)));
        assert!(err.needs_benchmark_run());
    }

    #[test]
    fn empty_file_yields_no_valid_data() {
        let file = write_csv("matrix_size,runtime_ms\n");
        let err = load_results(file.path()).unwrap_err();
        assert!(matches!(err, ResultsError::NoValidData(_)));
    }

    #[test]
    fn malformed_runtime_is_fatal() {
        let file = write_csv("matrix_size,runtime_ms\n64,fast\n");
        let err = load_results(file.path()).unwrap_err();
        match err {
            ResultsError::MalformedRuntime { value, .. } => assert_eq!(value, "fast"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn whitespace_around_runtime_is_tolerated() {
        let file = write_csv("matrix_size,runtime_ms\n64, 10.5\n");
        let records = load_results(file.path()).unwrap();
        assert_eq!(records[0].runtime_ms, 10.5);
    }
}
