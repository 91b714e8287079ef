mod types;

pub use types::{StatsRow, Summary};

use crate::error::{LabelError, Result};
use crate::models::Sample;

/// Min, max and population standard deviation of the sample values.
///
/// Fails with `InsufficientData` on an empty slice.
pub fn summarize(samples: &[Sample]) -> Result<Summary> {
    if samples.is_empty() {
        return Err(LabelError::empty_input());
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for sample in samples {
        min = min.min(sample.value);
        max = max.max(sample.value);
    }

    // Work on values scaled into [-1, 1] so sums near f64::MAX cannot overflow.
    let scale = min.abs().max(max.abs());
    if scale == 0.0 {
        return Ok(Summary {
            min,
            max,
            std_dev: 0.0,
        });
    }

    let mut mean = 0.0;
    for (i, sample) in samples.iter().enumerate() {
        mean += (sample.value / scale - mean) / (i + 1) as f64;
    }

    let variance = samples
        .iter()
        .map(|sample| (sample.value / scale - mean).powi(2))
        .sum::<f64>()
        / samples.len() as f64;

    Ok(Summary {
        min,
        max,
        std_dev: variance.sqrt() * scale,
    })
}

/// Display name of a series file: the file name without a trailing `.csv`
/// (any case).
pub fn source_name(file_name: &str) -> &str {
    let len = file_name.len();
    if len >= 4
        && file_name.is_char_boundary(len - 4)
        && file_name[len - 4..].eq_ignore_ascii_case(".csv")
    {
        &file_name[..len - 4]
    } else {
        file_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{TimeZone, Utc};

    fn samples(values: &[f64]) -> Vec<Sample> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Sample::new(Utc.timestamp_opt(i as i64, 0).unwrap(), *v))
            .collect()
    }

    #[test]
    fn one_to_four() {
        let summary = summarize(&samples(&[1.0, 2.0, 3.0, 4.0])).unwrap();
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 4.0);
        assert_relative_eq!(summary.std_dev, 1.25f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn single_value_has_zero_spread() {
        let summary = summarize(&samples(&[-3.5])).unwrap();
        assert_eq!(summary.min, -3.5);
        assert_eq!(summary.max, -3.5);
        assert_eq!(summary.std_dev, 0.0);
    }

    #[test]
    fn empty_input_is_insufficient() {
        assert_eq!(
            summarize(&[]),
            Err(LabelError::InsufficientData {
                expected: 1,
                actual: 0
            })
        );
    }

    #[test]
    fn large_finite_values_do_not_overflow() {
        let summary = summarize(&samples(&[1.7e308, 1.7e308])).unwrap();
        assert_eq!(summary.min, 1.7e308);
        assert_eq!(summary.max, 1.7e308);
        assert_eq!(summary.std_dev, 0.0);

        let spread = summarize(&samples(&[-1.7e308, 1.7e308])).unwrap();
        assert!(spread.std_dev.is_finite());
        assert_relative_eq!(spread.std_dev, 1.7e308, max_relative = 1e-12);
    }

    #[test]
    fn all_zero_values() {
        let summary = summarize(&samples(&[0.0, 0.0, 0.0])).unwrap();
        assert_eq!(summary.std_dev, 0.0);
    }

    #[test]
    fn row_is_rounded_to_precision() {
        let row = StatsRow {
            name: "PT-101".into(),
            summary: Summary {
                min: 1.0,
                max: 4.0,
                std_dev: 1.25f64.sqrt(),
            },
        };
        assert_eq!(row.format(2), "PT-101\t1.00\t4.00\t1.12");
    }

    #[test]
    fn source_name_strips_csv_extension() {
        assert_eq!(source_name("pump.csv"), "pump");
        assert_eq!(source_name("PUMP.CSV"), "PUMP");
        assert_eq!(source_name("pump.txt"), "pump.txt");
        assert_eq!(source_name("csv"), "csv");
    }
}
