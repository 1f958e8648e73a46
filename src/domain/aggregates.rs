// Aggregate functions and jump detection over a series of readings
//
// Empty input yields `None` ("no value"), never an error or zero.

// `{:.2}` works on the exact binary value and breaks ties to even,
// so 1.115 (stored as 1.11499..) gives 1.11 and 0.125 gives 0.12
fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Arithmetic mean rounded to 2 decimal places
pub fn average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some(round2(sum / values.len() as f64))
}

pub fn min(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

pub fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

/// Median rounded to 2 decimal places; even lengths average the two middle values
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;

    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };
    Some(round2(median))
}

/// Flag abrupt changes between adjacent readings.
///
/// Emits the timestamp of the *later* reading whenever the absolute
/// difference to its predecessor strictly exceeds `threshold`. Mismatched
/// lengths are truncated to the shorter input.
pub fn detect_jumps<S: AsRef<str>>(values: &[f64], timestamps: &[S], threshold: f64) -> Vec<String> {
    let n = values.len().min(timestamps.len());
    (1..n)
        .filter(|&i| (values[i] - values[i - 1]).abs() > threshold)
        .map(|i| timestamps[i].as_ref().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_has_no_value() {
        assert_eq!(average(&[]), None);
        assert_eq!(min(&[]), None);
        assert_eq!(max(&[]), None);
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_average_rounds_to_two_decimals() {
        assert_eq!(average(&[10.0, 20.0, 30.0]), Some(20.0));
        assert_eq!(average(&[1.0, 2.0, 2.0]), Some(1.67));
        assert_eq!(average(&[0.0]), Some(0.0));
    }

    #[test]
    fn test_rounding_uses_exact_value_and_ties_to_even() {
        assert_eq!(average(&[1.115]), Some(1.11));
        assert_eq!(average(&[0.125]), Some(0.12));
        assert_eq!(average(&[0.375]), Some(0.38));
        assert_eq!(median(&[1.115, 0.0, 5.0]), Some(1.11));
        assert_eq!(median(&[0.0, 0.25]), Some(0.12));
    }

    #[test]
    fn test_min_max_are_raw() {
        let values = [21.456, -3.25, 18.0];
        assert_eq!(min(&values), Some(-3.25));
        assert_eq!(max(&values), Some(21.456));
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[30.0, 10.0, 20.0]), Some(20.0));
        assert_eq!(median(&[10.0, 20.0, 30.0, 40.0]), Some(25.0));
        assert_eq!(median(&[1.0, 2.0, 4.0]), Some(2.0));
        assert_eq!(median(&[1.0, 1.0, 2.0, 3.0]), Some(1.5));
    }

    #[test]
    fn test_median_between_min_and_max() {
        let samples: [&[f64]; 4] = [
            &[5.0],
            &[3.5, -1.25, 8.0],
            &[100.0, 100.0, 99.5, 101.75],
            &[45.0, 47.5, 60.0, 38.25, 41.0],
        ];
        for values in samples {
            let med = median(values).unwrap();
            assert!(min(values).unwrap() <= med);
            assert!(med <= max(values).unwrap());
        }
    }

    #[test]
    fn test_detect_jumps_reports_later_timestamp() {
        let jumps = detect_jumps(&[20.0, 28.0, 29.0], &["t1", "t2", "t3"], 7.0);
        assert_eq!(jumps, vec!["t2"]);
    }

    #[test]
    fn test_detect_jumps_threshold_is_exclusive() {
        assert!(detect_jumps(&[10.0, 17.0], &["a", "b"], 7.0).is_empty());
        assert_eq!(detect_jumps(&[10.0, 17.01], &["a", "b"], 7.0), vec!["b"]);
        // Drops count as well as rises
        assert_eq!(detect_jumps(&[30.0, 20.0], &["a", "b"], 7.0), vec!["b"]);
    }

    #[test]
    fn test_detect_jumps_short_or_mismatched_input() {
        let none: [&str; 0] = [];
        assert!(detect_jumps(&[], &none, 1.0).is_empty());
        assert!(detect_jumps(&[5.0], &["only"], 1.0).is_empty());
        assert!(detect_jumps(&[1.0, 50.0], &["a"], 1.0).is_empty());
        assert_eq!(detect_jumps(&[1.0, 50.0, 100.0], &["a", "b"], 1.0), vec!["b"]);
    }
}
