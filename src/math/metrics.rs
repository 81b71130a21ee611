//! Held-out evaluation metrics.

#[must_use]
pub fn mean_absolute_error(actual: &[f64], predicted: &[f64]) -> f64 {
    assert_eq!(actual.len(), predicted.len());
    actual
        .iter()
        .zip(predicted)
        .map(|(actual, predicted)| (actual - predicted).abs())
        .sum::<f64>()
        / actual.len() as f64
}

#[must_use]
pub fn root_mean_squared_error(actual: &[f64], predicted: &[f64]) -> f64 {
    assert_eq!(actual.len(), predicted.len());
    (actual
        .iter()
        .zip(predicted)
        .map(|(actual, predicted)| (actual - predicted) * (actual - predicted))
        .sum::<f64>()
        / actual.len() as f64)
        .sqrt()
}

/// Coefficient of determination. Undefined (NaN) for a constant actual series.
#[must_use]
pub fn r_squared(actual: &[f64], predicted: &[f64]) -> f64 {
    assert_eq!(actual.len(), predicted.len());
    let mean = actual.iter().sum::<f64>() / actual.len() as f64;
    let residual: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(actual, predicted)| (actual - predicted) * (actual - predicted))
        .sum();
    let total: f64 = actual.iter().map(|actual| (actual - mean) * (actual - mean)).sum();
    1.0 - residual / total
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACTUAL: [f64; 3] = [1.0, 2.0, 3.0];
    const PREDICTED: [f64; 3] = [2.0, 2.0, 2.0];

    #[test]
    fn mean_absolute_error_ok() {
        assert!((mean_absolute_error(&ACTUAL, &PREDICTED) - 2.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn root_mean_squared_error_ok() {
        let expected = (2.0_f64 / 3.0).sqrt();
        assert!((root_mean_squared_error(&ACTUAL, &PREDICTED) - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn r_squared_ok() {
        assert!(r_squared(&ACTUAL, &PREDICTED).abs() < f64::EPSILON);
        assert!((r_squared(&ACTUAL, &ACTUAL) - 1.0).abs() < f64::EPSILON);
    }
}
