//! Shared statistics helpers used by the profiler and the time-series
//! engines. Quantiles use linear interpolation (type R-7) everywhere.

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mean = mean(values);
    let variance = values.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;

    variance.sqrt()
}

/// Median as the lower-middle element of the ascending sort (index n/2).
///
/// Even-length samples take the upper of the two middle candidates instead
/// of averaging them; downstream comparisons depend on this tie-break.
pub fn median_lower(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Some(sorted[sorted.len() / 2])
}

/// R-7 quantile over an already ascending-sorted slice.
///
/// h = (n-1)p; the result interpolates linearly between the values at
/// floor(h) and ceil(h).
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=1.0).contains(&p) {
        return None;
    }
    let h = (sorted.len() - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    let fraction = h - lo as f64;
    Some(sorted[lo] + fraction * (sorted[hi] - sorted[lo]))
}

pub fn quantile(values: &[f64], p: f64) -> Option<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    quantile_sorted(&sorted, p)
}

/// Bias-corrected sample skewness:
/// g = n * sum((x - mean)^3) / ((n-1)(n-2) * s^3), s = sample std.
///
/// Undefined for fewer than 3 values or a zero-variance sample.
pub fn sample_skewness(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 3 {
        return None;
    }

    let mean = mean(values);
    let mut sum_squared = 0.0;
    let mut sum_cubed = 0.0;
    for &v in values {
        let deviation = v - mean;
        sum_squared += deviation * deviation;
        sum_cubed += deviation * deviation * deviation;
    }

    let sample_variance = sum_squared / (n - 1) as f64;
    if sample_variance == 0.0 {
        return None;
    }
    let s = sample_variance.sqrt();

    Some(n as f64 * sum_cubed / (((n - 1) * (n - 2)) as f64 * s.powi(3)))
}

/// Pearson correlation of two equal-length samples.
///
/// Degenerate inputs (mismatched lengths, fewer than 2 points, zero
/// variance on either side) yield 0 instead of NaN.
pub fn pearson_correlation(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.len() != ys.len() || xs.len() < 2 {
        return 0.0;
    }

    let mean_x = mean(xs);
    let mean_y = mean(ys);

    let mut sxx = 0.0;
    let mut syy = 0.0;
    let mut sxy = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }

    if sxx == 0.0 || syy == 0.0 {
        return 0.0;
    }

    (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_lower_middle() {
        // Even length: index 4/2 = 2 of the sort, not the average of 2 and 3.
        assert_eq!(median_lower(&[1.0, 2.0, 3.0, 4.0]), Some(3.0));
        assert_eq!(median_lower(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median_lower(&[]), None);
    }

    #[test]
    fn test_quantile_interpolation() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        // h = 5 * 0.25 = 1.25 -> 2 + 0.25 * (3 - 2)
        assert_eq!(quantile_sorted(&sorted, 0.25), Some(2.25));
        // h = 5 * 0.75 = 3.75 -> 4 + 0.75 * (5 - 4)
        assert_eq!(quantile_sorted(&sorted, 0.75), Some(4.75));
        assert_eq!(quantile_sorted(&sorted, 0.0), Some(1.0));
        assert_eq!(quantile_sorted(&sorted, 1.0), Some(100.0));
        assert_eq!(quantile(&[4.0, 1.0, 3.0, 2.0], 0.5), Some(2.5));
    }

    #[test]
    fn test_sample_skewness_known_value() {
        // n=5, mean=4, sum of cubed deviations = 180, sample std = 3.5355.
        // g = 5 * 180 / (4 * 3 * 3.5355^3) = 1.6971
        let g = sample_skewness(&[1.0, 2.0, 3.0, 4.0, 10.0]).unwrap();
        assert!((g - 1.6971).abs() < 1e-3);

        // Symmetric sample has zero skewness.
        let g = sample_skewness(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert!(g.abs() < 1e-12);

        assert_eq!(sample_skewness(&[1.0, 2.0]), None);
        assert_eq!(sample_skewness(&[5.0, 5.0, 5.0, 5.0]), None);
    }

    #[test]
    fn test_population_std_dev() {
        // Deviations +-1 around mean 2 -> variance 2/3... use a clean case:
        // [2, 4]: mean 3, variance (1 + 1) / 2 = 1.
        assert_eq!(population_std_dev(&[2.0, 4.0]), 1.0);
        assert_eq!(population_std_dev(&[]), 0.0);
    }

    #[test]
    fn test_pearson_degenerate_and_perfect() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let doubled: Vec<f64> = xs.iter().map(|x| 2.0 * x + 1.0).collect();
        assert!((pearson_correlation(&xs, &doubled) - 1.0).abs() < 1e-12);

        let negated: Vec<f64> = xs.iter().map(|x| -x).collect();
        assert!((pearson_correlation(&xs, &negated) + 1.0).abs() < 1e-12);

        assert_eq!(pearson_correlation(&xs, &[1.0, 1.0, 1.0, 1.0]), 0.0);
        assert_eq!(pearson_correlation(&[1.0], &[2.0]), 0.0);
        assert_eq!(pearson_correlation(&xs, &[1.0, 2.0]), 0.0);
    }
}
