// visaguard-core/src/domain/drift/statistics.rs
//
// Two-sample distribution comparisons backing the drift analyzer:
// Kolmogorov-Smirnov for numerical features, Population Stability Index
// for categorical ones.

use std::collections::BTreeMap;

/// Proportion floor used in PSI so empty buckets do not blow up the log ratio.
const PSI_EPSILON: f64 = 1e-4;

/// Two-sample Kolmogorov-Smirnov statistic: the supremum distance between the
/// empirical CDFs of `reference` and `current`.
///
/// Returns 0.0 when either sample is empty — no evidence, no drift.
pub fn ks_statistic(reference: &[f64], current: &[f64]) -> f64 {
    if reference.is_empty() || current.is_empty() {
        return 0.0;
    }

    let mut a = reference.to_vec();
    let mut b = current.to_vec();
    a.sort_by(|x, y| x.total_cmp(y));
    b.sort_by(|x, y| x.total_cmp(y));

    let (n, m) = (a.len() as f64, b.len() as f64);
    let (mut i, mut j) = (0usize, 0usize);
    let mut max_distance: f64 = 0.0;

    // Merge walk over both sorted samples, tracking the CDF gap at each step.
    while i < a.len() && j < b.len() {
        let x = a[i].min(b[j]);
        while i < a.len() && a[i] <= x {
            i += 1;
        }
        while j < b.len() && b[j] <= x {
            j += 1;
        }
        let gap = (i as f64 / n - j as f64 / m).abs();
        max_distance = max_distance.max(gap);
    }

    max_distance
}

/// Asymptotic KS rejection cutoff at significance `alpha` for sample sizes
/// `n` and `m`: c(alpha) * sqrt((n + m) / (n * m)), c(alpha) = sqrt(-ln(alpha / 2) / 2).
pub fn ks_critical_value(n: usize, m: usize, alpha: f64) -> f64 {
    if n == 0 || m == 0 {
        return f64::INFINITY;
    }
    let c = (-(alpha / 2.0).ln() / 2.0).sqrt();
    c * (((n + m) as f64) / ((n * m) as f64)).sqrt()
}

/// Population Stability Index between two categorical distributions, summed
/// over the union of observed categories. Zero-count buckets are floored at
/// a small epsilon proportion.
///
/// Returns 0.0 when either side has no observations.
pub fn population_stability_index(
    reference: &BTreeMap<String, usize>,
    current: &BTreeMap<String, usize>,
) -> f64 {
    let ref_total: usize = reference.values().sum();
    let cur_total: usize = current.values().sum();
    if ref_total == 0 || cur_total == 0 {
        return 0.0;
    }

    let categories: std::collections::BTreeSet<&String> =
        reference.keys().chain(current.keys()).collect();

    categories
        .into_iter()
        .map(|cat| {
            let p = (reference.get(cat).copied().unwrap_or(0) as f64 / ref_total as f64)
                .max(PSI_EPSILON);
            let q = (current.get(cat).copied().unwrap_or(0) as f64 / cur_total as f64)
                .max(PSI_EPSILON);
            (p - q) * (p / q).ln()
        })
        .sum()
}
