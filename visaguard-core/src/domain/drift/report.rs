// visaguard-core/src/domain/drift/report.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    Numerical,
    Categorical,
}

/// Drift verdict for a single feature column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureDrift {
    pub kind: FeatureKind,
    /// KS statistic for numerical features, PSI for categorical ones.
    pub statistic: f64,
    /// The cutoff the statistic was compared against.
    pub threshold: f64,
    pub drifted: bool,
}

/// Dataset-level drift summary, serialized to YAML once per validation run
/// for audit. Typed at the analyzer boundary so the orchestrator never digs
/// through loosely-shaped nested maps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DriftReport {
    pub n_features: usize,
    pub n_drifted_features: usize,
    pub dataset_drift: bool,
    /// Share of drifted features; `dataset_drift` holds iff this reaches the
    /// configured share threshold.
    pub drift_share: f64,
    pub features: BTreeMap<String, FeatureDrift>,
}

impl DriftReport {
    /// Aggregates per-feature verdicts into the dataset-level summary.
    pub fn from_features(
        features: BTreeMap<String, FeatureDrift>,
        share_threshold: f64,
    ) -> Self {
        let n_features = features.len();
        let n_drifted_features = features.values().filter(|f| f.drifted).count();
        let drift_share = if n_features == 0 {
            0.0
        } else {
            n_drifted_features as f64 / n_features as f64
        };

        Self {
            n_features,
            n_drifted_features,
            dataset_drift: n_features > 0 && drift_share >= share_threshold,
            drift_share,
            features,
        }
    }
}
