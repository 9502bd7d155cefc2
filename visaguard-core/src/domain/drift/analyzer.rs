// visaguard-core/src/domain/drift/analyzer.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::dataset::TabularDataset;
use crate::domain::drift::report::{DriftReport, FeatureDrift, FeatureKind};
use crate::domain::drift::statistics::{
    ks_critical_value, ks_statistic, population_stability_index,
};
use crate::domain::error::DomainError;
use crate::domain::ports::DriftAnalyzer;
use crate::domain::schema::SchemaDescriptor;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DriftSettings {
    /// Significance level for the numerical KS test.
    #[serde(default = "default_ks_alpha")]
    pub ks_alpha: f64,
    /// PSI cutoff above which a categorical feature counts as drifted.
    #[serde(default = "default_psi_threshold")]
    pub psi_threshold: f64,
    /// Share of drifted features at which the whole dataset is flagged.
    #[serde(default = "default_drift_share")]
    pub drift_share_threshold: f64,
}

fn default_ks_alpha() -> f64 {
    0.05
}
fn default_psi_threshold() -> f64 {
    0.2
}
fn default_drift_share() -> f64 {
    0.5
}

impl Default for DriftSettings {
    fn default() -> Self {
        Self {
            ks_alpha: default_ks_alpha(),
            psi_threshold: default_psi_threshold(),
            drift_share_threshold: default_drift_share(),
        }
    }
}

/// Default `DriftAnalyzer`: KS test per numerical column, PSI per categorical
/// column, dataset flag from the drifted-feature share.
#[derive(Debug, Clone, Default)]
pub struct StatisticalDriftAnalyzer {
    settings: DriftSettings,
}

impl StatisticalDriftAnalyzer {
    pub fn new(settings: DriftSettings) -> Self {
        Self { settings }
    }

    fn numerical_feature(
        &self,
        name: &str,
        reference: &TabularDataset,
        current: &TabularDataset,
    ) -> FeatureDrift {
        let ref_values = reference
            .column(name)
            .map(|c| c.numeric_values())
            .unwrap_or_default();
        let cur_values = current
            .column(name)
            .map(|c| c.numeric_values())
            .unwrap_or_default();

        let statistic = ks_statistic(&ref_values, &cur_values);
        let threshold = ks_critical_value(ref_values.len(), cur_values.len(), self.settings.ks_alpha);

        FeatureDrift {
            kind: FeatureKind::Numerical,
            statistic,
            // An empty side yields an infinite cutoff; report it as the
            // unreachable 1.0 bound so the YAML stays finite.
            threshold: if threshold.is_finite() { threshold } else { 1.0 },
            drifted: statistic > threshold,
        }
    }

    fn categorical_feature(
        &self,
        name: &str,
        reference: &TabularDataset,
        current: &TabularDataset,
    ) -> FeatureDrift {
        let ref_counts = reference
            .column(name)
            .map(|c| c.category_counts())
            .unwrap_or_default();
        let cur_counts = current
            .column(name)
            .map(|c| c.category_counts())
            .unwrap_or_default();

        let statistic = population_stability_index(&ref_counts, &cur_counts);

        FeatureDrift {
            kind: FeatureKind::Categorical,
            statistic,
            threshold: self.settings.psi_threshold,
            drifted: statistic > self.settings.psi_threshold,
        }
    }
}

impl DriftAnalyzer for StatisticalDriftAnalyzer {
    fn analyze(
        &self,
        schema: &SchemaDescriptor,
        reference: &TabularDataset,
        current: &TabularDataset,
    ) -> Result<DriftReport, DomainError> {
        let mut features = BTreeMap::new();

        for name in schema.numerical_columns() {
            let verdict = self.numerical_feature(name, reference, current);
            debug!(
                feature = %name,
                statistic = verdict.statistic,
                drifted = verdict.drifted,
                "numerical drift check"
            );
            features.insert(name.clone(), verdict);
        }

        for name in schema.categorical_columns() {
            let verdict = self.categorical_feature(name, reference, current);
            debug!(
                feature = %name,
                statistic = verdict.statistic,
                drifted = verdict.drifted,
                "categorical drift check"
            );
            features.insert(name.clone(), verdict);
        }

        Ok(DriftReport::from_features(
            features,
            self.settings.drift_share_threshold,
        ))
    }
}
