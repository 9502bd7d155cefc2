// visaguard-core/src/domain/dataset.rs

use std::collections::BTreeMap;
use std::collections::HashSet;

/// One named column: an ordered sequence of raw cell values.
/// `None` marks an empty cell; typing happens lazily at the point of use
/// (numeric parse for drift, category counting) instead of at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<Option<String>>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Cells that parse as finite floats, in row order. Non-numeric and empty
    /// cells are skipped.
    pub fn numeric_values(&self) -> Vec<f64> {
        self.values
            .iter()
            .flatten()
            .filter_map(|raw| raw.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .collect()
    }

    /// Occurrence count per distinct non-empty cell value.
    pub fn category_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for value in self.values.iter().flatten() {
            *counts.entry(value.clone()).or_insert(0usize) += 1;
        }
        counts
    }
}

/// In-memory tabular data: an ordered sequence of named columns.
/// Owned transiently by one validation run; never persisted by the core.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabularDataset {
    columns: Vec<Column>,
}

impl TabularDataset {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Row count of the longest column (columns read from a delimited file
    /// are always equal length; the max keeps ragged hand-built tables sane).
    pub fn row_count(&self) -> usize {
        self.columns.iter().map(|c| c.values.len()).max().unwrap_or(0)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> HashSet<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Builds a new dataset keeping only the rows at `indices`, in order.
    /// Out-of-range indices yield empty cells (ragged-table guard).
    pub fn select_rows(&self, indices: &[usize]) -> TabularDataset {
        let columns = self
            .columns
            .iter()
            .map(|col| Column {
                name: col.name.clone(),
                values: indices
                    .iter()
                    .map(|&i| col.values.get(i).cloned().flatten())
                    .collect(),
            })
            .collect();
        TabularDataset::new(columns)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<Option<String>> {
        values
            .iter()
            .map(|v| {
                if v.is_empty() {
                    None
                } else {
                    Some(v.to_string())
                }
            })
            .collect()
    }

    #[test]
    fn test_numeric_values_skip_garbage() {
        let col = Column::new("wage", cells(&["70000", "", "abc", "81000.5"]));
        assert_eq!(col.numeric_values(), vec![70000.0, 81000.5]);
    }

    #[test]
    fn test_category_counts() {
        let col = Column::new("region", cells(&["West", "South", "West", ""]));
        let counts = col.category_counts();
        assert_eq!(counts.get("West"), Some(&2));
        assert_eq!(counts.get("South"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_select_rows_preserves_order() {
        let ds = TabularDataset::new(vec![Column::new("id", cells(&["a", "b", "c", "d"]))]);
        let picked = ds.select_rows(&[3, 1]);
        assert_eq!(
            picked.column("id").unwrap().values,
            cells(&["d", "b"])
        );
        assert_eq!(picked.row_count(), 2);
    }

    #[test]
    fn test_empty_dataset_metadata() {
        let ds = TabularDataset::default();
        assert_eq!(ds.column_count(), 0);
        assert_eq!(ds.row_count(), 0);
        assert!(!ds.has_column("anything"));
    }
}
