// visaguard-core/src/application/clean.rs

use crate::error::VisaguardError;
use crate::infrastructure::config::load_pipeline_config;
use crate::infrastructure::error::InfrastructureError;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Removes the configured clean targets (by default the artifact directory)
/// under the workspace root.
pub fn clean_workspace(workspace_dir: &Path) -> Result<(), VisaguardError> {
    tracing::info!("🧹 Initializing visaguard cleanup sequence...");

    let config = load_pipeline_config(workspace_dir).map_err(VisaguardError::Infrastructure)?;

    for target_rel_path in config.clean_targets {
        // Zero-Trust Path Traversal Guard: targets stay inside the workspace
        let rel = Path::new(&target_rel_path);
        if rel.is_absolute()
            || rel
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir))
        {
            return Err(VisaguardError::UnsafePath(target_rel_path));
        }

        let full_path = workspace_dir.join(rel);

        if full_path.exists() {
            if full_path.is_dir() {
                let file_count = WalkDir::new(&full_path)
                    .into_iter()
                    .filter_map(Result::ok)
                    .filter(|e| e.path().is_file())
                    .count();
                fs::remove_dir_all(&full_path)
                    .map_err(|e| VisaguardError::Infrastructure(InfrastructureError::Io(e)))?;
                println!(
                    "   🗑️  Artifact removed: {} ({} files)",
                    target_rel_path, file_count
                );
            } else {
                fs::remove_file(&full_path)
                    .map_err(|e| VisaguardError::Infrastructure(InfrastructureError::Io(e)))?;
                println!("   🗑️  Artifact removed: {}", target_rel_path);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_clean_removes_artifact_dir() {
        let ws = tempdir().unwrap();
        fs::write(ws.path().join("visaguard.yaml"), "{}\n").unwrap();
        let run_dir = ws.path().join("artifact").join("03-09-2025-14-30-05");
        fs::create_dir_all(&run_dir).unwrap();
        fs::write(run_dir.join("report.yaml"), "dataset_drift: false\n").unwrap();

        clean_workspace(ws.path()).unwrap();
        assert!(!ws.path().join("artifact").exists());
    }

    #[test]
    fn test_clean_rejects_escaping_targets() {
        let ws = tempdir().unwrap();
        fs::write(
            ws.path().join("visaguard.yaml"),
            "clean_targets:\n  - ../outside\n",
        )
        .unwrap();

        let result = clean_workspace(ws.path());
        assert!(matches!(result, Err(VisaguardError::UnsafePath(_))));
    }

    #[test]
    fn test_clean_is_a_noop_without_targets_present() {
        let ws = tempdir().unwrap();
        fs::write(ws.path().join("visaguard.yaml"), "{}\n").unwrap();

        assert!(clean_workspace(ws.path()).is_ok());
    }
}
