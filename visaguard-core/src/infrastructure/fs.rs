use crate::infrastructure::error::InfrastructureError;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Write content to a file atomically using a temporary file.
///
/// This function:
/// 1. Creates the target's parent directory if it does not exist yet.
/// 2. Creates a temporary file in that directory.
/// 3. Writes the content to the temporary file.
/// 4. Persists (renames) the temporary file to the target path.
///
/// This ensures that the target file is either fully written or not written at all,
/// preventing partial data corruption.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    content: C,
) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent).map_err(InfrastructureError::Io)?;

    // Create a temporary file in the same directory to ensure atomic rename works across filesystems
    let mut temp_file = tempfile::NamedTempFile::new_in(parent).map_err(InfrastructureError::Io)?;

    // Write content
    temp_file
        .write_all(content.as_ref())
        .map_err(InfrastructureError::Io)?;

    // Atomic rename (persist)
    temp_file
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}

/// Atomic YAML serialization, used for the drift report and config scaffolds.
pub fn atomic_write_yaml<T: Serialize>(path: &Path, data: &T) -> Result<(), InfrastructureError> {
    let content = serde_yaml::to_string(data).map_err(InfrastructureError::Yaml)?;
    atomic_write(path, content)
}

/// Atomic JSON serialization, used for persisted stage artifacts.
pub fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> Result<(), InfrastructureError> {
    let content = serde_json::to_string_pretty(data).map_err(InfrastructureError::Json)?;
    atomic_write(path, content)
}
