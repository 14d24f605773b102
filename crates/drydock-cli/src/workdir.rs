use std::path::{Path, PathBuf};

/// Restores the previous working directory when dropped.
pub struct WorkDirGuard {
    previous: PathBuf,
}

/// Enter `dir`, returning a guard that restores the previous working
/// directory on drop.
pub fn enter(dir: &Path) -> std::io::Result<WorkDirGuard> {
    let previous = std::env::current_dir()?;
    std::env::set_current_dir(dir)?;
    tracing::debug!(dir = %dir.display(), "changed working directory");
    Ok(WorkDirGuard { previous })
}

impl Drop for WorkDirGuard {
    fn drop(&mut self) {
        if let Err(error) = std::env::set_current_dir(&self.previous) {
            tracing::warn!(%error, "failed to restore working directory");
        }
    }
}
