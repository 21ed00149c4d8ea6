//! The driver trait and generic file-management behaviour
//!
//! [`Driver`] is the capability surface a device plug-in presents to the rest
//! of the library manager: its [`DeviceProfile`] plus the file-management
//! operations it may override. The provided [`Driver::delete_books`] covers
//! devices with no sidecar conventions; families that keep companion files
//! next to their books override it.

use crate::{DeviceProfile, UsbmsError, UsbmsResult};
use std::fs;
use std::path::{Path, PathBuf};

/// A device-family plug-in
///
/// Implementations are stateless unit structs; all per-family variation lives
/// in the profile data. The matching and mounting layers hold drivers as
/// `dyn Driver` and never depend on a concrete family type.
pub trait Driver {
    /// The immutable capability record for this device family.
    fn profile(&self) -> &DeviceProfile;

    /// Removes book files from the mounted device filesystem.
    ///
    /// Paths are handled strictly in input order. A path that does not exist
    /// is skipped silently — deletion is idempotent, and "already gone" is
    /// success. `end_session` is accepted for interface compatibility with the
    /// session-managing caller and does not affect the deletion itself.
    ///
    /// # Errors
    ///
    /// Returns [`UsbmsError::Remove`] if removing an existing file fails for
    /// any OS-level reason. The failure aborts the batch: earlier removals
    /// stay removed, later paths are not attempted. There is no retry and no
    /// rollback.
    fn delete_books(&self, paths: &[PathBuf], end_session: bool) -> UsbmsResult<()> {
        let _ = end_session;
        for path in paths {
            if !path.exists() {
                tracing::trace!("skipping missing book file: {}", path.display());
                continue;
            }
            remove_book(path)?;
        }
        Ok(())
    }
}

/// Removes one file from the mounted device filesystem.
///
/// The caller is expected to have checked existence already; this maps the
/// underlying failure into [`UsbmsError::Remove`] with the offending path.
///
/// # Errors
///
/// Returns [`UsbmsError::Remove`] if the removal fails (permissions, I/O,
/// path is a directory, device disconnected mid-operation).
pub fn remove_book(path: &Path) -> UsbmsResult<()> {
    fs::remove_file(path).map_err(|source| UsbmsError::Remove {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("removed book file: {}", path.display());
    Ok(())
}
