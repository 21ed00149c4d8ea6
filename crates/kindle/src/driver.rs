//! Kindle device profiles and sidecar-aware deletion
//!
//! The Kindle stores reader state (bookmarks, annotations) in a companion
//! `.mbp` file named after the book, so deleting a book through the generic
//! path would strand its sidecar on the device. Both drivers here override
//! [`Driver::delete_books`] to remove the pair together.

use crate::constants::{
    AUXILIARY_EXTENSION, EBOOK_DIR, FORMATS, VENDOR_ID, VENDOR_NAME, VOLUME_NAMES,
};
use folio_usbms::{remove_book, DeviceProfile, Driver, UsbId, UsbmsResult};
use std::path::PathBuf;

/// Builds a Kindle-family profile for one set of identifier tuples.
///
/// Every capability except the identifiers is shared across revisions; a new
/// hardware revision is a new call with its own tuples.
const fn family_profile(name: &'static str, ids: &'static [UsbId]) -> DeviceProfile {
    DeviceProfile {
        name,
        vendor_name: VENDOR_NAME,
        formats: FORMATS,
        ids,
        volume_names: VOLUME_NAMES,
        ebook_dir_main: EBOOK_DIR,
        ebook_dir_card: Some(EBOOK_DIR),
        supports_sub_dirs: true,
    }
}

/// Capability record for the original Kindle.
pub const KINDLE: DeviceProfile =
    family_profile("Kindle", &[UsbId::new(VENDOR_ID, 0x0001, 0x0399)]);

/// Capability record for the Kindle 2 hardware revision.
pub const KINDLE2: DeviceProfile =
    family_profile("Kindle 2", &[UsbId::new(VENDOR_ID, 0x0002, 0x0100)]);

/// Removes each book and, when present, its `.mbp` sidecar.
///
/// Shared by both revisions. Per path, in input order: a missing book file is
/// skipped silently with no sidecar lookup; otherwise the book is removed and
/// the sidecar path is derived by replacing the book's extension with
/// [`AUXILIARY_EXTENSION`]. A missing sidecar is not an error — reader state
/// only exists for books that have been opened on the device.
///
/// A removal failure aborts the batch immediately; earlier removals stay
/// removed and later paths are not attempted.
fn delete_with_auxiliary(paths: &[PathBuf]) -> UsbmsResult<()> {
    for path in paths {
        if !path.exists() {
            tracing::trace!("skipping missing book file: {}", path.display());
            continue;
        }
        remove_book(path)?;

        let auxiliary = path.with_extension(AUXILIARY_EXTENSION);
        if auxiliary.exists() {
            remove_book(&auxiliary)?;
        }
    }
    Ok(())
}

/// Driver for the original Kindle.
pub struct Kindle;

impl Driver for Kindle {
    fn profile(&self) -> &DeviceProfile {
        &KINDLE
    }

    fn delete_books(&self, paths: &[PathBuf], _end_session: bool) -> UsbmsResult<()> {
        delete_with_auxiliary(paths)
    }
}

/// Driver for the Kindle 2 hardware revision.
pub struct Kindle2;

impl Driver for Kindle2 {
    fn profile(&self) -> &DeviceProfile {
        &KINDLE2
    }

    fn delete_books(&self, paths: &[PathBuf], _end_session: bool) -> UsbmsResult<()> {
        delete_with_auxiliary(paths)
    }
}
