//! Folio USB Mass Storage Device Contract
//!
//! This crate defines the contract between the Folio library manager and its
//! USB-mass-storage e-reader drivers. A driver is a thin plug-in: it declares
//! what hardware it recognises and how books are laid out on the mounted
//! volume, and it may override the generic file-management behaviour.
//!
//! ## Design Principles
//!
//! - A device family is described by an immutable [`DeviceProfile`] built once
//!   at compile time; profiles carry data only, never behaviour
//! - Hardware revisions of the same family are separate profiles differing in
//!   their [`UsbId`] tuples, not subclasses
//! - Drivers implement the [`Driver`] trait; the device-matching and mounting
//!   layers are written against the trait, not against a concrete driver
//! - Deletion is idempotent: a path that is already gone is skipped silently,
//!   never reported as a failure
//!
//! The genuinely hard work — USB enumeration, mounting the device storage,
//! transferring files — happens in the layers that consume this contract and is
//! deliberately absent here.
//!
//! ## Example Usage
//!
//! ```
//! use folio_usbms::{DeviceProfile, Driver, UsbId, VolumeNames};
//!
//! const PROFILE: DeviceProfile = DeviceProfile {
//!     name: "Example Reader",
//!     vendor_name: "EXAMPLE",
//!     formats: &["epub", "txt"],
//!     ids: &[UsbId::new(0x1d6b, 0x0001, 0x0100)],
//!     volume_names: VolumeNames {
//!         windows_main_memory: "EXAMPLE_STORAGE",
//!         windows_storage_card: None,
//!         osx_main_memory: "Example Reader Media",
//!         osx_storage_card: None,
//!         main_memory_label: "Example Reader Main Memory",
//!         storage_card_label: None,
//!     },
//!     ebook_dir_main: "books",
//!     ebook_dir_card: None,
//!     supports_sub_dirs: false,
//! };
//!
//! struct ExampleReader;
//!
//! impl Driver for ExampleReader {
//!     fn profile(&self) -> &DeviceProfile {
//!         &PROFILE
//!     }
//! }
//!
//! assert!(ExampleReader.profile().matches(UsbId::new(0x1d6b, 0x0001, 0x0100)));
//! ```

mod driver;
mod profile;

pub use driver::{remove_book, Driver};
pub use profile::{DeviceProfile, UsbId, VolumeNames};

/// Errors that can occur during driver file operations
#[derive(Debug, thiserror::Error)]
pub enum UsbmsError {
    /// Removing a file from the mounted device filesystem failed
    ///
    /// Raised only for files that existed when the removal was attempted;
    /// missing files are skipped, never reported.
    #[error("failed to remove {path}: {source}", path = path.display())]
    Remove {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for driver operations
pub type UsbmsResult<T> = std::result::Result<T, UsbmsError>;
