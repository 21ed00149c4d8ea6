//! Identification constants for the Kindle device family.
//!
//! Values here are what the hardware reports over USB and how its mounted
//! volumes appear on each host operating system. They are shared by every
//! recognised revision; revision-specific identifiers live with the profiles.

use folio_usbms::VolumeNames;

/// Supported format extensions, in preference order.
pub const FORMATS: &[&str] = &["azw", "mobi", "prc", "azw1", "tpz", "txt"];

/// USB vendor identifier shared by all Kindle revisions.
pub const VENDOR_ID: u16 = 0x1949;

/// Vendor name reported over USB.
pub const VENDOR_NAME: &str = "KINDLE";

/// Volume names for the main-memory and storage-card media.
pub const VOLUME_NAMES: VolumeNames = VolumeNames {
    windows_main_memory: "INTERNAL_STORAGE",
    windows_storage_card: Some("CARD_STORAGE"),
    osx_main_memory: "Kindle Internal Storage Media",
    osx_storage_card: Some("Kindle Card Storage Media"),
    main_memory_label: "Kindle Main Memory",
    storage_card_label: Some("Kindle Storage Card"),
};

/// Book directory under each volume root.
pub const EBOOK_DIR: &str = "documents";

/// Extension of the reader-state sidecar kept next to each book.
pub const AUXILIARY_EXTENSION: &str = "mbp";
