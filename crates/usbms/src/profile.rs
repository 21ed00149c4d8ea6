//! Immutable device capability records
//!
//! A [`DeviceProfile`] describes everything the library manager needs to know
//! about a device family without talking to the hardware: which USB
//! vendor/product/firmware tuples identify it, what its mounted volumes are
//! called on each host operating system, where books live on those volumes,
//! and which e-book formats it accepts.
//!
//! Profiles are plain `const` data. They are created once at compile time and
//! never mutated; a malformed profile is a programmer error caught in review,
//! not a runtime condition.

/// A USB hardware-identifier tuple
///
/// The device-matching layer compares an attached device's reported vendor ID,
/// product ID, and BCD firmware revision against the tuples a profile
/// declares. Hardware revisions of the same family appear as distinct tuples
/// (or distinct profiles) sharing a vendor ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct UsbId {
    /// USB vendor identifier
    pub vendor_id: u16,
    /// USB product identifier
    pub product_id: u16,
    /// Binary-coded-decimal firmware revision
    pub bcd: u16,
}

impl UsbId {
    /// Creates an identifier tuple; usable in `const` profile definitions.
    #[must_use]
    pub const fn new(vendor_id: u16, product_id: u16, bcd: u16) -> Self {
        Self {
            vendor_id,
            product_id,
            bcd,
        }
    }
}

impl std::fmt::Display for UsbId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04x}:{:04x} (bcd {:04x})",
            self.vendor_id, self.product_id, self.bcd
        )
    }
}

/// Per-operating-system names for a device's mounted volumes
///
/// Windows exposes mass-storage volumes under fixed device names, macOS under
/// media names; the generic labels are what the library manager shows in its
/// own interface. Card entries are `None` for devices without a storage-card
/// slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct VolumeNames {
    /// Windows device name for the main-memory volume
    pub windows_main_memory: &'static str,
    /// Windows device name for the storage-card volume, if any
    pub windows_storage_card: Option<&'static str>,
    /// macOS media name for the main-memory volume
    pub osx_main_memory: &'static str,
    /// macOS media name for the storage-card volume, if any
    pub osx_storage_card: Option<&'static str>,
    /// Display label for the main-memory volume
    pub main_memory_label: &'static str,
    /// Display label for the storage-card volume, if any
    pub storage_card_label: Option<&'static str>,
}

/// The full immutable capability record for a device family
///
/// Consumed by the device-matching and mounting layers; nothing here has side
/// effects. The format list is ordered by preference — when a book is
/// available in several formats, the earliest listed format wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct DeviceProfile {
    /// Human-readable driver name
    pub name: &'static str,
    /// Vendor name as reported over USB
    pub vendor_name: &'static str,
    /// Supported format extensions, lower-case, no dot, preference order
    pub formats: &'static [&'static str],
    /// Hardware-identifier tuples this profile recognises
    pub ids: &'static [UsbId],
    /// Per-OS volume names and display labels
    pub volume_names: VolumeNames,
    /// Default book directory under the main-memory volume root
    pub ebook_dir_main: &'static str,
    /// Default book directory under the storage-card volume root, if any
    pub ebook_dir_card: Option<&'static str>,
    /// Whether books may live in nested sub-directories under the book
    /// directory, or must stay in a flat layout
    pub supports_sub_dirs: bool,
}

impl DeviceProfile {
    /// Returns true if an attached device's identifier tuple matches this
    /// profile.
    ///
    /// All three fields must match; the BCD revision is what distinguishes
    /// hardware revisions sharing a product ID.
    #[must_use]
    pub fn matches(&self, id: UsbId) -> bool {
        self.ids.contains(&id)
    }

    /// Returns true if the device accepts books with the given extension.
    ///
    /// The comparison is case-insensitive; profile format lists are stored
    /// lower-case.
    #[must_use]
    pub fn supports_format(&self, extension: &str) -> bool {
        self.formats
            .iter()
            .any(|format| format.eq_ignore_ascii_case(extension))
    }

    /// Returns the preference rank of a format extension, if supported.
    ///
    /// Lower is better; the matching layer uses this to pick which of a
    /// book's available formats to send to the device.
    #[must_use]
    pub fn format_priority(&self, extension: &str) -> Option<usize> {
        self.formats
            .iter()
            .position(|format| format.eq_ignore_ascii_case(extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_PROFILE: DeviceProfile = DeviceProfile {
        name: "Test Reader",
        vendor_name: "TEST",
        formats: &["epub", "mobi", "txt"],
        ids: &[
            UsbId::new(0x1d6b, 0x0001, 0x0100),
            UsbId::new(0x1d6b, 0x0002, 0x0200),
        ],
        volume_names: VolumeNames {
            windows_main_memory: "TEST_STORAGE",
            windows_storage_card: Some("TEST_CARD"),
            osx_main_memory: "Test Reader Media",
            osx_storage_card: Some("Test Reader Card Media"),
            main_memory_label: "Test Reader Main Memory",
            storage_card_label: Some("Test Reader Storage Card"),
        },
        ebook_dir_main: "books",
        ebook_dir_card: Some("books"),
        supports_sub_dirs: true,
    };

    #[test]
    fn test_matches_known_revision() {
        assert!(TEST_PROFILE.matches(UsbId::new(0x1d6b, 0x0001, 0x0100)));
        assert!(TEST_PROFILE.matches(UsbId::new(0x1d6b, 0x0002, 0x0200)));
    }

    #[test]
    fn test_matches_requires_all_three_fields() {
        // Same vendor and product but a different firmware revision
        assert!(!TEST_PROFILE.matches(UsbId::new(0x1d6b, 0x0001, 0x0101)));
        // Unknown product
        assert!(!TEST_PROFILE.matches(UsbId::new(0x1d6b, 0x0003, 0x0100)));
        // Unknown vendor
        assert!(!TEST_PROFILE.matches(UsbId::new(0x1949, 0x0001, 0x0100)));
    }

    #[test]
    fn test_supports_format_is_case_insensitive() {
        assert!(TEST_PROFILE.supports_format("epub"));
        assert!(TEST_PROFILE.supports_format("EPUB"));
        assert!(!TEST_PROFILE.supports_format("pdf"));
    }

    #[test]
    fn test_format_priority_follows_list_order() {
        assert_eq!(TEST_PROFILE.format_priority("epub"), Some(0));
        assert_eq!(TEST_PROFILE.format_priority("txt"), Some(2));
        assert_eq!(TEST_PROFILE.format_priority("pdf"), None);
    }

    #[test]
    fn test_usb_id_display() {
        let id = UsbId::new(0x1949, 0x0001, 0x0399);
        assert_eq!(id.to_string(), "1949:0001 (bcd 0399)");
    }

    #[test]
    fn test_profile_serializes_to_json() {
        let json = serde_json::to_value(TEST_PROFILE).unwrap();
        assert_eq!(json["name"], "Test Reader");
        assert_eq!(json["formats"][0], "epub");
        assert_eq!(json["ids"][0]["vendor_id"], 0x1d6b);
        assert_eq!(json["volume_names"]["windows_storage_card"], "TEST_CARD");
    }
}
