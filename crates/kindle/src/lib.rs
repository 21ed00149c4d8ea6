//! Folio Kindle Device Family Plug-in
//!
//! Device support for Amazon's Kindle readers over USB mass storage. The
//! plug-in contributes two things to the library manager:
//!
//! - Capability records for the recognised hardware revisions ([`KINDLE`] and
//!   [`KINDLE2`]), consumed by the device-matching and mounting layers
//! - A deletion override that also cleans up the `.mbp` reader-state sidecar
//!   the Kindle keeps next to each book (bookmarks, annotations, last-read
//!   position)
//!
//! The two revisions share every capability — formats, volume names, book
//! directories, sub-directory support — and differ only in their USB product
//! ID and firmware revision, so they are two profiles built from one shared
//! definition rather than a type hierarchy.

mod constants;
mod driver;

pub use constants::AUXILIARY_EXTENSION;
pub use driver::{Kindle, Kindle2, KINDLE, KINDLE2};
