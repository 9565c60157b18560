//! Browser and environment helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches `window`, the Google Maps script or the file
//! picker lives here behind the `csr` feature, so components and state stay
//! compilable and testable on the host.

pub mod browser;
#[cfg(feature = "csr")]
pub mod file_image;
#[cfg(feature = "csr")]
pub mod geolocator;
#[cfg(feature = "csr")]
pub mod google_maps;
pub mod page_config;
