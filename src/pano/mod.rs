// SPDX-License-Identifier: MPL-2.0
//! Panorama metadata core: XMP tag extraction, camera heading resolution,
//! and the display model built from the extracted tags.

pub mod display;
pub mod heading;
pub mod xmp;

// Re-export commonly used types
pub use display::{tag_rows, title_for, PanoTitle, TagDisplay, TagRow};
pub use heading::{direction_from_heading, heading_degrees, resolve_heading};
pub use xmp::{extract_tags, XmpTag, XmpTagSet};
