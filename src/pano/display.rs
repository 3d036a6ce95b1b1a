// SPDX-License-Identifier: MPL-2.0
//! Display model built from an extracted tag set.
//!
//! This is the data the embedding front-end renders: the metadata table shown
//! in the settings drawer (one row per cataloged tag, absent tags marked
//! undefined) and the page title derived from the Second Life region tags.

use crate::pano::xmp::{XmpTag, XmpTagSet};
use std::fmt;

/// A single tag value prepared for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagDisplay {
    Value(String),
    /// The tag was not found in the stream.
    Undefined,
}

impl fmt::Display for TagDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagDisplay::Value(value) => write!(f, "{}", value),
            TagDisplay::Undefined => write!(f, "undefined"),
        }
    }
}

/// One labeled row of the metadata table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRow {
    pub label: &'static str,
    pub display: TagDisplay,
}

/// Builds the metadata table rows, one per cataloged tag, in catalog order.
pub fn tag_rows(tags: &XmpTagSet) -> Vec<TagRow> {
    XmpTag::ALL
        .iter()
        .map(|&tag| TagRow {
            label: tag.label(),
            display: if tags.is_present(tag) {
                TagDisplay::Value(tags.get(tag).to_string())
            } else {
                TagDisplay::Undefined
            },
        })
        .collect()
}

/// Panorama title resolved from the Second Life region tags.
///
/// The link, when present, points at the region so the embedding front-end
/// can let the viewer visit the location the panorama was captured in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanoTitle {
    pub text: String,
    pub link: Option<String>,
}

/// Returns the panorama title, or `None` when no region name was recorded
/// (in which case the front-end hides the title entirely).
pub fn title_for(tags: &XmpTagSet) -> Option<PanoTitle> {
    if !tags.is_present(XmpTag::SlRegionName) {
        return None;
    }

    let url = tags.get(XmpTag::SlRegionUrl);

    Some(PanoTitle {
        text: tags.get(XmpTag::SlRegionName).to_string(),
        link: if url.is_empty() {
            None
        } else {
            Some(url.to_string())
        },
    })
}
