// SPDX-License-Identifier: MPL-2.0
//! XMP tag extraction from raw panorama byte streams.
//!
//! A panorama image embeds its XMP block as plain text somewhere in the file.
//! The viewer only cares about a small, fixed set of tags, so instead of a
//! structured XML parser this module does a literal substring search for each
//! tag's start/end markers over the raw bytes. Any stream that happens to
//! contain the marker literals is accepted, well-formed XMP or not.
//!
//! Supported tags:
//! - The GPano photo sphere set (projection, dimensions, software, heading,
//!   photo dates)
//! - Second Life 360 snapshot tags (version, cubemap sizes, region name/URL)
//!   that nothing except the Second Life viewer will ever write

use std::collections::BTreeMap;

/// The known XMP tags, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum XmpTag {
    ProjectionType,
    UsePanoramaViewer,
    FullPanoWidthPixels,
    FullPanoHeightPixels,
    CaptureSoftware,
    StitchingSoftware,
    InitialViewHeadingDegrees,
    FirstPhotoDate,
    LastPhotoDate,
    SlPanoVersion,
    ActualSourceCubeMapSizePixels,
    ScaledSourceCubeMapSizePixels,
    SlRegionName,
    SlRegionUrl,
}

impl XmpTag {
    /// The full tag catalog, in display order.
    pub const ALL: [XmpTag; 14] = [
        XmpTag::ProjectionType,
        XmpTag::UsePanoramaViewer,
        XmpTag::FullPanoWidthPixels,
        XmpTag::FullPanoHeightPixels,
        XmpTag::CaptureSoftware,
        XmpTag::StitchingSoftware,
        XmpTag::InitialViewHeadingDegrees,
        XmpTag::FirstPhotoDate,
        XmpTag::LastPhotoDate,
        XmpTag::SlPanoVersion,
        XmpTag::ActualSourceCubeMapSizePixels,
        XmpTag::ScaledSourceCubeMapSizePixels,
        XmpTag::SlRegionName,
        XmpTag::SlRegionUrl,
    ];

    /// Literal start and end markers delimiting this tag's value in the stream.
    pub fn markers(self) -> (&'static str, &'static str) {
        match self {
            XmpTag::ProjectionType => ("<GPano:ProjectionType>", "</GPano:ProjectionType>"),
            XmpTag::UsePanoramaViewer => {
                ("<GPano:UsePanoramaViewer>", "</GPano:UsePanoramaViewer>")
            }
            XmpTag::FullPanoWidthPixels => {
                ("<GPano:FullPanoWidthPixels>", "</GPano:FullPanoWidthPixels>")
            }
            XmpTag::FullPanoHeightPixels => {
                ("<GPano:FullPanoHeightPixels>", "</GPano:FullPanoHeightPixels>")
            }
            XmpTag::CaptureSoftware => ("<GPano:CaptureSoftware>", "</GPano:CaptureSoftware>"),
            XmpTag::StitchingSoftware => {
                ("<GPano:StitchingSoftware>", "</GPano:StitchingSoftware>")
            }
            XmpTag::InitialViewHeadingDegrees => (
                "<GPano:InitialViewHeadingDegrees>",
                "</GPano:InitialViewHeadingDegrees>",
            ),
            XmpTag::FirstPhotoDate => ("<GPano:FirstPhotoDate>", "</GPano:FirstPhotoDate>"),
            XmpTag::LastPhotoDate => ("<GPano:LastPhotoDate>", "</GPano:LastPhotoDate>"),
            XmpTag::SlPanoVersion => ("<SLPanoVersion>", "</SLPanoVersion>"),
            XmpTag::ActualSourceCubeMapSizePixels => (
                "<ActualSourceCubeMapSizePixels>",
                "</ActualSourceCubeMapSizePixels>",
            ),
            XmpTag::ScaledSourceCubeMapSizePixels => (
                "<ScaledSourceCubeMapSizePixels>",
                "</ScaledSourceCubeMapSizePixels>",
            ),
            XmpTag::SlRegionName => ("<SLRegionName>", "</SLRegionName>"),
            XmpTag::SlRegionUrl => ("<SLRegionURL>", "</SLRegionURL>"),
        }
    }

    /// Human-readable label, as shown in the metadata table.
    pub fn label(self) -> &'static str {
        match self {
            XmpTag::ProjectionType => "ProjectionType",
            XmpTag::UsePanoramaViewer => "UsePanoramaViewer",
            XmpTag::FullPanoWidthPixels => "FullPanoWidthPixels",
            XmpTag::FullPanoHeightPixels => "FullPanoHeightPixels",
            XmpTag::CaptureSoftware => "CaptureSoftware",
            XmpTag::StitchingSoftware => "StitchingSoftware",
            XmpTag::InitialViewHeadingDegrees => "InitialViewHeadingDegrees",
            XmpTag::FirstPhotoDate => "FirstPhotoDate",
            XmpTag::LastPhotoDate => "LastPhotoDate",
            XmpTag::SlPanoVersion => "SLPanoVersion",
            XmpTag::ActualSourceCubeMapSizePixels => "ActualSourceCubeMapSizePixels",
            XmpTag::ScaledSourceCubeMapSizePixels => "ScaledSourceCubeMapSizePixels",
            XmpTag::SlRegionName => "SLRegionName",
            XmpTag::SlRegionUrl => "SLRegionURL",
        }
    }
}

/// The complete set of extracted tag values for one loaded panorama.
///
/// Every tag in the catalog is always present; the empty string means the tag
/// was not found in the stream. Built fresh per loaded image and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmpTagSet {
    values: BTreeMap<XmpTag, String>,
}

impl XmpTagSet {
    /// Returns the extracted value for `tag`, empty if the tag was absent.
    pub fn get(&self, tag: XmpTag) -> &str {
        self.values.get(&tag).map(String::as_str).unwrap_or("")
    }

    /// Returns true if the tag was found in the stream with a non-empty value.
    pub fn is_present(&self, tag: XmpTag) -> bool {
        !self.get(tag).is_empty()
    }
}

/// Extracts every cataloged tag from a raw panorama byte stream.
///
/// Total over all inputs: a missing or malformed marker pair yields the empty
/// string for that tag and leaves the others unaffected.
pub fn extract_tags(stream: &[u8]) -> XmpTagSet {
    let values = XmpTag::ALL
        .iter()
        .map(|&tag| {
            let (start_marker, end_marker) = tag.markers();
            (tag, tag_from_stream(stream, start_marker, end_marker))
        })
        .collect();

    XmpTagSet { values }
}

/// Returns the text strictly between the first occurrence of `start_marker`
/// and the first occurrence of `end_marker` after it, or empty if either is
/// missing.
fn tag_from_stream(stream: &[u8], start_marker: &str, end_marker: &str) -> String {
    let Some(start_offset) = find_bytes(stream, start_marker.as_bytes(), 0) else {
        return String::new();
    };

    let value_offset = start_offset + start_marker.len();

    // The end marker is only valid strictly after the start marker; searching
    // from the beginning could match an earlier, unrelated occurrence.
    let Some(end_offset) = find_bytes(stream, end_marker.as_bytes(), value_offset + 1) else {
        return String::new();
    };

    String::from_utf8_lossy(&stream[value_offset..end_offset]).into_owned()
}

/// First index of `needle` in `haystack` at or after `from`.
fn find_bytes(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if needle.is_empty() || from >= haystack.len() {
        return None;
    }

    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|position| position + from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream_with(tag: XmpTag, value: &str) -> Vec<u8> {
        let (start, end) = tag.markers();
        format!("\u{0}\u{ff}junk{start}{value}{end}trailer").into_bytes()
    }

    #[test]
    fn catalog_has_fourteen_distinct_tags() {
        assert_eq!(XmpTag::ALL.len(), 14);
        let mut starts: Vec<&str> = XmpTag::ALL.iter().map(|t| t.markers().0).collect();
        starts.sort_unstable();
        starts.dedup();
        assert_eq!(starts.len(), 14);
    }

    #[test]
    fn end_marker_closes_its_start_marker() {
        for tag in XmpTag::ALL {
            let (start, end) = tag.markers();
            assert_eq!(end, format!("</{}", &start[1..]));
        }
    }

    #[test]
    fn extracts_value_between_markers() {
        let stream = stream_with(XmpTag::ProjectionType, "equirectangular");
        let tags = extract_tags(&stream);
        assert_eq!(tags.get(XmpTag::ProjectionType), "equirectangular");
    }

    #[test]
    fn value_is_not_trimmed() {
        let stream = stream_with(XmpTag::CaptureSoftware, "  Second Life ");
        let tags = extract_tags(&stream);
        assert_eq!(tags.get(XmpTag::CaptureSoftware), "  Second Life ");
    }

    #[test]
    fn empty_stream_yields_all_tags_empty() {
        let tags = extract_tags(b"");
        for tag in XmpTag::ALL {
            assert_eq!(tags.get(tag), "");
            assert!(!tags.is_present(tag));
        }
    }

    #[test]
    fn missing_end_marker_yields_empty_for_that_tag_only() {
        let stream = b"<GPano:ProjectionType>dangling<SLRegionName>Hippo Hollow</SLRegionName>";
        let tags = extract_tags(stream);
        assert_eq!(tags.get(XmpTag::ProjectionType), "");
        assert_eq!(tags.get(XmpTag::SlRegionName), "Hippo Hollow");
    }

    #[test]
    fn end_marker_before_start_marker_is_ignored() {
        let stream = b"</SLRegionName>noise<SLRegionName>unterminated";
        let tags = extract_tags(stream);
        assert_eq!(tags.get(XmpTag::SlRegionName), "");
    }

    #[test]
    fn first_occurrence_wins_over_duplicates() {
        let stream = b"<SLPanoVersion>1.0</SLPanoVersion><SLPanoVersion>2.0</SLPanoVersion>";
        let tags = extract_tags(stream);
        assert_eq!(tags.get(XmpTag::SlPanoVersion), "1.0");
    }

    #[test]
    fn immediately_adjacent_markers_yield_empty() {
        // The end-marker search starts one past the value offset, so an empty
        // element never matches its own closing marker.
        let stream = b"<SLRegionURL></SLRegionURL>";
        let tags = extract_tags(stream);
        assert_eq!(tags.get(XmpTag::SlRegionUrl), "");
    }

    #[test]
    fn survives_arbitrary_binary_surroundings() {
        let mut stream: Vec<u8> = (0u8..=255).cycle().take(4096).collect();
        stream.extend_from_slice(b"<GPano:FullPanoWidthPixels>8192</GPano:FullPanoWidthPixels>");
        stream.extend((0u8..=255).rev());
        let tags = extract_tags(&stream);
        assert_eq!(tags.get(XmpTag::FullPanoWidthPixels), "8192");
    }

    #[test]
    fn extraction_is_idempotent() {
        let stream = stream_with(XmpTag::InitialViewHeadingDegrees, "142.5");
        assert_eq!(extract_tags(&stream), extract_tags(&stream));
    }

    #[test]
    fn find_bytes_respects_offset() {
        let haystack = b"abcabc";
        assert_eq!(find_bytes(haystack, b"abc", 0), Some(0));
        assert_eq!(find_bytes(haystack, b"abc", 1), Some(3));
        assert_eq!(find_bytes(haystack, b"abc", 4), None);
        assert_eq!(find_bytes(haystack, b"abc", 99), None);
    }
}
