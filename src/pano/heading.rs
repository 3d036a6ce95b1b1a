// SPDX-License-Identifier: MPL-2.0
//! Initial camera heading derived from the extracted XMP tags.
//!
//! The `InitialViewHeadingDegrees` tag records a compass-style heading
//! (0–360°). The scene camera cannot be rotated directly because orbit-style
//! controls immediately reset it, so the heading is converted into a point on
//! the unit sphere for the camera to sit at while looking back at the origin.

use crate::pano::xmp::{XmpTag, XmpTagSet};
use cgmath::{Angle, Deg, Rad, Vector3};
use std::f32::consts::FRAC_PI_2;

/// Parses the recorded heading in degrees.
///
/// An empty or non-numeric tag value is treated as 0°, so a panorama with no
/// recorded heading silently faces due north rather than signalling "no
/// preference". Callers that need to tell the two apart should check
/// [`XmpTagSet::is_present`] before resolving.
pub fn heading_degrees(tags: &XmpTagSet) -> f32 {
    tags.get(XmpTag::InitialViewHeadingDegrees)
        .trim()
        .parse()
        .ok()
        // "NaN"/"inf" parse successfully but would poison the transform
        .filter(|degrees: &f32| degrees.is_finite())
        .unwrap_or(0.0)
}

/// Converts a heading in degrees to the camera's initial position on the
/// unit sphere.
///
/// The heading carries no vertical tilt, so the polar angle is fixed at π/2.
/// The metadata heading is north-referenced while the scene measures azimuth
/// from its forward axis, so π/2 is subtracted from the azimuth. The
/// spherical-to-Cartesian mapping follows the three.js
/// `setFromSphericalCoords` convention expected by the scene collaborator:
///
/// ```text
/// x = sin(polar) · sin(azimuth)
/// y = cos(polar)
/// z = sin(polar) · cos(azimuth)
/// ```
///
/// so a heading of 90° lands on the scene forward axis (0, 0, 1).
///
/// After the embedding front-end moves its camera here, it must refresh the
/// orbit controls' saved home state so a later view reset returns to this
/// orientation instead of a stale default.
pub fn direction_from_heading(degrees: f32) -> Vector3<f32> {
    let polar = Rad(FRAC_PI_2);
    let azimuth = Rad::from(Deg(degrees)) - Rad(FRAC_PI_2);

    Vector3::new(
        polar.sin() * azimuth.sin(),
        polar.cos(),
        polar.sin() * azimuth.cos(),
    )
}

/// Resolves the initial camera direction for a freshly extracted tag set.
pub fn resolve_heading(tags: &XmpTagSet) -> Vector3<f32> {
    direction_from_heading(heading_degrees(tags))
}
