// SPDX-License-Identifier: MPL-2.0
//! `pano_lens` is the metadata core of an equirectangular (360°) panorama viewer.
//!
//! It locates a fixed catalog of XMP tags inside a raw panorama byte stream,
//! derives the initial camera orientation from the recorded heading, and loads
//! panorama bytes from a URL or local file. The 3D scene, controls, and page UI
//! belong to an embedding front-end and are not part of this crate.

#![doc(html_root_url = "https://docs.rs/pano_lens/0.1.0")]

pub mod config;
pub mod error;
pub mod loader;
pub mod pano;
pub mod settings;

#[cfg(test)]
mod test_utils;
