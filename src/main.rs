// SPDX-License-Identifier: MPL-2.0
use pano_lens::loader::{self, LoadSequence, PanoSource};
use pano_lens::pano::{extract_tags, resolve_heading, tag_rows, title_for};
use pano_lens::settings::{parse_bool_literal, ViewerSettings};
use pano_lens::{config, pano};
use std::process::ExitCode;

fn bool_override(args: &mut pico_args::Arguments, key: &'static str) -> Option<bool> {
    args.opt_value_from_str::<_, String>(key)
        .ok()
        .flatten()
        .map(|value| parse_bool_literal(&value))
}

#[tokio::main]
async fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    let config = config::load().unwrap_or_default();
    let mut settings = ViewerSettings::from_config(&config);

    if let Some(value) = bool_override(&mut args, "--alt-drag") {
        settings.alt_drag_direction = value;
    }
    if let Some(value) = bool_override(&mut args, "--auto-rotate") {
        settings.auto_rotate = value;
    }
    if let Some(value) = bool_override(&mut args, "--drag-drop") {
        settings.drag_drop = value;
    }
    if let Some(value) = bool_override(&mut args, "--device-orientation") {
        settings.device_orientation = value;
    }
    if let Some(value) = bool_override(&mut args, "--mobile") {
        settings.mobile = value;
    }
    if let Some(value) = bool_override(&mut args, "--ui") {
        settings.show_ui = value;
    }
    if let Some(value) = bool_override(&mut args, "--vr") {
        settings.vr = value;
    }
    if let Some(locator) = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok())
    {
        settings.panorama = locator;
    }

    println!("Settings in play: {settings:?}");

    let sequence = LoadSequence::new();
    let token = sequence.begin();
    let source = PanoSource::parse(&settings.panorama);

    let bytes = match loader::load(&source).await {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("Unable to fetch the requested panorama image: {err}");
            return ExitCode::FAILURE;
        }
    };

    // A load begun after ours would have superseded this token; its result
    // must not be applied over the newer one.
    if !sequence.is_current(token) {
        return ExitCode::SUCCESS;
    }

    let tags = extract_tags(&bytes);

    if let Some(title) = title_for(&tags) {
        match &title.link {
            Some(link) => println!("{} ({link})", title.text),
            None => println!("{}", title.text),
        }
    }

    println!("XMP metadata:");
    for row in tag_rows(&tags) {
        println!("  {:<30} {}", row.label, row.display);
    }

    let heading = pano::heading_degrees(&tags);
    let direction = resolve_heading(&tags);
    println!("Initial view heading: {heading}°");
    println!(
        "Initial camera direction: ({:.4}, {:.4}, {:.4})",
        direction.x, direction.y, direction.z
    );

    ExitCode::SUCCESS
}
