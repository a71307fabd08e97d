//! Capture a badge morph (online -> dnd -> offline) as a PNG film strip.

use std::fs;
use std::path::Path;
use std::time::Duration;

use image::RgbaImage;
use presenza::prelude::*;

const FRAME: Duration = Duration::from_millis(16);
const CELLS_PER_LEG: u32 = 10;
const SAMPLE_EVERY: u32 = 2;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let out_dir = Path::new("target/presenza-demos");
    fs::create_dir_all(out_dir)?;

    let mut badge = StatusBadge::new(64.0);
    badge.set_status(Status::Online);
    while badge.advance(FRAME) {}

    let scale = 2.0;
    let first = rasterize(&badge.to_svg(), scale)?;
    let (cell_w, cell_h) = (first.width(), first.height());
    let legs = [Status::Dnd, Status::Offline];
    let mut strip = RgbaImage::new(cell_w * CELLS_PER_LEG * legs.len() as u32, cell_h);

    // Hue-swept backdrop so the transparent badge frames read left to right.
    let strip_w = strip.width() as f32;
    for (x, _, px) in strip.enumerate_pixels_mut() {
        let hue = 200.0 + 100.0 * x as f32 / strip_w;
        let c = Color::hsla(hue, 0.35, 0.18, 1.0);
        *px = image::Rgba([
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
            255,
        ]);
    }

    let mut cell = 0u32;
    for leg in legs {
        badge.set_status(leg);
        for _ in 0..CELLS_PER_LEG {
            for _ in 0..SAMPLE_EVERY {
                badge.advance(FRAME);
            }
            let frame = rasterize(&badge.to_svg(), scale)?;
            image::imageops::overlay(&mut strip, &frame, (cell * cell_w) as i64, 0);
            cell += 1;
        }
        // Let the spring finish before the next leg.
        while badge.advance(FRAME) {}
        log::info!("captured leg -> {}", leg.name());
    }

    let path = out_dir.join("transition-strip.png");
    strip.save(&path)?;
    log::info!("done: {}", path.display());
    Ok(())
}
