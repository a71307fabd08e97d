//! Sample the typing-dots cycle into a horizontal PNG film strip.

use std::fs;
use std::path::Path;
use std::time::Duration;

use image::RgbaImage;
use presenza::prelude::*;

const FRAME: Duration = Duration::from_millis(16);
const SAMPLES: u32 = 12;
const SAMPLE_EVERY: u32 = 8; // frames between strip cells

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let out_dir = Path::new("target/presenza-demos");
    fs::create_dir_all(out_dir)?;

    let mut avatar = Avatar::new(AvatarSize::Size80);
    avatar.set_status(Status::Online);
    avatar.set_typing(true);

    let scale = 2.0;
    let first = rasterize(&avatar.to_svg(), scale)?;
    let (cell_w, cell_h) = (first.width(), first.height());
    let mut strip = RgbaImage::new(cell_w * SAMPLES, cell_h);

    for i in 0..SAMPLES {
        for _ in 0..SAMPLE_EVERY {
            avatar.advance(FRAME);
        }
        let cell = rasterize(&avatar.to_svg(), scale)?;
        image::imageops::replace(&mut strip, &cell, (i * cell_w) as i64, 0);
        log::info!("sampled cell {}/{}", i + 1, SAMPLES);
    }

    let path = out_dir.join("typing-strip.png");
    strip.save(&path)?;
    log::info!("done: {}", path.display());
    Ok(())
}
