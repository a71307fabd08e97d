//! Render settled avatars across every size tier and status.

use std::fs;
use std::path::Path;
use std::time::Duration;

use presenza::prelude::*;

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let out_dir = Path::new("target/presenza-demos");
    fs::create_dir_all(out_dir)?;

    for size in AvatarSize::ALL {
        for status in Status::ALL {
            let mut avatar = Avatar::new(size);
            avatar.set_status(status);
            for _ in 0..240 {
                if !avatar.advance(FRAME) {
                    break;
                }
            }

            let name = format!("avatar-{}-{}", size.px(), status.name());
            fs::write(out_dir.join(format!("{name}.svg")), avatar.to_svg())?;
        }
    }

    // One large raster to eyeball the notch.
    let mut avatar = Avatar::new(AvatarSize::Size128);
    avatar.set_status(Status::Dnd);
    for _ in 0..240 {
        if !avatar.advance(FRAME) {
            break;
        }
    }
    rasterize(&avatar.to_svg(), 2.0)?.save(out_dir.join("avatar-128-dnd.png"))?;

    log::info!("done: {}", out_dir.display());
    Ok(())
}
