//! Render every settled badge state to SVG and PNG.
//!
//! Output lands in `target/presenza-demos/`.

use std::fs;
use std::path::Path;
use std::time::Duration;

use presenza::prelude::*;

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let out_dir = Path::new("target/presenza-demos");
    fs::create_dir_all(out_dir)?;

    for status in Status::ALL {
        for mobile in [false, true] {
            let mut badge = StatusBadge::new(128.0);
            badge.set_status(status);
            badge.set_mobile(mobile);
            while badge.advance(FRAME) {}

            let name = if mobile {
                format!("status-{}-mobile", status.name())
            } else {
                format!("status-{}", status.name())
            };
            let svg = badge.to_svg();
            fs::write(out_dir.join(format!("{name}.svg")), &svg)?;
            rasterize(&svg, 2.0)?.save(out_dir.join(format!("{name}.png")))?;
            log::info!("wrote {name}.svg / {name}.png");
        }
    }

    log::info!("done: {}", out_dir.display());
    Ok(())
}
