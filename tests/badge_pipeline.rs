//! End-to-end pipeline: widget state -> animation driver -> SVG -> raster.

use std::time::Duration;

use presenza::prelude::*;

const FRAME: Duration = Duration::from_millis(16);

fn settle_badge(badge: &mut StatusBadge) {
    for _ in 0..600 {
        if !badge.advance(FRAME) {
            return;
        }
    }
    panic!("badge did not settle");
}

#[test]
fn badge_morph_settles_and_rasterizes() {
    let mut badge = StatusBadge::new(32.0);
    badge.set_status(Status::Online);
    settle_badge(&mut badge);

    // Settled online badge is a solid circle.
    let target = BadgeGeometry::resolve(Status::Online, 32.0, StatusFlags::empty(), 0.0, 0.0);
    assert!((badge.geometry().cutout_width - target.cutout_width).abs() < 0.1);

    let img = rasterize(&badge.to_svg(), 1.0).expect("generated document parses");
    let (w, h) = badge.viewport();
    assert_eq!(img.width(), w as u32);
    assert_eq!(img.height(), h as u32);
    assert!(img.pixels().any(|p| p.0[3] > 0));
}

#[test]
fn status_change_produces_intermediate_documents() {
    let mut badge = StatusBadge::new(32.0);
    badge.set_status(Status::Online);
    settle_badge(&mut badge);

    badge.set_status(Status::Dnd);
    let mut widths = Vec::new();
    for _ in 0..8 {
        badge.advance(FRAME);
        widths.push(badge.geometry().cutout_width);
    }
    // The cutout bar grows monotonically out of the solid circle while the
    // overdamped spring is in flight.
    for pair in widths.windows(2) {
        assert!(pair[0] < pair[1], "expected growth, got {:?}", widths);
    }
    assert!(*widths.last().unwrap() < 24.0); // still short of the target
}

#[test]
fn avatar_typing_cycle_round_trip() {
    let mut avatar = Avatar::new(AvatarSize::Size80);
    avatar.set_status(Status::Online);
    for _ in 0..240 {
        avatar.advance(FRAME);
    }

    avatar.set_typing(true);
    for _ in 0..240 {
        avatar.advance(FRAME);
    }
    let typing_doc = avatar.to_svg();
    // Dots overlay present while typing.
    assert!(typing_doc.contains(r#"fill="white" opacity="#));
    let typing_cutout = avatar.geometry().cutout_width;

    avatar.set_typing(false);
    for _ in 0..240 {
        avatar.advance(FRAME);
    }
    let plain_doc = avatar.to_svg();
    assert!(!plain_doc.contains(r#"fill="white" opacity="#));
    assert!(avatar.geometry().cutout_width < typing_cutout);

    let img = rasterize(&plain_doc, 1.0).expect("generated document parses");
    assert!(img.pixels().any(|p| p.0[3] > 0));
}

#[test]
fn offline_fallback_matches_unknown_input() {
    // Unknown parse inputs and Offline drive identical pipelines.
    let mut known = StatusBadge::new(16.0);
    known.set_status(Status::Offline);
    settle_badge(&mut known);

    let mut unknown = StatusBadge::new(16.0);
    unknown.set_status(Status::from_name("definitely-not-a-status"));
    settle_badge(&mut unknown);

    assert_eq!(known.geometry(), unknown.geometry());
    assert_eq!(status_color(None), Status::from_index(255).color());
}
