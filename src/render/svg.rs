//! SVG mask document builders.
//!
//! A badge is drawn by masking a solid fill rect: the mask is a white
//! background shape, a black cutout rect, and a black cutout circle. The
//! avatar document layers a circular silhouette mask (with the badge notch)
//! over the image, then embeds the badge document in the notch.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::color::Color;
use crate::geometry::{AvatarGeometry, BadgeGeometry, SizeSpec};
use crate::widgets::DotsFrame;

/// Fallback disc color when no avatar image is set.
const PLACEHOLDER_FILL: &str = "#99AAB5";

static MASK_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Document-unique mask id.
fn next_mask_id(prefix: &str) -> String {
    let n = MASK_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{n}")
}

/// The badge mask: white background shape, black cutout rect, black cutout
/// circle.
pub fn badge_mask(geom: &BadgeGeometry, mask_id: &str) -> String {
    format!(
        concat!(
            r#"<mask id="{id}">"#,
            r#"<rect x="{bx}" y="{by}" width="{bw}" height="{bh}" rx="{br}" ry="{br}" fill="white"/>"#,
            r#"<rect x="{cx}" y="{cy}" width="{cw}" height="{ch}" rx="{cr}" ry="{cr}" fill="black"/>"#,
            r#"<circle cx="{dx}" cy="{dy}" r="{dr}" fill="black"/>"#,
            "</mask>"
        ),
        id = mask_id,
        bx = geom.bg_x,
        by = geom.bg_y,
        bw = geom.bg_width,
        bh = geom.bg_height,
        br = geom.bg_radius,
        cx = geom.cutout_x,
        cy = geom.cutout_y,
        cw = geom.cutout_width,
        ch = geom.cutout_height,
        cr = geom.cutout_radius,
        dx = geom.dot_x,
        dy = geom.dot_y,
        dr = geom.dot_radius,
    )
}

/// A standalone badge document sized by [`BadgeGeometry::viewport`].
pub fn badge_document(geom: &BadgeGeometry, fill: Color, size: f32) -> String {
    let (width, height) = BadgeGeometry::viewport(size);
    let mask_id = next_mask_id("status");
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            "{mask}",
            r#"<rect x="0" y="0" width="{w}" height="{h}" fill="{fill}" mask="url(#{id})"/>"#,
            "</svg>"
        ),
        w = width,
        h = height,
        mask = badge_mask(geom, &mask_id),
        fill = fill.to_css(),
        id = mask_id,
    )
}

/// The dots overlay as SVG circles, positioned at `(x, y)` in the badge
/// viewport.
pub fn dots_fragment(frame: &DotsFrame, x: f32, y: f32) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<svg x="{x}" y="{y}" width="{w}" height="{h}">"#,
        w = frame.width,
        h = frame.height,
    );
    for dot in &frame.dots {
        let _ = write!(
            out,
            r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="white" opacity="{o}"/>"#,
            cx = dot.cx,
            cy = dot.cy,
            r = dot.r,
            o = dot.opacity,
        );
    }
    out.push_str("</svg>");
    out
}

/// The full avatar document: circular silhouette with the badge notch, the
/// avatar image (or a placeholder disc), and the embedded badge with its
/// dots overlay.
pub fn avatar_document(
    spec: SizeSpec,
    geom: &AvatarGeometry,
    fill: Color,
    dots: Option<&DotsFrame>,
    image_href: Option<&str>,
) -> String {
    let doc_width = spec.size + spec.typing_overhang();
    let doc_height = spec.size;
    let half = spec.size / 2.0;
    let avatar_mask = next_mask_id("avatar");
    let badge_mask_id = next_mask_id("avatar-status");
    let (badge_x, badge_y, badge_w, badge_h) = spec.badge_viewport();

    let mut out = String::new();
    let _ = write!(
        out,
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            r#"<mask id="{am}">"#,
            r#"<circle cx="{half}" cy="{half}" r="{half}" fill="white"/>"#,
            r#"<rect x="{acx}" y="{acy}" width="{acw}" height="{ach}" rx="{acr}" ry="{acr}" fill="black"/>"#,
            "</mask>"
        ),
        w = doc_width,
        h = doc_height,
        am = avatar_mask,
        half = half,
        acx = geom.cutout_x,
        acy = geom.cutout_y,
        acw = geom.cutout_width,
        ach = geom.cutout_height,
        acr = geom.cutout_radius,
    );

    match image_href {
        Some(href) => {
            let _ = write!(
                out,
                r#"<image x="0" y="0" width="{s}" height="{s}" href="{href}" preserveAspectRatio="xMidYMid slice" mask="url(#{am})"/>"#,
                s = spec.size,
                am = avatar_mask,
            );
        }
        None => {
            let _ = write!(
                out,
                r#"<circle cx="{half}" cy="{half}" r="{half}" fill="{fill}" mask="url(#{am})"/>"#,
                half = half,
                fill = PLACEHOLDER_FILL,
                am = avatar_mask,
            );
        }
    }

    // Embedded badge viewport, bottom-right.
    let _ = write!(
        out,
        concat!(
            r#"<svg x="{x}" y="{y}" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            "{mask}",
            r#"<rect x="0" y="0" width="{w}" height="{h}" fill="{fill}" mask="url(#{id})"/>"#,
        ),
        x = badge_x,
        y = badge_y,
        w = badge_w,
        h = badge_h,
        mask = badge_mask(&geom.badge, &badge_mask_id),
        fill = fill.to_css(),
        id = badge_mask_id,
    );
    if let Some(frame) = dots {
        out.push_str(&dots_fragment(frame, badge_w * 0.15, badge_h * 0.5));
    }
    out.push_str("</svg></svg>");
    out
}
