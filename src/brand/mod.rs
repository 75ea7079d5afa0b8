//! Placeholder brand artwork for the website.
//!
//! Renders three fixed raster artifacts from primitive shapes and text, all
//! in the site's three-color palette:
//!
//! | File | Size | Background | Content |
//! |------|------|------------|---------|
//! | `images/big-logo.png` | 600×300 | solid blue | ukulele + full title + "TVUS" |
//! | `images/ukulele-icon.png` | 120×150 | transparent | ukulele only |
//! | `images/title-text.png` | 400×120 | transparent | title + musical notes |
//!
//! Every artifact is a pure function from hardcoded constants to an
//! [`RgbaImage`]; the only runtime variation is which label font loads (see
//! [`font`]). Drawing uses `imageproc` primitives over the `image` crate —
//! pure Rust, statically linked, nothing to install.
//!
//! These are placeholders that get replaced wholesale once real artwork
//! lands, so coordinates stay hardcoded.

mod font;
pub use font::BrandFont;

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_ellipse_mut, draw_line_segment_mut, draw_filled_rect_mut};
use imageproc::rect::Rect;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrandError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Site palette.
pub const BLUE_BG: Rgba<u8> = Rgba([0x55, 0x73, 0xA3, 0xFF]);
pub const DARK_BLUE: Rgba<u8> = Rgba([0x00, 0x00, 0x66, 0xFF]);
pub const WHITE: Rgba<u8> = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);

const TRANSPARENT: Rgba<u8> = Rgba([0xFF, 0xFF, 0xFF, 0x00]);

const TITLE_LINE_1: &str = "Temecula Valley";
const TITLE_LINE_2: &str = "Ukulele Strummers";

/// Render all three artifacts into `out_dir` (created if needed) and return
/// the written paths in render order.
pub fn generate_all(out_dir: &Path) -> Result<Vec<PathBuf>, BrandError> {
    std::fs::create_dir_all(out_dir)?;
    let font = BrandFont::load();

    let artifacts: [(&str, RgbaImage); 3] = [
        ("big-logo.png", big_logo(&font)),
        ("ukulele-icon.png", ukulele_icon()),
        ("title-text.png", title_text(&font)),
    ];

    let mut written = Vec::with_capacity(artifacts.len());
    for (name, img) in artifacts {
        let path = out_dir.join(name);
        img.save(&path)?;
        written.push(path);
    }
    Ok(written)
}

/// Full logo for the landing page: ukulele on a solid blue field, site title
/// above, "TVUS" beneath.
pub fn big_logo(font: &BrandFont) -> RgbaImage {
    let (width, height) = (600, 300);
    let mut img = RgbaImage::from_pixel(width, height, BLUE_BG);

    draw_ukulele(
        &mut img,
        Ukulele {
            center: (300, 170),
            body_radii: (60, 70),
            hole_radius: 25,
            neck: (30, 80),
            body_stroke: 3,
            detail_stroke: 2,
            string_clearance: 10,
            outline: WHITE,
            strings: WHITE,
        },
    );

    font.draw_centered(&mut img, WHITE, 300, 40, 40.0, TITLE_LINE_1);
    font.draw_centered(&mut img, WHITE, 300, 90, 40.0, TITLE_LINE_2);
    font.draw_centered(&mut img, WHITE, 300, height as i32 - 30, 60.0, "TVUS");
    img
}

/// Standalone ukulele for the songs page, on a transparent canvas.
pub fn ukulele_icon() -> RgbaImage {
    let mut img = RgbaImage::from_pixel(120, 150, TRANSPARENT);
    draw_ukulele(
        &mut img,
        Ukulele {
            center: (60, 90),
            body_radii: (35, 40),
            hole_radius: 15,
            neck: (20, 50),
            body_stroke: 2,
            detail_stroke: 2,
            string_clearance: 5,
            // Monochrome variant: outlines match the fill so the icon reads
            // as a silhouette at small sizes.
            outline: DARK_BLUE,
            strings: DARK_BLUE,
        },
    );
    img
}

/// Title banner: two text lines flanked by simple musical notes, transparent.
pub fn title_text(font: &BrandFont) -> RgbaImage {
    let width = 400u32;
    let mut img = RgbaImage::from_pixel(width, 120, TRANSPARENT);

    font.draw_centered(&mut img, WHITE, 200, 30, 32.0, TITLE_LINE_1);
    font.draw_centered(&mut img, WHITE, 200, 70, 32.0, TITLE_LINE_2);

    // Note heads with stems, two per side.
    let note_y = 100;
    for x in [30, 80, width as i32 - 80, width as i32 - 30] {
        draw_filled_ellipse_mut(&mut img, (x, note_y), 6, 6, WHITE);
        vertical_line(&mut img, x + 6, note_y - 20, note_y, 2, WHITE);
    }
    img
}

/// Geometry and palette for one ukulele rendering.
struct Ukulele {
    center: (i32, i32),
    /// Body half-width and half-height.
    body_radii: (i32, i32),
    hole_radius: i32,
    /// Neck width and height.
    neck: (i32, i32),
    body_stroke: i32,
    detail_stroke: i32,
    /// Gap between the string ends and the bottom of the body.
    string_clearance: i32,
    outline: Rgba<u8>,
    strings: Rgba<u8>,
}

/// Draw the instrument: body ellipse, sound hole, neck, four strings.
fn draw_ukulele(img: &mut RgbaImage, u: Ukulele) {
    let (cx, cy) = u.center;
    let (rx, ry) = u.body_radii;
    let (neck_w, neck_h) = u.neck;
    let neck_top = cy - ry - neck_h;

    outlined_ellipse(img, cx, cy, rx, ry, DARK_BLUE, u.outline, u.body_stroke);
    outlined_ellipse(
        img,
        cx,
        cy,
        u.hole_radius,
        u.hole_radius,
        BLUE_BG,
        u.outline,
        u.detail_stroke,
    );
    outlined_rect(
        img,
        cx - neck_w / 2,
        neck_top,
        neck_w,
        neck_h,
        DARK_BLUE,
        u.outline,
        u.detail_stroke,
    );

    // Four strings from the top of the neck down across the body.
    let spacing = neck_w / 5;
    for i in 0..4 {
        let x = cx - neck_w / 2 + spacing * (i + 1);
        vertical_line(img, x, neck_top, cy + ry - u.string_clearance, 1, u.strings);
    }
}

/// Filled ellipse with an inward outline stroke.
fn outlined_ellipse(
    img: &mut RgbaImage,
    cx: i32,
    cy: i32,
    rx: i32,
    ry: i32,
    fill: Rgba<u8>,
    outline: Rgba<u8>,
    stroke: i32,
) {
    draw_filled_ellipse_mut(img, (cx, cy), rx, ry, outline);
    draw_filled_ellipse_mut(img, (cx, cy), rx - stroke, ry - stroke, fill);
}

/// Filled rectangle with an inward outline stroke.
fn outlined_rect(
    img: &mut RgbaImage,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    fill: Rgba<u8>,
    outline: Rgba<u8>,
    stroke: i32,
) {
    draw_filled_rect_mut(img, Rect::at(x, y).of_size(w as u32, h as u32), outline);
    draw_filled_rect_mut(
        img,
        Rect::at(x + stroke, y + stroke).of_size((w - 2 * stroke) as u32, (h - 2 * stroke) as u32),
        fill,
    );
}

/// Vertical line of the given stroke width (whole-pixel columns).
fn vertical_line(img: &mut RgbaImage, x: i32, y0: i32, y1: i32, width: i32, color: Rgba<u8>) {
    for dx in 0..width {
        draw_line_segment_mut(
            img,
            ((x + dx) as f32, y0 as f32),
            ((x + dx) as f32, y1 as f32),
            color,
        );
    }
}
