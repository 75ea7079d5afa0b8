//! Text rendering for brand images.
//!
//! The primary face is DejaVu Sans from the usual Debian/Ubuntu path — the
//! same font the site's CI image ships. When no candidate loads, rendering
//! falls back to a built-in 5×7 bitmap face so the generator still produces
//! legible placeholders on a bare container. This fallback is the only
//! conditional behavior in the whole image generator.

use ab_glyph::{FontVec, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};

/// Candidate font files, tried in order. Bold first — every brand label is
/// set in the bold face when it is available.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
];

/// A label face: a loaded TrueType font, or the built-in bitmap fallback.
pub enum BrandFont {
    TrueType(FontVec),
    Builtin,
}

impl BrandFont {
    /// Load the first candidate font that parses; otherwise the builtin face.
    pub fn load() -> Self {
        for path in FONT_CANDIDATES {
            if let Ok(bytes) = std::fs::read(path) {
                if let Ok(font) = FontVec::try_from_vec(bytes) {
                    return BrandFont::TrueType(font);
                }
            }
        }
        BrandFont::Builtin
    }

    /// Draw `text` centered on `(cx, cy)`, roughly `px` pixels tall.
    pub fn draw_centered(
        &self,
        img: &mut RgbaImage,
        color: Rgba<u8>,
        cx: i32,
        cy: i32,
        px: f32,
        text: &str,
    ) {
        match self {
            BrandFont::TrueType(font) => {
                let scale = PxScale::from(px);
                let (w, h) = text_size(scale, font, text);
                draw_text_mut(
                    img,
                    color,
                    cx - w as i32 / 2,
                    cy - h as i32 / 2,
                    scale,
                    font,
                    text,
                );
            }
            BrandFont::Builtin => draw_bitmap_centered(img, color, cx, cy, px, text),
        }
    }
}

/// Render `text` with the 5×7 bitmap face, centered on `(cx, cy)`.
///
/// The face is single-case: lowercase maps to the uppercase glyph, and
/// characters outside A–Z render as a blank cell (still advancing), which is
/// all the placeholder labels need.
fn draw_bitmap_centered(
    img: &mut RgbaImage,
    color: Rgba<u8>,
    cx: i32,
    cy: i32,
    px: f32,
    text: &str,
) {
    // One glyph row is 7 dots; pick a dot size that lands near the requested
    // pixel height, never below 1.
    let dot = ((px / 8.0).round() as i32).max(1);
    let advance = 6 * dot; // 5 columns + 1 column of spacing
    let count = text.chars().count() as i32;
    if count == 0 {
        return;
    }
    let total_width = count * advance - dot;
    let mut pen_x = cx - total_width / 2;
    let top = cy - (7 * dot) / 2;

    for ch in text.chars() {
        let rows = glyph_rows(ch);
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..5 {
                if bits & (0x10 >> col) == 0 {
                    continue;
                }
                fill_dot(img, pen_x + col * dot, top + row as i32 * dot, dot, color);
            }
        }
        pen_x += advance;
    }
}

fn fill_dot(img: &mut RgbaImage, x: i32, y: i32, dot: i32, color: Rgba<u8>) {
    for dy in 0..dot {
        for dx in 0..dot {
            let px = x + dx;
            let py = y + dy;
            if px >= 0 && py >= 0 && (px as u32) < img.width() && (py as u32) < img.height() {
                img.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

/// 5×7 glyph bitmaps, MSB-of-5 is the leftmost column.
fn glyph_rows(ch: char) -> [u8; 7] {
    match ch.to_ascii_uppercase() {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x1B, 0x11],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        _ => [0; 7],
    }
}
