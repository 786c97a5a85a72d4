//! Software drawing primitives for frame chrome: lines, rectangle
//! outlines, and bitmap-font text.

pub mod font;

use crate::shared::frame::Frame;
use crate::shared::point::Point;
use crate::shared::region::Region;

/// Writes one pixel, ignoring coordinates outside the frame.
#[inline]
pub fn put_pixel(frame: &mut Frame, x: i32, y: i32, color: [u8; 3]) {
    if x < 0 || y < 0 || x >= frame.width() as i32 || y >= frame.height() as i32 {
        return;
    }
    frame.set_rgb(x as u32, y as u32, color);
}

/// Stamps a `thickness`-sized square anchored at (x, y).
#[inline]
fn stamp(frame: &mut Frame, x: i32, y: i32, color: [u8; 3], thickness: i32) {
    for dy in 0..thickness.max(1) {
        for dx in 0..thickness.max(1) {
            put_pixel(frame, x + dx, y + dy, color);
        }
    }
}

/// Bresenham line from `a` to `b`.
pub fn line(frame: &mut Frame, a: Point, b: Point, color: [u8; 3], thickness: i32) {
    let (mut x, mut y) = (a.x, a.y);
    let dx = (b.x - a.x).abs();
    let sx = if a.x < b.x { 1 } else { -1 };
    let dy = -(b.y - a.y).abs();
    let sy = if a.y < b.y { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        stamp(frame, x, y, color, thickness);
        if x == b.x && y == b.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Rectangle outline drawn just inside the region's edges.
pub fn rect_outline(frame: &mut Frame, region: &Region, color: [u8; 3], thickness: i32) {
    let t = thickness.max(1);
    for i in 0..t {
        for x in region.x..region.right() {
            put_pixel(frame, x, region.y + i, color);
            put_pixel(frame, x, region.bottom() - 1 - i, color);
        }
        for y in region.y..region.bottom() {
            put_pixel(frame, region.x + i, y, color);
            put_pixel(frame, region.right() - 1 - i, y, color);
        }
    }
}

/// Renders `text` at (x, y) with the 5x7 font, `scale` pixels per font
/// pixel, over a one-pixel black drop shadow for contrast.
pub fn text(frame: &mut Frame, x: i32, y: i32, text: &str, color: [u8; 3], scale: i32) {
    let scale = scale.max(1);
    let mut cursor = x;
    for ch in text.chars() {
        if let Some(rows) = font::glyph(ch) {
            draw_glyph(frame, cursor + 1, y + 1, &rows, [0, 0, 0], scale);
            draw_glyph(frame, cursor, y, &rows, color, scale);
        }
        cursor += font::ADVANCE * scale;
    }
}

fn draw_glyph(frame: &mut Frame, x: i32, y: i32, rows: &[u8; 7], color: [u8; 3], scale: i32) {
    for (ry, bits) in rows.iter().enumerate() {
        for rx in 0..font::GLYPH_WIDTH {
            if bits & (1 << (font::GLYPH_WIDTH - 1 - rx)) != 0 {
                stamp(
                    frame,
                    x + rx * scale,
                    y + ry as i32 * scale,
                    color,
                    scale,
                );
            }
        }
    }
}
