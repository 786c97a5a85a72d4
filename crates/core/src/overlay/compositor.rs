//! Masked overlay compositing: scale the overlay frame down, drop its
//! near-black background, and blit what remains around the click point.

use image::imageops::{self, FilterType};
use image::RgbImage;

use crate::shared::frame::Frame;
use crate::shared::point::Point;

/// Scales a frame to half size with linear filtering.
pub fn downscale_half(frame: &Frame) -> Frame {
    let (w, h) = (frame.width(), frame.height());
    let (hw, hh) = ((w / 2).max(1), (h / 2).max(1));

    let img = RgbImage::from_raw(w, h, frame.data().to_vec())
        .expect("frame buffer matches its dimensions");
    let half = imageops::resize(&img, hw, hh, FilterType::Triangle);
    Frame::new(half.into_raw(), hw, hh, frame.index())
}

/// Composites `overlay` onto `frame`, centered on `anchor`.
///
/// Placement is clamped so the overlay rectangle stays inside the frame;
/// an overlay larger than the frame is cropped rather than rejected.
/// Pixels with every channel at or below `threshold` count as background
/// and are skipped.
pub fn composite_masked(frame: &mut Frame, overlay: &Frame, anchor: Point, threshold: u8) {
    let (fw, fh) = (frame.width() as i32, frame.height() as i32);
    let (ow, oh) = (overlay.width() as i32, overlay.height() as i32);

    let x0 = (anchor.x - ow / 2).clamp(0, (fw - ow).max(0));
    let y0 = (anchor.y - oh / 2).clamp(0, (fh - oh).max(0));

    for oy in 0..oh.min(fh - y0) {
        for ox in 0..ow.min(fw - x0) {
            let px = overlay.rgb(ox as u32, oy as u32);
            if px[0] <= threshold && px[1] <= threshold && px[2] <= threshold {
                continue;
            }
            frame.set_rgb((x0 + ox) as u32, (y0 + oy) as u32, px);
        }
    }
}
