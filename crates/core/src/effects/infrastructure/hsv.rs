//! RGB ↔ HSV conversion in the OpenCV 8-bit convention: hue in [0, 180),
//! saturation and value in [0, 255].

pub fn rgb_to_hsv([r, g, b]: [u8; 3]) -> [u8; 3] {
    let (rf, gf, bf) = (r as f32, g as f32, b as f32);
    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let v = max;
    let s = if max > 0.0 { 255.0 * delta / max } else { 0.0 };

    let h_deg = if delta == 0.0 {
        0.0
    } else if max == rf {
        60.0 * (gf - bf) / delta
    } else if max == gf {
        60.0 * (bf - rf) / delta + 120.0
    } else {
        60.0 * (rf - gf) / delta + 240.0
    };
    let h_deg = if h_deg < 0.0 { h_deg + 360.0 } else { h_deg };
    let h = ((h_deg / 2.0).round() as i32).rem_euclid(180);

    [h as u8, s.round() as u8, v.round() as u8]
}

pub fn hsv_to_rgb([h, s, v]: [u8; 3]) -> [u8; 3] {
    let h_deg = h as f32 * 2.0;
    let s = s as f32 / 255.0;
    let v = v as f32;

    let c = v * s;
    let x = c * (1.0 - ((h_deg / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (rf, gf, bf) = match h_deg as u32 / 60 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [
        (rf + m).round().clamp(0.0, 255.0) as u8,
        (gf + m).round().clamp(0.0, 255.0) as u8,
        (bf + m).round().clamp(0.0, 255.0) as u8,
    ]
}
