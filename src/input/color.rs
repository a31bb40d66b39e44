/// Converts one RGB pixel to 8-bit HSV: H in [0,180), S and V in [0,255].
pub fn rgb_to_hsv8(r: u8, g: u8, b: u8) -> [u8; 3] {
    let rf = r as f32;
    let gf = g as f32;
    let bf = b as f32;
    let v = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let diff = v - min;

    let s = if v > 0.0 { 255.0 * diff / v } else { 0.0 };

    let h = if diff == 0.0 {
        0.0
    } else {
        let mut deg = if v == rf {
            60.0 * (gf - bf) / diff
        } else if v == gf {
            120.0 + 60.0 * (bf - rf) / diff
        } else {
            240.0 + 60.0 * (rf - gf) / diff
        };
        if deg < 0.0 {
            deg += 360.0;
        }
        deg * 0.5
    };

    let h = h.round();
    // 359.x degrees rounds up to 180, which wraps to red.
    let h = if h >= 180.0 { 0.0 } else { h };
    [h as u8, s.round() as u8, v as u8]
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/color.rs"]
mod tests;
