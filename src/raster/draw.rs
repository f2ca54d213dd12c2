use super::Mask;

/// Fills every pixel whose center lies within `radius` of `center`.
///
/// Pixels falling outside the mask are skipped. A negative radius fills
/// nothing.
pub fn fill_disk(mask: &mut Mask, center: (i64, i64), radius: f64, value: u8) {
    if radius < 0.0 {
        return;
    }
    let reach = radius.ceil() as i64;
    let r_sq = radius * radius;
    for x in (center.0 - reach)..=(center.0 + reach) {
        for y in (center.1 - reach)..=(center.1 + reach) {
            let dx = (x - center.0) as f64;
            let dy = (y - center.1) as f64;
            if dx * dx + dy * dy <= r_sq {
                mask.set_clipped(x, y, value);
            }
        }
    }
}

/// Rasterizes the line from `p0` to `p1` with Bresenham's algorithm.
///
/// Both endpoints are included. Pixels falling outside the mask are
/// skipped.
pub fn draw_line(mask: &mut Mask, p0: (i64, i64), p1: (i64, i64), value: u8) {
    let (mut x, mut y) = p0;
    let dx = (p1.0 - p0.0).abs();
    let dy = -(p1.1 - p0.1).abs();
    let sx = if p0.0 < p1.0 { 1 } else { -1 };
    let sy = if p0.1 < p1.1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        mask.set_clipped(x, y, value);
        if x == p1.0 && y == p1.1 {
            break;
        }
        let doubled = 2 * err;
        if doubled >= dy {
            err += dy;
            x += sx;
        }
        if doubled <= dx {
            err += dx;
            y += sy;
        }
    }
}
