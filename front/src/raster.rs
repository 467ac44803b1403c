//! Filling shaded faces into a pixel buffer.
//!
//! Polygons are converted to horizontal spans one scanline at a time. A
//! pixel is covered if its center lies inside the polygon by the even-odd
//! rule, so adjacent faces sharing an edge neither overlap nor leave gaps.

use lumibox_core::math::{Color3, Vec2};
use lumibox_core::render::shade::Face;
use lumibox_core::render::Screen;

/// Fills every pixel of `buf` with `color`.
pub fn clear(buf: &mut [u32], color: Color3) {
    buf.fill(color.to_rgb_u32());
}

/// Fills the polygon with corners `pts` into `buf`, a row-major buffer of
/// width `w` and height `h`.
///
/// Polygons with fewer than three corners or any non-finite corner are not
/// drawn. Parts outside the buffer are clipped.
pub fn fill_polygon(
    buf: &mut [u32],
    (w, h): (usize, usize),
    pts: &[Vec2<Screen>],
    color: u32,
) {
    if pts.len() < 3 || !pts.iter().all(|p| p.is_finite()) {
        return;
    }
    let (y_min, y_max) = pts
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.y()), hi.max(p.y()))
        });
    let rows = to_px(y_min).min(h)..to_px(y_max).min(h);

    let mut xs = Vec::with_capacity(pts.len());
    for y in rows {
        let yc = y as f32 + 0.5;
        xs.clear();
        for (a, b) in pts.iter().zip(pts.iter().cycle().skip(1)) {
            let (y0, y1) = (a.y(), b.y());
            if (y0 <= yc) != (y1 <= yc) {
                let t = (yc - y0) / (y1 - y0);
                xs.push(a.x() + t * (b.x() - a.x()));
            }
        }
        xs.sort_by(f32::total_cmp);

        let row = &mut buf[y * w..(y + 1) * w];
        for span in xs.chunks_exact(2) {
            let x0 = to_px(span[0]).min(w);
            let x1 = to_px(span[1]).min(w);
            if x0 < x1 {
                row[x0..x1].fill(color);
            }
        }
    }
}

/// Draws the visible `faces` into `buf` in order, nearest last.
pub fn draw_faces(buf: &mut [u32], dims: (usize, usize), faces: &[Face]) {
    for f in faces.iter().filter(|f| f.visible) {
        fill_polygon(buf, dims, &f.points, f.color.to_rgb_u32());
    }
}

/// Fills a disk of the given center and radius.
pub fn fill_disk(
    buf: &mut [u32],
    (w, h): (usize, usize),
    center: Vec2<Screen>,
    radius: f32,
    color: u32,
) {
    if !center.is_finite() || !(radius > 0.0) {
        return;
    }
    let (cx, cy) = (center.x(), center.y());
    let rows = to_px(cy - radius).min(h)..to_px(cy + radius).min(h);
    for y in rows {
        let dy = y as f32 + 0.5 - cy;
        let half = radius * radius - dy * dy;
        if half < 0.0 {
            continue;
        }
        let half = half.sqrt();
        let x0 = to_px(cx - half).min(w);
        let x1 = to_px(cx + half).min(w);
        if x0 < x1 {
            buf[y * w + x0..y * w + x1].fill(color);
        }
    }
}

/// Returns the index of the first pixel whose center is at or after `x`,
/// saturating at zero.
fn to_px(x: f32) -> usize {
    // Float-to-int casts saturate; negative values become zero
    (x - 0.5).ceil() as usize
}

#[cfg(test)]
mod tests {
    use lumibox_core::math::{rgb, vec2};

    use super::*;

    const W: usize = 8;
    const H: usize = 6;

    fn count(buf: &[u32], c: u32) -> usize {
        buf.iter().filter(|&&p| p == c).count()
    }

    #[test]
    fn axis_aligned_rectangle() {
        let mut buf = [0; W * H];
        let pts = [vec2(1.0, 1.0), vec2(5.0, 1.0), vec2(5.0, 4.0), vec2(1.0, 4.0)];
        fill_polygon(&mut buf, (W, H), &pts, 7);

        assert_eq!(count(&buf, 7), 4 * 3);
        assert_eq!(buf[W + 1], 7);
        assert_eq!(buf[3 * W + 4], 7);
        assert_eq!(buf[W + 5], 0);
        assert_eq!(buf[4 * W + 1], 0);
    }

    #[test]
    fn adjacent_polygons_do_not_overlap() {
        let mut buf = [0; W * H];
        let left = [vec2(0.0, 0.0), vec2(3.5, 0.0), vec2(3.5, 6.0), vec2(0.0, 6.0)];
        let right = [vec2(3.5, 0.0), vec2(8.0, 0.0), vec2(8.0, 6.0), vec2(3.5, 6.0)];
        fill_polygon(&mut buf, (W, H), &left, 1);
        fill_polygon(&mut buf, (W, H), &right, 2);

        assert_eq!(count(&buf, 0), 0);
        assert_eq!(count(&buf, 1), 3 * H);
        assert_eq!(count(&buf, 2), 5 * H);
    }

    #[test]
    fn polygons_are_clipped_to_buffer() {
        let mut buf = [0; W * H];
        let pts = [vec2(-10.0, -10.0), vec2(100.0, -10.0), vec2(100.0, 100.0), vec2(-10.0, 100.0)];
        fill_polygon(&mut buf, (W, H), &pts, 3);
        assert_eq!(count(&buf, 3), W * H);
    }

    #[test]
    fn degenerate_polygons_are_skipped() {
        let mut buf = [0; W * H];
        fill_polygon(&mut buf, (W, H), &[vec2(0.0, 0.0), vec2(5.0, 5.0)], 1);
        let nan = [vec2(0.0, 0.0), vec2(f32::NAN, 5.0), vec2(5.0, 0.0)];
        fill_polygon(&mut buf, (W, H), &nan, 1);
        assert_eq!(count(&buf, 0), W * H);
    }

    #[test]
    fn faces_drawn_in_order_and_hidden_skipped() {
        let quad = [vec2(0.0, 0.0), vec2(8.0, 0.0), vec2(8.0, 6.0), vec2(0.0, 6.0)];
        let face = |color, visible| Face {
            index: 0,
            points: quad,
            visible,
            depth: 0.0,
            brightness: 1.0,
            color,
        };
        let mut buf = [0; W * H];
        clear(&mut buf, rgb(0, 0, 9));
        draw_faces(
            &mut buf,
            (W, H),
            &[face(rgb(1, 0, 0), true), face(rgb(0, 2, 0), true), face(rgb(3, 3, 3), false)],
        );
        assert_eq!(count(&buf, 0x00_00_02_00), W * H);
    }

    #[test]
    fn disk() {
        let mut buf = [0; W * H];
        fill_disk(&mut buf, (W, H), vec2(4.0, 3.0), 2.0, 5);
        assert_eq!(buf[2 * W + 3], 5);
        assert_eq!(buf[0], 0);
        assert!(count(&buf, 5) >= 8 && count(&buf, 5) <= 16);
    }
}
