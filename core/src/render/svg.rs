//! Formatting shaded faces for a vector drawing surface.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::math::Vec2;

use super::shade::Face;
use super::Screen;

impl Face {
    /// Returns the corners of `self` as a whitespace-separated list of
    /// `x,y` pairs, suitable for an SVG `points` attribute.
    ///
    /// # Examples
    /// ```
    /// use lumibox_core::math::{rgb, vec2};
    /// use lumibox_core::render::shade::Face;
    ///
    /// let f = Face {
    ///     index: 0,
    ///     points: [vec2(0.0, 0.0), vec2(10.0, 0.0), vec2(10.0, 2.5), vec2(0.0, 2.5)],
    ///     visible: true,
    ///     depth: 0.0,
    ///     brightness: 1.0,
    ///     color: rgb(1, 2, 3),
    /// };
    /// assert_eq!(f.points_attr(), "0,0 10,0 10,2.5 0,2.5");
    /// assert_eq!(f.fill(), "rgb(1, 2, 3)");
    /// ```
    pub fn points_attr(&self) -> String {
        let mut s = String::new();
        for (i, p) in self.points.iter().enumerate() {
            let sep = if i == 0 { "" } else { " " };
            // Writing to a String cannot fail
            let _ = write!(s, "{sep}{},{}", p.x(), p.y());
        }
        s
    }

    /// Returns the fill color of `self` as a CSS `rgb()` string.
    pub fn fill(&self) -> String {
        self.color.to_css()
    }
}

/// Writes a complete SVG document of the given size containing `faces`,
/// drawn in order.
///
/// Faces with a corner that failed to project are omitted.
pub fn write_svg(
    out: &mut impl Write,
    (width, height): (f32, f32),
    faces: &[Face],
) -> fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )?;
    for face in faces.iter().filter(|f| f.visible) {
        writeln!(
            out,
            r#"  <polygon points="{}" fill="{}"/>"#,
            face.points_attr(),
            face.fill()
        )?;
    }
    writeln!(out, "</svg>")
}

/// Writes the light direction indicator: a disk outline with a dot at the
/// position of the current light direction.
pub fn write_light_disk(
    out: &mut impl Write,
    center: Vec2<Screen>,
    radius: f32,
    dot: Vec2<Screen>,
) -> fmt::Result {
    let (cx, cy) = (center.x(), center.y());
    writeln!(
        out,
        r#"  <circle cx="{cx}" cy="{cy}" r="{radius}" fill="none" stroke="gray"/>"#
    )?;
    writeln!(
        out,
        r#"  <circle cx="{}" cy="{}" r="4" fill="orange"/>"#,
        dot.x(),
        dot.y()
    )
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::math::{rgb, vec2};

    use super::*;

    fn face(visible: bool) -> Face {
        Face {
            index: 3,
            points: [vec2(1.0, 2.0), vec2(3.5, 2.0), vec2(3.5, 4.0), vec2(1.0, 4.0)],
            visible,
            depth: -1.0,
            brightness: 0.5,
            color: rgb(10, 20, 30),
        }
    }

    #[test]
    fn document_contains_visible_faces_in_order() {
        let mut a = face(true);
        a.color = rgb(1, 1, 1);
        let faces = [a, face(false), face(true)];

        let mut out = String::new();
        write_svg(&mut out, (200.0, 100.0), &faces).unwrap();

        let lines: alloc::vec::Vec<_> = out.lines().collect();
        assert_eq!(
            lines[0],
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100" viewBox="0 0 200 100">"#
        );
        assert_eq!(
            lines[1],
            r#"  <polygon points="1,2 3.5,2 3.5,4 1,4" fill="rgb(1, 1, 1)"/>"#
        );
        assert_eq!(
            lines[2],
            r#"  <polygon points="1,2 3.5,2 3.5,4 1,4" fill="rgb(10, 20, 30)"/>"#
        );
        assert_eq!(lines[3], "</svg>");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn light_disk() {
        let mut out = String::new();
        write_light_disk(&mut out, vec2(700.0, 100.0), 60.0, vec2(658.0, 58.0))
            .unwrap();
        assert!(out.contains(r#"cx="700" cy="100" r="60""#));
        assert!(out.contains(r#"cx="658" cy="58" r="4""#));
    }
}
