//! Replays a scripted drag, pan, zoom, and light interaction, then writes
//! the resulting scene as an SVG document.
//!
//! Usage: `svg [OUTPUT]`. Writes to stdout if no output file is given.

use std::{collections::VecDeque, env, fs, io, io::Write as _};

use log::info;

use lb::color::ValueRamp;
use lb::prelude::*;
use lb::render::svg::{write_light_disk, write_svg};
use lb::rig::EventSource;

/// Plays back a fixed sequence of events.
struct Script(VecDeque<Event>);

impl EventSource for Script {
    fn attach(&mut self) {
        info!("replaying {} events", self.0.len());
    }
    fn detach(&mut self) {}
    fn poll(&mut self) -> Option<Event> {
        self.0.pop_front()
    }
}

fn script() -> Script {
    let at = |x, y| PointerSample { x, y, modifier: false };
    Script(VecDeque::from([
        // Orbit a little to the left and down
        Event::PointerDown(Button::Primary, at(400.0, 300.0)),
        Event::PointerMove(at(380.0, 310.0)),
        Event::PointerMove(at(360.0, 320.0)),
        Event::PointerUp,
        // Pan right
        Event::PointerDown(Button::Secondary, at(400.0, 300.0)),
        Event::PointerMove(at(370.0, 300.0)),
        Event::PointerUp,
        // Zoom in
        Event::Wheel(-1.0),
        Event::Wheel(-1.0),
        // Light from the upper right
        Event::LightPointerDown(at(730.0, 70.0)),
        Event::PointerUp,
    ]))
}

fn main() -> io::Result<()> {
    env_logger::init();

    let mut rig = Rig::default();
    rig.session(script()).pump();

    let cam = rig.camera(1.0..5000.0);
    let light = rig.light();
    let scene = Scene { floor_level: -60.0 };

    // A row of boxes with heights ramping the base color from pale to full
    let heights = [40.0, 80.0, 120.0, 160.0];
    let ramp = ValueRamp::new("steelblue");
    let mut faces = Vec::new();
    for (i, &h) in heights.iter().enumerate() {
        let color = ramp
            .color_from_value_with_max(h, 160.0)
            .unwrap_or(rgba(0x1F, 0x77, 0xB4, 0xFF));
        let hex = color.to_string();
        let colors = [ColorValue::from(hex.as_str()); 6];

        let cuboid = Cuboid::new(60.0, h, 60.0).at(vec3(80.0 * i as f32 + 30.0, 0.0, 79.0));
        faces.extend(scene.cube(cuboid, &cam, &colors, &light));
    }
    // Draw order across boxes follows the depth of each face
    faces.sort_by(|a, b| a.depth.total_cmp(&b.depth));

    let Settings { width, height, .. } = rig.settings();
    let mut doc = String::new();
    write_svg(&mut doc, (width, height), &faces).map_err(io::Error::other)?;
    // Insert the light indicator before the closing tag
    let end = doc.rfind("</svg>").unwrap_or(doc.len());
    let mut disk = String::new();
    write_light_disk(
        &mut disk,
        rig.light_disk_center(),
        rig.light_disk_radius(),
        rig.light_disk_dot(),
    )
    .map_err(io::Error::other)?;
    doc.insert_str(end, &disk);

    match env::args().nth(1) {
        Some(path) => {
            fs::write(&path, doc)?;
            info!("wrote {path}");
        }
        None => io::stdout().write_all(doc.as_bytes())?,
    }
    Ok(())
}
