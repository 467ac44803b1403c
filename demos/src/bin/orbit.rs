//! Interactive box viewer.
//!
//! Drag with the left button to orbit, with the right or middle button to
//! pan, and scroll to zoom. Drag on the disk in the upper right corner to
//! move the light; hold shift to light the boxes from behind. R resets.

use std::ops::ControlFlow::Continue;

use lb::prelude::*;
use lb_front::{
    dims::SVGA_800_600,
    minifb::Window,
    raster::{clear, draw_faces, fill_disk},
};

const FACE_COLORS: [&str; 6] = [
    "#E41A1C",
    "rgb(55, 126, 184)",
    "hsl(120, 40%, 50%)",
    "oklch(0.7 0.15 300)",
    "orange",
    "#FF3",
];

fn main() {
    env_logger::init();
    eprintln!("Drag to orbit, right-drag to pan, scroll to zoom, R to reset");

    let mut win = Window::builder()
        .title("lumibox//orbit")
        .dims(SVGA_800_600)
        .build()
        .expect("should create window");

    let colors = FACE_COLORS.map(ColorValue::from);
    let scene = Scene { floor_level: -60.0 };
    let boxes = [
        Cuboid::new(100.0, 80.0, 60.0).at(vec3(152.0, 0.0, 79.0)),
        Cuboid::new(40.0, 140.0, 40.0).at(vec3(260.0, 0.0, 40.0)),
        Cuboid::new(60.0, 30.0, 120.0).at(vec3(40.0, 0.0, 140.0)),
    ];

    let mut rig = Rig::default();
    win.run(&mut rig, |frame| {
        let dims = (frame.win.dims.0 as usize, frame.win.dims.1 as usize);
        let rig = frame.rig;
        let cam = rig.camera(1.0..5000.0);
        let light = rig.light();

        let mut faces: Vec<_> = boxes
            .iter()
            .flat_map(|&b| scene.cube(b, &cam, &colors, &light))
            .collect();
        faces.sort_by(|a, b| a.depth.total_cmp(&b.depth));

        clear(frame.buf, rgb(0xF4, 0xF4, 0xF0));
        draw_faces(frame.buf, dims, &faces);

        let (center, r) = (rig.light_disk_center(), rig.light_disk_radius());
        fill_disk(frame.buf, dims, center, r, 0x80_80_80);
        fill_disk(frame.buf, dims, center, r - 1.5, 0xE0_E0_E0);
        fill_disk(frame.buf, dims, rig.light_disk_dot(), 4.0, 0xFF_A5_00);

        Continue(())
    })
    .expect("should present frames");
}
