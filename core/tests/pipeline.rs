use lumibox_core::prelude::*;

use lumibox_core::assert_approx_eq;
use lumibox_core::color::{normalize_hex, ValueRamp};
use lumibox_core::math::color::oklch_to_srgb;
use lumibox_core::render::svg::write_svg;

const COLORS: [&str; 6] = [
    "#E41A1C",
    "rgb(55, 126, 184)",
    "hsl(120, 40%, 50%)",
    "oklch(0.7 0.15 300)",
    "orange",
    "#FF3",
];

fn default_frame() -> (Rig, Vec<Face>) {
    let rig = Rig::default();
    let cam = rig.camera(1.0..5000.0);
    let colors: Vec<ColorValue> = COLORS.iter().map(|&s| s.into()).collect();
    let faces = Scene { floor_level: 0.0 }.cube(
        Cuboid::new(1.0, 1.0, 1.0),
        &cam,
        &colors,
        &rig.light(),
    );
    (rig, faces)
}

#[test]
fn default_scene_shades_six_faces() {
    let (_, faces) = default_frame();
    assert_eq!(faces.len(), 6);

    let mut seen: Vec<_> = faces.iter().map(|f| f.index).collect();
    seen.sort();
    assert_eq!(seen, [0, 1, 2, 3, 4, 5]);

    for f in &faces {
        assert!(f.visible, "face {} not visible", f.index);
        assert!(
            (0.4..=1.0 + 1e-6).contains(&f.brightness),
            "face {}: brightness {}",
            f.index,
            f.brightness
        );
        let pts = f.points_attr();
        assert_eq!(pts.split_whitespace().count(), 4, "{pts}");
        for pair in pts.split_whitespace() {
            let (x, y) = pair.split_once(',').unwrap();
            assert!(x.parse::<f32>().unwrap().is_finite());
            assert!(y.parse::<f32>().unwrap().is_finite());
        }
        assert!(f.fill().starts_with("rgb("));
    }
    assert!(faces.windows(2).all(|w| w[0].depth <= w[1].depth));
}

#[test]
fn distinct_colors_survive_shading() {
    let (_, faces) = default_frame();
    let mut fills: Vec<_> = faces.iter().map(|f| f.fill()).collect();
    fills.sort();
    fills.dedup();
    assert_eq!(fills.len(), 6);
}

#[test]
fn default_scene_writes_svg() {
    let (rig, faces) = default_frame();
    let Settings { width, height, .. } = rig.settings();

    let mut out = String::new();
    write_svg(&mut out, (width, height), &faces).unwrap();

    assert!(out.starts_with("<svg "));
    assert!(out.trim_end().ends_with("</svg>"));
    assert_eq!(out.matches("<polygon ").count(), 6);
}

#[test]
fn interaction_changes_the_frame() {
    let (mut rig, before) = default_frame();
    let at = |x, y| PointerSample { x, y, modifier: false };

    rig.handle(Event::PointerDown(Button::Primary, at(300.0, 300.0)));
    rig.handle(Event::PointerMove(at(360.0, 280.0)));
    rig.handle(Event::PointerUp);
    rig.handle(Event::LightPointerDown(at(700.0, 60.0)));
    rig.handle(Event::PointerUp);
    assert!(rig.settings_changed());

    let cam = rig.camera(1.0..5000.0);
    let after = Scene::default().cube(
        Cuboid::new(1.0, 1.0, 1.0),
        &cam,
        &COLORS.map(ColorValue::from),
        &rig.light(),
    );
    assert_ne!(before, after);

    rig.reset_settings();
    let cam = rig.camera(1.0..5000.0);
    let reset = Scene::default().cube(
        Cuboid::new(1.0, 1.0, 1.0),
        &cam,
        &COLORS.map(ColorValue::from),
        &rig.light(),
    );
    assert_eq!(before, reset);
}

#[test]
fn color_round_trips() {
    assert_eq!(normalize_hex("#1F77B4").as_deref(), Ok("#1F77B4FF"));
    assert_eq!(normalize_hex("rgba(255,0,0,0.5)").as_deref(), Ok("#FF000080"));
    assert_eq!(normalize_hex("transparent").as_deref(), Ok("#FFFFFF00"));
    assert!(matches!(
        normalize_color("lch(50% 40 30)"),
        Err(ColorError::Unsupported(_))
    ));
}

#[test]
fn oklch_extremes() {
    assert_eq!(oklch_to_srgb(1.0, 0.0, 0.0), [255, 255, 255]);
    assert_eq!(oklch_to_srgb(0.0, 0.0, 0.0), [0, 0, 0]);
}

#[test]
fn value_ramp_endpoints() {
    let ramp = ValueRamp::new("#FF0000");
    let full = ramp.color_from_value_with_max(100.0, 100.0).unwrap();
    let zero = ramp.color_from_value_with_max(0.0, 100.0).unwrap();
    assert_eq!(full, rgba(0xFF, 0, 0, 0xFF));
    assert_eq!(zero, rgba(0xFF, 0xCC, 0xCC, 0xFF));
}

#[test]
fn unit_vectors_normalize_to_themselves() {
    for v in [
        vec3::<()>(1.0, 0.0, 0.0),
        vec3(0.0, -1.0, 0.0),
        vec3(0.6, 0.0, 0.8),
        vec3(0.36, 0.48, 0.8),
    ] {
        assert_approx_eq!(v.normalize().0, v.0);
    }
    assert_eq!(vec3::<()>(0.0, 0.0, 0.0).normalize(), vec3(0.0, 0.0, 0.0));
}
