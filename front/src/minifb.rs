//! Frontend using the `minifb` crate for window creation and event handling.

use std::{
    ops::ControlFlow::{self, Break},
    time::Instant,
};

use log::{debug, info};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, WindowOptions};

use lumibox_core::rig::{Rig, Settings, SurfaceRect};

use crate::{
    Dims, Frame,
    dims::SVGA_800_600,
    input::{MouseState, PointerTracker},
};

/// A lightweight wrapper of a `minifb` window.
pub struct Window {
    /// The wrapped minifb window.
    pub imp: minifb::Window,
    /// The width and height of the window.
    pub dims: Dims,
}

/// Builder for creating `Window`s.
pub struct Builder<'title> {
    pub dims: Dims,
    pub title: &'title str,
    pub target_fps: Option<u32>,
    pub opts: WindowOptions,
}

impl Default for Builder<'_> {
    fn default() -> Self {
        Self {
            dims: SVGA_800_600,
            title: "lumibox",
            target_fps: Some(60),
            opts: WindowOptions::default(),
        }
    }
}

impl<'t> Builder<'t> {
    /// Sets the width and height of the window.
    pub fn dims(mut self, dims: Dims) -> Self {
        self.dims = dims;
        self
    }
    /// Sets the title of the window.
    pub fn title(mut self, title: &'t str) -> Self {
        self.title = title;
        self
    }
    /// Sets the frame rate cap of the window. `None` means unlimited
    /// frame rate (the main loop runs as fast as possible).
    pub fn target_fps(mut self, fps: Option<u32>) -> Self {
        self.target_fps = fps;
        self
    }
    /// Sets other `minifb` options.
    pub fn options(mut self, opts: WindowOptions) -> Self {
        self.opts = opts;
        self
    }

    /// Creates the window.
    pub fn build(self) -> minifb::Result<Window> {
        let Self { dims, title, target_fps, opts } = self;
        let mut imp =
            minifb::Window::new(title, dims.0 as usize, dims.1 as usize, opts)?;
        if let Some(fps) = target_fps {
            imp.set_target_fps(fps as usize);
        }
        Ok(Window { imp, dims })
    }
}

impl Window {
    /// Returns a window builder.
    pub fn builder() -> Builder<'static> {
        Builder::default()
    }

    /// Updates the window content with pixel data from `fb`.
    ///
    /// The data is interpreted as colors in `0x00_RR_GG_BB` format.
    pub fn present(&mut self, fb: &[u32]) -> minifb::Result<()> {
        let (w, h) = self.dims;
        self.imp.update_with_buffer(fb, w as usize, h as usize)
    }

    /// Polls the current mouse state.
    ///
    /// Scrolling towards the user yields a positive wheel value.
    pub fn mouse_state(&self) -> MouseState {
        let down = |b| self.imp.get_mouse_down(b);
        MouseState {
            pos: self.imp.get_mouse_pos(MouseMode::Discard),
            left: down(MouseButton::Left),
            middle: down(MouseButton::Middle),
            right: down(MouseButton::Right),
            shift: self.imp.is_key_down(Key::LeftShift)
                || self.imp.is_key_down(Key::RightShift),
            wheel: self.imp.get_scroll_wheel().map_or(0.0, |(_, dy)| -dy),
        }
    }

    /// Runs the main loop of the program, feeding window input to `rig`
    /// and invoking the callback on each iteration to draw the next frame.
    ///
    /// The rig's surface settings are set to the window size, keeping its
    /// field of view. Pressing R resets the camera and light.
    ///
    /// The main loop stops and this function returns if:
    /// * the user closes the window via the GUI (e.g. titlebar close button);
    /// * the Esc key is pressed; or
    /// * the callback returns `ControlFlow::Break`.
    pub fn run<F>(&mut self, rig: &mut Rig, mut frame_fn: F) -> minifb::Result<()>
    where
        F: FnMut(&mut Frame<Self>) -> ControlFlow<()>,
    {
        let (w, h) = self.dims;
        let settings = Settings {
            width: w as f32,
            height: h as f32,
            ..rig.settings()
        };
        rig.set_settings(settings);
        rig.set_surface(SurfaceRect::from(settings));

        let mut buf = vec![0; w as usize * h as usize];
        let mut session = rig.session(PointerTracker::new());

        let start = Instant::now();
        let mut last = Instant::now();
        let mut frames = 0u64;
        loop {
            if self.should_quit() {
                break;
            }
            if self.imp.is_key_pressed(Key::R, KeyRepeat::No) {
                debug!("resetting camera and light");
                session.rig_mut().reset_settings();
            }
            let state = self.mouse_state();
            let (r, src) = session.parts();
            src.update(&state, r);
            session.pump();

            let frame = &mut Frame {
                t: start.elapsed(),
                dt: last.elapsed(),
                buf: &mut buf,
                win: &*self,
                rig: session.rig(),
            };
            last = Instant::now();
            if let Break(_) = frame_fn(frame) {
                break;
            }
            self.present(&buf)?;
            frames += 1;
        }
        let secs = start.elapsed().as_secs_f32();
        info!("{frames} frames in {secs:.1}s");
        Ok(())
    }

    fn should_quit(&self) -> bool {
        !self.imp.is_open() || self.imp.is_key_down(Key::Escape)
    }
}
