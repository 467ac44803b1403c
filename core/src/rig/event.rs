//! Normalized input events and event sources.

use log::debug;

use super::Rig;

/// Pointer button, or the kind of touch that stands in for one.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Button {
    /// Usually the left mouse button, or a single touch.
    Primary,
    /// Usually the middle mouse button.
    Auxiliary,
    /// Usually the right mouse button.
    Secondary,
}

/// A pointer position in device coordinates, produced by an input adapter
/// from a mouse or touch sample.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    /// Whether the hemisphere-selecting modifier key is held.
    pub modifier: bool,
}

/// An input event consumed by the [`Rig`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Event {
    /// A button was pressed over the drawing surface.
    PointerDown(Button, PointerSample),
    /// A button was pressed over the light direction disk.
    LightPointerDown(PointerSample),
    /// The pointer moved.
    PointerMove(PointerSample),
    /// A button was released.
    PointerUp,
    /// The pointer left the window.
    PointerLeave,
    /// The wheel turned; positive values zoom out.
    Wheel(f32),
}

/// A source of input events that must be attached before it delivers
/// events and detached when no longer needed.
pub trait EventSource {
    /// Starts listening for input.
    fn attach(&mut self);
    /// Stops listening for input.
    fn detach(&mut self);
    /// Returns the next pending event, if any.
    fn poll(&mut self) -> Option<Event>;
}

/// An attached event source feeding a rig.
///
/// Created with [`Rig::session`]. The source is detached when the session
/// is dropped, whichever way the owning scope exits.
#[derive(Debug)]
pub struct Session<'r, S: EventSource> {
    rig: &'r mut Rig,
    source: S,
}

impl Rig {
    /// Attaches `source` and returns a session delivering its events to
    /// `self`.
    pub fn session<S: EventSource>(&mut self, mut source: S) -> Session<'_, S> {
        source.attach();
        debug!("event source attached");
        Session { rig: self, source }
    }
}

impl<S: EventSource> Session<'_, S> {
    /// Delivers all pending events to the rig, returning their number.
    pub fn pump(&mut self) -> usize {
        let mut n = 0;
        while let Some(ev) = self.source.poll() {
            self.rig.handle(ev);
            n += 1;
        }
        n
    }

    /// Returns the rig fed by this session.
    pub fn rig(&self) -> &Rig {
        self.rig
    }

    /// Returns the rig fed by this session.
    pub fn rig_mut(&mut self) -> &mut Rig {
        self.rig
    }

    /// Returns the rig and the event source, for feeding the source with
    /// input that depends on rig state.
    pub fn parts(&mut self) -> (&Rig, &mut S) {
        (self.rig, &mut self.source)
    }
}

impl<S: EventSource> Drop for Session<'_, S> {
    fn drop(&mut self) {
        self.source.detach();
        self.rig.release();
        debug!("event source detached");
    }
}
