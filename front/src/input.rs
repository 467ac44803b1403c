//! Adapting raw mouse and touch input to rig events.

use std::collections::VecDeque;

use log::trace;

use lumibox_core::rig::{Button, Event, EventSource, PointerSample, Rig};

/// A snapshot of the mouse as polled from a windowing library.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MouseState {
    /// Position in device pixels, or `None` if outside the window.
    pub pos: Option<(f32, f32)>,
    /// Whether the left button is down.
    pub left: bool,
    /// Whether the middle button is down.
    pub middle: bool,
    /// Whether the right button is down.
    pub right: bool,
    /// Whether the hemisphere modifier key (shift) is down.
    pub shift: bool,
    /// Wheel movement since the previous snapshot; positive zooms out.
    pub wheel: f32,
}

/// The phase of a touch sample.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
}

/// Converts polled mouse snapshots and touch samples to rig [`Event`]s.
///
/// Button transitions become pointer down and up events, position changes
/// become moves, and the mouse leaving the window ends any drag. Presses on
/// the rig's light direction disk become [`Event::LightPointerDown`].
///
/// Input is only recorded while attached; see [`Rig::session`].
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    prev: MouseState,
    queue: VecDeque<Event>,
    attached: bool,
}

impl PointerTracker {
    /// Creates a detached tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the events implied by the change from the previous mouse
    /// snapshot to `state`.
    pub fn update(&mut self, state: &MouseState, rig: &Rig) {
        if !self.attached {
            return;
        }
        let prev = self.prev;
        self.prev = *state;

        let Some((x, y)) = state.pos else {
            if prev.pos.is_some() {
                self.queue.push_back(Event::PointerLeave);
            }
            return;
        };
        let sample = PointerSample { x, y, modifier: state.shift };

        let pressed = [
            (state.left && !prev.left, Button::Primary),
            (state.middle && !prev.middle, Button::Auxiliary),
            (state.right && !prev.right, Button::Secondary),
        ];
        for (_, btn) in pressed.into_iter().filter(|(p, _)| *p) {
            self.queue.push_back(if rig.hits_light_disk(x, y) {
                Event::LightPointerDown(sample)
            } else {
                Event::PointerDown(btn, sample)
            });
        }
        if prev.pos != state.pos {
            self.queue.push_back(Event::PointerMove(sample));
        }

        let held = |m: &MouseState| m.left || m.middle || m.right;
        if held(&prev) && !held(state) {
            self.queue.push_back(Event::PointerUp);
        }
        if state.wheel != 0.0 {
            self.queue.push_back(Event::Wheel(state.wheel));
        }
    }

    /// Records the event implied by a touch sample. Only the first touch
    /// point is used; samples without points are ignored unless ending.
    pub fn touch(
        &mut self,
        phase: TouchPhase,
        points: &[(f32, f32)],
        modifier: bool,
        rig: &Rig,
    ) {
        if !self.attached {
            return;
        }
        let first = points
            .first()
            .map(|&(x, y)| PointerSample { x, y, modifier });

        let ev = match (phase, first) {
            (TouchPhase::End, _) => Event::PointerUp,
            (TouchPhase::Start, Some(s)) if rig.hits_light_disk(s.x, s.y) => {
                Event::LightPointerDown(s)
            }
            (TouchPhase::Start, Some(s)) => Event::PointerDown(Button::Primary, s),
            (TouchPhase::Move, Some(s)) => Event::PointerMove(s),
            (_, None) => {
                trace!("ignoring touch {phase:?} without points");
                return;
            }
        };
        self.queue.push_back(ev);
    }
}

impl EventSource for PointerTracker {
    fn attach(&mut self) {
        self.attached = true;
        self.prev = MouseState::default();
    }

    fn detach(&mut self) {
        self.attached = false;
        self.queue.clear();
    }

    fn poll(&mut self) -> Option<Event> {
        self.queue.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use lumibox_core::rig::Mode;

    use super::*;

    fn mouse(x: f32, y: f32) -> MouseState {
        MouseState {
            pos: Some((x, y)),
            ..MouseState::default()
        }
    }

    fn drain(t: &mut PointerTracker) -> Vec<Event> {
        std::iter::from_fn(|| t.poll()).collect()
    }

    fn at(x: f32, y: f32) -> PointerSample {
        PointerSample { x, y, modifier: false }
    }

    #[test]
    fn detached_tracker_records_nothing() {
        let rig = Rig::default();
        let mut t = PointerTracker::new();
        t.update(&MouseState { left: true, ..mouse(1.0, 1.0) }, &rig);
        t.touch(TouchPhase::Start, &[(1.0, 1.0)], false, &rig);
        assert_eq!(t.poll(), None);
    }

    #[test]
    fn mouse_drag_produces_down_move_up() {
        let rig = Rig::default();
        let mut t = PointerTracker::new();
        t.attach();

        t.update(&mouse(10.0, 10.0), &rig);
        t.update(&MouseState { left: true, ..mouse(10.0, 10.0) }, &rig);
        t.update(&MouseState { left: true, ..mouse(15.0, 12.0) }, &rig);
        t.update(&mouse(15.0, 12.0), &rig);

        assert_eq!(
            drain(&mut t),
            [
                Event::PointerMove(at(10.0, 10.0)),
                Event::PointerDown(Button::Primary, at(10.0, 10.0)),
                Event::PointerMove(at(15.0, 12.0)),
                Event::PointerUp,
            ]
        );
    }

    #[test]
    fn right_and_middle_buttons_map_to_pan_buttons() {
        let rig = Rig::default();
        let mut t = PointerTracker::new();
        t.attach();
        t.update(&mouse(5.0, 5.0), &rig);
        drain(&mut t);

        t.update(&MouseState { right: true, ..mouse(5.0, 5.0) }, &rig);
        t.update(&MouseState { middle: true, ..mouse(5.0, 5.0) }, &rig);
        assert_eq!(
            drain(&mut t),
            [
                Event::PointerDown(Button::Secondary, at(5.0, 5.0)),
                Event::PointerDown(Button::Auxiliary, at(5.0, 5.0)),
            ]
        );
    }

    #[test]
    fn press_on_light_disk_steers_light() {
        let rig = Rig::default();
        let mut t = PointerTracker::new();
        t.attach();
        let shifted = MouseState {
            left: true,
            shift: true,
            ..mouse(700.0, 100.0)
        };
        t.update(&shifted, &rig);
        let evs = drain(&mut t);
        assert_eq!(
            evs[0],
            Event::LightPointerDown(PointerSample {
                x: 700.0,
                y: 100.0,
                modifier: true
            })
        );
    }

    #[test]
    fn leaving_window_and_wheel() {
        let rig = Rig::default();
        let mut t = PointerTracker::new();
        t.attach();
        t.update(&MouseState { wheel: -2.0, ..mouse(1.0, 1.0) }, &rig);
        t.update(&MouseState::default(), &rig);
        t.update(&MouseState::default(), &rig);
        assert_eq!(
            drain(&mut t),
            [
                Event::PointerMove(at(1.0, 1.0)),
                Event::Wheel(-2.0),
                Event::PointerLeave,
            ]
        );
    }

    #[test]
    fn touch_uses_first_point() {
        let rig = Rig::default();
        let mut t = PointerTracker::new();
        t.attach();
        t.touch(TouchPhase::Start, &[(3.0, 4.0), (50.0, 60.0)], false, &rig);
        t.touch(TouchPhase::Move, &[], false, &rig);
        t.touch(TouchPhase::Move, &[(6.0, 8.0)], false, &rig);
        t.touch(TouchPhase::End, &[], false, &rig);
        assert_eq!(
            drain(&mut t),
            [
                Event::PointerDown(Button::Primary, at(3.0, 4.0)),
                Event::PointerMove(at(6.0, 8.0)),
                Event::PointerUp,
            ]
        );
    }

    #[test]
    fn session_feeds_tracked_input_to_rig() {
        let mut rig = Rig::default();
        {
            let mut session = rig.session(PointerTracker::new());
            let (rig, src) = session.parts();
            src.update(&mouse(100.0, 100.0), rig);
            src.update(&MouseState { left: true, ..mouse(100.0, 100.0) }, rig);
            src.update(&MouseState { left: true, ..mouse(140.0, 100.0) }, rig);
            session.pump();
            assert_eq!(session.rig().mode(), Mode::Orbiting);
        }
        assert_eq!(rig.mode(), Mode::Idle);
        assert!(rig.settings_changed());
    }
}
