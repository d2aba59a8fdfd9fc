//! Sequencing of pointer events over a [`Layout`].
//!
//! A gesture starts with a press inside the layout's hit region and then
//! follows the pointer until it is released or cancelled:
//!
//! ```text
//! Idle --press (hit)--> Active --drag--> Active --release--> Idle
//!                          \------------cancel-------------> Idle
//! ```
//!
//! Every event takes the caller's current color, so changes made to it
//! outside of the gesture are kept for the channels the layout does not pick.

use crate::{color::HsvColor, layout::Layout, math::Point};

/// The phase of a [`Gesture`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// No pointer is down on the surface.
    #[default]
    Idle,
    /// A press was accepted and the pointer is being followed.
    Active,
}

/// Tracks a single pointer gesture on a layout.
#[derive(Clone, Debug)]
pub struct Gesture<L: Layout> {
    layout: L,
    phase: Phase,
}

impl<L: Layout> Gesture<L> {
    /// Create a new, idle gesture on `layout`.
    pub fn new(layout: L) -> Self {
        Self {
            layout,
            phase: Phase::Idle,
        }
    }

    /// The layout the gesture maps positions with.
    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Replace the layout, for example after the surface was measured again.
    /// The phase is kept.
    pub fn resize(&mut self, layout: L) {
        self.layout = layout;
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true while a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    /// Handle a pointer press. If the layout accepts the position the gesture
    /// becomes active and the color at the position is returned. A press
    /// while active starts over.
    pub fn press(&mut self, position: Point, current: HsvColor) -> Option<HsvColor> {
        match self.layout.tap_color(position, current) {
            Some(color) => {
                log::trace!("gesture started at {:?}", position);
                self.phase = Phase::Active;
                Some(color)
            }
            None => {
                log::trace!("press at {:?} is outside the hit region", position);
                self.phase = Phase::Idle;
                None
            }
        }
    }

    /// Handle a pointer move. Returns the color at the position while active
    /// and `None` while idle.
    pub fn drag(&mut self, position: Point, current: HsvColor) -> Option<HsvColor> {
        match self.phase {
            Phase::Active => Some(self.layout.color_at(position, current)),
            Phase::Idle => None,
        }
    }

    /// Handle a pointer release. Returns true if a gesture was finished.
    pub fn release(&mut self) -> bool {
        let finished = self.is_active();
        if finished {
            log::trace!("gesture finished");
        }
        self.phase = Phase::Idle;
        finished
    }

    /// Abandon the gesture without emitting anything further.
    pub fn cancel(&mut self) {
        if self.is_active() {
            log::trace!("gesture cancelled");
        }
        self.phase = Phase::Idle;
    }
}
