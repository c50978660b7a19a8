//! Stroke tracking and the pause-then-submit debounce for one drawing surface.
//!
//! [`DrawSession`] owns no browser objects. Every operation returns the
//! [`Effect`]s the host has to perform, in order. The only resource it holds
//! is the handle of the pending auto-submit timer, generic so the browser
//! client can store a real timeout and tests can store a plain id.
//!
//! A session is armed when a stroke starts and disarmed when the stroke ends
//! and the submit timer is scheduled. Ending again without a new start (a
//! stray pointer-up elsewhere on the page) schedules nothing, so at most one
//! timer is ever outstanding.

#[cfg(test)]
#[path = "draw_test.rs"]
mod draw_test;

use crate::geometry::{client_to_canvas, Rect, SurfaceSize};
use crate::Point;

/// Inactivity pause after which a finished drawing submits itself.
pub const PAUSE_SUBMIT_MS: u32 = 1000;
/// How long the "submitted" banner stays open.
pub const BANNER_FLASH_MS: u32 = 1500;
pub const BANNER_OPEN_HEIGHT: &str = "2em";
pub const BANNER_CLOSED_HEIGHT: &str = "0";

pub const STROKE_COLOR: &str = "black";
pub const STROKE_WIDTH: f64 = 1.0;

pub const PNG_MIME: &str = "image/png";
/// Name offered for the client-side export. The content is PNG.
pub const DOWNLOAD_FILE_NAME: &str = "file.jpeg";
/// `data-initialimage` value the server renders when the item has no stored drawing.
pub const NO_IMAGE_SENTINEL: &str = "data:image/png;base64,None";

/// Returns the data URI to pre-populate the canvas with, if any.
pub fn initial_image(attribute: Option<&str>) -> Option<&str> {
    let value = attribute?.trim();
    if value.is_empty() || value == NO_IMAGE_SENTINEL {
        return None;
    }
    Some(value)
}

#[derive(Debug, PartialEq)]
pub enum Effect<H> {
    /// Drop a timer that has not fired yet.
    CancelTimer(H),
    /// Let go of a timer that has already fired.
    ReleaseTimer(H),
    BeginPath(Point),
    LineTo(Point),
    ClosePath,
    /// Start a timer and hand its handle back through [`DrawSession::arm_submit`].
    ScheduleSubmit { delay_ms: u32 },
    EraseSurface,
    Submit,
}

#[derive(Debug)]
pub struct DrawSession<H> {
    size: SurfaceSize,
    rect: Option<Rect>,
    drawing: bool,
    armed: bool,
    pending: Option<H>,
}

impl<H> DrawSession<H> {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            rect: None,
            drawing: false,
            armed: false,
            pending: None,
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn has_pending_submit(&self) -> bool {
        self.pending.is_some()
    }

    /// `rect` is measured fresh for every stroke so layout changes between strokes are honored.
    pub fn stroke_start(&mut self, client: Point, rect: Rect) -> Vec<Effect<H>> {
        let Some(point) = client_to_canvas(client, rect, self.size) else {
            return Vec::new();
        };
        let mut effects = Vec::with_capacity(2);
        if let Some(timer) = self.pending.take() {
            effects.push(Effect::CancelTimer(timer));
        }
        self.drawing = true;
        self.armed = true;
        self.rect = Some(rect);
        effects.push(Effect::BeginPath(point));
        effects
    }

    pub fn stroke_extend(&mut self, client: Point) -> Vec<Effect<H>> {
        if !self.drawing {
            return Vec::new();
        }
        let Some(rect) = self.rect else {
            return Vec::new();
        };
        match client_to_canvas(client, rect, self.size) {
            Some(point) => vec![Effect::LineTo(point)],
            None => Vec::new(),
        }
    }

    pub fn stroke_end(&mut self) -> Vec<Effect<H>> {
        let mut effects = Vec::with_capacity(2);
        if self.drawing {
            self.drawing = false;
            effects.push(Effect::ClosePath);
        }
        if self.armed && self.pending.is_none() {
            self.armed = false;
            effects.push(Effect::ScheduleSubmit {
                delay_ms: PAUSE_SUBMIT_MS,
            });
        }
        effects
    }

    /// Stores the timer created for [`Effect::ScheduleSubmit`].
    ///
    /// Returns a previously stored handle, which the caller must cancel.
    pub fn arm_submit(&mut self, timer: H) -> Option<H> {
        self.pending.replace(timer)
    }

    /// Called by the host when the auto-submit timer fires.
    pub fn submit_elapsed(&mut self) -> Vec<Effect<H>> {
        match self.pending.take() {
            Some(timer) => vec![Effect::ReleaseTimer(timer), Effect::Submit],
            None => Vec::new(),
        }
    }

    /// Explicit submit. A pending auto-submit would only repeat it.
    pub fn submit(&mut self) -> Vec<Effect<H>> {
        let mut effects = self.cancel_pending();
        effects.push(Effect::Submit);
        effects
    }

    /// Erasing is an edit of its own and is submitted right away.
    pub fn clear(&mut self) -> Vec<Effect<H>> {
        let mut effects = self.cancel_pending();
        effects.push(Effect::EraseSurface);
        effects.push(Effect::Submit);
        effects
    }

    fn cancel_pending(&mut self) -> Vec<Effect<H>> {
        let mut effects = Vec::with_capacity(3);
        if let Some(timer) = self.pending.take() {
            effects.push(Effect::CancelTimer(timer));
        }
        effects
    }
}
