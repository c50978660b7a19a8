#![allow(clippy::float_cmp)]

use super::*;

// --- Manual scheduler ---

/// Fake clock standing in for the browser timer queue.
struct Harness {
    session: DrawSession<u64>,
    rect: Rect,
    now: u64,
    next_id: u64,
    timers: Vec<(u64, u64)>,
    max_live_timers: usize,
    submissions: Vec<u64>,
    erased: usize,
    path: Vec<Effect<u64>>,
}

impl Harness {
    fn new() -> Self {
        Self {
            session: DrawSession::new(SurfaceSize::new(300.0, 150.0)),
            rect: Rect::new(0.0, 0.0, 300.0, 150.0),
            now: 0,
            next_id: 1,
            timers: Vec::new(),
            max_live_timers: 0,
            submissions: Vec::new(),
            erased: 0,
            path: Vec::new(),
        }
    }

    fn apply(&mut self, effects: Vec<Effect<u64>>) {
        for effect in effects {
            match effect {
                Effect::CancelTimer(id) => {
                    assert!(self.timers.iter().any(|(timer, _)| *timer == id));
                    self.timers.retain(|(timer, _)| *timer != id);
                }
                Effect::ReleaseTimer(_) => {}
                Effect::ScheduleSubmit { delay_ms } => {
                    let id = self.next_id;
                    self.next_id += 1;
                    self.timers.push((id, self.now + u64::from(delay_ms)));
                    self.max_live_timers = self.max_live_timers.max(self.timers.len());
                    assert_eq!(self.session.arm_submit(id), None);
                }
                Effect::EraseSurface => self.erased += 1,
                Effect::Submit => self.submissions.push(self.now),
                other => self.path.push(other),
            }
        }
    }

    fn advance(&mut self, ms: u64) {
        let target = self.now + ms;
        loop {
            self.timers.sort_by_key(|(_, deadline)| *deadline);
            match self.timers.first().copied() {
                Some((id, deadline)) if deadline <= target => {
                    self.timers.remove(0);
                    self.now = deadline;
                    let effects = self.session.submit_elapsed();
                    assert!(matches!(effects.first(), Some(Effect::ReleaseTimer(fired)) if *fired == id));
                    self.apply(effects);
                }
                _ => break,
            }
        }
        self.now = target;
    }

    fn down(&mut self, x: f64, y: f64) {
        let effects = self.session.stroke_start(Point::new(x, y), self.rect);
        self.apply(effects);
    }

    fn drag(&mut self, x: f64, y: f64) {
        let effects = self.session.stroke_extend(Point::new(x, y));
        self.apply(effects);
    }

    fn up(&mut self) {
        let effects = self.session.stroke_end();
        self.apply(effects);
    }

    fn stroke(&mut self, moves: usize) {
        self.down(10.0, 10.0);
        for step in 0..moves {
            self.drag(10.0 + step as f64, 20.0);
        }
        self.up();
    }
}

// --- Initial image ---

#[test]
fn sentinel_means_no_initial_image() {
    assert_eq!(initial_image(Some(NO_IMAGE_SENTINEL)), None);
}

#[test]
fn missing_or_blank_attribute_means_no_initial_image() {
    assert_eq!(initial_image(None), None);
    assert_eq!(initial_image(Some("  ")), None);
}

#[test]
fn data_uri_is_used_as_initial_image() {
    let uri = "data:image/png;base64,iVBORw0KGgo=";
    assert_eq!(initial_image(Some(uri)), Some(uri));
}

// --- Stroke rendering ---

#[test]
fn stroke_renders_begin_lines_and_close() {
    let mut h = Harness::new();
    h.down(10.0, 10.0);
    h.drag(20.0, 30.0);
    h.drag(25.0, 35.0);
    h.up();
    assert_eq!(
        h.path,
        vec![
            Effect::BeginPath(Point::new(10.0, 10.0)),
            Effect::LineTo(Point::new(20.0, 30.0)),
            Effect::LineTo(Point::new(25.0, 35.0)),
            Effect::ClosePath,
        ]
    );
}

#[test]
fn moves_without_a_stroke_draw_nothing() {
    let mut session: DrawSession<u64> = DrawSession::new(SurfaceSize::new(300.0, 150.0));
    assert!(session.stroke_extend(Point::new(5.0, 5.0)).is_empty());
}

#[test]
fn moves_use_rect_measured_at_stroke_start() {
    let mut session: DrawSession<u64> = DrawSession::new(SurfaceSize::new(300.0, 150.0));
    session.stroke_start(Point::new(300.0, 150.0), Rect::new(0.0, 0.0, 600.0, 300.0));
    let effects = session.stroke_extend(Point::new(600.0, 300.0));
    assert_eq!(effects, vec![Effect::LineTo(Point::new(300.0, 150.0))]);
}

#[test]
fn start_on_collapsed_canvas_is_ignored() {
    let mut session: DrawSession<u64> = DrawSession::new(SurfaceSize::new(300.0, 150.0));
    let effects = session.stroke_start(Point::new(1.0, 1.0), Rect::new(0.0, 0.0, 0.0, 0.0));
    assert!(effects.is_empty());
    assert!(!session.is_drawing());
}

// --- Debounce ---

#[test]
fn closed_stroke_schedules_exactly_one_timer() {
    let mut h = Harness::new();
    h.stroke(5);
    assert_eq!(h.timers.len(), 1);
    assert!(h.session.has_pending_submit());
    h.advance(999);
    assert!(h.submissions.is_empty());
    h.advance(1);
    assert_eq!(h.submissions, vec![1000]);
    assert!(!h.session.has_pending_submit());
}

#[test]
fn repeated_pointer_up_does_not_schedule_again() {
    let mut h = Harness::new();
    h.stroke(3);
    h.up();
    h.up();
    assert_eq!(h.timers.len(), 1);
    h.advance(5000);
    assert_eq!(h.submissions.len(), 1);
}

#[test]
fn pointer_up_without_stroke_schedules_nothing() {
    let mut h = Harness::new();
    h.up();
    h.advance(5000);
    assert!(h.timers.is_empty());
    assert!(h.submissions.is_empty());
}

#[test]
fn pointer_up_after_auto_submit_schedules_nothing() {
    let mut h = Harness::new();
    h.stroke(2);
    h.advance(1000);
    h.up();
    h.advance(5000);
    assert_eq!(h.submissions.len(), 1);
}

#[test]
fn new_stroke_cancels_pending_timer() {
    let mut h = Harness::new();
    h.stroke(2);
    h.advance(500);
    h.down(1.0, 1.0);
    assert!(h.timers.is_empty());
    h.advance(5000);
    assert!(h.submissions.is_empty(), "abandoned pause must not submit");
    h.up();
    h.advance(1000);
    assert_eq!(h.submissions, vec![6500]);
}

#[test]
fn rapid_strokes_keep_at_most_one_timer() {
    let mut h = Harness::new();
    h.stroke(4);
    h.advance(300);
    h.stroke(4);
    h.advance(900);
    h.stroke(4);
    assert!(h.submissions.is_empty());
    h.advance(1000);
    assert_eq!(h.max_live_timers, 1);
    assert_eq!(h.submissions.len(), 1);
}

#[test]
fn each_completed_pause_submits_once() {
    let mut h = Harness::new();
    h.stroke(1);
    h.advance(1500);
    h.stroke(1);
    h.advance(1500);
    assert_eq!(h.submissions, vec![1000, 2500]);
    assert_eq!(h.max_live_timers, 1);
}

#[test]
fn stale_timer_callback_submits_nothing() {
    let mut session: DrawSession<u64> = DrawSession::new(SurfaceSize::new(300.0, 150.0));
    assert!(session.submit_elapsed().is_empty());
}

#[test]
fn arm_returns_previous_handle() {
    let mut session: DrawSession<u64> = DrawSession::new(SurfaceSize::new(300.0, 150.0));
    assert_eq!(session.arm_submit(1), None);
    assert_eq!(session.arm_submit(2), Some(1));
}

// --- Clear and submit ---

#[test]
fn clear_erases_and_submits_once() {
    let mut h = Harness::new();
    let effects = h.session.clear();
    h.apply(effects);
    assert_eq!(h.erased, 1);
    assert_eq!(h.submissions.len(), 1);
}

#[test]
fn clear_after_drawing_submits_exactly_once() {
    let mut h = Harness::new();
    h.stroke(6);
    h.advance(200);
    let effects = h.session.clear();
    h.apply(effects);
    h.advance(5000);
    assert_eq!(h.submissions, vec![200]);
    assert_eq!(h.erased, 1);
}

#[test]
fn clear_orders_erase_before_submit() {
    let mut session: DrawSession<u64> = DrawSession::new(SurfaceSize::new(300.0, 150.0));
    assert_eq!(session.clear(), vec![Effect::EraseSurface, Effect::Submit]);
}

#[test]
fn explicit_submit_supersedes_pending_timer() {
    let mut h = Harness::new();
    h.stroke(2);
    let effects = h.session.submit();
    h.apply(effects);
    h.advance(5000);
    assert_eq!(h.submissions, vec![0]);
}

#[test]
fn submit_while_drawing_still_schedules_after_stroke() {
    let mut h = Harness::new();
    h.down(1.0, 1.0);
    let effects = h.session.submit();
    h.apply(effects);
    h.up();
    h.advance(1000);
    assert_eq!(h.submissions, vec![0, 1000]);
}
