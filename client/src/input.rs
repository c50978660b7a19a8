use web_sys::PointerEvent;

use questpad_shared::Point;

const PRIMARY_BUTTON: i16 = 0;

/// Pointer events cover mouse, pen and touch alike. Only the primary
/// pointer draws, so a second finger on the screen is ignored.
pub fn is_drawing_pointer(event: &PointerEvent) -> bool {
    event.is_primary()
}

pub fn starts_stroke(event: &PointerEvent) -> bool {
    is_drawing_pointer(event) && event.button() == PRIMARY_BUTTON
}

pub fn client_point(event: &PointerEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}
