//! The drawing widget: a canvas plus its clear/submit/save buttons and the
//! confirmation banner.
//!
//! Each surface owns a [`DrawingSurface`] behind `Rc<RefCell<..>>`, so any
//! number of surfaces can live on one page. Browser events are translated
//! into calls on the shared [`DrawSession`] and the returned effects are
//! carried out here, in order.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Document, Event, HtmlCanvasElement, HtmlElement, HtmlInputElement,
    PointerEvent,
};

use questpad_shared::draw::{BANNER_CLOSED_HEIGHT, BANNER_FLASH_MS, BANNER_OPEN_HEIGHT};
use questpad_shared::{initial_image, DrawSession, Effect, SubmitRequest, SurfaceIds, SurfaceSize};

use crate::dom::{client_rect, form_action, get_element, set_style};
use crate::input::{client_point, is_drawing_pointer, starts_stroke};
use crate::render;
use crate::submit::dispatch;

const INITIAL_IMAGE_ATTRIBUTE: &str = "data-initialimage";

/// Every element a drawing item needs, resolved once at construction.
pub struct SurfaceElements {
    pub canvas: HtmlCanvasElement,
    pub banner: HtmlElement,
    pub clear: HtmlElement,
    pub submit: HtmlElement,
    pub save: HtmlElement,
    pub image: HtmlInputElement,
}

impl SurfaceElements {
    pub fn resolve(document: &Document, ids: &SurfaceIds) -> Result<Self, JsValue> {
        Ok(Self {
            canvas: get_element(document, &ids.canvas)?,
            banner: get_element(document, &ids.banner)?,
            clear: get_element(document, &ids.clear)?,
            submit: get_element(document, &ids.submit)?,
            save: get_element(document, &ids.save)?,
            image: get_element(document, &ids.image)?,
        })
    }
}

pub struct DrawingSurface {
    name: String,
    elements: SurfaceElements,
    ctx: CanvasRenderingContext2d,
    endpoint: String,
    session: DrawSession<Timeout>,
    banner_timer: Option<Timeout>,
}

type SurfaceHandle = Rc<RefCell<DrawingSurface>>;

impl DrawingSurface {
    pub fn new(document: &Document, item_name: &str) -> Result<Self, JsValue> {
        let ids = SurfaceIds::for_item(item_name);
        let elements = SurfaceElements::resolve(document, &ids)?;
        let ctx = render::context_2d(&elements.canvas)?;
        let endpoint = form_action(&ids.image, elements.image.form())?;
        let size = SurfaceSize::new(
            f64::from(elements.canvas.width()),
            f64::from(elements.canvas.height()),
        );
        Ok(Self {
            name: item_name.to_string(),
            elements,
            ctx,
            endpoint,
            session: DrawSession::new(size),
            banner_timer: None,
        })
    }

    fn prepopulate(&self) -> Result<(), JsValue> {
        let attribute = self.elements.canvas.get_attribute(INITIAL_IMAGE_ATTRIBUTE);
        if let Some(src) = initial_image(attribute.as_deref()) {
            log::debug!("Prepopulating {}", self.name);
            render::draw_initial_image(&self.ctx, src)?;
        }
        Ok(())
    }

    fn submit_now(&mut self) {
        let data_url = match render::png_data_url(&self.elements.canvas) {
            Ok(data_url) => data_url,
            Err(err) => {
                log::error!("Could not serialize {}: {err:?}", self.name);
                return;
            }
        };
        dispatch(self.endpoint.clone(), SubmitRequest::image(data_url));
        self.flash_banner();
    }

    /// A submission while the banner is open keeps it open for another full flash.
    fn flash_banner(&mut self) {
        set_style(&self.elements.banner, "height", BANNER_OPEN_HEIGHT);
        let banner = self.elements.banner.clone();
        self.banner_timer = Some(Timeout::new(BANNER_FLASH_MS, move || {
            set_style(&banner, "height", BANNER_CLOSED_HEIGHT);
        }));
    }
}

fn apply(handle: &SurfaceHandle, effects: Vec<Effect<Timeout>>) {
    if effects.is_empty() {
        return;
    }
    let mut surface = handle.borrow_mut();
    for effect in effects {
        match effect {
            Effect::CancelTimer(timer) => drop(timer),
            // This timer's callback is still on the stack; wasm-bindgen defers
            // freeing it until the callback returns.
            Effect::ReleaseTimer(timer) => drop(timer),
            Effect::BeginPath(point) => render::begin_stroke(&surface.ctx, point),
            Effect::LineTo(point) => render::draw_segment(&surface.ctx, point),
            Effect::ClosePath => render::end_stroke(&surface.ctx),
            Effect::ScheduleSubmit { delay_ms } => {
                let weak = Rc::downgrade(handle);
                let timer = Timeout::new(delay_ms, move || {
                    let Some(handle) = weak.upgrade() else {
                        return;
                    };
                    let effects = handle.borrow_mut().session.submit_elapsed();
                    apply(&handle, effects);
                });
                if let Some(previous) = surface.session.arm_submit(timer) {
                    drop(previous);
                }
            }
            Effect::EraseSurface => render::erase(&surface.ctx, &surface.elements.canvas),
            Effect::Submit => surface.submit_now(),
        }
    }
}

fn on_pointer(
    target: &web_sys::EventTarget,
    kind: &str,
    handle: &SurfaceHandle,
    handler: fn(&SurfaceHandle, &PointerEvent),
) -> Result<(), JsValue> {
    let handle = handle.clone();
    let callback = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
        handler(&handle, &event);
    });
    target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

fn on_click(
    target: &HtmlElement,
    handle: &SurfaceHandle,
    handler: fn(&SurfaceHandle),
) -> Result<(), JsValue> {
    let handle = handle.clone();
    let callback = Closure::<dyn FnMut(Event)>::new(move |_| handler(&handle));
    target.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

fn pointer_down(handle: &SurfaceHandle, event: &PointerEvent) {
    if !starts_stroke(event) {
        return;
    }
    let effects = {
        let mut surface = handle.borrow_mut();
        let canvas = surface.elements.canvas.clone();
        let _ = canvas.set_pointer_capture(event.pointer_id());
        surface
            .session
            .stroke_start(client_point(event), client_rect(&canvas))
    };
    apply(handle, effects);
}

fn pointer_move(handle: &SurfaceHandle, event: &PointerEvent) {
    event.prevent_default();
    event.stop_propagation();
    if !is_drawing_pointer(event) {
        return;
    }
    let effects = handle
        .borrow_mut()
        .session
        .stroke_extend(client_point(event));
    apply(handle, effects);
}

fn pointer_end(handle: &SurfaceHandle, event: &PointerEvent) {
    if !is_drawing_pointer(event) {
        return;
    }
    stroke_end(handle);
}

fn stroke_end(handle: &SurfaceHandle) {
    let effects = handle.borrow_mut().session.stroke_end();
    apply(handle, effects);
}

fn clear(handle: &SurfaceHandle) {
    let effects = handle.borrow_mut().session.clear();
    apply(handle, effects);
}

fn submit(handle: &SurfaceHandle) {
    let effects = handle.borrow_mut().session.submit();
    apply(handle, effects);
}

fn save(handle: &SurfaceHandle) {
    let surface = handle.borrow();
    if let Err(err) = render::download_png(&surface.elements.canvas) {
        log::error!("Could not export {}: {err:?}", surface.name);
    }
}

/// Wires one drawing item. Fails with the id of the first missing element.
pub fn attach(document: &Document, item_name: &str) -> Result<(), JsValue> {
    let surface = DrawingSurface::new(document, item_name)?;
    surface.prepopulate()?;
    set_style(&surface.elements.canvas, "touch-action", "none");

    let canvas = surface.elements.canvas.clone();
    let clear_button = surface.elements.clear.clone();
    let submit_button = surface.elements.submit.clone();
    let save_button = surface.elements.save.clone();
    let handle = Rc::new(RefCell::new(surface));

    on_pointer(&canvas, "pointerdown", &handle, pointer_down)?;
    on_pointer(&canvas, "pointermove", &handle, pointer_move)?;
    on_pointer(&canvas, "pointerup", &handle, pointer_end)?;
    on_pointer(&canvas, "pointercancel", &handle, pointer_end)?;
    // A release outside the canvas still finishes the stroke.
    on_pointer(document, "pointerup", &handle, pointer_end)?;

    {
        let handle = handle.clone();
        let oncontextmenu = Closure::<dyn FnMut(Event)>::new(move |_| stroke_end(&handle));
        canvas
            .add_event_listener_with_callback("contextmenu", oncontextmenu.as_ref().unchecked_ref())?;
        oncontextmenu.forget();
    }

    on_click(&clear_button, &handle, clear)?;
    on_click(&submit_button, &handle, submit)?;
    on_click(&save_button, &handle, save)?;

    log::debug!("Drawing surface {item_name} ready");
    Ok(())
}
