use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlAnchorElement, HtmlCanvasElement, HtmlImageElement};

use questpad_shared::draw::{DOWNLOAD_FILE_NAME, PNG_MIME, STROKE_COLOR, STROKE_WIDTH};
use questpad_shared::Point;

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("Missing canvas context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

pub fn begin_stroke(ctx: &CanvasRenderingContext2d, point: Point) {
    ctx.begin_path();
    ctx.set_line_width(STROKE_WIDTH);
    ctx.set_stroke_style_str(STROKE_COLOR);
    ctx.set_line_join("round");
    ctx.set_line_cap("round");
    ctx.move_to(point.x, point.y);
}

/// Extends the open path and strokes it right away; nothing is batched.
pub fn draw_segment(ctx: &CanvasRenderingContext2d, to: Point) {
    ctx.line_to(to.x, to.y);
    ctx.stroke();
}

pub fn end_stroke(ctx: &CanvasRenderingContext2d) {
    ctx.close_path();
}

pub fn erase(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement) {
    ctx.clear_rect(0.0, 0.0, f64::from(canvas.width()), f64::from(canvas.height()));
}

pub fn png_data_url(canvas: &HtmlCanvasElement) -> Result<String, JsValue> {
    canvas.to_data_url_with_type(PNG_MIME)
}

/// Paints a stored drawing at the origin once the browser has decoded it.
pub fn draw_initial_image(ctx: &CanvasRenderingContext2d, src: &str) -> Result<(), JsValue> {
    let image = HtmlImageElement::new()?;
    let onload = {
        let ctx = ctx.clone();
        let image = image.clone();
        Closure::once_into_js(move || {
            if let Err(err) = ctx.draw_image_with_html_image_element(&image, 0.0, 0.0) {
                log::warn!("Initial image could not be drawn: {err:?}");
            }
        })
    };
    image.set_onload(Some(onload.unchecked_ref()));
    image.set_src(src);
    Ok(())
}

pub fn download_png(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let href = png_data_url(canvas)?;
    let document = canvas
        .owner_document()
        .ok_or_else(|| JsValue::from_str("Canvas is detached"))?;
    let anchor = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()?;
    anchor.set_download(DOWNLOAD_FILE_NAME);
    anchor.set_href(&href);
    anchor.click();
    Ok(())
}
