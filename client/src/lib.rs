mod app;
mod chrome;
mod dom;
mod input;
mod items;
mod render;
mod session;
mod submit;
mod surface;

pub use app::{init_choice_item, init_drawing_surface, init_text_item, run};
