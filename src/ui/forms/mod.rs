//! Form rendering

mod field_renderer;
mod quote_form;
mod sections_grid;

pub use quote_form::draw_quote_form;
