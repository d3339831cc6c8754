//! Markdown fragment rendering.
//!
//! Stems and choices are small markdown fragments. They are rendered to
//! HTML here and later embedded as escaped text inside QTI `mattext`
//! elements:
//!
//! - [`escape`]: HTML escaping
//! - [`render`]: fenced code blocks, inline code and line breaks

mod escape;
mod render;

pub use escape::escape_html;
pub use render::render_fragment;
