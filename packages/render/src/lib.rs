//! # Pageforge Render
//!
//! Static HTML rendering for a page's section list. This crate is pure
//! routing and formatting: it matches exhaustively over every section
//! variant, escapes user content, and never mutates anything. Adding a
//! section variant fails compilation here until it gets markup.

mod html;

pub use html::{render_page, render_section, RenderOptions};
