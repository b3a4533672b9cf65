//! attentive-export
//!
//! Screening reports as Markdown-ish text (via Tera templates) and DOCX.

pub mod docx;
pub mod error;
pub mod render;
pub mod styles;
