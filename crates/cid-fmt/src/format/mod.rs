//! Directive-based formatting of identifiers.

pub mod render;
pub mod template;

pub use template::{Directive, Segment, Template, format_reference};
