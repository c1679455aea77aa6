//! Format implementations
//!
//! Front ends parse source text into the content tree; back ends serialize
//! the tree to markup. All of them register with
//! [`crate::registry::FormatRegistry`].

pub mod html;
pub mod latex;
pub mod tiptap;
