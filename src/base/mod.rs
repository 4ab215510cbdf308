//! Foundation types for the resolver.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`FileId`] - Identity of a parsed source file
//! - [`TextRange`], [`TextSize`] - Source positions
//!
//! This module has NO dependencies on other qualident modules.

mod file_id;

pub use file_id::FileId;

// Re-export text-size types for convenience
pub use text_size;
pub use text_size::{TextRange, TextSize};
