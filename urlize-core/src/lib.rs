//! Search engine friendly slugs.
//!
//! The core is a single pure transform, [`slugify_bytes`], plus thin typed
//! wrappers around it. Host bindings (database extensions, interpreter
//! modules, the `urlize` CLI) borrow their input buffer to the core and get
//! back either an owned buffer or a [`SlugError::AllocationFailure`].

pub mod error;
pub mod host;
pub mod slug;

pub use error::SlugError;
pub use slug::{is_slug, slugify, slugify_bytes, slugify_raw, slugify_str, Slug};
