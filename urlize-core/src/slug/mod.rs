pub mod naming;
pub mod validate;
pub mod value;

pub use naming::{slugify, slugify_bytes, slugify_raw, slugify_str};
pub use validate::is_slug;
pub use value::Slug;

pub(crate) use naming::{push_slug, reserve};
