use std::fmt;
use std::ops::Deref;

use serde::Serialize;

use super::validate::is_slug;

/// A string known to be a slug.
///
/// Only the slugifier and [`Slug::parse`] build one, so every value
/// satisfies [`is_slug`].
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Wrap slugifier output.
    pub(crate) fn from_slugified(slug: String) -> Self {
        debug_assert!(is_slug(&slug));
        Slug(slug)
    }

    /// Accept `s` as-is if it already is a slug.
    pub fn parse(s: &str) -> Option<Self> {
        is_slug(s).then(|| Slug(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0.into_bytes()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for Slug {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<[u8]> for Slug {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

impl PartialEq<str> for Slug {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Slug {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
